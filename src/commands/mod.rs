//! HTTP Command Wrappers
//!
//! Frontend bindings to the idea server, issued through the browser's `fetch`.

mod ideas;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::error::ClientError;
use crate::form::{FormBody, FORM_CONTENT_TYPE};

// Re-export all public items
pub use ideas::*;

async fn fetch(method: &str, url: &str, form: Option<&FormBody>) -> Result<Response, ClientError> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method(method);
    if let Some(form) = form {
        let headers = Headers::new()?;
        headers.set("Content-Type", FORM_CONTENT_TYPE)?;
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&form.encode()));
    }

    let request = Request::new_with_str_and_init(url, &init)?;
    let response = JsFuture::from(window.fetch_with_request(&request)).await?;
    Ok(response.dyn_into::<Response>()?)
}

async fn post_form(url: &str, form: &FormBody) -> Result<Response, ClientError> {
    fetch("POST", url, Some(form)).await
}
