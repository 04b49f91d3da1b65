//! Idea Commands

use wasm_bindgen_futures::JsFuture;

use super::{fetch, post_form};
use crate::error::ClientError;
use crate::form::{done_form, NewIdea};
use crate::models::{Idea, IdeaKey};

/// `GET` the full idea list
pub async fn list_ideas(url: &str) -> Result<Vec<Idea>, ClientError> {
    let response = fetch("GET", url, None).await?;
    if !response.ok() {
        return Err(ClientError::Status(response.status()));
    }
    let body = JsFuture::from(response.json()?).await?;
    Ok(serde_wasm_bindgen::from_value(body)?)
}

/// `POST` a new idea; any non-2xx status is a failure
pub async fn add_idea(url: &str, idea: &NewIdea) -> Result<(), ClientError> {
    let response = post_form(url, &idea.to_form()).await?;
    if !response.ok() {
        return Err(ClientError::Status(response.status()));
    }
    Ok(())
}

/// `POST` the done mutation. The status is handed back for logging only.
pub async fn mark_done(url: &str, key: IdeaKey) -> Result<u16, ClientError> {
    let response = post_form(url, &done_form(key)).await?;
    Ok(response.status())
}
