//! Message Bar Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::store_message;

/// Transient status line, green for success and red for errors
#[component]
pub fn MessageBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let message = move || store_message(&ctx.store);

    view! {
        <div
            id="message"
            class="message"
            style:color=move || message().map(|m| m.kind.color()).unwrap_or_default()
        >
            {move || message().map(|m| m.text).unwrap_or_default()}
        </div>
    }
}
