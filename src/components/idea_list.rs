//! Idea List Component
//!
//! Rebuilds every row from the latest load.

use leptos::prelude::*;

use crate::components::IdeaRow;
use crate::context::AppContext;
use crate::models::Row;
use crate::store::store_list_pane;

#[component]
pub fn IdeaList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let strings = ctx.strings();

    view! {
        <ul id="idea-list" class="idea-list">
            {move || {
                store_list_pane(&ctx.store)
                    .rows(strings)
                    .into_iter()
                    .map(|row| match row {
                        Row::Placeholder(text) => view! { <li class="placeholder">{text}</li> }.into_any(),
                        Row::Entry(data) => view! { <IdeaRow row=data /> }.into_any(),
                    })
                    .collect_view()
            }}
        </ul>
    }
}
