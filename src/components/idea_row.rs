//! Idea Row Component
//!
//! One idea with its inline mark-done form.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::IdeaRowData;

/// Single list entry
///
/// The hidden field carries the idea's key; the submit button is disabled
/// once the idea is done.
#[component]
pub fn IdeaRow(row: IdeaRowData) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let strings = ctx.strings();

    let key = row.key;
    let (field, value) = key.form_field();
    let submit_done = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.mark_done(key);
    };

    view! {
        <li class:done=row.done>
            {row.label.clone()}
            <form class="inline" on:submit=submit_done>
                <input type="hidden" name=field value=value />
                <input type="submit" value=strings.mark_done disabled=!row.can_mark_done() />
            </form>
        </li>
    }
}
