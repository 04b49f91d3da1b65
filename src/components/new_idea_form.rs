//! New Idea Form Component
//!
//! Idea text plus date, posted form-encoded to the add endpoint.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::dates::today_local;
use crate::form::{AddOutcome, NewIdea};

#[component]
pub fn NewIdeaForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let strings = ctx.strings();

    let (idea_text, set_idea_text) = signal(String::new());
    let (date, set_date) = signal(today_local());

    let apply_outcome = move |outcome: AddOutcome| {
        ctx.show_message(outcome.message, outcome.kind);
        if outcome.reset_fields {
            set_idea_text.set(String::new());
        }
        if outcome.reset_date {
            set_date.set(today_local());
        }
        if outcome.reload {
            ctx.reload();
        }
    };

    let submit_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(new_idea) = NewIdea::from_input(&idea_text.get(), &date.get()) else {
            apply_outcome(AddOutcome::rejected(strings));
            return;
        };

        let url = ctx.config().add_url;
        spawn_local(async move {
            let result = commands::add_idea(&url, &new_idea).await;
            if let Err(e) = &result {
                log::warn!("failed to add idea: {}", e);
            }
            apply_outcome(AddOutcome::from_result(&result, strings));
        });
    };

    view! {
        <form id="add-form" class="new-idea-form" on:submit=submit_add>
            <input
                type="text"
                id="idea"
                name="idea"
                placeholder=strings.idea_placeholder
                prop:value=move || idea_text.get()
                on:input=move |ev| set_idea_text.set(event_target_value(&ev))
            />
            <label for="date">{strings.date_label}</label>
            <input
                type="date"
                id="date"
                name="date"
                prop:value=move || date.get()
                on:input=move |ev| set_date.set(event_target_value(&ev))
            />
            <button type="submit">{strings.add_button}</button>
        </form>
    }
}
