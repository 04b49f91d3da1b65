//! Idea List App
//!
//! Add form, status line and the idea list, sharing one store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{IdeaList, MessageBar, NewIdeaForm};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::store::BoardState;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let strings = config.strings();
    let store = Store::new(BoardState::default());
    let ctx = AppContext::new(store, config);

    // Provide context to all children
    provide_context(ctx);

    // Initial load; later loads only follow user actions
    Effect::new(move |_| ctx.reload());

    view! {
        <main class="idea-board">
            <h1>{strings.title}</h1>
            <NewIdeaForm />
            <MessageBar />
            <IdeaList />
        </main>
    }
}
