//! Application Context
//!
//! Shared state and actions provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::config::{ClientConfig, Strings};
use crate::load_gate::{run_loads, LoadGate, SharedGate};
use crate::logging;
use crate::message::MessageKind;
use crate::models::{IdeaKey, ListPane};
use crate::store::{store_expire_message, store_set_list_pane, store_show_message, BoardStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: BoardStore,
    config: StoredValue<ClientConfig>,
    load_gate: StoredValue<LoadGate>,
}

impl AppContext {
    pub fn new(store: BoardStore, config: ClientConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
            load_gate: StoredValue::new(LoadGate::default()),
        }
    }

    pub fn strings(&self) -> &'static Strings {
        self.config.with_value(|config| config.strings())
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    /// Fetch the list and replace the rendered rows.
    ///
    /// Never fails: errors become the failed placeholder. A call made while a
    /// fetch is in flight queues one more pass instead of racing it.
    pub fn reload(&self) {
        if !self.load_gate.begin() {
            log::debug!("list load in flight, rerun queued");
            return;
        }

        let ctx = *self;
        let url = self.config.with_value(|config| config.ideas_url.clone());
        let load_once = move || {
            let url = url.clone();
            async move {
                let result = commands::list_ideas(&url).await;
                match &result {
                    Ok(ideas) => log::info!("loaded {} ideas", ideas.len()),
                    Err(e) => {
                        log::warn!("failed to load ideas: {}", e);
                        logging::dump_recent("idea client log before load failure");
                    }
                }
                store_set_list_pane(&ctx.store, ListPane::from_load(result));
            }
        };
        spawn_local(async move { run_loads(&ctx.load_gate, load_once).await });
    }

    /// Show a status line that clears itself after the configured interval
    pub fn show_message(&self, text: &str, kind: MessageKind) {
        let ticket = store_show_message(&self.store, text, kind);
        let store = self.store;
        let timeout_ms = self.config.with_value(|config| config.message_timeout_ms);
        Timeout::new(timeout_ms, move || store_expire_message(&store, ticket)).forget();
    }

    /// Best-effort done mutation followed by a reload whatever the outcome
    pub fn mark_done(&self, key: IdeaKey) {
        let ctx = *self;
        let url = self.config.with_value(|config| config.done_url.clone());
        spawn_local(async move {
            match commands::mark_done(&url, key).await {
                Ok(status) if (200..300).contains(&status) => log::info!("marked {:?} done", key),
                Ok(status) => log::warn!("done request for {:?} answered {}", key, status),
                Err(e) => log::warn!("done request for {:?} failed: {}", key, e),
            }
            ctx.reload();
        });
    }
}

impl SharedGate for StoredValue<LoadGate> {
    fn begin(&self) -> bool {
        self.try_update_value(|gate| gate.try_begin()).unwrap_or(false)
    }

    fn finish(&self) -> bool {
        self.try_update_value(|gate| gate.finish()).unwrap_or(false)
    }
}
