//! Load Gate
//!
//! Keeps at most one list fetch in flight. Reloads requested meanwhile
//! collapse into a single rerun that starts when the current fetch finishes.

use std::future::Future;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadGate {
    in_flight: bool,
    rerun: bool,
}

impl LoadGate {
    /// `true` if the caller should start a fetch now; otherwise a rerun is queued
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            self.rerun = true;
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Called when a fetch completes. `true` means fetch again immediately;
    /// the gate stays held for that pass.
    pub fn finish(&mut self) -> bool {
        if self.rerun {
            self.rerun = false;
            return true;
        }
        self.in_flight = false;
        false
    }
}

/// A gate reachable from async code
pub trait SharedGate {
    fn begin(&self) -> bool;
    fn finish(&self) -> bool;
}

/// Run `load` once, then once more for each rerun queued while it ran.
///
/// The caller must already hold the gate (`begin` returned `true`).
pub async fn run_loads<G, F, Fut>(gate: &G, mut load: F)
where
    G: SharedGate + ?Sized,
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    loop {
        load().await;
        if !gate.finish() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct CellGate(RefCell<LoadGate>);

    impl SharedGate for CellGate {
        fn begin(&self) -> bool {
            self.0.borrow_mut().try_begin()
        }

        fn finish(&self) -> bool {
            self.0.borrow_mut().finish()
        }
    }

    #[test]
    fn test_single_load() {
        let mut gate = LoadGate::default();
        assert!(gate.try_begin());
        assert!(!gate.finish());
        assert!(gate.try_begin());
    }

    #[test]
    fn test_requests_during_flight_coalesce_into_one_rerun() {
        let mut gate = LoadGate::default();
        assert!(gate.try_begin());
        assert!(!gate.try_begin());
        assert!(!gate.try_begin());

        // the rerun holds the gate, so a new request queues again
        assert!(gate.finish());
        assert!(!gate.try_begin());
        assert!(gate.finish());
        assert!(!gate.finish());
        assert!(gate.try_begin());
    }

    #[test]
    fn test_run_loads_without_requests_fetches_once() {
        let gate = CellGate::default();
        assert!(gate.begin());

        let passes = Cell::new(0);
        block_on(run_loads(&gate, || {
            passes.set(passes.get() + 1);
            std::future::ready(())
        }));

        assert_eq!(passes.get(), 1);
        assert!(gate.begin());
    }

    #[test]
    fn test_reload_during_fetch_renders_fresh_list_last() {
        let gate = CellGate::default();
        assert!(gate.begin());

        // the first response predates a mutation made while it was in flight
        let mut responses = vec!["after mutation", "before mutation"];
        let rendered = RefCell::new(Vec::new());
        block_on(run_loads(&gate, || {
            let response = responses.pop().unwrap();
            if response == "before mutation" {
                // two reloads requested mid-fetch
                assert!(!gate.begin());
                assert!(!gate.begin());
            }
            rendered.borrow_mut().push(response);
            std::future::ready(())
        }));

        assert_eq!(*rendered.borrow(), vec!["before mutation", "after mutation"]);
        assert!(responses.is_empty());
        assert!(gate.begin());
    }
}
