use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use gloo_timers::future::sleep;
use yew::platform::spawn_local;
use yew::prelude::*;

/// A fake network round trip owned by a component.
///
/// `run` raises the loading flag, waits, then lowers it and calls the
/// completion. If the component unmounts while waiting, the completion is
/// dropped and no state is touched.
#[derive(Clone)]
pub struct SimulatedRequest {
    loading: UseStateHandle<bool>,
    alive: Rc<AtomicBool>,
}

impl SimulatedRequest {
    pub fn is_loading(&self) -> bool {
        *self.loading
    }

    pub fn run(
        &self,
        name: &'static str,
        delay: Duration,
        on_complete: impl FnOnce() + 'static,
    ) {
        let loading = self.loading.clone();
        let alive = self.alive.clone();

        loading.set(true);
        tracing::debug!(name, delay_ms = delay.as_millis() as u64, "simulated request started");

        spawn_local(async move {
            sleep(delay).await;

            if !alive.load(Ordering::Relaxed) {
                tracing::debug!(name, "owner unmounted, dropping simulated response");
                return;
            }

            loading.set(false);
            on_complete();
            tracing::debug!(name, "simulated request finished");
        });
    }
}

#[hook]
pub fn use_simulated_request() -> SimulatedRequest {
    let loading = use_state(|| false);
    let alive = use_memo((), |_| AtomicBool::new(true));

    {
        let alive = alive.clone();
        use_effect_with((), move |_| {
            alive.store(true, Ordering::Relaxed);
            // Cleanup: the owner is gone, pending completions must not run
            move || alive.store(false, Ordering::Relaxed)
        });
    }

    SimulatedRequest { loading, alive }
}
