//! Component-scoped repeating timers.
//!
//! Slideshows, the journey sequence and the stat counters all tick on a
//! fixed period while their component is mounted. The loop runs on the
//! local executor and checks a liveness flag that the owner's cleanup
//! clears, so a tick never fires into a disposed component.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

/// Call `tick` every `period_ms` until it returns `false` or the current
/// reactive owner is cleaned up.
///
/// Outside the browser nothing is scheduled.
pub fn use_interval(period_ms: u32, tick: impl FnMut() -> bool + 'static) {
    let alive = Arc::new(AtomicBool::new(true));

    #[cfg(feature = "hydrate")]
    {
        let mut tick = tick;
        let alive_task = Arc::clone(&alive);
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(period_ms))).await;
                if !alive_task.load(Ordering::Relaxed) || !tick() {
                    break;
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (period_ms, tick);
    }

    on_cleanup(move || alive.store(false, Ordering::Relaxed));
}
