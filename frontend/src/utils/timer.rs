//! Browser timers. On the host nothing is scheduled.

#[cfg(target_arch = "wasm32")]
pub use gloo_timers::callback::Interval;

#[cfg(not(target_arch = "wasm32"))]
pub struct Interval;

/// Calls `f` every `millis` until the returned handle is dropped.
#[cfg(target_arch = "wasm32")]
pub fn every(millis: u32, f: impl FnMut() + 'static) -> Option<Interval> {
    Some(Interval::new(millis, f))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn every(_millis: u32, _f: impl FnMut() + 'static) -> Option<Interval> {
    None
}

/// Runs `f` once after `millis`.
#[cfg(target_arch = "wasm32")]
pub fn after(millis: u32, f: impl FnOnce() + 'static) {
    gloo_timers::callback::Timeout::new(millis, f).forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn after(millis: u32, _f: impl FnOnce() + 'static) {
    log::debug!("timer of {} ms skipped outside the browser", millis);
}
