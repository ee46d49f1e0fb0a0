//! Wall-clock source for timestamp-derived identifiers.
//!
//! In the browser the time comes from `Date.now()`; `std::time::SystemTime`
//! is not usable on `wasm32-unknown-unknown`.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Source of the current wall-clock time in milliseconds since the Unix epoch.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn now_millis(&self) -> u64 {
        #[cfg(feature = "hydrate")]
        {
            js_sys::Date::now() as u64
        }
        #[cfg(not(feature = "hydrate"))]
        {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0, |d| d.as_millis() as u64)
        }
    }
}
