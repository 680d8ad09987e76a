//! Trailing-edge debounce.
//!
//! Every touch starts a new generation. A timer armed for an older generation
//! finds itself stale when it wakes up and does nothing, so only the timer of
//! the last touch in a burst fires, `delay_ms` after that touch.

use gloo_timers::future::TimeoutFuture;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    delay_ms: u32,
    generation: u64,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: 0,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Registers activity and returns the generation the new timer belongs to.
    pub fn touch(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// True if no touch or cancel happened after `generation` was issued.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Invalidates any armed timer.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }
}

/// Runs `on_elapsed` once `delay_ms` has passed. Staleness is checked by the
/// callback against its [`Debouncer`].
pub fn after_delay(delay_ms: u32, on_elapsed: impl FnOnce() + 'static) {
    leptos::task::spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        on_elapsed();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_touch_wins() {
        let mut debouncer = Debouncer::new(300);
        let first = debouncer.touch();
        let second = debouncer.touch();
        let third = debouncer.touch();

        assert!(!debouncer.is_current(first));
        assert!(!debouncer.is_current(second));
        assert!(debouncer.is_current(third));
    }

    #[test]
    fn test_cancel_invalidates_pending() {
        let mut debouncer = Debouncer::new(500);
        let generation = debouncer.touch();
        debouncer.cancel();
        assert!(!debouncer.is_current(generation));

        let next = debouncer.touch();
        assert!(debouncer.is_current(next));
        assert_eq!(debouncer.delay_ms(), 500);
    }

    #[test]
    fn test_nothing_current_before_first_touch() {
        let debouncer = Debouncer::new(300);
        assert!(!debouncer.is_current(1));
    }
}
