//! Fixed-interval tick timer for the event loop.

use std::time::{Duration, Instant};

/// How long the event loop may block while nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Most ticks delivered at once after the loop fell behind.
const MAX_CATCH_UP: u32 = 5;

/// Repeating timer that is only armed while a node is moving.
///
/// The event loop asks [`Animator::poll_timeout`] how long it may wait for
/// input, then collects due ticks with [`Animator::take_ticks`].
#[derive(Debug, Clone)]
pub struct Animator {
    animated: bool,
    interval: Duration,
    next_tick: Option<Instant>,
}

impl Animator {
    /// Create a stopped animator ticking every `interval` once started.
    pub fn new(interval: Duration) -> Self {
        Self {
            animated: false,
            interval: interval.max(Duration::from_millis(1)),
            next_tick: None,
        }
    }

    /// Is the timer armed?
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Arm the timer; the first tick falls one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        if !self.animated {
            self.animated = true;
            self.next_tick = Some(now + self.interval);
        }
    }

    /// Disarm the timer.
    pub fn stop(&mut self) {
        if self.animated {
            self.animated = false;
            self.next_tick = None;
        }
    }

    /// Time until the next tick is due, or the idle poll when stopped.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.next_tick {
            Some(next) if self.animated => next.saturating_duration_since(now),
            _ => IDLE_POLL,
        }
    }

    /// Number of ticks that have fallen due by `now`.
    ///
    /// Reschedules the next tick. If the loop fell far behind only
    /// `MAX_CATCH_UP` ticks are returned and the schedule restarts from `now`.
    pub fn take_ticks(&mut self, now: Instant) -> u32 {
        let Some(next) = self.next_tick.filter(|_| self.animated) else {
            return 0;
        };
        if now < next {
            return 0;
        }

        let behind = now.duration_since(next).as_micros();
        let step = self.interval.as_micros().max(1);
        let due = u32::try_from(behind / step + 1).unwrap_or(u32::MAX);

        if due > MAX_CATCH_UP {
            self.next_tick = Some(now + self.interval);
            MAX_CATCH_UP
        } else {
            self.next_tick = Some(next + self.interval * due);
            due
        }
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(Duration::from_millis(20))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(20);

    #[test]
    fn test_stopped_animator_never_ticks() {
        let mut animator = Animator::new(TICK);
        let now = Instant::now();
        assert_eq!(animator.take_ticks(now + TICK * 10), 0);
        assert_eq!(animator.poll_timeout(now), IDLE_POLL);
    }

    #[test]
    fn test_ticks_fall_due_each_interval() {
        let mut animator = Animator::new(TICK);
        let start = Instant::now();
        animator.start(start);
        assert!(animator.is_animated());
        assert_eq!(animator.poll_timeout(start), TICK);

        assert_eq!(animator.take_ticks(start + Duration::from_millis(10)), 0);
        assert_eq!(animator.take_ticks(start + TICK), 1);
        assert_eq!(animator.take_ticks(start + TICK), 0);
        assert_eq!(animator.take_ticks(start + TICK * 3), 2);
        assert_eq!(animator.poll_timeout(start + TICK * 3), TICK);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut animator = Animator::new(TICK);
        let start = Instant::now();
        animator.start(start);
        let late = start + TICK * 50;
        assert_eq!(animator.take_ticks(late), MAX_CATCH_UP);
        assert_eq!(animator.poll_timeout(late), TICK);
    }

    #[test]
    fn test_start_is_idempotent_and_stop_disarms() {
        let mut animator = Animator::new(TICK);
        let start = Instant::now();
        animator.start(start);
        animator.start(start + TICK * 5);
        assert_eq!(animator.take_ticks(start + TICK), 1);

        animator.stop();
        assert!(!animator.is_animated());
        assert_eq!(animator.take_ticks(start + TICK * 10), 0);
    }
}
