//! One-shot timers for the flip-back delay.
//!
//! The controller never blocks: it arms a timer through a [`Scheduler`] and
//! later asks whether that timer has elapsed.

use alloc::vec::Vec;
use core::time::Duration;

/// Identifies a timer armed by a [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// A source of one-shot timers.
pub trait Scheduler {
    /// Arms a timer that elapses after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerHandle;

    /// Disarms a timer. Unknown or elapsed handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);

    /// Returns whether the timer has elapsed. Cancelled timers never elapse.
    fn is_due(&self, handle: TimerHandle) -> bool;
}

/// A scheduler driven by an explicit virtual clock.
///
/// Time only moves when [`advance`](Self::advance) or
/// [`set_now`](Self::set_now) is called, which makes it suitable for tests and
/// for hosts that feed in their own clock (such as a browser frame loop).
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    timers: Vec<(TimerHandle, Duration)>,
}

impl ManualScheduler {
    /// Creates a scheduler with its clock at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            timers: Vec::new(),
        }
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&mut self, by: Duration) {
        self.now = self.now.saturating_add(by);
    }

    /// Sets the clock. Time never moves backwards; earlier values are ignored.
    pub fn set_now(&mut self, now: Duration) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Returns the current clock value.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Returns the number of armed timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timers.len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.timers.push((handle, self.now.saturating_add(delay)));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|&(id, _)| id != handle);
    }

    fn is_due(&self, handle: TimerHandle) -> bool {
        self.timers
            .iter()
            .any(|&(id, deadline)| id == handle && deadline <= self.now)
    }
}

/// A scheduler backed by the system's monotonic clock.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Default)]
pub struct SystemScheduler {
    next_id: u64,
    /// `None` deadlines lie past the clock's range and never elapse.
    timers: Vec<(TimerHandle, Option<std::time::Instant>)>,
}

#[cfg(feature = "std")]
impl SystemScheduler {
    /// Creates a scheduler with no armed timers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            timers: Vec::new(),
        }
    }
}

#[cfg(feature = "std")]
impl Scheduler for SystemScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.timers.push((handle, std::time::Instant::now().checked_add(delay)));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|&(id, _)| id != handle);
    }

    fn is_due(&self, handle: TimerHandle) -> bool {
        let now = std::time::Instant::now();
        self.timers
            .iter()
            .any(|&(id, deadline)| id == handle && deadline.is_some_and(|at| at <= now))
    }
}
