//! Deadline-based timers owned by the interaction controller.
//!
//! Neither timer schedules anything on its own. The owner polls them with the
//! current [`Timestamp`] and the host arranges a wakeup at the earliest
//! deadline. That keeps every callback inside the owner, so dropping or
//! tearing down the owner is enough to guarantee nothing fires later.

use std::time::Duration;

use crate::clock::Timestamp;

/// Handle for one arming of a [`TimeoutSlot`].
///
/// A token stays current until its slot is re-armed, cancelled or fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Armed {
    token: TimerToken,
    deadline: Timestamp,
}

/// Single-slot one-shot timer. Arming replaces whatever was pending.
#[derive(Debug, Clone, Default)]
pub struct TimeoutSlot {
    generation: u64,
    armed: Option<Armed>,
}

impl TimeoutSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the slot to fire `delay` after `now`, superseding any pending
    /// arming.
    pub fn arm(&mut self, now: Timestamp, delay: Duration) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        let token = TimerToken(self.generation);
        self.armed = Some(Armed {
            token,
            deadline: now + delay,
        });
        token
    }

    /// Disarms the slot, returning the token that was pending.
    pub fn cancel(&mut self) -> Option<TimerToken> {
        self.armed.take().map(|armed| armed.token)
    }

    pub fn is_pending(&self) -> bool {
        self.armed.is_some()
    }

    pub fn is_current(&self, token: TimerToken) -> bool {
        self.armed.is_some_and(|armed| armed.token == token)
    }

    pub fn deadline(&self) -> Option<Timestamp> {
        self.armed.map(|armed| armed.deadline)
    }

    /// Fires the slot if its deadline has passed. A fired slot is disarmed.
    pub fn poll(&mut self, now: Timestamp) -> Option<TimerToken> {
        match self.armed {
            Some(armed) if armed.deadline <= now => {
                self.armed = None;
                Some(armed.token)
            }
            _ => None,
        }
    }
}

/// Repeating timer with a fixed period.
///
/// An overdue poll fires once and realigns to the next boundary of the
/// original cadence; missed periods are dropped rather than replayed.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    next_due: Option<Timestamp>,
}

impl IntervalTimer {
    /// Creates a stopped timer. Periods shorter than 1 ms are raised to 1 ms.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// (Re)starts the cadence so the first fire happens one period after `now`.
    pub fn start(&mut self, now: Timestamp) {
        self.next_due = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_due(&self) -> Option<Timestamp> {
        self.next_due
    }

    /// Returns `true` if the timer fired.
    pub fn poll(&mut self, now: Timestamp) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let period_ms = self.period.as_millis().max(1) as u64;
        let overdue_ms = now.saturating_duration_since(due).as_millis() as u64;
        let skipped = overdue_ms / period_ms + 1;
        self.next_due = Some(Timestamp::from_millis(
            due.as_millis()
                .saturating_add(skipped.saturating_mul(period_ms)),
        ));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Timestamp {
        Timestamp::from_millis(value)
    }

    #[test]
    fn timeout_fires_once_at_deadline() {
        let mut slot = TimeoutSlot::new();
        let token = slot.arm(ms(0), Duration::from_millis(150));

        assert_eq!(slot.poll(ms(149)), None);
        assert_eq!(slot.poll(ms(150)), Some(token));
        assert_eq!(slot.poll(ms(400)), None);
        assert!(!slot.is_pending());
    }

    #[test]
    fn rearming_supersedes_previous_token() {
        let mut slot = TimeoutSlot::new();
        let first = slot.arm(ms(0), Duration::from_millis(150));
        let second = slot.arm(ms(100), Duration::from_millis(150));

        assert_ne!(first, second);
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));
        assert_eq!(slot.poll(ms(150)), None);
        assert_eq!(slot.poll(ms(250)), Some(second));
    }

    #[test]
    fn cancel_returns_pending_token() {
        let mut slot = TimeoutSlot::new();
        let token = slot.arm(ms(10), Duration::from_millis(5));
        assert_eq!(slot.cancel(), Some(token));
        assert_eq!(slot.cancel(), None);
        assert_eq!(slot.poll(ms(1_000)), None);
    }

    #[test]
    fn interval_fires_every_period() {
        let mut timer = IntervalTimer::new(Duration::from_millis(5_000));
        timer.start(ms(0));

        assert!(!timer.poll(ms(4_999)));
        assert!(timer.poll(ms(5_000)));
        assert!(!timer.poll(ms(5_001)));
        assert!(timer.poll(ms(10_000)));
        assert_eq!(timer.next_due(), Some(ms(15_000)));
    }

    #[test]
    fn overdue_interval_fires_once_and_keeps_cadence() {
        let mut timer = IntervalTimer::new(Duration::from_millis(5_000));
        timer.start(ms(0));

        assert!(timer.poll(ms(17_300)));
        assert_eq!(timer.next_due(), Some(ms(20_000)));
        assert!(!timer.poll(ms(19_999)));
    }

    #[test]
    fn stopped_interval_never_fires() {
        let mut timer = IntervalTimer::new(Duration::from_millis(100));
        timer.start(ms(0));
        timer.stop();
        assert!(!timer.poll(ms(10_000)));
        assert!(!timer.is_running());
    }

    #[test]
    fn zero_period_is_clamped() {
        let timer = IntervalTimer::new(Duration::ZERO);
        assert_eq!(timer.period(), Duration::from_millis(1));
    }
}
