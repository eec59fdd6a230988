//! Monotonic millisecond timestamps.
//!
//! `std::time::Instant` is unavailable on `wasm32-unknown-unknown`, so the core
//! works on caller-supplied timestamps instead. The browser feeds
//! `performance.now()`; tests feed whatever they like.

use std::fmt;
use std::ops::Add;
use std::time::Duration;

/// Milliseconds since an arbitrary, fixed origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The clock origin.
    pub const ZERO: Timestamp = Timestamp(0);

    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Converts a fractional millisecond reading (e.g. `performance.now()`).
    /// Negative and NaN readings clamp to the origin.
    pub fn from_millis_f64(millis: f64) -> Self {
        if millis.is_finite() && millis > 0.0 {
            Self(millis as u64)
        } else {
            Self::ZERO
        }
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Time elapsed from `earlier` to `self`, or zero if `earlier` is later.
    pub fn saturating_duration_since(self, earlier: Timestamp) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Timestamp {
        let millis = u64::try_from(rhs.as_millis()).unwrap_or(u64::MAX);
        Timestamp(self.0.saturating_add(millis))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_saturates() {
        let ts = Timestamp::from_millis(u64::MAX - 1);
        assert_eq!((ts + Duration::from_millis(10)).as_millis(), u64::MAX);
    }

    #[test]
    fn duration_since_never_underflows() {
        let early = Timestamp::from_millis(100);
        let late = Timestamp::from_millis(250);
        assert_eq!(late.saturating_duration_since(early), Duration::from_millis(150));
        assert_eq!(early.saturating_duration_since(late), Duration::ZERO);
    }

    #[test]
    fn fractional_readings_truncate() {
        assert_eq!(Timestamp::from_millis_f64(1234.9).as_millis(), 1234);
        assert_eq!(Timestamp::from_millis_f64(-5.0), Timestamp::ZERO);
        assert_eq!(Timestamp::from_millis_f64(f64::NAN), Timestamp::ZERO);
    }
}
