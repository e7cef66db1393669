//! # Clock Module
//!
//! The seam between the simulation and wall-clock time.
//!
//! Timestamps on purchase logs come from an external clock service; inside
//! this crate that service is the [`Clock`] trait. Production code uses
//! [`SystemClock`]; tests and deterministic replays use [`FixedClock`].

use chrono::{DateTime, Utc};

// =============================================================================
// Clock Trait
// =============================================================================

/// Source of the current instant.
///
/// Every operation that stamps a log entry takes a `&dyn Clock` instead of
/// calling `Utc::now()` directly, so time stays injectable.
pub trait Clock: std::fmt::Debug {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

// =============================================================================
// System Clock
// =============================================================================

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// =============================================================================
// Fixed Clock
// =============================================================================

/// A clock frozen at a preprogrammed instant.
///
/// For tests and deterministic replays; advance it explicitly with
/// [`FixedClock::set`].
///
/// ## Example
/// ```rust
/// use alembic_shop::{Clock, FixedClock};
/// use chrono::{TimeZone, Utc};
///
/// let clock = FixedClock::at(Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap());
/// assert_eq!(clock.now().to_rfc3339(), "2024-03-01T14:30:00+00:00");
/// ```
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: std::cell::Cell<DateTime<Utc>>,
}

impl FixedClock {
    /// Creates a clock frozen at the given instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        FixedClock {
            instant: std::cell::Cell::new(instant),
        }
    }

    /// Moves the clock to a new instant.
    pub fn set(&self, instant: DateTime<Utc>) {
        self.instant.set(instant);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant.get()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_is_settable() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 3, 2, 10, 0, 0).unwrap();

        let clock = FixedClock::at(start);
        assert_eq!(clock.now(), start);

        clock.set(later);
        assert_eq!(clock.now(), later);
    }
}
