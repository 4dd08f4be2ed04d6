//! Time Provider
//!
//! The footer year is the only value on the page that depends on anything
//! besides the catalog. It is read through `Clock` so composition stays
//! deterministic under test.

use chrono::Datelike;

pub trait Clock: Send + Sync {
    /// Calendar year at the moment of the call
    fn current_year(&self) -> i32;
}

/// Host clock, local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Always reports the same year
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(2031).current_year(), 2031);
    }

    #[test]
    fn test_system_clock_matches_chrono() {
        let before = chrono::Local::now().year();
        let year = SystemClock.current_year();
        let after = chrono::Local::now().year();
        assert!(year == before || year == after);
    }
}
