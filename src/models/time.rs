//! Wall-clock time-of-day model.
//!
//! Rotation slots are labeled with plain wall-clock times ("07:00",
//! "23:40"). There is no date component; arithmetic wraps at midnight,
//! which the night shift relies on.

use serde::{Deserialize, Serialize};
use std::fmt;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time of day with minute resolution.
///
/// Displays as zero-padded "HH:MM".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOfDay {
    /// Hour (0-23).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
}

impl TimeOfDay {
    /// Creates a time of day, normalizing out-of-range components
    /// (25:70 becomes 02:10).
    pub fn new(hour: u8, minute: u8) -> Self {
        Self::from_minutes(u32::from(hour) * 60 + u32::from(minute))
    }

    /// Creates a time of day from minutes past midnight, wrapping at 24h.
    pub fn from_minutes(minutes: u32) -> Self {
        let m = minutes % MINUTES_PER_DAY;
        Self {
            hour: (m / 60) as u8,
            minute: (m % 60) as u8,
        }
    }

    /// Minutes past midnight (0..1440).
    #[inline]
    pub fn minutes_from_midnight(self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// Advances by the given number of minutes, wrapping past midnight.
    pub fn plus_minutes(self, minutes: u32) -> Self {
        Self::from_minutes(self.minutes_from_midnight() + minutes)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_zero_padded() {
        assert_eq!(TimeOfDay::new(7, 0).to_string(), "07:00");
        assert_eq!(TimeOfDay::new(23, 40).to_string(), "23:40");
    }

    #[test]
    fn test_plus_minutes_within_hour() {
        let t = TimeOfDay::new(7, 0).plus_minutes(20);
        assert_eq!(t, TimeOfDay::new(7, 20));
    }

    #[test]
    fn test_plus_minutes_hour_carry() {
        let t = TimeOfDay::new(7, 40).plus_minutes(20);
        assert_eq!(t, TimeOfDay::new(8, 0));
    }

    #[test]
    fn test_plus_minutes_wraps_midnight() {
        let t = TimeOfDay::new(23, 40).plus_minutes(20);
        assert_eq!(t, TimeOfDay::new(0, 0));
    }

    #[test]
    fn test_new_normalizes() {
        assert_eq!(TimeOfDay::new(25, 70), TimeOfDay::new(2, 10));
    }
}
