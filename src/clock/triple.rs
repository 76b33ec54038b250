use serde::{Deserialize, Serialize};
use std::fmt;

/// An `(hours, minutes, seconds)` value.
///
/// After a unit edit every field is canonical (`hours < 24`, the others
/// `< 60`). A duration add may leave `hours` anywhere in `0..=99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeTriple {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeTriple {
    pub const MIDNIGHT: TimeTriple = TimeTriple::new(0, 0, 0);

    pub const fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Flat second count, widened so any stored value fits.
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

/// Zero-pad to two characters. Wider values are never truncated.
pub fn format_unit(value: u32) -> String {
    format!("{:02}", value)
}

impl fmt::Display for TimeTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            format_unit(self.hours),
            format_unit(self.minutes),
            format_unit(self.seconds)
        )
    }
}
