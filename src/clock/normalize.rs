use crate::clock::triple::TimeTriple;
use crate::error::ParseError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which field of a triple an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Hours,
    Minutes,
    Seconds,
}

impl FromStr for Unit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "hour" | "hours" => Ok(Unit::Hours),
            "m" | "minute" | "minutes" => Ok(Unit::Minutes),
            "s" | "second" | "seconds" => Ok(Unit::Seconds),
            _ => Err(ParseError::Unit(s.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
        };
        f.write_str(name)
    }
}

/// Apply a single raw edit to `previous` and return the resulting triple.
///
/// Overflow policy differs per path:
/// - a direct hours edit of 24 or more resets the hour to 0 (25 gives 0, not 1)
/// - minute and second overflow cascades upward, and hours reached through a
///   cascade wrap modulo 24
///
/// Values under the unit's threshold replace the field as-is.
pub fn normalize(previous: TimeTriple, unit: Unit, raw: u64) -> TimeTriple {
    let mut next = previous;

    match unit {
        Unit::Hours => {
            next.hours = if raw >= 24 { 0 } else { raw as u32 };
        }
        Unit::Minutes => {
            if raw >= 60 {
                next.hours = wrap_hours(u64::from(previous.hours) + raw / 60);
                next.minutes = (raw % 60) as u32;
            } else {
                next.minutes = raw as u32;
            }
        }
        Unit::Seconds => {
            if raw >= 60 {
                let minutes = u64::from(previous.minutes) + raw / 60;

                if minutes >= 60 {
                    next.hours = wrap_hours(u64::from(previous.hours) + minutes / 60);
                    next.minutes = (minutes % 60) as u32;
                } else {
                    next.minutes = minutes as u32;
                }
                next.seconds = (raw % 60) as u32;
            } else {
                next.seconds = raw as u32;
            }
        }
    }

    next
}

/// Hours arriving through a cascade wrap modulo 24.
fn wrap_hours(hours: u64) -> u32 {
    (if hours >= 24 { hours % 24 } else { hours }) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_reset_on_overflow() {
        let prev = TimeTriple::new(3, 15, 20);
        for raw in [24, 25, 48, 100, u64::MAX] {
            assert_eq!(normalize(prev, Unit::Hours, raw), TimeTriple::new(0, 15, 20));
        }
    }

    #[test]
    fn test_hours_in_range_replace() {
        let prev = TimeTriple::new(3, 15, 20);
        for raw in 0..24u32 {
            assert_eq!(normalize(prev, Unit::Hours, u64::from(raw)).hours, raw);
        }
    }

    #[test]
    fn test_minutes_cascade() {
        let prev = TimeTriple::new(5, 10, 42);
        assert_eq!(normalize(prev, Unit::Minutes, 90), TimeTriple::new(6, 30, 42));
    }

    #[test]
    fn test_minutes_cascade_wraps_modulo() {
        let prev = TimeTriple::new(10, 0, 0);
        assert_eq!(normalize(prev, Unit::Minutes, 1470), TimeTriple::new(10, 30, 0));

        let prev = TimeTriple::new(23, 0, 0);
        assert_eq!(normalize(prev, Unit::Minutes, 60), TimeTriple::new(0, 0, 0));
    }

    #[test]
    fn test_seconds_double_cascade() {
        let prev = TimeTriple::new(23, 59, 0);
        assert_eq!(normalize(prev, Unit::Seconds, 3661), TimeTriple::new(1, 0, 1));
    }

    #[test]
    fn test_seconds_cascade_without_hour_change() {
        let prev = TimeTriple::new(4, 10, 5);
        assert_eq!(normalize(prev, Unit::Seconds, 125), TimeTriple::new(4, 12, 5));
    }

    #[test]
    fn test_seconds_cascade_keeps_out_of_range_hours() {
        // Hours only wrap when the cascade actually reaches them.
        let prev = TimeTriple::new(50, 0, 0);
        assert_eq!(normalize(prev, Unit::Seconds, 61), TimeTriple::new(50, 1, 1));
    }

    #[test]
    fn test_max_raw_does_not_overflow() {
        let prev = TimeTriple::new(23, 59, 59);
        let next = normalize(prev, Unit::Seconds, u64::MAX);
        assert!(next.hours < 24 && next.minutes < 60 && next.seconds < 60);

        let next = normalize(prev, Unit::Minutes, u64::MAX);
        assert!(next.hours < 24 && next.minutes < 60);
    }

    #[test]
    fn test_seconds_past_u32_cascade_fully() {
        // 5_000_000_000 s = 1_388_888 h 53 m 20 s, and 1_388_888 % 24 == 8.
        let next = normalize(TimeTriple::MIDNIGHT, Unit::Seconds, 5_000_000_000);
        assert_eq!(next, TimeTriple::new(8, 53, 20));
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("H".parse::<Unit>().unwrap(), Unit::Hours);
        assert_eq!("minutes".parse::<Unit>().unwrap(), Unit::Minutes);
        assert_eq!(" second ".parse::<Unit>().unwrap(), Unit::Seconds);
        assert!("days".parse::<Unit>().is_err());
    }
}
