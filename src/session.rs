use crate::clock::{self, TimeTriple, Unit};
use crate::error::ParseError;
use crate::service::models::HeartRateRequest;
use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which of the two session times an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Start,
    End,
}

impl FromStr for Slot {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Slot::Start),
            "end" => Ok(Slot::End),
            _ => Err(ParseError::Slot(s.to_string())),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Slot::Start => "start",
            Slot::End => "end",
        })
    }
}

/// The start/end pair and date a user is assembling.
///
/// Start and end are independent; nothing keeps end after start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub start: TimeTriple,
    pub end: TimeTriple,
    pub date: NaiveDate,
}

impl Session {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            start: TimeTriple::MIDNIGHT,
            end: TimeTriple::MIDNIGHT,
            date,
        }
    }

    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn time(&self, slot: Slot) -> TimeTriple {
        match slot {
            Slot::Start => self.start,
            Slot::End => self.end,
        }
    }

    fn time_mut(&mut self, slot: Slot) -> &mut TimeTriple {
        match slot {
            Slot::Start => &mut self.start,
            Slot::End => &mut self.end,
        }
    }

    /// Apply a raw field edit, returning the new value of that slot.
    pub fn edit(&mut self, slot: Slot, unit: Unit, raw: &str) -> TimeTriple {
        self.edit_value(slot, unit, clock::coerce_raw(raw))
    }

    pub fn edit_value(&mut self, slot: Slot, unit: Unit, raw: u64) -> TimeTriple {
        let current = self.time_mut(slot);
        let previous = *current;
        let next = clock::normalize(previous, unit, raw);
        *current = next;
        debug!(%slot, %unit, raw, from = %previous, to = %next, "time edited");
        next
    }

    /// Set end to start plus `minutes`. Returns false, leaving end as it
    /// was, when the result would pass 99 hours.
    pub fn add_duration(&mut self, minutes: u32) -> bool {
        match clock::add_duration(self.start, minutes) {
            Some(end) => {
                debug!(minutes, start = %self.start, %end, "duration added");
                self.end = end;
                true
            }
            None => {
                debug!(minutes, start = %self.start, "duration add exceeds 99 hours, end time unchanged");
                false
            }
        }
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn request(&self) -> HeartRateRequest {
        HeartRateRequest {
            start_time: self.start.to_string(),
            end_time: self.end.to_string(),
            date: self.date.format(DATE_FORMAT).to_string(),
        }
    }
}

pub fn parse_date(text: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| ParseError::Date(text.to_string()))
}

/// Read `H[:M[:S]]` the way three field edits would: hours first, then
/// minutes, then seconds, each normalized against the previous result.
pub fn parse_clock(text: &str) -> TimeTriple {
    let mut parts = text.trim().splitn(3, ':');
    let mut time = TimeTriple::MIDNIGHT;

    for unit in [Unit::Hours, Unit::Minutes, Unit::Seconds] {
        let raw = parts.next().map(clock::coerce_raw).unwrap_or(0);
        time = clock::normalize(time, unit, raw);
    }

    time
}
