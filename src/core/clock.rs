//! Time source used to stamp attendance records.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDateTime};
use std::cell::Cell;
use std::fmt::Write;
use std::rc::Rc;

pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";
pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M:%S %p";

pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Host wall clock, local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a given instant. Clones share the same instant, so a
/// test can keep one handle and move time forward while the ledger holds
/// another.
#[derive(Debug, Clone)]
pub struct FixedClock {
    at: Rc<Cell<NaiveDateTime>>,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self {
            at: Rc::new(Cell::new(at)),
        }
    }

    pub fn set(&self, at: NaiveDateTime) {
        self.at.set(at);
    }

    pub fn advance_secs(&self, secs: i64) {
        self.at.set(self.at.get() + chrono::Duration::seconds(secs));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.at.get()
    }
}

/// Date and time strings captured for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub at: NaiveDateTime,
    pub date: String,
    pub time: String,
}

/// Turns "now" into the short date / time strings stored on records.
pub struct Stamper {
    clock: Box<dyn Clock>,
    date_format: String,
    time_format: String,
}

impl Stamper {
    pub fn new(clock: Box<dyn Clock>, date_format: &str, time_format: &str) -> Self {
        Self {
            clock,
            date_format: date_format.to_string(),
            time_format: time_format.to_string(),
        }
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self::new(clock, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT)
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn stamp(&self) -> AppResult<Stamp> {
        let at = self.clock.now();
        Ok(Stamp {
            at,
            date: render(at, &self.date_format)?,
            time: render(at, &self.time_format)?,
        })
    }
}

/// Formats `at` with a strftime pattern. Offset and zone specifiers
/// (`%z`, `%Z`) have nothing to print for a local naive time and fail here.
pub fn render(at: NaiveDateTime, pattern: &str) -> AppResult<String> {
    let mut out = String::new();
    write!(out, "{}", at.format(pattern))
        .map_err(|_| AppError::Config(format!("cannot render date/time pattern '{pattern}'")))?;
    Ok(out)
}

impl Default for Stamper {
    fn default() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }
}

impl std::fmt::Debug for Stamper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stamper")
            .field("date_format", &self.date_format)
            .field("time_format", &self.time_format)
            .finish()
    }
}
