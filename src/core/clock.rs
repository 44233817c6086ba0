//! Reference-timezone clock.
//!
//! Every calendar computation in the engine uses one configured UTC
//! offset, so "today" is the same day for all users regardless of where
//! their requests come from.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

#[derive(Debug, Clone, Copy)]
pub struct Clock {
    offset: FixedOffset,
}

impl Clock {
    /// Build a clock from a whole-hour UTC offset (e.g. +8 for a site
    /// operated on UTC+8). Offsets outside ±23 are rejected.
    pub fn from_offset_hours(hours: i32) -> AppResult<Self> {
        let offset = FixedOffset::east_opt(hours * 3600).ok_or_else(|| {
            AppError::Config(format!("Invalid UTC offset: {} hours", hours))
        })?;
        Ok(Self { offset })
    }

    /// Current instant in the reference timezone.
    pub fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }

    /// The logical calendar day check-ins count for right now.
    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
