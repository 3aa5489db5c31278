use crate::constants::BUCKET_FORMAT;
use crate::error::FeedResult;
use chrono::{DateTime, Duration, DurationRound, Utc};
use std::fmt;

/// A UTC instant truncated to the start of its hour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HourBucket(DateTime<Utc>);

impl HourBucket {
    pub fn from_instant(now: DateTime<Utc>) -> FeedResult<Self> {
        Ok(HourBucket(now.duration_trunc(Duration::hours(1))?))
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for HourBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BUCKET_FORMAT))
    }
}
