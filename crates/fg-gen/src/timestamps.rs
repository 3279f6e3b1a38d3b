use crate::{GenError, GenErrorResult, PAST_YEAR_DAYS};

use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use rand::Rng;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Uniform naive timestamp between midnight `PAST_YEAR_DAYS` days before
/// `today` and midnight on `today`, both inclusive.
pub fn past_year_datetime<R: Rng>(rng: &mut R, today: NaiveDate) -> NaiveDateTime {
    let start = (today - Days::new(PAST_YEAR_DAYS)).and_time(NaiveTime::MIN);
    let span_secs = PAST_YEAR_DAYS as i64 * SECONDS_PER_DAY;

    start + TimeDelta::seconds(rng.random_range(0..=span_secs))
}

/// Attach `offset` to a wall-clock time, keeping the wall-clock reading.
pub fn localize(naive: NaiveDateTime, offset: FixedOffset) -> DateTime<FixedOffset> {
    let utc = naive - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
    DateTime::from_naive_utc_and_offset(utc, offset)
}

#[track_caller]
pub fn utc_offset(minutes: i32) -> GenErrorResult<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| GenError::settings(format!("UTC offset out of range: {minutes} minutes")))
}
