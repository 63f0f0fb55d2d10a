// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-day derivation in a declared time zone.
//!
//! Instants are carried as `time::OffsetDateTime`. The zone database comes
//! from `chrono-tz`, so the instant is bridged through chrono to find the
//! local wall-clock date and then converted back to `time::Date`.

use crate::error::DomainError;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use time::{Date, Month, OffsetDateTime};

/// Returns the calendar day `now` falls on in `zone`.
///
/// # Errors
///
/// Returns `DomainError::TimestampOutOfRange` if the instant cannot be
/// represented by chrono or the resulting date cannot be represented by `time`.
pub fn calendar_day_in_zone(now: OffsetDateTime, zone: Tz) -> Result<Date, DomainError> {
    let out_of_range = || DomainError::TimestampOutOfRange {
        timestamp: now.to_string(),
    };

    let utc: DateTime<Utc> =
        DateTime::from_timestamp(now.unix_timestamp(), now.nanosecond()).ok_or_else(out_of_range)?;
    let local: NaiveDate = utc.with_timezone(&zone).date_naive();

    let month: Month = u8::try_from(local.month())
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(out_of_range)?;
    let day: u8 = u8::try_from(local.day()).map_err(|_| out_of_range())?;

    Date::from_calendar_date(local.year(), month, day).map_err(|_| out_of_range())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn test_utc_instant_in_utc() {
        let now = datetime!(2026-03-10 12:00 UTC);
        assert_eq!(calendar_day_in_zone(now, Tz::UTC).unwrap(), date!(2026 - 03 - 10));
    }

    #[test]
    fn test_late_evening_utc_is_next_day_in_london_summer_time() {
        // BST is UTC+1
        let now = datetime!(2026-07-01 23:30 UTC);
        assert_eq!(
            calendar_day_in_zone(now, chrono_tz::Europe::London).unwrap(),
            date!(2026 - 07 - 02)
        );
    }

    #[test]
    fn test_offset_of_input_does_not_matter() {
        let utc = datetime!(2026-01-15 01:00 UTC);
        let shifted = datetime!(2026-01-14 20:00 -5);
        assert_eq!(
            calendar_day_in_zone(utc, chrono_tz::Europe::London).unwrap(),
            calendar_day_in_zone(shifted, chrono_tz::Europe::London).unwrap()
        );
    }

    #[test]
    fn test_just_before_midnight_stays_on_day() {
        let now = datetime!(2026-01-15 23:59:59 UTC);
        assert_eq!(
            calendar_day_in_zone(now, chrono_tz::Europe::London).unwrap(),
            date!(2026 - 01 - 15)
        );
    }
}
