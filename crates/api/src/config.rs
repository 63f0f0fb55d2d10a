// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reporting configuration.

use crate::error::{ApiError, ApiResult};
use chrono_tz::Tz;

/// Zone used when none is configured.
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Europe::London;

/// Days ahead scanned for overbooking when none is configured.
pub const DEFAULT_SUMMARY_HORIZON_DAYS: u16 = 84;

/// Settings shared by the reporting operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingConfig {
    time_zone: Tz,
    summary_horizon_days: u16,
}

impl ReportingConfig {
    /// Creates a new `ReportingConfig`.
    ///
    /// # Arguments
    ///
    /// * `time_zone` - IANA zone name that decides which calendar day "now" falls on
    /// * `summary_horizon_days` - How many days, starting today, summaries look ahead
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidConfiguration` if the zone is unknown or
    /// the horizon is zero.
    pub fn new(time_zone: &str, summary_horizon_days: u16) -> ApiResult<Self> {
        let zone: Tz = time_zone
            .trim()
            .parse::<Tz>()
            .map_err(|err| ApiError::InvalidConfiguration {
                setting: String::from("time_zone"),
                message: format!("'{time_zone}': {err}"),
            })?;

        if summary_horizon_days == 0 {
            return Err(ApiError::InvalidConfiguration {
                setting: String::from("summary_horizon_days"),
                message: String::from("horizon must cover at least one day"),
            });
        }

        Ok(Self {
            time_zone: zone,
            summary_horizon_days,
        })
    }

    /// Returns the reporting zone.
    #[must_use]
    pub const fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Returns the summary horizon in days.
    #[must_use]
    pub const fn summary_horizon_days(&self) -> u16 {
        self.summary_horizon_days
    }
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            time_zone: DEFAULT_TIME_ZONE,
            summary_horizon_days: DEFAULT_SUMMARY_HORIZON_DAYS,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_london_twelve_weeks() {
        let config = ReportingConfig::default();
        assert_eq!(config.time_zone(), chrono_tz::Europe::London);
        assert_eq!(config.summary_horizon_days(), 84);
    }

    #[test]
    fn test_parses_zone_name() {
        let config = ReportingConfig::new("America/New_York", 7).unwrap();
        assert_eq!(config.time_zone(), chrono_tz::America::New_York);
        assert_eq!(config.summary_horizon_days(), 7);
    }

    #[test]
    fn test_rejects_unknown_zone() {
        let result = ReportingConfig::new("Mars/Olympus_Mons", 7);
        assert!(matches!(
            result,
            Err(ApiError::InvalidConfiguration { setting, .. }) if setting == "time_zone"
        ));
    }

    #[test]
    fn test_rejects_zero_horizon() {
        let result = ReportingConfig::new("UTC", 0);
        assert!(matches!(
            result,
            Err(ApiError::InvalidConfiguration { setting, .. }) if setting == "summary_horizon_days"
        ));
    }
}
