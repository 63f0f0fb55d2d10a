// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking lifecycle status classification.
//!
//! A booking's status is derived, never stored. It is a pure function of
//! the booking's planned and recorded milestones and of the current day.
//!
//! ## Rule order
//!
//! Rules are evaluated top to bottom and the first match wins:
//!
//! 1. Recorded departure before recorded arrival → indeterminate
//! 2. Departure recorded → `departed`
//! 3. Arrival recorded → `departingToday` / `overdueDeparture` /
//!    `departingWithin2Weeks` / `arrived`
//! 4. Non-arrival confirmed → `notArrived`
//! 5. Nothing recorded → `arrivingToday` / `overdueArrival` /
//!    `arrivingWithin2Weeks` / `arrivingWithin6Weeks`
//!
//! A booking that matches no rule is more than six weeks from arrival and
//! is reported as `NotYetDue`.

use crate::calendar::calendar_day_in_zone;
use crate::error::DomainError;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Days ahead within which an arrival or departure counts as "within 2 weeks".
pub const TWO_WEEKS_DAYS: i64 = 14;

/// Days ahead within which an arrival counts as "within 6 weeks".
pub const SIX_WEEKS_DAYS: i64 = 42;

/// The milestones a booking's status is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceBookingDates {
    /// Planned arrival day.
    pub expected_arrival_date: Date,
    /// Planned departure day.
    pub expected_departure_date: Date,
    /// When the resident actually arrived.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub actual_arrival: Option<OffsetDateTime>,
    /// When the resident actually departed.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub actual_departure: Option<OffsetDateTime>,
    /// When staff confirmed the resident would not arrive.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub non_arrival_confirmed: Option<OffsetDateTime>,
}

impl SpaceBookingDates {
    /// Creates dates for a booking with nothing recorded yet.
    #[must_use]
    pub const fn expected(expected_arrival_date: Date, expected_departure_date: Date) -> Self {
        Self {
            expected_arrival_date,
            expected_departure_date,
            actual_arrival: None,
            actual_departure: None,
            non_arrival_confirmed: None,
        }
    }
}

/// Where a booking stands relative to its milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingLifecycleStatus {
    /// Arrival is between 15 and 42 days away.
    ArrivingWithin6Weeks,
    /// Arrival is between 1 and 14 days away.
    ArrivingWithin2Weeks,
    /// Arrival is expected today.
    ArrivingToday,
    /// Expected arrival has passed with no arrival recorded.
    OverdueArrival,
    /// Resident is in residence and departure is more than 14 days away.
    Arrived,
    /// Non-arrival has been confirmed.
    NotArrived,
    /// Resident is in residence and departure is between 1 and 14 days away.
    DepartingWithin2Weeks,
    /// Resident is expected to depart today.
    DepartingToday,
    /// Expected departure has passed with no departure recorded.
    OverdueDeparture,
    /// Departure has been recorded.
    Departed,
}

impl BookingLifecycleStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 10] = [
        Self::ArrivingWithin6Weeks,
        Self::ArrivingWithin2Weeks,
        Self::ArrivingToday,
        Self::OverdueArrival,
        Self::Arrived,
        Self::NotArrived,
        Self::DepartingWithin2Weeks,
        Self::DepartingToday,
        Self::OverdueDeparture,
        Self::Departed,
    ];

    /// Returns the string representation of the status.
    ///
    /// This matches the serialized form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ArrivingWithin6Weeks => "arrivingWithin6Weeks",
            Self::ArrivingWithin2Weeks => "arrivingWithin2Weeks",
            Self::ArrivingToday => "arrivingToday",
            Self::OverdueArrival => "overdueArrival",
            Self::Arrived => "arrived",
            Self::NotArrived => "notArrived",
            Self::DepartingWithin2Weeks => "departingWithin2Weeks",
            Self::DepartingToday => "departingToday",
            Self::OverdueDeparture => "overdueDeparture",
            Self::Departed => "departed",
        }
    }
}

impl std::fmt::Display for BookingLifecycleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingLifecycleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::InvalidBookingStatus {
                status: s.to_string(),
            })
    }
}

/// Why a booking could not be given a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IndeterminateReason {
    /// The recorded departure precedes the recorded arrival.
    DepartureBeforeArrival,
}

/// The result of classifying a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BookingStatusOutcome {
    /// The booking has a lifecycle status.
    Status {
        /// The derived status.
        status: BookingLifecycleStatus,
    },
    /// Arrival is further out than the longest arrival tier.
    #[serde(rename_all = "camelCase")]
    NotYetDue {
        /// Whole days until the expected arrival.
        days_until_arrival: i64,
    },
    /// The recorded milestones contradict each other.
    Indeterminate {
        /// What is contradictory.
        reason: IndeterminateReason,
    },
}

impl BookingStatusOutcome {
    /// Returns the lifecycle status, if one was derived.
    #[must_use]
    pub const fn status(&self) -> Option<BookingLifecycleStatus> {
        match self {
            Self::Status { status } => Some(*status),
            Self::NotYetDue { .. } | Self::Indeterminate { .. } => None,
        }
    }
}

impl From<BookingLifecycleStatus> for BookingStatusOutcome {
    fn from(status: BookingLifecycleStatus) -> Self {
        Self::Status { status }
    }
}

/// Everything the rules look at, computed once per classification.
struct BookingFacts {
    departure_before_arrival: bool,
    has_departed: bool,
    has_arrived: bool,
    non_arrival_confirmed: bool,
    days_until_arrival: i64,
    days_until_departure: i64,
}

impl BookingFacts {
    fn new(dates: &SpaceBookingDates, today: Date) -> Self {
        let departure_before_arrival: bool = matches!(
            (dates.actual_arrival, dates.actual_departure),
            (Some(arrival), Some(departure)) if departure < arrival
        );
        Self {
            departure_before_arrival,
            has_departed: dates.actual_departure.is_some(),
            has_arrived: dates.actual_arrival.is_some(),
            non_arrival_confirmed: dates.non_arrival_confirmed.is_some(),
            days_until_arrival: (dates.expected_arrival_date - today).whole_days(),
            days_until_departure: (dates.expected_departure_date - today).whole_days(),
        }
    }
}

/// A guarded rule: if `guard` holds, the booking gets `outcome`.
struct StatusRule {
    guard: fn(&BookingFacts) -> bool,
    outcome: BookingStatusOutcome,
}

const fn becomes(status: BookingLifecycleStatus) -> BookingStatusOutcome {
    BookingStatusOutcome::Status { status }
}

const STATUS_RULES: [StatusRule; 11] = [
    StatusRule {
        guard: |f| f.departure_before_arrival,
        outcome: BookingStatusOutcome::Indeterminate {
            reason: IndeterminateReason::DepartureBeforeArrival,
        },
    },
    StatusRule {
        guard: |f| f.has_departed,
        outcome: becomes(BookingLifecycleStatus::Departed),
    },
    StatusRule {
        guard: |f| f.has_arrived && f.days_until_departure == 0,
        outcome: becomes(BookingLifecycleStatus::DepartingToday),
    },
    StatusRule {
        guard: |f| f.has_arrived && f.days_until_departure < 0,
        outcome: becomes(BookingLifecycleStatus::OverdueDeparture),
    },
    StatusRule {
        guard: |f| f.has_arrived && f.days_until_departure <= TWO_WEEKS_DAYS,
        outcome: becomes(BookingLifecycleStatus::DepartingWithin2Weeks),
    },
    StatusRule {
        guard: |f| f.has_arrived,
        outcome: becomes(BookingLifecycleStatus::Arrived),
    },
    StatusRule {
        guard: |f| f.non_arrival_confirmed,
        outcome: becomes(BookingLifecycleStatus::NotArrived),
    },
    StatusRule {
        guard: |f| f.days_until_arrival == 0,
        outcome: becomes(BookingLifecycleStatus::ArrivingToday),
    },
    StatusRule {
        guard: |f| f.days_until_arrival < 0,
        outcome: becomes(BookingLifecycleStatus::OverdueArrival),
    },
    StatusRule {
        guard: |f| f.days_until_arrival <= TWO_WEEKS_DAYS,
        outcome: becomes(BookingLifecycleStatus::ArrivingWithin2Weeks),
    },
    StatusRule {
        guard: |f| f.days_until_arrival <= SIX_WEEKS_DAYS,
        outcome: becomes(BookingLifecycleStatus::ArrivingWithin6Weeks),
    },
];

/// Classifies a booking on a given calendar day.
///
/// # Arguments
///
/// * `dates` - The booking's milestones
/// * `today` - The current calendar day in the reference time zone
///
/// # Returns
///
/// The outcome of the first matching rule, or `NotYetDue` when arrival is
/// more than six weeks away and nothing has been recorded.
#[must_use]
pub fn classify_booking_status_on(dates: &SpaceBookingDates, today: Date) -> BookingStatusOutcome {
    let facts: BookingFacts = BookingFacts::new(dates, today);

    STATUS_RULES
        .iter()
        .find(|rule| (rule.guard)(&facts))
        .map_or(
            BookingStatusOutcome::NotYetDue {
                days_until_arrival: facts.days_until_arrival,
            },
            |rule| rule.outcome,
        )
}

/// Classifies a booking at an instant.
///
/// "Today" is the calendar day `now` falls on in `zone`.
///
/// # Errors
///
/// Returns `DomainError::TimestampOutOfRange` if `now` cannot be placed on
/// a calendar day in `zone`.
pub fn classify_booking_status(
    dates: &SpaceBookingDates,
    now: OffsetDateTime,
    zone: Tz,
) -> Result<BookingStatusOutcome, DomainError> {
    let today: Date = calendar_day_in_zone(now, zone)?;
    Ok(classify_booking_status_on(dates, today))
}
