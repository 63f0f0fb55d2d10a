// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Single-day premises view.

use crate::capacity::PremiseCapacityForDay;
use crate::error::CoreError;
use ap_capacity_domain::{DomainError, OutOfServiceBed, SpaceBooking};
use serde::Serialize;
use time::Date;

/// Everything happening at a premises on one day.
///
/// `previous_date` and `next_date` are always the neighbouring calendar
/// days, whether or not anything happens on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremisesDaySummary<B, O> {
    for_date: Date,
    previous_date: Date,
    next_date: Date,
    capacity: PremiseCapacityForDay,
    active_bookings: Vec<B>,
    out_of_service_beds: Vec<O>,
}

impl<B, O> PremisesDaySummary<B, O> {
    /// Returns the day summarized.
    #[must_use]
    pub const fn for_date(&self) -> Date {
        self.for_date
    }

    /// Returns the day before.
    #[must_use]
    pub const fn previous_date(&self) -> Date {
        self.previous_date
    }

    /// Returns the day after.
    #[must_use]
    pub const fn next_date(&self) -> Date {
        self.next_date
    }

    /// Returns the day's capacity.
    #[must_use]
    pub const fn capacity(&self) -> &PremiseCapacityForDay {
        &self.capacity
    }

    /// Returns the bookings occupying the day.
    #[must_use]
    pub fn active_bookings(&self) -> &[B] {
        &self.active_bookings
    }

    /// Returns the beds out of service on the day.
    #[must_use]
    pub fn out_of_service_beds(&self) -> &[O] {
        &self.out_of_service_beds
    }
}

/// Assembles a day summary.
///
/// # Arguments
///
/// * `for_date` - The day to summarize
/// * `capacity` - That day's capacity
/// * `active_bookings` - Bookings occupying the day, in caller's order
/// * `out_of_service_beds` - Beds out of service on the day, in caller's order
///
/// # Errors
///
/// Returns an error if:
/// - `capacity` describes a different day
/// - `for_date` is the first or last representable date
pub fn assemble_premises_day<B, O>(
    for_date: Date,
    capacity: PremiseCapacityForDay,
    active_bookings: Vec<B>,
    out_of_service_beds: Vec<O>,
) -> Result<PremisesDaySummary<B, O>, CoreError> {
    if capacity.day() != for_date {
        return Err(DomainError::DayMismatch {
            expected: for_date,
            actual: capacity.day(),
        }
        .into());
    }

    let previous_date: Date = for_date
        .previous_day()
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("finding the day before {for_date}"),
        })?;
    let next_date: Date = for_date
        .next_day()
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("finding the day after {for_date}"),
        })?;

    Ok(PremisesDaySummary {
        for_date,
        previous_date,
        next_date,
        capacity,
        active_bookings,
        out_of_service_beds,
    })
}

/// Returns the bookings whose canonical stay covers `day`.
pub fn bookings_active_on(
    day: Date,
    bookings: &[SpaceBooking],
) -> impl Iterator<Item = &SpaceBooking> {
    bookings.iter().filter(move |booking| booking.is_active_on(day))
}

/// Returns the non-cancelled out-of-service records covering `day`.
pub fn out_of_service_beds_on(
    day: Date,
    records: &[OutOfServiceBed],
) -> impl Iterator<Item = &OutOfServiceBed> {
    records.iter().filter(move |record| record.is_active_on(day))
}
