// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day-by-day premises capacity.
//!
//! ## Invariants
//!
//! - One `PremiseCapacityForDay` per day of the requested range, in order,
//!   with no gaps and no duplicates
//! - `available_bed_count = total_bed_count - out-of-service beds`
//! - Bookings never reduce `available_bed_count`; `booking_count` is
//!   reported alongside it and may exceed it

use crate::characteristic_availability::{
    PremiseCharacteristicAvailability, calculate_characteristic_availability,
};
use crate::out_of_service::OutOfServiceIndex;
use ap_capacity_domain::{
    CharacteristicTag, DateRange, DomainError, OutOfServiceBed, PremisesBedInventory, PremisesId,
    SpaceBooking,
};
use serde::Serialize;
use time::Date;

/// Capacity of one premises on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiseCapacityForDay {
    day: Date,
    total_bed_count: u32,
    available_bed_count: u32,
    booking_count: u32,
    characteristic_availability: Vec<PremiseCharacteristicAvailability>,
}

impl PremiseCapacityForDay {
    /// Creates a new `PremiseCapacityForDay`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BedCountInvariant` if more beds are available
    /// than exist.
    pub fn new(
        day: Date,
        total_bed_count: u32,
        available_bed_count: u32,
        booking_count: u32,
        characteristic_availability: Vec<PremiseCharacteristicAvailability>,
    ) -> Result<Self, DomainError> {
        if available_bed_count > total_bed_count {
            return Err(DomainError::BedCountInvariant {
                subject: format!("premises on {day}"),
                total: total_bed_count,
                available: available_bed_count,
            });
        }
        Ok(Self {
            day,
            total_bed_count,
            available_bed_count,
            booking_count,
            characteristic_availability,
        })
    }

    /// Returns the day.
    #[must_use]
    pub const fn day(&self) -> Date {
        self.day
    }

    /// Returns the number of beds in the premises.
    #[must_use]
    pub const fn total_bed_count(&self) -> u32 {
        self.total_bed_count
    }

    /// Returns the number of beds not out of service.
    #[must_use]
    pub const fn available_bed_count(&self) -> u32 {
        self.available_bed_count
    }

    /// Returns the number of bookings occupying the day.
    #[must_use]
    pub const fn booking_count(&self) -> u32 {
        self.booking_count
    }

    /// Returns the number of beds out of service.
    #[must_use]
    pub const fn out_of_service_bed_count(&self) -> u32 {
        self.total_bed_count.saturating_sub(self.available_bed_count)
    }

    /// Returns available beds minus bookings.
    ///
    /// Negative when the premises is overbooked.
    #[must_use]
    pub fn vacant_bed_count(&self) -> i64 {
        i64::from(self.available_bed_count) - i64::from(self.booking_count)
    }

    /// Returns true if bookings exceed available beds.
    #[must_use]
    pub fn is_overbooked(&self) -> bool {
        self.vacant_bed_count() < 0
    }

    /// Returns the per-characteristic breakdown, ordered by tag.
    #[must_use]
    pub fn characteristic_availability(&self) -> &[PremiseCharacteristicAvailability] {
        &self.characteristic_availability
    }

    /// Returns the breakdown for one characteristic, if any bed carries it.
    #[must_use]
    pub fn characteristic(
        &self,
        tag: &CharacteristicTag,
    ) -> Option<&PremiseCharacteristicAvailability> {
        self.characteristic_availability
            .iter()
            .find(|availability| availability.tag() == tag)
    }
}

/// Capacity of one premises across a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiseCapacity {
    premises_id: PremisesId,
    range: DateRange,
    by_day: Vec<PremiseCapacityForDay>,
}

impl PremiseCapacity {
    /// Returns the premises identifier.
    #[must_use]
    pub const fn premises_id(&self) -> &PremisesId {
        &self.premises_id
    }

    /// Returns the range covered.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// Returns one entry per day of the range, in order.
    #[must_use]
    pub fn by_day(&self) -> &[PremiseCapacityForDay] {
        &self.by_day
    }

    /// Returns the entry for `day`, if the range covers it.
    #[must_use]
    pub fn day(&self, day: Date) -> Option<&PremiseCapacityForDay> {
        if !self.range.contains(day) {
            return None;
        }
        let offset: usize = usize::try_from((day - self.range.start()).whole_days()).ok()?;
        self.by_day.get(offset)
    }
}

/// Calculates capacity for one premises over a date range.
///
/// # Arguments
///
/// * `inventory` - The premises' beds
/// * `range` - The days to calculate for
/// * `out_of_service` - Out-of-service periods for the premises' beds
/// * `bookings` - Bookings at the premises
///
/// # Returns
///
/// A `PremiseCapacity` with exactly `range.num_days()` entries.
///
/// # Calculation
///
/// For each day `d`:
/// - `total_bed_count` is the inventory's bed count
/// - `available_bed_count` is `total_bed_count` less the beds with a
///   non-cancelled out-of-service period covering `d`
/// - `booking_count` is the number of bookings whose canonical stay covers `d`
/// - the characteristic breakdown counts beds per characteristic in the
///   same way
///
/// A premises with no beds yields zero counts on every day.
#[must_use]
pub fn calculate_premise_capacity(
    inventory: &PremisesBedInventory,
    range: DateRange,
    out_of_service: &[OutOfServiceBed],
    bookings: &[SpaceBooking],
) -> PremiseCapacity {
    let index: OutOfServiceIndex<'_> = OutOfServiceIndex::new(out_of_service);
    let booking_counts: Vec<u32> = count_bookings_by_day(range, bookings);
    let total_bed_count: u32 = inventory.bed_count();

    let by_day: Vec<PremiseCapacityForDay> = range
        .days()
        .zip(booking_counts)
        .map(|(day, booking_count)| {
            let out_of_service_beds: u32 = index.out_of_service_bed_count(inventory, day);
            PremiseCapacityForDay {
                day,
                total_bed_count,
                available_bed_count: total_bed_count.saturating_sub(out_of_service_beds),
                booking_count,
                characteristic_availability: calculate_characteristic_availability(
                    inventory, day, &index,
                ),
            }
        })
        .collect();

    PremiseCapacity {
        premises_id: inventory.premises_id().clone(),
        range,
        by_day,
    }
}

/// Counts bookings per day of `range`, indexed from `range.start()`.
fn count_bookings_by_day(range: DateRange, bookings: &[SpaceBooking]) -> Vec<u32> {
    let days: usize = usize::try_from(range.num_days()).unwrap_or(usize::MAX);
    let mut counts: Vec<u32> = vec![0; days];

    for booking in bookings {
        let Some(overlap) = booking.canonical_stay.intersection(&range) else {
            continue;
        };
        let first: usize =
            usize::try_from((overlap.start() - range.start()).whole_days()).unwrap_or(0);
        let len: usize = usize::try_from(overlap.num_days()).unwrap_or(0);
        for count in counts.iter_mut().skip(first).take(len) {
            *count = count.saturating_add(1);
        }
    }

    counts
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_count_bookings_clips_to_range() {
        let range = DateRange::new(date!(2026 - 03 - 10), date!(2026 - 03 - 14)).unwrap();
        let bookings = vec![
            SpaceBooking::new(
                ap_capacity_domain::BookingId::new("b-1").unwrap(),
                date!(2026 - 03 - 01),
                date!(2026 - 03 - 11),
                ap_capacity_domain::SpaceBookingDates::expected(
                    date!(2026 - 03 - 01),
                    date!(2026 - 03 - 11),
                ),
            )
            .unwrap(),
            SpaceBooking::new(
                ap_capacity_domain::BookingId::new("b-2").unwrap(),
                date!(2026 - 03 - 13),
                date!(2026 - 03 - 20),
                ap_capacity_domain::SpaceBookingDates::expected(
                    date!(2026 - 03 - 13),
                    date!(2026 - 03 - 20),
                ),
            )
            .unwrap(),
        ];

        assert_eq!(count_bookings_by_day(range, &bookings), vec![1, 1, 0, 1, 1]);
    }

    #[test]
    fn test_out_of_service_bed_count_is_total_less_available() {
        let day = PremiseCapacityForDay::new(date!(2026 - 03 - 10), 10, 7, 9, vec![]).unwrap();
        assert_eq!(day.out_of_service_bed_count(), 3);
        assert_eq!(day.vacant_bed_count(), -2);
        assert!(day.is_overbooked());
    }

    #[test]
    fn test_rejects_more_available_than_total() {
        let result = PremiseCapacityForDay::new(date!(2026 - 03 - 10), 3, 4, 0, vec![]);
        assert!(matches!(result, Err(DomainError::BedCountInvariant { .. })));
    }
}
