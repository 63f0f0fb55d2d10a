// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Occupancy views across premises.
//!
//! When a placement needs several characteristics at once, the usable
//! capacity of a premises is bounded by whichever of them is scarcest. Each
//! day is reduced to a single view:
//!
//! - no characteristics requested → the premises' overall counts
//! - one requested → that characteristic's counts
//! - several requested → the present characteristic with the lowest
//!   available count, ties going to the earliest in request order
//!
//! Characteristics no bed carries are not candidates; they are never
//! counted as zero availability. A day where none of the requested
//! characteristics is present has no vacancy at all.

use crate::capacity::{PremiseCapacity, PremiseCapacityForDay};
use ap_capacity_domain::{CharacteristicTag, DateRange, PremisesId};
use serde::Serialize;
use time::Date;

/// What a day's reduced counts describe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CapacityBasis {
    /// The whole premises; no characteristic was requested.
    Overall,
    /// The named, limiting characteristic.
    Characteristic {
        /// The characteristic the counts belong to.
        tag: CharacteristicTag,
    },
    /// None of the requested characteristics is carried by any bed.
    NoMatchingBeds,
}

/// One premises' reduced counts for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOccupancy {
    /// The day.
    pub day: Date,
    /// What the counts describe.
    pub basis: CapacityBasis,
    /// Beds counted.
    pub total_bed_count: u32,
    /// Counted beds that are in service.
    pub available_bed_count: u32,
    /// Bookings occupying the day.
    pub booking_count: u32,
}

impl DayOccupancy {
    /// Returns `available_bed_count - booking_count`.
    ///
    /// Negative values signal overbooking and are reported as-is. Days with
    /// no matching beds have no vacancy to report and return `None`.
    #[must_use]
    pub fn vacant_bed_count(&self) -> Option<i64> {
        match self.basis {
            CapacityBasis::NoMatchingBeds => None,
            CapacityBasis::Overall | CapacityBasis::Characteristic { .. } => {
                Some(i64::from(self.available_bed_count) - i64::from(self.booking_count))
            }
        }
    }
}

/// One premises' reduced counts across a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiseOccupancy {
    /// The premises.
    pub premises_id: PremisesId,
    /// The days covered.
    pub range: DateRange,
    /// One entry per day, in order.
    pub by_day: Vec<DayOccupancy>,
}

/// Removes repeated tags, keeping the first occurrence of each.
#[must_use]
pub fn distinct_characteristics(requested: &[CharacteristicTag]) -> Vec<&CharacteristicTag> {
    let mut seen: Vec<&CharacteristicTag> = Vec::with_capacity(requested.len());
    for tag in requested {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}

/// Reduces one day's capacity to a single view.
///
/// # Arguments
///
/// * `requested` - Requested characteristics, in priority order for ties
/// * `capacity` - The day's capacity
#[must_use]
pub fn reduce_day_capacity(
    requested: &[CharacteristicTag],
    capacity: &PremiseCapacityForDay,
) -> DayOccupancy {
    let requested: Vec<&CharacteristicTag> = distinct_characteristics(requested);

    let (basis, total_bed_count, available_bed_count) = if requested.is_empty() {
        (
            CapacityBasis::Overall,
            capacity.total_bed_count(),
            capacity.available_bed_count(),
        )
    } else {
        // min_by_key keeps the first of equal minima, which is request order.
        requested
            .iter()
            .filter_map(|tag| capacity.characteristic(tag))
            .min_by_key(|availability| availability.available_bed_count())
            .map_or((CapacityBasis::NoMatchingBeds, 0, 0), |limiting| {
                (
                    CapacityBasis::Characteristic {
                        tag: limiting.tag().clone(),
                    },
                    limiting.total_bed_count(),
                    limiting.available_bed_count(),
                )
            })
    };

    DayOccupancy {
        day: capacity.day(),
        basis,
        total_bed_count,
        available_bed_count,
        booking_count: capacity.booking_count(),
    }
}

/// Reduces a premises' capacity to one view per day.
#[must_use]
pub fn summarize_premise_occupancy(
    requested: &[CharacteristicTag],
    capacity: &PremiseCapacity,
) -> PremiseOccupancy {
    PremiseOccupancy {
        premises_id: capacity.premises_id().clone(),
        range: capacity.range(),
        by_day: capacity
            .by_day()
            .iter()
            .map(|day| reduce_day_capacity(requested, day))
            .collect(),
    }
}

/// Reduces every premises' capacity with the same requested characteristics.
#[must_use]
pub fn summarize_national_occupancy(
    requested: &[CharacteristicTag],
    capacities: &[PremiseCapacity],
) -> Vec<PremiseOccupancy> {
    capacities
        .iter()
        .map(|capacity| summarize_premise_occupancy(requested, capacity))
        .collect()
}

/// Returns the overbooked stretches of a premises' capacity.
///
/// Consecutive overbooked days are merged into a single range. Ranges are
/// returned in day order.
#[must_use]
pub fn overbooking_ranges(capacity: &PremiseCapacity) -> Vec<DateRange> {
    let mut runs: Vec<(Date, Date)> = Vec::new();

    for day in capacity.by_day().iter().filter(|day| day.is_overbooked()) {
        match runs.last_mut() {
            Some((_, end)) if end.next_day() == Some(day.day()) => *end = day.day(),
            _ => runs.push((day.day(), day.day())),
        }
    }

    runs.into_iter()
        .filter_map(|(start, end)| DateRange::new(start, end).ok())
        .collect()
}
