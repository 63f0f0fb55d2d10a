// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API layer.
//!
//! Responses are flat, serializable views with derived figures such as
//! vacancy included.

use ap_capacity::{CapacityBasis, DayOccupancy, PremiseCapacityForDay};
use ap_capacity_domain::{BookingStatusOutcome, DateRange, OutOfServiceBed, SpaceBooking};
use serde::{Deserialize, Serialize};
use time::Date;

/// Request for one premises' capacity across a range.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremisesCapacityRequest {
    /// The premises.
    pub premises_id: String,
    /// First day (inclusive).
    pub start_date: Date,
    /// Last day (inclusive).
    pub end_date: Date,
}

/// Counts for one characteristic on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicAvailabilityResponse {
    /// The characteristic.
    pub characteristic: String,
    /// Beds carrying it.
    pub total_bed_count: u32,
    /// Those beds that are in service.
    pub available_bed_count: u32,
}

/// Capacity of a premises on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityDayResponse {
    /// The day.
    pub date: Date,
    /// Beds in the premises.
    pub total_bed_count: u32,
    /// Beds in service.
    pub available_bed_count: u32,
    /// Beds out of service.
    pub out_of_service_bed_count: u32,
    /// Bookings occupying the day.
    pub booking_count: u32,
    /// Available beds less bookings; negative when overbooked.
    pub vacant_bed_count: i64,
    /// Per-characteristic counts, ordered by characteristic.
    pub characteristic_availability: Vec<CharacteristicAvailabilityResponse>,
}

impl From<&PremiseCapacityForDay> for CapacityDayResponse {
    fn from(day: &PremiseCapacityForDay) -> Self {
        Self {
            date: day.day(),
            total_bed_count: day.total_bed_count(),
            available_bed_count: day.available_bed_count(),
            out_of_service_bed_count: day.out_of_service_bed_count(),
            booking_count: day.booking_count(),
            vacant_bed_count: day.vacant_bed_count(),
            characteristic_availability: day
                .characteristic_availability()
                .iter()
                .map(|availability| CharacteristicAvailabilityResponse {
                    characteristic: availability.tag().value().to_string(),
                    total_bed_count: availability.total_bed_count(),
                    available_bed_count: availability.available_bed_count(),
                })
                .collect(),
        }
    }
}

/// Response for a premises capacity request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremisesCapacityResponse {
    /// The premises.
    pub premises_id: String,
    /// The premises' name.
    pub premises_name: String,
    /// First day covered.
    pub start_date: Date,
    /// Last day covered.
    pub end_date: Date,
    /// One entry per day, in order.
    pub days: Vec<CapacityDayResponse>,
}

/// Request for occupancy across every premises.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalOccupancyRequest {
    /// First day (inclusive).
    pub start_date: Date,
    /// Last day (inclusive).
    pub end_date: Date,
    /// Characteristics a placement needs, most important first.
    #[serde(default)]
    pub characteristics: Vec<String>,
}

/// One premises' reduced counts for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyDayResponse {
    /// The day.
    pub date: Date,
    /// What the counts describe.
    pub basis: CapacityBasis,
    /// Beds counted.
    pub total_bed_count: u32,
    /// Counted beds in service.
    pub available_bed_count: u32,
    /// Bookings occupying the day.
    pub booking_count: u32,
    /// Available beds less bookings; negative when overbooked, absent
    /// when no bed matches.
    pub vacant_bed_count: Option<i64>,
}

impl From<&DayOccupancy> for OccupancyDayResponse {
    fn from(day: &DayOccupancy) -> Self {
        Self {
            date: day.day,
            basis: day.basis.clone(),
            total_bed_count: day.total_bed_count,
            available_bed_count: day.available_bed_count,
            booking_count: day.booking_count,
            vacant_bed_count: day.vacant_bed_count(),
        }
    }
}

/// One premises' occupancy across the requested range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremisesOccupancyResponse {
    /// The premises.
    pub premises_id: String,
    /// The premises' name.
    pub premises_name: String,
    /// One entry per day, in order.
    pub days: Vec<OccupancyDayResponse>,
}

/// A premises left out of a national summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedPremises {
    /// The premises.
    pub premises_id: String,
    /// Why it was left out.
    pub reason: String,
}

/// Response for a national occupancy request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalOccupancyResponse {
    /// First day covered.
    pub start_date: Date,
    /// Last day covered.
    pub end_date: Date,
    /// The requested characteristics, repeats removed.
    pub characteristics: Vec<String>,
    /// One entry per premises, ordered by premises identifier.
    pub premises: Vec<PremisesOccupancyResponse>,
    /// Premises whose records could not be read.
    pub skipped: Vec<SkippedPremises>,
}

/// A booking and its lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatusEntry {
    /// The booking.
    pub booking_id: String,
    /// First day the booking counts against.
    pub canonical_arrival_date: Date,
    /// Last day the booking counts against.
    pub canonical_departure_date: Date,
    /// The classification.
    pub outcome: BookingStatusOutcome,
}

impl BookingStatusEntry {
    /// Creates an entry for `booking` with an already derived outcome.
    #[must_use]
    pub fn new(booking: &SpaceBooking, outcome: BookingStatusOutcome) -> Self {
        Self {
            booking_id: booking.booking_id.value().to_string(),
            canonical_arrival_date: booking.canonical_stay.start(),
            canonical_departure_date: booking.canonical_stay.end(),
            outcome,
        }
    }
}

/// Response for a booking status request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatusesResponse {
    /// The premises.
    pub premises_id: String,
    /// The calendar day statuses were derived for.
    pub today: Date,
    /// Bookings ordered by canonical arrival, then identifier.
    pub bookings: Vec<BookingStatusEntry>,
}

/// An out-of-service period shown on a day summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOutOfServiceBedResponse {
    /// The affected bed.
    pub bed_id: String,
    /// First day out of service.
    pub start_date: Date,
    /// Last day out of service.
    pub end_date: Date,
}

impl From<&OutOfServiceBed> for DayOutOfServiceBedResponse {
    fn from(record: &OutOfServiceBed) -> Self {
        Self {
            bed_id: record.bed_id.value().to_string(),
            start_date: record.range.start(),
            end_date: record.range.end(),
        }
    }
}

/// Response for a premises day summary request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremisesDaySummaryResponse {
    /// The premises.
    pub premises_id: String,
    /// The day summarized.
    pub for_date: Date,
    /// The day before.
    pub previous_date: Date,
    /// The day after.
    pub next_date: Date,
    /// The day's capacity.
    pub capacity: CapacityDayResponse,
    /// Bookings occupying the day, with their status as of today.
    pub bookings: Vec<BookingStatusEntry>,
    /// Beds out of service on the day.
    pub out_of_service_beds: Vec<DayOutOfServiceBedResponse>,
}

/// Which premises summary shape to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SummaryShape {
    /// Counts for today plus overbooking across the horizon.
    Full,
    /// Identity only.
    Basic,
    /// Identity, size and characteristics.
    SearchResult,
}

/// A premises summarized in one of several shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "camelCase")]
pub enum PremisesSummary {
    /// The full view.
    #[serde(rename_all = "camelCase")]
    Full {
        /// The premises.
        premises_id: String,
        /// The premises' name.
        name: String,
        /// Beds in the premises.
        bed_count: u32,
        /// Beds in service today.
        available_bed_count_today: u32,
        /// Beds out of service today.
        out_of_service_bed_count_today: u32,
        /// Overbooked stretches from today to the end of the horizon.
        overbooking_ranges: Vec<DateRange>,
    },
    /// The basic view.
    #[serde(rename_all = "camelCase")]
    Basic {
        /// The premises.
        premises_id: String,
        /// The premises' name.
        name: String,
    },
    /// The view used by premises search.
    #[serde(rename_all = "camelCase")]
    SearchResult {
        /// The premises.
        premises_id: String,
        /// The premises' name.
        name: String,
        /// Beds in the premises.
        bed_count: u32,
        /// Characteristics carried by at least one bed, in order.
        characteristics: Vec<String>,
    },
}

impl PremisesSummary {
    /// Returns the summarized premises' identifier.
    #[must_use]
    pub fn premises_id(&self) -> &str {
        match self {
            Self::Full { premises_id, .. }
            | Self::Basic { premises_id, .. }
            | Self::SearchResult { premises_id, .. } => premises_id,
        }
    }

    /// Returns the shape of this summary.
    #[must_use]
    pub const fn shape(&self) -> SummaryShape {
        match self {
            Self::Full { .. } => SummaryShape::Full,
            Self::Basic { .. } => SummaryShape::Basic,
            Self::SearchResult { .. } => SummaryShape::SearchResult,
        }
    }
}

/// Request to find premises able to take a placement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremisesSearchRequest {
    /// Characteristics a single bed must carry together.
    #[serde(default)]
    pub characteristics: Vec<String>,
}
