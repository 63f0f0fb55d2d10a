// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read operations over a premises repository.
//!
//! Every operation validates its raw input, loads what it needs from the
//! repository, hands the records to the pure calculations in
//! `ap-capacity` and shapes the result for callers.

use crate::config::ReportingConfig;
use crate::error::{ApiError, ApiResult};
use crate::repository::{Premises, PremisesRepository};
use crate::request_response::{
    BookingStatusEntry, BookingStatusesResponse, CapacityDayResponse, DayOutOfServiceBedResponse,
    NationalOccupancyRequest, NationalOccupancyResponse, OccupancyDayResponse,
    PremisesCapacityRequest, PremisesCapacityResponse, PremisesDaySummaryResponse,
    PremisesOccupancyResponse, PremisesSearchRequest, PremisesSummary, SkippedPremises,
    SummaryShape,
};
use ap_capacity::{
    OutOfServiceIndex, PremiseCapacity, PremiseCapacityForDay, PremiseOccupancy,
    PremisesDaySummary, assemble_premises_day, bookings_active_on, calculate_premise_capacity,
    distinct_characteristics, out_of_service_beds_on, overbooking_ranges, summarize_premise_occupancy,
};
use ap_capacity_domain::{
    BookingStatusOutcome, CharacteristicTag, DateRange, DomainError, OutOfServiceBed, PremisesId,
    SpaceBooking, calendar_day_in_zone, classify_booking_status_on,
};
use time::{Date, Duration, OffsetDateTime};
use tracing::{debug, info, warn};

/// Loads a premises or reports it missing.
fn load_premises<R: PremisesRepository>(
    repository: &R,
    premises_id: &PremisesId,
) -> ApiResult<Premises> {
    repository
        .find_premises(premises_id)?
        .ok_or_else(|| ApiError::PremisesNotFound {
            premises_id: premises_id.value().to_string(),
        })
}

/// Parses requested characteristics in order.
fn parse_characteristics(values: &[String]) -> ApiResult<Vec<CharacteristicTag>> {
    values
        .iter()
        .map(|value| CharacteristicTag::new(value).map_err(ApiError::from))
        .collect()
}

/// Logs out-of-service records that name beds the premises does not have.
fn warn_unknown_beds(premises: &Premises, records: &[OutOfServiceBed]) {
    let index: OutOfServiceIndex<'_> = OutOfServiceIndex::new(records);
    for bed_id in index.unknown_beds(&premises.inventory) {
        warn!(
            premises_id = %premises.premises_id(),
            bed_id = %bed_id,
            "Ignoring out-of-service record for a bed not in the premises"
        );
    }
}

/// Loads a premises' records for `range` and calculates its capacity.
fn premises_capacity<R: PremisesRepository>(
    repository: &R,
    premises: &Premises,
    range: DateRange,
) -> ApiResult<(PremiseCapacity, Vec<OutOfServiceBed>, Vec<SpaceBooking>)> {
    let premises_id: &PremisesId = premises.premises_id();
    let out_of_service: Vec<OutOfServiceBed> =
        repository.out_of_service_beds(premises_id, range)?;
    let bookings: Vec<SpaceBooking> = repository.space_bookings(premises_id, range)?;

    warn_unknown_beds(premises, &out_of_service);

    let capacity: PremiseCapacity =
        calculate_premise_capacity(&premises.inventory, range, &out_of_service, &bookings);

    debug!(
        premises_id = %premises_id,
        range = %range,
        beds = premises.inventory.bed_count(),
        out_of_service_records = out_of_service.len(),
        bookings = bookings.len(),
        "Calculated premises capacity"
    );

    Ok((capacity, out_of_service, bookings))
}

/// Classifies one booking as of `today`, logging contradictory records.
fn booking_status_entry(booking: &SpaceBooking, today: Date) -> BookingStatusEntry {
    let outcome: BookingStatusOutcome = classify_booking_status_on(&booking.dates, today);
    if let BookingStatusOutcome::Indeterminate { reason } = outcome {
        warn!(
            booking_id = %booking.booking_id,
            ?reason,
            "Booking status is indeterminate"
        );
    }
    BookingStatusEntry::new(booking, outcome)
}

fn shift_days(day: Date, days: i64) -> ApiResult<Date> {
    day.checked_add(Duration::days(days)).ok_or_else(|| {
        DomainError::DateArithmeticOverflow {
            operation: format!("moving {day} by {days} days"),
        }
        .into()
    })
}

/// Calculates one premises' capacity across a date range.
///
/// # Arguments
///
/// * `repository` - Source of premises records
/// * `request` - The premises and range
///
/// # Returns
///
/// One capacity entry per day of the range, in order.
///
/// # Errors
///
/// Returns an error if:
/// - The premises identifier or range is malformed
/// - The premises does not exist
/// - The repository cannot be read
pub fn get_premises_capacity<R: PremisesRepository>(
    repository: &R,
    request: &PremisesCapacityRequest,
) -> ApiResult<PremisesCapacityResponse> {
    info!(
        premises_id = %request.premises_id,
        start_date = %request.start_date,
        end_date = %request.end_date,
        "Handling get_premises_capacity request"
    );

    let premises_id: PremisesId = PremisesId::new(&request.premises_id)?;
    let range: DateRange = DateRange::new(request.start_date, request.end_date)?;
    let premises: Premises = load_premises(repository, &premises_id)?;

    let (capacity, _, _) = premises_capacity(repository, &premises, range)?;

    Ok(PremisesCapacityResponse {
        premises_id: premises_id.value().to_string(),
        premises_name: premises.name,
        start_date: range.start(),
        end_date: range.end(),
        days: capacity
            .by_day()
            .iter()
            .map(CapacityDayResponse::from)
            .collect(),
    })
}

/// Summarizes occupancy across every premises.
///
/// Each premises is reduced against the same requested characteristics.
/// A premises whose records cannot be read is reported in `skipped` and
/// does not affect the others.
///
/// # Errors
///
/// Returns an error if:
/// - The range or a characteristic is malformed
/// - The list of premises cannot be read
pub fn get_national_occupancy<R: PremisesRepository>(
    repository: &R,
    request: &NationalOccupancyRequest,
) -> ApiResult<NationalOccupancyResponse> {
    info!(
        start_date = %request.start_date,
        end_date = %request.end_date,
        characteristics = ?request.characteristics,
        "Handling get_national_occupancy request"
    );

    let range: DateRange = DateRange::new(request.start_date, request.end_date)?;
    let requested: Vec<CharacteristicTag> = parse_characteristics(&request.characteristics)?;

    let mut premises_occupancy: Vec<PremisesOccupancyResponse> = Vec::new();
    let mut skipped: Vec<SkippedPremises> = Vec::new();

    for premises in repository.list_premises()? {
        match premises_capacity(repository, &premises, range) {
            Ok((capacity, _, _)) => {
                let occupancy: PremiseOccupancy = summarize_premise_occupancy(&requested, &capacity);
                premises_occupancy.push(PremisesOccupancyResponse {
                    premises_id: occupancy.premises_id.value().to_string(),
                    premises_name: premises.name,
                    days: occupancy
                        .by_day
                        .iter()
                        .map(OccupancyDayResponse::from)
                        .collect(),
                });
            }
            Err(err) => {
                warn!(
                    premises_id = %premises.premises_id(),
                    error = %err,
                    "Skipping premises in national occupancy"
                );
                skipped.push(SkippedPremises {
                    premises_id: premises.premises_id().value().to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }

    debug!(
        premises = premises_occupancy.len(),
        skipped = skipped.len(),
        "Summarized national occupancy"
    );

    Ok(NationalOccupancyResponse {
        start_date: range.start(),
        end_date: range.end(),
        characteristics: distinct_characteristics(&requested)
            .into_iter()
            .map(|tag| tag.value().to_string())
            .collect(),
        premises: premises_occupancy,
        skipped,
    })
}

/// Derives the lifecycle status of a premises' current bookings.
///
/// Bookings whose canonical stay falls within the summary horizon either
/// side of today are considered. A booking whose records contradict each
/// other is reported as indeterminate without affecting the others.
///
/// # Arguments
///
/// * `repository` - Source of premises records
/// * `config` - Supplies the reporting zone and horizon
/// * `premises_id` - The premises
/// * `now` - The current instant
///
/// # Errors
///
/// Returns an error if:
/// - The premises identifier is malformed or unknown
/// - `now` cannot be placed on a calendar day
/// - The repository cannot be read
pub fn get_booking_statuses<R: PremisesRepository>(
    repository: &R,
    config: &ReportingConfig,
    premises_id: &str,
    now: OffsetDateTime,
) -> ApiResult<BookingStatusesResponse> {
    info!(premises_id, %now, "Handling get_booking_statuses request");

    let premises_id: PremisesId = PremisesId::new(premises_id)?;
    let premises: Premises = load_premises(repository, &premises_id)?;
    let today: Date = calendar_day_in_zone(now, config.time_zone())?;

    let horizon: i64 = i64::from(config.summary_horizon_days());
    let window: DateRange = DateRange::new(shift_days(today, -horizon)?, shift_days(today, horizon)?)?;

    let mut bookings: Vec<SpaceBooking> = repository.space_bookings(premises.premises_id(), window)?;
    bookings.sort_by(|a, b| {
        a.canonical_stay
            .start()
            .cmp(&b.canonical_stay.start())
            .then_with(|| a.booking_id.cmp(&b.booking_id))
    });

    let entries: Vec<BookingStatusEntry> = bookings
        .iter()
        .map(|booking| booking_status_entry(booking, today))
        .collect();

    debug!(
        premises_id = %premises_id,
        %today,
        bookings = entries.len(),
        "Classified bookings"
    );

    Ok(BookingStatusesResponse {
        premises_id: premises_id.value().to_string(),
        today,
        bookings: entries,
    })
}

/// Assembles everything happening at a premises on one day.
///
/// Booking statuses are derived as of the calendar day `now` falls on,
/// which need not be `day`.
///
/// # Errors
///
/// Returns an error if:
/// - The premises identifier is malformed or unknown
/// - `now` cannot be placed on a calendar day
/// - `day` has no representable neighbour
/// - The repository cannot be read
pub fn get_premises_day_summary<R: PremisesRepository>(
    repository: &R,
    config: &ReportingConfig,
    premises_id: &str,
    day: Date,
    now: OffsetDateTime,
) -> ApiResult<PremisesDaySummaryResponse> {
    info!(premises_id, %day, %now, "Handling get_premises_day_summary request");

    let premises_id: PremisesId = PremisesId::new(premises_id)?;
    let premises: Premises = load_premises(repository, &premises_id)?;
    let today: Date = calendar_day_in_zone(now, config.time_zone())?;

    let (capacity, out_of_service, bookings) =
        premises_capacity(repository, &premises, DateRange::single_day(day))?;
    let capacity_for_day: PremiseCapacityForDay =
        capacity.day(day).cloned().ok_or_else(|| DomainError::DayMismatch {
            expected: day,
            actual: capacity.range().start(),
        })?;

    let active_bookings: Vec<BookingStatusEntry> = bookings_active_on(day, &bookings)
        .map(|booking| booking_status_entry(booking, today))
        .collect();
    let out_of_service_beds: Vec<DayOutOfServiceBedResponse> =
        out_of_service_beds_on(day, &out_of_service)
            .filter(|record| premises.inventory.has_bed(&record.bed_id))
            .map(DayOutOfServiceBedResponse::from)
            .collect();

    let summary: PremisesDaySummary<BookingStatusEntry, DayOutOfServiceBedResponse> =
        assemble_premises_day(day, capacity_for_day, active_bookings, out_of_service_beds)?;

    Ok(PremisesDaySummaryResponse {
        premises_id: premises_id.value().to_string(),
        for_date: summary.for_date(),
        previous_date: summary.previous_date(),
        next_date: summary.next_date(),
        capacity: CapacityDayResponse::from(summary.capacity()),
        bookings: summary.active_bookings().to_vec(),
        out_of_service_beds: summary.out_of_service_beds().to_vec(),
    })
}

fn search_result(premises: Premises) -> PremisesSummary {
    PremisesSummary::SearchResult {
        premises_id: premises.premises_id().value().to_string(),
        bed_count: premises.inventory.bed_count(),
        characteristics: premises
            .inventory
            .characteristics()
            .into_iter()
            .map(String::from)
            .collect(),
        name: premises.name,
    }
}

fn summarize_premises<R: PremisesRepository>(
    repository: &R,
    config: &ReportingConfig,
    premises: Premises,
    shape: SummaryShape,
    now: OffsetDateTime,
) -> ApiResult<PremisesSummary> {
    let premises_id: String = premises.premises_id().value().to_string();
    match shape {
        SummaryShape::Basic => Ok(PremisesSummary::Basic {
            premises_id,
            name: premises.name,
        }),
        SummaryShape::SearchResult => Ok(search_result(premises)),
        SummaryShape::Full => {
            let today: Date = calendar_day_in_zone(now, config.time_zone())?;
            let last_day: Date =
                shift_days(today, i64::from(config.summary_horizon_days()) - 1)?;
            let horizon: DateRange = DateRange::new(today, last_day)?;

            let (capacity, _, _) = premises_capacity(repository, &premises, horizon)?;
            let (available_today, out_of_service_today) = capacity
                .day(today)
                .map_or((0, 0), |day| {
                    (day.available_bed_count(), day.out_of_service_bed_count())
                });

            Ok(PremisesSummary::Full {
                premises_id,
                bed_count: premises.inventory.bed_count(),
                available_bed_count_today: available_today,
                out_of_service_bed_count_today: out_of_service_today,
                overbooking_ranges: overbooking_ranges(&capacity),
                name: premises.name,
            })
        }
    }
}

/// Summarizes one premises in the requested shape.
///
/// The full shape reports today's counts and the overbooked stretches from
/// today to the end of the configured horizon.
///
/// # Errors
///
/// Returns an error if:
/// - The premises identifier is malformed or unknown
/// - `now` cannot be placed on a calendar day
/// - The repository cannot be read
pub fn get_premises_summary<R: PremisesRepository>(
    repository: &R,
    config: &ReportingConfig,
    premises_id: &str,
    shape: SummaryShape,
    now: OffsetDateTime,
) -> ApiResult<PremisesSummary> {
    info!(premises_id, ?shape, %now, "Handling get_premises_summary request");

    let premises_id: PremisesId = PremisesId::new(premises_id)?;
    let premises: Premises = load_premises(repository, &premises_id)?;
    summarize_premises(repository, config, premises, shape, now)
}

/// Finds premises with at least one bed carrying every requested characteristic.
///
/// With no characteristics requested every premises matches. Results use
/// the search result shape, ordered by premises identifier.
///
/// # Errors
///
/// Returns an error if a characteristic is malformed or the repository
/// cannot be read.
pub fn search_premises<R: PremisesRepository>(
    repository: &R,
    request: &PremisesSearchRequest,
) -> ApiResult<Vec<PremisesSummary>> {
    info!(characteristics = ?request.characteristics, "Handling search_premises request");

    let requested: Vec<CharacteristicTag> = parse_characteristics(&request.characteristics)?;

    let results: Vec<PremisesSummary> = repository
        .list_premises()?
        .into_iter()
        .filter(|premises| {
            requested.is_empty()
                || premises
                    .inventory
                    .beds()
                    .iter()
                    .any(|bed| requested.iter().all(|tag| bed.has_characteristic(tag)))
        })
        .map(search_result)
        .collect();

    debug!(matches = results.len(), "Searched premises");
    Ok(results)
}
