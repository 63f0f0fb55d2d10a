// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod config;
mod error;
mod handlers;
mod repository;
mod request_response;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use config::{DEFAULT_SUMMARY_HORIZON_DAYS, DEFAULT_TIME_ZONE, ReportingConfig};
pub use error::{ApiError, ApiResult, RepositoryError, translate_core_error, translate_domain_error};
pub use handlers::{
    get_booking_statuses, get_national_occupancy, get_premises_capacity, get_premises_day_summary,
    get_premises_summary, search_premises,
};
pub use repository::{InMemoryPremisesRepository, Premises, PremisesRepository};
pub use request_response::{
    BookingStatusEntry, BookingStatusesResponse, CapacityDayResponse,
    CharacteristicAvailabilityResponse, DayOutOfServiceBedResponse, NationalOccupancyRequest,
    NationalOccupancyResponse, OccupancyDayResponse, PremisesCapacityRequest,
    PremisesCapacityResponse, PremisesDaySummaryResponse, PremisesOccupancyResponse,
    PremisesSearchRequest, PremisesSummary, SkippedPremises, SummaryShape,
};
