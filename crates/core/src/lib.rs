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

mod capacity;
mod characteristic_availability;
mod day_summary;
mod error;
mod occupancy;
mod out_of_service;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use capacity::{PremiseCapacity, PremiseCapacityForDay, calculate_premise_capacity};
pub use characteristic_availability::{
    PremiseCharacteristicAvailability, calculate_characteristic_availability,
};
pub use day_summary::{
    PremisesDaySummary, assemble_premises_day, bookings_active_on, out_of_service_beds_on,
};
pub use error::CoreError;
pub use occupancy::{
    CapacityBasis, DayOccupancy, PremiseOccupancy, distinct_characteristics, overbooking_ranges,
    reduce_day_capacity, summarize_national_occupancy, summarize_premise_occupancy,
};
pub use out_of_service::OutOfServiceIndex;
