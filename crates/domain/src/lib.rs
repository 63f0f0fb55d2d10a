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

mod booking_status;
mod calendar;
mod date_range;
mod error;
mod types;

#[cfg(test)]
mod tests;

pub use booking_status::{
    BookingLifecycleStatus, BookingStatusOutcome, IndeterminateReason, SIX_WEEKS_DAYS,
    SpaceBookingDates, TWO_WEEKS_DAYS, classify_booking_status, classify_booking_status_on,
};
pub use calendar::calendar_day_in_zone;
pub use date_range::{DateRange, Days};
pub use error::DomainError;
pub use types::{
    Bed, BedId, BookingId, CharacteristicTag, OutOfServiceBed, PremisesBedInventory, PremisesId,
    SpaceBooking,
};
