// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use ap_capacity_domain::{
    Bed, BedId, BookingId, CharacteristicTag, DateRange, OutOfServiceBed, PremisesBedInventory,
    PremisesId, SpaceBooking, SpaceBookingDates,
};
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

use crate::{
    InMemoryPremisesRepository, Premises, PremisesRepository, ReportingConfig, RepositoryError,
};

/// 2026-03-10 at noon, GMT in London.
pub const NOW: OffsetDateTime = datetime!(2026-03-10 12:00 UTC);

pub fn premises_id(value: &str) -> PremisesId {
    PremisesId::new(value).unwrap()
}

pub fn create_bed(id: &str, tags: &[&str]) -> Bed {
    Bed::new(
        BedId::new(id).unwrap(),
        tags.iter().map(|t| CharacteristicTag::new(t).unwrap()),
    )
}

pub fn create_premises(id: &str, name: &str, beds: Vec<Bed>) -> Premises {
    Premises {
        name: name.to_string(),
        inventory: PremisesBedInventory::new(premises_id(id), beds).unwrap(),
    }
}

pub fn create_out_of_service(bed_id: &str, start: Date, end: Date, cancelled: bool) -> OutOfServiceBed {
    OutOfServiceBed::new(BedId::new(bed_id).unwrap(), start, end, cancelled).unwrap()
}

pub fn create_booking(id: &str, arrival: Date, departure: Date) -> SpaceBooking {
    create_booking_with(id, arrival, departure, SpaceBookingDates::expected(arrival, departure))
}

pub fn create_booking_with(
    id: &str,
    arrival: Date,
    departure: Date,
    dates: SpaceBookingDates,
) -> SpaceBooking {
    SpaceBooking::new(BookingId::new(id).unwrap(), arrival, departure, dates).unwrap()
}

pub fn create_utc_config(horizon_days: u16) -> ReportingConfig {
    ReportingConfig::new("UTC", horizon_days).unwrap()
}

/// Two premises.
///
/// ap-north "Northgate House", four beds:
/// - bed-1: isSingle, hasEnSuite (out of service 03-10..=03-12)
/// - bed-2: isSingle (cancelled out-of-service record)
/// - bed-3: isSingle, isWheelchairDesignated
/// - bed-4: hasEnSuite
///
/// plus an out-of-service record for bed-9, which it does not have.
///
/// Bookings, in insertion order:
/// - b-arrived 03-05..=03-15, arrived 03-05
/// - b-today 03-10..=03-20
/// - b-future 03-12..=03-30
/// - b-bad 03-01..=03-09, departure recorded before arrival
///
/// ap-south "Southview", two beds:
/// - bed-1: isSingle
/// - bed-2: (none)
///
/// Bookings: b-s1 and b-s2 03-10..=03-11, b-s3 03-11..=03-11, so 03-11 is
/// overbooked by one.
pub fn create_test_repository() -> InMemoryPremisesRepository {
    let mut repository = InMemoryPremisesRepository::new();
    let north = premises_id("ap-north");
    let south = premises_id("ap-south");

    repository
        .insert_premises(create_premises(
            "ap-north",
            "Northgate House",
            vec![
                create_bed("bed-1", &["isSingle", "hasEnSuite"]),
                create_bed("bed-2", &["isSingle"]),
                create_bed("bed-3", &["isSingle", "isWheelchairDesignated"]),
                create_bed("bed-4", &["hasEnSuite"]),
            ],
        ))
        .unwrap();
    repository
        .insert_premises(create_premises(
            "ap-south",
            "Southview",
            vec![create_bed("bed-1", &["isSingle"]), create_bed("bed-2", &[])],
        ))
        .unwrap();

    for record in [
        create_out_of_service("bed-1", date!(2026 - 03 - 10), date!(2026 - 03 - 12), false),
        create_out_of_service("bed-2", date!(2026 - 03 - 10), date!(2026 - 03 - 20), true),
        create_out_of_service("bed-9", date!(2026 - 03 - 10), date!(2026 - 03 - 11), false),
    ] {
        repository.add_out_of_service_bed(&north, record).unwrap();
    }

    let arrived = SpaceBookingDates {
        actual_arrival: Some(datetime!(2026-03-05 14:00 UTC)),
        ..SpaceBookingDates::expected(date!(2026 - 03 - 05), date!(2026 - 03 - 15))
    };
    let contradictory = SpaceBookingDates {
        actual_arrival: Some(datetime!(2026-03-05 14:00 UTC)),
        actual_departure: Some(datetime!(2026-03-03 10:00 UTC)),
        ..SpaceBookingDates::expected(date!(2026 - 03 - 01), date!(2026 - 03 - 09))
    };
    for booking in [
        create_booking_with("b-arrived", date!(2026 - 03 - 05), date!(2026 - 03 - 15), arrived),
        create_booking("b-today", date!(2026 - 03 - 10), date!(2026 - 03 - 20)),
        create_booking("b-future", date!(2026 - 03 - 12), date!(2026 - 03 - 30)),
        create_booking_with("b-bad", date!(2026 - 03 - 01), date!(2026 - 03 - 09), contradictory),
    ] {
        repository.add_booking(&north, booking).unwrap();
    }

    for booking in [
        create_booking("b-s1", date!(2026 - 03 - 10), date!(2026 - 03 - 11)),
        create_booking("b-s2", date!(2026 - 03 - 10), date!(2026 - 03 - 11)),
        create_booking("b-s3", date!(2026 - 03 - 11), date!(2026 - 03 - 11)),
    ] {
        repository.add_booking(&south, booking).unwrap();
    }

    repository
}

/// Wraps a repository and fails every record read for one premises.
pub struct FailingRepository {
    pub inner: InMemoryPremisesRepository,
    pub failing: PremisesId,
}

impl FailingRepository {
    fn check(&self, premises_id: &PremisesId) -> Result<(), RepositoryError> {
        if premises_id == &self.failing {
            return Err(RepositoryError::Unavailable {
                message: format!("records for {premises_id} are locked"),
            });
        }
        Ok(())
    }
}

impl PremisesRepository for FailingRepository {
    fn list_premises(&self) -> Result<Vec<Premises>, RepositoryError> {
        self.inner.list_premises()
    }

    fn find_premises(&self, premises_id: &PremisesId) -> Result<Option<Premises>, RepositoryError> {
        self.inner.find_premises(premises_id)
    }

    fn out_of_service_beds(
        &self,
        premises_id: &PremisesId,
        range: DateRange,
    ) -> Result<Vec<OutOfServiceBed>, RepositoryError> {
        self.check(premises_id)?;
        self.inner.out_of_service_beds(premises_id, range)
    }

    fn space_bookings(
        &self,
        premises_id: &PremisesId,
        range: DateRange,
    ) -> Result<Vec<SpaceBooking>, RepositoryError> {
        self.check(premises_id)?;
        self.inner.space_bookings(premises_id, range)
    }
}
