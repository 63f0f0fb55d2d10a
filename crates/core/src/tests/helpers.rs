// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ap_capacity_domain::{
    Bed, BedId, BookingId, CharacteristicTag, DateRange, OutOfServiceBed, PremisesBedInventory,
    PremisesId, SpaceBooking, SpaceBookingDates,
};
use time::Date;

pub fn create_tag(value: &str) -> CharacteristicTag {
    CharacteristicTag::new(value).unwrap()
}

pub fn create_bed(id: &str, tags: &[&str]) -> Bed {
    Bed::new(
        BedId::new(id).unwrap(),
        tags.iter().map(|t| create_tag(t)),
    )
}

/// Five beds:
/// - bed-1: isSingle, hasEnSuite
/// - bed-2: isSingle
/// - bed-3: isSingle, isWheelchairDesignated
/// - bed-4: hasEnSuite
/// - bed-5: (none)
pub fn create_test_inventory() -> PremisesBedInventory {
    PremisesBedInventory::new(
        PremisesId::new("ap-north").unwrap(),
        vec![
            create_bed("bed-1", &["isSingle", "hasEnSuite"]),
            create_bed("bed-2", &["isSingle"]),
            create_bed("bed-3", &["isSingle", "isWheelchairDesignated"]),
            create_bed("bed-4", &["hasEnSuite"]),
            create_bed("bed-5", &[]),
        ],
    )
    .unwrap()
}

pub fn create_range(start: Date, end: Date) -> DateRange {
    DateRange::new(start, end).unwrap()
}

pub fn create_out_of_service(bed_id: &str, start: Date, end: Date) -> OutOfServiceBed {
    OutOfServiceBed::new(BedId::new(bed_id).unwrap(), start, end, false).unwrap()
}

pub fn create_booking(id: &str, arrival: Date, departure: Date) -> SpaceBooking {
    SpaceBooking::new(
        BookingId::new(id).unwrap(),
        arrival,
        departure,
        SpaceBookingDates::expected(arrival, departure),
    )
    .unwrap()
}
