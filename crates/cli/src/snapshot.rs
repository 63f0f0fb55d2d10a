// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON snapshots of premises records.
//!
//! ```json
//! {
//!   "premises": [
//!     { "premisesId": "ap-1", "name": "Northgate House",
//!       "beds": [{ "bedId": "bed-1", "characteristics": ["isSingle"] }] }
//!   ],
//!   "outOfServiceBeds": [
//!     { "premisesId": "ap-1", "bedId": "bed-1",
//!       "startDate": "2026-03-10", "endDate": "2026-03-12", "cancelled": false }
//!   ],
//!   "bookings": [
//!     { "premisesId": "ap-1", "bookingId": "b-1",
//!       "canonicalArrivalDate": "2026-03-10", "canonicalDepartureDate": "2026-03-20",
//!       "expectedArrivalDate": "2026-03-10", "expectedDepartureDate": "2026-03-20",
//!       "actualArrival": "2026-03-10T14:00:00Z" }
//!   ]
//! }
//! ```

use std::path::Path;

use ap_capacity_api::{InMemoryPremisesRepository, Premises};
use ap_capacity_domain::{
    Bed, BedId, BookingId, CharacteristicTag, OutOfServiceBed, PremisesBedInventory, PremisesId,
    SpaceBooking, SpaceBookingDates,
};
use color_eyre::{Result, eyre::WrapErr};
use serde::Deserialize;
use time::{Date, OffsetDateTime};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BedRecord {
    bed_id: String,
    #[serde(default)]
    characteristics: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PremisesRecord {
    premises_id: String,
    name: String,
    #[serde(default)]
    beds: Vec<BedRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OutOfServiceBedRecord {
    premises_id: String,
    bed_id: String,
    start_date: Date,
    end_date: Date,
    #[serde(default)]
    cancelled: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingRecord {
    premises_id: String,
    booking_id: String,
    canonical_arrival_date: Date,
    canonical_departure_date: Date,
    expected_arrival_date: Date,
    expected_departure_date: Date,
    #[serde(default, with = "time::serde::rfc3339::option")]
    actual_arrival: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    actual_departure: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    non_arrival_confirmed: Option<OffsetDateTime>,
}

/// Raw snapshot contents, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    premises: Vec<PremisesRecord>,
    #[serde(default)]
    out_of_service_beds: Vec<OutOfServiceBedRecord>,
    #[serde(default)]
    bookings: Vec<BookingRecord>,
}

impl Snapshot {
    /// Reads a snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents: String = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read snapshot {}", path.display()))?;
        Self::parse(&contents).wrap_err_with(|| format!("Invalid snapshot {}", path.display()))
    }

    /// Parses snapshot JSON.
    pub fn parse(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).wrap_err("Snapshot is not valid JSON")
    }

    /// Validates every record and loads them into a repository.
    pub fn into_repository(self) -> Result<InMemoryPremisesRepository> {
        let mut repository = InMemoryPremisesRepository::new();

        for record in self.premises {
            let premises: Premises = premises_from_record(record)?;
            repository.insert_premises(premises)?;
        }

        for record in self.out_of_service_beds {
            let premises_id: PremisesId = PremisesId::new(&record.premises_id)?;
            let out_of_service: OutOfServiceBed = OutOfServiceBed::new(
                BedId::new(&record.bed_id)?,
                record.start_date,
                record.end_date,
                record.cancelled,
            )
            .wrap_err_with(|| format!("Out-of-service record for bed {}", record.bed_id))?;
            repository.add_out_of_service_bed(&premises_id, out_of_service)?;
        }

        for record in self.bookings {
            let premises_id: PremisesId = PremisesId::new(&record.premises_id)?;
            let booking: SpaceBooking = SpaceBooking::new(
                BookingId::new(&record.booking_id)?,
                record.canonical_arrival_date,
                record.canonical_departure_date,
                SpaceBookingDates {
                    expected_arrival_date: record.expected_arrival_date,
                    expected_departure_date: record.expected_departure_date,
                    actual_arrival: record.actual_arrival,
                    actual_departure: record.actual_departure,
                    non_arrival_confirmed: record.non_arrival_confirmed,
                },
            )
            .wrap_err_with(|| format!("Booking {}", record.booking_id))?;
            repository.add_booking(&premises_id, booking)?;
        }

        Ok(repository)
    }
}

fn premises_from_record(record: PremisesRecord) -> Result<Premises> {
    let premises_id: PremisesId = PremisesId::new(&record.premises_id)?;
    let beds: Vec<Bed> = record
        .beds
        .into_iter()
        .map(|bed| {
            let characteristics: Vec<CharacteristicTag> = bed
                .characteristics
                .iter()
                .map(|tag| CharacteristicTag::new(tag))
                .collect::<Result<_, _>>()?;
            Ok(Bed::new(BedId::new(&bed.bed_id)?, characteristics))
        })
        .collect::<Result<_>>()?;

    Ok(Premises {
        name: record.name,
        inventory: PremisesBedInventory::new(premises_id, beds)?,
    })
}
