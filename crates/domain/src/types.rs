// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking_status::SpaceBookingDates;
use crate::date_range::DateRange;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use time::Date;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier.
            ///
            /// Surrounding whitespace is trimmed.
            ///
            /// # Errors
            ///
            /// Returns `DomainError::InvalidIdentifier` if the value is empty.
            pub fn new(value: &str) -> Result<Self, DomainError> {
                let trimmed: &str = value.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::InvalidIdentifier {
                        kind: $kind,
                        reason: String::from("identifier must not be empty"),
                    });
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Returns the identifier value.
            #[must_use]
            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(&value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

identifier!(
    /// Identifies a premises.
    PremisesId,
    "premises"
);
identifier!(
    /// Identifies a bed within a premises.
    BedId,
    "bed"
);
identifier!(
    /// Identifies a space booking.
    BookingId,
    "booking"
);

/// An attribute of a bed or room, such as "has en-suite".
///
/// The vocabulary is defined elsewhere; tags are compared by exact value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacteristicTag(String);

impl CharacteristicTag {
    /// Creates a new characteristic tag.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCharacteristicTag` if the tag is blank.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::InvalidCharacteristicTag(String::from(
                "tag must not be empty",
            )));
        }
        Ok(Self(value.trim().to_string()))
    }

    /// Returns the tag value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CharacteristicTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CharacteristicTag {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CharacteristicTag> for String {
    fn from(tag: CharacteristicTag) -> Self {
        tag.0
    }
}

/// A single bed and the characteristics it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bed {
    /// The bed identifier.
    pub bed_id: BedId,
    /// Characteristics of the bed and of the room it is in.
    pub characteristics: BTreeSet<CharacteristicTag>,
}

impl Bed {
    /// Creates a new `Bed`.
    #[must_use]
    pub fn new<I>(bed_id: BedId, characteristics: I) -> Self
    where
        I: IntoIterator<Item = CharacteristicTag>,
    {
        Self {
            bed_id,
            characteristics: characteristics.into_iter().collect(),
        }
    }

    /// Returns true if the bed carries the characteristic.
    #[must_use]
    pub fn has_characteristic(&self, tag: &CharacteristicTag) -> bool {
        self.characteristics.contains(tag)
    }
}

/// The beds of one premises.
///
/// Bed count is assumed stable for any range the inventory is used with.
///
/// ## Invariants
///
/// - Each bed appears at most once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PremisesBedInventory {
    premises_id: PremisesId,
    beds: Vec<Bed>,
}

impl PremisesBedInventory {
    /// Creates a new `PremisesBedInventory`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateBed` if a bed identifier repeats.
    pub fn new(premises_id: PremisesId, beds: Vec<Bed>) -> Result<Self, DomainError> {
        let mut seen: HashSet<&BedId> = HashSet::with_capacity(beds.len());
        for bed in &beds {
            if !seen.insert(&bed.bed_id) {
                return Err(DomainError::DuplicateBed {
                    premises_id: premises_id.value().to_string(),
                    bed_id: bed.bed_id.value().to_string(),
                });
            }
        }
        Ok(Self { premises_id, beds })
    }

    /// Returns the premises identifier.
    #[must_use]
    pub const fn premises_id(&self) -> &PremisesId {
        &self.premises_id
    }

    /// Returns the beds.
    #[must_use]
    pub fn beds(&self) -> &[Bed] {
        &self.beds
    }

    /// Returns the total number of beds.
    #[must_use]
    pub fn bed_count(&self) -> u32 {
        u32::try_from(self.beds.len()).unwrap_or(u32::MAX)
    }

    /// Returns true if the inventory holds the bed.
    #[must_use]
    pub fn has_bed(&self, bed_id: &BedId) -> bool {
        self.beds.iter().any(|bed| &bed.bed_id == bed_id)
    }

    /// Returns every characteristic carried by at least one bed, in order.
    #[must_use]
    pub fn characteristics(&self) -> BTreeSet<CharacteristicTag> {
        self.beds
            .iter()
            .flat_map(|bed| bed.characteristics.iter().cloned())
            .collect()
    }
}

/// A period during which one bed cannot be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfServiceBed {
    /// The affected bed.
    pub bed_id: BedId,
    /// The days the bed is out of service (inclusive).
    pub range: DateRange,
    /// Cancelled records no longer take the bed out of service.
    pub cancelled: bool,
}

impl OutOfServiceBed {
    /// Creates a new `OutOfServiceBed`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` if `end_date` is before `start_date`.
    pub fn new(
        bed_id: BedId,
        start_date: Date,
        end_date: Date,
        cancelled: bool,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            bed_id,
            range: DateRange::new(start_date, end_date)?,
            cancelled,
        })
    }

    /// Returns true if this record takes its bed out of service on `day`.
    #[must_use]
    pub fn is_active_on(&self, day: Date) -> bool {
        !self.cancelled && self.range.contains(day)
    }
}

/// A booking of a space in a premises.
///
/// The canonical stay decides which days the booking counts against;
/// the expected and actual milestones decide its lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceBooking {
    /// The booking identifier.
    pub booking_id: BookingId,
    /// Canonical arrival through canonical departure, inclusive.
    pub canonical_stay: DateRange,
    /// Planned and recorded milestones.
    pub dates: SpaceBookingDates,
}

impl SpaceBooking {
    /// Creates a new `SpaceBooking`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` if the canonical departure
    /// date is before the canonical arrival date.
    pub fn new(
        booking_id: BookingId,
        canonical_arrival_date: Date,
        canonical_departure_date: Date,
        dates: SpaceBookingDates,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            booking_id,
            canonical_stay: DateRange::new(canonical_arrival_date, canonical_departure_date)?,
            dates,
        })
    }

    /// Returns true if the canonical stay covers `day`.
    #[must_use]
    pub fn is_active_on(&self, day: Date) -> bool {
        self.canonical_stay.contains(day)
    }
}
