// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-characteristic bed availability for a single day.
//!
//! Availability here is physical: a bed is available unless it is out of
//! service. Bookings are demand and never reduce these counts.

use crate::out_of_service::OutOfServiceIndex;
use ap_capacity_domain::{CharacteristicTag, DomainError, PremisesBedInventory};
use serde::Serialize;
use std::collections::BTreeMap;
use time::Date;

/// Bed counts for one characteristic on one day.
///
/// ## Invariants
///
/// - `available_bed_count <= total_bed_count`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiseCharacteristicAvailability {
    tag: CharacteristicTag,
    total_bed_count: u32,
    available_bed_count: u32,
}

impl PremiseCharacteristicAvailability {
    /// Creates a new `PremiseCharacteristicAvailability`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BedCountInvariant` if more beds are available
    /// than exist.
    pub fn new(
        tag: CharacteristicTag,
        total_bed_count: u32,
        available_bed_count: u32,
    ) -> Result<Self, DomainError> {
        if available_bed_count > total_bed_count {
            return Err(DomainError::BedCountInvariant {
                subject: format!("characteristic '{tag}'"),
                total: total_bed_count,
                available: available_bed_count,
            });
        }
        Ok(Self {
            tag,
            total_bed_count,
            available_bed_count,
        })
    }

    /// Returns the characteristic.
    #[must_use]
    pub const fn tag(&self) -> &CharacteristicTag {
        &self.tag
    }

    /// Returns the number of beds carrying the characteristic.
    #[must_use]
    pub const fn total_bed_count(&self) -> u32 {
        self.total_bed_count
    }

    /// Returns how many of those beds are in service.
    #[must_use]
    pub const fn available_bed_count(&self) -> u32 {
        self.available_bed_count
    }
}

#[derive(Default)]
struct Tally {
    total: u32,
    available: u32,
}

/// Calculates per-characteristic availability for one premises on one day.
///
/// # Arguments
///
/// * `inventory` - The premises' beds
/// * `day` - The day to calculate for
/// * `out_of_service` - Out-of-service periods for the premises
///
/// # Returns
///
/// One entry per characteristic carried by at least one bed, ordered by tag.
/// Characteristics no bed carries are absent rather than reported as zero.
#[must_use]
pub fn calculate_characteristic_availability(
    inventory: &PremisesBedInventory,
    day: Date,
    out_of_service: &OutOfServiceIndex<'_>,
) -> Vec<PremiseCharacteristicAvailability> {
    let mut tallies: BTreeMap<&CharacteristicTag, Tally> = BTreeMap::new();

    for bed in inventory.beds() {
        let in_service: bool = !out_of_service.is_out_of_service(&bed.bed_id, day);
        for tag in &bed.characteristics {
            let tally: &mut Tally = tallies.entry(tag).or_default();
            tally.total = tally.total.saturating_add(1);
            if in_service {
                tally.available = tally.available.saturating_add(1);
            }
        }
    }

    tallies
        .into_iter()
        .map(|(tag, tally)| PremiseCharacteristicAvailability {
            tag: tag.clone(),
            total_bed_count: tally.total,
            available_bed_count: tally.available,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ap_capacity_domain::{Bed, BedId, OutOfServiceBed, PremisesId};
    use time::macros::date;

    fn tag(value: &str) -> CharacteristicTag {
        CharacteristicTag::new(value).unwrap()
    }

    fn inventory() -> PremisesBedInventory {
        PremisesBedInventory::new(
            PremisesId::new("ap-1").unwrap(),
            vec![
                Bed::new(BedId::new("bed-1").unwrap(), [tag("isSingle"), tag("hasEnSuite")]),
                Bed::new(BedId::new("bed-2").unwrap(), [tag("isSingle")]),
                Bed::new(BedId::new("bed-3").unwrap(), []),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_counts_without_out_of_service() {
        let index = OutOfServiceIndex::default();
        let result = calculate_characteristic_availability(&inventory(), date!(2026 - 03 - 10), &index);

        assert_eq!(
            result,
            vec![
                PremiseCharacteristicAvailability::new(tag("hasEnSuite"), 1, 1).unwrap(),
                PremiseCharacteristicAvailability::new(tag("isSingle"), 2, 2).unwrap(),
            ]
        );
    }

    #[test]
    fn test_out_of_service_reduces_every_characteristic_of_the_bed() {
        let records = vec![
            OutOfServiceBed::new(
                BedId::new("bed-1").unwrap(),
                date!(2026 - 03 - 09),
                date!(2026 - 03 - 10),
                false,
            )
            .unwrap(),
        ];
        let index = OutOfServiceIndex::new(&records);

        let on = calculate_characteristic_availability(&inventory(), date!(2026 - 03 - 10), &index);
        let after = calculate_characteristic_availability(&inventory(), date!(2026 - 03 - 11), &index);

        assert_eq!(on[0].available_bed_count(), 0);
        assert_eq!(on[0].total_bed_count(), 1);
        assert_eq!(on[1].available_bed_count(), 1);
        assert_eq!(on[1].total_bed_count(), 2);
        assert_eq!(after[0].available_bed_count(), 1);
        assert_eq!(after[1].available_bed_count(), 2);
    }

    #[test]
    fn test_premises_without_characteristics_yields_nothing() {
        let inventory = PremisesBedInventory::new(
            PremisesId::new("ap-2").unwrap(),
            vec![Bed::new(BedId::new("bed-1").unwrap(), [])],
        )
        .unwrap();
        let index = OutOfServiceIndex::default();

        assert!(
            calculate_characteristic_availability(&inventory, date!(2026 - 03 - 10), &index)
                .is_empty()
        );
    }

    #[test]
    fn test_rejects_more_available_than_total() {
        let result = PremiseCharacteristicAvailability::new(tag("isSingle"), 1, 2);
        assert!(matches!(
            result,
            Err(DomainError::BedCountInvariant {
                total: 1,
                available: 2,
                ..
            })
        ));
    }
}
