// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ap_capacity_domain::{BedId, DateRange, OutOfServiceBed, PremisesBedInventory};
use std::collections::HashMap;
use time::Date;

/// Non-cancelled out-of-service periods grouped by bed.
///
/// Built once per calculation.
#[derive(Debug, Clone, Default)]
pub struct OutOfServiceIndex<'a> {
    by_bed: HashMap<&'a BedId, Vec<DateRange>>,
}

impl<'a> OutOfServiceIndex<'a> {
    /// Indexes the given records, skipping cancelled ones.
    #[must_use]
    pub fn new<I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a OutOfServiceBed>,
    {
        let mut by_bed: HashMap<&'a BedId, Vec<DateRange>> = HashMap::new();
        for record in records.into_iter().filter(|r| !r.cancelled) {
            by_bed.entry(&record.bed_id).or_default().push(record.range);
        }
        Self { by_bed }
    }

    /// Returns true if any non-cancelled period for the bed covers `day`.
    #[must_use]
    pub fn is_out_of_service(&self, bed_id: &BedId, day: Date) -> bool {
        self.by_bed
            .get(bed_id)
            .is_some_and(|ranges| ranges.iter().any(|range| range.contains(day)))
    }

    /// Counts the inventory's beds that are out of service on `day`.
    ///
    /// Each bed counts once however many periods overlap. Records for beds
    /// outside the inventory are ignored.
    #[must_use]
    pub fn out_of_service_bed_count(&self, inventory: &PremisesBedInventory, day: Date) -> u32 {
        let count: usize = inventory
            .beds()
            .iter()
            .filter(|bed| self.is_out_of_service(&bed.bed_id, day))
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Returns indexed beds that do not belong to the inventory.
    #[must_use]
    pub fn unknown_beds(&self, inventory: &PremisesBedInventory) -> Vec<&'a BedId> {
        let mut unknown: Vec<&'a BedId> = self
            .by_bed
            .keys()
            .copied()
            .filter(|bed_id| !inventory.has_bed(bed_id))
            .collect();
        unknown.sort();
        unknown
    }
}
