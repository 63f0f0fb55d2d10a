// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read access to premises, out-of-service records and bookings.
//!
//! The operations in this crate only ever read. Storage is behind the
//! [`PremisesRepository`] trait so callers can supply whatever backs it;
//! [`InMemoryPremisesRepository`] serves snapshots and tests.

use crate::error::RepositoryError;
use ap_capacity_domain::{DateRange, OutOfServiceBed, PremisesBedInventory, PremisesId, SpaceBooking};
use std::collections::BTreeMap;

/// A premises as the repository holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Premises {
    /// Display name.
    pub name: String,
    /// The premises' beds.
    pub inventory: PremisesBedInventory,
}

impl Premises {
    /// Returns the premises identifier.
    #[must_use]
    pub const fn premises_id(&self) -> &PremisesId {
        self.inventory.premises_id()
    }
}

/// Source of the records capacity is calculated from.
pub trait PremisesRepository {
    /// Returns every premises, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_premises(&self) -> Result<Vec<Premises>, RepositoryError>;

    /// Returns one premises, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn find_premises(&self, premises_id: &PremisesId) -> Result<Option<Premises>, RepositoryError>;

    /// Returns the premises' out-of-service records overlapping `range`,
    /// cancelled ones included.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn out_of_service_beds(
        &self,
        premises_id: &PremisesId,
        range: DateRange,
    ) -> Result<Vec<OutOfServiceBed>, RepositoryError>;

    /// Returns the premises' bookings whose canonical stay overlaps `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn space_bookings(
        &self,
        premises_id: &PremisesId,
        range: DateRange,
    ) -> Result<Vec<SpaceBooking>, RepositoryError>;
}

#[derive(Debug, Clone, Default)]
struct PremisesRecords {
    premises: Option<Premises>,
    out_of_service_beds: Vec<OutOfServiceBed>,
    bookings: Vec<SpaceBooking>,
}

/// A repository held entirely in memory.
///
/// Records keep their insertion order within a premises.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPremisesRepository {
    records: BTreeMap<PremisesId, PremisesRecords>,
}

impl InMemoryPremisesRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a premises.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DuplicatePremises` if the identifier is
    /// already registered.
    pub fn insert_premises(&mut self, premises: Premises) -> Result<(), RepositoryError> {
        let entry: &mut PremisesRecords = self
            .records
            .entry(premises.premises_id().clone())
            .or_default();
        if entry.premises.is_some() {
            return Err(RepositoryError::DuplicatePremises {
                premises_id: premises.premises_id().value().to_string(),
            });
        }
        entry.premises = Some(premises);
        Ok(())
    }

    /// Adds an out-of-service record to a registered premises.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::UnknownPremises` if the premises is not registered.
    pub fn add_out_of_service_bed(
        &mut self,
        premises_id: &PremisesId,
        record: OutOfServiceBed,
    ) -> Result<(), RepositoryError> {
        self.registered_mut(premises_id)?
            .out_of_service_beds
            .push(record);
        Ok(())
    }

    /// Adds a booking to a registered premises.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::UnknownPremises` if the premises is not registered.
    pub fn add_booking(
        &mut self,
        premises_id: &PremisesId,
        booking: SpaceBooking,
    ) -> Result<(), RepositoryError> {
        self.registered_mut(premises_id)?.bookings.push(booking);
        Ok(())
    }

    fn registered_mut(
        &mut self,
        premises_id: &PremisesId,
    ) -> Result<&mut PremisesRecords, RepositoryError> {
        self.records
            .get_mut(premises_id)
            .filter(|records| records.premises.is_some())
            .ok_or_else(|| RepositoryError::UnknownPremises {
                premises_id: premises_id.value().to_string(),
            })
    }
}

impl PremisesRepository for InMemoryPremisesRepository {
    fn list_premises(&self) -> Result<Vec<Premises>, RepositoryError> {
        Ok(self
            .records
            .values()
            .filter_map(|records| records.premises.clone())
            .collect())
    }

    fn find_premises(&self, premises_id: &PremisesId) -> Result<Option<Premises>, RepositoryError> {
        Ok(self
            .records
            .get(premises_id)
            .and_then(|records| records.premises.clone()))
    }

    fn out_of_service_beds(
        &self,
        premises_id: &PremisesId,
        range: DateRange,
    ) -> Result<Vec<OutOfServiceBed>, RepositoryError> {
        Ok(self
            .records
            .get(premises_id)
            .map(|records| {
                records
                    .out_of_service_beds
                    .iter()
                    .filter(|record| record.range.overlaps(&range))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn space_bookings(
        &self,
        premises_id: &PremisesId,
        range: DateRange,
    ) -> Result<Vec<SpaceBooking>, RepositoryError> {
        Ok(self
            .records
            .get(premises_id)
            .map(|records| {
                records
                    .bookings
                    .iter()
                    .filter(|booking| booking.canonical_stay.overlaps(&range))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
