// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ap_capacity_domain::DateRange;
use time::macros::date;

use crate::tests::helpers::{
    create_bed, create_booking, create_premises, create_test_repository, premises_id,
};
use crate::{InMemoryPremisesRepository, PremisesRepository, RepositoryError};

#[test]
fn test_list_premises_is_ordered_by_id() {
    let repository = create_test_repository();

    let ids: Vec<String> = repository
        .list_premises()
        .unwrap()
        .iter()
        .map(|premises| premises.premises_id().value().to_string())
        .collect();

    assert_eq!(ids, vec!["ap-north", "ap-south"]);
}

#[test]
fn test_find_missing_premises_is_none() {
    let repository = create_test_repository();

    assert!(
        repository
            .find_premises(&premises_id("ap-east"))
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_duplicate_premises_rejected() {
    let mut repository = InMemoryPremisesRepository::new();
    repository
        .insert_premises(create_premises("ap-1", "One", vec![create_bed("bed-1", &[])]))
        .unwrap();

    let result = repository.insert_premises(create_premises("ap-1", "Again", vec![]));

    assert_eq!(
        result,
        Err(RepositoryError::DuplicatePremises {
            premises_id: String::from("ap-1")
        })
    );
}

#[test]
fn test_records_for_unregistered_premises_rejected() {
    let mut repository = InMemoryPremisesRepository::new();

    let result = repository.add_booking(
        &premises_id("ap-1"),
        create_booking("b-1", date!(2026 - 03 - 10), date!(2026 - 03 - 11)),
    );

    assert!(matches!(
        result,
        Err(RepositoryError::UnknownPremises { .. })
    ));
}

#[test]
fn test_reads_filter_by_overlap() {
    let repository = create_test_repository();
    let north = premises_id("ap-north");
    let range = DateRange::new(date!(2026 - 03 - 21), date!(2026 - 03 - 31)).unwrap();

    let bookings = repository.space_bookings(&north, range).unwrap();
    let out_of_service = repository.out_of_service_beds(&north, range).unwrap();

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].booking_id.value(), "b-future");
    assert!(out_of_service.is_empty());
}

#[test]
fn test_reads_include_cancelled_records() {
    let repository = create_test_repository();
    let range = DateRange::single_day(date!(2026 - 03 - 15));

    let out_of_service = repository
        .out_of_service_beds(&premises_id("ap-north"), range)
        .unwrap();

    assert_eq!(out_of_service.len(), 1);
    assert!(out_of_service[0].cancelled);
}
