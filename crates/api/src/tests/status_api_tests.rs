// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ap_capacity_domain::{BookingLifecycleStatus, BookingStatusOutcome, IndeterminateReason};
use time::macros::{date, datetime};

use crate::tests::helpers::{NOW, create_test_repository, create_utc_config};
use crate::{ApiError, ReportingConfig, get_booking_statuses};

#[test]
fn test_statuses_in_canonical_arrival_order() {
    let repository = create_test_repository();

    let response =
        get_booking_statuses(&repository, &ReportingConfig::default(), "ap-north", NOW).unwrap();

    assert_eq!(response.premises_id, "ap-north");
    assert_eq!(response.today, date!(2026 - 03 - 10));
    let ids: Vec<_> = response.bookings.iter().map(|b| b.booking_id.as_str()).collect();
    assert_eq!(ids, vec!["b-bad", "b-arrived", "b-today", "b-future"]);
}

#[test]
fn test_statuses_are_derived_per_booking() {
    let repository = create_test_repository();

    let response =
        get_booking_statuses(&repository, &ReportingConfig::default(), "ap-north", NOW).unwrap();
    let outcomes: Vec<BookingStatusOutcome> =
        response.bookings.iter().map(|b| b.outcome).collect();

    assert_eq!(
        outcomes,
        vec![
            BookingStatusOutcome::Indeterminate {
                reason: IndeterminateReason::DepartureBeforeArrival
            },
            BookingLifecycleStatus::DepartingWithin2Weeks.into(),
            BookingLifecycleStatus::ArrivingToday.into(),
            BookingLifecycleStatus::ArrivingWithin2Weeks.into(),
        ]
    );
}

#[test]
fn test_statuses_carry_canonical_dates() {
    let repository = create_test_repository();

    let response =
        get_booking_statuses(&repository, &ReportingConfig::default(), "ap-north", NOW).unwrap();
    let future = &response.bookings[3];

    assert_eq!(future.canonical_arrival_date, date!(2026 - 03 - 12));
    assert_eq!(future.canonical_departure_date, date!(2026 - 03 - 30));
}

#[test]
fn test_statuses_today_follows_configured_zone() {
    let repository = create_test_repository();
    // 23:30 UTC in July is already the next day in London.
    let late_evening = datetime!(2026-07-10 23:30 UTC);

    let london = get_booking_statuses(
        &repository,
        &ReportingConfig::default(),
        "ap-south",
        late_evening,
    )
    .unwrap();
    let utc =
        get_booking_statuses(&repository, &create_utc_config(84), "ap-south", late_evening)
            .unwrap();

    assert_eq!(london.today, date!(2026 - 07 - 11));
    assert_eq!(utc.today, date!(2026 - 07 - 10));
}

#[test]
fn test_statuses_outside_window_are_left_out() {
    let repository = create_test_repository();

    // Seven days either side of 03-30 reaches back only to 03-23.
    let response = get_booking_statuses(
        &repository,
        &create_utc_config(7),
        "ap-north",
        datetime!(2026-03-30 09:00 UTC),
    )
    .unwrap();

    let ids: Vec<_> = response.bookings.iter().map(|b| b.booking_id.as_str()).collect();
    assert_eq!(ids, vec!["b-future"]);
    assert_eq!(
        response.bookings[0].outcome,
        BookingLifecycleStatus::OverdueArrival.into()
    );
}

#[test]
fn test_statuses_unknown_premises() {
    let repository = create_test_repository();

    let result = get_booking_statuses(&repository, &ReportingConfig::default(), "ap-east", NOW);

    assert!(matches!(result, Err(ApiError::PremisesNotFound { .. })));
}
