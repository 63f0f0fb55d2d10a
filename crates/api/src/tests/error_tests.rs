// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ap_capacity::CoreError;
use ap_capacity_domain::DomainError;
use time::macros::date;

use crate::{ApiError, RepositoryError, translate_core_error, translate_domain_error};

#[test]
fn test_invalid_range_is_invalid_input() {
    let err = translate_domain_error(DomainError::InvalidDateRange {
        start: date!(2026 - 03 - 12),
        end: date!(2026 - 03 - 10),
    });

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("date_range"),
            message: String::from("Invalid date range: end 2026-03-10 is before start 2026-03-12"),
        }
    );
}

#[test]
fn test_identifier_field_names_the_kind() {
    let err = translate_domain_error(DomainError::InvalidIdentifier {
        kind: "bed",
        reason: String::from("must not be empty"),
    });

    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "bed_id"));
}

#[test]
fn test_bed_count_invariant_is_rule_violation() {
    let err = translate_domain_error(DomainError::BedCountInvariant {
        subject: String::from("characteristic 'isSingle'"),
        total: 1,
        available: 2,
    });

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { rule, .. } if rule == "available_within_total"
    ));
}

#[test]
fn test_core_error_unwraps_domain_error() {
    let err = translate_core_error(CoreError::DomainViolation(DomainError::DayMismatch {
        expected: date!(2026 - 03 - 10),
        actual: date!(2026 - 03 - 11),
    }));

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { rule, .. } if rule == "matching_day"
    ));
}

#[test]
fn test_display_messages() {
    assert_eq!(
        ApiError::PremisesNotFound {
            premises_id: String::from("ap-east")
        }
        .to_string(),
        "Premises not found: ap-east"
    );
    assert_eq!(
        ApiError::from(RepositoryError::Unavailable {
            message: String::from("disk gone"),
        })
        .to_string(),
        "Repository unavailable: disk gone"
    );
    assert_eq!(
        ApiError::InvalidConfiguration {
            setting: String::from("time_zone"),
            message: String::from("unknown"),
        }
        .to_string(),
        "Invalid configuration for time_zone: unknown"
    );
}
