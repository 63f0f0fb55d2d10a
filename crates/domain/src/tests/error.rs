// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;
use time::macros::date;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidDateRange {
        start: date!(2026 - 03 - 10),
        end: date!(2026 - 03 - 01),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid date range: end 2026-03-01 is before start 2026-03-10"
    );

    let err: DomainError = DomainError::InvalidIdentifier {
        kind: "bed",
        reason: String::from("identifier must not be empty"),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid bed identifier: identifier must not be empty"
    );

    let err: DomainError = DomainError::InvalidCharacteristicTag(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid characteristic tag: test");

    let err: DomainError = DomainError::BedCountInvariant {
        subject: String::from("isSingle on 2026-03-10"),
        total: 2,
        available: 3,
    };
    assert_eq!(
        format!("{err}"),
        "Bed count invariant violated for isSingle on 2026-03-10: 3 available exceeds 2 total"
    );

    let err: DomainError = DomainError::DuplicateBed {
        premises_id: String::from("ap-1"),
        bed_id: String::from("bed-1"),
    };
    assert_eq!(
        format!("{err}"),
        "Bed 'bed-1' appears more than once in premises 'ap-1'"
    );

    let err: DomainError = DomainError::DateArithmeticOverflow {
        operation: String::from("computing the next day"),
    };
    assert_eq!(
        format!("{err}"),
        "Date arithmetic overflow while computing the next day"
    );

    let err: DomainError = DomainError::DayMismatch {
        expected: date!(2026 - 03 - 10),
        actual: date!(2026 - 03 - 11),
    };
    assert_eq!(
        format!("{err}"),
        "Day mismatch: expected values for 2026-03-10, got values for 2026-03-11"
    );

    let err: DomainError = DomainError::InvalidBookingStatus {
        status: String::from("lost"),
    };
    assert_eq!(format!("{err}"), "Invalid booking status: lost");
}
