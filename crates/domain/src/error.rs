// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors raised when a domain invariant is violated.
///
/// These are construction-time failures. Once a value exists it satisfies
/// its invariants and the calculations built on it do not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A date range ends before it starts.
    InvalidDateRange {
        /// The requested start date.
        start: Date,
        /// The requested end date.
        end: Date,
    },
    /// An identifier is empty or otherwise unusable.
    InvalidIdentifier {
        /// The kind of identifier (e.g. "premises", "bed").
        kind: &'static str,
        /// Description of the problem.
        reason: String,
    },
    /// A characteristic tag is empty.
    InvalidCharacteristicTag(String),
    /// Available beds exceed total beds.
    BedCountInvariant {
        /// What the counts describe.
        subject: String,
        /// The total bed count.
        total: u32,
        /// The available bed count.
        available: u32,
    },
    /// The same bed appears twice in an inventory.
    DuplicateBed {
        /// The premises the inventory belongs to.
        premises_id: String,
        /// The repeated bed identifier.
        bed_id: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// An instant could not be placed on a calendar day.
    TimestampOutOfRange {
        /// The offending timestamp, formatted for display.
        timestamp: String,
    },
    /// A per-day value was combined with a different day.
    DayMismatch {
        /// The day being assembled.
        expected: Date,
        /// The day the supplied value describes.
        actual: Date,
    },
    /// Failed to parse a booking lifecycle status.
    InvalidBookingStatus {
        /// The invalid status string.
        status: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateRange { start, end } => {
                write!(f, "Invalid date range: end {end} is before start {start}")
            }
            Self::InvalidIdentifier { kind, reason } => {
                write!(f, "Invalid {kind} identifier: {reason}")
            }
            Self::InvalidCharacteristicTag(msg) => {
                write!(f, "Invalid characteristic tag: {msg}")
            }
            Self::BedCountInvariant {
                subject,
                total,
                available,
            } => {
                write!(
                    f,
                    "Bed count invariant violated for {subject}: {available} available exceeds {total} total"
                )
            }
            Self::DuplicateBed {
                premises_id,
                bed_id,
            } => {
                write!(
                    f,
                    "Bed '{bed_id}' appears more than once in premises '{premises_id}'"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::TimestampOutOfRange { timestamp } => {
                write!(
                    f,
                    "Timestamp {timestamp} cannot be placed on a calendar day"
                )
            }
            Self::DayMismatch { expected, actual } => {
                write!(
                    f,
                    "Day mismatch: expected values for {expected}, got values for {actual}"
                )
            }
            Self::InvalidBookingStatus { status } => {
                write!(f, "Invalid booking status: {status}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
