// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use ap_capacity::CoreError;
use ap_capacity_domain::DomainError;
use thiserror::Error;

/// Failures reported by a premises repository.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// A record was added for a premises the repository does not hold.
    #[error("Premises '{premises_id}' is not registered")]
    UnknownPremises {
        /// The premises the record referred to.
        premises_id: String,
    },
    /// A premises was registered twice.
    #[error("Premises '{premises_id}' is already registered")]
    DuplicatePremises {
        /// The repeated premises identifier.
        premises_id: String,
    },
    /// The backing store could not be read.
    #[error("Repository unavailable: {message}")]
    Unavailable {
        /// Description of the failure.
        message: String,
    },
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The requested premises does not exist.
    #[error("Premises not found: {premises_id}")]
    PremisesNotFound {
        /// The identifier that was looked up.
        premises_id: String,
    },
    /// A request field is malformed.
    #[error("Invalid input for {field}: {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// Description of the problem.
        message: String,
    },
    /// A domain rule was violated while computing a result.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// Description of the violation.
        message: String,
    },
    /// The repository failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    /// Reporting configuration is unusable.
    #[error("Invalid configuration for {setting}: {message}")]
    InvalidConfiguration {
        /// The offending setting.
        setting: String,
        /// Description of the problem.
        message: String,
    },
}

/// Result alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidDateRange { .. } => ApiError::InvalidInput {
            field: String::from("date_range"),
            message,
        },
        DomainError::InvalidIdentifier { kind, .. } => ApiError::InvalidInput {
            field: format!("{kind}_id"),
            message,
        },
        DomainError::InvalidCharacteristicTag(_) => ApiError::InvalidInput {
            field: String::from("characteristics"),
            message,
        },
        DomainError::InvalidBookingStatus { .. } => ApiError::InvalidInput {
            field: String::from("status"),
            message,
        },
        DomainError::TimestampOutOfRange { .. } => ApiError::InvalidInput {
            field: String::from("now"),
            message,
        },
        DomainError::BedCountInvariant { .. } => ApiError::DomainRuleViolation {
            rule: String::from("available_within_total"),
            message,
        },
        DomainError::DuplicateBed { .. } => ApiError::DomainRuleViolation {
            rule: String::from("unique_beds"),
            message,
        },
        DomainError::DayMismatch { .. } => ApiError::DomainRuleViolation {
            rule: String::from("matching_day"),
            message,
        },
        DomainError::DateArithmeticOverflow { .. } => ApiError::DomainRuleViolation {
            rule: String::from("representable_date"),
            message,
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}
