//! Error types for form edits.

use thiserror::Error;

use crate::model::Field;

/// Why an edit was rejected. The form keeps its previous value in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("{0} is computed from the segment table and cannot be edited")]
    Derived(Field),

    #[error("{field}: '{value}' is not a number")]
    InvalidNumber { field: Field, value: String },

    #[error("{field}: {value} is negative")]
    Negative { field: Field, value: String },

    #[error("{field}: {value} is larger than the accepted maximum")]
    TooLarge { field: Field, value: String },

    #[error("duration: '{0}' is not one of 24, 36, 48, 60 months")]
    InvalidDuration(String),

    #[error("segment: '{0}' is not one of GENERALISTA, PREMIUM, LUXURY")]
    InvalidSegment(String),

    #[error("isBusiness: '{0}' is not a boolean")]
    InvalidBoolean(String),
}
