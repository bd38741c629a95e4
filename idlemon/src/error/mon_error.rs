use core::fmt::Display;

use anyhow::Error;
use thiserror::Error;

use crate::error::WrapError;

/// A nature name outside of the 25 known natures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown nature \"{nature}\"")]
pub struct UnknownNatureError {
    pub nature: String,
}

/// A species gender rate outside of `[-1, 8]`, or one that was never imported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid gender rate {gender_rate:?} for {species}")]
pub struct InvalidGenderRateError {
    pub species: String,
    pub gender_rate: Option<i8>,
}

/// A capture attempt that cannot be evaluated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid capture input: {reason}")]
pub struct InvalidCaptureInputError {
    pub reason: String,
}

/// Helper for an [`struct@Error`] wrapping an [`InvalidCaptureInputError`].
#[track_caller]
pub fn invalid_capture_input_error<M>(reason: M) -> Error
where
    M: Display,
{
    InvalidCaptureInputError {
        reason: reason.to_string(),
    }
    .wrap_error()
}
