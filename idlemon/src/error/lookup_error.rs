use core::fmt::Display;

use anyhow::Error;
use thiserror::Error;

use crate::error::WrapError;

/// A game rule that the requested operation would break.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct GeneralError(pub String);

/// A record that does not exist, such as a species, move, or account.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{record} {id} not found")]
pub struct NotFoundError {
    pub record: &'static str,
    pub id: String,
}

/// Wraps a [`GeneralError`] for the given rule violation.
#[track_caller]
pub fn general_error<M>(message: M) -> Error
where
    M: Display,
{
    GeneralError(message.to_string()).wrap_error()
}

/// Wraps a [`NotFoundError`] for the given record.
#[track_caller]
pub fn not_found_error<I>(record: &'static str, id: I) -> Error
where
    I: Display,
{
    NotFoundError {
        record,
        id: id.to_string(),
    }
    .wrap_error()
}
