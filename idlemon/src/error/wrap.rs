use core::{
    fmt::Display,
    panic::Location,
};

use anyhow::Error;

use crate::error::{
    general_error,
    not_found_error,
};

/// Message layered on top of another error.
///
/// The alternate form also prints where the message was added.
struct Context {
    message: String,
    location: &'static Location<'static>,
}

impl Display for Context {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if f.alternate() {
            write!(f, "{} ({})", self.message, self.location)
        } else {
            f.write_str(&self.message)
        }
    }
}

impl core::fmt::Debug for Context {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#}", self)
    }
}

/// Converts an error into [`Error`].
pub trait WrapError {
    #[track_caller]
    fn wrap_error(self) -> Error;

    /// Converts the error, layering a message on top of it.
    #[track_caller]
    fn wrap_error_with_context<M>(self, message: M) -> Error
    where
        M: Display;
}

impl<E> WrapError for E
where
    E: Into<Error>,
{
    #[track_caller]
    fn wrap_error(self) -> Error {
        self.into()
    }

    #[track_caller]
    fn wrap_error_with_context<M>(self, message: M) -> Error
    where
        M: Display,
    {
        Into::<Error>::into(self).context(Context {
            message: message.to_string(),
            location: Location::caller(),
        })
    }
}

/// [`WrapError`] for the error of a [`Result`].
pub trait WrapResultError<T> {
    #[track_caller]
    fn wrap_error(self) -> Result<T, Error>;

    #[track_caller]
    fn wrap_error_with_context<M>(self, message: M) -> Result<T, Error>
    where
        M: Display;
}

impl<T, E> WrapResultError<T> for Result<T, E>
where
    E: WrapError,
{
    #[track_caller]
    fn wrap_error(self) -> Result<T, Error> {
        match self {
            Ok(val) => Ok(val),
            Err(error) => Err(error.wrap_error()),
        }
    }

    #[track_caller]
    fn wrap_error_with_context<M>(self, message: M) -> Result<T, Error>
    where
        M: Display,
    {
        match self {
            Ok(val) => Ok(val),
            Err(error) => Err(error.wrap_error_with_context(message)),
        }
    }
}

/// Turns a missing value into an [`Error`].
pub trait WrapOptionError<T> {
    /// Fails with a [`GeneralError`][`crate::error::GeneralError`] if the value is missing.
    #[track_caller]
    fn wrap_expectation<M>(self, message: M) -> Result<T, Error>
    where
        M: Display;

    /// Fails with a [`NotFoundError`][`crate::error::NotFoundError`] if the value is missing.
    #[track_caller]
    fn wrap_not_found<I>(self, record: &'static str, id: I) -> Result<T, Error>
    where
        I: Display;
}

impl<T> WrapOptionError<T> for Option<T> {
    #[track_caller]
    fn wrap_expectation<M>(self, message: M) -> Result<T, Error>
    where
        M: Display,
    {
        match self {
            Some(val) => Ok(val),
            None => Err(general_error(message)),
        }
    }

    #[track_caller]
    fn wrap_not_found<I>(self, record: &'static str, id: I) -> Result<T, Error>
    where
        I: Display,
    {
        match self {
            Some(val) => Ok(val),
            None => Err(not_found_error(record, id)),
        }
    }
}
