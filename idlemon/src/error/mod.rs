mod lookup_error;
mod mon_error;
mod wrap;

pub use idlemon_data::IncompleteSpeciesDataError;
pub use lookup_error::{
    GeneralError,
    NotFoundError,
    general_error,
    not_found_error,
};
pub use mon_error::{
    InvalidCaptureInputError,
    InvalidGenderRateError,
    UnknownNatureError,
    invalid_capture_input_error,
};
pub use wrap::{
    WrapError,
    WrapOptionError,
    WrapResultError,
};
