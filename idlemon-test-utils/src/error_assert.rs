use anyhow::Error;

/// [`assert`]s that the result is an [`Error`] with the given message.
///
/// Only the outermost message is compared, so context added on top of an error changes the result.
#[track_caller]
pub fn assert_error_message<T>(result: Result<T, Error>, message: &str) {
    match result {
        Ok(_) => panic!("expected error \"{message}\", got success"),
        Err(err) => pretty_assertions::assert_eq!(err.to_string(), message),
    }
}

/// [`assert`]s that the result is an [`Error`] whose chain contains the given message.
#[track_caller]
pub fn assert_error_message_contains<T>(result: Result<T, Error>, message: &str) {
    match result {
        Ok(_) => panic!("expected error containing \"{message}\", got success"),
        Err(err) => {
            let chain = format!("{err:#}");
            assert!(
                chain.contains(message),
                "expected error containing \"{message}\", got \"{chain}\""
            );
        }
    }
}
