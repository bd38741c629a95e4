mod resolver;

pub use resolver::{
    CaptureAttempt,
    CaptureOutcome,
    GUARANTEED_CAPTURE_RATE,
    resolve_capture,
};
