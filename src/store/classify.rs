//! Backend Failure Classification
//!
//! A backend failure is either worth retrying later or not; callers get no
//! finer distinction. The mapping is a lookup over a closed table of known
//! transient signal codes, with everything unlisted treated as terminal.

/// Client-facing category for a backend failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Transient overload; the caller may retry after backoff. Surfaced as
    /// HTTP 503.
    Unavailable,
    /// Everything else. Surfaced as HTTP 500.
    Internal,
}

/// Signal codes that indicate a transient backend condition.
const TRANSIENT_CODES: &[&str] = &[
    "ProvisionedThroughputExceededException",
    "ThrottlingException",
    "ServiceUnavailable",
    "InternalServerError",
];

/// Map a raw backend signal code onto its client-facing category.
pub fn classify(code: &str) -> ErrorClass {
    if TRANSIENT_CODES.contains(&code) {
        ErrorClass::Unavailable
    } else {
        ErrorClass::Internal
    }
}
