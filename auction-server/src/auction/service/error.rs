use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The durable store could not complete the request
    #[error("This service is temporarily unavailable")]
    TemporarilyUnavailable,
    /// The configured auction duration puts the deadline outside the supported date range
    #[error("The auction deadline is out of range")]
    DeadlineOutOfRange,
}
