// ABOUTME: Error types for flash notifier construction

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlashError {
    #[error("Flash delay must be strictly positive, got {0:?}")]
    InvalidDelay(Duration),

    #[error("Flash notifier requires a running tokio runtime")]
    NoRuntime,
}
