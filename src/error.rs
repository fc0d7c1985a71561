//! HAL error types

use thiserror::Error;

/// Errors surfaced across the host ABI boundary
#[derive(Error, Debug)]
pub enum HalError {
    /// Unrecognized logical light identifier at open time
    #[error("unknown light identifier: {0:?}")]
    InvalidLight(String),

    /// Device file access failure
    #[error("device file error: {0}")]
    Io(#[from] std::io::Error),
}

impl HalError {
    /// Negative errno-style status code per the host ABI convention
    pub fn status(&self) -> i32 {
        match self {
            HalError::InvalidLight(_) => -libc::EINVAL,
            HalError::Io(e) => -e.raw_os_error().unwrap_or(libc::EIO),
        }
    }
}

/// Collapse a write result into a host status code: 0 on success,
/// negative errno on failure.
pub fn write_status(result: std::io::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => -e.raw_os_error().unwrap_or(libc::EIO),
    }
}
