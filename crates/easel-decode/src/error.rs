//! Low-level decode errors
//!
//! The causes a decoder can report when an attempt fails. This is a flat
//! pass-through taxonomy: the variants name what broke and carry no
//! recovery or retry logic, which belongs to the handlers upstream.

use thiserror::Error;

/// Error type for the decoders themselves
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Source ended before a complete image could be read
    #[error("truncated data")]
    TruncatedData,

    /// The data is not valid for the detected format
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// No decoder handles the detected format
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The embedded color profile is not supported
    #[error("unsupported color profile")]
    UnsupportedColorProfile,

    /// Pixel buffer allocation failed
    #[error("memory allocation failed")]
    AllocationFailed,

    /// I/O error while reading source data
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
