//! Error types for easel-core
//!
//! Construction of the vocabulary types can reject invalid input; this module
//! provides the unified error type for those rejections.

use thiserror::Error;

/// Easel core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Load request constructed with an empty URI
    #[error("empty request uri")]
    EmptyUri,

    /// Invalid dimensions
    #[error("invalid size: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },
}

/// Result type alias for easel-core operations
pub type Result<T> = std::result::Result<T, Error>;
