//! Easel Decode - Decode stage boundary types
//!
//! The decode stage turns fetched bytes into an in-memory image. This crate
//! defines the error vocabulary of that boundary:
//!
//! - [`DecodeError`] - the low-level causes a decoder reports
//! - [`DecodeFailure`] - the context-carrying record handed upstream when a
//!   decode attempt fails
//!
//! The decoders themselves live in their own crates; handlers upstream only
//! ever see the types defined here.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use easel_core::LoadRequest;
//! use easel_decode::{DecodeError, DecodeFailure};
//!
//! let request = Arc::new(LoadRequest::new("https://example.com/a.png").unwrap());
//! let failure = DecodeFailure::new(
//!     DecodeError::TruncatedData,
//!     Arc::clone(&request),
//!     None,
//!     None,
//!     "image/png",
//! );
//! assert_eq!(failure.out_mime_type(), "image/png");
//! assert_eq!(failure.cause().to_string(), "truncated data");
//! ```

pub mod error;
pub mod failure;

pub use error::DecodeError;
pub use failure::{DecodeFailure, DecodeResult};
