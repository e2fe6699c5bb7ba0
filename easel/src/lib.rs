//! Easel - Image loading pipeline diagnostics
//!
//! Easel models the boundary between an image loading pipeline's decode
//! stage and the error handling logic above it. A fetcher hands encoded
//! bytes to a decoder; when decoding fails, the decoder produces a
//! [`decode::DecodeFailure`] carrying the original error together with
//! everything known about the attempt: the originating [`LoadRequest`], the
//! best-effort output dimensions, and the detected MIME type. Handlers
//! upstream log, report, or decide on a retry from that one value without
//! touching decoder internals.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use easel::LoadRequest;
//! use easel::decode::{DecodeError, DecodeFailure};
//!
//! let request = Arc::new(LoadRequest::new("https://example.com/cat.png").unwrap());
//!
//! // Produced by the decode stage at the point of failure.
//! let failure = DecodeFailure::new(
//!     DecodeError::TruncatedData,
//!     Arc::clone(&request),
//!     None,
//!     None,
//!     "image/png",
//! );
//!
//! // Consumed upstream without calling back into the decoder.
//! assert_eq!(failure.request().uri(), "https://example.com/cat.png");
//! assert_eq!(failure.out_mime_type(), "image/png");
//! assert_eq!(failure.cause().to_string(), "truncated data");
//! ```

// Re-export core types (vocabulary used everywhere)
pub use easel_core::*;

// Re-export the decode boundary as a module
pub use easel_decode as decode;
