//! Decode failure context capture
//!
//! When a decode attempt fails, handlers upstream need more than the
//! decoder's own error: which request was being served, how far dimension
//! and format probing got, and the original cause. [`DecodeFailure`] bundles
//! all of that into one immutable value that travels up the pipeline
//! unchanged, so handlers can log, report, or decide on a retry without
//! calling back into the decoder.

use easel_core::{LoadRequest, Size};
use std::error::Error as StdError;
use std::sync::Arc;
use thiserror::Error;

/// Context-carrying record of one failed decode attempt.
///
/// Wraps the decoder's error together with the originating request and the
/// best-effort output metadata known at the moment of failure. Every field
/// is set once at construction and never reassigned; all accessors are
/// read-only, so the value is safe to share across threads without
/// synchronization.
#[derive(Error, Debug)]
#[error(
    "decode failed for '{}' (out {}x{} '{}'): {}",
    .request.key(),
    dim(.out_width),
    dim(.out_height),
    .out_mime_type,
    .cause
)]
pub struct DecodeFailure {
    #[source]
    cause: Box<dyn StdError + Send + Sync>,
    request: Arc<LoadRequest>,
    out_width: Option<u32>,
    out_height: Option<u32>,
    out_mime_type: String,
}

/// Result of a decode attempt.
pub type DecodeResult<T> = std::result::Result<T, DecodeFailure>;

fn dim(value: &Option<u32>) -> String {
    value.map_or_else(|| "?".to_string(), |v| v.to_string())
}

impl DecodeFailure {
    /// Record a failed decode attempt.
    ///
    /// `out_width` / `out_height` are whatever the decoder had determined
    /// before failing (`None` when unknown). `out_mime_type` is the detected
    /// or assumed type of the source data; producers that could not detect
    /// one pass [`easel_core::MIME_TYPE_UNKNOWN`].
    pub fn new(
        cause: impl Into<Box<dyn StdError + Send + Sync>>,
        request: Arc<LoadRequest>,
        out_width: Option<u32>,
        out_height: Option<u32>,
        out_mime_type: impl Into<String>,
    ) -> Self {
        Self {
            cause: cause.into(),
            request,
            out_width,
            out_height,
            out_mime_type: out_mime_type.into(),
        }
    }

    /// The underlying error, exactly as supplied at construction.
    ///
    /// Always the same stored instance; never re-derived or re-wrapped.
    /// Callers can `downcast_ref` to recover the concrete decoder error.
    ///
    /// Note: on an `Arc<DecodeFailure>`, deref first (`(*failure).cause()`)
    /// so this accessor is found instead of the `Error::cause` trait method
    /// that `Arc` itself carries.
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.cause.as_ref()
    }

    /// The request that was being decoded.
    pub fn request(&self) -> &Arc<LoadRequest> {
        &self.request
    }

    /// Best-effort output width known at the moment of failure.
    pub fn out_width(&self) -> Option<u32> {
        self.out_width
    }

    /// Best-effort output height known at the moment of failure.
    pub fn out_height(&self) -> Option<u32> {
        self.out_height
    }

    /// Detected or assumed MIME type of the source data.
    pub fn out_mime_type(&self) -> &str {
        &self.out_mime_type
    }

    /// Both dimensions, when both were determined and non-zero.
    pub fn out_size(&self) -> Option<Size> {
        match (self.out_width, self.out_height) {
            (Some(width), Some(height)) => Size::new(width, height).ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecodeError;

    fn request(uri: &str) -> Arc<LoadRequest> {
        Arc::new(LoadRequest::new(uri).unwrap())
    }

    #[test]
    fn test_accessors_return_construction_values() {
        let request = request("https://x/y.jpg");
        let failure = DecodeFailure::new(
            DecodeError::UnsupportedColorProfile,
            Arc::clone(&request),
            Some(800),
            Some(600),
            "image/jpeg",
        );
        assert!(Arc::ptr_eq(failure.request(), &request));
        assert_eq!(failure.out_width(), Some(800));
        assert_eq!(failure.out_height(), Some(600));
        assert_eq!(failure.out_mime_type(), "image/jpeg");
        assert_eq!(failure.out_size(), Some(Size::new(800, 600).unwrap()));
    }

    #[test]
    fn test_cause_identity_preserved() {
        let failure = DecodeFailure::new(
            DecodeError::TruncatedData,
            request("https://x/y.png"),
            None,
            None,
            "image/png",
        );
        let first = failure.cause() as *const _ as *const ();
        let second = failure.cause() as *const _ as *const ();
        assert_eq!(first, second);
        assert!(matches!(
            failure.cause().downcast_ref::<DecodeError>(),
            Some(DecodeError::TruncatedData)
        ));
    }

    #[test]
    fn test_source_is_cause() {
        let failure = DecodeFailure::new(
            DecodeError::TruncatedData,
            request("https://x/y.png"),
            None,
            None,
            "image/png",
        );
        let source = failure.source().expect("failure always has a source");
        assert_eq!(source.to_string(), "truncated data");
    }

    #[test]
    fn test_unknown_dimensions() {
        let failure = DecodeFailure::new(
            DecodeError::TruncatedData,
            request("https://x/y.png"),
            None,
            None,
            "image/png",
        );
        assert_eq!(failure.out_width(), None);
        assert_eq!(failure.out_height(), None);
        assert_eq!(failure.out_size(), None);
    }

    #[test]
    fn test_out_size_rejects_zero_dimensions() {
        // Zero is a valid captured value but not a valid Size.
        let failure = DecodeFailure::new(
            DecodeError::InvalidData("empty frame".to_string()),
            request("https://x/y.png"),
            Some(0),
            Some(0),
            "image/png",
        );
        assert_eq!(failure.out_width(), Some(0));
        assert_eq!(failure.out_height(), Some(0));
        assert_eq!(failure.out_size(), None);
    }

    #[test]
    fn test_cause_reachable_through_arc() {
        let failure = Arc::new(DecodeFailure::new(
            DecodeError::TruncatedData,
            request("https://x/y.png"),
            None,
            None,
            "image/png",
        ));
        assert_eq!((*failure).cause().to_string(), "truncated data");
    }

    #[test]
    fn test_out_size_requires_both_dimensions() {
        let failure = DecodeFailure::new(
            DecodeError::TruncatedData,
            request("https://x/y.png"),
            Some(800),
            None,
            "image/png",
        );
        assert_eq!(failure.out_size(), None);
    }

    #[test]
    fn test_display() {
        let failure = DecodeFailure::new(
            DecodeError::TruncatedData,
            request("https://x/y.png"),
            None,
            Some(600),
            "image/png",
        );
        assert_eq!(
            failure.to_string(),
            "decode failed for 'https://x/y.png' (out ?x600 'image/png'): truncated data"
        );
    }

    #[test]
    fn test_wraps_foreign_errors() {
        let io_error = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "read interrupted");
        let failure = DecodeFailure::new(
            io_error,
            request("file:///tmp/a.gif"),
            None,
            None,
            "image/gif",
        );
        let cause = failure
            .cause()
            .downcast_ref::<std::io::Error>()
            .expect("cause stored unchanged");
        assert_eq!(cause.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
