//! Load request descriptor
//!
//! A [`LoadRequest`] describes one image load attempt: where the encoded
//! bytes come from and what the caller wants out of them. The pipeline
//! builds the request once and shares it across its stages behind an `Arc`,
//! so diagnostic values (results, failures, log lines) can hold a
//! back-reference to it without owning it or keeping any mutable state
//! alive.

use crate::{Error, Result};
use std::fmt;
use std::fmt::Write as _;

/// Width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Size {
    /// Create a size. Zero dimensions are rejected.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Immutable descriptor of one image load.
///
/// Holds the source URI plus the caller's decode preferences. All fields are
/// fixed at construction; stages read them but never write them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    uri: String,
    target_size: Option<Size>,
    preferred_mime_type: Option<String>,
}

impl LoadRequest {
    /// Create a request for `uri`. Empty URIs are rejected.
    pub fn new(uri: impl Into<String>) -> Result<Self> {
        let uri = uri.into();
        if uri.is_empty() {
            return Err(Error::EmptyUri);
        }
        Ok(Self {
            uri,
            target_size: None,
            preferred_mime_type: None,
        })
    }

    /// Bound the decoded output to `size`.
    pub fn with_target_size(mut self, size: Size) -> Self {
        self.target_size = Some(size);
        self
    }

    /// Hint the expected MIME type of the source data.
    pub fn with_preferred_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.preferred_mime_type = Some(mime_type.into());
        self
    }

    /// Source URI of the image data.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Requested output bound, if any.
    pub fn target_size(&self) -> Option<Size> {
        self.target_size
    }

    /// Caller's MIME type hint, if any.
    pub fn preferred_mime_type(&self) -> Option<&str> {
        self.preferred_mime_type.as_deref()
    }

    /// Stable identity string for this request.
    ///
    /// The URI with the decode preferences appended as query parameters;
    /// used in logs and as a cache key by the surrounding pipeline.
    pub fn key(&self) -> String {
        let mut key = self.uri.clone();
        let mut sep = if self.uri.contains('?') { '&' } else { '?' };
        if let Some(size) = self.target_size {
            let _ = write!(key, "{sep}_size={size}");
            sep = '&';
        }
        if let Some(mime_type) = &self.preferred_mime_type {
            let _ = write!(key, "{sep}_mime={mime_type}");
        }
        key
    }
}

impl fmt::Display for LoadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LoadRequest('{}')", self.key())
    }
}
