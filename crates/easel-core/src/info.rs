//! Image metadata
//!
//! [`ImageInfo`] carries the dimensions and MIME type of an image once they
//! have been determined, either by probing the header or by a completed
//! decode.

use crate::Size;
use std::fmt;

/// Metadata of a probed or decoded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// MIME type of the source data
    pub mime_type: String,
}

impl ImageInfo {
    /// Create metadata from determined dimensions and MIME type.
    pub fn new(width: u32, height: u32, mime_type: impl Into<String>) -> Self {
        Self {
            width,
            height,
            mime_type: mime_type.into(),
        }
    }

    /// Dimensions as a [`Size`].
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Compact one-line form for log output.
    pub fn to_short_string(&self) -> String {
        format!("{}x{},'{}'", self.width, self.height, self.mime_type)
    }
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ImageInfo(width={}, height={}, mime_type='{}')",
            self.width, self.height, self.mime_type
        )
    }
}
