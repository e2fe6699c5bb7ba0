//! Easel Core - Vocabulary types for the easel image loading pipeline
//!
//! This crate provides the shared data structures the pipeline stages pass
//! between each other:
//!
//! - [`LoadRequest`] - immutable descriptor of one image load
//! - [`Size`] - width/height pair
//! - [`ImageInfo`] - metadata of a probed or decoded image
//! - [`ImageFormat`] - recognized source formats and their MIME types
//!
//! Fetching, decoding, and caching live in their own crates; everything here
//! is plain data with no I/O.

pub mod error;
pub mod format;
pub mod info;
pub mod request;

pub use error::{Error, Result};
pub use format::{ImageFormat, MIME_TYPE_UNKNOWN};
pub use info::ImageInfo;
pub use request::{LoadRequest, Size};
