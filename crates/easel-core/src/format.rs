//! Image formats and MIME type mapping
//!
//! Detects the source format from magic numbers and maps formats to MIME
//! types and file extensions. Detection reads a few header bytes only; it
//! never parses or decodes the image data.

/// MIME type sentinel for sources whose format could not be determined.
///
/// Diagnostic fields that require a MIME type carry this value instead of
/// being absent.
pub const MIME_TYPE_UNKNOWN: &str = "application/octet-stream";

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

    /// GIF87a
    pub const GIF87A: &[u8] = b"GIF87a";

    /// GIF89a
    pub const GIF89A: &[u8] = b"GIF89a";

    /// WebP: RIFF....WEBP
    pub const RIFF: &[u8] = b"RIFF";
    pub const WEBP: &[u8] = b"WEBP";

    /// BMP: "BM"
    pub const BMP: &[u8] = b"BM";

    /// TIFF little-endian: II 2A 00
    pub const TIFF_LE: &[u8] = &[0x49, 0x49, 0x2A, 0x00];

    /// TIFF big-endian: MM 00 2A
    pub const TIFF_BE: &[u8] = &[0x4D, 0x4D, 0x00, 0x2A];

    /// HEIF family: "ftyp" box at offset 4
    pub const FTYP: &[u8] = b"ftyp";
    pub const HEIF_BRANDS: &[&[u8]] = &[b"heic", b"heix", b"heif", b"mif1", b"avif"];
}

/// Image source format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// PNG format
    Png,
    /// JFIF JPEG format
    Jpeg,
    /// GIF format
    Gif,
    /// WebP format
    WebP,
    /// BMP format
    Bmp,
    /// TIFF format
    Tiff,
    /// HEIF/AVIF format family
    Heif,
    /// SVG format
    Svg,
}

impl ImageFormat {
    /// Get the MIME type for this format.
    ///
    /// [`ImageFormat::Unknown`] maps to [`MIME_TYPE_UNKNOWN`].
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Unknown => MIME_TYPE_UNKNOWN,
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::WebP => "image/webp",
            Self::Bmp => "image/bmp",
            Self::Tiff => "image/tiff",
            Self::Heif => "image/heif",
            Self::Svg => "image/svg+xml",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
            Self::WebP => "webp",
            Self::Bmp => "bmp",
            Self::Tiff => "tif",
            Self::Heif => "heic",
            Self::Svg => "svg",
        }
    }

    /// Look up a format from a MIME type string.
    pub fn from_mime_type(mime_type: &str) -> Self {
        match mime_type {
            "image/png" => Self::Png,
            "image/jpeg" | "image/jpg" => Self::Jpeg,
            "image/gif" => Self::Gif,
            "image/webp" => Self::WebP,
            "image/bmp" | "image/x-ms-bmp" => Self::Bmp,
            "image/tiff" => Self::Tiff,
            "image/heif" | "image/heic" | "image/avif" => Self::Heif,
            "image/svg+xml" => Self::Svg,
            _ => Self::Unknown,
        }
    }

    /// Look up a format from a file extension (case-insensitive).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            "webp" => Some(Self::WebP),
            "bmp" => Some(Self::Bmp),
            "tif" | "tiff" => Some(Self::Tiff),
            "heic" | "heif" | "avif" => Some(Self::Heif),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }

    /// Detect the format from the leading bytes of the source data.
    ///
    /// Best-effort: returns [`ImageFormat::Unknown`] when the data is too
    /// short or matches no known magic number.
    pub fn sniff(data: &[u8]) -> Self {
        if data.starts_with(magic::PNG) {
            Self::Png
        } else if data.starts_with(magic::JPEG) {
            Self::Jpeg
        } else if data.starts_with(magic::GIF87A) || data.starts_with(magic::GIF89A) {
            Self::Gif
        } else if data.starts_with(magic::RIFF) && data.len() >= 12 && &data[8..12] == magic::WEBP {
            Self::WebP
        } else if data.starts_with(magic::BMP) {
            Self::Bmp
        } else if data.starts_with(magic::TIFF_LE) || data.starts_with(magic::TIFF_BE) {
            Self::Tiff
        } else if data.len() >= 12 && &data[4..8] == magic::FTYP {
            let brand = &data[8..12];
            if magic::HEIF_BRANDS.contains(&brand) {
                Self::Heif
            } else {
                Self::Unknown
            }
        } else if data.starts_with(b"<svg") || data.starts_with(b"<?xml") {
            Self::Svg
        } else {
            Self::Unknown
        }
    }
}
