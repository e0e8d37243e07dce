//! Error types for matchlite.

use thiserror::Error;

/// Result alias for matchlite operations.
pub type MatchLiteResult<T> = std::result::Result<T, MatchLiteError>;

/// Errors that can occur when building buffers or running the matching
/// algorithms.
///
/// Every public entry point reports validation and I/O problems through this
/// enum instead of panicking; callers inspect the `Result` and may re-invoke
/// with corrected inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchLiteError {
    /// Width or height is zero, or a size computation overflowed.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Channel count outside the supported set for the operation.
    #[error("unsupported channel count {channels}")]
    UnsupportedChannels { channels: usize },
    /// Source and template disagree on channel count.
    #[error("channel count mismatch: source has {src}, template has {tpl}")]
    ChannelMismatch { src: usize, tpl: usize },
    /// A sliding window does not fit inside the image.
    #[error("window {size_x}x{size_y} exceeds image {width}x{height}")]
    WindowTooLarge {
        size_x: usize,
        size_y: usize,
        width: usize,
        height: usize,
    },
    /// The template does not fit strictly inside the source.
    #[error("template {tpl_width}x{tpl_height} does not fit inside source {src_width}x{src_height}")]
    TemplateTooLarge {
        tpl_width: usize,
        tpl_height: usize,
        src_width: usize,
        src_height: usize,
    },
    /// A caller-supplied sample vector is shorter than the buffer needs.
    #[error("buffer too small: needed {needed} samples, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Loading or decoding an image file failed.
    #[cfg(feature = "image-io")]
    #[error("image i/o failed: {reason}")]
    ImageIo { reason: String },
}
