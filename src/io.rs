//! Convenience helpers for loading images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::buffer::PixelBuffer;
use crate::util::{MatchLiteError, MatchLiteResult};
use std::path::Path;

/// Copies a grayscale image into a single-channel buffer.
pub fn buffer_from_gray_image(img: &image::GrayImage) -> MatchLiteResult<PixelBuffer<u8>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    PixelBuffer::from_samples(img.as_raw().clone(), width, height, 1)
}

/// Copies an RGB image into a 3-channel interleaved buffer.
pub fn buffer_from_rgb_image(img: &image::RgbImage) -> MatchLiteResult<PixelBuffer<u8>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    PixelBuffer::from_samples(img.as_raw().clone(), width, height, 3)
}

/// Loads an image from disk and converts it to a grayscale buffer.
pub fn load_gray_buffer<P: AsRef<Path>>(path: P) -> MatchLiteResult<PixelBuffer<u8>> {
    let img = image::open(path).map_err(|err| MatchLiteError::ImageIo {
        reason: err.to_string(),
    })?;
    buffer_from_gray_image(&img.to_luma8())
}

/// Loads an image from disk and converts it to a 3-channel RGB buffer.
pub fn load_rgb_buffer<P: AsRef<Path>>(path: P) -> MatchLiteResult<PixelBuffer<u8>> {
    let img = image::open(path).map_err(|err| MatchLiteError::ImageIo {
        reason: err.to_string(),
    })?;
    buffer_from_rgb_image(&img.to_rgb8())
}
