//! Owned pixel buffers with explicit row strides.
//!
//! `PixelBuffer<T>` is a contiguous arena of channel-interleaved samples plus
//! shape metadata. Rows are padded so that every row starts on a 4-byte
//! boundary, so the stride (counted in samples, not bytes) can exceed
//! `width * channels` for narrow sample types. Buffers are created at their
//! final size, zero-filled, and never resized; the algorithms in this crate
//! read inputs through row slices and write freshly created outputs.

use crate::util::{MatchLiteError, MatchLiteResult};

/// Sample storage kinds a `PixelBuffer` can carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SampleKind {
    U8,
    I8,
    I16,
    I32,
    F32,
    F64,
}

impl SampleKind {
    /// Returns the storage size of one sample in bytes.
    pub const fn size_in_bytes(self) -> usize {
        match self {
            SampleKind::U8 | SampleKind::I8 => 1,
            SampleKind::I16 => 2,
            SampleKind::I32 | SampleKind::F32 => 4,
            SampleKind::F64 => 8,
        }
    }
}

/// Marker trait tying a Rust scalar to its `SampleKind`.
///
/// The matching algorithms are typed against `PixelBuffer<u8>` (inputs) and
/// `PixelBuffer<i32>` (score maps), so passing a buffer of the wrong sample
/// kind is a compile error rather than a runtime rejection.
pub trait Sample: Copy + Default + 'static {
    /// The dynamic kind tag for this sample type.
    const KIND: SampleKind;
}

impl Sample for u8 {
    const KIND: SampleKind = SampleKind::U8;
}
impl Sample for i8 {
    const KIND: SampleKind = SampleKind::I8;
}
impl Sample for i16 {
    const KIND: SampleKind = SampleKind::I16;
}
impl Sample for i32 {
    const KIND: SampleKind = SampleKind::I32;
}
impl Sample for f32 {
    const KIND: SampleKind = SampleKind::F32;
}
impl Sample for f64 {
    const KIND: SampleKind = SampleKind::F64;
}

/// Score maps are single-channel 32-bit signed buffers.
pub type ScoreMap = PixelBuffer<i32>;

/// Owned rectangular grid of channel-interleaved samples.
#[derive(Clone)]
pub struct PixelBuffer<T: Sample> {
    data: Vec<T>,
    width: usize,
    height: usize,
    channels: usize,
    stride: usize,
}

impl<T: Sample> PixelBuffer<T> {
    /// Creates a zero-filled buffer with the padded stride.
    ///
    /// Fails on zero width/height, a channel count outside `1..=4`, or a
    /// size computation that overflows `usize`.
    pub fn new(width: usize, height: usize, channels: usize) -> MatchLiteResult<Self> {
        if width == 0 || height == 0 {
            return Err(MatchLiteError::InvalidDimensions { width, height });
        }
        if !(1..=4).contains(&channels) {
            return Err(MatchLiteError::UnsupportedChannels { channels });
        }
        let stride = row_stride(width, channels, T::KIND.size_in_bytes())
            .ok_or(MatchLiteError::InvalidDimensions { width, height })?;
        let total = height
            .checked_mul(stride)
            .ok_or(MatchLiteError::InvalidDimensions { width, height })?;
        Ok(Self {
            data: vec![T::default(); total],
            width,
            height,
            channels,
            stride,
        })
    }

    /// Creates a buffer from a contiguous, unpadded sample vector.
    ///
    /// `data` must hold exactly `width * height * channels` samples in
    /// row-major, channel-interleaved order; rows are copied into the padded
    /// layout.
    pub fn from_samples(
        data: Vec<T>,
        width: usize,
        height: usize,
        channels: usize,
    ) -> MatchLiteResult<Self> {
        let needed = width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(channels))
            .ok_or(MatchLiteError::InvalidDimensions { width, height })?;
        if data.len() < needed {
            return Err(MatchLiteError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(MatchLiteError::InvalidDimensions { width, height });
        }
        let mut buf = Self::new(width, height, channels)?;
        let row_len = width * channels;
        for y in 0..height {
            buf.row_mut(y).copy_from_slice(&data[y * row_len..(y + 1) * row_len]);
        }
        Ok(buf)
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the channel count.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the stride in samples between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the dynamic sample kind of this buffer.
    pub fn sample_kind(&self) -> SampleKind {
        T::KIND
    }

    /// Returns the backing arena including row padding.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns row `y` as a slice of `width * channels` samples.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`; all internal callers iterate within bounds.
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.stride;
        &self.data[start..start + self.width * self.channels]
    }

    /// Mutable counterpart of [`row`](Self::row).
    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.stride;
        let len = self.width * self.channels;
        &mut self.data[start..start + len]
    }

    /// Returns channel `c` of the pixel at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize, c: usize) -> Option<T> {
        if x >= self.width || y >= self.height || c >= self.channels {
            return None;
        }
        self.data.get(y * self.stride + x * self.channels + c).copied()
    }
}

/// Row stride in samples: row bytes rounded up to a 4-byte boundary.
///
/// Equivalent to the classic `WIDTHBYTES` formula
/// `((width * channels * sample_bits + 31) / 32) * 4`; the result is always
/// an exact multiple of the sample size for the supported kinds.
fn row_stride(width: usize, channels: usize, sample_size: usize) -> Option<usize> {
    let row_bytes = width.checked_mul(channels)?.checked_mul(sample_size)?;
    let padded = row_bytes.checked_add(3)? & !3usize;
    Some(padded / sample_size)
}
