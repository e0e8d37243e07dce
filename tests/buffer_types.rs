//! PixelBuffer construction and invariant checks.

use matchlite::{MatchLiteError, PixelBuffer, SampleKind};

#[test]
fn rejects_zero_dimensions() {
    assert_eq!(
        PixelBuffer::<u8>::new(0, 4, 1).err().unwrap(),
        MatchLiteError::InvalidDimensions { width: 0, height: 4 }
    );
    assert_eq!(
        PixelBuffer::<u8>::new(4, 0, 1).err().unwrap(),
        MatchLiteError::InvalidDimensions { width: 4, height: 0 }
    );
}

#[test]
fn rejects_bad_channel_counts() {
    assert_eq!(
        PixelBuffer::<u8>::new(4, 4, 0).err().unwrap(),
        MatchLiteError::UnsupportedChannels { channels: 0 }
    );
    assert_eq!(
        PixelBuffer::<u8>::new(4, 4, 5).err().unwrap(),
        MatchLiteError::UnsupportedChannels { channels: 5 }
    );
    assert!(PixelBuffer::<u8>::new(4, 4, 4).is_ok());
}

#[test]
fn stride_follows_width_rounding() {
    // One 8-bit channel: 5 bytes per row padded to 8.
    let buf = PixelBuffer::<u8>::new(5, 3, 1).unwrap();
    assert_eq!(buf.stride(), 8);
    assert_eq!(buf.as_slice().len(), 24);

    // Three channels, width 7: 21 bytes padded to 24.
    let buf = PixelBuffer::<u8>::new(7, 2, 3).unwrap();
    assert_eq!(buf.stride(), 24);

    // 32-bit samples need no padding.
    let buf = PixelBuffer::<i32>::new(7, 2, 1).unwrap();
    assert_eq!(buf.stride(), 7);
    assert_eq!(buf.sample_kind(), SampleKind::I32);
}

#[test]
fn from_samples_validates_length() {
    assert_eq!(
        PixelBuffer::from_samples(vec![0u8; 5], 3, 2, 1).err().unwrap(),
        MatchLiteError::BufferTooSmall { needed: 6, got: 5 }
    );
    assert!(PixelBuffer::from_samples(vec![0u8; 7], 3, 2, 1).is_err());
}

#[test]
fn clone_copies_contents_and_shape() {
    let buf = PixelBuffer::from_samples((0u8..12).collect(), 2, 2, 3).unwrap();
    let copy = buf.clone();
    assert_eq!(copy.width(), 2);
    assert_eq!(copy.height(), 2);
    assert_eq!(copy.channels(), 3);
    assert_eq!(copy.stride(), buf.stride());
    for y in 0..2 {
        assert_eq!(copy.row(y), buf.row(y));
    }
}

#[test]
fn sample_kinds_report_sizes() {
    assert_eq!(SampleKind::U8.size_in_bytes(), 1);
    assert_eq!(SampleKind::I16.size_in_bytes(), 2);
    assert_eq!(SampleKind::F32.size_in_bytes(), 4);
    assert_eq!(SampleKind::F64.size_in_bytes(), 8);
}
