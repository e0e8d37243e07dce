//! SIMD dot-product kernel using the `wide` crate.
//!
//! The input is consumed in three tiers: 16 bytes per iteration in the bulk
//! loop, one 8-byte step for a medium remainder, then a scalar loop for the
//! final tail. There is no masking of partial lanes, so the tiers are what
//! makes arbitrary lengths exact. Bytes are zero-extended to 16-bit lanes
//! and multiply-accumulated pairwise into four 32-bit lanes
//! (`i16x8::dot`), which are horizontally reduced before the scalar tail is
//! added.

use wide::{i16x8, i32x4};

/// Loads 8 bytes zero-extended into 16-bit lanes.
#[inline]
fn load_u8x8_as_i16x8(slice: &[u8]) -> i16x8 {
    i16x8::from([
        slice[0] as i16,
        slice[1] as i16,
        slice[2] as i16,
        slice[3] as i16,
        slice[4] as i16,
        slice[5] as i16,
        slice[6] as i16,
        slice[7] as i16,
    ])
}

/// Horizontal wrapping sum of i32x4.
#[inline]
fn hsum(v: i32x4) -> i32 {
    let arr = v.to_array();
    arr[0]
        .wrapping_add(arr[1])
        .wrapping_add(arr[2])
        .wrapping_add(arr[3])
}

/// Three-tier (16B/8B/1B) multiply-accumulate.
pub(crate) fn dot_product(a: &[u8], b: &[u8]) -> i32 {
    let len = a.len();
    let mut vsum = i32x4::ZERO;

    let mut i = 0;
    while i + 16 <= len {
        let a_lo = load_u8x8_as_i16x8(&a[i..]);
        let a_hi = load_u8x8_as_i16x8(&a[i + 8..]);
        let b_lo = load_u8x8_as_i16x8(&b[i..]);
        let b_hi = load_u8x8_as_i16x8(&b[i + 8..]);
        vsum += a_lo.dot(b_lo);
        vsum += a_hi.dot(b_hi);
        i += 16;
    }
    if i + 8 <= len {
        vsum += load_u8x8_as_i16x8(&a[i..]).dot(load_u8x8_as_i16x8(&b[i..]));
        i += 8;
    }

    let mut sum = hsum(vsum);
    while i < len {
        sum = sum.wrapping_add(a[i] as i32 * b[i] as i32);
        i += 1;
    }
    sum
}
