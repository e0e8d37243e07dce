//! Scalar reference kernel.

/// Plain wrapping multiply-accumulate over the full length.
///
/// With the `simd` feature enabled this path remains as the bit-exact
/// reference the SIMD kernel is tested against.
#[cfg_attr(feature = "simd", allow(dead_code))]
pub(crate) fn dot_product(a: &[u8], b: &[u8]) -> i32 {
    let mut sum = 0i32;
    for (&x, &y) in a.iter().zip(b.iter()) {
        sum = sum.wrapping_add(x as i32 * y as i32);
    }
    sum
}
