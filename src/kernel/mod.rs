//! Byte dot-product kernels.
//!
//! `dot_product_bytes` is the inner loop of the sliding convolution: the sum
//! of elementwise products of two equal-length byte slices, every byte
//! zero-extended before multiplying so values up to 255 never overflow a
//! lane. The accumulator is a wrapping `i32` on both paths, so the SIMD and
//! scalar results are bit-identical.

pub mod scalar;

#[cfg(feature = "simd")]
pub mod simd;

/// Computes `sum(a[i] * b[i])` over two equal-length byte slices.
///
/// A zero-length input yields 0. With the `simd` feature the bulk of the
/// input is processed 16 bytes per iteration with lane-widened
/// multiply-accumulate; the default build runs the scalar loop.
#[inline]
pub fn dot_product_bytes(a: &[u8], b: &[u8]) -> i32 {
    debug_assert_eq!(a.len(), b.len());
    #[cfg(feature = "simd")]
    {
        simd::dot_product(a, b)
    }
    #[cfg(not(feature = "simd"))]
    {
        scalar::dot_product(a, b)
    }
}
