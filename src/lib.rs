//! MatchLite is a minimal image-matrix library for exact SSD template matching.
//!
//! The crate locates the best-matching position of a small template inside a
//! larger source image using the sum-of-squared-differences metric, computed
//! with exact integer arithmetic. The hot path decomposes the SSD into
//! `sum(t^2) + sum(s^2) - 2*sum(t*s)`: an incremental local-square-sum pass,
//! a sliding byte convolution (SIMD-accelerated with the `simd` feature), and
//! an elementwise fusion, followed by a min/max scan over the score map.
//!
//! Score arithmetic is wrapping `i32` throughout; accumulators are
//! deliberately not widened, which caps exact results at windows of roughly
//! 33 million samples.

pub mod buffer;
pub mod conv;
pub mod energy;
pub mod extrema;
pub mod kernel;
pub mod matcher;
pub mod util;

#[cfg(feature = "image-io")]
pub mod io;

pub(crate) mod trace;

pub use buffer::{PixelBuffer, Sample, SampleKind, ScoreMap};
pub use conv::fast_cross_correlate;
pub use energy::local_square_sum;
pub use extrema::{min_max_location, Extrema};
pub use kernel::dot_product_bytes;
pub use matcher::match_template;
pub use util::{MatchLiteError, MatchLiteResult};
