//! Local square-sum accumulation.
//!
//! For every valid placement of a `size_x` by `size_y` window this computes
//! the sum of squared sample values over the window, across all channels.
//! The two-stage moving sum (per-column vertical sums, then a horizontal
//! moving sum) makes the whole map O(W*H) instead of
//! O(W*H*size_x*size_y).

use crate::buffer::{PixelBuffer, ScoreMap};
use crate::trace::trace_span;
use crate::util::{MatchLiteError, MatchLiteResult};

/// Computes the per-window sum of squared samples of an 8-bit image.
///
/// The output map has shape
/// `(width - size_x + 1, height - size_y + 1)`; a window larger than the
/// source in either dimension is rejected. Only 1- and 3-channel images are
/// supported. Accumulation wraps at the `i32` boundary, so windows holding
/// more than about 33 million samples can wrap; accumulators are not
/// widened.
pub fn local_square_sum(
    src: &PixelBuffer<u8>,
    size_x: usize,
    size_y: usize,
) -> MatchLiteResult<ScoreMap> {
    let channels = src.channels();
    if channels != 1 && channels != 3 {
        return Err(MatchLiteError::UnsupportedChannels { channels });
    }
    let src_w = src.width();
    let src_h = src.height();
    if size_x > src_w || size_y > src_h {
        return Err(MatchLiteError::WindowTooLarge {
            size_x,
            size_y,
            width: src_w,
            height: src_h,
        });
    }
    let _guard = trace_span!("local_square_sum", size_x = size_x, size_y = size_y).entered();

    let dest_w = src_w - size_x + 1;
    let dest_h = src_h - size_y + 1;
    let mut dest = ScoreMap::new(dest_w, dest_h, 1)?;

    // Vertical window sums per source column, updated incrementally as the
    // window slides down one row at a time.
    let mut col_sum = vec![0i32; src_w];

    for y in 0..dest_h {
        if y == 0 {
            for (x, col) in col_sum.iter_mut().enumerate() {
                let mut sum = 0i32;
                for z in 0..size_y {
                    let row = src.row(z);
                    for c in 0..channels {
                        let v = row[x * channels + c] as i32;
                        sum = sum.wrapping_add(v * v);
                    }
                }
                *col = sum;
            }
        } else {
            // Row y-1 leaves the window, row y+size_y-1 enters it.
            let leaving = src.row(y - 1);
            let entering = src.row(y + size_y - 1);
            for (x, col) in col_sum.iter_mut().enumerate() {
                for c in 0..channels {
                    let idx = x * channels + c;
                    let old = leaving[idx] as i32;
                    let new = entering[idx] as i32;
                    *col = col.wrapping_add(new * new).wrapping_sub(old * old);
                }
            }
        }

        let out = dest.row_mut(y);
        let mut sum = 0i32;
        for x in 0..dest_w {
            if x == 0 {
                sum = 0;
                for &col in &col_sum[..size_x] {
                    sum = sum.wrapping_add(col);
                }
            } else {
                sum = sum
                    .wrapping_add(col_sum[x + size_x - 1])
                    .wrapping_sub(col_sum[x - 1]);
            }
            out[x] = sum;
        }
    }

    Ok(dest)
}
