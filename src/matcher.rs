//! Exact SSD template matching.
//!
//! The per-window sum of squared differences expands as
//! `sum((t - s)^2) = sum(t^2) + sum(s^2) - 2 * sum(t * s)`, where `t` is the
//! fixed template and `s` the aligned source window. `sum(t^2)` is a single
//! constant, `sum(s^2)` comes from the incremental local square-sum pass, and
//! `sum(t * s)` from the sliding convolution, so the full score map costs two
//! linear passes instead of a quadratic rescan per placement.

use crate::buffer::{PixelBuffer, ScoreMap};
use crate::conv::fast_cross_correlate;
use crate::energy::local_square_sum;
use crate::trace::trace_span;
use crate::util::{MatchLiteError, MatchLiteResult};

/// Computes the exact integer SSD score map of `tpl` over `src`.
///
/// The source must be strictly larger than the template in both dimensions;
/// both images must share the channel count (1 or 3). Smaller SSD means a
/// closer match, so the best placement is the minimum of the returned map
/// (see [`min_max_location`](crate::extrema::min_max_location)). Any failed
/// intermediate step aborts the whole operation; no partial map is returned.
pub fn match_template(
    src: &PixelBuffer<u8>,
    tpl: &PixelBuffer<u8>,
) -> MatchLiteResult<ScoreMap> {
    if src.channels() != tpl.channels() {
        return Err(MatchLiteError::ChannelMismatch {
            src: src.channels(),
            tpl: tpl.channels(),
        });
    }
    let channels = src.channels();
    if channels != 1 && channels != 3 {
        return Err(MatchLiteError::UnsupportedChannels { channels });
    }
    if src.width() <= tpl.width() || src.height() <= tpl.height() {
        return Err(MatchLiteError::TemplateTooLarge {
            tpl_width: tpl.width(),
            tpl_height: tpl.height(),
            src_width: src.width(),
            src_height: src.height(),
        });
    }
    let _guard = trace_span!("match_template").entered();

    let energy = local_square_sum(src, tpl.width(), tpl.height())?;
    let corr = fast_cross_correlate(src, tpl)?;
    let tpl_energy = template_energy(tpl);

    let width = energy.width();
    let height = energy.height();
    let mut dest = ScoreMap::new(width, height, 1)?;
    for y in 0..height {
        let local = energy.row(y);
        let cross = corr.row(y);
        let out = dest.row_mut(y);
        for x in 0..width {
            out[x] = tpl_energy
                .wrapping_add(local[x])
                .wrapping_sub(cross[x].wrapping_mul(2));
        }
    }

    Ok(dest)
}

/// Sum of squared template samples over all channels.
///
/// Runs once per match, so a plain nested loop is enough.
fn template_energy(tpl: &PixelBuffer<u8>) -> i32 {
    let mut sum = 0i32;
    for y in 0..tpl.height() {
        for &v in tpl.row(y) {
            sum = sum.wrapping_add(v as i32 * v as i32);
        }
    }
    sum
}
