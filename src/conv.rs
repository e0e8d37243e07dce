//! Sliding cross-correlation of a source image against a fixed template.
//!
//! Instead of re-gathering the window contents for every output pixel, the
//! scan keeps one rolling kernel buffer of shape
//! `(template.width, source.height)`: the source columns currently under the
//! template, flattened row-major with channels interleaved. Moving one output
//! column to the right shifts the buffer left by a single pixel and appends
//! the incoming source column, so the per-column update is amortized across
//! all rows and each output cell costs one fixed-length dot product.

use crate::buffer::{PixelBuffer, ScoreMap};
use crate::kernel::dot_product_bytes;
use crate::trace::trace_span;
use crate::util::{MatchLiteError, MatchLiteResult};

/// Computes the cross-correlation map of `src` against `tpl`.
///
/// Each output cell holds the sum over the template footprint of
/// source-sample times template-sample products, summed across channels.
/// The output shape is
/// `(src.width - tpl.width + 1, src.height - tpl.height + 1)`. Both images
/// must be 1- or 3-channel with matching channel counts, and the template
/// must fit inside the source.
pub fn fast_cross_correlate(
    src: &PixelBuffer<u8>,
    tpl: &PixelBuffer<u8>,
) -> MatchLiteResult<ScoreMap> {
    let channels = src.channels();
    if tpl.channels() != channels {
        return Err(MatchLiteError::ChannelMismatch {
            src: channels,
            tpl: tpl.channels(),
        });
    }
    if channels != 1 && channels != 3 {
        return Err(MatchLiteError::UnsupportedChannels { channels });
    }
    let (src_w, src_h) = (src.width(), src.height());
    let (tpl_w, tpl_h) = (tpl.width(), tpl.height());
    if tpl_w > src_w || tpl_h > src_h {
        return Err(MatchLiteError::TemplateTooLarge {
            tpl_width: tpl_w,
            tpl_height: tpl_h,
            src_width: src_w,
            src_height: src_h,
        });
    }
    let _guard = trace_span!("fast_cross_correlate", tpl_w = tpl_w, tpl_h = tpl_h).entered();

    let dest_w = src_w - tpl_w + 1;
    let dest_h = src_h - tpl_h + 1;
    let mut dest = ScoreMap::new(dest_w, dest_h, 1)?;

    // Template samples flattened contiguously, row padding dropped.
    let len = tpl_w * tpl_h * channels;
    let mut flat_tpl = Vec::with_capacity(len);
    for y in 0..tpl_h {
        flat_tpl.extend_from_slice(tpl.row(y));
    }

    // Rolling kernel: for the current output column, the leading tpl_w
    // source pixels of every source row.
    let row_len = tpl_w * channels;
    let mut kernel = vec![0u8; row_len * src_h];
    for y in 0..src_h {
        kernel[y * row_len..(y + 1) * row_len].copy_from_slice(&src.row(y)[..row_len]);
    }

    for x in 0..dest_w {
        if x != 0 {
            // Shift the whole buffer left by one pixel, then refresh the
            // rightmost column with source column x + tpl_w - 1.
            kernel.copy_within(channels.., 0);
            let col = (x + tpl_w - 1) * channels;
            for y in 0..src_h {
                let end = (y + 1) * row_len;
                kernel[end - channels..end].copy_from_slice(&src.row(y)[col..col + channels]);
            }
        }

        for y in 0..dest_h {
            let window = &kernel[y * row_len..y * row_len + len];
            dest.row_mut(y)[x] = dot_product_bytes(&flat_tpl, window);
        }
    }

    Ok(dest)
}
