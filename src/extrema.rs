//! Global minimum/maximum search over a score map.

use crate::buffer::ScoreMap;
use crate::util::{MatchLiteError, MatchLiteResult};

/// Positions and values of the global extrema of a score map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extrema {
    /// Column of the first-encountered global minimum.
    pub min_x: usize,
    /// Row of the first-encountered global minimum.
    pub min_y: usize,
    /// Column of the first-encountered global maximum.
    pub max_x: usize,
    /// Row of the first-encountered global maximum.
    pub max_y: usize,
    /// The minimum value.
    pub min_value: i32,
    /// The maximum value.
    pub max_value: i32,
}

/// Scans a single-channel score map for its global minimum and maximum.
///
/// Ties keep the first extremum in row-major order (strict comparisons).
/// For an SSD map the minimum position is the best match location.
pub fn min_max_location(map: &ScoreMap) -> MatchLiteResult<Extrema> {
    if map.channels() != 1 {
        return Err(MatchLiteError::UnsupportedChannels {
            channels: map.channels(),
        });
    }

    let mut ext = Extrema {
        min_x: 0,
        min_y: 0,
        max_x: 0,
        max_y: 0,
        min_value: i32::MAX,
        max_value: i32::MIN,
    };

    for y in 0..map.height() {
        for (x, &value) in map.row(y).iter().enumerate() {
            if value < ext.min_value {
                ext.min_value = value;
                ext.min_x = x;
                ext.min_y = y;
            }
            if value > ext.max_value {
                ext.max_value = value;
                ext.max_x = x;
                ext.max_y = y;
            }
        }
    }

    Ok(ext)
}

#[cfg(test)]
mod tests {
    use super::min_max_location;
    use crate::buffer::ScoreMap;
    use crate::util::MatchLiteError;

    #[test]
    fn finds_unique_extrema() {
        let map = ScoreMap::from_samples(vec![5, 3, 7, 4, 9, 1, 6, 2, 8], 3, 3, 1).unwrap();
        let ext = min_max_location(&map).unwrap();
        assert_eq!((ext.min_x, ext.min_y, ext.min_value), (2, 1, 1));
        assert_eq!((ext.max_x, ext.max_y, ext.max_value), (1, 1, 9));
    }

    #[test]
    fn ties_keep_first_in_row_major_order() {
        let map = ScoreMap::from_samples(vec![4, 1, 4, 1, 4, 4], 3, 2, 1).unwrap();
        let ext = min_max_location(&map).unwrap();
        assert_eq!((ext.min_x, ext.min_y), (1, 0));
        assert_eq!((ext.max_x, ext.max_y), (0, 0));
    }

    #[test]
    fn rejects_multi_channel_maps() {
        let map = ScoreMap::new(2, 2, 3).unwrap();
        assert_eq!(
            min_max_location(&map).err().unwrap(),
            MatchLiteError::UnsupportedChannels { channels: 3 }
        );
    }
}
