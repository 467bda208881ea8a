use crate::bits;
use crate::state::{by_parity, State};
use crate::ORDER_MAX;

/// Number of leading levels that repeat the top-level key, given the position of the first bit
/// of the index that breaks the repetition.
const fn uniform_levels(width: u32, first_break: i32) -> u32 {
    ((width as i32 - 1 - first_break) / 2) as u32
}

/// Maps from a 1D index on the Hilbert curve to a 2D coordinate.
///
/// Given `h`, this method calculates the `(x, y)` coordinates for that index, in the Hilbert curve
/// of `order`.
///
/// The value of `h` must be in the range `0 <= h < 2^(2 * order)`, and `order` must be in the
/// range `1 <= order <= 32`. The coordinates returned will be in the range `0 <= x/y < 2^order`.
/// Arguments are only checked in debug builds, see [`try_decode`] for a checked alternative.
///
/// # Examples
///
/// Basic usage:
///
/// ```rust
/// use hilbert_index::decode;
///
/// // Hilbert curve of order 2:
/// //  5 ―― 6    9 ― 10
/// //  |    |    |    |
/// //  4    7 ―― 8   11
/// //  |              |
/// //  3 ―― 2   13 ― 12
/// //       |    |
/// //  0 ―― 1   14 ― 15
/// let (x, y) = decode(7, 2);
///
/// assert_eq!(x, 1);
/// assert_eq!(y, 2);
/// ```
///
/// [`try_decode`]: fn.try_decode.html
///
pub const fn decode(h: u64, order: u32) -> (u32, u32) {
    debug_assert!(order >= 1 && order <= ORDER_MAX);
    debug_assert!(h <= bits::u64::low_ones(2 * order));

    let width = 2 * order;
    let mask = bits::u64::low_ones(width);

    // The top-level key repeats for a number of levels, each one adding the same bits to the
    // coordinates. Find how far the repetition goes to settle those levels at once.
    let (levels, mut state, mut x, mut y) = match (h >> (width - 2)) & 0b11 {
        // 00 00 ... bounces between `Up` and `Right`, leaving both coordinates at 0
        0 => {
            let levels = uniform_levels(width, bits::u64::msb_index(h));
            (levels, by_parity(levels, State::Right), 0, 0)
        }
        // 01 01 ... stays at `Up`, setting the low bits of `y`
        1 => {
            let alternating = !(h ^ (h << 1)) & mask;
            // The left shift reports the first break one bit higher than it is
            let levels = uniform_levels(width, bits::u64::msb_index(alternating) - 1);
            (levels, State::Up, 0, bits::u32::low_ones(levels))
        }
        // 10 10 ... stays at `Up`, setting the low bits of both coordinates
        2 => {
            let alternating = !(h ^ (h >> 1)) & mask;
            let levels = uniform_levels(width, bits::u64::msb_index(alternating));
            let ones = bits::u32::low_ones(levels);
            (levels, State::Up, ones, ones)
        }
        // 11 11 ... bounces between `Up` and `Left`, setting the low bits of `x`
        _ => {
            let levels = uniform_levels(width, bits::u64::msb_index(!h & mask));
            (levels, by_parity(levels, State::Left), bits::u32::low_ones(levels), 0)
        }
    };

    let mut level = order - levels;
    while level > 0 {
        let (bit_x, bit_y, next) = state.decode_step(h >> (2 * level - 2));
        x = (x << 1) | bit_x;
        y = (y << 1) | bit_y;
        state = next;
        level -= 1;
    }

    (x, y)
}
