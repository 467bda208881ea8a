use crate::bits;
use crate::state::{self, by_parity, State};
use crate::ORDER_MAX;

/// Reflects the top level of the curve around its center, so the levels above the first bit at
/// which `x` and `y` diverge become uniform.
///
/// Returns the top-level bits of `x` and `y`, and the position of the highest set bit among the
/// reflected coordinates (`-1` if the whole curve is uniform).
const fn reflect(x: u32, y: u32, order: u32) -> (u32, u32, i32) {
    let mask = bits::u32::low_ones(order);
    let half = 1 << (order - 1);
    let (mut bit_x, mut r_x) = (0, x);
    let (mut bit_y, mut r_y) = (0, y);
    if x >= half {
        bit_x = 1;
        r_x = !x & mask;
    }
    if y >= half {
        bit_y = 1;
        r_y = !y & mask;
    }
    let start = bits::u32::msb_index(if r_x > r_y { r_x } else { r_y });
    (bit_x, bit_y, start)
}

/// Number of uniform levels above the bit position `start`. Always in the range `1..=order`.
const fn uniform_levels(order: u32, start: i32) -> u32 {
    (order as i32 - start - 1) as u32
}

/// Appends the keys for the bit positions `start..=0` of `x` and `y` to `key`, with the automaton
/// starting at `state`.
const fn walk(x: u32, y: u32, start: i32, mut key: u64, mut state: State) -> u64 {
    let mut pos = start;
    while pos >= 0 {
        let (symbol, next) = state.encode_step(x >> pos as u32, y >> pos as u32);
        key = (key << 2) | symbol;
        state = next;
        pos -= 1;
    }
    key
}

const fn check_args(x: u32, y: u32, order: u32) {
    debug_assert!(order >= 1 && order <= ORDER_MAX);
    debug_assert!(x <= bits::u32::low_ones(order) && y <= bits::u32::low_ones(order));
}

/// Maps from a 2D coordinate to an 1D index on the Hilbert curve, computing the key of the
/// uniform top levels in closed form.
///
/// Given `x` and `y`, this method calculates the index for that coordinate, in the Hilbert curve
/// of `order`.
///
/// The value of `x` and `y` must be in the range `0 <= x/y < 2^order`, and `order` must be in the
/// range `1 <= order <= 32`. The index returned will be in the range `0 <= h < 2^(2 * order)`.
/// Arguments are only checked in debug builds, see [`try_encode`] for a checked alternative.
///
/// Always returns the same index as [`encode_lut`].
///
/// # Examples
///
/// Basic usage:
///
/// ```rust
/// use hilbert_index::encode_direct;
///
/// // Hilbert curve of order 2:
/// //  5 ―― 6    9 ― 10
/// //  |    |    |    |
/// //  4    7 ―― 8   11
/// //  |              |
/// //  3 ―― 2   13 ― 12
/// //       |    |
/// //  0 ―― 1   14 ― 15
/// let h = encode_direct(2, 1, 2);
///
/// assert_eq!(h, 13);
/// ```
///
/// [`try_encode`]: fn.try_encode.html
/// [`encode_lut`]: fn.encode_lut.html
///
pub const fn encode_direct(x: u32, y: u32, order: u32) -> u64 {
    check_args(x, y, order);
    let (bit_x, bit_y, start) = reflect(x, y, order);
    let levels = uniform_levels(order, start);

    // Every uniform level emits the same key, so together they form a repunit in base 4
    let repunit = bits::u64::low_ones(2 * levels) / 3;
    let (key, state) = match (bit_x, bit_y) {
        (0, 0) => (0, by_parity(levels, State::Right)),
        (0, _) => (repunit, State::Up),
        (_, 0) => (3 * repunit, by_parity(levels, State::Left)),
        _ => (2 * repunit, State::Up),
    };

    walk(x, y, start, key, state)
}

/// Maps from a 2D coordinate to an 1D index on the Hilbert curve, looking up the key of the
/// uniform top levels in a precomputed table.
///
/// Same contract as [`encode_direct`], and always returns the same index.
///
/// # Examples
///
/// Basic usage:
///
/// ```rust
/// use hilbert_index::{encode_direct, encode_lut};
///
/// assert_eq!(encode_lut(3, 7, 4), 48);
/// assert_eq!(encode_lut(3, 7, 4), encode_direct(3, 7, 4));
/// ```
///
/// [`encode_direct`]: fn.encode_direct.html
///
pub const fn encode_lut(x: u32, y: u32, order: u32) -> u64 {
    check_args(x, y, order);
    let (bit_x, bit_y, start) = reflect(x, y, order);
    let (key, state) = state::partial(bit_x, bit_y, uniform_levels(order, start));

    walk(x, y, start, key, state)
}
