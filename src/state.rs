//! The four-state automaton that generates the curve, and the lookup tables derived from it.
//!
//! At every level of the curve, a square is split into four sub-squares that are visited in the
//! order given by a U-shaped pattern. Which of the four rotations/reflections of the pattern is in
//! use at a given level is the [`State`] of the automaton. Consuming one `(x, y)` bit pair emits a
//! 2-bit quadrant key and selects the state for the next level down.

use self::State::{Down, Left, Right, Up};

/// Orientation of the U-shaped pattern at a given level of the curve.
///
/// Each variant is named after the first move of the pattern from its entry corner. In the
/// diagrams, `(0, 0)` is the bottom-left sub-square and the numbers are the quadrant keys.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum State {
    // 1 ― 2
    // |   |
    // 0   3
    /// Enters at `(0, 0)` and moves up first. This is the state of the top level.
    Up = 0,
    // 3 ― 2
    //     |
    // 0 ― 1
    /// Enters at `(0, 0)` and moves right first.
    Right = 1,
    // 3   0
    // |   |
    // 2 ― 1
    /// Enters at `(1, 1)` and moves down first.
    Down = 2,
    // 1 ― 0
    // |
    // 2 ― 3
    /// Enters at `(1, 1)` and moves left first.
    Left = 3,
}

/// Transition table for the 2D->1D conversions, indexed by `[state][bit_x][bit_y]`.
///
/// Holds the quadrant key emitted for the bit pair, and the state for the sub-square it selects.
const ENCODE: [[[(u8, State); 2]; 2]; 4] = [
    // Up
    [[(0, Right), (1, Up)], [(3, Left), (2, Up)]],
    // Right
    [[(0, Up), (3, Down)], [(1, Right), (2, Right)]],
    // Down
    [[(2, Down), (3, Right)], [(1, Down), (0, Left)]],
    // Left
    [[(2, Left), (1, Left)], [(3, Up), (0, Down)]],
];

/// Transition table for the 1D->2D conversions, indexed by `[state][key]`.
///
/// Holds the `(bit_x, bit_y)` pair that emits the key, and the state for the next level.
const DECODE: [[(u8, u8, State); 4]; 4] = invert(&ENCODE);

/// Number of uniform leading levels covered by the partial-result table.
pub const PARTIAL_LEVELS: usize = 32;

/// Partial keys and resulting states for runs of identical top-level bit pairs, indexed by
/// `[bit_x][bit_y][levels - 1]`.
const PARTIAL: [[[(u64, State); PARTIAL_LEVELS]; 2]; 2] = build_partial();

const fn invert(table: &[[[(u8, State); 2]; 2]; 4]) -> [[(u8, u8, State); 4]; 4] {
    let mut inverse = [[(0, 0, Up); 4]; 4];
    let mut state = 0;
    while state < 4 {
        let mut cell = 0;
        while cell < 4 {
            let (bit_x, bit_y) = (cell >> 1, cell & 1);
            let (key, next) = table[state][bit_x][bit_y];
            inverse[state][key as usize] = (bit_x as u8, bit_y as u8, next);
            cell += 1;
        }
        state += 1;
    }
    inverse
}

/// Runs the automaton from `Up` over the same bit pair, recording the key and state after each level.
const fn build_partial() -> [[[(u64, State); PARTIAL_LEVELS]; 2]; 2] {
    let mut table = [[[(0, Up); PARTIAL_LEVELS]; 2]; 2];
    let mut cell = 0;
    while cell < 4 {
        let (bit_x, bit_y) = (cell >> 1, cell & 1);
        let mut key = 0u64;
        let mut state = Up;
        let mut level = 0;
        while level < PARTIAL_LEVELS {
            let (symbol, next) = state.encode_step(bit_x as u32, bit_y as u32);
            key = (key << 2) | symbol;
            state = next;
            table[bit_x][bit_y][level] = (key, state);
            level += 1;
        }
        cell += 1;
    }
    table
}

impl State {
    /// All states, in table order.
    pub const ALL: [State; 4] = [Up, Right, Down, Left];

    /// Consumes one bit of each coordinate, returning the quadrant key it maps to and the next
    /// state. Only the lowest bit of `bit_x` and `bit_y` is considered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hilbert_index::State;
    ///
    /// // The top-left sub-square is the second one visited by the top level
    /// assert_eq!(State::Up.encode_step(0, 1), (1, State::Up));
    /// ```
    #[inline]
    pub const fn encode_step(self, bit_x: u32, bit_y: u32) -> (u64, State) {
        let (key, next) = ENCODE[self as usize][(bit_x & 1) as usize][(bit_y & 1) as usize];
        (key as u64, next)
    }

    /// Consumes one quadrant key, returning the `(bit_x, bit_y)` pair it was produced from and
    /// the next state. Only the lowest two bits of `key` are considered.
    ///
    /// This is the exact inverse of [`encode_step`](#method.encode_step).
    #[inline]
    pub const fn decode_step(self, key: u64) -> (u32, u32, State) {
        let (bit_x, bit_y, next) = DECODE[self as usize][(key & 0b11) as usize];
        (bit_x as u32, bit_y as u32, next)
    }
}

/// Returns `Up` after an even number of levels, or `odd` otherwise.
///
/// Runs of `(0, 0)` and `(1, 0)` bit pairs bounce between `Up` and another state on every level.
pub(crate) const fn by_parity(levels: u32, odd: State) -> State {
    if levels % 2 == 0 {
        Up
    } else {
        odd
    }
}

/// Looks up the partial key and resulting state for `levels` uniform top levels, all holding the
/// bit pair `(bit_x, bit_y)`, starting from the `Up` state.
///
/// The value of `levels` must be in the range `1 <= levels <= 32`.
///
/// # Examples
///
/// ```rust
/// use hilbert_index::state::partial;
/// use hilbert_index::State;
///
/// // Three levels of the bottom-right quadrant: keys 3, 3, 3
/// assert_eq!(partial(1, 0, 3), (0b11_11_11, State::Left));
/// ```
#[inline]
pub const fn partial(bit_x: u32, bit_y: u32, levels: u32) -> (u64, State) {
    debug_assert!(levels >= 1 && levels as usize <= PARTIAL_LEVELS);
    PARTIAL[(bit_x & 1) as usize][(bit_y & 1) as usize][levels as usize - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Position of the sub-square visited at `key`, for every state.
    fn visiting_order(state: State) -> [(u32, u32); 4] {
        let mut cells = [(0, 0); 4];
        for key in 0..4 {
            let (x, y, _) = state.decode_step(key);
            cells[key as usize] = (x, y);
        }
        cells
    }

    #[test]
    fn decode_inverts_encode() {
        for state in State::ALL {
            for bit_x in 0..2 {
                for bit_y in 0..2 {
                    let (key, next) = state.encode_step(bit_x, bit_y);
                    assert_eq!(state.decode_step(key), (bit_x, bit_y, next));
                }
            }
        }
    }

    #[test]
    fn states_are_u_shapes() {
        for state in State::ALL {
            let cells = visiting_order(state);
            // Every move is to an adjacent sub-square
            for pair in cells.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                assert_eq!((a.0 ^ b.0) + (a.1 ^ b.1), 1, "{:?}", state);
            }
            for (i, cell) in cells.iter().enumerate() {
                assert!(!cells[i + 1..].contains(cell));
            }
        }
        assert_eq!(visiting_order(Up), [(0, 0), (0, 1), (1, 1), (1, 0)]);
        assert_eq!(visiting_order(Right), [(0, 0), (1, 0), (1, 1), (0, 1)]);
        assert_eq!(visiting_order(Down), [(1, 1), (1, 0), (0, 0), (0, 1)]);
        assert_eq!(visiting_order(Left), [(1, 1), (0, 1), (0, 0), (1, 0)]);
    }

    #[test]
    fn state_transitions() {
        // Entering the first and last quadrants reorients the pattern, the middle two keep it
        assert_eq!(Up.encode_step(0, 0), (0, Right));
        assert_eq!(Up.encode_step(0, 1), (1, Up));
        assert_eq!(Up.encode_step(1, 1), (2, Up));
        assert_eq!(Up.encode_step(1, 0), (3, Left));
        assert_eq!(Right.encode_step(0, 1), (3, Down));
        assert_eq!(Down.encode_step(1, 1), (0, Left));
        assert_eq!(Left.encode_step(1, 0), (3, Up));
    }

    #[test]
    fn partial_matches_closed_form() {
        for levels in 1..=PARTIAL_LEVELS as u32 {
            let repunit = ((1u128 << (2 * levels)) - 1) / 3;
            let repunit = repunit as u64;
            assert_eq!(partial(0, 0, levels), (0, by_parity(levels, Right)));
            assert_eq!(partial(0, 1, levels), (repunit, Up));
            assert_eq!(partial(1, 1, levels), (2 * repunit, Up));
            assert_eq!(partial(1, 0, levels), (3 * repunit, by_parity(levels, Left)));
        }
    }

    #[test]
    fn partial_full_width() {
        assert_eq!(partial(0, 1, 32).0, 0x5555_5555_5555_5555);
        assert_eq!(partial(1, 1, 32).0, 0xaaaa_aaaa_aaaa_aaaa);
        assert_eq!(partial(1, 0, 32).0, u64::MAX);
        assert_eq!(partial(0, 1, 17).0, 0x1_5555_5555);
    }
}
