//! Random number generator (xorshift32)
//!
//! The seed is explicit everywhere so the generator can be replayed: the same
//! seed, dimensions and start cell always carve the same maze.

#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Roll a uniform index in [0, n).
#[inline]
pub fn roll(state: &mut u32, n: u32) -> u32 {
    ((xorshift32(state) as u64 * n as u64) >> 32) as u32
}

/// Fisher-Yates shuffle: walk from the last index down to 1, swapping each
/// element with one drawn from [0, i].
pub fn shuffle<T>(items: &mut [T], state: &mut u32) {
    for i in (1..items.len()).rev() {
        let j = roll(state, i as u32 + 1) as usize;
        items.swap(i, j);
    }
}
