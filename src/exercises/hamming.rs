//! Hamming distance

/// Number of bit positions in which `x` and `y` differ.
pub fn hamming_distance(x: u32, y: u32) -> u32 {
    (x ^ y).count_ones()
}
