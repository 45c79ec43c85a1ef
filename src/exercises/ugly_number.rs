//! Ugly number II

use crate::error::{Result, ScratchError};

/// Position of the largest ugly number that fits in a `u64`.
pub const MAX_UGLY_INDEX: usize = 13_282;

/// The `n`-th positive number whose only prime factors are 2, 3 and 5
/// (1 counts as the first).
/// `n` past [`MAX_UGLY_INDEX`] is an error.
pub fn nth_ugly_number(n: usize) -> Result<u64> {
    if n == 0 {
        return Err(ScratchError::ValidationError("n must be at least 1".into()).into());
    }
    if n > MAX_UGLY_INDEX {
        return Err(ScratchError::ValidationError(format!(
            "ugly number #{} exceeds u64 (largest is #{})",
            n, MAX_UGLY_INDEX
        ))
        .into());
    }

    let mut ugly = vec![1u64; n];
    let (mut i2, mut i3, mut i5) = (0, 0, 0);
    let (mut next2, mut next3, mut next5) = (2u64, 3u64, 5u64);

    for slot in 1..n {
        let next = next2.min(next3).min(next5);
        ugly[slot] = next;

        // Several factors can produce the same value; advance all of them.
        // Candidates past u64 saturate and are never picked.
        if next == next2 {
            i2 += 1;
            next2 = ugly[i2].saturating_mul(2);
        }
        if next == next3 {
            i3 += 1;
            next3 = ugly[i3].saturating_mul(3);
        }
        if next == next5 {
            i5 += 1;
            next5 = ugly[i5].saturating_mul(5);
        }
    }

    Ok(ugly[n - 1])
}
