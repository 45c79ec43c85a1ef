//! 3Sum

/// Every distinct triplet of `nums` summing to zero.
///
/// Each triplet is sorted ascending and triplets come out ordered by their
/// first, then second element.
pub fn three_sum(nums: &[i32]) -> Vec<[i32; 3]> {
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();

    let mut results = Vec::new();
    for first in 0..sorted.len() {
        if first > 0 && sorted[first] == sorted[first - 1] {
            continue;
        }

        let target = -(sorted[first] as i64);
        let mut lo = first + 1;
        let mut hi = sorted.len().saturating_sub(1);

        while lo < hi {
            let sum = sorted[lo] as i64 + sorted[hi] as i64;
            if sum > target {
                hi -= 1;
            } else if sum < target {
                lo += 1;
            } else {
                let (y, z) = (sorted[lo], sorted[hi]);
                results.push([sorted[first], y, z]);
                while lo < hi && sorted[lo] == y {
                    lo += 1;
                }
                while lo < hi && sorted[hi] == z {
                    hi -= 1;
                }
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample() {
        assert_eq!(
            three_sum(&[-1, 0, 1, 2, -1, -4]),
            vec![[-1, -1, 2], [-1, 0, 1]]
        );
    }

    #[test]
    fn test_all_zeros_yield_one_triplet() {
        assert_eq!(three_sum(&[0, 0, 0, 0]), vec![[0, 0, 0]]);
    }

    #[test]
    fn test_short_or_unsolvable_input() {
        assert!(three_sum(&[]).is_empty());
        assert!(three_sum(&[1, 2]).is_empty());
        assert!(three_sum(&[1, 2, 3]).is_empty());
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        assert!(three_sum(&[i32::MAX, i32::MAX, i32::MIN]).is_empty());
    }
}
