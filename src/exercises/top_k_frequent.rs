//! Top K frequent elements

use std::collections::HashMap;

/// The `k` most frequent values of `nums`, most frequent first.
///
/// Values with equal counts keep the order of their first occurrence.
/// Asking for more values than there are distinct ones returns all of them.
pub fn top_k_frequent(nums: &[i32], k: usize) -> Vec<i32> {
    let mut counts: HashMap<i32, (usize, usize)> = HashMap::new();
    for (position, &n) in nums.iter().enumerate() {
        counts.entry(n).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(i32, usize, usize)> = counts
        .into_iter()
        .map(|(value, (count, first_seen))| (value, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked.into_iter().take(k).map(|(value, _, _)| value).collect()
}
