//! Word break II

use std::collections::{HashMap, HashSet};

/// Every way to split `s` into words from `dictionary`, as space-separated
/// sentences.
///
/// Sentences come out in depth-first order: at each position the words are
/// tried in dictionary order. Results for each suffix are memoised, and an
/// input using a character no dictionary word contains is rejected up front.
pub fn word_break(s: &str, dictionary: &[&str]) -> Vec<String> {
    let available: HashSet<char> = dictionary.iter().flat_map(|w| w.chars()).collect();
    if s.chars().any(|c| !available.contains(&c)) {
        return Vec::new();
    }

    let mut memo: HashMap<usize, Vec<String>> = HashMap::new();
    sentences_from(s, 0, dictionary, &mut memo)
}

fn sentences_from(
    s: &str,
    start: usize,
    dictionary: &[&str],
    memo: &mut HashMap<usize, Vec<String>>,
) -> Vec<String> {
    if let Some(cached) = memo.get(&start) {
        return cached.clone();
    }

    let rest = &s[start..];
    let mut sentences = Vec::new();
    for word in dictionary.iter().filter(|w| !w.is_empty()) {
        if !rest.starts_with(word) {
            continue;
        }
        let next = start + word.len();
        if next == s.len() {
            sentences.push(word.to_string());
            continue;
        }
        for tail in sentences_from(s, next, dictionary, memo) {
            sentences.push(format!("{} {}", word, tail));
        }
    }

    memo.insert(start, sentences.clone());
    sentences
}
