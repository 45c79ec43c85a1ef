//! Common-word counts across the uploaded columns

use itertools::Itertools;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use super::words::ExcludedWords;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
    /// Percentage of all counted words
    pub share: f64,
}

/// The `top_n` most common words in `values`, ignoring excluded words.
///
/// Words are compared accent- and case-insensitively. Ties are broken
/// alphabetically.
pub fn word_frequencies<'a, I>(values: I, excluded: &ExcludedWords, top_n: usize) -> Vec<WordCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let skip: HashSet<String> = excluded.iter().flat_map(tokenize).collect();

    let mut counts: HashMap<String, usize> = HashMap::new();
    for value in values {
        for token in tokenize(value) {
            if !skip.contains(&token) {
                *counts.entry(token).or_default() += 1;
            }
        }
    }

    let total: usize = counts.values().sum();
    counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .take(top_n)
        .map(|(word, count)| WordCount {
            share: count as f64 * 100.0 / total as f64,
            word,
            count,
        })
        .collect()
}

/// Lower-cased, accent-stripped alphanumeric tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let folded: String = text
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();

    folded
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_folds_case_and_accents() {
        assert_eq!(
            tokenize("Société Générale, S.A."),
            vec!["societe", "generale", "s", "a"]
        );
        assert!(tokenize(" -- ").is_empty());
    }

    #[test]
    fn test_counts_sorted_by_count_then_word() {
        let values = ["Acme Ltd", "Beta Ltd", "acme holdings", "Gamma"];
        let counts = word_frequencies(values, &ExcludedWords::new(), 10);
        let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.word.as_str(), c.count)).collect();
        assert_eq!(
            pairs,
            vec![
                ("acme", 2),
                ("ltd", 2),
                ("beta", 1),
                ("gamma", 1),
                ("holdings", 1)
            ]
        );
        let total_share: f64 = counts.iter().map(|c| c.share).sum();
        assert!((total_share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_excluded_words_are_skipped() {
        let mut excluded = ExcludedWords::new();
        excluded.add("LTD");
        let counts = word_frequencies(["Acme Ltd", "Beta Ltd"], &excluded, 10);
        assert!(counts.iter().all(|c| c.word != "ltd"));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_top_n_and_empty_input() {
        let counts = word_frequencies(["a b c d"], &ExcludedWords::new(), 2);
        assert_eq!(counts.len(), 2);
        assert!(word_frequencies(std::iter::empty(), &ExcludedWords::new(), 5).is_empty());
    }
}
