//! Bag-of-words count vectors.
//!
//! [`fit_transform`] builds a single vocabulary over a batch of texts and maps every
//! text to a sparse [`TermCounts`] vector over it. Vocabulary indices follow first
//! occurrence in batch order, so the output is a pure function of the input rows
//! and their order.

use std::collections::HashMap;

use super::tokenize::tokens;

/// Distinct tokens of a batch, indexed by first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    tokens: Vec<String>,
}

impl Vocabulary {
    /// Number of distinct tokens (the dimension of every count vector).
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no token was observed.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Index of `token`, if it was observed.
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Token at `index`.
    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Tokens in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    fn insert(&mut self, token: &str) -> usize {
        if let Some(&i) = self.index.get(token) {
            return i;
        }
        let i = self.tokens.len();
        self.tokens.push(token.to_string());
        self.index.insert(token.to_string(), i);
        i
    }

    /// Count vector of `text` over this vocabulary. Unknown tokens are ignored.
    pub fn transform(&self, text: &str) -> TermCounts {
        let mut counts: HashMap<usize, u32> = HashMap::new();
        for token in tokens(text) {
            if let Some(i) = self.index_of(token) {
                *counts.entry(i).or_insert(0) += 1;
            }
        }
        TermCounts::from_map(counts)
    }
}

/// Sparse term-count vector: `(vocabulary index, count)` pairs sorted by index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TermCounts {
    entries: Vec<(usize, u32)>,
}

impl TermCounts {
    fn from_map(counts: HashMap<usize, u32>) -> Self {
        let mut entries: Vec<(usize, u32)> = counts.into_iter().collect();
        entries.sort_unstable_by_key(|&(i, _)| i);
        Self { entries }
    }

    /// Count for vocabulary index `index` (zero when absent).
    pub fn get(&self, index: usize) -> u32 {
        self.entries
            .binary_search_by_key(&index, |&(i, _)| i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Non-zero entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all counts (the number of tokens in the text).
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|&(_, c)| c).sum()
    }

    /// Dense representation of dimension `dim`; indices at or beyond `dim` are dropped.
    pub fn to_dense(&self, dim: usize) -> Vec<f32> {
        let mut out = vec![0.0f32; dim];
        for &(i, c) in &self.entries {
            if let Some(slot) = out.get_mut(i) {
                *slot = c as f32;
            }
        }
        out
    }
}

/// Build a vocabulary over `texts` and vectorize each of them against it.
///
/// Returns one [`TermCounts`] per input text, in input order.
pub fn fit_transform<S: AsRef<str>>(texts: &[S]) -> (Vocabulary, Vec<TermCounts>) {
    let mut vocabulary = Vocabulary::default();
    let mut vectors = Vec::with_capacity(texts.len());

    for text in texts {
        let mut counts: HashMap<usize, u32> = HashMap::new();
        for token in tokens(text.as_ref()) {
            let i = vocabulary.insert(token);
            *counts.entry(i).or_insert(0) += 1;
        }
        vectors.push(TermCounts::from_map(counts));
    }

    (vocabulary, vectors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_follows_first_occurrence() {
        let (vocab, _) = fit_transform(&["chess music nan", "art chess nan"]);
        let tokens: Vec<&str> = vocab.iter().collect();
        assert_eq!(tokens, vec!["chess", "music", "nan", "art"]);
        assert_eq!(vocab.index_of("art"), Some(3));
        assert_eq!(vocab.index_of("Art"), None);
        assert_eq!(vocab.token(1), Some("music"));
    }

    #[test]
    fn counts_repeated_tokens() {
        let (vocab, vectors) = fit_transform(&["chess chess music"]);
        let chess = vocab.index_of("chess").unwrap();
        let music = vocab.index_of("music").unwrap();
        assert_eq!(vectors[0].get(chess), 2);
        assert_eq!(vectors[0].get(music), 1);
        assert_eq!(vectors[0].total(), 3);
        assert_eq!(vectors[0].nnz(), 2);
        assert_eq!(vectors[0].to_dense(vocab.len()), vec![2.0, 1.0]);
    }

    #[test]
    fn is_reproducible() {
        let texts = vec!["b a c".to_string(), "c d".to_string(), "a".to_string()];
        assert_eq!(fit_transform(&texts), fit_transform(&texts));
    }

    #[test]
    fn transform_ignores_unknown_tokens() {
        let (vocab, vectors) = fit_transform(&["chess music"]);
        let v = vocab.transform("music poetry music");
        assert_eq!(v.get(vocab.index_of("music").unwrap()), 2);
        assert_eq!(v.total(), 2);
        assert_eq!(vocab.transform("chess music"), vectors[0]);
    }

    #[test]
    fn empty_batch() {
        let texts: Vec<String> = Vec::new();
        let (vocab, vectors) = fit_transform(&texts);
        assert!(vocab.is_empty());
        assert!(vectors.is_empty());
    }
}
