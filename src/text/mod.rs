//! Interest text processing: tokenization and count vectorization.

pub mod tokenize;
pub mod vectorize;

pub use tokenize::{combine, contains_token, histogram, tokens};
pub use vectorize::{fit_transform, TermCounts, Vocabulary};
