//! Text processing and scoring module

pub mod document;
pub mod normalizer;
pub mod stop_words;
pub mod tfidf;
pub mod embeddings;
pub mod scorer;
