//! Common utilities for plagcheck benchmarks
//!
//! Shared helpers for generating documents of a given size and pairs of
//! documents with a controlled amount of copied text.

#![allow(dead_code)]

/// Sample texts of various lengths for benchmarking
pub const SAMPLE_SHORT_TEXT: &str = "The quick brown fox jumps over the lazy dog.";

pub const SAMPLE_MEDIUM_TEXT: &str = "Plagiarism detection compares a submitted document with \
a source and reports how much of it was copied. Word n-grams catch reused phrasing, winnowed \
fingerprints catch reused passages even after small edits, and TF-IDF cosine similarity catches \
documents that talk about the same things with the same words. The longest common run shows the \
single largest copied passage so a reviewer can verify it quickly.";

const WORDS: &[&str] = &[
    "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "student", "essay",
    "source", "citation", "paragraph", "sentence", "copied", "original", "author", "reference",
    "research", "paper", "draft", "review", "lecture", "class", "topic", "argument", "evidence",
    "conclusion", "introduction", "summary", "quote", "idea", "word", "phrase", "document",
    "similar", "different", "honest", "credit", "work",
];

/// Generate a text of N words with a non-periodic word order.
pub fn generate_text_word_count(word_count: usize, seed: u64) -> String {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    let mut words = Vec::with_capacity(word_count);
    for _ in 0..word_count {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        words.push(WORDS[(state >> 33) as usize % WORDS.len()]);
    }
    words.join(" ")
}

/// Build a pair of documents where roughly `copied_percent` of the second
/// document is taken verbatim from the first.
pub fn generate_pair(word_count: usize, copied_percent: usize) -> (String, String) {
    let original = generate_text_word_count(word_count, 1);
    let fresh = generate_text_word_count(word_count, 2);

    let copied_words = word_count * copied_percent.min(100) / 100;
    let mut suspect: Vec<&str> = original.split(' ').take(copied_words).collect();
    suspect.extend(fresh.split(' ').skip(copied_words));
    (original, suspect.join(" "))
}
