//! Term weighting and cosine similarity.

use std::collections::{BTreeMap, BTreeSet};

/// Sparse term-weight vector keyed by token. Ordered so that every
/// summation over it runs in the same order on every call.
pub type WeightVector = BTreeMap<String, f64>;

/// Relative frequency of every token: `count / len`.
///
/// Empty input gives an empty map.
pub fn term_frequencies<S: AsRef<str>>(tokens: &[S]) -> BTreeMap<String, f64> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.as_ref().to_string()).or_insert(0) += 1;
    }

    let total = tokens.len() as f64;
    counts
        .into_iter()
        .map(|(term, count)| (term, count as f64 / total))
        .collect()
}

/// Inverse document frequency over the given corpus:
/// `ln(N / (1 + df))`.
///
/// With the two-document corpus used for pairwise comparison, a term found
/// in one document weighs `0` and a term found in both weighs `ln(2/3)`.
pub fn inverse_document_frequencies<S: AsRef<str>>(documents: &[&[S]]) -> BTreeMap<String, f64> {
    let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
    for doc in documents {
        let unique: BTreeSet<&str> = doc.iter().map(AsRef::as_ref).collect();
        for term in unique {
            *doc_freq.entry(term.to_string()).or_insert(0) += 1;
        }
    }

    let n_docs = documents.len() as f64;
    doc_freq
        .into_iter()
        .map(|(term, df)| (term, (n_docs / (1.0 + df as f64)).ln()))
        .collect()
}

/// `tf · idf` weight of every token of `tokens`. Tokens missing from `idf`
/// weigh `0`.
pub fn weight_vector<S: AsRef<str>>(tokens: &[S], idf: &BTreeMap<String, f64>) -> WeightVector {
    term_frequencies(tokens)
        .into_iter()
        .map(|(term, tf)| {
            let weight = tf * idf.get(&term).copied().unwrap_or(0.0);
            (term, weight)
        })
        .collect()
}

fn dot(a: &WeightVector, b: &WeightVector) -> f64 {
    a.iter()
        .filter_map(|(term, wa)| b.get(term).map(|wb| wa * wb))
        .sum()
}

fn magnitude(v: &WeightVector) -> f64 {
    v.values().map(|w| w * w).sum::<f64>().sqrt()
}

/// Cosine of two weight vectors, clamped to `[0, 1]`.
///
/// `0.0` when either magnitude is zero.
pub fn cosine(a: &WeightVector, b: &WeightVector) -> f64 {
    let mag_a = magnitude(a);
    let mag_b = magnitude(b);
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    (dot(a, b) / (mag_a * mag_b)).clamp(0.0, 1.0)
}

/// TF-IDF cosine similarity of two token sequences, using the two sequences
/// themselves as the IDF corpus.
///
/// Either sequence empty gives `0.0`.
pub fn cosine_similarity<S: AsRef<str>>(tokens1: &[S], tokens2: &[S]) -> f64 {
    if tokens1.is_empty() || tokens2.is_empty() {
        return 0.0;
    }
    let idf = inverse_document_frequencies(&[tokens1, tokens2]);
    let v1 = weight_vector(tokens1, &idf);
    let v2 = weight_vector(tokens2, &idf);
    cosine(&v1, &v2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    #[test]
    fn term_frequencies_are_relative() {
        let tf = term_frequencies(&words("a b a c"));
        assert_eq!(tf.len(), 3);
        assert!((tf["a"] - 0.5).abs() < 1e-12);
        assert!((tf["b"] - 0.25).abs() < 1e-12);
        assert!((tf["c"] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn term_frequencies_empty() {
        assert!(term_frequencies::<&str>(&[]).is_empty());
    }

    #[test]
    fn idf_over_two_documents() {
        let a = words("x y y");
        let b = words("y z");
        let idf = inverse_document_frequencies(&[a.as_slice(), b.as_slice()]);
        assert_eq!(idf["x"], 0.0);
        assert_eq!(idf["z"], 0.0);
        assert!((idf["y"] - (2.0f64 / 3.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn weight_vector_defaults_missing_terms_to_zero() {
        let idf = BTreeMap::from([("a".to_string(), 2.0)]);
        let v = weight_vector(&words("a b"), &idf);
        assert!((v["a"] - 1.0).abs() < 1e-12);
        assert_eq!(v["b"], 0.0);
    }

    #[test]
    fn identical_documents_score_one() {
        let a = words("the cat sat on the mat");
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_documents_score_zero() {
        let a = words("alpha beta gamma");
        let b = words("delta epsilon zeta");
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn empty_side_scores_zero() {
        let a = words("some words here");
        let empty: Vec<&str> = Vec::new();
        assert_eq!(cosine_similarity(&a, &empty), 0.0);
        assert_eq!(cosine_similarity(&empty, &a), 0.0);
        assert_eq!(cosine_similarity(&empty, &empty), 0.0);
    }

    #[test]
    fn only_shared_terms_carry_weight() {
        // Shared terms "a" and "b" have identical relative frequencies on
        // both sides; unique terms weigh zero, so the vectors are parallel.
        let a = words("a b c");
        let b = words("a b d");
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn partial_overlap_is_between_bounds() {
        let a = words("a a b c");
        let b = words("a b b d");
        let s = cosine_similarity(&a, &b);
        // v1 = k(0.5, 0.25), v2 = k(0.25, 0.5) -> 0.25 / 0.3125 = 0.8
        assert!((s - 0.8).abs() < 1e-9, "got {s}");
    }

    #[test]
    fn cosine_is_symmetric() {
        let a = words("the quick brown fox jumps over the lazy dog");
        let b = words("the lazy dog sleeps while the quick fox runs");
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn cosine_is_clamped() {
        let v = BTreeMap::from([("a".to_string(), 1e-3), ("b".to_string(), 3e-7)]);
        let s = cosine(&v, &v);
        assert!(s <= 1.0 && s >= 0.0);
    }
}
