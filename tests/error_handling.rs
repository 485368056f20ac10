//! Edge cases and configuration errors

use plagcheck::{
    CanonicalError, CanonicalizeConfig, DocumentError, MatchConfig, MatchError, Matcher,
    NO_COMMON_TEXT, PerceptualConfig, PerceptualError, ScoreWeights, canonicalize,
    comprehensive_check, compare_files, fingerprint_tokens, read_document, tokenize,
};

#[test]
fn empty_documents_score_zero() {
    let result = comprehensive_check("", "");
    assert_eq!(result.ngram_similarity, 0.0);
    assert_eq!(result.fingerprint_similarity, 0.0);
    assert_eq!(result.cosine_similarity, 0.0);
    assert_eq!(result.overall_score, 0.0);
    assert_eq!(result.longest_common_words, 0);
    assert_eq!(result.longest_common_text, NO_COMMON_TEXT);
}

#[test]
fn punctuation_only_documents_have_no_tokens() {
    assert!(tokenize("?!... --- ;;").is_empty());
    let result = comprehensive_check("?!...", "the real text is here");
    assert_eq!(result.overall_score, 0.0);
}

#[test]
fn short_documents_have_no_fingerprint() {
    let result = comprehensive_check("one two three four", "one two three four");
    assert_eq!(result.fingerprint_similarity, 0.0);
    assert_eq!(result.ngram_similarity, 1.0);
    assert_eq!(result.longest_common_words, 4);
}

#[test]
fn single_word_documents() {
    let result = comprehensive_check("plagiarism", "plagiarism");
    assert_eq!(result.ngram_similarity, 0.0);
    assert_eq!(result.fingerprint_similarity, 0.0);
    assert_eq!(result.longest_common_words, 1);
    assert_eq!(result.longest_common_text, "plagiarism");
}

#[test]
fn punctuation_is_deleted_not_split() {
    assert_eq!(tokenize("end.Start now"), vec!["endstart", "now"]);
    assert_eq!(tokenize("snake_case stays"), vec!["snake_case", "stays"]);
}

#[test]
fn unicode_text_is_compared() {
    let result = comprehensive_check("Ο δρόμος είναι μακρύς", "ο ΔΡΌΜΟΣ είναι μακρύς");
    assert_eq!(result.longest_common_words, 4);
    assert!((result.cosine_similarity - 1.0).abs() < 1e-9);
}

#[test]
fn invalid_canonical_config_rejected() {
    let cfg = CanonicalizeConfig {
        version: 0,
        ..CanonicalizeConfig::default()
    };
    assert!(matches!(
        canonicalize("text", &cfg),
        Err(CanonicalError::InvalidConfig(_))
    ));
    assert!(matches!(
        Matcher::new(MatchConfig::default().with_canonical(cfg)),
        Err(MatchError::Canonical(_))
    ));
}

#[test]
fn invalid_perceptual_config_rejected() {
    let cfg = PerceptualConfig::default().with_modulus(1);
    assert!(matches!(
        cfg.validate(),
        Err(PerceptualError::InvalidConfigModulus { modulus: 1 })
    ));
    assert!(matches!(
        Matcher::new(MatchConfig::default().with_perceptual(cfg)),
        Err(MatchError::Perceptual(_))
    ));
}

#[test]
fn not_enough_tokens_for_fingerprint() {
    let tokens = tokenize("too short");
    assert!(matches!(
        fingerprint_tokens(&tokens, &PerceptualConfig::default()),
        Err(PerceptualError::NotEnoughTokens { k: 5, got: 2 })
    ));
}

#[test]
fn invalid_weights_rejected() {
    let weights = ScoreWeights {
        ngram: 0.3,
        fingerprint: 0.3,
        cosine: 0.3,
    };
    assert!(matches!(
        Matcher::new(MatchConfig::default().with_weights(weights)),
        Err(MatchError::InvalidConfig(_))
    ));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    let err = read_document(&missing).unwrap_err();
    assert!(matches!(err, DocumentError::Read { .. }));
    assert!(err.to_string().contains("missing.txt"));

    let present = dir.path().join("present.txt");
    std::fs::write(&present, "some text").unwrap();
    assert!(compare_files(&Matcher::default(), &present, &missing).is_err());
}
