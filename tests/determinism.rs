use plagcheck::{
    CanonicalizeConfig, MatchConfig, Matcher, PerceptualConfig, canonicalize, comprehensive_check,
    fingerprint_tokens, tokenize,
};

const DOC_A: &str = "Academic integrity requires that every borrowed idea is credited to its source, \
     and every quoted sentence is marked as a quotation.";
const DOC_B: &str = "Academic honesty requires that each borrowed idea is credited to its original source; \
     quoted sentences must be marked as quotations.";

#[test]
fn equivalent_inputs_tokenize_identically() {
    let a = tokenize(" Hello   world!  ");
    let b = tokenize("hello WORLD!");
    assert_eq!(a, b);
    assert_eq!(a, vec!["hello", "world"]);
}

#[test]
fn canonical_digest_is_stable_across_calls() {
    let cfg = CanonicalizeConfig::default();
    let first = canonicalize(DOC_A, &cfg).expect("canonicalize");
    let second = canonicalize(DOC_A, &cfg).expect("canonicalize");
    assert_eq!(first.sha256_hex, second.sha256_hex);
    assert_eq!(first.canonical_text, second.canonical_text);
    assert_eq!(first.sha256_hex.len(), 64);
}

#[test]
fn fingerprints_equivalent_inputs_match() {
    let cfg = PerceptualConfig::default();
    let tokens_a = tokenize("The quick brown fox jumps over the lazy dog, again and again.");
    let tokens_b = tokenize("the QUICK brown fox jumps over the lazy dog again AND again");

    let fp_a = fingerprint_tokens(&tokens_a, &cfg).expect("first fingerprint");
    let fp_b = fingerprint_tokens(&tokens_b, &cfg).expect("second fingerprint");

    assert_eq!(fp_a.shingles, fp_b.shingles);
    assert_eq!(fp_a.fingerprints, fp_b.fingerprints);
    assert_eq!(fp_a.meta, fp_b.meta);
}

#[test]
fn repeated_comparisons_are_bit_identical() {
    let first = comprehensive_check(DOC_A, DOC_B);
    for _ in 0..10 {
        let again = comprehensive_check(DOC_A, DOC_B);
        assert_eq!(first, again);
        assert_eq!(
            first.overall_score.to_bits(),
            again.overall_score.to_bits()
        );
    }
}

#[test]
fn fresh_matchers_agree() {
    let a = Matcher::new(MatchConfig::default()).expect("matcher");
    let b = Matcher::new(MatchConfig::default()).expect("matcher");
    assert_eq!(
        a.compare(DOC_A, DOC_B).expect("compare"),
        b.compare(DOC_A, DOC_B).expect("compare")
    );
}

#[test]
fn minimal_document_keeps_its_smallest_window_hash() {
    // 8 tokens give 4 window hashes: exactly one winnowing window.
    let cfg = PerceptualConfig::default();
    let tokens = tokenize("one two three four five six seven eight");
    let fp = fingerprint_tokens(&tokens, &cfg).expect("fingerprint");
    let again = fingerprint_tokens(&tokens.clone(), &cfg).expect("fingerprint");

    assert_eq!(fp.shingles.len(), 4);
    assert_eq!(fp.winnowed.len(), 1);
    assert_eq!(fp.shingles, again.shingles);
    let min = *fp.shingles.iter().min().expect("non-empty");
    assert_eq!(fp.fingerprints.iter().copied().collect::<Vec<_>>(), vec![min]);
}
