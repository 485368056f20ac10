use std::borrow::Cow;

use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;

use crate::config::CanonicalizeConfig;
use crate::document::CanonicalizedDocument;
use crate::error::CanonicalError;
use crate::hash::hash_canonical_bytes;
use crate::token::Token;

/// Main entry point. Takes raw document text and a config and returns the
/// canonicalized document.
///
/// Empty or punctuation-only input is not an error: it canonicalizes to an
/// empty text with no tokens, and the similarity metrics apply their own
/// empty-input policies downstream.
pub fn canonicalize(
    input: &str,
    cfg: &CanonicalizeConfig,
) -> Result<CanonicalizedDocument, CanonicalError> {
    cfg.validate()?;
    Ok(canonicalize_unchecked(input, cfg))
}

/// Canonicalize without validating `cfg`. Callers must pass a config that
/// has already been validated.
pub(crate) fn canonicalize_unchecked(input: &str, cfg: &CanonicalizeConfig) -> CanonicalizedDocument {
    // Unicode normalization runs first, as it can change character boundaries.
    let normalized: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(input.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(input)
    };

    // Whole-string lowercasing keeps context-sensitive mappings such as the
    // Greek final sigma.
    let cased: Cow<str> = if cfg.lowercase {
        Cow::Owned(normalized.to_lowercase())
    } else {
        normalized
    };

    let mut canonical_text = String::with_capacity(cased.len());
    let mut tokens: Vec<Token> = Vec::with_capacity((cased.len() / 4).saturating_add(1));
    let mut pending_space = false;
    let mut current_token_start: Option<usize> = None;

    for ch in cased.chars() {
        dispatch_char(
            ch,
            cfg,
            &mut canonical_text,
            &mut tokens,
            &mut pending_space,
            &mut current_token_start,
        );
    }

    // The last token needs to be finalized after the loop.
    finalize_token(&mut tokens, &canonical_text, &mut current_token_start);

    let sha256_hex = hash_canonical_bytes(cfg.version, canonical_text.as_bytes());

    CanonicalizedDocument {
        canonical_text,
        tokens,
        sha256_hex,
        canonical_version: cfg.version,
        config: cfg.clone(),
    }
}

/// Word characters survive punctuation stripping: letters (`L*`), numbers
/// (`N*`) and `_`. Combining marks are not word characters, even the ones
/// Unicode lists as alphabetic.
#[inline]
pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_letter() || ch.is_number() || ch == '_'
}

/// Token separators: Unicode `White_Space` plus the ASCII information
/// separators U+001C..=U+001F.
#[inline]
pub(crate) fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

/// Decides whether a character is a delimiter, deleted, or part of a token.
fn dispatch_char(
    ch: char,
    cfg: &CanonicalizeConfig,
    canonical_text: &mut String,
    tokens: &mut Vec<Token>,
    pending_space: &mut bool,
    current_token_start: &mut Option<usize>,
) {
    if is_separator(ch) {
        finalize_token(tokens, canonical_text, current_token_start);
        if !canonical_text.is_empty() {
            *pending_space = true;
        }
    } else if cfg.strip_punctuation && !is_word_char(ch) {
        // Deleted in place: the surrounding characters stay in the same token.
    } else {
        append_char(ch, canonical_text, current_token_start, pending_space);
    }
}

fn append_char(
    ch: char,
    canonical_text: &mut String,
    current_token_start: &mut Option<usize>,
    pending_space: &mut bool,
) {
    if *pending_space {
        canonical_text.push(' ');
        *pending_space = false;
        *current_token_start = Some(canonical_text.len());
    } else if current_token_start.is_none() {
        *current_token_start = Some(canonical_text.len());
    }

    canonical_text.push(ch);
}

fn finalize_token(
    tokens: &mut Vec<Token>,
    canonical_text: &str,
    current_token_start: &mut Option<usize>,
) {
    if let Some(start) = current_token_start.take() {
        if start < canonical_text.len() {
            let end = canonical_text.len();
            tokens.push(Token {
                text: canonical_text[start..end].to_string(),
                start,
                end,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_char_classification() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('7'));
        assert!(is_word_char('_'));
        assert!(is_word_char('é'));
        assert!(!is_word_char('.'));
        assert!(!is_word_char('-'));
        assert!(!is_word_char('\''));
        assert!(!is_word_char(' '));
        // Devanagari vowel sign AA is a spacing mark, not a letter.
        assert!(!is_word_char('\u{093e}'));
        assert!(is_word_char('\u{0915}'));
        assert!(is_word_char('Ⅻ'));
    }

    #[test]
    fn information_separators_split_tokens() {
        for sep in ['\u{1c}', '\u{1d}', '\u{1e}', '\u{1f}'] {
            let input = format!("a{sep}b");
            let doc = canonicalize(&input, &CanonicalizeConfig::default()).unwrap();
            assert_eq!(doc.token_texts(), vec!["a", "b"]);
        }
    }

    #[test]
    fn combining_marks_are_stripped() {
        let doc = canonicalize("\u{0915}\u{093e}", &CanonicalizeConfig::default()).unwrap();
        assert_eq!(doc.token_texts(), vec!["\u{0915}"]);
    }

    #[test]
    fn pending_space_collapses_runs() {
        let doc = canonicalize("  a  ,  b  ", &CanonicalizeConfig::default()).unwrap();
        assert_eq!(doc.canonical_text, "a b");
        assert_eq!(doc.tokens.len(), 2);
    }
}
