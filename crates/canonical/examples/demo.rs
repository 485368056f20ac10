use canonical::{canonicalize, tokenize, CanonicalizeConfig};

fn main() {
    let input = "The end.Start of a NEW chapter -- isn't it?";

    println!("tokens: {:?}", tokenize(input));

    let cfg = CanonicalizeConfig::default().with_unicode_normalization(true);
    match canonicalize(input, &cfg) {
        Ok(doc) => {
            println!("canonical text: {}", doc.canonical_text);
            println!("digest (v{}): {}", doc.canonical_version, doc.sha256_hex);
            for token in &doc.tokens {
                println!("  {:>3}..{:<3} {}", token.start, token.end, token.text);
            }
        }
        Err(err) => eprintln!("canonicalization failed: {err}"),
    }
}
