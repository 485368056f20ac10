//! Shingling and winnowing for plagcheck perceptual similarity.
//!
//! Word n-grams feed the n-gram overlap metric. Hashed k-token windows are
//! winnowed to a sparse set of fingerprints that survives small edits.

use std::collections::{BTreeSet, VecDeque};

use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::fingerprint::WinnowedShingle;

/// Build the set of space-joined word n-grams of `tokens`.
///
/// Sequences shorter than `n` (and `n == 0`) produce an empty set.
pub fn make_ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> BTreeSet<String> {
    if n == 0 || tokens.len() < n {
        return BTreeSet::new();
    }
    tokens
        .windows(n)
        .map(|window| {
            let mut gram = String::new();
            for (idx, token) in window.iter().enumerate() {
                if idx > 0 {
                    gram.push(' ');
                }
                gram.push_str(token.as_ref());
            }
            gram
        })
        .collect()
}

/// Stable 64-bit hash of a single token.
///
/// XXH3 with an explicit seed: identical across runs, processes and
/// platforms.
#[inline]
pub fn token_hash(token: &str, seed: u64) -> u64 {
    xxh3_64_with_seed(token.as_bytes(), seed)
}

/// Hash every k-token window of `tokens`, in window order.
///
/// For the window starting at `i`:
///
/// ```text
/// h = Σ_j token_hash(tokens[i + j]) · base^j  (mod modulus),  j in 0..k
/// ```
///
/// Arithmetic is exact modular arithmetic over 128-bit intermediates, so
/// every returned value is `< modulus`. Produces `tokens.len() - k + 1`
/// hashes, or none when the sequence is shorter than `k`.
pub fn make_shingles_rolling<S: AsRef<str>>(
    tokens: &[S],
    k: usize,
    base: u64,
    modulus: u64,
    seed: u64,
) -> Vec<u64> {
    let n = tokens.len();
    if k == 0 || n < k || modulus == 0 {
        return Vec::new();
    }
    let m = modulus as u128;

    // Hash and reduce each token once; windows share them.
    let mut th: Vec<u128> = Vec::with_capacity(n);
    th.extend(
        tokens
            .iter()
            .map(|t| token_hash(t.as_ref(), seed) as u128 % m),
    );

    // base^j mod M for every position inside a window.
    let mut powers: Vec<u128> = Vec::with_capacity(k);
    let mut p = 1u128 % m;
    for _ in 0..k {
        powers.push(p);
        p = p * (base as u128 % m) % m;
    }

    let mut out = Vec::with_capacity(n - k + 1);
    for window in th.windows(k) {
        let mut h = 0u128;
        for (&val, &pow) in window.iter().zip(powers.iter()) {
            h = (h + val * pow % m) % m;
        }
        out.push(h as u64);
    }
    out
}

/// Winnowing via monotonic deque, O(n).
///
/// Selects the minimum hash of every `w`-wide window of `shingles`
/// (windows start at `0..=len - w`), with rightmost tie-breaking. A stream
/// shorter than `w` has no complete window and selects nothing. Consecutive
/// windows that pick the same position emit it once.
pub fn winnow_minq(shingles: &[u64], w: usize) -> Vec<WinnowedShingle> {
    let n = shingles.len();
    let window = w.max(1);
    if n < window {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(n - window + 1);
    // Indices of the current window, in increasing order of hash value.
    let mut dq: VecDeque<usize> = VecDeque::with_capacity(window);
    let mut last_picked: Option<usize> = None;

    let push = |dq: &mut VecDeque<usize>, i: usize, vals: &[u64]| {
        // Dropping `>=` entries keeps the deque increasing and makes the
        // rightmost minimum win ties.
        while let Some(&j) = dq.back() {
            if vals[i] <= vals[j] {
                dq.pop_back();
            } else {
                break;
            }
        }
        dq.push_back(i);
    };

    let emit = |dq: &VecDeque<usize>,
                out: &mut Vec<WinnowedShingle>,
                last: &mut Option<usize>,
                vals: &[u64]| {
        if let Some(&idx) = dq.front() {
            if *last != Some(idx) {
                out.push(WinnowedShingle {
                    hash: vals[idx],
                    start_idx: idx,
                });
                *last = Some(idx);
            }
        }
    };

    for i in 0..window {
        push(&mut dq, i, shingles);
    }
    emit(&dq, &mut out, &mut last_picked, shingles);

    for i in window..n {
        let left = i - window + 1;
        while let Some(&j) = dq.front() {
            if j < left {
                dq.pop_front();
            } else {
                break;
            }
        }
        push(&mut dq, i, shingles);
        emit(&dq, &mut out, &mut last_picked, shingles);
    }

    out
}
