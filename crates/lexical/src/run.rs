//! Longest common contiguous word run.

use serde::{Deserialize, Serialize};

/// Longest run of consecutive tokens shared by two sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonRun {
    /// Number of tokens in the run.
    pub length: usize,
    /// Index of the first token of the run in the first sequence.
    pub start: usize,
    /// Run tokens of the first sequence joined by single spaces. Empty when
    /// `length == 0`.
    pub text: String,
}

impl CommonRun {
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Longest common substring over tokens.
///
/// Runs in `O(m·n)` time with two rolling rows. On ties the run that ends
/// first in `tokens1` wins.
pub fn longest_common_run<S: AsRef<str>>(tokens1: &[S], tokens2: &[S]) -> CommonRun {
    if tokens1.is_empty() || tokens2.is_empty() {
        return CommonRun::default();
    }

    let cols = tokens2.len() + 1;
    let mut prev = vec![0usize; cols];
    let mut curr = vec![0usize; cols];
    let mut best_len = 0usize;
    let mut best_end = 0usize;

    for (i, a) in tokens1.iter().enumerate() {
        let a = a.as_ref();
        for (j, b) in tokens2.iter().enumerate() {
            curr[j + 1] = if a == b.as_ref() { prev[j] + 1 } else { 0 };
            if curr[j + 1] > best_len {
                best_len = curr[j + 1];
                best_end = i + 1;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    if best_len == 0 {
        return CommonRun::default();
    }

    let start = best_end - best_len;
    let text = tokens1[start..best_end]
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");

    CommonRun {
        length: best_len,
        start,
        text,
    }
}
