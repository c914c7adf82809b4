//! Order-insensitive token-set similarity on a 0–100 scale.
//!
//! Both sides are reduced to sets of lower-case alphanumeric tokens. The
//! score is the best Indel ratio between the shared tokens and each side's
//! full token list, so "Acme" and "Acme B.V." score 100 while word order never
//! matters.

use std::collections::BTreeSet;

/// Drops Latin-1 supplement characters (U+0080..=U+00FF), turns anything else
/// that is not alphanumeric into a space, lower-cases and trims. Letters from
/// other scripts (Cyrillic, Greek, CJK, ...) are kept.
pub fn preprocess(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| !('\u{80}'..='\u{ff}').contains(c))
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    cleaned.trim().to_lowercase()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: BTreeSet<String>,
}

impl TokenSet {
    pub fn new(value: &str) -> Self {
        let tokens = preprocess(value)
            .split_whitespace()
            .map(str::to_owned)
            .collect();
        Self { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn ratio(&self, other: &TokenSet) -> u8 {
        if self.is_empty() || other.is_empty() {
            return 0;
        }

        let sect: Vec<&str> = self
            .tokens
            .intersection(&other.tokens)
            .map(String::as_str)
            .collect();
        let diff_ab: Vec<&str> = self
            .tokens
            .difference(&other.tokens)
            .map(String::as_str)
            .collect();
        let diff_ba: Vec<&str> = other
            .tokens
            .difference(&self.tokens)
            .map(String::as_str)
            .collect();

        // 一邊完全包含另一邊
        if !sect.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
            return 100;
        }

        let sect = sect.join(" ");
        let combined_ab = join_tokens(&sect, &diff_ab.join(" "));
        let combined_ba = join_tokens(&sect, &diff_ba.join(" "));

        let mut best = indel_ratio(&combined_ab, &combined_ba);
        if !sect.is_empty() {
            best = best
                .max(indel_ratio(&sect, &combined_ab))
                .max(indel_ratio(&sect, &combined_ba));
        }

        round_score(best)
    }
}

pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    TokenSet::new(a).ratio(&TokenSet::new(b))
}

fn join_tokens(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{} {}", head, tail),
    }
}

/// `100 * (1 - indel / (|a| + |b|))`, where indel counts insertions and
/// deletions and lengths are counted in chars.
fn indel_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let lensum = a.len() + b.len();
    if lensum == 0 {
        return 100.0;
    }
    let distance = lensum - 2 * lcs_len(&a, &b);
    100.0 - 100.0 * distance as f64 / lensum as f64
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn round_score(score: f64) -> u8 {
    score.clamp(0.0, 100.0).round_ties_even() as u8
}
