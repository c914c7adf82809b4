use crate::core::compare::canonical;
use crate::core::similarity::TokenSet;
use crate::domain::model::{LinkedPair, PersonRecord};

/// Minimum name similarity for a link. Fixed on purpose: it only keeps
/// obviously different people apart and is unrelated to the user thresholds.
pub const NAME_MATCH_FLOOR: u8 = 90;

/// Best-scoring candidate for `query`. Ties keep the earliest candidate.
pub fn best_match(query: &TokenSet, candidates: &[TokenSet]) -> Option<(usize, u8)> {
    let mut best: Option<(usize, u8)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let score = query.ratio(candidate);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((index, score)),
        }
    }
    best
}

/// Links every Bullhorn record to its closest LinkedIn name.
///
/// Produces at most one pair per Bullhorn record, in Bullhorn order. Several
/// Bullhorn records may link to the same LinkedIn record; common names can
/// therefore cross-link.
pub fn link_names(linkedin: &[PersonRecord], bullhorn: &[PersonRecord]) -> Vec<LinkedPair> {
    let candidates: Vec<TokenSet> = linkedin.iter().map(|r| TokenSet::new(&r.name)).collect();

    let pairs: Vec<LinkedPair> = bullhorn
        .iter()
        .filter_map(|anchor| {
            let (index, score) = best_match(&TokenSet::new(&anchor.name), &candidates)?;
            if score < NAME_MATCH_FLOOR {
                tracing::trace!("No link for '{}' (best score {})", anchor.name, score);
                return None;
            }
            let matched = &linkedin[index];
            Some(LinkedPair {
                anchor_name: anchor.name.clone(),
                matched_name: matched.name.clone(),
                match_score: score,
                title_a: canonical(&matched.title),
                title_b: canonical(&anchor.title),
                company_a: canonical(&matched.company),
                company_b: canonical(&anchor.company),
            })
        })
        .collect();

    tracing::debug!(
        "Linked {} of {} Bullhorn records against {} LinkedIn records",
        pairs.len(),
        bullhorn.len(),
        linkedin.len()
    );

    pairs
}
