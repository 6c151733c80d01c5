//! Near-miss suggestions for unknown keys.

use strsim::levenshtein;

/// Compute typo suggestions for `name` from the available candidates.
///
/// Candidates within Levenshtein distance 1 (names of up to 3 characters)
/// or 2 (longer names) are returned closest-first, capped at 3.
pub fn compute_suggestions<'a>(
    name: &str,
    available: impl Iterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            (dist > 0 && dist <= max_distance).then(|| (dist, candidate.to_string()))
        })
        .collect();

    suggestions.sort();
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
