use crate::trie::Trie;

/// Generate ranked spelling suggestions for `word`.
///
/// Candidates are every stored word within `max_mistakes` substitutions.
/// They are ordered by how many positions differ from `word`, ties broken
/// alphabetically, and at most `max_suggestions` are kept.
pub fn generate(word: &str, trie: &Trie, max_mistakes: i32, max_suggestions: usize) -> Vec<String> {
    let candidates = trie.suggest_with_budget(word, max_mistakes);
    rank(word, candidates, max_suggestions)
}

/// Order candidates by substitution count, then alphabetically.
pub fn rank(word: &str, mut candidates: Vec<String>, limit: usize) -> Vec<String> {
    candidates.sort_by_cached_key(|c| (substitutions(word, c), c.clone()));
    candidates.dedup();
    candidates.truncate(limit);
    candidates
}

/// Number of positions at which two words differ, plus any length difference.
pub fn substitutions(a: &str, b: &str) -> usize {
    let mut a_chars = a.chars();
    let mut b_chars = b.chars();
    let mut count = 0;

    loop {
        match (a_chars.next(), b_chars.next()) {
            (Some(x), Some(y)) => {
                if x != y {
                    count += 1;
                }
            }
            (Some(_), None) | (None, Some(_)) => count += 1,
            (None, None) => return count,
        }
    }
}
