//! Suggestion matching (per-keystroke evaluation pass).
//!
//! Evaluation is a pure function over `(candidates, query)`: each keystroke
//! produces a fresh hit list with per-hit matched terms, so no matcher state
//! leaks between passes. Matching is case-sensitive substring containment
//! against `title` first, then `content`; the rendering layer applies its own
//! case-insensitive word highlighting on top of the recorded terms.

use crate::candidate::Candidate;

/// Input values shorter than this never evaluate (and never render).
pub const MIN_QUERY_CHARS: usize = 2;

/// Query terms shorter than this are skipped entirely.
pub const MIN_TERM_CHARS: usize = 3;

/// A matched candidate plus the terms recorded for it in the current pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit<'a> {
    pub candidate: &'a Candidate,
    /// Terms that drove this candidate's inclusion; used only for highlighting
    pub matched_terms: Vec<String>,
}

/// Evaluate one keystroke against the candidate list.
///
/// Terms are the whitespace-delimited tokens of `query`; tokens shorter than
/// [`MIN_TERM_CHARS`] are never compared and never recorded. A candidate
/// enters the hit set at the first term that is a substring of its title
/// (recorded for highlighting) or of its content (recorded only when nothing
/// has been recorded for the candidate yet); once in the hit set, later terms
/// are not considered for it. Hits keep candidate order.
pub fn evaluate<'a>(candidates: &'a [Candidate], query: &str) -> Vec<Hit<'a>> {
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    let terms: Vec<&str> = query.split_whitespace().collect();

    let mut hits = Vec::new();
    for candidate in candidates {
        let mut matched_terms: Vec<String> = Vec::new();
        let mut in_hit_set = false;
        for term in &terms {
            if term.chars().count() < MIN_TERM_CHARS {
                continue;
            }
            if !in_hit_set && candidate.title.contains(term) {
                matched_terms.push((*term).to_string());
                in_hit_set = true;
            } else if !in_hit_set && candidate.content.contains(term) {
                // Only the first content hit is recorded for highlighting.
                if matched_terms.is_empty() {
                    matched_terms.push((*term).to_string());
                }
                in_hit_set = true;
            }
        }
        if in_hit_set {
            hits.push(Hit {
                candidate,
                matched_terms,
            });
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop_candidates() -> Vec<Candidate> {
        vec![
            Candidate::new("Red Shoes", "Comfortable red shoes", "1"),
            Candidate::new("Blue Hat", "Stylish item", "2"),
        ]
    }

    fn titles<'a>(hits: &[Hit<'a>]) -> Vec<&'a str> {
        hits.iter().map(|h| h.candidate.title.as_str()).collect()
    }

    #[test]
    fn queries_shorter_than_two_chars_never_evaluate() {
        let candidates = shop_candidates();
        assert!(evaluate(&candidates, "").is_empty());
        assert!(evaluate(&candidates, "r").is_empty());
    }

    #[test]
    fn two_char_query_evaluates_but_its_terms_are_skipped() {
        let candidates = shop_candidates();
        // "re" qualifies as input but is too short to be a term
        assert!(evaluate(&candidates, "re").is_empty());
    }

    #[test]
    fn short_terms_inside_longer_queries_are_ignored() {
        let candidates = shop_candidates();
        let hits = evaluate(&candidates, "xy Stylish");
        assert_eq!(titles(&hits), vec!["Blue Hat"]);
        assert_eq!(hits[0].matched_terms, vec!["Stylish"]);
    }

    #[test]
    fn content_match_is_case_sensitive() {
        let candidates = shop_candidates();
        let hits = evaluate(&candidates, "red");
        assert_eq!(titles(&hits), vec!["Red Shoes"]);
        assert_eq!(hits[0].matched_terms, vec!["red"]);

        // Wrong case matches nothing
        assert!(evaluate(&candidates, "RED").is_empty());
    }

    #[test]
    fn title_match_is_case_sensitive() {
        let candidates = shop_candidates();
        let hits = evaluate(&candidates, "Shoes");
        assert_eq!(titles(&hits), vec!["Red Shoes"]);
        assert_eq!(hits[0].matched_terms, vec!["Shoes"]);

        assert!(evaluate(&candidates, "shoes").len() == 1, "matches via content");
        assert_eq!(evaluate(&candidates, "shoes")[0].matched_terms, vec!["shoes"]);
    }

    #[test]
    fn first_matching_term_wins_for_a_candidate() {
        let candidates = shop_candidates();

        // "item" puts Blue Hat in the hit set; lowercase "hat" is not a
        // case-sensitive substring of "Blue Hat" and records nothing.
        let hits = evaluate(&candidates, "item hat");
        assert_eq!(titles(&hits), vec!["Blue Hat"]);
        assert_eq!(hits[0].matched_terms, vec!["item"]);

        // Even with exact case, a candidate already in the hit set records
        // no further terms.
        let hits = evaluate(&candidates, "item Hat");
        assert_eq!(titles(&hits), vec!["Blue Hat"]);
        assert_eq!(hits[0].matched_terms, vec!["item"]);

        // Reversed order records the title term instead.
        let hits = evaluate(&candidates, "Hat item");
        assert_eq!(hits[0].matched_terms, vec!["Hat"]);
    }

    #[test]
    fn candidates_appear_at_most_once() {
        let candidates = shop_candidates();
        let hits = evaluate(&candidates, "Stylish item");
        assert_eq!(titles(&hits), vec!["Blue Hat"]);
    }

    #[test]
    fn hits_keep_candidate_order() {
        let candidates = shop_candidates();
        // "Stylish" only matches the second candidate, "red" only the first;
        // hit order follows the candidate list, not term order.
        let hits = evaluate(&candidates, "Stylish red");
        assert_eq!(titles(&hits), vec!["Red Shoes", "Blue Hat"]);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let candidates = shop_candidates();
        let first = evaluate(&candidates, "red shoes");
        let second = evaluate(&candidates, "red shoes");
        assert_eq!(first, second);
    }

    #[test]
    fn empty_candidate_list_yields_empty_hits() {
        assert!(evaluate(&[], "anything at all").is_empty());
    }

    #[test]
    fn whitespace_only_query_yields_empty_hits() {
        let candidates = shop_candidates();
        assert!(evaluate(&candidates, "   ").is_empty());
    }
}
