//! Suggestion candidates and delimited-source parsing.

use serde::Serialize;

/// One suggestion record eligible for matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Short display text; split into words when rendered
    pub title: String,
    /// Longer descriptive text; matched against but never rendered
    pub content: String,
    /// Opaque identifier, unused by matching
    pub id: String,
}

impl Candidate {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            id: id.into(),
        }
    }
}

/// Parse a delimited candidate source string into candidates.
///
/// Records are separated by `object_separator`, fields within a record by
/// `param_separator`, in `title`, `content`, `id` order. A record missing any
/// of the three fields (or with an empty one) is silently dropped; fields past
/// the third are ignored. Dropped records do not shift later valid records.
pub fn parse_candidate_source(
    source: &str,
    object_separator: &str,
    param_separator: &str,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for record in source.split(object_separator) {
        let fields: Vec<&str> = record.split(param_separator).collect();
        if fields.len() < 3 {
            continue;
        }
        let (title, content, id) = (fields[0], fields[1], fields[2]);
        if title.is_empty() || content.is_empty() || id.is_empty() {
            continue;
        }
        candidates.push(Candidate::new(title, content, id));
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_well_formed_records() {
        let src = "Red Shoes|Comfortable red shoes|1###Blue Hat|Stylish item|2";
        let parsed = parse_candidate_source(src, "###", "|");
        assert_eq!(
            parsed,
            vec![
                Candidate::new("Red Shoes", "Comfortable red shoes", "1"),
                Candidate::new("Blue Hat", "Stylish item", "2"),
            ]
        );
    }

    #[test]
    fn drops_records_with_missing_fields() {
        let parsed = parse_candidate_source("OnlyTitle###Valid|Content|3", "###", "|");
        assert_eq!(parsed, vec![Candidate::new("Valid", "Content", "3")]);
    }

    #[test]
    fn drops_records_with_empty_fields() {
        let parsed = parse_candidate_source("a||1###b|c|###x|y|9", "###", "|");
        assert_eq!(parsed, vec![Candidate::new("x", "y", "9")]);
    }

    #[test]
    fn dropped_records_do_not_shift_later_ones() {
        let parsed = parse_candidate_source("bad###a|b|1###also-bad###c|d|2", "###", "|");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].title, "a");
        assert_eq!(parsed[1].title, "c");
    }

    #[test]
    fn ignores_fields_past_the_third() {
        let parsed = parse_candidate_source("a|b|1|extra|junk", "###", "|");
        assert_eq!(parsed, vec![Candidate::new("a", "b", "1")]);
    }

    #[test]
    fn empty_source_yields_no_candidates() {
        assert!(parse_candidate_source("", "###", "|").is_empty());
    }

    #[test]
    fn custom_separators() {
        let parsed = parse_candidate_source("a;b;1%%c;d;2", "%%", ";");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1], Candidate::new("c", "d", "2"));
    }
}
