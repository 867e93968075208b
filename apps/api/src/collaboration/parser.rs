//! Ordered parser strategies for collaborator recommendations.
//!
//! direct → extract first balanced array → repair. The first strategy that
//! yields a non-empty list of objects wins.

use serde_json::{Map, Value};
use tracing::debug;

use crate::collaboration::repair::repair;
use crate::llm_client::strip_json_fences;
use crate::pipeline::ParseFailure;

/// One model-provided artist object, before normalization.
pub type Candidate = Map<String, Value>;

type Strategy = fn(&str) -> Option<Vec<Candidate>>;

const STRATEGIES: &[(&str, Strategy)] = &[
    ("direct", parse_direct),
    ("extract", parse_extracted),
    ("repair", parse_repaired),
];

/// Runs the strategies in order over the raw model text.
pub fn parse_candidates(raw: &str) -> Result<Vec<Candidate>, ParseFailure> {
    if raw.trim().is_empty() {
        return Err(ParseFailure::Empty);
    }

    for (name, strategy) in STRATEGIES {
        if let Some(candidates) = strategy(raw) {
            debug!(strategy = name, count = candidates.len(), "Recommendation parse succeeded");
            return Ok(candidates);
        }
    }

    Err(ParseFailure::Unusable(
        "no strategy produced a non-empty artist array".to_string(),
    ))
}

fn parse_direct(raw: &str) -> Option<Vec<Candidate>> {
    candidates_from_text(strip_json_fences(raw))
}

fn parse_extracted(raw: &str) -> Option<Vec<Candidate>> {
    first_balanced_array(raw).and_then(candidates_from_text)
}

fn parse_repaired(raw: &str) -> Option<Vec<Candidate>> {
    let stripped = strip_json_fences(raw);
    let region = first_balanced_array(stripped).unwrap_or(stripped);
    candidates_from_text(&repair(region))
}

fn candidates_from_text(text: &str) -> Option<Vec<Candidate>> {
    serde_json::from_str::<Value>(text.trim())
        .ok()
        .and_then(candidates_from_value)
}

/// Accepts a bare array or an object wrapping one under `artists`.
fn candidates_from_value(value: Value) -> Option<Vec<Candidate>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("artists") {
            Some(Value::Array(items)) => items,
            _ => return None,
        },
        _ => return None,
    };

    let candidates: Vec<Candidate> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect();

    (!candidates.is_empty()).then_some(candidates)
}

/// The first `[` that opens an array of objects, up to its matching `]`.
/// Brackets inside string literals are ignored.
fn first_balanced_array(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut search_from = 0;

    while let Some(offset) = text[search_from..].find('[') {
        let start = search_from + offset;
        let opens_objects = text[start + 1..].trim_start().starts_with('{');
        if opens_objects {
            if let Some(end) = matching_close(bytes, start) {
                return Some(&text[start..=end]);
            }
        }
        search_from = start + 1;
    }
    None
}

fn matching_close(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => depth += 1,
            b']' | b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(candidates: &[Candidate]) -> Vec<&str> {
        candidates
            .iter()
            .map(|c| c.get("name").and_then(Value::as_str).unwrap_or(""))
            .collect()
    }

    #[test]
    fn test_direct_array() {
        let got = parse_candidates(r#"[{"name": "Ana"}, {"name": "Ben"}]"#).unwrap();
        assert_eq!(names(&got), vec!["Ana", "Ben"]);
    }

    #[test]
    fn test_fenced_and_wrapped() {
        let raw = "```json\n{\"artists\": [{\"name\": \"Ana\"}]}\n```";
        assert_eq!(names(&parse_candidates(raw).unwrap()), vec!["Ana"]);
    }

    #[test]
    fn test_extracts_array_from_prose() {
        let raw = "Sure! Here are my picks: [{\"name\": \"Ana [2nd]\"}] Hope that helps [1].";
        assert_eq!(names(&parse_candidates(raw).unwrap()), vec!["Ana [2nd]"]);
    }

    #[test]
    fn test_repairs_bare_keys_and_trailing_commas() {
        let raw = "Results:\n[{name: \"Lee\", specialty: \"Oil\",},]";
        let got = parse_candidates(raw).unwrap();
        assert_eq!(names(&got), vec!["Lee"]);
        assert_eq!(got[0]["specialty"], "Oil");
    }

    #[test]
    fn test_repaired_array_equals_well_formed_equivalent() {
        let well_formed = r#"[
            {"name": "Lee", "specialty": "Oil", "compatibilityScore": 88,
             "detailedAnalysis": {"toolExpertise": {"score": 27, "description": "Brushes, knives"}},
             "collaborationInsights": ["Keeps deadlines", "Shares a studio"],
             "contactInformation": {"email": "lee@example.com"}},
            {"name": "Ana", "bio": "Works at 1:1 scale, {mostly}"}
        ]"#;
        let bare_keys = r#"[
            {name: "Lee", specialty: "Oil", compatibilityScore: 88,
             detailedAnalysis: {toolExpertise: {score: 27, description: "Brushes, knives",},},
             collaborationInsights: ["Keeps deadlines", "Shares a studio",],
             contactInformation: {email: "lee@example.com",},},
            {name: "Ana", bio: "Works at 1:1 scale, {mostly}",},
        ]"#;

        let expected = parse_candidates(well_formed).unwrap();
        assert_eq!(parse_candidates(bare_keys).unwrap(), expected);
        assert_eq!(expected.len(), 2);
    }

    #[test]
    fn test_empty_array_is_a_failure() {
        assert!(matches!(parse_candidates("[]"), Err(ParseFailure::Unusable(_))));
        assert!(matches!(
            parse_candidates(r#"{"artists": []}"#),
            Err(ParseFailure::Unusable(_))
        ));
    }

    #[test]
    fn test_blank_and_prose_fail() {
        assert!(matches!(parse_candidates("  \n"), Err(ParseFailure::Empty)));
        assert!(matches!(
            parse_candidates("Name: Lee\nSpecialty: Oil"),
            Err(ParseFailure::Unusable(_))
        ));
    }

    #[test]
    fn test_truncated_array_fails() {
        assert!(parse_candidates(r#"[{"name": "Ana"}, {"name": "Be"#).is_err());
    }
}
