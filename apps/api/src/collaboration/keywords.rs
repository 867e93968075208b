//! Keyword derivation for collaborator preferences.

/// At most this many keywords are derived from a preference text.
pub const MAX_KEYWORDS: usize = 5;

/// Themes used for portfolio highlights when the preferences yield no keywords.
pub const DEFAULT_THEMES: &[&str] = &["nature", "identity", "urban life", "memory", "color"];

const MIN_KEYWORD_LEN: usize = 3;

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "who", "that", "this", "these", "those", "want", "wants",
    "looking", "look", "need", "needs", "someone", "somebody", "artist", "artists",
    "collaborator", "collaborators", "collaborate", "collaboration", "like", "would", "into",
    "from", "have", "has", "are", "can", "could", "should", "work", "works", "working",
    "project", "projects", "about", "some", "any", "our", "your", "their", "them", "they",
    "you", "was", "were", "will", "find", "help", "also", "very", "really", "more", "most",
    "good", "great", "interested", "experience", "experienced", "style", "based",
    // auxiliary and modal verbs
    "does", "did", "done", "doing", "been", "being", "had", "having", "may", "might", "must",
    "shall", "cannot", "isn", "aren", "don", "doesn", "didn", "won",
    // question and filler words
    "what", "which", "where", "when", "how", "why", "there", "here", "just", "then", "than",
];

/// Lower-cased, de-duplicated content words from `preferences`, in order of
/// first appearance, capped at `MAX_KEYWORDS`.
pub fn derive_keywords(preferences: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();

    for token in preferences
        .split(|c: char| !c.is_alphanumeric())
        .map(str::to_lowercase)
    {
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
        if token.chars().count() < MIN_KEYWORD_LEN
            || token.chars().all(|c| c.is_ascii_digit())
            || STOP_WORDS.contains(&token.as_str())
            || keywords.contains(&token)
        {
            continue;
        }
        keywords.push(token);
    }

    keywords
}

/// Up to three themes for highlight generation: the keywords, else defaults.
pub fn themes_for(keywords: &[String]) -> Vec<String> {
    if keywords.is_empty() {
        DEFAULT_THEMES.iter().take(3).map(|t| t.to_string()).collect()
    } else {
        keywords.iter().take(3).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_content_words_in_order() {
        let kws = derive_keywords("Looking for an artist who does watercolor landscapes and murals");
        assert_eq!(kws, vec!["watercolor", "landscapes", "murals"]);
    }

    #[test]
    fn test_auxiliary_verbs_are_not_keywords() {
        let kws = derive_keywords("Who did murals, and has been doing what ceramics does?");
        assert_eq!(kws, vec!["murals", "ceramics"]);
    }

    #[test]
    fn test_caps_at_five_and_dedupes() {
        let kws = derive_keywords(
            "surreal surreal neon cyberpunk glitch vaporwave collage textile ceramics",
        );
        assert_eq!(kws.len(), MAX_KEYWORDS);
        assert_eq!(kws, vec!["surreal", "neon", "cyberpunk", "glitch", "vaporwave"]);
    }

    #[test]
    fn test_empty_and_noise_inputs() {
        assert!(derive_keywords("").is_empty());
        assert!(derive_keywords("I a to 2024 !!").is_empty());
    }

    #[test]
    fn test_themes_default_when_no_keywords() {
        assert_eq!(themes_for(&[]), vec!["nature", "identity", "urban life"]);
        let kws = vec!["ocean".to_string()];
        assert_eq!(themes_for(&kws), vec!["ocean"]);
    }
}
