// All LLM prompt constants for the collaborator recommendation feature.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::JSON_ARRAY_ONLY_SYSTEM;
use crate::llm_client::PromptPair;

/// System prompt. The shape below is a contract the model may break, which is
/// why the parser is defensive.
pub const RECOMMENDATION_SYSTEM_TEMPLATE: &str = r#"You are an art-world matchmaker recommending artist collaborators.
Return between 3 and 5 artist profiles as a JSON ARRAY with this EXACT shape:
[
  {
    "id": "a1",
    "name": "Full Name",
    "specialty": "Primary specialty",
    "compatibilityScore": 85,
    "location": "City, Country",
    "bio": "One or two sentences",
    "detailedAnalysis": {
      "toolExpertise": {"score": 25, "maxScore": 30, "rating": "Strong", "description": "..."},
      "artTypeAlignment": {"score": 25, "maxScore": 30, "rating": "Strong", "description": "..."},
      "projectRelevance": {"score": 17, "maxScore": 20, "rating": "Strong", "description": "..."},
      "experienceLevel": {"score": 9, "maxScore": 10, "rating": "Excellent", "description": "..."},
      "portfolioQuality": {"score": 9, "maxScore": 10, "rating": "Excellent", "description": "..."}
    },
    "collaborationInsights": ["...", "...", "..."],
    "portfolioHighlights": [
      {"title": "...", "year": "2024", "medium": "...", "description": "...", "status": "Exhibited"}
    ],
    "contactInformation": {"website": "...", "email": "...", "social": "@..."}
  }
]

SCORING RULES:
- compatibilityScore MUST equal the sum of the five detailedAnalysis scores (max 100)
- No score may exceed its maxScore
- At most 3 portfolioHighlights per artist

{json_only}"#;

/// Replace: {preferences}, {keywords}
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = "Collaborator preferences: {preferences}
Key themes: {keywords}";

pub fn build_recommendation_prompt(preferences: &str, keywords: &[String]) -> PromptPair {
    let keywords = if keywords.is_empty() {
        "none specified".to_string()
    } else {
        keywords.join(", ")
    };

    PromptPair {
        system: RECOMMENDATION_SYSTEM_TEMPLATE.replace("{json_only}", JSON_ARRAY_ONLY_SYSTEM),
        user: RECOMMENDATION_PROMPT_TEMPLATE
            .replace("{preferences}", preferences.trim())
            .replace("{keywords}", &keywords),
        image_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_demands_json_array_only() {
        let prompt = build_recommendation_prompt("surreal muralist", &[]);
        assert!(prompt.system.contains("between 3 and 5"));
        assert!(prompt.system.contains("valid JSON array only"));
        assert!(!prompt.system.contains("{json_only}"));
    }

    #[test]
    fn test_user_prompt_embeds_preferences_and_keywords() {
        let kws = vec!["surreal".to_string(), "murals".to_string()];
        let prompt = build_recommendation_prompt("  surreal murals  ", &kws);
        assert_eq!(
            prompt.user,
            "Collaborator preferences: surreal murals\nKey themes: surreal, murals"
        );
        assert!(prompt.image_url.is_none());
    }
}
