// All LLM prompt constants for the pricing feature.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{is_forwardable_image, IMAGE_UNAVAILABLE_NOTE};
use crate::llm_client::PromptPair;
use crate::models::artwork::ArtworkDetails;

/// Placeholder used when the caller gave no medium.
pub const DEFAULT_MEDIUM: &str = "Digital Art";

pub const PRICING_SYSTEM: &str = "You are an art pricing expert. \
    Provide a price range for this artwork. \
    State the range once, in the form \"$MIN - $MAX\", \
    then explain the market trends, audience preferences and comparable prices behind it.";

/// Replace: {medium}, {year}
pub const PRICING_PROMPT_TEMPLATE: &str =
    "I need to price a {medium} artwork created in {year}. What would be a reasonable price range?";

/// Builds the pricing prompt pair. Never fails: missing fields take defaults
/// and an unusable image reference degrades to a text-only prompt.
pub fn build_pricing_prompt(
    details: &ArtworkDetails,
    image_url: Option<&str>,
    current_year: i32,
) -> PromptPair {
    let mut user = PRICING_PROMPT_TEMPLATE
        .replace("{medium}", details.medium().unwrap_or(DEFAULT_MEDIUM))
        .replace("{year}", &details.year_or(current_year).to_string());

    if let Some(title) = details.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        user.push_str(&format!(" The piece is titled \"{title}\"."));
    }
    let description = details.description_or_default();
    if !description.is_empty() {
        user.push_str(&format!(" Artist's description: {description}"));
    }

    let image_url = image_url
        .map(str::trim)
        .filter(|url| is_forwardable_image(url))
        .map(str::to_string);
    if image_url.is_none() {
        user.push(' ');
        user.push_str(IMAGE_UNAVAILABLE_NOTE);
    }

    PromptPair {
        system: PRICING_SYSTEM.to_string(),
        user,
        image_url,
    }
}
