// Shared prompt constants and prompt-building utilities.
// Each feature that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces a bare JSON array answer.
pub const JSON_ARRAY_ONLY_SYSTEM: &str = "You MUST respond with a valid JSON array only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to a text prompt when the image reference cannot be forwarded.
pub const IMAGE_UNAVAILABLE_NOTE: &str =
    "(Note: Image URL was invalid or missing, so this is a text-only analysis.)";

/// Only `data:` URLs and http(s) URLs are forwarded to the provider.
pub fn is_forwardable_image(reference: &str) -> bool {
    let reference = reference.trim();
    reference.starts_with("data:") || reference.starts_with("http")
}
