//! Pricing response parser. Pulls a price range and rationale out of free text.
//!
//! 1. Find the first price-range pattern; narrow it if too wide.
//! 2. Whatever text remains becomes the rationale.
//! 3. No pattern at all: the whole text is the rationale and the price comes
//!    from the deterministic band table.
//! 4. Rationale without markdown headers is merged into the standard sections.

use crate::models::artwork::{ArtworkDetails, PricingSuggestion};
use crate::pipeline::ParseFailure;
use crate::pricing::fallback::fallback_price_band;
use crate::pricing::range::{find_price_range, narrow_down};
use crate::pricing::rationale::{format_rationale, has_sections, RationaleSections};

pub fn parse_pricing_response(
    raw: &str,
    details: &ArtworkDetails,
    current_year: i32,
) -> Result<PricingSuggestion, ParseFailure> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ParseFailure::Empty);
    }

    let (price_range, remainder) = match find_price_range(raw) {
        Some(matched) => (narrow_down(matched), raw.replacen(matched, "", 1)),
        None => (
            fallback_price_band(details.medium(), details.year, current_year).to_string(),
            raw.to_string(),
        ),
    };
    let remainder = remainder.trim();

    let rationale = if has_sections(remainder) {
        remainder.to_string()
    } else {
        format_rationale(
            details,
            &price_range,
            current_year,
            RationaleSections {
                model_analysis: Some(remainder),
                career: None,
            },
        )
    };

    Ok(PricingSuggestion {
        price_range,
        rationale,
    })
}
