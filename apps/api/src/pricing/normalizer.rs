//! Pricing normalizer. The last step before a suggestion leaves the pipeline.
//!
//! Guarantees a non-empty price range whose bounds satisfy min < max, and a
//! non-empty rationale.

use tracing::debug;

use crate::models::artwork::{ArtworkDetails, PricingSuggestion};
use crate::pricing::fallback::{fallback_price_band, generate_fallback};
use crate::pricing::range::{narrow_down, PriceSpan};

pub fn normalize_pricing(
    suggestion: PricingSuggestion,
    details: &ArtworkDetails,
    current_year: i32,
) -> PricingSuggestion {
    let band = || fallback_price_band(details.medium(), details.year, current_year).to_string();

    let price_range = match PriceSpan::parse(&suggestion.price_range) {
        Some(span) if span.min < span.max => suggestion.price_range.trim().to_string(),
        Some(span) if span.min > span.max => {
            debug!("Swapping inverted price range {}", suggestion.price_range);
            narrow_down(&span.ordered().render())
        }
        _ => band(),
    };

    let rationale = if suggestion.rationale.trim().is_empty() {
        generate_fallback(details, current_year).rationale
    } else {
        suggestion.rationale
    };

    PricingSuggestion {
        price_range,
        rationale,
    }
}
