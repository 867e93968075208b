//! Markdown rationale assembly shared by the parser and the fallback.

use crate::models::artwork::ArtworkDetails;
use crate::pricing::fallback::market_insights;

/// Optional sections around the fixed market copy.
#[derive(Debug, Default, Clone, Copy)]
pub struct RationaleSections<'a> {
    /// Free text the model returned without its own headers.
    pub model_analysis: Option<&'a str>,
    pub career: Option<&'a [String]>,
}

/// True when the text already carries markdown section headers.
pub fn has_sections(text: &str) -> bool {
    text.contains("##")
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_rationale(
    details: &ArtworkDetails,
    price_range: &str,
    current_year: i32,
    sections: RationaleSections<'_>,
) -> String {
    let title = details.title_or_default();
    let medium = details
        .medium()
        .map(str::to_lowercase)
        .unwrap_or_else(|| "unknown".to_string());
    let year = details.year_or(current_year);
    let insights = market_insights(details.medium(), year, current_year);

    let mut out = format!(
        "## Market Analysis for \"{title}\" ({medium}, {year})\n\n\
         ### Suggested Price Range: {price_range}\n\n"
    );

    if let Some(analysis) = sections.model_analysis.map(str::trim).filter(|a| !a.is_empty()) {
        out.push_str(&format!("### Model Analysis:\n{analysis}\n\n"));
    }

    out.push_str(&format!(
        "### Current Market Trends:\n{}\n\n\
         ### Customer Preferences in {year}:\n{}\n\n\
         ### Average Price Comparison:\n{}\n\n",
        bullets(&insights.trends),
        bullets(&insights.preferences),
        bullets(&insights.comparable_prices),
    ));

    if let Some(career) = sections.career {
        out.push_str(&format!(
            "### Recommendations for Your Career Stage:\n{}\n\n",
            bullets(career)
        ));
    }

    out.push_str(&format!(
        "This price range is based on current market data for {medium} works created in {year}, \
         taking into account recent sales, collector preferences, and medium-specific factors. \
         For optimal pricing, consider offering limited editions or including certificates of \
         authenticity to increase perceived value."
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo() -> ArtworkDetails {
        ArtworkDetails {
            title: Some("Night Market".to_string()),
            medium: Some("Photography".to_string()),
            year: Some(2022),
            description: None,
        }
    }

    #[test]
    fn test_has_sections() {
        assert!(has_sections("## Pricing\n- a"));
        assert!(has_sections("### Notes"));
        assert!(!has_sections("Plain prose answer."));
    }

    #[test]
    fn test_sections_in_order() {
        let text = format_rationale(&photo(), "$400 - $700", 2026, RationaleSections::default());
        let trends = text.find("### Current Market Trends:").unwrap();
        let prefs = text.find("### Customer Preferences in 2022:").unwrap();
        let prices = text.find("### Average Price Comparison:").unwrap();
        assert!(trends < prefs && prefs < prices);
        assert!(text.contains("- Photography market is seeing renewed growth"));
        assert!(!text.contains("### Model Analysis:"));
        assert!(!text.contains("Career Stage"));
    }

    #[test]
    fn test_model_text_is_merged() {
        let text = format_rationale(
            &photo(),
            "$400 - $700",
            2026,
            RationaleSections {
                model_analysis: Some("  Strong composition and lighting.  "),
                career: None,
            },
        );
        assert!(text.contains("### Model Analysis:\nStrong composition and lighting.\n"));
    }

    #[test]
    fn test_defaults_when_details_missing() {
        let text = format_rationale(
            &ArtworkDetails::default(),
            "$450 - $750",
            2026,
            RationaleSections::default(),
        );
        assert!(text.starts_with("## Market Analysis for \"Untitled\" (unknown, 2026)"));
        assert!(text.contains("- The art market has shown resilience"));
    }
}
