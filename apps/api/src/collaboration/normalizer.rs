//! Turns loosely-shaped candidates into complete recommendations and
//! enforces the list-level invariants.

use std::collections::HashSet;

use serde_json::Value;

use crate::collaboration::highlights::default_highlights;
use crate::collaboration::parser::Candidate;
use crate::models::collaborator::{
    slugify, CollaboratorRecommendation, ContactInformation, DetailedAnalysis, Dimension,
    PortfolioHighlight, PotentialTier, SubScore,
};

pub const MAX_RECOMMENDATIONS: usize = 5;
const MAX_HIGHLIGHTS: usize = 3;

const DEFAULT_NAME: &str = "Unknown Artist";
const DEFAULT_LOCATION: &str = "Unknown Location";
const DEFAULT_BIO: &str = "Artist bio not available";
const DEFAULT_SPECIALTY: &str = "Mixed Media";

pub const DEFAULT_INSIGHTS: [&str; 3] = [
    "Experienced in collaborative projects",
    "Complementary skill set to yours",
    "Similar artistic vision",
];

// ────────────────────────────────────────────────────────────────────────────
// Lenient field access
// ────────────────────────────────────────────────────────────────────────────

fn text(map: &Candidate, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A non-negative whole score from a JSON number or numeric string.
fn score(value: &Value) -> Option<u32> {
    let raw = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    }?;
    raw.is_finite()
        .then(|| raw.round().clamp(0.0, u32::MAX as f64) as u32)
}

/// Splits `total` across the dimensions in proportion to their maxima so the
/// sub-scores sum to exactly `min(total, 100)`.
pub fn analysis_for_total(total: u32) -> DetailedAnalysis {
    let total = total.min(100);
    let mut scores: Vec<u32> = Dimension::ALL
        .iter()
        .map(|d| total * d.max_score() / 100)
        .collect();

    let mut remainder = total - scores.iter().sum::<u32>();
    while remainder > 0 {
        for (i, d) in Dimension::ALL.iter().enumerate() {
            if remainder > 0 && scores[i] < d.max_score() {
                scores[i] += 1;
                remainder -= 1;
            }
        }
    }

    DetailedAnalysis::from_fn(|d| {
        let i = Dimension::ALL.iter().position(|x| *x == d).unwrap_or(0);
        SubScore::new(d, scores[i], d.default_description())
    })
}

fn analysis_from(candidate: &Candidate) -> DetailedAnalysis {
    match candidate.get("detailedAnalysis") {
        Some(Value::Object(analysis)) => DetailedAnalysis::from_fn(|d| {
            match analysis.get(d.key()) {
                Some(Value::Object(sub)) => match sub.get("score").and_then(score) {
                    Some(points) => SubScore::new(
                        d,
                        points,
                        text(sub, "description")
                            .unwrap_or_else(|| d.default_description().to_string()),
                    ),
                    None => SubScore::strong_default(d),
                },
                Some(bare) => score(bare)
                    .map(|points| SubScore::new(d, points, d.default_description()))
                    .unwrap_or_else(|| SubScore::strong_default(d)),
                None => SubScore::strong_default(d),
            }
        }),
        // A total without a breakdown still ranks the artist.
        _ => match candidate.get("compatibilityScore").and_then(score) {
            Some(total) => analysis_for_total(total),
            None => DetailedAnalysis::strong_default(),
        },
    }
}

fn insights_from(candidate: &Candidate) -> Vec<String> {
    let insights: Vec<String> = match candidate.get("collaborationInsights") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    if insights.is_empty() {
        DEFAULT_INSIGHTS.iter().map(|s| s.to_string()).collect()
    } else {
        insights
    }
}

fn highlights_from(candidate: &Candidate, current_year: i32) -> Vec<PortfolioHighlight> {
    let highlights: Vec<PortfolioHighlight> = match candidate.get("portfolioHighlights") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_object)
            .take(MAX_HIGHLIGHTS)
            .map(|h| PortfolioHighlight {
                title: text(h, "title").unwrap_or_else(|| "Untitled Work".to_string()),
                year: text(h, "year").unwrap_or_else(|| current_year.to_string()),
                medium: text(h, "medium").unwrap_or_else(|| DEFAULT_SPECIALTY.to_string()),
                description: text(h, "description").unwrap_or_default(),
                status: text(h, "status").unwrap_or_else(|| "Completed".to_string()),
            })
            .collect(),
        _ => Vec::new(),
    };

    if highlights.is_empty() {
        default_highlights(current_year)
    } else {
        highlights
    }
}

fn contact_from(candidate: &Candidate, name: &str) -> ContactInformation {
    let placeholder = ContactInformation::placeholder_for(name);
    match candidate.get("contactInformation") {
        Some(Value::Object(contact)) => ContactInformation {
            website: text(contact, "website").or(placeholder.website),
            email: text(contact, "email").or(placeholder.email),
            social: text(contact, "social").or(placeholder.social),
        },
        _ => placeholder,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public API
// ────────────────────────────────────────────────────────────────────────────

/// Builds a complete recommendation from one parsed candidate. Fields the
/// model supplied are kept; only absent ones are defaulted.
pub fn from_candidate(candidate: &Candidate, current_year: i32) -> CollaboratorRecommendation {
    let name = text(candidate, "name").unwrap_or_else(|| DEFAULT_NAME.to_string());
    let detailed_analysis = analysis_from(candidate);
    let total = detailed_analysis.total();

    CollaboratorRecommendation {
        id: text(candidate, "id").unwrap_or_else(|| format!("artist-{}", slugify(&name))),
        specialty: text(candidate, "specialty").unwrap_or_else(|| DEFAULT_SPECIALTY.to_string()),
        compatibility_score: total,
        location: text(candidate, "location").unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        bio: text(candidate, "bio").unwrap_or_else(|| DEFAULT_BIO.to_string()),
        detailed_analysis,
        collaboration_potential: PotentialTier::for_total(total).potential(),
        collaboration_insights: insights_from(candidate),
        portfolio_highlights: highlights_from(candidate, current_year),
        contact_information: contact_from(candidate, &name),
        name,
    }
}

/// Re-derives every score-dependent field, makes ids unique, sorts by
/// compatibility (highest first) and caps the list.
pub fn normalize_recommendations(
    recommendations: Vec<CollaboratorRecommendation>,
) -> Vec<CollaboratorRecommendation> {
    let mut seen_ids = HashSet::new();

    let mut normalized: Vec<CollaboratorRecommendation> = recommendations
        .into_iter()
        .map(|mut rec| {
            rec.detailed_analysis = DetailedAnalysis::from_fn(|d| {
                let sub = rec.detailed_analysis.get(d);
                SubScore::new(d, sub.score, sub.description.clone())
            });
            rec.compatibility_score = rec.detailed_analysis.total();
            rec.collaboration_potential =
                PotentialTier::for_total(rec.compatibility_score).potential();
            rec.portfolio_highlights.truncate(MAX_HIGHLIGHTS);

            let base = rec.id.clone();
            let mut suffix = 2;
            while !seen_ids.insert(rec.id.clone()) {
                rec.id = format!("{base}-{suffix}");
                suffix += 1;
            }
            rec
        })
        .collect();

    normalized.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));
    normalized.truncate(MAX_RECOMMENDATIONS);
    normalized
}
