//! Collaborator recommendation shape and the pure score → label rules.
//!
//! Labels are never stored independently of scores: `rating_for` and
//! `PotentialTier::for_total` are the only sources of rating text.

use serde::{Deserialize, Serialize};

/// One of the five fixed scoring dimensions. Maxima sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    ToolExpertise,
    ArtTypeAlignment,
    ProjectRelevance,
    ExperienceLevel,
    PortfolioQuality,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::ToolExpertise,
        Dimension::ArtTypeAlignment,
        Dimension::ProjectRelevance,
        Dimension::ExperienceLevel,
        Dimension::PortfolioQuality,
    ];

    /// JSON key used inside `detailedAnalysis`.
    pub fn key(self) -> &'static str {
        match self {
            Dimension::ToolExpertise => "toolExpertise",
            Dimension::ArtTypeAlignment => "artTypeAlignment",
            Dimension::ProjectRelevance => "projectRelevance",
            Dimension::ExperienceLevel => "experienceLevel",
            Dimension::PortfolioQuality => "portfolioQuality",
        }
    }

    pub fn max_score(self) -> u32 {
        match self {
            Dimension::ToolExpertise | Dimension::ArtTypeAlignment => 30,
            Dimension::ProjectRelevance => 20,
            Dimension::ExperienceLevel | Dimension::PortfolioQuality => 10,
        }
    }

    /// Score used by the "Strong" default template.
    pub fn strong_score(self) -> u32 {
        match self {
            Dimension::ToolExpertise | Dimension::ArtTypeAlignment => 25,
            Dimension::ProjectRelevance => 17,
            Dimension::ExperienceLevel | Dimension::PortfolioQuality => 8,
        }
    }

    pub fn default_description(self) -> &'static str {
        match self {
            Dimension::ToolExpertise => "Proficient in various artistic tools and techniques.",
            Dimension::ArtTypeAlignment => "Works in styles that align well with your preferences.",
            Dimension::ProjectRelevance => "Has experience with similar collaborative projects.",
            Dimension::ExperienceLevel => "Several years of professional experience in their field.",
            Dimension::PortfolioQuality => "High-quality portfolio with impressive works.",
        }
    }
}

/// Qualitative rating for a sub-score, a strict function of score/max.
pub fn rating_for(score: u32, max_score: u32) -> &'static str {
    if max_score == 0 {
        return "Fair";
    }
    let ratio = score as f64 / max_score as f64;
    if ratio >= 1.0 {
        "Exceptional"
    } else if ratio >= 0.9 {
        "Excellent"
    } else if ratio >= 0.75 {
        "Strong"
    } else if ratio >= 0.6 {
        "Good"
    } else {
        "Fair"
    }
}

/// Collaboration-potential tier derived from the compatibility total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PotentialTier {
    Excellent,
    Strong,
    Good,
    Moderate,
}

impl PotentialTier {
    pub fn for_total(total: u32) -> Self {
        if total >= 90 {
            PotentialTier::Excellent
        } else if total >= 75 {
            PotentialTier::Strong
        } else if total >= 60 {
            PotentialTier::Good
        } else {
            PotentialTier::Moderate
        }
    }

    pub fn rating(self) -> &'static str {
        match self {
            PotentialTier::Excellent => "Excellent Match (90-100%)",
            PotentialTier::Strong => "Strong Match (75-89%)",
            PotentialTier::Good => "Good Match (60-74%)",
            PotentialTier::Moderate => "Moderate Match (Below 60%)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PotentialTier::Excellent => {
                "This artist would be an exceptional collaborator for your project."
            }
            PotentialTier::Strong => {
                "This artist would be a very good collaborator for your project."
            }
            PotentialTier::Good => "This artist would be a suitable collaborator for your project.",
            PotentialTier::Moderate => {
                "This artist may be a potential collaborator, but there might be some compatibility challenges."
            }
        }
    }

    pub fn potential(self) -> CollaborationPotential {
        CollaborationPotential {
            rating: self.rating().to_string(),
            description: self.description().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScore {
    pub score: u32,
    pub max_score: u32,
    pub rating: String,
    pub description: String,
}

impl SubScore {
    /// Builds a sub-score for `dimension`, clamping to its maximum and deriving the rating.
    pub fn new(dimension: Dimension, score: u32, description: impl Into<String>) -> Self {
        let max_score = dimension.max_score();
        let score = score.min(max_score);
        Self {
            score,
            max_score,
            rating: rating_for(score, max_score).to_string(),
            description: description.into(),
        }
    }

    pub fn strong_default(dimension: Dimension) -> Self {
        Self::new(
            dimension,
            dimension.strong_score(),
            dimension.default_description(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAnalysis {
    pub tool_expertise: SubScore,
    pub art_type_alignment: SubScore,
    pub project_relevance: SubScore,
    pub experience_level: SubScore,
    pub portfolio_quality: SubScore,
}

impl DetailedAnalysis {
    /// Assembles an analysis from a per-dimension constructor.
    pub fn from_fn(mut f: impl FnMut(Dimension) -> SubScore) -> Self {
        Self {
            tool_expertise: f(Dimension::ToolExpertise),
            art_type_alignment: f(Dimension::ArtTypeAlignment),
            project_relevance: f(Dimension::ProjectRelevance),
            experience_level: f(Dimension::ExperienceLevel),
            portfolio_quality: f(Dimension::PortfolioQuality),
        }
    }

    pub fn strong_default() -> Self {
        Self::from_fn(SubScore::strong_default)
    }

    pub fn get(&self, dimension: Dimension) -> &SubScore {
        match dimension {
            Dimension::ToolExpertise => &self.tool_expertise,
            Dimension::ArtTypeAlignment => &self.art_type_alignment,
            Dimension::ProjectRelevance => &self.project_relevance,
            Dimension::ExperienceLevel => &self.experience_level,
            Dimension::PortfolioQuality => &self.portfolio_quality,
        }
    }

    /// Sum of the five sub-scores; at most 100.
    pub fn total(&self) -> u32 {
        Dimension::ALL.iter().map(|d| self.get(*d).score).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborationPotential {
    pub rating: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioHighlight {
    pub title: String,
    pub year: String,
    pub medium: String,
    pub description: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInformation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<String>,
}

impl ContactInformation {
    /// Placeholder contact fields derived from an artist name.
    pub fn placeholder_for(name: &str) -> Self {
        let words: Vec<String> = name
            .split_whitespace()
            .map(|w| {
                w.chars()
                    .filter(|c| c.is_alphanumeric())
                    .collect::<String>()
                    .to_lowercase()
            })
            .filter(|w| !w.is_empty())
            .collect();
        let dotted = if words.is_empty() {
            "artist".to_string()
        } else {
            words.join(".")
        };
        let joined = dotted.replace('.', "");

        Self {
            website: Some(format!("{joined}.art")),
            email: Some(format!("{dotted}@example.com")),
            social: Some(format!("@{joined}")),
        }
    }
}

/// A fully-shaped collaborator profile. Every field is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaboratorRecommendation {
    pub id: String,
    pub name: String,
    pub specialty: String,
    /// Always the sum of `detailed_analysis` sub-scores (0-100).
    pub compatibility_score: u32,
    pub location: String,
    pub bio: String,
    pub detailed_analysis: DetailedAnalysis,
    pub collaboration_potential: CollaborationPotential,
    pub collaboration_insights: Vec<String>,
    /// At most three entries, most recent first.
    pub portfolio_highlights: Vec<PortfolioHighlight>,
    pub contact_information: ContactInformation,
}

/// Lower-case, dash-separated identifier fragment for a name.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "unknown".to_string()
    } else {
        slug.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_maxima_sum_to_100() {
        let sum: u32 = Dimension::ALL.iter().map(|d| d.max_score()).sum();
        assert_eq!(sum, 100);
    }

    #[test]
    fn test_strong_template_totals_83_and_rates_strong() {
        let analysis = DetailedAnalysis::strong_default();
        assert_eq!(analysis.total(), 83);
        for d in Dimension::ALL {
            assert_eq!(analysis.get(d).rating, "Strong", "{}", d.key());
        }
        assert_eq!(PotentialTier::for_total(83), PotentialTier::Strong);
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(rating_for(10, 10), "Exceptional");
        assert_eq!(rating_for(27, 30), "Excellent");
        assert_eq!(rating_for(15, 20), "Strong");
        assert_eq!(rating_for(6, 10), "Good");
        assert_eq!(rating_for(5, 10), "Fair");
        assert_eq!(rating_for(3, 0), "Fair");
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(PotentialTier::for_total(100), PotentialTier::Excellent);
        assert_eq!(PotentialTier::for_total(90), PotentialTier::Excellent);
        assert_eq!(PotentialTier::for_total(89), PotentialTier::Strong);
        assert_eq!(PotentialTier::for_total(75), PotentialTier::Strong);
        assert_eq!(PotentialTier::for_total(74), PotentialTier::Good);
        assert_eq!(PotentialTier::for_total(60), PotentialTier::Good);
        assert_eq!(PotentialTier::for_total(59), PotentialTier::Moderate);
    }

    #[test]
    fn test_sub_score_clamps_to_max() {
        let s = SubScore::new(Dimension::ExperienceLevel, 42, "x");
        assert_eq!(s.score, 10);
        assert_eq!(s.max_score, 10);
        assert_eq!(s.rating, "Exceptional");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Sophia Chen"), "sophia-chen");
        assert_eq!(slugify("  Zoë  O'Neil! "), "zoë-o-neil");
        assert_eq!(slugify("***"), "unknown");
    }

    #[test]
    fn test_placeholder_contact() {
        let c = ContactInformation::placeholder_for("Sophia Chen");
        assert_eq!(c.email.as_deref(), Some("sophia.chen@example.com"));
        assert_eq!(c.social.as_deref(), Some("@sophiachen"));
        assert_eq!(c.website.as_deref(), Some("sophiachen.art"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(DetailedAnalysis::strong_default()).unwrap();
        assert_eq!(value["toolExpertise"]["maxScore"], 30);
        assert_eq!(value["portfolioQuality"]["score"], 8);
    }
}
