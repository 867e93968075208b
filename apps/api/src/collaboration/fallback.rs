//! Network-free recommendation synthesis.
//!
//! With harvested names, one profile per name with a random score in
//! [75, 95]. Without, three fixed profiles. Highlights always come from the
//! caller's keywords so the output still reflects the request.

use rand::Rng;

use crate::collaboration::harvest::Harvest;
use crate::collaboration::highlights::generate_highlights;
use crate::collaboration::keywords::themes_for;
use crate::collaboration::normalizer::{analysis_for_total, MAX_RECOMMENDATIONS};
use crate::models::collaborator::{
    slugify, CollaboratorRecommendation, ContactInformation, DetailedAnalysis, Dimension,
    PotentialTier, SubScore,
};

const MIN_SCORE: u32 = 75;
const MAX_SCORE: u32 = 95;
const DEFAULT_HARVEST_SPECIALTY: &str = "Mixed Media";

struct FixedProfile {
    name: &'static str,
    specialty: &'static str,
    location: &'static str,
    bio: &'static str,
    scores: [(u32, &'static str); 5],
    insights: [&'static str; 3],
    website: &'static str,
    email: &'static str,
    social: &'static str,
}

const FIXED_PROFILES: [FixedProfile; 3] = [
    FixedProfile {
        name: "Alex Rivera",
        specialty: "Digital Art & 3D Modeling",
        location: "San Francisco, USA",
        bio: "Digital artist specializing in 3D modeling and concept art with 8 years of experience.",
        scores: [
            (28, "Expert in Blender, Maya, ZBrush, and other 3D modeling tools."),
            (29, "Specializes in digital 3D art, character design, and environment modeling."),
            (18, "Has worked on similar collaborative projects in the gaming industry."),
            (9, "8+ years of professional experience in digital art and 3D modeling."),
            (10, "Outstanding portfolio with major clients including AAA game studios."),
        ],
        insights: [
            "Expert in 3D modeling and digital art",
            "Experience with game development projects",
            "Strong technical skills in requested tools",
        ],
        website: "alexrivera3d.com",
        email: "alex@alexrivera3d.com",
        social: "@alexrivera3d",
    },
    FixedProfile {
        name: "Sophia Chen",
        specialty: "Traditional Painting & Digital Art",
        location: "New York, USA",
        bio: "Painter combining traditional techniques with digital tools.",
        scores: [
            (25, "Skilled in both traditional media and digital tools like Photoshop and Procreate."),
            (26, "Blends traditional painting with digital finishing."),
            (17, "Experience with collaborative art projects and exhibitions."),
            (9, "10+ years of professional experience across multiple media."),
            (8, "Impressive portfolio with gallery exhibitions and commercial work."),
        ],
        insights: [
            "Versatile with both traditional and digital media",
            "Strong artistic vision and unique style",
            "Experience with collaborative exhibitions",
        ],
        website: "sophiachen.art",
        email: "sophia@sophiachen.art",
        social: "@sophiachenart",
    },
    FixedProfile {
        name: "Maya Okafor",
        specialty: "Mixed Media & Installation",
        location: "Lagos, Nigeria",
        bio: "Mixed media artist building installations from textile, found objects and projection.",
        scores: [
            (24, "Works across textile, assemblage and projection tools."),
            (25, "Mixed media practice suited to layered, material-driven projects."),
            (16, "Has co-produced several site-specific installations."),
            (8, "Seven years of exhibiting and residency experience."),
            (8, "Consistent portfolio with public and gallery commissions."),
        ],
        insights: [
            "Comfortable sharing authorship on large pieces",
            "Brings material experimentation to a project",
            "Experience planning work for physical spaces",
        ],
        website: "mayaokafor.studio",
        email: "hello@mayaokafor.studio",
        social: "@mayaokafor",
    },
];

/// Builds complete recommendations without touching the network.
pub fn synthesize_recommendations<R: Rng + ?Sized>(
    harvest: &Harvest,
    keywords: &[String],
    current_year: i32,
    rng: &mut R,
) -> Vec<CollaboratorRecommendation> {
    let themes = themes_for(keywords);

    if harvest.is_empty() {
        FIXED_PROFILES
            .iter()
            .map(|profile| fixed_recommendation(profile, &themes, current_year, rng))
            .collect()
    } else {
        harvest
            .artists
            .iter()
            .take(MAX_RECOMMENDATIONS)
            .map(|artist| {
                let specialty = artist
                    .specialty
                    .as_deref()
                    .unwrap_or(DEFAULT_HARVEST_SPECIALTY);
                harvested_recommendation(&artist.name, specialty, &themes, current_year, rng)
            })
            .collect()
    }
}

fn harvested_recommendation<R: Rng + ?Sized>(
    name: &str,
    specialty: &str,
    themes: &[String],
    current_year: i32,
    rng: &mut R,
) -> CollaboratorRecommendation {
    let detailed_analysis = analysis_for_total(rng.random_range(MIN_SCORE..=MAX_SCORE));
    let total = detailed_analysis.total();

    CollaboratorRecommendation {
        id: format!("artist-{}", slugify(name)),
        name: name.to_string(),
        specialty: specialty.to_string(),
        compatibility_score: total,
        location: "Unknown Location".to_string(),
        bio: format!(
            "{specialty} artist whose recent work explores {}.",
            themes.join(", ")
        ),
        detailed_analysis,
        collaboration_potential: PotentialTier::for_total(total).potential(),
        collaboration_insights: vec![
            format!("Works in {}", specialty.to_lowercase()),
            format!("Recent projects touch on {}", themes.join(" and ")),
            "Open to collaborative projects".to_string(),
        ],
        portfolio_highlights: generate_highlights(specialty, themes, current_year, rng),
        contact_information: ContactInformation::placeholder_for(name),
    }
}

fn fixed_recommendation<R: Rng + ?Sized>(
    profile: &FixedProfile,
    themes: &[String],
    current_year: i32,
    rng: &mut R,
) -> CollaboratorRecommendation {
    let detailed_analysis = DetailedAnalysis::from_fn(|d| {
        let i = Dimension::ALL.iter().position(|x| *x == d).unwrap_or(0);
        let (score, description) = profile.scores[i];
        SubScore::new(d, score, description)
    });
    let total = detailed_analysis.total();

    CollaboratorRecommendation {
        id: format!("artist-{}", slugify(profile.name)),
        name: profile.name.to_string(),
        specialty: profile.specialty.to_string(),
        compatibility_score: total,
        location: profile.location.to_string(),
        bio: profile.bio.to_string(),
        detailed_analysis,
        collaboration_potential: PotentialTier::for_total(total).potential(),
        collaboration_insights: profile.insights.iter().map(|s| s.to_string()).collect(),
        portfolio_highlights: generate_highlights(profile.specialty, themes, current_year, rng),
        contact_information: ContactInformation {
            website: Some(profile.website.to_string()),
            email: Some(profile.email.to_string()),
            social: Some(profile.social.to_string()),
        },
    }
}
