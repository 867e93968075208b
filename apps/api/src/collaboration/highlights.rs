//! Template-driven portfolio highlights for synthesized profiles.

use rand::Rng;

use crate::models::collaborator::PortfolioHighlight;

const HIGHLIGHT_COUNT: usize = 3;
const STATUSES: [&str; HIGHLIGHT_COUNT] = ["Exhibited", "Completed", "Published"];

const TITLE_TEMPLATES: &[&str] = &[
    "{prefix} {Theme}",
    "{Theme} in {prefix}",
    "The {Theme} Series",
    "{prefix} Studies: {Theme}",
];

const DESCRIPTION_TEMPLATES: &[&str] = &[
    "A {medium} series exploring {theme}.",
    "Commissioned work interpreting {theme} through {medium}.",
    "Exhibited piece reflecting on {theme}, realized in {medium}.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Photography,
    Painting,
    Sculpture,
    Digital,
    Illustration,
    Mixed,
}

impl Family {
    fn classify(specialty: &str) -> Self {
        let s = specialty.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|n| s.contains(n));

        if has(&["photo"]) {
            Family::Photography
        } else if has(&["paint", "oil", "acrylic", "watercolor", "traditional"]) {
            Family::Painting
        } else if has(&["sculpt", "ceramic", "install"]) {
            Family::Sculpture
        } else if has(&["digital", "3d", "animation", "motion", "pixel"]) {
            Family::Digital
        } else if has(&["illustrat", "draw", "ink", "comic", "concept"]) {
            Family::Illustration
        } else {
            Family::Mixed
        }
    }

    fn prefixes(self) -> &'static [&'static str] {
        match self {
            Family::Photography => &["Light", "Lens", "Exposure"],
            Family::Painting => &["Canvas", "Brushstroke", "Pigment"],
            Family::Sculpture => &["Form", "Cast", "Carved"],
            Family::Digital => &["Pixel", "Virtual", "Neon"],
            Family::Illustration => &["Ink", "Sketchbook", "Line"],
            Family::Mixed => &["Layered", "Collage", "Assembled"],
        }
    }

    fn media(self) -> &'static [&'static str] {
        match self {
            Family::Photography => &["Archival pigment print", "Silver gelatin print", "Digital photography"],
            Family::Painting => &["Oil on canvas", "Acrylic on panel", "Watercolor on paper"],
            Family::Sculpture => &["Bronze", "Glazed ceramic", "Site-specific installation"],
            Family::Digital => &["Digital (Blender)", "Digital (Procreate)", "Generative video"],
            Family::Illustration => &["Ink on paper", "Graphite", "Digital illustration"],
            Family::Mixed => &["Mixed media", "Found objects and textile", "Collage on board"],
        }
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options[rng.random_range(0..options.len())]
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Three highlights, most recent first, one per theme (themes cycle when
/// fewer than three are given).
pub fn generate_highlights<R: Rng + ?Sized>(
    specialty: &str,
    themes: &[String],
    current_year: i32,
    rng: &mut R,
) -> Vec<PortfolioHighlight> {
    let family = Family::classify(specialty);
    let fallback_theme = ["light".to_string()];
    let themes = if themes.is_empty() { &fallback_theme[..] } else { themes };

    (0..HIGHLIGHT_COUNT)
        .map(|slot| {
            let theme = &themes[slot % themes.len()];
            let prefix = pick(rng, family.prefixes());
            let medium = pick(rng, family.media());

            let title = pick(rng, TITLE_TEMPLATES)
                .replace("{prefix}", prefix)
                .replace("{Theme}", &title_case(theme));
            let description = pick(rng, DESCRIPTION_TEMPLATES)
                .replace("{medium}", &medium.to_lowercase())
                .replace("{theme}", theme);

            PortfolioHighlight {
                title,
                year: (current_year - slot as i32).to_string(),
                medium: medium.to_string(),
                description,
                status: STATUSES[slot].to_string(),
            }
        })
        .collect()
}

/// Fixed highlights used when a model profile arrives without any.
pub fn default_highlights(current_year: i32) -> Vec<PortfolioHighlight> {
    [
        ("Major Project", "Mixed Media", "Significant work showcasing the artist's talents", "Completed"),
        ("Exhibition Piece", "Digital", "Work featured in a prominent exhibition", "Exhibited"),
        ("Collaborative Work", "Various", "Previous successful collaboration", "Published"),
    ]
    .into_iter()
    .enumerate()
    .map(|(slot, (title, medium, description, status))| PortfolioHighlight {
        title: title.to_string(),
        year: (current_year - 1 - slot as i32).to_string(),
        medium: medium.to_string(),
        description: description.to_string(),
        status: status.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_classify_specialties() {
        assert_eq!(Family::classify("Digital Art & 3D Modeling"), Family::Digital);
        assert_eq!(Family::classify("Traditional Painting & Digital Art"), Family::Painting);
        assert_eq!(Family::classify("Street Photography"), Family::Photography);
        assert_eq!(Family::classify("Textiles"), Family::Mixed);
    }

    #[test]
    fn test_three_highlights_newest_first() {
        let mut rng = StdRng::seed_from_u64(1);
        let themes = vec!["ocean".to_string(), "memory".to_string()];
        let hs = generate_highlights("Oil painting", &themes, 2026, &mut rng);

        assert_eq!(hs.len(), 3);
        assert_eq!(
            hs.iter().map(|h| h.year.as_str()).collect::<Vec<_>>(),
            vec!["2026", "2025", "2024"]
        );
        assert!(hs[0].title.contains("Ocean"));
        assert!(hs[1].title.contains("Memory"));
        assert!(hs[2].title.contains("Ocean"));
        assert!(Family::Painting.media().contains(&hs[0].medium.as_str()));
        assert!(hs[0].description.contains("ocean"));
    }

    #[test]
    fn test_same_seed_same_highlights() {
        let themes = vec!["neon".to_string()];
        let a = generate_highlights("Digital", &themes, 2026, &mut StdRng::seed_from_u64(9));
        let b = generate_highlights("Digital", &themes, 2026, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("urban life"), "Urban Life");
    }

    #[test]
    fn test_default_highlights() {
        let hs = default_highlights(2026);
        assert_eq!(hs.len(), 3);
        assert_eq!(hs[0].title, "Major Project");
        assert_eq!(hs[0].year, "2025");
        assert_eq!(hs[2].status, "Published");
    }
}
