//! Salvages artist names and specialties from model text that failed to parse.

use std::sync::LazyLock;

use regex::Regex;

const MAX_HARVESTED: usize = 5;
const MAX_VALUE_LEN: usize = 80;

static FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(name|speciali?ty)\b["'*\s]*[:=]\s*["'*]*([^"'*,{}\[\]\n]+)"#)
        .expect("harvest field regex is valid")
});

/// One artist the model named, with the specialty it gave for them, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct HarvestedArtist {
    pub name: String,
    pub specialty: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Harvest {
    pub artists: Vec<HarvestedArtist>,
}

impl Harvest {
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }
}

/// Scans `raw` line by line for `name:` and `specialty:` fields. A specialty
/// belongs to the most recent name; one seen before any name waits for the
/// next. Names are de-duplicated, specialties never are.
pub fn harvest(raw: &str) -> Harvest {
    let mut found = Harvest::default();
    let mut pending_specialty: Option<String> = None;
    // Index into `found.artists` that a following specialty attaches to.
    let mut current: Option<usize> = None;

    for line in raw.lines() {
        for caps in FIELD.captures_iter(line) {
            let value = caps[2].trim();
            if value.is_empty() || value.chars().count() > MAX_VALUE_LEN {
                continue;
            }

            if caps[1].eq_ignore_ascii_case("name") {
                current = match found.artists.iter().position(|a| a.name == value) {
                    Some(_) => None,
                    None if found.artists.len() < MAX_HARVESTED => {
                        found.artists.push(HarvestedArtist {
                            name: value.to_string(),
                            specialty: pending_specialty.take(),
                        });
                        Some(found.artists.len() - 1)
                    }
                    None => None,
                };
                continue;
            }

            let before_any_name = found.artists.is_empty();
            match current.and_then(|i| found.artists.get_mut(i)) {
                Some(artist) if artist.specialty.is_none() => {
                    artist.specialty = Some(value.to_string());
                }
                Some(_) => {}
                None if before_any_name => pending_specialty = Some(value.to_string()),
                None => {}
            }
        }
    }

    found
}
