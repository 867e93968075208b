use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Descriptor of the artwork being priced. Every field is optional on the wire;
/// prompt building and the fallback substitute defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkDetails {
    #[serde(default)]
    pub title: Option<String>,
    /// Medium or category, free text ("Digital Art (Procreate)", "oil on canvas").
    #[serde(default)]
    pub medium: Option<String>,
    /// Creation year. Accepts `2024` or `"2024"`; anything else reads as absent.
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ArtworkDetails {
    pub fn title_or_default(&self) -> &str {
        non_blank(self.title.as_deref()).unwrap_or("Untitled")
    }

    pub fn medium(&self) -> Option<&str> {
        non_blank(self.medium.as_deref())
    }

    pub fn year_or(&self, current_year: i32) -> i32 {
        self.year.unwrap_or(current_year)
    }

    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().map(str::trim).unwrap_or("")
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        Some(Value::String(s)) => s.trim().parse::<i32>().ok(),
        _ => None,
    })
}

/// A suggested price span plus the markdown rationale behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSuggestion {
    /// Currency-prefixed "min - max" span, e.g. "$560 - $1,640".
    pub price_range: String,
    pub rationale: String,
}

impl PricingSuggestion {
    pub fn full_response(&self) -> String {
        format!("{}\n\n{}", self.price_range, self.rationale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_year_accepts_number_and_string() {
        let a: ArtworkDetails = serde_json::from_value(json!({ "year": 2023 })).unwrap();
        let b: ArtworkDetails = serde_json::from_value(json!({ "year": " 2021 " })).unwrap();
        assert_eq!(a.year, Some(2023));
        assert_eq!(b.year, Some(2021));
    }

    #[test]
    fn test_garbage_year_reads_as_absent() {
        let d: ArtworkDetails =
            serde_json::from_value(json!({ "year": "last spring", "medium": "oil" })).unwrap();
        assert_eq!(d.year, None);
        assert_eq!(d.year_or(2026), 2026);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let d: ArtworkDetails = serde_json::from_value(json!({})).unwrap();
        assert_eq!(d.title_or_default(), "Untitled");
        assert_eq!(d.medium(), None);
        assert_eq!(d.description_or_default(), "");
    }

    #[test]
    fn test_blank_medium_is_absent() {
        let d = ArtworkDetails {
            medium: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(d.medium(), None);
    }

    #[test]
    fn test_full_response_joins_range_and_rationale() {
        let s = PricingSuggestion {
            price_range: "$400 - $700".to_string(),
            rationale: "## Market".to_string(),
        };
        assert_eq!(s.full_response(), "$400 - $700\n\n## Market");
    }
}
