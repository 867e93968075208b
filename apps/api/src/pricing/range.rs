//! Price-range detection, reading and narrowing.

use std::sync::LazyLock;

use regex::Regex;

/// Spans wider than this are compressed toward their center.
pub const NARROW_THRESHOLD: u64 = 300;

/// Fraction of the span each bound moves inward when narrowing.
const NARROW_FRACTION: f64 = 0.2;

/// "$N - $N" (thousands separators allowed) or "N - N CODE".
static PRICE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\$[\d,]+\s*(?:-|–|—|to)\s*\$[\d,]+)|(\d[\d,]*\s*(?:-|–|—|to)\s*\d[\d,]*\s*(?:USD|HKD|EUR|GBP)\b)",
    )
    .expect("price range regex is valid")
});

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d,]*").expect("number regex is valid"));

static CURRENCY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(USD|HKD|EUR|GBP)\b").expect("currency regex is valid"));

/// First price-range looking substring of `text`.
pub fn find_price_range(text: &str) -> Option<&str> {
    PRICE_RANGE.find(text).map(|m| m.as_str())
}

/// The first two numbers of a range plus its currency markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSpan {
    pub min: u64,
    pub max: u64,
    pub dollar: bool,
    pub code: Option<String>,
}

impl PriceSpan {
    pub fn parse(range: &str) -> Option<Self> {
        let mut numbers = NUMBER
            .find_iter(range)
            .filter_map(|m| m.as_str().replace(',', "").parse::<u64>().ok());
        let min = numbers.next()?;
        let max = numbers.next()?;

        Some(Self {
            min,
            max,
            dollar: range.contains('$'),
            code: CURRENCY_CODE
                .captures(range)
                .map(|c| c[1].to_ascii_uppercase()),
        })
    }

    /// Same span with the bounds in ascending order.
    pub fn ordered(self) -> Self {
        if self.min > self.max {
            Self {
                min: self.max,
                max: self.min,
                ..self
            }
        } else {
            self
        }
    }

    pub fn width(&self) -> u64 {
        self.max.abs_diff(self.min)
    }

    pub fn render(&self) -> String {
        let sym = if self.dollar { "$" } else { "" };
        let mut out = format!(
            "{sym}{} - {sym}{}",
            with_thousands(self.min),
            with_thousands(self.max)
        );
        if let Some(code) = &self.code {
            out.push(' ');
            out.push_str(code);
        }
        out
    }
}

/// Compresses a span wider than `NARROW_THRESHOLD` by moving each bound 20%
/// toward the center. Reversed bounds are ordered first. Narrow or
/// unreadable ranges come back unchanged.
pub fn narrow_down(range: &str) -> String {
    let Some(span) = PriceSpan::parse(range).map(PriceSpan::ordered) else {
        return range.to_string();
    };
    if span.width() <= NARROW_THRESHOLD {
        return range.to_string();
    }

    let delta = span.width() as f64 * NARROW_FRACTION;
    PriceSpan {
        min: (span.min as f64 + delta).round() as u64,
        max: (span.max as f64 - delta).round() as u64,
        ..span
    }
    .render()
}

/// 1640 → "1,640".
pub fn with_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
