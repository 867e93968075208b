//! Textual repair of near-JSON model output.

use std::sync::LazyLock;

use regex::Regex;

static BARE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\{,]\s*)([A-Za-z_][A-Za-z0-9_]*)(\s*:)").expect("bare key regex is valid")
});

static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*([\]\}])").expect("trailing comma regex is valid"));

/// Quotes unquoted object keys and drops trailing commas before a closing
/// bracket. Only touches text outside string literals.
pub fn repair(text: &str) -> String {
    let mut repaired = String::with_capacity(text.len() + 16);
    for (segment, in_string) in split_strings(text) {
        if in_string {
            repaired.push_str(segment);
        } else {
            let keyed = BARE_KEY.replace_all(segment, "$1\"$2\"$3");
            repaired.push_str(&TRAILING_COMMA.replace_all(&keyed, "$1"));
        }
    }
    repaired
}

/// Splits `text` into alternating code and string-literal segments.
/// A trailing unterminated literal is reported as a string segment.
fn split_strings(text: &str) -> Vec<(&str, bool)> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                segments.push((&text[start..=i], true));
                start = i + 1;
                in_string = false;
            }
        } else if c == '"' {
            if start < i {
                segments.push((&text[start..i], false));
            }
            start = i;
            in_string = true;
        }
    }
    if start < text.len() {
        segments.push((&text[start..], in_string));
    }
    segments
}
