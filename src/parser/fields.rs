use std::sync::LazyLock;

use regex::Regex;

const MONTHS: &str = concat!(
    "January|February|March|April|May|June|July|August|September|October|November|December",
    "|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sept|Sep|Oct|Nov|Dec",
);

/// Month + year, bare year, or a year range closing on "present" or another (month +) year.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:(?:{m})\s+)?\d{{4}}\b(?:\s*[–-]\s*(?:present|(?:(?:{m})\s+)?\d{{4}}\b))?",
        m = MONTHS
    ))
    .unwrap()
});
static LOCATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z\-\s]+,\s*[A-Za-z\-\s]+$").unwrap());
static MULTI_WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Pull the leftmost date out of `text`.
///
/// Returns the matched date and the residual text. Dashes left dangling next
/// to the removed date are dropped and whitespace is collapsed, so the residual
/// of "Engineer – 2019" is "Engineer".
pub fn extract_date(text: &str) -> (Option<String>, String) {
    let Some(m) = DATE_RE.find(text) else {
        return (None, text.trim().to_string());
    };

    let before = text[..m.start()].trim_end_matches(is_gap);
    let after = text[m.end()..].trim_start_matches(is_gap);
    let residual = collapse_ws(&format!("{} {}", before, after));

    (Some(m.as_str().trim().to_string()), residual)
}

/// Pull a trailing "Place, Region" off the end of `text`.
///
/// The residual keeps everything before the match, minus the comma that
/// separated it from the location.
pub fn extract_location(text: &str) -> (Option<String>, String) {
    let Some(m) = LOCATION_RE.find(text) else {
        return (None, text.trim().to_string());
    };

    let location = m.as_str().trim();
    if location.starts_with(',') {
        return (None, text.trim().to_string());
    }

    let residual = text[..m.start()]
        .trim_end_matches(|c: char| c.is_whitespace() || c == ',')
        .trim_start()
        .to_string();

    (Some(location.to_string()), residual)
}

/// Split a heading line into title and location. A location that would eat the
/// whole line is not taken.
pub fn heading_fields(text: &str) -> (String, Option<String>) {
    match extract_location(text) {
        (Some(location), title) if !title.is_empty() => (title, Some(location)),
        _ => (text.trim().to_string(), None),
    }
}

pub fn collapse_ws(text: &str) -> String {
    MULTI_WS_RE.replace_all(text, " ").trim().to_string()
}

fn is_gap(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '–'
}
