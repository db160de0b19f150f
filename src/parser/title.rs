use std::sync::LazyLock;

use regex::Regex;

/// Organisation and role markers. Plain substring match: "Engineering" and
/// "Engineered" both hit on "Engineer", and an employer called "Acme" never does.
const HEADING_KEYWORDS: &[&str] = &[
    "University",
    "High School",
    "Technical",
    "Institute",
    "Center",
    "College",
    "Engineer",
    "Supervisor",
    "Company",
    "Oil",
    "Gas",
    "Production",
    "Department",
    "Units",
    "Co.",
];

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = HEADING_KEYWORDS
        .iter()
        .map(|kw| regex::escape(kw))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i)(?:{})", alternation)).unwrap()
});

/// Whether `text` reads like the first line of an entry (employer, school, role).
pub fn is_heading(text: &str) -> bool {
    HEADING_RE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn institutions() {
        assert!(is_heading("Example University, Springfield, USA"));
        assert!(is_heading("Lincoln High School"));
        assert!(is_heading("National Institute of Standards"));
        assert!(is_heading("State College"));
    }

    #[test]
    fn roles_and_companies() {
        assert!(is_heading("Acme Engineering Co., Metropolis, USA"));
        assert!(is_heading("Shift Supervisor"));
        assert!(is_heading("Northern Oil and Gas Company"));
        assert!(is_heading("Production Department"));
    }

    #[test]
    fn case_insensitive() {
        assert!(is_heading("senior engineer"));
        assert!(is_heading("UNIVERSITY OF NOWHERE"));
    }

    #[test]
    fn plain_sentences_are_not_headings() {
        assert!(!is_heading("Just a plain sentence with no keywords."));
        assert!(!is_heading("Built widget pipeline"));
        assert!(!is_heading("Led a team of 4"));
    }

    #[test]
    fn substring_false_positive_is_kept() {
        // "toil" contains "oil"
        assert!(is_heading("Years of toil on the night shift"));
    }

    #[test]
    fn unlisted_organisation_is_missed() {
        assert!(!is_heading("Globex Corporation"));
    }

    #[test]
    fn abbreviation_needs_the_dot() {
        assert!(is_heading("Widgets Co."));
        assert!(!is_heading("Widgets Co"));
    }
}
