use serde::Serialize;

use super::segment::{
    colon::Colon, generic::Generic, industry::Industry, schools::Schools, Strategy,
};
use crate::document::normalize_title;

/// Layout of a résumé section, picked once from its heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Generic,
    Colon,
    Schools,
    Industry,
    Passthrough,
}

/// Checked in order; the first row with a keyword contained in the title wins.
const KIND_KEYWORDS: &[(SectionKind, &[&str])] = &[
    (SectionKind::Schools, &["education"]),
    (SectionKind::Industry, &["industry", "work", "professional"]),
    (
        SectionKind::Colon,
        &["publication", "certification", "training", "course", "award"],
    ),
    (
        SectionKind::Generic,
        &["experience", "research", "project", "teaching", "volunteer", "leadership"],
    ),
];

impl SectionKind {
    pub fn from_title(title: &str) -> Self {
        let name = normalize_title(title);
        KIND_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| name.contains(kw)))
            .map(|(kind, _)| *kind)
            .unwrap_or(SectionKind::Passthrough)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Generic => "generic",
            SectionKind::Colon => "colon",
            SectionKind::Schools => "schools",
            SectionKind::Industry => "industry",
            SectionKind::Passthrough => "passthrough",
        }
    }

    /// `None` for sections rendered as they came.
    pub fn strategy(self) -> Option<&'static dyn Strategy> {
        match self {
            SectionKind::Generic => Some(&Generic),
            SectionKind::Colon => Some(&Colon),
            SectionKind::Schools => Some(&Schools),
            SectionKind::Industry => Some(&Industry),
            SectionKind::Passthrough => None,
        }
    }
}
