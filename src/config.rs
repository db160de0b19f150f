use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// What happens to a page around segmentation: which sections go, which get
/// split off at a marker line, and which move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Normalized titles of sections removed before anything else runs.
    pub drop_sections: Vec<String>,
    pub splits: Vec<MarkerSplit>,
    pub reorder: Vec<Reorder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSplit {
    /// Any of these lines (case-insensitive) marks the split point.
    pub markers: Vec<String>,
    /// Title of the section created after the marker.
    pub title: String,
    /// Only split sections with these titles. Empty means every section.
    #[serde(default)]
    pub sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reorder {
    pub section: String,
    pub before: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            drop_sections: vec!["summary".into()],
            splits: vec![
                MarkerSplit {
                    markers: vec!["technical skills".into()],
                    title: "Technical Skills".into(),
                    sections: vec![
                        "programming languages".into(),
                        "skills".into(),
                        "technical skills".into(),
                    ],
                },
                MarkerSplit {
                    markers: vec!["additional info.".into(), "additional info".into()],
                    title: "Additional Info.".into(),
                    sections: Vec::new(),
                },
            ],
            reorder: Vec::new(),
        }
    }
}

impl PipelineConfig {
    /// Defaults when `path` is `None`; otherwise the JSON file, with missing keys defaulted.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        info!(
            "Loaded config {} ({} drops, {} splits, {} moves)",
            path.display(),
            config.drop_sections.len(),
            config.splits.len(),
            config.reorder.len()
        );
        Ok(config)
    }
}
