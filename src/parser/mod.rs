pub mod blocks;
pub mod entry;
pub mod fields;
pub mod render;
pub mod sections;
pub mod segment;
pub mod title;

use serde::Serialize;
use tracing::debug;

use crate::config::PipelineConfig;
use crate::document::{Details, Document, Section};
use crate::postprocess;
use entry::Entry;
use sections::SectionKind;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessCounts {
    pub sections: usize,
    pub segmented: usize,
    pub entries: usize,
    pub dropped: usize,
    pub split: usize,
    pub moved: usize,
}

/// Segmentation result for one section, without touching the section.
#[derive(Debug, Clone, Serialize)]
pub struct SectionEntries {
    pub title: String,
    pub kind: SectionKind,
    pub blocks: usize,
    pub entries: Vec<Entry>,
}

/// Drop and split sections on the raw page, before anything is segmented.
pub fn prepare_document(doc: &mut Document, config: &PipelineConfig) -> ProcessCounts {
    ProcessCounts {
        dropped: postprocess::drop_sections(doc, &config.drop_sections),
        split: postprocess::split_sections(doc, &config.splits),
        sections: doc.sections.len(),
        ..ProcessCounts::default()
    }
}

/// Four passes over a loaded page: drop → split → segment + render → reorder.
pub fn process_document(doc: &mut Document, config: &PipelineConfig) -> ProcessCounts {
    let mut counts = prepare_document(doc, config);

    for section in &mut doc.sections {
        let n = render_section(section);
        if n > 0 {
            counts.segmented += 1;
            counts.entries += n;
        }
    }

    counts.moved = postprocess::reorder_sections(doc, &config.reorder);
    counts.sections = doc.sections.len();
    counts
}

pub fn segment_section(section: &Section) -> SectionEntries {
    let kind = SectionKind::from_title(&section.title);
    let blocks = match &section.details {
        Some(Details::Raw(nodes)) => blocks::extract_blocks(nodes),
        _ => Vec::new(),
    };
    let entries = match kind.strategy() {
        Some(strategy) => segment::segment(strategy, &blocks),
        None => Vec::new(),
    };

    SectionEntries {
        title: section.title.clone(),
        kind,
        blocks: blocks.len(),
        entries,
    }
}

/// Replace the section's raw content with its entries. Returns the number of
/// entries; on zero the section keeps its original content.
pub fn render_section(section: &mut Section) -> usize {
    let result = segment_section(section);
    let Some(strategy) = result.kind.strategy() else {
        debug!("Passing through {:?}", section.title);
        return 0;
    };
    if result.entries.is_empty() {
        debug!(
            "No entries in {:?} ({} blocks), keeping original content",
            section.title, result.blocks
        );
        return 0;
    }

    let trees = render::render(&result.entries, &strategy.style());
    section.details = Some(Details::Entries(trees));
    result.entries.len()
}

// ── Tests ──
