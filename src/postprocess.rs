use tracing::{debug, info};

use crate::config::{MarkerSplit, Reorder};
use crate::document::{normalize_title, Details, Document, Node, Section};

/// Remove every section whose normalized title is in `names`.
pub fn drop_sections(doc: &mut Document, names: &[String]) -> usize {
    let names: Vec<String> = names.iter().map(|n| normalize_title(n)).collect();
    let before = doc.sections.len();
    doc.sections.retain(|s| !names.contains(&s.name()));
    let dropped = before - doc.sections.len();
    if dropped > 0 {
        info!("Dropped {} section(s)", dropped);
    }
    dropped
}

/// Run every split rule over the raw containers. Returns the number of
/// sections created.
pub fn split_sections(doc: &mut Document, rules: &[MarkerSplit]) -> usize {
    rules.iter().map(|rule| apply_split(doc, rule)).sum()
}

/// Apply the reorder rules in order. Returns how many moves happened.
pub fn reorder_sections(doc: &mut Document, rules: &[Reorder]) -> usize {
    rules
        .iter()
        .filter(|rule| move_before(doc, &rule.section, &rule.before))
        .count()
}

fn apply_split(doc: &mut Document, rule: &MarkerSplit) -> usize {
    let eligible: Vec<String> = rule.sections.iter().map(|s| normalize_title(s)).collect();
    let mut created = 0;
    let mut i = 0;

    while i < doc.sections.len() {
        let section = &mut doc.sections[i];
        if !eligible.is_empty() && !eligible.contains(&section.name()) {
            i += 1;
            continue;
        }

        let new_sections = split_at_marker(section, &rule.markers, &rule.title);
        let n = new_sections.len();
        if n > 0 {
            debug!("Split {} {:?} section(s) out of {:?}", n, rule.title, doc.sections[i].title);
        }
        // New sections land right after their source, in source order, and
        // are never split again by the same rule.
        for (offset, new_section) in new_sections.into_iter().enumerate() {
            doc.sections.insert(i + 1 + offset, new_section);
        }
        created += n;
        i += 1 + n;
    }

    created
}

/// Move everything after a marker line into new sections titled `title`.
///
/// A paragraph marker takes all following children of the container and
/// ends the scan. A list item marker takes the following items of its list;
/// each list is checked, and a list only produces a section if at least one
/// item moved. Markers are removed and compare trimmed and case-insensitively.
/// Segmented containers are left alone.
pub fn split_at_marker(section: &mut Section, markers: &[String], title: &str) -> Vec<Section> {
    let Some(Details::Raw(nodes)) = &mut section.details else {
        return Vec::new();
    };
    let is_marker = |text: &str| {
        let text = normalize_title(text);
        markers.iter().any(|m| normalize_title(m) == text)
    };

    let mut created = Vec::new();
    let mut idx = 0;
    while idx < nodes.len() {
        if matches!(&nodes[idx], Node::Paragraph(text) if is_marker(text)) {
            let moved = nodes.split_off(idx + 1);
            nodes.truncate(idx);
            created.push(Section::new(title, moved));
            break;
        }
        if let Node::List(items) = &mut nodes[idx] {
            if let Some(pos) = items.iter().position(|item| is_marker(item)) {
                let moved = items.split_off(pos + 1);
                items.truncate(pos);
                if !moved.is_empty() {
                    created.push(Section::new(title, vec![Node::List(moved)]));
                }
            }
        }
        idx += 1;
    }

    created
}

/// Put `section` immediately before `before`. Returns false when either is missing.
pub fn move_before(doc: &mut Document, section: &str, before: &str) -> bool {
    let (Some(from), Some(to)) = (doc.position(section), doc.position(before)) else {
        debug!("Cannot move {:?} before {:?}: section missing", section, before);
        return false;
    };
    if from == to {
        return false;
    }

    let moving = doc.sections.remove(from);
    let to = if from < to { to - 1 } else { to };
    doc.sections.insert(to, moving);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineConfig;

    fn p(text: &str) -> Node {
        Node::Paragraph(text.into())
    }

    fn list(items: &[&str]) -> Node {
        Node::List(items.iter().map(|s| s.to_string()).collect())
    }

    fn titles(doc: &Document) -> Vec<&str> {
        doc.sections.iter().map(|s| s.title.as_str()).collect()
    }

    fn markers(m: &[&str]) -> Vec<String> {
        m.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn paragraph_marker_moves_the_rest() {
        let mut section = Section::new(
            "Programming Languages",
            vec![p("Rust, Python"), p("TECHNICAL SKILLS"), p("Welding"), list(&["Rigging"])],
        );
        let new =
            split_at_marker(&mut section, &markers(&["technical skills"]), "Technical Skills");
        assert_eq!(new.len(), 1);
        assert_eq!(section.details, Some(Details::Raw(vec![p("Rust, Python")])));
        assert_eq!(new[0].title, "Technical Skills");
        assert_eq!(new[0].details, Some(Details::Raw(vec![p("Welding"), list(&["Rigging"])])));
    }

    #[test]
    fn list_item_marker_splits_the_list() {
        let mut section = Section::new(
            "Skills",
            vec![list(&["Welding", "Additional Info.", "Driving licence", "First aid"])],
        );
        let new =
            split_at_marker(&mut section, &markers(&["additional info."]), "Additional Info.");
        assert_eq!(new.len(), 1);
        assert_eq!(section.details, Some(Details::Raw(vec![list(&["Welding"])])));
        assert_eq!(
            new[0].details,
            Some(Details::Raw(vec![list(&["Driving licence", "First aid"])]))
        );
    }

    #[test]
    fn every_list_is_checked() {
        let mut section = Section::new(
            "Skills",
            vec![
                list(&["Welding", "Additional Info", "Driving licence"]),
                p("Between lists"),
                list(&["Rigging", "additional info.", "First aid"]),
            ],
        );
        let new = split_at_marker(
            &mut section,
            &markers(&["additional info.", "additional info"]),
            "Additional Info.",
        );
        assert_eq!(new.len(), 2);
        assert_eq!(
            section.details,
            Some(Details::Raw(vec![list(&["Welding"]), p("Between lists"), list(&["Rigging"])]))
        );
        assert_eq!(new[0].details, Some(Details::Raw(vec![list(&["Driving licence"])])));
        assert_eq!(new[1].details, Some(Details::Raw(vec![list(&["First aid"])])));
    }

    #[test]
    fn list_marker_at_end_creates_nothing() {
        let mut section = Section::new("Skills", vec![list(&["Welding", "Additional Info"])]);
        let new = split_at_marker(&mut section, &markers(&["additional info"]), "Additional Info.");
        assert!(new.is_empty());
        assert_eq!(section.details, Some(Details::Raw(vec![list(&["Welding"])])));
    }

    #[test]
    fn segmented_sections_are_untouched() {
        let mut section = Section {
            title: "Education".into(),
            details: Some(Details::Entries(Vec::new())),
        };
        let before = section.clone();
        let new =
            split_at_marker(&mut section, &markers(&["technical skills"]), "Technical Skills");
        assert!(new.is_empty());
        assert_eq!(section, before);
    }

    #[test]
    fn split_inserts_after_source_and_respects_eligibility() {
        let mut doc = Document {
            sections: vec![
                Section::new("Skills", vec![p("Rust"), p("Technical Skills"), p("Welding")]),
                Section::new("Hobbies", vec![p("Technical Skills"), p("Chess")]),
                Section::new("References", vec![]),
            ],
        };
        let rule = MarkerSplit {
            markers: markers(&["technical skills"]),
            title: "Technical Skills".into(),
            sections: markers(&["skills"]),
        };
        assert_eq!(apply_split(&mut doc, &rule), 1);
        assert_eq!(titles(&doc), vec!["Skills", "Technical Skills", "Hobbies", "References"]);
    }

    #[test]
    fn several_splits_keep_source_order() {
        let mut doc = Document {
            sections: vec![
                Section::new(
                    "Languages",
                    vec![list(&["English", "Additional Info.", "Driving licence"])],
                ),
                Section::new("Hobbies", vec![list(&["Chess", "Additional Info", "Hiking"])]),
            ],
        };
        let created = split_sections(&mut doc, &PipelineConfig::default().splits);
        assert_eq!(created, 2);
        assert_eq!(
            titles(&doc),
            vec!["Languages", "Additional Info.", "Hobbies", "Additional Info."]
        );
    }

    #[test]
    fn drop_by_normalized_title() {
        let mut doc = Document {
            sections: vec![Section::new(" SUMMARY ", vec![]), Section::new("Education", vec![])],
        };
        assert_eq!(drop_sections(&mut doc, &markers(&["summary"])), 1);
        assert_eq!(titles(&doc), vec!["Education"]);
    }

    #[test]
    fn move_section_before_another() {
        let mut doc = Document {
            sections: vec![
                Section::new("Education", vec![]),
                Section::new("Industry Experience", vec![]),
                Section::new("Technical Skills", vec![]),
            ],
        };
        assert!(move_before(&mut doc, "technical skills", "industry experience"));
        assert_eq!(titles(&doc), vec!["Education", "Technical Skills", "Industry Experience"]);

        assert!(move_before(&mut doc, "Education", "Industry Experience"));
        assert_eq!(titles(&doc), vec!["Technical Skills", "Education", "Industry Experience"]);
    }

    #[test]
    fn move_with_missing_section_is_noop() {
        let mut doc = Document {
            sections: vec![Section::new("Education", vec![])],
        };
        assert!(!move_before(&mut doc, "Education", "Publications"));
        assert!(!move_before(&mut doc, "Education", "Education"));
        assert_eq!(titles(&doc), vec!["Education"]);
    }

    #[test]
    fn reorder_counts_only_real_moves() {
        let mut doc = Document {
            sections: vec![
                Section::new("Education", vec![]),
                Section::new("Additional Info.", vec![]),
            ],
        };
        let rules = vec![
            Reorder {
                section: "additional info.".into(),
                before: "education".into(),
            },
            Reorder {
                section: "publications".into(),
                before: "education".into(),
            },
        ];
        assert_eq!(reorder_sections(&mut doc, &rules), 1);
        assert_eq!(titles(&doc), vec!["Additional Info.", "Education"]);
    }
}
