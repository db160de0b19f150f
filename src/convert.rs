use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, info};

use crate::document::{Document, Node, Section};

const DOCUMENT_PART: &str = "word/document.xml";
/// Title for text that appears before the first heading.
const LEADING_TITLE: &str = "Summary";

/// One `w:p` as read from WordprocessingML.
#[derive(Debug, Default)]
struct Paragraph {
    text: String,
    style: Option<String>,
    numbered: bool,
}

/// Section under construction.
struct Draft {
    title: String,
    nodes: Vec<Node>,
}

/// Read a .docx and lay its paragraphs out as résumé sections.
pub fn convert_docx(path: &Path) -> Result<Document> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("{} is not a .docx archive", path.display()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .with_context(|| format!("{} has no {}", path.display(), DOCUMENT_PART))?
        .read_to_string(&mut xml)
        .with_context(|| format!("Failed to read {} from {}", DOCUMENT_PART, path.display()))?;

    let doc = sections_from_xml(&xml)?;
    info!("Converted {} into {} sections", path.display(), doc.sections.len());
    Ok(doc)
}

/// Heading-styled paragraphs open sections, numbered paragraphs group into
/// lists, everything else is a paragraph of the current section.
pub fn sections_from_xml(xml: &str) -> Result<Document> {
    let paragraphs = read_paragraphs(xml)?;
    debug!("{} paragraphs in document part", paragraphs.len());

    let mut drafts: Vec<Draft> = Vec::new();
    let mut pending: Vec<String> = Vec::new();

    for para in paragraphs {
        let text = clean_text(&para.text);
        if text.is_empty() {
            continue;
        }

        if is_heading_style(para.style.as_deref()) {
            flush_list(&mut drafts, &mut pending);
            drafts.push(Draft {
                title: text,
                nodes: Vec::new(),
            });
        } else if para.numbered {
            pending.push(text);
        } else {
            flush_list(&mut drafts, &mut pending);
            current(&mut drafts).nodes.push(Node::Paragraph(text));
        }
    }
    flush_list(&mut drafts, &mut pending);

    let sections = drafts
        .into_iter()
        .map(|d| Section::new(d.title, d.nodes))
        .collect();
    Ok(Document { sections })
}

fn read_paragraphs(xml: &str) -> Result<Vec<Paragraph>> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current: Option<Paragraph> = None;
    // Paragraphs nested in text boxes belong to the outer one.
    let mut depth = 0usize;
    let mut in_text = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => {
                    depth += 1;
                    if depth == 1 {
                        current = Some(Paragraph::default());
                    }
                }
                b"w:t" => in_text = true,
                _ if depth == 1 => mark_property(current.as_mut(), &e),
                _ => {}
            },
            Ok(Event::Empty(e)) if depth == 1 => mark_property(current.as_mut(), &e),
            Ok(Event::Text(e)) if in_text => {
                if let Some(para) = current.as_mut() {
                    para.text.push_str(&e.unescape()?);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        paragraphs.extend(current.take());
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

fn mark_property(para: Option<&mut Paragraph>, e: &BytesStart) {
    let Some(para) = para else {
        return;
    };
    match e.name().as_ref() {
        b"w:pStyle" => para.style = attr_value(e, b"w:val"),
        b"w:numPr" => para.numbered = true,
        _ => {}
    }
}

fn attr_value(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key)
        .map(|a| String::from_utf8_lossy(&a.value).into_owned())
}

/// "Heading1", "heading 2", "Title".
fn is_heading_style(style: Option<&str>) -> bool {
    let Some(style) = style else {
        return false;
    };
    let lower = style.to_lowercase();
    lower.contains("heading") || lower == "title"
}

fn clean_text(text: &str) -> String {
    text.replace('\u{a0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn flush_list(drafts: &mut Vec<Draft>, pending: &mut Vec<String>) {
    if !pending.is_empty() {
        let items = std::mem::take(pending);
        current(drafts).nodes.push(Node::List(items));
    }
}

/// The last section, opening the leading one if nothing is open yet.
fn current(drafts: &mut Vec<Draft>) -> &mut Draft {
    if drafts.is_empty() {
        drafts.push(Draft {
            title: LEADING_TITLE.to_string(),
            nodes: Vec::new(),
        });
    }
    let last = drafts.len() - 1;
    &mut drafts[last]
}
