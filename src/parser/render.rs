use regex::Regex;
use serde::Serialize;

use super::entry::{BodyItem, Entry};

pub const CAPTION_SEPARATOR: &str = " — ";

/// Per-layout presentation knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderStyle {
    pub emphasize_title: bool,
    /// Matches of this pattern in body text are emphasized.
    pub highlight: Option<&'static Regex>,
}

/// Display form of one entry: header (title + caption) over an ordered body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryTree {
    pub title: String,
    pub emphasized: bool,
    pub caption: Option<String>,
    pub body: Vec<BodyNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum BodyNode {
    Paragraph(Vec<Inline>),
    List(Vec<Vec<Inline>>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Inline {
    Plain(String),
    Strong(String),
}

pub fn render(entries: &[Entry], style: &RenderStyle) -> Vec<EntryTree> {
    entries
        .iter()
        .map(|entry| EntryTree {
            title: entry.title.clone(),
            emphasized: style.emphasize_title,
            caption: caption(entry),
            body: entry
                .body
                .iter()
                .map(|item| match item {
                    BodyItem::Text(text) => BodyNode::Paragraph(inlines(text, style.highlight)),
                    BodyItem::List(items) => BodyNode::List(
                        items.iter().map(|i| inlines(i, style.highlight)).collect(),
                    ),
                })
                .collect(),
        })
        .collect()
}

/// Location, then date, joined with an em dash.
fn caption(entry: &Entry) -> Option<String> {
    let parts: Vec<&str> = [entry.location.as_deref(), entry.date.as_deref()]
        .into_iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(CAPTION_SEPARATOR))
    }
}

/// Split `text` into plain runs and emphasized matches of `highlight`.
pub fn inlines(text: &str, highlight: Option<&Regex>) -> Vec<Inline> {
    let Some(re) = highlight else {
        return vec![Inline::Plain(text.to_string())];
    };

    let mut runs = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        if m.start() > last {
            runs.push(Inline::Plain(text[last..m.start()].to_string()));
        }
        runs.push(Inline::Strong(m.as_str().to_string()));
        last = m.end();
    }
    if last < text.len() || runs.is_empty() {
        runs.push(Inline::Plain(text[last..].to_string()));
    }
    runs
}
