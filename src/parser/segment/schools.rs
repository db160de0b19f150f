use std::sync::LazyLock;

use regex::Regex;

use super::Strategy;
use crate::parser::blocks::Block;
use crate::parser::entry::{Entry, EntryBuilder, State};
use crate::parser::fields::extract_date;
use crate::parser::render::RenderStyle;

/// Dotted leaders or ellipses between a school name and its place/dates.
static LEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*[.\u{2026}]+\s*").unwrap());
static GPA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)GPA(?:\s*:?\s*\d+(?:\.\d+)?(?:\s*out of\s*\d+(?:\.\d+)?)?)?").unwrap()
});

/// Every bullet list opens a school; the blocks after it, up to the next list,
/// are that school's details.
pub struct Schools;

impl Strategy for Schools {
    fn step(&self, state: State, block: &Block, out: &mut Vec<Entry>) -> State {
        match block {
            Block::ListGroup { items } => {
                state.flush(out);
                let Some((header, rest)) = items.split_first() else {
                    return State::Idle;
                };
                let mut entry = school_header(header);
                if !rest.is_empty() {
                    entry.push_list(rest);
                }
                State::Open(entry)
            }
            Block::Paragraph { text } => match state {
                State::Open(mut entry) => {
                    entry.push_text(text.as_str());
                    State::Open(entry)
                }
                State::Idle => State::Idle,
            },
        }
    }

    fn style(&self) -> RenderStyle {
        RenderStyle {
            emphasize_title: true,
            highlight: Some(&*GPA_RE),
        }
    }
}

/// "State College ... Springfield ... 2012" → title, location, date.
fn school_header(text: &str) -> EntryBuilder {
    let parts: Vec<&str> = LEADER_RE
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let Some((title, trailing)) = parts.split_first() else {
        return EntryBuilder::new(text.trim());
    };

    let mut entry = EntryBuilder::new(*title);
    let caption = trailing.join(" ");
    if !caption.is_empty() {
        let (date, rest) = extract_date(&caption);
        if let Some(date) = date {
            entry.set_date(date);
        }
        if !rest.is_empty() {
            entry.set_location(rest);
        }
    }
    entry
}
