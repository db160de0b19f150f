use super::Strategy;
use crate::parser::blocks::Block;
use crate::parser::entry::{Entry, EntryBuilder, State};
use crate::parser::fields::extract_date;
use crate::parser::render::RenderStyle;
use crate::parser::title::is_heading;

/// "Heading: details, date" on one line.
///
/// List items are read one at a time, so a heading may also sit inside a
/// bullet list. The text after the colon keeps the shape of its source line.
pub struct Colon;

impl Strategy for Colon {
    fn step(&self, state: State, block: &Block, out: &mut Vec<Entry>) -> State {
        match block {
            Block::Paragraph { text } => feed_line(state, text, false, out),
            Block::ListGroup { items } => {
                let mut state = items
                    .iter()
                    .fold(state, |state, item| feed_line(state, item, true, out));
                if let State::Open(entry) = &mut state {
                    entry.close_list();
                }
                state
            }
        }
    }

    fn style(&self) -> RenderStyle {
        RenderStyle {
            emphasize_title: true,
            highlight: None,
        }
    }
}

fn feed_line(state: State, text: &str, bullet: bool, out: &mut Vec<Entry>) -> State {
    if let Some((title, rest)) = split_heading(text) {
        state.flush(out);
        let mut entry = EntryBuilder::new(title);
        let (date, rest) = extract_date(rest);
        if let Some(date) = date {
            entry.set_date(date);
        }
        push_line(&mut entry, rest, bullet);
        return State::Open(entry);
    }

    match state {
        State::Open(mut entry) => {
            push_line(&mut entry, text.trim().to_string(), bullet);
            State::Open(entry)
        }
        State::Idle => State::Idle,
    }
}

/// Text before the first colon, if it reads like a heading, and the text after it.
fn split_heading(text: &str) -> Option<(&str, &str)> {
    let (lhs, rhs) = text.split_once(':')?;
    let lhs = lhs.trim();
    (!lhs.is_empty() && is_heading(lhs)).then(|| (lhs, rhs.trim()))
}

fn push_line(entry: &mut EntryBuilder, text: String, bullet: bool) {
    if text.is_empty() {
        return;
    }
    if bullet {
        entry.push_bullet(text);
    } else {
        entry.push_text(text);
    }
}
