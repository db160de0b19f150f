use super::Strategy;
use crate::parser::blocks::Block;
use crate::parser::entry::{Entry, EntryBuilder, State};
use crate::parser::fields::{extract_date, extract_location, heading_fields};
use crate::parser::title::is_heading;

/// A heading paragraph opens the entry; everything after it is body.
///
/// Only the first heading opens an entry. Blocks seen before it have nowhere
/// to go and are dropped.
pub struct Generic;

impl Strategy for Generic {
    fn step(&self, state: State, block: &Block, _out: &mut Vec<Entry>) -> State {
        match (state, block) {
            (State::Idle, Block::Paragraph { text }) if is_heading(text) => {
                let (title, location) = heading_fields(text);
                State::Open(EntryBuilder::new(title).with_location(location))
            }
            (State::Idle, _) => State::Idle,
            (State::Open(mut entry), Block::Paragraph { text }) => {
                absorb_line(&mut entry, text);
                State::Open(entry)
            }
            (State::Open(mut entry), Block::ListGroup { items }) => {
                entry.push_list(items);
                State::Open(entry)
            }
        }
    }
}

/// Date first, then location, each only while the entry lacks one.
fn absorb_line(entry: &mut EntryBuilder, raw: &str) {
    let mut text = raw.trim().to_string();

    if !entry.has_date() {
        if let (Some(date), rest) = extract_date(&text) {
            entry.set_date(date);
            text = rest;
        }
    }
    if !entry.has_location() {
        if let (Some(location), rest) = extract_location(&text) {
            entry.set_location(location);
            text = rest;
        }
    }

    entry.push_text(text);
}
