use super::Strategy;
use crate::parser::blocks::Block;
use crate::parser::entry::{Entry, EntryBuilder, State};
use crate::parser::fields::heading_fields;
use crate::parser::title::is_heading;

/// Employers and duties share one bullet list; a heading item starts the next job.
pub struct Industry;

impl Strategy for Industry {
    fn step(&self, state: State, block: &Block, out: &mut Vec<Entry>) -> State {
        match (state, block) {
            (State::Open(mut entry), Block::Paragraph { text }) => {
                entry.push_text(text.as_str());
                State::Open(entry)
            }
            (State::Idle, Block::Paragraph { .. }) => State::Idle,
            (state, Block::ListGroup { items }) => {
                let mut state = items.iter().fold(state, |state, item| feed_item(state, item, out));
                if let State::Open(entry) = &mut state {
                    entry.close_list();
                }
                state
            }
        }
    }
}

fn feed_item(state: State, item: &str, out: &mut Vec<Entry>) -> State {
    if is_heading(item) {
        state.flush(out);
        let (title, location) = heading_fields(item);
        return State::Open(EntryBuilder::new(title).with_location(location));
    }

    match state {
        State::Open(mut entry) => {
            entry.push_bullet(item);
            State::Open(entry)
        }
        State::Idle => State::Idle,
    }
}
