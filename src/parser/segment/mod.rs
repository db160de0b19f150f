pub mod colon;
pub mod generic;
pub mod industry;
pub mod schools;

use super::blocks::Block;
use super::entry::{Entry, State};
use super::render::RenderStyle;

/// One section layout: how blocks open, feed and close entries.
pub trait Strategy {
    /// Consume one block. Entries closed along the way go to `out`.
    fn step(&self, state: State, block: &Block, out: &mut Vec<Entry>) -> State;

    fn style(&self) -> RenderStyle {
        RenderStyle::default()
    }
}

/// Run `strategy` over `blocks`, flushing whatever is still open at the end.
pub fn segment(strategy: &dyn Strategy, blocks: &[Block]) -> Vec<Entry> {
    let mut out = Vec::new();
    let last = blocks
        .iter()
        .fold(State::Idle, |state, block| strategy.step(state, block, &mut out));
    last.flush(&mut out);
    out
}
