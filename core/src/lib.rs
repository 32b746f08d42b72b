#![no_std]

extern crate alloc;

pub use audio::*;
pub use controller::*;
pub use deck::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use symbol::*;
pub use types::*;

mod audio;
mod controller;
mod deck;
mod engine;
mod error;
mod generator;
mod symbol;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    NoChange,
    /// First card of a pair turned face-up.
    Revealed,
    Mismatched,
    Matched(Symbol),
    /// The pair that completed the deck.
    Won(Symbol),
}

impl FlipOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    /// Whether this flip completed a pair, which then has to be cleared after [`RESOLVE_DELAY_MS`].
    pub const fn completes_pair(self) -> bool {
        matches!(self, Self::Mismatched | Self::Matched(_) | Self::Won(_))
    }
}
