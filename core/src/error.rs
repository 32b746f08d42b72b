use thiserror::Error;

use crate::Cue;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid card position")]
    InvalidPosition,
    #[error("Every symbol must appear exactly twice in a deck")]
    InvalidDeck,
    #[error("Deck does not match the selected difficulty")]
    DeckMismatch,
    #[error("No session has been started")]
    NotStarted,
}

pub type Result<T> = core::result::Result<T, GameError>;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum AudioError {
    #[error("{0:?} cue is unavailable")]
    Unavailable(Cue),
    #[error("{0:?} cue playback was rejected")]
    Rejected(Cue),
}
