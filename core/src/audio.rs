use serde::{Deserialize, Serialize};

use crate::AudioError;

/// The three sounds the game drives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// Looping music, started with a session and toggled by the player.
    Background,
    Flip,
    Win,
}

impl Cue {
    pub const ALL: [Cue; 3] = [Cue::Background, Cue::Flip, Cue::Win];
}

/// Volume of the background loop, as a fraction of maximum.
pub const BACKGROUND_VOLUME: f64 = 0.2;

/// Playback capabilities the controller needs. Implementations are created once and reused across sessions.
pub trait AudioBackend {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError>;

    fn pause(&mut self, cue: Cue) -> Result<(), AudioError>;

    /// Seeks back to the start, then plays, even if the cue is already playing.
    fn rewind_and_play(&mut self, cue: Cue) -> Result<(), AudioError>;
}

/// Backend that plays nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SilentAudio;

impl AudioBackend for SilentAudio {
    fn play(&mut self, _cue: Cue) -> Result<(), AudioError> {
        Ok(())
    }

    fn pause(&mut self, _cue: Cue) -> Result<(), AudioError> {
        Ok(())
    }

    fn rewind_and_play(&mut self, _cue: Cue) -> Result<(), AudioError> {
        Ok(())
    }
}
