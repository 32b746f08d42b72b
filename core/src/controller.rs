use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub position: Position,
    pub face: Face,
}

/// One started game: who is playing, on which deck, and for how long.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    id: SessionId,
    player_name: String,
    difficulty: Difficulty,
    engine: PlayEngine,
    elapsed_secs: u32,
}

impl Session {
    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn move_count(&self) -> u32 {
        self.engine.move_count()
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn is_won(&self) -> bool {
        self.engine.is_won()
    }

    pub fn face_at(&self, position: Position) -> Face {
        self.engine.face_at(position)
    }

    pub fn cards(&self) -> impl Iterator<Item = CardView> + '_ {
        self.engine.deck().cards().map(|card| CardView {
            position: card.position,
            face: self.engine.face_at(card.position),
        })
    }
}

/// Owns the current session and the music preference, and turns player intents into state changes and audio
/// commands. Timers live with the caller, which feeds back [`tick`](GameController::tick) and
/// [`clear_flipped`](GameController::clear_flipped) tagged with the session they were scheduled for.
#[derive(Debug)]
pub struct GameController<A> {
    audio: A,
    music_enabled: bool,
    last_id: SessionId,
    session: Option<Session>,
}

impl<A: AudioBackend> GameController<A> {
    pub fn new(audio: A, music_enabled: bool) -> Self {
        Self {
            audio,
            music_enabled,
            last_id: SessionId::default(),
            session: None,
        }
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn music_enabled(&self) -> bool {
        self.music_enabled
    }

    pub fn is_started(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Deals a freshly shuffled deck and replaces any running session.
    pub fn start_session(
        &mut self,
        player_name: impl Into<String>,
        difficulty: Difficulty,
        seed: u64,
    ) -> SessionId {
        let deck = ShuffledDeckGenerator::new(seed).generate(difficulty);
        self.install_session(player_name.into(), difficulty, deck)
    }

    pub fn start_session_with_deck(
        &mut self,
        player_name: impl Into<String>,
        difficulty: Difficulty,
        deck: Deck,
    ) -> Result<SessionId> {
        if deck.pair_count() != difficulty.pair_count() || !deck.uses_only(difficulty.symbols()) {
            return Err(GameError::DeckMismatch);
        }
        Ok(self.install_session(player_name.into(), difficulty, deck))
    }

    /// Leaves the current session, any callbacks still scheduled for it become stale.
    pub fn end_session(&mut self) -> bool {
        let ended = self.session.take();
        if let Some(session) = &ended {
            log::debug!("session {} ended", session.id.get());
        }
        ended.is_some()
    }

    pub fn toggle_music(&mut self) -> bool {
        self.music_enabled = !self.music_enabled;
        log::debug!("music enabled: {}", self.music_enabled);

        let result = if self.music_enabled {
            self.audio.play(Cue::Background)
        } else {
            self.audio.pause(Cue::Background)
        };
        discard_audio_error(result);

        self.music_enabled
    }

    pub fn flip(&mut self, position: Position) -> Result<FlipOutcome> {
        let session = self.session.as_mut().ok_or(GameError::NotStarted)?;

        if !session.engine.can_flip(position)? {
            log::trace!("flip {} rejected", position);
            return Ok(FlipOutcome::NoChange);
        }

        discard_audio_error(self.audio.rewind_and_play(Cue::Flip));
        let outcome = session.engine.flip(position)?;
        log::trace!("flip {}: {:?}", position, outcome);

        if let FlipOutcome::Won(_) = outcome {
            log::debug!(
                "session {} won in {} moves, {}s",
                session.id.get(),
                session.engine.move_count(),
                session.elapsed_secs
            );
            discard_audio_error(self.audio.play(Cue::Win));
        }

        Ok(outcome)
    }

    /// Turns the pending pair face-down, meant to run [`RESOLVE_DELAY_MS`] after a pair resolved.
    pub fn clear_flipped(&mut self, id: SessionId) -> bool {
        match self.current_session_mut(id) {
            Some(session) => {
                log::trace!("clear flipped cards");
                session.engine.clear_flipped()
            }
            None => false,
        }
    }

    /// Advances the clock by one second for as long as the session is running.
    pub fn tick(&mut self, id: SessionId) -> bool {
        match self.current_session_mut(id) {
            Some(session) => {
                session.elapsed_secs = session.elapsed_secs.saturating_add(1);
                true
            }
            None => false,
        }
    }

    fn current_session_mut(&mut self, id: SessionId) -> Option<&mut Session> {
        self.session.as_mut().filter(|session| session.id == id)
    }

    fn install_session(&mut self, player_name: String, difficulty: Difficulty, deck: Deck) -> SessionId {
        self.last_id = self.last_id.next();
        let id = self.last_id;
        log::debug!(
            "session {} started: {:?} with {} cards",
            id.get(),
            difficulty,
            deck.len()
        );

        self.session = Some(Session {
            id,
            player_name,
            difficulty,
            engine: PlayEngine::new(deck),
            elapsed_secs: 0,
        });

        if self.music_enabled {
            discard_audio_error(self.audio.play(Cue::Background));
        }

        id
    }
}

fn discard_audio_error(result: core::result::Result<(), AudioError>) {
    if let Err(err) = result {
        log::debug!("ignoring audio failure: {}", err);
    }
}
