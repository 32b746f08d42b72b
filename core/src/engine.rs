use alloc::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Fewer than two cards are pending, a flip may be accepted.
    Active,
    /// Two cards are face-up waiting to be cleared.
    Resolving,
    Won,
}

impl EngineState {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// Player-visible state of one card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Face {
    Down,
    Up(Symbol),
}

impl Face {
    pub const fn is_up(self) -> bool {
        matches!(self, Self::Up(_))
    }
}

/// Flip and match bookkeeping for a single deck. Time is not tracked here, callers decide when to
/// [`clear_flipped`](PlayEngine::clear_flipped).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    deck: Deck,
    flipped: SmallVec<[Position; 2]>,
    matched: BTreeSet<Symbol>,
    move_count: u32,
}

impl PlayEngine {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            flipped: SmallVec::new(),
            matched: BTreeSet::new(),
            move_count: 0,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn state(&self) -> EngineState {
        if self.is_won() {
            EngineState::Won
        } else if self.flipped.len() == 2 {
            EngineState::Resolving
        } else {
            EngineState::Active
        }
    }

    pub fn is_won(&self) -> bool {
        self.matched.len() == usize::from(self.deck.pair_count())
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Positions currently face-up and not yet cleared, in flip order.
    pub fn flipped(&self) -> &[Position] {
        &self.flipped
    }

    pub fn matched(&self) -> &BTreeSet<Symbol> {
        &self.matched
    }

    pub fn face_at(&self, position: Position) -> Face {
        match self.deck.symbol_at(position) {
            Some(symbol) if self.flipped.contains(&position) || self.matched.contains(&symbol) => {
                Face::Up(symbol)
            }
            _ => Face::Down,
        }
    }

    /// Whether [`flip`](PlayEngine::flip) would accept `position` right now.
    pub fn can_flip(&self, position: Position) -> Result<bool> {
        let position = self.deck.validate_position(position)?;

        Ok(self.flipped.len() < 2
            && !self.flipped.contains(&position)
            && !self.matched.contains(&self.deck[position]))
    }

    pub fn flip(&mut self, position: Position) -> Result<FlipOutcome> {
        if !self.can_flip(position)? {
            return Ok(FlipOutcome::NoChange);
        }

        self.flipped.push(position);

        Ok(if self.flipped.len() == 2 {
            self.resolve()
        } else {
            FlipOutcome::Revealed
        })
    }

    /// Turns pending cards face-down, matched cards stay face-up through the matched set.
    pub fn clear_flipped(&mut self) -> bool {
        let updated = !self.flipped.is_empty();
        self.flipped.clear();
        updated
    }

    fn resolve(&mut self) -> FlipOutcome {
        let (a, b) = (self.flipped[0], self.flipped[1]);
        let symbol = self.deck[a];
        self.move_count = self.move_count.saturating_add(1);

        if symbol != self.deck[b] {
            return FlipOutcome::Mismatched;
        }

        self.matched.insert(symbol);
        if self.is_won() {
            FlipOutcome::Won(symbol)
        } else {
            FlipOutcome::Matched(symbol)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use Symbol::*;

    fn engine() -> PlayEngine {
        // 0 1 2 3 4 5 6 7
        // A B G S A B G S
        PlayEngine::new(Deck::ordered(Difficulty::Easy))
    }

    #[test]
    fn mismatch_counts_a_move_and_matches_nothing() {
        let mut engine = engine();

        assert_eq!(engine.flip(0).unwrap(), FlipOutcome::Revealed);
        assert_eq!(engine.flip(1).unwrap(), FlipOutcome::Mismatched);

        assert_eq!(engine.move_count(), 1);
        assert!(engine.matched().is_empty());
        assert_eq!(engine.state(), EngineState::Resolving);
        assert_eq!(engine.face_at(1), Face::Up(Banana));

        assert!(engine.clear_flipped());
        assert_eq!(engine.flipped(), &[] as &[Position]);
        assert_eq!(engine.face_at(0), Face::Down);
        assert_eq!(engine.face_at(1), Face::Down);
    }

    #[test]
    fn match_is_recorded_before_clear_and_stays_face_up() {
        let mut engine = engine();

        engine.flip(0).unwrap();
        assert_eq!(engine.flip(4).unwrap(), FlipOutcome::Matched(Apple));
        assert!(engine.matched().contains(&Apple));
        assert_eq!(engine.move_count(), 1);

        engine.clear_flipped();
        assert_eq!(engine.face_at(0), Face::Up(Apple));
        assert_eq!(engine.face_at(4), Face::Up(Apple));
    }

    #[test]
    fn third_flip_is_rejected_while_resolving() {
        let mut engine = engine();
        engine.flip(0).unwrap();
        engine.flip(1).unwrap();
        let before = engine.clone();

        assert_eq!(engine.flip(2).unwrap(), FlipOutcome::NoChange);
        assert_eq!(engine, before);
    }

    #[test]
    fn reflipping_pending_card_is_rejected() {
        let mut engine = engine();
        engine.flip(3).unwrap();

        assert_eq!(engine.flip(3).unwrap(), FlipOutcome::NoChange);
        assert_eq!(engine.flipped(), &[3]);
        assert_eq!(engine.move_count(), 0);
    }

    #[test]
    fn matched_cards_cannot_be_flipped() {
        let mut engine = engine();
        engine.flip(2).unwrap();
        engine.flip(6).unwrap();
        engine.clear_flipped();

        assert_eq!(engine.can_flip(2), Ok(false));
        assert_eq!(engine.flip(6).unwrap(), FlipOutcome::NoChange);
        assert!(engine.flipped().is_empty());
    }

    #[test]
    fn out_of_range_position_is_an_error() {
        let mut engine = engine();

        assert_eq!(engine.flip(8), Err(GameError::InvalidPosition));
        assert_eq!(engine.face_at(8), Face::Down);
    }

    #[test]
    fn last_pair_wins() {
        let deck = Deck::from_symbols(vec![Apple, Banana, Banana, Apple]).unwrap();
        let mut engine = PlayEngine::new(deck);

        engine.flip(0).unwrap();
        assert_eq!(engine.flip(3).unwrap(), FlipOutcome::Matched(Apple));
        engine.clear_flipped();
        engine.flip(1).unwrap();
        assert_eq!(engine.flip(2).unwrap(), FlipOutcome::Won(Banana));

        assert_eq!(engine.state(), EngineState::Won);
        assert_eq!(engine.move_count(), 2);
        assert!((0..4).all(|position| engine.face_at(position).is_up()));
    }
}
