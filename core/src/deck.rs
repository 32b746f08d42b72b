use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub position: Position,
    pub symbol: Symbol,
}

/// Ordered card sequence for one session, holding exactly two cards per symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    symbols: Vec<Symbol>,
}

impl Deck {
    pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self> {
        if symbols.is_empty() || symbols.len() > usize::from(Position::MAX) + 1 {
            return Err(GameError::InvalidDeck);
        }

        let mut counts: BTreeMap<Symbol, usize> = BTreeMap::new();
        for &symbol in &symbols {
            let count = counts.entry(symbol).or_default();
            *count += 1;
            if *count > 2 {
                return Err(GameError::InvalidDeck);
            }
        }
        if counts.values().any(|&count| count != 2) {
            return Err(GameError::InvalidDeck);
        }

        Ok(Self { symbols })
    }

    /// Deals the difficulty's symbols twice in set order, unshuffled.
    pub fn ordered(difficulty: Difficulty) -> Self {
        let set = difficulty.symbols();
        let symbols = set.iter().chain(set).copied().collect();
        Self { symbols }
    }

    pub(crate) fn from_shuffled(symbols: Vec<Symbol>) -> Self {
        debug_assert!(Self::from_symbols(symbols.clone()).is_ok());
        Self { symbols }
    }

    pub fn validate_position(&self, position: Position) -> Result<Position> {
        if usize::from(position) < self.symbols.len() {
            Ok(position)
        } else {
            Err(GameError::InvalidPosition)
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn pair_count(&self) -> PairCount {
        (self.symbols.len() / 2) as PairCount
    }

    pub fn symbol_at(&self, position: Position) -> Option<Symbol> {
        self.symbols.get(usize::from(position)).copied()
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.symbols.iter().enumerate().map(|(index, &symbol)| Card {
            position: index as Position,
            symbol,
        })
    }

    /// Whether every card in the deck carries one of `symbols`.
    pub fn uses_only(&self, symbols: &[Symbol]) -> bool {
        self.symbols.iter().all(|symbol| symbols.contains(symbol))
    }

    /// Positions holding `symbol`, in deck order.
    pub fn positions_of(&self, symbol: Symbol) -> impl Iterator<Item = Position> + '_ {
        self.cards()
            .filter(move |card| card.symbol == symbol)
            .map(|card| card.position)
    }
}

impl Index<Position> for Deck {
    type Output = Symbol;

    fn index(&self, position: Position) -> &Self::Output {
        &self.symbols[usize::from(position)]
    }
}
