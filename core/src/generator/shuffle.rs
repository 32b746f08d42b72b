use alloc::vec::Vec;

use super::*;

/// Deals every symbol of the difficulty twice and shuffles them uniformly with a seeded small RNG.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffledDeckGenerator {
    seed: u64,
}

impl ShuffledDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for ShuffledDeckGenerator {
    fn generate(self, difficulty: Difficulty) -> Deck {
        use rand::prelude::*;

        let set = difficulty.symbols();
        let mut symbols: Vec<Symbol> = set.iter().chain(set).copied().collect();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        symbols.shuffle(&mut rng);

        log::trace!("dealt {} cards for {:?}", symbols.len(), difficulty);
        Deck::from_shuffled(symbols)
    }
}
