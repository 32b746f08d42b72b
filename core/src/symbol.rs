use serde::{Deserialize, Serialize};

use crate::PairCount;

/// Face of a card, two cards in every deck share each symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Apple,
    Banana,
    Grapes,
    Strawberry,
    Watermelon,
    Mango,
    Avocado,
    Cherries,
}

impl Symbol {
    pub const fn emoji(self) -> &'static str {
        use Symbol::*;
        match self {
            Apple => "🍎",
            Banana => "🍌",
            Grapes => "🍇",
            Strawberry => "🍓",
            Watermelon => "🍉",
            Mango => "🥭",
            Avocado => "🥑",
            Cherries => "🍒",
        }
    }
}

static SYMBOLS: [Symbol; 8] = [
    Symbol::Apple,
    Symbol::Banana,
    Symbol::Grapes,
    Symbol::Strawberry,
    Symbol::Watermelon,
    Symbol::Mango,
    Symbol::Avocado,
    Symbol::Cherries,
];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Symbols dealt at this difficulty, each one ends up on exactly two cards.
    pub fn symbols(self) -> &'static [Symbol] {
        use Difficulty::*;
        match self {
            Easy => &SYMBOLS[..4],
            Medium => &SYMBOLS[..6],
            Hard => &SYMBOLS[..],
        }
    }

    pub fn pair_count(self) -> PairCount {
        self.symbols().len() as PairCount
    }

    pub fn card_count(self) -> PairCount {
        self.pair_count() * 2
    }

    /// Stable lowercase identifier, used for form values and storage.
    pub const fn key(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "easy",
            Medium => "medium",
            Hard => "hard",
        }
    }

    pub const fn label(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "Easy",
            Medium => "Medium",
            Hard => "Hard",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|difficulty| difficulty.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_sets_grow_with_difficulty() {
        assert_eq!(Difficulty::Easy.pair_count(), 4);
        assert_eq!(Difficulty::Medium.pair_count(), 6);
        assert_eq!(Difficulty::Hard.pair_count(), 8);
        assert_eq!(Difficulty::Hard.card_count(), 16);
        assert!(Difficulty::Medium.symbols().starts_with(Difficulty::Easy.symbols()));
    }

    #[test]
    fn difficulty_keys_parse_back() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_key(difficulty.key()), Some(difficulty));
        }
        assert_eq!(Difficulty::from_key("impossible"), None);
    }

    #[test]
    fn difficulty_serializes_as_key() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
