/// Zero-based slot index of a card within a deck.
pub type Position = u8;

/// Count type used for pair counts and move counts on a single deck.
pub type PairCount = u8;

/// Identifies one started session, delayed callbacks carry it so they can be discarded once the session they were
/// scheduled for has been replaced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(u64);

impl SessionId {
    pub const fn get(self) -> u64 {
        self.0
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Delay before a resolved pair of flipped cards is turned face-down again.
pub const RESOLVE_DELAY_MS: u32 = 700;

/// Period of the elapsed-time clock.
pub const TICK_INTERVAL_MS: u32 = 1_000;
