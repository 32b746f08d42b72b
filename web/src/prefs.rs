use memoji_core::Difficulty;
use serde::{Deserialize, Serialize};

use crate::utils::StorageKey;

/// What the setup form remembers between visits. Scores and sessions are never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Preferences {
    pub player_name: String,
    pub difficulty: Difficulty,
    pub music_enabled: bool,
}

impl Preferences {
    /// Name shown in the game, the start button stays disabled while this is empty.
    pub(crate) fn trimmed_name(&self) -> &str {
        self.player_name.trim()
    }

    pub(crate) fn can_start(&self) -> bool {
        !self.trimmed_name().is_empty()
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            player_name: String::new(),
            difficulty: Difficulty::default(),
            music_enabled: true,
        }
    }
}

impl StorageKey for Preferences {
    const KEY: &'static str = "memoji:prefs";
}
