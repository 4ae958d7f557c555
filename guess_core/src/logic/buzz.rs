use serde::{Deserialize, Serialize};

// Vibration patterns, alternating off/on durations in milliseconds.
const CORRECT_BUZZ_PATTERN: &[u64] = &[100, 100, 100, 100, 100, 100];
const PANIC_BUZZ_PATTERN: &[u64] = &[0, 200];
const GAME_OVER_BUZZ_PATTERN: &[u64] = &[0, 2000];
const NO_BUZZ_PATTERN: &[u64] = &[0];

/// Haptic feedback requested by the round. Stays set until the consumer
/// acknowledges it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BuzzSignal {
    #[default]
    None,
    Correct,
    CountdownWarning,
    RoundOver,
}

impl BuzzSignal {
    #[must_use]
    pub const fn pattern(self) -> &'static [u64] {
        match self {
            Self::None => NO_BUZZ_PATTERN,
            Self::Correct => CORRECT_BUZZ_PATTERN,
            Self::CountdownWarning => PANIC_BUZZ_PATTERN,
            Self::RoundOver => GAME_OVER_BUZZ_PATTERN,
        }
    }

    /// Total time the pattern keeps the device busy.
    #[must_use]
    pub fn duration_ms(self) -> u64 {
        self.pattern().iter().sum()
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}
