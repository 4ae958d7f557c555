use crate::config::{RoundConfig, ONE_SECOND_MS};
use crate::logic::buzz::BuzzSignal;
use crate::logic::time_format::format_elapsed;
use crate::logic::vocabulary::WordDeck;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Active,
    Finished,
}

/// Everything a presentation layer needs to draw the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSnapshot {
    pub current_word: &'static str,
    pub score: i32,
    pub remaining_time_seconds: u64,
    pub remaining_time: String,
    pub round_finished: bool,
    pub buzz_signal: BuzzSignal,
    pub phase: RoundPhase,
}

/// State of one timed round.
///
/// `round_finished` and `buzz_signal` double as one-shot events: they stay
/// raised until the consumer calls the matching `acknowledge_*` method, so
/// reading them never clears them.
#[derive(Debug, Clone)]
pub struct RoundState<R = StdRng> {
    deck: WordDeck,
    current_word: &'static str,
    score: i32,
    remaining_time_seconds: u64,
    round_finished: bool,
    buzz_signal: BuzzSignal,
    phase: RoundPhase,
    config: RoundConfig,
    rng: R,
}

impl RoundState<StdRng> {
    #[must_use]
    pub fn new(config: RoundConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> RoundState<R> {
    pub fn with_rng(config: RoundConfig, mut rng: R) -> Self {
        let mut deck = WordDeck::shuffled(&mut rng);
        let current_word = deck.draw(&mut rng);
        info!(
            "Round created: {} s, first word drawn",
            config.round_duration_secs()
        );

        Self {
            deck,
            current_word,
            score: 0,
            remaining_time_seconds: config.round_duration_secs(),
            round_finished: false,
            buzz_signal: BuzzSignal::None,
            phase: RoundPhase::Active,
            config,
            rng,
        }
    }

    fn next_word(&mut self) {
        self.current_word = self.deck.draw(&mut self.rng);
        debug!("Next word drawn, {} left in deck", self.deck.remaining());
    }

    fn buzz(&mut self, signal: BuzzSignal) {
        if self.config.buzz_enabled {
            self.buzz_signal = signal;
        }
    }

    // Not blocked once the round is over; the presentation layer disables input.
    pub fn on_skip(&mut self) {
        self.score = self.score.saturating_sub(1);
        self.next_word();
    }

    pub fn on_correct(&mut self) {
        self.score = self.score.saturating_add(1);
        self.buzz(BuzzSignal::Correct);
        self.next_word();
    }

    /// Clock tick with the time left until the round ends.
    pub fn on_tick(&mut self, remaining_millis: u64) {
        self.remaining_time_seconds = remaining_millis / ONE_SECOND_MS;
        if self.remaining_time_seconds <= self.config.warning_window_secs {
            self.buzz(BuzzSignal::CountdownWarning);
        }
    }

    /// Called by the clock once, when the countdown runs out. Later calls are ignored.
    pub fn on_finish(&mut self) {
        if self.phase == RoundPhase::Finished {
            debug!("Round already finished, ignoring repeated finish");
            return;
        }
        info!("Round finished with score {}", self.score);
        self.round_finished = true;
        self.remaining_time_seconds = 0;
        self.phase = RoundPhase::Finished;
        self.buzz(BuzzSignal::RoundOver);
    }

    pub fn acknowledge_round_finished(&mut self) {
        self.round_finished = false;
    }

    pub fn acknowledge_buzz(&mut self) {
        self.buzz_signal = BuzzSignal::None;
    }

    #[must_use]
    pub const fn current_word(&self) -> &'static str {
        self.current_word
    }

    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub const fn remaining_time_seconds(&self) -> u64 {
        self.remaining_time_seconds
    }

    #[must_use]
    pub fn remaining_time_string(&self) -> String {
        format_elapsed(self.remaining_time_seconds)
    }

    #[must_use]
    pub const fn round_finished(&self) -> bool {
        self.round_finished
    }

    #[must_use]
    pub const fn buzz_signal(&self) -> BuzzSignal {
        self.buzz_signal
    }

    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub const fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub const fn deck(&self) -> &WordDeck {
        &self.deck
    }

    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            current_word: self.current_word,
            score: self.score,
            remaining_time_seconds: self.remaining_time_seconds,
            remaining_time: self.remaining_time_string(),
            round_finished: self.round_finished,
            buzz_signal: self.buzz_signal,
            phase: self.phase,
        }
    }
}
