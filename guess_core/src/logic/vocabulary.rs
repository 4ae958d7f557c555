use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

/// Every word that can come up during a round.
pub const VOCABULARY: [&str; 21] = [
    "queen",
    "hospital",
    "basketball",
    "cat",
    "change",
    "snail",
    "soup",
    "calendar",
    "sad",
    "desk",
    "guitar",
    "home",
    "railway",
    "zebra",
    "jelly",
    "car",
    "crow",
    "trade",
    "bag",
    "roll",
    "bubble",
];

#[must_use]
pub fn is_known_word(word: &str) -> bool {
    VOCABULARY.contains(&word)
}

/// Words still to be played. The front of the queue is the next word to guess.
#[derive(Debug, Clone, Default)]
pub struct WordDeck {
    words: VecDeque<&'static str>,
    refills: u32,
}

impl WordDeck {
    /// A full vocabulary in random order.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.reset(rng);
        deck
    }

    /// Replaces the whole queue with a freshly shuffled vocabulary.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut words = VOCABULARY.to_vec();
        words.shuffle(rng);
        self.words = words.into();
    }

    /// Removes and returns the head of the queue, refilling it first when empty.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'static str {
        loop {
            if let Some(word) = self.words.pop_front() {
                return word;
            }
            self.refills += 1;
            debug!("Word deck exhausted, reshuffling (refill #{})", self.refills);
            self.reset(rng);
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word)
    }

    /// How many times the deck ran dry and was reshuffled.
    #[must_use]
    pub const fn refills(&self) -> u32 {
        self.refills
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.iter().copied()
    }
}
