//! Photo matching game: find the photo of the named dish among four.

use std::time::{Duration, Instant};

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use shared::MenuItem;

pub const OPTIONS_PER_ROUND: usize = 4;
pub const POINTS_PER_MATCH: u32 = 10;
/// How long feedback is shown before the next round
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub target: MenuItem,
    /// Target plus three decoys, shuffled
    pub options: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default)]
pub struct MatchGame {
    pool: Vec<MenuItem>,
    score: u32,
    round: Option<Round>,
    feedback: Option<(Feedback, Instant)>,
    over: bool,
}

impl MatchGame {
    /// Start a game over `pool`, drawing the first round
    pub fn new(pool: Vec<MenuItem>, rng: &mut impl Rng) -> Self {
        let mut game = Self {
            pool,
            ..Default::default()
        };
        game.next_round(rng);
        game
    }

    pub fn pool(&self) -> &[MenuItem] {
        &self.pool
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback.map(|(feedback, _)| feedback)
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The menu has fewer dishes than one round needs
    pub fn not_enough_items(&self) -> bool {
        self.pool.len() < OPTIONS_PER_ROUND
    }

    /// Draw a new target and decoys, excluding the previous target.
    ///
    /// Ends the game when fewer than four eligible items remain.
    pub fn next_round(&mut self, rng: &mut impl Rng) {
        let previous = self.round.as_ref().map(|round| round.target.id);
        let candidates: Vec<&MenuItem> = self
            .pool
            .iter()
            .filter(|item| Some(item.id) != previous)
            .collect();

        if candidates.len() < OPTIONS_PER_ROUND {
            tracing::info!(
                eligible = candidates.len(),
                score = self.score,
                "Game over: not enough dishes for a round"
            );
            self.round = None;
            self.over = true;
            return;
        }

        let Some(target) = candidates.choose(rng).map(|item| (*item).clone()) else {
            self.over = true;
            return;
        };

        let mut options: Vec<MenuItem> = candidates
            .iter()
            .filter(|item| item.id != target.id)
            .copied()
            .collect::<Vec<_>>()
            .choose_multiple(rng, OPTIONS_PER_ROUND - 1)
            .map(|item| (*item).clone())
            .collect();
        options.push(target.clone());
        options.shuffle(rng);

        self.round = Some(Round { target, options });
    }

    /// Pick an option. Ignored while feedback is showing.
    pub fn choose(&mut self, item_id: i64, now: Instant) -> Option<Feedback> {
        if self.feedback.is_some() || self.over {
            return None;
        }
        let round = self.round.as_ref()?;
        let feedback = if round.target.id == item_id {
            self.score += POINTS_PER_MATCH;
            Feedback::Correct
        } else {
            Feedback::Incorrect
        };
        self.feedback = Some((feedback, now + FEEDBACK_DELAY));
        Some(feedback)
    }

    /// Clear expired feedback and draw the next round
    pub fn tick(&mut self, now: Instant, rng: &mut impl Rng) {
        if let Some((_, due)) = self.feedback {
            if now >= due {
                self.feedback = None;
                self.next_round(rng);
            }
        }
    }
}
