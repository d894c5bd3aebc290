//! Flashcard deck for the Learn screen.

use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;
use shared::MenuItem;

/// Minimum horizontal drag that counts as a swipe
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Exit animation length; the deck advances when it ends
pub const SWIPE_ANIMATION: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Swipe right: the card is known
    Know,
    /// Swipe left: the card should be repeated.
    /// Advances exactly like `Know`; the card is not requeued.
    Repeat,
}

/// Exit animation in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSwipe {
    pub direction: SwipeDirection,
    pub started: Instant,
    pub due: Instant,
}

impl PendingSwipe {
    /// Animation progress in `0.0..=1.0`
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        (elapsed / SWIPE_ANIMATION.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FlashcardDeck {
    cards: Vec<MenuItem>,
    index: usize,
    flipped: bool,
    exit: Option<PendingSwipe>,
    touch_origin: Option<f32>,
}

impl FlashcardDeck {
    /// Shuffled copy of `items`
    pub fn new(items: Vec<MenuItem>, rng: &mut impl Rng) -> Self {
        let mut cards = items;
        cards.shuffle(rng);
        Self {
            cards,
            ..Default::default()
        }
    }

    pub fn cards(&self) -> &[MenuItem] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&MenuItem> {
        self.cards.get(self.index)
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn pending_swipe(&self) -> Option<PendingSwipe> {
        self.exit
    }

    /// Every card has been swiped away
    pub fn is_complete(&self) -> bool {
        self.index >= self.cards.len()
    }

    pub fn flip(&mut self) {
        if self.current().is_some() {
            self.flipped = !self.flipped;
        }
    }

    /// Start the exit animation for the current card.
    ///
    /// Ignored with no current card or while another exit is animating.
    pub fn swipe(&mut self, direction: SwipeDirection, now: Instant) -> bool {
        if self.current().is_none() || self.exit.is_some() {
            return false;
        }
        self.flipped = false;
        self.exit = Some(PendingSwipe {
            direction,
            started: now,
            due: now + SWIPE_ANIMATION,
        });
        true
    }

    pub fn touch_start(&mut self, x: f32) {
        self.touch_origin = Some(x);
    }

    /// Finish a drag; a delta beyond the threshold becomes a swipe
    pub fn touch_end(&mut self, x: f32, now: Instant) -> Option<SwipeDirection> {
        let origin = self.touch_origin.take()?;
        let delta = x - origin;
        if delta.abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }
        let direction = if delta > 0.0 {
            SwipeDirection::Know
        } else {
            SwipeDirection::Repeat
        };
        self.swipe(direction, now).then_some(direction)
    }

    /// Apply a finished exit animation. Returns true when the deck advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.exit {
            Some(pending) if now >= pending.due => {
                self.exit = None;
                self.index += 1;
                true
            }
            _ => false,
        }
    }

    /// Reshuffle the same cards and start over
    pub fn restart(&mut self, rng: &mut impl Rng) {
        self.cards.shuffle(rng);
        self.index = 0;
        self.flipped = false;
        self.exit = None;
        self.touch_origin = None;
    }

    /// "Card i of n"
    pub fn progress_label(&self) -> String {
        format!("Card {} of {}", (self.index + 1).min(self.cards.len()), self.cards.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock::menu_items;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted_ids(cards: &[MenuItem]) -> Vec<i64> {
        let mut ids: Vec<i64> = cards.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_restart_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = FlashcardDeck::new(menu_items(12), &mut rng);
        assert_eq!(sorted_ids(deck.cards()), (1..=12).collect::<Vec<_>>());

        for _ in 0..5 {
            deck.restart(&mut rng);
            assert_eq!(sorted_ids(deck.cards()), (1..=12).collect::<Vec<_>>());
            assert_eq!(deck.index(), 0);
        }
    }

    #[test]
    fn test_completion_after_n_swipes() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut deck = FlashcardDeck::new(menu_items(5), &mut rng);
        let mut now = Instant::now();
        let mut completions = 0;

        for i in 0..deck.len() {
            let direction = if i % 2 == 0 { SwipeDirection::Know } else { SwipeDirection::Repeat };
            assert!(deck.swipe(direction, now));
            now += SWIPE_ANIMATION;
            let was_complete = deck.is_complete();
            assert!(deck.tick(now));
            if !was_complete && deck.is_complete() {
                completions += 1;
            }
        }

        assert_eq!(completions, 1);
        assert!(deck.current().is_none());
        assert!(!deck.swipe(SwipeDirection::Know, now));
    }

    #[test]
    fn test_swipe_ignored_while_animating() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut deck = FlashcardDeck::new(menu_items(3), &mut rng);
        let start = Instant::now();

        deck.flip();
        assert!(deck.is_flipped());
        assert!(deck.swipe(SwipeDirection::Know, start));
        assert!(!deck.is_flipped());
        assert!(!deck.swipe(SwipeDirection::Repeat, start + Duration::from_millis(100)));

        assert!(!deck.tick(start + Duration::from_millis(399)));
        assert_eq!(deck.index(), 0);
        assert!(deck.tick(start + SWIPE_ANIMATION));
        assert_eq!(deck.index(), 1);
        assert_eq!(deck.progress_label(), "Card 2 of 3");
    }

    #[test]
    fn test_touch_threshold() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut deck = FlashcardDeck::new(menu_items(3), &mut rng);
        let now = Instant::now();

        deck.touch_start(100.0);
        assert_eq!(deck.touch_end(150.0, now), None);

        deck.touch_start(100.0);
        assert_eq!(deck.touch_end(40.0, now), Some(SwipeDirection::Repeat));

        // No origin recorded
        assert_eq!(deck.touch_end(400.0, now), None);
    }

    #[test]
    fn test_empty_deck_is_complete() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut deck = FlashcardDeck::new(Vec::new(), &mut rng);
        assert!(deck.is_complete());
        deck.flip();
        assert!(!deck.is_flipped());
    }
}
