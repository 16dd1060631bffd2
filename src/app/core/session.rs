// SPDX-License-Identifier: GPL-3.0-only

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::app::core::Catalog;
use crate::app::core::models::{WordEntry, WordRange};
use crate::app::core::utils::{StudyInput, shuffled};

/// How many cards a study session holds at most
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetSize {
    #[default]
    Fifty,
    Hundred,
}

impl SetSize {
    pub const ALL: [SetSize; 2] = [SetSize::Fifty, SetSize::Hundred];

    pub fn count(self) -> usize {
        match self {
            SetSize::Fifty => 50,
            SetSize::Hundred => 100,
        }
    }
}

/// Where the [`Session`] currently is
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Setup,
    Playing,
    Finished,
}

/// State of one study attempt, every action method performs a single transition.
///
/// Actions sent in a [`Phase`] that does not accept them are ignored.
#[derive(Debug, Default, Clone)]
pub struct Session {
    phase: Phase,
    set_size: SetSize,
    range: Option<WordRange>,
    deck: Vec<WordEntry>,
    cursor: usize,
    flipped: bool,
    elapsed_seconds: u64,
}

impl Session {
    pub fn new(set_size: SetSize) -> Self {
        Self {
            set_size,
            ..Default::default()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn set_size(&self) -> SetSize {
        self.set_size
    }

    pub fn range(&self) -> Option<&WordRange> {
        self.range.as_ref()
    }

    pub fn deck(&self) -> &[WordEntry] {
        &self.deck
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// The stopwatch only runs while playing
    pub fn timer_active(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Card under the cursor while playing
    pub fn current_card(&self) -> Option<&WordEntry> {
        match self.phase {
            Phase::Playing => self.deck.get(self.cursor),
            _ => None,
        }
    }

    pub fn is_first_card(&self) -> bool {
        self.cursor == 0
    }

    //
    // SETUP
    //

    pub fn select_set_size(&mut self, set_size: SetSize) {
        if self.phase == Phase::Setup {
            self.set_size = set_size;
        }
    }

    pub fn select_range(&mut self, range: WordRange) {
        if self.phase == Phase::Setup {
            self.range = Some(range);
        }
    }

    pub fn clear_range(&mut self) {
        if self.phase == Phase::Setup {
            self.range = None;
        }
    }

    pub fn can_start(&self) -> bool {
        self.phase == Phase::Setup && self.range.is_some()
    }

    /// Deals a shuffled deck of at most `set_size` cards from the chosen range and starts playing.
    /// Returns `false` (and stays in setup) when no range is chosen or the range holds no words.
    pub fn start<R: Rng + ?Sized>(&mut self, catalog: &Catalog, rng: &mut R) -> bool {
        if !self.can_start() {
            return false;
        }
        let Some(range) = self.range else {
            return false;
        };

        let slice = catalog.slice(&range);
        if slice.is_empty() {
            tracing::warn!(%range, "selected range holds no words");
            return false;
        }

        let mut deck = shuffled(slice, rng);
        deck.truncate(self.set_size.count());

        tracing::info!(%range, cards = deck.len(), "study session started");
        self.enter_playing(deck);
        true
    }

    //
    // PLAYING
    //

    pub fn flip(&mut self) {
        if self.phase == Phase::Playing {
            self.flipped = !self.flipped;
        }
    }

    /// Moves to the next card, issued on the last card it finishes the session
    pub fn next(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }

        if self.cursor + 1 < self.deck.len() {
            self.cursor += 1;
            self.flipped = false;
        } else {
            self.phase = Phase::Finished;
            tracing::info!(
                cards = self.deck.len(),
                seconds = self.elapsed_seconds,
                "study session finished"
            );
        }
    }

    pub fn previous(&mut self) {
        if self.phase == Phase::Playing && self.cursor > 0 {
            self.cursor -= 1;
            self.flipped = false;
        }
    }

    pub fn apply(&mut self, input: StudyInput) {
        match input {
            StudyInput::Flip => self.flip(),
            StudyInput::Next => self.next(),
            StudyInput::Previous => self.previous(),
        }
    }

    /// One stopwatch second
    pub fn tick(&mut self) {
        if self.timer_active() {
            self.elapsed_seconds += 1;
        }
    }

    //
    // FINISHED
    //

    /// Replays the same cards in a fresh order, the range is not sampled again
    pub fn study_again<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.phase != Phase::Finished {
            return;
        }

        let deck = shuffled(&self.deck, rng);
        self.enter_playing(deck);
    }

    /// Drops the current deck and goes back to choosing a range, the set size is kept
    pub fn back_to_setup(&mut self) {
        if self.phase == Phase::Setup {
            return;
        }

        self.phase = Phase::Setup;
        self.range = None;
        self.deck.clear();
        self.cursor = 0;
        self.flipped = false;
        self.elapsed_seconds = 0;
    }

    fn enter_playing(&mut self, deck: Vec<WordEntry>) {
        self.deck = deck;
        self.cursor = 0;
        self.flipped = false;
        self.elapsed_seconds = 0;
        self.phase = Phase::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::core::catalog::numbered_catalog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    /// A session already playing a deck of `deck_len` cards
    fn playing_session(deck_len: usize) -> Session {
        let catalog = numbered_catalog(deck_len);
        let mut session = Session::new(SetSize::Hundred);
        session.select_range(catalog.range_choices(300)[0]);
        assert!(session.start(&catalog, &mut rng()));
        session
    }

    #[test]
    fn test_new_session_is_in_setup() {
        let session = Session::new(SetSize::Hundred);
        assert_eq!(session.phase(), Phase::Setup);
        assert_eq!(session.set_size(), SetSize::Hundred);
        assert!(session.range().is_none());
        assert!(!session.timer_active());
        assert!(!session.can_start());
    }

    #[test]
    fn test_start_requires_range() {
        let catalog = numbered_catalog(1000);
        let mut session = Session::default();

        assert!(!session.start(&catalog, &mut rng()));
        assert_eq!(session.phase(), Phase::Setup);
        assert!(session.deck().is_empty());
    }

    #[test]
    fn test_fifty_cards_from_first_chunk() {
        let catalog = numbered_catalog(1000);
        let range = catalog.range_choices(300)[1];
        let mut session = Session::new(SetSize::Fifty);
        session.select_range(range);

        assert!(session.can_start());
        assert!(session.start(&catalog, &mut rng()));

        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.deck().len(), 50);
        assert!(session.deck().iter().all(|w| (1..=300).contains(&w.number)));
        assert_eq!(session.cursor(), 0);
        assert!(!session.is_flipped());
        assert_eq!(session.elapsed_seconds(), 0);
        assert!(session.timer_active());
    }

    #[test]
    fn test_hundred_cards_from_last_chunk() {
        let catalog = numbered_catalog(1000);
        let range = *catalog.range_choices(300).last().unwrap();
        let mut session = Session::new(SetSize::Hundred);
        session.select_range(range);
        assert!(session.start(&catalog, &mut rng()));

        assert_eq!(session.deck().len(), 100);
        let mut numbers: Vec<usize> = session.deck().iter().map(|w| w.number).collect();
        numbers.sort_unstable();
        assert_eq!(numbers, (901..=1000).collect::<Vec<_>>());
    }

    #[test]
    fn test_small_range_limits_deck() {
        let catalog = numbered_catalog(30);
        let mut session = Session::new(SetSize::Fifty);
        session.select_range(catalog.range_choices(300)[0]);
        assert!(session.start(&catalog, &mut rng()));
        assert_eq!(session.deck().len(), 30);
    }

    #[test]
    fn test_three_cards_then_finish() {
        let mut session = playing_session(3);

        session.next();
        session.next();
        assert_eq!(session.cursor(), 2);
        assert_eq!(session.phase(), Phase::Playing);
        assert!(session.timer_active());

        session.next();
        assert_eq!(session.phase(), Phase::Finished);
        assert!(!session.timer_active());
    }

    #[test]
    fn test_next_on_last_card_finishes_even_when_flipped() {
        let mut session = playing_session(1);
        session.flip();
        assert!(session.is_flipped());

        session.next();
        assert_eq!(session.phase(), Phase::Finished);
        assert!(!session.timer_active());
    }

    #[test]
    fn test_previous_on_first_card_is_noop() {
        let mut session = playing_session(5);
        session.flip();
        session.tick();
        let before = (session.cursor(), session.is_flipped(), session.elapsed_seconds());

        session.previous();

        assert_eq!(
            (session.cursor(), session.is_flipped(), session.elapsed_seconds()),
            before
        );
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn test_cursor_changes_unflip() {
        let mut session = playing_session(5);

        session.flip();
        session.next();
        assert_eq!(session.cursor(), 1);
        assert!(!session.is_flipped());

        session.flip();
        session.previous();
        assert_eq!(session.cursor(), 0);
        assert!(!session.is_flipped());

        while session.phase() == Phase::Playing {
            session.next();
        }
        session.study_again(&mut rng());
        assert!(!session.is_flipped());
    }

    #[test]
    fn test_flip_changes_nothing_else() {
        let mut session = playing_session(5);
        session.next();
        session.tick();
        let deck = session.deck().to_vec();

        session.flip();
        assert!(session.is_flipped());
        session.flip();
        assert!(!session.is_flipped());

        assert_eq!(session.cursor(), 1);
        assert_eq!(session.elapsed_seconds(), 1);
        assert_eq!(session.deck(), deck.as_slice());
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn test_ticks_only_count_while_playing() {
        let mut session = Session::new(SetSize::Fifty);
        session.tick();
        assert_eq!(session.elapsed_seconds(), 0);

        let mut session = playing_session(2);
        session.tick();
        session.tick();
        assert_eq!(session.elapsed_seconds(), 2);

        session.next();
        session.next();
        assert_eq!(session.phase(), Phase::Finished);
        session.tick();
        assert_eq!(session.elapsed_seconds(), 2);
    }

    #[test]
    fn test_study_again_reshuffles_same_cards() {
        let mut session = playing_session(100);
        for _ in 0..10 {
            session.tick();
        }
        let mut first: Vec<usize> = session.deck().iter().map(|w| w.number).collect();
        while session.phase() == Phase::Playing {
            session.next();
        }

        session.study_again(&mut rng());

        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.elapsed_seconds(), 0);
        assert!(session.timer_active());

        let mut second: Vec<usize> = session.deck().iter().map(|w| w.number).collect();
        assert_ne!(first, second);
        first.sort_unstable();
        second.sort_unstable();
        assert_eq!(first, second);
    }

    #[test]
    fn test_study_again_only_from_finished() {
        let mut session = playing_session(4);
        session.next();
        session.study_again(&mut rng());
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn test_back_to_setup_clears_progress() {
        let mut session = playing_session(10);
        session.next();
        session.flip();
        session.tick();

        session.back_to_setup();

        assert_eq!(session.phase(), Phase::Setup);
        assert!(session.range().is_none());
        assert!(session.deck().is_empty());
        assert_eq!(session.cursor(), 0);
        assert!(!session.is_flipped());
        assert_eq!(session.elapsed_seconds(), 0);
        assert!(!session.timer_active());
        assert!(!session.can_start());
        assert_eq!(session.set_size(), SetSize::Hundred);
    }

    #[test]
    fn test_back_to_setup_from_finished() {
        let mut session = playing_session(1);
        session.next();
        assert_eq!(session.phase(), Phase::Finished);

        session.back_to_setup();
        assert_eq!(session.phase(), Phase::Setup);
        assert!(session.range().is_none());
    }

    #[test]
    fn test_setup_choices_are_locked_while_playing() {
        let mut session = playing_session(10);
        let range = *session.range().unwrap();

        session.select_set_size(SetSize::Fifty);
        session.clear_range();

        assert_eq!(session.set_size(), SetSize::Hundred);
        assert_eq!(session.range(), Some(&range));
    }

    #[test]
    fn test_apply_maps_inputs() {
        let mut session = playing_session(3);
        session.apply(StudyInput::Flip);
        assert!(session.is_flipped());
        session.apply(StudyInput::Next);
        assert_eq!(session.cursor(), 1);
        session.apply(StudyInput::Previous);
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_current_card_only_while_playing() {
        let mut session = playing_session(1);
        assert_eq!(session.current_card(), session.deck().first());
        session.next();
        assert!(session.current_card().is_none());
    }
}
