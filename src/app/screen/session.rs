// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use cosmic::Element;
use cosmic::iced::keyboard::{Key, key::Named};
use cosmic::iced::{Subscription, time};

use crate::app::core::Catalog;
use crate::app::core::models::WordRange;
use crate::app::core::session::{Phase, Session, SetSize};
use crate::app::core::utils::{GestureTracker, StudyInput, TICK_INTERVAL};

use super::{finished, playing, setup};

/// Screen holding the study [`Session`] and everything needed to drive it
pub struct SessionScreen {
    catalog: Arc<Catalog>,
    session: Session,
    range_choices: Vec<WordRange>,
    gesture: GestureTracker,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// User picked how many cards to study
    SelectSetSize(SetSize),
    /// User picked the range the cards are drawn from
    SelectRange(WordRange),
    /// Deal the deck and start the stopwatch
    Start,

    /// Flip, next or previous, from buttons, keys or gestures
    Input(StudyInput),
    /// Pointer or finger moved over the card, horizontal position
    PointerMoved(f32),
    /// Pressed on the card
    PointerPressed,
    PointerReleased,
    /// Pointer left the card, a press in progress is dropped
    PointerLeft,
    /// One stopwatch second went by
    Tick,

    StudyAgain,
    BackToSetup,
}

/// Allows us to talk with the parent
pub enum Action {
    None,
    /// The session moved to another [`Phase`]
    PhaseChanged(Phase),
    /// The chosen set size should become the default for the next launch
    RememberSetSize(SetSize),
}

impl SessionScreen {
    pub fn new(catalog: Arc<Catalog>, set_size: SetSize, chunk_size: usize) -> Self {
        let range_choices = catalog.range_choices(chunk_size);

        Self {
            catalog,
            session: Session::new(set_size),
            range_choices,
            gesture: GestureTracker::default(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match self.session.phase() {
            Phase::Setup => setup::view(&self.session, &self.range_choices, &self.catalog),
            Phase::Playing => playing::view(&self.session, &self.catalog),
            Phase::Finished => finished::view(&self.session),
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        let phase = self.session.phase();

        match message {
            Message::SelectSetSize(set_size) => {
                self.session.select_set_size(set_size);
                return Action::RememberSetSize(set_size);
            }
            Message::SelectRange(range) => self.session.select_range(range),
            Message::Start => {
                self.gesture.reset();
                self.session.start(&self.catalog, &mut rand::rng());
            }
            Message::Input(input) => self.session.apply(input),
            Message::PointerMoved(x) => self.gesture.moved(x),
            Message::PointerPressed => {
                if phase == Phase::Playing {
                    self.gesture.pressed();
                }
            }
            Message::PointerReleased => {
                if let Some(input) = self.gesture.released() {
                    self.session.apply(input);
                }
            }
            Message::PointerLeft => self.gesture.reset(),
            Message::Tick => self.session.tick(),
            Message::StudyAgain => {
                self.gesture.reset();
                self.session.study_again(&mut rand::rng());
            }
            Message::BackToSetup => {
                self.gesture.reset();
                self.session.back_to_setup();
            }
        }

        if self.session.phase() != phase {
            if self.session.phase() != Phase::Playing {
                self.gesture.reset();
            }
            return Action::PhaseChanged(self.session.phase());
        }
        Action::None
    }

    /// The stopwatch only exists while playing, leaving [`Phase::Playing`]
    /// drops it so no stray tick is delivered
    pub fn subscription(&self) -> Subscription<Message> {
        if !self.session.timer_active() {
            return Subscription::none();
        }

        time::every(TICK_INTERVAL).map(|_| Message::Tick)
    }

    /// Maps an unbound key press to a study action, only meaningful while playing
    pub fn key_input(&self, key: &Key) -> Option<Message> {
        if self.session.phase() != Phase::Playing {
            return None;
        }
        study_input(key).map(Message::Input)
    }

    /// Current phase, used for the window title
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn selected_range(&self) -> Option<&WordRange> {
        self.session.range()
    }

    /// Rebuilds the offered ranges, a selection that no longer exists is dropped
    pub fn set_chunk_size(&mut self, chunk_size: usize) {
        self.range_choices = self.catalog.range_choices(chunk_size);

        let stale = self
            .session
            .range()
            .is_some_and(|range| !self.range_choices.contains(range));
        if stale {
            self.session.clear_range();
        }
    }

    /// Applies the configured set size while the user is still choosing
    pub fn set_default_set_size(&mut self, set_size: SetSize) {
        self.session.select_set_size(set_size);
    }
}

/// Space flips, the arrow keys move between cards
fn study_input(key: &Key) -> Option<StudyInput> {
    match key {
        Key::Named(Named::Space) => Some(StudyInput::Flip),
        Key::Named(Named::ArrowRight) => Some(StudyInput::Next),
        Key::Named(Named::ArrowLeft) => Some(StudyInput::Previous),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::core::catalog::numbered_catalog;

    fn screen(catalog_size: usize) -> SessionScreen {
        SessionScreen::new(Arc::new(numbered_catalog(catalog_size)), SetSize::Fifty, 300)
    }

    fn start_first_chunk(screen: &mut SessionScreen) {
        let range = screen.range_choices[1];
        screen.update(Message::SelectRange(range));
        assert!(matches!(
            screen.update(Message::Start),
            Action::PhaseChanged(Phase::Playing)
        ));
    }

    #[test]
    fn test_keys_map_to_inputs() {
        assert_eq!(study_input(&Key::Named(Named::Space)), Some(StudyInput::Flip));
        assert_eq!(
            study_input(&Key::Named(Named::ArrowRight)),
            Some(StudyInput::Next)
        );
        assert_eq!(
            study_input(&Key::Named(Named::ArrowLeft)),
            Some(StudyInput::Previous)
        );
        assert_eq!(study_input(&Key::Character("a".into())), None);
    }

    #[test]
    fn test_keys_ignored_outside_playing() {
        let screen = screen(1000);
        assert!(screen.key_input(&Key::Named(Named::Space)).is_none());
    }

    #[test]
    fn test_start_without_range_keeps_setup() {
        let mut screen = screen(1000);
        assert!(matches!(screen.update(Message::Start), Action::None));
        assert_eq!(screen.phase(), Phase::Setup);
    }

    #[test]
    fn test_swipe_moves_to_next_card() {
        let mut screen = screen(1000);
        start_first_chunk(&mut screen);

        screen.update(Message::PointerMoved(100.0));
        screen.update(Message::PointerPressed);
        screen.update(Message::PointerMoved(140.0));
        screen.update(Message::PointerMoved(170.0));
        screen.update(Message::PointerReleased);
        assert_eq!(screen.session.cursor(), 1);

        screen.update(Message::PointerMoved(10.0));
        screen.update(Message::PointerPressed);
        screen.update(Message::PointerReleased);
        assert!(screen.session.is_flipped());
    }

    #[test]
    fn test_release_not_started_on_card_is_ignored() {
        let mut screen = screen(1000);
        start_first_chunk(&mut screen);

        screen.update(Message::PointerReleased);
        assert!(!screen.session.is_flipped());
        assert_eq!(screen.session.cursor(), 0);

        screen.update(Message::PointerMoved(20.0));
        screen.update(Message::PointerPressed);
        screen.update(Message::PointerMoved(200.0));
        screen.update(Message::PointerLeft);
        screen.update(Message::PointerReleased);
        assert!(!screen.session.is_flipped());
        assert_eq!(screen.session.cursor(), 0);
    }

    #[test]
    fn test_pointer_ignored_in_setup() {
        let mut screen = screen(1000);
        screen.update(Message::PointerMoved(0.0));
        screen.update(Message::PointerPressed);
        screen.update(Message::PointerMoved(200.0));
        screen.update(Message::PointerReleased);
        assert_eq!(screen.phase(), Phase::Setup);
        assert!(!screen.session.is_flipped());
    }

    #[test]
    fn test_set_size_is_remembered() {
        let mut screen = screen(1000);
        assert!(matches!(
            screen.update(Message::SelectSetSize(SetSize::Hundred)),
            Action::RememberSetSize(SetSize::Hundred)
        ));
        assert_eq!(screen.session.set_size(), SetSize::Hundred);
    }

    #[test]
    fn test_chunk_size_change_drops_stale_selection() {
        let mut screen = screen(1000);
        let full = screen.range_choices[0];
        let chunk = screen.range_choices[1];

        screen.update(Message::SelectRange(chunk));
        screen.set_chunk_size(100);
        assert!(screen.selected_range().is_none());
        assert_eq!(screen.range_choices.len(), 11);

        screen.update(Message::SelectRange(full));
        screen.set_chunk_size(500);
        assert_eq!(screen.selected_range(), Some(&full));
    }

    #[test]
    fn test_ticks_and_finish() {
        let mut screen = screen(1000);
        start_first_chunk(&mut screen);
        screen.update(Message::Tick);
        screen.update(Message::Tick);
        assert_eq!(screen.session.elapsed_seconds(), 2);

        for _ in 0..49 {
            assert!(matches!(
                screen.update(Message::Input(StudyInput::Next)),
                Action::None
            ));
        }
        assert!(matches!(
            screen.update(Message::Input(StudyInput::Next)),
            Action::PhaseChanged(Phase::Finished)
        ));

        screen.update(Message::Tick);
        assert_eq!(screen.session.elapsed_seconds(), 2);

        assert!(matches!(
            screen.update(Message::StudyAgain),
            Action::PhaseChanged(Phase::Playing)
        ));
        assert_eq!(screen.session.elapsed_seconds(), 0);

        assert!(matches!(
            screen.update(Message::BackToSetup),
            Action::PhaseChanged(Phase::Setup)
        ));
        assert!(screen.selected_range().is_none());
    }
}
