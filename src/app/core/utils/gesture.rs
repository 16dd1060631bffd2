// SPDX-License-Identifier: GPL-3.0-only

/// Horizontal distance (logical pixels) a drag has to exceed to count as a swipe
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// The three things the user can do with the card being studied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyInput {
    Flip,
    Next,
    Previous,
}

impl StudyInput {
    /// Classifies a finished press by its horizontal travel
    pub fn from_drag(dx: f32) -> Self {
        if dx > SWIPE_THRESHOLD {
            StudyInput::Next
        } else if dx < -SWIPE_THRESHOLD {
            StudyInput::Previous
        } else {
            StudyInput::Flip
        }
    }
}

/// Turns press, move and release events on the card into [`StudyInput`]s.
///
/// Positions are forgotten on release so a touch never starts from where the last finger lifted.
#[derive(Debug, Default)]
pub struct GestureTracker {
    /// Last known horizontal pointer position over the card
    last_x: Option<f32>,
    /// Where the current press started, filled by the first move when the press had no position
    pressed_at: Option<f32>,
    pressing: bool,
}

impl GestureTracker {
    pub fn moved(&mut self, x: f32) {
        self.last_x = Some(x);
        if self.pressing && self.pressed_at.is_none() {
            self.pressed_at = Some(x);
        }
    }

    pub fn pressed(&mut self) {
        self.pressing = true;
        self.pressed_at = self.last_x;
    }

    /// Ends the current press, returns `None` if no press was started on the card
    pub fn released(&mut self) -> Option<StudyInput> {
        if !self.pressing {
            return None;
        }

        let dx = match (self.pressed_at, self.last_x) {
            (Some(start), Some(end)) => end - start,
            _ => 0.0,
        };
        self.reset();

        Some(StudyInput::from_drag(dx))
    }

    /// Forgets any press in progress
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
