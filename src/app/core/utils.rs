// SPDX-License-Identifier: GPL-3.0-only

mod gesture;
mod shuffle;
mod stopwatch;

pub use gesture::{GestureTracker, StudyInput};
pub use shuffle::shuffled;
pub use stopwatch::{TICK_INTERVAL, format_elapsed};
