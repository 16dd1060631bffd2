// SPDX-License-Identifier: GPL-3.0-only

use std::time::Duration;

/// How often the study timer ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Formats elapsed seconds as `MM:SS`, minutes are not capped at 59
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
