// SPDX-License-Identifier: GPL-3.0-only

use cosmic::app::Settings;
use cosmic::iced::{Limits, Size};
use tracing_subscriber::EnvFilter;

use crate::flags::{self, Flags};

/// Everything the application needs before the window opens
pub fn init() -> (Settings, Flags) {
    set_logger();

    (get_app_settings(), flags::flags())
}

/// Logs to stderr, filtered by `RUST_LOG` (warnings and errors by default)
pub fn set_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Err(err) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("failed to install the logger: {err}");
    }
}

pub fn get_app_settings() -> Settings {
    Settings::default()
        .size_limits(Limits::NONE.min_width(420.0).min_height(480.0))
        .size(Size::new(900.0, 720.0))
}
