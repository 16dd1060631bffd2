// SPDX-License-Identifier: GPL-3.0-only

use cosmic::{
    cosmic_config::{self, Config, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry},
    theme,
};
use serde::{Deserialize, Serialize};

use crate::app::core::models::range::{self, DEFAULT_CHUNK_SIZE};
use crate::app::core::session::SetSize;

const CONFIG_VERSION: u64 = 1;
const APP_ID: &str = "dev.mariinkys.Wordflip";

/// Preferences kept between runs, study progress is never stored
#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
pub struct WordflipConfig {
    pub app_theme: AppTheme,
    /// Set size preselected on the setup screen
    pub set_size: SetSize,
    /// Amount of words in each selectable range
    pub chunk_size: usize,
}

impl Default for WordflipConfig {
    fn default() -> Self {
        Self {
            app_theme: AppTheme::default(),
            set_size: SetSize::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl WordflipConfig {
    pub fn config_handler() -> Option<Config> {
        Config::new(APP_ID, CONFIG_VERSION).ok()
    }

    pub fn config() -> WordflipConfig {
        let config = match Self::config_handler() {
            Some(config_handler) => {
                WordflipConfig::get_entry(&config_handler).unwrap_or_else(|(errors, config)| {
                    for why in errors {
                        tracing::error!(?why, "error whilst loading config");
                    }
                    config
                })
            }
            None => WordflipConfig::default(),
        };

        config.sanitized()
    }

    /// Replaces values the application can not work with
    pub fn sanitized(mut self) -> Self {
        self.chunk_size = range::sanitize_chunk_size(self.chunk_size);
        self
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum AppTheme {
    Dark,
    Light,
    #[default]
    System,
}

impl AppTheme {
    pub fn theme(&self) -> theme::Theme {
        match self {
            Self::Dark => theme::Theme::dark(),
            Self::Light => theme::Theme::light(),
            Self::System => theme::system_preference(),
        }
    }
}
