// SPDX-License-Identifier: GPL-3.0-only

use cosmic::cosmic_config;

use crate::config::WordflipConfig;

/// Flags given to our COSMIC application to use in it's "init" function.
#[derive(Clone, Debug)]
pub struct Flags {
    pub config_handler: Option<cosmic_config::Config>,
    pub config: WordflipConfig,
}

pub fn flags() -> Flags {
    let (config_handler, config) = (WordflipConfig::config_handler(), WordflipConfig::config());

    Flags {
        config_handler,
        config,
    }
}
