// SPDX-License-Identifier: GPL-3.0-only

use app::AppModel;

mod app;
mod config;
mod flags;
mod i18n;
mod icons;
mod key_binds;
mod settings;

/// The `cosmic::app::run()` function is the starting point of your application.
/// It takes two arguments:
/// - `settings` is a structure that contains everything relevant with your app's configuration, such as antialiasing, themes, icons, etc...
/// - `flags` carries the configuration loaded before the window opens.
fn main() -> cosmic::iced::Result {
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();
    i18n::init(&requested_languages);

    let (settings, flags) = settings::init();
    cosmic::app::run::<AppModel>(settings, flags)
}
