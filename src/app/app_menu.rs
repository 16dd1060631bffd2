// SPDX-License-Identifier: GPL-3.0-only

use cosmic::widget::menu;

use crate::app::Message;
use crate::app::context_page::ContextPage;
use crate::app::screen::session;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuAction {
    BackToSetup,
    About,
    Settings,
}

impl menu::action::MenuAction for MenuAction {
    type Message = Message;

    fn message(&self) -> Self::Message {
        match self {
            MenuAction::BackToSetup => Message::Session(session::Message::BackToSetup),
            MenuAction::About => Message::ToggleContextPage(ContextPage::About),
            MenuAction::Settings => Message::ToggleContextPage(ContextPage::Settings),
        }
    }
}
