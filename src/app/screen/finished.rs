// SPDX-License-Identifier: GPL-3.0-only

use cosmic::iced::{Alignment, Length};
use cosmic::iced_widget::{column, row};
use cosmic::widget::{button, container, text};
use cosmic::{Element, theme};

use crate::app::core::session::Session;
use crate::app::core::utils::format_elapsed;
use crate::fl;

use super::session::Message;

/// Summary shown once the last card has been passed
pub fn view<'a>(session: &'a Session) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    let summary = column![
        text::title2(fl!("finished-title")),
        text::body(fl!("cards-studied", count = session.deck().len())),
        text::title4(fl!(
            "total-time",
            time = format_elapsed(session.elapsed_seconds())
        )),
    ]
    .align_x(Alignment::Center)
    .spacing(spacing.space_xs);

    let buttons = row![
        button::standard(fl!("back-to-setup")).on_press(Message::BackToSetup),
        button::suggested(fl!("study-again")).on_press(Message::StudyAgain),
    ]
    .spacing(spacing.space_s);

    container(
        column![summary, buttons]
            .align_x(Alignment::Center)
            .spacing(spacing.space_l),
    )
    .center(Length::Fill)
    .into()
}
