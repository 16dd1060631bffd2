// SPDX-License-Identifier: GPL-3.0-only

use cosmic::iced::{Alignment, Color, Font, Length};
use cosmic::iced_widget::{column, mouse_area, row};
use cosmic::widget::{button, container, text};
use cosmic::{Element, theme};

use crate::app::core::Catalog;
use crate::app::core::session::Session;
use crate::app::core::utils::{StudyInput, format_elapsed};
use crate::{fl, icons};

use super::session::Message;

const BOLD: Font = Font {
    weight: cosmic::iced::font::Weight::Bold,
    ..Font::DEFAULT
};

/// The card being studied, the stopwatch and the navigation controls
pub fn view<'a>(session: &'a Session, catalog: &'a Catalog) -> Element<'a, Message> {
    let Some(card) = session.current_card() else {
        return container(text(fl!("loading"))).center(Length::Fill).into();
    };

    let spacing = theme::active().cosmic().spacing;
    let flipped = session.is_flipped();

    let (language, word) = if flipped {
        (catalog.target_language(), card.target.as_str())
    } else {
        (catalog.source_language(), card.source.as_str())
    };

    let status = row![
        text::body(fl!(
            "card-position",
            current = session.cursor() + 1,
            total = session.deck().len()
        ))
        .width(Length::Fill),
        text::body(format_elapsed(session.elapsed_seconds())).font(BOLD),
    ]
    .align_y(Alignment::Center);

    let card_content = container(
        column![
            text::caption(language),
            text(word).size(60),
            text::caption(fl!("word-number", number = card.number)),
        ]
        .align_x(Alignment::Center)
        .spacing(spacing.space_s),
    )
    .center(Length::Fill);

    // Taps and swipes only count when they start on the card
    let card_area = mouse_area(card_content)
        .on_press(Message::PointerPressed)
        .on_release(Message::PointerReleased)
        .on_move(|position| Message::PointerMoved(position.x))
        .on_exit(Message::PointerLeft);

    let card_view = container(card_area)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |theme| {
            let palette = theme.cosmic();
            let mut style = theme::style::Container::primary(palette);
            let accent = Color::from(palette.accent_color());

            style.border = cosmic::iced::Border {
                color: accent,
                width: if flipped { 2.0 } else { 0.0 },
                radius: palette.corner_radii.radius_s.into(),
            };
            style.shadow = cosmic::iced_core::Shadow {
                color: if flipped { accent } else { Color::TRANSPARENT },
                offset: cosmic::iced::Vector::new(0.0, 0.0),
                blur_radius: 16.0,
            };
            style
        });

    let flip_label = if flipped {
        fl!("show-prompt")
    } else {
        fl!("show-answer")
    };

    let controls = row![
        button::icon(icons::get_handle("go-previous-symbolic", 18))
            .on_press_maybe(
                (!session.is_first_card()).then_some(Message::Input(StudyInput::Previous))
            )
            .padding(spacing.space_xs),
        button::standard(flip_label)
            .on_press(Message::Input(StudyInput::Flip))
            .width(Length::Fill),
        button::icon(icons::get_handle("go-next-symbolic", 18))
            .on_press(Message::Input(StudyInput::Next))
            .padding(spacing.space_xs),
    ]
    .align_y(Alignment::Center)
    .spacing(spacing.space_s);

    let footer = row![
        text::caption(fl!("study-hint")).width(Length::Fill),
        button::text(fl!("back-to-setup")).on_press(Message::BackToSetup),
    ]
    .align_y(Alignment::Center)
    .spacing(spacing.space_s);

    container(
        column![status, card_view, controls, footer]
            .width(Length::Fill)
            .height(Length::Fill)
            .spacing(spacing.space_s),
    )
    .padding(15)
    .center(Length::Fill)
    .into()
}
