// SPDX-License-Identifier: GPL-3.0-only

use cosmic::iced::alignment::Horizontal;
use cosmic::iced::{Alignment, Length};
use cosmic::iced_widget::{column, row};
use cosmic::widget::{button, container, list, scrollable, text};
use cosmic::{Element, theme};

use crate::app::core::Catalog;
use crate::app::core::models::WordRange;
use crate::app::core::session::{Session, SetSize};
use crate::fl;

use super::session::Message;

/// Choose the set size and the range to study, then start
pub fn view<'a>(
    session: &'a Session,
    range_choices: &'a [WordRange],
    catalog: &'a Catalog,
) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    let header = column![
        text::title3(fl!("setup-title")),
        text::body(fl!(
            "catalog-summary",
            words = catalog.len(),
            source = catalog.source_language(),
            target = catalog.target_language()
        )),
    ]
    .spacing(spacing.space_xxs);

    let set_sizes = SetSize::ALL.iter().fold(
        cosmic::widget::row::with_capacity(SetSize::ALL.len()).spacing(spacing.space_xs),
        |sizes, set_size| {
            let class = if *set_size == session.set_size() {
                theme::Button::Suggested
            } else {
                theme::Button::Standard
            };

            sizes.push(
                button::text(fl!("set-size-option", count = set_size.count()))
                    .class(class)
                    .on_press(Message::SelectSetSize(*set_size)),
            )
        },
    );

    let set_size_section = row![
        text::heading(fl!("set-size")).width(Length::Fill),
        set_sizes
    ]
    .align_y(Alignment::Center)
    .spacing(spacing.space_s);

    let start_button = button::suggested(fl!("start"))
        .on_press_maybe(session.can_start().then_some(Message::Start));

    container(
        column![
            header,
            set_size_section,
            text::heading(fl!("word-range")),
            ranges_view(session, range_choices),
            container(start_button)
                .align_x(Horizontal::Right)
                .width(Length::Fill),
        ]
        .spacing(spacing.space_s)
        .max_width(700.),
    )
    .padding(spacing.space_m)
    .center_x(Length::Fill)
    .into()
}

fn ranges_view<'a>(session: &'a Session, range_choices: &'a [WordRange]) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;
    let mut ranges_list = list::list_column().style(theme::Container::Card);

    for range in range_choices {
        let label = if range.is_full() {
            fl!("full-range", range = range.label())
        } else {
            range.label()
        };

        let class = if session.range() == Some(range) {
            theme::Button::Suggested
        } else {
            theme::Button::Standard
        };

        ranges_list = ranges_list.add(
            button::custom(
                row![
                    text::body(label).width(Length::Fill),
                    text::caption(fl!("range-words", count = range.len())),
                ]
                .align_y(Alignment::Center)
                .spacing(spacing.space_s),
            )
            .class(class)
            .width(Length::Fill)
            .on_press(Message::SelectRange(*range)),
        );
    }

    scrollable(container(ranges_list).width(Length::Fill))
        .height(Length::Fill)
        .into()
}
