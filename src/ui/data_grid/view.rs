// SPDX-License-Identifier: MPL-2.0
//! Data grid rendering: search bar, table and pagination footer.

use super::{Message, State};
use crate::domain::paging::Record;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use chrono::DateTime;
use iced::widget::{button, container, scrollable, text, text_input, Column, Row, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Formats a service timestamp as `YYYY-MM-DD HH:MM`.
///
/// Values that are not RFC 3339 are shown as received; missing values are
/// blank.
#[must_use]
pub fn format_timestamp(raw: Option<&str>) -> String {
    match raw {
        None => String::new(),
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| value.to_string()),
    }
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let search = text_input(&i18n.tr("grid-search-placeholder"), state.search_term())
        .on_input(Message::SearchChanged)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fill);

    let refresh = button(text(i18n.tr("grid-refresh")).size(typography::BODY))
        .on_press(Message::Refresh)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected);

    let mut toolbar = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(search)
        .push(refresh);
    if state.is_loading() {
        toolbar = toolbar.push(text(i18n.tr("grid-loading")).size(typography::BODY_SM));
    }

    let content = Column::new()
        .spacing(spacing::SM)
        .push(toolbar)
        .push(table(state, i18n))
        .push(footer(state, i18n));

    container(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn table<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let header = container(row_cells(
        [
            i18n.tr("grid-column-id"),
            i18n.tr("grid-column-name"),
            i18n.tr("grid-column-email"),
            i18n.tr("grid-column-created"),
            i18n.tr("grid-column-verified"),
        ],
        true,
    ))
    .padding([spacing::XS, spacing::SM])
    .style(styles::container::grid_header);

    let body: Element<'a, Message> = if state.items().is_empty() {
        container(text(i18n.tr("grid-empty")).size(typography::BODY))
            .padding(spacing::MD)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into()
    } else {
        let rows = state.items().iter().enumerate().map(|(index, record)| {
            container(record_row(record))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::grid_row(index % 2 == 1))
                .into()
        });
        scrollable(Column::with_children(rows)).height(Length::Fill).into()
    };

    Column::new().push(header).push(body).height(Length::Fill).into()
}

fn record_row<'a>(record: &Record) -> Element<'a, Message> {
    row_cells(
        [
            record.id.to_string(),
            record.name.clone(),
            record.email.clone(),
            format_timestamp(record.created_at.as_deref()),
            format_timestamp(record.email_verified_at.as_deref()),
        ],
        false,
    )
}

fn row_cells<'a>(cells: [String; 5], header: bool) -> Element<'a, Message> {
    let widths = [
        Length::Fixed(sizing::COLUMN_ID_WIDTH),
        Length::FillPortion(2),
        Length::FillPortion(3),
        Length::Fixed(sizing::COLUMN_DATE_WIDTH),
        Length::Fixed(sizing::COLUMN_DATE_WIDTH),
    ];
    let size = if header {
        typography::BODY_SM
    } else {
        typography::BODY
    };

    cells
        .into_iter()
        .zip(widths)
        .fold(Row::new().spacing(spacing::XS), |row, (cell, width)| {
            row.push(Text::new(cell).size(size).width(width))
        })
        .into()
}

fn footer<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let page_size_input = text_input("", state.page_size_input())
        .on_input(Message::PageSizeInputChanged)
        .padding(spacing::XXS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::PAGE_SIZE_INPUT_WIDTH));

    let range_label = if state.total_items() > 0 {
        i18n.tr_with_args(
            "grid-range",
            &[
                ("start", &state.range_start().to_string()),
                ("end", &state.range_end().to_string()),
                ("total", &state.total_items().to_string()),
            ],
        )
    } else {
        String::new()
    };

    let page_label = i18n.tr_with_args(
        "grid-page-indicator",
        &[
            ("page", &state.page().value().to_string()),
            ("pages", &state.total_pages().to_string()),
        ],
    );

    let back = state.can_go_back();
    let forward = state.can_go_forward();
    let nav = |label: &'static str, message: Message, enabled: bool| {
        button(text(label).size(typography::BODY))
            .on_press_maybe(enabled.then_some(message))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::unselected)
    };

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(text(i18n.tr("grid-page-size-label")).size(typography::BODY_SM))
        .push(page_size_input)
        .push(text(range_label).size(typography::BODY_SM).width(Length::Fill))
        .push(nav("<<", Message::FirstPage, back))
        .push(nav("<", Message::PreviousPage, back))
        .push(text(page_label).size(typography::BODY_SM))
        .push(nav(">", Message::NextPage, forward))
        .push(nav(">>", Message::LastPage, forward))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_timestamps_are_shortened() {
        assert_eq!(
            format_timestamp(Some("2024-11-02T09:15:42.000000Z")),
            "2024-11-02 09:15"
        );
    }

    #[test]
    fn unparsable_timestamps_are_shown_raw() {
        assert_eq!(format_timestamp(Some("yesterday")), "yesterday");
    }

    #[test]
    fn missing_timestamps_are_blank() {
        assert_eq!(format_timestamp(None), "");
    }

    #[test]
    fn view_builds_for_empty_grid() {
        let i18n = I18n::default();
        let state = State::default();
        let _element = view(&state, ViewContext { i18n: &i18n });
    }
}
