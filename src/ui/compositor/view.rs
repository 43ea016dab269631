// SPDX-License-Identifier: MPL-2.0
//! Stage and controls rendering for the compositor.

use super::{Message, State};
use crate::domain::compositor::logo_size_bounds;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, image, mouse_area, slider, text, Column, Row, Stack};
use iced::{alignment, mouse, ContentFit, Element, Length, Padding};

/// Contextual data needed to render the compositor.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let size = state.overlay().size().value();

    let upload = button(text(i18n.tr("compositor-upload")).size(typography::BODY))
        .on_press(Message::UploadRequested)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected);

    let export = button(text(i18n.tr("compositor-export")).size(typography::BODY))
        .on_press(Message::ExportRequested)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary);

    let size_slider = slider(
        logo_size_bounds::MIN..=logo_size_bounds::MAX,
        size,
        Message::SizeChanged,
    )
    .step(1u32)
    .width(Length::Fixed(sizing::SLIDER_WIDTH));

    let size_label = i18n.tr_with_args("compositor-size-label", &[("size", &size.to_string())]);

    let controls = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(upload)
        .push(text(size_label).size(typography::BODY_SM))
        .push(size_slider)
        .push(export);

    let hint = if state.overlay().is_placed() {
        i18n.tr("compositor-drag-hint")
    } else {
        i18n.tr("compositor-no-logo")
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(controls)
        .push(stage(state))
        .push(text(hint).size(typography::CAPTION));

    container(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::panel)
        .into()
}

/// Background with the visible part of the logo laid over it. The logo box
/// comes from the same placement the export uses; only what lands on the
/// stage is drawn.
fn stage(state: &State) -> Element<'_, Message> {
    let stage_size = state.stage_size();
    let background = image(state.background_handle().clone())
        .width(Length::Fixed(stage_size.width))
        .height(Length::Fixed(stage_size.height));

    let mut layers = Stack::new()
        .width(Length::Fixed(stage_size.width))
        .height(Length::Fixed(stage_size.height))
        .push(background);

    if let Some((handle, region)) = state.logo_preview() {
        let interaction = if state.is_dragging() {
            mouse::Interaction::Grabbing
        } else {
            mouse::Interaction::Grab
        };

        let logo = mouse_area(
            image(handle.clone())
                .width(Length::Fixed(region.width as f32))
                .height(Length::Fixed(region.height as f32))
                .content_fit(ContentFit::Fill),
        )
        .on_press(Message::DragStarted)
        .interaction(interaction);

        let placed = container(logo).padding(Padding {
            top: region.y as f32,
            left: region.x as f32,
            right: 0.0,
            bottom: 0.0,
        });
        layers = layers.push(placed);
    }

    container(layers)
        .clip(true)
        .style(styles::container::stage)
        .into()
}
