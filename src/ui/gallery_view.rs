// SPDX-License-Identifier: MPL-2.0
//! Full-screen gallery overlay.
//!
//! Draws the current image through [`ZoomableImage`] on a backdrop, with
//! previous/next, zoom and close controls, an `i / N` counter and the zoom
//! percentage.

use crate::gallery::{Effect, GalleryOverlay, ViewState};
use crate::i18n::fluent::I18n;
use crate::source::{ImageCache, ImageStatus, Resolution};
use crate::ui::design_tokens::{opacity, radius, sizing, spacing, typography};
use crate::ui::theming::OverlayColors;
use crate::ui::widgets::zoomable_image::ZoomableImage;
use iced::widget::{button, container, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Border, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub overlay: &'a GalleryOverlay,
    pub view_state: ViewState,
    pub cache: &'a ImageCache,
    pub colors: OverlayColors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    Close,
}

/// Applies a control press to the overlay.
pub fn update(overlay: &mut GalleryOverlay, message: Message) -> Effect {
    match message {
        Message::Previous => overlay.previous(),
        Message::Next => overlay.next(),
        Message::ZoomIn => overlay.zoom_in(),
        Message::ZoomOut => overlay.zoom_out(),
        Message::ResetZoom => overlay.reset_zoom(),
        Message::Close => overlay.close(),
    }
}

/// Counter text, one-based.
#[must_use]
pub fn counter_label(i18n: &I18n, view_state: &ViewState, total: usize) -> String {
    let current = (view_state.current_index() + 1).to_string();
    let total = total.to_string();
    i18n.tr_with_args("gallery-counter", &[("current", current.as_str()), ("total", total.as_str())])
}

#[must_use]
pub fn zoom_label(view_state: &ViewState) -> String {
    format!("{:.0}%", view_state.zoom().as_percent())
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ctx.colors;
    let view_state = ctx.view_state;
    let total = ctx.overlay.images().len();

    let status = ctx
        .overlay
        .current_image()
        .map_or(ImageStatus::Missing, |location| ctx.cache.status(Resolution::Full, location));

    let picture: Element<'_, Message> = match status {
        ImageStatus::Ready(loaded) => {
            ZoomableImage::new(loaded.handle.clone(), loaded.width, loaded.height)
                .zoom(view_state.zoom())
                .offset(view_state.position())
                .into()
        }
        ImageStatus::Failed => centered_text(ctx.i18n.tr("gallery-image-unavailable"), colors),
        ImageStatus::Loading | ImageStatus::Missing => centered_text(ctx.i18n.tr("gallery-loading"), colors),
    };

    let backdrop = Container::new(picture)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(colors.backdrop.into()),
            ..Default::default()
        });

    let top_bar = Row::new()
        .align_y(alignment::Vertical::Center)
        .spacing(spacing::MD)
        .push(label(counter_label(ctx.i18n, &view_state, total), colors))
        .push(Space::new().width(Length::Fill))
        .push(label(zoom_label(&view_state), colors))
        .push(control("×", Some(Message::Close), colors));

    let multiple = total > 1;
    let middle = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(control("‹", multiple.then_some(Message::Previous), colors))
        .push(Space::new().width(Length::Fill))
        .push(control("›", multiple.then_some(Message::Next), colors));

    let zoom = view_state.zoom();
    let bottom_bar = Row::new()
        .spacing(spacing::XS)
        .push(control("−", (!zoom.is_rest()).then_some(Message::ZoomOut), colors))
        .push(control("1:1", (!zoom.is_rest()).then_some(Message::ResetZoom), colors))
        .push(control("+", (!zoom.is_max()).then_some(Message::ZoomIn), colors));

    let chrome = Column::new()
        .padding(spacing::MD)
        .push(top_bar)
        .push(
            Container::new(middle)
                .height(Length::Fill)
                .align_y(alignment::Vertical::Center),
        )
        .push(
            Container::new(bottom_bar)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        );

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(chrome)
        .into()
}

fn centered_text<'a>(content: String, colors: OverlayColors) -> Element<'a, Message> {
    Container::new(
        Text::new(content)
            .size(typography::TITLE_SM)
            .color(colors.control_text),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn label<'a>(content: String, colors: OverlayColors) -> Element<'a, Message> {
    Container::new(
        Text::new(content)
            .size(typography::BODY)
            .color(colors.control_text),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(move |_theme: &Theme| container::Style {
        background: Some(colors.control_background.into()),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

/// Square overlay button; disabled when `message` is `None`.
fn control<'a>(glyph: &'a str, message: Option<Message>, colors: OverlayColors) -> Element<'a, Message> {
    let content = Container::new(Text::new(glyph).size(sizing::GLYPH_MD).color(colors.control_text))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(content)
        .width(Length::Fixed(sizing::OVERLAY_BUTTON))
        .height(Length::Fixed(sizing::OVERLAY_BUTTON))
        .padding(0.0)
        .on_press_maybe(message)
        .style(move |_theme: &Theme, status: button::Status| {
            let alpha = match status {
                button::Status::Disabled => opacity::CONTROL_DISABLED,
                button::Status::Hovered | button::Status::Pressed => opacity::CONTROL_HOVER,
                button::Status::Active => colors.control_background.a,
            };
            button::Style {
                background: Some(iced::Color { a: alpha, ..colors.control_background }.into()),
                text_color: colors.control_text,
                border: Border {
                    radius: radius::FULL.into(),
                    ..Default::default()
                },
                ..button::Style::default()
            }
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_utils::overlay_with;

    fn opened(count: usize) -> GalleryOverlay {
        let mut overlay = overlay_with(count);
        overlay.open(0);
        overlay
    }

    #[test]
    fn controls_drive_the_overlay() {
        let mut overlay = opened(3);

        assert_eq!(update(&mut overlay, Message::Next), Effect::Navigated);
        assert_eq!(update(&mut overlay, Message::ZoomIn), Effect::ZoomChanged);
        assert_eq!(update(&mut overlay, Message::ResetZoom), Effect::ZoomChanged);
        assert_eq!(update(&mut overlay, Message::Close), Effect::Closed);
        assert!(!overlay.is_open());
    }

    #[test]
    fn counter_is_one_based() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let mut overlay = opened(5);
        overlay.previous();
        let state = overlay.view_state().expect("open");

        assert_eq!(counter_label(&i18n, &state, 5), "5 / 5");
    }

    #[test]
    fn zoom_label_is_a_percentage() {
        let mut overlay = opened(1);
        overlay.zoom_in();
        let state = overlay.view_state().expect("open");

        assert_eq!(zoom_label(&state), "150%");
    }
}
