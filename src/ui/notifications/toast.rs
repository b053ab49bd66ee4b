// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.

use super::manager::{Manager, Message};
use super::notification::{Notification, NotificationId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// Localized text of `notification`.
    #[must_use]
    pub fn message_text(notification: &Notification, i18n: &I18n) -> String {
        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        i18n.tr_with_args(notification.message_key(), &args)
    }

    /// One toast: accent strip, severity glyph, message and a close button.
    pub fn view<'a>(id: NotificationId, notification: &'a Notification, i18n: &I18n) -> Element<'a, Message> {
        let accent = notification.severity().accent();

        let strip = Container::new(Space::new())
            .width(Length::Fixed(sizing::TOAST_ACCENT_WIDTH))
            .height(Length::Fixed(sizing::GLYPH_MD))
            .style(move |_theme: &Theme| container::Style {
                background: Some(accent.into()),
                border: Border {
                    radius: radius::SM.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            });

        let body = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(strip)
            .push(Text::new(notification.severity().glyph()).size(sizing::GLYPH_MD).color(accent))
            .push(
                Text::new(Self::message_text(notification, i18n))
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
            .push(
                button(Text::new("×").size(sizing::GLYPH_SM))
                    .padding(spacing::XXS)
                    .on_press(Message::Dismiss(id))
                    .style(close_button_style),
            );

        Container::new(body)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(toast_style)
            .into()
    }

    /// Visible toasts stacked in the bottom-right corner; renders nothing
    /// when there are none.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &I18n) -> Element<'a, Message> {
        if manager.visible_count() == 0 {
            return Space::new().into();
        }

        let column = manager
            .visible()
            .fold(Column::new().spacing(spacing::XS), |column, (id, notification)| {
                column.push(Self::view(id, notification, i18n))
            });

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .into()
    }
}

fn toast_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::TOAST,
        ..container::Style::default()
    }
}

fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let fill = match status {
        button::Status::Hovered => Some(opacity::HOVER),
        button::Status::Pressed => Some(opacity::PRESSED),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: fill.map(|a| Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color: theme.extended_palette().background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
