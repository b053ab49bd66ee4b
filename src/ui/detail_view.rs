// SPDX-License-Identifier: MPL-2.0
//! Content detail page.
//!
//! Shows the title, a row of thumbnails, the number of images gated behind
//! membership and an "Open gallery" button. Clicking a thumbnail opens the
//! overlay on that image. Sets longer than [`THUMBNAIL_ROW_LIMIT`] end the row
//! with a "+N" tile opening the first image left out.

use crate::gallery::ImageSet;
use crate::i18n::fluent::I18n;
use crate::source::{ImageCache, ImageStatus, Resolution};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::{button, container, image, scrollable, text, Column, Container, Row, Text};
use iced::{alignment, Border, ContentFit, Element, Length, Theme};

/// Thumbnails shown (and loaded) on the detail page.
pub const THUMBNAIL_ROW_LIMIT: usize = 24;

/// Contextual data needed to render the detail page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub title: String,
    /// `None` renders the empty state.
    pub images: Option<&'a ImageSet>,
    pub cache: &'a ImageCache,
    pub locked_count: u32,
    pub badge: Option<&'a str>,
    pub thumbnail_size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    OpenGallery,
    ThumbnailPressed(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenAt(usize),
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::OpenGallery => Event::OpenAt(0),
        Message::ThumbnailPressed(index) => Event::OpenAt(*index),
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.title.clone()).size(typography::TITLE_LG);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .max_width(sizing::DETAIL_MAX_WIDTH)
        .push(title);

    match ctx.images {
        Some(images) => {
            let count = images.len().to_string();
            content = content
                .push(
                    Text::new(ctx.i18n.tr_with_args("detail-image-count", &[("count", count.as_str())]))
                        .size(typography::BODY),
                )
                .push(thumbnail_row(ctx.i18n, images, ctx.cache, ctx.thumbnail_size));
        }
        None => {
            content = content.push(
                Container::new(Text::new(ctx.i18n.tr("detail-empty-state")).size(typography::TITLE_SM))
                    .padding(spacing::XL)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }
    }

    if ctx.locked_count > 0 {
        content = content.push(locked_row(&ctx));
    }

    let mut open_button = button(Text::new(ctx.i18n.tr("detail-open-gallery")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD]);
    if ctx.images.is_some() {
        open_button = open_button.on_press(Message::OpenGallery);
    }
    content = content.push(open_button);

    Container::new(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn thumbnail_row<'a>(
    i18n: &I18n,
    images: &'a ImageSet,
    cache: &'a ImageCache,
    size: u32,
) -> Element<'a, Message> {
    let edge = size as f32;
    let thumbnails = images
        .iter()
        .take(THUMBNAIL_ROW_LIMIT)
        .enumerate()
        .map(|(index, location)| {
            let content: Element<'a, Message> = match cache.status(Resolution::Thumbnail, location) {
                ImageStatus::Ready(loaded) => image(loaded.handle.clone())
                    .width(Length::Fixed(edge))
                    .height(Length::Fixed(edge))
                    .content_fit(ContentFit::Cover)
                    .into(),
                ImageStatus::Failed => placeholder("×".to_string(), edge),
                ImageStatus::Loading | ImageStatus::Missing => placeholder("…".to_string(), edge),
            };

            button(content)
                .padding(0.0)
                .on_press(Message::ThumbnailPressed(index))
                .into()
        });

    let mut row = Row::with_children(thumbnails).spacing(spacing::XS);
    if let Some(hidden) = hidden_count(images.len()) {
        let label = i18n.tr_with_args("detail-more-images", &[("count", hidden.to_string().as_str())]);
        row = row.push(
            button(placeholder(label, edge))
                .padding(0.0)
                .on_press(Message::ThumbnailPressed(THUMBNAIL_ROW_LIMIT)),
        );
    }

    scrollable(row)
        .direction(scrollable::Direction::Horizontal(scrollable::Scrollbar::default()))
        .width(Length::Fill)
        .into()
}

/// Images left out of the thumbnail row, if any.
fn hidden_count(total: usize) -> Option<usize> {
    total.checked_sub(THUMBNAIL_ROW_LIMIT).filter(|&hidden| hidden > 0)
}

fn placeholder<'a>(label: String, edge: f32) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::TITLE_SM))
        .width(Length::Fixed(edge))
        .height(Length::Fixed(edge))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

fn locked_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let count = ctx.locked_count.to_string();
    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(ctx.i18n.tr_with_args("detail-locked-count", &[("count", count.as_str())])).size(typography::BODY));

    if let Some(badge) = ctx.badge {
        row = row.push(
            Container::new(text(badge.to_string()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(|_theme: &Theme| container::Style {
                    background: Some(palette::BADGE_500.into()),
                    text_color: Some(palette::WHITE),
                    border: Border {
                        radius: radius::FULL.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
        );
    }

    row.into()
}
