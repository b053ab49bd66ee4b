// SPDX-License-Identifier: MPL-2.0
//! Image widget that draws a decoded image at a zoom level and pan offset.
//!
//! The image is first fitted inside the widget bounds (keeping its aspect
//! ratio), then scaled around the centre by the zoom factor and shifted by
//! the pan offset. Anything outside the bounds is clipped. Input handling
//! lives in the application subscription, not here.

use crate::gallery::{PanOffset, ZoomLevel};
use iced::advanced::image::Renderer as ImageRenderer;
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::{self, Widget};
use iced::widget::image;
use iced::{mouse, Element, Length, Rectangle, Size, Theme};

pub struct ZoomableImage {
    handle: image::Handle,
    image_size: Size,
    zoom: ZoomLevel,
    offset: PanOffset,
}

impl ZoomableImage {
    pub fn new(handle: image::Handle, width: u32, height: u32) -> Self {
        Self {
            handle,
            image_size: Size::new(width as f32, height as f32),
            zoom: ZoomLevel::REST,
            offset: PanOffset::ZERO,
        }
    }

    #[must_use]
    pub fn zoom(mut self, zoom: ZoomLevel) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: PanOffset) -> Self {
        self.offset = offset;
        self
    }
}

/// Screen rectangle of the image inside `bounds`.
#[must_use]
pub fn image_bounds(bounds: Rectangle, image_size: Size, zoom: ZoomLevel, offset: PanOffset) -> Rectangle {
    if image_size.width <= 0.0 || image_size.height <= 0.0 {
        return Rectangle::new(bounds.center(), Size::ZERO);
    }

    let fit = (bounds.width / image_size.width).min(bounds.height / image_size.height);
    let width = image_size.width * fit * zoom.value();
    let height = image_size.height * fit * zoom.value();
    let center = bounds.center();

    Rectangle {
        x: center.x - width / 2.0 + offset.x,
        y: center.y - height / 2.0 + offset.y,
        width,
        height,
    }
}

impl<Message> Widget<Message, Theme, iced::Renderer> for ZoomableImage {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut iced::Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let target = image_bounds(bounds, self.image_size, self.zoom, self.offset);

        renderer.with_layer(bounds, |renderer| {
            let image = iced::advanced::image::Image::<image::Handle> {
                handle: self.handle.clone(),
                filter_method: iced::advanced::image::FilterMethod::Linear,
                rotation: iced::Radians(0.0),
                opacity: 1.0,
                snap: true,
                border_radius: iced::border::Radius::default(),
            };
            renderer.draw_image(image, target, bounds);
        });
    }

    fn mouse_interaction(
        &self,
        _tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &iced::Renderer,
    ) -> mouse::Interaction {
        if !self.zoom.is_rest() && cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message: 'a> From<ZoomableImage> for Element<'a, Message> {
    fn from(widget: ZoomableImage) -> Self {
        Element::new(widget)
    }
}
