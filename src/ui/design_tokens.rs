// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by the detail page, the gallery overlay and toasts.
Views pull sizes and colors from here rather than using literals.

```
use iced_lightbox::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color { a: opacity::BACKDROP, ..palette::BLACK };
let gutter = spacing::MD;
```
"#]

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.92, 0.92, 0.92);

    // Toast accents
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);

    /// Membership badge on the detail page
    pub const BADGE_500: Color = Color::from_rgb(0.72, 0.53, 0.04);
}

pub mod opacity {
    pub const HOVER: f32 = 0.2;
    pub const PRESSED: f32 = 0.5;
    /// Resting fill of overlay controls
    pub const CONTROL: f32 = 0.5;
    pub const CONTROL_HOVER: f32 = 0.9;
    pub const CONTROL_DISABLED: f32 = 0.2;
    /// Full-screen backdrop behind the overlay image
    pub const BACKDROP: f32 = 0.92;
}

/// 4px steps.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const GLYPH_SM: f32 = 16.0;
    pub const GLYPH_MD: f32 = 24.0;

    /// Prev/next/zoom/close buttons; large enough for a fingertip
    pub const OVERLAY_BUTTON: f32 = 44.0;

    pub const TOAST_WIDTH: f32 = 320.0;
    pub const TOAST_ACCENT_WIDTH: f32 = 4.0;

    pub const DETAIL_MAX_WIDTH: f32 = 960.0;
}

pub mod typography {
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    /// Pill
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const TOAST: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);
    assert!(spacing::LG < spacing::XL);

    assert!(opacity::CONTROL_DISABLED < opacity::CONTROL);
    assert!(opacity::CONTROL < opacity::CONTROL_HOVER);
    assert!(opacity::BACKDROP < 1.0);

    assert!(typography::CAPTION < typography::BODY);
    assert!(typography::BODY < typography::TITLE_SM);
    assert!(typography::TITLE_SM < typography::TITLE_LG);

    assert!(sizing::OVERLAY_BUTTON >= 44.0);
    assert!(sizing::GLYPH_MD < sizing::OVERLAY_BUTTON);
};
