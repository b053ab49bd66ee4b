// SPDX-License-Identifier: MPL-2.0
//! Application theme selection.

use crate::config::BackgroundTheme;
use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Built-in iced theme for this mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Colors for the overlay chrome, derived from the configured backdrop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayColors {
    pub backdrop: Color,
    pub control_background: Color,
    pub control_text: Color,
}

impl OverlayColors {
    #[must_use]
    pub fn for_background(background: BackgroundTheme) -> Self {
        match background {
            BackgroundTheme::Dark => Self {
                backdrop: Color {
                    a: opacity::BACKDROP,
                    ..palette::BLACK
                },
                control_background: Color {
                    a: opacity::CONTROL,
                    ..palette::GRAY_700
                },
                control_text: palette::WHITE,
            },
            BackgroundTheme::Light => Self {
                backdrop: Color {
                    a: opacity::BACKDROP,
                    ..palette::GRAY_100
                },
                control_background: Color {
                    a: opacity::CONTROL,
                    ..palette::GRAY_200
                },
                control_text: palette::GRAY_900,
            },
        }
    }
}
