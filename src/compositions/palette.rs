//! Colors shared by the compositions. Values mirror the design-token catalog.

use crate::foundation::color::Color;

pub(crate) const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
pub(crate) const SPACE: Color = Color::rgb(0x03, 0x03, 0x08);
pub(crate) const NEUTRAL_BG: Color = Color::rgb(0x08, 0x08, 0x08);
pub(crate) const BENTO_BG: Color = Color::rgb(0x0c, 0x0c, 0x0c);
pub(crate) const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
pub(crate) const CARD: Color = Color::rgb(0x1c, 0x1c, 0x1e);
pub(crate) const HUB_FILL: Color = Color::rgb(0x0f, 0x0f, 0x12);

pub(crate) const TEXT_BRIGHT: Color = Color::rgb(0xe2, 0xe2, 0xe2);
pub(crate) const TEXT_SECONDARY: Color = Color::rgb(0xa3, 0xa3, 0xa3);
pub(crate) const TEXT_MUTED: Color = Color::rgb(0x72, 0x72, 0x72);
pub(crate) const TEXT_TERTIARY: Color = Color::rgb(0x51, 0x51, 0x51);

pub(crate) const PURPLE_400: Color = Color::rgb(0x94, 0x7a, 0xfc);
pub(crate) const BLUE_400: Color = Color::rgb(0x1a, 0x9e, 0xff);
pub(crate) const GREEN_400: Color = Color::rgb(0x4a, 0xde, 0x80);
pub(crate) const GREEN_500: Color = Color::rgb(0x22, 0xc5, 0x5e);
pub(crate) const AMBER: Color = Color::rgb(0xff, 0xbd, 0x2e);

pub(crate) const DOT_RED: Color = Color::rgb(0xff, 0x5f, 0x57);
pub(crate) const DOT_AMBER: Color = Color::rgb(0xff, 0xbd, 0x2e);
pub(crate) const DOT_GREEN: Color = Color::rgb(0x28, 0xca, 0x42);

/// `rgba(255,255,255,0.08)`, the subtle card border.
pub(crate) const BORDER_SUBTLE: Color = Color::rgba(0xff, 0xff, 0xff, 0.08);

/// Purple at `alpha`, the accent wash used for pills, tags and highlights.
pub(crate) fn purple_wash(alpha: f64) -> Color {
    PURPLE_400.with_alpha(alpha)
}
