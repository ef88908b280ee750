//! Design tokens: oklch color roles plus spacing, font and radius scales.
//!
//! Color functions return reactive signals bound to the theme channel so
//! every styled element follows theme toggles without manual re-rendering.

use crate::theme::{Theme, ThemeChannel};
use zoon::{FontFamily, Signal, SignalExt};

// Spacing scale
pub const SPACING_4: u32 = 4;
pub const SPACING_8: u32 = 8;
pub const SPACING_12: u32 = 12;
pub const SPACING_16: u32 = 16;
pub const SPACING_24: u32 = 24;
pub const SPACING_32: u32 = 32;
pub const SPACING_48: u32 = 48;
pub const SPACING_64: u32 = 64;

// Font scale
pub const FONT_SIZE_12: u32 = 12;
pub const FONT_SIZE_14: u32 = 14;
pub const FONT_SIZE_16: u32 = 16;
pub const FONT_SIZE_18: u32 = 18;
pub const FONT_SIZE_20: u32 = 20;
pub const FONT_SIZE_24: u32 = 24;
pub const FONT_SIZE_32: u32 = 32;
pub const FONT_SIZE_48: u32 = 48;

// Corner radius scale
pub const CORNER_RADIUS_8: u32 = 8;
pub const CORNER_RADIUS_12: u32 = 12;
pub const CORNER_RADIUS_16: u32 = 16;

pub const CONTENT_MAX_WIDTH: u32 = 1120;

fn themed<F>(theme: &ThemeChannel, pick: F) -> impl Signal<Item = &'static str> + use<F>
where
    F: Fn(Theme) -> &'static str + 'static,
{
    theme.signal().map(pick)
}

/// Page background.
pub fn neutral_1(theme: &ThemeChannel) -> impl Signal<Item = &'static str> + use<> {
    themed(theme, |t| match t {
        Theme::Light => "oklch(99% 0.005 250)",
        Theme::Dark => "oklch(16% 0.01 250)",
    })
}

/// Card and panel surfaces.
pub fn neutral_2(theme: &ThemeChannel) -> impl Signal<Item = &'static str> + use<> {
    themed(theme, |t| match t {
        Theme::Light => "oklch(96% 0.007 250)",
        Theme::Dark => "oklch(21% 0.015 250)",
    })
}

/// Raised surfaces: code blocks, the dashboard mock.
pub fn neutral_3(theme: &ThemeChannel) -> impl Signal<Item = &'static str> + use<> {
    themed(theme, |t| match t {
        Theme::Light => "oklch(92% 0.01 250)",
        Theme::Dark => "oklch(26% 0.02 250)",
    })
}

/// Subtle borders.
pub fn neutral_4(theme: &ThemeChannel) -> impl Signal<Item = &'static str> + use<> {
    themed(theme, |t| match t {
        Theme::Light => "oklch(87% 0.01 250)",
        Theme::Dark => "oklch(32% 0.02 250)",
    })
}

/// Muted text: captions, timestamps.
pub fn neutral_8(theme: &ThemeChannel) -> impl Signal<Item = &'static str> + use<> {
    themed(theme, |t| match t {
        Theme::Light => "oklch(50% 0.02 250)",
        Theme::Dark => "oklch(65% 0.02 250)",
    })
}

/// Secondary text.
pub fn neutral_10(theme: &ThemeChannel) -> impl Signal<Item = &'static str> + use<> {
    themed(theme, |t| match t {
        Theme::Light => "oklch(35% 0.02 250)",
        Theme::Dark => "oklch(80% 0.015 250)",
    })
}

/// Primary text.
pub fn neutral_12(theme: &ThemeChannel) -> impl Signal<Item = &'static str> + use<> {
    themed(theme, |t| match t {
        Theme::Light => "oklch(20% 0.02 250)",
        Theme::Dark => "oklch(95% 0.01 250)",
    })
}

/// Brand green, the accent throughout the page.
pub fn primary_7(theme: &ThemeChannel) -> impl Signal<Item = &'static str> + use<> {
    themed(theme, |t| match t {
        Theme::Light => "oklch(55% 0.17 155)",
        Theme::Dark => "oklch(70% 0.17 155)",
    })
}

/// Accent surface behind badges and active markers.
pub fn primary_2(theme: &ThemeChannel) -> impl Signal<Item = &'static str> + use<> {
    themed(theme, |t| match t {
        Theme::Light => "oklch(94% 0.05 155)",
        Theme::Dark => "oklch(28% 0.06 155)",
    })
}

pub fn success_7(theme: &ThemeChannel) -> impl Signal<Item = &'static str> + use<> {
    primary_7(theme)
}

pub fn warning_7(theme: &ThemeChannel) -> impl Signal<Item = &'static str> + use<> {
    themed(theme, |t| match t {
        Theme::Light => "oklch(60% 0.15 85)",
        Theme::Dark => "oklch(75% 0.15 85)",
    })
}

pub fn error_7(theme: &ThemeChannel) -> impl Signal<Item = &'static str> + use<> {
    themed(theme, |t| match t {
        Theme::Light => "oklch(55% 0.19 25)",
        Theme::Dark => "oklch(68% 0.19 25)",
    })
}

pub fn font_sans() -> [FontFamily; 4] {
    [
        FontFamily::new("Inter"),
        FontFamily::new("Segoe UI"),
        FontFamily::new("Arial"),
        FontFamily::SansSerif,
    ]
}

pub fn font_mono() -> [FontFamily; 3] {
    [
        FontFamily::new("Fira Code"),
        FontFamily::new("Consolas"),
        FontFamily::Monospace,
    ]
}
