//! Page root: theme channel setup and section composition.

use crate::theme::ThemeChannel;
use crate::tokens::*;
use zoon::*;

/// Application root: owns the theme channel every section styles against.
pub struct PaytoolsApp {
    pub theme: ThemeChannel,
}

impl PaytoolsApp {
    pub fn new() -> Self {
        Self {
            theme: ThemeChannel::new(),
        }
    }

    pub fn root(&self) -> impl Element {
        let theme = &self.theme;
        El::new()
            .s(Width::fill())
            .s(Height::screen())
            .s(Scrollbars::both())
            .s(Font::new()
                .family(font_sans())
                .color_signal(neutral_12(theme)))
            .s(Background::new().color_signal(neutral_1(theme)))
            .child(
                Column::new()
                    .s(Width::fill())
                    .item(crate::header::header(theme))
                    .item(crate::hero::hero(theme))
                    .item(crate::payment_flow::payment_flow(theme))
                    .item(crate::features::features(theme))
                    .item(crate::tools::tools(theme))
                    .item(crate::recurring::recurring(theme))
                    .item(crate::webhooks::webhooks(theme))
                    .item(crate::footer::footer(theme)),
            )
    }
}

/// Centers section content inside the page-wide column.
pub fn section(content: impl Element) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_24).y(SPACING_64))
        .child(
            El::new()
                .s(Width::fill().max(CONTENT_MAX_WIDTH))
                .s(Align::new().center_x())
                .child(content),
        )
}

/// Centered heading and supporting line used by every animated section.
pub fn section_heading(
    theme: &ThemeChannel,
    title: &str,
    subtitle: &str,
) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_12))
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Font::new()
                    .size(FONT_SIZE_32)
                    .weight(FontWeight::Bold)
                    .color_signal(neutral_12(theme)))
                .child(title),
        )
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Font::new()
                    .size(FONT_SIZE_18)
                    .color_signal(neutral_8(theme))
                    .center())
                .child(subtitle),
        )
}
