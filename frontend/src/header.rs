//! Top navigation bar with the theme toggle, the only publisher on the
//! theme channel.

use crate::dataflow::Atom;
use crate::theme::{Theme, ThemeChannel};
use crate::tokens::*;
use zoon::*;

const NAV_ITEMS: [&str; 5] = ["Products", "Developers", "Pricing", "Docs", "Support"];

pub fn header(theme: &ThemeChannel) -> impl Element {
    let menu_open = Atom::new(false);
    let menu_open_signal = Broadcaster::new(menu_open.signal());

    let expanded_menu = {
        let theme = theme.clone();
        El::new().s(Width::fill()).child_signal(
            menu_open_signal.signal().map(move |open| {
                open.then(|| expanded_nav(&theme).unify())
            }),
        )
    };

    El::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_24).y(SPACING_16))
        .s(Borders::new().bottom_signal(
            neutral_4(theme).map(|color| Border::new().width(1).color(color)),
        ))
        .child(
            Column::new()
                .s(Width::fill().max(CONTENT_MAX_WIDTH))
                .s(Align::new().center_x())
                .item(
                    Row::new()
                        .s(Width::fill())
                        .s(Gap::new().x(SPACING_32))
                        .item(wordmark(theme))
                        .item(nav(theme))
                        .item(
                            Row::new()
                                .s(Align::new().right())
                                .s(Gap::new().x(SPACING_12))
                                .item(theme_toggle(theme))
                                .item(sign_in_button(theme))
                                .item(get_started_button(theme))
                                .item(menu_button(theme, menu_open)),
                        ),
                )
                .item(expanded_menu),
        )
}

fn wordmark(theme: &ThemeChannel) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_24)
            .weight(FontWeight::Bold)
            .color_signal(primary_7(theme)))
        .child("PayTools")
}

fn nav(theme: &ThemeChannel) -> impl Element {
    Row::new()
        .s(Gap::new().x(SPACING_24))
        .items(NAV_ITEMS.iter().map(|item| nav_link(theme, item)))
}

/// Vertical nav revealed by the menu button on narrow layouts.
fn expanded_nav(theme: &ThemeChannel) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Padding::new().y(SPACING_12))
        .s(Gap::new().y(SPACING_8))
        .items(NAV_ITEMS.iter().map(|item| nav_link(theme, item)))
}

fn nav_link(theme: &ThemeChannel, item: &str) -> impl Element {
    Link::new()
        .s(Font::new()
            .size(FONT_SIZE_14)
            .color_signal(neutral_10(theme)))
        .label(item.to_owned())
        .to(format!("#{}", item.to_lowercase()))
}

fn menu_button(theme: &ThemeChannel, menu_open: Atom<bool>) -> impl Element {
    Button::new()
        .s(Padding::new().x(SPACING_12).y(SPACING_8))
        .s(RoundedCorners::all(CORNER_RADIUS_8))
        .s(Background::new().color_signal(neutral_2(theme)))
        .s(Font::new().size(FONT_SIZE_14).color_signal(neutral_10(theme)))
        .label("☰")
        .on_press(move || menu_open.toggle())
}

fn theme_toggle(theme: &ThemeChannel) -> impl Element {
    let channel = theme.clone();
    Button::new()
        .s(Padding::new().x(SPACING_12).y(SPACING_8))
        .s(RoundedCorners::all(CORNER_RADIUS_8))
        .s(Background::new().color_signal(neutral_2(theme)))
        .s(Font::new().size(FONT_SIZE_14))
        .label_signal(theme.signal().map(|theme| match theme {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }))
        .on_press(move || channel.toggle())
}

fn sign_in_button(theme: &ThemeChannel) -> impl Element {
    Button::new()
        .s(Padding::new().x(SPACING_16).y(SPACING_8))
        .s(RoundedCorners::all(CORNER_RADIUS_8))
        .s(Font::new()
            .size(FONT_SIZE_14)
            .color_signal(neutral_10(theme)))
        .label("Sign In")
}

fn get_started_button(theme: &ThemeChannel) -> impl Element {
    Button::new()
        .s(Padding::new().x(SPACING_16).y(SPACING_8))
        .s(RoundedCorners::all(CORNER_RADIUS_8))
        .s(Background::new().color_signal(primary_7(theme)))
        .s(Font::new()
            .size(FONT_SIZE_14)
            .weight(FontWeight::SemiBold)
            .color("oklch(18% 0.02 155)"))
        .label("Get Started")
}
