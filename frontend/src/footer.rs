//! Closing call-to-action and the site footer.
//!
//! The footer logo is the one theme-channel subscriber: it consumes the
//! broadcast stream through an element-local Actor and swaps the logo
//! asset whenever a new theme arrives.

use crate::app::section;
use crate::dataflow::Actor;
use crate::theme::{Theme, ThemeChannel};
use crate::tokens::*;
use futures::StreamExt;
use shared::catalog::{LOGO_DARK_URL, LOGO_LIGHT_URL};
use zoon::*;

const FOOTER_COLUMNS: [(&str, [&str; 4]); 4] = [
    (
        "Produtos",
        ["Checkout Transparente", "Pagamentos Recorrentes", "Links de Pagamento", "Catálogo"],
    ),
    (
        "Desenvolvedores",
        ["Documentação", "Referência da API", "SDKs", "Status da Plataforma"],
    ),
    ("Empresa", ["Sobre", "Carreiras", "Blog", "Imprensa"]),
    ("Suporte", ["Central de Ajuda", "Contato", "Segurança", "Privacidade"]),
];

pub fn footer(theme: &ThemeChannel) -> impl Element {
    Column::new()
        .s(Width::fill())
        .item(call_to_action(theme))
        .item(footer_columns(theme))
}

fn call_to_action(theme: &ThemeChannel) -> impl Element {
    section(
        Column::new()
            .s(Width::fill())
            .s(Padding::all(SPACING_48))
            .s(Gap::new().y(SPACING_24))
            .s(RoundedCorners::all(CORNER_RADIUS_16))
            .s(Background::new().color_signal(neutral_2(theme)))
            .item(
                El::new()
                    .s(Align::new().center_x())
                    .s(Font::new()
                        .size(FONT_SIZE_32)
                        .weight(FontWeight::Bold)
                        .color_signal(neutral_12(theme)))
                    .child("Ready to Start Building?"),
            )
            .item(
                El::new()
                    .s(Align::new().center_x())
                    .s(Font::new()
                        .size(FONT_SIZE_18)
                        .color_signal(neutral_10(theme))
                        .center())
                    .child("Join thousands of developers building the future of payments"),
            )
            .item(
                Row::new()
                    .s(Align::new().center_x())
                    .s(Gap::new().x(SPACING_16))
                    .item(
                        Button::new()
                            .s(Padding::new().x(SPACING_24).y(SPACING_12))
                            .s(RoundedCorners::all(CORNER_RADIUS_8))
                            .s(Background::new().color_signal(primary_7(theme)))
                            .s(Font::new()
                                .size(FONT_SIZE_16)
                                .weight(FontWeight::SemiBold)
                                .color("oklch(18% 0.02 155)"))
                            .label("Create Free Account"),
                    )
                    .item(
                        Button::new()
                            .s(Padding::new().x(SPACING_24).y(SPACING_12))
                            .s(RoundedCorners::all(CORNER_RADIUS_8))
                            .s(Borders::all_signal(
                                neutral_4(theme)
                                    .map(|color| Border::new().width(1).color(color)),
                            ))
                            .s(Font::new()
                                .size(FONT_SIZE_16)
                                .color_signal(neutral_10(theme)))
                            .label("Talk to Sales"),
                    ),
            ),
    )
}

fn footer_columns(theme: &ThemeChannel) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_24).y(SPACING_48))
        .s(Borders::new().top_signal(
            neutral_4(theme).map(|color| Border::new().width(1).color(color)),
        ))
        .child(
            Column::new()
                .s(Width::fill().max(CONTENT_MAX_WIDTH))
                .s(Align::new().center_x())
                .s(Gap::new().y(SPACING_32))
                .item(
                    Row::new()
                        .s(Width::fill())
                        .s(Gap::new().x(SPACING_48))
                        .item(
                            Column::new()
                                .s(Width::fill())
                                .s(Gap::new().y(SPACING_12))
                                .item(adaptive_logo(theme))
                                .item(
                                    El::new()
                                        .s(Font::new()
                                            .size(FONT_SIZE_14)
                                            .color_signal(neutral_8(theme)))
                                        .child("Payment infrastructure for developers"),
                                ),
                        )
                        .items(FOOTER_COLUMNS.iter().map(|(title, links)| {
                            Column::new()
                                .s(Width::fill())
                                .s(Gap::new().y(SPACING_8))
                                .item(
                                    El::new()
                                        .s(Font::new()
                                            .size(FONT_SIZE_14)
                                            .weight(FontWeight::SemiBold)
                                            .color_signal(neutral_12(theme)))
                                        .child(*title),
                                )
                                .items(links.iter().map(|link| {
                                    El::new()
                                        .s(Font::new()
                                            .size(FONT_SIZE_12)
                                            .color_signal(neutral_8(theme)))
                                        .child(*link)
                                }))
                        })),
                )
                .item(
                    El::new()
                        .s(Align::new().center_x())
                        .s(Font::new().size(FONT_SIZE_12).color_signal(neutral_8(theme)))
                        .child("© 2025 PayTools. Todos os direitos reservados."),
                ),
        )
}

/// Logo that follows theme broadcasts; it starts from the channel's
/// current value because subscribers only see publishes made after they
/// join.
fn adaptive_logo(theme: &ThemeChannel) -> impl Element {
    let mut updates = theme.subscribe();
    let logo_actor = Actor::new(theme.current(), async move |state| {
        while let Some(theme) = updates.next().await {
            state.set_neq(theme);
        }
    });

    let logo_signal = logo_actor.signal();
    El::new()
        .s(Width::exact(140))
        .child_signal(logo_signal.map(|theme| {
            Image::new()
                .s(Width::fill())
                .url(match theme {
                    Theme::Dark => LOGO_DARK_URL,
                    Theme::Light => LOGO_LIGHT_URL,
                })
                .description("PayTools")
        }))
        .after_remove(move |_| drop(logo_actor))
}
