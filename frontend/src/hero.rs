//! Hero: headline, call-to-action buttons and the static dashboard mock.

use crate::app::section;
use crate::theme::ThemeChannel;
use crate::tokens::*;
use shared::catalog::{self, DashboardStatus};
use zoon::*;

pub fn hero(theme: &ThemeChannel) -> impl Element {
    let copy = catalog::hero();
    section(
        Row::new()
            .s(Width::fill())
            .s(Gap::new().x(SPACING_48))
            .item(
                Column::new()
                    .s(Width::fill())
                    .s(Gap::new().y(SPACING_24))
                    .s(Align::new().center_y())
                    .item(badge(theme, copy.badge.clone()))
                    .item(
                        El::new()
                            .s(Font::new()
                                .size(FONT_SIZE_48)
                                .weight(FontWeight::Bold)
                                .color_signal(neutral_12(theme)))
                            .child(&copy.title),
                    )
                    .item(
                        El::new()
                            .s(Font::new()
                                .size(FONT_SIZE_18)
                                .color_signal(neutral_10(theme)))
                            .child(&copy.subtitle),
                    )
                    .item(
                        Row::new()
                            .s(Gap::new().x(SPACING_16))
                            .item(primary_button(theme, "Start Building"))
                            .item(secondary_button(theme, "View Documentation")),
                    ),
            )
            .item(dashboard_mock(theme)),
    )
}

fn badge(theme: &ThemeChannel, label: String) -> impl Element {
    El::new()
        .s(Align::new().left())
        .s(Padding::new().x(SPACING_12).y(SPACING_4))
        .s(RoundedCorners::all(CORNER_RADIUS_16))
        .s(Background::new().color_signal(primary_2(theme)))
        .s(Font::new()
            .size(FONT_SIZE_12)
            .weight(FontWeight::Medium)
            .color_signal(primary_7(theme)))
        .child(label)
}

fn primary_button(theme: &ThemeChannel, label: &str) -> impl Element {
    Button::new()
        .s(Padding::new().x(SPACING_24).y(SPACING_12))
        .s(RoundedCorners::all(CORNER_RADIUS_8))
        .s(Background::new().color_signal(primary_7(theme)))
        .s(Font::new()
            .size(FONT_SIZE_16)
            .weight(FontWeight::SemiBold)
            .color("oklch(18% 0.02 155)"))
        .label(label)
}

fn secondary_button(theme: &ThemeChannel, label: &str) -> impl Element {
    Button::new()
        .s(Padding::new().x(SPACING_24).y(SPACING_12))
        .s(RoundedCorners::all(CORNER_RADIUS_8))
        .s(Borders::all_signal(
            neutral_4(theme).map(|color| Border::new().width(1).color(color)),
        ))
        .s(Font::new()
            .size(FONT_SIZE_16)
            .color_signal(neutral_10(theme)))
        .label(label)
}

/// Static preview of the merchant dashboard: recent transactions plus the
/// headline metrics row.
fn dashboard_mock(theme: &ThemeChannel) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Padding::all(SPACING_24))
        .s(Gap::new().y(SPACING_16))
        .s(RoundedCorners::all(CORNER_RADIUS_12))
        .s(Background::new().color_signal(neutral_2(theme)))
        .s(Borders::all_signal(
            neutral_4(theme).map(|color| Border::new().width(1).color(color)),
        ))
        .item(
            Row::new()
                .s(Width::fill())
                .item(
                    El::new()
                        .s(Font::new()
                            .size(FONT_SIZE_14)
                            .weight(FontWeight::SemiBold)
                            .color_signal(neutral_8(theme)))
                        .child("Transações Recentes"),
                )
                .item(online_indicator(theme)),
        )
        .items(
            catalog::dashboard_transactions()
                .into_iter()
                .map(|tx| transaction_row(theme, tx)),
        )
        .item(
            Row::new()
                .s(Width::fill())
                .s(Gap::new().x(SPACING_16))
                .items(catalog::dashboard_metrics().into_iter().map(|metric| {
                    Column::new()
                        .s(Width::fill())
                        .s(Gap::new().y(SPACING_4))
                        .item(
                            El::new()
                                .s(Align::new().center_x())
                                .s(Font::new()
                                    .size(FONT_SIZE_20)
                                    .weight(FontWeight::Bold)
                                    .color_signal(primary_7(theme)))
                                .child(metric.value),
                        )
                        .item(
                            El::new()
                                .s(Align::new().center_x())
                                .s(Font::new()
                                    .size(FONT_SIZE_12)
                                    .color_signal(neutral_8(theme)))
                                .child(metric.label),
                        )
                })),
        )
}

fn online_indicator(theme: &ThemeChannel) -> impl Element {
    Row::new()
        .s(Align::new().right().center_y())
        .s(Gap::new().x(SPACING_4))
        .item(
            El::new()
                .s(Width::exact(8))
                .s(Height::exact(8))
                .s(Align::new().center_y())
                .s(RoundedCorners::all_max())
                .s(Background::new().color_signal(success_7(theme))),
        )
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_12)
                    .weight(FontWeight::Medium)
                    .color_signal(success_7(theme)))
                .child("ONLINE"),
        )
}

fn transaction_row(
    theme: &ThemeChannel,
    tx: catalog::DashboardTransaction,
) -> impl Element {
    let status_color = match tx.status {
        DashboardStatus::Approved => success_7(theme).boxed_local(),
        DashboardStatus::Processing => warning_7(theme).boxed_local(),
    };
    let status_label = match tx.status {
        DashboardStatus::Approved => "aprovado",
        DashboardStatus::Processing => "processando",
    };
    Row::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_12).y(SPACING_8))
        .s(RoundedCorners::all(CORNER_RADIUS_8))
        .s(Background::new().color_signal(neutral_3(theme)))
        .s(Gap::new().x(SPACING_12))
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_14)
                    .weight(FontWeight::Medium)
                    .color_signal(neutral_12(theme)))
                .child(tx.id),
        )
        .item(
            El::new()
                .s(Font::new().size(FONT_SIZE_14).color_signal(neutral_10(theme)))
                .child(tx.amount),
        )
        .item(
            El::new()
                .s(Font::new().size(FONT_SIZE_12).color_signal(neutral_8(theme)))
                .child(tx.method),
        )
        .item(
            El::new()
                .s(Align::new().right())
                .s(Font::new()
                    .size(FONT_SIZE_12)
                    .weight(FontWeight::Medium)
                    .color_signal(status_color))
                .child(status_label),
        )
}
