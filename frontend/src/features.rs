//! Feature grid. Static content; each card tracks its own hover state
//! through an Atom.

use crate::app::{section, section_heading};
use crate::dataflow::Atom;
use crate::theme::ThemeChannel;
use crate::tokens::*;
use shared::catalog::{self, Feature};
use zoon::*;

pub fn features(theme: &ThemeChannel) -> impl Element {
    section(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_48))
            .item(section_heading(
                theme,
                "Built for Scale",
                "Everything you need to process payments reliably, from day one to IPO",
            ))
            .item(
                Row::new()
                    .s(Width::fill())
                    .s(Gap::new().x(SPACING_16))
                    .items(
                        catalog::features()
                            .into_iter()
                            .map(|feature| feature_card(theme, feature)),
                    ),
            ),
    )
}

fn feature_card(theme: &ThemeChannel, feature: Feature) -> impl Element {
    let hovered = Atom::new(false);
    let hovered_signal = Broadcaster::new(hovered.signal());

    let border_color = map_ref! {
        let hovered = hovered_signal.signal(),
        let accent = primary_7(theme),
        let subtle = neutral_4(theme) =>
        if *hovered { *accent } else { *subtle }
    };

    Column::new()
        .s(Width::fill())
        .s(Padding::all(SPACING_24))
        .s(Gap::new().y(SPACING_12))
        .s(RoundedCorners::all(CORNER_RADIUS_12))
        .s(Background::new().color_signal(neutral_2(theme)))
        .s(Borders::all_signal(
            border_color.map(|color| Border::new().width(1).color(color)),
        ))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .item(El::new().s(Font::new().size(FONT_SIZE_24)).child(feature.glyph))
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_18)
                    .weight(FontWeight::SemiBold)
                    .color_signal(neutral_12(theme)))
                .child(feature.title),
        )
        .item(
            El::new()
                .s(Font::new().size(FONT_SIZE_14).color_signal(neutral_10(theme)))
                .child(feature.description),
        )
        .item(
            Column::new()
                .s(Gap::new().y(SPACING_4))
                .items(feature.details.into_iter().map(|detail| {
                    Row::new()
                        .s(Gap::new().x(SPACING_8))
                        .item(
                            El::new()
                                .s(Font::new()
                                    .size(FONT_SIZE_12)
                                    .color_signal(success_7(theme)))
                                .child("✓"),
                        )
                        .item(
                            El::new()
                                .s(Font::new()
                                    .size(FONT_SIZE_12)
                                    .color_signal(neutral_8(theme)))
                                .child(detail),
                        )
                })),
        )
}
