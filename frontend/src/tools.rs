//! Developer tools: tool tabs with API snippets and the multi-language
//! checkout examples. Tab selection is local UI state held in Atoms.

use crate::app::{section, section_heading};
use crate::dataflow::Atom;
use crate::theme::ThemeChannel;
use crate::tokens::*;
use shared::catalog;
use zoon::*;

pub fn tools(theme: &ThemeChannel) -> impl Element {
    section(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_64))
            .item(
                Column::new()
                    .s(Width::fill())
                    .s(Gap::new().y(SPACING_48))
                    .item(section_heading(
                        theme,
                        "Powerful Developer Tools",
                        "Everything you need to integrate payments into your application",
                    ))
                    .item(tool_tabs(theme)),
            )
            .item(
                Column::new()
                    .s(Width::fill())
                    .s(Gap::new().y(SPACING_48))
                    .item(section_heading(
                        theme,
                        "Transparent Checkout",
                        "One request to create a transaction, in the language you already use",
                    ))
                    .item(language_tabs(theme))
                    .item(assurance_cards(theme)),
            ),
    )
}

fn assurance_cards(theme: &ThemeChannel) -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Gap::new().x(SPACING_16))
        .items(catalog::assurances().into_iter().map(|assurance| {
            Column::new()
                .s(Width::fill())
                .s(Padding::all(SPACING_16))
                .s(Gap::new().y(SPACING_8))
                .s(RoundedCorners::all(CORNER_RADIUS_12))
                .s(Background::new().color_signal(neutral_2(theme)))
                .item(El::new().s(Font::new().size(FONT_SIZE_24)).child(assurance.glyph))
                .item(
                    El::new()
                        .s(Font::new()
                            .size(FONT_SIZE_16)
                            .weight(FontWeight::SemiBold)
                            .color_signal(neutral_12(theme)))
                        .child(assurance.title),
                )
                .item(
                    El::new()
                        .s(Font::new().size(FONT_SIZE_14).color_signal(neutral_8(theme)))
                        .child(assurance.detail),
                )
        }))
}

fn tool_tabs(theme: &ThemeChannel) -> impl Element {
    let selected = Atom::new(0usize);
    let selected_signal = Broadcaster::new(selected.signal());
    let tools = catalog::tools();

    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_24))
        .item(tab_row(
            theme,
            tools.iter().map(|tool| tool.name.clone()).collect(),
            selected,
            selected_signal.signal(),
        ))
        .item(El::new().s(Width::fill()).child_signal({
            let theme = theme.clone();
            selected_signal.signal().map(move |index| {
                let tool = tools[index].clone();
                Column::new()
                    .s(Width::fill())
                    .s(Gap::new().y(SPACING_12))
                    .item(
                        El::new()
                            .s(Font::new()
                                .size(FONT_SIZE_14)
                                .color_signal(neutral_10(&theme)))
                            .child(tool.description),
                    )
                    .item(code_block(&theme, tool.code))
                    .unify()
            })
        }))
}

fn language_tabs(theme: &ThemeChannel) -> impl Element {
    let selected = Atom::new(0usize);
    let selected_signal = Broadcaster::new(selected.signal());
    let samples = catalog::checkout_samples();

    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_24))
        .item(tab_row(
            theme,
            samples.iter().map(|sample| sample.language.clone()).collect(),
            selected,
            selected_signal.signal(),
        ))
        .item(El::new().s(Width::fill()).child_signal({
            let theme = theme.clone();
            selected_signal.signal().map(move |index| {
                let sample = samples[index].clone();
                Column::new()
                    .s(Width::fill())
                    .s(Gap::new().y(SPACING_12))
                    .item(
                        El::new()
                            .s(Font::new()
                                .size(FONT_SIZE_12)
                                .weight(FontWeight::Medium)
                                .color_signal(neutral_8(&theme)))
                            .child(sample.caption),
                    )
                    .item(code_block(&theme, sample.code))
                    .unify()
            })
        }))
}

/// One row of tab buttons bound to a shared selection Atom.
fn tab_row(
    theme: &ThemeChannel,
    labels: Vec<String>,
    selected: Atom<usize>,
    selected_signal: impl Signal<Item = usize> + 'static,
) -> impl Element {
    let selected_index = Broadcaster::new(selected_signal);
    Row::new()
        .s(Align::new().center_x())
        .s(Gap::new().x(SPACING_8))
        .items(labels.into_iter().enumerate().map(move |(index, label)| {
            let active = selected_index.signal_ref(move |current| *current == index);
            let active = Broadcaster::new(active);
            let background = map_ref! {
                let active = active.signal(),
                let accent = primary_2(theme),
                let surface = neutral_2(theme) =>
                if *active { *accent } else { *surface }
            };
            let font_color = map_ref! {
                let active = active.signal(),
                let accent = primary_7(theme),
                let muted = neutral_10(theme) =>
                if *active { *accent } else { *muted }
            };
            let selected = selected.clone();
            Button::new()
                .s(Padding::new().x(SPACING_16).y(SPACING_8))
                .s(RoundedCorners::all(CORNER_RADIUS_8))
                .s(Background::new().color_signal(background))
                .s(Font::new()
                    .size(FONT_SIZE_14)
                    .weight(FontWeight::Medium)
                    .color_signal(font_color))
                .label(label)
                .on_press(move || selected.set_neq(index))
        }))
}

/// Monospace snippet with preserved newlines.
pub fn code_block(theme: &ThemeChannel, code: String) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::all(SPACING_16))
        .s(RoundedCorners::all(CORNER_RADIUS_8))
        .s(Background::new().color_signal(neutral_3(theme)))
        .s(Font::new()
            .size(FONT_SIZE_12)
            .family(font_mono())
            .color_signal(neutral_10(theme)))
        .update_raw_el(|raw_el| raw_el.style("white-space", "pre-wrap"))
        .child(code)
}
