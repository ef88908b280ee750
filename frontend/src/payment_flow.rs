//! Payment flow section: the step sequencer plus the acquirer carousel.
//!
//! One Actor owns the step index and advances it on the per-step timers;
//! a second Actor owns the carousel index and only ticks while the
//! acquirer-selection step is displayed. Both loops die with the element
//! through `after_remove`, so a pending timer never mutates a torn-down
//! section.

use crate::app::{section, section_heading};
use crate::dataflow::Actor;
use crate::theme::ThemeChannel;
use crate::tokens::*;
use shared::catalog::{self, ACQUIRER_ROTATION_MS, ACQUIRER_STEP};
use shared::cycle::{StepCycle, drive_cycle, drive_rotation};
use zoon::*;

pub fn payment_flow(theme: &ThemeChannel) -> impl Element {
    let cycle = catalog::payment_flow_cycle();

    let step_actor = {
        let cycle = cycle.clone();
        Actor::new(0usize, async move |state| {
            drive_cycle(&cycle, Timer::sleep, move |index| state.set_neq(index)).await;
        })
    };

    let rotation_actor = {
        let steps = step_actor.signal().to_stream().fuse();
        Actor::new(0usize, async move |state| {
            drive_rotation(
                catalog::acquirers().len(),
                ACQUIRER_STEP,
                ACQUIRER_ROTATION_MS,
                steps,
                Timer::sleep,
                move |index| state.set_neq(index),
            )
            .await;
        })
    };

    let step_signal = step_actor.signal();
    let stage_step_signal = step_actor.signal();
    let rotation_signal = rotation_actor.signal();

    section(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_48))
            .item(section_heading(
                theme,
                "Fluxo de Pagamento Inteligente",
                "Acompanhe cada etapa da transação, da entrada do pagamento à aprovação",
            ))
            .item(step_cards(theme, cycle.clone(), step_signal))
            .item(stage(theme, stage_step_signal, rotation_signal))
            .item(progress_markers(theme, cycle.len(), step_actor.signal())),
    )
    .after_remove(move |_| {
        drop(step_actor);
        drop(rotation_actor);
    })
}

fn step_cards(
    theme: &ThemeChannel,
    cycle: StepCycle,
    step_signal: impl Signal<Item = usize> + 'static,
) -> impl Element {
    let step_index = Broadcaster::new(step_signal);
    Row::new()
        .s(Width::fill())
        .s(Gap::new().x(SPACING_16))
        .items(
            cycle
                .steps()
                .to_vec()
                .into_iter()
                .enumerate()
                .map(|(index, step)| {
                    let active = step_index.signal_ref(move |current| *current == index);
                    step_card(theme, index, step.label, step.detail, active)
                }),
        )
}

fn step_card(
    theme: &ThemeChannel,
    index: usize,
    label: String,
    detail: String,
    active: impl Signal<Item = bool> + 'static,
) -> impl Element {
    let active = Broadcaster::new(active);
    let border_color = map_ref! {
        let active = active.signal(),
        let accent = primary_7(theme),
        let subtle = neutral_4(theme) =>
        if *active { *accent } else { *subtle }
    };
    let background = map_ref! {
        let active = active.signal(),
        let raised = primary_2(theme),
        let surface = neutral_2(theme) =>
        if *active { *raised } else { *surface }
    };
    Column::new()
        .s(Width::fill())
        .s(Padding::all(SPACING_16))
        .s(Gap::new().y(SPACING_8))
        .s(RoundedCorners::all(CORNER_RADIUS_12))
        .s(Background::new().color_signal(background))
        .s(Borders::all_signal(
            border_color.map(|color| Border::new().width(1).color(color)),
        ))
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_12)
                    .weight(FontWeight::Bold)
                    .color_signal(primary_7(theme)))
                .child(format!("{:02}", index + 1)),
        )
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_16)
                    .weight(FontWeight::SemiBold)
                    .color_signal(neutral_12(theme)))
                .child(label),
        )
        .item(
            El::new()
                .s(Font::new().size(FONT_SIZE_14).color_signal(neutral_8(theme)))
                .child(detail),
        )
}

/// Center panel swapped per step: payment entry, the acquirer carousel,
/// antifraud checks, final approval.
fn stage(
    theme: &ThemeChannel,
    step_signal: impl Signal<Item = usize> + 'static,
    rotation_signal: impl Signal<Item = usize> + 'static,
) -> impl Element {
    let rotation = Broadcaster::new(rotation_signal);
    let theme = theme.clone();
    El::new()
        .s(Width::fill())
        .s(Height::exact(220))
        .s(Padding::all(SPACING_24))
        .s(RoundedCorners::all(CORNER_RADIUS_12))
        .s(Background::new().color_signal(neutral_2(&theme)))
        .child_signal(step_signal.map(move |step| match step {
            0 => payment_entry(&theme).unify(),
            1 => acquirer_carousel(&theme, rotation.signal()).unify(),
            2 => antifraud_checks(&theme).unify(),
            _ => approval(&theme).unify(),
        }))
}

fn payment_entry(theme: &ThemeChannel) -> impl Element {
    Row::new()
        .s(Align::center())
        .s(Gap::new().x(SPACING_24))
        .items(catalog::payment_methods().into_iter().map(|method| {
            Column::new()
                .s(Padding::all(SPACING_16))
                .s(Gap::new().y(SPACING_8))
                .s(RoundedCorners::all(CORNER_RADIUS_8))
                .s(Background::new().color_signal(neutral_3(theme)))
                .item(
                    El::new()
                        .s(Align::new().center_x())
                        .s(Font::new().size(FONT_SIZE_24))
                        .child(method.glyph),
                )
                .item(
                    El::new()
                        .s(Font::new()
                            .size(FONT_SIZE_14)
                            .color_signal(neutral_10(theme)))
                        .child(method.name),
                )
        }))
}

fn acquirer_carousel(
    theme: &ThemeChannel,
    rotation_signal: impl Signal<Item = usize> + 'static,
) -> impl Element {
    let rotation = Broadcaster::new(rotation_signal);
    Row::new()
        .s(Align::center())
        .s(Gap::new().x(SPACING_12))
        .items(
            catalog::acquirers()
                .into_iter()
                .enumerate()
                .map(|(index, acquirer)| {
                    let highlighted = rotation.signal_ref(move |current| *current == index);
                    let highlighted = Broadcaster::new(highlighted);
                    let background = map_ref! {
                        let highlighted = highlighted.signal(),
                        let accent = primary_2(theme),
                        let surface = neutral_3(theme) =>
                        if *highlighted { *accent } else { *surface }
                    };
                    Column::new()
                        .s(Padding::all(SPACING_12))
                        .s(Gap::new().y(SPACING_4))
                        .s(RoundedCorners::all(CORNER_RADIUS_8))
                        .s(Background::new().color_signal(background))
                        .item(
                            El::new()
                                .s(Align::new().center_x())
                                .s(Font::new().size(FONT_SIZE_20))
                                .child(acquirer.glyph),
                        )
                        .item(
                            El::new()
                                .s(Font::new()
                                    .size(FONT_SIZE_12)
                                    .weight(FontWeight::Medium)
                                    .color_signal(neutral_10(theme)))
                                .child(acquirer.name),
                        )
                }),
        )
}

fn antifraud_checks(theme: &ThemeChannel) -> impl Element {
    Row::new()
        .s(Align::center())
        .s(Gap::new().x(SPACING_24))
        .items(catalog::fraud_providers().into_iter().map(|provider| {
            Row::new()
                .s(Padding::all(SPACING_16))
                .s(Gap::new().x(SPACING_8))
                .s(RoundedCorners::all(CORNER_RADIUS_8))
                .s(Background::new().color_signal(neutral_3(theme)))
                .item(El::new().s(Font::new().size(FONT_SIZE_20)).child(provider.glyph))
                .item(
                    El::new()
                        .s(Font::new()
                            .size(FONT_SIZE_14)
                            .weight(FontWeight::Medium)
                            .color_signal(neutral_10(theme)))
                        .child(provider.name),
                )
        }))
}

fn approval(theme: &ThemeChannel) -> impl Element {
    Column::new()
        .s(Align::center())
        .s(Gap::new().y(SPACING_12))
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Font::new().size(FONT_SIZE_48).color_signal(success_7(theme)))
                .child("✓"),
        )
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Font::new()
                    .size(FONT_SIZE_16)
                    .weight(FontWeight::SemiBold)
                    .color_signal(neutral_12(theme)))
                .child("Transação concluída com sucesso"),
        )
        .item(
            Row::new()
                .s(Align::new().center_x())
                .s(Gap::new().x(SPACING_24))
                .items(catalog::approval_metrics().into_iter().map(|metric| {
                    Column::new()
                        .s(Gap::new().y(SPACING_4))
                        .item(
                            El::new()
                                .s(Align::new().center_x())
                                .s(Font::new()
                                    .size(FONT_SIZE_16)
                                    .weight(FontWeight::Bold)
                                    .color_signal(primary_7(theme)))
                                .child(metric.value),
                        )
                        .item(
                            El::new()
                                .s(Font::new()
                                    .size(FONT_SIZE_12)
                                    .color_signal(neutral_8(theme)))
                                .child(metric.label),
                        )
                })),
        )
}

fn progress_markers(
    theme: &ThemeChannel,
    count: usize,
    step_signal: impl Signal<Item = usize> + 'static,
) -> impl Element {
    let step_index = Broadcaster::new(step_signal);
    Row::new()
        .s(Align::new().center_x())
        .s(Gap::new().x(SPACING_8))
        .items((0..count).map(|index| {
            let active = step_index.signal_ref(move |current| *current == index);
            let active = Broadcaster::new(active);
            let color = map_ref! {
                let active = active.signal(),
                let accent = primary_7(theme),
                let subtle = neutral_4(theme) =>
                if *active { *accent } else { *subtle }
            };
            El::new()
                .s(Width::exact(10))
                .s(Height::exact(10))
                .s(RoundedCorners::all_max())
                .s(Background::new().color_signal(color))
        }))
}
