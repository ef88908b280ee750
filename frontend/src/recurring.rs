//! Recurring payments walkthrough: a four-step cycle with staggered
//! reveals inside the first two steps.
//!
//! The step Actor runs the outer cycle; the reveal Actor re-runs its
//! stagger schedule every time the step changes, so plans and
//! subscriptions pop in one after another instead of all at once.

use crate::app::{section, section_heading};
use crate::dataflow::Actor;
use crate::theme::ThemeChannel;
use crate::tokens::*;
use shared::catalog::{self, Subscription, SubscriptionStatus};
use shared::cycle::{StepCycle, drive_cycle, drive_stagger};
use zoon::*;

pub fn recurring(theme: &ThemeChannel) -> impl Element {
    let cycle = catalog::recurring_cycle();

    let step_actor = {
        let cycle = cycle.clone();
        Actor::new(0usize, async move |state| {
            drive_cycle(&cycle, Timer::sleep, move |index| state.set_neq(index)).await;
        })
    };

    let reveal_actor = {
        let steps = step_actor.signal().to_stream().fuse();
        Actor::new(0usize, async move |state| {
            drive_stagger(
                steps,
                catalog::recurring_reveal_delays,
                Timer::sleep,
                move |count| state.set(count),
            )
            .await;
        })
    };

    let step_signal = step_actor.signal();
    let panel_step_signal = step_actor.signal();
    let reveal_signal = reveal_actor.signal();

    section(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_48))
            .item(section_heading(
                theme,
                "Pagamentos Recorrentes",
                "Da criação do plano ao controle completo das assinaturas",
            ))
            .item(
                Row::new()
                    .s(Width::fill())
                    .s(Gap::new().x(SPACING_48))
                    .item(step_list(theme, cycle.clone(), step_signal))
                    .item(panel(theme, panel_step_signal, reveal_signal)),
            ),
    )
    .after_remove(move |_| {
        drop(step_actor);
        drop(reveal_actor);
    })
}

fn step_list(
    theme: &ThemeChannel,
    cycle: StepCycle,
    step_signal: impl Signal<Item = usize> + 'static,
) -> impl Element {
    let step_index = Broadcaster::new(step_signal);
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_16))
        .items(cycle.steps().to_vec().into_iter().enumerate().map(|(index, step)| {
            let active = step_index.signal_ref(move |current| *current == index);
            let active = Broadcaster::new(active);
            let marker_color = map_ref! {
                let active = active.signal(),
                let accent = primary_7(theme),
                let subtle = neutral_4(theme) =>
                if *active { *accent } else { *subtle }
            };
            let title_color = map_ref! {
                let active = active.signal(),
                let strong = neutral_12(theme),
                let muted = neutral_8(theme) =>
                if *active { *strong } else { *muted }
            };
            Row::new()
                .s(Gap::new().x(SPACING_16))
                .item(
                    El::new()
                        .s(Width::exact(32))
                        .s(Height::exact(32))
                        .s(RoundedCorners::all_max())
                        .s(Background::new().color_signal(marker_color))
                        .s(Font::new()
                            .size(FONT_SIZE_14)
                            .weight(FontWeight::Bold)
                            .center()
                            .color("oklch(18% 0.02 155)"))
                        .child(format!("{}", index + 1)),
                )
                .item(
                    Column::new()
                        .s(Gap::new().y(SPACING_4))
                        .item(
                            El::new()
                                .s(Font::new()
                                    .size(FONT_SIZE_16)
                                    .weight(FontWeight::SemiBold)
                                    .color_signal(title_color))
                                .child(step.label),
                        )
                        .item(
                            El::new()
                                .s(Font::new()
                                    .size(FONT_SIZE_14)
                                    .color_signal(neutral_8(theme)))
                                .child(step.detail),
                        ),
                )
        }))
}

fn panel(
    theme: &ThemeChannel,
    step_signal: impl Signal<Item = usize> + 'static,
    reveal_signal: impl Signal<Item = usize> + 'static,
) -> impl Element {
    let view = map_ref! {
        let step = step_signal,
        let revealed = reveal_signal =>
        (*step, *revealed)
    };
    let theme = theme.clone();
    El::new()
        .s(Width::fill())
        .s(Height::exact(320))
        .s(Padding::all(SPACING_24))
        .s(RoundedCorners::all(CORNER_RADIUS_12))
        .s(Background::new().color_signal(neutral_2(&theme)))
        .child_signal(view.map(move |(step, revealed)| match step {
            0 => plans_panel(&theme, revealed).unify(),
            1 => subscriptions_panel(&theme, revealed).unify(),
            2 => status_panel(&theme).unify(),
            _ => control_panel(&theme).unify(),
        }))
}

/// Rows shown for a reveal counter: the panel starts empty on step entry
/// and fills one row per elapsed stagger delay, never past the row count.
fn visible_rows(revealed: usize, total: usize) -> usize {
    revealed.min(total)
}

/// Plans appear one at a time while the creation step is active.
fn plans_panel(theme: &ThemeChannel, revealed: usize) -> impl Element {
    let plans = catalog::plans();
    let visible = visible_rows(revealed, plans.len());
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_16))
        .items(plans.into_iter().take(visible).map(|plan| {
            Column::new()
                .s(Width::fill())
                .s(Padding::all(SPACING_16))
                .s(Gap::new().y(SPACING_8))
                .s(RoundedCorners::all(CORNER_RADIUS_8))
                .s(Background::new().color_signal(neutral_3(theme)))
                .item(
                    Row::new()
                        .s(Width::fill())
                        .item(
                            El::new()
                                .s(Font::new()
                                    .size(FONT_SIZE_16)
                                    .weight(FontWeight::SemiBold)
                                    .color_signal(neutral_12(theme)))
                                .child(plan.name),
                        )
                        .item(
                            El::new()
                                .s(Align::new().right())
                                .s(Font::new()
                                    .size(FONT_SIZE_16)
                                    .weight(FontWeight::Bold)
                                    .color_signal(primary_7(theme)))
                                .child(format!("{}/{}", plan.amount, plan.interval)),
                        ),
                )
                .item(
                    Row::new()
                        .s(Gap::new().x(SPACING_12))
                        .items(plan.features.into_iter().map(|feature| {
                            El::new()
                                .s(Font::new()
                                    .size(FONT_SIZE_12)
                                    .color_signal(neutral_8(theme)))
                                .child(feature)
                        })),
                )
        }))
}

/// Subscriptions stagger in from an empty list, like the plans do.
fn subscriptions_panel(theme: &ThemeChannel, revealed: usize) -> impl Element {
    let subscriptions = catalog::subscriptions();
    let visible = visible_rows(revealed, subscriptions.len());
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_12))
        .items(
            subscriptions
                .into_iter()
                .take(visible)
                .map(|subscription| subscription_row(theme, subscription)),
        )
}

fn status_panel(theme: &ThemeChannel) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_12))
        .items(
            catalog::subscriptions()
                .into_iter()
                .map(|subscription| subscription_row(theme, subscription)),
        )
}

fn control_panel(theme: &ThemeChannel) -> impl Element {
    Column::new()
        .s(Align::center())
        .s(Gap::new().y(SPACING_12))
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Font::new().size(FONT_SIZE_48).color_signal(success_7(theme)))
                .child("⚙️"),
        )
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_16)
                    .weight(FontWeight::SemiBold)
                    .color_signal(neutral_12(theme)))
                .child("Pause, reative ou cancele a qualquer momento"),
        )
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Font::new().size(FONT_SIZE_14).color_signal(neutral_8(theme)))
                .child("Tudo via API ou painel, sem planilhas"),
        )
        .item(
            Row::new()
                .s(Align::new().center_x())
                .s(Gap::new().x(SPACING_24))
                .items(catalog::recurring_metrics().into_iter().map(|metric| {
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

fn subscription_row(theme: &ThemeChannel, subscription: Subscription) -> impl Element {
    let (status_label, status_color) = match subscription.status {
        SubscriptionStatus::Active => ("ativa", success_7(theme).boxed_local()),
        SubscriptionStatus::PastDue => ("em atraso", warning_7(theme).boxed_local()),
        SubscriptionStatus::Canceled => ("cancelada", error_7(theme).boxed_local()),
    };
    Row::new()
        .s(Width::fill())
        .s(Padding::all(SPACING_12))
        .s(Gap::new().x(SPACING_12))
        .s(RoundedCorners::all(CORNER_RADIUS_8))
        .s(Background::new().color_signal(neutral_3(theme)))
        .item(
            Column::new()
                .s(Gap::new().y(SPACING_4))
                .item(
                    El::new()
                        .s(Font::new()
                            .size(FONT_SIZE_14)
                            .weight(FontWeight::SemiBold)
                            .color_signal(neutral_12(theme)))
                        .child(subscription.customer),
                )
                .item(
                    El::new()
                        .s(Font::new().size(FONT_SIZE_12).color_signal(neutral_8(theme)))
                        .child(subscription.plan),
                ),
        )
        .item(
            El::new()
                .s(Align::new().right().center_y())
                .s(Padding::new().x(SPACING_8).y(SPACING_4))
                .s(RoundedCorners::all(CORNER_RADIUS_16))
                .s(Font::new()
                    .size(FONT_SIZE_12)
                    .weight(FontWeight::Medium)
                    .color_signal(status_color))
                .child(status_label),
        )
}

#[cfg(test)]
mod tests {
    use super::visible_rows;
    use shared::catalog;

    #[test]
    fn panels_start_empty_and_fill_row_by_row() {
        let subscriptions = catalog::subscriptions().len();

        // Step entry resets the counter: nothing is visible yet.
        assert_eq!(visible_rows(0, subscriptions), 0);

        // The two stagger delays of the subscription step reveal at most two
        // of the three subscriptions before the step moves on.
        let reveals = catalog::recurring_reveal_delays(1).len();
        assert_eq!(visible_rows(reveals, subscriptions), 2);

        // A counter carried past the row count cannot overshoot.
        assert_eq!(visible_rows(10, subscriptions), subscriptions);
    }
}
