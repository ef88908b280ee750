//! Webhook delivery simulation.
//!
//! One Actor owns the whole `WebhookFeed`: its loop starts a fresh mock
//! transaction, sleeps through each status for that status's duration,
//! records a delivery, and after the final status dwells briefly before
//! starting over. Timestamps come from the host clock at delivery time.

use crate::app::{section, section_heading};
use crate::dataflow::Actor;
use crate::theme::ThemeChannel;
use crate::tokens::*;
use crate::tools::code_block;
use shared::catalog::{self, WEBHOOK_COMPLETED_DWELL_MS};
use shared::{MockGenerator, WebhookFeed};
use zoon::*;

pub fn webhooks(theme: &ThemeChannel) -> impl Element {
    let feed_actor = Actor::new(
        WebhookFeed::new(catalog::webhook_cycle()),
        async move |state| {
            let mut generator = MockGenerator::seeded(js_sys::Date::now() as u64);
            loop {
                let transaction = generator.transaction(clock_time());
                state.update_mut(|feed| feed.begin_transaction(transaction));
                loop {
                    let duration_ms = state.lock_ref().current_state().duration_ms;
                    Timer::sleep(duration_ms).await;
                    state.update_mut(|feed| feed.deliver_current(clock_time()));
                    let advanced = state.lock_mut().advance();
                    if !advanced {
                        break;
                    }
                }
                Timer::sleep(WEBHOOK_COMPLETED_DWELL_MS).await;
            }
        },
    );

    let transaction_signal = feed_actor.signal();
    let history_signal = feed_actor.signal();

    section(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_48))
            .item(section_heading(
                theme,
                "Webhooks em Tempo Real",
                "Receba cada mudança de status da transação direto na sua aplicação",
            ))
            .item(
                Row::new()
                    .s(Width::fill())
                    .s(Gap::new().x(SPACING_48))
                    .item(configuration(theme))
                    .item(
                        Column::new()
                            .s(Width::fill())
                            .s(Gap::new().y(SPACING_16))
                            .item(transaction_card(theme, transaction_signal))
                            .item(delivery_log(theme, history_signal)),
                    ),
            ),
    )
    .after_remove(move |_| drop(feed_actor))
}

#[cfg(target_arch = "wasm32")]
fn clock_time() -> String {
    js_sys::Date::new_0().to_locale_time_string("pt-BR").into()
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_time() -> String {
    String::new()
}

fn configuration(theme: &ThemeChannel) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_16))
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_16)
                    .weight(FontWeight::SemiBold)
                    .color_signal(neutral_12(theme)))
                .child("Configuração do Endpoint"),
        )
        .item(code_block(theme, catalog::webhook_config_example()))
        .item(
            Column::new()
                .s(Gap::new().y(SPACING_8))
                .items(catalog::webhook_cycle().steps().iter().map(|state| {
                    Row::new()
                        .s(Gap::new().x(SPACING_8))
                        .item(
                            El::new()
                                .s(Width::exact(8))
                                .s(Height::exact(8))
                                .s(Align::new().center_y())
                                .s(RoundedCorners::all_max())
                                .s(Background::new().color_signal(primary_7(theme))),
                        )
                        .item(
                            El::new()
                                .s(Font::new()
                                    .size(FONT_SIZE_12)
                                    .color_signal(neutral_8(theme)))
                                .child(format!("{} · {}", state.label, state.detail)),
                        )
                })),
        )
}

/// The transaction currently walking the status cycle.
fn transaction_card(
    theme: &ThemeChannel,
    feed_signal: impl Signal<Item = WebhookFeed> + 'static,
) -> impl Element {
    let theme = theme.clone();
    El::new()
        .s(Width::fill())
        .child_signal(feed_signal.map(move |feed| {
            let Some(transaction) = feed.transaction().cloned() else {
                return El::new()
                    .s(Font::new().size(FONT_SIZE_14).color_signal(neutral_8(&theme)))
                    .child("Aguardando transação...")
                    .unify();
            };
            let state_index = feed.state_index();
            let states = feed.states().clone();
            Column::new()
                .s(Width::fill())
                .s(Padding::all(SPACING_16))
                .s(Gap::new().y(SPACING_12))
                .s(RoundedCorners::all(CORNER_RADIUS_12))
                .s(Background::new().color_signal(neutral_2(&theme)))
                .s(Borders::all_signal(
                    neutral_4(&theme).map(|color| Border::new().width(1).color(color)),
                ))
                .item(
                    Row::new()
                        .s(Width::fill())
                        .s(Gap::new().x(SPACING_12))
                        .item(
                            El::new()
                                .s(Font::new()
                                    .size(FONT_SIZE_16)
                                    .weight(FontWeight::Bold)
                                    .color_signal(neutral_12(&theme)))
                                .child(transaction.id),
                        )
                        .item(
                            El::new()
                                .s(Align::new().right())
                                .s(Font::new()
                                    .size(FONT_SIZE_16)
                                    .weight(FontWeight::SemiBold)
                                    .color_signal(primary_7(&theme)))
                                .child(transaction.amount),
                        ),
                )
                .item(
                    El::new()
                        .s(Font::new().size(FONT_SIZE_14).color_signal(neutral_10(&theme)))
                        .child(format!(
                            "{} · {} · {}",
                            transaction.customer, transaction.method, transaction.started_at,
                        )),
                )
                .item(
                    Row::new()
                        .s(Gap::new().x(SPACING_8))
                        .items(states.steps().iter().enumerate().map(|(index, state)| {
                            let reached = index <= state_index;
                            let color = if reached {
                                primary_7(&theme).boxed_local()
                            } else {
                                neutral_8(&theme).boxed_local()
                            };
                            El::new()
                                .s(Padding::new().x(SPACING_8).y(SPACING_4))
                                .s(RoundedCorners::all(CORNER_RADIUS_16))
                                .s(Font::new()
                                    .size(FONT_SIZE_12)
                                    .weight(FontWeight::Medium)
                                    .color_signal(color))
                                .child(state.label.clone())
                        })),
                )
                .unify()
        }))
}

/// Append-only list of webhook deliveries for the current cycle.
fn delivery_log(
    theme: &ThemeChannel,
    feed_signal: impl Signal<Item = WebhookFeed> + 'static,
) -> impl Element {
    let theme = theme.clone();
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_8))
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_14)
                    .weight(FontWeight::SemiBold)
                    .color_signal(neutral_8(&theme)))
                .child("Webhooks Entregues"),
        )
        .item(El::new().s(Width::fill()).child_signal({
            let theme = theme.clone();
            feed_signal.map(move |feed| {
                Column::new()
                    .s(Width::fill())
                    .s(Gap::new().y(SPACING_8))
                    .items(feed.history().iter().map(|webhook| {
                        Row::new()
                            .s(Width::fill())
                            .s(Padding::all(SPACING_12))
                            .s(Gap::new().x(SPACING_12))
                            .s(RoundedCorners::all(CORNER_RADIUS_8))
                            .s(Background::new().color_signal(neutral_3(&theme)))
                            .item(
                                El::new()
                                    .s(Font::new()
                                        .size(FONT_SIZE_12)
                                        .weight(FontWeight::Bold)
                                        .color_signal(success_7(&theme)))
                                    .child(webhook.status.clone()),
                            )
                            .item(
                                El::new()
                                    .s(Font::new()
                                        .size(FONT_SIZE_12)
                                        .color_signal(neutral_10(&theme)))
                                    .child(webhook.detail.clone()),
                            )
                            .item(
                                El::new()
                                    .s(Align::new().right())
                                    .s(Font::new()
                                        .size(FONT_SIZE_12)
                                        .color_signal(neutral_8(&theme)))
                                    .child(format!("{} ✓", webhook.timestamp)),
                            )
                    }))
                    .unify()
            })
        }))
}
