//! Theme broadcast channel.
//!
//! The header toggle publishes [`Theme`] changes; interested elements either
//! bind to [`ThemeChannel::signal`] for styling or call
//! [`ThemeChannel::subscribe`] to consume changes as a stream (the adaptive
//! footer logo does the latter). Until the first publish, everything shows
//! the host's `prefers-color-scheme` preference.

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use std::sync::{Arc, Mutex};
use zoon::{Mutable, Signal};

pub use shared::Theme;

#[derive(Clone)]
pub struct ThemeChannel {
    current: Mutable<Theme>,
    subscribers: Arc<Mutex<Vec<UnboundedSender<Theme>>>>,
}

impl ThemeChannel {
    /// Channel seeded with the host color-scheme preference.
    pub fn new() -> Self {
        Self {
            current: Mutable::new(system_preference()),
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn current(&self) -> Theme {
        self.current.get()
    }

    pub fn signal(&self) -> impl Signal<Item = Theme> + use<> {
        self.current.signal()
    }

    /// Broadcasts `theme` to every live subscriber. Senders whose receiver
    /// side was dropped with its element are pruned here.
    pub fn publish(&self, theme: Theme) {
        self.current.set_neq(theme);
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        subscribers.retain(|sender| sender.unbounded_send(theme).is_ok());
    }

    /// Registers a subscriber; only publishes after this call are delivered,
    /// so new subscribers read [`ThemeChannel::current`] for their starting
    /// value.
    pub fn subscribe(&self) -> UnboundedReceiver<Theme> {
        let (sender, receiver) = unbounded();
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(sender);
        receiver
    }

    pub fn toggle(&self) {
        self.publish(self.current().toggled());
    }
}

#[cfg(target_arch = "wasm32")]
fn system_preference() -> Theme {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: light)").ok())
        .flatten()
        .map_or(Theme::Dark, |query| {
            if query.matches() {
                Theme::Light
            } else {
                Theme::Dark
            }
        })
}

#[cfg(not(target_arch = "wasm32"))]
fn system_preference() -> Theme {
    Theme::Dark
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn subscribers_receive_publishes_in_order() {
        let channel = ThemeChannel::new();
        let mut updates = channel.subscribe();

        channel.publish(Theme::Light);
        channel.publish(Theme::Dark);

        assert_eq!(updates.next().await, Some(Theme::Light));
        assert_eq!(updates.next().await, Some(Theme::Dark));
    }

    #[tokio::test]
    async fn dropped_subscribers_are_pruned_on_publish() {
        let channel = ThemeChannel::new();
        let updates = channel.subscribe();
        drop(updates);

        channel.publish(Theme::Light);
        assert!(channel.subscribers.lock().unwrap().is_empty());
    }

    #[test]
    fn toggle_publishes_the_opposite_theme() {
        let channel = ThemeChannel::new();
        let before = channel.current();

        channel.toggle();
        assert_eq!(channel.current(), before.toggled());
    }
}
