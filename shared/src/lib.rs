use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod cycle;
pub mod feed;
pub mod generator;

pub use cycle::{Rotation, Step, StepCycle, StepCycleError};
pub use feed::{DeliveredWebhook, MockTransaction, WebhookFeed};
pub use generator::MockGenerator;

// ===== MESSAGE TYPES =====

/// The landing page opens no connection; this exists so the Moon handler has
/// a concrete message type and stray traffic can be logged and dropped.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum UpMsg {}

// ===== THEME =====

/// Payload of the theme broadcast channel.
///
/// Published by the header toggle, consumed by the adaptive logo. The logo
/// falls back to the host `prefers-color-scheme` preference until the first
/// message arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_serializes_as_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"light\"").unwrap(),
            Theme::Light
        );
    }

    #[test]
    fn theme_toggle_is_an_involution() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
