//! Webhook delivery feed.
//!
//! The webhooks section simulates one transaction at a time walking through
//! its status cycle (processing → authorized → paid) and appends a delivery
//! record for every status it passes. [`WebhookFeed`] is the pure state
//! machine; the frontend drives it on timers and supplies timestamps, so the
//! whole lifecycle is testable without a clock.

use serde::{Deserialize, Serialize};

use crate::cycle::{Step, StepCycle};

/// The fake transaction currently walking through the status cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockTransaction {
    pub id: String,
    pub amount: String,
    pub customer: String,
    pub method: String,
    pub started_at: String,
}

/// One delivered webhook: a copy of the status descriptor plus the capture
/// time and the sent flag shown in the history list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveredWebhook {
    pub status: String,
    pub detail: String,
    pub timestamp: String,
    pub sent: bool,
}

/// State of the webhook section: current transaction, current status index
/// and the append-only delivery history for this cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebhookFeed {
    states: StepCycle,
    transaction: Option<MockTransaction>,
    state_index: usize,
    history: Vec<DeliveredWebhook>,
    completed: bool,
}

impl WebhookFeed {
    pub fn new(states: StepCycle) -> Self {
        Self {
            states,
            transaction: None,
            state_index: 0,
            history: Vec::new(),
            completed: false,
        }
    }

    pub fn states(&self) -> &StepCycle {
        &self.states
    }

    pub fn transaction(&self) -> Option<&MockTransaction> {
        self.transaction.as_ref()
    }

    pub fn current_state(&self) -> &Step {
        self.states.step(self.state_index)
    }

    pub fn state_index(&self) -> usize {
        self.state_index
    }

    pub fn history(&self) -> &[DeliveredWebhook] {
        &self.history
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Starts a fresh simulated transaction and clears the delivery history.
    pub fn begin_transaction(&mut self, transaction: MockTransaction) {
        self.transaction = Some(transaction);
        self.state_index = 0;
        self.history.clear();
        self.completed = false;
    }

    /// Appends the current status to the history. Delivery is a no-op when
    /// the current status is already in the history, so the log holds at
    /// most one record per status before the next reset.
    pub fn deliver_current(&mut self, timestamp: String) {
        if self.history.len() > self.state_index {
            return;
        }
        let state = self.states.step(self.state_index);
        self.history.push(DeliveredWebhook {
            status: state.label.clone(),
            detail: state.detail.clone(),
            timestamp,
            sent: true,
        });
    }

    /// Moves to the next status; returns `false` once the final status has
    /// been reached, which marks the cycle complete so the driver can dwell
    /// and then begin a new transaction.
    pub fn advance(&mut self) -> bool {
        if self.state_index + 1 < self.states.len() {
            self.state_index += 1;
            true
        } else {
            self.completed = true;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::generator::MockGenerator;

    fn feed() -> WebhookFeed {
        WebhookFeed::new(catalog::webhook_cycle())
    }

    fn tx(generator: &mut MockGenerator) -> MockTransaction {
        generator.transaction("10:00:00".into())
    }

    #[test]
    fn one_cycle_delivers_every_status_once() {
        let mut generator = MockGenerator::seeded(1);
        let mut feed = feed();
        feed.begin_transaction(tx(&mut generator));

        loop {
            feed.deliver_current(format!("10:00:0{}", feed.history.len()));
            if !feed.advance() {
                break;
            }
        }

        assert!(feed.completed());
        assert_eq!(feed.history().len(), feed.states().len());
        let statuses: Vec<_> = feed.history().iter().map(|w| w.status.as_str()).collect();
        assert_eq!(statuses, ["PROCESSANDO", "AUTORIZADO", "PAGO"]);
        assert!(feed.history().iter().all(|w| w.sent));
    }

    #[test]
    fn history_never_exceeds_the_state_count() {
        let mut generator = MockGenerator::seeded(2);
        let mut feed = feed();
        feed.begin_transaction(tx(&mut generator));

        for _ in 0..10 {
            feed.deliver_current("10:00:00".into());
        }
        assert_eq!(feed.history().len(), 1);

        while feed.advance() {
            for _ in 0..10 {
                feed.deliver_current("10:00:00".into());
            }
        }
        assert_eq!(feed.history().len(), feed.states().len());
    }

    #[test]
    fn double_fired_deliveries_keep_one_record_per_status() {
        let mut generator = MockGenerator::seeded(5);
        let mut feed = feed();
        feed.begin_transaction(tx(&mut generator));

        // A timer firing twice per status must not repeat the current status
        // or push later statuses out of the log.
        loop {
            feed.deliver_current("10:00:00".into());
            feed.deliver_current("10:00:00".into());
            if !feed.advance() {
                break;
            }
        }

        let statuses: Vec<_> = feed.history().iter().map(|w| w.status.as_str()).collect();
        assert_eq!(statuses, ["PROCESSANDO", "AUTORIZADO", "PAGO"]);
    }

    #[test]
    fn beginning_a_transaction_resets_the_cycle() {
        let mut generator = MockGenerator::seeded(3);
        let mut feed = feed();
        feed.begin_transaction(tx(&mut generator));
        feed.deliver_current("10:00:00".into());
        feed.advance();
        feed.advance();
        feed.advance();
        assert!(feed.completed());

        feed.begin_transaction(tx(&mut generator));
        assert!(!feed.completed());
        assert!(feed.history().is_empty());
        assert_eq!(feed.current_state().label, "PROCESSANDO");
    }

    #[test]
    fn delivered_webhooks_serialize_with_snake_case_fields() {
        let webhook = DeliveredWebhook {
            status: "PAGO".into(),
            detail: "Pagamento concluído com sucesso".into(),
            timestamp: "10:00:02".into(),
            sent: true,
        };
        let json = serde_json::to_value(&webhook).unwrap();
        assert_eq!(json["status"], "PAGO");
        assert_eq!(json["sent"], true);
    }
}
