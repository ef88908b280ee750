//! Seedable mock-data generator.
//!
//! The webhook section synthesizes a fresh fake transaction at the start of
//! every delivery cycle. All randomness goes through [`MockGenerator`] so the
//! app can seed it from the wall clock while tests seed it with a constant
//! and get reproducible output.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::feed::MockTransaction;

/// Fixed pool of sample customer names.
pub const CUSTOMERS: [&str; 4] = ["João Silva", "Maria Santos", "Pedro Costa", "Ana Oliveira"];

/// Fixed pool of sample payment methods.
pub const METHODS: [&str; 3] = ["Cartão de Crédito", "PIX", "Débito"];

pub struct MockGenerator {
    rng: SmallRng,
}

impl MockGenerator {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// `TX` followed by three digits, e.g. `TX042`.
    pub fn transaction_id(&mut self) -> String {
        format!("TX{:03}", self.rng.gen_range(0..1000))
    }

    /// Amount between R$ 50,00 and R$ 1050,00, Brazilian decimal comma.
    pub fn amount(&mut self) -> String {
        let amount = self.rng.gen_range(50.0..1050.0_f64);
        format!("R$ {:.2}", amount).replace('.', ",")
    }

    pub fn customer(&mut self) -> String {
        self.pick(&CUSTOMERS).to_string()
    }

    pub fn method(&mut self) -> String {
        self.pick(&METHODS).to_string()
    }

    /// A complete fake transaction stamped with the caller's clock reading.
    pub fn transaction(&mut self, started_at: String) -> MockTransaction {
        MockTransaction {
            id: self.transaction_id(),
            amount: self.amount(),
            customer: self.customer(),
            method: self.method(),
            started_at,
        }
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.gen_range(0..items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_transactions() {
        let mut a = MockGenerator::seeded(42);
        let mut b = MockGenerator::seeded(42);
        for _ in 0..10 {
            assert_eq!(
                a.transaction("10:00:00".into()),
                b.transaction("10:00:00".into())
            );
        }
    }

    #[test]
    fn transaction_fields_stay_within_their_pools() {
        let mut generator = MockGenerator::seeded(7);
        for _ in 0..50 {
            let tx = generator.transaction("10:00:00".into());
            assert_eq!(tx.id.len(), 5);
            assert!(tx.id.starts_with("TX"));
            assert!(tx.id[2..].chars().all(|c| c.is_ascii_digit()));
            assert!(CUSTOMERS.contains(&tx.customer.as_str()));
            assert!(METHODS.contains(&tx.method.as_str()));

            let cents: f64 = tx
                .amount
                .trim_start_matches("R$ ")
                .replace(',', ".")
                .parse()
                .unwrap();
            assert!((50.0..1050.0).contains(&cents));
        }
    }
}
