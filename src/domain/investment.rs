use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::account::Account;
use crate::domain::common::{Displayable, Identifiable};

/// Days treated as one month of elapsed holding time. The projection report
/// counts calendar months instead; do not unify the two policies.
const DAYS_PER_MONTH: i64 = 30;

/// A lump-sum investment accruing monthly compound interest since purchase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Investment {
    pub id: Uuid,
    pub kind: String,
    pub initial_amount: f64,
    pub date_purchased: DateTime<Utc>,
    pub rate_of_return: f64,
}

impl Investment {
    /// Creates an investment purchased now. `rate_of_return` is a monthly
    /// fraction (0.02 = 2% per month).
    pub fn new(kind: impl Into<String>, initial_amount: f64, rate_of_return: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: kind.into(),
            initial_amount,
            date_purchased: Utc::now(),
            rate_of_return,
        }
    }

    /// Overrides the purchase date, e.g. when registering a backdated
    /// position.
    pub fn with_purchase_date(mut self, date_purchased: DateTime<Utc>) -> Self {
        self.date_purchased = date_purchased;
        self
    }

    /// Value accrued at `reference`: one compounding step per full 30-day
    /// block elapsed since purchase.
    pub fn value_at(&self, reference: DateTime<Utc>) -> f64 {
        let days_elapsed = (reference - self.date_purchased).num_days();
        let months_elapsed = days_elapsed.div_euclid(DAYS_PER_MONTH);
        self.initial_amount * (1.0 + self.rate_of_return).powi(months_elapsed as i32)
    }

    /// Value accrued as of now.
    pub fn current_value(&self) -> f64 {
        self.value_at(Utc::now())
    }

    /// Liquidates the position into `account` at its current value and
    /// returns the proceeds. The investment record itself stays behind;
    /// callers decide whether to drop it.
    pub fn sell(&self, account: &mut Account) -> f64 {
        let value = self.current_value();
        account.add_transaction(
            value,
            "Investment Sale",
            format!("Venda do investimento {}", self.kind),
        );
        value
    }
}

impl Identifiable for Investment {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Investment {
    fn display_label(&self) -> String {
        format!("{} ({:.2}% a.m.)", self.kind, self.rate_of_return * 100.0)
    }
}
