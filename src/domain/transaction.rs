use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::format_brl;
use crate::domain::common::{Displayable, Identifiable};

/// A monetary movement recorded against an account.
///
/// The timestamp is fixed at construction; later adjustments go through
/// [`Transaction::update`] with an explicit list of field changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub category: String,
    pub description: String,
}

impl Transaction {
    /// Creates a transaction stamped with the current time.
    pub fn new(amount: f64, category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            date: Utc::now(),
            category: category.into(),
            description: description.into(),
        }
    }

    /// Applies a batch of field changes. The updatable fields form a closed
    /// set; the identifier never changes.
    pub fn update(&mut self, changes: impl IntoIterator<Item = TransactionUpdate>) {
        for change in changes {
            match change {
                TransactionUpdate::Amount(amount) => self.amount = amount,
                TransactionUpdate::Date(date) => self.date = date,
                TransactionUpdate::Category(category) => self.category = category,
                TransactionUpdate::Description(description) => self.description = description,
            }
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transação: {} {} ({})",
            self.description,
            format_brl(self.amount),
            self.category
        )
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        self.to_string()
    }
}

/// A single field change accepted by [`Transaction::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionUpdate {
    Amount(f64),
    Date(DateTime<Utc>),
    Category(String),
    Description(String),
}
