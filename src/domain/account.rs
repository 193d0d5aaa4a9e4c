use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable, NamedEntity};
use crate::domain::transaction::Transaction;

/// A bank account holding an ordered list of transactions and a running
/// balance. Invariant: the balance equals the sum of every amount ever
/// recorded on the account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub balance: f64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Account {
    /// Creates a new account with a zero balance.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance: 0.0,
            transactions: Vec::new(),
        }
    }

    /// Records a transaction and moves the balance by its amount. Negative
    /// balances are permitted; amounts are not validated.
    pub fn add_transaction(
        &mut self,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> &Transaction {
        let transaction = Transaction::new(amount, category, description);
        tracing::debug!(account = %self.name, amount, "recording transaction");
        self.transactions.push(transaction);
        self.balance += amount;
        self.transactions.last().expect("transaction just pushed")
    }

    /// Returns the transactions satisfying every supplied filter, in
    /// insertion order. Omitted filters pass everything.
    pub fn transactions_matching(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| filter.matches(txn))
            .collect()
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        format!("{} ({} transações)", self.name, self.transactions.len())
    }
}

/// Conjunction of optional transaction predicates: a date window and an
/// exact category match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub category: Option<String>,
}

impl TransactionFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(start) = self.start_date {
            if transaction.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if transaction.date > end {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &transaction.category != category {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_account_starts_empty() {
        let account = Account::new("Conta Corrente");
        assert_eq!(account.name, "Conta Corrente");
        assert_eq!(account.balance, 0.0);
        assert!(account.transactions.is_empty());
    }

    #[test]
    fn add_transaction_returns_stored_record() {
        let mut account = Account::new("Conta Corrente");
        let description = {
            let txn = account.add_transaction(200.0, "Salary", "Salário recebido");
            txn.description.clone()
        };
        assert_eq!(description, "Salário recebido");
        assert_eq!(account.balance, 200.0);
        assert_eq!(account.transactions.len(), 1);
    }

    #[test]
    fn balance_equals_sum_of_amounts() {
        let mut account = Account::new("Conta Corrente");
        let amounts = [200.0, -50.0, -30.0, 125.5, -0.5];
        for (i, amount) in amounts.iter().enumerate() {
            account.add_transaction(*amount, "Misc", format!("movimento {i}"));
        }
        let expected: f64 = amounts.iter().sum();
        assert!((account.balance - expected).abs() < f64::EPSILON * 16.0);
    }

    #[test]
    fn negative_balances_are_permitted() {
        let mut account = Account::new("Conta Corrente");
        account.add_transaction(-500.0, "Food", "Supermercado");
        assert_eq!(account.balance, -500.0);
    }

    #[test]
    fn no_filters_returns_all_in_insertion_order() {
        let mut account = Account::new("Conta Corrente");
        account.add_transaction(200.0, "Salary", "Salário recebido");
        account.add_transaction(-50.0, "Food", "Almoço");
        account.add_transaction(-30.0, "Transport", "Uber");

        let all = account.transactions_matching(&TransactionFilter::default());
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].category, "Salary");
        assert_eq!(all[2].category, "Transport");
    }

    #[test]
    fn filters_are_combined_with_and() {
        let mut account = Account::new("Conta Corrente");
        account.add_transaction(200.0, "Salary", "Salário recebido");
        account.add_transaction(-50.0, "Food", "Almoço");
        account.add_transaction(-30.0, "Food", "Jantar");

        let first_date = account.transactions[0].date;
        let second_date = account.transactions[1].date;

        let windowed = account.transactions_matching(&TransactionFilter {
            start_date: Some(first_date - Duration::days(1)),
            end_date: Some(second_date + Duration::days(1)),
            category: None,
        });
        assert_eq!(windowed.len(), 3);

        let food_in_window = account.transactions_matching(&TransactionFilter {
            start_date: Some(second_date),
            end_date: None,
            category: Some("Food".into()),
        });
        assert_eq!(food_in_window.len(), 2);

        let none = account.transactions_matching(&TransactionFilter {
            start_date: Some(second_date + Duration::days(1)),
            end_date: None,
            category: Some("Salary".into()),
        });
        assert!(none.is_empty());
    }

    #[test]
    fn filtering_does_not_mutate_the_account() {
        let mut account = Account::new("Conta Corrente");
        account.add_transaction(200.0, "Salary", "Salário recebido");
        let before = account.clone();
        let _ = account.transactions_matching(&TransactionFilter {
            category: Some("Food".into()),
            ..TransactionFilter::default()
        });
        assert_eq!(account, before);
    }
}
