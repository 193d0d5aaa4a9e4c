use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::account::Account;
use crate::domain::common::{Displayable, Identifiable, NamedEntity};
use crate::domain::investment::Investment;
use crate::domain::transaction::Transaction;
use crate::errors::FinanceError;

/// A client aggregating owned accounts and investments. Ownership is
/// exclusive: entities are stored inline and addressed by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub investments: Vec<Investment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Client {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            accounts: Vec::new(),
            investments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Opens a new empty account and returns its id.
    pub fn add_account(&mut self, name: impl Into<String>) -> Uuid {
        let account = Account::new(name);
        let id = account.id;
        self.accounts.push(account);
        self.touch();
        id
    }

    /// Registers a pre-constructed investment and returns its id.
    pub fn add_investment(&mut self, investment: Investment) -> Uuid {
        let id = investment.id;
        self.investments.push(investment);
        self.touch();
        id
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn account_mut(&mut self, id: Uuid) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    pub fn investment(&self, id: Uuid) -> Option<&Investment> {
        self.investments.iter().find(|investment| investment.id == id)
    }

    /// Records a transaction on one of the owned accounts.
    pub fn record_transaction(
        &mut self,
        account_id: Uuid,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<&Transaction, FinanceError> {
        let index = self
            .accounts
            .iter()
            .position(|account| account.id == account_id)
            .ok_or_else(|| FinanceError::InvalidRef(format!("account `{account_id}` not found")))?;
        self.touch();
        Ok(self.accounts[index].add_transaction(amount, category, description))
    }

    /// Liquidates an owned investment into one of the owned accounts and
    /// returns the proceeds. The investment record stays registered.
    pub fn sell_investment(
        &mut self,
        investment_id: Uuid,
        account_id: Uuid,
    ) -> Result<f64, FinanceError> {
        let investment = self
            .investments
            .iter()
            .find(|investment| investment.id == investment_id)
            .ok_or_else(|| {
                FinanceError::InvalidRef(format!("investment `{investment_id}` not found"))
            })?;
        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.id == account_id)
            .ok_or_else(|| FinanceError::InvalidRef(format!("account `{account_id}` not found")))?;
        let value = investment.sell(account);
        self.touch();
        Ok(value)
    }

    /// Sum of account balances plus the accrued value of every investment
    /// as of now.
    pub fn net_worth(&self) -> f64 {
        self.net_worth_at(Utc::now())
    }

    /// Net worth with investments valued at an explicit reference instant.
    pub fn net_worth_at(&self, reference: DateTime<Utc>) -> f64 {
        let accounts_total: f64 = self.accounts.iter().map(|account| account.balance).sum();
        let investments_total: f64 = self
            .investments
            .iter()
            .map(|investment| investment.value_at(reference))
            .sum();
        accounts_total + investments_total
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Identifiable for Client {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Client {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Client {
    fn display_label(&self) -> String {
        format!(
            "{} ({} contas, {} investimentos)",
            self.name,
            self.accounts.len(),
            self.investments.len()
        )
    }
}
