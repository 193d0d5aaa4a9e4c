//! Domain models for clients, accounts, transactions, and investments.

pub mod account;
pub mod client;
pub mod common;
pub mod investment;
pub mod transaction;

pub use account::{Account, TransactionFilter};
pub use client::Client;
pub use common::{Displayable, Identifiable, NamedEntity};
pub use investment::Investment;
pub use transaction::{Transaction, TransactionUpdate};
