//! Textual reports over a client: current state and future projection.
//!
//! Both generators are pure functions; the `_at` variants take the
//! reference instant explicitly, the plain forms read the clock.

use chrono::{DateTime, Datelike, Utc};

use crate::currency::{format_brl, format_rate};
use crate::domain::Client;

/// Returned by [`future_value_report`] when the requested date is not in
/// the future.
pub const NON_FUTURE_DATE_MESSAGE: &str = "A data fornecida deve ser futura.";

const RULE_WIDTH: usize = 40;

/// Renders the client's accounts, transactions, investments, and net worth
/// as of now.
pub fn generate_report(client: &Client) -> String {
    generate_report_at(client, Utc::now())
}

/// Renders the current-state report with investments valued at `reference`.
pub fn generate_report_at(client: &Client, reference: DateTime<Utc>) -> String {
    let mut lines = vec![
        format!("Relatório Financeiro de {}", client.name),
        "-".repeat(RULE_WIDTH),
    ];

    lines.push(String::new());
    lines.push("Contas:".into());
    for account in &client.accounts {
        lines.push(format!(
            " - {}: Saldo {}",
            account.name,
            format_brl(account.balance)
        ));
        if !account.transactions.is_empty() {
            lines.push("   Transações:".into());
            for transaction in &account.transactions {
                lines.push(format!("     {transaction}"));
            }
        }
    }

    lines.push(String::new());
    lines.push("Investimentos:".into());
    if client.investments.is_empty() {
        lines.push(" - Nenhum investimento registrado.".into());
    } else {
        for investment in &client.investments {
            lines.push(format!(
                " - {}: Valor Atual {} (Taxa de Retorno: {})",
                investment.kind,
                format_brl(investment.value_at(reference)),
                format_rate(investment.rate_of_return)
            ));
        }
    }

    lines.push(String::new());
    lines.push("Patrimônio Líquido:".into());
    lines.push(format_brl(client.net_worth_at(reference)));

    lines.join("\n")
}

/// Projects the client's net worth to a future `date`. Account balances are
/// carried as-is; each investment is projected from its original principal
/// over the calendar-month distance to `date`. A non-future date yields the
/// sentinel string [`NON_FUTURE_DATE_MESSAGE`] rather than an error.
pub fn future_value_report(client: &Client, date: DateTime<Utc>) -> String {
    future_value_report_at(client, date, Utc::now())
}

/// Projection report with the "now" boundary supplied explicitly.
pub fn future_value_report_at(
    client: &Client,
    date: DateTime<Utc>,
    reference: DateTime<Utc>,
) -> String {
    if date <= reference {
        return NON_FUTURE_DATE_MESSAGE.into();
    }
    // Calendar-month distance, day-of-month ignored. Not the elapsed-days/30
    // rule of Investment::value_at; do not unify the two.
    let months_to_date = calendar_months_between(reference, date);

    let mut lines = vec![
        format!(
            "Projeção Financeira de {} para {}",
            client.name,
            date.format("%d/%m/%Y")
        ),
        "-".repeat(RULE_WIDTH),
    ];

    lines.push(String::new());
    lines.push("Projeção de Contas:".into());
    for account in &client.accounts {
        lines.push(format!(
            " - {}: Saldo Atual {}",
            account.name,
            format_brl(account.balance)
        ));
    }

    lines.push(String::new());
    lines.push("Projeção de Investimentos:".into());
    if client.investments.is_empty() {
        lines.push(" - Nenhum investimento registrado.".into());
    } else {
        for investment in &client.investments {
            lines.push(format!(
                " - {}: Valor Projetado {} (Taxa de Retorno: {})",
                investment.kind,
                format_brl(projected_value(
                    investment.initial_amount,
                    investment.rate_of_return,
                    months_to_date
                )),
                format_rate(investment.rate_of_return)
            ));
        }
    }

    let accounts_total: f64 = client.accounts.iter().map(|account| account.balance).sum();
    let investments_total: f64 = client
        .investments
        .iter()
        .map(|investment| {
            projected_value(
                investment.initial_amount,
                investment.rate_of_return,
                months_to_date,
            )
        })
        .sum();

    lines.push(String::new());
    lines.push("Patrimônio Líquido Projetado:".into());
    lines.push(format_brl(accounts_total + investments_total));

    lines.join("\n")
}

fn projected_value(initial_amount: f64, rate_of_return: f64, months: i32) -> f64 {
    initial_amount * (1.0 + rate_of_return).powi(months)
}

/// Signed month count from `a` to `b` using year/month indices only.
fn calendar_months_between(a: DateTime<Utc>, b: DateTime<Utc>) -> i32 {
    (b.year() - a.year()) * 12 + (b.month() as i32 - a.month() as i32)
}
