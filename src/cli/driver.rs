use chrono::{Duration, Months, Utc};

use crate::cli::Formatter;
use crate::config::{Config, ConfigManager};
use crate::currency::format_brl;
use crate::domain::{Client, Displayable, Investment};
use crate::errors::FinanceError;
use crate::report::{future_value_report, generate_report};

/// Walks through a demonstration portfolio and prints the current report
/// plus a projection `projection_months` ahead.
pub fn run_cli() -> Result<(), FinanceError> {
    let config = load_config();
    let formatter = Formatter::new(config.plain_output);

    formatter.print_header("Finance Core");

    formatter.print_detail("Criando cliente...");
    let mut client = Client::new("João Silva");
    tracing::info!(client = %client.name, "building demonstration portfolio");

    formatter.print_detail("Adicionando contas...");
    let checking = client.add_account("Conta Corrente");
    let savings = client.add_account("Poupança");

    formatter.print_detail("Adicionando transações...");
    client.record_transaction(checking, 3000.0, "Salary", "Salário recebido")?;
    client.record_transaction(checking, -500.0, "Food", "Supermercado")?;
    client.record_transaction(savings, 1000.0, "Transfer", "Transferência recebida")?;
    for account in &client.accounts {
        formatter.print_detail(format!(
            "Saldo de {}: {}",
            account.name,
            format_brl(account.balance)
        ));
    }

    formatter.print_detail("Adicionando investimentos...");
    let now = Utc::now();
    client.add_investment(
        Investment::new("Ações", 2000.0, 0.015).with_purchase_date(now - Duration::days(90)),
    );
    client.add_investment(
        Investment::new("CDB", 5000.0, 0.01).with_purchase_date(now - Duration::days(180)),
    );
    for investment in &client.investments {
        formatter.print_detail(investment.display_label());
    }

    formatter.print_header("Relatório atual");
    formatter.print_info(generate_report(&client));

    formatter.print_header(format!("Projeção a {} meses", config.projection_months));
    let future_date = now + Months::new(config.projection_months);
    formatter.print_info(future_value_report(&client, future_date));

    Ok(())
}

fn load_config() -> Config {
    match ConfigManager::new().and_then(|manager| manager.load()) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(%err, "using default configuration");
            Config::default()
        }
    }
}
