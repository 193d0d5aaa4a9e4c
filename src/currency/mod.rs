//! Text rendering for monetary amounts and monthly return rates.

/// Formats an amount in the report currency, e.g. `R$ 1234.56`. Negative
/// amounts keep the sign after the symbol (`R$ -200.00`).
pub fn format_brl(amount: f64) -> String {
    format!("R$ {:.2}", amount)
}

/// Formats a monthly rate fraction as a percentage, e.g. `0.02` → `2.00%`.
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}
