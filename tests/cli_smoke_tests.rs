use assert_cmd::Command;
use predicates::str::contains;

const BIN_NAME: &str = "finance_core_cli";

#[test]
fn driver_prints_report_and_projection() {
    Command::cargo_bin(BIN_NAME)
        .expect("binary exists")
        .assert()
        .success()
        .stdout(contains("Relatório Financeiro de João Silva"))
        .stdout(contains("Projeção Financeira de João Silva"))
        .stdout(contains("Patrimônio Líquido:"))
        .stdout(contains("Patrimônio Líquido Projetado:"));
}

#[test]
fn driver_lists_seeded_accounts() {
    Command::cargo_bin(BIN_NAME)
        .expect("binary exists")
        .assert()
        .success()
        .stdout(contains("Conta Corrente"))
        .stdout(contains("Poupança"))
        .stdout(contains("Saldo de Conta Corrente: R$ 2500.00"));
}
