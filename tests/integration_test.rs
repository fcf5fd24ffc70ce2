use std::io::Write;

use assert_cmd::Command;
use predicates as pred;
use predicates::prelude::PredicateBooleanExt;
use tempfile::NamedTempFile;

fn commands_file(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(file, "type, amount, name, frequency, recipient, id\n{}", body).unwrap();
    file
}

#[test]
fn end_to_end_outputs_dashboard() {
    // balance: 100 + 50 - 30 = 120 (the 500 withdrawal is rejected)
    // active: Netflix 15.99 monthly + Domain 12 yearly (= 1.00); Adobe paused
    let file = commands_file(
        "deposit, 50\n\
         withdraw, 30\n\
         withdraw, 500\n\
         deposit, -5\n\
         add, 15.99, Netflix Premium, monthly, 0x1234567890abcdef1234567890abcdef12345678\n\
         add, 52.99, Adobe Creative Cloud, monthly,\n\
         add, 12, Domain, yearly,\n\
         add, 0, Broken, monthly,\n\
         toggle, , , , , 2\n\
         toggle, , , , , 42\n\
         refund, 5",
    );

    let exe = env!("CARGO_BIN_EXE_subscription_vault");
    let mut cmd = Command::new(exe);
    cmd.arg(file.path()).args(["--opening-balance", "100"]);

    cmd.assert()
        .success()
        .stdout(pred::str::contains(
            "balance,active_subscriptions,monthly_estimate,currency",
        ))
        .stdout(pred::str::contains("120.00,2,16.99,USDC"))
        .stdout(pred::str::contains("1,Netflix Premium,15.99,monthly,"))
        .stdout(pred::str::contains("2,Adobe Creative Cloud,52.99,monthly,"))
        .stdout(pred::str::contains(",false,"))
        .stdout(pred::str::contains("3,Domain,12.00,yearly,"))
        .stdout(pred::str::contains("Broken").not());
}

#[test]
fn missing_input_file_fails() {
    let exe = env!("CARGO_BIN_EXE_subscription_vault");
    Command::new(exe)
        .arg("/definitely/not/here.csv")
        .assert()
        .failure();
}

#[test]
fn negative_opening_balance_is_refused() {
    let file = commands_file("deposit, 1");
    let exe = env!("CARGO_BIN_EXE_subscription_vault");

    Command::new(exe)
        .arg(file.path())
        .arg("--opening-balance=-10")
        .assert()
        .failure()
        .stderr(pred::str::contains("negative"));
}

#[test]
fn overflowing_deposit_is_rejected_not_fatal() {
    let file = commands_file("deposit, 1
withdraw, 5");
    let exe = env!("CARGO_BIN_EXE_subscription_vault");

    Command::new(exe)
        .env_remove("RUST_LOG")
        .arg(file.path())
        .arg("--opening-balance=79228162514264337593543950335")
        .assert()
        .success()
        .stdout(pred::str::contains("79228162514264337593543950330"))
        .stderr(pred::str::contains("would overflow"));
}
