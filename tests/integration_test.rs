use assert_cmd::Command;
use predicates as pred;
use predicates::prelude::*;

fn atm() -> Command {
    Command::new(env!("CARGO_BIN_EXE_atm_console"))
}

#[test]
fn end_to_end_session_matches_walkthrough() {
    // opening 100.00, deposit 50.00 -> 150.00, withdraw 200.00 rejected,
    // withdraw 150.00 -> 0.00, then statement and exit
    let script = "Ada Lovelace\n1234\n100\n\
                  1234\n\
                  2\n50\n\
                  3\n200\n\
                  3\n150\n\
                  4\n\
                  6\n";

    atm()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(pred::str::starts_with("\n=== ATM Console ===\n"))
        .stdout(pred::str::contains("Welcome, Ada Lovelace."))
        .stdout(pred::str::contains("Deposit successful. New balance: $150.00"))
        .stdout(pred::str::contains("Insufficient funds."))
        .stdout(pred::str::contains("New balance: $0.00"))
        .stdout(
            pred::str::is_match(
                r"\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\] Failed withdrawal attempt of \$200\.00",
            )
            .unwrap(),
        )
        .stdout(
            pred::str::is_match(
                r"(?s)opening balance \$100\.00\n.*User logged in\n.*Deposited \$50\.00\n.*Failed withdrawal attempt of \$200\.00\n.*Withdrew \$150\.00\nAvailable balance: \$0\.00",
            )
            .unwrap(),
        )
        .stdout(pred::str::ends_with("Thank you for using ATM Console.\n"));
}

#[test]
fn three_failed_logins_terminate_before_menu() {
    atm()
        .write_stdin("Bob\n1111\n10\n0000\n2222\n3333\n")
        .assert()
        .success()
        .stdout(pred::str::contains("Too many failed attempts. Session terminated."))
        .stdout(pred::str::contains("Main Menu").not())
        .stdout(pred::str::contains("Thank you for using ATM Console."));
}

#[test]
fn max_pin_attempts_flag_shortens_lockout() {
    atm()
        .args(["--max-pin-attempts", "1"])
        .write_stdin("Bob\n1111\n10\n0000\n")
        .assert()
        .success()
        .stdout(pred::str::contains("Incorrect PIN").not())
        .stdout(pred::str::contains("Too many failed attempts. Session terminated."));
}

#[test]
fn closed_input_fails_without_panicking() {
    atm()
        .write_stdin("Bob\n")
        .assert()
        .failure()
        .stderr(pred::str::contains("InputClosed"))
        .stderr(pred::str::contains("panicked").not());
}

#[test]
fn verbose_logging_goes_to_stderr() {
    atm()
        .arg("-v")
        .write_stdin("Bob\n4826\n10\n4826\n6\n")
        .assert()
        .success()
        .stderr(pred::str::contains("user logged in"))
        .stdout(pred::str::contains("user logged in").not());
}
