//! E2E tests for the breakdown and rates commands

use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "--"].iter().copied().chain(args.iter().copied()))
        .output()
        .expect("Failed to execute command")
}

/// Default inputs match the reference scenario: 35 000 ₽/month take-home.
#[test]
fn breakdown_defaults() {
    let output = run(&["breakdown"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("Take-home pay"));
    assert!(stdout.contains("35 000 ₽/month"));
    assert!(stdout.contains("420 000 ₽/year"));
    // Total taxes: 207 587 ₽/year, 17 299 ₽/month.
    assert!(stdout.contains("17 299 ₽/month"));
    assert!(stdout.contains("207 587 ₽/year"));
}

#[test]
fn breakdown_details_table() {
    let output = run(&["breakdown", "--details"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("Gross contract salary"));
    assert!(stdout.contains("Personal income tax (NDFL)"));
    assert!(stdout.contains("Pension fund (PFR)"));
    assert!(stdout.contains("Social insurance (FSS)"));
    assert!(stdout.contains("Medical insurance (FOMS)"));

    // Annual figures from the reference scenario
    assert!(stdout.contains("482 759 ₽"));
    assert!(stdout.contains("106 207 ₽"));
    assert!(stdout.contains("14 000 ₽"));
    assert!(stdout.contains("24 621 ₽"));
    assert!(stdout.contains("62 759 ₽"));

    assert!(stdout.contains("Total taxes are 49% of take-home pay"));
}

#[test]
fn breakdown_json() {
    let output = run(&["breakdown", "--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON output");
    assert_eq!(value["annual_net_income"], "420000");
    assert_eq!(value["annual_gross_income"], "482759");
    assert_eq!(value["total_tax"], "207587");
    assert_eq!(value["total_tax_percent_of_net"], "49");
}

#[test]
fn breakdown_custom_rates() {
    let output = run(&[
        "breakdown",
        "--monthly-income",
        "100000",
        "--pension-rate",
        "22",
        "--social-rate",
        "0",
        "--json",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON output");
    assert_eq!(value["annual_net_income"], "1200000");
    // 1 200 000 / 0.87 = 1 379 310.34 -> 1 379 310
    assert_eq!(value["annual_gross_income"], "1379310");
    assert_eq!(value["social_contribution"], "0");
}

#[test]
fn breakdown_rejects_negative_income() {
    let output = run(&["breakdown", "--monthly-income=-100"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("monthly net income must be non-negative"));
}

#[test]
fn rates_reference_table() {
    let output = run(&["rates"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("PFR"));
    assert!(stdout.contains("FSS"));
    assert!(stdout.contains("FOMS"));
    assert!(stdout.contains("1 292 000 ₽"));
    assert!(stdout.contains("912 000 ₽"));
    assert!(stdout.contains("5 000 000 ₽"));
    assert!(stdout.contains("15% above"));
}
