use clap::Parser;

mod cmd;
mod money;
mod tax;

/// Estimate the gross contract salary and employer payroll taxes behind a
/// Russian net (take-home) salary, under 2020 rates.
#[derive(Parser, Debug)]
#[command(name = "zarplata", version, about)]
enum Command {
    /// Calculate the gross salary and tax breakdown for a net income
    Breakdown(cmd::BreakdownCommand),
    /// Show the 2020 contribution caps and tariffs
    Rates(cmd::RatesCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    match Command::parse() {
        Command::Breakdown(cmd) => cmd.exec(),
        Command::Rates(cmd) => cmd.exec(),
    }
}
