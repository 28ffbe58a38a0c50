//! Breakdown command - gross salary and tax breakdown for a net income

use crate::money::{format_rub, round_rub};
use crate::tax::{calculate_breakdown, TaxBreakdown, TaxInputs};
use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct BreakdownCommand {
    /// Net (take-home) income, ₽/month
    #[arg(short = 'i', long, default_value = "35000")]
    monthly_income: Decimal,

    /// Pension fund (PFR) contribution rate, percent
    #[arg(long, default_value = "22")]
    pension_rate: Decimal,

    /// Social insurance fund (FSS) contribution rate, percent
    #[arg(long, default_value = "2.9")]
    social_rate: Decimal,

    /// Medical insurance fund (FOMS) contribution rate, percent
    #[arg(long, default_value = "5.1")]
    medical_rate: Decimal,

    /// Show the full per-fund breakdown instead of the totals
    #[arg(short, long)]
    details: bool,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl BreakdownCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let inputs = TaxInputs {
            monthly_net_income: self.monthly_income,
            pension_rate: self.pension_rate,
            social_rate: self.social_rate,
            medical_rate: self.medical_rate,
        };
        let breakdown = calculate_breakdown(&inputs)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        } else if self.details {
            self.print_details(&breakdown);
        } else {
            self.print_totals(&breakdown);
        }
        Ok(())
    }

    fn print_totals(&self, b: &TaxBreakdown) {
        println!(
            "Take-home pay: {}/month ({}/year)",
            format_rub(self.monthly_income),
            format_rub(b.annual_net_income)
        );
        println!(
            "Total taxes:   {}/month ({}/year)",
            format_rub(per_month(b.total_tax)),
            format_rub(b.total_tax)
        );
    }

    fn print_details(&self, b: &TaxBreakdown) {
        println!();
        println!("SALARY BREAKDOWN (2020 rates)");
        println!();

        let rows = vec![
            BreakdownRow::new("Take-home pay", b.annual_net_income),
            BreakdownRow::new("Gross contract salary", b.annual_gross_income),
            BreakdownRow::new("Personal income tax (NDFL)", b.personal_income_tax),
            BreakdownRow::new("Pension fund (PFR)", b.pension_contribution),
            BreakdownRow::new("Social insurance (FSS)", b.social_contribution),
            BreakdownRow::new("Medical insurance (FOMS)", b.medical_contribution),
            BreakdownRow::new("Total taxes", b.total_tax),
        ];

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
        println!();
        println!(
            "Total taxes are {}% of take-home pay",
            b.total_tax_percent_of_net
        );
    }
}

/// Monthly figure rendered alongside each annual amount, rounded on its own
/// like every other display field.
fn per_month(annual: Decimal) -> Decimal {
    round_rub(annual / dec!(12))
}

#[derive(Debug, Clone, Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Item")]
    item: &'static str,
    #[tabled(rename = "Monthly")]
    monthly: String,
    #[tabled(rename = "Annual")]
    annual: String,
}

impl BreakdownRow {
    fn new(item: &'static str, annual: Decimal) -> Self {
        BreakdownRow {
            item,
            monthly: format_rub(per_month(annual)),
            annual: format_rub(annual),
        }
    }
}
