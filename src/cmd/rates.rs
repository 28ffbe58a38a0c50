//! Rates command - 2020 contribution caps and tariffs reference table

use crate::money::format_rub;
use crate::tax::ru::{
    DEFAULT_MEDICAL_RATE, DEFAULT_PENSION_RATE, DEFAULT_SOCIAL_RATE, NDFL_GROSS_THRESHOLD,
    PENSION_BASE_CAP, PENSION_RATE_ABOVE_CAP, SOCIAL_BASE_CAP,
};
use clap::Args;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct RatesCommand {}

impl RatesCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        println!();
        println!("PAYROLL FUND TARIFFS, 2020");
        println!();

        let rows = vec![
            RateRow {
                fund: "PFR",
                base: format!("up to {}/year", format_rub(PENSION_BASE_CAP)),
                rate: format!("{}%", DEFAULT_PENSION_RATE),
            },
            RateRow {
                fund: "PFR",
                base: format!("above {}/year", format_rub(PENSION_BASE_CAP)),
                rate: format!("{}%", PENSION_RATE_ABOVE_CAP),
            },
            RateRow {
                fund: "FSS",
                base: format!("up to {}/year", format_rub(SOCIAL_BASE_CAP)),
                rate: format!("{}%", DEFAULT_SOCIAL_RATE),
            },
            RateRow {
                fund: "FSS",
                base: format!("above {}/year", format_rub(SOCIAL_BASE_CAP)),
                rate: "0%".to_string(),
            },
            RateRow {
                fund: "FOMS",
                base: "no taxable maximum".to_string(),
                rate: format!("{}%", DEFAULT_MEDICAL_RATE),
            },
        ];

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(2..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
        println!();
        println!(
            "NDFL: 13% on gross pay up to {}/year, 15% above",
            format_rub(NDFL_GROSS_THRESHOLD)
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Tabled)]
struct RateRow {
    #[tabled(rename = "Fund")]
    fund: &'static str,
    #[tabled(rename = "Taxable base")]
    base: String,
    #[tabled(rename = "Tariff")]
    rate: String,
}
