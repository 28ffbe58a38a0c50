//! Full breakdown for a single salary: gross contract income, the three
//! payroll-fund contributions and NDFL, derived from the net monthly income.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::round_rub;
use crate::tax::ndfl::calculate_gross_income;
use crate::tax::payroll::{calculate_medical, calculate_pension, calculate_social};
use crate::tax::ru::{
    DEFAULT_MEDICAL_RATE, DEFAULT_MONTHLY_NET_INCOME, DEFAULT_PENSION_RATE, DEFAULT_SOCIAL_RATE,
};

/// Errors for out-of-range calculator inputs.
///
/// The formulas themselves are total over non-negative numbers; negative
/// figures are rejected here rather than clamped so a typo surfaces instead
/// of silently producing a plausible-looking breakdown.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("monthly net income must be non-negative, got {0}")]
    NegativeIncome(Decimal),

    #[error("{fund} rate must be non-negative, got {rate}")]
    NegativeRate { fund: &'static str, rate: Decimal },
}

/// User-facing calculator inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxInputs {
    /// Net (take-home) income, ₽/month.
    pub monthly_net_income: Decimal,
    /// Pension fund (PFR) contribution rate, percent.
    pub pension_rate: Decimal,
    /// Social insurance fund (FSS) contribution rate, percent.
    pub social_rate: Decimal,
    /// Medical insurance fund (FOMS) contribution rate, percent.
    pub medical_rate: Decimal,
}

impl Default for TaxInputs {
    fn default() -> Self {
        TaxInputs {
            monthly_net_income: DEFAULT_MONTHLY_NET_INCOME,
            pension_rate: DEFAULT_PENSION_RATE,
            social_rate: DEFAULT_SOCIAL_RATE,
            medical_rate: DEFAULT_MEDICAL_RATE,
        }
    }
}

/// Derived amounts, all annual ₽ rounded to whole rubles except the final
/// percent figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxBreakdown {
    pub annual_net_income: Decimal,
    pub annual_gross_income: Decimal,
    pub personal_income_tax: Decimal,
    pub pension_contribution: Decimal,
    pub social_contribution: Decimal,
    pub medical_contribution: Decimal,
    pub total_tax: Decimal,
    /// Total tax as a percentage of the net income, rounded to a whole
    /// percent. Zero when the net income is zero.
    pub total_tax_percent_of_net: Decimal,
}

/// Computes the full breakdown from the calculator inputs.
///
/// Pure and idempotent: the same inputs always produce the same breakdown.
pub fn calculate_breakdown(inputs: &TaxInputs) -> Result<TaxBreakdown, InputError> {
    validate(inputs)?;

    let annual_net = inputs.monthly_net_income * dec!(12);
    let gross = calculate_gross_income(annual_net);
    let pension = calculate_pension(gross, inputs.pension_rate);
    let social = calculate_social(gross, inputs.social_rate);
    let medical = calculate_medical(gross, inputs.medical_rate);

    // Net is gross minus NDFL by construction of the gross-up, so NDFL
    // falls out as the difference.
    let ndfl = gross - annual_net;
    let total = pension + social + medical + ndfl;
    let percent_of_net = if annual_net.is_zero() {
        Decimal::ZERO
    } else {
        round_rub(total / annual_net * dec!(100))
    };

    log::debug!(
        "net {} -> gross {} (ndfl {}, pfr {}, fss {}, foms {})",
        annual_net,
        gross,
        ndfl,
        pension,
        social,
        medical
    );

    Ok(TaxBreakdown {
        annual_net_income: annual_net,
        annual_gross_income: gross,
        personal_income_tax: ndfl,
        pension_contribution: pension,
        social_contribution: social,
        medical_contribution: medical,
        total_tax: total,
        total_tax_percent_of_net: percent_of_net,
    })
}

fn validate(inputs: &TaxInputs) -> Result<(), InputError> {
    if inputs.monthly_net_income.is_sign_negative() && !inputs.monthly_net_income.is_zero() {
        return Err(InputError::NegativeIncome(inputs.monthly_net_income));
    }
    for (fund, rate) in [
        ("pension", inputs.pension_rate),
        ("social", inputs.social_rate),
        ("medical", inputs.medical_rate),
    ] {
        if rate.is_sign_negative() && !rate.is_zero() {
            return Err(InputError::NegativeRate { fund, rate });
        }
    }
    Ok(())
}
