//! Employer payroll-fund contributions, charged on the gross contract
//! income. Each fund has its own base policy: PFR is progressive with a
//! reduced marginal rate, FSS stops at a taxable maximum, FOMS is flat.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::money::round_rub;
use crate::tax::ru::{PENSION_BASE_CAP, PENSION_RATE_ABOVE_CAP, SOCIAL_BASE_CAP};

const HUNDRED: Decimal = dec!(100);

/// Pension fund (PFR) contribution.
///
/// The headline `rate` applies up to 1 292 000 ₽/year; income above that is
/// charged at the fixed 10% marginal rate. Each bracket amount is rounded to
/// whole rubles before summing; the reference outputs depend on this
/// two-stage rounding, so it must not be collapsed into a single round.
pub fn calculate_pension(income: Decimal, rate: Decimal) -> Decimal {
    if income > PENSION_BASE_CAP {
        round_rub((income - PENSION_BASE_CAP) * PENSION_RATE_ABOVE_CAP / HUNDRED)
            + round_rub(PENSION_BASE_CAP * rate / HUNDRED)
    } else {
        round_rub(income * rate / HUNDRED)
    }
}

/// Social insurance fund (FSS) contribution. Only the first 912 000 ₽/year
/// is taxable; income above the cap contributes nothing.
pub fn calculate_social(income: Decimal, rate: Decimal) -> Decimal {
    let taxable_base = SOCIAL_BASE_CAP.min(income);
    round_rub(taxable_base * rate / HUNDRED)
}

/// Medical insurance fund (FOMS) contribution. No cap.
pub fn calculate_medical(income: Decimal, rate: Decimal) -> Decimal {
    round_rub(income * rate / HUNDRED)
}
