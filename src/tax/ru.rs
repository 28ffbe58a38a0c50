//! 2020 Russian payroll tax policy: bracket boundaries, caps and rates.
//!
//! All figures are annual rubles unless stated otherwise. Keeping them as
//! named constants (rather than inline literals) keeps the bracket policy
//! auditable and swappable for future tax years.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// NDFL threshold on the *gross* contract amount: the first 5 000 000 ₽/year
/// is taxed at 13%, anything above at 15%.
pub const NDFL_GROSS_THRESHOLD: Decimal = dec!(5000000);

/// The net income corresponding exactly to [`NDFL_GROSS_THRESHOLD`] at 13%:
/// `5 000 000 × 0.87`. The gross-up branches on the net amount, so the
/// boundary must be expressed in net terms.
pub const NDFL_NET_THRESHOLD: Decimal = dec!(4350000);

/// Fraction of gross pay kept in hand below the threshold (100% − 13% NDFL).
pub const NET_RATE_BELOW_THRESHOLD: Decimal = dec!(0.87);

/// Fraction of gross pay kept in hand above the threshold (100% − 15% NDFL).
pub const NET_RATE_ABOVE_THRESHOLD: Decimal = dec!(0.85);

/// Pension fund (PFR) bracket boundary. Income above it is charged at the
/// reduced marginal rate instead of the headline rate.
pub const PENSION_BASE_CAP: Decimal = dec!(1292000);

/// PFR marginal rate (percent) on income above [`PENSION_BASE_CAP`].
pub const PENSION_RATE_ABOVE_CAP: Decimal = dec!(10);

/// Social insurance fund (FSS) taxable maximum. Income above it contributes
/// nothing.
pub const SOCIAL_BASE_CAP: Decimal = dec!(912000);

/// Headline contribution rates (percent). These are the 2020 defaults; the
/// CLI lets the user override them.
pub const DEFAULT_PENSION_RATE: Decimal = dec!(22);
pub const DEFAULT_SOCIAL_RATE: Decimal = dec!(2.9);
pub const DEFAULT_MEDICAL_RATE: Decimal = dec!(5.1);

/// Default monthly net income shown by the calculator.
pub const DEFAULT_MONTHLY_NET_INCOME: Decimal = dec!(35000);
