//! NDFL (personal income tax) gross-up.
//!
//! The calculator works backwards: the user enters what they receive in
//! hand, and we recover the gross contract salary the employer must pay.
//! NDFL is 13% on the first 5 000 000 ₽/year of gross pay and 15% above, so
//! the inverse divides the net amount by the kept fraction of each band.

use rust_decimal::Decimal;

use crate::money::round_rub;
use crate::tax::ru::{
    NDFL_GROSS_THRESHOLD, NDFL_NET_THRESHOLD, NET_RATE_ABOVE_THRESHOLD, NET_RATE_BELOW_THRESHOLD,
};

/// Converts annual net (take-home) income into the annual gross contract
/// income it corresponds to.
///
/// The band boundary is defined on the gross amount but tested on the net
/// amount: 4 350 000 ₽ net is exactly 5 000 000 ₽ gross at 13%. Net income
/// above that boundary grosses up the excess at the 15% band.
///
/// Caller contract: `net_annual >= 0`.
pub fn calculate_gross_income(net_annual: Decimal) -> Decimal {
    if net_annual > NDFL_NET_THRESHOLD {
        let extra = net_annual - NDFL_NET_THRESHOLD;
        NDFL_GROSS_THRESHOLD + round_rub(extra / NET_RATE_ABOVE_THRESHOLD)
    } else {
        round_rub(net_annual / NET_RATE_BELOW_THRESHOLD)
    }
}
