pub mod breakdown;
pub mod rates;

pub use breakdown::BreakdownCommand;
pub use rates::RatesCommand;
