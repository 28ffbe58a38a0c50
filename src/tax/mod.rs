pub mod breakdown;
pub mod ndfl;
pub mod payroll;
pub mod ru;

pub use breakdown::{calculate_breakdown, InputError, TaxBreakdown, TaxInputs};
pub use ndfl::calculate_gross_income;
pub use payroll::{calculate_medical, calculate_pension, calculate_social};
