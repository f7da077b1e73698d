pub mod amortization;
pub mod estimate;

pub use amortization::{monthly_payment, monthly_rate, payment_periods, try_monthly_payment};
pub use estimate::{compute_estimate, escrow_monthly};
