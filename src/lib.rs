pub mod config;
pub mod decimal;
pub mod errors;
pub mod payments;
pub mod types;
pub mod view;

// re-export key types
pub use config::CalculatorConfig;
pub use decimal::Money;
pub use errors::{EstimatorError, Result};
pub use payments::{
    compute_estimate, escrow_monthly, monthly_payment, monthly_rate, payment_periods,
    try_monthly_payment,
};
pub use types::{EstimateInputs, EstimateResult, LoanParameters, PeriodicPaymentResult};
pub use view::{EstimateView, QuickEstimateView, ResultRow};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
