use tracing::debug;

use crate::errors::{EstimatorError, Result};
use crate::types::{LoanParameters, PeriodicPaymentResult};

const MONTHS_PER_YEAR: f64 = 12.0;

/// number of monthly periods for a term in years, for reporting
///
/// Rounds to the nearest month and never goes below one period. Saturates at
/// `u32::MAX` for absurd terms; the payment math uses the unsaturated count.
pub fn payment_periods(term_years: f64) -> u32 {
    // `as` saturates and maps NaN to 0
    (period_count(term_years) as u32).max(1)
}

/// max(1, round(years * 12)); NaN passes through as 1 so callers check it first
fn period_count(term_years: f64) -> f64 {
    (term_years * MONTHS_PER_YEAR).round().max(1.0)
}

/// periodic rate from an annual percentage, negatives clamped to zero
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent.max(0.0) / 100.0 / MONTHS_PER_YEAR
}

/// level monthly payment that fully retires `principal` over the term
///
/// Total over its numeric domain: a degenerate computation yields `0.0`
/// instead of NaN or infinity. Use [`try_monthly_payment`] to tell the two
/// apart.
pub fn monthly_payment(principal: f64, annual_rate_percent: f64, term_years: f64) -> f64 {
    try_monthly_payment(principal, annual_rate_percent, term_years).unwrap_or_else(|err| {
        debug!(error = %err, "monthly payment fell back to zero");
        0.0
    })
}

/// same as [`monthly_payment`] but reports degeneracy as an error
pub fn try_monthly_payment(
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
) -> Result<f64> {
    let degenerate = || EstimatorError::NumericDegeneracy {
        principal,
        annual_rate_percent,
        term_years,
    };

    // `f64::max` in the clamps would otherwise hide a NaN
    if annual_rate_percent.is_nan() || term_years.is_nan() {
        return Err(degenerate());
    }

    let payment = annuity_payment(
        principal,
        monthly_rate(annual_rate_percent),
        period_count(term_years),
    );

    if payment.is_finite() {
        Ok(payment)
    } else {
        Err(degenerate())
    }
}

/// P * r * (1 + r)^n / ((1 + r)^n - 1), straight-line when r is zero
fn annuity_payment(principal: f64, rate: f64, periods: f64) -> f64 {
    if rate == 0.0 {
        return principal / periods;
    }

    let compound = (1.0 + rate).powf(periods);
    principal * rate * compound / (compound - 1.0)
}

impl LoanParameters {
    /// run the engine on these terms
    pub fn monthly_payment(&self) -> PeriodicPaymentResult {
        PeriodicPaymentResult {
            monthly_payment: monthly_payment(
                self.principal,
                self.annual_rate_percent,
                self.term_years,
            ),
            periods: payment_periods(self.term_years),
            monthly_rate: monthly_rate(self.annual_rate_percent),
        }
    }

    pub fn try_monthly_payment(&self) -> Result<f64> {
        try_monthly_payment(self.principal, self.annual_rate_percent, self.term_years)
    }
}
