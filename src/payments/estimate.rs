use tracing::debug;

use crate::types::{financed_principal, EstimateInputs, EstimateResult};

use super::amortization::monthly_payment;

/// total estimated monthly obligation: principal, interest, taxes, insurance and HOA
///
/// Never fails. Every field of the result is finite; anything that is not
/// collapses to zero. A down payment above 100% gives a negative financed
/// principal (and payment), which is passed through as is.
pub fn compute_estimate(inputs: &EstimateInputs) -> EstimateResult {
    if inputs.down_payment_percent > 100.0 {
        debug!(
            down_payment_percent = inputs.down_payment_percent,
            "down payment exceeds home price"
        );
    }

    let financed = financed_principal(inputs.home_price, inputs.down_payment_percent);
    let principal_and_interest =
        monthly_payment(financed, inputs.annual_rate_percent, inputs.term_years);
    let escrow = escrow_monthly(
        inputs.annual_taxes,
        inputs.annual_insurance,
        inputs.monthly_hoa,
    );

    EstimateResult {
        financed_principal: finite_or_zero(financed),
        down_payment_amount: finite_or_zero(
            inputs.home_price * inputs.down_payment_percent / 100.0,
        ),
        principal_and_interest,
        escrow_monthly: escrow,
        total_monthly_payment: finite_or_zero(principal_and_interest + escrow),
    }
}

/// monthly share of annual taxes and insurance plus monthly dues
pub fn escrow_monthly(annual_taxes: f64, annual_insurance: f64, monthly_hoa: f64) -> f64 {
    finite_or_zero((annual_taxes + annual_insurance) / 12.0 + monthly_hoa)
}

impl EstimateInputs {
    pub fn estimate(&self) -> EstimateResult {
        compute_estimate(self)
    }
}

pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
