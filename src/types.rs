use serde::{Deserialize, Serialize};

use crate::errors::{EstimatorError, Result};

/// loan terms fed to the amortization engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanParameters {
    /// amount financed, in currency units
    pub principal: f64,
    /// nominal annual rate in percentage points (6.5 for 6.5%)
    pub annual_rate_percent: f64,
    /// loan term in years, converted to whole months
    pub term_years: f64,
}

impl LoanParameters {
    pub fn new(principal: f64, annual_rate_percent: f64, term_years: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
        }
    }

    /// check that every field is a usable number
    ///
    /// Advisory only: the engine accepts anything and falls back to zero.
    pub fn validate(&self) -> Result<()> {
        ensure_finite("principal", self.principal)?;
        ensure_finite("annualRatePercent", self.annual_rate_percent)?;
        ensure_finite("termYears", self.term_years)?;
        ensure_non_negative("principal", self.principal)?;
        Ok(())
    }
}

impl Default for LoanParameters {
    /// the quick estimate card: $400,000 at 6.5% over 30 years
    fn default() -> Self {
        Self::new(400_000.0, 6.5, 30.0)
    }
}

/// engine output for a single loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodicPaymentResult {
    /// level monthly payment, always finite
    pub monthly_payment: f64,
    /// number of monthly periods after clamping
    pub periods: u32,
    /// periodic rate after clamping (0.005 for 6% APR)
    pub monthly_rate: f64,
}

/// everything the full calculator collects from the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateInputs {
    pub home_price: f64,
    /// 0 to 100 expected, not enforced
    pub down_payment_percent: f64,
    pub annual_rate_percent: f64,
    pub term_years: f64,
    pub annual_taxes: f64,
    pub annual_insurance: f64,
    #[serde(rename = "monthlyHOA", alias = "monthlyHoa")]
    pub monthly_hoa: f64,
}

impl EstimateInputs {
    /// check the inputs for values the calculator would render as nonsense
    ///
    /// Reports the first problem found. The composer never calls this and
    /// never clamps on its behalf.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("homePrice", self.home_price),
            ("downPaymentPercent", self.down_payment_percent),
            ("annualRatePercent", self.annual_rate_percent),
            ("termYears", self.term_years),
            ("annualTaxes", self.annual_taxes),
            ("annualInsurance", self.annual_insurance),
            ("monthlyHOA", self.monthly_hoa),
        ];
        for (field, value) in fields {
            ensure_finite(field, value)?;
        }

        ensure_non_negative("homePrice", self.home_price)?;
        ensure_non_negative("annualTaxes", self.annual_taxes)?;
        ensure_non_negative("annualInsurance", self.annual_insurance)?;
        ensure_non_negative("monthlyHOA", self.monthly_hoa)?;

        if !(0.0..=100.0).contains(&self.down_payment_percent) {
            return Err(EstimatorError::DownPaymentOutOfRange {
                percent: self.down_payment_percent,
            });
        }

        Ok(())
    }

    /// loan terms for the financed part of the purchase
    pub fn loan_parameters(&self) -> LoanParameters {
        LoanParameters::new(
            financed_principal(self.home_price, self.down_payment_percent),
            self.annual_rate_percent,
            self.term_years,
        )
    }
}

impl Default for EstimateInputs {
    /// the full calculator's starting scenario
    fn default() -> Self {
        Self {
            home_price: 450_000.0,
            down_payment_percent: 10.0,
            annual_rate_percent: 6.25,
            term_years: 30.0,
            annual_taxes: 5_200.0,
            annual_insurance: 1_400.0,
            monthly_hoa: 0.0,
        }
    }
}

/// composed monthly obligation (PITI plus HOA)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    pub financed_principal: f64,
    pub down_payment_amount: f64,
    pub principal_and_interest: f64,
    /// taxes, insurance and HOA per month
    pub escrow_monthly: f64,
    pub total_monthly_payment: f64,
}

/// home price less the down payment; not floored at zero
pub(crate) fn financed_principal(home_price: f64, down_payment_percent: f64) -> f64 {
    home_price * (1.0 - down_payment_percent / 100.0)
}

fn ensure_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EstimatorError::InvalidInput { field, value })
    }
}

fn ensure_non_negative(field: &'static str, value: f64) -> Result<()> {
    if value < 0.0 {
        Err(EstimatorError::NegativeAmount { field, value })
    } else {
        Ok(())
    }
}
