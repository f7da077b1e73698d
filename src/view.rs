//! display views of estimator output
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::payments::estimate::finite_or_zero;
use crate::types::{EstimateInputs, EstimateResult, LoanParameters, PeriodicPaymentResult};

/// one labelled line of a results card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub label: String,
    pub value: String,
}

impl ResultRow {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// results card of the full calculator, amounts rounded to cents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateView {
    pub home_price: Money,
    pub down_payment_percent: f64,
    pub down_payment_amount: Money,
    pub loan_amount: Money,
    pub principal_and_interest: Money,
    pub taxes_insurance_hoa: Money,
    pub estimated_monthly_payment: Money,
}

impl EstimateView {
    pub fn from_estimate(inputs: &EstimateInputs, result: &EstimateResult) -> Self {
        EstimateView {
            home_price: Money::from_f64(inputs.home_price).to_cents(),
            down_payment_percent: finite_or_zero(inputs.down_payment_percent),
            down_payment_amount: Money::from_f64(result.down_payment_amount).to_cents(),
            loan_amount: Money::from_f64(result.financed_principal).to_cents(),
            principal_and_interest: Money::from_f64(result.principal_and_interest).to_cents(),
            taxes_insurance_hoa: Money::from_f64(result.escrow_monthly).to_cents(),
            estimated_monthly_payment: Money::from_f64(result.total_monthly_payment).to_cents(),
        }
    }

    /// compute and present in one step
    pub fn for_inputs(inputs: &EstimateInputs) -> Self {
        Self::from_estimate(inputs, &inputs.estimate())
    }

    /// labelled lines in card order
    pub fn rows(&self) -> Vec<ResultRow> {
        vec![
            ResultRow::new("Home Price", self.home_price.to_currency_string()),
            ResultRow::new(
                "Down Payment",
                format!(
                    "{}% ({})",
                    self.down_payment_percent,
                    self.down_payment_amount.to_currency_string()
                ),
            ),
            ResultRow::new("Loan Amount", self.loan_amount.to_currency_string()),
            ResultRow::new(
                "P&I (Principal & Interest)",
                self.principal_and_interest.to_currency_string(),
            ),
            ResultRow::new(
                "Taxes + Insurance + HOA",
                self.taxes_insurance_hoa.to_currency_string(),
            ),
            ResultRow::new(
                "Estimated Monthly Payment",
                self.estimated_monthly_payment.to_currency_string(),
            ),
        ]
    }

    /// plain text table, labels left and values right aligned
    pub fn render(&self) -> String {
        let rows = self.rows();
        let label_width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
        let value_width = rows.iter().map(|r| r.value.len()).max().unwrap_or(0);

        rows.iter()
            .map(|r| {
                format!(
                    "{:<lw$}  {:>vw$}",
                    r.label,
                    r.value,
                    lw = label_width,
                    vw = value_width
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
            .unwrap_or_else(|e| format!("JSON error: {}", e))
    }
}

/// quick estimate card: loan terms and the payment only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickEstimateView {
    pub amount: Money,
    pub rate_percent: f64,
    pub term_years: f64,
    pub periods: u32,
    pub estimated_monthly_payment: Money,
}

impl QuickEstimateView {
    pub fn from_payment(params: &LoanParameters, result: &PeriodicPaymentResult) -> Self {
        QuickEstimateView {
            amount: Money::from_f64(params.principal).to_cents(),
            rate_percent: finite_or_zero(params.annual_rate_percent),
            term_years: finite_or_zero(params.term_years),
            periods: result.periods,
            estimated_monthly_payment: Money::from_f64(result.monthly_payment).to_cents(),
        }
    }

    pub fn for_params(params: &LoanParameters) -> Self {
        Self::from_payment(params, &params.monthly_payment())
    }

    pub fn summary(&self) -> String {
        format!(
            "Estimated Monthly Payment: {}",
            self.estimated_monthly_payment.to_currency_string()
        )
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn json(&self) -> String {
        self.to_json_pretty()
            .unwrap_or_else(|e| format!("JSON error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_results_card() {
        let view = EstimateView::for_inputs(&EstimateInputs::default());

        assert_eq!(view.loan_amount.as_decimal(), dec!(405000));
        assert_eq!(view.principal_and_interest.as_decimal(), dec!(2493.65));
        assert_eq!(view.taxes_insurance_hoa.as_decimal(), dec!(550));
        assert_eq!(view.estimated_monthly_payment.as_decimal(), dec!(3043.65));

        let rows = view.rows();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].value, "$450,000.00");
        assert_eq!(rows[1].value, "10% ($45,000.00)");
        assert_eq!(rows[2].value, "$405,000.00");
        assert_eq!(rows[3].value, "$2,493.65");
        assert_eq!(rows[4].value, "$550.00");
        assert_eq!(rows[5].label, "Estimated Monthly Payment");
        assert_eq!(rows[5].value, "$3,043.65");
    }

    #[test]
    fn test_fractional_percent_label() {
        let inputs = EstimateInputs {
            down_payment_percent: 12.5,
            ..EstimateInputs::default()
        };
        let view = EstimateView::for_inputs(&inputs);
        assert_eq!(view.rows()[1].value, "12.5% ($56,250.00)");
    }

    #[test]
    fn test_render_aligns_columns() {
        let rendered = EstimateView::for_inputs(&EstimateInputs::default()).render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
        assert!(lines[5].starts_with("Estimated Monthly Payment"));
        assert!(lines[5].ends_with("$3,043.65"));
    }

    #[test]
    fn test_view_json() {
        let view = EstimateView::for_inputs(&EstimateInputs::default());
        let json: serde_json::Value = serde_json::from_str(&view.json()).unwrap();
        assert_eq!(json["principalAndInterest"], "2493.65");
        assert_eq!(json["downPaymentPercent"], 10.0);
    }

    #[test]
    fn test_quick_estimate() {
        let view = QuickEstimateView::for_params(&LoanParameters::default());
        assert_eq!(view.periods, 360);
        assert_eq!(view.estimated_monthly_payment.as_decimal(), dec!(2528.27));
        assert_eq!(view.summary(), "Estimated Monthly Payment: $2,528.27");
    }

    #[test]
    fn test_degenerate_quick_estimate_shows_zero() {
        let params = LoanParameters::new(400_000.0, 6.5, f64::NAN);
        let view = QuickEstimateView::for_params(&params);
        assert_eq!(view.summary(), "Estimated Monthly Payment: $0.00");
        assert_eq!(view.term_years, 0.0);
    }

    #[test]
    fn test_quick_view_fields_are_finite() {
        let params = LoanParameters::new(400_000.0, f64::INFINITY, f64::NEG_INFINITY);
        let view = QuickEstimateView::for_params(&params);
        assert_eq!(view.rate_percent, 0.0);
        assert_eq!(view.term_years, 0.0);

        let params = LoanParameters::new(400_000.0, f64::NAN, 30.0);
        let view = QuickEstimateView::for_params(&params);
        assert_eq!(view.rate_percent, 0.0);
        assert_eq!(view.term_years, 30.0);

        // serde_json writes non-finite floats as null
        let json: serde_json::Value = serde_json::from_str(&view.json()).unwrap();
        assert_eq!(json["ratePercent"], 0.0);
    }
}
