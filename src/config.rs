use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::errors::{EstimatorError, Result};
use crate::types::{EstimateInputs, LoanParameters};

/// starting values for both calculators
///
/// Missing sections or fields fall back to the built-in defaults, so a
/// document like `{"full": {"homePrice": 600000}}` only overrides the price.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// quick estimate card
    pub quick: QuickDefaults,
    /// full calculator with taxes, insurance and HOA
    pub full: FullDefaults,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuickDefaults {
    pub amount: f64,
    pub annual_rate_percent: f64,
    pub term_years: f64,
}

impl Default for QuickDefaults {
    fn default() -> Self {
        let params = LoanParameters::default();
        Self {
            amount: params.principal,
            annual_rate_percent: params.annual_rate_percent,
            term_years: params.term_years,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FullDefaults {
    pub home_price: f64,
    pub down_payment_percent: f64,
    pub annual_rate_percent: f64,
    pub term_years: f64,
    pub annual_taxes: f64,
    pub annual_insurance: f64,
    #[serde(rename = "monthlyHOA", alias = "monthlyHoa")]
    pub monthly_hoa: f64,
}

impl Default for FullDefaults {
    fn default() -> Self {
        let inputs = EstimateInputs::default();
        Self {
            home_price: inputs.home_price,
            down_payment_percent: inputs.down_payment_percent,
            annual_rate_percent: inputs.annual_rate_percent,
            term_years: inputs.term_years,
            annual_taxes: inputs.annual_taxes,
            annual_insurance: inputs.annual_insurance,
            monthly_hoa: inputs.monthly_hoa,
        }
    }
}

impl CalculatorConfig {
    /// parse a json document and check the values
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// read and parse a json file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        info!(path = %path.display(), "loaded calculator config");
        Ok(config)
    }

    /// reject defaults the calculators could only render as nonsense
    pub fn validate(&self) -> Result<()> {
        self.quick_parameters()
            .validate()
            .map_err(|e| EstimatorError::InvalidConfiguration {
                message: format!("quick: {}", e),
            })?;
        self.full_inputs()
            .validate()
            .map_err(|e| EstimatorError::InvalidConfiguration {
                message: format!("full: {}", e),
            })?;
        Ok(())
    }

    pub fn quick_parameters(&self) -> LoanParameters {
        LoanParameters::new(
            self.quick.amount,
            self.quick.annual_rate_percent,
            self.quick.term_years,
        )
    }

    pub fn full_inputs(&self) -> EstimateInputs {
        EstimateInputs {
            home_price: self.full.home_price,
            down_payment_percent: self.full.down_payment_percent,
            annual_rate_percent: self.full.annual_rate_percent,
            term_years: self.full.term_years,
            annual_taxes: self.full.annual_taxes,
            annual_insurance: self.full.annual_insurance,
            monthly_hoa: self.full.monthly_hoa,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_mirror_calculator() {
        let config = CalculatorConfig::default();
        assert_eq!(config.quick_parameters(), LoanParameters::default());
        assert_eq!(config.full_inputs(), EstimateInputs::default());
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config =
            CalculatorConfig::from_json_str(r#"{"full": {"homePrice": 600000, "monthlyHOA": 120}}"#)
                .unwrap();
        assert_eq!(config.full.home_price, 600_000.0);
        assert_eq!(config.full.monthly_hoa, 120.0);
        assert_eq!(config.full.down_payment_percent, 10.0);
        assert_eq!(config.quick_parameters(), LoanParameters::default());

        let empty = CalculatorConfig::from_json_str("{}").unwrap();
        assert_eq!(empty, CalculatorConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let json = CalculatorConfig::default().to_json_pretty().unwrap();
        let parsed = CalculatorConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, CalculatorConfig::default());
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = CalculatorConfig::from_json_str(r#"{"full": {"downPaymentPercent": 150}}"#)
            .unwrap_err();
        match err {
            EstimatorError::InvalidConfiguration { message } => assert!(message.starts_with("full:")),
            other => panic!("unexpected: {:?}", other),
        }

        let err = CalculatorConfig::from_json_str(r#"{"quick": {"amount": -5}}"#).unwrap_err();
        assert!(matches!(err, EstimatorError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = CalculatorConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, EstimatorError::Serialization(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = CalculatorConfig::from_json_file("/nonexistent/calculator.json").unwrap_err();
        assert!(matches!(err, EstimatorError::Io(_)));
    }
}
