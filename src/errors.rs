use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("numeric degeneracy: principal {principal}, rate {annual_rate_percent}%, term {term_years} years")]
    NumericDegeneracy {
        principal: f64,
        annual_rate_percent: f64,
        term_years: f64,
    },

    #[error("invalid input: {field} is {value}")]
    InvalidInput {
        field: &'static str,
        value: f64,
    },

    #[error("negative amount: {field} is {value}")]
    NegativeAmount {
        field: &'static str,
        value: f64,
    },

    #[error("down payment out of range: {percent}% (expected 0 to 100)")]
    DownPaymentOutOfRange {
        percent: f64,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl EstimatorError {
    /// true when the error only reports a degenerate computation
    pub fn is_degeneracy(&self) -> bool {
        matches!(self, EstimatorError::NumericDegeneracy { .. })
    }
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
