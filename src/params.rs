// src/params.rs
//! Option contract inputs
//!
//! # Conventions
//!
//! All quantities are annualized: `time_to_maturity` is a year fraction,
//! `risk_free_rate` is continuously compounded, `volatility` is the
//! annualized lognormal volatility. A calendar year is 365 days for the
//! days-to-expiry conversion, matching the per-day theta convention.

use crate::error::{validation, PricingError, PricingResult};
use std::fmt;
use std::str::FromStr;

/// Days per calendar year, used for days-to-expiry conversion and
/// per-day theta scaling.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Enumeration of supported option payoff types
///
/// European vanilla payoffs only. The enum is closed: anything other than
/// `Call` or `Put` is rejected at the text boundary (`FromStr`) with
/// [`PricingError::InvalidPayoff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    /// European call option: max(S_T - K, 0)
    Call,

    /// European put option: max(K - S_T, 0)
    Put,
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Call" | "call" => Ok(OptionType::Call),
            "Put" | "put" => Ok(OptionType::Put),
            other => Err(PricingError::InvalidPayoff {
                payoff: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Black-Scholes input parameters for a single European option
///
/// # Domain Constraints
///
/// - `spot` > 0
/// - `strike` > 0
/// - `time_to_maturity` > 0 (year fraction; 0 would divide by zero)
/// - `risk_free_rate`: any finite real
/// - `volatility` > 0
///
/// Every pricing operation re-validates before touching the formulas, so
/// out-of-domain values fail with a typed error instead of propagating
/// NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionParameters {
    /// Current underlying price S
    pub spot: f64,
    /// Strike price K
    pub strike: f64,
    /// Year fraction until expiry T
    pub time_to_maturity: f64,
    /// Continuously-compounded annual rate r
    pub risk_free_rate: f64,
    /// Annualized volatility σ
    pub volatility: f64,
}

impl OptionParameters {
    /// Construct validated parameters
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> PricingResult<Self> {
        let params = OptionParameters {
            spot,
            strike,
            time_to_maturity,
            risk_free_rate,
            volatility,
        };
        params.validate()?;
        Ok(params)
    }

    /// Construct from a whole number of calendar days to expiry
    ///
    /// Converts `days / 365` to a year fraction, the convention used when
    /// quoting expiry in days. Zero days is rejected like any other
    /// non-positive maturity.
    pub fn from_days_to_expiry(
        spot: f64,
        strike: f64,
        days_to_expiry: u32,
        risk_free_rate: f64,
        volatility: f64,
    ) -> PricingResult<Self> {
        Self::new(
            spot,
            strike,
            f64::from(days_to_expiry) / DAYS_PER_YEAR,
            risk_free_rate,
            volatility,
        )
    }

    /// Check all domain constraints
    pub fn validate(&self) -> PricingResult<()> {
        validation::validate_finite("spot", self.spot)?;
        validation::validate_positive("spot", self.spot)?;
        validation::validate_finite("strike", self.strike)?;
        validation::validate_positive("strike", self.strike)?;
        validation::validate_finite("time_to_maturity", self.time_to_maturity)?;
        validation::validate_positive("time_to_maturity", self.time_to_maturity)?;
        validation::validate_finite("risk_free_rate", self.risk_free_rate)?;
        validation::validate_finite("volatility", self.volatility)?;
        validation::validate_positive("volatility", self.volatility)?;
        Ok(())
    }

    /// Same contract at a different spot, unvalidated
    ///
    /// Used by the sweep loop; the sweep validates its spot grid once up
    /// front and the pricing functions re-validate per call anyway.
    pub(crate) fn at_spot(&self, spot: f64) -> Self {
        OptionParameters { spot, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type_from_str() {
        assert_eq!("Call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("put".parse::<OptionType>().unwrap(), OptionType::Put);

        let err = "Straddle".parse::<OptionType>().unwrap_err();
        match err {
            PricingError::InvalidPayoff { payoff } => assert_eq!(payoff, "Straddle"),
            other => panic!("expected InvalidPayoff, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_parameters() {
        let params = OptionParameters::new(30.0, 40.0, 220.0 / 365.0, 0.13, 0.43);
        assert!(params.is_ok());
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        assert!(OptionParameters::new(0.0, 40.0, 0.5, 0.13, 0.43).is_err());
        assert!(OptionParameters::new(30.0, -40.0, 0.5, 0.13, 0.43).is_err());
        assert!(OptionParameters::new(30.0, 40.0, 0.0, 0.13, 0.43).is_err());
        assert!(OptionParameters::new(30.0, 40.0, 0.5, 0.13, 0.0).is_err());
    }

    #[test]
    fn test_rejects_non_finite_inputs() {
        assert!(OptionParameters::new(f64::NAN, 40.0, 0.5, 0.13, 0.43).is_err());
        assert!(OptionParameters::new(30.0, 40.0, 0.5, f64::INFINITY, 0.43).is_err());
    }

    #[test]
    fn test_negative_rate_allowed() {
        // Negative rates are a valid regime, only non-finite rates fail
        assert!(OptionParameters::new(30.0, 40.0, 0.5, -0.01, 0.43).is_ok());
    }

    #[test]
    fn test_from_days_to_expiry() {
        let params = OptionParameters::from_days_to_expiry(30.0, 40.0, 220, 0.13, 0.43).unwrap();
        assert!((params.time_to_maturity - 220.0 / 365.0).abs() < 1e-15);

        assert!(OptionParameters::from_days_to_expiry(30.0, 40.0, 0, 0.13, 0.43).is_err());
    }
}
