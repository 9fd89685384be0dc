// src/pricing/black_scholes.rs
//! Analytical Black-Scholes formulas for European options and Greeks
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives:
//! ```text
//! V(S,t) = e^(-r(T-t)) * E^Q[payoff(S_T) | S_t = S]
//! ```
//!
//! For European options, this has closed-form solutions involving
//! the cumulative normal distribution function Φ(x) evaluated at:
//! ```text
//! d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! d₂ = d₁ - σ√T
//! ```
//!
//! Every public function here validates its parameters first, then
//! evaluates the closed form. All are pure: identical inputs give
//! bit-identical outputs.
//!
//! # Scaling Conventions
//!
//! Vega and rho are reported per one-percentage-point move in volatility
//! and rate (×0.01); theta is reported as per-calendar-day decay (÷365).

use crate::error::PricingResult;
use crate::math_utils::{norm_cdf, norm_pdf};
use crate::params::{OptionParameters, OptionType, DAYS_PER_YEAR};

/// Shared intermediate quantities (d₁, d₂)
///
/// Single source for both values; d₂ is derived from d₁ rather than
/// recomputed from its own definition.
fn d1_d2(p: &OptionParameters) -> (f64, f64) {
    let sqrt_t = p.time_to_maturity.sqrt();
    let d1 = ((p.spot / p.strike).ln()
        + (p.risk_free_rate + 0.5 * p.volatility * p.volatility) * p.time_to_maturity)
        / (p.volatility * sqrt_t);
    let d2 = d1 - p.volatility * sqrt_t;
    (d1, d2)
}

/// Black-Scholes European option price
///
/// # Formula
/// ```text
/// C = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// P = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
///
/// The two satisfy put-call parity: C - P = S - K*e^(-rT).
pub fn price(payoff: OptionType, p: &OptionParameters) -> PricingResult<f64> {
    p.validate()?;
    let (d1, d2) = d1_d2(p);
    let discounted_strike = p.strike * (-p.risk_free_rate * p.time_to_maturity).exp();
    Ok(match payoff {
        OptionType::Call => p.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
        OptionType::Put => discounted_strike * norm_cdf(-d2) - p.spot * norm_cdf(-d1),
    })
}

/// Black-Scholes Delta (∂V/∂S)
///
/// # Formula
/// ```text
/// Δ_call = Φ(d₁)         ∈ [0, 1]
/// Δ_put  = -Φ(-d₁)       ∈ [-1, 0]
/// ```
///
/// # Interpretation
/// - Hedge ratio: number of shares held per option sold
/// - Call delta is the risk-neutral probability-like weight on the spot leg
pub fn delta(payoff: OptionType, p: &OptionParameters) -> PricingResult<f64> {
    p.validate()?;
    let (d1, _d2) = d1_d2(p);
    Ok(match payoff {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => -norm_cdf(-d1),
    })
}

/// Black-Scholes Gamma (∂²V/∂S²)
///
/// # Formula
/// ```text
/// Γ = φ(d₁) / (S * σ * √T)
/// ```
///
/// # Interpretation
/// - Rate of change of Delta w.r.t. underlying price
/// - Convexity of option price, always positive
/// - Identical for calls and puts, so no payoff argument
pub fn gamma(p: &OptionParameters) -> PricingResult<f64> {
    p.validate()?;
    let (d1, _d2) = d1_d2(p);
    Ok(norm_pdf(d1) / (p.spot * p.volatility * p.time_to_maturity.sqrt()))
}

/// Black-Scholes Vega (∂V/∂σ), per 1% volatility move
///
/// # Formula
/// ```text
/// ν = 0.01 * S * √T * φ(d₁)
/// ```
///
/// # Interpretation
/// - Sensitivity to volatility changes, always positive for long options
/// - Identical for calls and puts, so no payoff argument
/// - Units: price change per one-percentage-point volatility change
pub fn vega(p: &OptionParameters) -> PricingResult<f64> {
    p.validate()?;
    let (d1, _d2) = d1_d2(p);
    Ok(0.01 * p.spot * p.time_to_maturity.sqrt() * norm_pdf(d1))
}

/// Black-Scholes Theta (∂V/∂t), per calendar day
///
/// # Formula
/// ```text
/// Θ_call = [-S*φ(d₁)*σ/(2√T) - r*K*e^(-rT)*Φ(d₂)] / 365
/// Θ_put  = [-S*φ(d₁)*σ/(2√T) + r*K*e^(-rT)*Φ(-d₂)] / 365
/// ```
///
/// # Interpretation
/// - Time decay of option value, usually negative for long options
/// - Units: price change per calendar day
pub fn theta(payoff: OptionType, p: &OptionParameters) -> PricingResult<f64> {
    p.validate()?;
    let (d1, d2) = d1_d2(p);
    let sqrt_t = p.time_to_maturity.sqrt();
    let discounted_strike = p.strike * (-p.risk_free_rate * p.time_to_maturity).exp();
    let decay = -(p.spot * norm_pdf(d1) * p.volatility) / (2.0 * sqrt_t);
    let annual = match payoff {
        OptionType::Call => decay - p.risk_free_rate * discounted_strike * norm_cdf(d2),
        OptionType::Put => decay + p.risk_free_rate * discounted_strike * norm_cdf(-d2),
    };
    Ok(annual / DAYS_PER_YEAR)
}

/// Black-Scholes Rho (∂V/∂r), per 1% rate move
///
/// # Formula
/// ```text
/// ρ_call = 0.01 * K * T * e^(-rT) * Φ(d₂)
/// ρ_put  = -0.01 * K * T * e^(-rT) * Φ(-d₂)
/// ```
///
/// # Interpretation
/// - Sensitivity to interest rate changes
/// - Positive for calls, negative for puts
/// - Units: price change per one-percentage-point rate change
pub fn rho(payoff: OptionType, p: &OptionParameters) -> PricingResult<f64> {
    p.validate()?;
    let (_d1, d2) = d1_d2(p);
    let discounted_strike = p.strike * (-p.risk_free_rate * p.time_to_maturity).exp();
    Ok(match payoff {
        OptionType::Call => 0.01 * p.time_to_maturity * discounted_strike * norm_cdf(d2),
        OptionType::Put => -0.01 * p.time_to_maturity * discounted_strike * norm_cdf(-d2),
    })
}

/// All five Greeks at a single point
///
/// The summary-table shape: one row of sensitivities for a given contract
/// and spot. Values carry the same scaling conventions as the individual
/// functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreeksReport {
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
}

/// Compute all five Greeks in one call
///
/// Validates once and shares the (d₁, d₂) evaluation across all five
/// formulas.
pub fn greeks(payoff: OptionType, p: &OptionParameters) -> PricingResult<GreeksReport> {
    p.validate()?;
    let (d1, d2) = d1_d2(p);
    let sqrt_t = p.time_to_maturity.sqrt();
    let pdf_d1 = norm_pdf(d1);
    let discounted_strike = p.strike * (-p.risk_free_rate * p.time_to_maturity).exp();

    let delta = match payoff {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => -norm_cdf(-d1),
    };
    let gamma = pdf_d1 / (p.spot * p.volatility * sqrt_t);
    let vega = 0.01 * p.spot * sqrt_t * pdf_d1;
    let decay = -(p.spot * pdf_d1 * p.volatility) / (2.0 * sqrt_t);
    let theta = match payoff {
        OptionType::Call => {
            (decay - p.risk_free_rate * discounted_strike * norm_cdf(d2)) / DAYS_PER_YEAR
        }
        OptionType::Put => {
            (decay + p.risk_free_rate * discounted_strike * norm_cdf(-d2)) / DAYS_PER_YEAR
        }
    };
    let rho = match payoff {
        OptionType::Call => 0.01 * p.time_to_maturity * discounted_strike * norm_cdf(d2),
        OptionType::Put => -0.01 * p.time_to_maturity * discounted_strike * norm_cdf(-d2),
    };

    Ok(GreeksReport {
        delta,
        gamma,
        vega,
        theta,
        rho,
    })
}
