//! # bs-greeks: Closed-Form Black-Scholes Pricing and Greeks
//!
//! A Rust library computing the fair price and risk sensitivities ("Greeks")
//! of European vanilla options under the Black-Scholes model.
//!
//! ## Key Features
//!
//! - **Closed-Form Pricing**: Analytical call/put prices, no simulation
//! - **Complete Greeks**: Delta, Gamma, Vega, Theta, Rho with market-standard scaling
//! - **Validated Inputs**: Typed errors for out-of-domain parameters, no silent NaN
//! - **Parameter Sweeps**: Ordered parallel spot sweeps with Rayon for plotting
//! - **Pure Functions**: Stateless, deterministic, trivially parallelizable
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_greeks::params::{OptionParameters, OptionType};
//! use bs_greeks::pricing::black_scholes;
//!
//! // 220-day call, spot 30, strike 40, r = 13%, sigma = 43%
//! let params = OptionParameters::from_days_to_expiry(30.0, 40.0, 220, 0.13, 0.43)
//!     .expect("Valid parameters");
//!
//! let price = black_scholes::price(OptionType::Call, &params).expect("Valid parameters");
//! let delta = black_scholes::delta(OptionType::Call, &params).expect("Valid parameters");
//! println!("Call price: {:.4}, delta: {:.4}", price, delta);
//! ```
//!
//! ## Mathematical Foundation
//!
//! Under Black-Scholes, the underlying follows geometric Brownian motion with
//! constant rate and volatility:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//! European option values then have closed-form solutions in terms of the
//! standard normal CDF Φ(x) evaluated at the log-moneyness quantities d₁, d₂.

// Module declarations
pub mod error;
pub mod math_utils;
pub mod params;
pub mod pricing;
pub mod sweep;
pub mod output;

// Re-export commonly used types for convenience
pub use error::{PricingError, PricingResult};
pub use params::{OptionParameters, OptionType};
