// src/sweep.rs
//! Spot-price sweeps over the pricing engine
//!
//! Evaluates price and selected Greeks at each point of a uniform spot grid,
//! holding the rest of the contract fixed. This is the data path behind a
//! plotted Greek profile: one engine call per swept spot, results surfaced
//! as parallel column vectors.
//!
//! Evaluation runs data-parallel with Rayon, but output ordering always
//! matches grid ordering (`par_iter().map().collect()` preserves it), so
//! callers can zip `spots` against any result column directly.

use crate::error::validation::{validate_finite, validate_points, validate_positive};
use crate::error::{PricingError, PricingResult};
use crate::params::{OptionParameters, OptionType};
use crate::pricing::black_scholes;
use bitflags::bitflags;
use rayon::prelude::*;

bitflags! {
    /// Which Greeks to evaluate per swept point
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GreekSelection: u32 {
        const NONE  = 0;
        const DELTA = 1 << 0;
        const GAMMA = 1 << 1;
        const VEGA  = 1 << 2;
        const THETA = 1 << 3;
        const RHO   = 1 << 4;
        const ALL   = Self::DELTA.bits()
                    | Self::GAMMA.bits()
                    | Self::VEGA.bits()
                    | Self::THETA.bits()
                    | Self::RHO.bits();
    }
}

/// Configuration for a spot-price sweep
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub payoff: OptionType,
    /// Contract held fixed across the sweep; its `spot` field is the
    /// reference point and is replaced by each grid value.
    pub params: OptionParameters,
    /// First spot on the grid, must be > 0 (the formulas take ln(S/K))
    pub spot_start: f64,
    /// Last spot on the grid, must exceed `spot_start`
    pub spot_stop: f64,
    /// Number of uniformly spaced grid points, at least 2
    pub points: usize,
    pub greeks: GreekSelection,
}

impl SweepConfig {
    /// Validate the sweep configuration
    pub fn validate(&self) -> PricingResult<()> {
        self.params.validate()?;
        validate_finite("spot_start", self.spot_start)?;
        validate_positive("spot_start", self.spot_start)?;
        validate_finite("spot_stop", self.spot_stop)?;
        validate_points(self.points)?;

        if self.spot_stop <= self.spot_start {
            return Err(PricingError::InvalidConfiguration {
                field: "spot_stop".to_string(),
                reason: format!("must exceed spot_start ({})", self.spot_start),
            });
        }

        Ok(())
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            payoff: OptionType::Call,
            params: OptionParameters {
                spot: 100.0,
                strike: 100.0,
                time_to_maturity: 1.0,
                risk_free_rate: 0.01,
                volatility: 0.2,
            },
            spot_start: 1.0,
            spot_stop: 200.0,
            points: 200,
            greeks: GreekSelection::ALL,
        }
    }
}

/// Result columns of a spot sweep
///
/// `spots` is the grid in ascending order; each populated column has the
/// same length and the same ordering. Columns for unselected Greeks are
/// `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub spots: Vec<f64>,
    pub prices: Vec<f64>,
    pub deltas: Option<Vec<f64>>,
    pub gammas: Option<Vec<f64>>,
    pub vegas: Option<Vec<f64>>,
    pub thetas: Option<Vec<f64>>,
    pub rhos: Option<Vec<f64>>,
}

/// One sweep point: price plus whichever Greeks were selected
struct SweepRow {
    price: f64,
    delta: Option<f64>,
    gamma: Option<f64>,
    vega: Option<f64>,
    theta: Option<f64>,
    rho: Option<f64>,
}

fn evaluate_row(cfg: &SweepConfig, spot: f64) -> PricingResult<SweepRow> {
    let p = cfg.params.at_spot(spot);
    Ok(SweepRow {
        price: black_scholes::price(cfg.payoff, &p)?,
        delta: if cfg.greeks.contains(GreekSelection::DELTA) {
            Some(black_scholes::delta(cfg.payoff, &p)?)
        } else {
            None
        },
        gamma: if cfg.greeks.contains(GreekSelection::GAMMA) {
            Some(black_scholes::gamma(&p)?)
        } else {
            None
        },
        vega: if cfg.greeks.contains(GreekSelection::VEGA) {
            Some(black_scholes::vega(&p)?)
        } else {
            None
        },
        theta: if cfg.greeks.contains(GreekSelection::THETA) {
            Some(black_scholes::theta(cfg.payoff, &p)?)
        } else {
            None
        },
        rho: if cfg.greeks.contains(GreekSelection::RHO) {
            Some(black_scholes::rho(cfg.payoff, &p)?)
        } else {
            None
        },
    })
}

/// Run a spot sweep
///
/// Evaluates the engine at `points` uniformly spaced spots in
/// `[spot_start, spot_stop]`, in parallel, preserving grid order in every
/// output column.
pub fn run(cfg: &SweepConfig) -> PricingResult<SweepResult> {
    cfg.validate()?;

    let step = (cfg.spot_stop - cfg.spot_start) / (cfg.points - 1) as f64;
    let spots: Vec<f64> = (0..cfg.points)
        .map(|i| cfg.spot_start + i as f64 * step)
        .collect();

    let rows: Vec<SweepRow> = spots
        .par_iter()
        .map(|&spot| evaluate_row(cfg, spot))
        .collect::<PricingResult<Vec<SweepRow>>>()?;

    let column = |f: fn(&SweepRow) -> Option<f64>| -> Option<Vec<f64>> {
        rows.iter().map(f).collect()
    };

    Ok(SweepResult {
        prices: rows.iter().map(|row| row.price).collect(),
        deltas: column(|row| row.delta),
        gammas: column(|row| row.gamma),
        vegas: column(|row| row.vega),
        thetas: column(|row| row.theta),
        rhos: column(|row| row.rho),
        spots,
    })
}
