// src/pricing/mod.rs
pub mod black_scholes;

pub use black_scholes::GreeksReport;
