// demos/demo.rs
use bs_greeks::output;
use bs_greeks::params::{OptionParameters, OptionType};
use bs_greeks::pricing::black_scholes;
use bs_greeks::sweep::{self, GreekSelection, SweepConfig};

fn main() {
    println!("Running bs-greeks European Option Pricing Demo\n");

    // Deep out-of-the-money call scenario: spot 30, strike 40, 220 days,
    // r = 13%, sigma = 43%
    let spot = 30.0;
    let strike = 40.0;
    let days_to_expiry = 220;
    let r = 0.13;
    let sigma = 0.43;

    let params = OptionParameters::from_days_to_expiry(spot, strike, days_to_expiry, r, sigma)
        .expect("Valid parameters");

    println!(
        "Contract: S={}, K={}, T={} days ({:.4}y), r={}, sigma={}\n",
        spot, strike, days_to_expiry, params.time_to_maturity, r, sigma
    );

    let call_price = black_scholes::price(OptionType::Call, &params).expect("Valid parameters");
    let put_price = black_scholes::price(OptionType::Put, &params).expect("Valid parameters");
    let parity = spot - strike * (-r * params.time_to_maturity).exp();

    println!("Prices:");
    println!("  Call: {:.4}", call_price);
    println!("  Put:  {:.4}", put_price);
    println!(
        "  Put-call parity check: C - P = {:.6} vs S - K*e^(-rT) = {:.6}\n",
        call_price - put_price,
        parity
    );

    for payoff in [OptionType::Call, OptionType::Put] {
        let greeks = black_scholes::greeks(payoff, &params).expect("Valid parameters");
        println!("{} Greeks:", payoff);
        println!("  Delta: {:>9.4}", greeks.delta);
        println!("  Gamma: {:>9.4}", greeks.gamma);
        println!("  Vega:  {:>9.4}  (per 1% vol move)", greeks.vega);
        println!("  Theta: {:>9.4}  (per calendar day)", greeks.theta);
        println!("  Rho:   {:>9.4}  (per 1% rate move)", greeks.rho);
        println!();
    }

    // Sweep spot from 1 to spot + 100, one engine call per grid point,
    // the data behind a plotted Greek profile
    let sweep_cfg = SweepConfig {
        payoff: OptionType::Call,
        params,
        spot_start: 1.0,
        spot_stop: spot + 100.0,
        points: 130,
        greeks: GreekSelection::ALL,
    };

    let result = sweep::run(&sweep_cfg).expect("Valid sweep configuration");
    println!(
        "Swept {} spots in [{}, {}]",
        result.spots.len(),
        sweep_cfg.spot_start,
        sweep_cfg.spot_stop
    );

    let filename = "greeks_sweep.csv";
    match output::write_sweep_to_csv(filename, &result) {
        Ok(()) => println!("Sweep written to {}", filename),
        Err(e) => eprintln!("Could not write {}: {}", filename, e),
    }

    // Single-point summary table: both prices plus the call's Greeks
    let call_greeks = black_scholes::greeks(OptionType::Call, &params).expect("Valid parameters");
    let summary_filename = "greeks_summary.csv";
    let summary = [
        ("call_price", call_price),
        ("put_price", put_price),
        ("delta", call_greeks.delta),
        ("gamma", call_greeks.gamma),
        ("vega", call_greeks.vega),
        ("theta", call_greeks.theta),
        ("rho", call_greeks.rho),
    ];
    match output::write_summary_to_csv(summary_filename, &summary) {
        Ok(()) => println!("Summary written to {}", summary_filename),
        Err(e) => eprintln!("Could not write {}: {}", summary_filename, e),
    }

    // Invalid inputs fail with a named constraint, never a NaN price
    let expired = OptionParameters::new(spot, strike, 0.0, r, sigma);
    if let Err(e) = expired {
        println!("\nRejected input example: {}", e);
    }
    if let Err(e) = "Straddle".parse::<OptionType>() {
        println!("Rejected payoff example: {}", e);
    }
}
