// tests/properties_test.rs
use bs_greeks::params::{OptionParameters, OptionType};
use bs_greeks::pricing::black_scholes;

static SPOTS: [f64; 5] = [10.0, 30.0, 55.0, 100.0, 250.0];
static STRIKES: [f64; 3] = [40.0, 100.0, 180.0];
static MATURITIES: [f64; 3] = [0.05, 0.6027397260273972, 2.0];
static RATES: [f64; 3] = [0.0, 0.05, 0.13];
static VOLS: [f64; 3] = [0.1, 0.43, 0.9];

fn grid() -> impl Iterator<Item = OptionParameters> {
    SPOTS.iter().flat_map(move |&s| {
        STRIKES.iter().flat_map(move |&k| {
            MATURITIES.iter().flat_map(move |&t| {
                RATES.iter().flat_map(move |&r| {
                    VOLS.iter().map(move |&sigma| {
                        OptionParameters::new(s, k, t, r, sigma).expect("Valid grid point")
                    })
                })
            })
        })
    })
}

#[test]
fn test_put_call_parity_on_grid() {
    for p in grid() {
        let call = black_scholes::price(OptionType::Call, &p).unwrap();
        let put = black_scholes::price(OptionType::Put, &p).unwrap();
        let parity = p.spot - p.strike * (-p.risk_free_rate * p.time_to_maturity).exp();

        let abs_error = ((call - put) - parity).abs();
        let scale = p.spot.max(p.strike);
        assert!(
            abs_error / scale < 1e-6,
            "Put-call parity violated at {:?}: C-P = {}, S-Ke^-rT = {}",
            p,
            call - put,
            parity
        );
    }
}

#[test]
fn test_delta_bounds_on_grid() {
    for p in grid() {
        let call_delta = black_scholes::delta(OptionType::Call, &p).unwrap();
        let put_delta = black_scholes::delta(OptionType::Put, &p).unwrap();

        assert!(
            (0.0..=1.0).contains(&call_delta),
            "Call delta out of [0,1] at {:?}: {}",
            p,
            call_delta
        );
        assert!(
            (-1.0..=0.0).contains(&put_delta),
            "Put delta out of [-1,0] at {:?}: {}",
            p,
            put_delta
        );
    }
}

#[test]
fn test_gamma_positive_on_grid() {
    for p in grid() {
        let gamma = black_scholes::gamma(&p).unwrap();
        assert!(gamma > 0.0, "Gamma not positive at {:?}: {}", p, gamma);
    }
}

#[test]
fn test_gamma_and_vega_same_for_call_and_put() {
    for p in grid() {
        let call_report = black_scholes::greeks(OptionType::Call, &p).unwrap();
        let put_report = black_scholes::greeks(OptionType::Put, &p).unwrap();

        assert_eq!(call_report.gamma, put_report.gamma, "Gamma differs at {:?}", p);
        assert_eq!(call_report.vega, put_report.vega, "Vega differs at {:?}", p);
    }
}

#[test]
fn test_call_price_non_decreasing_in_spot() {
    let base = OptionParameters::new(30.0, 40.0, 0.6027397260273972, 0.13, 0.43).unwrap();

    let mut previous = f64::NEG_INFINITY;
    for i in 1..=200 {
        let p = OptionParameters {
            spot: i as f64,
            ..base
        };
        let price = black_scholes::price(OptionType::Call, &p).unwrap();
        assert!(
            price >= previous,
            "Call price decreased from {} to {} at spot {}",
            previous,
            price,
            p.spot
        );
        previous = price;
    }
}

#[test]
fn test_put_price_non_increasing_in_spot() {
    let base = OptionParameters::new(30.0, 40.0, 0.6027397260273972, 0.13, 0.43).unwrap();

    let mut previous = f64::INFINITY;
    for i in 1..=200 {
        let p = OptionParameters {
            spot: i as f64,
            ..base
        };
        let price = black_scholes::price(OptionType::Put, &p).unwrap();
        assert!(
            price <= previous,
            "Put price increased from {} to {} at spot {}",
            previous,
            price,
            p.spot
        );
        previous = price;
    }
}

#[test]
fn test_call_price_non_decreasing_in_volatility() {
    let base = OptionParameters::new(30.0, 40.0, 0.6027397260273972, 0.13, 0.43).unwrap();

    let mut previous = f64::NEG_INFINITY;
    for i in 1..=100 {
        let p = OptionParameters {
            volatility: i as f64 * 0.02,
            ..base
        };
        let price = black_scholes::price(OptionType::Call, &p).unwrap();
        assert!(
            price >= previous,
            "Call price decreased from {} to {} at sigma {}",
            previous,
            price,
            p.volatility
        );
        previous = price;
    }
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let p = OptionParameters::new(30.0, 40.0, 0.6027397260273972, 0.13, 0.43).unwrap();

    for payoff in [OptionType::Call, OptionType::Put] {
        let first_price = black_scholes::price(payoff, &p).unwrap();
        let first_greeks = black_scholes::greeks(payoff, &p).unwrap();

        for _ in 0..10 {
            assert_eq!(black_scholes::price(payoff, &p).unwrap(), first_price);
            assert_eq!(black_scholes::greeks(payoff, &p).unwrap(), first_greeks);
        }
    }
}
