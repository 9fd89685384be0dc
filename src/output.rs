// src/output.rs
use crate::sweep::SweepResult;
use std::fs::File;
use std::io::{self, Write};

/// Write sweep columns to CSV, one row per swept spot
///
/// Header names only the populated columns; unselected Greeks are omitted
/// rather than written as empty cells.
pub fn write_sweep_to_csv(filename: &str, result: &SweepResult) -> io::Result<()> {
    let mut file = File::create(filename)?;

    let mut header = String::from("spot,price");
    for (name, column) in [
        ("delta", &result.deltas),
        ("gamma", &result.gammas),
        ("vega", &result.vegas),
        ("theta", &result.thetas),
        ("rho", &result.rhos),
    ] {
        if column.is_some() {
            header.push(',');
            header.push_str(name);
        }
    }
    writeln!(file, "{}", header)?;

    for i in 0..result.spots.len() {
        let mut line = format!("{},{}", result.spots[i], result.prices[i]);
        for column in [
            &result.deltas,
            &result.gammas,
            &result.vegas,
            &result.thetas,
            &result.rhos,
        ]
        .into_iter()
        .flatten()
        {
            line.push_str(&format!(",{}", column[i]));
        }
        writeln!(file, "{}", line)?;
    }
    Ok(())
}

/// Write a metric/value summary table to CSV
///
/// The single-point counterpart of the sweep writer: one labelled row per
/// price or Greek, e.g. the call/put price and sensitivity tables shown
/// alongside a plotted profile.
pub fn write_summary_to_csv(filename: &str, summary_data: &[(&str, f64)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "metric,value")?;
    for (metric, value) in summary_data {
        writeln!(file, "{},{}", metric, value)?;
    }
    Ok(())
}
