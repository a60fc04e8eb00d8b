//! Helper functions for integration tests

use std::io::Write;

use tempfile::NamedTempFile;

/// Header written by the solver's logger
pub const SOLVER_HEADER: &str = "Step,KineticEnergy,TotalMass";

/// Write `content` to a temporary `.csv` file that lives as long as the handle.
pub fn write_log(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp log");
    file.write_all(content.as_bytes()).expect("write temp log");
    file.flush().expect("flush temp log");
    file
}

/// Build a log the way the solver prints it (`%d,%.6f,%.6f`).
pub fn solver_log(rows: &[(u64, f64, f64)]) -> String {
    let mut content = format!("{}\n", SOLVER_HEADER);
    for (step, energy, mass) in rows {
        content.push_str(&format!("{},{:.6},{:.6}\n", step, energy, mass));
    }
    content
}

/// Slowly decaying kinetic energy with a tiny linear mass drift.
pub fn decaying_run(steps: u64, mass_drift_per_step: f64) -> Vec<(u64, f64, f64)> {
    (0..steps)
        .map(|s| {
            let t = s as f64;
            (s * 10, 5.0 * (-0.01 * t).exp(), 1000.0 + mass_drift_per_step * t)
        })
        .collect()
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_solver_log_format() {
        let log = solver_log(&[(0, 1.5, 2.0)]);
        assert_eq!(log, "Step,KineticEnergy,TotalMass\n0,1.500000,2.000000\n");
    }
}
