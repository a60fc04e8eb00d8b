//! End-to-end tests: log file on disk -> table -> figure
//!
//! These tests go through the public API only, the way the binary does.

use approx::assert_relative_eq;
use sim_diagnostics::input::{CsvLoadConfig, CsvLoader, Loader};
use sim_diagnostics::output::visualization::{render, FigureConfig};
use sim_diagnostics::{load, plot_diagnostics, LoadError, RowDefect};

mod common;
use common::{decaying_run, relative_error, solver_log, write_log, SOLVER_HEADER};

#[test]
fn test_three_step_log_end_to_end() {
    let file = write_log("Step,KineticEnergy,TotalMass\n0,10.0,50.0\n1,10.2,50.0\n2,9.9,50.1\n");

    let table = load(file.path()).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.steps(), vec![0, 1, 2]);

    let figure = render(&table, &FigureConfig::default());
    assert_eq!(figure.panels().len(), 2);

    let mass_axis = figure.conservation.y_range;
    assert!(mass_axis.lower < 50.0);
    assert!(mass_axis.upper > 50.1);
    assert!(mass_axis.brackets(50.0, 50.1));
}

#[test]
fn test_solver_formatted_log_round_trips() {
    let rows = decaying_run(200, 1e-5);
    let file = write_log(&solver_log(&rows));

    let table = load(file.path()).unwrap();
    assert_eq!(table.len(), rows.len());

    let steps = table.steps();
    assert!(steps.windows(2).all(|w| w[0] < w[1]));

    for (i, (step, energy, mass)) in rows.iter().enumerate() {
        assert_eq!(steps[i], *step);
        assert!(relative_error(table.kinetic_energy()[i], *energy) < 1e-6);
        assert!(relative_error(table.total_mass()[i], *mass) < 1e-9);
    }
}

#[test]
fn test_mass_drift_fills_conservation_axis() {
    // 0.02% drift over the run: invisible on an axis starting at zero
    let rows = decaying_run(101, 2e-3);
    let file = write_log(&solver_log(&rows));
    let table = load(file.path()).unwrap();

    let figure = render(&table, &FigureConfig::default());
    let axis = figure.conservation.y_range;
    let drift = 0.2;

    // The drift spans all but 2% of the axis
    assert_relative_eq!(drift / axis.width(), 1.0 / 1.02, epsilon = 1e-6);
}

#[test]
fn test_constant_mass_axis_is_not_degenerate() {
    let rows: Vec<_> = (0..3).map(|s| (s, 1.0, 100.0)).collect();
    let file = write_log(&solver_log(&rows));
    let table = load(file.path()).unwrap();

    let axis = render(&table, &FigureConfig::default()).conservation.y_range;
    assert!(axis.lower < axis.upper);
    assert!(axis.strictly_contains(100.0));
}

#[test]
fn test_solver_header_with_residual_column_requires_full_rows() {
    // A header announcing a column the rows never fill is a structural defect
    let file = write_log("Step,KineticEnergy,TotalMass,Residual\n0,1.000000,2.000000\n");
    let err = load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        LoadError::MalformedRow { row: 1, defect: RowDefect::FieldCount { expected: 4, found: 3 } }
    ));
}

#[test]
fn test_missing_total_mass() {
    let file = write_log("Step,KineticEnergy\n0,1.0\n");
    let err = load(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn { ref column } if column == "TotalMass"));
}

#[test]
fn test_header_only() {
    let file = write_log(&format!("{}\n", SOLVER_HEADER));
    assert!(matches!(load(file.path()).unwrap_err(), LoadError::EmptyTable));
}

#[test]
fn test_diverged_run_fails_before_plotting() {
    let file = write_log("Step,KineticEnergy,TotalMass\n0,10.0,50.0\n1,10.2,50.0\n2,9.9,50.1\n3,NaN,50.0\n");
    let err = load(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::NonFiniteValue { row: 4, .. }));
    assert_eq!(err.row(), Some(4));
}

#[test]
fn test_non_numeric_energy_reports_row() {
    let file = write_log("Step,KineticEnergy,TotalMass\n0,1.0,2.0\n1,oops,2.0\n");
    let err = load(file.path()).unwrap_err();
    assert_eq!(err.row(), Some(2));
    assert!(err.to_string().contains("oops"));
}

#[test]
fn test_missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(dir.path().join("simulation_log.csv")).unwrap_err();
    assert!(matches!(err, LoadError::SourceNotFound { .. }));
}

#[test]
fn test_semicolon_log_with_loader_config() {
    let file = write_log("Step;KineticEnergy;TotalMass\n0;1.0;2.0\n5;1.1;2.0\n");
    let loader = CsvLoader::new(CsvLoadConfig::european());
    let table = loader.load(file.path()).unwrap();
    assert_eq!(table.steps(), vec![0, 5]);
}

#[test]
fn test_plot_to_svg_file() {
    let file = write_log(&solver_log(&decaying_run(30, 1e-4)));
    let table = load(file.path()).unwrap();

    let out = tempfile::tempdir().unwrap();
    let path = out.path().join("diagnostics.svg");
    let figure = plot_diagnostics(&table, &path, None).unwrap();

    assert!(path.exists());
    assert_eq!(figure.stability.len(), 30);
    assert_eq!(figure.conservation.len(), 30);
}
