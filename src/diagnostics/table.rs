//! In-memory diagnostic table
//!
//! A [`DiagnosticTable`] is the validated, immutable form of a simulation log:
//! one [`DiagnosticRow`] per step, every row carrying the same metric columns.
//! Tables are only produced through [`TableBuilder`], which enforces the
//! invariants row by row so that a loader can fail on the first bad row.

use std::collections::HashSet;

use super::error::{LoadError, RowDefect};

/// Name of the step index column
pub const STEP: &str = "Step";

/// Name of the kinetic energy metric (stability panel)
pub const KINETIC_ENERGY: &str = "KineticEnergy";

/// Name of the total mass metric (conservation panel)
pub const TOTAL_MASS: &str = "TotalMass";

/// Columns every log must provide, in the order they are checked
pub const REQUIRED_COLUMNS: [&str; 3] = [STEP, KINETIC_ENERGY, TOTAL_MASS];

/// Metrics that must be finite on every row
const FINITE_METRICS: [&str; 2] = [KINETIC_ENERGY, TOTAL_MASS];

/// One simulation step: the step index and one value per metric column
///
/// `values` is aligned with [`DiagnosticTable::columns`].
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticRow {
    pub step: u64,
    pub values: Vec<f64>,
}

impl DiagnosticRow {
    pub fn new(step: u64, values: Vec<f64>) -> Self {
        Self { step, values }
    }
}

/// Validated per-step diagnostics
///
/// # Invariants
///
/// - at least one row
/// - steps strictly increasing (file order, never re-sorted)
/// - every row has one value per metric column
/// - `KineticEnergy` and `TotalMass` are finite on every row
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticTable {
    columns: Vec<String>,
    rows: Vec<DiagnosticRow>,
    kinetic_energy_index: usize,
    total_mass_index: usize,
}

impl DiagnosticTable {
    /// Build a table from a header and already-parsed rows.
    ///
    /// `header` is the full header including [`STEP`]; each row's `values`
    /// follow the header order with the step column removed.
    ///
    /// # Errors
    ///
    /// Any violated invariant, reported as the loader would report it.
    pub fn from_rows<S: AsRef<str>>(
        header: &[S],
        rows: impl IntoIterator<Item = DiagnosticRow>,
    ) -> Result<Self, LoadError> {
        let mut builder = TableBuilder::new(header)?;
        for row in rows {
            builder.push(row.step, row.values)?;
        }
        builder.finish()
    }

    /// Number of rows (steps)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false` for a constructed table
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Metric column names in header order, without `Step`
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[DiagnosticRow] {
        &self.rows
    }

    /// Position of a metric in each row's `values`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Step sequence, in row order
    pub fn steps(&self) -> Vec<u64> {
        self.rows.iter().map(|r| r.step).collect()
    }

    /// First and last step
    pub fn step_span(&self) -> (u64, u64) {
        // A constructed table always has at least one row
        let first = self.rows.first().map_or(0, |r| r.step);
        let last = self.rows.last().map_or(first, |r| r.step);
        (first, last)
    }

    /// Values of any metric column, or `None` if the column does not exist
    pub fn metric(&self, name: &str) -> Option<Vec<f64>> {
        self.column_index(name).map(|i| self.column_values(i))
    }

    /// Value of a metric at a given row index
    pub fn value(&self, row: usize, name: &str) -> Option<f64> {
        let column = self.column_index(name)?;
        self.rows.get(row).map(|r| r.values[column])
    }

    pub fn kinetic_energy(&self) -> Vec<f64> {
        self.column_values(self.kinetic_energy_index)
    }

    pub fn total_mass(&self) -> Vec<f64> {
        self.column_values(self.total_mass_index)
    }

    fn column_values(&self, index: usize) -> Vec<f64> {
        self.rows.iter().map(|r| r.values[index]).collect()
    }
}

/// Incremental, validating constructor for [`DiagnosticTable`]
///
/// Rows are checked as they are pushed, so the first defect aborts the build
/// and carries its 1-based row number.
#[derive(Debug)]
pub struct TableBuilder {
    step_position: usize,
    columns: Vec<String>,
    rows: Vec<DiagnosticRow>,
    kinetic_energy_index: usize,
    total_mass_index: usize,
    finite_indices: Vec<usize>,
}

impl TableBuilder {
    /// Validate a header and prepare to receive rows.
    ///
    /// # Errors
    ///
    /// - [`LoadError::DuplicateColumn`] if a name repeats
    /// - [`LoadError::MissingColumn`] for the first absent required column
    pub fn new<S: AsRef<str>>(header: &[S]) -> Result<Self, LoadError> {
        let mut seen = HashSet::with_capacity(header.len());
        for name in header {
            let name = name.as_ref();
            if !seen.insert(name) {
                return Err(LoadError::DuplicateColumn { column: name.to_string() });
            }
        }

        for required in REQUIRED_COLUMNS {
            if !seen.contains(required) {
                return Err(LoadError::MissingColumn { column: required.to_string() });
            }
        }

        let step_position = header
            .iter()
            .position(|h| h.as_ref() == STEP)
            .ok_or_else(|| LoadError::MissingColumn { column: STEP.to_string() })?;

        let columns: Vec<String> = header
            .iter()
            .map(|h| h.as_ref())
            .filter(|h| *h != STEP)
            .map(str::to_string)
            .collect();

        let index_of = |name: &str| {
            columns
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| LoadError::MissingColumn { column: name.to_string() })
        };
        let kinetic_energy_index = index_of(KINETIC_ENERGY)?;
        let total_mass_index = index_of(TOTAL_MASS)?;
        let finite_indices = FINITE_METRICS
            .into_iter()
            .map(&index_of)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            step_position,
            columns,
            rows: Vec::new(),
            kinetic_energy_index,
            total_mass_index,
            finite_indices,
        })
    }

    /// Position of `Step` in the original header
    pub fn step_position(&self) -> usize {
        self.step_position
    }

    /// Number of fields a full row has, `Step` included
    pub fn field_count(&self) -> usize {
        self.columns.len() + 1
    }

    /// Metric column names, `Step` excluded
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// 1-based number the next pushed row will carry
    pub fn next_row_number(&self) -> usize {
        self.rows.len() + 1
    }

    /// Append one row after checking field count, step order and finiteness.
    pub fn push(&mut self, step: u64, values: Vec<f64>) -> Result<(), LoadError> {
        let row = self.next_row_number();

        if values.len() != self.columns.len() {
            return Err(LoadError::MalformedRow {
                row,
                defect: RowDefect::FieldCount {
                    expected: self.field_count(),
                    found: values.len() + 1,
                },
            });
        }

        if let Some(previous) = self.rows.last().map(|r| r.step) {
            if step <= previous {
                return Err(LoadError::MalformedRow {
                    row,
                    defect: RowDefect::StepOrder { previous, found: step },
                });
            }
        }

        for &index in &self.finite_indices {
            let value = values[index];
            if !value.is_finite() {
                return Err(LoadError::NonFiniteValue {
                    row,
                    column: self.columns[index].clone(),
                    value,
                });
            }
        }

        self.rows.push(DiagnosticRow { step, values });
        Ok(())
    }

    /// Finish the table.
    ///
    /// # Errors
    ///
    /// [`LoadError::EmptyTable`] if no row was pushed.
    pub fn finish(self) -> Result<DiagnosticTable, LoadError> {
        if self.rows.is_empty() {
            return Err(LoadError::EmptyTable);
        }

        Ok(DiagnosticTable {
            columns: self.columns,
            rows: self.rows,
            kinetic_energy_index: self.kinetic_energy_index,
            total_mass_index: self.total_mass_index,
        })
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: [&str; 3] = ["Step", "KineticEnergy", "TotalMass"];

    fn rows(data: &[(u64, f64, f64)]) -> Vec<DiagnosticRow> {
        data.iter()
            .map(|&(s, ke, m)| DiagnosticRow::new(s, vec![ke, m]))
            .collect()
    }

    #[test]
    fn test_from_rows_basic() {
        let table = DiagnosticTable::from_rows(
            &HEADER,
            rows(&[(0, 10.0, 50.0), (1, 10.2, 50.0), (2, 9.9, 50.1)]),
        )
        .unwrap();

        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert_eq!(table.steps(), vec![0, 1, 2]);
        assert_eq!(table.kinetic_energy(), vec![10.0, 10.2, 9.9]);
        assert_eq!(table.total_mass(), vec![50.0, 50.0, 50.1]);
        assert_eq!(table.step_span(), (0, 2));
    }

    #[test]
    fn test_step_column_can_be_anywhere() {
        let header = ["TotalMass", "Step", "Residual", "KineticEnergy"];
        let table = DiagnosticTable::from_rows(
            &header,
            vec![DiagnosticRow::new(5, vec![1.0, 0.1, 2.0])],
        )
        .unwrap();

        assert_eq!(table.columns(), &["TotalMass", "Residual", "KineticEnergy"]);
        assert_eq!(table.total_mass(), vec![1.0]);
        assert_eq!(table.kinetic_energy(), vec![2.0]);
        assert_eq!(table.metric("Residual"), Some(vec![0.1]));
        assert_eq!(table.value(0, "KineticEnergy"), Some(2.0));
        assert_eq!(table.metric("Density"), None);
    }

    #[test]
    fn test_missing_column() {
        let err = TableBuilder::new(&["Step", "KineticEnergy"]).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { ref column } if column == "TotalMass"));

        let err = TableBuilder::new(&["KineticEnergy", "TotalMass"]).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { ref column } if column == "Step"));
    }

    #[test]
    fn test_duplicate_column() {
        let err = TableBuilder::new(&["Step", "TotalMass", "KineticEnergy", "TotalMass"])
            .unwrap_err();
        assert!(matches!(err, LoadError::DuplicateColumn { ref column } if column == "TotalMass"));
    }

    #[test]
    fn test_empty_table() {
        let err = DiagnosticTable::from_rows(&HEADER, Vec::new()).unwrap_err();
        assert!(matches!(err, LoadError::EmptyTable));
    }

    #[test]
    fn test_duplicate_step_rejected() {
        let err = DiagnosticTable::from_rows(&HEADER, rows(&[(0, 1.0, 1.0), (0, 1.0, 1.0)]))
            .unwrap_err();
        match err {
            LoadError::MalformedRow { row, defect } => {
                assert_eq!(row, 2);
                assert_eq!(defect, RowDefect::StepOrder { previous: 0, found: 0 });
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decreasing_step_rejected() {
        let err = DiagnosticTable::from_rows(
            &HEADER,
            rows(&[(0, 1.0, 1.0), (10, 1.0, 1.0), (5, 1.0, 1.0)]),
        )
        .unwrap_err();
        assert_eq!(err.row(), Some(3));
    }

    #[test]
    fn test_wrong_value_count_rejected() {
        let err = DiagnosticTable::from_rows(&HEADER, vec![DiagnosticRow::new(0, vec![1.0])])
            .unwrap_err();
        match err {
            LoadError::MalformedRow { row: 1, defect } => {
                assert_eq!(defect, RowDefect::FieldCount { expected: 3, found: 2 });
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_required_metric_rejected() {
        let err = DiagnosticTable::from_rows(
            &HEADER,
            rows(&[(0, 1.0, 50.0), (1, f64::INFINITY, 50.0)]),
        )
        .unwrap_err();
        match err {
            LoadError::NonFiniteValue { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "KineticEnergy");
                assert!(value.is_infinite());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_extra_metric_is_carried() {
        let header = ["Step", "KineticEnergy", "TotalMass", "Residual"];
        let table = DiagnosticTable::from_rows(
            &header,
            vec![DiagnosticRow::new(0, vec![1.0, 2.0, f64::NAN])],
        )
        .unwrap();
        assert!(table.value(0, "Residual").unwrap().is_nan());
    }

    #[test]
    fn test_builder_row_numbering() {
        let mut builder = TableBuilder::new(&HEADER).unwrap();
        assert_eq!(builder.next_row_number(), 1);
        assert_eq!(builder.field_count(), 3);
        assert_eq!(builder.step_position(), 0);
        builder.push(0, vec![1.0, 1.0]).unwrap();
        assert_eq!(builder.next_row_number(), 2);
    }
}
