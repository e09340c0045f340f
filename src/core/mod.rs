//! Data model shared by the formatter, the writers and the CLI.

/// Index of the positive-class ("dog") probability in a prediction row.
pub const POSITIVE_COLUMN: usize = 1;

/// Two-column probability table, one row per test image.
///
/// Row `i` belongs to filename `i`; the table never reorders itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionTable {
    rows: Vec<[f64; 2]>,
}

impl PredictionTable {
    pub fn from_rows(rows: Vec<[f64; 2]>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[[f64; 2]] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Positive-class probabilities in row order.
    pub fn positive_column(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|row| row[POSITIVE_COLUMN])
    }
}

impl From<Vec<[f64; 2]>> for PredictionTable {
    fn from(rows: Vec<[f64; 2]>) -> Self {
        Self::from_rows(rows)
    }
}

/// One line of the submission file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubmissionRow {
    pub id: i64,
    pub label: f64,
}

/// Clipped rows sorted ascending by id, ready to be rendered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Submission {
    rows: Vec<SubmissionRow>,
}

impl Submission {
    /// Sorts `rows` by id. The sort is stable, so duplicate ids keep their
    /// input order.
    pub fn from_unsorted(mut rows: Vec<SubmissionRow>) -> Self {
        rows.sort_by_key(|row| row.id);
        Self { rows }
    }

    pub fn rows(&self) -> &[SubmissionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.rows.iter().map(|row| row.id)
    }
}
