//! Submission formatter.
//!
//! Turns filenames plus a two-column probability table into the competition
//! submission file:
//!
//! 1. clip the positive-class probability into [`ClipBounds`]
//! 2. extract an integer id from every filename ([`IdStrategy`])
//! 3. pair ids with probabilities row by row and sort ascending by id
//! 4. render `id,label` lines and replace the output file in one write
//!
//! Any failure aborts before the output file is touched.

pub mod clip;
pub mod ids;
pub mod render;

pub use clip::{clip_probability, ClipBounds};
pub use ids::{extract_id, IdStrategy, DEFAULT_ID_OFFSET};
pub use render::{render_submission, DEFAULT_PRECISION, HEADER};

use crate::core::{PredictionTable, Submission, SubmissionRow};
use crate::errors::{Result, SubmissionError};
use crate::io::{FileDestination, OutputDestination};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "data";
pub const DEFAULT_FILE_NAME: &str = "subm_full.csv";

/// Largest precision that still distinguishes every f64 in [0, 1].
pub const MAX_PRECISION: usize = 17;

/// Everything that shapes the submission besides the data itself.
#[derive(Clone, Debug, PartialEq)]
pub struct FormatOptions {
    pub output_dir: PathBuf,
    pub file_name: String,
    pub clip: ClipBounds,
    pub ids: IdStrategy,
    pub precision: usize,
    pub create_dir: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_name: DEFAULT_FILE_NAME.to_string(),
            clip: ClipBounds::default(),
            ids: IdStrategy::default(),
            precision: DEFAULT_PRECISION,
            create_dir: false,
        }
    }
}

impl FormatOptions {
    /// Default options writing `<output_dir>/<file_name>`.
    pub fn with_file_name(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Self::default()
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }

    pub fn validate(&self) -> Result<()> {
        self.clip.validate()?;
        if self.file_name.is_empty() {
            return Err(SubmissionError::config("output file name is empty"));
        }
        if self.file_name.contains(['/', '\\']) {
            return Err(SubmissionError::config(format!(
                "output file name '{}' must not contain a path separator; set the output directory instead",
                self.file_name
            )));
        }
        if self.precision > MAX_PRECISION {
            return Err(SubmissionError::config(format!(
                "precision {} exceeds maximum of {}",
                self.precision, MAX_PRECISION
            )));
        }
        Ok(())
    }
}

/// Outcome of a successful run. Displays as the confirmation message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionReport {
    pub path: PathBuf,
    pub rows: usize,
}

impl fmt::Display for SubmissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File saved as {}.", self.path.display())
    }
}

/// Clip, pair and sort. Row `i` of `filenames` belongs to row `i` of
/// `predictions`.
pub fn build_submission<S: AsRef<str>>(
    filenames: &[S],
    predictions: &PredictionTable,
    clip: ClipBounds,
    ids: IdStrategy,
) -> Result<Submission> {
    if filenames.len() != predictions.len() {
        return Err(SubmissionError::ShapeMismatch {
            filenames: filenames.len(),
            predictions: predictions.len(),
        });
    }

    let rows = filenames
        .iter()
        .zip(predictions.positive_column())
        .enumerate()
        .map(|(row, (filename, probability))| {
            if probability.is_nan() {
                return Err(SubmissionError::InvalidProbability {
                    row,
                    value: probability,
                });
            }
            Ok(SubmissionRow {
                id: extract_id(filename.as_ref(), ids)?,
                label: clip.apply(probability),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Submission::from_unsorted(rows))
}

/// Build and render the submission, then hand it to `destination` in a
/// single write. Returns the number of data rows written.
pub fn write_submission<S: AsRef<str>>(
    filenames: &[S],
    predictions: &PredictionTable,
    options: &FormatOptions,
    destination: &dyn OutputDestination,
) -> Result<usize> {
    options.validate()?;

    let submission = build_submission(filenames, predictions, options.clip, options.ids)?;
    log::debug!(
        "Built {} submission rows (clip [{}, {}], ids {:?})",
        submission.len(),
        options.clip.lower,
        options.clip.upper,
        options.ids
    );

    let content = render_submission(&submission, options.precision);
    destination.write_str(&content).inspect_err(|e| {
        log::debug!("Writing to {} failed: {}", destination.description(), e);
    })?;
    log::debug!("Wrote submission to {}", destination.description());
    Ok(submission.len())
}

/// Write the submission to `<output_dir>/<file_name>`, replacing any
/// existing file, and log a confirmation naming the path.
pub fn format_submission<S: AsRef<str>>(
    filenames: &[S],
    predictions: &PredictionTable,
    options: &FormatOptions,
) -> Result<SubmissionReport> {
    let path = options.output_path();
    let destination = FileDestination::new(path.clone()).with_create_dir(options.create_dir);
    let rows = write_submission(filenames, predictions, options, &destination)?;

    let report = SubmissionReport { path, rows };
    log::info!("{} ({} rows)", report, report.rows);
    Ok(report)
}
