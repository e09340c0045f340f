//! Submission file formatter for binary image-classification competitions.
//!
//! Takes test-set filenames and a two-column probability table, clips the
//! positive-class probabilities, sorts rows by the id encoded in each
//! filename and writes an `id,label` CSV.
//!
//! ```no_run
//! use submitfmt::{format_submission, FormatOptions, PredictionTable};
//!
//! let filenames = ["unknown/12.jpg", "unknown/5.jpg"];
//! let predictions = PredictionTable::from_rows(vec![[0.1, 0.9], [0.8, 0.2]]);
//! let report = format_submission(&filenames, &predictions, &FormatOptions::default())?;
//! println!("{}", report);
//! # Ok::<(), submitfmt::SubmissionError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod submission;

pub use crate::core::{PredictionTable, Submission, SubmissionRow};
pub use crate::errors::{Result, SubmissionError};
pub use crate::submission::{
    build_submission, clip_probability, extract_id, format_submission, render_submission,
    write_submission, ClipBounds, FormatOptions, IdStrategy, SubmissionReport,
};
