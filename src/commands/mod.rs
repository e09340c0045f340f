pub mod format;
pub mod init;

pub use format::{run_format, FormatConfig};
pub use init::init_config;

use crate::errors::SubmissionError;

/// Exit status for bad inputs or configuration the user can correct.
pub const EXIT_USER_ERROR: u8 = 2;
/// Exit status for environmental failures (I/O, unexpected errors).
pub const EXIT_FAILURE: u8 = 1;

/// Pick the process exit status for a failed command.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    let user_fixable = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<SubmissionError>())
        .any(SubmissionError::is_user_fixable);

    if user_fixable {
        EXIT_USER_ERROR
    } else {
        EXIT_FAILURE
    }
}
