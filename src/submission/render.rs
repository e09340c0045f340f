//! Text rendering of a submission.

use crate::core::Submission;

/// First line of every submission file.
pub const HEADER: &str = "id,label";

/// Fractional digits written for each label.
pub const DEFAULT_PRECISION: usize = 5;

/// Render `id,label` followed by one `<id>,<label>` line per row.
///
/// Labels use fixed-point notation with `precision` fractional digits. Every
/// line, including the last, ends with `\n`.
pub fn render_submission(submission: &Submission, precision: usize) -> String {
    // "<id>,0.xxxxx\n" is rarely longer than 24 bytes.
    let mut out = String::with_capacity(HEADER.len() + 1 + submission.len() * 24);
    out.push_str(HEADER);
    out.push('\n');
    for row in submission.rows() {
        out.push_str(&format!("{},{:.*}\n", row.id, precision, row.label));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SubmissionRow;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_matches_submission_format() {
        let submission = Submission::from_unsorted(vec![
            SubmissionRow { id: 7, label: 0.02 },
            SubmissionRow { id: 3, label: 0.98 },
        ]);
        let expected = indoc! {"
            id,label
            3,0.98000
            7,0.02000
        "};
        assert_eq!(render_submission(&submission, DEFAULT_PRECISION), expected);
    }

    #[test]
    fn test_render_empty_submission_is_header_only() {
        let rendered = render_submission(&Submission::default(), DEFAULT_PRECISION);
        assert_eq!(rendered, "id,label\n");
    }

    #[test]
    fn test_render_respects_precision() {
        let submission = Submission::from_unsorted(vec![SubmissionRow { id: 1, label: 0.5 }]);
        assert_eq!(render_submission(&submission, 2), "id,label\n1,0.50\n");
    }

    #[test]
    fn test_render_large_ids_without_separators() {
        let submission =
            Submission::from_unsorted(vec![SubmissionRow { id: 1_250_000, label: 0.123456 }]);
        assert_eq!(
            render_submission(&submission, DEFAULT_PRECISION),
            "id,label\n1250000,0.12346\n"
        );
    }
}
