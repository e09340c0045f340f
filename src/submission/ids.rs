//! Identifier extraction from test-set filenames.

use crate::errors::{Result, SubmissionError};

/// Offset used by the flat `test/unknown/` style layouts the fixed-offset
/// strategy was written for.
pub const DEFAULT_ID_OFFSET: usize = 10;

/// How an integer id is recovered from a filename.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// Strip directories, then parse the text before the first `.`.
    #[default]
    Basename,
    /// Parse the text from a fixed character offset up to the first `.` of
    /// the whole name.
    FixedOffset { offset: usize },
}

/// Extract the integer id encoded in `filename`.
///
/// # Examples
///
/// ```
/// use submitfmt::submission::{extract_id, IdStrategy};
///
/// assert_eq!(extract_id("unknown/10023.jpg", IdStrategy::Basename).unwrap(), 10023);
/// assert!(extract_id("unknown/cat", IdStrategy::Basename).is_err());
/// ```
pub fn extract_id(filename: &str, strategy: IdStrategy) -> Result<i64> {
    let stem = match strategy {
        IdStrategy::Basename => basename_stem(filename)?,
        IdStrategy::FixedOffset { offset } => offset_stem(filename, offset)?,
    };
    parse_stem(filename, stem)
}

fn basename_stem(filename: &str) -> Result<&str> {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    let period = name
        .find('.')
        .ok_or_else(|| SubmissionError::parse(filename, "no '.' in file name"))?;
    Ok(&name[..period])
}

fn offset_stem(filename: &str, offset: usize) -> Result<&str> {
    let period = filename
        .find('.')
        .ok_or_else(|| SubmissionError::parse(filename, "no '.' in file name"))?;
    let start = byte_index_of_char(filename, offset).ok_or_else(|| {
        SubmissionError::parse(
            filename,
            format!("name is shorter than id offset {}", offset),
        )
    })?;
    if start > period {
        return Err(SubmissionError::parse(
            filename,
            format!("first '.' precedes id offset {}", offset),
        ));
    }
    Ok(&filename[start..period])
}

fn byte_index_of_char(text: &str, char_offset: usize) -> Option<usize> {
    text.char_indices()
        .map(|(index, _)| index)
        .chain(std::iter::once(text.len()))
        .nth(char_offset)
}

fn parse_stem(filename: &str, stem: &str) -> Result<i64> {
    if stem.is_empty() {
        return Err(SubmissionError::parse(filename, "empty id before '.'"));
    }
    stem.parse::<i64>().map_err(|e| {
        SubmissionError::parse(filename, format!("'{}' is not an integer: {}", stem, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename_extracts_id() {
        assert_eq!(extract_id("unknown/10023.jpg", IdStrategy::Basename).unwrap(), 10023);
        assert_eq!(extract_id("unknown/7.jpg", IdStrategy::Basename).unwrap(), 7);
        assert_eq!(extract_id("a/12.jpg", IdStrategy::Basename).unwrap(), 12);
        assert_eq!(extract_id("42.png", IdStrategy::Basename).unwrap(), 42);
    }

    #[test]
    fn test_basename_handles_windows_separators() {
        assert_eq!(extract_id(r"test\unknown\31.jpg", IdStrategy::Basename).unwrap(), 31);
    }

    #[test]
    fn test_basename_ignores_periods_in_directories() {
        assert_eq!(extract_id("v1.2/unknown/88.jpg", IdStrategy::Basename).unwrap(), 88);
    }

    #[test]
    fn test_basename_stops_at_first_period() {
        assert_eq!(extract_id("unknown/5.aug.jpg", IdStrategy::Basename).unwrap(), 5);
    }

    #[test]
    fn test_missing_period_is_parse_error() {
        let err = extract_id("unknown/10023", IdStrategy::Basename).unwrap_err();
        assert!(matches!(err, SubmissionError::Parse { .. }));
    }

    #[test]
    fn test_non_numeric_stem_is_parse_error() {
        let err = extract_id("unknown/cat.jpg", IdStrategy::Basename).unwrap_err();
        assert!(err.to_string().contains("'cat' is not an integer"));
    }

    #[test]
    fn test_empty_stem_is_parse_error() {
        assert!(extract_id("unknown/.jpg", IdStrategy::Basename).is_err());
    }

    #[test]
    fn test_fixed_offset_extracts_id() {
        let strategy = IdStrategy::FixedOffset { offset: 10 };
        assert_eq!(extract_id("test1/unk/10023.jpg", strategy).unwrap(), 10023);
        assert_eq!(extract_id("unknown/10023.jpg", strategy).unwrap(), 23);
    }

    #[test]
    fn test_fixed_offset_period_before_offset() {
        let strategy = IdStrategy::FixedOffset { offset: 10 };
        let err = extract_id("a/12.jpg", strategy).unwrap_err();
        assert!(err.to_string().contains("precedes id offset"));
    }

    #[test]
    fn test_fixed_offset_empty_slice() {
        // Period exactly at the offset leaves nothing to parse.
        let strategy = IdStrategy::FixedOffset { offset: 4 };
        assert!(extract_id("abcd.jpg", strategy).is_err());
    }

    #[test]
    fn test_fixed_offset_name_too_short() {
        let strategy = IdStrategy::FixedOffset { offset: 50 };
        let err = extract_id("unknown/1.jpg", strategy).unwrap_err();
        assert!(err.to_string().contains("shorter than id offset"));
    }

    #[test]
    fn test_fixed_offset_counts_characters_not_bytes() {
        let strategy = IdStrategy::FixedOffset { offset: 3 };
        assert_eq!(extract_id("éàü17.jpg", strategy).unwrap(), 17);
    }

    #[test]
    fn test_fixed_offset_missing_period() {
        let strategy = IdStrategy::FixedOffset { offset: 2 };
        assert!(extract_id("ab123", strategy).is_err());
    }
}
