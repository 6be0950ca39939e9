use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::warn;
use unitnorm_error::{ErrorCodes, UnitnormError};
use unitnorm_rsqrt::{FeatureMatrix, MatrixError};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line {line}, field {field}: `{token}` is not a number")]
    BadToken {
        line: usize,
        field: usize,
        token: String,
    },
    #[error("Input contains no rows")]
    Empty,
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

impl UnitnormError for LoadError {
    fn code(&self) -> ErrorCodes {
        match self {
            LoadError::Io(e) => e.code(),
            LoadError::BadToken { .. } => ErrorCodes::InvalidArgument,
            LoadError::Empty => ErrorCodes::NotFound,
            LoadError::Matrix(e) => e.code(),
        }
    }
}

/// What to do with tokens that fail to parse as a number.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ParseMode {
    /// Coerce malformed tokens to 0.0 with a warning. This replicates the
    /// historical loader contract and is the default.
    #[default]
    Lenient,
    /// Fail the whole load on the first malformed token.
    Strict,
}

/// Load a comma-delimited feature matrix from `path`.
///
/// An unreadable file is fatal to the load; there is no partial-matrix
/// recovery. Every row must have the dimension set by the first row.
pub fn load_matrix(path: impl AsRef<Path>, mode: ParseMode) -> Result<FeatureMatrix, LoadError> {
    let file = File::open(path)?;
    read_matrix(BufReader::new(file), mode)
}

/// Parse a feature matrix from any buffered reader. Blank lines are skipped.
pub fn read_matrix(reader: impl BufRead, mode: ParseMode) -> Result<FeatureMatrix, LoadError> {
    let mut rows = Vec::new();
    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for (field_index, token) in line.split(',').enumerate() {
            let token = token.trim();
            match token.parse::<f32>() {
                Ok(value) => row.push(value),
                Err(_) => match mode {
                    ParseMode::Strict => {
                        return Err(LoadError::BadToken {
                            line: line_index + 1,
                            field: field_index + 1,
                            token: token.to_string(),
                        });
                    }
                    ParseMode::Lenient => {
                        warn!(
                            line = line_index + 1,
                            field = field_index + 1,
                            token,
                            "coercing malformed token to 0.0"
                        );
                        row.push(0.0);
                    }
                },
            }
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(FeatureMatrix::from_rows(rows)?)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_a_well_formed_matrix() {
        let matrix = read_matrix(Cursor::new("1.0,2.0,3.0\n4.0,5.0,6.0\n"), ParseMode::Lenient)
            .unwrap();
        assert_eq!(matrix.dim(), 3);
        assert_eq!(matrix.len(), 2);
        let rows: Vec<&[f32]> = matrix.rows().collect();
        assert_eq!(rows[0], &[1.0, 2.0, 3.0]);
        assert_eq!(rows[1], &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn skips_blank_lines_and_tolerates_spaces() {
        let matrix =
            read_matrix(Cursor::new("1.0, 2.0\n\n 3.0 ,4.0\n"), ParseMode::Lenient).unwrap();
        assert_eq!(matrix.len(), 2);
    }

    #[test]
    fn lenient_mode_coerces_bad_tokens_to_zero() {
        let matrix = read_matrix(Cursor::new("1.0,oops\n2.0,3.0\n"), ParseMode::Lenient).unwrap();
        let rows: Vec<&[f32]> = matrix.rows().collect();
        assert_eq!(rows[0], &[1.0, 0.0]);
    }

    #[test]
    fn strict_mode_rejects_bad_tokens() {
        let err = read_matrix(Cursor::new("1.0,oops\n"), ParseMode::Strict).unwrap_err();
        match err {
            LoadError::BadToken { line, field, ref token } => {
                assert_eq!(line, 1);
                assert_eq!(field, 2);
                assert_eq!(token, "oops");
            }
            other => panic!("expected BadToken, got {other:?}"),
        }
        assert_eq!(err.code(), ErrorCodes::InvalidArgument);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = read_matrix(Cursor::new("1.0,2.0\n3.0\n"), ParseMode::Lenient).unwrap_err();
        assert!(matches!(err, LoadError::Matrix(MatrixError::RaggedRow { .. })));
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = read_matrix(Cursor::new("\n\n"), ParseMode::Lenient).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
        assert_eq!(err.code(), ErrorCodes::NotFound);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_matrix("/definitely/not/here.csv", ParseMode::Lenient).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
        assert_eq!(err.code(), ErrorCodes::NotFound);
    }

    #[test]
    fn loads_from_a_real_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "3.0,4.0\n6.0,8.0\n").unwrap();
        let matrix = load_matrix(file.path(), ParseMode::Lenient).unwrap();
        assert_eq!(matrix.dim(), 2);
        assert_eq!(matrix.len(), 2);
    }
}
