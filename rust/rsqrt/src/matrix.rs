use thiserror::Error;
use unitnorm_error::{ErrorCodes, UnitnormError};

#[derive(Error, Debug, PartialEq)]
pub enum MatrixError {
    #[error("Row {row} has {got} components, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("A feature matrix requires at least one row")]
    Empty,
}

impl UnitnormError for MatrixError {
    fn code(&self) -> ErrorCodes {
        match self {
            MatrixError::RaggedRow { .. } => ErrorCodes::InvalidArgument,
            MatrixError::Empty => ErrorCodes::InvalidArgument,
        }
    }
}

/// Row-major feature matrix with a fixed dimension.
///
/// The dimension is set by the first row and every row is checked against it
/// at construction, so downstream code can rely on rows never being ragged.
/// The matrix owns its rows exclusively; normalization mutates them in place
/// through [`rows_mut`](FeatureMatrix::rows_mut).
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureMatrix {
    rows: Vec<Vec<f32>>,
    dim: usize,
}

impl FeatureMatrix {
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<FeatureMatrix, MatrixError> {
        let dim = rows.first().map(|row| row.len()).ok_or(MatrixError::Empty)?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(MatrixError::RaggedRow {
                    row: i,
                    expected: dim,
                    got: row.len(),
                });
            }
        }
        Ok(FeatureMatrix { rows, dim })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// Rows are handed out as slices so their lengths cannot change.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [f32]> {
        self.rows.iter_mut().map(|row| row.as_mut_slice())
    }

    pub fn into_rows(self) -> Vec<Vec<f32>> {
        self.rows
    }
}
