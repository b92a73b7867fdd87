//! Matrix type for 2D numeric data.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MatrizError, Result};

/// Smallest accepted value for either matrix dimension.
pub const MIN_SIZE: usize = 1;

/// Largest accepted value for either matrix dimension.
pub const MAX_SIZE: usize = 100;

/// A 2D matrix of `f32` values (row-major storage).
///
/// Both dimensions are validated against `[MIN_SIZE, MAX_SIZE]` by every
/// constructor, so a `Matrix` in hand always holds a fully populated
/// `rows * cols` grid. Arithmetic never mutates an operand; each
/// operation allocates a fresh result.
///
/// # Examples
///
/// ```
/// use matriz::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

fn check_dimension(axis: &'static str, value: usize) -> Result<()> {
    if !(MIN_SIZE..=MAX_SIZE).contains(&value) {
        return Err(MatrizError::DimensionOutOfRange { axis, value });
    }
    Ok(())
}

impl Matrix {
    /// Creates a zero-filled `rows x cols` matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is outside `[MIN_SIZE, MAX_SIZE]`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        check_dimension("rows", rows)?;
        check_dimension("cols", cols)?;
        Ok(Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        })
    }

    /// Creates a new matrix from a vector of data in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is outside
    /// `[MIN_SIZE, MAX_SIZE]` or if data length doesn't match
    /// `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        check_dimension("rows", rows)?;
        check_dimension("cols", cols)?;
        if data.len() != rows * cols {
            return Err(MatrizError::DataLength {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates an `n x n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is outside `[MIN_SIZE, MAX_SIZE]`.
    pub fn eye(n: usize) -> Result<Self> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row_idx` is out of bounds.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> &[f32] {
        let start = row_idx * self.cols;
        let end = start + self.cols;
        &self.data[start..end]
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::shape_mismatch(self.shape(), other.shape()));
        }

        let data: Vec<f32> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise.
    ///
    /// The result is `self - other` in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::shape_mismatch(self.shape(), other.shape()));
        }

        let data: Vec<f32> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Matrix-matrix multiplication.
    ///
    /// The number of columns in `self` must equal the number of rows in
    /// `other`; the result has shape `(self.rows, other.cols)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the inner dimensions don't match.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{} rows", self.cols),
                actual: format!("{} rows", other.rows),
            });
        }

        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for k in 0..other.cols {
                let mut sum = 0.0;
                for j in 0..self.cols {
                    sum += self.get(i, j) * other.get(j, k);
                }
                result[i * other.cols + k] = sum;
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

/// Renders rows top-to-bottom, columns space-separated left-to-right.
///
/// Formatter precision is honored, so `{:.2}` prints two decimals per
/// element.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                f.write_str("\n")?;
            }
            for j in 0..self.cols {
                if j > 0 {
                    f.write_str(" ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, self.get(i, j))?,
                    None => write!(f, "{}", self.get(i, j))?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
