use std::fmt;
use std::ops::{Add, Index, Sub};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::math::operand::parse_row;

/// An immutable rectangular grid of `f64`, stored row-major.
#[derive(Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Builds a matrix from its rows.
    ///
    /// Fails with `Error::Validation` when `data` is empty or when a row's
    /// length differs from the first row's.
    pub fn new(data: Vec<Vec<f64>>) -> Result<Self> {
        let first = data
            .first()
            .ok_or_else(|| Error::Validation("matrix must have at least one row".to_string()))?;
        let cols = first.len();
        if let Some((idx, row)) = data.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(Error::Validation(format!(
                "all rows must have the same number of columns: row {} has {}, expected {}",
                idx,
                row.len(),
                cols
            )));
        }

        let rows = data.len();
        let data = data.into_iter().flatten().collect();
        Ok(Self { data, rows, cols })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |row| self.row(row))
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    pub fn to_vec2(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.elementwise(other, "add", |a, b| a + b)
    }

    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        self.elementwise(other, "subtract", |a, b| a - b)
    }

    fn elementwise<F>(&self, other: &Matrix, op: &'static str, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            log::debug!(
                "rejecting matrix {}: shapes {:?} and {:?}",
                op,
                self.shape(),
                other.shape()
            );
            return Err(Error::DimensionMismatch {
                op,
                left: format!("{:?}", self.shape()),
                right: format!("{:?}", other.shape()),
            });
        }

        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| f(*a, *b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    fn write_rows<F>(&self, f: &mut fmt::Formatter<'_>, mut write_row: F) -> fmt::Result
    where
        F: FnMut(&mut fmt::Formatter<'_>, &[f64]) -> fmt::Result,
    {
        for (idx, row) in self.rows().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write_row(f, row)?;
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        &self.data[self.offset(index.0, index.1)]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = Error;

    fn try_from(value: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::new(value)
    }
}

impl FromStr for Matrix {
    type Err = Error;

    /// Parses rows separated by `;` and elements separated by `,`,
    /// e.g. `"1,2,3;4,5,6"`.
    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .trim()
            .split(';')
            .map(parse_row)
            .collect::<Result<Vec<_>>>()?;
        Matrix::new(rows)
    }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Result<Matrix>;

    fn add(self, rhs: &'b Matrix) -> Self::Output {
        Matrix::add(self, rhs)
    }
}

impl Add for Matrix {
    type Output = Result<Matrix>;

    fn add(self, rhs: Matrix) -> Self::Output {
        Matrix::add(&self, &rhs)
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Result<Matrix>;

    fn sub(self, rhs: &'b Matrix) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Sub for Matrix {
    type Output = Result<Matrix>;

    fn sub(self, rhs: Matrix) -> Self::Output {
        self.subtract(&rhs)
    }
}

/// Tab-separated elements, one row per line.
impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_rows(f, |f, row| {
            for (idx, value) in row.iter().enumerate() {
                if idx > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}", value)?;
            }
            Ok(())
        })
    }
}

/// Each row as `[e1 ,e2 ,...]`, one row per line.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_rows(f, |f, row| {
            write!(f, "[")?;
            for (idx, value) in row.iter().enumerate() {
                if idx > 0 {
                    write!(f, " ,")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap()
    }

    #[test]
    fn test_row_major_layout() {
        let m = sample();
        assert_eq!(m.data, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m.get(1, 0), Some(4.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
    }

    #[test]
    fn test_empty_rows_rejected() {
        assert!(matches!(Matrix::new(vec![]), Err(Error::Validation(_))));
    }

    #[test]
    fn test_single_empty_row_is_one_by_zero() {
        let a = Matrix::new(vec![vec![]]).unwrap();
        let b = Matrix::new(vec![vec![]]).unwrap();
        assert_eq!(a.shape(), (1, 0));
        assert_eq!(a.row(0), &[] as &[f64]);
        assert_eq!(a.to_string(), "[]");
        assert_eq!(format!("{:?}", a), "");

        let sum = (&a + &b).unwrap();
        assert_eq!(sum.shape(), (1, 0));
        assert_eq!(sum, a);

        let wider = Matrix::new(vec![vec![1.0]]).unwrap();
        assert!(matches!(Matrix::add(&a, &wider), Err(Error::DimensionMismatch { .. })));
    }

    #[test]
    fn test_ragged_rows_report_offending_row() {
        let err = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0]]).unwrap_err();
        assert_eq!(
            err,
            Error::Validation(
                "all rows must have the same number of columns: row 2 has 1, expected 2"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_display_forms() {
        let m = sample();
        assert_eq!(m.to_string(), "[1 ,2 ,3]\n[4 ,5 ,6]");
        assert_eq!(format!("{:?}", m), "1\t2\t3\n4\t5\t6");
    }

    #[test]
    fn test_from_str() {
        let m: Matrix = "1,2,3; 4,5,6".parse().unwrap();
        assert_eq!(m, sample());
        assert!(matches!("1,2;3".parse::<Matrix>(), Err(Error::Validation(_))));
        assert!(matches!("1,2;3,z".parse::<Matrix>(), Err(Error::Parse(_))));
    }

    #[test]
    #[should_panic(expected = "matrix index out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let m = sample();
        let _ = m[(0, 3)];
    }
}
