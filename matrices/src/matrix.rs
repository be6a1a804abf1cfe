use std::ops::{Index, IndexMut};
use std::str::FromStr;

use ndarray::{Array2, ArrayView1, ArrayView2};
use rand::Rng;

use crate::error::{Error, Result, ShapeError};

/// Widest element, in bits, that `Matrix::random` will generate.
pub const MAX_WIDTH: u32 = 32;

/// Dense row-major matrix of unsigned integers.
///
/// Every row has the same length. Squareness is not required here, it is
/// checked by the operations that need it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    data: Array2<u64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            data: Array2::zeros((rows, cols)),
        }
    }

    pub fn identity(n: usize) -> Self {
        Matrix {
            data: Array2::eye(n),
        }
    }

    /// Square matrix with elements drawn uniformly from `0..2^width`.
    pub fn random<R: Rng>(rng: &mut R, dim: usize, width: u32) -> Result<Self> {
        if !(1..=MAX_WIDTH).contains(&width) {
            return Err(Error::Width(width));
        }
        let bound = 1u64 << width;
        Ok(Matrix {
            data: Array2::from_shape_fn((dim, dim), |_| rng.gen_range(0..bound)),
        })
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// The dimension `n` of a square matrix, `None` otherwise.
    pub fn dim(&self) -> Option<usize> {
        self.is_square().then(|| self.rows())
    }

    pub fn row_iter(&self) -> impl Iterator<Item = ArrayView1<'_, u64>> {
        self.data.rows().into_iter()
    }

    pub fn view(&self) -> ArrayView2<'_, u64> {
        self.data.view()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = u64;

    #[inline(always)]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[[index.0, index.1]]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline(always)]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut u64 {
        &mut self.data[[index.0, index.1]]
    }
}

impl From<Array2<u64>> for Matrix {
    fn from(data: Array2<u64>) -> Self {
        Matrix { data }
    }
}

impl TryFrom<Vec<Vec<u64>>> for Matrix {
    type Error = ShapeError;

    fn try_from(value: Vec<Vec<u64>>) -> std::result::Result<Self, Self::Error> {
        let cols = value.first().map_or(0, Vec::len);
        if let Some((row, found)) = value
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != cols)
        {
            return Err(ShapeError::Ragged {
                row,
                expected: cols,
                found,
            });
        }
        Ok(Matrix {
            data: Array2::from_shape_fn((value.len(), cols), |(i, j)| value[i][j]),
        })
    }
}

impl<const N: usize> TryFrom<[[u64; N]; N]> for Matrix {
    type Error = ShapeError;

    fn try_from(value: [[u64; N]; N]) -> std::result::Result<Self, Self::Error> {
        value.into_iter().map(Vec::from).collect::<Vec<_>>().try_into()
    }
}

/// Parses `"1,2;3,4"`: rows split on `;`, elements on `,`, whitespace ignored.
/// Elements are decimal or `0x`-prefixed hexadecimal.
impl FromStr for Matrix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Ok(Matrix::zeros(0, 0));
        }
        let rows = compact
            .split(';')
            .enumerate()
            .map(|(row, line)| {
                line.split(',')
                    .enumerate()
                    .map(|(col, token)| {
                        parse_element(token).ok_or_else(|| Error::Parse {
                            row,
                            col,
                            token: token.to_string(),
                        })
                    })
                    .collect::<Result<Vec<u64>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Matrix::try_from(rows)?)
    }
}

fn parse_element(token: &str) -> Option<u64> {
    let (digits, radix) = match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(digits) => (digits, 16),
        None => (token, 10),
    };
    // from_str_radix takes a leading sign, the literal grammar does not
    if digits.starts_with(['+', '-']) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}
