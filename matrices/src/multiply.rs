use crate::error::{Error, Operand, Result, ShapeError};
use crate::matrix::Matrix;

/// One cell where a candidate product disagrees with the computed one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub row: usize,
    pub col: usize,
    pub computed: u64,
    pub candidate: u64,
}

fn square_dim(m: &Matrix, operand: Operand) -> std::result::Result<usize, ShapeError> {
    match m.dim() {
        Some(0) => Err(ShapeError::Empty { operand }),
        Some(n) => Ok(n),
        None => Err(ShapeError::NotSquare {
            operand,
            rows: m.rows(),
            cols: m.cols(),
        }),
    }
}

/// Checks that both operands are non-empty, square and of the same size.
/// Returns the shared dimension.
pub fn validate(a: &Matrix, b: &Matrix) -> std::result::Result<usize, ShapeError> {
    let left = square_dim(a, Operand::First)?;
    let right = square_dim(b, Operand::Second)?;
    if left != right {
        return Err(ShapeError::DimensionMismatch { left, right });
    }
    Ok(left)
}

/// Naive O(n^3) product of two square matrices.
///
/// Accumulates over `k` in ascending order with checked arithmetic, so the
/// result is exact or the call fails with `Error::Overflow`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let n = validate(a, b)?;
    log::debug!("multiplying {n}x{n} matrices");

    let mut res = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            let mut acc = 0u64;
            for k in 0..n {
                acc = a[(i, k)]
                    .checked_mul(b[(k, j)])
                    .and_then(|p| acc.checked_add(p))
                    .ok_or(Error::Overflow { row: i, col: j })?;
            }
            res[(i, j)] = acc;
        }
    }
    Ok(res)
}

/// Compares `candidate` against the product of `a` and `b`.
/// An empty result means every cell matches.
pub fn verify(a: &Matrix, b: &Matrix, candidate: &Matrix) -> Result<Vec<Mismatch>> {
    let computed = multiply(a, b)?;
    if candidate.rows() != computed.rows() || candidate.cols() != computed.cols() {
        return Err(ShapeError::CandidateShape {
            expected: computed.rows(),
            rows: candidate.rows(),
            cols: candidate.cols(),
        }
        .into());
    }

    let n = computed.rows();
    let mismatches: Vec<Mismatch> = (0..n)
        .flat_map(|row| (0..n).map(move |col| (row, col)))
        .filter(|&(row, col)| candidate[(row, col)] != computed[(row, col)])
        .map(|(row, col)| Mismatch {
            row,
            col,
            computed: computed[(row, col)],
            candidate: candidate[(row, col)],
        })
        .collect();
    for m in &mismatches {
        log::warn!(
            "mismatch at ({}, {}): expected {:#x}, got {:#x}",
            m.row,
            m.col,
            m.computed,
            m.candidate
        );
    }
    Ok(mismatches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn m<const N: usize>(rows: [[u64; N]; N]) -> Matrix {
        Matrix::try_from(rows).unwrap()
    }

    #[test]
    fn identity_times_matrix() {
        let res = multiply(&m([[1, 0], [0, 1]]), &m([[5, 6], [7, 8]])).unwrap();
        assert_eq!(res, m([[5, 6], [7, 8]]));
    }

    #[test]
    fn simple_mat_mul() {
        let a = m([[1, 2], [3, 4]]);
        let res = multiply(&a, &a).unwrap();
        assert_eq!(res, m([[7, 10], [15, 22]]));
    }

    #[test]
    fn scalar_case() {
        let res = multiply(&m([[6]]), &m([[7]])).unwrap();
        assert_eq!(res, m([[42]]));
    }

    #[test]
    fn not_commutative() {
        let a = m([[1, 2], [3, 4]]);
        let b = m([[0, 1], [1, 0]]);
        assert_ne!(multiply(&a, &b).unwrap(), multiply(&b, &a).unwrap());
    }

    #[test]
    fn inputs_are_untouched() {
        let a = m([[1, 2], [3, 4]]);
        let b = m([[5, 6], [7, 8]]);
        let (a0, b0) = (a.clone(), b.clone());
        multiply(&a, &b).unwrap();
        assert_eq!((a, b), (a0, b0));
    }

    #[test]
    fn non_square_first() {
        let a = Matrix::try_from(vec![vec![1, 2]]).unwrap();
        let b = m([[1, 2], [3, 4]]);
        assert_eq!(
            multiply(&a, &b),
            Err(Error::Shape(ShapeError::NotSquare {
                operand: Operand::First,
                rows: 1,
                cols: 2
            }))
        );
    }

    #[test]
    fn non_square_second() {
        let a = m([[1, 2], [3, 4]]);
        let b = Matrix::try_from(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        assert!(matches!(
            multiply(&a, &b),
            Err(Error::Shape(ShapeError::NotSquare {
                operand: Operand::Second,
                ..
            }))
        ));
    }

    #[test]
    fn incompatible_dimensions() {
        let a = Matrix::identity(2);
        let b = Matrix::identity(3);
        assert_eq!(
            multiply(&a, &b),
            Err(Error::Shape(ShapeError::DimensionMismatch { left: 2, right: 3 }))
        );
    }

    #[test]
    fn empty_is_rejected() {
        let empty = Matrix::zeros(0, 0);
        assert_eq!(
            multiply(&empty, &empty),
            Err(Error::Shape(ShapeError::Empty {
                operand: Operand::First
            }))
        );
        assert_eq!(
            multiply(&Matrix::identity(1), &empty),
            Err(Error::Shape(ShapeError::Empty {
                operand: Operand::Second
            }))
        );
    }

    #[test]
    fn overflow_is_reported() {
        let a = m([[u64::MAX, 1], [0, 0]]);
        let b = m([[2, 0], [0, 0]]);
        assert_eq!(
            multiply(&a, &b),
            Err(Error::Overflow { row: 0, col: 0 })
        );
        let c = m([[u64::MAX, 1], [0, 0]]);
        let d = m([[1, 0], [1, 0]]);
        assert_eq!(
            multiply(&c, &d),
            Err(Error::Overflow { row: 0, col: 0 })
        );
    }

    #[test]
    fn verify_accepts_correct_product() {
        let a = m([[1, 2], [3, 4]]);
        let expected = m([[7, 10], [15, 22]]);
        assert_eq!(verify(&a, &a, &expected).unwrap(), vec![]);
    }

    #[test]
    fn verify_reports_each_bad_cell() {
        let a = m([[1, 2], [3, 4]]);
        let expected = m([[7, 11], [15, 0]]);
        assert_eq!(
            verify(&a, &a, &expected).unwrap(),
            vec![
                Mismatch {
                    row: 0,
                    col: 1,
                    computed: 10,
                    candidate: 11
                },
                Mismatch {
                    row: 1,
                    col: 1,
                    computed: 22,
                    candidate: 0
                },
            ]
        );
    }

    #[test]
    fn verify_rejects_wrong_shape() {
        let a = Matrix::identity(2);
        assert_eq!(
            verify(&a, &a, &Matrix::identity(3)),
            Err(Error::Shape(ShapeError::CandidateShape {
                expected: 2,
                rows: 3,
                cols: 3
            }))
        );
    }

    #[test]
    fn verify_reports_rectangular_candidate() {
        let a = Matrix::identity(2);
        let candidate = Matrix::try_from(vec![vec![1, 0]]).unwrap();
        let err = verify(&a, &a, &candidate).unwrap_err();
        assert_eq!(
            err,
            Error::Shape(ShapeError::CandidateShape {
                expected: 2,
                rows: 1,
                cols: 2
            })
        );
        assert_eq!(err.to_string(), "candidate is 1x2, expected 2x2");
    }
}
