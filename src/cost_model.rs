//! Builds the square, maximisation-form cost matrix consumed by
//! [`crate::solver::AssignmentSolver`] from raw well/house coordinates.

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::point::Point;

/// The cost matrix built by [`build`], together with the scaling offset
/// `M` used to convert the maximisation-form benefit back into a distance.
pub struct CostModel {
    /// `C[i][j]` is the benefit of assigning duplicated-well `i` to house `j`.
    pub matrix: Matrix<i64>,
    /// `M`, the maximum integerised distance observed while building the
    /// matrix. Benefit `C[i][j] = M - d_int(i, j)`.
    pub offset: i64,
    /// Number of original wells.
    pub n: usize,
    /// Houses per well.
    pub k: usize,
}

/// Integerise a Euclidean distance the way the legacy tool does: round to
/// two decimal places, then scale by 100 so the solver can work in exact
/// integer arithmetic.
fn integerize(distance: f64) -> i64 {
    (distance * 100.0).round() as i64
}

/// Build the duplicated-wells cost matrix for `n` wells and `n * k` houses.
///
/// Left-vertex `i` of the returned matrix corresponds to original well
/// `i / k` (wells are repeated `k` times contiguously, per the
/// "well duplication" transform). Houses keep their original indices.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `houses.len() != n * k`.
pub fn build(n: usize, k: usize, wells: &[Point], houses: &[Point]) -> Result<CostModel> {
    if wells.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            got: wells.len(),
        });
    }
    let expected_houses = n * k;
    if houses.len() != expected_houses {
        return Err(Error::DimensionMismatch {
            expected: expected_houses,
            got: houses.len(),
        });
    }

    let side = n * k;
    let mut distances = Matrix::new_square(side, 0i64);
    for i in 0..side {
        let well = &wells[i / k];
        for (j, house) in houses.iter().enumerate() {
            distances[&(i, j)] = integerize(well.distance(house));
        }
    }

    let offset = distances.as_ref().iter().copied().max().unwrap_or(0);
    let mut matrix = Matrix::new_square(side, 0i64);
    for i in 0..side {
        for j in 0..side {
            matrix[&(i, j)] = offset - distances[&(i, j)];
        }
    }

    Ok(CostModel {
        matrix,
        offset,
        n,
        k,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_house_count() {
        let wells = vec![Point::new(0.0, 0.0)];
        let houses = vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
        let err = build(1, 1, &wells, &houses).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 1,
                got: 2
            }
        );
    }

    #[test]
    fn duplicates_wells_contiguously() {
        // N=1, K=3: all three duplicated left-vertices must be the same well.
        let wells = vec![Point::new(0.0, 0.0)];
        let houses = vec![
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(-1.0, 0.0),
        ];
        let model = build(1, 3, &wells, &houses).unwrap();
        assert_eq!(model.matrix.rows, 3);
        // Every row corresponds to the same well, so every row has the same
        // set of costs (just the distance to house 0, 1, 2).
        for row in 1..3 {
            for col in 0..3 {
                assert_eq!(model.matrix[&(0, col)], model.matrix[&(row, col)]);
            }
        }
    }

    #[test]
    fn integerization_matches_scaled_rounding() {
        assert_eq!(integerize(5.0), 500);
        assert_eq!(integerize(1.5811), 158);
    }

    #[test]
    fn benefit_is_non_negative_and_square() {
        let wells = vec![Point::new(2.5, 1.5), Point::new(0.8, 1.5)];
        let houses = vec![
            Point::new(1.0, 1.0),
            Point::new(2.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(1.0, 2.0),
        ];
        let model = build(2, 2, &wells, &houses).unwrap();
        assert!(model.matrix.is_square());
        assert!(model.matrix.as_ref().iter().all(|&c| c >= 0));
    }
}
