use relp_sparse::data::linear_algebra::Axis;
use relp_sparse::data::linear_algebra::error::Error;
use relp_sparse::data::linear_algebra::matrix::SparseMatrix;
use relp_sparse::data::linear_algebra::vector::SparseVector;

use crate::properties::scattered;

#[test]
fn indices_strictly_increasing() {
    let matrix = scattered(13, 17, 200);

    let rows = matrix.iter_rows().map(|(i, _)| i).collect::<Vec<_>>();
    assert!(rows.windows(2).all(|w| w[0] < w[1]));
    for (_, row) in matrix.iter_rows() {
        let columns = row.iter().map(|(j, _)| j).collect::<Vec<_>>();
        assert!(columns.windows(2).all(|w| w[0] < w[1]));
        assert!(columns.iter().all(|&j| j < 17));
        assert!(!row.is_empty());
    }
}

#[test]
fn unwritten_is_zero() {
    let mut matrix = SparseMatrix::<i64>::new(6, 6).unwrap();
    matrix.set_value(2, 3, 8).unwrap();
    matrix.set_value(4, 0, -1).unwrap();

    for i in 0..6 {
        for j in 0..6 {
            if (i, j) != (2, 3) && (i, j) != (4, 0) {
                assert_eq!(matrix.get_value(i, j), Ok(0));
            }
        }
    }
}

#[test]
fn overwrite() {
    let mut matrix = SparseMatrix::new(4, 4).unwrap();
    matrix.set_value(1, 2, 1.5).unwrap();
    matrix.set_value(1, 2, -2.0).unwrap();
    assert_eq!(matrix.get_value(1, 2), Ok(-2.0));

    let mut vector = SparseVector::new(4).unwrap();
    vector.set(3, 1).unwrap();
    vector.set(3, 9).unwrap();
    assert_eq!(vector.get(3), Ok(9));
}

#[test]
fn accumulate_twice() {
    let mut matrix = SparseMatrix::<i64>::new(5, 5).unwrap();
    let mut delta = SparseMatrix::new(5, 5).unwrap();
    delta.set_value(4, 2, 21).unwrap();

    assert_eq!(matrix.get_value(4, 2), Ok(0));
    matrix.add_matrix(&delta).unwrap();
    matrix.add_matrix(&delta).unwrap();
    assert_eq!(matrix.get_value(4, 2), Ok(42));
}

#[test]
fn capacity_boundaries() {
    let mut matrix = SparseMatrix::new(3, 5).unwrap();
    assert_eq!(matrix.set_value(0, 0, 1), Ok(()));
    assert_eq!(matrix.set_value(2, 4, 1), Ok(()));
    assert_eq!(matrix.get_value(2, 4), Ok(1));

    let error = matrix.set_value(3, 0, 1).unwrap_err();
    assert!(error.is_out_of_range());
    assert_eq!(error, Error::OutOfRange { axis: Axis::Row, index: 3, len: 3 });
    assert!(matrix.get_value(0, 5).unwrap_err().is_out_of_range());

    let mut vector = SparseVector::new(5).unwrap();
    assert_eq!(vector.set(0, 1), Ok(()));
    assert_eq!(vector.set(4, 1), Ok(()));
    assert!(vector.set(5, 1).unwrap_err().is_out_of_range());
    assert!(vector.get(5).unwrap_err().is_out_of_range());

    assert!(SparseVector::<i32>::new(0).unwrap_err().is_out_of_range());
    assert!(SparseMatrix::<i32>::new(0, 0).unwrap_err().is_out_of_range());
}

#[test]
fn dimension_rejection() {
    let mut matrix = scattered(5, 6, 20);
    let other = scattered(6, 5, 20);
    let (matrix_before, other_before) = (matrix.clone(), other.clone());

    assert_eq!(
        matrix.add_matrix(&other),
        Err(Error::DimensionMismatch { expected: (5, 6), found: (6, 5) }),
    );
    assert_eq!(matrix, matrix_before);
    assert_eq!(other, other_before);

    let mut vector = SparseVector::<i32>::new(3).unwrap();
    vector.set(1, 1).unwrap();
    let longer = SparseVector::new(4).unwrap();
    assert_eq!(vector.add_vector(&longer), Err(Error::CapacityMismatch { expected: 3, found: 4 }));
    assert_eq!(vector.get(1), Ok(1));
}

#[test]
fn dense_and_nonzero_agree() {
    let mut matrix = scattered(9, 12, 60);
    matrix.add_matrix(&scattered(9, 12, 35)).unwrap();

    let dense = matrix.iter_dense().flatten().filter(|&v| v != 0).collect::<Vec<_>>();
    let sparse = matrix.iter_nonzero_by_row().flatten().copied().filter(|&v| v != 0).collect::<Vec<_>>();
    assert_eq!(dense, sparse);

    assert_eq!(matrix.iter_dense().count(), 9);
    assert!(matrix.iter_dense().all(|row| row.count() == 12));
}

#[test]
fn addition_matches_cellwise_sum() {
    let mut matrix = scattered(8, 8, 30);
    let other = scattered(8, 8, 45);
    let before = matrix.clone();
    matrix.add_matrix(&other).unwrap();

    for i in 0..8 {
        for j in 0..8 {
            let expected = before.get_value(i, j).unwrap() + other.get_value(i, j).unwrap();
            assert_eq!(matrix.get_value(i, j), Ok(expected));
        }
    }
}
