//! The two-matrix scenario that the demonstration binary also runs.
use relp_sparse::data::linear_algebra::matrix::SparseMatrix;


/// The first matrix, before the addition.
fn first() -> SparseMatrix<i32> {
    let mut matrix = SparseMatrix::new(10, 10).unwrap();
    matrix.set_value(3, 5, 5).unwrap();
    matrix.set_value(3, 7, 7).unwrap();
    matrix.set_value(3, 2, 2).unwrap();
    matrix.set_value(3, 2, 0).unwrap();
    matrix.set_value(5, 6, 6).unwrap();
    matrix.set_value(5, 4, 4).unwrap();
    matrix.set_value(7, 3, 3).unwrap();
    matrix.set_value(7, 1, 1).unwrap();
    matrix
}

/// The matrix added to the first one.
fn second() -> SparseMatrix<i32> {
    let mut matrix = SparseMatrix::new(10, 10).unwrap();
    matrix.set_value(1, 9, 5).unwrap();
    matrix.set_value(3, 8, 6).unwrap();
    matrix.set_value(9, 9, 9).unwrap();
    matrix
}
