use super::*;

#[test]
fn can_store_costs_in_square_matrix() {
    let mut matrix = Matrix::new(2);

    matrix[(0, 1)] = 5;
    matrix[(1, 0)] = 7;

    assert_eq!(matrix.size(), 2);
    assert_eq!(matrix[(0, 0)], 0);
    assert_eq!(matrix[(0, 1)], 5);
    assert_eq!(matrix[(1, 0)], 7);
    assert_eq!(matrix[(1, 1)], 0);
}

#[test]
fn can_create_empty_matrix() {
    let matrix = Matrix::new(0);

    assert_eq!(matrix.size(), 0);
    assert_eq!(matrix, Matrix::default());
}
