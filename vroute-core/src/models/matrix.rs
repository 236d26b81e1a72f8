#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::models::common::Cost;
use std::ops::{Index, IndexMut};

/// A square travel cost matrix indexed by location indices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Matrix {
    size: usize,
    data: Vec<Cost>,
}

impl Matrix {
    /// Creates a zero filled square matrix with the given dimension.
    pub fn new(size: usize) -> Self {
        Self { size, data: vec![0; size * size] }
    }

    /// Returns matrix dimension.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Cost;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.size + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.size + col]
    }
}
