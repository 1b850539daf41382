use rand::Rng;
use std::ops::{Index, IndexMut};

/// A dense row-major matrix of `f64` values.
///
/// Storage is a single contiguous buffer; entries are addressed as
/// `m[(row, col)]`. Shapes are fixed at construction. Operations that
/// receive incompatibly sized operands panic: a shape mismatch is a
/// programming error, not a runtime condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from explicit rows. All rows must have the same
    /// width; the empty list yields a 0x0 matrix.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Matrix {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |row| row.len());
        let mut data = Vec::with_capacity(n_rows * n_cols);

        for row in &rows {
            if row.len() != n_cols {
                panic!("rows must all have width {}, got {}", n_cols, row.len());
            }
            data.extend_from_slice(row);
        }

        Matrix {
            rows: n_rows,
            cols: n_cols,
            data,
        }
    }

    /// Xavier (Glorot) initialization: samples uniformly from
    /// `[-sqrt(6 / (fan_in + fan_out)), +sqrt(6 / (fan_in + fan_out))]`.
    ///
    /// Recommended before sigmoid layers. Keeps the variance of
    /// activations and gradients roughly equal across layers, and the
    /// bounded range keeps every initial weight small enough not to
    /// saturate the activation.
    ///
    /// Shape: (rows, cols). `cols` is the fan-in, `rows` the fan-out.
    pub fn xavier_uniform<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let limit = (6.0 / (rows + cols) as f64).sqrt();
        let mut res = Matrix::zeros(rows, cols);

        for x in res.data.iter_mut() {
            *x = rng.gen_range(-limit..limit);
        }

        res
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix-vector product `self * x`.
    ///
    /// `x` must have length `cols`; the result has length `rows`.
    pub fn mul_vec(&self, x: &[f64]) -> Vec<f64> {
        if x.len() != self.cols {
            panic!(
                "vector of length {} does not fit {}x{} matrix",
                x.len(),
                self.rows,
                self.cols
            );
        }

        let mut out = vec![0.0; self.rows];
        for i in 0..self.rows {
            let mut sum = 0.0;
            for j in 0..self.cols {
                sum += self.data[i * self.cols + j] * x[j];
            }
            out[i] = sum;
        }

        out
    }

    /// Applies [`Matrix::mul_vec`] to every vector in `xs`, producing one
    /// fresh result vector per input in the same order.
    pub fn mul_batch(&self, xs: &[Vec<f64>]) -> Vec<Vec<f64>> {
        xs.iter().map(|x| self.mul_vec(x)).collect()
    }

    /// Matrix-vector product against the transpose, `self^T * x`, without
    /// materializing the transpose.
    ///
    /// `x` must have length `rows`; the result has length `cols`.
    pub fn mul_vec_transposed(&self, x: &[f64]) -> Vec<f64> {
        if x.len() != self.rows {
            panic!(
                "vector of length {} does not fit transposed {}x{} matrix",
                x.len(),
                self.rows,
                self.cols
            );
        }

        let mut out = vec![0.0; self.cols];
        for i in 0..self.rows {
            let xi = x[i];
            for j in 0..self.cols {
                out[j] += self.data[i * self.cols + j] * xi;
            }
        }

        out
    }

    /// Accumulates the outer product `u * v^T` into the matrix.
    ///
    /// `u` must have length `rows` and `v` length `cols`.
    pub fn add_outer(&mut self, u: &[f64], v: &[f64]) {
        if u.len() != self.rows || v.len() != self.cols {
            panic!(
                "outer product of {}x{} does not fit {}x{} matrix",
                u.len(),
                v.len(),
                self.rows,
                self.cols
            );
        }

        for i in 0..self.rows {
            for j in 0..self.cols {
                self.data[i * self.cols + j] += u[i] * v[j];
            }
        }
    }

    /// Subtracts `factor * other` elementwise. Both matrices must have
    /// the same shape.
    pub fn sub_scaled(&mut self, other: &Matrix, factor: f64) {
        if self.rows != other.rows || self.cols != other.cols {
            panic!(
                "cannot subtract {}x{} matrix from {}x{} matrix",
                other.rows, other.cols, self.rows, self.cols
            );
        }

        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a -= factor * b;
        }
    }

    pub fn fill(&mut self, value: f64) {
        for x in self.data.iter_mut() {
            *x = value;
        }
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| functor(x)).collect(),
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        if row >= self.rows || col >= self.cols {
            panic!(
                "index ({}, {}) out of bounds for {}x{} matrix",
                row, col, self.rows, self.cols
            );
        }
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        if row >= self.rows || col >= self.cols {
            panic!(
                "index ({}, {}) out of bounds for {}x{} matrix",
                row, col, self.rows, self.cols
            );
        }
        &mut self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zeros_has_requested_shape() {
        let m = Matrix::zeros(2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn from_rows_round_trips_entries() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 2);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
    }

    #[test]
    #[should_panic]
    fn from_rows_rejects_ragged_input() {
        Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
    }

    #[test]
    fn mul_vec_computes_matrix_vector_product() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let out = m.mul_vec(&[1.0, 0.0, -1.0]);
        assert_eq!(out.len(), 2);
        assert_relative_eq!(out[0], -2.0);
        assert_relative_eq!(out[1], -2.0);
    }

    #[test]
    #[should_panic]
    fn mul_vec_rejects_wrong_width() {
        let m = Matrix::zeros(2, 3);
        m.mul_vec(&[1.0, 2.0]);
    }

    #[test]
    fn mul_vec_transposed_matches_explicit_transpose() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let out = m.mul_vec_transposed(&[1.0, 1.0]);
        // Columns summed: [1+4, 2+5, 3+6].
        assert_relative_eq!(out[0], 5.0);
        assert_relative_eq!(out[1], 7.0);
        assert_relative_eq!(out[2], 9.0);
    }

    #[test]
    fn mul_batch_applies_per_vector() {
        let m = Matrix::from_rows(vec![vec![2.0, 0.0], vec![0.0, 3.0]]);
        let outs = m.mul_batch(&[vec![1.0, 1.0], vec![-1.0, 2.0]]);
        assert_eq!(outs.len(), 2);
        assert_relative_eq!(outs[0][0], 2.0);
        assert_relative_eq!(outs[0][1], 3.0);
        assert_relative_eq!(outs[1][0], -2.0);
        assert_relative_eq!(outs[1][1], 6.0);
    }

    #[test]
    fn add_outer_accumulates() {
        let mut m = Matrix::zeros(2, 2);
        m.add_outer(&[1.0, 2.0], &[3.0, 4.0]);
        m.add_outer(&[1.0, 0.0], &[1.0, 0.0]);
        assert_relative_eq!(m[(0, 0)], 4.0);
        assert_relative_eq!(m[(0, 1)], 4.0);
        assert_relative_eq!(m[(1, 0)], 6.0);
        assert_relative_eq!(m[(1, 1)], 8.0);
    }

    #[test]
    fn sub_scaled_subtracts_scaled_entries() {
        let mut m = Matrix::from_rows(vec![vec![1.0, 1.0], vec![1.0, 1.0]]);
        let g = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        m.sub_scaled(&g, 0.5);
        assert_relative_eq!(m[(0, 0)], 0.5);
        assert_relative_eq!(m[(0, 1)], 0.0);
        assert_relative_eq!(m[(1, 0)], -0.5);
        assert_relative_eq!(m[(1, 1)], -1.0);
    }

    #[test]
    fn map_applies_functor_elementwise() {
        let m = Matrix::from_rows(vec![vec![1.0, -2.0]]);
        let doubled = m.map(|x| x * 2.0);
        assert_relative_eq!(doubled[(0, 0)], 2.0);
        assert_relative_eq!(doubled[(0, 1)], -4.0);
    }

    #[test]
    fn fill_overwrites_every_entry() {
        let mut m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        m.fill(0.0);
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn xavier_uniform_stays_within_bounds_and_is_not_all_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::xavier_uniform(10, 6, &mut rng);
        let limit = (6.0 / 16.0_f64).sqrt();

        let mut nonzero = 0;
        for i in 0..10 {
            for j in 0..6 {
                assert!(m[(i, j)].abs() <= limit);
                if m[(i, j)] != 0.0 {
                    nonzero += 1;
                }
            }
        }
        assert!(nonzero > 0);
    }
}
