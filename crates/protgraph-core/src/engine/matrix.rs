use nalgebra::{DMatrix, Point3, Scalar};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Builds an `n × n` matrix row by row. Rows are independent, so with the `parallel`
/// feature they are computed on the rayon pool.
pub(crate) fn from_rows<T, F>(n: usize, row: F) -> DMatrix<T>
where
    T: Scalar + Send,
    F: Fn(usize) -> Vec<T> + Sync,
{
    #[cfg(not(feature = "parallel"))]
    let iterator = 0..n;

    #[cfg(feature = "parallel")]
    let iterator = (0..n).into_par_iter();

    let rows: Vec<Vec<T>> = iterator.map(|i| row(i)).collect();
    DMatrix::from_row_iterator(n, n, rows.into_iter().flatten())
}

/// Builds an `n × n` matrix from a per-entry function.
pub(crate) fn from_entries<T, F>(n: usize, entry: F) -> DMatrix<T>
where
    T: Scalar + Send,
    F: Fn(usize, usize) -> T + Sync,
{
    from_rows(n, |i| (0..n).map(|j| entry(i, j)).collect())
}

/// All-pairs Euclidean distance matrix. Symmetric, with an exactly zero diagonal.
pub fn distance_matrix(positions: &[Point3<f64>]) -> DMatrix<f64> {
    from_entries(positions.len(), |i, j| {
        if i == j {
            0.0
        } else {
            nalgebra::distance(&positions[i], &positions[j])
        }
    })
}
