/// In-place square transpose via gather into a scratch row buffer.
///
/// For the common 4×4 case this mirrors what a shuffle-based SIMD
/// transpose does: materialize the fully permuted matrix, then store it
/// back over the input, instead of swapping pairs in place. Other sizes
/// fall back to a column-driven pairwise swap (upper triangle, the mirror
/// of the reference's lower-triangle walk).
///
/// Either path is a pure permutation, so the output must be bit-identical
/// to the reference transpose.
///
/// # Arguments
///
/// * `matrix` - Square matrix (n × n), row-major, transposed in place
/// * `n` - Rows and columns
///
/// # Panics
///
/// Panics if the slice size doesn't match n.
pub fn transpose_opt(matrix: &mut [f32], n: usize) {
    assert_eq!(matrix.len(), n * n, "matrix: expected {}x{}={} elements", n, n, n * n);

    if n == 4 {
        let mut t = [0.0f32; 16];
        for i in 0..4 {
            for j in 0..4 {
                t[j * 4 + i] = matrix[i * 4 + j];
            }
        }
        matrix.copy_from_slice(&t);
        return;
    }

    for j in 0..n {
        for i in (j + 1)..n {
            matrix.swap(i * n + j, j * n + i);
        }
    }
}
