/// Reference in-place square transpose.
///
/// Swaps element (i, j) with (j, i) for every pair in the strict lower
/// triangle (j < i). Each off-diagonal pair is visited exactly once, so
/// nothing is double-swapped back to where it started; diagonal elements
/// are never touched.
///
/// Transpose performs no arithmetic, so candidates are held to bit-exact
/// equality against this output - there is no rounding to excuse.
///
/// # Arguments
///
/// * `matrix` - Square matrix (n × n), row-major, transposed in place
/// * `n` - Rows and columns
///
/// # Panics
///
/// Panics if the slice size doesn't match n.
///
/// # Example
///
/// ```
/// use kernelcheck::reference::transpose::transpose_ref;
///
/// let mut m: Vec<f32> = (0..16).map(|i| i as f32).collect();
/// transpose_ref(&mut m, 4);
///
/// assert_eq!(m[1], 4.0); // old (1, 0) is now (0, 1)
/// assert_eq!(m[5], 5.0); // diagonal untouched
/// ```
pub fn transpose_ref(matrix: &mut [f32], n: usize) {
    assert_eq!(matrix.len(), n * n, "matrix: expected {}x{}={} elements", n, n, n * n);

    for i in 0..n {
        for j in 0..i {
            matrix.swap(i * n + j, j * n + i);
        }
    }
}
