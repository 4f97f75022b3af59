/// Reference matrix multiplication: C = A * B, strict i-j-k order.
///
/// This is the textbook triple loop. Each output element is a scalar
/// accumulator summed over k in index order 0..k-1, then stored. No FMA,
/// no reordering: the accumulation order is itself part of the reference
/// contract, because changing it changes the rounding and therefore the
/// baseline that candidates are measured against.
///
/// Overwrites C (unlike an accumulating GEMM, this is C = A * B).
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, overwritten
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
///
/// # Panics
///
/// Panics if the slice sizes don't match m, n, k.
pub fn matmul_ref(a: &[f32], b: &[f32], c: &mut [f32], m: usize, n: usize, k: usize) {
    assert_eq!(a.len(), m * k, "A: expected {}x{}={} elements", m, k, m * k);
    assert_eq!(b.len(), k * n, "B: expected {}x{}={} elements", k, n, k * n);
    assert_eq!(c.len(), m * n, "C: expected {}x{}={} elements", m, n, m * n);

    for i in 0..m {
        for j in 0..n {
            let mut s = 0.0f32;
            for p in 0..k {
                s += a[i * k + p] * b[p * n + j];
            }
            c[i * n + j] = s;
        }
    }
}
