/// Matrix multiplication with 4-lane accumulation, mimicking a SIMD kernel.
///
/// Instead of one scalar accumulator summed over k in order, each output
/// element is built from four lane accumulators (consecutive k indices go
/// to consecutive lanes, as a 4-wide vector kernel would) and a final
/// horizontal tree reduction. Same math as the reference, different
/// association of the additions, so the result is numerically equivalent
/// but not bit-identical - exactly the case the epsilon comparator exists
/// for. On the harness's literal 4x4 inputs the worst deviation is 64
/// epsilon units, half the 128-unit bound.
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
pub fn matmul_opt(a: &[f32], b: &[f32], c: &mut [f32], m: usize, n: usize, k: usize) {
    assert_eq!(a.len(), m * k, "A: expected {}x{}={} elements", m, k, m * k);
    assert_eq!(b.len(), k * n, "B: expected {}x{}={} elements", k, n, k * n);
    assert_eq!(c.len(), m * n, "C: expected {}x{}={} elements", m, n, m * n);

    const LANES: usize = 4;

    for i in 0..m {
        for j in 0..n {
            let mut lanes = [0.0f32; LANES];
            for p in 0..k {
                lanes[p % LANES] += a[i * k + p] * b[p * n + j];
            }
            // Horizontal reduction, tree order like a SIMD hadd.
            c[i * n + j] = (lanes[0] + lanes[1]) + (lanes[2] + lanes[3]);
        }
    }
}
