//! Correctness harness for optimized numeric kernels.
//!
//! I wrote this after one too many "fast" matmul kernels that were fast
//! because they were wrong. The idea: keep a deliberately naive reference
//! implementation around, run it and the optimized candidate on identical
//! inputs, and compare the outputs - but not with `==`. Optimized kernels
//! reorder arithmetic (vectorization, tiling, unrolling), and IEEE-754
//! addition isn't associative, so a correct candidate still differs from
//! the reference by a few units of machine epsilon. The comparator bounds
//! that deviation instead of demanding identical bits.
//!
//! The one exception: kernels that do no arithmetic at all. A transpose is
//! a pure permutation, so it gets no epsilon slack - its output must match
//! the reference bit for bit.
//!
//! ## Usage
//!
//! ```
//! use kernelcheck::{Tolerance, verify_matmul};
//! use kernelcheck::candidate::matmul::matmul_opt;
//!
//! let a: Vec<f32> = (0..16).map(|i| i as f32).collect();
//! let b: Vec<f32> = (0..16).map(|i| (i * 2) as f32).collect();
//!
//! let verdict = verify_matmul(matmul_opt, &a, &b, 4, 4, 4,
//!     Tolerance::Epsilon { max_units: 128.0 })?;
//! assert!(verdict.passed());
//! # Ok::<(), kernelcheck::CompareError>(())
//! ```
//!
//! ## What's inside
//!
//! - Reference kernels: strict-order triple-loop multiply, triangular-swap
//!   in-place transpose
//! - A tolerance comparator parameterized by element type and epsilon bound
//! - Function-pointer substitution of candidates - the reference and the
//!   routine under test share one calling convention, no dynamic dispatch

pub mod candidate;
pub mod compare;
pub mod reference;

pub use compare::{CompareError, Scalar, Tolerance, Verdict, compare};
pub use reference::matmul::matmul_ref;
pub use reference::transpose::transpose_ref;

/// Calling convention for multiply kernels: C = A * B over row-major
/// slices with explicit dimensions. Reference and candidates are
/// interchangeable at any call site taking this type.
pub type MatmulFn = fn(&[f32], &[f32], &mut [f32], usize, usize, usize);

/// Calling convention for in-place square transpose kernels.
pub type TransposeFn = fn(&mut [f32], usize);

/// Runs a candidate multiply kernel against the reference on identical
/// inputs and compares the outputs under the given tolerance.
///
/// Both kernels write into freshly allocated output buffers, so neither
/// sees the other's result and the inputs stay untouched.
///
/// # Errors
///
/// Returns [`CompareError::ShapeMismatch`] if the comparison cannot be
/// performed; through this entry point both outputs are allocated at m × n,
/// so in practice the verdict is always produced.
///
/// # Panics
///
/// Panics if the slice sizes don't match m, n, k.
pub fn verify_matmul(
    candidate: MatmulFn,
    a: &[f32],
    b: &[f32],
    m: usize,
    n: usize,
    k: usize,
    tolerance: Tolerance,
) -> Result<Verdict, CompareError> {
    let mut c_ref = vec![0.0f32; m * n];
    let mut c_cand = vec![0.0f32; m * n];

    matmul_ref(a, b, &mut c_ref, m, n, k);
    candidate(a, b, &mut c_cand, m, n, k);

    compare(&c_ref, &c_cand, tolerance)
}

/// Runs a candidate in-place transpose against the reference on separate
/// copies of the same matrix and compares the results bit for bit.
///
/// Transpose is a pure permutation, so the policy is always
/// [`Tolerance::Exact`].
///
/// # Errors
///
/// Returns [`CompareError::ShapeMismatch`] if the comparison cannot be
/// performed; see [`verify_matmul`].
///
/// # Panics
///
/// Panics if the slice size doesn't match n.
pub fn verify_transpose(
    candidate: TransposeFn,
    matrix: &[f32],
    n: usize,
) -> Result<Verdict, CompareError> {
    let mut m_ref = matrix.to_vec();
    let mut m_cand = matrix.to_vec();

    transpose_ref(&mut m_ref, n);
    candidate(&mut m_cand, n);

    compare(&m_ref, &m_cand, Tolerance::Exact)
}
