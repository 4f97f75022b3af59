//! Demonstration candidate kernels.
//!
//! In a real deployment the candidate is whatever optimized routine is
//! under test - SIMD, tiled, generated code - linked behind the same
//! calling convention as the reference. These in-crate stand-ins exist so
//! the harness pipeline is exercisable end to end:
//!
//! - `matmul_opt`: 4-lane accumulation with a horizontal tree reduction,
//!   the way a vector kernel sums. Same math as the reference, different
//!   association of the additions, so its rounding legitimately differs -
//!   exactly the case the epsilon comparator exists for.
//! - `transpose_opt`: gather-into-scratch transpose. Different traversal,
//!   but a pure permutation, so its output must match bit for bit.

pub mod matmul;
pub mod transpose;
