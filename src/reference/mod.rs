//! Reference kernels: the trusted, unoptimized baselines.
//!
//! These are the most direct implementations possible - textbook loop
//! nests with a fixed traversal order. They are slow on purpose: their
//! job is to be obviously correct, because every optimized candidate is
//! judged against their output.
//!
//! Available kernels:
//! - `matmul_ref`: triple-loop multiply in strict i-j-k order
//! - `transpose_ref`: in-place square transpose by triangular swap

pub mod matmul;
pub mod transpose;
