//! The tolerance comparator: decides whether a candidate kernel's output is
//! close enough to the reference output to count as correct.
//!
//! Exact equality is the wrong test for optimized arithmetic kernels.
//! Vectorized, tiled, or unrolled code reorders additions, and IEEE-754
//! addition is not associative, so a correct optimized kernel legitimately
//! produces slightly different bits than the reference. The comparator
//! absorbs that by bounding the per-element deviation in units of machine
//! epsilon. Kernels that perform no arithmetic at all (pure permutations
//! like transpose) get no such slack: they must reproduce identical bits.
//!
//! Policies:
//! - [`Tolerance::Epsilon`]: per-element `|candidate - reference|` divided by
//!   the element type's machine epsilon must stay strictly below the bound.
//! - [`Tolerance::Exact`]: raw-bit equality per element.

pub mod scalar;

use log::debug;
use thiserror::Error;

pub use scalar::Scalar;

/// Per-element comparison policy.
///
/// The bound is configuration, not a built-in constant: callers pick the
/// epsilon multiple that matches how much reordering their kernel does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    /// Raw-bit equality. For permutation-only kernels (transpose and
    /// friends), which perform no arithmetic and have no rounding excuse.
    Exact,
    /// Maximum allowed absolute deviation, expressed as a multiple of the
    /// element type's machine epsilon. An element passes when its deviation
    /// is strictly below `max_units`.
    Epsilon {
        /// Upper bound in epsilon units (exclusive).
        max_units: f64,
    },
}

/// A comparison that could not be performed at all.
///
/// Distinct from a FAIL verdict: a shape mismatch means the test setup is
/// wrong, not that the kernel is numerically wrong.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareError {
    /// Reference and candidate buffers have different lengths.
    #[error("shape mismatch: reference has {reference} elements, candidate has {candidate}")]
    ShapeMismatch {
        /// Element count of the reference buffer.
        reference: usize,
        /// Element count of the candidate buffer.
        candidate: usize,
    },
}

/// Outcome of one comparison: pass/fail plus the worst deviation seen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    passed: bool,
    worst_units: f64,
    worst_index: Option<usize>,
}

impl Verdict {
    /// True when every element satisfied the tolerance policy.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Largest per-element deviation, in machine-epsilon units. Infinite
    /// when a NaN or infinity was involved. Zero for empty buffers.
    pub fn worst_units(&self) -> f64 {
        self.worst_units
    }

    /// Index of the worst deviation (on FAIL, the worst violating index).
    /// `None` only for empty buffers.
    pub fn worst_index(&self) -> Option<usize> {
        self.worst_index
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let outcome = if self.passed { "PASS" } else { "FAIL" };
        match self.worst_index {
            Some(i) => write!(
                f,
                "{} (worst deviation {:.3} eps at index {})",
                outcome, self.worst_units, i
            ),
            None => write!(f, "{} (empty buffers)", outcome),
        }
    }
}

/// Compares a candidate output buffer against a reference output buffer.
///
/// Every index is visited; the verdict reports the worst deviation and where
/// it occurred, so a failure is diagnosable without re-running the kernel.
/// A NaN or infinity in either buffer fails that index outright under both
/// policies - a subtraction that produces NaN must never read as "within
/// tolerance". Empty buffers trivially pass.
///
/// # Errors
///
/// Returns [`CompareError::ShapeMismatch`] when the buffer lengths differ.
///
/// # Example
///
/// ```
/// use kernelcheck::compare::{compare, Tolerance};
///
/// let reference = [1.0f32, 2.0, 3.0];
/// let candidate = [1.0f32, 2.0 + f32::EPSILON, 3.0];
///
/// let verdict = compare(&reference, &candidate, Tolerance::Epsilon { max_units: 128.0 })?;
/// assert!(verdict.passed());
/// # Ok::<(), kernelcheck::compare::CompareError>(())
/// ```
pub fn compare<T: Scalar>(
    reference: &[T],
    candidate: &[T],
    tolerance: Tolerance,
) -> Result<Verdict, CompareError> {
    if reference.len() != candidate.len() {
        return Err(CompareError::ShapeMismatch {
            reference: reference.len(),
            candidate: candidate.len(),
        });
    }

    let mut passed = true;
    let mut worst_units = 0.0f64;
    let mut worst_index = None;
    // (violated, units): any violation outranks any in-tolerance deviation,
    // so on FAIL the reported index is always a violating one.
    let mut worst_key = (false, f64::NEG_INFINITY);

    for (i, (&r, &c)) in reference.iter().zip(candidate.iter()).enumerate() {
        let finite = r.is_finite() && c.is_finite();
        let units = if finite {
            r.abs_diff(c).widen() / T::EPSILON.widen()
        } else {
            f64::INFINITY
        };

        let violated = match tolerance {
            Tolerance::Exact => !finite || !r.bits_eq(c),
            Tolerance::Epsilon { max_units } => !(units < max_units),
        };

        if violated {
            passed = false;
        }
        let key = (violated, units);
        if key > worst_key {
            worst_key = key;
            worst_units = units;
            worst_index = Some(i);
        }
    }

    debug!(
        "compared {} elements ({:?}): worst {:.3} eps at {:?}",
        reference.len(),
        tolerance,
        worst_units,
        worst_index
    );

    Ok(Verdict {
        passed,
        worst_units,
        worst_index,
    })
}
