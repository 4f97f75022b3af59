//! Element-type abstraction for the tolerance comparator.

/// A floating-point element type the comparator can judge.
///
/// The comparator never hardcodes a precision: the machine epsilon used to
/// normalize deviations comes from this trait, so the same comparison logic
/// covers `f32` kernels and `f64` kernels. Diagnostics are widened to `f64`
/// regardless of the element type.
pub trait Scalar: Copy + PartialEq {
    /// Machine epsilon for this precision (spacing of values near 1.0).
    const EPSILON: Self;

    /// Absolute difference `|self - other|`.
    fn abs_diff(self, other: Self) -> Self;

    /// True when the value is neither NaN nor infinite.
    fn is_finite(self) -> bool;

    /// Raw-bit equality. Stricter than `==`: distinguishes `-0.0` from
    /// `0.0`, and never equates NaN with anything.
    fn bits_eq(self, other: Self) -> bool;

    /// Widen to `f64` for epsilon-unit normalization and diagnostics.
    fn widen(self) -> f64;
}

impl Scalar for f32 {
    const EPSILON: Self = f32::EPSILON;

    fn abs_diff(self, other: Self) -> Self {
        (self - other).abs()
    }

    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    fn bits_eq(self, other: Self) -> bool {
        self.to_bits() == other.to_bits()
    }

    fn widen(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for f64 {
    const EPSILON: Self = f64::EPSILON;

    fn abs_diff(self, other: Self) -> Self {
        (self - other).abs()
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    fn bits_eq(self, other: Self) -> bool {
        self.to_bits() == other.to_bits()
    }

    fn widen(self) -> f64 {
        self
    }
}
