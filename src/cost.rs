/*
 * This file is part of munkres-core.
 *
 * This program is free software; you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation; either version 2 of the License, or (at your option)
 * any later version. See the GNU General Public License for more details.
 */

//! Element trait for cost matrices.
//!
//! The solver only needs ordering, addition and subtraction, a notion of
//! finiteness and a way to build the forbidden-cell value. [`Cost`] captures
//! exactly that and is implemented for `f32` and `f64`.

use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

/// A real-valued matrix element the solver can work with.
///
/// Implementations must behave like IEEE floats: `+inf` marks a forbidden
/// pairing, NaN is rejected during preprocessing.
pub trait Cost:
    Copy + PartialOrd + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// `true` unless the value is infinite or NaN.
    fn is_finite(self) -> bool;

    /// `true` for NaN.
    fn is_nan(self) -> bool;

    /// `true` for positive infinity.
    fn is_pos_infinity(self) -> bool;

    /// Lossy conversion of a matrix dimension.
    fn from_usize(n: usize) -> Self;

    /// Widening conversion used for log fields.
    fn to_f64(self) -> f64;

    /// Absolute value: `self` when non-negative, otherwise `ZERO - self`.
    fn magnitude(self) -> Self {
        if self < Self::ZERO {
            Self::ZERO - self
        } else {
            self
        }
    }
}

macro_rules! impl_float_cost {
    ($t:ty) => {
        impl Cost for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            #[inline]
            fn is_pos_infinity(self) -> bool {
                self == <$t>::INFINITY
            }

            #[inline]
            fn from_usize(n: usize) -> Self {
                n as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_float_cost!(f32);
impl_float_cost!(f64);

// ─── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finiteness_classification() {
        assert!(Cost::is_finite(3.5_f64));
        assert!(!Cost::is_finite(f64::INFINITY));
        assert!(!Cost::is_finite(f32::NAN));
        assert!(Cost::is_nan(f32::NAN));
        assert!(Cost::is_pos_infinity(f64::INFINITY));
        assert!(!Cost::is_pos_infinity(f64::NEG_INFINITY));
    }

    #[test]
    fn test_magnitude() {
        assert_eq!((-2.5_f64).magnitude(), 2.5);
        assert_eq!(4.0_f32.magnitude(), 4.0);
        assert_eq!(0.0_f64.magnitude(), 0.0);
    }

    #[test]
    fn test_from_usize() {
        assert_eq!(<f64 as Cost>::from_usize(7), 7.0);
        assert_eq!(<f32 as Cost>::from_usize(3), 3.0);
    }
}
