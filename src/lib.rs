//! ndvec: Lightweight N-Dimensional Vector Arithmetic
//!
//! **ndvec** provides a single owned `f64` vector type, [`Vector`], with the
//! operations most callers need when a full linear-algebra library is
//! overkill:
//!
//! 1. **Construction** - zero-filled, copied from a slice, cloned
//! 2. **Mutation** - set, scale, zero, closure transforms (in place)
//! 3. **Binary operations** - add, sub, dot, cross (3-D), Hadamard
//! 4. **Derived metrics** - magnitude (L2 norm), unit vector
//!
//! # Error Policy
//!
//! - `add`/`sub` never fail: the result is truncated to the shorter operand
//! - `dot`/`hadamard` fail with [`VectorError::DimensionMismatch`] on unequal lengths
//! - `cross` fails with [`VectorError::InvalidDimension`] unless both operands have 3 elements
//! - Numeric edge cases (NaN, infinities, zero-magnitude `unit`) follow IEEE-754
//!   and are never reported as errors
//!
//! # Features
//!
//! - `tracing`: emit `trace`-level spans for binary operations and `unit`
//!
//! # Quick Start
//!
//! ```rust
//! use ndvec::Vector;
//!
//! let a = Vector::from_slice(&[0.0, 1.0, 2.0]);
//! let b = Vector::from_slice(&[0.0, 3.0, 4.0]);
//!
//! let sum = a.add(&b);
//! assert_eq!(sum.as_slice(), &[0.0, 4.0, 6.0]);
//!
//! let normal = a.cross(&b).unwrap();
//! assert_eq!(normal.as_slice(), &[-2.0, 0.0, 0.0]);
//! ```

pub mod error;
mod kernels;
mod ops;
pub mod vector;

pub use error::{Result, VectorError};
pub use vector::{unit, Vector};

/// Machine epsilon for `f64`: the gap between `1.0` and the next representable value
///
/// Intended as a default tolerance for approximate comparisons. No operation
/// in this crate consults it.
pub const EPSILON: f64 = f64::EPSILON;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsilon_is_machine_epsilon() {
        assert_ne!(1.0 + EPSILON, 1.0);
        assert_eq!(1.0 + EPSILON / 2.0, 1.0);
        assert_eq!(EPSILON, 2.0f64.powi(-52));
    }

    #[test]
    fn test_reexports() {
        let v = Vector::from_slice(&[3.0, 4.0]);
        assert_eq!(unit(&v), v.unit());

        let err: Result<f64> = v.dot(&Vector::new(3));
        assert!(matches!(err, Err(VectorError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_vector_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Vector>();
    }
}
