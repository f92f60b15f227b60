//! N-dimensional `f64` vector

use std::ops::{Index, IndexMut};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{kernels, Result, VectorError};

/// Dimension required by [`Vector::cross`]
const CROSS_DIMENSION: usize = 3;

/// Fixed-length vector of `f64` values that owns its storage
///
/// Operations fall into four groups:
///
/// - **Construction**: [`new`](Self::new), [`from_slice`](Self::from_slice), `clone`
/// - **Mutation** (in place): [`set`](Self::set), [`scale`](Self::scale),
///   [`zero`](Self::zero), [`apply`](Self::apply),
///   [`apply_with_index`](Self::apply_with_index)
/// - **Binary operations** (new result): [`add`](Self::add), [`sub`](Self::sub),
///   [`dot`](Self::dot), [`cross`](Self::cross), [`hadamard`](Self::hadamard)
/// - **Derived metrics**: [`magnitude`](Self::magnitude), [`unit`](Self::unit)
///
/// `add` and `sub` truncate to the shorter operand; `dot`, `cross`, and
/// `hadamard` report a [`VectorError`] instead.
///
/// # Examples
///
/// ```
/// use ndvec::Vector;
///
/// let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
///
/// assert_eq!(a.add(&b).as_slice(), &[5.0, 7.0, 9.0]);
/// assert_eq!(a.dot(&b).unwrap(), 32.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Create a zero-filled vector of `size` elements
    ///
    /// # Examples
    ///
    /// ```
    /// use ndvec::Vector;
    ///
    /// let mut v = Vector::new(4);
    /// v[0] = 2.9;
    /// assert_eq!(v.as_slice(), &[2.9, 0.0, 0.0, 0.0]);
    /// ```
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size],
        }
    }

    /// Create a vector holding a copy of `values`
    ///
    /// The vector never shares storage with `values`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndvec::Vector;
    ///
    /// let mut values = vec![0.0, 1.0, 2.0];
    /// let v = Vector::from_slice(&values);
    /// values[0] = 9.0;
    ///
    /// assert_eq!(v.as_slice(), &[0.0, 1.0, 2.0]);
    /// ```
    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            data: values.to_vec(),
        }
    }

    /// Get vector length
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if vector is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get underlying data as slice
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Get underlying data as mutable slice
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// Consume the vector, returning its backing buffer
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Overwrite leading elements with `values`
    ///
    /// Copies `min(self.len(), values.len())` elements starting at index 0.
    /// The vector is never resized: elements past `values.len()` keep their
    /// value and surplus entries of `values` are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndvec::Vector;
    ///
    /// let mut v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    /// v.set(&[9.0, 8.0]);
    /// assert_eq!(v.as_slice(), &[9.0, 8.0, 3.0, 4.0]);
    ///
    /// v.set(&[0.0, 0.0, 0.0, 0.0, 5.0]);
    /// assert_eq!(v.len(), 4);
    /// ```
    pub fn set(&mut self, values: &[f64]) {
        let count = self.data.len().min(values.len());
        self.data[..count].copy_from_slice(&values[..count]);
    }

    /// Multiply every element by `factor` in place
    ///
    /// # Examples
    ///
    /// ```
    /// use ndvec::Vector;
    ///
    /// let mut v = Vector::from_slice(&[0.0, 1.0, 2.0, 1.0]);
    /// v.scale(2.5);
    /// assert_eq!(v.as_slice(), &[0.0, 2.5, 5.0, 2.5]);
    /// ```
    pub fn scale(&mut self, factor: f64) {
        kernels::scale(&mut self.data, factor);
    }

    /// Set every element to `0.0`
    pub fn zero(&mut self) {
        self.data.fill(0.0);
    }

    /// Replace each element `e` with `f(e)`, in index order
    ///
    /// # Examples
    ///
    /// ```
    /// use ndvec::Vector;
    ///
    /// let mut v = Vector::from_slice(&[1.0, 4.0, 9.0]);
    /// v.apply(f64::sqrt);
    /// assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn apply<F>(&mut self, mut f: F)
    where
        F: FnMut(f64) -> f64,
    {
        for x in self.data.iter_mut() {
            *x = f(*x);
        }
    }

    /// Replace element `i` with `f(i, e)`, in index order
    ///
    /// # Examples
    ///
    /// ```
    /// use ndvec::Vector;
    ///
    /// let mut v = Vector::new(3);
    /// v.apply_with_index(|i, e| e + i as f64);
    /// assert_eq!(v.as_slice(), &[0.0, 1.0, 2.0]);
    /// ```
    pub fn apply_with_index<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, f64) -> f64,
    {
        for (i, x) in self.data.iter_mut().enumerate() {
            *x = f(i, *x);
        }
    }

    // ------------------------------------------------------------------
    // Binary operations
    // ------------------------------------------------------------------

    /// Element-wise addition
    ///
    /// The result has `min(self.len(), other.len())` elements; trailing
    /// elements of the longer operand are dropped. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndvec::Vector;
    ///
    /// let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// let b = Vector::from_slice(&[10.0, 20.0]);
    /// assert_eq!(a.add(&b).as_slice(), &[11.0, 22.0]);
    /// ```
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip(self, other), fields(lhs = self.len(), rhs = other.len()))
    )]
    pub fn add(&self, other: &Self) -> Self {
        let mut result = vec![0.0; self.len().min(other.len())];
        kernels::add(&self.data, &other.data, &mut result);
        Self { data: result }
    }

    /// Element-wise subtraction, `self[i] - other[i]`
    ///
    /// Truncates to the shorter operand like [`add`](Self::add).
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip(self, other), fields(lhs = self.len(), rhs = other.len()))
    )]
    pub fn sub(&self, other: &Self) -> Self {
        let mut result = vec![0.0; self.len().min(other.len())];
        kernels::sub(&self.data, &other.data, &mut result);
        Self { data: result }
    }

    /// Dot product
    ///
    /// # Examples
    ///
    /// ```
    /// use ndvec::Vector;
    ///
    /// let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b).unwrap(), 32.0); // 1*4 + 2*5 + 3*6
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if vectors have different lengths.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip(self, other), fields(lhs = self.len(), rhs = other.len()), err)
    )]
    pub fn dot(&self, other: &Self) -> Result<f64> {
        if self.len() != other.len() {
            return Err(VectorError::DimensionMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }

        Ok(kernels::dot(&self.data, &other.data))
    }

    /// Cross product of two 3-dimensional vectors
    ///
    /// # Examples
    ///
    /// ```
    /// use ndvec::Vector;
    ///
    /// let x = Vector::from_slice(&[1.0, 0.0, 0.0]);
    /// let y = Vector::from_slice(&[0.0, 1.0, 0.0]);
    /// assert_eq!(x.cross(&y).unwrap().as_slice(), &[0.0, 0.0, 1.0]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidDimension`] unless both vectors have
    /// exactly 3 elements.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip(self, other), fields(lhs = self.len(), rhs = other.len()), err)
    )]
    pub fn cross(&self, other: &Self) -> Result<Self> {
        // Checked before allocating the result.
        for len in [self.len(), other.len()] {
            if len != CROSS_DIMENSION {
                return Err(VectorError::InvalidDimension {
                    expected: CROSS_DIMENSION,
                    actual: len,
                });
            }
        }

        let (a, b) = (&self.data, &other.data);
        Ok(Self {
            data: vec![
                a[1] * b[2] - a[2] * b[1],
                a[2] * b[0] - a[0] * b[2],
                a[0] * b[1] - a[1] * b[0],
            ],
        })
    }

    /// Hadamard (element-wise) product
    ///
    /// # Examples
    ///
    /// ```
    /// use ndvec::Vector;
    ///
    /// let a = Vector::from_slice(&[1.0, 1.0, 2.0]);
    /// let b = Vector::from_slice(&[0.5, 3.0, 4.0]);
    /// assert_eq!(a.hadamard(&b).unwrap().as_slice(), &[0.5, 3.0, 8.0]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if vectors have different lengths.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip(self, other), fields(lhs = self.len(), rhs = other.len()), err)
    )]
    pub fn hadamard(&self, other: &Self) -> Result<Self> {
        if self.len() != other.len() {
            return Err(VectorError::DimensionMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }

        let mut result = vec![0.0; self.len()];
        kernels::mul(&self.data, &other.data, &mut result);
        Ok(Self { data: result })
    }

    // ------------------------------------------------------------------
    // Derived metrics
    // ------------------------------------------------------------------

    /// Euclidean (L2) norm, `sqrt(sum(v[i]^2))`
    ///
    /// An empty vector has magnitude `0.0`. NaN and infinite elements
    /// propagate into the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndvec::Vector;
    ///
    /// let v = Vector::from_slice(&[3.0, 4.0]);
    /// assert_eq!(v.magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        kernels::sum_of_squares(&self.data).sqrt()
    }

    /// New vector with the same direction and magnitude 1
    ///
    /// Computed as `self * (1 / self.magnitude())`. A zero vector is not
    /// special-cased: the reciprocal is `+inf`, so zero elements become NaN
    /// and nonzero elements become infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndvec::Vector;
    ///
    /// let v = Vector::from_slice(&[3.0, 4.0]);
    /// let u = v.unit();
    /// assert!((u[0] - 0.6).abs() < 1e-12);
    /// assert!((u[1] - 0.8).abs() < 1e-12);
    /// assert_eq!(v.as_slice(), &[3.0, 4.0]);
    /// ```
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip(self), fields(len = self.len()))
    )]
    pub fn unit(&self) -> Self {
        let reciprocal = 1.0 / self.magnitude();
        let mut unit = self.clone();
        unit.scale(reciprocal);
        unit
    }
}

/// Unit vector of `v`; see [`Vector::unit`]
pub fn unit(v: &Vector) -> Vector {
    v.unit()
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Self { data }
    }
}

impl From<&[f64]> for Vector {
    fn from(values: &[f64]) -> Self {
        Self::from_slice(values)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Self {
        v.data
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::EPSILON;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_add_matches_elementwise(
            a in prop::collection::vec(-1000.0f64..1000.0, 0..64),
            b in prop::collection::vec(-1000.0f64..1000.0, 0..64)
        ) {
            let va = Vector::from_slice(&a);
            let vb = Vector::from_slice(&b);
            let sum = va.add(&vb);
            let diff = va.sub(&vb);

            let len = a.len().min(b.len());
            prop_assert_eq!(sum.len(), len);
            prop_assert_eq!(diff.len(), len);
            for i in 0..len {
                prop_assert_eq!(sum[i], a[i] + b[i]);
                prop_assert_eq!(diff[i], a[i] - b[i]);
            }
        }

        #[test]
        fn test_dot_fails_iff_lengths_differ(
            a in prop::collection::vec(-100.0f64..100.0, 0..16),
            b in prop::collection::vec(-100.0f64..100.0, 0..16)
        ) {
            let result = Vector::from_slice(&a).dot(&Vector::from_slice(&b));
            if a.len() == b.len() {
                let expected: f64 = a.iter().zip(&b).fold(0.0, |acc, (x, y)| acc + x * y);
                prop_assert_eq!(result, Ok(expected));
            } else {
                prop_assert_eq!(
                    result,
                    Err(VectorError::DimensionMismatch { expected: a.len(), actual: b.len() })
                );
            }
        }

        #[test]
        fn test_scale_round_trip(
            a in prop::collection::vec(-1000.0f64..1000.0, 1..64),
            k in prop_oneof![-100.0f64..-0.01, 0.01f64..100.0]
        ) {
            let mut v = Vector::from_slice(&a);
            v.scale(k);
            v.scale(1.0 / k);
            for (x, y) in v.iter().zip(&a) {
                prop_assert!((x - y).abs() <= 8.0 * EPSILON * y.abs().max(1.0));
            }
        }

        #[test]
        fn test_magnitude_non_negative(
            a in prop::collection::vec(-1e6f64..1e6, 0..64)
        ) {
            prop_assert!(Vector::from_slice(&a).magnitude() >= 0.0);
        }
    }
}
