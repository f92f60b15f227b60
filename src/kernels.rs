//! Scalar kernels shared by [`Vector`](crate::Vector) operations
//!
//! Portable loops over `f64` slices. Binary kernels process the first
//! `result.len()` elements (or the common prefix for reductions); callers
//! decide whether unequal lengths truncate or fail before calling in.

/// Element-wise addition: `result[i] = a[i] + b[i]`
pub(crate) fn add(a: &[f64], b: &[f64], result: &mut [f64]) {
    for ((r, &x), &y) in result.iter_mut().zip(a).zip(b) {
        *r = x + y;
    }
}

/// Element-wise subtraction: `result[i] = a[i] - b[i]`
pub(crate) fn sub(a: &[f64], b: &[f64], result: &mut [f64]) {
    for ((r, &x), &y) in result.iter_mut().zip(a).zip(b) {
        *r = x - y;
    }
}

/// Element-wise multiplication: `result[i] = a[i] * b[i]`
pub(crate) fn mul(a: &[f64], b: &[f64], result: &mut [f64]) {
    for ((r, &x), &y) in result.iter_mut().zip(a).zip(b) {
        *r = x * y;
    }
}

/// Dot product over the common prefix: `sum(a[i] * b[i])`
pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).fold(0.0, |acc, (&x, &y)| acc + x * y)
}

/// Sum of squares: `sum(a[i] * a[i])`
pub(crate) fn sum_of_squares(a: &[f64]) -> f64 {
    a.iter().fold(0.0, |acc, &x| acc + x * x)
}

/// In-place scalar multiplication: `a[i] *= factor`
pub(crate) fn scale(a: &mut [f64], factor: f64) {
    for x in a {
        *x *= factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let mut result = [0.0; 3];
        add(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &mut result);
        assert_eq!(result, [5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_add_stops_at_result_len() {
        let mut result = [0.0; 2];
        add(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0, 7.0], &mut result);
        assert_eq!(result, [5.0, 7.0]);
    }

    #[test]
    fn test_sub() {
        let mut result = [0.0; 3];
        sub(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &mut result);
        assert_eq!(result, [-3.0, -3.0, -3.0]);
    }

    #[test]
    fn test_mul() {
        let mut result = [0.0; 3];
        mul(&[2.0, 3.0, 4.0], &[5.0, 6.0, 7.0], &mut result);
        assert_eq!(result, [10.0, 18.0, 28.0]);
    }

    #[test]
    fn test_dot() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        assert_eq!(dot(&[], &[]), 0.0);
    }

    #[test]
    fn test_sum_of_squares() {
        assert_eq!(sum_of_squares(&[3.0, 4.0]), 25.0);
        assert_eq!(sum_of_squares(&[]), 0.0);
    }

    #[test]
    fn test_sum_of_squares_propagates_nan() {
        assert!(sum_of_squares(&[1.0, f64::NAN]).is_nan());
    }

    #[test]
    fn test_scale() {
        let mut a = [0.0, 1.0, 2.0, 1.0];
        scale(&mut a, 2.5);
        assert_eq!(a, [0.0, 2.5, 5.0, 2.5]);
    }
}
