//! Operator overloads for [`Vector`]
//!
//! `+` and `-` follow the truncating semantics of [`Vector::add`] and
//! [`Vector::sub`]. They are only implemented on references so that method
//! syntax (`a.add(&b)`) always resolves to the inherent methods.

use std::ops::{Add, Mul, MulAssign, Neg, Sub};

use crate::Vector;

impl Add<&Vector> for &Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: &Vector) -> Vector {
        Vector::add(self, rhs)
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: &Vector) -> Vector {
        Vector::sub(self, rhs)
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        self.clone() * rhs
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(mut self, rhs: f64) -> Vector {
        self.scale(rhs);
        self
    }
}

impl MulAssign<f64> for Vector {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs);
    }
}

impl Neg for &Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        -self.clone()
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(mut self) -> Vector {
        self.apply(|e| -e);
        self
    }
}
