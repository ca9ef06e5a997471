use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::affine::Point;
use crate::field::PrimeField;
use crate::{EllipticCurve, Group};

/// Point in Jacobian coordinates `(X, Y, Z)`, standing for the affine point `(X/Z^2, Y/Z^3)`.
///
/// Absent `X` or `Y` encode the point at infinity regardless of `Z`; the canonical identity is
/// `(None, None, 1)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JacobianPoint {
    pub x: Option<BigUint>,
    pub y: Option<BigUint>,
    pub z: BigUint,
}

impl Default for JacobianPoint {
    fn default() -> Self {
        Self::infinity()
    }
}

impl JacobianPoint {
    pub fn new(x: BigUint, y: BigUint, z: BigUint) -> Self {
        JacobianPoint {
            x: Some(x),
            y: Some(y),
            z,
        }
    }

    /// The point at infinity: `(None, None, 1)`.
    pub fn infinity() -> Self {
        JacobianPoint {
            x: None,
            y: None,
            z: BigUint::one(),
        }
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.x.is_none() || self.y.is_none()
    }

    #[inline]
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint, &BigUint)> {
        match (&self.x, &self.y) {
            (Some(x), Some(y)) => Some((x, y, &self.z)),
            _ => None,
        }
    }

    /// Lift an affine point with `Z = 1`.
    pub fn from_affine(point: &Point) -> Self {
        match point.coordinates() {
            Some((x, y)) => JacobianPoint::new(x.clone(), y.clone(), BigUint::one()),
            None => Self::infinity(),
        }
    }

    /// Project back to affine coordinates with one inversion of `Z`.
    ///
    /// A point whose `Z` is zero (or not invertible) maps to the point at infinity.
    pub fn to_affine(&self, field: &PrimeField) -> Point {
        let Some((x, y, z)) = self.coordinates() else {
            return Point::INFINITY;
        };
        if field.reduce(z).is_zero() {
            return Point::INFINITY;
        }
        let Some(z_inv) = field.inverse(z) else {
            return Point::INFINITY;
        };

        let z_inv2 = field.square(&z_inv);
        let z_inv3 = field.mul(&z_inv2, &z_inv);

        Point::new(field.mul(x, &z_inv2), field.mul(y, &z_inv3))
    }
}

impl From<&Point> for JacobianPoint {
    fn from(point: &Point) -> Self {
        JacobianPoint::from_affine(point)
    }
}

impl From<Point> for JacobianPoint {
    fn from(point: Point) -> Self {
        JacobianPoint::from_affine(&point)
    }
}

impl Group for JacobianPoint {
    #[inline]
    fn identity() -> Self {
        Self::infinity()
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity()
    }

    /// add-2007-bl
    fn add(&self, other: &Self, curve: &EllipticCurve) -> Self {
        let Some((x1, y1, z1)) = self.coordinates() else {
            return other.clone();
        };
        let Some((x2, y2, z2)) = other.coordinates() else {
            return self.clone();
        };

        let f = curve.field();

        let z1z1 = f.square(z1);
        let z2z2 = f.square(z2);
        let u1 = f.mul(x1, &z2z2);
        let u2 = f.mul(x2, &z1z1);
        let s1 = f.mul(&f.mul(y1, z2), &z2z2);
        let s2 = f.mul(&f.mul(y2, z1), &z1z1);

        if u1 == u2 {
            if s1 != s2 {
                return Self::infinity();
            }
            return self.double(curve);
        }

        let h = f.sub(&u2, &u1);
        let i = f.square(&f.double(&h));
        let j = f.mul(&h, &i);
        let r = f.double(&f.sub(&s2, &s1));
        let v = f.mul(&u1, &i);

        // X3 = r^2 - J - 2V
        let x3 = f.sub(&f.sub(&f.square(&r), &j), &f.double(&v));

        // Y3 = r(V - X3) - 2 S1 J
        let y3 = f.sub(
            &f.mul(&r, &f.sub(&v, &x3)),
            &f.double(&f.mul(&s1, &j)),
        );

        // Z3 = ((Z1 + Z2)^2 - Z1Z1 - Z2Z2) H
        let z3 = f.mul(
            &f.sub(&f.sub(&f.square(&f.add(z1, z2)), &z1z1), &z2z2),
            &h,
        );

        JacobianPoint::new(x3, y3, z3)
    }

    fn double(&self, curve: &EllipticCurve) -> Self {
        let Some((x1, y1, z1)) = self.coordinates() else {
            return self.clone();
        };

        let f = curve.field();
        if f.reduce(y1).is_zero() {
            return Self::infinity();
        }

        let ysq = f.square(y1);
        let zsq = f.square(z1);

        // S = 4 X1 Y1^2
        let s = f.mul_small(&f.mul(x1, &ysq), 4);

        // M = 3 X1^2 + a Z1^4
        let m = f.add(
            &f.mul_small(&f.square(x1), 3),
            &f.mul(curve.a(), &f.square(&zsq)),
        );

        let x3 = f.sub(&f.square(&m), &f.double(&s));
        let y3 = f.sub(
            &f.mul(&m, &f.sub(&s, &x3)),
            &f.mul_small(&f.square(&ysq), 8),
        );
        let z3 = f.double(&f.mul(y1, z1));

        JacobianPoint::new(x3, y3, z3)
    }
}
