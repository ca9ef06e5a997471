use core::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::field::PrimeField;
use crate::{EllipticCurve, Group};

/// Point in affine coordinates `(x, y)`.
///
/// Absent coordinates encode the point at infinity. Equality is structural, so callers that
/// compare points should keep coordinates reduced modulo `p`; every operation in this crate
/// returns reduced coordinates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: Option<BigUint>,
    pub y: Option<BigUint>,
}

impl Point {
    /// The point at infinity (identity element).
    pub const INFINITY: Self = Point { x: None, y: None };

    pub fn new(x: BigUint, y: BigUint) -> Self {
        Point {
            x: Some(x),
            y: Some(y),
        }
    }

    /// A point missing either coordinate is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.x.is_none() || self.y.is_none()
    }

    /// Both coordinates of a finite point.
    #[inline]
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match (&self.x, &self.y) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }

    /// `(x, p - y)`, the additive inverse of a finite point.
    pub fn negate(&self, field: &PrimeField) -> Self {
        match self.coordinates() {
            Some((x, y)) => Point::new(field.reduce(x), field.neg(y)),
            None => Self::INFINITY,
        }
    }
}

impl From<(BigUint, BigUint)> for Point {
    fn from((x, y): (BigUint, BigUint)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coordinates() {
            Some((x, y)) => write!(f, "({x:#x}, {y:#x})"),
            None => f.write_str("O"),
        }
    }
}

/// Check `y^2 = x^3 + a*x + b (mod p)`. The point at infinity does not satisfy the equation.
pub(crate) fn is_on_curve(curve: &EllipticCurve, point: &Point) -> bool {
    let Some((x, y)) = point.coordinates() else {
        return false;
    };

    let field = curve.field();
    let lhs = field.square(y);
    let x3 = field.mul(&field.square(x), x);
    let ax = field.mul(curve.a(), x);
    let rhs = field.add(&field.add(&x3, &ax), curve.b());

    lhs == rhs
}

impl Group for Point {
    #[inline]
    fn identity() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity()
    }

    fn add(&self, other: &Self, curve: &EllipticCurve) -> Self {
        let Some((x1, y1)) = self.coordinates() else {
            return other.clone();
        };
        let Some((x2, y2)) = other.coordinates() else {
            return self.clone();
        };

        let field = curve.field();
        let (x1, y1) = (field.reduce(x1), field.reduce(y1));
        let (x2, y2) = (field.reduce(x2), field.reduce(y2));

        if x1 == x2 && y1 == y2 {
            return Point::new(x1, y1).double(curve);
        }

        // λ = (y2 - y1) / (x2 - x1); no inverse means the points are vertically aligned
        let Some(inv) = field.inverse(&field.sub(&x2, &x1)) else {
            return Self::INFINITY;
        };
        let lambda = field.mul(&field.sub(&y2, &y1), &inv);

        // x3 = λ^2 - x1 - x2
        let x3 = field.sub(&field.sub(&field.square(&lambda), &x1), &x2);

        // y3 = λ(x1 - x3) - y1
        let y3 = field.sub(&field.mul(&lambda, &field.sub(&x1, &x3)), &y1);

        Point::new(x3, y3)
    }

    fn double(&self, curve: &EllipticCurve) -> Self {
        let Some((x, y)) = self.coordinates() else {
            return self.clone();
        };

        let field = curve.field();

        // λ = (3x^2 + a) / (2y); a vertical tangent (y = 0) gives O
        let Some(inv) = field.inverse(&field.double(y)) else {
            return Self::INFINITY;
        };
        let numerator = field.add(&field.mul_small(&field.square(x), 3), curve.a());
        let lambda = field.mul(&numerator, &inv);

        // x3 = λ^2 - 2x
        let x3 = field.sub(&field.square(&lambda), &field.double(x));

        // y3 = λ(x - x3) - y
        let y3 = field.sub(&field.mul(&lambda, &field.sub(x, &x3)), y);

        Point::new(x3, y3)
    }
}
