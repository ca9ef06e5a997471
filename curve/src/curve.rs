//! Curve domain parameters and the validated group operations.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::affine::{self, Point};
use crate::field::PrimeField;
use crate::jacobian::JacobianPoint;
use crate::{CurveError, Group};

/// Short Weierstrass curve `y^2 = x^3 + a*x + b` over `GF(p)`, together with its base point
/// `G` of prime order `n`, the cofactor `h`, and the coordinate system used for arithmetic.
///
/// The value is immutable. Two curves with the same numbers but different `projective` flags
/// compare unequal (and never share cache entries) yet always produce the same affine results.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "CurveParams")]
pub struct EllipticCurve {
    field: PrimeField,
    a: BigUint,
    b: BigUint,
    g: Point,
    n: BigUint,
    h: BigUint,
    projective: bool,
}

/// Wire form of [`EllipticCurve`]; deserialized values are rebuilt through
/// [`EllipticCurve::new`] so `a` and `b` come out reduced.
#[derive(Deserialize)]
struct CurveParams {
    field: PrimeField,
    a: BigUint,
    b: BigUint,
    g: Point,
    n: BigUint,
    h: BigUint,
    projective: bool,
}

impl From<CurveParams> for EllipticCurve {
    fn from(params: CurveParams) -> Self {
        let CurveParams {
            field,
            a,
            b,
            g,
            n,
            h,
            projective,
        } = params;
        EllipticCurve::new(field.modulus().clone(), a, b, g, n, h).with_projective(projective)
    }
}

impl EllipticCurve {
    /// Build a curve from its domain parameters, using Jacobian coordinates internally.
    ///
    /// `p` is trusted to be a prime greater than 3 and `g` to lie on the curve; use
    /// [`EllipticCurve::is_point_on_curve`] to check the latter.
    pub fn new(p: BigUint, a: BigUint, b: BigUint, g: Point, n: BigUint, h: BigUint) -> Self {
        let field = PrimeField::new(p);
        let a = field.reduce(&a);
        let b = field.reduce(&b);

        EllipticCurve {
            field,
            a,
            b,
            g,
            n,
            h,
            projective: true,
        }
    }

    /// The same curve in the requested coordinate mode.
    pub fn with_projective(self, projective: bool) -> Self {
        EllipticCurve { projective, ..self }
    }

    #[inline]
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    #[inline]
    pub fn p(&self) -> &BigUint {
        self.field.modulus()
    }

    #[inline]
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    #[inline]
    pub fn generator(&self) -> &Point {
        &self.g
    }

    /// Order `n` of the base point.
    #[inline]
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    #[inline]
    pub fn cofactor(&self) -> &BigUint {
        &self.h
    }

    #[inline]
    pub fn is_projective(&self) -> bool {
        self.projective
    }

    /// Whether a finite point satisfies the curve equation.
    ///
    /// The point at infinity returns `false`: it is a group element but not a solution of the
    /// equation. The group operations handle it before validating.
    pub fn is_point_on_curve(&self, point: &Point) -> bool {
        affine::is_on_curve(self, point)
    }

    /// [`EllipticCurve::is_point_on_curve`] for a point in Jacobian form.
    pub fn is_jacobian_point_on_curve(&self, point: &JacobianPoint) -> bool {
        if point.is_infinity() {
            return false;
        }
        self.is_point_on_curve(&self.to_affine(point))
    }

    fn ensure_on_curve(&self, point: &Point) -> Result<(), CurveError> {
        if self.is_point_on_curve(point) {
            Ok(())
        } else {
            log::debug!("rejecting point {point}: not on the curve");
            Err(CurveError::InvalidPoint)
        }
    }

    /// `P1 + P2`.
    ///
    /// Either operand may be the identity. Finite operands must lie on the curve.
    pub fn add_points(&self, p1: &Point, p2: &Point) -> Result<Point, CurveError> {
        if p1.is_infinity() {
            return Ok(p2.clone());
        }
        if p2.is_infinity() {
            return Ok(p1.clone());
        }

        self.ensure_on_curve(p1)?;
        self.ensure_on_curve(p2)?;

        if p1 == p2 {
            return self.double_point(p1);
        }

        if self.projective {
            let sum = self.to_jacobian(p1).add(&self.to_jacobian(p2), self);
            return Ok(self.to_affine(&sum));
        }

        Ok(p1.add(p2, self))
    }

    /// `2P`.
    pub fn double_point(&self, point: &Point) -> Result<Point, CurveError> {
        if point.is_infinity() {
            return Ok(point.clone());
        }

        self.ensure_on_curve(point)?;

        if self.projective {
            let doubled = self.to_jacobian(point).double(self);
            return Ok(self.to_affine(&doubled));
        }

        Ok(point.double(self))
    }

    /// `kP` with `k` reduced modulo the curve order.
    ///
    /// A scalar congruent to zero, or the identity as `P`, gives the identity. In projective
    /// mode the whole scan runs in Jacobian coordinates with a single conversion at the end,
    /// and the converted result is checked against the curve equation.
    pub fn multiply_point(&self, k: &BigUint, point: &Point) -> Result<Point, CurveError> {
        // an unknown order (n = 0) leaves k unreduced
        let k = if self.n.is_zero() { k.clone() } else { k % &self.n };
        if k.is_zero() || point.is_infinity() {
            return Ok(Point::INFINITY);
        }

        self.ensure_on_curve(point)?;

        if !self.projective {
            return Ok(point.scalar_mul(&k, self));
        }

        let product = self.jacobian_multiply_point(&k, &self.to_jacobian(point));
        let result = self.to_affine(&product);
        if result.is_infinity() {
            return Ok(result);
        }
        self.ensure_on_curve(&result)?;

        Ok(result)
    }

    /// Affine to Jacobian with `Z = 1`.
    pub fn to_jacobian(&self, point: &Point) -> JacobianPoint {
        JacobianPoint::from_affine(point)
    }

    /// Jacobian to affine; `Z = 0` maps to the identity.
    pub fn to_affine(&self, point: &JacobianPoint) -> Point {
        point.to_affine(&self.field)
    }

    /// Jacobian addition without membership checks.
    pub fn jacobian_add_points(&self, p1: &JacobianPoint, p2: &JacobianPoint) -> JacobianPoint {
        p1.add(p2, self)
    }

    /// Jacobian doubling without membership checks.
    pub fn jacobian_double_point(&self, point: &JacobianPoint) -> JacobianPoint {
        point.double(self)
    }

    /// Jacobian double-and-add. `k` is used as given, without reduction modulo `n`.
    pub fn jacobian_multiply_point(&self, k: &BigUint, point: &JacobianPoint) -> JacobianPoint {
        point.scalar_mul(k, self)
    }
}
