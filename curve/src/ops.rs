use num_bigint::BigUint;

use crate::{CurveError, EllipticCurve, JacobianPoint, Point};

/// The validated curve operations used by protocols built on this crate.
///
/// [`EllipticCurve`] computes every call directly; [`crate::CachedCurve`] serves repeated
/// calls from a [`crate::ResultCache`]. Both return identical results.
pub trait CurveOps {
    /// Domain parameters and coordinate mode.
    fn curve(&self) -> &EllipticCurve;
    fn is_point_on_curve(&self, point: &Point) -> bool;
    fn add_points(&self, p1: &Point, p2: &Point) -> Result<Point, CurveError>;
    fn double_point(&self, point: &Point) -> Result<Point, CurveError>;
    fn multiply_point(&self, k: &BigUint, point: &Point) -> Result<Point, CurveError>;
    fn to_jacobian(&self, point: &Point) -> JacobianPoint;
    fn to_affine(&self, point: &JacobianPoint) -> Point;
}

impl CurveOps for EllipticCurve {
    #[inline]
    fn curve(&self) -> &EllipticCurve {
        self
    }

    #[inline]
    fn is_point_on_curve(&self, point: &Point) -> bool {
        Self::is_point_on_curve(self, point)
    }

    #[inline]
    fn add_points(&self, p1: &Point, p2: &Point) -> Result<Point, CurveError> {
        Self::add_points(self, p1, p2)
    }

    #[inline]
    fn double_point(&self, point: &Point) -> Result<Point, CurveError> {
        Self::double_point(self, point)
    }

    #[inline]
    fn multiply_point(&self, k: &BigUint, point: &Point) -> Result<Point, CurveError> {
        Self::multiply_point(self, k, point)
    }

    #[inline]
    fn to_jacobian(&self, point: &Point) -> JacobianPoint {
        Self::to_jacobian(self, point)
    }

    #[inline]
    fn to_affine(&self, point: &JacobianPoint) -> Point {
        Self::to_affine(self, point)
    }
}

impl<T: CurveOps + ?Sized> CurveOps for &T {
    #[inline]
    fn curve(&self) -> &EllipticCurve {
        (**self).curve()
    }

    #[inline]
    fn is_point_on_curve(&self, point: &Point) -> bool {
        (**self).is_point_on_curve(point)
    }

    #[inline]
    fn add_points(&self, p1: &Point, p2: &Point) -> Result<Point, CurveError> {
        (**self).add_points(p1, p2)
    }

    #[inline]
    fn double_point(&self, point: &Point) -> Result<Point, CurveError> {
        (**self).double_point(point)
    }

    #[inline]
    fn multiply_point(&self, k: &BigUint, point: &Point) -> Result<Point, CurveError> {
        (**self).multiply_point(k, point)
    }

    #[inline]
    fn to_jacobian(&self, point: &Point) -> JacobianPoint {
        (**self).to_jacobian(point)
    }

    #[inline]
    fn to_affine(&self, point: &JacobianPoint) -> Point {
        (**self).to_affine(point)
    }
}
