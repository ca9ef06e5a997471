//! Shared fixtures and group-law properties.

use num_bigint::BigUint;
use num_traits::Num;
use proptest::prelude::*;

use crate::{curves, CachedCurve, CurveOps, EllipticCurve, Point};

pub(crate) fn big(value: u32) -> BigUint {
    BigUint::from(value)
}

pub(crate) fn hex(digits: &str) -> BigUint {
    BigUint::from_str_radix(digits, 16).unwrap()
}

/// `2G` on secp192k1.
pub(crate) fn p1() -> Point {
    Point::new(
        hex("F091CF6331B1747684F5D2549CD1D4B3A8BED93B94F93CB6"),
        hex("FD7AF42E1E7565A02E6268661C5E42E603DA2D98A18F2ED5"),
    )
}

/// `3G` on secp192k1.
pub(crate) fn p2() -> Point {
    Point::new(
        hex("6E43B7DCAE2FD5E0BF2A1BA7615CA3B9065487C9A67B4583"),
        hex("C48DCEA47AE08E84D5FEDC3D09E4C19606A290F7A19A6A58"),
    )
}

pub(crate) fn secp192k1_affine() -> EllipticCurve {
    curves::lookup(curves::SECP192K1, false).unwrap()
}

pub(crate) fn secp192k1_projective() -> EllipticCurve {
    curves::lookup(curves::SECP192K1, true).unwrap()
}

/// `y^2 = x^3 + x` over GF(13): 20 points, `G = (2, 6)` of order 10.
pub(crate) fn toy_curve() -> EllipticCurve {
    EllipticCurve::new(big(13), big(1), big(0), Point::new(big(2), big(6)), big(10), big(2))
}

fn scalar() -> impl Strategy<Value = BigUint> {
    any::<[u8; 24]>().prop_map(|bytes| BigUint::from_bytes_be(&bytes))
}

fn point(curve: EllipticCurve) -> impl Strategy<Value = Point> {
    scalar().prop_map(move |k| curve.multiply_point(&k, curve.generator()).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn addition_commutes(a in point(secp192k1_projective()), b in point(secp192k1_projective())) {
        let curve = secp192k1_projective();
        prop_assert_eq!(curve.add_points(&a, &b), curve.add_points(&b, &a));
    }

    #[test]
    fn addition_associates(
        a in point(secp192k1_affine()),
        b in point(secp192k1_affine()),
        c in point(secp192k1_affine()),
    ) {
        let curve = secp192k1_affine();
        let left = curve.add_points(&curve.add_points(&a, &b).unwrap(), &c).unwrap();
        let right = curve.add_points(&a, &curve.add_points(&b, &c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn identity_is_neutral(a in point(secp192k1_projective())) {
        let curve = secp192k1_projective();
        prop_assert_eq!(curve.add_points(&a, &Point::INFINITY), Ok(a.clone()));
        prop_assert_eq!(curve.add_points(&Point::INFINITY, &a), Ok(a));
    }

    #[test]
    fn negation_is_inverse(a in point(secp192k1_projective())) {
        let curve = secp192k1_projective();
        let neg = a.negate(curve.field());
        prop_assert_eq!(curve.add_points(&a, &neg), Ok(Point::INFINITY));
    }

    #[test]
    fn doubling_matches_addition(a in point(secp192k1_projective())) {
        for curve in [secp192k1_affine(), secp192k1_projective()] {
            let doubled = curve.double_point(&a).unwrap();
            prop_assert_eq!(curve.add_points(&a, &a), Ok(doubled.clone()));
            prop_assert_eq!(curve.multiply_point(&big(2), &a), Ok(doubled));
        }
    }

    #[test]
    fn multiplication_distributes(j in scalar(), k in scalar()) {
        let curve = secp192k1_projective();
        let g = curve.generator();
        let sum = curve
            .add_points(&curve.multiply_point(&j, g).unwrap(), &curve.multiply_point(&k, g).unwrap())
            .unwrap();
        prop_assert_eq!(curve.multiply_point(&(j + k), g), Ok(sum));
    }

    #[test]
    fn coordinate_modes_agree(k in scalar(), name in prop::sample::select(curves::names())) {
        let affine = curves::lookup(name, false).unwrap();
        let projective = curves::lookup(name, true).unwrap();
        let g = affine.generator();
        prop_assert_eq!(affine.multiply_point(&k, g), projective.multiply_point(&k, g));
    }

    #[test]
    fn results_stay_on_curve(k in scalar()) {
        let curve = secp192k1_projective();
        let point = curve.multiply_point(&k, curve.generator()).unwrap();
        prop_assert!(point.is_infinity() || curve.is_point_on_curve(&point));
    }

    #[test]
    fn cache_is_transparent(k in scalar(), a in point(secp192k1_projective())) {
        let curve = secp192k1_projective();
        let cached = CachedCurve::with_capacity(curve.clone(), 8);
        for _ in 0..2 {
            prop_assert_eq!(cached.multiply_point(&k, &a), curve.multiply_point(&k, &a));
            prop_assert_eq!(cached.double_point(&a), curve.double_point(&a));
        }
    }
}
