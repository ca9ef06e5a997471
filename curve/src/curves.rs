//! Registry of named SEC 2 curves.
//!
//! ```
//! use ecurve::curves;
//!
//! let curve = curves::lookup("secp256k1", true).expect("known curve");
//! assert!(curve.is_point_on_curve(curve.generator()));
//! ```

use hex_literal::hex;
use num_bigint::BigUint;

use crate::{CurveError, EllipticCurve, Point};

pub const SECP192K1: &str = "secp192k1";
pub const SECP192R1: &str = "secp192r1";
pub const SECP224K1: &str = "secp224k1";
pub const SECP224R1: &str = "secp224r1";
pub const SECP256K1: &str = "secp256k1";
pub const SECP256R1: &str = "secp256r1";
pub const SECP384R1: &str = "secp384r1";
pub const SECP521R1: &str = "secp521r1";

const NAMES: [&str; 8] = [
    SECP192K1, SECP192R1, SECP224K1, SECP224R1, SECP256K1, SECP256R1, SECP384R1, SECP521R1,
];

/// Names accepted by [`lookup`].
pub fn names() -> &'static [&'static str] {
    &NAMES
}

/// The named curve in the requested coordinate mode.
pub fn lookup(name: &str, projective: bool) -> Result<EllipticCurve, CurveError> {
    let curve = match name {
        SECP192K1 => secp192k1(),
        SECP192R1 => secp192r1(),
        SECP224K1 => secp224k1(),
        SECP224R1 => secp224r1(),
        SECP256K1 => secp256k1(),
        SECP256R1 => secp256r1(),
        SECP384R1 => secp384r1(),
        SECP521R1 => secp521r1(),
        _ => return Err(CurveError::CurveNotFound(name.to_owned())),
    };

    Ok(curve.with_projective(projective))
}

/// The named curve using Jacobian coordinates.
pub fn get(name: &str) -> Result<EllipticCurve, CurveError> {
    lookup(name, true)
}

fn build(p: &[u8], a: &[u8], b: &[u8], gx: &[u8], gy: &[u8], n: &[u8]) -> EllipticCurve {
    EllipticCurve::new(
        BigUint::from_bytes_be(p),
        BigUint::from_bytes_be(a),
        BigUint::from_bytes_be(b),
        Point::new(BigUint::from_bytes_be(gx), BigUint::from_bytes_be(gy)),
        BigUint::from_bytes_be(n),
        BigUint::from(1u32),
    )
}

fn secp192k1() -> EllipticCurve {
    build(
        &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFEE37"),
        &hex!("00"),
        &hex!("03"),
        &hex!("DB4FF10EC057E9AE26B07D0280B7F4341DA5D1B1EAE06C7D"),
        &hex!("9B2F2F6D9C5628A7844163D015BE86344082AA88D95E2F9D"),
        &hex!("FFFFFFFFFFFFFFFFFFFFFFFE26F2FC170F69466A74DEFD8D"),
    )
}

fn secp192r1() -> EllipticCurve {
    build(
        &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFF"),
        &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFC"),
        &hex!("64210519E59C80E70FA7E9AB72243049FEB8DEECC146B9B1"),
        &hex!("188DA80EB03090F67CBF20EB43A18800F4FF0AFD82FF1012"),
        &hex!("07192B95FFC8DA78631011ED6B24CDD573F977A11E794811"),
        &hex!("FFFFFFFFFFFFFFFFFFFFFFFF99DEF836146BC9B1B4D22831"),
    )
}

fn secp224k1() -> EllipticCurve {
    build(
        &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFE56D"),
        &hex!("00"),
        &hex!("05"),
        &hex!("A1455B334DF099DF30FC28A169A467E9E47075A90F7E650EB6B7A45C"),
        &hex!("7E089FED7FBA344282CAFBD6F7E319F7C0B0BD59E2CA4BDB556D61A5"),
        &hex!("010000000000000000000000000001DCE8D2EC6184CAF0A971769FB1F7"),
    )
}

fn secp224r1() -> EllipticCurve {
    build(
        &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000001"),
        &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFE"),
        &hex!("B4050A850C04B3ABF54132565044B0B7D7BFD8BA270B39432355FFB4"),
        &hex!("B70E0CBD6BB4BF7F321390B94A03C1D356C21122343280D6115C1D21"),
        &hex!("BD376388B5F723FB4C22DFE6CD4375A05A07476444D5819985007E34"),
        &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFF16A2E0B8F03E13DD29455C5C2A3D"),
    )
}

fn secp256k1() -> EllipticCurve {
    build(
        &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"),
        &hex!("00"),
        &hex!("07"),
        &hex!("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"),
        &hex!("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"),
        &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"),
    )
}

fn secp256r1() -> EllipticCurve {
    build(
        &hex!("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF"),
        &hex!("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC"),
        &hex!("5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B"),
        &hex!("6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296"),
        &hex!("4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5"),
        &hex!("FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551"),
    )
}

fn secp384r1() -> EllipticCurve {
    build(
        &hex!(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFE"
            "FFFFFFFF0000000000000000FFFFFFFF"
        ),
        &hex!(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFE"
            "FFFFFFFF0000000000000000FFFFFFFC"
        ),
        &hex!(
            "B3312FA7E23EE7E4988E056BE3F82D19181D9C6EFE8141120314088F5013875A"
            "C656398D8A2ED19D2A85C8EDD3EC2AEF"
        ),
        &hex!(
            "AA87CA22BE8B05378EB1C71EF320AD746E1D3B628BA79B9859F741E082542A38"
            "5502F25DBF55296C3A545E3872760AB7"
        ),
        &hex!(
            "3617DE4A96262C6F5D9E98BF9292DC29F8F41DBD289A147CE9DA3113B5F0B8C0"
            "0A60B1CE1D7E819D7A431D7C90EA0E5F"
        ),
        &hex!(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC7634D81F4372DDF"
            "581A0DB248B0A77AECEC196ACCC52973"
        ),
    )
}

fn secp521r1() -> EllipticCurve {
    build(
        &hex!(
            "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
        ),
        &hex!(
            "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC"
        ),
        &hex!(
            "0051953EB9618E1C9A1F929A21A0B68540EEA2DA725B99B315F3B8B489918EF1"
            "09E156193951EC7E937B1652C0BD3BB1BF073573DF883D2C34F1EF451FD46B503F00"
        ),
        &hex!(
            "00C6858E06B70404E9CD9E3ECB662395B4429C648139053FB521F828AF606B4D"
            "3DBAA14B5E77EFE75928FE1DC127A2FFA8DE3348B3C1856A429BF97E7E31C2E5BD66"
        ),
        &hex!(
            "011839296A789A3BC0045C8A5FB42C7D1BD998F54449579B446817AFBD17273E"
            "662C97EE72995EF42640C550B9013FAD0761353C7086A272C24088BE94769FD16650"
        ),
        &hex!(
            "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
            "FA51868783BF2F966B7FCC0148F709A5D03BB5C9B8899C47AEBB6FB71E91386409"
        ),
    )
}
