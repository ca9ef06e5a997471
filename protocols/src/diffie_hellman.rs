//! Elliptic-curve Diffie-Hellman key agreement.

use ecurve::{CachedCurve, CurveOps, Point, RandomScalar};
use num_bigint::BigUint;
use rand::Rng;

use crate::constants::DEFAULT_CURVE;
use crate::errors::ProtocolError;

/// One party of a Diffie-Hellman exchange.
///
/// Both parties publish `d*G`; each multiplies the other's public key by its own private key
/// and arrives at the same point `d_a*d_b*G`.
#[derive(Clone, Debug)]
pub struct DiffieHellman<C = CachedCurve> {
    curve: C,
    private_key: BigUint,
    public_key: Point,
}

impl DiffieHellman<CachedCurve> {
    pub fn from_curve_name(private_key: BigUint, name: &str) -> Result<Self, ProtocolError> {
        Self::new(crate::cached_curve(name)?, private_key)
    }

    pub fn with_default_curve(private_key: BigUint) -> Result<Self, ProtocolError> {
        Self::from_curve_name(private_key, DEFAULT_CURVE)
    }
}

impl<C: CurveOps> DiffieHellman<C> {
    pub fn new(curve: C, private_key: BigUint) -> Result<Self, ProtocolError> {
        let public_key = curve.multiply_point(&private_key, curve.curve().generator())?;
        Ok(DiffieHellman {
            curve,
            private_key,
            public_key,
        })
    }

    pub fn random<R: Rng + ?Sized>(curve: C, rng: &mut R) -> Result<Self, ProtocolError> {
        let private_key = curve.curve().random_scalar(rng);
        Self::new(curve, private_key)
    }

    #[inline]
    pub fn curve(&self) -> &C {
        &self.curve
    }

    #[inline]
    pub fn private_key(&self) -> &BigUint {
        &self.private_key
    }

    /// `d*G`, safe to publish.
    #[inline]
    pub fn public_key(&self) -> &Point {
        &self.public_key
    }

    /// `d*Q` for the other party's public key `Q`. Fails if `Q` is not on the curve.
    pub fn compute_shared_secret(&self, other_public_key: &Point) -> Result<Point, ProtocolError> {
        Ok(self
            .curve
            .multiply_point(&self.private_key, other_public_key)?)
    }
}
