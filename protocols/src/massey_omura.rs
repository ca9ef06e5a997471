//! Massey-Omura three-pass message exchange.
//!
//! The sender locks a message point with its key, the receiver adds its own lock, the sender
//! removes its lock with `e^-1 mod n`, and the receiver removes the last one:
//!
//! ```text
//! M -> e_a*M -> e_b*e_a*M -> e_b*M -> M
//! ```
//!
//! Keys must be coprime with the curve order `n`.

use ecurve::{CachedCurve, CurveOps, Point, RandomScalar, mod_inverse};
use num_bigint::BigUint;
use rand::Rng;

use crate::constants::DEFAULT_CURVE;
use crate::errors::ProtocolError;

#[derive(Clone, Debug)]
pub struct MasseyOmura<C = CachedCurve> {
    curve: C,
    private_key: BigUint,
    public_key: Point,
}

impl MasseyOmura<CachedCurve> {
    pub fn from_curve_name(private_key: BigUint, name: &str) -> Result<Self, ProtocolError> {
        Self::new(crate::cached_curve(name)?, private_key)
    }

    pub fn with_default_curve(private_key: BigUint) -> Result<Self, ProtocolError> {
        Self::from_curve_name(private_key, DEFAULT_CURVE)
    }
}

impl<C: CurveOps> MasseyOmura<C> {
    pub fn new(curve: C, private_key: BigUint) -> Result<Self, ProtocolError> {
        let public_key = curve.multiply_point(&private_key, curve.curve().generator())?;
        Ok(MasseyOmura {
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

    #[inline]
    pub fn public_key(&self) -> &Point {
        &self.public_key
    }

    /// Sender's first pass: `e*M`.
    pub fn first_encryption_step(&self, message: &Point) -> Result<Point, ProtocolError> {
        Ok(self.curve.multiply_point(&self.private_key, message)?)
    }

    /// Receiver's pass over the sender's ciphertext: `e*C`.
    pub fn second_encryption_step(&self, received: &Point) -> Result<Point, ProtocolError> {
        self.first_encryption_step(received)
    }

    /// Removes this party's lock: `(e^-1 mod n)*C`.
    pub fn partial_decryption_step(&self, encrypted: &Point) -> Result<Point, ProtocolError> {
        let inverse_key = mod_inverse(&self.private_key, self.curve.curve().order())
            .ok_or(ProtocolError::NotInvertible)?;
        Ok(self.curve.multiply_point(&inverse_key, encrypted)?)
    }
}
