//! ECDSA signing and verification.

use ecurve::{CachedCurve, CurveOps, Point, RandomScalar, mod_inverse};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CURVE;
use crate::errors::ProtocolError;

/// An ECDSA signature `(r, s)`, both components in `[1, n - 1]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    /// x-coordinate of the nonce point `k*G`, reduced modulo `n`
    pub r: BigUint,
    /// `(hash + r*d) / k mod n`
    pub s: BigUint,
}

impl Signature {
    /// Serializes the signature with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserializes a signature produced by [`Signature::to_bytes`].
    ///
    /// The components are not range-checked here; [`DigitalSignature::verify_signature`] does that.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtocolError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// An ECDSA key pair over a curve.
///
/// The private key is a scalar `d`; the public key is `Q = d*G`.
///
/// # Example
///
/// ```
/// use ecprotocols::DigitalSignature;
/// use num_bigint::BigUint;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let signer = DigitalSignature::with_default_curve(BigUint::from(123456789u32)).unwrap();
/// let hash = BigUint::from(0xC0FFEEu32);
///
/// let signature = signer.generate_signature(&mut rng, &hash).unwrap();
/// let valid = signer
///     .verify_signature(signer.public_key(), &hash, &signature)
///     .unwrap();
/// assert!(valid);
/// ```
#[derive(Clone, Debug)]
pub struct DigitalSignature<C = CachedCurve> {
    curve: C,
    private_key: BigUint,
    public_key: Point,
}

impl DigitalSignature<CachedCurve> {
    /// Key pair on a named curve, using the process-wide result cache.
    pub fn from_curve_name(private_key: BigUint, name: &str) -> Result<Self, ProtocolError> {
        Self::new(crate::cached_curve(name)?, private_key)
    }

    /// Key pair on `secp192k1`.
    pub fn with_default_curve(private_key: BigUint) -> Result<Self, ProtocolError> {
        Self::from_curve_name(private_key, DEFAULT_CURVE)
    }
}

impl<C: CurveOps> DigitalSignature<C> {
    /// Derives the public key `d*G` from `private_key`.
    pub fn new(curve: C, private_key: BigUint) -> Result<Self, ProtocolError> {
        let public_key = curve.multiply_point(&private_key, curve.curve().generator())?;
        Ok(DigitalSignature {
            curve,
            private_key,
            public_key,
        })
    }

    /// Key pair with a private key drawn from `[1, n)`.
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

    /// Signs `message_hash`.
    ///
    /// A fresh nonce `k` is drawn from `rng` until both `r = (k*G).x mod n` and
    /// `s = (hash + r*d) * k^-1 mod n` are non-zero.
    pub fn generate_signature<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        message_hash: &BigUint,
    ) -> Result<Signature, ProtocolError> {
        let curve = self.curve.curve();
        let n = curve.order();

        loop {
            let k = curve.random_scalar(rng);
            let nonce_point = self.curve.multiply_point(&k, curve.generator())?;
            let Some((x, _)) = nonce_point.coordinates() else {
                continue;
            };

            let r = x % n;
            if r.is_zero() {
                continue;
            }
            let Some(k_inv) = mod_inverse(&k, n) else {
                continue;
            };

            let s = (message_hash + &r * &self.private_key) * k_inv % n;
            if s.is_zero() {
                continue;
            }

            return Ok(Signature { r, s });
        }
    }

    /// Checks `signature` over `message_hash` against `public_key`.
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not match, including when
    /// `u1*G + u2*Q` is the point at infinity.
    ///
    /// # Errors
    ///
    /// - [`ProtocolError::SignatureOutOfRange`] if `r` or `s` is outside `[1, n - 1]`
    /// - [`ProtocolError::Curve`] if `public_key` is not on the curve
    pub fn verify_signature(
        &self,
        public_key: &Point,
        message_hash: &BigUint,
        signature: &Signature,
    ) -> Result<bool, ProtocolError> {
        let curve = self.curve.curve();
        let n = curve.order();
        let Signature { r, s } = signature;

        if r.is_zero() || r >= n || s.is_zero() || s >= n {
            return Err(ProtocolError::SignatureOutOfRange);
        }

        let w = mod_inverse(s, n).ok_or(ProtocolError::NotInvertible)?;
        let u1 = message_hash * &w % n;
        let u2 = r * &w % n;

        let point = self.curve.add_points(
            &self.curve.multiply_point(&u1, curve.generator())?,
            &self.curve.multiply_point(&u2, public_key)?,
        )?;

        Ok(match point.coordinates() {
            Some((x, _)) => &(x % n) == r,
            None => false,
        })
    }
}
