//! Arithmetic modulo a fixed prime.
//!
//! Every operation returns a canonical residue in `[0, p)`, whatever the size of its inputs.

use num_bigint::{BigInt, BigUint};
use num_integer::{ExtendedGcd, Integer};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// Prime field `GF(p)` described by its modulus.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    /// Create a field for the given modulus. The modulus is trusted to be prime.
    pub fn new(modulus: BigUint) -> Self {
        PrimeField { modulus }
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Canonical residue of `value`.
    #[inline]
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    #[inline]
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.reduce(a);
        let b = self.reduce(b);
        if a >= b {
            a - b
        } else {
            &self.modulus - b + a
        }
    }

    pub fn neg(&self, a: &BigUint) -> BigUint {
        let a = self.reduce(a);
        if a.is_zero() {
            a
        } else {
            &self.modulus - a
        }
    }

    #[inline]
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    #[inline]
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    #[inline]
    pub fn double(&self, a: &BigUint) -> BigUint {
        self.mul_small(a, 2)
    }

    /// Multiply by a small constant such as the 3, 4 or 8 of the doubling formulas.
    #[inline]
    pub fn mul_small(&self, a: &BigUint, k: u32) -> BigUint {
        (a * k) % &self.modulus
    }

    #[inline]
    pub fn pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.modpow(exponent, &self.modulus)
    }

    /// Multiplicative inverse, or `None` when `a ≡ 0 (mod p)`.
    pub fn inverse(&self, a: &BigUint) -> Option<BigUint> {
        mod_inverse(a, &self.modulus)
    }
}

/// Inverse of `value` modulo an arbitrary `modulus` (not necessarily prime).
///
/// Returns `None` when `gcd(value, modulus) != 1` or the modulus is zero.
pub fn mod_inverse(value: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    if modulus.is_zero() {
        return None;
    }

    let m = BigInt::from(modulus.clone());
    let v = BigInt::from(value % modulus);
    let ExtendedGcd { gcd, x, .. } = v.extended_gcd(&m);
    if !gcd.is_one() {
        return None;
    }

    x.mod_floor(&m).to_biguint()
}
