use num_bigint::BigUint;
use num_traits::Zero;

use crate::EllipticCurve;

/// Group law in one coordinate system.
///
/// Implementations do not validate their operands; callers check membership first.
pub trait Group: Sized + Clone {
    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn add(&self, other: &Self, curve: &EllipticCurve) -> Self;
    fn double(&self, curve: &EllipticCurve) -> Self;

    /// Double-and-add over the bits of `k`, least significant first.
    ///
    /// `k` is used as given; reduction modulo the curve order is the caller's business.
    fn scalar_mul(&self, k: &BigUint, curve: &EllipticCurve) -> Self {
        if k.is_zero() || self.is_identity() {
            return Self::identity();
        }

        let mut result = Self::identity();
        let mut temp = self.clone();
        let bits = k.bits();

        for i in 0..bits {
            if k.bit(i) {
                result = result.add(&temp, curve);
            }
            // no doubling past the top bit
            if i + 1 < bits {
                temp = temp.double(curve);
            }
        }

        result
    }
}
