use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::Rng;

use crate::EllipticCurve;

/// Helper trait for sampling private scalars.
pub trait RandomScalar {
    /// A uniformly distributed scalar in `[1, n)`.
    ///
    /// That range is empty when `n <= 1`; such curves get `0`.
    fn random_scalar<R: Rng + ?Sized>(&self, rng: &mut R) -> BigUint;
}

impl RandomScalar for EllipticCurve {
    fn random_scalar<R: Rng + ?Sized>(&self, rng: &mut R) -> BigUint {
        let n = self.order();
        if n <= &BigUint::one() {
            return BigUint::zero();
        }

        // 64 surplus bits keep the modulo bias negligible
        let mut bytes = vec![0u8; (n.bits() as usize).div_ceil(8) + 8];
        rng.fill(&mut bytes[..]);

        BigUint::from_bytes_be(&bytes) % (n - 1u32) + 1u32
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::tests::{big, secp192k1_projective, toy_curve};

    #[test]
    fn test_scalar_in_range() {
        let curve = secp192k1_projective();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let k = curve.random_scalar(&mut rng);
            assert!(k >= big(1));
            assert!(&k < curve.order());
        }
    }

    #[test]
    fn test_small_order_covers_range() {
        let curve = toy_curve();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 10];
        for _ in 0..500 {
            let k = curve.random_scalar(&mut rng);
            let index = k.to_u32_digits().first().copied().unwrap_or(0) as usize;
            seen[index] = true;
        }
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|&hit| hit));
    }

    #[test]
    fn test_trivial_order_gives_zero() {
        let g = toy_curve().generator().clone();
        let mut rng = StdRng::seed_from_u64(5);
        for n in [0u32, 1] {
            let curve = EllipticCurve::new(big(13), big(1), big(0), g.clone(), big(n), big(1));
            assert_eq!(curve.random_scalar(&mut rng), big(0));
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let curve = secp192k1_projective();
        let a = curve.random_scalar(&mut StdRng::seed_from_u64(1));
        let b = curve.random_scalar(&mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
