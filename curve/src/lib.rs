//! Elliptic curve arithmetic over prime fields.
//!
//! This crate provides short Weierstrass curves `y^2 = x^3 + a*x + b` over `GF(p)` with
//! affine and Jacobian point representations, validated group operations, a registry of
//! named SEC 2 curves, and an optional LRU cache for repeated operations. Curves are
//! immutable values; the coordinate system used internally is part of the curve.

mod affine;
mod cache;
mod curve;
pub mod curves;
mod errors;
mod field;
mod group;
mod jacobian;
mod ops;
mod random;
mod settings;

#[cfg(test)]
mod tests;

pub use affine::Point;
pub use cache::{CacheStats, CachedCurve, LruCache, ResultCache};
pub use curve::EllipticCurve;
pub use errors::CurveError;
pub use field::{mod_inverse, PrimeField};
pub use group::Group;
pub use jacobian::JacobianPoint;
pub use num_bigint::BigUint;
pub use ops::CurveOps;
pub use random::RandomScalar;
pub use settings::{Settings, CACHE_CAPACITY_ENV, DEFAULT_CACHE_CAPACITY};
