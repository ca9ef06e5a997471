//! Protocols built on the `ecurve` arithmetic kernel.
//!
//! This library implements:
//! - ECDSA signatures ([`DigitalSignature`])
//! - Diffie-Hellman key agreement ([`DiffieHellman`])
//! - Massey-Omura three-pass exchange ([`MasseyOmura`])
//! - Koblitz message-to-point encoding ([`Koblitz`])
//!
//! Every protocol is generic over [`CurveOps`], so it runs on a plain [`ecurve::EllipticCurve`]
//! or on a [`CachedCurve`]. The `from_curve_name` constructors use a named curve backed by the
//! process-wide result cache, whose size comes from `LRU_CACHE_MAXSIZE`.
//!
//! # Example
//!
//! ```
//! use ecprotocols::DiffieHellman;
//! use num_bigint::BigUint;
//!
//! let alice = DiffieHellman::with_default_curve(BigUint::from(12345u32)).unwrap();
//! let bob = DiffieHellman::with_default_curve(BigUint::from(67890u32)).unwrap();
//!
//! let secret_alice = alice.compute_shared_secret(bob.public_key()).unwrap();
//! let secret_bob = bob.compute_shared_secret(alice.public_key()).unwrap();
//! assert_eq!(secret_alice, secret_bob);
//! ```
//!
//! # Security Considerations
//!
//! - Arithmetic is not constant time
//! - Use a cryptographically secure random number generator for keys and nonces

mod constants;
mod diffie_hellman;
mod ecdsa;
mod errors;
mod koblitz;
mod massey_omura;


use ecurve::{CachedCurve, curves};

pub use constants::{DEFAULT_ALPHABET_SIZE, DEFAULT_CURVE, KOBLITZ_DEFAULT_CURVE, KOBLITZ_STRIDE};
pub use diffie_hellman::DiffieHellman;
pub use ecdsa::{DigitalSignature, Signature};
pub use ecurve::CurveOps;
pub use errors::ProtocolError;
pub use koblitz::{EncodedMessage, Koblitz};
pub use massey_omura::MasseyOmura;

/// The named curve (projective mode) wrapped in the process-wide result cache.
pub fn cached_curve(name: &str) -> Result<CachedCurve, ProtocolError> {
    Ok(CachedCurve::with_global_cache(curves::get(name)?))
}
