//! Error types for curve arithmetic and curve lookup.

use thiserror::Error;

/// Errors raised by the curve kernel.
///
/// Degenerate denominators (a vertical tangent, or adding a point to its negation) are not
/// errors: those operations return the point at infinity.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CurveError {
    /// A finite point does not satisfy `y^2 = x^3 + a*x + b (mod p)`.
    ///
    /// Raised by `add_points`, `double_point` and `multiply_point` before any arithmetic runs,
    /// and after a projective scalar multiplication whose result fails validation.
    #[error("invalid point: not on the elliptic curve")]
    InvalidPoint,

    /// No curve with this name exists in the registry.
    #[error("unknown curve `{0}`")]
    CurveNotFound(String),
}
