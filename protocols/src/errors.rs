//! Error types for the protocol layer.

use ecurve::CurveError;
use thiserror::Error;

/// Errors that can occur while running a protocol.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// The curve kernel rejected an operand, or the curve name is unknown.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// A signature component lies outside `[1, n - 1]`.
    #[error("r or s are not in the valid range [1, curve order - 1]")]
    SignatureOutOfRange,

    /// The private key shares a factor with the curve order.
    #[error("private key is not invertible modulo the curve order")]
    NotInvertible,

    /// A message character has a code point at or above the alphabet size.
    #[error("character {0:?} is outside the alphabet")]
    UnsupportedCharacter(char),

    /// The message value does not fit below the field modulus.
    #[error("message is too long to encode on this curve")]
    MessageTooLong,

    /// None of the candidate x-coordinates produced a curve point.
    #[error("no curve point found for the message")]
    EncodingFailed,

    /// The point and auxiliary value do not decode to a message.
    #[error("point does not encode a message")]
    InvalidEncoding,

    /// Byte encoding or decoding failed.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<bincode::Error> for ProtocolError {
    fn from(err: bincode::Error) -> Self {
        ProtocolError::Serialization(err.to_string())
    }
}
