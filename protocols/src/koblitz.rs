//! Koblitz encoding of text messages as curve points.
//!
//! A message is read as an integer `m` in base `alphabet_size` (first character least
//! significant). The encoder scans `x = d*m + j` for `j = 1, 2, ...` until `x^3 + a*x + b` is a
//! quadratic residue whose square root yields a curve point, and returns the point with `j`.
//! Decoding recovers `m = (x - j) / d`.
//!
//! Square roots are taken as `s^((p+1)/4)`, which is only correct for `p = 3 (mod 4)`; on other
//! fields encoding reports [`ProtocolError::EncodingFailed`].

use ecurve::{CachedCurve, CurveOps, Point};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::constants::{KOBLITZ_DEFAULT_CURVE, KOBLITZ_STRIDE};
use crate::errors::ProtocolError;

/// A message point together with its auxiliary value `j`.
pub type EncodedMessage = (Point, u32);

#[derive(Clone, Debug)]
pub struct Koblitz<C = CachedCurve> {
    curve: C,
}

impl Koblitz<CachedCurve> {
    pub fn from_curve_name(name: &str) -> Result<Self, ProtocolError> {
        Ok(Self::new(crate::cached_curve(name)?))
    }

    /// Encoder on `secp521r1`.
    pub fn with_default_curve() -> Result<Self, ProtocolError> {
        Self::from_curve_name(KOBLITZ_DEFAULT_CURVE)
    }
}

impl<C: CurveOps> Koblitz<C> {
    pub fn new(curve: C) -> Self {
        Koblitz { curve }
    }

    #[inline]
    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// Encodes `message` as a curve point.
    ///
    /// # Errors
    ///
    /// - [`ProtocolError::UnsupportedCharacter`] for a character whose code is not below
    ///   `alphabet_size`
    /// - [`ProtocolError::MessageTooLong`] if `d*m + d` does not fit below `p`
    /// - [`ProtocolError::EncodingFailed`] if no candidate `j` gives a curve point
    pub fn encode(&self, message: &str, alphabet_size: u32) -> Result<EncodedMessage, ProtocolError> {
        let m = message_value(message, alphabet_size)?;

        let curve = self.curve.curve();
        let field = curve.field();
        let p = field.modulus();
        let d = BigUint::from(KOBLITZ_STRIDE);

        let base = &d * &m;
        if &(&base + &d) >= p {
            return Err(ProtocolError::MessageTooLong);
        }

        let euler = (p + 1u32) >> 1;
        let root = (p + 1u32) >> 2;

        for j in 1..KOBLITZ_STRIDE - 1 {
            let x = &base + j;
            let rhs = field.add(
                &field.add(&field.mul(&field.square(&x), &x), &field.mul(curve.a(), &x)),
                curve.b(),
            );

            // Euler's criterion: s^((p+1)/2) = s exactly when s is a square (or zero)
            if field.pow(&rhs, &euler) != rhs {
                continue;
            }

            let point = Point::new(x, field.pow(&rhs, &root));
            if self.curve.is_point_on_curve(&point) {
                log::debug!("koblitz: encoded {} characters with j = {j}", message.chars().count());
                return Ok((point, j));
            }
        }

        Err(ProtocolError::EncodingFailed)
    }

    /// Recovers the message from a point produced by [`Koblitz::encode`].
    ///
    /// Trailing characters with code `0` are not recoverable.
    pub fn decode(&self, point: &Point, j: u32, alphabet_size: u32) -> Result<String, ProtocolError> {
        let Some((x, _)) = point.coordinates() else {
            return Err(ProtocolError::InvalidEncoding);
        };
        let j = BigUint::from(j);
        if x < &j {
            return Err(ProtocolError::InvalidEncoding);
        }

        let mut m = (x - j) / KOBLITZ_STRIDE;
        if alphabet_size < 2 {
            return if m.is_zero() {
                Ok(String::new())
            } else {
                Err(ProtocolError::InvalidEncoding)
            };
        }

        let base = BigUint::from(alphabet_size);
        let mut message = String::new();
        while !m.is_zero() {
            let ch = (&m % &base)
                .to_u32()
                .and_then(char::from_u32)
                .ok_or(ProtocolError::InvalidEncoding)?;
            message.push(ch);
            m /= &base;
        }

        Ok(message)
    }

    /// Largest number of characters a single point can carry for `alphabet_size`.
    pub fn max_chunk_len(&self, alphabet_size: u32) -> usize {
        let p = self.curve.curve().p();
        let alphabet = BigUint::from(alphabet_size.max(2));

        // messages of length L need d * alphabet^L < p
        let mut bound = BigUint::from(KOBLITZ_STRIDE) * &alphabet;
        let mut len = 0;
        while &bound < p {
            len += 1;
            bound *= &alphabet;
        }
        len
    }

    /// Concatenates the decoded chunks of [`Koblitz::encode_chunks`].
    pub fn decode_chunks(
        &self,
        chunks: &[EncodedMessage],
        alphabet_size: u32,
    ) -> Result<String, ProtocolError> {
        chunks
            .iter()
            .map(|(point, j)| self.decode(point, *j, alphabet_size))
            .collect()
    }
}

impl<C: CurveOps + Sync> Koblitz<C> {
    /// Encodes a message of any length as a sequence of points, one per chunk of at most
    /// [`Koblitz::max_chunk_len`] characters, in message order.
    ///
    /// Chunk boundaries never fall right after a `'\0'`, since a trailing zero digit does not
    /// survive [`Koblitz::decode`]. A message ending in `'\0'`, or holding a run of `'\0'` that
    /// cannot be split that way, fails with [`ProtocolError::UnsupportedCharacter`].
    pub fn encode_chunks(
        &self,
        message: &str,
        alphabet_size: u32,
    ) -> Result<Vec<EncodedMessage>, ProtocolError> {
        check_alphabet(message, alphabet_size)?;

        let chunk_len = self.max_chunk_len(alphabet_size);
        if chunk_len == 0 {
            return Err(ProtocolError::MessageTooLong);
        }

        let chars: Vec<char> = message.chars().collect();
        let chunks = split_chunks(&chars, chunk_len)?;

        #[cfg(feature = "parallel")]
        let iter = chunks.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = chunks.iter();

        iter.map(|chunk| self.encode(chunk, alphabet_size)).collect()
    }
}

/// Splits `chars` into chunks of at most `chunk_len` characters, none ending in `'\0'`.
fn split_chunks(chars: &[char], chunk_len: usize) -> Result<Vec<String>, ProtocolError> {
    let mut chunks = Vec::with_capacity(chars.len().div_ceil(chunk_len));
    let mut start = 0;
    while start < chars.len() {
        let mut end = (start + chunk_len).min(chars.len());
        while end > start && chars[end - 1] == '\0' {
            end -= 1;
        }
        if end == start {
            return Err(ProtocolError::UnsupportedCharacter('\0'));
        }
        chunks.push(chars[start..end].iter().collect());
        start = end;
    }
    Ok(chunks)
}

fn check_alphabet(message: &str, alphabet_size: u32) -> Result<(), ProtocolError> {
    match message.chars().find(|&ch| ch as u32 >= alphabet_size) {
        Some(ch) => Err(ProtocolError::UnsupportedCharacter(ch)),
        None => Ok(()),
    }
}

/// `sum(code(c_i) * alphabet_size^i)`.
fn message_value(message: &str, alphabet_size: u32) -> Result<BigUint, ProtocolError> {
    check_alphabet(message, alphabet_size)?;

    let base = BigUint::from(alphabet_size);
    Ok(message
        .chars()
        .rev()
        .fold(BigUint::zero(), |acc, ch| acc * &base + ch as u32))
}
