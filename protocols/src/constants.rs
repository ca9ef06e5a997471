//! Default parameters shared by the protocols.

/// Curve used by the key-exchange and signature protocols when built from a name.
pub const DEFAULT_CURVE: &str = "secp192k1";

/// Curve used by the Koblitz encoder by default. The large field leaves room for long
/// messages in a single point.
pub const KOBLITZ_DEFAULT_CURVE: &str = "secp521r1";

/// Spacing `d` between consecutive message values on the x-axis.
///
/// Each message `m` owns the candidates `x = d*m + j` for `1 <= j < d - 1`.
pub const KOBLITZ_STRIDE: u32 = 100;

/// Alphabet size for single-byte characters.
pub const DEFAULT_ALPHABET_SIZE: u32 = 1 << 8;
