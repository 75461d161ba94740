//! Unified error type for cellbox.

use core::fmt;

/// Uniform failure signal returned by every public operation.
///
/// `Fail` deliberately does not distinguish an AEAD tag mismatch from an
/// RNG or KDF failure: callers cannot use the error to build a
/// tamper-vs-broken oracle. See `sealed.rs`, `token.rs`, and `imprint.rs`
/// for where each variant is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A required buffer was empty, a mandatory context was omitted, or a
    /// header declared internally inconsistent sizes.
    InvalidParameter,
    /// Any primitive failure: AEAD tag mismatch, RNG failure, KDF failure,
    /// or a malformed/truncated container.
    Fail,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter => write!(f, "invalid parameter"),
            Error::Fail => write!(f, "decryption failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
