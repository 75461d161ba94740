//! # cellbox
//!
//! Symmetric secure-container primitives over a caller-supplied master
//! secret: a sealed (authenticated) mode, a token-protect mode, and a
//! context-imprint mode, each trading authentication for a different
//! output shape.
//!
//! ## Quick Start
//!
//! ```rust
//! use cellbox::SecureCell;
//!
//! let cell = SecureCell::new();
//! let sealed = cell.seal(b"master secret", b"hello", None).unwrap();
//! let plaintext = cell.unseal(b"master secret", &sealed).unwrap();
//! assert_eq!(plaintext, b"hello");
//! ```
//!
//! ## Modes
//!
//! - **Sealed** ([`SecureCell::seal`]/[`SecureCell::unseal`]): AEAD over
//!   AES-256-GCM. Authenticated; detects any tamper.
//! - **Token-protect** ([`SecureCell::protect`]/[`SecureCell::unprotect`]):
//!   AES-256-CTR with the context kept apart from the ciphertext.
//!   Unauthenticated.
//! - **Context-imprint** ([`SecureCell::imprint`]/[`SecureCell::unimprint`]):
//!   AES-256-CTR with a mandatory context folded into the IV and no header
//!   at all. Unauthenticated; deterministic for a fixed `(master, context,
//!   length)`.
//!
//! ## Security Properties
//!
//! - **Uniform errors**: every public operation fails with the same
//!   two-variant [`Error`] type; callers cannot distinguish a tamper from
//!   an internal primitive failure.
//! - **Fail closed**: the sealed mode's tag check runs over the full
//!   ciphertext before any plaintext is returned.
//!
//! ## What's NOT Provided
//!
//! - Key management or key derivation from passwords
//! - Asymmetric/public-key sealing
//! - Streaming encryption of unbounded input
//! - FIPS certification

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/cellbox/0.1.0")]

extern crate alloc;
use alloc::vec::Vec;

// ---------------------------------------------------------------------------
// Internal modules (not part of public API)
// ---------------------------------------------------------------------------

mod aead;
mod error;
mod imprint;
mod kdf;
mod sealed;
mod stream;
mod token;

// Exposed for fuzzing and for callers who need to inspect a context blob
// without a master secret; not a stability guarantee.
#[doc(hidden)]
pub mod wire;

pub use error::Error;
pub use sealed::Sealed;
pub use token::Token;
pub use wire::{SEALED_CONTEXT_BYTES, TOKEN_CONTEXT_BYTES};

/// Entry point for all three container modes.
///
/// `SecureCell` holds no state of its own; the master secret is supplied to
/// each call. It exists so the three modes read as methods of one type
/// rather than six free functions.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecureCell;

impl SecureCell {
    /// Construct a new handle. `SecureCell` is zero-sized; this never fails.
    pub fn new() -> Self {
        Self
    }

    /// Seal `plaintext` under `master` in authenticated mode.
    ///
    /// `plaintext` must be non-empty. `in_context`, if supplied and longer
    /// than 12 bytes, is reused as the IV; otherwise a random IV is
    /// drawn.
    pub fn seal(&self, master: &[u8], plaintext: &[u8], in_context: Option<&[u8]>) -> Result<Sealed, Error> {
        sealed::seal(master, plaintext, in_context)
    }

    /// Reverse [`SecureCell::seal`].
    pub fn unseal(&self, master: &[u8], sealed: &Sealed) -> Result<Vec<u8>, Error> {
        sealed::unseal(master, sealed)
    }

    /// Protect `plaintext` under `master` in token-protect mode.
    ///
    /// Unauthenticated: a tampered ciphertext decrypts to garbage instead
    /// of failing. Use [`SecureCell::seal`] when tamper detection matters.
    pub fn protect(&self, master: &[u8], plaintext: &[u8], in_context: Option<&[u8]>) -> Result<Token, Error> {
        token::protect(master, plaintext, in_context)
    }

    /// Reverse [`SecureCell::protect`].
    pub fn unprotect(&self, master: &[u8], token: &Token) -> Result<Vec<u8>, Error> {
        token::unprotect(master, token)
    }

    /// Imprint `plaintext` under `master`, bound to the mandatory `context`.
    ///
    /// Unauthenticated and deterministic: the same `(master, context,
    /// plaintext.len())` always produces the same ciphertext.
    pub fn imprint(&self, master: &[u8], plaintext: &[u8], context: &[u8]) -> Result<Vec<u8>, Error> {
        imprint::imprint(master, plaintext, context)
    }

    /// Reverse [`SecureCell::imprint`].
    pub fn unimprint(&self, master: &[u8], ciphertext: &[u8], context: &[u8]) -> Result<Vec<u8>, Error> {
        imprint::unimprint(master, ciphertext, context)
    }
}
