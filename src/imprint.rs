//! Context-imprint container: unauthenticated, single-output stream mode.
//!
//! No header is emitted; the context is mandatory on both sides and feeds
//! directly into the IV derivation, so the same `(master, context)` pair
//! always produces the same keystream. Callers are responsible for never
//! reusing a `(master, context)` pair across two different plaintexts of
//! the same length.

extern crate alloc;
use alloc::vec::Vec;

use crate::error::Error;
use crate::kdf;
use crate::stream;

/// Imprint `plaintext` under `master`, bound to the mandatory `context`.
///
/// `context` must be non-empty.
pub fn imprint(master: &[u8], plaintext: &[u8], context: &[u8]) -> Result<Vec<u8>, Error> {
    if context.is_empty() {
        return Err(Error::InvalidParameter);
    }

    let msg_key = kdf::derive(master, kdf::KEY_LABEL, &kdf::length_context(plaintext.len()))?;
    let iv = kdf::derive_iv(&msg_key, context)?;

    stream::encrypt_stream(&msg_key, &iv, plaintext)
}

/// Reverse [`imprint`]. There is no authentication tag: a tampered
/// ciphertext, wrong master, or wrong context all decrypt to garbage
/// rather than failing.
pub fn unimprint(master: &[u8], ciphertext: &[u8], context: &[u8]) -> Result<Vec<u8>, Error> {
    if context.is_empty() {
        return Err(Error::InvalidParameter);
    }

    let msg_key = kdf::derive(master, kdf::KEY_LABEL, &kdf::length_context(ciphertext.len()))?;
    let iv = kdf::derive_iv(&msg_key, context)?;

    stream::decrypt_stream(&msg_key, &iv, ciphertext)
}
