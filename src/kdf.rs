//! KDF adapter.
//!
//! Wraps a single-output derivation over a master secret, a fixed label, and
//! a caller-supplied context buffer:
//!
//!   key = HKDF-SHA256(ikm = master, salt = None, info = label || context, len = 32)
//!
//! `label` is always one of the two fixed strings below; `context` is
//! mode-specific (message-length bytes for the message key, caller context
//! for the context-imprint IV — see `sealed.rs`/`token.rs`/`imprint.rs`).

extern crate alloc;
use alloc::vec::Vec;

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::error::Error;

/// KDF label for deriving the per-message symmetric key.
pub const KEY_LABEL: &[u8] = b"Themis secure cell message key";

/// KDF label for deriving the context-imprint IV.
pub const IV_LABEL: &[u8] = b"Themis secure cell message iv";

/// Derive an `N`-byte secret from `ikm`, `label`, and `ctx`.
///
/// Fails with [`Error::InvalidParameter`] if `ikm` or `ctx` is empty.
fn expand<const N: usize>(ikm: &[u8], label: &[u8], ctx: &[u8]) -> Result<Zeroizing<[u8; N]>, Error> {
    if ikm.is_empty() || ctx.is_empty() {
        return Err(Error::InvalidParameter);
    }

    let mut info = Vec::with_capacity(label.len() + ctx.len());
    info.extend_from_slice(label);
    info.extend_from_slice(ctx);

    let hk = Hkdf::<Sha256>::new(None, ikm);
    let mut out = Zeroizing::new([0u8; N]);
    hk.expand(&info, &mut *out).map_err(|_| Error::Fail)?;
    Ok(out)
}

/// Derive a 32-byte message key from `master`, `label`, and `ctx`.
///
/// Fails with [`Error::InvalidParameter`] if `master` or `ctx` is empty.
pub fn derive(master: &[u8], label: &[u8], ctx: &[u8]) -> Result<Zeroizing<[u8; 32]>, Error> {
    expand::<32>(master, label, ctx)
}

/// Derive the 16-byte context-imprint IV from a message key and a caller
/// context, under the fixed [`IV_LABEL`] (spec.md §4.6 step 2).
pub fn derive_iv(msg_key: &[u8; 32], ctx: &[u8]) -> Result<Zeroizing<[u8; 16]>, Error> {
    expand::<16>(msg_key, IV_LABEL, ctx)
}

/// Encode a message length as the 8-byte little-endian KDF context the
/// message-key derivation uses on both encrypt and decrypt.
///
/// Fixes the §9 open question (original_source feeds in the raw in-memory
/// bytes of a platform `size_t`, which is not portable between 32-bit and
/// 64-bit hosts); see DESIGN.md.
pub fn length_context(len: usize) -> [u8; 8] {
    (len as u64).to_le_bytes()
}
