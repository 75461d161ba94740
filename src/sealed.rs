//! Sealed (authenticated) container: the AEAD-backed mode.
//!
//! `seal` binds plaintext, an optional caller context, and the master secret
//! into a ciphertext plus a context blob; `unseal` is its inverse and fails
//! closed on any tamper. See spec.md §4.4.

extern crate alloc;
use alloc::vec::Vec;

use crate::aead;
use crate::error::Error;
use crate::kdf;
use crate::wire::{self, SEALED_IV_BYTES, SEALED_TAG_BYTES};

/// Output of [`seal`]: a ciphertext and the context blob needed to reverse it.
#[derive(Debug, Clone)]
pub struct Sealed {
    context: Vec<u8>,
    ciphertext: Vec<u8>,
}

impl Sealed {
    /// The context blob: header, IV, AAD (empty in this profile), and tag.
    pub fn context(&self) -> &[u8] {
        &self.context
    }

    /// The ciphertext, the same length as the original plaintext.
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Split into owned `(context, ciphertext)` parts.
    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>) {
        (self.context, self.ciphertext)
    }

    /// Assemble from previously split `(context, ciphertext)` parts.
    pub fn from_parts(context: Vec<u8>, ciphertext: Vec<u8>) -> Self {
        Self { context, ciphertext }
    }
}

/// Seal `plaintext` under `master`, optionally binding `in_context`.
///
/// `plaintext` must be non-empty. When `in_context` is longer than
/// [`SEALED_IV_BYTES`], its leading bytes are reused verbatim as the
/// IV instead of drawing a fresh random one (spec.md §4.4 step 3).
pub fn seal(master: &[u8], plaintext: &[u8], in_context: Option<&[u8]>) -> Result<Sealed, Error> {
    if plaintext.is_empty() {
        return Err(Error::InvalidParameter);
    }

    let msg_key = kdf::derive(master, kdf::KEY_LABEL, &kdf::length_context(plaintext.len()))?;

    let iv: [u8; SEALED_IV_BYTES] = match in_context {
        Some(ctx) if ctx.len() > SEALED_IV_BYTES => ctx[..SEALED_IV_BYTES].try_into().unwrap(),
        _ => aead::random_iv()?,
    };

    let (ciphertext, tag) = aead::encrypt_aead(&msg_key, &iv, None, plaintext)?;
    let context = wire::encode_sealed_context(&iv, &tag, plaintext.len() as u32);

    Ok(Sealed { context, ciphertext })
}

/// Reverse [`seal`]: recover the plaintext, failing closed on any tamper.
///
/// The message key is re-derived from `sealed.ciphertext().len()`, not from
/// the header's declared `message_length`, so a header edited to shrink the
/// claimed length still fails the tag check rather than silently truncating.
pub fn unseal(master: &[u8], sealed: &Sealed) -> Result<Vec<u8>, Error> {
    let parsed = wire::decode_sealed_context(&sealed.context)?;
    if parsed.header.alg != wire::ALG_AEAD_AES256_GCM {
        return Err(Error::Fail);
    }

    let ciphertext = &sealed.ciphertext;
    if ciphertext.len() < parsed.header.message_length as usize {
        return Err(Error::Fail);
    }

    let msg_key = kdf::derive(master, kdf::KEY_LABEL, &kdf::length_context(ciphertext.len()))?;

    let iv: [u8; SEALED_IV_BYTES] = parsed.iv.try_into().map_err(|_| Error::Fail)?;
    let tag: [u8; SEALED_TAG_BYTES] = parsed.tag.try_into().map_err(|_| Error::Fail)?;
    let aad = if parsed.aad.is_empty() { None } else { Some(parsed.aad) };

    aead::decrypt_aead(&msg_key, &iv, aad, ciphertext, &tag)
}
