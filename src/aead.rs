//! Plain AEAD driver: AES-256-GCM.
//!
//! Drives the primitive AEAD through the conceptual
//! create -> optional-aad -> update -> final -> destroy sequence. The
//! RustCrypto `aead` crate collapses that sequence into a single
//! `encrypt`/`decrypt` call; the driver still owns the AAD-emission
//! condition and the ciphertext/tag split the containers depend on.

extern crate alloc;
use alloc::vec::Vec;

use aes_gcm::{
    aead::{Aead, KeyInit, Payload},
    Aes256Gcm, Nonce,
};
use getrandom::getrandom;

use crate::error::Error;

/// AEAD IV length in bytes.
pub const IV_BYTES: usize = 12;
/// AEAD authentication tag length in bytes.
pub const TAG_BYTES: usize = 16;

/// Draw a random 12-byte IV. Encrypt-only; never used on the decrypt path.
pub fn random_iv() -> Result<[u8; IV_BYTES], Error> {
    let mut iv = [0u8; IV_BYTES];
    getrandom(&mut iv).map_err(|_| Error::Fail)?;
    Ok(iv)
}

/// Seal `plaintext` under `key`/`iv`, with optional AAD.
///
/// AAD is submitted if the caller passed `Some(..)` at all, regardless of
/// its length — the containers in this crate always pass `None`, but the
/// condition is preserved for forward compatibility with profiles that
/// set AAD.
///
/// Returns `(ciphertext, tag)` with `ciphertext.len() == plaintext.len()`
/// and `tag.len() == TAG_BYTES`, matching the container's header layout
/// where the tag is stored separately from the ciphertext.
pub fn encrypt_aead(
    key: &[u8; 32],
    iv: &[u8; IV_BYTES],
    aad: Option<&[u8]>,
    plaintext: &[u8],
) -> Result<(Vec<u8>, [u8; TAG_BYTES]), Error> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| Error::Fail)?;
    let nonce = Nonce::from_slice(iv);
    let payload = Payload {
        msg: plaintext,
        aad: aad.unwrap_or(&[]),
    };

    let mut sealed = cipher.encrypt(nonce, payload).map_err(|_| Error::Fail)?;
    if sealed.len() < TAG_BYTES {
        return Err(Error::Fail);
    }
    let tag_start = sealed.len() - TAG_BYTES;
    let mut tag = [0u8; TAG_BYTES];
    tag.copy_from_slice(&sealed[tag_start..]);
    sealed.truncate(tag_start);
    Ok((sealed, tag))
}

/// Open a ciphertext/tag pair under `key`/`iv`, with optional AAD.
///
/// Any AEAD failure, including a tag mismatch, is reported as
/// [`Error::Fail`] and is not distinguished from other primitive failures.
pub fn decrypt_aead(
    key: &[u8; 32],
    iv: &[u8; IV_BYTES],
    aad: Option<&[u8]>,
    ciphertext: &[u8],
    tag: &[u8; TAG_BYTES],
) -> Result<Vec<u8>, Error> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| Error::Fail)?;
    let nonce = Nonce::from_slice(iv);

    let mut sealed = Vec::with_capacity(ciphertext.len() + TAG_BYTES);
    sealed.extend_from_slice(ciphertext);
    sealed.extend_from_slice(tag);

    let payload = Payload {
        msg: &sealed,
        aad: aad.unwrap_or(&[]),
    };
    cipher.decrypt(nonce, payload).map_err(|_| Error::Fail)
}
