//! Token-protect container: unauthenticated, split-output stream mode.
//!
//! `protect`/`unprotect` carry no authentication tag; tamper detection is
//! the caller's responsibility (spec.md §4.5). This implementation writes
//! and checks a consistent 16-byte IV length throughout, fixing the two
//! bugs spec.md §9 documents in original_source (the header's `iv_length`
//! field disagreeing with the actual IV size, and the AEAD algorithm tag
//! being stamped on a stream-cipher ciphertext).

extern crate alloc;
use alloc::vec::Vec;

use crate::error::Error;
use crate::kdf;
use crate::stream;
use crate::wire::{self, TOKEN_IV_BYTES};

/// Output of [`protect`]: a ciphertext and the context blob needed to reverse it.
#[derive(Debug, Clone)]
pub struct Token {
    context: Vec<u8>,
    ciphertext: Vec<u8>,
}

impl Token {
    /// The context blob: header plus IV.
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

/// Protect `plaintext` under `master`, optionally binding `in_context`.
///
/// When `in_context` is longer than [`TOKEN_IV_BYTES`], its leading bytes
/// are reused verbatim as the IV instead of drawing a fresh random one.
pub fn protect(master: &[u8], plaintext: &[u8], in_context: Option<&[u8]>) -> Result<Token, Error> {
    let msg_key = kdf::derive(master, kdf::KEY_LABEL, &kdf::length_context(plaintext.len()))?;

    let iv: [u8; TOKEN_IV_BYTES] = match in_context {
        Some(ctx) if ctx.len() > TOKEN_IV_BYTES => ctx[..TOKEN_IV_BYTES].try_into().unwrap(),
        _ => stream::random_iv()?,
    };

    let ciphertext = stream::encrypt_stream(&msg_key, &iv, plaintext)?;
    let context = wire::encode_token_context(&iv, plaintext.len() as u32);

    Ok(Token { context, ciphertext })
}

/// Reverse [`protect`]. There is no authentication tag: a tampered
/// ciphertext decrypts to garbage rather than failing.
pub fn unprotect(master: &[u8], token: &Token) -> Result<Vec<u8>, Error> {
    let parsed = wire::decode_token_context(&token.context)?;
    if parsed.header.alg != wire::ALG_STREAM_AES256_CTR {
        return Err(Error::Fail);
    }

    let ciphertext = &token.ciphertext;
    let message_length = parsed.header.message_length as usize;
    if ciphertext.len() < message_length {
        return Err(Error::Fail);
    }

    let msg_key = kdf::derive(master, kdf::KEY_LABEL, &kdf::length_context(ciphertext.len()))?;
    let iv: [u8; TOKEN_IV_BYTES] = parsed.iv.try_into().map_err(|_| Error::Fail)?;

    stream::decrypt_stream(&msg_key, &iv, &ciphertext[..message_length])
}
