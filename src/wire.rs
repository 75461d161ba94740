//! Wire headers: named records with fixed little-endian encode/decode for
//! the two context layouts this crate defines. No raw memory overlay —
//! each header is parsed field-by-field.

extern crate alloc;
use alloc::vec::Vec;

use crate::error::Error;

/// Opaque algorithm identifier for AES-256-GCM (AEAD).
pub const ALG_AEAD_AES256_GCM: u32 = 0x0001_0100;
/// Opaque algorithm identifier for AES-256-CTR (stream).
pub const ALG_STREAM_AES256_CTR: u32 = 0x0002_0100;

/// Sealed-container fixed prefix: alg, iv_length, aad_length, auth_tag_length, message_length.
pub const SEALED_HEADER_BYTES: usize = 20;
/// Token-protect fixed prefix: alg, iv_length, message_length.
pub const TOKEN_HEADER_BYTES: usize = 12;

/// AEAD IV length carried in every sealed header.
pub const SEALED_IV_BYTES: usize = 12;
/// AAD length carried in every sealed header (always empty in this profile).
pub const SEALED_AAD_BYTES: usize = 0;
/// Auth-tag length carried in every sealed header.
pub const SEALED_TAG_BYTES: usize = 16;

/// Total sealed-container context size: header + IV + AAD + tag.
pub const SEALED_CONTEXT_BYTES: usize =
    SEALED_HEADER_BYTES + SEALED_IV_BYTES + SEALED_AAD_BYTES + SEALED_TAG_BYTES; // 48

/// Stream IV length carried in every token-protect header. Written and
/// used consistently at 16 bytes.
pub const TOKEN_IV_BYTES: usize = 16;

/// Total token-protect context size: header + IV.
pub const TOKEN_CONTEXT_BYTES: usize = TOKEN_HEADER_BYTES + TOKEN_IV_BYTES; // 28

// ---------------------------------------------------------------------------
// Sealed (authenticated) header
// ---------------------------------------------------------------------------

/// Parsed view of a sealed-container context blob.
#[derive(Debug, Clone, Copy)]
pub struct SealedHeader {
    pub alg: u32,
    pub iv_length: u32,
    pub aad_length: u32,
    pub auth_tag_length: u32,
    pub message_length: u32,
}

impl SealedHeader {
    fn encode(&self) -> [u8; SEALED_HEADER_BYTES] {
        let mut out = [0u8; SEALED_HEADER_BYTES];
        out[0..4].copy_from_slice(&self.alg.to_le_bytes());
        out[4..8].copy_from_slice(&self.iv_length.to_le_bytes());
        out[8..12].copy_from_slice(&self.aad_length.to_le_bytes());
        out[12..16].copy_from_slice(&self.auth_tag_length.to_le_bytes());
        out[16..20].copy_from_slice(&self.message_length.to_le_bytes());
        out
    }

    fn decode(data: &[u8]) -> Result<Self, Error> {
        if data.len() < SEALED_HEADER_BYTES {
            return Err(Error::InvalidParameter);
        }
        Ok(Self {
            alg: u32::from_le_bytes(data[0..4].try_into().unwrap()),
            iv_length: u32::from_le_bytes(data[4..8].try_into().unwrap()),
            aad_length: u32::from_le_bytes(data[8..12].try_into().unwrap()),
            auth_tag_length: u32::from_le_bytes(data[12..16].try_into().unwrap()),
            message_length: u32::from_le_bytes(data[16..20].try_into().unwrap()),
        })
    }
}

/// Encode a complete sealed-container context: header + IV + AAD (empty) + tag.
pub fn encode_sealed_context(
    iv: &[u8; SEALED_IV_BYTES],
    tag: &[u8; SEALED_TAG_BYTES],
    message_length: u32,
) -> Vec<u8> {
    let header = SealedHeader {
        alg: ALG_AEAD_AES256_GCM,
        iv_length: SEALED_IV_BYTES as u32,
        aad_length: SEALED_AAD_BYTES as u32,
        auth_tag_length: SEALED_TAG_BYTES as u32,
        message_length,
    };

    let mut out = Vec::with_capacity(SEALED_CONTEXT_BYTES);
    out.extend_from_slice(&header.encode());
    out.extend_from_slice(iv);
    // aad_length is always 0 in this profile; nothing to append.
    out.extend_from_slice(tag);
    out
}

/// Parsed sealed-container context: header fields plus borrowed IV/AAD/tag slices.
pub struct SealedContext<'a> {
    pub header: SealedHeader,
    pub iv: &'a [u8],
    pub aad: &'a [u8],
    pub tag: &'a [u8],
}

/// Decode a sealed-container context blob.
///
/// Validates that the header is present and that the declared component
/// lengths actually fit within `context`.
pub fn decode_sealed_context(context: &[u8]) -> Result<SealedContext<'_>, Error> {
    if context.len() <= SEALED_HEADER_BYTES {
        return Err(Error::InvalidParameter);
    }
    let header = SealedHeader::decode(context)?;

    let iv_len = header.iv_length as usize;
    let aad_len = header.aad_length as usize;
    let tag_len = header.auth_tag_length as usize;

    let required = SEALED_HEADER_BYTES
        .checked_add(iv_len)
        .and_then(|n| n.checked_add(aad_len))
        .and_then(|n| n.checked_add(tag_len))
        .ok_or(Error::InvalidParameter)?;
    if context.len() < required {
        return Err(Error::InvalidParameter);
    }

    let iv_start = SEALED_HEADER_BYTES;
    let aad_start = iv_start + iv_len;
    let tag_start = aad_start + aad_len;
    let tag_end = tag_start + tag_len;

    Ok(SealedContext {
        header,
        iv: &context[iv_start..aad_start],
        aad: &context[aad_start..tag_start],
        tag: &context[tag_start..tag_end],
    })
}

// ---------------------------------------------------------------------------
// Token-protect header
// ---------------------------------------------------------------------------

/// Parsed view of a token-protect context blob.
#[derive(Debug, Clone, Copy)]
pub struct TokenHeader {
    pub alg: u32,
    pub iv_length: u32,
    pub message_length: u32,
}

impl TokenHeader {
    fn encode(&self) -> [u8; TOKEN_HEADER_BYTES] {
        let mut out = [0u8; TOKEN_HEADER_BYTES];
        out[0..4].copy_from_slice(&self.alg.to_le_bytes());
        out[4..8].copy_from_slice(&self.iv_length.to_le_bytes());
        out[8..12].copy_from_slice(&self.message_length.to_le_bytes());
        out
    }

    fn decode(data: &[u8]) -> Result<Self, Error> {
        if data.len() < TOKEN_HEADER_BYTES {
            return Err(Error::InvalidParameter);
        }
        Ok(Self {
            alg: u32::from_le_bytes(data[0..4].try_into().unwrap()),
            iv_length: u32::from_le_bytes(data[4..8].try_into().unwrap()),
            message_length: u32::from_le_bytes(data[8..12].try_into().unwrap()),
        })
    }
}

/// Encode a complete token-protect context: header + IV.
pub fn encode_token_context(iv: &[u8; TOKEN_IV_BYTES], message_length: u32) -> Vec<u8> {
    let header = TokenHeader {
        alg: ALG_STREAM_AES256_CTR,
        iv_length: TOKEN_IV_BYTES as u32,
        message_length,
    };

    let mut out = Vec::with_capacity(TOKEN_CONTEXT_BYTES);
    out.extend_from_slice(&header.encode());
    out.extend_from_slice(iv);
    out
}

/// Parsed token-protect context: header fields plus a borrowed IV slice.
pub struct TokenContext<'a> {
    pub header: TokenHeader,
    pub iv: &'a [u8],
}

/// Decode a token-protect context blob.
pub fn decode_token_context(context: &[u8]) -> Result<TokenContext<'_>, Error> {
    if context.len() <= TOKEN_HEADER_BYTES {
        return Err(Error::InvalidParameter);
    }
    let header = TokenHeader::decode(context)?;

    let iv_len = header.iv_length as usize;
    let required = TOKEN_HEADER_BYTES
        .checked_add(iv_len)
        .ok_or(Error::InvalidParameter)?;
    if context.len() < required {
        return Err(Error::InvalidParameter);
    }

    Ok(TokenContext {
        header,
        iv: &context[TOKEN_HEADER_BYTES..required],
    })
}
