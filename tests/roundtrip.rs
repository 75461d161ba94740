use cellbox::{Error, Sealed, SecureCell, Token};

fn setup() -> SecureCell {
    SecureCell::new()
}

// --- sealed (authenticated) mode -------------------------------------------

#[test]
fn seal_roundtrip_basic() {
    let cell = setup();
    let master = b"master-secret-0123456789abcdef";
    let plaintext = b"hello secure world";

    let sealed = cell.seal(master, plaintext, None).unwrap();
    let recovered = cell.unseal(master, &sealed).unwrap();
    assert_eq!(&recovered, plaintext);
}

#[test]
fn seal_roundtrip_large_plaintext() {
    let cell = setup();
    let master = b"master-secret";
    let plaintext = vec![0xABu8; 65536];

    let sealed = cell.seal(master, &plaintext, None).unwrap();
    let recovered = cell.unseal(master, &sealed).unwrap();
    assert_eq!(recovered, plaintext);
}

#[test]
fn seal_rejects_empty_plaintext() {
    let cell = setup();
    assert_eq!(cell.seal(b"master", b"", None), Err(Error::InvalidParameter));
}

#[test]
fn seal_wrong_key_fails() {
    let cell = setup();
    let sealed = cell.seal(b"master-one", b"data", None).unwrap();
    assert_eq!(cell.unseal(b"master-two", &sealed), Err(Error::Fail));
}

#[test]
fn seal_context_has_fixed_size() {
    let cell = setup();
    let sealed = cell.seal(b"master", b"x", None).unwrap();
    assert_eq!(sealed.context().len(), cellbox::SEALED_CONTEXT_BYTES);
}

#[test]
fn seal_tamper_ciphertext_fails() {
    let cell = setup();
    let master = b"master";
    let sealed = cell.seal(master, b"data", None).unwrap();
    let (context, mut ciphertext) = sealed.into_parts();
    let last = ciphertext.len() - 1;
    ciphertext[last] ^= 0x01;
    let tampered = Sealed::from_parts(context, ciphertext);
    assert_eq!(cell.unseal(master, &tampered), Err(Error::Fail));
}

#[test]
fn seal_tamper_context_fails() {
    let cell = setup();
    let master = b"master";
    let sealed = cell.seal(master, b"data", None).unwrap();
    let (mut context, ciphertext) = sealed.into_parts();
    context[0] ^= 0x01;
    let tampered = Sealed::from_parts(context, ciphertext);
    assert_eq!(cell.unseal(master, &tampered), Err(Error::Fail));
}

#[test]
fn seal_truncated_ciphertext_fails() {
    let cell = setup();
    let master = b"master";
    let sealed = cell.seal(master, b"data", None).unwrap();
    let (context, ciphertext) = sealed.into_parts();
    let truncated = Sealed::from_parts(context, ciphertext[..1].to_vec());
    assert_eq!(cell.unseal(master, &truncated), Err(Error::Fail));
}

#[test]
fn seal_empty_context_fails_to_decode() {
    let cell = setup();
    let bogus = Sealed::from_parts(Vec::new(), Vec::new());
    assert_eq!(cell.unseal(b"master", &bogus), Err(Error::InvalidParameter));
}

#[test]
fn seal_errors_are_uniform() {
    let cell = setup();
    let master = b"master";
    let sealed = cell.seal(master, b"data", None).unwrap();

    let err_wrong_key = cell.unseal(b"other-master", &sealed).unwrap_err();
    let (context, mut ciphertext) = sealed.clone().into_parts();
    ciphertext[0] ^= 0x01;
    let err_tampered = cell
        .unseal(master, &Sealed::from_parts(context, ciphertext))
        .unwrap_err();

    assert_eq!(err_wrong_key, err_tampered);
    assert_eq!(format!("{}", err_wrong_key), "decryption failed");
}

// --- token-protect mode ------------------------------------------------------

#[test]
fn protect_roundtrip_basic() {
    let cell = setup();
    let master = b"master-secret";
    let plaintext = b"hello unauthenticated world";

    let token = cell.protect(master, plaintext, None).unwrap();
    let recovered = cell.unprotect(master, &token).unwrap();
    assert_eq!(&recovered, plaintext);
}

#[test]
fn protect_roundtrip_empty_plaintext() {
    let cell = setup();
    let master = b"master-secret";
    let token = cell.protect(master, b"", None).unwrap();
    let recovered = cell.unprotect(master, &token).unwrap();
    assert_eq!(recovered, b"");
}

#[test]
fn protect_context_has_fixed_size() {
    let cell = setup();
    let token = cell.protect(b"master", b"x", None).unwrap();
    assert_eq!(token.context().len(), cellbox::TOKEN_CONTEXT_BYTES);
}

#[test]
fn protect_wrong_key_does_not_error_but_mismatches() {
    let cell = setup();
    let plaintext = b"some payload";
    let token = cell.protect(b"master-one", plaintext, None).unwrap();
    let recovered = cell.unprotect(b"master-two", &token).unwrap();
    assert_ne!(&recovered, plaintext);
}

#[test]
fn protect_truncated_context_fails_to_decode() {
    let cell = setup();
    let master = b"master";
    let token = cell.protect(master, b"data", None).unwrap();
    let (context, ciphertext) = token.into_parts();
    let truncated = Token::from_parts(context[..4].to_vec(), ciphertext);
    assert_eq!(cell.unprotect(master, &truncated), Err(Error::InvalidParameter));
}

// --- context-imprint mode -----------------------------------------------------

#[test]
fn imprint_roundtrip_basic() {
    let cell = setup();
    let master = b"master-secret";
    let context = b"record:17";
    let plaintext = b"hello deterministic world";

    let ciphertext = cell.imprint(master, plaintext, context).unwrap();
    let recovered = cell.unimprint(master, &ciphertext, context).unwrap();
    assert_eq!(&recovered, plaintext);
}

#[test]
fn imprint_is_deterministic() {
    let cell = setup();
    let master = b"master-secret";
    let context = b"record:17";
    let plaintext = b"same plaintext every time";

    let first = cell.imprint(master, plaintext, context).unwrap();
    let second = cell.imprint(master, plaintext, context).unwrap();
    assert_eq!(first, second);
}

#[test]
fn imprint_requires_nonempty_context() {
    let cell = setup();
    assert_eq!(cell.imprint(b"master", b"data", b""), Err(Error::InvalidParameter));
    assert_eq!(cell.unimprint(b"master", b"data", b""), Err(Error::InvalidParameter));
}

#[test]
fn imprint_ciphertext_length_matches_plaintext() {
    let cell = setup();
    let ciphertext = cell.imprint(b"master", b"abcdef", b"ctx").unwrap();
    assert_eq!(ciphertext.len(), 6);
}

#[test]
fn imprint_wrong_context_mismatches_without_error() {
    let cell = setup();
    let master = b"master-secret";
    let plaintext = b"some secret record";
    let ciphertext = cell.imprint(master, plaintext, b"ctx-a").unwrap();
    let recovered = cell.unimprint(master, &ciphertext, b"ctx-b").unwrap();
    assert_ne!(&recovered, plaintext);
}
