#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = cellbox::wire::decode_sealed_context(data);
    let _ = cellbox::wire::decode_token_context(data);
});
