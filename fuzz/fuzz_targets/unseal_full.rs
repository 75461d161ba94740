#![no_main]
use cellbox::{Sealed, SecureCell};
use libfuzzer_sys::fuzz_target;

// Splits the fuzz input into a master secret, a context blob, and a
// ciphertext using the first two bytes as pivot indices, then feeds the
// result through `unseal` the way a network peer might hand over an
// arbitrary, possibly-malicious container.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let split_a = data[0] as usize;
    let split_b = data[1] as usize;
    let rest = &data[2..];

    let split_a = split_a.min(rest.len());
    let split_b = split_b.min(rest.len() - split_a) + split_a;

    let master = &rest[..split_a];
    let context = &rest[split_a..split_b];
    let ciphertext = &rest[split_b..];

    if master.is_empty() {
        return;
    }

    let cell = SecureCell::new();
    let sealed = Sealed::from_parts(context.to_vec(), ciphertext.to_vec());
    let _ = cell.unseal(master, &sealed);
});
