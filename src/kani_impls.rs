//! Kani Arbitrary implementations and proof harnesses for property
//! verification of the codec and the component mask algebra.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{Components, percent_decode, percent_encode};

impl kani::Arbitrary for Components {
    fn any() -> Self {
        let bits: u8 = kani::any();
        Components::from_bits_truncate(bits)
    }
}

/// Generate a short ASCII string for codec proofs (kept small for
/// tractability).
fn arbitrary_ascii_string(max_len: usize) -> String {
    let len: usize = kani::any();
    let len = len % max_len;
    (0..len)
        .map(|_| {
            let b: u8 = kani::any();
            kani::assume(b.is_ascii());
            char::from(b)
        })
        .collect()
}

/// Proof: decoding an encoded string yields the original
#[kani::proof]
#[kani::unwind(6)]
fn proof_decode_inverts_encode() {
    let s = arbitrary_ascii_string(4);
    let encoded = percent_encode(&s);
    let decoded = percent_decode(&encoded).expect("encoder output always decodes");
    assert_eq!(decoded, s);
}

/// Proof: encoder output contains no byte the decoder would reject as a
/// literal, other than the escapes it introduces
#[kani::proof]
#[kani::unwind(6)]
fn proof_encode_emits_wire_safe_text() {
    let s = arbitrary_ascii_string(4);
    let encoded = percent_encode(&s);
    assert!(percent_decode(&encoded).is_ok());
}

/// Proof: a union mask contains both of its operands
#[kani::proof]
fn proof_mask_union_contains_operands() {
    let a: Components = kani::any();
    let b: Components = kani::any();
    assert!(a.with(b).contains(a));
    assert!(a.with(b).contains(b));
}

/// Proof: removal clears containment for any non-empty mask
#[kani::proof]
fn proof_mask_removal_clears_containment() {
    let a: Components = kani::any();
    let b: Components = kani::any();
    let cleared = a.without(b);
    assert!(b.is_empty() || !cleared.contains(b));
}

/// Proof: every mask is contained in ALL
#[kani::proof]
fn proof_all_is_top() {
    let a: Components = kani::any();
    assert!(Components::ALL.contains(a));
}
