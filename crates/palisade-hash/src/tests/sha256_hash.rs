// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 known-answer tests (RFC 6234 Section 8.5 / FIPS 180-2 examples)

use palisade_util::hex_to_bytes;

use crate::digest::Digest;
use crate::sha256::Sha256;

fn sha256_hex(data: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(data);
    h.hexdigest()
}

#[test]
fn test_empty_message() {
    assert_eq!(
        sha256_hex(b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_abc() {
    assert_eq!(
        sha256_hex(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_two_block_message() {
    assert_eq!(
        sha256_hex(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
}

#[test]
fn test_one_million_a() {
    let data = vec![b'a'; 1_000_000];
    let mut h = Sha256::new();
    h.update(&data);
    assert_eq!(
        h.digest(),
        hex_to_bytes("cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0")
    );
}

#[test]
fn test_update_across_block_boundary() {
    // 55/56/57-byte prefixes straddle the padding edge cases
    let data: Vec<u8> = (0..200u8).collect();

    for cut in [0, 1, 55, 56, 57, 63, 64, 65, 128, 200] {
        let mut split = Sha256::new();
        split.update(&data[..cut]);
        split.update(&data[cut..]);

        let mut whole = Sha256::new();
        whole.update(&data);

        assert_eq!(split.digest(), whole.digest(), "cut at {cut}");
    }
}

#[test]
fn test_finalize_matches_digest() {
    let mut h = Sha256::new();
    h.update(b"abc");
    assert_eq!(h.digest(), h.clone().finalize().to_vec());
}
