// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-512 and SHA-384 known-answer tests (RFC 6234 Section 8.5)

use crate::digest::Digest;
use crate::sha512::{Sha384, Sha512};

fn sha512_hex(data: &[u8]) -> String {
    let mut h = Sha512::new();
    h.update(data);
    h.hexdigest()
}

fn sha384_hex(data: &[u8]) -> String {
    let mut h = Sha384::new();
    h.update(data);
    h.hexdigest()
}

#[test]
fn test_sha512_empty_message() {
    assert_eq!(
        sha512_hex(b""),
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
         47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
    );
}

#[test]
fn test_sha512_abc() {
    assert_eq!(
        sha512_hex(b"abc"),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
}

#[test]
fn test_sha512_two_block_message() {
    let data = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmn\
                 hijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";
    assert_eq!(
        sha512_hex(data),
        "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018\
         501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909"
    );
}

#[test]
fn test_sha384_empty_message() {
    assert_eq!(
        sha384_hex(b""),
        "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da\
         274edebfe76f65fbd51ad2f14898b95b"
    );
}

#[test]
fn test_sha384_abc() {
    assert_eq!(
        sha384_hex(b"abc"),
        "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
         8086072ba1e7cc2358baeca134c825a7"
    );
}

#[test]
fn test_sha384_is_truncated_with_its_own_iv() {
    // Same input must NOT give a truncated SHA-512 (different H(0))
    let mut s384 = Sha384::new();
    let mut s512 = Sha512::new();
    s384.update(b"abc");
    s512.update(b"abc");
    assert_ne!(s384.digest(), s512.digest()[..48].to_vec());
}

#[test]
fn test_sha512_update_across_block_boundary() {
    // Cuts around the 128-byte block and the 112-byte padding edge
    let data: Vec<u8> = (0..=255u8).collect();

    for cut in [0, 1, 111, 112, 113, 127, 128, 129, 256] {
        let mut split = Sha512::new();
        split.update(&data[..cut]);
        split.update(&data[cut..]);

        let mut whole = Sha512::new();
        whole.update(&data);

        assert_eq!(split.digest(), whole.digest(), "cut at {cut}");
    }
}
