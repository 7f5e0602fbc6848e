// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;

use crate::digest::Digest;
use crate::sha1::Sha1;
use crate::sha256::Sha256;
use crate::sha512::{Sha384, Sha512};

/// Resolves a canonical algorithm name to a fresh hash state.
///
/// Matching is ASCII case-insensitive. Returns `None` for names the
/// registry does not recognize.
///
/// # Example
///
/// ```
/// use palisade_hash::{Digest, by_name};
///
/// let sha256 = by_name("sha256").unwrap();
/// assert_eq!(sha256.digest_size(), 32);
/// assert!(by_name("md4").is_none());
/// ```
pub fn by_name(name: &str) -> Option<Box<dyn Digest>> {
    if name.eq_ignore_ascii_case("sha1") {
        Some(Box::new(Sha1::new()))
    } else if name.eq_ignore_ascii_case("sha256") {
        Some(Box::new(Sha256::new()))
    } else if name.eq_ignore_ascii_case("sha384") {
        Some(Box::new(Sha384::new()))
    } else if name.eq_ignore_ascii_case("sha512") {
        Some(Box::new(Sha512::new()))
    } else {
        None
    }
}
