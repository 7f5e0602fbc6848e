// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! One-shot HMAC with an accelerated fast path
//!
//! [`compute`] is equivalent to building a session, feeding the whole
//! message and finalizing, but a [`Digestmod::Named`] specifier that
//! matches the accelerated registry takes a fixed-buffer path with no
//! trait objects and no intermediate allocations. Both paths produce
//! bit-identical tags.

use palisade_hash::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::digestmod::Digestmod;
use crate::error::HmacError;
use crate::hmac::Hmac;

type OneshotFn = fn(key: &[u8], msg: &[u8]) -> Vec<u8>;

/// Algorithms with a dedicated one-shot implementation.
const ACCELERATED: &[(&str, OneshotFn)] = &[("sha256", hmac_sha256)];

fn accelerated(name: &str) -> Option<OneshotFn> {
    ACCELERATED
        .iter()
        .find(|(candidate, _)| name.eq_ignore_ascii_case(candidate))
        .map(|(_, f)| *f)
}

/// Computes `HMAC(key, msg)` in one call.
///
/// Equivalent to
/// `Hmac::new(key, Some(msg), Some(digestmod))?.digest()` for any
/// specifier; recognized algorithm names are dispatched to an
/// accelerated implementation with identical output.
///
/// # Example
///
/// ```
/// use palisade_hmac::compute;
///
/// let tag = compute(b"key", b"message", "sha256".into())?;
/// assert_eq!(tag.len(), 32);
/// # Ok::<(), palisade_hmac::HmacError>(())
/// ```
pub fn compute(key: &[u8], msg: &[u8], digestmod: Digestmod) -> Result<Vec<u8>, HmacError> {
    if let Digestmod::Named(name) = &digestmod {
        if let Some(fast) = accelerated(name) {
            return Ok(fast(key, msg));
        }
    }
    Ok(Hmac::new(key, Some(msg), Some(digestmod))?.digest())
}

const BLOCK_LEN: usize = 64;
const HASH_LEN: usize = 32;
const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// HMAC-SHA256 over fixed buffers, pads and intermediates zeroized.
fn hmac_sha256(key: &[u8], msg: &[u8]) -> Vec<u8> {
    let mut key_block = Zeroizing::new([0u8; BLOCK_LEN]);
    if key.len() > BLOCK_LEN {
        let mut h = Sha256::new();
        h.update(key);
        key_block[..HASH_LEN].copy_from_slice(&h.finalize());
    } else {
        key_block[..key.len()].copy_from_slice(key);
    }

    let mut k_ipad = Zeroizing::new([IPAD; BLOCK_LEN]);
    let mut k_opad = Zeroizing::new([OPAD; BLOCK_LEN]);
    for i in 0..BLOCK_LEN {
        k_ipad[i] ^= key_block[i];
        k_opad[i] ^= key_block[i];
    }

    // Inner hash: SHA256(k_ipad || msg)
    let mut inner = Sha256::new();
    inner.update(&k_ipad[..]);
    inner.update(msg);
    let inner_hash = Zeroizing::new(inner.finalize());

    // Outer hash: SHA256(k_opad || inner_hash)
    let mut outer = Sha256::new();
    outer.update(&k_opad[..]);
    outer.update(&inner_hash[..]);
    outer.finalize().to_vec()
}
