// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC session per RFC 2104

use core::fmt;

use palisade_hash::Digest;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::digestmod::Digestmod;
use crate::error::HmacError;

/// Block size assumed when the hash algorithm does not declare one.
pub const DEFAULT_BLOCK_SIZE: usize = 64;

/// Smallest declared block size accepted as-is. Anything below this is
/// treated as a misbehaving hash implementation and replaced by
/// [`DEFAULT_BLOCK_SIZE`], with a warning.
pub const MIN_BLOCK_SIZE: usize = 16;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// A running HMAC computation.
///
/// Holds two exclusively owned hash states: `inner`, seeded with the
/// key XOR ipad, receives all message data; `outer`, seeded with the
/// key XOR opad, is only ever read through a copy at finalization. The
/// raw key is transformed during construction and never retained.
pub struct Hmac {
    inner: Box<dyn Digest>,
    outer: Box<dyn Digest>,
    digest_size: usize,
    block_size: usize,
}

impl Hmac {
    /// Creates an HMAC session.
    ///
    /// `key` may be of any length: keys longer than the resolved block
    /// size are collapsed to their digest, and the result is
    /// zero-padded up to the block size. `msg`, when given, is fed
    /// through [`update`](Hmac::update) immediately. `digestmod` is
    /// required; [`HmacError::MissingAlgorithm`] is returned when it is
    /// absent.
    ///
    /// A hash algorithm declaring no block size, or one below
    /// [`MIN_BLOCK_SIZE`], is clamped to [`DEFAULT_BLOCK_SIZE`] with a
    /// warning-level diagnostic; construction never fails over block
    /// sizes.
    ///
    /// # Example
    ///
    /// ```
    /// use palisade_hmac::{Digestmod, Hmac};
    ///
    /// let mac = Hmac::new(b"key", Some(b"message"), Some(Digestmod::named("sha256")))?;
    /// assert_eq!(mac.digest().len(), 32);
    /// # Ok::<(), palisade_hmac::HmacError>(())
    /// ```
    ///
    /// The key must be a byte sequence; a text string is rejected at
    /// compile time:
    ///
    /// ```compile_fail
    /// use palisade_hmac::{Digestmod, Hmac};
    ///
    /// let _ = Hmac::new("key", None, Some(Digestmod::named("sha256")));
    /// ```
    pub fn new(
        key: &[u8],
        msg: Option<&[u8]>,
        digestmod: Option<Digestmod>,
    ) -> Result<Self, HmacError> {
        let digestmod = digestmod.ok_or(HmacError::MissingAlgorithm)?;
        let proto = digestmod.resolve()?;

        let mut outer = proto.spawn();
        let mut inner = proto.spawn();
        let digest_size = inner.digest_size();

        let block_size = match inner.block_size() {
            Some(declared) if declared >= MIN_BLOCK_SIZE => declared,
            Some(declared) => {
                tracing::warn!(
                    declared,
                    assumed = DEFAULT_BLOCK_SIZE,
                    algorithm = inner.name(),
                    "declared block size seems too small, using the default"
                );
                DEFAULT_BLOCK_SIZE
            }
            None => {
                tracing::warn!(
                    assumed = DEFAULT_BLOCK_SIZE,
                    algorithm = inner.name(),
                    "no declared block size, assuming the default"
                );
                DEFAULT_BLOCK_SIZE
            }
        };

        // Oversized keys collapse to their digest; everything shorter
        // than the block is zero-padded up to it.
        let mut key_block = Zeroizing::new(if key.len() > block_size {
            let mut h = proto.spawn();
            h.update(key);
            h.digest()
        } else {
            key.to_vec()
        });
        if key_block.len() < block_size {
            key_block.resize(block_size, 0);
        }

        let mut pad = Zeroizing::new(vec![0u8; key_block.len()]);
        for (p, k) in pad.iter_mut().zip(key_block.iter()) {
            *p = k ^ OPAD;
        }
        outer.update(&pad);
        for (p, k) in pad.iter_mut().zip(key_block.iter()) {
            *p = k ^ IPAD;
        }
        inner.update(&pad);

        let mut session = Self {
            inner,
            outer,
            digest_size,
            block_size,
        };
        if let Some(msg) = msg {
            session.update(msg);
        }
        Ok(session)
    }

    /// Feeds message bytes into the session.
    ///
    /// Only the inner hash state is touched. The final tag depends on
    /// the concatenation of all data fed since construction, in order.
    pub fn update(&mut self, msg: &[u8]) {
        self.inner.update(msg);
    }

    /// Outer state with the inner digest folded in; finalization always
    /// works on copies so the live session is never consumed.
    fn current(&self) -> Box<dyn Digest> {
        let mut h = self.outer.copy();
        h.update(&self.inner.digest());
        h
    }

    /// Authentication tag over everything fed so far.
    ///
    /// Non-destructive: the session keeps accepting
    /// [`update`](Hmac::update) calls, and repeated `digest` calls with
    /// no intervening update return identical tags. The result is
    /// exactly [`digest_size`](Hmac::digest_size) bytes.
    pub fn digest(&self) -> Vec<u8> {
        self.current().digest()
    }

    /// Lowercase hexadecimal encoding of [`digest`](Hmac::digest).
    pub fn hexdigest(&self) -> String {
        self.current().hexdigest()
    }

    /// Constant-time comparison of the current tag against `expected`.
    ///
    /// Always prefer this over comparing [`digest`](Hmac::digest)
    /// output with `==`, which leaks the position of the first
    /// mismatch through timing.
    pub fn verify(&self, expected: &[u8]) -> bool {
        self.digest().ct_eq(expected).into()
    }

    /// Session name in the form `"hmac-" + <algorithm>`, e.g.
    /// `"hmac-sha256"`.
    pub fn name(&self) -> String {
        format!("hmac-{}", self.inner.name())
    }

    /// Tag length in bytes.
    pub fn digest_size(&self) -> usize {
        self.digest_size
    }

    /// Block size the key was normalized against.
    pub fn block_size(&self) -> usize {
        self.block_size
    }
}

/// Cloning snapshots the authentication state mid-stream: both inner
/// and outer hash states are deep-copied, so the two sessions evolve
/// independently from the shared checkpoint.
impl Clone for Hmac {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.copy(),
            outer: self.outer.copy(),
            digest_size: self.digest_size,
            block_size: self.block_size,
        }
    }
}

impl fmt::Debug for Hmac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hmac")
            .field("name", &self.name())
            .field("digest_size", &self.digest_size)
            .field("block_size", &self.block_size)
            .finish_non_exhaustive()
    }
}
