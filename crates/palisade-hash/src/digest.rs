// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use palisade_util::bytes_to_hex;

/// A running hash computation.
///
/// Object-safe so callers can hold any algorithm behind
/// `Box<dyn Digest>` and resolve the concrete algorithm at run time.
/// Implementations own their state exclusively; nothing fed through
/// [`update`](Digest::update) is retained by reference.
pub trait Digest {
    /// Feeds message bytes into the running state.
    ///
    /// May be called any number of times; the final digest depends on
    /// the concatenation of all data fed so far, in order.
    fn update(&mut self, data: &[u8]);

    /// Digest of everything fed so far.
    ///
    /// Finalization runs on an internal copy of the state, so the
    /// running computation is left intact and keeps accepting
    /// [`update`](Digest::update) calls.
    fn digest(&self) -> Vec<u8>;

    /// Independent deep copy of the running state.
    ///
    /// Subsequent updates on either side do not affect the other.
    fn copy(&self) -> Box<dyn Digest>;

    /// Fresh instance of the same algorithm, with no data fed.
    fn spawn(&self) -> Box<dyn Digest>;

    /// Declared input block size in bytes, if the algorithm has one.
    fn block_size(&self) -> Option<usize>;

    /// Output length in bytes.
    fn digest_size(&self) -> usize;

    /// Canonical lowercase algorithm name, e.g. `"sha256"`.
    fn name(&self) -> &'static str;

    /// Lowercase hexadecimal encoding of [`digest`](Digest::digest).
    fn hexdigest(&self) -> String {
        bytes_to_hex(&self.digest())
    }
}
