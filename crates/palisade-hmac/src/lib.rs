// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keyed-hash message authentication per RFC 2104
//!
//! The [`Hmac`] session is generic over any hash algorithm implementing
//! [`palisade_hash::Digest`]: construction normalizes the key against
//! the algorithm's block size and seeds two independent hash states
//! (ipad/opad), [`Hmac::update`] streams message data, and
//! [`Hmac::digest`] / [`Hmac::hexdigest`] produce the authentication
//! tag without disturbing the running state. [`compute`] is the
//! one-shot entry point, with an accelerated HMAC-SHA256 fast path.
//!
//! A session is single-threaded by contract: `update` takes `&mut self`
//! and there is no internal locking. Cloning the session is the
//! sanctioned way to fan a shared prefix out to multiple computations.
//!
//! # Security
//!
//! Comparing a produced tag against an expected value must use a
//! constant-time equality check; [`Hmac::verify`] does this via
//! [`subtle`]. Never compare tags with `==`.
//!
//! References:
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//! - FIPS 198-1: The Keyed-Hash Message Authentication Code (HMAC)

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod digestmod;
mod error;
mod hmac;
mod oneshot;

pub use digestmod::Digestmod;
pub use error::HmacError;
pub use hmac::{DEFAULT_BLOCK_SIZE, Hmac, MIN_BLOCK_SIZE};
pub use oneshot::compute;
