// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming hash capability trait with built-in SHA algorithms
//!
//! The [`Digest`] trait is the contract keyed constructions (HMAC) are
//! polymorphic over: incremental `update`, non-destructive `digest`,
//! deep `copy`, and the algorithm's size parameters. The built-in
//! algorithms implement SHA-1 per RFC 3174 and the SHA-2 family per
//! RFC 6234. Hash states are zeroized on drop.
//!
//! References:
//! - RFC 3174: US Secure Hash Algorithm 1 (SHA1)
//!   <https://datatracker.ietf.org/doc/html/rfc3174>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod digest;
mod registry;
mod sha1;
mod sha256;
mod sha512;

pub use digest::Digest;
pub use registry::by_name;
pub use sha1::Sha1;
pub use sha256::Sha256;
pub use sha512::{Sha384, Sha512};
