// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use palisade_hash::Digest;

use crate::error::HmacError;

/// How the underlying hash algorithm is specified.
///
/// Resolved exactly once, at session construction, into a fresh hash
/// state. Variants mirror the three accepted specifier shapes: a
/// registry name, a zero-argument constructor, or an
/// already-constructed prototype whose algorithm is reused.
pub enum Digestmod {
    /// Canonical algorithm name resolved through
    /// [`palisade_hash::by_name`], e.g. `"sha256"`.
    Named(String),

    /// Zero-argument constructor returning a fresh hash state.
    Factory(fn() -> Box<dyn Digest>),

    /// Already-constructed hash object. Only its algorithm is reused;
    /// any data fed into the prototype is ignored.
    Prototype(Box<dyn Digest>),
}

impl Digestmod {
    /// Shorthand for [`Digestmod::Named`].
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Resolves the specifier into a fresh hash state.
    pub(crate) fn resolve(&self) -> Result<Box<dyn Digest>, HmacError> {
        match self {
            Self::Named(name) => palisade_hash::by_name(name)
                .ok_or_else(|| HmacError::UnsupportedAlgorithm(name.clone())),
            Self::Factory(factory) => Ok(factory()),
            Self::Prototype(proto) => Ok(proto.spawn()),
        }
    }
}

impl From<&str> for Digestmod {
    fn from(name: &str) -> Self {
        Self::Named(name.into())
    }
}

impl From<String> for Digestmod {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<Box<dyn Digest>> for Digestmod {
    fn from(proto: Box<dyn Digest>) -> Self {
        Self::Prototype(proto)
    }
}

impl fmt::Debug for Digestmod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
            Self::Prototype(proto) => f.debug_tuple("Prototype").field(&proto.name()).finish(),
        }
    }
}
