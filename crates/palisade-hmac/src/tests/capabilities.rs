// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Deliberately misbehaving hash capabilities for contract-edge tests.

use palisade_hash::{Digest, Sha256};

/// SHA-256 that declares no block size at all.
#[derive(Clone)]
pub(crate) struct NoBlockSize(pub Sha256);

impl NoBlockSize {
    pub fn fresh() -> Box<dyn Digest> {
        Box::new(Self(Sha256::new()))
    }
}

impl Digest for NoBlockSize {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn digest(&self) -> Vec<u8> {
        self.0.digest()
    }

    fn copy(&self) -> Box<dyn Digest> {
        Box::new(self.clone())
    }

    fn spawn(&self) -> Box<dyn Digest> {
        Self::fresh()
    }

    fn block_size(&self) -> Option<usize> {
        None
    }

    fn digest_size(&self) -> usize {
        self.0.digest_size()
    }

    fn name(&self) -> &'static str {
        "sha256-noblock"
    }
}

/// SHA-256 that declares an unsafely small block size.
#[derive(Clone)]
pub(crate) struct TinyBlockSize(pub Sha256);

impl TinyBlockSize {
    pub fn fresh() -> Box<dyn Digest> {
        Box::new(Self(Sha256::new()))
    }
}

impl Digest for TinyBlockSize {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn digest(&self) -> Vec<u8> {
        self.0.digest()
    }

    fn copy(&self) -> Box<dyn Digest> {
        Box::new(self.clone())
    }

    fn spawn(&self) -> Box<dyn Digest> {
        Self::fresh()
    }

    fn block_size(&self) -> Option<usize> {
        Some(8)
    }

    fn digest_size(&self) -> usize {
        self.0.digest_size()
    }

    fn name(&self) -> &'static str {
        "sha256-tinyblock"
    }
}
