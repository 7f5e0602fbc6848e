// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 implementation per RFC 3174
//!
//! Kept for interoperability with legacy HMAC deployments; do not use
//! SHA-1 for collision resistance.

use alloc::boxed::Box;
use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::digest::Digest;

/// Initial hash values H(0) per RFC 3174 Section 6.1
const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Round constants K per RFC 3174 Section 5
const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

const BLOCK_LEN: usize = 64;
const HASH_LEN: usize = 20;

/// SHA-1 streaming state per RFC 3174
///
/// Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha1 {
    h: [u32; 5],
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    total_len: u64,
}

impl Sha1 {
    /// Creates a new SHA-1 state initialized with H(0).
    pub fn new() -> Self {
        Self {
            h: H0,
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Compression function per RFC 3174 Section 6.1 (single block).
    fn compress(h: &mut [u32; 5], block: &[u8; BLOCK_LEN]) {
        // Message schedule W[0..79]
        let mut w = [0u32; 80];
        for t in 0..16 {
            w[t] = u32::from_be_bytes([
                block[t * 4],
                block[t * 4 + 1],
                block[t * 4 + 2],
                block[t * 4 + 3],
            ]);
        }
        for t in 16..80 {
            w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = *h;

        for (t, wt) in w.iter().enumerate() {
            let f = match t {
                0..=19 => (b & c) | (!b & d),
                20..=39 => b ^ c ^ d,
                40..=59 => (b & c) | (b & d) | (c & d),
                _ => b ^ c ^ d,
            };

            let tmp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(K[t / 20])
                .wrapping_add(*wt);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = tmp;
        }

        h[0] = h[0].wrapping_add(a);
        h[1] = h[1].wrapping_add(b);
        h[2] = h[2].wrapping_add(c);
        h[3] = h[3].wrapping_add(d);
        h[4] = h[4].wrapping_add(e);

        w.zeroize();
    }

    fn update_state(&mut self, data: &[u8]) {
        let mut offset = 0;
        self.total_len += data.len() as u64;

        if self.buffer_len > 0 {
            let space = BLOCK_LEN - self.buffer_len;
            let copy_len = core::cmp::min(space, data.len());

            self.buffer[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;
            offset = copy_len;

            if self.buffer_len == BLOCK_LEN {
                let block = self.buffer;
                Self::compress(&mut self.h, &block);
                self.buffer.zeroize();
                self.buffer_len = 0;
            }
        }

        while offset + BLOCK_LEN <= data.len() {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(&data[offset..offset + BLOCK_LEN]);
            Self::compress(&mut self.h, &block);
            block.zeroize();
            offset += BLOCK_LEN;
        }

        if offset < data.len() {
            let remaining = data.len() - offset;
            self.buffer[..remaining].copy_from_slice(&data[offset..]);
            self.buffer_len = remaining;
        }
    }

    /// Consumes the state and outputs the hash, padding per RFC 3174
    /// Section 4.
    pub fn finalize(mut self) -> [u8; HASH_LEN] {
        let bit_len = self.total_len * 8;

        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        if self.buffer_len > BLOCK_LEN - 8 {
            self.buffer[self.buffer_len..].fill(0);
            let block = self.buffer;
            Self::compress(&mut self.h, &block);
            self.buffer.zeroize();
            self.buffer_len = 0;
        }

        self.buffer[self.buffer_len..BLOCK_LEN - 8].fill(0);
        self.buffer[BLOCK_LEN - 8..].copy_from_slice(&bit_len.to_be_bytes());

        let block = self.buffer;
        Self::compress(&mut self.h, &block);

        let mut out = [0u8; HASH_LEN];
        for (i, word) in self.h.iter().enumerate() {
            out[i * 4..(i + 1) * 4].copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Digest for Sha1 {
    fn update(&mut self, data: &[u8]) {
        self.update_state(data);
    }

    fn digest(&self) -> Vec<u8> {
        self.clone().finalize().to_vec()
    }

    fn copy(&self) -> Box<dyn Digest> {
        Box::new(self.clone())
    }

    fn spawn(&self) -> Box<dyn Digest> {
        Box::new(Self::new())
    }

    fn block_size(&self) -> Option<usize> {
        Some(BLOCK_LEN)
    }

    fn digest_size(&self) -> usize {
        HASH_LEN
    }

    fn name(&self) -> &'static str {
        "sha1"
    }
}
