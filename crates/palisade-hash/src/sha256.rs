// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 implementation per RFC 6234 Section 6.2

use alloc::boxed::Box;
use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::digest::Digest;

/// SHA-256 constants K per RFC 6234 Section 5.1
const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Initial hash values H(0) per RFC 6234 Section 6.2.1
const H0: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

const BLOCK_LEN: usize = 64;
const HASH_LEN: usize = 32;

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn bsig0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn bsig1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn ssig0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn ssig1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// SHA-256 streaming state per RFC 6234 Section 6.2
///
/// Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha256 {
    h: [u32; 8],
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    total_len: u64,
}

impl Sha256 {
    /// Creates a new SHA-256 state initialized with H(0).
    pub fn new() -> Self {
        Self {
            h: H0,
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Compression function per RFC 6234 Section 6.2.2 (single block).
    fn compress(h: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
        // Message schedule W[0..63]
        let mut w = [0u32; 64];
        for t in 0..16 {
            w[t] = u32::from_be_bytes([
                block[t * 4],
                block[t * 4 + 1],
                block[t * 4 + 2],
                block[t * 4 + 3],
            ]);
        }
        for t in 16..64 {
            w[t] = ssig1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(ssig0(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut hh] = *h;

        for t in 0..64 {
            let t1 = hh
                .wrapping_add(bsig1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(K256[t])
                .wrapping_add(w[t]);
            let t2 = bsig0(a).wrapping_add(maj(a, b, c));
            hh = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }

        h[0] = h[0].wrapping_add(a);
        h[1] = h[1].wrapping_add(b);
        h[2] = h[2].wrapping_add(c);
        h[3] = h[3].wrapping_add(d);
        h[4] = h[4].wrapping_add(e);
        h[5] = h[5].wrapping_add(f);
        h[6] = h[6].wrapping_add(g);
        h[7] = h[7].wrapping_add(hh);

        w.zeroize();
    }

    fn update_state(&mut self, data: &[u8]) {
        let mut offset = 0;
        self.total_len += data.len() as u64;

        // Fill buffer if partially filled
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

        // Process full blocks
        while offset + BLOCK_LEN <= data.len() {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(&data[offset..offset + BLOCK_LEN]);
            Self::compress(&mut self.h, &block);
            block.zeroize();
            offset += BLOCK_LEN;
        }

        // Buffer remaining
        if offset < data.len() {
            let remaining = data.len() - offset;
            self.buffer[..remaining].copy_from_slice(&data[offset..]);
            self.buffer_len = remaining;
        }
    }

    /// Consumes the state and outputs the hash, padding per RFC 6234
    /// Section 4.1.
    pub fn finalize(mut self) -> [u8; HASH_LEN] {
        let bit_len = self.total_len * 8;

        // Append 0x80 (1 bit followed by zeros)
        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // If not enough space for the 64-bit length, pad and compress
        if self.buffer_len > BLOCK_LEN - 8 {
            self.buffer[self.buffer_len..].fill(0);
            let block = self.buffer;
            Self::compress(&mut self.h, &block);
            self.buffer.zeroize();
            self.buffer_len = 0;
        }

        // Pad with zeros up to the length field
        self.buffer[self.buffer_len..BLOCK_LEN - 8].fill(0);

        // Append the 64-bit bit length in big-endian
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

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Digest for Sha256 {
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
        "sha256"
    }
}
