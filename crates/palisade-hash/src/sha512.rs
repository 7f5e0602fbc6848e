// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-512 and SHA-384 implementations per RFC 6234 Sections 6.3/6.4

use alloc::boxed::Box;
use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::digest::Digest;

/// SHA-384/512 constants K per RFC 6234 Section 5.2
const K512: [u64; 80] = [
    0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
    0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
    0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
    0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
    0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
    0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
    0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
    0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
    0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
    0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
    0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
    0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
    0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
    0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

/// Initial hash values H(0) for SHA-512 per RFC 6234 Section 6.3
const H0_512: [u64; 8] = [
    0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
    0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
];

/// Initial hash values H(0) for SHA-384 per RFC 6234 Section 6.3
const H0_384: [u64; 8] = [
    0xcbbb9d5dc1059ed8, 0x629a292a367cd507, 0x9159015a3070dd17, 0x152fecd8f70e5939,
    0x67332667ffc00b31, 0x8eb44a8768581511, 0xdb0c2e0d64f98fa7, 0x47b5481dbefa4fa4,
];

const BLOCK_LEN: usize = 128;
const SHA512_HASH_LEN: usize = 64;
const SHA384_HASH_LEN: usize = 48;

#[inline(always)]
fn ch(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn bsig0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
fn bsig1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline(always)]
fn ssig0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
fn ssig1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

/// Shared SHA-384/512 streaming core. The two algorithms differ only in
/// H(0) and output truncation.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct Sha512Core {
    h: [u64; 8],
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    total_len: u128,
}

impl Sha512Core {
    fn new(h0: [u64; 8]) -> Self {
        Self {
            h: h0,
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Compression function per RFC 6234 Section 6.4 (single block).
    fn compress(h: &mut [u64; 8], block: &[u8; BLOCK_LEN]) {
        // Message schedule W[0..79]
        let mut w = [0u64; 80];
        for t in 0..16 {
            let mut word = [0u8; 8];
            word.copy_from_slice(&block[t * 8..(t + 1) * 8]);
            w[t] = u64::from_be_bytes(word);
        }
        for t in 16..80 {
            w[t] = ssig1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(ssig0(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut hh] = *h;

        for t in 0..80 {
            let t1 = hh
                .wrapping_add(bsig1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(K512[t])
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

    fn update(&mut self, data: &[u8]) {
        let mut offset = 0;
        self.total_len += data.len() as u128;

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

    /// Pads per RFC 6234 Section 4.2 and outputs the full 64-byte state.
    fn finalize(mut self) -> [u8; SHA512_HASH_LEN] {
        let bit_len = self.total_len * 8;

        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // The length field is 128 bits for the SHA-512 family
        if self.buffer_len > BLOCK_LEN - 16 {
            self.buffer[self.buffer_len..].fill(0);
            let block = self.buffer;
            Self::compress(&mut self.h, &block);
            self.buffer.zeroize();
            self.buffer_len = 0;
        }

        self.buffer[self.buffer_len..BLOCK_LEN - 16].fill(0);
        self.buffer[BLOCK_LEN - 16..].copy_from_slice(&bit_len.to_be_bytes());

        let block = self.buffer;
        Self::compress(&mut self.h, &block);

        let mut out = [0u8; SHA512_HASH_LEN];
        for (i, word) in self.h.iter().enumerate() {
            out[i * 8..(i + 1) * 8].copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

/// SHA-512 streaming state per RFC 6234 Section 6.4
///
/// Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha512 {
    core: Sha512Core,
}

impl Sha512 {
    /// Creates a new SHA-512 state initialized with H(0).
    pub fn new() -> Self {
        Self {
            core: Sha512Core::new(H0_512),
        }
    }

    /// Consumes the state and outputs the hash.
    pub fn finalize(self) -> [u8; SHA512_HASH_LEN] {
        self.core.clone().finalize()
    }
}

impl Default for Sha512 {
    fn default() -> Self {
        Self::new()
    }
}

impl Digest for Sha512 {
    fn update(&mut self, data: &[u8]) {
        self.core.update(data);
    }

    fn digest(&self) -> Vec<u8> {
        self.core.clone().finalize().to_vec()
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
        SHA512_HASH_LEN
    }

    fn name(&self) -> &'static str {
        "sha512"
    }
}

/// SHA-384 streaming state per RFC 6234 Section 6.3
///
/// SHA-512 core with its own H(0), output truncated to 48 bytes.
/// Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha384 {
    core: Sha512Core,
}

impl Sha384 {
    /// Creates a new SHA-384 state initialized with H(0).
    pub fn new() -> Self {
        Self {
            core: Sha512Core::new(H0_384),
        }
    }

    /// Consumes the state and outputs the hash.
    pub fn finalize(self) -> [u8; SHA384_HASH_LEN] {
        let mut full = self.core.clone().finalize();
        let mut out = [0u8; SHA384_HASH_LEN];
        out.copy_from_slice(&full[..SHA384_HASH_LEN]);
        full.zeroize();
        out
    }
}

impl Default for Sha384 {
    fn default() -> Self {
        Self::new()
    }
}

impl Digest for Sha384 {
    fn update(&mut self, data: &[u8]) {
        self.core.update(data);
    }

    fn digest(&self) -> Vec<u8> {
        let mut full = self.core.clone().finalize();
        let out = full[..SHA384_HASH_LEN].to_vec();
        full.zeroize();
        out
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
        SHA384_HASH_LEN
    }

    fn name(&self) -> &'static str {
        "sha384"
    }
}
