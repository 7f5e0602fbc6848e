// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// HMAC construction error
///
/// All variants are detected synchronously at construction (or at the
/// one-shot call); there is no partial or retryable failure mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HmacError {
    /// No digest algorithm was supplied
    #[error("a digest algorithm is required")]
    MissingAlgorithm,

    /// The algorithm name is not in the registry
    #[error("unsupported digest algorithm: {0:?}")]
    UnsupportedAlgorithm(String),
}
