// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Property tests over arbitrary keys, messages and split points.

use proptest::prelude::*;

use crate::digestmod::Digestmod;
use crate::hmac::Hmac;
use crate::oneshot::compute;

fn keys() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..200)
}

fn messages() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..400)
}

proptest! {
    #[test]
    fn streaming_concatenation_equals_batch(
        key in keys(),
        msg in messages(),
        split in any::<prop::sample::Index>(),
    ) {
        let cut = split.index(msg.len() + 1);

        let mut streamed = Hmac::new(&key, None, Some(Digestmod::named("sha256")))
            .expect("Failed to Hmac::new(..)");
        streamed.update(&msg[..cut]);
        streamed.update(&msg[cut..]);

        let batch = Hmac::new(&key, Some(&msg), Some(Digestmod::named("sha256")))
            .expect("Failed to Hmac::new(..)");

        prop_assert_eq!(streamed.digest(), batch.digest());
    }

    #[test]
    fn oneshot_matches_generic_session(
        key in keys(),
        msg in messages(),
    ) {
        // sha256 exercises the accelerated path, sha512 the generic one
        for algorithm in ["sha256", "sha512"] {
            let tag = compute(&key, &msg, Digestmod::named(algorithm))
                .expect("Failed to compute(..)");

            let mut mac = Hmac::new(&key, None, Some(Digestmod::named(algorithm)))
                .expect("Failed to Hmac::new(..)");
            mac.update(&msg);

            prop_assert_eq!(tag, mac.digest());
        }
    }

    #[test]
    fn oversized_key_collapse_law(
        key in proptest::collection::vec(any::<u8>(), 65..300),
        msg in messages(),
    ) {
        use palisade_hash::{Digest as _, Sha256};

        let mut h = Sha256::new();
        h.update(&key);
        let collapsed = h.digest();

        let long = Hmac::new(&key, Some(&msg), Some(Digestmod::named("sha256")))
            .expect("Failed to Hmac::new(..)");
        let short = Hmac::new(&collapsed, Some(&msg), Some(Digestmod::named("sha256")))
            .expect("Failed to Hmac::new(..)");

        prop_assert_eq!(long.digest(), short.digest());
    }

    #[test]
    fn copy_round_trip(
        key in keys(),
        prefix in messages(),
        suffix in messages(),
    ) {
        let mut mac = Hmac::new(&key, Some(&prefix), Some(Digestmod::named("sha256")))
            .expect("Failed to Hmac::new(..)");
        let mut snapshot = mac.clone();

        mac.update(&suffix);
        snapshot.update(&suffix);

        prop_assert_eq!(mac.digest(), snapshot.digest());
    }
}
