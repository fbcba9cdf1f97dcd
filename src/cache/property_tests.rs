//! Property-Based Tests for the Cache Module
//!
//! Uses proptest to verify the TTL-window, idempotence, overwrite, and
//! growth properties of the expiring cache, plus stats accuracy at the
//! proxy level.

use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

use crate::cache::ExpiringCache;
use crate::gate::DenyList;
use crate::proxy::GatedCachingProxy;
use crate::subject::EchoSubject;

// == Test Configuration ==
const TEST_TTL_MS: u64 = 30_000;

fn test_cache() -> ExpiringCache {
    ExpiringCache::new(Duration::from_millis(TEST_TTL_MS))
}

// == Strategies ==
/// Generates cache keys (non-empty, bounded)
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}"
}

/// Generates cache values
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,256}"
}

/// Generates insertion timestamps well away from u64 overflow
fn timestamp_strategy() -> impl Strategy<Value = u64> {
    0u64..1_000_000_000
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A stored value is visible for exactly the TTL window: present for
    // every instant in [t0, t0 + ttl), gone from t0 + ttl onward.
    #[test]
    fn prop_ttl_window(
        key in key_strategy(),
        value in value_strategy(),
        t0 in timestamp_strategy(),
        offset in 0u64..(2 * TEST_TTL_MS),
    ) {
        let mut cache = test_cache();
        cache.put(key.clone(), value.clone(), t0);

        let t = t0 + offset;
        let expected = if offset < TEST_TTL_MS {
            Some(value)
        } else {
            None
        };
        prop_assert_eq!(cache.get(&key, t), expected);
    }

    // Reads never mutate: any number of gets at the same instant return
    // the same answer and leave the map untouched, expired entries included.
    #[test]
    fn prop_get_is_idempotent(
        key in key_strategy(),
        value in value_strategy(),
        t0 in timestamp_strategy(),
        offset in 0u64..(2 * TEST_TTL_MS),
    ) {
        let mut cache = test_cache();
        cache.put(key.clone(), value, t0);

        let t = t0 + offset;
        let first = cache.get(&key, t);
        for _ in 0..3 {
            prop_assert_eq!(cache.get(&key, t), first.clone());
        }
        prop_assert_eq!(cache.len(), 1, "get must not remove entries");
    }

    // A later put wins: after overwriting, the old value is never
    // observable again and the expiry window restarts from the overwrite.
    #[test]
    fn prop_overwrite_wins(
        key in key_strategy(),
        v1 in value_strategy(),
        v2 in value_strategy(),
        t0 in timestamp_strategy(),
        gap in 0u64..(2 * TEST_TTL_MS),
        offset in 0u64..TEST_TTL_MS,
    ) {
        let mut cache = test_cache();
        cache.put(key.clone(), v1, t0);

        let t1 = t0 + gap;
        cache.put(key.clone(), v2.clone(), t1);

        // Anywhere inside the second window the second value is served
        prop_assert_eq!(cache.get(&key, t1 + offset), Some(v2));
        prop_assert_eq!(cache.len(), 1);
    }

    // The map holds exactly one entry per distinct key ever stored,
    // regardless of how many have expired.
    #[test]
    fn prop_memory_grows_with_distinct_keys(
        keys in prop::collection::vec(key_strategy(), 1..30),
        t0 in timestamp_strategy(),
    ) {
        let mut cache = test_cache();
        let distinct: HashSet<String> = keys.iter().cloned().collect();

        for (i, key) in keys.into_iter().enumerate() {
            // Space the puts far enough apart that earlier entries expire
            cache.put(key, "v".to_string(), t0 + (i as u64) * 2 * TEST_TTL_MS);
        }

        prop_assert_eq!(cache.len(), distinct.len());
    }

    // Sweeping at an instant removes exactly the expired entries; a get
    // after the sweep agrees with a get before it for every surviving key.
    #[test]
    fn prop_sweep_preserves_live_entries(
        keys in prop::collection::vec(key_strategy(), 1..20),
        t0 in timestamp_strategy(),
        sweep_offset in 0u64..(3 * TEST_TTL_MS),
    ) {
        let mut cache = test_cache();
        for (i, key) in keys.iter().enumerate() {
            cache.put(key.clone(), format!("v{}", i), t0 + i as u64);
        }

        let sweep_at = t0 + sweep_offset;
        let visible_before: Vec<(String, Option<String>)> = keys
            .iter()
            .map(|k| (k.clone(), cache.get(k, sweep_at)))
            .collect();

        cache.sweep(sweep_at);

        for (key, before) in visible_before {
            prop_assert_eq!(cache.get(&key, sweep_at), before);
        }
    }

    // Proxy stats arithmetic: for any request sequence, hits + misses
    // equals permitted requests, computes equals misses, and denials
    // equals rejected requests.
    #[test]
    fn prop_proxy_stats_accuracy(
        inputs in prop::collection::vec(key_strategy(), 1..50),
        blocked in key_strategy(),
    ) {
        let mut proxy = GatedCachingProxy::new(
            DenyList::new([blocked.clone()]),
            EchoSubject,
            Duration::from_millis(TEST_TTL_MS),
        );

        let mut expected_denials: u64 = 0;
        let mut expected_permitted: u64 = 0;

        for (i, input) in inputs.iter().enumerate() {
            // Monotone timestamps, all within one TTL window
            let now = (i as u64) * 10;
            if proxy.request_at(input, now).is_err() {
                expected_denials += 1;
            } else {
                expected_permitted += 1;
            }
            prop_assert_eq!(input == &blocked, proxy.request_at(input, now).is_err());
        }

        let stats = proxy.stats();
        prop_assert_eq!(stats.denials, expected_denials * 2);
        prop_assert_eq!(stats.hits + stats.misses, expected_permitted * 2);
        prop_assert_eq!(stats.computes, stats.misses, "every miss computes");
        prop_assert!(stats.cached_entries as u64 <= expected_permitted);
    }
}
