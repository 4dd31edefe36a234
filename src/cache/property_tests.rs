//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the cache's mapping semantics, case policy, and
//! lazy-eviction bookkeeping over generated operation sequences.

use proptest::prelude::*;
use std::thread::sleep;
use std::time::Duration;

use crate::cache::ExpiringCache;

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates cache keys (non-empty, word-ish)
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}"
}

/// Generates cache values
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,128}"
}

/// A single cache operation for sequence testing
#[derive(Debug, Clone)]
enum CacheOp {
    Insert { key: String, value: String },
    Get { key: String },
    Contains { key: String },
    Remove { key: String },
    Len,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Insert { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Contains { key }),
        key_strategy().prop_map(|key| CacheOp::Remove { key }),
        Just(CacheOp::Len),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a pair and reading it back before expiry returns the exact
    // stored value.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut cache = ExpiringCache::new(TEST_TTL);

        cache.insert(&key, value.clone());
        prop_assert_eq!(cache.get(&key), Some(&value));
    }

    // Storing V1 then V2 under the same key leaves a single entry holding V2.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut cache = ExpiringCache::new(TEST_TTL);

        cache.insert(&key, value1);
        cache.insert(&key, value2.clone());

        prop_assert_eq!(cache.get(&key), Some(&value2));
        prop_assert_eq!(cache.len(), 1);
    }

    // After a successful remove, the key reads as absent and a second remove
    // is an error.
    #[test]
    fn prop_remove_removes_entry(key in key_strategy(), value in value_strategy()) {
        let mut cache = ExpiringCache::new(TEST_TTL);

        cache.insert(&key, value);
        prop_assert!(cache.remove(&key).is_ok());
        prop_assert_eq!(cache.get(&key), None);
        prop_assert!(cache.remove(&key).is_err());
    }

    // In case-insensitive mode any casing of the key reaches the same entry.
    #[test]
    fn prop_case_insensitive_equivalence(key in key_strategy(), value in value_strategy()) {
        let mut cache = ExpiringCache::case_insensitive(TEST_TTL);

        cache.insert(&key, value.clone());
        prop_assert_eq!(cache.get(&key.to_uppercase()), Some(&value));
        prop_assert_eq!(cache.get(&key.to_lowercase()), Some(&value));
        prop_assert!(cache.contains_key(&key));
        prop_assert_eq!(cache.len(), 1);
    }

    // For any operation sequence under a long TTL (nothing expires):
    // - get-statistics match a HashMap model
    // - len() agrees with the model and with raw_len() after the scan
    #[test]
    fn prop_matches_map_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut cache = ExpiringCache::new(TEST_TTL);
        let mut model = std::collections::HashMap::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Insert { key, value } => {
                    model.insert(key.clone(), value.clone());
                    cache.insert(&key, value);
                }
                CacheOp::Get { key } => {
                    let got = cache.get(&key);
                    prop_assert_eq!(got, model.get(&key));
                    match got {
                        Some(_) => expected_hits += 1,
                        None => expected_misses += 1,
                    }
                }
                CacheOp::Contains { key } => {
                    prop_assert_eq!(cache.contains_key(&key), model.contains_key(&key));
                }
                CacheOp::Remove { key } => {
                    prop_assert_eq!(cache.remove(&key).is_ok(), model.remove(&key).is_some());
                }
                CacheOp::Len => {
                    prop_assert_eq!(cache.len(), model.len());
                }
            }
        }

        prop_assert_eq!(cache.stats().hits, expected_hits);
        prop_assert_eq!(cache.stats().misses, expected_misses);
        prop_assert_eq!(cache.len(), model.len());
        prop_assert_eq!(cache.raw_len(), model.len());
    }
}

// Separate proptest block with fewer cases for time-sensitive TTL tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // Entries read after the TTL has elapsed are gone, and the read itself
    // evicts them from raw storage.
    #[test]
    fn prop_ttl_lazy_eviction(
        keys in prop::collection::hash_set(key_strategy(), 1..5),
        value in value_strategy()
    ) {
        let ttl = Duration::from_millis(80);
        let mut cache = ExpiringCache::new(ttl);

        for key in &keys {
            cache.insert(key, value.clone());
            prop_assert_eq!(cache.get(key), Some(&value));
        }

        sleep(ttl + Duration::from_millis(40));

        // Untouched stale entries still occupy raw storage.
        prop_assert_eq!(cache.raw_len(), keys.len());

        for key in &keys {
            prop_assert_eq!(cache.get(key), None);
        }
        prop_assert_eq!(cache.raw_len(), 0);
        prop_assert_eq!(cache.len(), 0);
    }
}
