//! Property tests for both tables.
//!
//! 1. **Uniqueness**: every distinct key added is retrievable and `len` counts the
//!    successful adds.
//! 2. **Duplicate rejection**: re-adding a stored key fails and changes nothing.
//! 3. **Tombstones**: after random removals, every surviving key is still found
//!    and every removed key is gone.

use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

use crate::{ChainingTable, HashMethod, ProbingMode, ProbingTable, TableError};

fn any_method() -> impl Strategy<Value = HashMethod> {
    prop::sample::select(HashMethod::ALL.to_vec())
}

fn any_mode() -> impl Strategy<Value = ProbingMode> {
    prop::sample::select(ProbingMode::ALL.to_vec())
}

fn key_sets() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[a-z0-9]{1,12}", 1..60)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn chaining_distinct_keys_retrievable(keys in key_sets(), method in any_method(), capacity in 1usize..40) {
        let mut ht = ChainingTable::new(capacity, method).unwrap();
        for (i, k) in keys.iter().enumerate() {
            ht.add(k.clone(), i).unwrap();
        }
        prop_assert_eq!(ht.len(), keys.len());
        for (i, k) in keys.iter().enumerate() {
            prop_assert_eq!(ht.get(k), Some(&i));
            prop_assert_eq!(ht.contains_key(k), Ok(true));
        }
        prop_assert_eq!(ht.chain_lengths().sum::<usize>(), keys.len());
    }

    #[test]
    fn chaining_duplicates_rejected(keys in key_sets(), method in any_method()) {
        let mut ht = ChainingTable::new(13, method).unwrap();
        for k in &keys {
            ht.add(k.clone(), 0u8).unwrap();
        }
        for k in &keys {
            prop_assert_eq!(ht.add(k.clone(), 1u8), Err(TableError::DuplicateKey));
        }
        prop_assert_eq!(ht.len(), keys.len());
        prop_assert!(ht.values().all(|v| *v == 0));
    }

    #[test]
    fn probing_distinct_keys_retrievable(keys in key_sets(), primary in any_method(), mode in any_mode()) {
        let mut ht = ProbingTable::new(127, mode, primary, None).unwrap();
        let mut stored = BTreeMap::new();
        for (i, k) in keys.iter().enumerate() {
            match ht.add(k.clone(), i) {
                Ok(()) => { stored.insert(k.clone(), i); }
                Err(TableError::ProbeExhausted { .. }) => {}
                Err(e) => prop_assert!(false, "unexpected error: {}", e),
            }
        }
        prop_assert_eq!(ht.len(), stored.len());
        for (k, v) in &stored {
            prop_assert_eq!(ht.get(k), Some(v));
        }
        for (k, _) in &stored {
            prop_assert_eq!(ht.add(k.clone(), 0), Err(TableError::DuplicateKey));
        }
        prop_assert_eq!(ht.len(), stored.len());
    }

    #[test]
    fn probing_removals_keep_survivors(
        keys in key_sets(),
        mode in any_mode(),
        remove_mask in prop::collection::vec(any::<bool>(), 60),
    ) {
        let mut ht = ProbingTable::new(61, mode, HashMethod::Division, None).unwrap();
        let mut stored = Vec::new();
        for k in &keys {
            if ht.add(k.clone(), k.len()).is_ok() {
                stored.push(k.clone());
            }
        }

        let (removed, kept): (Vec<_>, Vec<_>) = stored
            .iter()
            .enumerate()
            .partition(|(i, _)| remove_mask[*i]);
        for (_, k) in &removed {
            prop_assert_eq!(ht.remove(k), Ok(true));
        }

        prop_assert_eq!(ht.len(), kept.len());
        prop_assert_eq!(ht.tombstones(), removed.len());
        for (_, k) in &kept {
            prop_assert_eq!(ht.get(k), Some(&k.len()));
        }
        for (_, k) in &removed {
            prop_assert_eq!(ht.get(k), None);
            prop_assert_eq!(ht.remove(k), Ok(false));
        }
    }
}
