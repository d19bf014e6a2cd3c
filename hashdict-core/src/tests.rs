//! Integration tests for hashdict-core

use crate::hashing::HashMethod;

/// First `n` keys (in `key0`, `key1`, … order) whose `method` index in `size` is `home`
fn colliding_keys(method: HashMethod, home: usize, size: usize, n: usize) -> Vec<String> {
    (0..)
        .map(|i| format!("key{}", i))
        .filter(|k| method.index(k, size) == home)
        .take(n)
        .collect()
}

#[cfg(test)]
mod integration_tests {
    use super::colliding_keys;
    use crate::{
        ChainingTable, HashFunction, HashMethod, HashSource, ProbingMode, ProbingTable,
        Reduction, TableError,
    };

    #[test]
    fn test_basic_workflow() {
        let mut ht = ChainingTable::new(1000, HashMethod::Multiplicative).unwrap();

        for i in 0..100 {
            ht.add(format!("key{}", i), format!("value{}", i)).unwrap();
        }

        assert_eq!(ht.len(), 100);
        assert!(ht.fill_factor() < 0.2);
        assert_eq!(ht.chain_lengths().sum::<usize>(), 100);
        for i in 0..100 {
            assert_eq!(ht.get(&format!("key{}", i)), Some(&format!("value{}", i)));
        }
    }

    #[test]
    fn test_round_trip_every_combination() {
        for mode in ProbingMode::ALL {
            for primary in HashMethod::ALL {
                let mut ht = ProbingTable::new(257, mode, primary, None).unwrap();
                let mut stored = Vec::new();
                for i in 0..64 {
                    let key = format!("k{}", i);
                    match ht.add(key.clone(), i) {
                        Ok(()) => stored.push((key, i)),
                        // double hashing can pick an unusable step for some keys
                        Err(TableError::ProbeExhausted { .. }) => {}
                        Err(e) => panic!("{} / {}: {}", mode, primary, e),
                    }
                }
                assert_eq!(ht.len(), stored.len());
                for (key, value) in &stored {
                    assert_eq!(ht.get(key), Some(value), "{} / {}", mode, primary);
                }
            }
        }

        for method in HashMethod::ALL {
            let mut ht = ChainingTable::new(31, method).unwrap();
            for i in 0..64 {
                ht.add(format!("k{}", i), i).unwrap();
            }
            for i in 0..64 {
                assert_eq!(ht.get(&format!("k{}", i)), Some(&i), "{}", method);
            }
        }
    }

    #[test]
    fn test_linear_and_quadratic_store_everything() {
        for mode in [ProbingMode::Linear, ProbingMode::Quadratic] {
            let mut ht = ProbingTable::new(101, mode, HashMethod::Sha256, None).unwrap();
            for i in 0..40 {
                ht.add(format!("k{}", i), i).unwrap();
            }
            assert_eq!(ht.len(), 40);
        }
    }

    #[test]
    fn test_remove_then_lookup_through_collision() {
        for mode in ProbingMode::ALL {
            let keys = colliding_keys(HashMethod::Division, 2, 17, 2);
            let secondary = HashFunction::new(HashSource::Fnv, Reduction::Division);
            let mut ht = ProbingTable::new(17, mode, HashMethod::Division, Some(secondary)).unwrap();

            ht.add(keys[0].clone(), "v1").unwrap();
            match ht.add(keys[1].clone(), "v2") {
                Ok(()) => {}
                Err(TableError::ProbeExhausted { .. }) => continue,
                Err(e) => panic!("{}", e),
            }

            assert_eq!(ht.remove(&keys[0]), Ok(true));
            assert_eq!(ht.get(&keys[1]), Some(&"v2"), "{}", mode);
            assert_eq!(ht.get(&keys[0]), None);
        }
    }

    #[test]
    fn test_fill_to_capacity() {
        let mut ht = ProbingTable::new(50, ProbingMode::Linear, HashMethod::Hmac, None).unwrap();
        for i in 0..49 {
            ht.add(i, i).unwrap();
        }
        ht.add(49, 49).unwrap();
        assert_eq!(ht.add(50, 50), Err(TableError::TableFull { capacity: 50 }));
        assert_eq!(ht.len(), 50);

        assert_eq!(ht.remove(&10), Ok(true));
        ht.add(50, 50).unwrap();
        assert_eq!(ht.get(&50), Some(&50));
    }

    #[test]
    fn test_chain_statistics_scenario() {
        let mut keys = colliding_keys(HashMethod::Division, 0, 5, 3);
        keys.extend(colliding_keys(HashMethod::Division, 1, 5, 1));
        keys.extend(colliding_keys(HashMethod::Division, 2, 5, 1));

        let mut ht = ChainingTable::new(5, HashMethod::Division).unwrap();
        for k in keys {
            ht.add(k, ()).unwrap();
        }
        assert_eq!(ht.max_chain_length(), Some(3));
        assert_eq!(ht.min_chain_length(), Some(1));
        assert_eq!(ht.chain_lengths().collect::<Vec<_>>(), vec![3, 1, 1]);
    }

    #[test]
    fn test_clustering_differs_by_mode() {
        // one hot home slot: linear piles everything into a single run
        let keys = colliding_keys(HashMethod::Division, 0, 64, 8);
        let mut linear = ProbingTable::new(64, ProbingMode::Linear, HashMethod::Division, None).unwrap();
        let mut quadratic =
            ProbingTable::new(64, ProbingMode::Quadratic, HashMethod::Division, None).unwrap();
        for k in &keys {
            linear.add(k.clone(), ()).unwrap();
            quadratic.add(k.clone(), ()).unwrap();
        }
        assert_eq!(linear.max_cluster_length(), 8);
        assert!(quadratic.max_cluster_length() < 8);
    }
}
