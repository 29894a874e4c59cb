#[cfg(test)]
mod tests {
    use assoc_array::AssocArray;
    use rand::{thread_rng, Rng};
    use rand_distr::Uniform;
    use std::collections::HashMap;

    type K = u64;
    type V = i64;

    #[test]
    fn random_workload_against_model() {
        let mut rng = thread_rng();
        // small key space so the workload hits plenty of overwrites
        let key_dist = Uniform::new(0 as K, 500);
        let value_dist = Uniform::new(V::MIN, V::MAX);

        let num = 20_000;
        let keys: Vec<K> = (&mut rng).sample_iter(key_dist).take(num).collect();
        let values: Vec<V> = (&mut rng).sample_iter(value_dist).take(num).collect();

        let mut array: AssocArray<K, V> = AssocArray::new();
        let mut model: HashMap<K, V> = HashMap::new();
        let mut order: Vec<K> = Vec::new();

        for i in 0..num {
            let previous = array.set(keys[i], values[i]);
            assert_eq!(previous, model.insert(keys[i], values[i]));
            if previous.is_none() {
                order.push(keys[i]);
            }
        }

        assert_eq!(array.len(), model.len());

        for (key, value) in &model {
            assert_eq!(array.get(key), Ok(value));
        }

        // keys above the key space were never inserted
        for key in 500..1_000 {
            assert!(!array.contains_key(&(key as K)));
            assert!(array.get(&(key as K)).is_err());
        }

        // insertion order survives any number of overwrites
        assert_eq!(array.keys().copied().collect::<Vec<_>>(), order);
    }

    #[test]
    fn random_removals_compact_in_order() {
        let mut rng = thread_rng();
        let value_dist = Uniform::new(V::MIN, V::MAX);

        let num = 1_000;
        let mut array: AssocArray<K, V> = AssocArray::new();
        let mut model: HashMap<K, V> = HashMap::new();
        let mut order: Vec<K> = Vec::new();

        for key in 0..num {
            let value = rng.sample(value_dist);
            array.set(key, value);
            model.insert(key, value);
            order.push(key);
        }

        // remove roughly half the keys, absent keys included
        for key in 0..num * 2 {
            if rng.gen_bool(0.25) {
                assert_eq!(array.remove(&key), model.remove(&key));
                order.retain(|&k| k != key);
            }
        }

        assert_eq!(array.len(), model.len());
        assert_eq!(array.keys().copied().collect::<Vec<_>>(), order);

        for (key, value) in &model {
            assert_eq!(array.get(key), Ok(value));
        }
    }

    #[test]
    fn clone_is_independent_under_mutation() {
        let mut rng = thread_rng();
        let key_dist = Uniform::new(0 as K, 200);
        let value_dist = Uniform::new(V::MIN, V::MAX);

        let mut array: AssocArray<K, V> = AssocArray::new();
        for _ in 0..2_000 {
            array.set(rng.sample(key_dist), rng.sample(value_dist));
        }

        let snapshot: Vec<(K, V)> = array
            .iter()
            .map(|entry| (entry.key, entry.value))
            .collect();

        let mut clone = array.clone();
        assert_eq!(clone, array);

        for _ in 0..2_000 {
            match rng.gen_range(0..3) {
                0 => {
                    clone.set(rng.sample(key_dist), rng.sample(value_dist));
                }
                1 => {
                    clone.remove(&rng.sample(key_dist));
                }
                _ => {
                    let key = rng.sample(key_dist);
                    if let Ok(value) = clone.get_mut(&key) {
                        *value = value.wrapping_add(1);
                    }
                }
            }
        }

        let after: Vec<(K, V)> = array
            .iter()
            .map(|entry| (entry.key, entry.value))
            .collect();
        assert_eq!(after, snapshot);
    }
}
