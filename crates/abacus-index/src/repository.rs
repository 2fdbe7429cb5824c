//! The index repository
//!
//! Per base, a lazily grown sequence 1, 2, 3, … with a text-keyed
//! lookup table for O(1) re-access. One coarse lock spans all bases so
//! growth is atomic; entries are never replaced or evicted, which is
//! what makes the pointer-identity guarantee possible.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use abacus_chain::Number;
use abacus_core::{AbacusError, AbacusResult};
use abacus_kernel::ArithmeticEngine;

#[derive(Default)]
struct BaseIndexes {
    /// `entries[k]` holds the value k+1
    entries: Vec<Arc<Number>>,
    /// formatted text -> position in `entries`
    by_text: HashMap<String, usize>,
}

/// Memoized 1-based indexes, partitioned per base
pub struct IndexRepository {
    engine: Arc<ArithmeticEngine>,
    state: Mutex<HashMap<u8, BaseIndexes>>,
}

impl IndexRepository {
    pub fn new(engine: Arc<ArithmeticEngine>) -> Self {
        IndexRepository {
            engine,
            state: Mutex::new(HashMap::new()),
        }
    }

    /// The cached index 1 of a base. Repeated calls return the same
    /// shared instance, not merely an equal value.
    pub fn first_index(&self, base: u8) -> AbacusResult<Arc<Number>> {
        let mut state = self.state.lock();
        let indexes = Self::base_indexes(&self.engine, &mut state, base)?;
        Ok(Arc::clone(&indexes.entries[0]))
    }

    /// The cached successor of an index.
    ///
    /// The argument must be a whole number of at least the base's first
    /// index. The backing sequence grows by `+1` steps until the
    /// successor exists; every intermediate value is cached on the way,
    /// and previously returned entries are never replaced.
    pub fn next_index(&self, index: &Number) -> AbacusResult<Arc<Number>> {
        let base = index.base();
        if index.is_infinite() {
            return Err(AbacusError::InvalidArgument(
                "an infinite number cannot be an index".into(),
            ));
        }
        let chain = index.chain()?;
        if chain.lo() < 0 {
            return Err(AbacusError::InvalidArgument(format!(
                "index {:?} is not a whole number",
                index
            )));
        }

        let mut state = self.state.lock();
        let one = Number::one(base)?;
        if index.sign().is_negative()
            || self.engine.compare(index, &one)? == std::cmp::Ordering::Less
        {
            return Err(AbacusError::InvalidArgument(format!(
                "index {:?} is below the first index of base {}",
                index, base
            )));
        }

        let key = self.engine.format(index)?;
        loop {
            let indexes = Self::base_indexes(&self.engine, &mut state, base)?;
            if let Some(&position) = indexes.by_text.get(&key) {
                if position + 1 < indexes.entries.len() {
                    return Ok(Arc::clone(&indexes.entries[position + 1]));
                }
            }
            Self::grow(&self.engine, indexes, &one)?;
        }
    }

    fn base_indexes<'a>(
        engine: &ArithmeticEngine,
        state: &'a mut HashMap<u8, BaseIndexes>,
        base: u8,
    ) -> AbacusResult<&'a mut BaseIndexes> {
        if !state.contains_key(&base) {
            let one = Number::one(base)?;
            let text = engine.format(&one)?;
            let mut indexes = BaseIndexes::default();
            indexes.entries.push(Arc::new(one));
            indexes.by_text.insert(text, 0);
            state.insert(base, indexes);
        }
        // the entry was just ensured above
        state.get_mut(&base).ok_or_else(|| {
            AbacusError::InvalidArgument(format!("no index partition for base {}", base))
        })
    }

    /// Extend the backing sequence by exactly one entry
    fn grow(
        engine: &ArithmeticEngine,
        indexes: &mut BaseIndexes,
        one: &Number,
    ) -> AbacusResult<()> {
        let last = Arc::clone(
            indexes
                .entries
                .last()
                .ok_or_else(|| AbacusError::InvalidArgument("empty index partition".into()))?,
        );
        let next = engine.add(&last, one)?;
        let text = engine.format(&next)?;
        indexes.by_text.insert(text, indexes.entries.len());
        indexes.entries.push(Arc::new(next));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> IndexRepository {
        IndexRepository::new(Arc::new(ArithmeticEngine::new().unwrap()))
    }

    #[test]
    fn test_first_index_is_one() {
        let repo = repository();
        let first = repo.first_index(10).unwrap();
        let engine = ArithmeticEngine::new().unwrap();
        assert_eq!(*first, engine.number(10, "1").unwrap());
    }

    #[test]
    fn test_first_index_is_instance_identical_across_calls() {
        let repo = repository();
        let a = repo.first_index(10).unwrap();
        let b = repo.first_index(10).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_successor_chain() {
        let repo = repository();
        let engine = ArithmeticEngine::new().unwrap();
        let first = repo.first_index(10).unwrap();
        let third = repo.next_index(&repo.next_index(&first).unwrap()).unwrap();
        assert_eq!(*third, engine.number(10, "3").unwrap());
    }

    #[test]
    fn test_successors_are_cached() {
        let repo = repository();
        let first = repo.first_index(10).unwrap();
        let a = repo.next_index(&first).unwrap();
        let b = repo.next_index(&first).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_below_first_index_rejected() {
        let repo = repository();
        let engine = ArithmeticEngine::new().unwrap();
        let zero = engine.number(10, "0").unwrap();
        assert!(matches!(
            repo.next_index(&zero),
            Err(AbacusError::InvalidArgument(_))
        ));
        let negative = engine.number(10, "-3").unwrap();
        assert!(repo.next_index(&negative).is_err());
    }

    #[test]
    fn test_fractional_index_rejected() {
        let repo = repository();
        let engine = ArithmeticEngine::new().unwrap();
        let fractional = engine.number(10, "1.5").unwrap();
        assert!(matches!(
            repo.next_index(&fractional),
            Err(AbacusError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_unseen_value_grows_sequence_to_reach_it() {
        let repo = repository();
        let engine = ArithmeticEngine::new().unwrap();
        let five = engine.number(10, "5").unwrap();
        let six = repo.next_index(&five).unwrap();
        assert_eq!(*six, engine.number(10, "6").unwrap());
        // the intermediate values were cached on the way up
        let two = repo.next_index(&repo.first_index(10).unwrap()).unwrap();
        assert_eq!(*two, engine.number(10, "2").unwrap());
    }

    #[test]
    fn test_partitioned_per_base() {
        let repo = repository();
        let engine = ArithmeticEngine::new().unwrap();
        let first_binary = repo.first_index(2).unwrap();
        let second_binary = repo.next_index(&first_binary).unwrap();
        // two in base 2 is "10"
        assert_eq!(*second_binary, engine.number(2, "10").unwrap());

        let first_decimal = repo.first_index(10).unwrap();
        assert_eq!(first_binary.base(), 2);
        assert_eq!(first_decimal.base(), 10);
    }

    #[test]
    fn test_concurrent_growth_stays_consistent() {
        let repo = repository();
        let engine = ArithmeticEngine::new().unwrap();
        let first = repo.first_index(10).unwrap();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let mut current = Arc::clone(&first);
                    for _ in 0..20 {
                        current = repo.next_index(&current).unwrap();
                    }
                    current
                });
            }
        });

        // after 20 steps from 1 every thread lands on 21, and the cache
        // has exactly one instance of it
        let twenty = engine.number(10, "20").unwrap();
        let a = repo.next_index(&twenty).unwrap();
        let b = repo.next_index(&twenty).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(*a, engine.number(10, "21").unwrap());
    }

    #[test]
    fn test_unsupported_base_rejected() {
        let repo = repository();
        assert!(repo.first_index(1).is_err());
        assert!(repo.first_index(66).is_err());
    }
}
