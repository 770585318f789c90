use std::sync::Arc;

use enum_map::EnumMap;
use parking_lot::RwLock;

use crate::common::feature::FeatureVector;
use crate::common::symbol::Symbol;
use crate::common::types::Handedness;
use crate::error::InvalidInputError;

/// Append-only library of learned symbols, partitioned by handedness.
///
/// Handles are cheap clones sharing one underlying store, so the per-frame
/// matching loop and a user-triggered learn call can run from different
/// threads. Readers always receive a stable snapshot; an in-flight insert is
/// never observable partially. The store holds no similarity logic, that
/// lives in [`matcher`](super::matcher).
#[derive(Clone, Debug, Default)]
pub struct SymbolStore {
    inner: Arc<RwLock<EnumMap<Handedness, Vec<Symbol>>>>,
}

impl SymbolStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new symbol. Duplicate names are allowed and retained as
    /// separate candidates.
    ///
    /// # Errors
    /// [`InvalidInputError::EmptyName`] for an empty name.
    pub fn insert(
        &self,
        name: &str,
        handedness: Handedness,
        features: FeatureVector,
    ) -> Result<(), InvalidInputError> {
        let symbol = Symbol::new(name, handedness, features)?;
        self.inner.write()[handedness].push(symbol);
        Ok(())
    }

    /// Snapshot of every symbol stored for one side, in insertion order.
    #[must_use]
    pub fn all(&self, handedness: Handedness) -> Vec<Symbol> {
        self.inner.read()[handedness].clone()
    }

    /// Total number of stored symbols across both sides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::feature::FEATURE_DIM;
    use strum::IntoEnumIterator;

    fn unit_vector(index: usize) -> FeatureVector {
        let mut values = vec![0.0; FEATURE_DIM];
        values[index] = 1.0;
        FeatureVector::from_vec(values).unwrap()
    }

    #[test]
    fn empty_name_is_rejected() {
        let store = SymbolStore::new();
        assert_eq!(
            store.insert("", Handedness::Left, unit_vector(0)),
            Err(InvalidInputError::EmptyName)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn sides_are_partitioned() {
        let store = SymbolStore::new();
        store.insert("wave", Handedness::Left, unit_vector(0)).unwrap();
        store.insert("fist", Handedness::Right, unit_vector(1)).unwrap();
        for side in Handedness::iter() {
            let symbols = store.all(side);
            assert_eq!(symbols.len(), 1);
            assert_eq!(symbols[0].handedness(), side);
        }
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn duplicate_names_are_both_retained() {
        let store = SymbolStore::new();
        store.insert("fist", Handedness::Right, unit_vector(0)).unwrap();
        store.insert("fist", Handedness::Right, unit_vector(1)).unwrap();
        assert_eq!(store.all(Handedness::Right).len(), 2);
    }

    #[test]
    fn snapshots_do_not_grow_after_later_inserts() {
        let store = SymbolStore::new();
        store.insert("one", Handedness::Right, unit_vector(0)).unwrap();
        let snapshot = store.all(Handedness::Right);
        store.insert("two", Handedness::Right, unit_vector(1)).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.all(Handedness::Right).len(), 2);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let store = SymbolStore::new();
        for name in ["a", "b", "c"] {
            store.insert(name, Handedness::Left, unit_vector(0)).unwrap();
        }
        let names: Vec<String> = store
            .all(Handedness::Left)
            .iter()
            .map(|symbol| symbol.name().to_owned())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
