//  STATE.rs
//    by Lut99
//
//  Created:
//    14 Feb 2023, 13:31:02
//  Last edited:
//    15 Feb 2023, 09:58:45
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the world state the contracts run against: an ordered
//!   key/value store with ranged reads.
//

use std::collections::BTreeMap;
use std::ops::Bound;

use serde::{Deserialize, Serialize};

pub use crate::errors::StateError as Error;


/***** LIBRARY *****/
/// Defines the interface of the world state.
///
/// Keys are ordered lexicographically; ranged reads are half-open (`[start, end)`), where an empty bound means unbounded on that side.
pub trait State {
    /// Stores the given value under the given key, overwriting any previous value.
    ///
    /// # Arguments
    /// - `key`: The key to store the value under.
    /// - `value`: The (serialized) value to store.
    ///
    /// # Errors
    /// This function errors if the backing store failed to write the entry.
    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), Error>;

    /// Retrieves the value stored under the given key.
    ///
    /// # Arguments
    /// - `key`: The key to look up.
    ///
    /// # Returns
    /// The stored value, or else `None` if nothing is stored under the key.
    ///
    /// # Errors
    /// This function errors if the backing store failed to read the entry.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, Error>;

    /// Retrieves all entries whose keys fall in the given half-open range, in key order.
    ///
    /// # Arguments
    /// - `start`: The inclusive lower bound, or the empty string for no lower bound.
    /// - `end`: The exclusive upper bound, or the empty string for no upper bound.
    ///
    /// # Returns
    /// The matching (key, value) pairs, ordered by key.
    ///
    /// # Errors
    /// This function errors if the backing store failed to iterate.
    fn range(&self, start: &str, end: &str) -> Result<Vec<(String, Vec<u8>)>, Error>;
}



/// Defines an in-memory world state.
///
/// Contracts see the same interface as in the deployed network, but the entries live in a map that callers may snapshot to disk with serde.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MemoryState {
    /// The stored entries, ordered by key.
    entries : BTreeMap<String, Vec<u8>>,
}

impl MemoryState {
    /// Constructor for the MemoryState that initializes it empty.
    ///
    /// # Returns
    /// A new MemoryState instance without any entries.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries : BTreeMap::new(),
        }
    }

    /// Returns the number of stored entries.
    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Returns whether no entries are stored at all.
    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl State for MemoryState {
    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), Error> {
        self.entries.insert(key.into(), value);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn range(&self, start: &str, end: &str) -> Result<Vec<(String, Vec<u8>)>, Error> {
        // Translate the empty-string convention into map bounds
        let start: Bound<&str> = if start.is_empty() { Bound::Unbounded } else { Bound::Included(start) };
        let end: Bound<&str> = if end.is_empty() { Bound::Unbounded } else { Bound::Excluded(end) };

        Ok(self.entries.range::<str, _>((start, end)).map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;


    /// Writing an entry and reading it back must yield the same bytes.
    #[test]
    fn put_then_get() {
        let mut state = MemoryState::new();
        assert!(state.is_empty());

        state.put("1", b"one".to_vec()).unwrap();
        state.put("2", b"two".to_vec()).unwrap();
        assert_eq!(state.len(), 2);

        assert_eq!(state.get("1").unwrap(), Some(b"one".to_vec()));
        assert_eq!(state.get("3").unwrap(), None);

        // Overwrites replace, not duplicate
        state.put("1", b"uno".to_vec()).unwrap();
        assert_eq!(state.len(), 2);
        assert_eq!(state.get("1").unwrap(), Some(b"uno".to_vec()));
    }

    /// Ranged reads are half-open, ordered and treat empty bounds as unbounded.
    #[test]
    fn range_bounds() {
        let mut state = MemoryState::new();
        for key in [ "a", "b", "c", "d" ] {
            state.put(key, key.as_bytes().to_vec()).unwrap();
        }

        let keys = |start: &str, end: &str| -> Vec<String> {
            state.range(start, end).unwrap().into_iter().map(|(k, _)| k).collect()
        };

        assert_eq!(keys("", ""), vec![ "a", "b", "c", "d" ]);
        assert_eq!(keys("b", ""), vec![ "b", "c", "d" ]);
        assert_eq!(keys("", "c"), vec![ "a", "b" ]);
        assert_eq!(keys("b", "d"), vec![ "b", "c" ]);
        assert_eq!(keys("c", "c"), Vec::<String>::new());
    }
}
