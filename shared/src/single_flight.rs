//! Per-entity guards allowing at most one outstanding mutating request.

use std::collections::HashSet;
use std::hash::Hash;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Предыдущий запрос ещё выполняется")]
pub struct AlreadyInFlight;

/// Guard for a single entity (one card, one form, one list).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleFlight {
    busy: bool,
}

impl SingleFlight {
    /// Claim the slot. Fails while a previous request has not settled.
    pub fn begin(&mut self) -> Result<(), AlreadyInFlight> {
        if self.busy {
            return Err(AlreadyInFlight);
        }
        self.busy = true;
        Ok(())
    }

    /// Release the slot once the request settled, successfully or not.
    pub fn finish(&mut self) {
        self.busy = false;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

/// Guards keyed by entity id, e.g. the on-shift checkbox of each list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedSingleFlight<K: Eq + Hash> {
    busy: HashSet<K>,
}

impl<K: Eq + Hash> Default for KeyedSingleFlight<K> {
    fn default() -> Self {
        Self {
            busy: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> KeyedSingleFlight<K> {
    pub fn begin(&mut self, key: K) -> Result<(), AlreadyInFlight> {
        if self.busy.insert(key) {
            Ok(())
        } else {
            Err(AlreadyInFlight)
        }
    }

    pub fn finish(&mut self, key: &K) {
        self.busy.remove(key);
    }

    pub fn is_busy(&self, key: &K) -> bool {
        self.busy.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_flight_rejects_duplicate_until_finished() {
        let mut guard = SingleFlight::default();
        assert!(!guard.is_busy());

        guard.begin().unwrap();
        assert!(guard.is_busy());
        assert_eq!(guard.begin(), Err(AlreadyInFlight));

        guard.finish();
        assert!(!guard.is_busy());
        assert!(guard.begin().is_ok());
    }

    #[test]
    fn test_keyed_guards_are_independent() {
        let mut guards = KeyedSingleFlight::default();
        guards.begin(1_i64).unwrap();
        guards.begin(2).unwrap();
        assert_eq!(guards.begin(1), Err(AlreadyInFlight));

        guards.finish(&1);
        assert!(!guards.is_busy(&1));
        assert!(guards.is_busy(&2));
        assert!(guards.begin(1).is_ok());
    }
}
