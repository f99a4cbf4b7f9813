//! Shared contract for id-keyed record lists.
//!
//! # Responsibility
//! - Provide the uniform upsert/remove/find operations every tab uses.
//!
//! # Invariants
//! - `upsert` replaces in place when the id already exists, keeping the
//!   record at its original position and leaving siblings untouched.
//! - `remove` drops exactly the matching record.
//! - Lookup is a first-match linear scan; ids are unique per collection so
//!   first match is the only match.

use crate::model::RecordId;

/// Implemented by every record addressable inside a collection.
pub trait Identified {
    /// Stable id of this record.
    fn record_id(&self) -> RecordId;
}

/// Replaces the record with the same id in place, or appends it.
///
/// Returns `true` when an existing record was replaced.
pub fn upsert<T: Identified>(items: &mut Vec<T>, record: T) -> bool {
    match items.iter().position(|item| item.record_id() == record.record_id()) {
        Some(index) => {
            items[index] = record;
            true
        }
        None => {
            items.push(record);
            false
        }
    }
}

/// Removes the record with the given id.
///
/// Returns `true` when a record was removed.
pub fn remove<T: Identified>(items: &mut Vec<T>, id: RecordId) -> bool {
    match items.iter().position(|item| item.record_id() == id) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}

/// Finds the record with the given id.
pub fn find<T: Identified>(items: &[T], id: RecordId) -> Option<&T> {
    items.iter().find(|item| item.record_id() == id)
}

/// Finds the record with the given id for mutation.
pub fn find_mut<T: Identified>(items: &mut [T], id: RecordId) -> Option<&mut T> {
    items.iter_mut().find(|item| item.record_id() == id)
}

/// Returns whether the collection contains the given id.
pub fn contains<T: Identified>(items: &[T], id: RecordId) -> bool {
    find(items, id).is_some()
}

#[cfg(test)]
mod tests {
    use super::{remove, upsert, Identified};
    use crate::model::{new_record_id, RecordId};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Probe {
        id: RecordId,
        label: &'static str,
    }

    impl Identified for Probe {
        fn record_id(&self) -> RecordId {
            self.id
        }
    }

    #[test]
    fn upsert_replaces_in_place_and_keeps_position() {
        let a = Probe { id: new_record_id(), label: "a" };
        let b = Probe { id: new_record_id(), label: "b" };
        let c = Probe { id: new_record_id(), label: "c" };
        let mut items = vec![a.clone(), b.clone(), c.clone()];

        let replaced = upsert(&mut items, Probe { id: b.id, label: "b2" });
        assert!(replaced);
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].label, "b2");
        assert_eq!(items[0], a);
        assert_eq!(items[2], c);
    }

    #[test]
    fn upsert_appends_exactly_one_new_record() {
        let mut items = vec![Probe { id: new_record_id(), label: "a" }];
        let appended_id = new_record_id();

        let replaced = upsert(&mut items, Probe { id: appended_id, label: "new" });
        assert!(!replaced);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, appended_id);
    }

    #[test]
    fn remove_drops_only_the_target() {
        let a = Probe { id: new_record_id(), label: "a" };
        let b = Probe { id: new_record_id(), label: "b" };
        let mut items = vec![a.clone(), b.clone()];

        assert!(remove(&mut items, a.id));
        assert_eq!(items, vec![b]);
        assert!(!remove(&mut items, a.id));
    }
}
