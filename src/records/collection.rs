//! Id-keyed record collection
//!
//! An ordered list of records with locally generated ids and a revision
//! counter that moves forward on every successful write.

use serde::{Deserialize, Serialize};

use super::error::{OrganizerError, OrganizerResult};

/// A record that lives in a [`Collection`]
pub trait Record: Clone {
    fn id(&self) -> u32;

    fn set_id(&mut self, id: u32);
}

/// Ordered, id-keyed records owned by a single page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection<T> {
    items: Vec<T>,
    #[serde(skip)]
    revision: u64,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }
}

impl<T: Record> Collection<T> {
    /// Wrap existing records; their ids are kept as-is
    pub fn new(items: Vec<T>) -> Self {
        Self { items, revision: 0 }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of successful writes since construction
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Id the next inserted record will receive: max id + 1, or 1 when empty
    pub fn next_id(&self) -> OrganizerResult<u32> {
        match self.items.iter().map(Record::id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(OrganizerError::IdSpaceExhausted),
        }
    }

    /// Append a record under a freshly assigned id
    pub fn insert(&mut self, mut item: T) -> OrganizerResult<u32> {
        let id = self.next_id()?;
        item.set_id(id);
        self.items.push(item);
        self.revision += 1;
        Ok(id)
    }

    /// Apply `update` to the record with `id`; returns false if absent
    pub fn replace(&mut self, id: u32, update: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                update(item);
                item.set_id(id);
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`, keeping the order of the rest
    pub fn remove(&mut self, id: u32) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        self.revision += 1;
        Some(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: u32,
        text: &'static str,
    }

    impl Record for Note {
        fn id(&self) -> u32 {
            self.id
        }

        fn set_id(&mut self, id: u32) {
            self.id = id;
        }
    }

    fn note(id: u32, text: &'static str) -> Note {
        Note { id, text }
    }

    #[test]
    fn test_next_id_empty() {
        let notes: Collection<Note> = Collection::default();
        assert_eq!(notes.next_id(), Ok(1));
    }

    #[test]
    fn test_insert_assigns_id_above_max() {
        let mut notes = Collection::new(vec![note(4, "a"), note(9, "b"), note(2, "c")]);
        let id = notes.insert(note(0, "d")).unwrap();

        assert_eq!(id, 10);
        assert_eq!(notes.len(), 4);
        assert_eq!(notes.get(10).map(|n| n.text), Some("d"));
        assert_eq!(notes.revision(), 1);
    }

    #[test]
    fn test_insert_at_max_id_fails() {
        let mut notes = Collection::new(vec![note(u32::MAX, "last"), note(3, "a")]);
        let before = notes.clone();

        assert_eq!(notes.next_id(), Err(OrganizerError::IdSpaceExhausted));
        assert_eq!(notes.insert(note(0, "b")), Err(OrganizerError::IdSpaceExhausted));
        assert_eq!(notes, before);
        assert_eq!(notes.revision(), 0);
    }

    #[test]
    fn test_replace_missing_is_noop() {
        let mut notes = Collection::new(vec![note(1, "a")]);
        let before = notes.clone();

        assert!(!notes.replace(7, |n| n.text = "changed"));
        assert_eq!(notes, before);
        assert_eq!(notes.revision(), 0);
    }

    #[test]
    fn test_replace_keeps_id() {
        let mut notes = Collection::new(vec![note(1, "a"), note(2, "b")]);
        assert!(notes.replace(2, |n| {
            n.id = 99;
            n.text = "z";
        }));

        assert_eq!(notes.get(2).map(|n| n.text), Some("z"));
        assert!(!notes.contains(99));
    }

    #[test]
    fn test_remove() {
        let mut notes = Collection::new(vec![note(1, "a"), note(2, "b"), note(3, "c")]);

        assert_eq!(notes.remove(2).map(|n| n.text), Some("b"));
        assert_eq!(notes.items(), &[note(1, "a"), note(3, "c")]);

        assert!(notes.remove(2).is_none());
        assert_eq!(notes.len(), 2);
        assert_eq!(notes.revision(), 1);
    }
}
