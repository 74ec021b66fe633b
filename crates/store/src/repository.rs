//! Generic keyed repository.

use std::sync::{Mutex, MutexGuard};

/// An entity with a numeric key unique within its collection.
pub trait Keyed {
    type Key: Copy + Eq + Ord + From<u32> + Into<u32>;

    fn key(&self) -> Self::Key;
}

/// Capability set of a per-entity repository.
///
/// `update` is the atomic read-modify-write primitive: implementations run
/// the closure while holding the collection's lock, which is what makes
/// read-max-then-append id assignment safe under concurrency.
pub trait Repository<T: Keyed>: Send + Sync {
    fn get_all(&self) -> Vec<T>;

    fn get_by_id(&self, key: T::Key) -> Option<T>;

    /// Insert, or replace the record with the same key.
    fn upsert(&self, entity: T);

    /// Remove the record; returns whether anything was deleted.
    fn delete(&self, key: T::Key) -> bool;

    /// Run `f` on the raw collection under the collection lock.
    fn update<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<T>) -> R;

    /// Next sequential key: `max(existing) + 1`, or 1 when empty.
    ///
    /// Only meaningful inside an `update` closure or for collections this
    /// thread exclusively owns; racing callers must do the read and the
    /// write under one lock.
    fn next_key(items: &[T]) -> T::Key {
        items
            .iter()
            .map(|e| e.key().into())
            .max()
            .map(|max| max + 1)
            .unwrap_or(1)
            .into()
    }
}

/// In-memory repository: one mutex-guarded `Vec` per collection.
///
/// This preserves at least the serialization level of the original
/// whole-document read/rewrite per request, scoped down to one collection.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    items: Mutex<Vec<T>>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }
}

impl<T> InMemoryRepository<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    fn guard(&self) -> MutexGuard<'_, Vec<T>> {
        // Poisoning only records a panic elsewhere; the data is still valid.
        match self.items.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<T: Keyed + Clone + Send> Repository<T> for InMemoryRepository<T> {
    fn get_all(&self) -> Vec<T> {
        self.guard().clone()
    }

    fn get_by_id(&self, key: T::Key) -> Option<T> {
        self.guard().iter().find(|e| e.key() == key).cloned()
    }

    fn upsert(&self, entity: T) {
        let mut items = self.guard();
        match items.iter_mut().find(|e| e.key() == entity.key()) {
            Some(existing) => *existing = entity,
            None => items.push(entity),
        }
    }

    fn delete(&self, key: T::Key) -> bool {
        let mut items = self.guard();
        let before = items.len();
        items.retain(|e| e.key() != key);
        items.len() != before
    }

    fn update<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<T>) -> R,
    {
        f(&mut self.guard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Record {
        id: u32,
        label: &'static str,
    }

    impl Keyed for Record {
        type Key = u32;

        fn key(&self) -> u32 {
            self.id
        }
    }

    #[test]
    fn upsert_replaces_by_key() {
        let repo = InMemoryRepository::new(vec![Record { id: 1, label: "a" }]);
        repo.upsert(Record { id: 1, label: "b" });
        repo.upsert(Record { id: 2, label: "c" });

        assert_eq!(repo.get_all().len(), 2);
        assert_eq!(repo.get_by_id(1).unwrap().label, "b");
    }

    #[test]
    fn delete_reports_whether_anything_was_removed() {
        let repo = InMemoryRepository::new(vec![Record { id: 1, label: "a" }]);
        assert!(repo.delete(1));
        assert!(!repo.delete(1));
        assert!(repo.get_all().is_empty());
    }

    #[test]
    fn next_key_is_max_plus_one() {
        let items = vec![Record { id: 3, label: "a" }, Record { id: 7, label: "b" }];
        assert_eq!(InMemoryRepository::<Record>::next_key(&items), 8);
        assert_eq!(InMemoryRepository::<Record>::next_key(&[]), 1);
    }

    #[test]
    fn update_runs_under_the_collection_lock() {
        let repo = InMemoryRepository::new(Vec::<Record>::new());
        let assigned = repo.update(|items| {
            let id = InMemoryRepository::<Record>::next_key(items);
            items.push(Record { id, label: "x" });
            id
        });
        assert_eq!(assigned, 1);
        assert_eq!(repo.get_by_id(1).unwrap().label, "x");
    }

    #[test]
    fn concurrent_updates_assign_distinct_increasing_keys() {
        use std::sync::Arc;

        let repo = Arc::new(InMemoryRepository::new(Vec::<Record>::new()));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let repo = Arc::clone(&repo);
            handles.push(std::thread::spawn(move || {
                for _ in 0..50 {
                    repo.update(|items| {
                        let id = InMemoryRepository::<Record>::next_key(items);
                        items.push(Record { id, label: "x" });
                    });
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let mut keys: Vec<u32> = repo.get_all().iter().map(|r| r.id).collect();
        keys.sort_unstable();
        let expected: Vec<u32> = (1..=400).collect();
        assert_eq!(keys, expected);
    }
}
