//! Owned in-memory store for one record category.
//!
//! Implements `RecordStoreTrait`: CRUD over an ordered `Vec<T>`, change
//! notifications for subscribers, and an optional retention cap.

use log::debug;

use crate::types::errors::StoreError;
use crate::types::record::{Activatable, Category, Record};

/// A change applied to a store, delivered to every subscriber.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    Added { category: Category, id: String },
    Updated { category: Category, id: String },
    Removed { category: Category, id: String },
    /// Records dropped by the retention cap.
    Trimmed { category: Category, count: usize },
    Cleared { category: Category },
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&StoreEvent) + Send + Sync>;

/// Trait defining record store operations.
pub trait RecordStoreTrait<T: Record> {
    /// Appends a record. Returns its ID.
    fn add(&mut self, record: T) -> Result<String, StoreError>;
    /// Inserts a record at the front (newest first). Returns its ID.
    fn insert_first(&mut self, record: T) -> Result<String, StoreError>;
    fn get(&self, id: &str) -> Option<&T>;
    fn list(&self) -> &[T];
    /// Applies `f` to the record. Changing the record's ID is rejected and
    /// leaves the record untouched.
    fn update<F: FnOnce(&mut T)>(&mut self, id: &str, f: F) -> Result<(), StoreError>;
    fn remove(&mut self, id: &str) -> Result<T, StoreError>;
    fn clear(&mut self);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// In-memory store holding the records of one category.
pub struct RecordStore<T: Record> {
    records: Vec<T>,
    max_len: Option<usize>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<T: Record> RecordStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            max_len: None,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Creates a store pre-filled with `records`, in the given order.
    /// Fails on the first duplicate ID.
    pub fn from_records(records: Vec<T>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for record in records {
            store.add(record)?;
        }
        Ok(store)
    }

    /// Creates a store that keeps at most `max_len` records.
    pub fn with_retention(max_len: usize) -> Self {
        let mut store = Self::new();
        store.max_len = Some(max_len);
        store
    }

    /// Sets or clears the retention cap. A new, smaller cap drops the
    /// trailing records immediately.
    pub fn set_retention(&mut self, max_len: Option<usize>) {
        self.max_len = max_len;
        self.trim_back();
    }

    pub fn retention(&self) -> Option<usize> {
        self.max_len
    }

    /// Registers a callback invoked after every mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn notify(&self, event: StoreEvent) {
        for (_, subscriber) in &self.subscribers {
            subscriber(&event);
        }
    }

    fn find_index(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn ensure_unique(&self, id: &str) -> Result<(), StoreError> {
        if self.find_index(id).is_some() {
            return Err(StoreError::DuplicateId(id.to_string()));
        }
        Ok(())
    }

    /// Drops records past the cap from the back (the oldest when the store
    /// is kept newest first).
    fn trim_back(&mut self) {
        if let Some(max) = self.max_len {
            if self.records.len() > max {
                let count = self.records.len() - max;
                self.records.truncate(max);
                debug!("{} store trimmed {} record(s)", T::CATEGORY, count);
                self.notify(StoreEvent::Trimmed {
                    category: T::CATEGORY,
                    count,
                });
            }
        }
    }

    /// Drops records past the cap from the front (the oldest when the store
    /// is kept in insertion order).
    fn trim_front(&mut self) {
        if let Some(max) = self.max_len {
            if self.records.len() > max {
                let count = self.records.len() - max;
                self.records.drain(..count);
                debug!("{} store trimmed {} record(s)", T::CATEGORY, count);
                self.notify(StoreEvent::Trimmed {
                    category: T::CATEGORY,
                    count,
                });
            }
        }
    }
}

impl<T: Record + Activatable> RecordStore<T> {
    /// Flips the record's active flag. Returns the new state.
    pub fn toggle_active(&mut self, id: &str) -> Result<bool, StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let active = !record.is_active();
        record.set_active(active);
        self.notify(StoreEvent::Updated {
            category: T::CATEGORY,
            id: id.to_string(),
        });
        Ok(active)
    }

    pub fn active(&self) -> Vec<&T> {
        self.records.iter().filter(|r| r.is_active()).collect()
    }
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordStoreTrait<T> for RecordStore<T> {
    fn add(&mut self, record: T) -> Result<String, StoreError> {
        let id = record.id().to_string();
        self.ensure_unique(&id)?;
        self.records.push(record);
        debug!("{} store added {}", T::CATEGORY, id);
        self.notify(StoreEvent::Added {
            category: T::CATEGORY,
            id: id.clone(),
        });
        self.trim_front();
        Ok(id)
    }

    fn insert_first(&mut self, record: T) -> Result<String, StoreError> {
        let id = record.id().to_string();
        self.ensure_unique(&id)?;
        self.records.insert(0, record);
        debug!("{} store inserted {} at front", T::CATEGORY, id);
        self.notify(StoreEvent::Added {
            category: T::CATEGORY,
            id: id.clone(),
        });
        self.trim_back();
        Ok(id)
    }

    fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn list(&self) -> &[T] {
        &self.records
    }

    fn update<F: FnOnce(&mut T)>(&mut self, id: &str, f: F) -> Result<(), StoreError> {
        let idx = self
            .find_index(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let mut updated = self.records[idx].clone();
        f(&mut updated);
        if updated.id() != id {
            return Err(StoreError::IdChanged(id.to_string()));
        }

        self.records[idx] = updated;
        debug!("{} store updated {}", T::CATEGORY, id);
        self.notify(StoreEvent::Updated {
            category: T::CATEGORY,
            id: id.to_string(),
        });
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<T, StoreError> {
        let idx = self
            .find_index(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let record = self.records.remove(idx);
        debug!("{} store removed {}", T::CATEGORY, id);
        self.notify(StoreEvent::Removed {
            category: T::CATEGORY,
            id: id.to_string(),
        });
        Ok(record)
    }

    fn clear(&mut self) {
        self.records.clear();
        self.notify(StoreEvent::Cleared {
            category: T::CATEGORY,
        });
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
