pub mod seed;

use std::sync::{PoisonError, RwLock};

use thiserror::Error;

/// Anything stored in a [`Repository`] is addressed by a string id.
pub trait Record {
    fn id(&self) -> &str;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoError {
    #[error("record {0} not found")]
    NotFound(String),
}

/// Storage behind a resource's endpoints.
///
/// List handlers only call [`Repository::list`] and resolve the query on the
/// returned snapshot, so any backing store works without touching them.
pub trait Repository<T>: Send + Sync {
    /// Snapshot of every record, in storage order.
    fn list(&self) -> Vec<T>;

    fn get(&self, id: &str) -> Option<T>;

    /// Store a new record ahead of the existing ones.
    fn insert(&self, record: T) -> T;

    /// Replace the record with the same id.
    fn update(&self, record: T) -> Result<T, RepoError>;

    /// Remove a record, returning it.
    fn delete(&self, id: &str) -> Result<T, RepoError>;
}

/// Process-lifetime store backed by a `Vec`.
#[derive(Debug)]
pub struct MemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> MemoryRepository<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Repository<T> for MemoryRepository<T>
where
    T: Record + Clone + Send + Sync,
{
    fn list(&self) -> Vec<T> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn get(&self, id: &str) -> Option<T> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    fn insert(&self, record: T) -> T {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        records.insert(0, record.clone());
        record
    }

    fn update(&self, record: T) -> Result<T, RepoError> {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| RepoError::NotFound(record.id().to_string()))?;
        *slot = record.clone();
        Ok(record)
    }

    fn delete(&self, id: &str) -> Result<T, RepoError> {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;
        Ok(records.remove(index))
    }
}
