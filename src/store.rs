use crate::models::{AppData, Subject};
use crate::storage::{load_data, persist_data};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode subjects: {0}")]
    Json(#[from] serde_json::Error),
}

/// Typed access to the subject collection.
///
/// Listing preserves insertion order. `put` replaces a subject with the same
/// id in place and appends otherwise.
#[async_trait]
pub trait SubjectStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Subject>, StoreError>;
    async fn get(&self, id: Uuid) -> Result<Option<Subject>, StoreError>;
    async fn put(&self, subject: Subject) -> Result<(), StoreError>;
    /// Replaces an existing subject and returns the previous version. Unknown
    /// ids are left absent and yield `None`.
    async fn update(&self, subject: Subject) -> Result<Option<Subject>, StoreError>;
    /// Returns the removed subject, if there was one.
    async fn delete(&self, id: Uuid) -> Result<Option<Subject>, StoreError>;
    async fn clear(&self) -> Result<(), StoreError>;
}

impl AppData {
    fn find(&self, id: Uuid) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.id == id)
    }

    fn upsert(&mut self, subject: Subject) {
        match self.subjects.iter_mut().find(|existing| existing.id == subject.id) {
            Some(existing) => *existing = subject,
            None => self.subjects.push(subject),
        }
    }

    fn replace(&mut self, subject: Subject) -> Option<Subject> {
        let existing = self
            .subjects
            .iter_mut()
            .find(|existing| existing.id == subject.id)?;
        Some(std::mem::replace(existing, subject))
    }

    fn remove(&mut self, id: Uuid) -> Option<Subject> {
        let index = self.subjects.iter().position(|subject| subject.id == id)?;
        Some(self.subjects.remove(index))
    }
}

#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<AppData>,
}

impl MemoryStore {
    pub fn new(data: AppData) -> Self {
        Self {
            data: Mutex::new(data),
        }
    }
}

#[async_trait]
impl SubjectStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Subject>, StoreError> {
        Ok(self.data.lock().await.subjects.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Subject>, StoreError> {
        Ok(self.data.lock().await.find(id).cloned())
    }

    async fn put(&self, subject: Subject) -> Result<(), StoreError> {
        self.data.lock().await.upsert(subject);
        Ok(())
    }

    async fn update(&self, subject: Subject) -> Result<Option<Subject>, StoreError> {
        Ok(self.data.lock().await.replace(subject))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Subject>, StoreError> {
        Ok(self.data.lock().await.remove(id))
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.data.lock().await.subjects.clear();
        Ok(())
    }
}

/// Keeps the collection in memory and rewrites the whole JSON file after
/// every mutation.
pub struct JsonFileStore {
    path: PathBuf,
    data: Mutex<AppData>,
}

impl JsonFileStore {
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = load_data(&path).await;
        Self {
            path,
            data: Mutex::new(data),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SubjectStore for JsonFileStore {
    async fn list(&self) -> Result<Vec<Subject>, StoreError> {
        Ok(self.data.lock().await.subjects.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Subject>, StoreError> {
        Ok(self.data.lock().await.find(id).cloned())
    }

    async fn put(&self, subject: Subject) -> Result<(), StoreError> {
        let mut data = self.data.lock().await;
        data.upsert(subject);
        persist_data(&self.path, &data).await
    }

    async fn update(&self, subject: Subject) -> Result<Option<Subject>, StoreError> {
        let mut data = self.data.lock().await;
        let previous = data.replace(subject);
        if previous.is_some() {
            persist_data(&self.path, &data).await?;
        }
        Ok(previous)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Subject>, StoreError> {
        let mut data = self.data.lock().await;
        let removed = data.remove(id);
        if removed.is_some() {
            persist_data(&self.path, &data).await?;
        }
        Ok(removed)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut data = self.data.lock().await;
        data.subjects.clear();
        persist_data(&self.path, &data).await
    }
}
