use crate::core::models::document::Document;
use crate::core::ports::document::DocumentStore;
use crate::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Process-local document, shared between clones. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    document: Arc<Mutex<Document>>,
}

impl MemoryDocument {
    pub fn new(document: Document) -> Self {
        Self {
            document: Arc::new(Mutex::new(document)),
        }
    }

    pub async fn snapshot(&self) -> Document {
        self.document.lock().await.clone()
    }
}

impl DocumentStore for MemoryDocument {
    async fn load(&self) -> Result<Document, Error> {
        Ok(self.snapshot().await)
    }

    async fn save(&self, document: &Document) -> Result<(), Error> {
        *self.document.lock().await = document.clone();
        Ok(())
    }

    async fn modify<F, R>(&self, command: F) -> Result<R, Error>
    where
        F: FnOnce(&mut Document) -> Result<R, Error>,
    {
        let mut current = self.document.lock().await;
        let mut next = current.clone();
        let result = command(&mut next)?;
        *current = next;
        Ok(result)
    }
}
