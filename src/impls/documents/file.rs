use crate::core::models::document::Document;
use crate::core::ports::document::DocumentStore;
use crate::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// JSON document on local disk. Writes go to a sibling temp file which is
/// then renamed over the target, so readers only ever see complete documents.
/// Writers inside one process are serialized; other processes are not.
#[derive(Debug, Clone)]
pub struct FileDocument {
    path: PathBuf,
    writer: Arc<Mutex<()>>,
}

impl FileDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn initialize(&self) -> Result<(), Error> {
        if fs::try_exists(&self.path).await? {
            return Ok(());
        }
        log::info!("creating empty document at {}", self.path.display());
        self.save(&Document::default()).await
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn write(&self, document: &Document) -> Result<(), Error> {
        let bytes = serde_json::to_vec_pretty(document)?;
        let tmp = self.temp_path();
        if let Err(e) = self.replace_with(&tmp, &bytes).await {
            log::error!("failed to write {}: {}", self.path.display(), e);
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        log::debug!("wrote {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }

    async fn replace_with(&self, tmp: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut file = fs::File::create(tmp).await?;
        file.write_all(bytes).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(tmp, &self.path).await
    }
}

impl DocumentStore for FileDocument {
    async fn load(&self) -> Result<Document, Error> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Document::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, document: &Document) -> Result<(), Error> {
        let _guard = self.writer.lock().await;
        self.write(document).await
    }

    async fn modify<F, R>(&self, command: F) -> Result<R, Error>
    where
        F: FnOnce(&mut Document) -> Result<R, Error>,
    {
        let _guard = self.writer.lock().await;
        let mut document = self.load().await?;
        let result = command(&mut document)?;
        self.write(&document).await?;
        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::models::user::{Role, User};
    use chrono::Utc;
    use uuid::Uuid;

    fn scratch() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("survey-desk-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join("data.json")
    }

    fn user() -> User {
        User {
            id: "u1".into(),
            email: "ana@example.com".into(),
            password: "hash".into(),
            salt: "salt".into(),
            name: "Ana".into(),
            role: Role::Admin,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_initialize_creates_empty_document() {
        let docs = FileDocument::new(scratch());
        docs.initialize().await.unwrap();
        let raw: serde_json::Value = serde_json::from_slice(&std::fs::read(docs.path()).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!({ "users": [], "surveys": [], "responses": [] }));
    }

    #[tokio::test]
    async fn test_initialize_keeps_existing_document() {
        let docs = FileDocument::new(scratch());
        let mut doc = Document::default();
        doc.users.push(user());
        docs.save(&doc).await.unwrap();
        docs.initialize().await.unwrap();
        assert_eq!(docs.load().await.unwrap(), doc);
    }

    #[tokio::test]
    async fn test_modify_round_trip_without_temp_file() {
        let docs = FileDocument::new(scratch());
        let u = user();
        let stored = u.clone();
        docs.modify(move |doc| {
            doc.users.push(stored);
            Ok(())
        })
        .await
        .unwrap();
        let reopened = FileDocument::new(docs.path().to_owned());
        assert_eq!(reopened.load().await.unwrap().users, vec![u]);
        assert!(!docs.temp_path().exists());
    }

    #[tokio::test]
    async fn test_failed_command_writes_nothing() {
        let docs = FileDocument::new(scratch());
        let res: Result<(), Error> = docs
            .modify(|doc| {
                doc.users.push(user());
                Err(Error::Conflict("no".into()))
            })
            .await;
        assert!(matches!(res, Err(Error::Conflict(_))));
        assert!(!docs.path().exists());
    }

    #[tokio::test]
    async fn test_failed_rename_removes_temp_file() {
        let path = scratch();
        std::fs::create_dir_all(path.join("occupied")).unwrap();
        let docs = FileDocument::new(path);
        let res = docs.save(&Document::default()).await;
        assert!(matches!(res, Err(Error::IoError(_))));
        assert!(!docs.temp_path().exists());
        assert!(docs.path().is_dir());
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let docs = FileDocument::new(scratch());
        assert_eq!(docs.load().await.unwrap(), Document::default());
    }
}
