use crate::core::models::document::Document;
use crate::error::Error;

/// Whole-document persistence. Backends load and save the complete
/// `{users, surveys, responses}` value; there is no partial update.
pub trait DocumentStore {
    async fn load(&self) -> Result<Document, Error>;
    async fn save(&self, document: &Document) -> Result<(), Error>;

    /// Runs `command` against a freshly loaded copy of the document and writes
    /// the result back only when the command succeeds.
    async fn modify<F, R>(&self, command: F) -> Result<R, Error>
    where
        F: FnOnce(&mut Document) -> Result<R, Error>,
    {
        let mut document = self.load().await?;
        let result = command(&mut document)?;
        self.save(&document).await?;
        Ok(result)
    }
}
