use crate::error::Result;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A stored URL record in the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// The original URL that was shortened.
    pub original_url: String,
}

/// Mapping from short code to URL record.
///
/// The mapping is append-only: a record is never mutated or removed once
/// inserted, and lives for the process lifetime.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Inserts a new URL record. Returns `Err(CodeConflict)` if the code
    /// is already taken. The occupancy check and the insert must form a
    /// single critical section with respect to concurrent inserts.
    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Result<()>;

    /// Retrieves the URL record for a given short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>>;

    /// Checks whether a short code is already taken.
    async fn exists(&self, code: &ShortCode) -> Result<bool>;
}
