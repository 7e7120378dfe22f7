use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::errors::RecordError;

/// One record as fetched from the content store.
///
/// Title and slug are required for publishing; tags and date are optional
/// and default to empty. The body arrives as a single markdown string (the
/// store client is responsible for assembling paginated body content).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Store-assigned record identifier
    pub id: String,

    /// Document title
    #[serde(default)]
    pub title: String,

    /// URL slug, also the artifact file stem
    #[serde(default)]
    pub slug: String,

    /// Tag list
    #[serde(default)]
    pub tags: Vec<String>,

    /// Publish date as provided by the store
    #[serde(default)]
    pub date: Option<String>,

    /// Publication status field, the status gate
    #[serde(default)]
    pub status: String,

    /// Markdown body
    #[serde(default)]
    pub body: String,
}

impl ContentRecord {
    /// Map the record into a publishable document.
    ///
    /// Fails when title or slug is empty; the caller skips such records
    /// with a warning and continues the run.
    pub fn into_document(self) -> Result<Document, RecordError> {
        if self.title.trim().is_empty() {
            return Err(RecordError::MissingField { id: self.id, field: "title" });
        }
        if self.slug.trim().is_empty() {
            return Err(RecordError::MissingField { id: self.id, field: "slug" });
        }

        Ok(Document {
            title: self.title,
            slug: self.slug,
            date: self.date.unwrap_or_default(),
            tags: self.tags,
            body: self.body,
        })
    }
}
