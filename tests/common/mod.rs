/*!
 * Common test utilities: stub translators and a mock content store.
 */

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex as StdMutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use polypress::app_config::Config;
use polypress::content::{ContentRecord, ContentStore};
use polypress::errors::ContentError;
use polypress::translation::TextTranslator;

/// Behavior of a stub translator
#[derive(Debug, Clone, Copy)]
pub enum StubBehavior {
    /// Append a fixed suffix to the input
    Suffix(&'static str),
    /// Always fail
    Failing,
    /// Return the input unchanged
    Echo,
    /// Wrap the result in literal double quotes
    Quoting,
}

/// Call-counting stub standing in for the translation service
pub struct StubTranslator {
    behavior: StubBehavior,
    calls: AtomicUsize,
}

impl StubTranslator {
    pub fn new(behavior: StubBehavior) -> Self {
        Self { behavior, calls: AtomicUsize::new(0) }
    }

    /// Number of translate calls received
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextTranslator for StubTranslator {
    async fn translate_text(&self, text: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            StubBehavior::Suffix(suffix) => Ok(format!("{text}{suffix}")),
            StubBehavior::Failing => Err(anyhow!("simulated translation failure")),
            StubBehavior::Echo => Ok(text.to_string()),
            StubBehavior::Quoting => Ok(format!("\"{text}\"")),
        }
    }
}

/// In-memory content store with a fixed record set
pub struct MockContentStore {
    records: Vec<ContentRecord>,
    ready_status: String,
    /// Status updates received, in order
    pub updates: StdMutex<Vec<(String, String)>>,
    fail_updates: bool,
    fail_query: bool,
}

impl MockContentStore {
    pub fn new(records: Vec<ContentRecord>, ready_status: &str) -> Self {
        Self {
            records,
            ready_status: ready_status.to_string(),
            updates: StdMutex::new(Vec::new()),
            fail_updates: false,
            fail_query: false,
        }
    }

    /// Make every status update fail
    pub fn failing_updates(mut self) -> Self {
        self.fail_updates = true;
        self
    }

    /// Make the ready query fail
    pub fn failing_query(mut self) -> Self {
        self.fail_query = true;
        self
    }

    pub fn updated_ids(&self) -> Vec<String> {
        self.updates.lock().unwrap().iter().map(|(id, _)| id.clone()).collect()
    }
}

#[async_trait]
impl ContentStore for MockContentStore {
    async fn query_ready(&self) -> Result<Vec<ContentRecord>, ContentError> {
        if self.fail_query {
            return Err(ContentError::ApiError {
                status_code: 500,
                message: "simulated query failure".to_string(),
            });
        }
        Ok(self
            .records
            .iter()
            .filter(|record| record.status == self.ready_status)
            .cloned()
            .collect())
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<(), ContentError> {
        if self.fail_updates {
            return Err(ContentError::ApiError {
                status_code: 503,
                message: "simulated update failure".to_string(),
            });
        }
        self.updates.lock().unwrap().push((id.to_string(), status.to_string()));
        Ok(())
    }
}

/// Build a content record for tests
pub fn make_record(id: &str, title: &str, slug: &str, status: &str, body: &str) -> ContentRecord {
    ContentRecord {
        id: id.to_string(),
        title: title.to_string(),
        slug: slug.to_string(),
        tags: vec!["test".to_string()],
        date: Some("2024-05-01".to_string()),
        status: status.to_string(),
        body: body.to_string(),
    }
}

/// Build a validated configuration writing into the given directory
pub fn test_config(content_dir: &Path) -> Config {
    let mut config = Config::default();
    config.source_language = "en".to_string();
    config.target_language = "fr".to_string();
    config.content.endpoint = "http://localhost:9999".to_string();
    config.content.api_key = "test-api-key".to_string();
    config.translation.common.rate_limit_delay_ms = 0;
    config.output.content_dir = content_dir.to_string_lossy().to_string();
    config
}
