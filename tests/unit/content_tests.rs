/*!
 * Tests for content records and the status gate
 */

use polypress::content::ContentStore;
use polypress::errors::RecordError;

use crate::common::{make_record, MockContentStore};

#[test]
fn test_intoDocument_withValidRecord_shouldMapAllFields() {
    let record = make_record("r1", "A Title", "a-title", "ready", "Body text.");
    let document = record.into_document().unwrap();

    assert_eq!(document.title, "A Title");
    assert_eq!(document.slug, "a-title");
    assert_eq!(document.date, "2024-05-01");
    assert_eq!(document.tags, vec!["test".to_string()]);
    assert_eq!(document.body, "Body text.");
}

#[test]
fn test_intoDocument_withMissingTitle_shouldFailValidation() {
    let record = make_record("r2", "  ", "a-slug", "ready", "Body");
    let err = record.into_document().unwrap_err();

    match err {
        RecordError::MissingField { id, field } => {
            assert_eq!(id, "r2");
            assert_eq!(field, "title");
        }
    }
}

#[test]
fn test_intoDocument_withMissingSlug_shouldFailValidation() {
    let record = make_record("r3", "Title", "", "ready", "Body");
    let err = record.into_document().unwrap_err();

    match err {
        RecordError::MissingField { field, .. } => assert_eq!(field, "slug"),
    }
}

#[test]
fn test_intoDocument_withNoDate_shouldDefaultToEmpty() {
    let mut record = make_record("r4", "Title", "slug", "ready", "Body");
    record.date = None;
    record.tags = Vec::new();

    let document = record.into_document().unwrap();
    assert_eq!(document.date, "");
    assert!(document.tags.is_empty());
}

/// Already-published records are never selected by the ready query
#[tokio::test]
async fn test_queryReady_withMixedStatuses_shouldSelectReadyOnly() {
    let store = MockContentStore::new(
        vec![
            make_record("r1", "First", "first", "ready", "a"),
            make_record("r2", "Second", "second", "published", "b"),
            make_record("r3", "Third", "third", "draft", "c"),
            make_record("r4", "Fourth", "fourth", "ready", "d"),
        ],
        "ready",
    );

    let records = store.query_ready().await.unwrap();
    let ids: Vec<&str> = records.iter().map(|record| record.id.as_str()).collect();
    assert_eq!(ids, vec!["r1", "r4"]);
}

#[tokio::test]
async fn test_updateStatus_shouldRecordTheMutation() {
    let store = MockContentStore::new(Vec::new(), "ready");
    store.update_status("r9", "published").await.unwrap();

    let updates = store.updates.lock().unwrap();
    assert_eq!(updates.as_slice(), &[("r9".to_string(), "published".to_string())]);
}
