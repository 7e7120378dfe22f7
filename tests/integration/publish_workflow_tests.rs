/*!
 * End-to-end publish run tests with stubbed collaborators
 */

use std::path::Path;
use std::sync::Arc;

use polypress::app_controller::Controller;
use polypress::file_utils::FileManager;

use crate::common::{make_record, test_config, MockContentStore, StubBehavior, StubTranslator};

const BODY: &str = "Intro text.\n\n```js\nlet x = 1;\n```\n\nOutro.";

fn artifact(content_dir: &Path, language: &str, slug: &str) -> std::path::PathBuf {
    content_dir.join(language).join(format!("{slug}.{language}.md"))
}

#[tokio::test]
async fn test_run_withReadyRecords_shouldWriteBothArtifactsAndUpdateStatus() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let store = Arc::new(MockContentStore::new(
        vec![
            make_record("r1", "First Post", "first-post", "ready", BODY),
            make_record("r2", "Second Post", "second-post", "ready", "Only prose here."),
            make_record("r3", "Already Out", "already-out", "published", "ignored"),
        ],
        "ready",
    ));
    let translator = Arc::new(StubTranslator::new(StubBehavior::Suffix(" [T]")));

    let controller =
        Controller::with_parts(config, store.clone(), translator.clone(), false, None);
    let summary = controller.run().await.unwrap();

    assert_eq!(summary.published, 2);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.failed, 0);

    // Source artifact carries the untranslated content
    let source = FileManager::read_to_string(artifact(dir.path(), "en", "first-post")).unwrap();
    assert!(source.contains("title: \"First Post\""));
    assert!(source.contains(BODY));

    // Target artifact: translated title and prose, code block untouched
    let target = FileManager::read_to_string(artifact(dir.path(), "fr", "first-post")).unwrap();
    assert!(target.contains("title: \"First Post [T]\""));
    assert!(target.contains("Intro text. [T]\n\n```js\nlet x = 1;\n```\n\nOutro. [T]"));

    // Only the ready records got their status flipped
    assert_eq!(store.updated_ids(), vec!["r1".to_string(), "r2".to_string()]);
    let updates = store.updates.lock().unwrap();
    assert!(updates.iter().all(|(_, status)| status == "published"));
}

#[tokio::test]
async fn test_run_withInvalidRecord_shouldSkipItAndContinue() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let store = Arc::new(MockContentStore::new(
        vec![
            make_record("bad", "No Slug", "", "ready", "body"),
            make_record("good", "Valid Post", "valid-post", "ready", "Some prose."),
        ],
        "ready",
    ));
    let translator = Arc::new(StubTranslator::new(StubBehavior::Suffix(" [T]")));

    let controller =
        Controller::with_parts(config, store.clone(), translator, false, None);
    let summary = controller.run().await.unwrap();

    assert_eq!(summary.published, 1);
    assert_eq!(summary.skipped, 1);
    // The invalid record never reaches the status update
    assert_eq!(store.updated_ids(), vec!["good".to_string()]);
    assert!(FileManager::file_exists(artifact(dir.path(), "fr", "valid-post")));
}

/// Degraded translation still publishes, with original content kept
#[tokio::test]
async fn test_run_withFailingTranslator_shouldPublishOriginalContent() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let store = Arc::new(MockContentStore::new(
        vec![make_record("r1", "Stubborn Post", "stubborn-post", "ready", BODY)],
        "ready",
    ));
    let translator = Arc::new(StubTranslator::new(StubBehavior::Failing));

    let controller =
        Controller::with_parts(config, store.clone(), translator, false, None);
    let summary = controller.run().await.unwrap();

    assert_eq!(summary.published, 1);
    assert_eq!(summary.failed, 0);
    // Two prose fragments plus the title degraded; only body fragments count
    assert_eq!(summary.degraded_fragments, 2);

    let target =
        FileManager::read_to_string(artifact(dir.path(), "fr", "stubborn-post")).unwrap();
    assert!(target.contains("title: \"Stubborn Post\""));
    assert!(target.contains(BODY));

    // Degradation does not block the status gate
    assert_eq!(store.updated_ids(), vec!["r1".to_string()]);
}

/// A failed status update is logged, not fatal; artifacts stay in place
#[tokio::test]
async fn test_run_withFailingStatusUpdate_shouldStillPublishArtifacts() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let store = Arc::new(
        MockContentStore::new(
            vec![make_record("r1", "Sticky Post", "sticky-post", "ready", "Prose.")],
            "ready",
        )
        .failing_updates(),
    );
    let translator = Arc::new(StubTranslator::new(StubBehavior::Suffix(" [T]")));

    let controller =
        Controller::with_parts(config, store.clone(), translator, false, None);
    let summary = controller.run().await.unwrap();

    assert_eq!(summary.published, 1);
    assert!(store.updated_ids().is_empty());
    assert!(FileManager::file_exists(artifact(dir.path(), "en", "sticky-post")));
    assert!(FileManager::file_exists(artifact(dir.path(), "fr", "sticky-post")));
}

/// A failed ready query aborts the run before any document is processed
#[tokio::test]
async fn test_run_withFailingQuery_shouldAbortTheRun() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let store = Arc::new(MockContentStore::new(Vec::new(), "ready").failing_query());
    let translator = Arc::new(StubTranslator::new(StubBehavior::Suffix(" [T]")));

    let controller = Controller::with_parts(config, store, translator.clone(), false, None);
    assert!(controller.run().await.is_err());
    assert_eq!(translator.call_count(), 0);
}

#[tokio::test]
async fn test_run_withDryRun_shouldTouchNothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let store = Arc::new(MockContentStore::new(
        vec![make_record("r1", "Preview Post", "preview-post", "ready", BODY)],
        "ready",
    ));
    let translator = Arc::new(StubTranslator::new(StubBehavior::Suffix(" [T]")));

    let controller =
        Controller::with_parts(config, store.clone(), translator.clone(), true, None);
    let summary = controller.run().await.unwrap();

    assert_eq!(summary.published, 1);
    assert_eq!(translator.call_count(), 0);
    assert!(store.updated_ids().is_empty());
    assert!(!artifact(dir.path(), "en", "preview-post").exists());
    assert!(!artifact(dir.path(), "fr", "preview-post").exists());
}

#[tokio::test]
async fn test_run_withLimit_shouldProcessOnlyFirstRecords() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let store = Arc::new(MockContentStore::new(
        vec![
            make_record("r1", "One", "one", "ready", "a"),
            make_record("r2", "Two", "two", "ready", "b"),
            make_record("r3", "Three", "three", "ready", "c"),
        ],
        "ready",
    ));
    let translator = Arc::new(StubTranslator::new(StubBehavior::Suffix(" [T]")));

    let controller =
        Controller::with_parts(config, store.clone(), translator, false, Some(2));
    let summary = controller.run().await.unwrap();

    assert_eq!(summary.published, 2);
    assert_eq!(store.updated_ids(), vec!["r1".to_string(), "r2".to_string()]);
    assert!(!artifact(dir.path(), "en", "three").exists());
}
