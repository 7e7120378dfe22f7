/*!
 * Tests for file utilities
 */

use polypress::file_utils::FileManager;

#[test]
fn test_artifactPath_shouldNestLanguageTree() {
    let path = FileManager::artifact_path("content", "fr", "my-post.fr.md");
    assert_eq!(path, std::path::PathBuf::from("content/fr/my-post.fr.md"));
}

#[test]
fn test_writeToFile_shouldCreateParentDirectories() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("deep/nested/artifact.md");

    FileManager::write_to_file(&target, "hello").unwrap();

    assert!(FileManager::file_exists(&target));
    assert_eq!(FileManager::read_to_string(&target).unwrap(), "hello");
}

#[test]
fn test_writeToFile_shouldOverwriteExistingContent() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("artifact.md");

    FileManager::write_to_file(&target, "first").unwrap();
    FileManager::write_to_file(&target, "second").unwrap();

    assert_eq!(FileManager::read_to_string(&target).unwrap(), "second");
}

#[test]
fn test_fileExists_withDirectory_shouldBeFalse() {
    let dir = tempfile::tempdir().unwrap();
    assert!(!FileManager::file_exists(dir.path()));
}
