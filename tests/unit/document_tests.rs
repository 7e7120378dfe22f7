/*!
 * Tests for the document model and artifact rendering
 */

use polypress::document::Document;
use polypress::translation::TranslationOutcome;

fn sample_document() -> Document {
    Document {
        title: "Getting Started".to_string(),
        slug: "getting-started".to_string(),
        date: "2024-05-01".to_string(),
        tags: vec!["rust".to_string(), "guide".to_string()],
        body: "Hello.\n".to_string(),
    }
}

#[test]
fn test_render_shouldEmitFrontMatterBlankLineAndBody() {
    let artifact = sample_document().render();

    assert_eq!(
        artifact,
        "---\n\
         title: \"Getting Started\"\n\
         date: 2024-05-01\n\
         tags: [\"rust\", \"guide\"]\n\
         ---\n\
         \n\
         Hello.\n"
    );
}

#[test]
fn test_render_withQuoteInTitle_shouldEscapeIt() {
    let mut document = sample_document();
    document.title = "The \"Best\" Guide".to_string();

    let artifact = document.render();
    assert!(artifact.contains("title: \"The \\\"Best\\\" Guide\""));
}

#[test]
fn test_render_withNoTags_shouldEmitEmptyList() {
    let mut document = sample_document();
    document.tags.clear();

    assert!(document.render().contains("tags: []"));
}

#[test]
fn test_artifactFileName_shouldCombineSlugAndLanguage() {
    let document = sample_document();
    assert_eq!(document.artifact_file_name("fr"), "getting-started.fr.md");
    assert_eq!(document.artifact_file_name("en"), "getting-started.en.md");
}

/// The translated sibling copies front matter and replaces title and body
#[test]
fn test_translated_shouldCopyMetadataAndReplaceTitleAndBody() {
    let document = sample_document();
    let sibling = document.translated(
        TranslationOutcome::Translated("Bien Démarrer".to_string()),
        "Bonjour.\n".to_string(),
    );

    assert_eq!(sibling.title, "Bien Démarrer");
    assert_eq!(sibling.body, "Bonjour.\n");
    assert_eq!(sibling.slug, document.slug);
    assert_eq!(sibling.date, document.date);
    assert_eq!(sibling.tags, document.tags);
}

/// A degraded title keeps the original text in the sibling
#[test]
fn test_translated_withDegradedTitle_shouldKeepOriginalTitle() {
    let document = sample_document();
    let sibling = document.translated(
        TranslationOutcome::Degraded(document.title.clone()),
        "Bonjour.\n".to_string(),
    );

    assert_eq!(sibling.title, "Getting Started");
}
