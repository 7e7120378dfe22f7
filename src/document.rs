/*!
 * Document model and artifact rendering.
 *
 * A `Document` is built once from a fetched record and never mutated; the
 * translated counterpart is a new value with the same metadata, a
 * translated title and the reassembled translated body.
 */

use std::fmt::Write as _;

use crate::translation::TranslationOutcome;

/// One publishable document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Document title
    pub title: String,

    /// URL slug, also the artifact file stem
    pub slug: String,

    /// Publish date, empty when the record carried none
    pub date: String,

    /// Tag list, copied verbatim between language variants
    pub tags: Vec<String>,

    /// Markdown body
    pub body: String,
}

impl Document {
    /// Build the translated sibling document.
    ///
    /// Front matter is copied, not re-translated; only the title and the
    /// body are replaced. A degraded title outcome keeps the original.
    pub fn translated(&self, title: TranslationOutcome, body: String) -> Document {
        Document {
            title: title.into_text(),
            slug: self.slug.clone(),
            date: self.date.clone(),
            tags: self.tags.clone(),
            body,
        }
    }

    /// Return this document with a different body, metadata untouched
    pub fn with_body(&self, body: String) -> Document {
        Document { body, ..self.clone() }
    }

    /// Artifact file name for one language tree, `{slug}.{lang}.md`
    pub fn artifact_file_name(&self, language: &str) -> String {
        format!("{}.{}.md", self.slug, language)
    }

    /// Render the publishable artifact: a `---` delimited front-matter
    /// block with title, date and a bracketed list of quoted tags, a blank
    /// line, then the body.
    pub fn render(&self) -> String {
        let mut artifact = String::new();
        artifact.push_str("---\n");
        let _ = writeln!(artifact, "title: \"{}\"", self.title.replace('"', "\\\""));
        let _ = writeln!(artifact, "date: {}", self.date);
        let tags = self
            .tags
            .iter()
            .map(|tag| format!("\"{}\"", tag.replace('"', "\\\"")))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(artifact, "tags: [{}]", tags);
        artifact.push_str("---\n\n");
        artifact.push_str(&self.body);
        artifact
    }
}
