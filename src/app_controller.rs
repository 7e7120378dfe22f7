use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::Config;
use crate::content::{ContentRecord, ContentStore, HostedContentStore};
use crate::document::Document;
use crate::file_utils::FileManager;
use crate::images::ImageFetcher;
use crate::translation::pipeline::{BodyTranslationStats, DocumentTranslator};
use crate::translation::{TextTranslator, TranslationService};

// Application controller for the publish run

/// Counters for one publish run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Documents fully published (both artifacts written)
    pub published: usize,
    /// Records skipped before processing (validation failures)
    pub skipped: usize,
    /// Documents whose pipeline errored after validation
    pub failed: usize,
    /// Prose fragments that degraded to their original text
    pub degraded_fragments: usize,
}

/// Main application controller for document publishing
pub struct Controller {
    /// App configuration
    config: Config,

    /// Content store the records come from and report back to
    store: Arc<dyn ContentStore>,

    /// Translator used for titles and body fragments
    translator: Arc<dyn TextTranslator>,

    /// List eligible documents without writing or mutating anything
    dry_run: bool,

    /// Cap on the number of documents processed this run
    limit: Option<usize>,
}

impl Controller {
    /// Create a controller with production collaborators built from config
    pub fn with_config(config: Config, dry_run: bool, limit: Option<usize>) -> Result<Self> {
        let store = Arc::new(HostedContentStore::from_config(&config.content));
        let translator = Arc::new(TranslationService::from_config(&config)?);
        Ok(Self::with_parts(config, store, translator, dry_run, limit))
    }

    /// Create a controller with explicit collaborators, the test seam
    pub fn with_parts(
        config: Config,
        store: Arc<dyn ContentStore>,
        translator: Arc<dyn TextTranslator>,
        dry_run: bool,
        limit: Option<usize>,
    ) -> Self {
        Self { config, store, translator, dry_run, limit }
    }

    /// Run one publish pass: fetch ready records, process them strictly
    /// sequentially, report a summary.
    ///
    /// A failed fetch aborts the whole run; any error inside one document's
    /// pipeline is caught here, logged with the document's title, and the
    /// run continues with the next document. Already-written files of a
    /// failed document are left in place for inspection.
    pub async fn run(&self) -> Result<RunSummary> {
        let mut records = self
            .store
            .query_ready()
            .await
            .context("Failed to query ready records, aborting run")?;

        if let Some(limit) = self.limit {
            records.truncate(limit);
        }

        info!("Found {} record(s) ready for publishing", records.len());

        let progress = ProgressBar::new(records.len() as u64);
        progress.set_style(
            ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let mut summary = RunSummary::default();

        for record in records {
            progress.set_message(record.title.clone());

            match self.publish_record(record).await {
                Outcome::Published(stats) => {
                    summary.published += 1;
                    summary.degraded_fragments += stats.degraded;
                }
                Outcome::Skipped => summary.skipped += 1,
                Outcome::Failed => summary.failed += 1,
            }

            progress.inc(1);
        }

        progress.finish_and_clear();

        info!(
            "Run complete: {} published, {} skipped, {} failed, {} fragment(s) kept untranslated",
            summary.published, summary.skipped, summary.failed, summary.degraded_fragments
        );

        Ok(summary)
    }

    /// Process one record behind the per-document error boundary
    async fn publish_record(&self, record: ContentRecord) -> Outcome {
        let record_id = record.id.clone();

        let document = match record.into_document() {
            Ok(document) => document,
            Err(e) => {
                warn!("Skipping record: {}", e);
                return Outcome::Skipped;
            }
        };

        if self.dry_run {
            info!("[dry-run] would publish '{}' ({})", document.title, document.slug);
            return Outcome::Published(BodyTranslationStats::default());
        }

        let title = document.title.clone();
        match self.publish_document(&record_id, document).await {
            Ok(stats) => Outcome::Published(stats),
            Err(e) => {
                error!("Failed to publish '{}': {:#}", title, e);
                Outcome::Failed
            }
        }
    }

    /// The per-document pipeline: localize images, write the source
    /// artifact, translate title and body, write the target artifact, then
    /// mark the record published.
    async fn publish_document(
        &self,
        record_id: &str,
        document: Document,
    ) -> Result<BodyTranslationStats> {
        let document = if self.config.output.download_images {
            let fetcher = ImageFetcher::new(&self.config.output.images_dir);
            let localized = fetcher.localize(&document.body).await;
            document.with_body(localized)
        } else {
            document
        };

        // The source artifact goes out before translation starts; it is the
        // final source body the translation works from.
        self.write_artifact(&document, &self.config.source_language)?;

        let translator = DocumentTranslator::new(self.translator.as_ref())
            .with_rate_limit_delay(Duration::from_millis(
                self.config.translation.common.rate_limit_delay_ms,
            ));

        let title_outcome = translator.translate_title(&document.title).await;
        if title_outcome.is_degraded() {
            warn!("Title of '{}' kept untranslated", document.title);
        }

        let (translated_body, stats) = translator.translate_body(&document.body).await;
        if stats.degraded > 0 {
            warn!(
                "'{}': {}/{} fragment(s) kept untranslated",
                document.title, stats.degraded, stats.fragments
            );
        }

        let translated = document.translated(title_outcome, translated_body);
        self.write_artifact(&translated, &self.config.target_language)?;

        // Last action for the document, and only reached when both writes
        // succeeded. Not retried: a failed update leaves the record
        // eligible for the next run.
        if let Err(e) = self
            .store
            .update_status(record_id, &self.config.content.published_status)
            .await
        {
            warn!(
                "Status update failed for '{}': {} (record stays eligible for the next run)",
                document.title, e
            );
        }

        Ok(stats)
    }

    /// Write one document into its language tree
    fn write_artifact(&self, document: &Document, language: &str) -> Result<()> {
        let path = FileManager::artifact_path(
            &self.config.output.content_dir,
            language,
            &document.artifact_file_name(language),
        );
        FileManager::write_to_file(&path, &document.render())
            .with_context(|| format!("Failed to write artifact for '{}'", document.title))
    }
}

/// Result of processing one record
enum Outcome {
    Published(BodyTranslationStats),
    Skipped,
    Failed,
}
