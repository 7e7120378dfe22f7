/*!
 * # polypress - bilingual publishing from a hosted content store
 *
 * A Rust library for automated publishing of markdown documents in two
 * languages.
 *
 * ## Features
 *
 * - Pull "ready" documents from a hosted content store
 * - Translate titles and bodies using various AI providers:
 *   - Ollama (local LLM)
 *   - OpenAI API
 *   - Anthropic API
 * - Preserve code fences, inline code and image markup byte-identical
 *   through translation
 * - Degrade per fragment: one failed translation call costs one paragraph,
 *   never the document
 * - Write one front-matter artifact per language, then mark the source
 *   record published
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `segmenter`: Splitting a body into code and prose spans
 * - `translation`: AI-powered translation:
 *   - `translation::service`: Provider-backed translation service
 *   - `translation::pipeline`: Fragment translation and reassembly
 * - `content`: Content store records and client
 * - `document`: Document model and artifact rendering
 * - `images`: Optional image localization collaborator
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `providers`: Client implementations for various LLM providers
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod content;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod images;
pub mod language_utils;
pub mod providers;
pub mod segmenter;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunSummary};
pub use content::{ContentRecord, ContentStore};
pub use document::Document;
pub use errors::{AppError, ContentError, ProviderError, RecordError};
pub use segmenter::{segment, Span, SpanKind};
pub use translation::{TextTranslator, TranslationOutcome, TranslationService};
