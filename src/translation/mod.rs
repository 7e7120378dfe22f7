/*!
 * Translation of document content using AI providers.
 *
 * This module contains the code-preserving translation pipeline:
 *
 * - `service`: provider-backed translation service and the `TextTranslator`
 *   substitution seam
 * - `pipeline`: fragment translation with failure degradation, title
 *   translation, and document reassembly
 */

// Re-export main types for easier usage
pub use self::pipeline::{
    reassemble, strip_wrapping_quotes, BodyTranslationStats, DocumentTranslator, TranslationOutcome,
};
pub use self::service::{TextTranslator, TranslationService};

// Submodules
pub mod pipeline;
pub mod service;
