/*!
 * Fragment translation and document reassembly.
 *
 * A document body is segmented into spans, each non-blank prose span is
 * translated as an independent fragment, and the results are stitched back
 * together in original order. A failed translation call degrades to the
 * original fragment text instead of aborting the document, so one bad call
 * costs at most one untranslated paragraph.
 */

use std::collections::HashMap;
use std::time::Duration;

use log::warn;

use crate::segmenter::{segment, Span, SpanKind};
use crate::translation::service::TextTranslator;

/// Result of translating one fragment or title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// The translated text, quote-stripped
    Translated(String),
    /// The original text, returned untouched after a failed call
    Degraded(String),
}

impl TranslationOutcome {
    /// The carried text, translated or original
    pub fn text(&self) -> &str {
        match self {
            Self::Translated(text) | Self::Degraded(text) => text,
        }
    }

    /// Consume the outcome and return the carried text
    pub fn into_text(self) -> String {
        match self {
            Self::Translated(text) | Self::Degraded(text) => text,
        }
    }

    /// True when the translation call failed and the original was kept
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }
}

/// Counters for one body translation, reported in the run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BodyTranslationStats {
    /// Non-blank prose fragments found in the body
    pub fragments: usize,
    /// Fragments successfully translated
    pub translated: usize,
    /// Fragments that degraded to their original text
    pub degraded: usize,
}

/// Strip one layer of wrapping double quotes from a provider response.
///
/// Some models quote their answer even when told not to. Stripping is
/// conservative: it only triggers when the first and the last character are
/// both `"` and the string has at least two characters, and it removes a
/// single layer.
pub fn strip_wrapping_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

/// Recombine spans with their translation outcomes into one document.
///
/// Code spans are emitted verbatim. A translated prose span is emitted as
/// `leading + translated + trailing`, with both affixes taken from the
/// original span since providers do not reliably preserve surrounding
/// whitespace. A degraded outcome already carries the untrimmed original,
/// so it is emitted as-is. Prose spans without an outcome (blank spans)
/// pass through untouched.
pub fn reassemble(spans: &[Span], outcomes: &HashMap<usize, TranslationOutcome>) -> String {
    let mut result = String::new();
    for (index, span) in spans.iter().enumerate() {
        match span.kind {
            SpanKind::Code => result.push_str(&span.text),
            SpanKind::Prose => match outcomes.get(&index) {
                Some(TranslationOutcome::Translated(text)) => {
                    result.push_str(span.leading_whitespace());
                    result.push_str(text);
                    result.push_str(span.trailing_whitespace());
                }
                Some(TranslationOutcome::Degraded(original)) => result.push_str(original),
                None => result.push_str(&span.text),
            },
        }
    }
    result
}

/// Drives fragment-by-fragment translation of titles and bodies.
pub struct DocumentTranslator<'a> {
    translator: &'a dyn TextTranslator,
    /// Pause between consecutive translation calls, rate-limit friendliness
    rate_limit_delay: Duration,
}

impl<'a> DocumentTranslator<'a> {
    /// Create a translator with no delay between calls
    pub fn new(translator: &'a dyn TextTranslator) -> Self {
        Self { translator, rate_limit_delay: Duration::ZERO }
    }

    /// Set the pause inserted between consecutive translation calls
    pub fn with_rate_limit_delay(mut self, delay: Duration) -> Self {
        self.rate_limit_delay = delay;
        self
    }

    /// Translate one prose fragment.
    ///
    /// The fragment is sent trimmed; the response has one layer of wrapping
    /// quotes stripped. On any failure the call is logged once and the
    /// original, untrimmed fragment text is returned as a degraded outcome.
    /// Errors never propagate past this boundary and there is no in-run
    /// retry.
    pub async fn translate_fragment(&self, fragment: &str) -> TranslationOutcome {
        match self.translator.translate_text(fragment.trim()).await {
            Ok(raw) => TranslationOutcome::Translated(strip_wrapping_quotes(&raw).to_string()),
            Err(e) => {
                warn!("Translation call failed, keeping original fragment: {e:#}");
                TranslationOutcome::Degraded(fragment.to_string())
            }
        }
    }

    /// Translate a document title as a single unsegmented fragment.
    ///
    /// Titles are assumed code-free. Failure degrades to the original title
    /// and never blocks publication.
    pub async fn translate_title(&self, title: &str) -> TranslationOutcome {
        self.translate_fragment(title).await
    }

    /// Translate a whole body: segment, translate each non-blank prose span
    /// strictly sequentially, reassemble in original order.
    pub async fn translate_body(&self, body: &str) -> (String, BodyTranslationStats) {
        let spans = segment(body);
        let mut outcomes = HashMap::new();
        let mut stats = BodyTranslationStats::default();

        for (index, span) in spans.iter().enumerate() {
            if span.kind != SpanKind::Prose || span.is_blank() {
                continue;
            }
            if !outcomes.is_empty() && !self.rate_limit_delay.is_zero() {
                tokio::time::sleep(self.rate_limit_delay).await;
            }
            let outcome = self.translate_fragment(&span.text).await;
            stats.fragments += 1;
            if outcome.is_degraded() {
                stats.degraded += 1;
            } else {
                stats.translated += 1;
            }
            outcomes.insert(index, outcome);
        }

        (reassemble(&spans, &outcomes), stats)
    }
}
