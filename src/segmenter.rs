/*!
 * Span segmentation for document bodies.
 *
 * Splits a markdown body into an ordered sequence of typed spans: `Code`
 * spans are preserved verbatim through translation, `Prose` spans are
 * eligible for it. Segmentation is a single explicit left-to-right scan
 * rather than a regex split, so span boundaries can never land inside a
 * code delimiter.
 */

/// Kind of a segmented span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Verbatim content: fenced blocks, inline code, image markup
    Code,
    /// Translatable text between verbatim regions
    Prose,
}

/// One contiguous slice of a document body.
///
/// `text` always holds the original slice including delimiters and
/// surrounding whitespace, so concatenating all spans of a body in order
/// reproduces the body exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Whether this span is preserved or translated
    pub kind: SpanKind,
    /// The original slice, verbatim
    pub text: String,
}

impl Span {
    fn code(text: &str) -> Self {
        Span { kind: SpanKind::Code, text: text.to_string() }
    }

    fn prose(text: &str) -> Self {
        Span { kind: SpanKind::Prose, text: text.to_string() }
    }

    /// True for a prose span with no translatable content. Blank spans are
    /// carried through reassembly untouched and never sent to a translator.
    pub fn is_blank(&self) -> bool {
        self.kind == SpanKind::Prose && self.text.trim().is_empty()
    }

    /// Whitespace prefix of the span. For an all-whitespace span this is the
    /// whole text, so `leading + inner + trailing` always equals `text`.
    pub fn leading_whitespace(&self) -> &str {
        let trimmed = self.text.trim_start();
        &self.text[..self.text.len() - trimmed.len()]
    }

    /// The span text with surrounding whitespace removed. This is what gets
    /// handed to the translator; the affixes are reattached mechanically.
    pub fn inner(&self) -> &str {
        self.text.trim()
    }

    /// Whitespace suffix of the span, empty for an all-whitespace span.
    pub fn trailing_whitespace(&self) -> &str {
        let trimmed = self.text.trim_end();
        if trimmed.is_empty() {
            ""
        } else {
            &self.text[trimmed.len()..]
        }
    }
}

/// Split a document body into an ordered span sequence.
///
/// Recognized verbatim regions, each emitted as one `Code` span with its
/// delimiters included:
/// - fenced blocks: a ``` opener up to and including the nearest ``` closer;
///   an unterminated fence swallows the remainder of the body (an unclosed
///   code region must never be translated);
/// - inline code: a single backtick up to the next backtick, any content in
///   between; a backtick with no closer stays prose;
/// - image markup `![alt](url)` on a single line.
///
/// Every maximal run between verbatim regions becomes one `Prose` span,
/// whitespace-only runs included. An empty body yields no spans.
pub fn segment(body: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut prose_start = 0usize;
    let mut cursor = 0usize;

    while cursor < body.len() {
        let rel = match body[cursor..].find(['`', '!']) {
            Some(rel) => rel,
            None => break,
        };
        let pos = cursor + rel;
        let rest = &body[pos..];

        let code_end = if rest.starts_with("```") {
            match rest[3..].find("```") {
                Some(close) => Some(pos + 3 + close + 3),
                None => Some(body.len()),
            }
        } else if rest.starts_with('`') {
            rest[1..].find('`').map(|close| pos + 1 + close + 1)
        } else {
            scan_image(rest).map(|len| pos + len)
        };

        match code_end {
            Some(end) => {
                if pos > prose_start {
                    spans.push(Span::prose(&body[prose_start..pos]));
                }
                spans.push(Span::code(&body[pos..end]));
                prose_start = end;
                cursor = end;
            }
            None => {
                // Not a verbatim region; step past the candidate character.
                cursor = pos + rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if prose_start < body.len() {
        spans.push(Span::prose(&body[prose_start..]));
    }

    spans
}

/// Match `![alt](url)` at the start of `rest`, returning the byte length of
/// the markup. Alt text and url may be empty; the markup must not span lines.
fn scan_image(rest: &str) -> Option<usize> {
    if !rest.starts_with("![") {
        return None;
    }
    let alt_end = 2 + rest[2..].find("](")?;
    let close = alt_end + 2 + rest[alt_end + 2..].find(')')?;
    let len = close + 1;
    if rest[..len].contains('\n') {
        return None;
    }
    Some(len)
}
