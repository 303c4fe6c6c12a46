//! Response sanitization: fence stripping plus the document predicate.
//!
//! The system is a syntactic gatekeeper, not an HTML validator: it strips
//! the markdown artifacts models habitually wrap output in, then checks the
//! one structural property the prompt contract guarantees: the text is a
//! full document starting at the doctype. Everything beyond that is the
//! prompt's job.

use thiserror::Error;

/// The document marker every accepted response must start with.
///
/// The comparison is ASCII case-insensitive, applied uniformly to both
/// profiles. (The source deployments drifted between exact and normalized
/// checks; one documented rule replaces both.)
pub const DOCTYPE_PREFIX: &str = "<!doctype html";

#[derive(Debug, Error)]
pub enum SanitizationError {
    /// The cleaned text is not an HTML document. Carries the raw,
    /// unsanitized model output for the diagnostic payload.
    #[error("Generated text is not a valid HTML document")]
    InvalidDocument { raw: String },
}

/// A cleaned, structurally-validated HTML document. Constructed only by
/// [`sanitize`]: fence-free, trimmed, doctype-prefixed.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedDocument {
    pub html: String,
}

/// Strips code-fence artifacts from the raw model output and validates the
/// result against [`is_html_document`].
pub fn sanitize(raw: &str) -> Result<SanitizedDocument, SanitizationError> {
    let cleaned = strip_code_fences(raw);
    let cleaned = cleaned.trim();

    if !is_html_document(cleaned) {
        return Err(SanitizationError::InvalidDocument {
            raw: raw.to_string(),
        });
    }

    Ok(SanitizedDocument {
        html: cleaned.to_string(),
    })
}

/// True when the text begins with `<!doctype html`, ASCII case-insensitive.
pub fn is_html_document(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() >= DOCTYPE_PREFIX.len()
        && bytes[..DOCTYPE_PREFIX.len()].eq_ignore_ascii_case(DOCTYPE_PREFIX.as_bytes())
}

/// Removes every occurrence of "```html" (ASCII case-insensitive) and every
/// bare "```" sequence. Everything else passes through untouched.
fn strip_code_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];
        if let Some(tail) = rest.strip_prefix("```") {
            let tail_bytes = tail.as_bytes();
            if tail_bytes.len() >= 4 && tail_bytes[..4].eq_ignore_ascii_case(b"html") {
                i += "```html".len();
            } else {
                i += "```".len();
            }
            continue;
        }
        match rest.chars().next() {
            Some(ch) => {
                out.push(ch);
                i += ch.len_utf8();
            }
            None => break,
        }
    }

    out
}
