//! Input sanitation for free-text chat messages and text fields.
//!
//! Messages are escaped and stripped of control characters before any rule
//! looks at them, then screened for markup and injection-looking content.

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use crate::domain::foundation::ValidationError;

/// Maximum length of a chat message after sanitation.
pub const MAX_MESSAGE_LEN: usize = 500;

static CONTROL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x00-\x1F\x7F]").expect("control char pattern is valid"));

static DANGEROUS_MESSAGE_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"(?i)<script.*?>.*?</script>",
        r"(?i)javascript:",
        r"(?i)on\w+\s*=",
        r"(?i)<iframe.*?>",
        r"(?i)eval\s*\(",
        r"(?i)document\.",
        r"(?i)window\.",
        r"(?i)--.*?;",
        r"(?i)\bunion\b.*?\bselect\b",
        r"(?i)\bselect\b.*?\bfrom\b",
        r"(?i)\binsert\b.*?\binto\b",
        r"(?i)\bupdate\b.*?\bset\b",
        r"(?i)\bdelete\b.*?\bfrom\b",
        r"(?i)\bdrop\b.*?\btable\b",
    ])
    .expect("message patterns are valid")
});

static DANGEROUS_ADDRESS_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"(?i)<script.*?>",
        r"(?i)javascript:",
        r"(?i)on\w+\s*=",
        r"<.*?>",
        r#"[;'"\\].*?--"#,
    ])
    .expect("address patterns are valid")
});

/// Escapes HTML special characters and removes control characters.
///
/// The result is trimmed.
pub fn clean_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    CONTROL_CHARS.replace_all(&escaped, "").trim().to_string()
}

/// Returns true when `text` looks like script or SQL injection.
pub fn contains_dangerous_pattern(text: &str) -> bool {
    DANGEROUS_MESSAGE_PATTERNS.is_match(text)
}

/// Returns true when an address contains markup or comment-terminated quotes.
pub(crate) fn address_has_forbidden_content(text: &str) -> bool {
    DANGEROUS_ADDRESS_PATTERNS.is_match(text)
}

/// Sanitizes an incoming chat message.
///
/// Rejects empty messages, messages longer than [`MAX_MESSAGE_LEN`] after
/// escaping, and messages matching a dangerous pattern.
pub fn sanitize_message(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("message"));
    }

    let sanitized = clean_html(trimmed);
    let len = sanitized.chars().count();
    if len > MAX_MESSAGE_LEN {
        return Err(ValidationError::too_long("message", MAX_MESSAGE_LEN, len));
    }

    // Escaping hides tags from the patterns, so screen the raw text too.
    if contains_dangerous_pattern(trimmed) || contains_dangerous_pattern(&sanitized) {
        return Err(ValidationError::forbidden_content("message"));
    }

    Ok(sanitized)
}
