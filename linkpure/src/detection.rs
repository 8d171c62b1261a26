//! Link detection passes
//!
//! Two independent detectors scan the same text:
//! - `StructuredDetector` finds well-formed links in prose (URLs with a known
//!   scheme, bare `www.` hosts, e-mail addresses) and trims surrounding
//!   punctuation the way a reader would.
//! - `PatternDetector` is a raw regex pass that also catches magnet links and
//!   malformed URLs the structured pass skips.
//!
//! Both report `RawMatch`es with byte offsets into the input. Overlap between
//! the passes is expected; the extractor merges and dedups them.

use regex::Regex;
use url::Url;

use crate::config::ExtractorConfig;
use crate::interface::LinkPureError;

/// Case-insensitive: `http(s)://` followed by a non-delimiter, or `magnet:?`
pub const LINK_PATTERN: &str = r"(?i)(https?://[^\s/$.?#].[^\s]*|magnet:\?[^\s]+)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectorKind {
    Structured,
    Pattern,
}

/// A candidate link found by one detector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    /// Byte offset of the match start in the scanned text
    pub position: usize,
    pub text: String,
    pub source: DetectorKind,
}

pub trait LinkDetector: Send + Sync {
    fn kind(&self) -> DetectorKind;

    /// Scan the full text. Matches may come back in any order.
    fn detect(&self, text: &str) -> Result<Vec<RawMatch>, LinkPureError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// PATTERN DETECTOR
// ─────────────────────────────────────────────────────────────────────────────

pub struct PatternDetector {
    regex: Regex,
}

impl PatternDetector {
    pub fn new() -> Result<Self, LinkPureError> {
        Self::with_pattern(LINK_PATTERN)
    }

    pub(crate) fn with_pattern(pattern: &str) -> Result<Self, LinkPureError> {
        let regex = Regex::new(pattern)
            .map_err(|e| LinkPureError::PatternCompilation(e.to_string()))?;
        Ok(Self { regex })
    }
}

impl LinkDetector for PatternDetector {
    fn kind(&self) -> DetectorKind {
        DetectorKind::Pattern
    }

    fn detect(&self, text: &str) -> Result<Vec<RawMatch>, LinkPureError> {
        Ok(self
            .regex
            .find_iter(text)
            .map(|m| RawMatch {
                position: m.start(),
                text: m.as_str().to_string(),
                source: DetectorKind::Pattern,
            })
            .collect())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// STRUCTURED DETECTOR
// ─────────────────────────────────────────────────────────────────────────────

/// Stripped from the front of a token: `(https://a.com` → `https://a.com`
const OPENERS: &[char] = &[
    '(', '[', '{', '<', '"', '\'', '“', '‘', '«', '‹', '（', '「', '『', '【', '《',
];

/// Stripped from the end of a link candidate, repeatedly
const CLOSERS: &[char] = &[
    '.', ',', ';', ':', '!', '?', ']', '}', '>', '"', '\'', '”', '’', '»', '›', '…',
];

/// Full-width punctuation never appears inside a URL; CJK prose often glues
/// it straight onto a link without a space.
const HARD_TERMINATORS: &[char] = &[
    '，', '。', '；', '：', '！', '？', '、', '）', '」', '』', '】', '》',
];

pub struct StructuredDetector {
    /// Lowercased `scheme://` prefixes
    prefixes: Vec<String>,
    bare_domains: bool,
    emails: bool,
}

impl StructuredDetector {
    pub fn new(config: &ExtractorConfig) -> Result<Self, LinkPureError> {
        config.validate()?;
        Ok(Self {
            prefixes: config
                .schemes
                .iter()
                .map(|s| format!("{}://", s.to_ascii_lowercase()))
                .collect(),
            bare_domains: config.detect_bare_domains,
            emails: config.detect_emails,
        })
    }

    /// Look for a link in one whitespace-delimited token.
    /// Returns the byte offset within the token and the link text.
    fn detect_token(&self, token: &str) -> Option<(usize, String)> {
        let body = token.trim_start_matches(OPENERS);
        let lead = token.len() - body.len();
        // ASCII lowercasing keeps byte offsets aligned with `body`
        let lower = body.to_ascii_lowercase();

        let scheme_start = self
            .prefixes
            .iter()
            .filter_map(|prefix| lower.find(prefix.as_str()))
            .min();
        if let Some(start) = scheme_start {
            let candidate = trim_link_end(cut_at_terminator(&body[start..]));
            return is_absolute_link(candidate).then(|| (lead + start, candidate.to_string()));
        }

        let candidate = trim_link_end(cut_at_terminator(body));
        if self.bare_domains && lower.starts_with("www.") {
            let url = format!("http://{}", candidate);
            let has_domain = candidate.get(4..).is_some_and(|rest| rest.contains('.'));
            return (has_domain && is_absolute_link(&url)).then_some((lead, url));
        }
        if self.emails && is_email_address(candidate) {
            return Some((lead, format!("mailto:{}", candidate)));
        }
        None
    }
}

impl LinkDetector for StructuredDetector {
    fn kind(&self) -> DetectorKind {
        DetectorKind::Structured
    }

    fn detect(&self, text: &str) -> Result<Vec<RawMatch>, LinkPureError> {
        Ok(tokens(text)
            .filter_map(|(offset, token)| {
                self.detect_token(token).map(|(within, link)| RawMatch {
                    position: offset + within,
                    text: link,
                    source: DetectorKind::Structured,
                })
            })
            .collect())
    }
}

/// Whitespace-delimited tokens with their byte offsets
fn tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split(char::is_whitespace)
        .filter(|token| !token.is_empty())
        .map(move |token| (token.as_ptr() as usize - text.as_ptr() as usize, token))
}

fn cut_at_terminator(s: &str) -> &str {
    match s.find(HARD_TERMINATORS) {
        Some(end) => &s[..end],
        None => s,
    }
}

/// Drop trailing sentence punctuation. A `)` only goes when the link has no
/// `(`, so `https://en.wikipedia.org/wiki/Rust_(programming_language)` survives.
fn trim_link_end(mut s: &str) -> &str {
    loop {
        let trimmed = s.trim_end_matches(CLOSERS);
        let trimmed = match trimmed.strip_suffix(')') {
            Some(rest) if !rest.contains('(') => rest,
            _ => trimmed,
        };
        if trimmed.len() == s.len() {
            return s;
        }
        s = trimmed;
    }
}

fn is_absolute_link(candidate: &str) -> bool {
    Url::parse(candidate)
        .map(|url| url.host_str().is_some_and(|host| !host.is_empty()))
        .unwrap_or(false)
}

/// A mailbox whose domain has at least two labels, so `a@b` and
/// `meet@5pm` stay plain text
fn is_email_address(candidate: &str) -> bool {
    let has_dotted_domain = candidate.rsplit_once('@').is_some_and(|(_, domain)| {
        domain.split('.').count() > 1 && domain.split('.').all(|label| !label.is_empty())
    });
    has_dotted_domain && validator::validate_email(candidate)
}
