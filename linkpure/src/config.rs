//! Extractor configuration
//!
//! Defaults reproduce the stock behavior; hosts may load overrides from JSON.

use serde::{Deserialize, Serialize};

use crate::interface::LinkPureError;

/// Schemes the structured detector accepts by default. Exotic schemes like
/// javascript:, data:, or custom-app:// are left out so prose and code
/// snippets aren't turned into links.
pub const DEFAULT_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// URL schemes recognized by the structured detector
    pub schemes: Vec<String>,
    /// Report `www.example.com` as `http://www.example.com`
    pub detect_bare_domains: bool,
    /// Report `user@example.com` as `mailto:user@example.com`
    pub detect_emails: bool,
    /// Reject input longer than this many characters
    pub max_text_chars: Option<usize>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            schemes: DEFAULT_SCHEMES.iter().map(|s| s.to_string()).collect(),
            detect_bare_domains: true,
            detect_emails: true,
            max_text_chars: None,
        }
    }
}

impl ExtractorConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check the scheme list: non-empty, each a valid RFC 3986 scheme name
    pub fn validate(&self) -> Result<(), LinkPureError> {
        if self.schemes.is_empty() {
            return Err(LinkPureError::DetectorInitialization(
                "no URL schemes configured".to_string(),
            ));
        }
        if let Some(bad) = self.schemes.iter().find(|s| !is_scheme_name(s)) {
            return Err(LinkPureError::DetectorInitialization(format!(
                "invalid URL scheme {:?}",
                bad
            )));
        }
        Ok(())
    }

    /// Enforce `max_text_chars` on a piece of input text
    pub fn check_length(&self, text: &str) -> Result<(), LinkPureError> {
        match self.max_text_chars {
            Some(limit) => {
                let len = text.chars().count();
                if len > limit {
                    return Err(LinkPureError::InvalidInput(format!(
                        "text is {} characters, limit is {}",
                        len, limit
                    )));
                }
                Ok(())
            }
            None => Ok(()),
        }
    }
}

/// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_scheme_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
