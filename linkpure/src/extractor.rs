//! Link extraction: run every detector, merge by position, clean, dedup.
//!
//! Output order is first appearance in the text. When two detectors report a
//! match at the same offset, the earlier detector's match sorts first.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use tracing::{debug, error};

use crate::config::ExtractorConfig;
use crate::detection::{LinkDetector, PatternDetector, RawMatch, StructuredDetector};
use crate::interface::{ExtractionResult, LinkPureError};

/// At most one of these is dropped from the end of a cleaned link.
///
/// A URL whose path really ends in one of them loses that character too;
/// that's accepted, the common case is sentence punctuation after a link.
pub const TRAILING_PUNCTUATION: &[char] = &[',', '.', ';', '›'];

static DEFAULT_EXTRACTOR: Lazy<Result<LinkExtractor, LinkPureError>> =
    Lazy::new(|| LinkExtractor::new(&ExtractorConfig::default()));

pub struct LinkExtractor {
    detectors: Vec<Box<dyn LinkDetector>>,
    config: ExtractorConfig,
}

impl LinkExtractor {
    /// Structured pass first, then the pattern pass
    pub fn new(config: &ExtractorConfig) -> Result<Self, LinkPureError> {
        let detectors: Vec<Box<dyn LinkDetector>> = vec![
            Box::new(StructuredDetector::new(config)?),
            Box::new(PatternDetector::new()?),
        ];
        Ok(Self::with_detectors(detectors, config.clone()))
    }

    pub fn with_detectors(detectors: Vec<Box<dyn LinkDetector>>, config: ExtractorConfig) -> Self {
        Self { detectors, config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract links, surfacing detector failures as errors
    pub fn try_extract(&self, text: &str) -> Result<Vec<String>, LinkPureError> {
        self.config.check_length(text)?;

        let mut matches = Vec::new();
        for detector in &self.detectors {
            let found = detector.detect(text)?;
            debug!(detector = ?detector.kind(), count = found.len(), "detector pass finished");
            matches.extend(found);
        }
        Ok(merge_matches(matches))
    }

    /// Extract links. Never fails: on error the result is empty and carries
    /// a diagnostic, and the error is logged.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        match self.try_extract(text) {
            Ok(links) => ExtractionResult::from_links(links),
            Err(e) => {
                error!(error = %e, "link extraction failed");
                ExtractionResult::failed(&e)
            }
        }
    }
}

/// Extract links with the default configuration
pub fn extract(text: &str) -> ExtractionResult {
    match DEFAULT_EXTRACTOR.as_ref() {
        Ok(extractor) => extractor.extract(text),
        Err(e) => {
            error!(error = %e, "default link extractor unavailable");
            ExtractionResult::failed(e)
        }
    }
}

/// Sort by position (stable), clean, and keep the first copy of each link
pub fn merge_matches(mut matches: Vec<RawMatch>) -> Vec<String> {
    matches.sort_by_key(|m| m.position);
    let mut seen = HashSet::new();
    matches
        .into_iter()
        .filter_map(|m| clean_link(&m.text))
        .filter(|link| seen.insert(link.clone()))
        .collect()
}

/// Trim whitespace and drop one trailing punctuation character.
/// Returns `None` when nothing is left.
pub fn clean_link(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    // Re-trim: the pattern pass can match "http://a ," and stripping the comma
    // would leave a trailing space
    let cleaned = trimmed
        .strip_suffix(TRAILING_PUNCTUATION)
        .unwrap_or(trimmed)
        .trim_end();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}
