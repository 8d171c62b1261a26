//! Link Purifier FFI Interface Definition
//!
//! This file defines the public interface exposed to Swift via UniFFI.
//! It acts as the source of truth for shared types: the UI feeds raw text in
//! through `extract_links` and renders each link using `classify_link`.

use serde::Serialize;
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// ENUMS
// ═══════════════════════════════════════════════════════════════════════════════

/// Display category of a single link.
///
/// Selected once per link by `classifier::classify`; icon and colors for a
/// category come from one palette record, see `LinkCategory::appearance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, uniffi::Enum)]
#[serde(rename_all = "lowercase")]
pub enum LinkCategory {
    Magnet,
    // Social / media sites
    Twitter,
    Facebook,
    Instagram,
    YouTube,
    LinkedIn,
    GitHub,
    Reddit,
    Pinterest,
    TikTok,
    Weibo,
    Zhihu,
    Bilibili,
    Douyin,
    Xiaohongshu,
    // File types
    Pdf,
    Word,
    Excel,
    PowerPoint,
    Image,
    Video,
    Audio,
    Archive,
    Code,
    // Host keywords
    News,
    Shopping,
    Search,
    Mail,
    Generic,
}

impl LinkCategory {
    /// Every category, in rule priority order with `Generic` last
    pub const ALL: [LinkCategory; 29] = [
        LinkCategory::Magnet,
        LinkCategory::Twitter,
        LinkCategory::Facebook,
        LinkCategory::Instagram,
        LinkCategory::YouTube,
        LinkCategory::LinkedIn,
        LinkCategory::GitHub,
        LinkCategory::Reddit,
        LinkCategory::Pinterest,
        LinkCategory::TikTok,
        LinkCategory::Weibo,
        LinkCategory::Zhihu,
        LinkCategory::Bilibili,
        LinkCategory::Douyin,
        LinkCategory::Xiaohongshu,
        LinkCategory::Pdf,
        LinkCategory::Word,
        LinkCategory::Excel,
        LinkCategory::PowerPoint,
        LinkCategory::Image,
        LinkCategory::Video,
        LinkCategory::Audio,
        LinkCategory::Archive,
        LinkCategory::Code,
        LinkCategory::News,
        LinkCategory::Shopping,
        LinkCategory::Search,
        LinkCategory::Mail,
        LinkCategory::Generic,
    ];
}

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS (Structs)
// ═══════════════════════════════════════════════════════════════════════════════

/// A palette color: the `#RRGGBB` literal plus its packed 0xRRGGBBAA value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, uniffi::Record)]
pub struct ThemeColor {
    pub hex: String,
    pub rgba: u32,
}

/// Two-stop gradient used for the link's icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, uniffi::Record)]
pub struct LinkGradient {
    pub start: ThemeColor,
    pub end: ThemeColor,
}

/// Row colors: resting background, border stroke, hovered background
#[derive(Debug, Clone, PartialEq, Eq, Serialize, uniffi::Record)]
pub struct LinkStyle {
    pub background: ThemeColor,
    pub border: ThemeColor,
    pub hover: ThemeColor,
}

/// Everything the UI needs to render one link row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, uniffi::Record)]
pub struct LinkAppearance {
    pub category: LinkCategory,
    /// SF Symbol name
    pub icon: String,
    pub gradient: LinkGradient,
    pub style: LinkStyle,
}

/// One link with its appearance, row colors at the top level.
///
/// Output record of the `linkpure --json` command; not exported over FFI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    pub link: String,
    pub category: LinkCategory,
    pub icon: String,
    pub gradient: LinkGradient,
    #[serde(flatten)]
    pub style: LinkStyle,
}

impl LinkReport {
    pub fn new(link: String) -> Self {
        let LinkAppearance {
            category,
            icon,
            gradient,
            style,
        } = crate::classifier::classify(&link).appearance();
        Self {
            link,
            category,
            icon,
            gradient,
            style,
        }
    }
}

/// Ordered, deduplicated links found in one piece of text.
///
/// `diagnostic` is set only when extraction failed internally; `links` is then
/// empty. Callers log or surface it but never treat it as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, uniffi::Record)]
pub struct ExtractionResult {
    pub links: Vec<String>,
    /// Same as `links.len()`, for the link count badge
    pub link_count: u64,
    pub diagnostic: Option<String>,
}

impl ExtractionResult {
    pub fn from_links(links: Vec<String>) -> Self {
        Self {
            link_count: links.len() as u64,
            links,
            diagnostic: None,
        }
    }

    pub fn failed(error: &LinkPureError) -> Self {
        Self {
            links: Vec::new(),
            link_count: 0,
            diagnostic: Some(error.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }
}

/// Error type for link purifier operations
#[derive(Debug, Clone, PartialEq, Eq, Error, uniffi::Error)]
pub enum LinkPureError {
    #[error("Detector initialization failed: {0}")]
    DetectorInitialization(String),
    #[error("Link pattern failed to compile: {0}")]
    PatternCompilation(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// ═══════════════════════════════════════════════════════════════════════════════
// EXPORTED FUNCTIONS
// ═══════════════════════════════════════════════════════════════════════════════

/// Extract links from pasted or typed text using the default configuration.
/// Called by the UI on every text change.
#[uniffi::export]
pub fn extract_links(text: String) -> ExtractionResult {
    crate::extractor::extract(&text)
}

/// Category plus icon and colors for one link
#[uniffi::export]
pub fn classify_link(link: String) -> LinkAppearance {
    crate::classifier::classify(&link).appearance()
}

#[uniffi::export]
pub fn link_category(link: String) -> LinkCategory {
    crate::classifier::classify(&link)
}
