//! Link classification
//!
//! Maps a link string to a `LinkCategory` by walking an ordered rule table.
//! First matching rule wins; links matching nothing are `Generic`.
//!
//! Host rules use plain substring matching on the lowercased host, so
//! `x.com` also matches `dropbox.com` and `jd` matches any host containing
//! those two letters. Links that don't parse as URLs have no host and can
//! only match the scheme and suffix rules.

use crate::interface::LinkCategory;
use url::Url;

/// What a rule looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Lowercased link starts with this prefix
    Prefix(&'static str),
    /// Lowercased host contains any of these substrings
    HostContains(&'static [&'static str]),
    /// Lowercased link ends with any of these suffixes
    Suffix(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub category: LinkCategory,
    pub matcher: Matcher,
}

const fn host(category: LinkCategory, needles: &'static [&'static str]) -> Rule {
    Rule { category, matcher: Matcher::HostContains(needles) }
}

const fn suffix(category: LinkCategory, suffixes: &'static [&'static str]) -> Rule {
    Rule { category, matcher: Matcher::Suffix(suffixes) }
}

/// Classification rules in priority order
pub static RULES: &[Rule] = &[
    Rule { category: LinkCategory::Magnet, matcher: Matcher::Prefix("magnet:") },
    // Social and media sites
    host(LinkCategory::Twitter, &["twitter.com", "x.com"]),
    host(LinkCategory::Facebook, &["facebook.com"]),
    host(LinkCategory::Instagram, &["instagram.com"]),
    host(LinkCategory::YouTube, &["youtube.com"]),
    host(LinkCategory::LinkedIn, &["linkedin.com"]),
    host(LinkCategory::GitHub, &["github.com"]),
    host(LinkCategory::Reddit, &["reddit.com"]),
    host(LinkCategory::Pinterest, &["pinterest.com"]),
    host(LinkCategory::TikTok, &["tiktok.com"]),
    host(LinkCategory::Weibo, &["weibo.com"]),
    host(LinkCategory::Zhihu, &["zhihu.com"]),
    host(LinkCategory::Bilibili, &["bilibili.com"]),
    host(LinkCategory::Douyin, &["douyin.com"]),
    host(LinkCategory::Xiaohongshu, &["xiaohongshu.com"]),
    // File extensions
    suffix(LinkCategory::Pdf, &[".pdf"]),
    suffix(LinkCategory::Word, &[".doc", ".docx"]),
    suffix(LinkCategory::Excel, &[".xls", ".xlsx"]),
    suffix(LinkCategory::PowerPoint, &[".ppt", ".pptx"]),
    suffix(LinkCategory::Image, &[".jpg", ".jpeg", ".png", ".gif"]),
    suffix(LinkCategory::Video, &[".mp4", ".mov", ".avi"]),
    suffix(LinkCategory::Audio, &[".mp3", ".wav"]),
    suffix(LinkCategory::Archive, &[".zip", ".rar"]),
    suffix(LinkCategory::Code, &[".html", ".css", ".js", ".py"]),
    // Host keywords
    host(LinkCategory::News, &["news", "blog"]),
    host(LinkCategory::Shopping, &["amazon", "taobao", "jd", "tmall"]),
    host(LinkCategory::Search, &["google", "baidu", "bing"]),
    host(LinkCategory::Mail, &["mail", "gmail", "outlook"]),
];

/// Lowercased views of a link, computed once per classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFacts {
    lower: String,
    host: Option<String>,
}

impl LinkFacts {
    pub fn new(link: &str) -> Self {
        let host = Url::parse(link)
            .ok()
            .and_then(|url| url.host_str().map(str::to_lowercase))
            .filter(|h| !h.is_empty());
        Self {
            lower: link.to_lowercase(),
            host,
        }
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }
}

impl Rule {
    pub fn matches(&self, facts: &LinkFacts) -> bool {
        match self.matcher {
            Matcher::Prefix(prefix) => facts.lower.starts_with(prefix),
            Matcher::HostContains(needles) => facts
                .host()
                .is_some_and(|host| needles.iter().any(|n| host.contains(n))),
            Matcher::Suffix(suffixes) => suffixes.iter().any(|s| facts.lower.ends_with(s)),
        }
    }
}

/// Classify a link. Total: unparseable input falls back to `Generic`.
pub fn classify(link: &str) -> LinkCategory {
    let facts = LinkFacts::new(link);
    RULES
        .iter()
        .find(|rule| rule.matches(&facts))
        .map(|rule| rule.category)
        .unwrap_or(LinkCategory::Generic)
}
