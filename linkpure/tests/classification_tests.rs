//! Classification and rendering values consumed by the Swift UI
//!
//! The colors here are what the app draws; a change in this file is a
//! visible change in the link list.

use linkpure::{classify, classify_link, extract, LinkCategory, LinkReport};

#[test]
fn magnet_from_extraction_classifies_as_magnet() {
    let links = extract("get this: magnet:?xt=urn:btih:ABCDEF thanks").links;
    assert_eq!(classify(&links[0]), LinkCategory::Magnet);
}

#[test]
fn domain_check_precedes_suffix_check() {
    assert_eq!(classify("https://github.com/foo.pdf"), LinkCategory::GitHub);
}

#[test]
fn social_domains() {
    let cases = [
        ("https://twitter.com/rustlang", LinkCategory::Twitter),
        ("https://x.com/rustlang", LinkCategory::Twitter),
        ("https://www.facebook.com/groups/1", LinkCategory::Facebook),
        ("https://www.instagram.com/p/abc/", LinkCategory::Instagram),
        ("https://www.youtube.com/watch?v=1", LinkCategory::YouTube),
        ("https://www.linkedin.com/in/someone", LinkCategory::LinkedIn),
        ("https://github.com/rust-lang/rust", LinkCategory::GitHub),
        ("https://old.reddit.com/r/rust", LinkCategory::Reddit),
        ("https://www.pinterest.com/pin/1/", LinkCategory::Pinterest),
        ("https://www.tiktok.com/@someone", LinkCategory::TikTok),
        ("https://weibo.com/u/1", LinkCategory::Weibo),
        ("https://www.zhihu.com/question/1", LinkCategory::Zhihu),
        ("https://www.bilibili.com/video/BV1", LinkCategory::Bilibili),
        ("https://www.douyin.com/video/1", LinkCategory::Douyin),
        ("https://www.xiaohongshu.com/explore/1", LinkCategory::Xiaohongshu),
    ];
    for (link, expected) in cases {
        assert_eq!(classify(link), expected, "{}", link);
    }
}

#[test]
fn file_extensions() {
    let cases = [
        ("https://example.com/a.PDF", LinkCategory::Pdf),
        ("https://example.com/a.doc", LinkCategory::Word),
        ("https://example.com/a.docx", LinkCategory::Word),
        ("https://example.com/a.xls", LinkCategory::Excel),
        ("https://example.com/a.xlsx", LinkCategory::Excel),
        ("https://example.com/a.ppt", LinkCategory::PowerPoint),
        ("https://example.com/a.pptx", LinkCategory::PowerPoint),
        ("https://example.com/a.jpeg", LinkCategory::Image),
        ("https://example.com/a.gif", LinkCategory::Image),
        ("https://example.com/a.mov", LinkCategory::Video),
        ("https://example.com/a.avi", LinkCategory::Video),
        ("https://example.com/a.wav", LinkCategory::Audio),
        ("https://example.com/a.rar", LinkCategory::Archive),
        ("https://example.com/a.py", LinkCategory::Code),
        ("https://example.com/style.css", LinkCategory::Code),
    ];
    for (link, expected) in cases {
        assert_eq!(classify(link), expected, "{}", link);
    }
}

#[test]
fn totality_on_garbage() {
    for input in ["", " ", "::::", "http://", "\u{0}\u{1}", "😀😀", "magnet", "https://[::1"] {
        assert_eq!(classify(input), LinkCategory::Generic, "{:?}", input);
        // Resolving the appearance never panics either
        let _ = classify_link(input.to_string());
    }
}

#[test]
fn github_appearance() {
    let appearance = classify_link("https://github.com/rust-lang/rust".to_string());
    assert_eq!(appearance.category, LinkCategory::GitHub);
    assert_eq!(appearance.icon, "chevron.left.forwardslash.chevron.right.circle.fill");
    assert_eq!(appearance.gradient.start.hex, "#24292E");
    assert_eq!(appearance.gradient.end.hex, "#1B1F23");
    assert_eq!(appearance.style.background.rgba, 0xF0F2F5FF);
    assert_eq!(appearance.style.border.rgba, 0x24292EFF);
    assert_eq!(appearance.style.hover.rgba, 0xD0D7DEFF);
}

#[test]
fn pdf_appearance() {
    let appearance = classify_link("https://example.com/report.pdf".to_string());
    assert_eq!(appearance.icon, "doc.text.fill");
    assert_eq!(appearance.gradient.start.rgba, 0xFF3850FF);
    assert_eq!(appearance.gradient.end.rgba, 0xFF6B81FF);
    assert_eq!(appearance.style.background.hex, "#FFE8EA");
}

#[test]
fn generic_appearance() {
    let appearance = classify_link("https://example.org/".to_string());
    assert_eq!(appearance.category, LinkCategory::Generic);
    assert_eq!(appearance.icon, "link.circle.fill");
    assert_eq!(appearance.gradient.start.hex, "#4A90E2");
    assert_eq!(appearance.gradient.end.hex, "#67B8F7");
    assert_eq!(appearance.style.border.hex, "#1A2542");
    assert_eq!(appearance.style.hover.hex, "#FFD84D");
}

const CODE_ICON: &str = "chevron.left.forwardslash.chevron.right.circle.fill";

/// (category, icon, [gradient start, end], [background, border, hover])
#[rustfmt::skip]
const PALETTE: [(LinkCategory, &str, [&str; 2], [&str; 3]); 29] = [
    (LinkCategory::Magnet, "arrow.down.circle.fill", ["#FF6B6B", "#FF8E8E"], ["#FFE6E6", "#FF6B6B", "#FFB3B3"]),
    (LinkCategory::Twitter, "message.circle.fill", ["#1DA1F2", "#0C85D0"], ["#E8F5FD", "#1DA1F2", "#BAE3FF"]),
    (LinkCategory::Facebook, "person.2.circle.fill", ["#4267B2", "#2B4B94"], ["#E7F3FF", "#4267B2", "#B7D4FF"]),
    (LinkCategory::Instagram, "camera.circle.fill", ["#E4405F", "#FD1D1D"], ["#FCE7EB", "#E4405F", "#FFB1C1"]),
    (LinkCategory::YouTube, "play.circle.fill", ["#FF0000", "#CC0000"], ["#FFE6E6", "#FF0000", "#FFB3B3"]),
    (LinkCategory::LinkedIn, "briefcase.circle.fill", ["#0077B5", "#005582"], ["#E6F3F9", "#0077B5", "#B3E0FF"]),
    (LinkCategory::GitHub, CODE_ICON, ["#24292E", "#1B1F23"], ["#F0F2F5", "#24292E", "#D0D7DE"]),
    (LinkCategory::Reddit, "bubble.left.circle.fill", ["#FF4500", "#FF5700"], ["#FFECE5", "#FF4500", "#FFC4B0"]),
    (LinkCategory::Pinterest, "pin.circle.fill", ["#E60023", "#AD081B"], ["#FFE5EA", "#E60023", "#FFB3C1"]),
    (LinkCategory::TikTok, "video.circle.fill", ["#000000", "#FE2C55"], ["#F2F2F2", "#000000", "#FFB3C2"]),
    (LinkCategory::Weibo, "message.circle.fill", ["#DF2029", "#B2191F"], ["#FFE7E8", "#DF2029", "#FFB3B6"]),
    (LinkCategory::Zhihu, "questionmark.circle.fill", ["#0066FF", "#0047B2"], ["#E6F0FF", "#0066FF", "#B3D1FF"]),
    (LinkCategory::Bilibili, "play.circle.fill", ["#FB7299", "#FC9DB6"], ["#FFF0F5", "#FB7299", "#FFD6E5"]),
    (LinkCategory::Douyin, "video.circle.fill", ["#000000", "#25F4EE"], ["#E6FEFD", "#000000", "#B3FBF9"]),
    (LinkCategory::Xiaohongshu, "photo.circle.fill", ["#FE2C55", "#FF6C6C"], ["#FFE9EE", "#FE2C55", "#FFB3C2"]),
    (LinkCategory::Pdf, "doc.text.fill", ["#FF3850", "#FF6B81"], ["#FFE8EA", "#FF3850", "#FFB3BC"]),
    (LinkCategory::Word, "doc.fill", ["#2B579A", "#4285F4"], ["#E7ECF7", "#2B579A", "#B3C6E7"]),
    (LinkCategory::Excel, "tablecells.fill", ["#217346", "#33C481"], ["#E8F5ED", "#217346", "#B3E0C4"]),
    (LinkCategory::PowerPoint, "rectangle.stack.fill", ["#D24726", "#FF8F6B"], ["#FFE9E3", "#D24726", "#FFB8A3"]),
    (LinkCategory::Image, "photo.circle.fill", ["#4FACFE", "#00F2FE"], ["#E6F7FF", "#4FACFE", "#B3E0FF"]),
    (LinkCategory::Video, "video.circle.fill", ["#6D45E6", "#A16BFE"], ["#F0E8FF", "#6D45E6", "#D4B3FF"]),
    (LinkCategory::Audio, "music.note.circle.fill", ["#FF3CAC", "#784BA0"], ["#FFE6F7", "#FF3CAC", "#FFB3E6"]),
    (LinkCategory::Archive, "folder.circle.fill", ["#525252", "#737373"], ["#F0F0F0", "#525252", "#D1D1D1"]),
    (LinkCategory::Code, CODE_ICON, ["#2CD8D5", "#6B8DD6"], ["#E6F9F8", "#2CD8D5", "#B3F0EE"]),
    (LinkCategory::News, "newspaper.circle.fill", ["#48C6EF", "#6F86D6"], ["#E8F3FF", "#48C6EF", "#B3E0FF"]),
    (LinkCategory::Shopping, "cart.circle.fill", ["#FF9A9E", "#FAD0C4"], ["#FFF0F0", "#FF9A9E", "#FFD6D6"]),
    (LinkCategory::Search, "magnifyingglass.circle.fill", ["#4285F4", "#34A853"], ["#E8F0FF", "#4285F4", "#B3D1FF"]),
    (LinkCategory::Mail, "envelope.circle.fill", ["#FF5858", "#F09819"], ["#FFF0E6", "#FF5858", "#FFB3B3"]),
    (LinkCategory::Generic, "link.circle.fill", ["#4A90E2", "#67B8F7"], ["#F0F2F5", "#1A2542", "#FFD84D"]),
];

#[test]
fn palette_values_for_every_category() {
    let pinned: Vec<LinkCategory> = PALETTE.iter().map(|(category, ..)| *category).collect();
    assert_eq!(pinned, LinkCategory::ALL.to_vec());

    for (category, icon, [start, end], [background, border, hover]) in PALETTE {
        let appearance = category.appearance();
        assert_eq!(appearance.icon, icon, "{:?}", category);
        assert_eq!(
            [appearance.gradient.start.hex.as_str(), appearance.gradient.end.hex.as_str()],
            [start, end],
            "{:?}",
            category
        );
        assert_eq!(
            [
                appearance.style.background.hex.as_str(),
                appearance.style.border.hex.as_str(),
                appearance.style.hover.hex.as_str(),
            ],
            [background, border, hover],
            "{:?}",
            category
        );
    }
}

#[test]
fn every_category_has_complete_appearance() {
    for category in LinkCategory::ALL {
        let appearance = category.appearance();
        assert_eq!(appearance.category, category);
        assert!(!appearance.icon.is_empty());
        for color in [
            &appearance.gradient.start,
            &appearance.gradient.end,
            &appearance.style.background,
            &appearance.style.border,
            &appearance.style.hover,
        ] {
            assert!(color.hex.starts_with('#') && color.hex.len() == 7, "{:?}", color);
            // Opaque palette: alpha byte is always 0xFF
            assert_eq!(color.rgba & 0xFF, 0xFF, "{:?} {:?}", category, color);
        }
    }
}

#[test]
fn appearance_serializes_for_json_output() {
    let json = serde_json::to_value(classify_link("magnet:?xt=urn:btih:1".to_string())).unwrap();
    assert_eq!(json["category"], "magnet");
    assert_eq!(json["icon"], "arrow.down.circle.fill");
    assert_eq!(json["gradient"]["start"]["hex"], "#FF6B6B");
}

#[test]
fn link_report_json_has_flat_row_colors() {
    let report = LinkReport::new("https://github.com/rust-lang/rust".to_string());
    let json = serde_json::to_value(&report).unwrap();

    let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["background", "border", "category", "gradient", "hover", "icon", "link"]
    );
    assert!(json.get("style").is_none());

    assert_eq!(json["link"], "https://github.com/rust-lang/rust");
    assert_eq!(json["category"], "github");
    assert_eq!(json["gradient"]["end"]["hex"], "#1B1F23");
    assert_eq!(json["background"]["hex"], "#F0F2F5");
    assert_eq!(json["border"]["hex"], "#24292E");
    assert_eq!(json["hover"]["hex"], "#D0D7DE");
}
