//! Icon and color palette for link categories
//!
//! One record per category holds all three facets (icon, gradient, style),
//! so a category can never end up with an icon from one table and colors
//! from another.

use crate::interface::{LinkAppearance, LinkCategory, LinkGradient, LinkStyle, ThemeColor};

/// Static palette record, colors as `#RRGGBB` literals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Palette {
    pub icon: &'static str,
    pub gradient: [&'static str; 2],
    pub background: &'static str,
    pub border: &'static str,
    pub hover: &'static str,
}

const fn entry(
    icon: &'static str,
    gradient: [&'static str; 2],
    [background, border, hover]: [&'static str; 3],
) -> Palette {
    Palette {
        icon,
        gradient,
        background,
        border,
        hover,
    }
}

const CODE_ICON: &str = "chevron.left.forwardslash.chevron.right.circle.fill";

#[rustfmt::skip]
pub(crate) const fn palette(category: LinkCategory) -> Palette {
    use LinkCategory::*;
    match category {
        Magnet => entry("arrow.down.circle.fill", ["#FF6B6B", "#FF8E8E"], ["#FFE6E6", "#FF6B6B", "#FFB3B3"]),

        Twitter => entry("message.circle.fill", ["#1DA1F2", "#0C85D0"], ["#E8F5FD", "#1DA1F2", "#BAE3FF"]),
        Facebook => entry("person.2.circle.fill", ["#4267B2", "#2B4B94"], ["#E7F3FF", "#4267B2", "#B7D4FF"]),
        Instagram => entry("camera.circle.fill", ["#E4405F", "#FD1D1D"], ["#FCE7EB", "#E4405F", "#FFB1C1"]),
        YouTube => entry("play.circle.fill", ["#FF0000", "#CC0000"], ["#FFE6E6", "#FF0000", "#FFB3B3"]),
        LinkedIn => entry("briefcase.circle.fill", ["#0077B5", "#005582"], ["#E6F3F9", "#0077B5", "#B3E0FF"]),
        GitHub => entry(CODE_ICON, ["#24292E", "#1B1F23"], ["#F0F2F5", "#24292E", "#D0D7DE"]),
        Reddit => entry("bubble.left.circle.fill", ["#FF4500", "#FF5700"], ["#FFECE5", "#FF4500", "#FFC4B0"]),
        Pinterest => entry("pin.circle.fill", ["#E60023", "#AD081B"], ["#FFE5EA", "#E60023", "#FFB3C1"]),
        TikTok => entry("video.circle.fill", ["#000000", "#FE2C55"], ["#F2F2F2", "#000000", "#FFB3C2"]),
        Weibo => entry("message.circle.fill", ["#DF2029", "#B2191F"], ["#FFE7E8", "#DF2029", "#FFB3B6"]),
        Zhihu => entry("questionmark.circle.fill", ["#0066FF", "#0047B2"], ["#E6F0FF", "#0066FF", "#B3D1FF"]),
        Bilibili => entry("play.circle.fill", ["#FB7299", "#FC9DB6"], ["#FFF0F5", "#FB7299", "#FFD6E5"]),
        Douyin => entry("video.circle.fill", ["#000000", "#25F4EE"], ["#E6FEFD", "#000000", "#B3FBF9"]),
        Xiaohongshu => entry("photo.circle.fill", ["#FE2C55", "#FF6C6C"], ["#FFE9EE", "#FE2C55", "#FFB3C2"]),

        Pdf => entry("doc.text.fill", ["#FF3850", "#FF6B81"], ["#FFE8EA", "#FF3850", "#FFB3BC"]),
        Word => entry("doc.fill", ["#2B579A", "#4285F4"], ["#E7ECF7", "#2B579A", "#B3C6E7"]),
        Excel => entry("tablecells.fill", ["#217346", "#33C481"], ["#E8F5ED", "#217346", "#B3E0C4"]),
        PowerPoint => entry("rectangle.stack.fill", ["#D24726", "#FF8F6B"], ["#FFE9E3", "#D24726", "#FFB8A3"]),
        Image => entry("photo.circle.fill", ["#4FACFE", "#00F2FE"], ["#E6F7FF", "#4FACFE", "#B3E0FF"]),
        Video => entry("video.circle.fill", ["#6D45E6", "#A16BFE"], ["#F0E8FF", "#6D45E6", "#D4B3FF"]),
        Audio => entry("music.note.circle.fill", ["#FF3CAC", "#784BA0"], ["#FFE6F7", "#FF3CAC", "#FFB3E6"]),
        Archive => entry("folder.circle.fill", ["#525252", "#737373"], ["#F0F0F0", "#525252", "#D1D1D1"]),
        Code => entry(CODE_ICON, ["#2CD8D5", "#6B8DD6"], ["#E6F9F8", "#2CD8D5", "#B3F0EE"]),

        News => entry("newspaper.circle.fill", ["#48C6EF", "#6F86D6"], ["#E8F3FF", "#48C6EF", "#B3E0FF"]),
        Shopping => entry("cart.circle.fill", ["#FF9A9E", "#FAD0C4"], ["#FFF0F0", "#FF9A9E", "#FFD6D6"]),
        Search => entry("magnifyingglass.circle.fill", ["#4285F4", "#34A853"], ["#E8F0FF", "#4285F4", "#B3D1FF"]),
        Mail => entry("envelope.circle.fill", ["#FF5858", "#F09819"], ["#FFF0E6", "#FF5858", "#FFB3B3"]),
        Generic => entry("link.circle.fill", ["#4A90E2", "#67B8F7"], ["#F0F2F5", "#1A2542", "#FFD84D"]),
    }
}

/// Parse a palette color to RGBA u32 (0xRRGGBBAA format)
pub(crate) fn parse_hex_rgba(hex: &str) -> Option<u32> {
    let color = csscolorparser::parse(hex.trim()).ok()?;
    let [r, g, b, a] = color.to_rgba8();
    Some(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
}

fn theme_color(hex: &'static str) -> ThemeColor {
    let rgba = parse_hex_rgba(hex).unwrap_or_else(|| {
        tracing::warn!(hex, "palette color failed to parse, rendering as transparent");
        0
    });
    ThemeColor {
        hex: hex.to_string(),
        rgba,
    }
}

impl LinkCategory {
    /// SF Symbol name for this category
    pub fn icon(self) -> &'static str {
        palette(self).icon
    }

    /// Icon, gradient and row style for this category
    pub fn appearance(self) -> LinkAppearance {
        let p = palette(self);
        LinkAppearance {
            category: self,
            icon: p.icon.to_string(),
            gradient: LinkGradient {
                start: theme_color(p.gradient[0]),
                end: theme_color(p.gradient[1]),
            },
            style: LinkStyle {
                background: theme_color(p.background),
                border: theme_color(p.border),
                hover: theme_color(p.hover),
            },
        }
    }
}
