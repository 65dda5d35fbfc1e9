//! Flat-style SVG badge rendering.
//!
//! Produces the small two-section badge shown on the login page: a grey
//! label section next to a colored value section. The output is embedded
//! inline in the page template, so all text is XML-escaped here.

/// Badge height in pixels.
const BADGE_HEIGHT: u32 = 20;

/// Horizontal padding on each side of a text section.
const SECTION_PADDING: u32 = 5;

/// Named colors accepted for the value section.
///
/// Anything starting with `#` is passed through as-is; unknown names fall
/// back to light grey.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("blue", "#007ec6"),
    ("brightgreen", "#4c1"),
    ("green", "#97ca00"),
    ("grey", "#555"),
    ("lightgrey", "#9f9f9f"),
    ("orange", "#fe7d37"),
    ("red", "#e05d44"),
    ("yellow", "#dfb317"),
];

/// Renders a flat SVG badge with the given label, value, and color.
///
/// The color may be a named color (`"blue"`, `"red"`, ...) or a literal
/// `#rrggbb` value.
///
/// # Examples
///
/// ```ignore
/// let svg = render_badge("login", "click to login", "blue");
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("#007ec6"));
/// ```
pub fn render_badge(label: &str, value: &str, color: &str) -> String {
    let color = resolve_color(color);

    let label_width = text_width(label) + 2 * SECTION_PADDING;
    let value_width = text_width(value) + 2 * SECTION_PADDING;
    let total_width = label_width + value_width;

    let label_x = label_width / 2;
    let value_x = label_width + value_width / 2;

    let label = escape_xml(label);
    let value = escape_xml(value);

    format!(
        concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}">"##,
            r##"<linearGradient id="smooth" x2="0" y2="100%">"##,
            r##"<stop offset="0" stop-color="#bbb" stop-opacity=".1"/>"##,
            r##"<stop offset="1" stop-opacity=".1"/>"##,
            r##"</linearGradient>"##,
            r##"<mask id="round"><rect width="{w}" height="{h}" rx="3" fill="#fff"/></mask>"##,
            r##"<g mask="url(#round)">"##,
            r##"<rect width="{lw}" height="{h}" fill="#555"/>"##,
            r##"<rect x="{lw}" width="{vw}" height="{h}" fill="{color}"/>"##,
            r##"<rect width="{w}" height="{h}" fill="url(#smooth)"/>"##,
            r##"</g>"##,
            r##"<g fill="#fff" text-anchor="middle" "##,
            r##"font-family="DejaVu Sans,Verdana,Geneva,sans-serif" font-size="11">"##,
            r##"<text x="{lx}" y="15" fill="#010101" fill-opacity=".3">{label}</text>"##,
            r##"<text x="{lx}" y="14">{label}</text>"##,
            r##"<text x="{vx}" y="15" fill="#010101" fill-opacity=".3">{value}</text>"##,
            r##"<text x="{vx}" y="14">{value}</text>"##,
            r##"</g>"##,
            r##"</svg>"##,
        ),
        w = total_width,
        h = BADGE_HEIGHT,
        lw = label_width,
        vw = value_width,
        lx = label_x,
        vx = value_x,
        color = color,
        label = label,
        value = value,
    )
}

/// Resolves a color name to its hex value.
fn resolve_color(color: &str) -> String {
    if color.starts_with('#') {
        return color.to_string();
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == color)
        .map(|(_, hex)| (*hex).to_string())
        .unwrap_or_else(|| "#9f9f9f".to_string())
}

/// Estimates rendered text width at font size 11.
///
/// Real font metrics are not available server-side; this approximation is
/// wide enough for both Latin and CJK glyphs.
fn text_width(text: &str) -> u32 {
    text.chars().map(|c| if c.is_ascii() { 7 } else { 13 }).sum()
}

/// Escapes text for embedding inside an XML text node or attribute.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_badge_is_svg() {
        let svg = render_badge("login", "click to login", "blue");
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_render_badge_contains_texts() {
        let svg = render_badge("login", "click to login", "blue");
        assert!(svg.contains(">login</text>"));
        assert!(svg.contains(">click to login</text>"));
    }

    #[test]
    fn test_render_badge_named_color() {
        let svg = render_badge("login", "ok", "blue");
        assert!(svg.contains("#007ec6"));
    }

    #[test]
    fn test_render_badge_hex_color_passthrough() {
        let svg = render_badge("login", "ok", "#123abc");
        assert!(svg.contains("#123abc"));
    }

    #[test]
    fn test_render_badge_unknown_color_falls_back() {
        let svg = render_badge("login", "ok", "mauve");
        assert!(svg.contains("#9f9f9f"));
    }

    #[test]
    fn test_render_badge_escapes_markup() {
        let svg = render_badge("<b>", "a&b\"c", "blue");
        assert!(svg.contains("&lt;b&gt;"));
        assert!(svg.contains("a&amp;b&quot;c"));
        assert!(!svg.contains("<b>"));
    }

    #[test]
    fn test_render_badge_width_grows_with_text() {
        let short = render_badge("a", "b", "blue");
        let long = render_badge("a much longer label", "and a longer value", "blue");
        assert!(long.len() > short.len());

        let width_of = |svg: &str| {
            let start = svg.find("width=\"").unwrap() + 7;
            let end = svg[start..].find('"').unwrap() + start;
            svg[start..end].parse::<u32>().unwrap()
        };
        assert!(width_of(&long) > width_of(&short));
    }

    #[test]
    fn test_render_badge_wide_glyphs_widen_section() {
        let ascii = render_badge("ab", "cd", "blue");
        let cjk = render_badge("登录", "点击", "blue");

        let width_of = |svg: &str| {
            let start = svg.find("width=\"").unwrap() + 7;
            let end = svg[start..].find('"').unwrap() + start;
            svg[start..end].parse::<u32>().unwrap()
        };
        assert!(width_of(&cjk) > width_of(&ascii));
    }
}
