//! Line-based markdown-lite renderer for the guide entries.
//!
//! This deliberately is not a markdown parser. Each line is classified on
//! its prefix alone, then four inline passes run over the assembled
//! document in a fixed order: links, inline code, bold, italic. There is
//! no nesting, no multi-line constructs, and no escaping.
//!
//! Content is authored in this crate and trusted; nothing is sanitized.

/// Render one guide document to an HTML fragment.
pub fn render(content: &str) -> String {
    let html: String = content.lines().map(render_line).collect();
    let html = render_links(&html);
    let html = render_spans(&html, "`", "<code>", "</code>");
    let html = render_spans(&html, "**", "<strong>", "</strong>");
    render_spans(&html, "*", "<em>", "</em>")
}

/// Classify one line by prefix and wrap it in its block element.
fn render_line(line: &str) -> String {
    if line.trim().is_empty() {
        return String::from(r#"<div class="spacer"></div>"#);
    }
    // Longest heading prefix first; `#####` would otherwise match `#`.
    if let Some(text) = line.strip_prefix("##### ") {
        return format!(r#"<h2 class="muted">{text}</h2>"#);
    }
    if let Some(text) = line.strip_prefix("#### ") {
        return format!(r#"<h2 class="accent">{text}</h2>"#);
    }
    if let Some(text) = line.strip_prefix("### ") {
        return format!("<h3>{text}</h3>");
    }
    if let Some(text) = line.strip_prefix("## ") {
        return format!("<h2>{text}</h2>");
    }
    if let Some(text) = line.strip_prefix("# ") {
        return format!("<h1>{text}</h1>");
    }
    if let Some(text) = line.strip_prefix("  - ") {
        return format!(
            r#"<div class="bullet sub"><span class="dot"></span><span>{text}</span></div>"#
        );
    }
    if let Some(text) = line.strip_prefix("- ") {
        return format!(r#"<div class="bullet"><span class="dot"></span><span>{text}</span></div>"#);
    }
    format!("<p>{line}</p>")
}

/// Replace every well-formed `[text](url)` with an anchor.
///
/// A lone `[` without a matching `](...)` passes through unchanged.
fn render_links(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    loop {
        let Some(open) = rest.find('[') else {
            out.push_str(rest);
            return out;
        };
        out.push_str(rest.get(..open).unwrap_or_default());
        let tail = rest.get(open..).unwrap_or_default();
        if let Some((text, url, remainder)) = parse_link(tail) {
            out.push_str(r#"<a href=""#);
            out.push_str(url);
            out.push_str(r#"" target="_blank" rel="noopener noreferrer">"#);
            out.push_str(text);
            out.push_str("</a>");
            rest = remainder;
        } else {
            out.push('[');
            rest = tail.get(1..).unwrap_or_default();
        }
    }
}

/// Split `[text](url)rest` into its parts, or `None` if malformed.
fn parse_link(tail: &str) -> Option<(&str, &str, &str)> {
    let body = tail.strip_prefix('[')?;
    let close = body.find(']')?;
    let text = body.get(..close)?;
    if text.is_empty() || text.contains('[') {
        return None;
    }
    let after = body.get(close..)?.strip_prefix("](")?;
    let close_paren = after.find(')')?;
    let url = after.get(..close_paren)?;
    if url.is_empty() {
        return None;
    }
    let remainder = after.get(close_paren.saturating_add(1)..)?;
    Some((text, url, remainder))
}

/// Replace delimiter-paired spans (`` ` ``, `**`, `*`) with a tag pair.
///
/// Unpaired or empty delimiters pass through unchanged. Runs after the
/// bold pass, the italic pass only ever sees single asterisks.
fn render_spans(input: &str, delim: &str, open_tag: &str, close_tag: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    loop {
        let Some(start) = rest.find(delim) else {
            out.push_str(rest);
            return out;
        };
        out.push_str(rest.get(..start).unwrap_or_default());
        let after_open = rest
            .get(start.saturating_add(delim.len())..)
            .unwrap_or_default();
        match after_open.find(delim) {
            Some(end) if end > 0 => {
                out.push_str(open_tag);
                out.push_str(after_open.get(..end).unwrap_or_default());
                out.push_str(close_tag);
                rest = after_open
                    .get(end.saturating_add(delim.len())..)
                    .unwrap_or_default();
            }
            _ => {
                out.push_str(delim);
                rest = after_open;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_map_by_prefix_depth() {
        assert_eq!(render("# Title"), "<h1>Title</h1>");
        assert_eq!(render("## Section"), "<h2>Section</h2>");
        assert_eq!(render("### Detail"), "<h3>Detail</h3>");
        assert_eq!(render("#### Not Allowed"), r#"<h2 class="accent">Not Allowed</h2>"#);
        assert_eq!(render("##### Grey Areas"), r#"<h2 class="muted">Grey Areas</h2>"#);
    }

    #[test]
    fn bullets_and_sub_bullets_nest_by_indent() {
        let html = render("- top\n  - nested");
        assert!(html.contains(r#"<div class="bullet"><span class="dot"></span><span>top</span></div>"#));
        assert!(html.contains(r#"<div class="bullet sub"><span class="dot"></span><span>nested</span></div>"#));
    }

    #[test]
    fn blank_lines_become_spacers() {
        let html = render("one\n\ntwo");
        assert_eq!(
            html,
            r#"<p>one</p><div class="spacer"></div><p>two</p>"#
        );
    }

    #[test]
    fn links_render_as_anchors() {
        assert_eq!(
            render("see [the map](https://survival.valesmp.com) here"),
            concat!(
                "<p>see <a href=\"https://survival.valesmp.com\" target=\"_blank\" ",
                "rel=\"noopener noreferrer\">the map</a> here</p>"
            )
        );
    }

    #[test]
    fn unmatched_bracket_passes_through() {
        assert_eq!(render("array[0] stays"), "<p>array[0] stays</p>");
    }

    #[test]
    fn inline_code_bold_and_italic() {
        assert_eq!(render("use `/spawn` now"), "<p>use <code>/spawn</code> now</p>");
        assert_eq!(render("**English Only**: rule"), "<p><strong>English Only</strong>: rule</p>");
        assert_eq!(render("this is *not* optional"), "<p>this is <em>not</em> optional</p>");
    }

    #[test]
    fn bold_runs_before_italic() {
        assert_eq!(
            render("**bold** and *italic*"),
            "<p><strong>bold</strong> and <em>italic</em></p>"
        );
    }

    #[test]
    fn unpaired_delimiters_pass_through() {
        assert_eq!(render("a * b"), "<p>a * b</p>");
        assert_eq!(render("tick ` alone"), "<p>tick ` alone</p>");
    }

    #[test]
    fn links_inside_bullets_work() {
        let html = render("- visit [Prism Launcher](https://prismlauncher.org/)");
        assert!(html.contains(r#"<a href="https://prismlauncher.org/""#));
        assert!(html.starts_with(r#"<div class="bullet">"#));
    }

    #[test]
    fn code_spans_keep_brackets_when_no_link_matches() {
        assert_eq!(
            render("`/home [name]` sets one"),
            "<p><code>/home [name]</code> sets one</p>"
        );
    }
}
