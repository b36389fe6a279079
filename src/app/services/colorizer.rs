//! Paragraph colorizer.
//!
//! Splits a digest paragraph into plain text and inline anchor fragments
//! (`<a ...>...</a>`) and gives every fragment the next color from a palette.
//!
//! The scan is a two-state machine:
//!
//! - `Plain`: look for the next `<a ` whose tag has at least one attribute
//!   character before its `>`.
//! - `InLink`: look for the nearest `</a>` after the opening tag, on the same
//!   line (`\n`, `\r`, U+2028 and U+2029 all end a line). If there is none,
//!   the opening tag was not a link after all and the scan resumes one
//!   character past its `<`, leaving it in plain text.
//!
//! Both kinds of segment keep the source text verbatim. A link segment gets
//! one trailing space so it does not run into the text after it.

use crate::app::domain::{LinkColor, Palette};

const OPEN_TAG: &str = "<a ";
const CLOSE_TAG: &str = "</a>";
const LINK_SEPARATOR: char = ' ';
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Link { markup: String, color: LinkColor },
}

impl Segment {
    /// Text as it should be handed to the renderer.
    pub fn markup(&self) -> &str {
        match self {
            Segment::Plain(text) => text,
            Segment::Link { markup, .. } => markup,
        }
    }

    /// Text as it appeared in the paragraph, without the link separator.
    pub fn source_text(&self) -> &str {
        match self {
            Segment::Plain(text) => text,
            Segment::Link { markup, .. } => markup.strip_suffix(LINK_SEPARATOR).unwrap_or(markup),
        }
    }

    pub fn color(&self) -> Option<LinkColor> {
        match self {
            Segment::Plain(_) => None,
            Segment::Link { color, .. } => Some(*color),
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Segment::Link { .. })
    }
}

#[derive(Debug, Clone, Copy)]
enum ScanState {
    Plain,
    /// `open` is the byte offset of `<a `, `body` the first byte after its `>`.
    InLink { open: usize, body: usize },
}

/// Colorize with the default palette.
pub fn colorize(paragraph: &str) -> Vec<Segment> {
    colorize_with(paragraph, &Palette::default())
}

/// Colorize `paragraph`. The color counter starts at zero on every call.
pub fn colorize_with(paragraph: &str, palette: &Palette) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut links = 0usize;
    // Start of text not yet emitted.
    let mut plain_start = 0usize;
    // Where the next opening-tag search begins.
    let mut cursor = 0usize;
    let mut state = ScanState::Plain;

    loop {
        match state {
            ScanState::Plain => {
                let Some(open) = find_from(paragraph, OPEN_TAG, cursor) else {
                    break;
                };
                let attrs = open + OPEN_TAG.len();
                let Some(gt) = paragraph[attrs..].find('>').map(|i| attrs + i) else {
                    // No later `<a ` can be closed either.
                    break;
                };
                if gt == attrs {
                    cursor = open + 1;
                    continue;
                }
                state = ScanState::InLink { open, body: gt + 1 };
            }
            ScanState::InLink { open, body } => {
                match link_end(paragraph, body) {
                    Some(end) => {
                        push_plain(&mut segments, &paragraph[plain_start..open]);

                        let mut markup = String::with_capacity(end - open + 1);
                        markup.push_str(&paragraph[open..end]);
                        markup.push(LINK_SEPARATOR);
                        let color = palette.color_at(links);
                        links += 1;
                        segments.push(Segment::Link { markup, color });

                        plain_start = end;
                        cursor = end;
                    }
                    None => {
                        tracing::debug!(offset = open, "unclosed link tag left as plain text");
                        cursor = open + 1;
                    }
                }
                state = ScanState::Plain;
            }
        }
    }

    push_plain(&mut segments, &paragraph[plain_start..]);
    segments
}

/// End offset (exclusive) of the nearest `</a>` after `body`, unless a line
/// terminator comes first.
fn link_end(paragraph: &str, body: usize) -> Option<usize> {
    let close = find_from(paragraph, CLOSE_TAG, body)?;
    if paragraph[body..close].contains(LINE_TERMINATORS) {
        return None;
    }
    Some(close + CLOSE_TAG.len())
}

fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack[from..].find(needle).map(|i| from + i)
}

fn push_plain(segments: &mut Vec<Segment>, text: &str) {
    if !text.is_empty() {
        segments.push(Segment::Plain(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(markup: &str, color: LinkColor) -> Segment {
        Segment::Link {
            markup: markup.to_string(),
            color,
        }
    }

    fn plain(text: &str) -> Segment {
        Segment::Plain(text.to_string())
    }

    fn reassemble(segments: &[Segment]) -> String {
        segments.iter().map(Segment::source_text).collect()
    }

    #[test]
    fn test_worked_example() {
        let segments = colorize(r#"Story one <a href="x">link</a> more text."#);
        assert_eq!(
            segments,
            vec![
                plain("Story one "),
                link(r#"<a href="x">link</a> "#, LinkColor::Emerald),
                plain(" more text."),
            ]
        );
    }

    #[test]
    fn test_no_links_is_single_plain_segment() {
        let text = "Markets closed higher. Nothing else of note.";
        assert_eq!(colorize(text), vec![plain(text)]);
    }

    #[test]
    fn test_empty_paragraph_has_no_segments() {
        assert!(colorize("").is_empty());
    }

    #[test]
    fn test_colors_cycle_through_palette() {
        let paragraph: String = (0..10)
            .map(|i| format!("item {i} <a href=\"/{i}\">#{i}</a>"))
            .collect::<Vec<_>>()
            .join(", ");
        let palette = Palette::default();

        let segments = colorize_with(&paragraph, &palette);
        let colors: Vec<LinkColor> = segments.iter().filter_map(Segment::color).collect();

        assert_eq!(colors.len(), 10);
        for (i, color) in colors.iter().enumerate() {
            assert_eq!(*color, palette.color_at(i % palette.len()));
        }
        assert_eq!(colors[8], LinkColor::Emerald);
        assert!(segments.len() <= 2 * 10 + 1);
    }

    #[test]
    fn test_counter_resets_per_paragraph() {
        let first = colorize(r#"<a href="a">a</a> and <a href="b">b</a>"#);
        let second = colorize(r#"<a href="c">c</a>"#);
        assert_eq!(first[2].color(), Some(LinkColor::Sky));
        assert_eq!(second[0].color(), Some(LinkColor::Emerald));
    }

    #[test]
    fn test_custom_palette() {
        let palette = Palette::new(vec![LinkColor::Rose]);
        let segments = colorize_with(r#"<a href="1">1</a><a href="2">2</a>"#, &palette);
        assert_eq!(
            segments,
            vec![
                link(r#"<a href="1">1</a> "#, LinkColor::Rose),
                link(r#"<a href="2">2</a> "#, LinkColor::Rose),
            ]
        );
    }

    #[test]
    fn test_adjacent_and_edge_links() {
        let text = r#"<a href="a">A</a><a href="b">B</a> tail"#;
        let segments = colorize(text);
        assert_eq!(segments.len(), 3);
        assert!(segments[0].is_link());
        assert!(segments[1].is_link());
        assert_eq!(segments[2], plain(" tail"));
        assert_eq!(reassemble(&segments), text);
    }

    #[test]
    fn test_link_content_is_non_greedy() {
        let text = r#"<a href="a">one</a> mid <a href="b">two</a>"#;
        let segments = colorize(text);
        assert_eq!(segments[0].source_text(), r#"<a href="a">one</a>"#);
        assert_eq!(segments[1], plain(" mid "));
        assert_eq!(segments[2].source_text(), r#"<a href="b">two</a>"#);
    }

    #[test]
    fn test_unclosed_tag_stays_plain() {
        let text = r#"Read <a href="x">more and never close it."#;
        assert_eq!(colorize(text), vec![plain(text)]);
    }

    #[test]
    fn test_unclosed_tag_before_real_link() {
        let text = "Broken <a href=\"x\">first\nthen <a href=\"y\">second</a> end";
        let segments = colorize(text);
        assert_eq!(
            segments,
            vec![
                plain("Broken <a href=\"x\">first\nthen "),
                link("<a href=\"y\">second</a> ", LinkColor::Emerald),
                plain(" end"),
            ]
        );
    }

    #[test]
    fn test_any_line_terminator_breaks_link_content() {
        for sep in ['\r', '\u{2028}', '\u{2029}'] {
            let text = format!("<a href=\"x\">split{sep}here</a> done");
            assert_eq!(colorize(&text), vec![plain(&text)]);
        }
    }

    #[test]
    fn test_tag_without_attributes_is_not_a_link() {
        let text = "<a >bare</a> and <abbr>x</abbr>";
        assert_eq!(colorize(text), vec![plain(text)]);
    }

    #[test]
    fn test_uppercase_tag_is_not_a_link() {
        let text = r#"<A href="x">shout</A>"#;
        assert_eq!(colorize(text), vec![plain(text)]);
    }

    #[test]
    fn test_reassembly_preserves_input() {
        let text = "Ünïcode — <a href=\"https://e.x/ü\">naïve</a>, then <a href=\"q\">q</a>. <a href=\"z\">dangling";
        let segments = colorize(text);
        assert_eq!(reassemble(&segments), text);
        assert!(segments.iter().all(|s| !s.markup().is_empty()));
        assert_eq!(segments.iter().filter(|s| s.is_link()).count(), 2);
    }
}
