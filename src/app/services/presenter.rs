//! Turns digest state into `HelpView` markup.
//!
//! Link and plain segments are emitted verbatim: the digest service is the
//! trust boundary for paragraph HTML. Only text this crate produces itself
//! (category titles, error messages) is escaped.

use std::path::Path;

use super::colorizer::{Segment, colorize_with};
use crate::app::domain::{DigestSection, FetchOutcome, Palette};

pub const HEADING: &str = "Today's Top Stories";
pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No digest available.";

const MUTED_COLOR: &str = "#9ca3af";
const ERROR_COLOR: &str = "#fb7185";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryIcon {
    #[default]
    Globe,
    File,
    Window,
    Next,
}

impl CategoryIcon {
    /// Icon for a category name. Unknown names get the globe.
    pub fn for_category(category: &str) -> Self {
        match category {
            "International" => Self::Globe,
            "Indian" => Self::File,
            "Sports" => Self::Window,
            "Tech" => Self::Next,
            _ => Self::default(),
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Globe => "globe.svg",
            Self::File => "file.svg",
            Self::Window => "window.svg",
            Self::Next => "next.svg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBlock {
    pub category: String,
    pub icon: CategoryIcon,
    pub segments: Vec<Segment>,
}

impl CategoryBlock {
    pub fn to_html(&self, icons_dir: &Path) -> String {
        let icon_path = icons_dir.join(self.icon.file_name());
        let mut html = format!(
            "<table><tr><td><img src=\"{}\" width=\"32\" height=\"32\"></td><td><h2>{}</h2></td></tr></table>\n<p>",
            icon_path.display(),
            escape_html(&self.category)
        );
        for segment in &self.segments {
            match segment {
                Segment::Plain(text) => html.push_str(text),
                Segment::Link { markup, color } => {
                    html.push_str(&format!("<font color=\"{}\"><b>{}</b></font>", color.hex(), markup));
                }
            }
        }
        html.push_str("</p>\n");
        html
    }
}

pub fn present_category(category: &str, paragraph: &str, palette: &Palette) -> CategoryBlock {
    CategoryBlock {
        category: category.to_string(),
        icon: CategoryIcon::for_category(category),
        segments: colorize_with(paragraph, palette),
    }
}

/// Naive sentence split on `.`: pieces are trimmed and empty ones dropped.
///
/// Not used by [`render_digest`], which shows the colorized paragraph.
pub fn summary_sentences(summary: &str) -> Vec<&str> {
    summary
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Markup for the whole digest panel in the given state.
pub fn render_digest(outcome: &FetchOutcome, palette: &Palette, icons_dir: &Path) -> String {
    let body = match outcome {
        FetchOutcome::Loading => placeholder(LOADING_TEXT, MUTED_COLOR),
        FetchOutcome::Failed(message) => placeholder(&escape_html(message), ERROR_COLOR),
        FetchOutcome::Ready(sections) if sections.is_empty() => placeholder(EMPTY_TEXT, MUTED_COLOR),
        FetchOutcome::Ready(sections) => render_sections(sections, palette, icons_dir),
    };
    wrap_html_for_helpview(&body)
}

fn render_sections(sections: &[DigestSection], palette: &Palette, icons_dir: &Path) -> String {
    let mut html = format!("<center><h1>{}</h1></center>\n", HEADING);
    for section in sections {
        let block = present_category(&section.category, &section.paragraph, palette);
        html.push_str(&block.to_html(icons_dir));
        html.push_str("<hr>\n");
    }
    html
}

/// `href` values of every link in a ready digest, in display order.
pub fn link_targets(outcome: &FetchOutcome) -> Vec<String> {
    outcome
        .sections()
        .iter()
        .flat_map(|section| colorize_with(&section.paragraph, &Palette::default()))
        .filter(Segment::is_link)
        .filter_map(|segment| href_of(segment.markup()).map(str::to_string))
        .collect()
}

/// The external link that `HelpView` tried to follow, if `page` (the view's
/// content after a click) mentions one of `targets`. The longest match wins
/// so `https://e.x/a` is preferred over `https://e.x`.
pub fn followed_link<'a>(page: &str, targets: &'a [String]) -> Option<&'a str> {
    targets
        .iter()
        .map(String::as_str)
        .filter(|target| is_external(target) && page.contains(target))
        .max_by_key(|target| target.len())
}

fn is_external(target: &str) -> bool {
    ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| target.starts_with(scheme))
}

/// Value of the `href` attribute in a link's opening tag.
fn href_of(markup: &str) -> Option<&str> {
    let tag = &markup[..markup.find('>')?];
    let start = tag.find(" href=")? + " href=".len();
    let rest = &tag[start..];
    match rest.chars().next()? {
        quote @ ('"' | '\'') => {
            let rest = &rest[1..];
            rest.find(quote).map(|end| &rest[..end])
        }
        _ => rest.split_whitespace().next(),
    }
}

fn placeholder(text: &str, color: &str) -> String {
    format!("<p><font color=\"{}\">{}</font></p>", color, text)
}

fn wrap_html_for_helpview(html: &str) -> String {
    format!("<font face=\"Helvetica\" size=\"4\">{}</font>", html)
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
