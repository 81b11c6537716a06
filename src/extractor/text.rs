//! Text collection and cleanup

use ego_tree::NodeRef;
use scraper::{ElementRef, Node};

/// Elements whose whole subtree is left out of page text
const EXCLUDED_ELEMENTS: &[&str] = &[
    "script", "style", "noscript", "header", "nav", "footer", "aside",
];

/// Maximum number of characters kept from a page's text
pub const MAX_TEXT_CHARS: usize = 10_000;

/// Appended to text cut at [`MAX_TEXT_CHARS`]
pub const TRUNCATION_MARKER: &str = " …";

/// Lines this short (in characters) carry no content
const MIN_LINE_CHARS: usize = 3;

/// Collects the trimmed, non-empty text nodes under `root`
///
/// Excluded subtrees are skipped during the walk; the document itself is
/// never modified, so the same element can be read again afterwards.
pub(super) fn collect_text(root: ElementRef<'_>) -> Vec<String> {
    let mut out = Vec::new();
    walk(*root, &mut out);
    out
}

fn walk(node: NodeRef<'_, Node>, out: &mut Vec<String>) {
    match node.value() {
        Node::Text(text) => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                out.push(trimmed.to_string());
            }
        }
        Node::Element(element) if EXCLUDED_ELEMENTS.contains(&element.name()) => {}
        Node::Element(_) | Node::Document | Node::Fragment => {
            for child in node.children() {
                walk(child, out);
            }
        }
        // Comments, doctypes and processing instructions carry no text
        _ => {}
    }
}

/// Joins the text nodes of an element with single spaces
///
/// Used for headings, where nested inline markup should not break the line.
pub(super) fn inline_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turns collected text nodes into the cleaned page text
///
/// Every text node becomes at least one line. Lines of two characters or
/// fewer and lines starting with a boilerplate prefix (compared
/// case-insensitively) are dropped. `boilerplate_prefixes` must already be
/// lower-cased.
pub(super) fn clean_lines(fragments: &[String], boilerplate_prefixes: &[String]) -> String {
    let joined = fragments.join("\n");

    joined
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() >= MIN_LINE_CHARS)
        .filter(|line| {
            let lowered = line.to_lowercase();
            !boilerplate_prefixes
                .iter()
                .any(|prefix| lowered.starts_with(prefix.as_str()))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Caps text at [`MAX_TEXT_CHARS`] characters, appending the truncation marker
pub(super) fn truncate_text(text: String) -> String {
    match text.char_indices().nth(MAX_TEXT_CHARS) {
        Some((cut, _)) => {
            let mut truncated = text[..cut].to_string();
            truncated.push_str(TRUNCATION_MARKER);
            truncated
        }
        None => text,
    }
}
