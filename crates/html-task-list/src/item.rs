//! Checkbox-marker matching and task-item rendering.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches a checkbox token at the start of an item's content: an optional
/// list-marker prefix, optional whitespace, then `[ ]` (any single
/// whitespace character) or `[x]`/`[X]`. The token must be followed by
/// whitespace; the `regex` crate has no lookahead, so that character is
/// consumed by the match and callers split on the capture's end offset.
static ITEM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\s*[-+*]|\d+\.)?\s*(\[\s\]|\[[xX]\])\s").expect("valid regex"));

const CHECKBOX_INCOMPLETE: &str =
    r#"<input type="checkbox" class="task-list-item-checkbox" disabled="disabled"/>"#;
const CHECKBOX_COMPLETE: &str =
    r#"<input type="checkbox" class="task-list-item-checkbox" checked="checked" disabled="disabled"/>"#;

/// A single recognized task-list item.
///
/// Constructed transiently while rewriting a document; the full set of
/// discovered items is handed back to the caller in document order for
/// reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    /// The matched checkbox token, e.g. `[ ]` or `[x]`.
    pub checkbox: String,
    /// The item's original inner HTML, checkbox token included.
    pub source: String,
}

impl TaskItem {
    /// Extracts a task item from an item's inner HTML.
    ///
    /// A single trailing newline is ignored when matching, but `source`
    /// keeps the content exactly as given. Returns `None` when the content
    /// does not start with a checkbox token.
    #[must_use]
    pub fn parse(content: &str) -> Option<Self> {
        let caps = ITEM_PATTERN.captures(chomp(content))?;
        let checkbox = caps.get(1)?.as_str().to_string();
        Some(Self {
            checkbox,
            source: content.to_string(),
        })
    }

    /// Whether the checkbox token marks this item as done.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.checkbox.as_str(), "[x]" | "[X]")
    }

    /// Renders the item as checkbox-input markup.
    ///
    /// Everything up to the end of the checkbox token is replaced by a
    /// disabled `<input>`; the rest of the source, starting with the
    /// whitespace that followed the token, is kept verbatim.
    #[must_use]
    pub fn render(&self) -> String {
        let Some(marker) = ITEM_PATTERN.captures(chomp(&self.source)).and_then(|caps| caps.get(1))
        else {
            return self.source.clone();
        };
        let checkbox = if self.is_complete() {
            CHECKBOX_COMPLETE
        } else {
            CHECKBOX_INCOMPLETE
        };
        format!("{checkbox}{}", &self.source[marker.end()..])
    }
}

/// Strips one trailing `\r\n`, `\n`, or `\r`.
fn chomp(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .or_else(|| text.strip_suffix('\r'))
        .unwrap_or(text)
}
