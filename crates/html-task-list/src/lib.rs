//! Task-list post-processing for rendered Markdown HTML.
//!
//! This crate runs after a Markdown renderer and HTML sanitizer have
//! produced a document fragment. It recognizes list items that start with
//! a checkbox token (`[ ]` / `[x]`), converts them into task-list items
//! with checkbox-input markup, and marks the surrounding lists so later
//! pipeline stages can style them. In *todo-only* mode it additionally
//! reduces the document to a summary: completed items are blanked, and
//! everything at the top level that is neither task-list structure nor an
//! unrecognized (and therefore preserved) tag is removed.
//!
//! # Examples
//!
//! Base rewrite:
//!
//! ```
//! use html_task_list::{FilterOptions, filter_html};
//!
//! let rendered = "<ul><li>[ ] milk</li><li>[x] eggs</li></ul>";
//! let output = filter_html(rendered, &FilterOptions::default())?;
//!
//! assert_eq!(output.task_list_items.len(), 2);
//! assert!(output.html.contains("<ul class=\"task-list\">"));
//! assert!(output.html.contains("task-list-item-checkbox"));
//! # Ok::<(), html_task_list::FilterError>(())
//! ```
//!
//! Summary view:
//!
//! ```
//! use html_task_list::{FilterOptions, filter_html};
//!
//! let rendered = "<h1>Trip</h1><ul><li>[ ] pack</li><li>[x] book flights</li></ul>";
//! let output = filter_html(rendered, &FilterOptions { todo_only: true })?;
//!
//! assert!(!output.html.contains("Trip"));
//! assert!(!output.html.contains("book flights"));
//! assert!(output.html.contains("pack"));
//! # Ok::<(), html_task_list::FilterError>(())
//! ```

mod dom;
mod error;
mod item;
mod options;
mod rewrite;
mod summary;

pub use error::{FilterError, Result};
pub use item::TaskItem;
pub use markup5ever_rcdom::{Handle, RcDom};
pub use options::FilterOptions;

/// Result of filtering one rendered document.
#[derive(Debug, Clone)]
pub struct FilterOutput {
    /// The filtered document fragment, re-serialized.
    pub html: String,
    /// Discovered task items, in document order. Items suppressed in
    /// todo-only mode are not reported.
    pub task_list_items: Vec<TaskItem>,
}

/// Filters a rendered HTML fragment.
///
/// Parses `html`, runs the rewrite pass (and, in todo-only mode, the
/// summary pass) in place, and re-serializes the result.
///
/// # Errors
///
/// Returns [`FilterError::ParseError`] when the input cannot be parsed
/// into a document. The passes themselves never fail.
pub fn filter_html(html: &str, options: &FilterOptions) -> Result<FilterOutput> {
    let dom = dom::parse_html(html)?;
    let body = dom::document_body(&dom)
        .ok_or_else(|| FilterError::ParseError("document has no body".to_string()))?;
    let task_list_items = filter_tree(&body, options);
    Ok(FilterOutput {
        html: dom::inner_html(&body),
        task_list_items,
    })
}

/// Filters a parsed tree in place.
///
/// `root` is the element whose children are the document's top-level
/// nodes (the `<body>` of a parsed fragment). Returns the discovered task
/// items in document order; the tree itself is mutated and stays with the
/// caller for further pipeline stages.
pub fn filter_tree(root: &Handle, options: &FilterOptions) -> Vec<TaskItem> {
    let task_list_items = rewrite::rewrite_list_items(root, options);
    if options.todo_only {
        summary::prune_document(root);
    }
    task_list_items
}
