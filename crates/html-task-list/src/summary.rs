//! The summarization pass.
//!
//! Runs only in todo-only mode, after the rewrite pass. Walks the
//! top-level children of the document and keeps, deletes, or prunes each
//! one so that only task-list structure (and leading content whose tag is
//! outside the removal set) survives.

use std::rc::Rc;

use markup5ever_rcdom::Handle;

use crate::dom;
use crate::rewrite::{TASK_LIST_CLASS, TASK_LIST_ITEM_CLASS};

fn is_list(node: &Handle) -> bool {
    matches!(dom::element_name(node), Some("ul" | "ol"))
}

/// Top-level tags that carry ordinary document content and are dropped
/// from the summary view.
fn is_removable_content(node: &Handle) -> bool {
    matches!(
        dom::element_name(node),
        Some("p" | "blockquote" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "hr" | "pre")
    )
}

/// Prunes the top-level children of `root` down to a summary.
///
/// Survival is decided by tag and marker alone, never by position: a
/// leading heading is removed like any other, while an unrecognized tag
/// anywhere is left untouched.
pub(crate) fn prune_document(root: &Handle) {
    let top_level: Vec<Handle> = root.children.borrow().iter().map(Rc::clone).collect();
    for node in &top_level {
        if is_list(node) {
            if dom::has_css_class(node, TASK_LIST_CLASS) {
                strip_unmarked_items(node);
            } else {
                prune_ordinary_list(node);
            }
        } else if is_removable_content(node) {
            dom::detach(node);
        }
    }
}

/// Inside a task list, drop the items that did not match the checkbox
/// pattern (including items emptied by completed-work suppression).
fn strip_unmarked_items(list: &Handle) {
    let doomed: Vec<Handle> = list
        .children
        .borrow()
        .iter()
        .filter(|child| {
            dom::is_element(child, "li") && !dom::has_css_class(child, TASK_LIST_ITEM_CLASS)
        })
        .map(Rc::clone)
        .collect();
    for item in &doomed {
        dom::detach(item);
    }
}

/// A list with no marker of its own may still shelter a task list one
/// level down. Children whose direct children include a marked list are
/// kept; the rest go, and if nothing is kept the whole list goes.
///
/// The descent is deliberately one level deep: a task list nested further
/// down an unmarked list is not discovered.
fn prune_ordinary_list(list: &Handle) {
    let mut doomed = Vec::new();
    let mut delete_list = true;
    for child in list.children.borrow().iter() {
        let shelters_task_list = child.children.borrow().iter().any(|grandchild| {
            is_list(grandchild) && dom::has_css_class(grandchild, TASK_LIST_CLASS)
        });
        if shelters_task_list {
            delete_list = false;
        } else {
            doomed.push(Rc::clone(child));
        }
    }
    if delete_list {
        dom::detach(list);
    } else {
        for child in &doomed {
            dom::detach(child);
        }
    }
}
