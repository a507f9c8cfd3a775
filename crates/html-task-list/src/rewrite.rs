//! The detection/rewrite pass.
//!
//! Walks every list item in reverse document order, converts
//! checkbox-prefixed items into task-list items, marks the enclosing list
//! and item with class markers, and re-renders the item's content as a
//! checkbox widget. Nothing is removed here; removal is the summary
//! pass's job.

use std::collections::VecDeque;
use std::rc::Rc;

use markup5ever_rcdom::Handle;

use crate::dom;
use crate::item::TaskItem;
use crate::options::FilterOptions;

/// Class marker meaning "this list contains task-list items".
pub(crate) const TASK_LIST_CLASS: &str = "task-list";
/// Class marker meaning "this item's content matched the checkbox pattern".
pub(crate) const TASK_LIST_ITEM_CLASS: &str = "task-list-item";

/// Rewrites checkbox-prefixed list items under `root`, returning the
/// discovered items in document order.
///
/// Iteration runs over a snapshot of the `li` nodes, in reverse: content
/// replacement only ever touches nodes at or below the current position,
/// so items nested inside a later-processed ancestor are already rewritten
/// (and carry their markers as plain attributes) by the time the ancestor
/// re-serializes them.
pub(crate) fn rewrite_list_items(root: &Handle, options: &FilterOptions) -> Vec<TaskItem> {
    let mut discovered = VecDeque::new();
    let items = dom::list_items(root);
    for item_node in items.iter().rev() {
        let Some(list) = dom::parent(item_node) else {
            continue;
        };
        if dom::list_items(&list).is_empty() {
            continue;
        }

        let target = dom::item_paragraph(item_node).unwrap_or_else(|| Rc::clone(item_node));
        let Some(item) = TaskItem::parse(&dom::inner_html(&target)) else {
            continue;
        };

        dom::add_css_class(&list, TASK_LIST_CLASS);

        if options.todo_only && item.is_complete() {
            // Completed work disappears from the summary: blank the item
            // but leave the node and the list marker in place.
            dom::set_inner_html(&target, "");
            continue;
        }

        // Prepend: iteration is reversed, the caller gets document order.
        dom::add_css_class(item_node, TASK_LIST_ITEM_CLASS);
        dom::set_inner_html(&target, &item.render());
        discovered.push_front(item);
    }
    discovered.into()
}
