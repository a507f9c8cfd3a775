//! Integration tests for the base task-list rewrite.

use html_task_list::{FilterOptions, FilterOutput, TaskItem, filter_html};

fn filter(html: &str) -> FilterOutput {
    filter_html(html, &FilterOptions::default()).unwrap()
}

const UNCHECKED: &str =
    "<input type=\"checkbox\" class=\"task-list-item-checkbox\" disabled=\"disabled\">";
const CHECKED: &str =
    "<input type=\"checkbox\" class=\"task-list-item-checkbox\" checked=\"checked\" disabled=\"disabled\">";

#[test]
fn rewrites_unchecked_and_checked_items() {
    let output = filter("<ul><li>[ ] milk</li><li>[x] eggs</li></ul>");
    assert_eq!(
        output.html,
        format!(
            "<ul class=\"task-list\">\
             <li class=\"task-list-item\">{UNCHECKED} milk</li>\
             <li class=\"task-list-item\">{CHECKED} eggs</li>\
             </ul>"
        )
    );
}

#[test]
fn collects_items_in_document_order() {
    let output = filter("<ul><li>[ ] A</li><li>[x] B</li><li>[ ] C</li></ul>");
    let sources: Vec<&str> = output
        .task_list_items
        .iter()
        .map(|item| item.source.as_str())
        .collect();
    assert_eq!(sources, ["[ ] A", "[x] B", "[ ] C"]);

    let complete: Vec<bool> = output
        .task_list_items
        .iter()
        .map(TaskItem::is_complete)
        .collect();
    assert_eq!(complete, [false, true, false]);
}

#[test]
fn ordered_lists_are_rewritten_too() {
    let output = filter("<ol><li>[ ] first</li></ol>");
    assert_eq!(
        output.html,
        format!("<ol class=\"task-list\"><li class=\"task-list-item\">{UNCHECKED} first</li></ol>")
    );
}

#[test]
fn checkbox_without_following_whitespace_is_not_a_task() {
    let output = filter("<ul><li>[x]</li></ul>");
    assert_eq!(output.html, "<ul><li>[x]</li></ul>");
    assert!(output.task_list_items.is_empty());
}

#[test]
fn paragraph_child_is_rewritten_in_place() {
    let output = filter("<ul><li><p>[ ] call mom</p></li></ul>");
    assert_eq!(
        output.html,
        format!(
            "<ul class=\"task-list\"><li class=\"task-list-item\"><p>{UNCHECKED} call mom</p></li></ul>"
        )
    );
}

#[test]
fn ordinary_list_is_untouched() {
    let output = filter("<ul><li>bread</li><li>jam</li></ul>");
    assert_eq!(output.html, "<ul><li>bread</li><li>jam</li></ul>");
    assert!(output.task_list_items.is_empty());
}

#[test]
fn empty_list_is_untouched() {
    let output = filter("<ul></ul>");
    assert_eq!(output.html, "<ul></ul>");
}

#[test]
fn surrounding_content_is_preserved() {
    let output = filter("<p>intro</p><ul><li>[ ] a</li></ul><p>outro</p>");
    assert_eq!(
        output.html,
        format!(
            "<p>intro</p>\
             <ul class=\"task-list\"><li class=\"task-list-item\">{UNCHECKED} a</li></ul>\
             <p>outro</p>"
        )
    );
}

#[test]
fn nested_items_are_rewritten_inside_out() {
    let output = filter("<ul><li>[ ] outer<ul><li>[x] inner</li></ul></li></ul>");
    assert_eq!(
        output.html,
        format!(
            "<ul class=\"task-list\"><li class=\"task-list-item\">{UNCHECKED} outer\
             <ul class=\"task-list\"><li class=\"task-list-item\">{CHECKED} inner</li></ul>\
             </li></ul>"
        )
    );

    // The outer item was serialized after the inner one was rewritten, so
    // its reported source carries the rendered nested markup.
    assert_eq!(output.task_list_items.len(), 2);
    assert!(output.task_list_items[0].source.starts_with("[ ] outer"));
    assert!(output.task_list_items[0].source.contains("task-list-item-checkbox"));
    assert_eq!(output.task_list_items[1].source, "[x] inner");
}

#[test]
fn second_run_is_a_no_op() {
    let first = filter("<ul><li>[ ] once</li><li>[x] twice</li></ul>");
    let second = filter(&first.html);
    assert_eq!(second.html, first.html);
    assert!(second.task_list_items.is_empty());
}

#[test]
fn task_item_serializes_for_reporting() {
    let output = filter("<ul><li>[x] ship it</li></ul>");
    let json = serde_json::to_string(&output.task_list_items[0]).unwrap();
    assert_eq!(json, r#"{"checkbox":"[x]","source":"[x] ship it"}"#);

    let back: TaskItem = serde_json::from_str(&json).unwrap();
    assert_eq!(back, output.task_list_items[0]);
}
