use serde_json::json;

use crate::history::PromptGroups;
use crate::model::{HistoryGroup, Params};

use super::{ViewRequest, page_count, page_window, paginate};

fn prompt_groups(count: usize) -> PromptGroups {
    let groups = (0..count)
        .map(|index| {
            let mut params = Params::new();
            params.insert("prompt", json!(format!("prompt {index}")));
            HistoryGroup::new(params, Vec::new())
        })
        .collect::<Vec<_>>();
    PromptGroups::from_groups(&groups)
}

#[test]
fn windows_follow_one_based_pages() {
    assert_eq!(page_window(1, 5, 12), 0..5);
    assert_eq!(page_window(2, 5, 12), 5..10);
    assert_eq!(page_window(3, 5, 12), 10..12);
    assert_eq!(page_window(4, 5, 12), 12..12);
}

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(12, 5), 3);
    assert_eq!(page_count(10, 5), 2);
    assert_eq!(page_count(0, 5), 0);
}

#[test]
fn last_partial_page_is_not_an_error() {
    let groups = prompt_groups(12);
    let first = paginate(&groups, &ViewRequest::new("", 1, 5));
    let prompts = first
        .entries
        .iter()
        .map(|entry| entry.prompt)
        .collect::<Vec<_>>();
    assert_eq!(
        prompts,
        vec!["prompt 0", "prompt 1", "prompt 2", "prompt 3", "prompt 4"]
    );

    let last = paginate(&groups, &ViewRequest::new("", 3, 5));
    assert_eq!(last.page_count, 3);
    assert_eq!(last.total_prompts, 12);
    let prompts = last
        .entries
        .iter()
        .map(|entry| entry.prompt)
        .collect::<Vec<_>>();
    assert_eq!(prompts, vec!["prompt 10", "prompt 11"]);
}

#[test]
fn requests_clamp_to_valid_pages() {
    let request = ViewRequest::new("cat", 0, 0);
    assert_eq!(request.page(), 1);
    assert_eq!(request.page_size(), 1);

    let request = ViewRequest::new("cat", 9, 5).clamped_to(3);
    assert_eq!(request.page(), 3);
    assert_eq!(ViewRequest::new("", 9, 5).clamped_to(0).page(), 1);
}

#[test]
fn changing_query_or_size_restarts_paging() {
    let request = ViewRequest::new("cat", 4, 5);
    let searched = request.with_query("dog");
    assert_eq!((searched.query(), searched.page()), ("dog", 1));
    let resized = request.with_page_size(20);
    assert_eq!((resized.page(), resized.page_size()), (1, 20));
}

#[test]
fn page_serializes_for_json_output() {
    let groups = prompt_groups(2);
    let page = paginate(&groups, &ViewRequest::default());
    let value = serde_json::to_value(&page).expect("serialize page");
    assert_eq!(value["page_count"], json!(1));
    assert_eq!(value["entries"][1]["prompt"], json!("prompt 1"));
}
