use std::ops::Range;

use serde::Serialize;

use crate::history::PromptGroups;
use crate::model::HistoryGroup;

use super::ViewRequest;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageEntry<'a> {
    pub prompt: &'a str,
    pub groups: &'a [HistoryGroup],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a> {
    pub number: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub total_prompts: usize,
    pub entries: Vec<PageEntry<'a>>,
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Index range `[(page - 1) * page_size, page * page_size)` clipped to
/// `total`. Pages past the end yield an empty range.
pub fn page_window(page: usize, page_size: usize, total: usize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}

pub fn paginate<'a>(groups: &'a PromptGroups, request: &ViewRequest) -> Page<'a> {
    let total = groups.len();
    let entries = page_window(request.page(), request.page_size(), total)
        .filter_map(|index| groups.get_index(index))
        .map(|(prompt, groups)| PageEntry { prompt, groups })
        .collect();
    Page {
        number: request.page(),
        page_size: request.page_size(),
        page_count: page_count(total, request.page_size()),
        total_prompts: total,
        entries,
    }
}
