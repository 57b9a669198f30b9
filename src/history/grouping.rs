use indexmap::IndexMap;

use crate::model::HistoryGroup;

/// Groups keyed by their literal prompt text.
///
/// Prompts appear in the order they were first seen and each prompt's groups
/// keep the order they were supplied in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptGroups {
    groups: IndexMap<String, Vec<HistoryGroup>>,
}

impl PromptGroups {
    pub fn from_groups<'a>(groups: impl IntoIterator<Item = &'a HistoryGroup>) -> Self {
        let mut grouped: IndexMap<String, Vec<HistoryGroup>> = IndexMap::new();
        for group in groups {
            grouped
                .entry(group.prompt().to_string())
                .or_default()
                .push(group.clone());
        }
        Self { groups: grouped }
    }

    /// Prompts containing `query`, compared case-insensitively. An empty
    /// query keeps everything.
    pub fn filter_by_query(&self, query: &str) -> Self {
        if query.is_empty() {
            return self.clone();
        }
        let needle = query.to_lowercase();
        let groups = self
            .groups
            .iter()
            .filter(|(prompt, _)| prompt.to_lowercase().contains(&needle))
            .map(|(prompt, groups)| (prompt.clone(), groups.clone()))
            .collect();
        Self { groups }
    }

    pub fn get(&self, prompt: &str) -> Option<&[HistoryGroup]> {
        self.groups.get(prompt).map(Vec::as_slice)
    }

    pub fn get_index(&self, index: usize) -> Option<(&str, &[HistoryGroup])> {
        self.groups
            .get_index(index)
            .map(|(prompt, groups)| (prompt.as_str(), groups.as_slice()))
    }

    pub fn prompts(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Number of distinct prompts.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum of the group-sequence lengths across all prompts.
    pub fn total_groups(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Number of individual image records across all prompts.
    pub fn total_image_records(&self) -> usize {
        self.groups
            .values()
            .flatten()
            .map(|group| group.imgs.len())
            .sum()
    }
}
