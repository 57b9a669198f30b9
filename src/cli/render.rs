use crate::history::HistoryStore;
use crate::model::ImageLocation;
use crate::paging::Page;

use super::types::{DetailRow, ImageDetails};

pub(super) fn summary(store: &HistoryStore, page: &Page<'_>) -> String {
    let mut lines = vec![
        format!("Total images: {}", store.total_images()),
        format!("Grouped prompts: {}", store.total_grouped_prompts()),
    ];
    let mut position = format!("Page {} of {}", page.number, page.page_count.max(1));
    if !store.query().is_empty() {
        position.push_str(&format!(" (search: {:?})", store.query()));
    }
    lines.push(position);
    lines.push(String::new());
    lines.join("\n")
}

pub(super) fn page(page: &Page<'_>) -> String {
    if page.entries.is_empty() {
        return "No prompts to show.\n".to_string();
    }
    let mut lines = Vec::new();
    for entry in &page.entries {
        lines.push(format!("##### {}", single_line(entry.prompt)));
        if let Some(negative) = entry
            .groups
            .first()
            .and_then(|group| group.negative_prompt())
        {
            lines.push(format!("negative prompt: {}", single_line(negative)));
        }
        let models = entry
            .groups
            .iter()
            .map(|group| group.model())
            .collect::<Vec<_>>();
        lines.push(format!("models: {}", models.join(" | ")));
        for group in entry.groups {
            for image in &group.imgs {
                let job_id = image.job_id().unwrap_or_else(|| "?".to_string());
                lines.push(format!("  [{job_id}] {}", image.caption()));
                if let Some(url) = image.image_url() {
                    lines.push(format!("      {url}"));
                }
            }
        }
        lines.push("---".to_string());
    }
    lines.push(String::new());
    lines.join("\n")
}

pub(super) fn image_details(location: &ImageLocation<'_>) -> ImageDetails {
    let image = location.image;
    ImageDetails {
        job_id: image.job_id(),
        group_id: location.group_id.to_string(),
        image_url: image.image_url().map(str::to_string),
        generated_img: image.generated_img(),
        details: image
            .details()
            .into_iter()
            .map(|(label, value)| DetailRow { label, value })
            .collect(),
    }
}

/// Markdown parameter table.
pub(super) fn details_table(details: &ImageDetails) -> String {
    let mut lines = vec![
        "| Params | Value |".to_string(),
        "|-----------|-------|".to_string(),
    ];
    for row in &details.details {
        lines.push(format!("| {} | {} |", row.label, row.value.replace('|', "\\|")));
    }
    if let Some(path) = &details.generated_img {
        lines.push(String::new());
        lines.push(format!("file: {}", path.display()));
    }
    lines.push(String::new());
    lines.join("\n")
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}
