use serde_json::json;

use super::{HistoryDocument, HistoryGroup, ImageRecord, MISSING_VALUE, Params};

fn image(job_id: &str) -> ImageRecord {
    let mut params = Params::new();
    params.insert("job_id", json!(job_id));
    params.insert("generated_img", json!(format!("/tmp/{job_id}.png")));
    params.insert("seed", json!(42));
    params.insert("img_width", json!(512));
    params.insert("img_height", json!(768));
    params.insert("num_steps", json!(25));
    ImageRecord::new(params)
}

fn group(prompt: &str, job_ids: &[&str]) -> HistoryGroup {
    let mut params = Params::new();
    params.insert("prompt", json!(prompt));
    HistoryGroup::new(params, job_ids.iter().map(|id| image(id)).collect())
}

fn document(groups: Vec<(&str, HistoryGroup)>) -> HistoryDocument {
    let mut document = HistoryDocument::default();
    for (id, group) in groups {
        document.history.insert(id.to_string(), group);
    }
    document
}

#[test]
fn document_preserves_group_and_key_order() {
    let raw = r#"{"history":{"z":{"imgs":[],"num_imgs":0,"params":{"prompt":"late","b":1,"a":2}},"a":{"imgs":[],"num_imgs":0,"params":{"prompt":"early"}}},"version":3}"#;
    let parsed: HistoryDocument = serde_json::from_str(raw).expect("parse document");
    let ids = parsed.history.keys().cloned().collect::<Vec<_>>();
    assert_eq!(ids, vec!["z".to_string(), "a".to_string()]);
    assert_eq!(parsed.extras.get("version"), Some(&json!(3)));
    let serialized = serde_json::to_string(&parsed).expect("serialize document");
    assert_eq!(serialized, raw);
}

#[test]
fn explicit_null_image_url_survives_a_save() {
    let raw = r#"{"history":{"g":{"imgs":[{"image_url":null,"params":{"job_id":"j1"}},{"params":{"job_id":"j2"}},{"image_url":"file:///tmp/j3.png","params":{"job_id":"j3"}}],"num_imgs":3,"params":{"prompt":"p"}}}}"#;
    let parsed: HistoryDocument = serde_json::from_str(raw).expect("parse document");
    let imgs = &parsed.history["g"].imgs;
    assert_eq!(imgs[0].image_url(), None);
    assert_eq!(imgs[2].image_url(), Some("file:///tmp/j3.png"));
    let serialized = serde_json::to_string(&parsed).expect("serialize document");
    assert_eq!(serialized, raw);
}

#[test]
fn missing_history_key_is_rejected() {
    let result = serde_json::from_str::<HistoryDocument>(r#"{"groups":{}}"#);
    assert!(result.is_err());
}

#[test]
fn missing_parameters_render_as_placeholder() {
    let record = ImageRecord::new(Params::new());
    assert_eq!(record.job_id(), None);
    assert_eq!(record.generated_img(), None);
    assert_eq!(
        record.caption(),
        "Seed: N/A | Resolution: N/AxN/A | Steps: N/A | Style: N/A"
    );
    assert!(
        record
            .details()
            .iter()
            .filter(|(label, _)| *label != "Resolution")
            .all(|(_, value)| value == MISSING_VALUE)
    );
}

#[test]
fn detail_values_are_flattened_to_one_line() {
    let mut record = image("j1");
    record
        .params
        .insert("negative_prompt", json!("blurry,\nlow quality"));
    let details = record.details();
    let negative = details
        .iter()
        .find(|(label, _)| *label == "Negative Prompt")
        .map(|(_, value)| value.as_str())
        .expect("negative prompt row");
    assert_eq!(negative, "blurry, low quality");
    assert!(details.contains(&("Resolution", "512x768".to_string())));
    assert!(details.contains(&("Seed", "42".to_string())));
}

#[test]
fn numeric_job_ids_are_matched_as_text() {
    let mut params = Params::new();
    params.insert("job_id", json!(1712));
    let record = ImageRecord::new(params);
    assert!(record.has_job_id("1712"));
    assert!(!record.has_job_id("17"));
}

#[test]
fn removing_an_image_keeps_count_in_sync() {
    let mut document = document(vec![("g1", group("sunset", &["j1", "j2"]))]);
    let removed = document.remove_image("j1").expect("removed");
    assert!(removed.has_job_id("j1"));
    let group = &document.history["g1"];
    assert_eq!(group.num_imgs, 1);
    assert_eq!(group.imgs.len(), 1);
    assert!(group.imgs[0].has_job_id("j2"));
}

#[test]
fn removing_the_last_image_drops_the_group_in_place() {
    let mut document = document(vec![
        ("g1", group("a", &["j1"])),
        ("g2", group("b", &["j2"])),
        ("g3", group("c", &["j3"])),
    ]);
    document.remove_image("j2").expect("removed");
    let ids = document.history.keys().cloned().collect::<Vec<_>>();
    assert_eq!(ids, vec!["g1".to_string(), "g3".to_string()]);
}

#[test]
fn only_the_first_duplicate_is_removed() {
    let mut document = document(vec![
        ("g1", group("a", &["dup"])),
        ("g2", group("b", &["dup", "x"])),
    ]);
    document.remove_image("dup").expect("removed");
    assert!(!document.history.contains_key("g1"));
    assert_eq!(document.history["g2"].num_imgs, 2);
    let location = document.find_image("dup").expect("second duplicate");
    assert_eq!(location.group_id, "g2");
}

#[test]
fn group_without_prompt_groups_under_empty_string() {
    let group = HistoryGroup::new(Params::new(), Vec::new());
    assert_eq!(group.prompt(), "");
    assert_eq!(group.model(), MISSING_VALUE);
    assert!(group.is_empty());
}
