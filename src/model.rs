mod document;
mod group;
mod image;
mod params;

#[cfg(test)]
mod tests;

pub use document::{HistoryDocument, ImageLocation};
pub use group::HistoryGroup;
pub use image::{DETAIL_FIELDS, ImageRecord};
pub use params::{MISSING_VALUE, Params};
