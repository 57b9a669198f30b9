mod request;
mod window;

#[cfg(test)]
mod tests;

pub use request::{DEFAULT_PAGE_SIZE, ViewRequest};
pub use window::{Page, PageEntry, page_count, page_window, paginate};
