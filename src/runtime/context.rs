use std::path::PathBuf;

use tracing::info;

use crate::config::Settings;
use crate::history::HistoryStore;
use crate::paging::ViewRequest;

use super::{DeletionService, Result};

#[derive(Debug)]
pub struct AppContext {
    settings: Settings,
    deletion_service: DeletionService,
}

impl AppContext {
    pub fn new(settings: Settings) -> Self {
        let deletion_service =
            DeletionService::new(settings.trash.build()).with_indent(settings.indent);
        Self {
            settings,
            deletion_service,
        }
    }

    pub fn deletion_service(&self) -> &DeletionService {
        &self.deletion_service
    }

    pub fn history_path(&self) -> Result<PathBuf> {
        Ok(self.settings.resolved_history_path()?)
    }

    /// Loads the configured history and builds its prompt grouping.
    pub fn open_history(&self) -> Result<HistoryStore> {
        let path = self.history_path()?;
        info!(path = %path.display(), "opening history");
        let mut store = HistoryStore::load(&path)?;
        store.group_by_prompt();
        Ok(store)
    }

    pub fn view_request(
        &self,
        query: Option<String>,
        page: usize,
        page_size: Option<usize>,
    ) -> ViewRequest {
        let mut request =
            ViewRequest::default().with_page_size(page_size.unwrap_or(self.settings.page_size));
        if let Some(query) = query {
            request = request.with_query(query);
        }
        request.with_page(page)
    }
}
