use crate::core::Amiibo;

pub type CatalogResult = Result<Vec<Amiibo>, String>;

#[derive(Debug, Clone)]
pub enum TaskResult {
    LoadingMessage(String),
    CatalogLoaded(CatalogResult),
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::LoadingMessage(_) => "loading_message",
            TaskResult::CatalogLoaded(_) => "catalog_loaded",
        }
    }
}
