use crate::{infra::config::AppConfig, repository::StorageContext};

/// Everything a caller needs to run use cases: configuration plus the
/// injected storage. Built once by [`crate::usecases::bootstrap`], torn
/// down (or reset via logout) by the same owner.
#[derive(Debug, Default)]
pub struct AppContext {
    pub config: AppConfig,
    pub storage: StorageContext,
}

impl AppContext {
    pub fn new(config: AppConfig, storage: StorageContext) -> Self {
        Self { config, storage }
    }
}
