use std::path::Path;

use crate::{
    infra::{self, config::FileConfigAdapter, contracts::ConfigAdapter, error::AppError},
    repository::StorageContext,
    usecases::context::AppContext,
};

/// Builds the application context and initializes logging.
pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(config_path)?;
    infra::logging::init(&context.config.logging)?;

    tracing::debug!(
        max_content_chars = context.config.messaging.max_content_chars,
        "storage context initialized"
    );

    Ok(context)
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let config = config_adapter.load().map_err(AppError::Other)?;

    Ok(AppContext::new(config, StorageContext::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::ChatRepository;

    #[test]
    fn builds_context_with_default_config_when_file_is_missing() {
        let context = build_context(Some(Path::new("./missing-config.toml")))
            .expect("context should build from defaults");

        assert_eq!(context.config, crate::infra::config::AppConfig::default());
        assert!(context
            .storage
            .chats
            .find_all()
            .expect("find_all should succeed")
            .is_empty());
    }
}
