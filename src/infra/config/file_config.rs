use serde::Deserialize;

use crate::infra::config::{AppConfig, LogConfig, MessagingConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub messaging: Option<FileMessagingConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(messaging) = self.messaging {
            messaging.merge_into(&mut config.messaging);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileMessagingConfig {
    pub max_content_chars: Option<usize>,
}

impl FileMessagingConfig {
    fn merge_into(self, config: &mut MessagingConfig) {
        if let Some(max_content_chars) = self.max_content_chars {
            config.max_content_chars = max_content_chars;
        }
    }
}
