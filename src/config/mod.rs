mod settings;

pub use settings::{ServerConfig, Settings, StorageConfig, WebhookConfig};
