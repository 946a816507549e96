use crate::config::ConfigError;
use crate::provider::ProviderError;

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type BotResult<T> = Result<T, BotError>;

pub type HandlerResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
