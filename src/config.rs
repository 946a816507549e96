use std::env;

use teloxide::types::UserId;

use crate::utils::http::DEFAULT_USER_AGENT;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {0}")]
    Invalid(&'static str),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub telegram: TelegramConfig,
    pub server: ServerConfig,
    pub terabox: TeraboxConfig,
    pub gemini: Option<GeminiConfig>,
    pub rate_limit: RateLimitConfig,
    pub admin: AdminConfig,
}

#[derive(Clone, Debug)]
pub struct TelegramConfig {
    pub token: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct TeraboxConfig {
    pub api_base: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

/// Rate limit figures are configuration data only; nothing enforces them.
#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    pub window_secs: u64,
    pub max_requests: usize,
}

#[derive(Clone, Debug)]
pub struct AdminConfig {
    pub user_ids: Vec<UserId>,
}

impl AdminConfig {
    pub fn is_admin(&self, user_id: UserId) -> bool {
        self.user_ids.contains(&user_id)
    }
}

pub fn build_config() -> Result<AppConfig, ConfigError> {
    info!("Building AppConfig...");

    let config = AppConfig {
        telegram: TelegramConfig {
            token: optional("TELEGRAM_BOT_TOKEN"),
        },
        server: ServerConfig {
            port: parsed_or("PORT", 8080)?,
        },
        terabox: TeraboxConfig {
            api_base: var_or("TERABOX_API_BASE", "https://www.terabox.com"),
            user_agent: var_or("TERABOX_USER_AGENT", DEFAULT_USER_AGENT),
            request_timeout_secs: parsed_or("TERABOX_TIMEOUT_SECS", 30)?,
        },
        gemini: optional("GEMINI_API_KEY").map(|api_key| GeminiConfig {
            api_key,
            model: var_or("GEMINI_MODEL", "gemini-pro"),
        }),
        rate_limit: RateLimitConfig {
            window_secs: parsed_or("RATE_LIMIT_WINDOW_SECS", 3600)?,
            max_requests: parsed_or("RATE_LIMIT_MAX_REQUESTS", 50)?,
        },
        admin: AdminConfig {
            user_ids: id_list("ADMIN_USER_IDS")?,
        },
    };

    info!("AppConfig built");

    Ok(config)
}

fn optional(name: &'static str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

fn var_or(name: &'static str, default: &str) -> String {
    optional(name).unwrap_or_else(|| default.to_string())
}

fn parsed_or<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::Invalid(name)),
        None => Ok(default),
    }
}

fn id_list(name: &'static str) -> Result<Vec<UserId>, ConfigError> {
    let Some(raw) = optional(name) else {
        return Ok(Vec::new());
    };

    raw.split(',')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u64>()
                .map(UserId)
                .map_err(|_| ConfigError::Invalid(name))
        })
        .collect()
}
