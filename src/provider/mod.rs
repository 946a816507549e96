mod error;
mod model;
pub mod terabox;

pub use error::ProviderError;
pub use model::{FileDescriptor, Provider, ShareReference};
pub use terabox::TeraboxClient;

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

// Ordered: first matching pattern wins.
static SHARE_ID_PATTERNS: LazyLock<Vec<(Provider, Regex)>> = LazyLock::new(|| {
    vec![
        (
            Provider::Terabox,
            Regex::new(r"(?i)terabox\.com/s/([A-Za-z0-9_-]+)").unwrap(),
        ),
        (
            Provider::TeraboxApp,
            Regex::new(r"(?i)teraboxapp\.com/s/([A-Za-z0-9_-]+)").unwrap(),
        ),
    ]
});

static SHARE_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://(?:www\.)?tera(?:box|boxapp)\.com/s/[^\s]+").unwrap());

/// Recognizes a share link for a supported provider and extracts its share
/// identifier. Pure string processing, no network access.
pub fn validate_share_url(raw: &str) -> Result<ShareReference, ProviderError> {
    for (provider, pattern) in SHARE_ID_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(raw) {
            if let Some(share_id) = captures.get(1) {
                return Ok(ShareReference {
                    provider: *provider,
                    share_id: share_id.as_str().to_string(),
                });
            }
        }
    }

    Err(ProviderError::InvalidLink)
}

/// Finds the first share link inside free-form message text.
pub fn extract_share_url(text: &str) -> Option<String> {
    SHARE_URL_REGEX.find(text).map(|m| m.as_str().to_string())
}

/// Seam between the pipeline and a concrete provider, so transports and
/// tests can stub resolution.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    fn validate(&self, raw: &str) -> Result<ShareReference, ProviderError>;

    async fn resolve(&self, reference: &ShareReference) -> Result<FileDescriptor, ProviderError>;
}
