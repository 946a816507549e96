mod model;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config::TeraboxConfig;
use crate::media::mime;
use crate::utils::http;

use model::{DownloadResponse, ShareEntry, ShareListResponse};

use super::{validate_share_url, FileDescriptor, ProviderClient, ProviderError, ShareReference};

/// Resolves Terabox share references against the public share API. Holds no
/// state between invocations beyond the reqwest connection pool.
pub struct TeraboxClient {
    client: Client,
    api_base: String,
}

impl TeraboxClient {
    pub fn new(config: &TeraboxConfig) -> Result<Self, reqwest::Error> {
        let client = http::create_api_client(&config.user_agent, config.request_timeout_secs)?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, ProviderError> {
        let response = self.client.get(url).query(query).send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout
            } else {
                warn!("terabox request failed: {}", e);
                ProviderError::RequestFailed
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::UpstreamStatus(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|_| ProviderError::MalformedResponse)
    }

    /// Extracts the first share entry from the listing payload.
    fn parse_share_list(value: &Value) -> Result<ShareEntry, ProviderError> {
        let response: ShareListResponse =
            serde_json::from_value(value.clone()).map_err(|_| ProviderError::MalformedResponse)?;

        if response.errno != 0 {
            return Err(ProviderError::UpstreamRejected(response.errno));
        }

        response.list.into_iter().next().ok_or(ProviderError::EmptyShare)
    }

    fn entry_metadata(entry: &ShareEntry) -> Result<(String, u64), ProviderError> {
        let filename = entry
            .filename
            .clone()
            .filter(|name| !name.is_empty())
            .ok_or(ProviderError::IncompleteMetadata("filename"))?;
        let size = entry.size.ok_or(ProviderError::IncompleteMetadata("size"))?;

        Ok((filename, size))
    }

    /// Secondary lookup for entries whose listing carries no `dlink`.
    async fn lookup_direct_url(
        &self,
        reference: &ShareReference,
        entry: &ShareEntry,
    ) -> Result<String, ProviderError> {
        let fs_id = entry.fs_id.ok_or(ProviderError::IncompleteMetadata("dlink"))?;
        let fid = fs_id.to_string();

        let url = format!("{}/api/share/download", self.api_base);
        let value = self
            .fetch_json(&url, &[("shareid", reference.share_id.as_str()), ("fid", fid.as_str())])
            .await?;

        let response: DownloadResponse =
            serde_json::from_value(value).map_err(|_| ProviderError::MalformedResponse)?;

        if response.errno != 0 {
            return Err(ProviderError::UpstreamRejected(response.errno));
        }

        response.dlink.ok_or(ProviderError::IncompleteMetadata("dlink"))
    }
}

#[async_trait]
impl ProviderClient for TeraboxClient {
    fn validate(&self, raw: &str) -> Result<ShareReference, ProviderError> {
        validate_share_url(raw)
    }

    async fn resolve(&self, reference: &ShareReference) -> Result<FileDescriptor, ProviderError> {
        let url = format!("{}/api/share/list", self.api_base);
        let listing = self
            .fetch_json(&url, &[("shareid", reference.share_id.as_str())])
            .await?;

        let entry = Self::parse_share_list(&listing)?;
        let (filename, size_bytes) = Self::entry_metadata(&entry)?;

        let direct_url = match entry.dlink.clone().filter(|dlink| !dlink.is_empty()) {
            Some(dlink) => dlink,
            None => self.lookup_direct_url(reference, &entry).await?,
        };

        Url::parse(&direct_url).map_err(|_| ProviderError::MalformedResponse)?;

        let mime_type = mime::classify(&filename).to_string();

        Ok(FileDescriptor {
            filename,
            size_bytes,
            mime_type,
            direct_url,
        })
    }
}
