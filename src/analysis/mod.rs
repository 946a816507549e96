//! Optional content analysis collaborator. The pipeline treats its output as
//! opaque text and never fails a conversion on analysis errors.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::GeminiConfig;
use crate::provider::FileDescriptor;
use crate::utils::{self, http};

#[async_trait]
pub trait ContentAnalyzer: Send + Sync {
    async fn analyze(&self, descriptor: &FileDescriptor) -> anyhow::Result<String>;
}

pub struct GeminiAnalyzer {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiAnalyzer {
    pub fn new(config: &GeminiConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: http::create_api_client(http::DEFAULT_USER_AGENT, 30)?,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    fn build_prompt(descriptor: &FileDescriptor) -> String {
        format!(
            "Analyze this media file:\n\
             Filename: {}\n\
             Size: {}\n\
             Type: {}\n\n\
             Provide:\n\
             1. File format analysis\n\
             2. Estimated video quality (if video)\n\
             3. Streaming compatibility check\n\
             4. Safety recommendations",
            descriptor.filename,
            utils::format_size(descriptor.size_bytes),
            descriptor.mime_type
        )
    }
}

#[async_trait]
impl ContentAnalyzer for GeminiAnalyzer {
    async fn analyze(&self, descriptor: &FileDescriptor) -> anyhow::Result<String> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": Self::build_prompt(descriptor) }] }]
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let value: Value = response.json().await?;
        let text = value
            .get("candidates")
            .and_then(|candidates| candidates.get(0))
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.get(0))
            .and_then(|part| part.get("text"))
            .and_then(|text| text.as_str())
            .ok_or_else(|| anyhow::anyhow!("analysis response contained no text"))?;

        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_includes_metadata() {
        let descriptor = FileDescriptor {
            filename: "clip.mp4".to_string(),
            size_bytes: 1_048_576,
            mime_type: "video/mp4".to_string(),
            direct_url: "https://d.terabox.com/file/abc".to_string(),
        };

        let prompt = GeminiAnalyzer::build_prompt(&descriptor);
        assert!(prompt.contains("clip.mp4"));
        assert!(prompt.contains("1.00 MB"));
        assert!(prompt.contains("video/mp4"));
        assert!(!prompt.contains("d.terabox.com")); // the signed link stays out of prompts
    }
}
