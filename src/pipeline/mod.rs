//! The conversion pipeline: validate → resolve → classify → format →
//! assemble. Strictly linear; any stage failure short-circuits to the
//! envelope's failure branch.

mod envelope;

pub use envelope::{ConvertData, ErrorInfo, ErrorKind, ResultEnvelope};

use crate::media::player::{self, FormattingError, PlayerLinkSet};
use crate::media::mime;
use crate::provider::{FileDescriptor, ProviderClient, ProviderError};

#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    Playable {
        descriptor: FileDescriptor,
        players: PlayerLinkSet,
    },
    /// The descriptor resolved, but its format is outside the supported set,
    /// so no player links are produced.
    Unsupported { descriptor: FileDescriptor },
}

impl Conversion {
    pub fn descriptor(&self) -> &FileDescriptor {
        match self {
            Self::Playable { descriptor, .. } | Self::Unsupported { descriptor } => descriptor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Formatting(#[from] FormattingError),
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Provider(ProviderError::InvalidLink) => ErrorKind::InvalidLink,
            Self::Provider(ProviderError::IncompleteMetadata(_)) => ErrorKind::IncompleteMetadata,
            Self::Provider(_) => ErrorKind::Upstream,
            Self::Formatting(_) => ErrorKind::Formatting,
        }
    }
}

/// Runs one conversion end to end. The resolver performs the only I/O;
/// dropping the returned future cancels any in-flight upstream call, so a
/// partial descriptor is never observed.
pub async fn convert(resolver: &dyn ProviderClient, raw_url: &str) -> Result<Conversion, ConvertError> {
    let reference = resolver.validate(raw_url)?;

    info!("resolving {} share {}", reference.provider, reference.share_id);

    let descriptor = resolver.resolve(&reference).await?;

    if !mime::is_supported(&descriptor.mime_type) {
        info!("share {} resolved to unsupported type {}", reference.share_id, descriptor.mime_type);
        return Ok(Conversion::Unsupported { descriptor });
    }

    let players = player::format_links(&descriptor.direct_url, &descriptor.filename)?;

    Ok(Conversion::Playable { descriptor, players })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ShareReference;
    use async_trait::async_trait;
    use serde_json::json;

    struct StubResolver {
        response: Result<FileDescriptor, ProviderError>,
    }

    impl StubResolver {
        fn ok(descriptor: FileDescriptor) -> Self {
            Self {
                response: Ok(descriptor),
            }
        }

        fn err(error: ProviderError) -> Self {
            Self { response: Err(error) }
        }
    }

    #[async_trait]
    impl ProviderClient for StubResolver {
        fn validate(&self, raw: &str) -> Result<ShareReference, ProviderError> {
            crate::provider::validate_share_url(raw)
        }

        async fn resolve(&self, _reference: &ShareReference) -> Result<FileDescriptor, ProviderError> {
            self.response.clone()
        }
    }

    fn descriptor(filename: &str) -> FileDescriptor {
        FileDescriptor {
            filename: filename.to_string(),
            size_bytes: 1_048_576,
            mime_type: mime::classify(filename).to_string(),
            direct_url: "https://d.terabox.com/file/abc".to_string(),
        }
    }

    #[tokio::test]
    async fn test_convert_success() {
        let resolver = StubResolver::ok(descriptor("clip.mp4"));

        let envelope =
            ResultEnvelope::assemble(convert(&resolver, "https://terabox.com/s/1AbCdEf").await);

        assert!(envelope.success);
        assert!(envelope.error.is_none());
        assert_eq!(envelope.data.filename.as_deref(), Some("clip.mp4"));
        assert_eq!(envelope.data.size, Some(1_048_576));
        assert_eq!(envelope.data.mime_type.as_deref(), Some("video/mp4"));
        assert_eq!(envelope.data.format_supported, Some(true));

        let players = envelope.data.players.expect("player links missing");
        assert!(!players.vlc.is_empty());
        assert!(!players.mx_player.is_empty());
        assert!(!players.playit.is_empty());
    }

    #[tokio::test]
    async fn test_convert_invalid_link() {
        let resolver = StubResolver::ok(descriptor("clip.mp4"));

        let envelope = ResultEnvelope::assemble(convert(&resolver, "https://example.com/foo").await);

        assert!(!envelope.success);
        assert_eq!(envelope.error.unwrap().kind, ErrorKind::InvalidLink);
    }

    #[tokio::test]
    async fn test_convert_upstream_failure() {
        let resolver = StubResolver::err(ProviderError::UpstreamStatus(500));

        let envelope =
            ResultEnvelope::assemble(convert(&resolver, "https://terabox.com/s/1AbCdEf").await);

        assert!(!envelope.success);
        assert_eq!(envelope.error.unwrap().kind, ErrorKind::Upstream);
    }

    #[tokio::test]
    async fn test_convert_timeout_is_upstream() {
        let resolver = StubResolver::err(ProviderError::Timeout);

        let envelope =
            ResultEnvelope::assemble(convert(&resolver, "https://terabox.com/s/1AbCdEf").await);

        assert!(!envelope.success);
        assert_eq!(envelope.error.unwrap().kind, ErrorKind::Upstream);
    }

    #[tokio::test]
    async fn test_convert_incomplete_metadata() {
        let resolver = StubResolver::err(ProviderError::IncompleteMetadata("filename"));

        let envelope =
            ResultEnvelope::assemble(convert(&resolver, "https://terabox.com/s/1AbCdEf").await);

        assert!(!envelope.success);
        assert_eq!(envelope.error.unwrap().kind, ErrorKind::IncompleteMetadata);
    }

    #[tokio::test]
    async fn test_convert_unsupported_format_keeps_descriptor() {
        let resolver = StubResolver::ok(descriptor("archive.zip"));

        let conversion = convert(&resolver, "https://terabox.com/s/1AbCdEf").await.unwrap();
        assert!(matches!(conversion, Conversion::Unsupported { .. }));

        let envelope = ResultEnvelope::assemble(Ok(conversion));
        assert!(envelope.success);
        assert_eq!(envelope.data.filename.as_deref(), Some("archive.zip"));
        assert_eq!(envelope.data.format_supported, Some(false));
        assert!(envelope.data.players.is_none());
        assert!(envelope.error.is_none());
    }

    #[tokio::test]
    async fn test_failure_envelope_serializes_empty_data() {
        let resolver = StubResolver::err(ProviderError::EmptyShare);

        let envelope =
            ResultEnvelope::assemble(convert(&resolver, "https://terabox.com/s/1AbCdEf").await);

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], json!(false));
        assert_eq!(value["data"], json!({}));
        assert_eq!(value["error"]["kind"], json!("upstream"));
        assert!(value.get("content_analysis").is_none());
    }

    #[tokio::test]
    async fn test_success_envelope_json_shape() {
        let resolver = StubResolver::ok(descriptor("clip.mp4"));

        let envelope =
            ResultEnvelope::assemble(convert(&resolver, "https://terabox.com/s/1AbCdEf").await)
                .with_analysis(Some("looks fine".to_string()));

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["data"]["filename"], json!("clip.mp4"));
        assert_eq!(value["data"]["mime_type"], json!("video/mp4"));
        assert!(value["data"]["players"]["vlc"].as_str().unwrap().starts_with("vlc://"));
        assert!(value["data"]["players"]["mx_player"].as_str().unwrap().starts_with("intent:"));
        assert!(value["data"]["players"]["playit"].as_str().unwrap().starts_with("playit://"));
        assert_eq!(value["error"], json!(null));
        assert_eq!(value["content_analysis"], json!("looks fine"));
    }

    #[tokio::test]
    async fn test_convert_is_deterministic() {
        let resolver = StubResolver::ok(descriptor("clip.mp4"));

        let first = convert(&resolver, "https://terabox.com/s/1AbCdEf").await.unwrap();
        let second = convert(&resolver, "https://terabox.com/s/1AbCdEf").await.unwrap();
        assert_eq!(first, second);
    }
}
