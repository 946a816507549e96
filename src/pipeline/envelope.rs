use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::media::player::PlayerLinkSet;
use crate::provider::FileDescriptor;

use super::{Conversion, ConvertError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidLink,
    Upstream,
    IncompleteMetadata,
    Formatting,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

/// Descriptor fields plus player links. All fields are skipped when absent so
/// the failure branch serializes to `{}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConvertData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_supported: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<PlayerLinkSet>,
}

impl ConvertData {
    fn from_descriptor(descriptor: FileDescriptor) -> Self {
        Self {
            filename: Some(descriptor.filename),
            size: Some(descriptor.size_bytes),
            mime_type: Some(descriptor.mime_type),
            direct_url: Some(descriptor.direct_url),
            format_supported: None,
            players: None,
        }
    }
}

/// The transport-facing response. `timestamp` is observability only and not
/// part of any equality contract.
#[derive(Debug, Clone, Serialize)]
pub struct ResultEnvelope {
    pub success: bool,
    pub data: ConvertData,
    pub error: Option<ErrorInfo>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_analysis: Option<String>,
}

impl ResultEnvelope {
    /// Converts a pipeline outcome into the success/error envelope. Failure
    /// messages are the fixed error strings, never upstream payloads.
    pub fn assemble(outcome: Result<Conversion, ConvertError>) -> Self {
        match outcome {
            Ok(Conversion::Playable { descriptor, players }) => Self {
                success: true,
                data: ConvertData {
                    format_supported: Some(true),
                    players: Some(players),
                    ..ConvertData::from_descriptor(descriptor)
                },
                error: None,
                timestamp: Utc::now(),
                content_analysis: None,
            },
            Ok(Conversion::Unsupported { descriptor }) => Self {
                success: true,
                data: ConvertData {
                    format_supported: Some(false),
                    ..ConvertData::from_descriptor(descriptor)
                },
                error: None,
                timestamp: Utc::now(),
                content_analysis: None,
            },
            Err(error) => Self {
                success: false,
                data: ConvertData::default(),
                error: Some(ErrorInfo {
                    kind: error.kind(),
                    message: error.to_string(),
                }),
                timestamp: Utc::now(),
                content_analysis: None,
            },
        }
    }

    pub fn with_analysis(mut self, analysis: Option<String>) -> Self {
        self.content_analysis = analysis;
        self
    }
}
