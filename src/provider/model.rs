use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// One member per supported share-link domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    Terabox,
    TeraboxApp,
}

impl Provider {
    pub fn host(&self) -> &'static str {
        match self {
            Self::Terabox => "terabox.com",
            Self::TeraboxApp => "teraboxapp.com",
        }
    }
}

impl Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host())
    }
}

/// A validated reference to a single remote file. Constructed by URL
/// validation, used for one resolution attempt, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareReference {
    pub provider: Provider,
    pub share_id: String,
}

/// Metadata for the remote file. `direct_url` is a time-limited signed link
/// and must not be persisted beyond the current request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDescriptor {
    pub filename: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub direct_url: String,
}
