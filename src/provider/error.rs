#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("not a supported share link")]
    InvalidLink,

    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("upstream rejected the request (errno {0})")]
    UpstreamRejected(i64),

    #[error("upstream response was malformed")]
    MalformedResponse,

    #[error("upstream returned no entries for this share")]
    EmptyShare,

    #[error("upstream request failed")]
    RequestFailed,

    #[error("upstream request timed out")]
    Timeout,

    #[error("share metadata is missing `{0}`")]
    IncompleteMetadata(&'static str),
}
