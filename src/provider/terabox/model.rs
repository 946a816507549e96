use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ShareListResponse {
    #[serde(default)]
    pub errno: i64,
    #[serde(default)]
    pub list: Vec<ShareEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShareEntry {
    #[serde(alias = "server_filename")]
    pub filename: Option<String>,
    pub size: Option<u64>,
    pub dlink: Option<String>,
    pub fs_id: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct DownloadResponse {
    #[serde(default)]
    pub errno: i64,
    pub dlink: Option<String>,
}
