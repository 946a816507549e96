//! Extension based MIME classification for resolved filenames.

pub const FALLBACK_MIME: &str = "application/octet-stream";

const MIME_TABLE: [(&str, &str); 5] = [
    ("mp4", "video/mp4"),
    ("mkv", "video/x-matroska"),
    ("avi", "video/x-msvideo"),
    ("mov", "video/quicktime"),
    ("wmv", "video/x-ms-wmv"),
];

/// Maps the extension after the last `.` to a MIME type. Unknown or missing
/// extensions fall back to `application/octet-stream`; this is not an error.
pub fn classify(filename: &str) -> &'static str {
    let lowered = filename.to_lowercase();
    let extension = match lowered.rsplit_once('.') {
        Some((_, extension)) => extension,
        None => return FALLBACK_MIME,
    };

    MIME_TABLE
        .iter()
        .find(|(known, _)| *known == extension)
        .map(|(_, mime_type)| *mime_type)
        .unwrap_or(FALLBACK_MIME)
}

pub fn is_supported(mime_type: &str) -> bool {
    MIME_TABLE.iter().any(|(_, supported)| *supported == mime_type)
}
