//! Deep link formatting for the supported media players.

use serde::Serialize;
use urlencoding::encode;

const MX_PLAYER_PACKAGE: &str = "com.mxtech.videoplayer.ad";

/// One deep link per supported player. Regenerating the set from the same
/// inputs is byte identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerLinkSet {
    pub vlc: String,
    pub mx_player: String,
    pub playit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormattingError {
    #[error("direct url is empty")]
    EmptyUrl,
    #[error("filename is empty")]
    EmptyFilename,
}

/// Percent-encodes the URL and filename independently before embedding them
/// into each player scheme.
pub fn format_links(direct_url: &str, filename: &str) -> Result<PlayerLinkSet, FormattingError> {
    if direct_url.is_empty() {
        return Err(FormattingError::EmptyUrl);
    }
    if filename.is_empty() {
        return Err(FormattingError::EmptyFilename);
    }

    let encoded_url = encode(direct_url);
    let encoded_title = encode(filename);

    Ok(PlayerLinkSet {
        vlc: format!("vlc://{}", encoded_url),
        mx_player: format!(
            "intent:{}#Intent;package={};S.title={};end",
            encoded_url, MX_PLAYER_PACKAGE, encoded_title
        ),
        playit: format!("playit://{}", encoded_url),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vlc_link_encoding() {
        let links = format_links("http://x.test/a b.mp4", "a b.mp4").unwrap();
        assert_eq!(links.vlc, "vlc://http%3A%2F%2Fx.test%2Fa%20b.mp4");
        assert_eq!(links.playit, "playit://http%3A%2F%2Fx.test%2Fa%20b.mp4");
    }

    #[test]
    fn test_mx_player_link() {
        let links = format_links("http://x.test/clip.mp4", "clip.mp4").unwrap();
        assert_eq!(
            links.mx_player,
            "intent:http%3A%2F%2Fx.test%2Fclip.mp4#Intent;package=com.mxtech.videoplayer.ad;S.title=clip.mp4;end"
        );
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let reserved = [
            ' ', ':', '/', '?', '#', '[', ']', '@', '!', '$', '&', '\'', '(', ')', '*', '+', ',', ';', '=',
        ];

        let links = format_links("http://x.test/?a=1&b=#frag", "it's [a] (file)+,;=.mp4").unwrap();

        let vlc_payload = links.vlc.strip_prefix("vlc://").unwrap();
        let playit_payload = links.playit.strip_prefix("playit://").unwrap();
        let title = links
            .mx_player
            .split_once("S.title=")
            .map(|(_, rest)| rest.strip_suffix(";end").unwrap())
            .unwrap();

        for payload in [vlc_payload, playit_payload, title] {
            for forbidden in reserved {
                assert!(
                    !payload.contains(forbidden),
                    "`{}` left unencoded in {}",
                    forbidden,
                    payload
                );
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let first = format_links("http://x.test/clip.mp4", "clip.mp4").unwrap();
        let second = format_links("http://x.test/clip.mp4", "clip.mp4").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_inputs_fail() {
        assert_eq!(format_links("", "clip.mp4"), Err(FormattingError::EmptyUrl));
        assert_eq!(
            format_links("http://x.test/clip.mp4", ""),
            Err(FormattingError::EmptyFilename)
        );
    }
}
