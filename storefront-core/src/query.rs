//! Query-string codec and the URL port
//!
//! Selection changes are pushed to the browser URL via in-place history
//! replacement: no navigation, no refetch. The [`UrlPort`] trait abstracts
//! that side effect so the state machine can be driven without a browser.

/// Sink for in-place history replacement
pub trait UrlPort {
    /// Replace the current history entry's query string in place
    fn replace_query(&mut self, query: &str);
}

/// Parse a raw query string into ordered key/value pairs
///
/// A leading `?` is tolerated. Pairs without `=` decode to an empty value.
/// Undecodable percent-sequences fall back to the raw text rather than
/// dropping the pair.
pub fn parse_query(raw: &str) -> Vec<(String, String)> {
    raw.trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

/// Serialize ordered pairs into a percent-encoded query string
pub fn serialize_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn decode(component: &str) -> String {
    urlencoding::decode(component)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| component.to_string())
}

/// URL port that records every replacement, for tests
#[derive(Debug, Default)]
pub struct RecordingUrlPort {
    pub history: Vec<String>,
}

impl RecordingUrlPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// The query string currently "in the address bar"
    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl UrlPort for RecordingUrlPort {
    fn replace_query(&mut self, query: &str) {
        self.history.push(query.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_pairs() {
        let pairs = parse_query("?Color=Ecru&Size=L");
        assert_eq!(
            pairs,
            [
                ("Color".to_string(), "Ecru".to_string()),
                ("Size".to_string(), "L".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_decodes_percent_sequences() {
        let pairs = parse_query("Pleat%20Type=Double%20Pinch");
        assert_eq!(
            pairs,
            [("Pleat Type".to_string(), "Double Pinch".to_string())]
        );
    }

    #[test]
    fn test_parse_tolerates_empty_and_bare_keys() {
        let pairs = parse_query("&flag&Color=Ecru&");
        assert_eq!(
            pairs,
            [
                ("flag".to_string(), String::new()),
                ("Color".to_string(), "Ecru".to_string()),
            ]
        );
    }

    #[test]
    fn test_serialize_encodes_components() {
        let pairs = vec![("Pleat Type".to_string(), "Double Pinch".to_string())];
        assert_eq!(serialize_query(&pairs), "Pleat%20Type=Double%20Pinch");
    }

    #[test]
    fn test_codec_roundtrip() {
        let pairs = vec![
            ("Color".to_string(), "Ecru & Sand".to_string()),
            ("intent".to_string(), "custom_curtain".to_string()),
        ];
        assert_eq!(parse_query(&serialize_query(&pairs)), pairs);
    }

    #[test]
    fn test_recording_port_tracks_replacements() {
        let mut port = RecordingUrlPort::new();
        assert!(port.current().is_none());

        port.replace_query("Color=Ecru");
        port.replace_query("Color=Graphite");
        assert_eq!(port.current(), Some("Color=Graphite"));
        assert_eq!(port.history.len(), 2);
    }
}
