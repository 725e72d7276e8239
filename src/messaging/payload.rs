use serde_json::Value;

/// A decoded inbound wire message.
///
/// Inbound text frames are parsed as JSON. A frame that does not parse
/// is handed to the application unchanged rather than dropped: servers
/// are allowed to ship heterogeneous payload shapes without crashing
/// the client.
#[derive(Debug, Clone, PartialEq)]
pub enum Incoming {
    /// Frame that parsed as JSON
    Json(Value),
    /// Frame that was not valid JSON, passed through verbatim
    Text(String),
}

impl Incoming {
    /// Decode a text frame, falling back to the raw text on parse failure.
    pub fn from_frame(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text.to_owned()),
        }
    }

    /// The decoded JSON value, if this frame parsed.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// The raw text, if this frame did not parse as JSON.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_frame_decodes_as_json() {
        let incoming = Incoming::from_frame(r#"{"chunk": "hello"}"#);
        assert_eq!(incoming, Incoming::Json(json!({"chunk": "hello"})));
    }

    #[test]
    fn test_array_and_scalar_frames_decode_as_json() {
        assert_eq!(Incoming::from_frame("[1, 2]"), Incoming::Json(json!([1, 2])));
        assert_eq!(Incoming::from_frame("42"), Incoming::Json(json!(42)));
        assert_eq!(Incoming::from_frame("true"), Incoming::Json(json!(true)));
    }

    #[test]
    fn test_invalid_json_falls_back_to_raw_text() {
        let incoming = Incoming::from_frame("plain words, not json");
        assert_eq!(
            incoming,
            Incoming::Text("plain words, not json".to_string())
        );
    }

    #[test]
    fn test_truncated_json_falls_back_to_raw_text() {
        let incoming = Incoming::from_frame(r#"{"chunk": "hel"#);
        assert_eq!(incoming.as_text(), Some(r#"{"chunk": "hel"#));
        assert_eq!(incoming.as_json(), None);
    }
}
