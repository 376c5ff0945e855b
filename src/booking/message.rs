use serde_json::Value;

pub const IFRAME_LOADED: &str = "hcp:iframe-loaded";
pub const REDIRECT: &str = "hcp:redirect";
pub const CLOSE: &str = "hcp:close";

/// Lifecycle signals the scheduler widget posts to its host page, decoded
/// once at the boundary so nothing downstream matches on raw strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleSignal {
    IframeLoaded,
    Redirect { url: Option<String> },
    Close,
    Unknown,
}

/// Decodes a raw message payload. The widget historically posted bare
/// sentinel strings, but the redirect signal needs a target URL, so an
/// object payload carrying the sentinel in `event` (or `type`) plus a `url`
/// field is accepted as well. Everything else is `Unknown` — the vendor's
/// vocabulary is not fully specified and unknown messages must not fail.
pub fn decode(payload: &Value) -> LifecycleSignal {
    match payload {
        Value::String(tag) => decode_tag(tag, None),
        Value::Object(fields) => {
            let tag = fields
                .get("event")
                .or_else(|| fields.get("type"))
                .and_then(Value::as_str);
            match tag {
                Some(tag) => decode_tag(tag, fields.get("url").and_then(Value::as_str)),
                None => LifecycleSignal::Unknown,
            }
        }
        _ => LifecycleSignal::Unknown,
    }
}

fn decode_tag(tag: &str, url: Option<&str>) -> LifecycleSignal {
    match tag {
        IFRAME_LOADED => LifecycleSignal::IframeLoaded,
        REDIRECT => LifecycleSignal::Redirect {
            url: url.map(str::to_owned),
        },
        CLOSE => LifecycleSignal::Close,
        _ => LifecycleSignal::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_sentinel_strings_decode() {
        assert_eq!(decode(&json!("hcp:iframe-loaded")), LifecycleSignal::IframeLoaded);
        assert_eq!(decode(&json!("hcp:close")), LifecycleSignal::Close);
        assert_eq!(
            decode(&json!("hcp:redirect")),
            LifecycleSignal::Redirect { url: None }
        );
    }

    #[test]
    fn object_redirect_carries_url() {
        let payload = json!({ "event": "hcp:redirect", "url": "https://x.test/done" });
        assert_eq!(
            decode(&payload),
            LifecycleSignal::Redirect {
                url: Some("https://x.test/done".into())
            }
        );
    }

    #[test]
    fn type_field_is_accepted_as_tag() {
        let payload = json!({ "type": "hcp:close" });
        assert_eq!(decode(&payload), LifecycleSignal::Close);
    }

    #[test]
    fn unrecognized_payloads_are_unknown() {
        assert_eq!(decode(&json!("hcp:resize")), LifecycleSignal::Unknown);
        assert_eq!(decode(&json!({ "event": "ping" })), LifecycleSignal::Unknown);
        assert_eq!(decode(&json!(42)), LifecycleSignal::Unknown);
        assert_eq!(decode(&Value::Null), LifecycleSignal::Unknown);
        assert_eq!(decode(&json!({ "url": "https://x.test" })), LifecycleSignal::Unknown);
    }
}
