use log::warn;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

pub const VENDOR: &str = "housecallpro";

/// Events pushed onto the tag-manager data layer. The external collector
/// dispatches on the `event` field, so shapes here must stay wire-stable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event")]
pub enum AnalyticsEvent {
    #[serde(rename = "hcp_button_interaction")]
    ButtonInteraction { location: String },
    #[serde(rename = "hcp_scheduler_open")]
    SchedulerOpen {
        vendor: &'static str,
        method: &'static str,
        opened_at: f64,
    },
    #[serde(rename = "hcp_scheduler_complete")]
    SchedulerComplete {
        vendor: &'static str,
        method: &'static str,
        redirect_url: Option<String>,
    },
    #[serde(rename = "hcp_scheduler_closed")]
    SchedulerClosed {
        vendor: &'static str,
        method: &'static str,
        closed_at: f64,
    },
}

/// Append-only sink for analytics events. The bridge only ever pushes;
/// nothing in this crate reads the queue back.
pub trait AnalyticsQueue {
    fn push(&self, event: AnalyticsEvent);
}

/// Production queue: `window.dataLayer`, created on first push if the tag
/// manager snippet has not run yet.
pub struct DataLayer;

impl AnalyticsQueue for DataLayer {
    fn push(&self, event: AnalyticsEvent) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let key = JsValue::from_str("dataLayer");
        let layer = match js_sys::Reflect::get(&window, &key) {
            Ok(existing) if existing.is_object() => existing.unchecked_into::<js_sys::Array>(),
            _ => {
                let created = js_sys::Array::new();
                let _ = js_sys::Reflect::set(&window, &key, &created);
                created
            }
        };
        // Plain JS objects, not Maps, or the collector can't read the fields.
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        match event.serialize(&serializer) {
            Ok(value) => {
                layer.push(&value);
            }
            Err(err) => warn!("failed to serialize analytics event: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_serialize_with_event_tag() {
        let open = AnalyticsEvent::SchedulerOpen {
            vendor: VENDOR,
            method: "scheduler_modal",
            opened_at: 1234.0,
        };
        assert_eq!(
            serde_json::to_value(&open).unwrap(),
            json!({
                "event": "hcp_scheduler_open",
                "vendor": "housecallpro",
                "method": "scheduler_modal",
                "opened_at": 1234.0,
            })
        );
    }

    #[test]
    fn button_interaction_carries_location() {
        let click = AnalyticsEvent::ButtonInteraction {
            location: "bookNowHero".into(),
        };
        assert_eq!(
            serde_json::to_value(&click).unwrap(),
            json!({ "event": "hcp_button_interaction", "location": "bookNowHero" })
        );
    }

    #[test]
    fn completion_without_url_serializes_null_redirect() {
        let complete = AnalyticsEvent::SchedulerComplete {
            vendor: VENDOR,
            method: "scheduler_confirmed",
            redirect_url: None,
        };
        let value = serde_json::to_value(&complete).unwrap();
        assert_eq!(value["event"], "hcp_scheduler_complete");
        assert!(value["redirect_url"].is_null());
    }
}
