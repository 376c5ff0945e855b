use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MessageEvent, MouseEvent};

use crate::analytics::DataLayer;
use crate::booking::bridge::{Clock, MessageOutcome, RedirectScheduler, SchedulerBridge};
use crate::booking::message;

/// Booking call-to-action controls: our own styled buttons plus anything
/// carrying the HCP embed's data attributes.
pub const CTA_SELECTOR: &str = ".cta-button, [data-orgname][data-token]";

struct PageClock;

impl Clock for PageClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

struct DelayedRedirect;

impl RedirectScheduler for DelayedRedirect {
    fn schedule(&self, url: &str, delay_ms: u32) {
        let url = url.to_owned();
        Timeout::new(delay_ms, move || {
            debug!("navigating to {url}");
            if let Some(window) = web_sys::window() {
                // Best effort; the page is done either way.
                let _ = window.location().set_href(&url);
            }
        })
        .forget();
    }
}

thread_local! {
    // One bridge per page session, shared by both listener closures.
    static BRIDGE: RefCell<Option<Rc<RefCell<SchedulerBridge>>>> = RefCell::new(None);
}

/// Wires up scheduler tracking: a delegated click listener on the document
/// and a message listener on the window. Idempotent — repeat calls (e.g. a
/// re-rendered host component) register nothing new. Listeners persist for
/// the page's lifetime; there is deliberately no teardown.
pub fn initialize() {
    let bridge = BRIDGE.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(|| {
                Rc::new(RefCell::new(SchedulerBridge::new(
                    Rc::new(PageClock),
                    Rc::new(DataLayer),
                    Rc::new(DelayedRedirect),
                )))
            })
            .clone()
    });
    if !bridge.borrow_mut().initialize() {
        debug!("scheduler tracking already initialized");
        return;
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let click_bridge = bridge.clone();
    let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(cta)) = target.closest(CTA_SELECTOR) else {
            return;
        };
        click_bridge.borrow().record_cta_click(&cta_location(&cta));
    }) as Box<dyn FnMut(MouseEvent)>);
    let _ = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();

    let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Anything the widget posts that isn't JSON-shaped decodes Unknown.
        let payload: serde_json::Value =
            serde_wasm_bindgen::from_value(event.data()).unwrap_or(serde_json::Value::Null);
        let signal = message::decode(&payload);
        let outcome = bridge.borrow_mut().handle_message(&event.origin(), signal);
        if outcome == MessageOutcome::Completed {
            // Keep any other message handler from double-processing the
            // redirect before the analytics push flushes.
            event.stop_immediate_propagation();
        }
    }) as Box<dyn FnMut(MessageEvent)>);
    let _ = window.add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref());
    on_message.forget();

    debug!("scheduler tracking initialized");
}

fn cta_location(element: &Element) -> String {
    let id = element.id();
    if !id.is_empty() {
        return id;
    }
    let class_name = element.class_name();
    if !class_name.is_empty() {
        return class_name;
    }
    "unknown".to_owned()
}
