use log::{error, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::config;

/// Opens the HouseCall Pro booking modal. Preference order: the vendor's
/// global script object, then the hidden trigger element its embed binds to,
/// then a plain phone call. Booking must stay reachable even when the embed
/// script never loaded.
pub fn open_booking_modal() {
    if let Err(err) = try_open() {
        error!("error opening booking modal: {err:?}");
        phone_fallback();
    }
}

fn try_open() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let hcp = js_sys::Reflect::get(&window, &JsValue::from_str("HCP"))?;
    if !hcp.is_undefined() {
        let modal = js_sys::Reflect::get(&hcp, &JsValue::from_str("modal"))?;
        if modal.is_object() {
            let open = js_sys::Reflect::get(&modal, &JsValue::from_str("open"))?;
            let open: js_sys::Function = open
                .dyn_into()
                .map_err(|_| JsValue::from_str("HCP.modal.open is not callable"))?;
            let args = js_sys::Object::new();
            js_sys::Reflect::set(&args, &"token".into(), &config::HCP_TOKEN.into())?;
            js_sys::Reflect::set(
                &args,
                &"organization".into(),
                &config::HCP_ORGANIZATION.into(),
            )?;
            open.call1(&modal, &args)?;
            return Ok(());
        }
    }

    if let Some(document) = window.document() {
        if let Some(trigger) = document.get_element_by_id(config::HCP_HIDDEN_TRIGGER_ID) {
            if let Ok(trigger) = trigger.dyn_into::<HtmlElement>() {
                trigger.click();
                return Ok(());
            }
        }
    }

    warn!("HouseCall Pro embed not ready, falling back to phone");
    phone_fallback();
    Ok(())
}

fn phone_fallback() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(config::PHONE_HREF);
    }
}
