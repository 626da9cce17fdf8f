//! Optional head-mounted display presentation.
//!
//! WebXR is probed dynamically through `js_sys::Reflect` so the viewer runs
//! unchanged in browsers without the API. When immersive VR is supported the
//! pre-hidden button is revealed and clicking it requests a session; the
//! handshake is all that happens here — presentation is the browser's job
//! and is orthogonal to picking and dragging.

use crate::constants::VR_BUTTON_ID;
use crate::dom;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn wire_vr_button(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let navigator = window.navigator();
    let xr = match js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("xr")) {
        Ok(v) if !v.is_undefined() && !v.is_null() => v,
        _ => {
            log::info!("[xr] WebXR not available");
            return;
        }
    };

    let Some(promise) = call_xr_method(&xr, "isSessionSupported") else {
        return;
    };
    let document = document.clone();
    spawn_local(async move {
        let supported = JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if !supported {
            log::info!("[xr] immersive-vr not supported");
            return;
        }
        log::info!("[xr] immersive-vr supported");
        dom::show_element(&document, VR_BUTTON_ID);
        dom::add_click_listener(&document, VR_BUTTON_ID, move || {
            let Some(promise) = call_xr_method(&xr, "requestSession") else {
                return;
            };
            spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_session) => log::info!("[xr] immersive session started"),
                    Err(e) => log::error!("[xr] requestSession failed: {:?}", e),
                }
            });
        });
    });
}

/// Invoke `xr.<method>("immersive-vr")`, returning the resulting promise.
fn call_xr_method(xr: &JsValue, method: &str) -> Option<js_sys::Promise> {
    let f = js_sys::Reflect::get(xr, &JsValue::from_str(method))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    f.call1(xr, &JsValue::from_str("immersive-vr"))
        .ok()?
        .dyn_into::<js_sys::Promise>()
        .ok()
}
