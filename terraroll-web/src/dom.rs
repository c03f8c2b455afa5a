//! Thin wrappers over the browser APIs the randomizer touches: the console,
//! timers and `fetch`. Everything returns `JsValue` errors for the caller to map.

use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no browser window"))
}

/// Best-effort text for a rejected promise or thrown value.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{value:?}"),
    }
}

pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

/// Resolve after `duration_ms` via `setTimeout`. Drives both the toast
/// auto-dismiss and the config fetch timeout.
#[allow(clippy::future_not_send)]
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let mut on_elapsed: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| on_elapsed = Some(resolve));
    let on_elapsed = on_elapsed.ok_or_else(|| JsValue::from_str("timer promise not armed"))?;

    let tick = Closure::once(move || {
        let _ = on_elapsed.call0(&JsValue::UNDEFINED);
    });
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    // The browser owns the callback until the timer fires.
    tick.forget();

    JsFuture::from(promise).await.map(drop)
}

/// `fetch(url)` with the result cast to a `Response`. HTTP error statuses
/// still resolve; only transport failures reject.
#[allow(clippy::future_not_send)]
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let pending = window()?.fetch_with_str(url);
    JsFuture::from(pending).await?.dyn_into::<Response>()
}

#[allow(clippy::future_not_send)]
pub async fn response_text(response: &Response) -> Result<String, JsValue> {
    let body = JsFuture::from(response.text()?).await?;
    body.as_string()
        .ok_or_else(|| JsValue::from_str("response body was not text"))
}
