use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::hint::{HintError, HintTransport, TransportCallback};

/// Browser `fetch` transport. Each request runs as its own local task.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl HintTransport for FetchTransport {
    fn post_json(&self, url: &str, body: String, done: TransportCallback) {
        let url = url.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            done(post(&url, &body).await);
        });
    }
}

async fn post(url: &str, body: &str) -> Result<String, HintError> {
    let window = web_sys::window().ok_or_else(|| HintError::Network("no window".into()))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &init).map_err(network)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(network)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?
        .dyn_into()
        .map_err(network)?;

    let text = JsFuture::from(response.text().map_err(network)?)
        .await
        .map_err(network)?;
    text.as_string()
        .ok_or_else(|| HintError::Parse("response body is not text".into()))
}

fn network(err: JsValue) -> HintError {
    HintError::Network(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
