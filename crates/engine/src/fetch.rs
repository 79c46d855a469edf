use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure of a JSON request against a remote endpoint.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Js(String),
    #[error("server answered with HTTP {0}")]
    Status(u16),
    #[error("could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("could not decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl From<JsValue> for FetchError {
    fn from(value: JsValue) -> Self {
        FetchError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Reject anything outside the 2xx range.
pub fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status(status))
    }
}

pub fn encode_body<B: Serialize>(body: &B) -> Result<String, FetchError> {
    serde_json::to_string(body).map_err(FetchError::Encode)
}

pub fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, FetchError> {
    serde_json::from_str(text).map_err(FetchError::Decode)
}

/// `GET url` and decode the JSON response.
#[cfg(target_arch = "wasm32")]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let init = web_sys::RequestInit::new();
    init.set_method("GET");
    init.set_mode(web_sys::RequestMode::Cors);
    let text = send(url, &init).await?;
    decode_body(&text)
}

/// `POST url` with a JSON body and decode the JSON response.
#[cfg(target_arch = "wasm32")]
pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, FetchError> {
    let payload = encode_body(body)?;
    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_mode(web_sys::RequestMode::Cors);
    init.set_body(&JsValue::from_str(&payload));
    let text = send(url, &init).await?;
    decode_body(&text)
}

#[cfg(target_arch = "wasm32")]
async fn send(url: &str, init: &web_sys::RequestInit) -> Result<String, FetchError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let request = web_sys::Request::new_with_str_and_init(url, init)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or(FetchError::Js("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_request(&request)).await?;
    let response: web_sys::Response = response.dyn_into()?;
    check_status(response.status())?;

    let text = JsFuture::from(response.text()?).await?;
    text.as_string()
        .ok_or_else(|| FetchError::Js("response body is not text".into()))
}
