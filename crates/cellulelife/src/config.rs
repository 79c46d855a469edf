//! Endpoint configuration handed from the host to the simulation module.
//!
//! Both endpoints are optional. A missing endpoint is not an error here: the
//! features that need it are simply unavailable later on.

/// Name of the variable holding the result-submission URL.
pub const SUBMIT_RESULT_VAR: &str = "API_URL_SUBMIT_RESULT";
/// Name of the variable holding the high-score URL.
pub const GET_HIGH_SCORES_VAR: &str = "API_URL_GET_HIGH_SCORES";

/// Immutable once built; share it as `Rc<EndpointConfig>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointConfig {
    submit_result: Option<String>,
    get_high_scores: Option<String>,
}

impl EndpointConfig {
    pub fn new(submit_result: Option<String>, get_high_scores: Option<String>) -> Self {
        Self {
            submit_result,
            get_high_scores,
        }
    }

    /// Build from any name -> value lookup. Values are taken verbatim.
    pub fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        Self {
            submit_result: lookup(SUBMIT_RESULT_VAR),
            get_high_scores: lookup(GET_HIGH_SCORES_VAR),
        }
    }

    /// Values baked in by the build environment at compile time.
    pub fn from_build_env() -> Self {
        Self {
            submit_result: option_env!("API_URL_SUBMIT_RESULT").map(str::to_string),
            get_high_scores: option_env!("API_URL_GET_HIGH_SCORES").map(str::to_string),
        }
    }

    /// Values from the process environment. Non-unicode values count as absent.
    pub fn from_process_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Values a JS bootstrap published on the global object. Anything that is
    /// not a string (usually `undefined`) counts as absent.
    #[cfg(target_arch = "wasm32")]
    pub fn from_global() -> Self {
        let global = js_sys::global();
        Self::from_lookup(|name| {
            js_sys::Reflect::get(&global, &wasm_bindgen::JsValue::from_str(name))
                .ok()
                .and_then(|value| value.as_string())
        })
    }

    /// Publish both values on the global object under their variable names,
    /// for page scripts that read them there. Absent values become `undefined`.
    #[cfg(target_arch = "wasm32")]
    pub fn publish_to_global(&self) -> Result<(), wasm_bindgen::JsValue> {
        use wasm_bindgen::JsValue;

        let global = js_sys::global();
        for (name, value) in [
            (SUBMIT_RESULT_VAR, &self.submit_result),
            (GET_HIGH_SCORES_VAR, &self.get_high_scores),
        ] {
            let value = value
                .as_deref()
                .map_or(JsValue::UNDEFINED, JsValue::from_str);
            js_sys::Reflect::set(&global, &JsValue::from_str(name), &value)?;
        }
        Ok(())
    }

    pub fn submit_result(&self) -> Option<&str> {
        self.submit_result.as_deref()
    }

    pub fn get_high_scores(&self) -> Option<&str> {
        self.get_high_scores.as_deref()
    }

    /// True when neither endpoint is configured; the module runs offline.
    pub fn is_offline(&self) -> bool {
        self.submit_result.is_none() && self.get_high_scores.is_none()
    }
}
