use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_ASSISTANT_URL: &str = "http://localhost:5005/webhooks/rest/webhook";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub assistant_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static ASSISTANT_URL: OnceLock<String> = OnceLock::new();

fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

fn global_string(scope: &str, keys: &[&str]) -> Option<String> {
    // Expect optional global objects like:
    //   window.__PORTAL_ENV = { API_BASE_URL: "...", ASSISTANT_URL: "..." }
    //   window.__PORTAL_CONFIG = { api_base_url: "...", assistant_url: "..." }
    let w = window();
    let any = js_sys::Reflect::get(&w, &scope.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

fn base_url_from_globals() -> Option<String> {
    global_string("__PORTAL_ENV", &["API_BASE_URL", "api_base_url"])
        .or_else(|| global_string("__PORTAL_CONFIG", &["api_base_url", "API_BASE_URL"]))
}

fn assistant_url_from_globals() -> Option<String> {
    global_string("__PORTAL_ENV", &["ASSISTANT_URL", "assistant_url"])
        .or_else(|| global_string("__PORTAL_CONFIG", &["assistant_url", "ASSISTANT_URL"]))
}

fn cache(slot: &OnceLock<String>, value: &str) -> String {
    let value = value.to_string();
    let _ = slot.set(value.clone());
    value
}

fn write_window_config(cfg: &RuntimeConfig) {
    if cfg.api_base_url.is_none() && cfg.assistant_url.is_none() {
        return;
    }
    let w = match web_sys::window() {
        Some(win) => win,
        None => return,
    };
    let obj = js_sys::Object::new();
    if let Some(url) = &cfg.api_base_url {
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
    }
    if let Some(url) = &cfg.assistant_url {
        let _ = js_sys::Reflect::set(
            &obj,
            &"assistant_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
    }
    let _ = js_sys::Reflect::set(&w, &"__PORTAL_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = base_url_from_globals() {
        return cache(&API_BASE_URL, &existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache(&API_BASE_URL, &url);
        }
    }
    cache(&API_BASE_URL, DEFAULT_API_BASE_URL)
}

pub async fn await_assistant_url() -> String {
    if let Some(cached) = ASSISTANT_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = assistant_url_from_globals() {
        return cache(&ASSISTANT_URL, &existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.assistant_url {
            return cache(&ASSISTANT_URL, &url);
        }
    }
    cache(&ASSISTANT_URL, DEFAULT_ASSISTANT_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
    let _ = await_assistant_url().await;
}
