use serde::{Deserialize, Serialize};
use std::{sync::OnceLock, time::Duration};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub request_timeout_ms: Option<u64>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static REQUEST_TIMEOUT_MS: OnceLock<u64> = OnceLock::new();

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    value
}

pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

/// Positive millisecond count, or the default for anything else.
pub fn parse_timeout_ms(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS)
}

// Set from ./config.json once it has been fetched.
#[cfg(target_arch = "wasm32")]
pub fn request_timeout_ms() -> u64 {
    REQUEST_TIMEOUT_MS
        .get()
        .copied()
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn request_timeout_ms() -> u64 {
    *REQUEST_TIMEOUT_MS.get_or_init(|| {
        parse_timeout_ms(std::env::var("ENTERPRISE_REQUEST_TIMEOUT_MS").ok().as_deref())
    })
}

pub fn request_timeout() -> Duration {
    Duration::from_millis(request_timeout_ms())
}

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;

    fn read_key(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    fn global_object(name: &str) -> Option<js_sys::Object> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        Some(js_sys::Object::from(any))
    }

    // window.__ENTERPRISE_ENV = { API_BASE_URL: "..." } (env.js) wins over
    // window.__ENTERPRISE_CONFIG = { api_base_url: "..." }.
    pub fn snapshot() -> Option<String> {
        if let Some(env) = global_object("__ENTERPRISE_ENV") {
            if let Some(url) = read_key(&env, &["API_BASE_URL", "api_base_url"]) {
                return Some(url);
            }
        }
        let cfg = global_object("__ENTERPRISE_CONFIG")?;
        read_key(&cfg, &["api_base_url", "API_BASE_URL"])
    }

    pub fn write(cfg: &RuntimeConfig) {
        let Some(url) = &cfg.api_base_url else {
            return;
        };
        let Some(w) = web_sys::window() else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
        let _ = js_sys::Reflect::set(&w, &"__ENTERPRISE_CONFIG".into(), &obj);
    }

    pub async fn fetch() -> Option<RuntimeConfig> {
        let resp = reqwest::get("./config.json").await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = globals::snapshot() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = globals::fetch().await {
        globals::write(&cfg);
        if let Some(ms) = cfg.request_timeout_ms.filter(|ms| *ms > 0) {
            let _ = REQUEST_TIMEOUT_MS.set(ms);
        }
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    log::warn!("No API base URL configured; using {}", DEFAULT_API_BASE_URL);
    cache_base_url(DEFAULT_API_BASE_URL)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    match std::env::var("ENTERPRISE_API_BASE_URL") {
        Ok(url) if !url.trim().is_empty() => cache_base_url(&url),
        _ => cache_base_url(DEFAULT_API_BASE_URL),
    }
}

pub async fn init() {
    let base_url = await_api_base_url().await;
    log::info!(
        "API base URL: {} (timeout {} ms)",
        base_url,
        request_timeout_ms()
    );
}
