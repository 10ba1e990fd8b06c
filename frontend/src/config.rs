use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Runtime configuration served next to the static assets as `./config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

/// Base URL of the cost-analysis API when nothing else is configured.
const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

static API_BASE_URL: OnceLock<String> = OnceLock::new();

// Deployments can inject the API location without rebuilding the bundle:
// window.__SOLAR_PLANNER_ENV (env.js) takes precedence over
// window.__SOLAR_PLANNER_CONFIG (written back from config.json).
fn read_global_url(global: &str) -> Option<String> {
    let window = web_sys::window()?;
    let holder = js_sys::Reflect::get(&window, &global.into()).ok()?;
    if holder.is_undefined() || holder.is_null() {
        return None;
    }
    let holder = js_sys::Object::from(holder);
    ["api_base_url", "API_BASE_URL"].iter().find_map(|key| {
        js_sys::Reflect::get(&holder, &(*key).into())
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
            .and_then(|value| value.as_string())
    })
}

fn snapshot_from_globals() -> Option<String> {
    read_global_url("__SOLAR_PLANNER_ENV").or_else(|| read_global_url("__SOLAR_PLANNER_CONFIG"))
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

fn write_window_config(cfg: &RuntimeConfig) {
    let url = match &cfg.api_base_url {
        Some(url) => url,
        None => return,
    };
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let holder = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &holder,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&window, &"__SOLAR_PLANNER_CONFIG".into(), &holder);
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
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
