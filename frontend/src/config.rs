use serde::Deserialize;
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
const ENV_GLOBAL: &str = "__ACCESSGATE_ENV";
const CONFIG_GLOBAL: &str = "__ACCESSGATE_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

// Reads `window[global][key]`, trying each key in order.
fn read_global(global: &str, keys: &[&str]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
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

fn get_from_env_js() -> Option<String> {
    // window.__ACCESSGATE_ENV = { API_BASE_URL: "..." }
    read_global(ENV_GLOBAL, &["API_BASE_URL", "api_base_url"])
}

fn get_from_window_config() -> Option<String> {
    // window.__ACCESSGATE_CONFIG = { api_base_url: "..." }
    read_global(CONFIG_GLOBAL, &["api_base_url", "API_BASE_URL"])
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
}

/// Applies the lookup precedence: env.js, then window config, then config.json.
pub fn pick_base_url(
    env_js: Option<String>,
    window_config: Option<String>,
    fetched: Option<RuntimeConfig>,
) -> String {
    non_empty(env_js)
        .or_else(|| non_empty(window_config))
        .or_else(|| non_empty(fetched.and_then(|cfg| cfg.api_base_url)))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

fn cache_base_url(value: String) -> String {
    API_BASE_URL.get_or_init(|| value).clone()
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let env_js = get_from_env_js();
    let window_config = get_from_window_config();
    let fetched = if env_js.is_none() && window_config.is_none() {
        fetch_runtime_config().await
    } else {
        None
    };
    let resolved = pick_base_url(env_js, window_config, fetched);
    log::debug!("api base url resolved to {}", resolved);
    cache_base_url(resolved)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
