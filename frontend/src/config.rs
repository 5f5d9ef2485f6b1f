use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

/// Redirect delays above this are almost certainly a unit mistake.
const SUSPECT_REDIRECT_MS: u32 = 10_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub otp_length: Option<usize>,
    #[serde(default)]
    pub otp_ttl_secs: Option<u32>,
    #[serde(default)]
    pub resend_cooldown_secs: Option<u32>,
    #[serde(default)]
    pub finalize_failure_redirect_ms: Option<u32>,
    #[serde(default)]
    pub expiry_redirect_ms: Option<u32>,
    #[serde(default)]
    pub landing_path: Option<String>,
}

/// Tunables of the OTP verification flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSettings {
    pub code_length: usize,
    pub ttl_secs: u32,
    pub resend_cooldown_secs: u32,
    pub finalize_failure_redirect_ms: u32,
    pub expiry_redirect_ms: u32,
    pub landing_path: String,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            code_length: 5,
            ttl_secs: 300,
            resend_cooldown_secs: 10,
            finalize_failure_redirect_ms: 2_200,
            expiry_redirect_ms: 2_000,
            landing_path: "/profile".to_string(),
        }
    }
}

impl FlowSettings {
    pub fn from_runtime(cfg: &RuntimeConfig) -> Self {
        let defaults = Self::default();
        let settings = Self {
            code_length: cfg
                .otp_length
                .filter(|len| (1..=12).contains(len))
                .unwrap_or(defaults.code_length),
            ttl_secs: cfg
                .otp_ttl_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.ttl_secs),
            resend_cooldown_secs: cfg
                .resend_cooldown_secs
                .unwrap_or(defaults.resend_cooldown_secs),
            finalize_failure_redirect_ms: cfg
                .finalize_failure_redirect_ms
                .unwrap_or(defaults.finalize_failure_redirect_ms),
            expiry_redirect_ms: cfg
                .expiry_redirect_ms
                .unwrap_or(defaults.expiry_redirect_ms),
            landing_path: cfg
                .landing_path
                .clone()
                .filter(|path| path.starts_with('/'))
                .unwrap_or(defaults.landing_path),
        };
        if settings.finalize_failure_redirect_ms > SUSPECT_REDIRECT_MS {
            log::warn!(
                "finalize_failure_redirect_ms={} looks suspiciously long; expected a few seconds",
                settings.finalize_failure_redirect_ms
            );
        }
        settings
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global(name: &str) -> Option<RuntimeConfig> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let json = js_sys::JSON::stringify(&obj).ok()?.as_string()?;
    // env.js uses upper-case keys, config.json lower-case
    let lowered = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(&json)
        .ok()?
        .into_iter()
        .map(|(k, v)| (k.to_ascii_lowercase(), v))
        .collect::<serde_json::Map<_, _>>();
    serde_json::from_value(serde_json::Value::Object(lowered)).ok()
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    // window.__DOCBOOK_ENV (env.js) takes precedence over window.__DOCBOOK_CONFIG
    read_global("__DOCBOOK_ENV").or_else(|| read_global("__DOCBOOK_CONFIG"))
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

fn cache_config(cfg: RuntimeConfig) -> RuntimeConfig {
    let _ = RUNTIME_CONFIG.set(cfg);
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

pub async fn await_runtime_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_config(existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        return cache_config(cfg);
    }
    log::info!("No runtime config found, using defaults");
    cache_config(RuntimeConfig::default())
}

pub async fn await_api_base_url() -> String {
    await_runtime_config()
        .await
        .api_base_url
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Settings from the already-loaded runtime config, or defaults before `init` finished.
pub fn flow_settings() -> FlowSettings {
    RUNTIME_CONFIG
        .get()
        .map(FlowSettings::from_runtime)
        .unwrap_or_default()
}

pub async fn init() {
    let cfg = await_runtime_config().await;
    log::debug!(
        "api_base_url={}",
        cfg.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    );
}
