use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_FALLBACK_ROUTE: &str = "/header";
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::America::Recife;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    #[default]
    Local,
    Session,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub fallback_route: Option<String>,
    pub session_storage: Option<StorageKind>,
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub fallback_route: String,
    pub session_storage: StorageKind,
    pub time_zone: Tz,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            fallback_route: DEFAULT_FALLBACK_ROUTE.to_string(),
            session_storage: StorageKind::Local,
            time_zone: DEFAULT_TIME_ZONE,
        }
    }
}

impl RuntimeConfig {
    pub fn resolve(self) -> ResolvedConfig {
        let defaults = ResolvedConfig::default();
        let time_zone = match self.time_zone.as_deref() {
            Some(name) => name.parse::<Tz>().unwrap_or_else(|_| {
                log::warn!("Unknown time zone '{}', using {}", name, DEFAULT_TIME_ZONE);
                DEFAULT_TIME_ZONE
            }),
            None => defaults.time_zone,
        };
        ResolvedConfig {
            api_base_url: non_empty(self.api_base_url)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            fallback_route: non_empty(self.fallback_route).unwrap_or(defaults.fallback_route),
            session_storage: self.session_storage.unwrap_or(defaults.session_storage),
            time_zone,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

static CONFIG: OnceLock<ResolvedConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global(name: &str) -> Option<RuntimeConfig> {
    // window.__GATEHOUSE_ENV = { API_BASE_URL: "...", FALLBACK_ROUTE: "...", ... }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let lookup = |key: &str| -> Option<String> {
        js_sys::Reflect::get(&obj, &key.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| js_sys::Reflect::get(&obj, &key.to_ascii_uppercase().into()).ok())
            .and_then(|v| v.as_string())
    };
    let session_storage = lookup("session_storage").and_then(|raw| match raw.as_str() {
        "local" => Some(StorageKind::Local),
        "session" => Some(StorageKind::Session),
        _ => None,
    });
    Some(RuntimeConfig {
        api_base_url: lookup("api_base_url"),
        fallback_route: lookup("fallback_route"),
        session_storage,
        time_zone: lookup("time_zone"),
    })
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    read_global("__GATEHOUSE_ENV").or_else(|| read_global("__GATEHOUSE_CONFIG"))
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

fn cache(config: ResolvedConfig) -> &'static ResolvedConfig {
    let _ = CONFIG.set(config);
    CONFIG.get_or_init(ResolvedConfig::default)
}

pub async fn init() -> &'static ResolvedConfig {
    if let Some(cached) = CONFIG.get() {
        return cached;
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache(existing.resolve());
    }
    if let Some(cfg) = fetch_runtime_config().await {
        return cache(cfg.resolve());
    }
    log::info!("No runtime config found, using defaults");
    cache(ResolvedConfig::default())
}

/// Base URL for API calls; waits for the runtime config on first use.
pub async fn await_api_base_url() -> String {
    init().await.api_base_url.clone()
}

/// Cached config, or defaults while `init` has not finished.
pub fn current() -> ResolvedConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

pub fn api_base_url() -> String {
    current().api_base_url
}

pub fn fallback_route() -> String {
    current().fallback_route
}

pub fn session_storage_kind() -> StorageKind {
    current().session_storage
}

pub fn time_zone() -> Tz {
    current().time_zone
}
