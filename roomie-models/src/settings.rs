use config::{Config, Environment, File};
use roomie_error::RMResult;
use serde::{self, Deserialize};
use std::{env, ops::Deref, sync::Arc};
use sysinfo::System;

use crate::{
    constants::{
        DATABASE_URL_ENV, DATA_DIR, DEFAULT_SYSTEM_PROMPT, ENV_PREFIX, LEAD_WEBHOOK_URL_ENV,
        OPENAI_API_KEY_ENV,
    },
    enums::common::LeadType,
};

#[derive(Debug, Clone)]
pub struct Settings(Arc<Inner>);

impl Deref for Settings {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl Settings {
    /// Load settings from an optional TOML file, `ROOMIE__*` variables and the
    /// bare legacy variables (`OPENAI_API_KEY`, `DATABASE_URL`, `N8N_LEAD_WEBHOOK_URL`).
    pub fn new(config_path: String) -> RMResult<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(config_path.as_str()).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("webhook.lead_types")
                    .with_list_parse_key("web.cors.whitelist.origins")
                    .with_list_parse_key("web.cors.whitelist.methods")
                    .with_list_parse_key("web.cors.whitelist.headers"),
            )
            .set_override_option("db.url", env::var(DATABASE_URL_ENV).ok())?
            .set_override_option("llm.api_key", env::var(OPENAI_API_KEY_ENV).ok())?
            .set_override_option("webhook.url", env::var(LEAD_WEBHOOK_URL_ENV).ok())?;
        let inner: Inner = builder.build()?.try_deserialize()?;
        Ok(Self(Arc::new(inner)))
    }

    /// Wrap an already-built configuration tree.
    pub fn from_inner(inner: Inner) -> Self {
        Self(Arc::new(inner))
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Inner {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub web: Web,
    #[serde(default)]
    pub db: Db,
    #[serde(default)]
    pub webhook: Webhook,
    #[serde(default)]
    pub llm: Llm,
    #[serde(default)]
    pub consent: Consent,
    #[serde(default)]
    pub log: Log,
}

#[derive(Debug, Clone, Deserialize)]
pub struct General {
    /// Directory the process switches into before resolving relative paths
    /// such as `./data` and `./logs`.
    ///
    /// Override with `ROOMIE__GENERAL__RUNTIME_DIR=/var/lib/roomie`.
    #[serde(default = "General::runtime_dir_default")]
    pub runtime_dir: String,
}

impl Default for General {
    fn default() -> Self {
        General {
            runtime_dir: General::runtime_dir_default(),
        }
    }
}

impl General {
    fn runtime_dir_default() -> String {
        ".".into()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Web {
    #[serde(default = "Web::router_prefix_default")]
    pub router_prefix: String,
    #[serde(default = "Web::host_default")]
    pub host: String,
    #[serde(default = "Web::port_default")]
    pub port: u16,
    #[serde(default = "Web::workers_default")]
    pub workers: i32,
    /// Maximum accepted JSON body in bytes
    #[serde(default = "Web::json_limit_default")]
    pub json_limit: usize,
    #[serde(default)]
    pub cors: Cors,
}

impl Default for Web {
    fn default() -> Self {
        Web {
            router_prefix: Web::router_prefix_default(),
            host: Web::host_default(),
            port: Web::port_default(),
            workers: Web::workers_default(),
            json_limit: Web::json_limit_default(),
            cors: Default::default(),
        }
    }
}

impl Web {
    fn router_prefix_default() -> String {
        "/api".into()
    }

    fn host_default() -> String {
        "0.0.0.0".into()
    }

    fn port_default() -> u16 {
        3000
    }

    fn workers_default() -> i32 {
        0
    }

    fn json_limit_default() -> usize {
        64 * 1024
    }

    /// Resolve the worker count: `0` means one per CPU, a negative `n` means
    /// CPUs divided by `|n|` (at least one).
    pub fn get_worker_count(&self) -> usize {
        match self.workers {
            0 => System::new_all().cpus().len().max(1),
            n if n > 0 => n as usize,
            n => std::cmp::max(
                1,
                (System::new_all().cpus().len() as i32 / n.abs()) as usize,
            ),
        }
    }
}

#[derive(Default, Debug, Clone, Deserialize)]
pub struct Cors {
    #[serde(default)]
    pub mode: CorsMode,
    #[serde(default)]
    pub whitelist: Whitelist,
}

#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorsMode {
    #[default]
    AllowAll,
    Whitelist,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Whitelist {
    #[serde(default = "Whitelist::origins_default")]
    pub origins: Vec<String>,
    #[serde(default = "Whitelist::methods_default")]
    pub methods: Vec<String>,
    #[serde(default = "Whitelist::headers_default")]
    pub headers: Vec<String>,
}

impl Default for Whitelist {
    fn default() -> Self {
        Whitelist {
            origins: Whitelist::origins_default(),
            methods: Whitelist::methods_default(),
            headers: Whitelist::headers_default(),
        }
    }
}

impl Whitelist {
    fn origins_default() -> Vec<String> {
        vec!["https://roomie.hotelmol.com".into()]
    }

    fn methods_default() -> Vec<String> {
        vec!["GET".into(), "POST".into(), "OPTIONS".into()]
    }

    fn headers_default() -> Vec<String> {
        vec!["Content-Type".into(), "Accept".into()]
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Db {
    /// sea-orm connection URL; `sqlite:` and `postgres://` are supported
    #[serde(default = "Db::url_default")]
    pub url: String,
    #[serde(default = "Db::timeout_default")]
    pub timeout: u64,
    #[serde(default = "Db::idle_timeout_default")]
    pub idle_timeout: u64,
    #[serde(default = "Db::max_lifetime_default")]
    pub max_lifetime: u64,
    #[serde(default = "Db::max_connections_default")]
    pub max_connections: u32,
    #[serde(default = "Db::sql_logging_default")]
    pub sql_logging: bool,
}

impl Default for Db {
    fn default() -> Self {
        Db {
            url: Db::url_default(),
            timeout: Db::timeout_default(),
            idle_timeout: Db::idle_timeout_default(),
            max_lifetime: Db::max_lifetime_default(),
            max_connections: Db::max_connections_default(),
            sql_logging: Db::sql_logging_default(),
        }
    }
}

impl Db {
    fn url_default() -> String {
        // mode=rwc creates the file on first start
        format!("sqlite:{DATA_DIR}/roomie.db?mode=rwc")
    }

    fn timeout_default() -> u64 {
        5000
    }

    fn idle_timeout_default() -> u64 {
        60_000
    }

    fn max_lifetime_default() -> u64 {
        1_800_000
    }

    fn max_connections_default() -> u32 {
        10
    }

    fn sql_logging_default() -> bool {
        cfg!(debug_assertions)
    }

    #[inline]
    pub fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite:")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Webhook {
    /// Lead notification endpoint (an n8n workflow in production); unset disables it
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "Webhook::timeout_ms_default")]
    pub timeout_ms: u64,
    /// Lead types that trigger a notification
    #[serde(default = "Webhook::lead_types_default")]
    pub lead_types: Vec<LeadType>,
}

impl Default for Webhook {
    fn default() -> Self {
        Webhook {
            url: None,
            timeout_ms: Webhook::timeout_ms_default(),
            lead_types: Webhook::lead_types_default(),
        }
    }
}

impl Webhook {
    fn timeout_ms_default() -> u64 {
        10_000
    }

    fn lead_types_default() -> Vec<LeadType> {
        vec![LeadType::Contact, LeadType::Demo, LeadType::Consultation]
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Llm {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "Llm::base_url_default")]
    pub base_url: String,
    #[serde(default = "Llm::model_default")]
    pub model: String,
    #[serde(default = "Llm::temperature_default")]
    pub temperature: f32,
    #[serde(default = "Llm::max_tokens_default")]
    pub max_tokens: u32,
    #[serde(default = "Llm::timeout_ms_default")]
    pub timeout_ms: u64,
    #[serde(default = "Llm::system_prompt_default")]
    pub system_prompt: String,
}

impl Default for Llm {
    fn default() -> Self {
        Llm {
            api_key: None,
            base_url: Llm::base_url_default(),
            model: Llm::model_default(),
            temperature: Llm::temperature_default(),
            max_tokens: Llm::max_tokens_default(),
            timeout_ms: Llm::timeout_ms_default(),
            system_prompt: Llm::system_prompt_default(),
        }
    }
}

impl Llm {
    fn base_url_default() -> String {
        "https://api.openai.com/v1".into()
    }

    fn model_default() -> String {
        "gpt-4o-mini".into()
    }

    fn temperature_default() -> f32 {
        0.7
    }

    fn max_tokens_default() -> u32 {
        1024
    }

    fn timeout_ms_default() -> u64 {
        60_000
    }

    fn system_prompt_default() -> String {
        DEFAULT_SYSTEM_PROMPT.into()
    }

    /// Full chat-completions endpoint derived from `base_url`.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Consent {
    /// Salt prepended to client IPs before hashing
    #[serde(default = "Consent::ip_salt_default")]
    pub ip_salt: String,
}

impl Default for Consent {
    fn default() -> Self {
        Consent {
            ip_salt: Consent::ip_salt_default(),
        }
    }
}

impl Consent {
    fn ip_salt_default() -> String {
        "roomie-consent".into()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    /// One of `trace`, `debug`, `info`, `warn`, `error`
    #[serde(default = "Log::level_default")]
    pub level: String,
    /// Write a daily rolling file under `./logs` in addition to stdout
    #[serde(default = "Log::file_default")]
    pub file: bool,
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: Log::level_default(),
            file: Log::file_default(),
        }
    }
}

impl Log {
    fn level_default() -> String {
        if cfg!(debug_assertions) {
            "debug".into()
        } else {
            "info".into()
        }
    }

    fn file_default() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable_without_a_file() {
        let settings = Settings::from_inner(Inner::default());
        assert_eq!(settings.web.router_prefix, "/api");
        assert_eq!(settings.web.port, 3000);
        assert!(settings.db.is_sqlite());
        assert!(settings.webhook.url.is_none());
        assert!(settings.webhook.lead_types.contains(&LeadType::Demo));
        assert!(!settings.webhook.lead_types.contains(&LeadType::Integration));
        assert_eq!(
            settings.llm.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn completions_url_tolerates_trailing_slash() {
        let llm = Llm {
            base_url: "http://127.0.0.1:9000/v1/".into(),
            ..Default::default()
        };
        assert_eq!(llm.completions_url(), "http://127.0.0.1:9000/v1/chat/completions");
    }

    #[test]
    fn worker_count_is_never_zero() {
        let web = Web {
            workers: -1000,
            ..Default::default()
        };
        assert_eq!(web.get_worker_count(), 1);
        let web = Web {
            workers: 3,
            ..Default::default()
        };
        assert_eq!(web.get_worker_count(), 3);
    }

    #[test]
    fn webhook_lead_types_deserialize_from_strings() {
        let webhook: Webhook =
            serde_json::from_str(r#"{"url":"http://hook","lead_types":["roi","integration"]}"#)
                .unwrap();
        assert_eq!(webhook.lead_types, vec![LeadType::Roi, LeadType::Integration]);
    }
}
