// Global constants shared by the roomie crates

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "roomie.toml";

/// Prefix for structured environment overrides, e.g. `ROOMIE__WEB__PORT`.
pub const ENV_PREFIX: &str = "ROOMIE";

/// Legacy variables kept for deployments configured before the config file existed.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const LEAD_WEBHOOK_URL_ENV: &str = "N8N_LEAD_WEBHOOK_URL";

pub const DATA_DIR: &str = "./data";
pub const LOG_DIR: &str = "./logs";
pub const LOG_FILE_PREFIX: &str = "roomie.log";

/// Language used when a submission or query does not name one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Newly captured leads wait for the mailing-list sync job.
pub const MAILCHIMP_STATUS_PENDING: &str = "pending";

/// Site setting gating the public blog endpoints.
pub const BLOG_ENABLED_SETTING: &str = "blogEnabled";

pub const LLM_FALLBACK_TEXT: &str = "Sorry, I could not generate a response.";

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are Roomie, the AI assistant of Hotelmol. \
You help hotel owners and managers understand how Roomie automates guest communication, \
bookings and upselling across messengers and the website. Answer concisely and politely, \
in the language of the question. If you do not know something, offer to arrange a demo \
with the Hotelmol team instead of guessing.";
