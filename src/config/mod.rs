use chrono::{FixedOffset, Offset, Utc};
use clap::Parser;
use log::warn;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

/* =======================
CLI ARGS
======================= */

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Backend base URL, overrides `api.base_url`
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Write the rendered page here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/* =======================
MAIN CONFIG
======================= */

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

/* =======================
API CONFIG
======================= */

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,

    #[serde(default = "default_orders_path")]
    pub orders_path: String,

    // explicit null waits forever, like the browser page did
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_orders_path() -> String {
    "/v1/orders".to_string()
}

fn default_timeout_secs() -> Option<u64> {
    Some(10)
}

/* =======================
RENDER CONFIG
======================= */

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub page_title: String,

    /// Offset used to turn `created_at` into a calendar date
    pub utc_offset_hours: i32,
}

impl RenderConfig {
    pub fn offset(&self) -> FixedOffset {
        self.utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| {
                warn!(
                    "⚠️ utc_offset_hours {} out of range, using UTC",
                    self.utc_offset_hours
                );
                Utc.fix()
            })
    }
}

/* =======================
DEFAULT CONFIG
======================= */

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080".to_string(),
                orders_path: default_orders_path(),
                timeout_secs: default_timeout_secs(),
            },
            render: RenderConfig::default(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            page_title: "Заказы".to_string(),
            utc_offset_hours: 3,
        }
    }
}

/* =======================
LOAD / CREATE CONFIG
======================= */

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            let cfg = Config::default();
            let content = serde_json::to_string_pretty(&cfg)?;
            std::fs::write(path, content)?;
            Ok(cfg)
        }
    }
}

// ==================================================
// ENVIRONMENT HELPERS
// ==================================================

impl Config {
    /// Apply `ORDERS_API_URL` and `ORDERS_TIMEOUT_SECS` on top of the file.
    pub fn apply_env(&mut self) {
        if let Some(url) = Self::api_url_override() {
            self.api.base_url = url;
        }

        if let Ok(raw) = env::var("ORDERS_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(0) => self.api.timeout_secs = None,
                Ok(secs) => self.api.timeout_secs = Some(secs),
                Err(_) => warn!("⚠️ Ignoring invalid ORDERS_TIMEOUT_SECS={}", raw),
            }
        }
    }

    /// Backend URL from the environment, if set and non-empty
    pub fn api_url_override() -> Option<String> {
        env::var("ORDERS_API_URL").ok().filter(|s| !s.trim().is_empty())
    }
}
