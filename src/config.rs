use anyhow::Context;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

pub struct Config {
    /// backend root, without the `/api` prefix
    pub backend_url: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Reads `LESSON_BACKEND_URL` and `LESSON_TIMEOUT_SECS`, after loading a
    /// `.env` file if there is one.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Config::default();

        if let Some(url) = lookup("LESSON_BACKEND_URL").filter(|u| !u.trim().is_empty()) {
            config.backend_url = url;
        }
        if let Some(secs) = lookup("LESSON_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .context(format!("LESSON_TIMEOUT_SECS must be a number of seconds, got '{}'", secs))?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
