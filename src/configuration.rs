use crate::error::Error;
use once_cell::sync::Lazy;
use reqwest::Url;
use std::sync::RwLock;
use std::time::Duration;

/// Default WAHA server address
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Process-wide defaults picked up by `Client::new`
static DEFAULTS: Lazy<RwLock<Configuration>> = Lazy::new(|| RwLock::new(Configuration::default()));

/// Configuration for a WAHA client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Server address, never ending with `/`
    base_url: String,
    /// Value sent as `X-Api-Key`
    api_key: Option<String>,
    /// Timeout applied to every request unless overridden per call
    timeout: Duration,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Configuration {
    /// Create a configuration pointing at `base_url` with default settings otherwise
    pub fn new<S: AsRef<str>>(base_url: S) -> Self {
        let mut config = Configuration::default();
        config.set_base_url(base_url);
        config
    }

    /// Get a copy of the process-wide default configuration
    pub fn global() -> Configuration {
        match DEFAULTS.read() {
            Ok(config) => config.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Modify the process-wide default configuration
    pub fn configure_global<F>(config_fn: F)
    where
        F: FnOnce(&mut Configuration),
    {
        let mut guard = match DEFAULTS.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        config_fn(&mut guard);
    }

    /// Set the server address. Trailing slashes are removed.
    pub fn set_base_url<S: AsRef<str>>(&mut self, base_url: S) {
        self.base_url = base_url.as_ref().trim_end_matches('/').to_string();
    }

    /// Get the server address
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the API key. An empty key disables the `X-Api-Key` header.
    pub fn set_api_key<S: AsRef<str>>(&mut self, api_key: S) {
        let key = api_key.as_ref();
        self.api_key = if key.is_empty() {
            None
        } else {
            Some(key.to_string())
        };
    }

    /// Remove the API key
    pub fn clear_api_key(&mut self) {
        self.api_key = None;
    }

    /// Get the API key
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Set the default request timeout
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Get the default request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Error> {
        if self.base_url.is_empty() {
            return Err(Error::configuration("Base URL not configured"));
        }

        let url = Url::parse(&self.base_url).map_err(|e| {
            Error::configuration(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::configuration(format!(
                "Invalid base URL scheme: '{}'. Must be 'http' or 'https'",
                url.scheme()
            )));
        }

        if self.timeout.is_zero() {
            return Err(Error::configuration("Timeout must be greater than zero"));
        }

        Ok(())
    }
}
