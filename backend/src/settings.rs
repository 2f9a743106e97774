//! Startup configuration loaded via OrthoConfig.
//!
//! Raw settings are read once per process from the environment (and any
//! OrthoConfig file layer), then validated into an immutable [`AppConfig`].
//! A missing or malformed required value stops startup with a
//! [`ConfigError`] naming the variable. Handlers never read the environment.

pub mod fingerprint;

use std::ffi::OsString;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;
use zeroize::Zeroizing;

pub use fingerprint::secret_fingerprint;

const PROGRAM_NAME: &str = "order-functions";
const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com/emails";
const DEFAULT_SENDER: &str = "Loja <nao-responda@sua-loja.com>";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const HTTP_URL_EXPECTED: &str = "an absolute http(s) URL";

/// E-mail provider settings.
#[derive(Clone, Default, Deserialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(prefix = "RESEND")]
pub struct ResendSettings {
    /// Bearer token for the provider API.
    pub api_key: Option<String>,
    /// Override for the provider's send endpoint.
    pub api_url: Option<String>,
    /// `From` header used for confirmation e-mails.
    pub sender: Option<String>,
}

/// Data-store settings.
#[derive(Clone, Default, Deserialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(prefix = "SUPABASE")]
pub struct SupabaseSettings {
    /// Project URL, e.g. `https://<ref>.supabase.co`.
    pub url: Option<String>,
    /// Public anon key sent as `apikey`.
    pub anon_key: Option<String>,
}

/// Listener and outbound client settings.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(prefix = "SERVER")]
pub struct ServerSettings {
    /// Socket address to bind.
    pub bind_addr: Option<String>,
    /// Per-request timeout for outbound calls, in seconds.
    pub http_timeout_secs: Option<u64>,
}

impl fmt::Debug for ResendSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResendSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("sender", &self.sender)
            .finish()
    }
}

impl fmt::Debug for SupabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseSettings")
            .field("url", &self.url)
            .field("anon_key", &self.anon_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// OrthoConfig could not merge the configuration layers.
    #[error("failed to load {section} settings: {message}")]
    Load {
        section: &'static str,
        message: String,
    },
    /// A required value is absent or blank.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A value is present but unusable.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Validated e-mail provider configuration.
pub struct ResendConfig {
    pub api_url: Url,
    pub api_key: Zeroizing<String>,
    pub sender: String,
}

/// Validated data-store configuration.
pub struct SupabaseConfig {
    pub url: Url,
    pub anon_key: Zeroizing<String>,
}

/// Validated listener configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpConfig {
    pub bind_addr: SocketAddr,
    /// `None` leaves outbound calls unbounded.
    pub outbound_timeout: Option<Duration>,
}

/// Complete, validated process configuration.
pub struct AppConfig {
    pub resend: ResendConfig,
    pub supabase: SupabaseConfig,
    pub http: HttpConfig,
}

fn required_secret(value: Option<String>, name: &'static str) -> Result<Zeroizing<String>, ConfigError> {
    let value = Zeroizing::new(value.unwrap_or_default());
    if value.trim().is_empty() {
        return Err(ConfigError::MissingEnv { name });
    }
    Ok(value)
}

fn parse_http_url(raw: &str, name: &'static str) -> Result<Url, ConfigError> {
    let invalid = || ConfigError::InvalidEnv {
        name,
        value: raw.to_owned(),
        expected: HTTP_URL_EXPECTED,
    };
    let url = Url::parse(raw.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid());
    }
    Ok(url)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

impl ResendSettings {
    /// Validate into a [`ResendConfig`].
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the API key is missing or the URL is
    /// unusable.
    pub fn validate(self) -> Result<ResendConfig, ConfigError> {
        let api_key = required_secret(self.api_key, "RESEND_API_KEY")?;
        let api_url = non_blank(self.api_url).unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_owned());
        Ok(ResendConfig {
            api_url: parse_http_url(&api_url, "RESEND_API_URL")?,
            api_key,
            sender: non_blank(self.sender).unwrap_or_else(|| DEFAULT_SENDER.to_owned()),
        })
    }
}

impl SupabaseSettings {
    /// Validate into a [`SupabaseConfig`].
    ///
    /// # Errors
    /// Returns [`ConfigError`] when either value is missing or the URL is
    /// unusable.
    pub fn validate(self) -> Result<SupabaseConfig, ConfigError> {
        let url = non_blank(self.url).ok_or(ConfigError::MissingEnv {
            name: "SUPABASE_URL",
        })?;
        Ok(SupabaseConfig {
            url: parse_http_url(&url, "SUPABASE_URL")?,
            anon_key: required_secret(self.anon_key, "SUPABASE_ANON_KEY")?,
        })
    }
}

impl ServerSettings {
    /// Validate into an [`HttpConfig`].
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidEnv`] for an unparsable bind address or a
    /// zero timeout.
    pub fn validate(self) -> Result<HttpConfig, ConfigError> {
        let raw_addr = non_blank(self.bind_addr).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidEnv {
                name: "SERVER_BIND_ADDR",
                value: raw_addr.clone(),
                expected: "host:port socket address",
            })?;
        let outbound_timeout = match self.http_timeout_secs {
            Some(0) => {
                return Err(ConfigError::InvalidEnv {
                    name: "SERVER_HTTP_TIMEOUT_SECS",
                    value: "0".to_owned(),
                    expected: "a positive number of seconds",
                });
            }
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };
        Ok(HttpConfig {
            bind_addr,
            outbound_timeout,
        })
    }
}

impl AppConfig {
    /// Load every settings section and validate them together.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] encountered.
    pub fn load() -> Result<Self, ConfigError> {
        let args = || [OsString::from(PROGRAM_NAME)];
        let resend = ResendSettings::load_from_iter(args()).map_err(|err| ConfigError::Load {
            section: "resend",
            message: err.to_string(),
        })?;
        let supabase = SupabaseSettings::load_from_iter(args()).map_err(|err| ConfigError::Load {
            section: "supabase",
            message: err.to_string(),
        })?;
        let server = ServerSettings::load_from_iter(args()).map_err(|err| ConfigError::Load {
            section: "server",
            message: err.to_string(),
        })?;
        Self::from_settings(resend, supabase, server)
    }

    /// Validate already-loaded settings.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] encountered.
    pub fn from_settings(
        resend: ResendSettings,
        supabase: SupabaseSettings,
        server: ServerSettings,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            resend: resend.validate()?,
            supabase: supabase.validate()?,
            http: server.validate()?,
        })
    }
}
