use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    #[serde(default)]
    pub gate: GateConfig,
    #[serde(default)]
    pub tls: TlsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub signing_key: String,
    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_login_attempts")]
    pub login_attempts: u32,
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GateConfig {
    #[serde(default = "default_protected_prefix")]
    pub protected_prefix: String,
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default = "default_allowed_next_prefixes")]
    pub allowed_next_prefixes: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TlsConfig {
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            signing_key: String::new(),
            session_ttl_hours: default_session_ttl_hours(),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            login_attempts: default_login_attempts(),
            window_secs: default_window_secs(),
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            protected_prefix: default_protected_prefix(),
            login_path: default_login_path(),
            allowed_next_prefixes: default_allowed_next_prefixes(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    "0.0.0.0:9090".parse().unwrap()
}

fn default_session_ttl_hours() -> u64 { 12 }
fn default_login_attempts() -> u32 { 10 }
fn default_window_secs() -> u64 { 60 }
fn default_protected_prefix() -> String { "/demo".to_string() }
fn default_login_path() -> String { "/demo/login".to_string() }

fn default_allowed_next_prefixes() -> Vec<String> {
    vec!["/demo".to_string()]
}

impl ServerConfig {
    /// Returns `true` when all three auth settings are present.
    ///
    /// A partially configured gate is inert and fails closed: protected
    /// requests are denied and logins rejected with a configuration error.
    pub fn is_configured(&self) -> bool {
        !self.auth.username.is_empty()
            && !self.auth.password.is_empty()
            && !self.auth.signing_key.is_empty()
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.auth.session_ttl_hours * 3600)
    }

    pub fn session_ttl_ms(&self) -> u64 {
        self.auth.session_ttl_hours * 3600 * 1000
    }

    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit.window_secs)
    }

    pub fn tls_enabled(&self) -> bool {
        self.tls.cert_path.is_some() && self.tls.key_path.is_some()
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = std::env::var("DEMOGATE_CONFIG").map(PathBuf::from).ok();

        let mut config: ServerConfig = if let Some(path) = config_path {
            let contents = std::fs::read_to_string(&path)?;
            toml::from_str(&contents)?
        } else {
            ServerConfig {
                bind_addr: default_bind_addr(),
                auth: AuthConfig::default(),
                rate_limit: RateLimitConfig::default(),
                gate: GateConfig::default(),
                tls: TlsConfig::default(),
            }
        };

        if let Ok(username) = std::env::var("DEMOGATE_USERNAME") {
            config.auth.username = username;
        }
        if let Ok(password) = std::env::var("DEMOGATE_PASSWORD") {
            config.auth.password = password;
        }
        if let Ok(key) = std::env::var("DEMOGATE_SIGNING_KEY") {
            config.auth.signing_key = key;
        }
        if let Ok(addr) = std::env::var("DEMOGATE_BIND_ADDR") {
            config.bind_addr = addr.parse()?;
        }
        if let Ok(cert) = std::env::var("DEMOGATE_TLS_CERT") {
            config.tls.cert_path = Some(cert);
        }
        if let Ok(key) = std::env::var("DEMOGATE_TLS_KEY") {
            config.tls.key_path = Some(key);
        }

        // Security: validate signing key strength when the gate is configured
        if config.is_configured() {
            const WEAK_KEYS: &[&str] = &[
                "change-me-to-a-random-secret",
                "secret",
                "password",
                "signing-key",
            ];
            if WEAK_KEYS.iter().any(|&w| config.auth.signing_key == w) {
                anyhow::bail!(
                    "Signing key matches a known weak/placeholder value. \
                     Set a strong random key via DEMOGATE_SIGNING_KEY environment variable."
                );
            }
            if config.auth.signing_key.len() < 32 {
                tracing::warn!(
                    "Signing key is shorter than 32 characters. \
                     Consider using a stronger key via DEMOGATE_SIGNING_KEY."
                );
            }
        } else {
            tracing::warn!(
                "Gate is not fully configured (username, password, and signing key required). \
                 All protected requests will be denied."
            );
        }

        Ok(config)
    }
}
