use serde::Deserialize;
use std::path::PathBuf;

/// Signing secret used when none is configured; only fit for local development
pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key";

/// Browser-like identity presented on every outbound request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/142.0.0.0 Safari/537.36";

/// Where the sentiment lexicon is fetched from when it is missing locally
pub const DEFAULT_LEXICON_URL: &str =
    "https://raw.githubusercontent.com/cjhutto/vaderSentiment/master/vaderSentiment/vader_lexicon.txt";

/// Main configuration structure for Newsbrief
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub nlp: NlpConfig,
    pub fetch: FetchConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Secret used to sign flash-message cookies
    pub secret_key: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            secret_key: DEFAULT_SECRET_KEY.to_string(),
        }
    }
}

/// Language data configuration
#[derive(Debug, Clone)]
pub struct NlpConfig {
    /// Directory holding cached language data
    pub data_dir: PathBuf,

    /// Remote source of the sentiment lexicon
    pub lexicon_url: String,
}

impl Default for NlpConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./nlp_data"),
            lexicon_url: DEFAULT_LEXICON_URL.to_string(),
        }
    }
}

/// Outbound fetch configuration
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Per-request timeout (seconds)
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Partially specified configuration, as read from a TOML file or the command line
///
/// Every field is optional; unset fields fall through to the next source.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialConfig {
    pub server: PartialServerConfig,
    pub nlp: PartialNlpConfig,
    pub fetch: PartialFetchConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PartialServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub secret_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PartialNlpConfig {
    pub data_dir: Option<PathBuf>,
    pub lexicon_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PartialFetchConfig {
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl PartialConfig {
    /// Layers `other` on top of `self`; values set in `other` win
    pub fn overlay(self, other: PartialConfig) -> PartialConfig {
        PartialConfig {
            server: PartialServerConfig {
                host: other.server.host.or(self.server.host),
                port: other.server.port.or(self.server.port),
                secret_key: other.server.secret_key.or(self.server.secret_key),
            },
            nlp: PartialNlpConfig {
                data_dir: other.nlp.data_dir.or(self.nlp.data_dir),
                lexicon_url: other.nlp.lexicon_url.or(self.nlp.lexicon_url),
            },
            fetch: PartialFetchConfig {
                timeout_secs: other.fetch.timeout_secs.or(self.fetch.timeout_secs),
                user_agent: other.fetch.user_agent.or(self.fetch.user_agent),
            },
        }
    }

    /// Fills every unset field with its default
    pub fn resolve(self) -> Config {
        let defaults = Config::default();

        Config {
            server: ServerConfig {
                host: self.server.host.unwrap_or(defaults.server.host),
                port: self.server.port.unwrap_or(defaults.server.port),
                secret_key: self.server.secret_key.unwrap_or(defaults.server.secret_key),
            },
            nlp: NlpConfig {
                data_dir: self.nlp.data_dir.unwrap_or(defaults.nlp.data_dir),
                lexicon_url: self.nlp.lexicon_url.unwrap_or(defaults.nlp.lexicon_url),
            },
            fetch: FetchConfig {
                timeout_secs: self.fetch.timeout_secs.unwrap_or(defaults.fetch.timeout_secs),
                user_agent: self.fetch.user_agent.unwrap_or(defaults.fetch.user_agent),
            },
        }
    }
}
