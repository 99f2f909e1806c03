use serde::Deserialize;

/// Runtime settings for the CDN filter
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Outbound HTTP client configuration
    pub http: HttpConfig,
    /// Routing-data lookup configuration
    pub asn_lookup: AsnLookupConfig,
    /// Source fetch scheduling
    pub fetch: FetchConfig,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
}

/// HTTP client settings shared by every source
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout in seconds; unset means the client default
    pub timeout_seconds: Option<u64>,
    /// User-Agent header sent to providers
    pub user_agent: String,
}

/// ASN prefix lookup settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AsnLookupConfig {
    /// Base URL of the routing-data API, queried as `{base_url}/asn/{ASN}/prefixes`
    pub base_url: String,
}

/// Fetch scheduling settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Fetch all sources concurrently instead of one after another
    pub parallel: bool,
}

impl Settings {
    /// Load configuration from environment variables and a `.env` file.
    ///
    /// Variables use the `CDN_FILTER_` prefix and `__` between nested keys,
    /// e.g. `CDN_FILTER_HTTP__TIMEOUT_SECONDS=10`.
    pub fn load() -> Result<Self, config::ConfigError> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("CDN_FILTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;

        config.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            asn_lookup: AsnLookupConfig::default(),
            fetch: FetchConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: None,
            user_agent: format!("cdn_ip_filter/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for AsnLookupConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.bgpview.io".to_string(),
        }
    }
}
