//! Configuration for the CDN filter.
//! Runtime settings come from environment variables; the provider and ASN
//! registries are static data injected into the service.

mod registry;
mod settings;

pub use registry::{AsnOperator, AsnRegistry, FeedFormat, ProviderFeed, ProviderRegistry};
pub use settings::{AsnLookupConfig, FetchConfig, HttpConfig, Settings};

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, config::ConfigError>;

/// Load the application configuration
pub fn load_config() -> ConfigResult<Settings> {
    Settings::load()
}
