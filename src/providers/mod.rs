//! Range sources for the CDN filter.
//! Each provider publishes its ranges in one of a few formats; operators
//! without a published list are resolved through their ASNs.

mod asn;
mod client;
mod feeds;

pub use asn::{parse_asn_prefixes, AnnouncedPrefix, AsnFetcher, AsnPrefixesResponse, AsnResolver};
pub use client::RangeClient;
pub use feeds::{parse_address_array, parse_plain_text, parse_prefix_list, FeedFetcher};

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{AsnRegistry, ProviderRegistry};
use crate::utils::FetchResult;

/// Anything that can produce a list of CIDR block strings
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Retrieve the source's blocks. Entries may be empty or malformed.
    async fn fetch(&self) -> FetchResult<Vec<String>>;
}

/// A named fetcher, in the position it holds in the aggregated set
pub struct RangeSource {
    pub name: String,
    pub fetcher: Box<dyn Fetcher>,
}

impl RangeSource {
    pub fn new(name: impl Into<String>, fetcher: Box<dyn Fetcher>) -> Self {
        Self {
            name: name.into(),
            fetcher,
        }
    }
}

/// Build the sources for both registries: feeds first, then ASN operators,
/// each in declaration order
pub fn build_sources(
    providers: &ProviderRegistry,
    asns: &AsnRegistry,
    client: &RangeClient,
    asn_base_url: &str,
) -> Vec<RangeSource> {
    let resolver = Arc::new(AsnResolver::new(client.clone(), asn_base_url));

    let feed_sources = providers.feeds().iter().map(|feed| {
        let fetcher: Box<dyn Fetcher> = Box::new(FeedFetcher::new(feed.clone(), client.clone()));
        RangeSource::new(feed.name.clone(), fetcher)
    });

    let asn_sources = asns.operators().iter().map(|operator| {
        let fetcher: Box<dyn Fetcher> =
            Box::new(AsnFetcher::new(operator.asns.clone(), Arc::clone(&resolver)));
        RangeSource::new(operator.name.clone(), fetcher)
    });

    feed_sources.chain(asn_sources).collect()
}
