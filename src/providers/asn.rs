use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use super::{Fetcher, RangeClient};
use crate::utils::{log_fetch_event, FetchResult};

/// Response of the routing-data `asn/{asn}/prefixes` endpoint.
///
/// Only the announced IPv4 prefixes are decoded; status, metadata and IPv6
/// announcements are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AsnPrefixesResponse {
    pub data: AsnPrefixesData,
}

/// Announced prefixes of one autonomous system
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AsnPrefixesData {
    pub ipv4_prefixes: Vec<AnnouncedPrefix>,
}

/// A single announced prefix
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnnouncedPrefix {
    pub prefix: Option<String>,
}

/// Extract the non-empty IPv4 prefixes from a lookup response body
pub fn parse_asn_prefixes(body: &str) -> FetchResult<Vec<String>> {
    let response: AsnPrefixesResponse = serde_json::from_str(body)?;

    Ok(response
        .data
        .ipv4_prefixes
        .into_iter()
        .filter_map(|p| p.prefix)
        .filter(|prefix| !prefix.is_empty())
        .collect())
}

/// Resolves ASNs to their announced IPv4 prefixes via the routing-data API
pub struct AsnResolver {
    client: RangeClient,
    base_url: String,
}

impl AsnResolver {
    pub fn new(client: RangeClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Lookup URL for one ASN
    pub fn prefixes_url(&self, asn: &str) -> String {
        format!("{}/asn/{}/prefixes", self.base_url, asn)
    }

    /// Looks up a single ASN
    pub async fn lookup(&self, asn: &str) -> FetchResult<Vec<String>> {
        let body = self.client.get_text(&self.prefixes_url(asn)).await?;
        parse_asn_prefixes(&body)
    }

    /// Resolves every ASN in order, one request at a time.
    ///
    /// A failed lookup contributes nothing; the remaining ASNs are still queried.
    pub async fn resolve_prefixes(&self, asns: &[String]) -> Vec<String> {
        let mut prefixes = Vec::new();

        for asn in asns {
            match self.lookup(asn).await {
                Ok(found) => {
                    log_fetch_event(asn, true, found.len(), None);
                    prefixes.extend(found);
                }
                Err(e) => {
                    log_fetch_event(asn, false, 0, Some(&e.to_string()));
                }
            }
        }

        prefixes
    }
}

/// Fetcher for an operator identified only by its ASNs
pub struct AsnFetcher {
    asns: Vec<String>,
    resolver: Arc<AsnResolver>,
}

impl AsnFetcher {
    pub fn new(asns: Vec<String>, resolver: Arc<AsnResolver>) -> Self {
        Self { asns, resolver }
    }
}

#[async_trait]
impl Fetcher for AsnFetcher {
    async fn fetch(&self) -> FetchResult<Vec<String>> {
        Ok(self.resolver.resolve_prefixes(&self.asns).await)
    }
}
