//! Provider feed parsers and the fetcher that drives them.

use async_trait::async_trait;
use serde_json::Value;

use super::{Fetcher, RangeClient};
use crate::config::{FeedFormat, ProviderFeed};
use crate::utils::{FetchError, FetchResult};

/// Extract `prefix_field` from every element of the `list_field` array.
///
/// Elements where the field is missing, not a string, or empty are skipped.
pub fn parse_prefix_list(
    body: &str,
    list_field: &str,
    prefix_field: &str,
) -> FetchResult<Vec<String>> {
    let document: Value = serde_json::from_str(body)?;
    let list = document
        .get(list_field)
        .and_then(Value::as_array)
        .ok_or_else(|| FetchError::MissingField(list_field.to_string()))?;

    Ok(list
        .iter()
        .filter_map(|entry| entry.get(prefix_field).and_then(Value::as_str))
        .filter(|prefix| !prefix.is_empty())
        .map(str::to_string)
        .collect())
}

/// Read the `field` array of address strings as-is.
///
/// Entries may be bare addresses; the classifier treats those as hosts.
pub fn parse_address_array(body: &str, field: &str) -> FetchResult<Vec<String>> {
    let document: Value = serde_json::from_str(body)?;
    let list = document
        .get(field)
        .and_then(Value::as_array)
        .ok_or_else(|| FetchError::MissingField(field.to_string()))?;

    Ok(list
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect())
}

/// Split a text body on newlines.
///
/// Blank lines, including the trailing one, are kept; the aggregator drops them.
pub fn parse_plain_text(body: &str) -> Vec<String> {
    body.split('\n').map(str::to_string).collect()
}

/// Fetches and parses one provider's published ranges
pub struct FeedFetcher {
    feed: ProviderFeed,
    client: RangeClient,
}

impl FeedFetcher {
    pub fn new(feed: ProviderFeed, client: RangeClient) -> Self {
        Self { feed, client }
    }
}

#[async_trait]
impl Fetcher for FeedFetcher {
    async fn fetch(&self) -> FetchResult<Vec<String>> {
        let body = self.client.get_text(&self.feed.url).await?;

        match &self.feed.format {
            FeedFormat::PrefixList { list_field, prefix_field } => {
                parse_prefix_list(&body, list_field, prefix_field)
            }
            FeedFormat::AddressArray { field } => parse_address_array(&body, field),
            FeedFormat::PlainText => Ok(parse_plain_text(&body)),
        }
    }
}
