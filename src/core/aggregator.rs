use futures::future::join_all;
use ipnet::Ipv4Net;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::providers::RangeSource;
use crate::utils::log_fetch_event;

/// Parse a CIDR block, accepting a bare address as a single host.
///
/// Returns `None` for IPv6 networks, prefix lengths over 32 and anything
/// else that is not an IPv4 block.
pub fn parse_block(block: &str) -> Option<Ipv4Net> {
    let block = block.trim();

    if block.contains('/') {
        return Ipv4Net::from_str(block).ok();
    }

    // Single address = /32
    let addr = Ipv4Addr::from_str(block).ok()?;
    Ipv4Net::new(addr, 32).ok()
}

/// Every block collected for one run, in source order.
///
/// Blocks are parsed once up front; unparsable ones are kept in `blocks()`
/// but never match.
#[derive(Debug, Clone, Default)]
pub struct RangeSet {
    blocks: Vec<String>,
    networks: Vec<Ipv4Net>,
}

impl RangeSet {
    pub fn new(blocks: Vec<String>) -> Self {
        let networks = blocks.iter().filter_map(|b| parse_block(b)).collect();
        Self { blocks, networks }
    }

    /// Raw block strings in aggregation order
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Blocks that parsed as IPv4 networks
    pub fn networks(&self) -> &[Ipv4Net] {
        &self.networks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// First-match containment test over every network
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.networks.iter().any(|net| net.contains(&addr))
    }
}

/// Concatenate source outputs in the given order, dropping empty strings.
///
/// Duplicates and overlapping blocks are kept.
pub fn aggregate<I>(outputs: I) -> RangeSet
where
    I: IntoIterator<Item = Vec<String>>,
{
    let blocks = outputs
        .into_iter()
        .flatten()
        .filter(|block| !block.is_empty())
        .collect();

    RangeSet::new(blocks)
}

/// Fetch every source and aggregate the results.
///
/// A failing source contributes nothing. With `parallel` set all fetches
/// run concurrently, but results are still concatenated in source order.
pub async fn collect_ranges(sources: &[RangeSource], parallel: bool) -> RangeSet {
    let outputs = if parallel {
        join_all(sources.iter().map(fetch_or_empty)).await
    } else {
        let mut outputs = Vec::with_capacity(sources.len());
        for source in sources {
            outputs.push(fetch_or_empty(source).await);
        }
        outputs
    };

    let ranges = aggregate(outputs);
    tracing::info!(
        sources = %sources.len(),
        blocks = %ranges.len(),
        networks = %ranges.networks().len(),
        "Range set built"
    );
    ranges
}

async fn fetch_or_empty(source: &RangeSource) -> Vec<String> {
    match source.fetcher.fetch().await {
        Ok(blocks) => {
            log_fetch_event(&source.name, true, blocks.len(), None);
            blocks
        }
        Err(e) => {
            log_fetch_event(&source.name, false, 0, Some(&e.to_string()));
            Vec::new()
        }
    }
}
