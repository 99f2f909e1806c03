use std::net::Ipv4Addr;
use std::str::FromStr;

use super::aggregator::{parse_block, RangeSet};

/// Outcome for one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The input line exactly as read
    pub ip: String,
    pub is_cdn: bool,
}

/// Best-effort parse of an input line as an IPv4 address
pub fn parse_ip(ip: &str) -> Option<Ipv4Addr> {
    Ipv4Addr::from_str(ip.trim()).ok()
}

/// Single block containment test. Malformed input on either side is a miss.
pub fn block_contains(block: &str, ip: &str) -> bool {
    match (parse_block(block), parse_ip(ip)) {
        (Some(net), Some(addr)) => net.contains(&addr),
        _ => false,
    }
}

/// Whether `ip` falls inside any block of the range set
pub fn classify(ip: &str, ranges: &RangeSet) -> bool {
    parse_ip(ip).is_some_and(|addr| ranges.contains(addr))
}

/// Classify every input line independently, preserving input order
pub fn classify_all(ips: &[String], ranges: &RangeSet) -> Vec<Classification> {
    ips.iter()
        .map(|ip| Classification {
            ip: ip.clone(),
            is_cdn: classify(ip, ranges),
        })
        .collect()
}
