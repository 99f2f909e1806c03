//! Provider and ASN registries.
//!
//! Both are plain ordered data handed to the service at construction.
//! Declaration order is the order ranges are concatenated in.

/// How a provider publishes its ranges
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedFormat {
    /// JSON object holding an array of objects, one prefix field per element
    PrefixList {
        list_field: String,
        prefix_field: String,
    },
    /// JSON object holding an array of address or CIDR strings
    AddressArray { field: String },
    /// One entry per line of plain text
    PlainText,
}

/// A provider that publishes its ranges at a fixed URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderFeed {
    pub name: String,
    pub url: String,
    pub format: FeedFormat,
}

impl ProviderFeed {
    pub fn new(name: &str, url: &str, format: FeedFormat) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            format,
        }
    }
}

/// Ordered provider name to feed mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRegistry {
    feeds: Vec<ProviderFeed>,
}

impl ProviderRegistry {
    pub fn new(feeds: Vec<ProviderFeed>) -> Self {
        Self { feeds }
    }

    pub fn empty() -> Self {
        Self { feeds: Vec::new() }
    }

    pub fn feeds(&self) -> &[ProviderFeed] {
        &self.feeds
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new(vec![
            ProviderFeed::new(
                "AMAZON",
                "https://ip-ranges.amazonaws.com/ip-ranges.json",
                FeedFormat::PrefixList {
                    list_field: "prefixes".to_string(),
                    prefix_field: "ip_prefix".to_string(),
                },
            ),
            ProviderFeed::new(
                "FASTLY",
                "https://api.fastly.com/public-ip-list",
                FeedFormat::AddressArray {
                    field: "addresses".to_string(),
                },
            ),
            ProviderFeed::new(
                "GOOGLE",
                "https://www.gstatic.com/ipranges/cloud.json",
                FeedFormat::PrefixList {
                    list_field: "prefixes".to_string(),
                    prefix_field: "ipv4Prefix".to_string(),
                },
            ),
            ProviderFeed::new(
                "CLOUDFLARE",
                "https://www.cloudflare.com/ips-v4",
                FeedFormat::PlainText,
            ),
            ProviderFeed::new(
                "CACHEFLY",
                "https://cachefly.cachefly.net/ips/rproxy.txt",
                FeedFormat::PlainText,
            ),
        ])
    }
}

/// A network operator identified by its autonomous systems
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsnOperator {
    pub name: String,
    pub asns: Vec<String>,
}

impl AsnOperator {
    pub fn new(name: &str, asns: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            asns: asns.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Ordered operator name to ASN list mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsnRegistry {
    operators: Vec<AsnOperator>,
}

impl AsnRegistry {
    pub fn new(operators: Vec<AsnOperator>) -> Self {
        Self { operators }
    }

    pub fn empty() -> Self {
        Self { operators: Vec::new() }
    }

    pub fn operators(&self) -> &[AsnOperator] {
        &self.operators
    }
}

impl Default for AsnRegistry {
    fn default() -> Self {
        Self::new(vec![
            AsnOperator::new("AKAMAI", &["AS12222", "AS16625"]),
            AsnOperator::new("DDOSGUARD", &["AS57724"]),
            AsnOperator::new("QRATOR", &["AS200449"]),
            AsnOperator::new("STACKPATH", &["AS12989"]),
            AsnOperator::new("STORMWALL", &["AS59796"]),
            AsnOperator::new("SUCURI", &["AS30148"]),
            AsnOperator::new("X4B", &["AS136165"]),
            AsnOperator::new("CDNNETWORKS", &["AS36408"]),
        ])
    }
}
