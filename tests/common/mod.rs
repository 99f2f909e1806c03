#![allow(dead_code)]

use cdn_ip_filter::config::{
    AsnOperator, AsnRegistry, FeedFormat, HttpConfig, ProviderFeed, ProviderRegistry, Settings,
};
use cdn_ip_filter::providers::RangeClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const AMAZON_BODY: &str = r#"{
    "syncToken": "1700000000",
    "createDate": "2024-01-01-00-00-00",
    "prefixes": [
        {"ip_prefix": "3.5.140.0/22", "region": "ap-northeast-2", "service": "AMAZON", "network_border_group": "ap-northeast-2"},
        {"ip_prefix": "52.94.76.0/22", "region": "us-west-2", "service": "AMAZON", "network_border_group": "us-west-2"}
    ],
    "ipv6_prefixes": []
}"#;

pub const FASTLY_BODY: &str =
    r#"{"addresses": ["151.101.0.0/16", "199.27.72.9"], "ipv6_addresses": ["2a04:4e40::/32"]}"#;

pub const CLOUDFLARE_BODY: &str = "173.245.48.0/20\n131.0.72.0/22\n";

pub fn asn_body(prefixes: &[&str]) -> String {
    let entries: Vec<String> = prefixes
        .iter()
        .map(|p| format!(r#"{{"prefix": "{}", "ip": "", "cidr": 0}}"#, p))
        .collect();
    format!(
        r#"{{"status": "ok", "status_message": "Query was successful", "data": {{"ipv4_prefixes": [{}], "ipv6_prefixes": []}}}}"#,
        entries.join(",")
    )
}

/// Generate a random IP address for testing
pub fn random_ip() -> String {
    format!(
        "{}.{}.{}.{}",
        rand::random::<u8>(),
        rand::random::<u8>(),
        rand::random::<u8>(),
        rand::random::<u8>()
    )
}

pub fn client() -> RangeClient {
    RangeClient::new(&HttpConfig::default()).expect("client builds")
}

/// Serve `body` with `status` at `route` on the mock server
pub async fn serve(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Registries mirroring the production layout, pointed at the mock server
pub fn registries(server: &MockServer) -> (ProviderRegistry, AsnRegistry) {
    let base = server.uri();
    let providers = ProviderRegistry::new(vec![
        ProviderFeed::new(
            "AMAZON",
            &format!("{}/ip-ranges.json", base),
            FeedFormat::PrefixList {
                list_field: "prefixes".to_string(),
                prefix_field: "ip_prefix".to_string(),
            },
        ),
        ProviderFeed::new(
            "FASTLY",
            &format!("{}/public-ip-list", base),
            FeedFormat::AddressArray {
                field: "addresses".to_string(),
            },
        ),
        ProviderFeed::new(
            "CLOUDFLARE",
            &format!("{}/ips-v4", base),
            FeedFormat::PlainText,
        ),
    ]);
    let asns = AsnRegistry::new(vec![
        AsnOperator::new("AKAMAI", &["AS12222", "AS16625"]),
        AsnOperator::new("DDOSGUARD", &["AS57724"]),
    ]);
    (providers, asns)
}

pub fn settings(server: &MockServer, parallel: bool) -> Settings {
    let mut settings = Settings::default();
    settings.asn_lookup.base_url = server.uri();
    settings.fetch.parallel = parallel;
    settings
}
