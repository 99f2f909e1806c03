use std::io::BufRead;

use crate::config::{AsnRegistry, ProviderRegistry, Settings};
use crate::core::{classify_all, collect_ranges, RangeSet, Report};
use crate::providers::{build_sources, RangeClient, RangeSource};
use crate::utils::{log_classification_summary, CheckResult};

/// Read one IP per line until end of stream.
///
/// Lines are split on raw `\n` bytes and decoded lossily, so a line that is
/// not UTF-8 is kept (and later classified as real). Only a failing read
/// is fatal for the run.
pub fn read_input<R: BufRead>(reader: R) -> CheckResult<Vec<String>> {
    let mut ips = Vec::new();
    for line in reader.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        ips.push(String::from_utf8_lossy(&line).into_owned());
    }
    Ok(ips)
}

/// Loads provider ranges and classifies IPs against them
pub struct CdnCheckService {
    /// Sources in aggregation order
    sources: Vec<RangeSource>,
    /// Fetch all sources concurrently
    parallel: bool,
}

impl CdnCheckService {
    /// Creates a service for the given registries.
    ///
    /// Only building the HTTP client can fail; nothing is fetched yet.
    pub fn new(
        settings: &Settings,
        providers: &ProviderRegistry,
        asns: &AsnRegistry,
    ) -> CheckResult<Self> {
        let client = RangeClient::new(&settings.http)?;
        let sources = build_sources(providers, asns, &client, &settings.asn_lookup.base_url);

        Ok(Self::with_sources(sources, settings.fetch.parallel))
    }

    /// Creates a service over an explicit list of sources
    pub fn with_sources(sources: Vec<RangeSource>, parallel: bool) -> Self {
        Self { sources, parallel }
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name.as_str()).collect()
    }

    /// Fetches every source and builds the range set
    pub async fn load_ranges(&self) -> RangeSet {
        tracing::info!(
            sources = %self.sources.len(),
            parallel = %self.parallel,
            "Loading provider ranges"
        );
        collect_ranges(&self.sources, self.parallel).await
    }

    /// Classifies `ips` against an already built range set
    pub fn classify(&self, ips: &[String], ranges: &RangeSet) -> Report {
        let report = Report::from_classifications(&classify_all(ips, ranges));
        log_classification_summary(ips.len(), report.cdn().len(), report.real().len());
        report
    }

    /// Builds the range set, then classifies `ips` against it
    pub async fn run(&self, ips: &[String]) -> Report {
        let ranges = self.load_ranges().await;
        self.classify(ips, &ranges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockFetcher;
    use crate::utils::FetchError;
    use std::io::{self, Cursor, Read};

    fn inputs(ips: &[&str]) -> Vec<String> {
        ips.iter().map(|s| s.to_string()).collect()
    }

    fn fixed_source(name: &str, blocks: &[&str]) -> RangeSource {
        let blocks = inputs(blocks);
        let mut fetcher = MockFetcher::new();
        fetcher.expect_fetch().returning(move || Ok(blocks.clone()));
        RangeSource::new(name, Box::new(fetcher))
    }

    fn broken_source(name: &str) -> RangeSource {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch()
            .returning(|| Err(FetchError::MissingField("addresses".to_string())));
        RangeSource::new(name, Box::new(fetcher))
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
        }
    }

    #[test]
    fn test_read_input_keeps_order_and_blank_lines() {
        let ips = read_input(Cursor::new("1.2.3.4\r\n\n192.168.5.1\n")).unwrap();
        assert_eq!(ips, ["1.2.3.4", "", "192.168.5.1"]);
    }

    #[test]
    fn test_read_input_tolerates_invalid_utf8() {
        let raw = b"192.168.5.1\n1.2.3.\xff\r\n1.2.3.4\n";
        let ips = read_input(Cursor::new(&raw[..])).unwrap();
        assert_eq!(ips.len(), 3);
        assert_eq!(ips[0], "192.168.5.1");
        assert_eq!(ips[1], "1.2.3.\u{fffd}");
        assert_eq!(ips[2], "1.2.3.4");
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_is_real_and_others_still_classified() {
        let ips = read_input(Cursor::new(&b"192.168.5.1\n1.2.3.\xff\n1.2.3.4\n"[..])).unwrap();
        let service =
            CdnCheckService::with_sources(vec![fixed_source("TEST", &["192.168.5.0/24"])], false);
        let report = service.run(&ips).await;

        assert_eq!(report.cdn(), ["192.168.5.1"]);
        assert_eq!(report.real(), ["1.2.3.\u{fffd}", "1.2.3.4"]);
    }

    #[test]
    fn test_read_input_failure_is_fatal() {
        let result = read_input(io::BufReader::new(FailingReader));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_single_block_scenario() {
        let service =
            CdnCheckService::with_sources(vec![fixed_source("TEST", &["192.168.5.0/24"])], false);
        let report = service.run(&inputs(&["1.2.3.4", "192.168.5.1", "131.0.72.124"])).await;

        assert_eq!(report.cdn(), ["192.168.5.1"]);
        assert_eq!(report.real(), ["1.2.3.4", "131.0.72.124"]);
    }

    #[tokio::test]
    async fn test_every_source_failing_leaves_input_real() {
        let service = CdnCheckService::with_sources(
            vec![broken_source("AMAZON"), broken_source("CLOUDFLARE")],
            false,
        );
        let ips = inputs(&["1.2.3.4", "192.168.5.1", "131.0.72.124"]);
        let report = service.run(&ips).await;

        assert!(report.cdn().is_empty());
        assert_eq!(report.real(), ips.as_slice());
    }

    #[tokio::test]
    async fn test_other_providers_survive_one_failure() {
        let service = CdnCheckService::with_sources(
            vec![
                broken_source("FASTLY"),
                fixed_source("CLOUDFLARE", &["131.0.72.0/22", ""]),
            ],
            true,
        );
        let report = service.run(&inputs(&["131.0.72.124", "8.8.8.8"])).await;

        assert_eq!(report.cdn(), ["131.0.72.124"]);
        assert_eq!(report.real(), ["8.8.8.8"]);
    }

    #[test]
    fn test_new_builds_sources_from_registries() {
        let service = CdnCheckService::new(
            &Settings::default(),
            &ProviderRegistry::default(),
            &AsnRegistry::empty(),
        )
        .unwrap();
        assert_eq!(
            service.source_names(),
            ["AMAZON", "FASTLY", "GOOGLE", "CLOUDFLARE", "CACHEFLY"]
        );
    }
}
