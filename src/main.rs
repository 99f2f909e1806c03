use clap::Parser;
use std::io;

use cdn_ip_filter::config::{load_config, AsnRegistry, ProviderRegistry};
use cdn_ip_filter::core::OutputModes;
use cdn_ip_filter::service::read_input;
use cdn_ip_filter::utils::{init_logging, CheckResult};
use cdn_ip_filter::CdnCheckService;

/// Reads IPv4 addresses from stdin and prints those that do (or do not)
/// belong to a known CDN, reverse-proxy or anti-DDoS provider.
#[derive(Parser)]
#[command(version, about)]
struct Opt {
    /// Print the real IPs, CDN IPs excluded
    #[arg(long)]
    real: bool,

    /// Print the CDN IPs
    #[arg(long)]
    cdn: bool,

    /// Fetch all providers concurrently
    #[arg(long)]
    parallel: bool,
}

#[tokio::main]
async fn main() -> CheckResult<()> {
    let opt = Opt::parse();

    let settings = load_config()?;
    init_logging(&settings.log_level);

    let ips = read_input(io::stdin().lock())?;
    tracing::info!(count = %ips.len(), "Input read");

    let mut service = CdnCheckService::new(
        &settings,
        &ProviderRegistry::default(),
        &AsnRegistry::default(),
    )?;
    if opt.parallel {
        service.set_parallel(true);
    }

    let report = service.run(&ips).await;

    let modes = OutputModes {
        real: opt.real,
        cdn: opt.cdn,
    };
    if modes == OutputModes::default() {
        tracing::warn!("Neither --real nor --cdn given, nothing will be printed");
    }

    report.write_to(modes, &mut io::stdout().lock())?;
    Ok(())
}
