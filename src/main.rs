//! This program provides a quick way to lint the setup of classic AWS load
//! balancers and detect configurations the service rejects or that behave
//! unexpectedly. Load balancers are read from the output of
//! `aws elb describe-load-balancers` or fetched live with the AWS SDK.

mod checks;
mod gatherer;
mod types;

use std::path::PathBuf;
use std::process::exit;

use checks::{
    attributes::AttributeChecksBuilder, health_check::HealthCheckChecksBuilder,
    listener::ListenerChecksBuilder, network::NetworkChecksBuilder, policy::PolicyChecksBuilder,
};
use clap::Parser;
use gatherer::{aws::aws_setup, aws::SdkGatherer, file::FileGatherer, Gatherer};
use log::{info, warn};
use types::{CheckerError, LoadBalancerSnapshot, Severity, VerificationResult, Verifier};

#[derive(Clone, Debug, clap::ValueEnum)]
enum OutputFormat {
    Checks,
    Debug,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum Check {
    All,
    HealthCheck,
    Listeners,
    Policies,
    Network,
    Attributes,
}

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Verifies the configuration of classic AWS load balancers.",
    long_about = "Verifies the configuration of classic AWS load balancers. Reads the output of `aws elb describe-load-balancers` from a file, or fetches the load balancers with the configured AWS credentials."
)]
#[command(group(clap::ArgGroup::new("source").required(true).args(["input", "live"])))]
struct Options {
    /// JSON file holding the output of `aws elb describe-load-balancers`.
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Fetch the load balancers from AWS.
    #[arg(long)]
    live: bool,
    /// Only check the load balancers with these names.
    #[arg(short, long)]
    name: Vec<String>,
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Checks)]
    format: OutputFormat,
    #[arg(long, value_enum, default_values_t = vec![Check::All])]
    checks: Vec<Check>,
}

fn enabled(checks: &[Check], check: Check) -> bool {
    checks.contains(&Check::All) || checks.contains(&check)
}

fn verify(
    snapshot: &LoadBalancerSnapshot,
    checks: &[Check],
) -> Result<Vec<VerificationResult>, CheckerError> {
    let lb = &snapshot.description;
    let mut verifiers: Vec<Box<dyn Verifier + '_>> = vec![];
    if enabled(checks, Check::HealthCheck) {
        verifiers.push(Box::new(
            HealthCheckChecksBuilder::default().load_balancer(lb).build()?,
        ));
    }
    if enabled(checks, Check::Listeners) {
        verifiers.push(Box::new(
            ListenerChecksBuilder::default().load_balancer(lb).build()?,
        ));
    }
    if enabled(checks, Check::Policies) {
        verifiers.push(Box::new(
            PolicyChecksBuilder::default().load_balancer(lb).build()?,
        ));
    }
    if enabled(checks, Check::Network) {
        verifiers.push(Box::new(
            NetworkChecksBuilder::default().load_balancer(lb).build()?,
        ));
    }
    if enabled(checks, Check::Attributes) {
        verifiers.push(Box::new(
            AttributeChecksBuilder::default().snapshot(snapshot).build()?,
        ));
    }
    Ok(verifiers.iter().flat_map(|v| v.verify()).collect())
}

async fn gather(options: &Options) -> Result<Vec<LoadBalancerSnapshot>, CheckerError> {
    match &options.input {
        Some(path) => FileGatherer::new(path, options.name.clone()).gather().await,
        None => {
            let config = aws_setup().await;
            SdkGatherer::new(&config, options.name.clone())
                .gather()
                .await
        }
    }
}

async fn run(options: &Options) -> Result<bool, CheckerError> {
    let snapshots = gather(options).await?;
    info!("Checking {} LoadBalancers", snapshots.len());
    if snapshots.is_empty() {
        warn!("No LoadBalancers found");
    }
    match options.format {
        OutputFormat::Debug => {
            for snapshot in &snapshots {
                println!("{}", snapshot.description);
                if let Some(attributes) = &snapshot.attributes {
                    println!("{}", attributes);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&snapshots)?);
        }
        OutputFormat::Checks => {
            let mut failed = false;
            for snapshot in &snapshots {
                for res in verify(snapshot, &options.checks)? {
                    failed |= res.severity == Severity::Critical;
                    println!("{}", res);
                }
            }
            return Ok(!failed);
        }
    }
    Ok(true)
}

#[tokio::main]
async fn main() {
    let options = Options::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    exit(exit_code(run(&options).await));
}

/// Reports a failed run once on stderr; any Critical result or error exits 1.
fn exit_code(outcome: Result<bool, CheckerError>) -> i32 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(err) => {
            eprintln!("{}", err);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elb_types::types::{HealthCheck, Listener, ListenerDescription, LoadBalancerDescription};

    fn snapshot() -> LoadBalancerSnapshot {
        LoadBalancerDescription::default()
            .with_load_balancer_name("web")
            .with_listener_descriptions([
                ListenerDescription::default().with_listener(Listener::new("HTTP", 80, 8080))
            ])
            .with_health_check(HealthCheck::new("HTTP:8080/ping", 30, 5, 2, 2))
            .into()
    }

    #[test]
    fn test_options_need_one_source() {
        assert!(Options::try_parse_from(["elb-checker"]).is_err());
        assert!(Options::try_parse_from(["elb-checker", "--input", "lbs.json", "--live"]).is_err());
        let options = Options::try_parse_from([
            "elb-checker",
            "--live",
            "--name",
            "web",
            "--checks",
            "health-check",
            "--checks",
            "listeners",
        ])
        .unwrap();
        assert!(options.live && options.input.is_none());
        assert_eq!(options.name, vec!["web".to_string()]);
        assert_eq!(options.checks, vec![Check::HealthCheck, Check::Listeners]);
    }

    #[test]
    fn test_enabled() {
        assert!(enabled(&[Check::All], Check::Network));
        assert!(enabled(&[Check::Network], Check::Network));
        assert!(!enabled(&[Check::Listeners], Check::Network));
    }

    #[test]
    fn test_verify_selected_checks() {
        let results = verify(&snapshot(), &[Check::HealthCheck, Check::Listeners]).unwrap();
        assert_eq!(
            results,
            vec![
                VerificationResult::ok("LoadBalancer web has a valid health check"),
                VerificationResult::ok("LoadBalancer web has valid listeners on ports 80"),
            ]
        );
    }

    #[test]
    fn test_verify_all_checks_skips_unknown_attributes() {
        let results = verify(&snapshot(), &[Check::All]).unwrap();
        // health check, listeners, policies, then network placement warnings
        assert_eq!(results[2].severity, Severity::Ok);
        assert!(results
            .iter()
            .any(|r| r.message == "LoadBalancer web has no registered instances"));
        assert!(!results.iter().any(|r| r.message.contains("attributes")));
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(exit_code(Ok(true)), 0);
        assert_eq!(exit_code(Ok(false)), 1);
        let err = serde_json::from_str::<LoadBalancerSnapshot>("[").unwrap_err();
        assert_eq!(exit_code(Err(CheckerError::Json(err))), 1);
    }
}
