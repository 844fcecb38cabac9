//! Verifies the health check of a load balancer.
//!
//! A target has the form `PROTOCOL:PORT[/path]`. HTTP and HTTPS targets need
//! a path, TCP and SSL targets must not have one.

use derive_builder::Builder;
use elb_types::types::{HealthCheck, LoadBalancerDescription, ParseProtocolError, Protocol};
use log::debug;

use crate::checks::verify_range;
use crate::types::{CheckerError, VerificationResult, Verifier};

#[derive(Debug, Builder)]
#[builder(build_fn(error = "CheckerError"))]
pub struct HealthCheckChecks<'a> {
    load_balancer: &'a LoadBalancerDescription,
}

#[derive(Debug, PartialEq, Eq)]
struct Target<'t> {
    protocol: Protocol,
    port: i32,
    path: Option<&'t str>,
}

fn parse_target(target: &str) -> Result<Target<'_>, String> {
    let (protocol, rest) = target
        .split_once(':')
        .ok_or_else(|| format!("target '{}' is not of the form PROTOCOL:PORT", target))?;
    let protocol: Protocol = protocol.parse().map_err(|e: ParseProtocolError| e.to_string())?;
    let (port, path) = match rest.find('/') {
        Some(idx) => (&rest[..idx], Some(&rest[idx..])),
        None => (rest, None),
    };
    let port: i32 = port
        .parse()
        .map_err(|_| format!("target '{}' has an invalid port", target))?;
    if !(1..=65535).contains(&port) {
        return Err(format!("target '{}' has port {} outside of 1-65535", target, port));
    }
    Ok(Target {
        protocol,
        port,
        path,
    })
}

impl<'a> HealthCheckChecks<'a> {
    fn name(&self) -> &str {
        self.load_balancer.load_balancer_name().unwrap_or("<unnamed>")
    }

    pub fn verify_target(&self, health_check: &HealthCheck) -> Option<VerificationResult> {
        let Some(target) = health_check.target() else {
            return Some(VerificationResult::critical(format!(
                "LoadBalancer {} has a health check without target",
                self.name()
            )));
        };
        match parse_target(target) {
            Err(reason) => Some(VerificationResult::critical(format!(
                "LoadBalancer {} has an invalid health check: {}",
                self.name(),
                reason
            ))),
            Ok(parsed) if parsed.protocol.is_layer7() && parsed.path.is_none() => {
                Some(VerificationResult::critical(format!(
                    "LoadBalancer {} has a {} health check target without path: {}",
                    self.name(),
                    parsed.protocol,
                    target
                )))
            }
            Ok(parsed) if !parsed.protocol.is_layer7() && parsed.path.is_some() => {
                Some(VerificationResult::critical(format!(
                    "LoadBalancer {} has a {} health check target with a path: {}",
                    self.name(),
                    parsed.protocol,
                    target
                )))
            }
            Ok(parsed) => {
                debug!("Health check target of {} parsed: {:?}", self.name(), parsed);
                None
            }
        }
    }

    pub fn verify_timing(&self, health_check: &HealthCheck) -> Vec<VerificationResult> {
        let name = self.name();
        let mut results: Vec<VerificationResult> = [
            verify_range(name, "health check interval", health_check.interval(), 5..=300),
            verify_range(name, "health check timeout", health_check.timeout(), 2..=60),
            verify_range(
                name,
                "unhealthy threshold",
                health_check.unhealthy_threshold(),
                2..=10,
            ),
            verify_range(
                name,
                "healthy threshold",
                health_check.healthy_threshold(),
                2..=10,
            ),
        ]
        .into_iter()
        .flatten()
        .collect();
        if let (Some(interval), Some(timeout)) = (health_check.interval(), health_check.timeout())
        {
            if timeout >= interval {
                results.push(VerificationResult::critical(format!(
                    "LoadBalancer {} has a health check timeout ({}) not lower than its interval ({})",
                    name, timeout, interval
                )));
            }
        }
        results
    }
}

impl<'a> Verifier for HealthCheckChecks<'a> {
    fn verify(&self) -> Vec<VerificationResult> {
        let Some(health_check) = self.load_balancer.health_check() else {
            return vec![VerificationResult::warning(format!(
                "LoadBalancer {} has no health check configured",
                self.name()
            ))];
        };
        let mut results: Vec<VerificationResult> =
            self.verify_target(health_check).into_iter().collect();
        results.append(&mut self.verify_timing(health_check));
        if results.is_empty() {
            results.push(VerificationResult::ok(format!(
                "LoadBalancer {} has a valid health check",
                self.name()
            )));
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    fn load_balancer(health_check: HealthCheck) -> LoadBalancerDescription {
        LoadBalancerDescription::default()
            .with_load_balancer_name("web")
            .with_health_check(health_check)
    }

    fn verify(lb: &LoadBalancerDescription) -> Vec<VerificationResult> {
        let mut hcb = HealthCheckChecksBuilder::default();
        hcb.load_balancer(lb).build().unwrap().verify()
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(
            parse_target("HTTP:80/ping"),
            Ok(Target {
                protocol: Protocol::Http,
                port: 80,
                path: Some("/ping")
            })
        );
        assert_eq!(
            parse_target("tcp:22"),
            Ok(Target {
                protocol: Protocol::Tcp,
                port: 22,
                path: None
            })
        );
        assert!(parse_target("HTTP").is_err());
        assert!(parse_target("UDP:53").is_err());
        assert!(parse_target("TCP:0").is_err());
        assert!(parse_target("TCP:http").is_err());
    }

    #[test]
    fn test_valid_health_check() {
        let lb = load_balancer(HealthCheck::new("HTTP:80/ping", 30, 5, 3, 3));
        assert_eq!(
            verify(&lb),
            vec![VerificationResult::ok("LoadBalancer web has a valid health check")]
        );
    }

    #[test]
    fn test_missing_health_check() {
        let lb = LoadBalancerDescription::default().with_load_balancer_name("web");
        let results = verify(&lb);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].severity, Severity::Warning);
    }

    #[test]
    fn test_http_target_needs_path() {
        let lb = load_balancer(HealthCheck::new("HTTP:80", 30, 5, 3, 3));
        let results = verify(&lb);
        assert_eq!(
            results,
            vec![VerificationResult::critical(
                "LoadBalancer web has a HTTP health check target without path: HTTP:80"
            )]
        );
    }

    #[test]
    fn test_tcp_target_with_path() {
        let lb = load_balancer(HealthCheck::new("TCP:22/ping", 30, 5, 3, 3));
        let results = verify(&lb);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].severity, Severity::Critical);
    }

    #[test]
    fn test_timing_out_of_range() {
        let lb = load_balancer(HealthCheck::new("TCP:22", 301, 61, 1, 11));
        let results = verify(&lb);
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.severity == Severity::Critical));
    }

    #[test]
    fn test_timeout_not_lower_than_interval() {
        let lb = load_balancer(HealthCheck::new("TCP:22", 10, 10, 2, 2));
        assert_eq!(
            verify(&lb),
            vec![VerificationResult::critical(
                "LoadBalancer web has a health check timeout (10) not lower than its interval (10)"
            )]
        );
    }

    #[test]
    fn test_unset_members() {
        let lb = load_balancer(HealthCheck::default().with_target("SSL:443"));
        let results = verify(&lb);
        assert_eq!(results.len(), 4);
        assert!(results[0].message.contains("no health check interval set"));
    }
}
