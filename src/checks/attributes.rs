//! Verifies the attributes of a load balancer. Attributes are only known when
//! they were fetched from the service; without them nothing is checked.

use derive_builder::Builder;
use elb_types::types::{AccessLog, LoadBalancerAttributes};
use log::debug;

use crate::checks::verify_range;
use crate::types::{CheckerError, LoadBalancerSnapshot, VerificationResult, Verifier};

/// Access logs can only be published every 5 or every 60 minutes.
pub const EMIT_INTERVALS: [i32; 2] = [5, 60];

#[derive(Debug, Builder)]
#[builder(build_fn(error = "CheckerError"))]
pub struct AttributeChecks<'a> {
    snapshot: &'a LoadBalancerSnapshot,
}

impl<'a> AttributeChecks<'a> {
    pub fn verify_connection_draining(
        &self,
        attributes: &LoadBalancerAttributes,
    ) -> Option<VerificationResult> {
        let draining = attributes.connection_draining()?;
        if draining.enabled() != Some(true) {
            return None;
        }
        verify_range(
            self.snapshot.name(),
            "connection draining timeout",
            draining.timeout(),
            1..=3600,
        )
    }

    pub fn verify_idle_timeout(
        &self,
        attributes: &LoadBalancerAttributes,
    ) -> Option<VerificationResult> {
        let settings = attributes.connection_settings()?;
        verify_range(
            self.snapshot.name(),
            "idle timeout",
            settings.idle_timeout(),
            1..=4000,
        )
    }

    pub fn verify_access_log(&self, access_log: &AccessLog) -> Vec<VerificationResult> {
        let mut results = vec![];
        if access_log.enabled() != Some(true) {
            return results;
        }
        if access_log.s3_bucket_name().map_or(true, str::is_empty) {
            results.push(VerificationResult::critical(format!(
                "LoadBalancer {} has access logs enabled without a bucket",
                self.snapshot.name()
            )));
        }
        match access_log.emit_interval() {
            Some(interval) if !EMIT_INTERVALS.contains(&interval) => {
                results.push(VerificationResult::critical(format!(
                    "LoadBalancer {} publishes access logs every {} minutes, expected 5 or 60",
                    self.snapshot.name(),
                    interval
                )))
            }
            _ => {}
        }
        results
    }

    pub fn verify_cross_zone(
        &self,
        attributes: &LoadBalancerAttributes,
    ) -> Option<VerificationResult> {
        let zones = self.snapshot.description.availability_zones().len();
        let enabled = attributes
            .cross_zone_load_balancing()
            .and_then(|c| c.enabled())
            .unwrap_or(false);
        if zones > 1 && !enabled {
            return Some(VerificationResult::warning(format!(
                "LoadBalancer {} spans {} availability zones without cross-zone load balancing",
                self.snapshot.name(),
                zones
            )));
        }
        None
    }
}

impl<'a> Verifier for AttributeChecks<'a> {
    fn verify(&self) -> Vec<VerificationResult> {
        let Some(attributes) = &self.snapshot.attributes else {
            debug!("No attributes known for {}", self.snapshot.name());
            return vec![];
        };
        let mut results = vec![];
        results.extend(self.verify_connection_draining(attributes));
        results.extend(self.verify_idle_timeout(attributes));
        if let Some(access_log) = attributes.access_log() {
            results.append(&mut self.verify_access_log(access_log));
        }
        results.extend(self.verify_cross_zone(attributes));
        if results.is_empty() {
            results.push(VerificationResult::ok(format!(
                "LoadBalancer {} has valid attributes",
                self.snapshot.name()
            )));
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;
    use elb_types::types::{
        ConnectionDraining, ConnectionSettings, CrossZoneLoadBalancing, LoadBalancerDescription,
    };

    fn snapshot(attributes: Option<LoadBalancerAttributes>) -> LoadBalancerSnapshot {
        LoadBalancerSnapshot {
            description: LoadBalancerDescription::default()
                .with_load_balancer_name("web")
                .with_availability_zones(["us-east-1a", "us-east-1b"]),
            attributes,
        }
    }

    fn valid_attributes() -> LoadBalancerAttributes {
        LoadBalancerAttributes::default()
            .with_cross_zone_load_balancing(CrossZoneLoadBalancing::default().with_enabled(true))
            .with_connection_settings(ConnectionSettings::new(60))
            .with_connection_draining(
                ConnectionDraining::default()
                    .with_enabled(true)
                    .with_timeout(300),
            )
            .with_access_log(
                AccessLog::default()
                    .with_enabled(true)
                    .with_s3_bucket_name("logs")
                    .with_emit_interval(60),
            )
    }

    fn verify(snapshot: &LoadBalancerSnapshot) -> Vec<VerificationResult> {
        let mut acb = AttributeChecksBuilder::default();
        acb.snapshot(snapshot).build().unwrap().verify()
    }

    #[test]
    fn test_unknown_attributes_are_skipped() {
        assert!(verify(&snapshot(None)).is_empty());
    }

    #[test]
    fn test_valid_attributes() {
        assert_eq!(
            verify(&snapshot(Some(valid_attributes()))),
            vec![VerificationResult::ok("LoadBalancer web has valid attributes")]
        );
    }

    #[test]
    fn test_timeouts_out_of_range() {
        let attributes = valid_attributes()
            .with_connection_settings(ConnectionSettings::new(4001))
            .with_connection_draining(
                ConnectionDraining::default()
                    .with_enabled(true)
                    .with_timeout(0),
            );
        assert_eq!(
            verify(&snapshot(Some(attributes))),
            vec![
                VerificationResult::critical(
                    "LoadBalancer web has connection draining timeout 0 outside of 1-3600"
                ),
                VerificationResult::critical(
                    "LoadBalancer web has idle timeout 4001 outside of 1-4000"
                ),
            ]
        );
    }

    #[test]
    fn test_disabled_draining_ignores_timeout() {
        let attributes = valid_attributes().with_connection_draining(
            ConnectionDraining::default()
                .with_enabled(false)
                .with_timeout(0),
        );
        assert_eq!(verify(&snapshot(Some(attributes)))[0].severity, Severity::Ok);
    }

    #[test]
    fn test_access_log_without_bucket() {
        let attributes = valid_attributes().with_access_log(
            AccessLog::default()
                .with_enabled(true)
                .with_emit_interval(15),
        );
        let results = verify(&snapshot(Some(attributes)));
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.severity == Severity::Critical));
    }

    #[test]
    fn test_cross_zone_disabled() {
        let attributes = valid_attributes()
            .with_cross_zone_load_balancing(CrossZoneLoadBalancing::default().with_enabled(false));
        assert_eq!(
            verify(&snapshot(Some(attributes))),
            vec![VerificationResult::warning(
                "LoadBalancer web spans 2 availability zones without cross-zone load balancing"
            )]
        );
    }
}
