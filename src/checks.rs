//! Checks encapsulate the rules a classic load balancer configuration has to
//! follow before the service accepts it, or before it behaves as expected.
//!
//! Right now the following checks are implemented:
//! - health_check: target syntax, probe timing and thresholds.
//! - listener: protocols, ports, certificates and duplicate ports.
//! - policy: references to undeclared policies and unused policies.
//! - network: VPC placement, zones, scheme and registered instances.
//! - attributes: draining, idle timeout, access logs and cross-zone balancing.

pub mod attributes;
pub mod health_check;
pub mod listener;
pub mod network;
pub mod policy;

use std::ops::RangeInclusive;

use crate::types::VerificationResult;

/// Flags a numeric member that is unset or outside the accepted range.
pub(crate) fn verify_range(
    load_balancer: &str,
    member: &str,
    value: Option<i32>,
    range: RangeInclusive<i32>,
) -> Option<VerificationResult> {
    match value {
        None => Some(VerificationResult::critical(format!(
            "LoadBalancer {} has no {} set",
            load_balancer, member
        ))),
        Some(v) if !range.contains(&v) => Some(VerificationResult::critical(format!(
            "LoadBalancer {} has {} {} outside of {}-{}",
            load_balancer,
            member,
            v,
            range.start(),
            range.end()
        ))),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    #[test]
    fn test_verify_range() {
        assert_eq!(verify_range("web", "interval", Some(30), 5..=300), None);
        assert_eq!(verify_range("web", "interval", Some(5), 5..=300), None);
        let result = verify_range("web", "interval", Some(301), 5..=300).unwrap();
        assert_eq!(result.severity, Severity::Critical);
        assert_eq!(
            result.message,
            "LoadBalancer web has interval 301 outside of 5-300"
        );
        let result = verify_range("web", "interval", None, 5..=300).unwrap();
        assert_eq!(result.message, "LoadBalancer web has no interval set");
    }
}
