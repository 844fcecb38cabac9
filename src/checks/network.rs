//! This checker provides placement checks for a load balancer.
//! It can check the following conditions right now:
//!
//! - A load balancer in a VPC has subnets and security groups.
//! - A load balancer outside of a VPC has availability zones.
//! - The scheme is known and `internal` is only used inside a VPC.
//! - The load balancer spans at least two availability zones.
//! - Instances are registered.

use derive_builder::Builder;
use elb_types::types::LoadBalancerDescription;
use log::{debug, info};

use crate::types::{CheckerError, VerificationResult, Verifier};

pub const SCHEME_INTERNET_FACING: &str = "internet-facing";
pub const SCHEME_INTERNAL: &str = "internal";

#[derive(Debug, Builder)]
#[builder(build_fn(error = "CheckerError"))]
pub struct NetworkChecks<'a> {
    load_balancer: &'a LoadBalancerDescription,
}

impl<'a> NetworkChecks<'a> {
    fn name(&self) -> &str {
        self.load_balancer.load_balancer_name().unwrap_or("<unnamed>")
    }

    pub fn verify_placement(&self) -> Vec<VerificationResult> {
        let lb = self.load_balancer;
        let mut results = vec![];
        match lb.vpc_id() {
            Some(vpc) => {
                debug!("LoadBalancer {} is placed in {}", self.name(), vpc);
                if lb.subnets().is_empty() {
                    results.push(VerificationResult::critical(format!(
                        "LoadBalancer {} in {} has no subnets",
                        self.name(),
                        vpc
                    )));
                }
                if lb.security_groups().is_empty() {
                    results.push(VerificationResult::critical(format!(
                        "LoadBalancer {} in {} has no security groups",
                        self.name(),
                        vpc
                    )));
                }
            }
            None => {
                if lb.availability_zones().is_empty() {
                    results.push(VerificationResult::critical(format!(
                        "LoadBalancer {} is neither in a VPC nor in any availability zone",
                        self.name()
                    )));
                }
            }
        }
        results
    }

    pub fn verify_scheme(&self) -> Option<VerificationResult> {
        match self.load_balancer.scheme() {
            Some(SCHEME_INTERNAL) if self.load_balancer.vpc_id().is_none() => {
                Some(VerificationResult::critical(format!(
                    "LoadBalancer {} is internal but not placed in a VPC",
                    self.name()
                )))
            }
            Some(SCHEME_INTERNAL) | Some(SCHEME_INTERNET_FACING) | None => None,
            Some(other) => Some(VerificationResult::warning(format!(
                "LoadBalancer {} has unknown scheme {}",
                self.name(),
                other
            ))),
        }
    }

    pub fn verify_number_of_availability_zones(&self) -> Option<VerificationResult> {
        let zones = self.load_balancer.availability_zones().len();
        if zones < 2 {
            info!("LoadBalancer {} spans {} availability zones", self.name(), zones);
            return Some(VerificationResult::warning(format!(
                "LoadBalancer {} spans fewer than two availability zones: {}",
                self.name(),
                zones
            )));
        }
        None
    }

    pub fn verify_instances_registered(&self) -> Option<VerificationResult> {
        if self.load_balancer.instances().is_empty() {
            return Some(VerificationResult::warning(format!(
                "LoadBalancer {} has no registered instances",
                self.name()
            )));
        }
        None
    }
}

impl<'a> Verifier for NetworkChecks<'a> {
    fn verify(&self) -> Vec<VerificationResult> {
        let mut results = self.verify_placement();
        results.extend(self.verify_scheme());
        results.extend(self.verify_number_of_availability_zones());
        results.extend(self.verify_instances_registered());
        if results.is_empty() {
            results.push(VerificationResult::ok(format!(
                "LoadBalancer {} seems correctly placed.",
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
    use elb_types::types::Instance;

    fn vpc_load_balancer() -> LoadBalancerDescription {
        LoadBalancerDescription::default()
            .with_load_balancer_name("web")
            .with_vpc_id("vpc-1")
            .with_subnets(["subnet-1", "subnet-2"])
            .with_security_groups(["sg-1"])
            .with_availability_zones(["us-east-1a", "us-east-1b"])
            .with_instances([Instance::new("i-1")])
            .with_scheme(SCHEME_INTERNAL)
    }

    fn verify(lb: &LoadBalancerDescription) -> Vec<VerificationResult> {
        let mut ncb = NetworkChecksBuilder::default();
        ncb.load_balancer(lb).build().unwrap().verify()
    }

    #[test]
    fn test_verify_vpc_load_balancer_success() {
        assert_eq!(
            verify(&vpc_load_balancer()),
            vec![VerificationResult::ok("LoadBalancer web seems correctly placed.")]
        );
    }

    #[test]
    fn test_verify_vpc_without_subnets_and_security_groups() {
        let mut lb = vpc_load_balancer();
        lb.set_subnets(None);
        lb.set_security_groups(None);
        assert_eq!(
            verify(&lb),
            vec![
                VerificationResult::critical("LoadBalancer web in vpc-1 has no subnets"),
                VerificationResult::critical("LoadBalancer web in vpc-1 has no security groups"),
            ]
        );
    }

    #[test]
    fn test_verify_classic_placement() {
        let lb = LoadBalancerDescription::default()
            .with_load_balancer_name("web")
            .with_instances([Instance::new("i-1")]);
        let results = verify(&lb);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].severity, Severity::Critical);
        assert_eq!(
            results[1],
            VerificationResult::warning(
                "LoadBalancer web spans fewer than two availability zones: 0"
            )
        );
    }

    #[test]
    fn test_verify_internal_without_vpc() {
        let lb = LoadBalancerDescription::default()
            .with_load_balancer_name("web")
            .with_availability_zones(["us-east-1a", "us-east-1b"])
            .with_instances([Instance::new("i-1")])
            .with_scheme(SCHEME_INTERNAL);
        assert_eq!(
            verify(&lb),
            vec![VerificationResult::critical(
                "LoadBalancer web is internal but not placed in a VPC"
            )]
        );
    }

    #[test]
    fn test_verify_unknown_scheme_and_no_instances() {
        let mut lb = vpc_load_balancer().with_scheme("private");
        lb.set_instances(None);
        assert_eq!(
            verify(&lb),
            vec![
                VerificationResult::warning("LoadBalancer web has unknown scheme private"),
                VerificationResult::warning("LoadBalancer web has no registered instances"),
            ]
        );
    }
}
