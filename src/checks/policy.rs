//! Verifies that listeners and back-end servers only use declared policies,
//! and that declared policies are in use.

use std::collections::HashSet;

use derive_builder::Builder;
use elb_types::types::{LoadBalancerDescription, Protocol};
use log::debug;

use crate::types::{CheckerError, VerificationResult, Verifier};

#[derive(Debug, Builder)]
#[builder(build_fn(error = "CheckerError"))]
pub struct PolicyChecks<'a> {
    load_balancer: &'a LoadBalancerDescription,
}

impl<'a> PolicyChecks<'a> {
    fn name(&self) -> &str {
        self.load_balancer.load_balancer_name().unwrap_or("<unnamed>")
    }

    fn cookie_policy_names(&self) -> HashSet<&str> {
        let Some(policies) = self.load_balancer.policies() else {
            return HashSet::new();
        };
        policies
            .app_cookie_stickiness_policies()
            .iter()
            .filter_map(|p| p.policy_name())
            .chain(
                policies
                    .lb_cookie_stickiness_policies()
                    .iter()
                    .filter_map(|p| p.policy_name()),
            )
            .collect()
    }

    /// Every referenced policy with where it is referenced from.
    fn references(&self) -> Vec<(String, &str)> {
        let mut references = vec![];
        for ld in self.load_balancer.listener_descriptions() {
            let port = ld
                .listener()
                .and_then(|l| l.load_balancer_port())
                .unwrap_or_default();
            for policy in ld.policy_names() {
                references.push((format!("listener port {}", port), policy.as_str()));
            }
        }
        for bsd in self.load_balancer.backend_server_descriptions() {
            for policy in bsd.policy_names() {
                references.push((
                    format!("instance port {}", bsd.instance_port().unwrap_or_default()),
                    policy.as_str(),
                ));
            }
        }
        references
    }

    pub fn verify_references_are_declared(&self) -> Vec<VerificationResult> {
        let declared: HashSet<&str> = self.load_balancer.policy_names().into_iter().collect();
        self.references()
            .into_iter()
            .filter(|(_, policy)| !declared.contains(policy))
            .map(|(location, policy)| {
                VerificationResult::critical(format!(
                    "LoadBalancer {} uses undeclared policy {} on {}",
                    self.name(),
                    policy,
                    location
                ))
            })
            .collect()
    }

    /// Cookie stickiness needs a listener that understands HTTP.
    pub fn verify_stickiness_on_layer7(&self) -> Vec<VerificationResult> {
        let cookie_policies = self.cookie_policy_names();
        let mut results = vec![];
        for ld in self.load_balancer.listener_descriptions() {
            let Some(listener) = ld.listener() else {
                continue;
            };
            let layer7 = listener
                .protocol()
                .and_then(|p| p.parse::<Protocol>().ok())
                .map_or(true, |p| p.is_layer7());
            if layer7 {
                continue;
            }
            for policy in ld.policy_names() {
                if cookie_policies.contains(policy.as_str()) {
                    results.push(VerificationResult::warning(format!(
                        "LoadBalancer {} uses cookie stickiness policy {} on {} listener port {}",
                        self.name(),
                        policy,
                        listener.protocol().unwrap_or_default(),
                        listener.load_balancer_port().unwrap_or_default()
                    )));
                }
            }
        }
        results
    }

    pub fn verify_declared_are_used(&self) -> Vec<VerificationResult> {
        let referenced: HashSet<&str> = self.references().into_iter().map(|(_, p)| p).collect();
        debug!("Policies referenced by {}: {:?}", self.name(), referenced);
        self.load_balancer
            .policy_names()
            .into_iter()
            .filter(|p| !referenced.contains(p))
            .map(|p| {
                VerificationResult::warning(format!(
                    "LoadBalancer {} declares policy {} which is not used",
                    self.name(),
                    p
                ))
            })
            .collect()
    }
}

impl<'a> Verifier for PolicyChecks<'a> {
    fn verify(&self) -> Vec<VerificationResult> {
        let mut results = self.verify_references_are_declared();
        results.append(&mut self.verify_stickiness_on_layer7());
        results.append(&mut self.verify_declared_are_used());
        if results.is_empty() {
            results.push(VerificationResult::ok(format!(
                "LoadBalancer {} uses its policies consistently",
                self.name()
            )));
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elb_types::types::{
        AppCookieStickinessPolicy, BackendServerDescription, LbCookieStickinessPolicy, Listener,
        ListenerDescription, Policies,
    };

    fn verify(lb: &LoadBalancerDescription) -> Vec<VerificationResult> {
        let mut pcb = PolicyChecksBuilder::default();
        pcb.load_balancer(lb).build().unwrap().verify()
    }

    fn sticky_policies() -> Policies {
        Policies::default()
            .with_app_cookie_stickiness_policies([AppCookieStickinessPolicy::new(
                "app-sticky",
                "SESSIONID",
            )])
            .with_lb_cookie_stickiness_policies([LbCookieStickinessPolicy::new("lb-sticky", 60)])
    }

    #[test]
    fn test_no_policies() {
        let lb = LoadBalancerDescription::default().with_load_balancer_name("web");
        assert_eq!(
            verify(&lb),
            vec![VerificationResult::ok(
                "LoadBalancer web uses its policies consistently"
            )]
        );
    }

    #[test]
    fn test_consistent_policies() {
        let lb = LoadBalancerDescription::default()
            .with_load_balancer_name("web")
            .with_policies(sticky_policies().with_other_policies(["proxy"]))
            .with_listener_descriptions([
                ListenerDescription::default()
                    .with_listener(Listener::new("HTTP", 80, 8080))
                    .with_policy_names(["app-sticky"]),
                ListenerDescription::default()
                    .with_listener(Listener::new("HTTPS", 443, 8080))
                    .with_policy_names(["lb-sticky"]),
            ])
            .with_backend_server_descriptions([BackendServerDescription::default()
                .with_instance_port(8080)
                .with_policy_names(["proxy"])]);
        assert_eq!(verify(&lb).len(), 1);
        assert_eq!(verify(&lb)[0].severity, crate::types::Severity::Ok);
    }

    #[test]
    fn test_undeclared_policy() {
        let lb = LoadBalancerDescription::default()
            .with_load_balancer_name("web")
            .with_backend_server_descriptions([BackendServerDescription::default()
                .with_instance_port(8080)
                .with_policy_names(["proxy"])]);
        assert_eq!(
            verify(&lb),
            vec![VerificationResult::critical(
                "LoadBalancer web uses undeclared policy proxy on instance port 8080"
            )]
        );
    }

    #[test]
    fn test_stickiness_on_tcp_listener() {
        let lb = LoadBalancerDescription::default()
            .with_load_balancer_name("web")
            .with_policies(sticky_policies())
            .with_listener_descriptions([ListenerDescription::default()
                .with_listener(Listener::new("TCP", 80, 8080))
                .with_policy_names(["app-sticky", "lb-sticky"])]);
        let results = verify(&lb);
        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0],
            VerificationResult::warning(
                "LoadBalancer web uses cookie stickiness policy app-sticky on TCP listener port 80"
            )
        );
    }

    #[test]
    fn test_unused_policy() {
        let lb = LoadBalancerDescription::default()
            .with_load_balancer_name("web")
            .with_policies(sticky_policies());
        assert_eq!(
            verify(&lb),
            vec![
                VerificationResult::warning(
                    "LoadBalancer web declares policy app-sticky which is not used"
                ),
                VerificationResult::warning(
                    "LoadBalancer web declares policy lb-sticky which is not used"
                ),
            ]
        );
    }
}
