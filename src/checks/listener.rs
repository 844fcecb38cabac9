//! Verifies the listeners of a load balancer.

use derive_builder::Builder;
use elb_types::types::{Listener, LoadBalancerDescription, Protocol};
use itertools::Itertools;

use crate::types::{CheckerError, VerificationResult, Verifier};

#[derive(Debug, Builder)]
#[builder(build_fn(error = "CheckerError"))]
pub struct ListenerChecks<'a> {
    load_balancer: &'a LoadBalancerDescription,
}

impl<'a> ListenerChecks<'a> {
    fn name(&self) -> &str {
        self.load_balancer.load_balancer_name().unwrap_or("<unnamed>")
    }

    fn listeners(&self) -> impl Iterator<Item = &'a Listener> {
        let load_balancer: &'a LoadBalancerDescription = self.load_balancer;
        load_balancer
            .listener_descriptions()
            .iter()
            .filter_map(|ld| ld.listener())
    }

    fn parse_protocol(
        &self,
        listener: &Listener,
        protocol: Option<&str>,
    ) -> Result<Protocol, VerificationResult> {
        let port = listener.load_balancer_port().unwrap_or_default();
        match protocol {
            None => Err(VerificationResult::critical(format!(
                "LoadBalancer {} has a listener on port {} without protocol",
                self.name(),
                port
            ))),
            Some(p) => p.parse().map_err(|_| {
                VerificationResult::critical(format!(
                    "LoadBalancer {} has a listener on port {} with unknown protocol {}",
                    self.name(),
                    port,
                    p
                ))
            }),
        }
    }

    pub fn verify_ports(&self, listener: &Listener) -> Vec<VerificationResult> {
        let mut results = vec![];
        for (member, port) in [
            ("load balancer port", listener.load_balancer_port()),
            ("instance port", listener.instance_port()),
        ] {
            match port {
                Some(p) if (1..=65535).contains(&p) => {}
                Some(p) => results.push(VerificationResult::critical(format!(
                    "LoadBalancer {} has a listener with {} {} outside of 1-65535",
                    self.name(),
                    member,
                    p
                ))),
                None => results.push(VerificationResult::critical(format!(
                    "LoadBalancer {} has a listener without {}",
                    self.name(),
                    member
                ))),
            }
        }
        results
    }

    /// Checks protocols, the front-end/back-end layer match and certificates.
    pub fn verify_protocols(&self, listener: &Listener) -> Vec<VerificationResult> {
        let port = listener.load_balancer_port().unwrap_or_default();
        let protocol = match self.parse_protocol(listener, listener.protocol()) {
            Ok(p) => p,
            Err(result) => return vec![result],
        };
        let mut results = vec![];
        // The instance protocol defaults to the front-end protocol when unset.
        if let Some(instance_protocol) = listener.instance_protocol() {
            match self.parse_protocol(listener, Some(instance_protocol)) {
                Ok(ip) if ip.is_layer7() != protocol.is_layer7() => {
                    results.push(VerificationResult::critical(format!(
                        "LoadBalancer {} has a listener on port {} mixing {} with instance protocol {}",
                        self.name(),
                        port,
                        protocol,
                        ip
                    )))
                }
                Ok(_) => {}
                Err(result) => results.push(result),
            }
        }
        match (protocol.is_secure(), listener.ssl_certificate_id()) {
            (true, None) => results.push(VerificationResult::critical(format!(
                "LoadBalancer {} has a {} listener on port {} without certificate",
                self.name(),
                protocol,
                port
            ))),
            (false, Some(cert)) => results.push(VerificationResult::warning(format!(
                "LoadBalancer {} has a {} listener on port {} with unused certificate {}",
                self.name(),
                protocol,
                port,
                cert
            ))),
            _ => {}
        }
        results
    }

    pub fn verify_unique_ports(&self) -> Vec<VerificationResult> {
        self.load_balancer
            .listener_ports()
            .into_iter()
            .duplicates()
            .map(|port| {
                VerificationResult::critical(format!(
                    "LoadBalancer {} has more than one listener on port {}",
                    self.name(),
                    port
                ))
            })
            .collect()
    }
}

impl<'a> Verifier for ListenerChecks<'a> {
    fn verify(&self) -> Vec<VerificationResult> {
        if self.listeners().next().is_none() {
            return vec![VerificationResult::critical(format!(
                "LoadBalancer {} has no listeners",
                self.name()
            ))];
        }
        let mut results = vec![];
        for listener in self.listeners() {
            results.append(&mut self.verify_ports(listener));
            results.append(&mut self.verify_protocols(listener));
        }
        results.append(&mut self.verify_unique_ports());
        if results.is_empty() {
            results.push(VerificationResult::ok(format!(
                "LoadBalancer {} has valid listeners on ports {}",
                self.name(),
                self.load_balancer.listener_ports().iter().join(", ")
            )));
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;
    use elb_types::types::ListenerDescription;

    fn load_balancer(listeners: Vec<Listener>) -> LoadBalancerDescription {
        LoadBalancerDescription::default()
            .with_load_balancer_name("web")
            .with_listener_descriptions(
                listeners
                    .into_iter()
                    .map(|l| ListenerDescription::default().with_listener(l)),
            )
    }

    fn verify(lb: &LoadBalancerDescription) -> Vec<VerificationResult> {
        let mut lcb = ListenerChecksBuilder::default();
        lcb.load_balancer(lb).build().unwrap().verify()
    }

    #[test]
    fn test_valid_listeners() {
        let lb = load_balancer(vec![
            Listener::new("HTTP", 80, 8080),
            Listener::new("HTTPS", 443, 8080)
                .with_instance_protocol("HTTP")
                .with_ssl_certificate_id("arn:aws:iam::123456789012:server-certificate/web"),
        ]);
        assert_eq!(
            verify(&lb),
            vec![VerificationResult::ok(
                "LoadBalancer web has valid listeners on ports 80, 443"
            )]
        );
    }

    #[test]
    fn test_no_listeners() {
        let lb = load_balancer(vec![]);
        assert_eq!(
            verify(&lb),
            vec![VerificationResult::critical("LoadBalancer web has no listeners")]
        );
    }

    #[test]
    fn test_unknown_protocol() {
        let lb = load_balancer(vec![Listener::new("UDP", 53, 53)]);
        assert_eq!(
            verify(&lb),
            vec![VerificationResult::critical(
                "LoadBalancer web has a listener on port 53 with unknown protocol UDP"
            )]
        );
    }

    #[test]
    fn test_port_out_of_range() {
        let lb = load_balancer(vec![Listener::new("TCP", 0, 70000)]);
        let results = verify(&lb);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.severity == Severity::Critical));
    }

    #[test]
    fn test_layer_mismatch() {
        let lb = load_balancer(vec![
            Listener::new("HTTP", 80, 8080).with_instance_protocol("TCP")
        ]);
        let results = verify(&lb);
        assert_eq!(results.len(), 1);
        assert!(results[0].message.contains("mixing HTTP with instance protocol TCP"));
    }

    #[test]
    fn test_certificates() {
        let lb = load_balancer(vec![
            Listener::new("SSL", 443, 8443),
            Listener::new("TCP", 22, 22).with_ssl_certificate_id("cert"),
        ]);
        let results = verify(&lb);
        assert_eq!(
            results,
            vec![
                VerificationResult::critical(
                    "LoadBalancer web has a SSL listener on port 443 without certificate"
                ),
                VerificationResult::warning(
                    "LoadBalancer web has a TCP listener on port 22 with unused certificate cert"
                ),
            ]
        );
    }

    #[test]
    fn test_duplicate_ports() {
        let lb = load_balancer(vec![
            Listener::new("TCP", 80, 8080),
            Listener::new("HTTP", 80, 8081),
        ]);
        assert_eq!(
            verify(&lb),
            vec![VerificationResult::critical(
                "LoadBalancer web has more than one listener on port 80"
            )]
        );
    }
}
