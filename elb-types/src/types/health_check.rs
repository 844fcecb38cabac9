//! Health check configuration of a load balancer.
//!
//! The ranges documented on the members are what the service accepts. They
//! are not enforced here; see the checker for an advisory pass over them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display::ShapeWriter;

/// Parameters the load balancer uses to probe its registered instances.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HealthCheck {
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unhealthy_threshold: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    healthy_threshold: Option<i32>,
}

impl HealthCheck {
    pub fn new(
        target: impl Into<String>,
        interval: i32,
        timeout: i32,
        unhealthy_threshold: i32,
        healthy_threshold: i32,
    ) -> Self {
        Self {
            target: Some(target.into()),
            interval: Some(interval),
            timeout: Some(timeout),
            unhealthy_threshold: Some(unhealthy_threshold),
            healthy_threshold: Some(healthy_threshold),
        }
    }

    /// The instance being checked, as `PROTOCOL:PORT[/PATH]`.
    ///
    /// The protocol is one of TCP, HTTP, HTTPS or SSL and the port ranges from 1
    /// through 65535. A path is given for HTTP and HTTPS targets only.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn set_target(&mut self, target: Option<String>) {
        self.target = target;
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Seconds between two checks of one instance, 5 through 300.
    pub fn interval(&self) -> Option<i32> {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Option<i32>) {
        self.interval = interval;
    }

    pub fn with_interval(mut self, interval: i32) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Seconds without a response after which a check fails, 2 through 60.
    /// Must be lower than the interval.
    pub fn timeout(&self) -> Option<i32> {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: Option<i32>) {
        self.timeout = timeout;
    }

    pub fn with_timeout(mut self, timeout: i32) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Consecutive failures before an instance is declared unhealthy, 2 through 10.
    pub fn unhealthy_threshold(&self) -> Option<i32> {
        self.unhealthy_threshold
    }

    pub fn set_unhealthy_threshold(&mut self, unhealthy_threshold: Option<i32>) {
        self.unhealthy_threshold = unhealthy_threshold;
    }

    pub fn with_unhealthy_threshold(mut self, unhealthy_threshold: i32) -> Self {
        self.unhealthy_threshold = Some(unhealthy_threshold);
        self
    }

    /// Consecutive successes before an instance is declared healthy, 2 through 10.
    pub fn healthy_threshold(&self) -> Option<i32> {
        self.healthy_threshold
    }

    pub fn set_healthy_threshold(&mut self, healthy_threshold: Option<i32>) {
        self.healthy_threshold = healthy_threshold;
    }

    pub fn with_healthy_threshold(mut self, healthy_threshold: i32) -> Self {
        self.healthy_threshold = Some(healthy_threshold);
        self
    }
}

impl fmt::Display for HealthCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("Target", self.target.as_ref())
            .field("Interval", self.interval)
            .field("Timeout", self.timeout)
            .field("UnhealthyThreshold", self.unhealthy_threshold)
            .field("HealthyThreshold", self.healthy_threshold)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;

    fn hash_of(health_check: &HealthCheck) -> u64 {
        let mut hasher = DefaultHasher::new();
        health_check.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new_sets_every_member() {
        let health_check = HealthCheck::new("HTTP:80/ping", 30, 5, 3, 3);
        assert_eq!(health_check.target(), Some("HTTP:80/ping"));
        assert_eq!(health_check.interval(), Some(30));
        assert_eq!(health_check.timeout(), Some(5));
        assert_eq!(health_check.unhealthy_threshold(), Some(3));
        assert_eq!(health_check.healthy_threshold(), Some(3));
        assert!(health_check.to_string().contains("Interval: 30"));
    }

    #[test]
    fn test_display() {
        let health_check = HealthCheck::new("HTTP:80/ping", 30, 5, 3, 3);
        assert_eq!(
            health_check.to_string(),
            "{Target: HTTP:80/ping,Interval: 30,Timeout: 5,UnhealthyThreshold: 3,HealthyThreshold: 3}"
        );
        assert_eq!(HealthCheck::default().to_string(), "{}");
    }

    #[test]
    fn test_equal_members_are_equal_and_hash_alike() {
        let a = HealthCheck::new("TCP:443", 10, 5, 2, 10);
        let b = HealthCheck::default()
            .with_target("TCP:443")
            .with_interval(10)
            .with_timeout(5)
            .with_unhealthy_threshold(2)
            .with_healthy_threshold(10);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_one_differing_member_breaks_equality() {
        let a = HealthCheck::new("TCP:443", 10, 5, 2, 10);
        assert_ne!(a, a.clone().with_interval(11));

        let mut unset = a.clone();
        unset.set_timeout(None);
        assert_ne!(a, unset);
    }

    #[test]
    fn test_out_of_range_values_are_stored_as_given() {
        let health_check = HealthCheck::new("UDP:0", 1, 600, 0, 100);
        assert_eq!(health_check.target(), Some("UDP:0"));
        assert_eq!(health_check.timeout(), Some(600));
    }

    #[test]
    fn test_json_uses_api_member_names() {
        let json = serde_json::to_value(HealthCheck::new("HTTP:80/", 30, 5, 2, 10)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Target": "HTTP:80/",
                "Interval": 30,
                "Timeout": 5,
                "UnhealthyThreshold": 2,
                "HealthyThreshold": 10
            })
        );
    }
}
