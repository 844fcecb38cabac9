use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display::ShapeWriter;
use crate::operation::ElbRequest;
use crate::types::HealthCheck;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfigureHealthCheckRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    health_check: Option<HealthCheck>,
}

impl ConfigureHealthCheckRequest {
    pub fn new(load_balancer_name: impl Into<String>, health_check: HealthCheck) -> Self {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            health_check: Some(health_check),
        }
    }

    pub fn load_balancer_name(&self) -> Option<&str> {
        self.load_balancer_name.as_deref()
    }

    pub fn set_load_balancer_name(&mut self, load_balancer_name: Option<String>) {
        self.load_balancer_name = load_balancer_name;
    }

    pub fn with_load_balancer_name(mut self, load_balancer_name: impl Into<String>) -> Self {
        self.load_balancer_name = Some(load_balancer_name.into());
        self
    }

    pub fn health_check(&self) -> Option<&HealthCheck> {
        self.health_check.as_ref()
    }

    pub fn set_health_check(&mut self, health_check: Option<HealthCheck>) {
        self.health_check = health_check;
    }

    pub fn with_health_check(mut self, health_check: HealthCheck) -> Self {
        self.health_check = Some(health_check);
        self
    }
}

impl ElbRequest for ConfigureHealthCheckRequest {
    type Output = ConfigureHealthCheckResult;
    const ACTION: &'static str = "ConfigureHealthCheck";
}

impl fmt::Display for ConfigureHealthCheckRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .field("HealthCheck", self.health_check.as_ref())
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfigureHealthCheckResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    health_check: Option<HealthCheck>,
}

impl ConfigureHealthCheckResult {
    /// The health check now in effect.
    pub fn health_check(&self) -> Option<&HealthCheck> {
        self.health_check.as_ref()
    }

    pub fn set_health_check(&mut self, health_check: Option<HealthCheck>) {
        self.health_check = health_check;
    }

    pub fn with_health_check(mut self, health_check: HealthCheck) -> Self {
        self.health_check = Some(health_check);
        self
    }
}

impl fmt::Display for ConfigureHealthCheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("HealthCheck", self.health_check.as_ref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_health_check() {
        let health_check = HealthCheck::new("HTTP:80/ping", 30, 5, 3, 3);
        let request = ConfigureHealthCheckRequest::new("web", health_check.clone());
        let result = ConfigureHealthCheckResult::default().with_health_check(health_check);
        assert_eq!(request.health_check(), result.health_check());
        assert!(request.to_string().starts_with("{LoadBalancerName: web,HealthCheck: {"));
    }
}
