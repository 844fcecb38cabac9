use colored::Colorize;
use elb_types::types::{LoadBalancerAttributes, LoadBalancerDescription};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("could not read snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("AWS request failed: {0}")]
    Aws(#[from] aws_sdk_elasticloadbalancing::Error),
    #[error("could not set up check: {0}")]
    Setup(#[from] derive_builder::UninitializedFieldError),
}

/// Everything known about one load balancer.
///
/// Attributes are only present when they were fetched from the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoadBalancerSnapshot {
    pub description: LoadBalancerDescription,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<LoadBalancerAttributes>,
}

impl LoadBalancerSnapshot {
    pub fn name(&self) -> &str {
        self.description.load_balancer_name().unwrap_or("<unnamed>")
    }
}

impl From<LoadBalancerDescription> for LoadBalancerSnapshot {
    fn from(description: LoadBalancerDescription) -> Self {
        LoadBalancerSnapshot {
            description,
            attributes: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub message: String,
    pub severity: Severity,
}

impl VerificationResult {
    pub fn ok(message: impl Into<String>) -> Self {
        VerificationResult {
            message: message.into(),
            severity: Severity::Ok,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        VerificationResult {
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        VerificationResult {
            message: message.into(),
            severity: Severity::Critical,
        }
    }
}

impl Display for VerificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.severity {
            Severity::Ok => f.write_str(&self.message.green().to_string()),
            Severity::Warning => f.write_str(&self.message.yellow().to_string()),
            Severity::Critical => f.write_str(&self.message.red().to_string()),
        }
    }
}

pub trait Verifier {
    fn verify(&self) -> Vec<VerificationResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_message() {
        colored::control::set_override(false);
        let result = VerificationResult::critical("LoadBalancer web has no listeners");
        assert_eq!(result.to_string(), "LoadBalancer web has no listeners");
    }

    #[test]
    fn test_severity_order() {
        assert!(Severity::Critical > Severity::Warning);
        assert!(Severity::Warning > Severity::Ok);
    }

    #[test]
    fn test_snapshot_json_omits_unknown_attributes() {
        let snapshot = LoadBalancerSnapshot::from(
            LoadBalancerDescription::default().with_load_balancer_name("web"),
        );
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Description": {"LoadBalancerName": "web"}})
        );
        assert_eq!(snapshot.name(), "web");
    }
}
