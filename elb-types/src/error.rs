//! Errors the service documents for its actions.
//!
//! The model never produces these. They let a caller that received an error
//! code from a transport match on it instead of comparing strings.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElbError {
    #[error("LoadBalancerNotFound: {0}")]
    LoadBalancerNotFound(String),
    #[error("CertificateNotFound: {0}")]
    CertificateNotFound(String),
    #[error("DuplicateListener: {0}")]
    DuplicateListener(String),
    #[error("DuplicateLoadBalancerName: {0}")]
    DuplicateLoadBalancerName(String),
    #[error("DuplicatePolicyName: {0}")]
    DuplicatePolicyName(String),
    #[error("DuplicateTagKeys: {0}")]
    DuplicateTagKeys(String),
    #[error("InvalidConfigurationRequest: {0}")]
    InvalidConfigurationRequest(String),
    #[error("InvalidInstance: {0}")]
    InvalidInstance(String),
    #[error("InvalidScheme: {0}")]
    InvalidScheme(String),
    #[error("InvalidSecurityGroup: {0}")]
    InvalidSecurityGroup(String),
    #[error("InvalidSubnet: {0}")]
    InvalidSubnet(String),
    #[error("ListenerNotFound: {0}")]
    ListenerNotFound(String),
    #[error("LoadBalancerAttributeNotFound: {0}")]
    LoadBalancerAttributeNotFound(String),
    #[error("PolicyNotFound: {0}")]
    PolicyNotFound(String),
    #[error("PolicyTypeNotFound: {0}")]
    PolicyTypeNotFound(String),
    #[error("SubnetNotFound: {0}")]
    SubnetNotFound(String),
    #[error("TooManyLoadBalancers: {0}")]
    TooManyLoadBalancers(String),
    #[error("TooManyPolicies: {0}")]
    TooManyPolicies(String),
    #[error("TooManyTags: {0}")]
    TooManyTags(String),
    /// Any code the service may return that is not listed above.
    #[error("{code}: {message}")]
    Unhandled { code: String, message: String },
}

impl ElbError {
    pub fn from_code(code: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            "LoadBalancerNotFound" => ElbError::LoadBalancerNotFound(message),
            "CertificateNotFound" => ElbError::CertificateNotFound(message),
            "DuplicateListener" => ElbError::DuplicateListener(message),
            "DuplicateLoadBalancerName" => ElbError::DuplicateLoadBalancerName(message),
            "DuplicatePolicyName" => ElbError::DuplicatePolicyName(message),
            "DuplicateTagKeys" => ElbError::DuplicateTagKeys(message),
            "InvalidConfigurationRequest" => ElbError::InvalidConfigurationRequest(message),
            "InvalidInstance" => ElbError::InvalidInstance(message),
            "InvalidScheme" => ElbError::InvalidScheme(message),
            "InvalidSecurityGroup" => ElbError::InvalidSecurityGroup(message),
            "InvalidSubnet" => ElbError::InvalidSubnet(message),
            "ListenerNotFound" => ElbError::ListenerNotFound(message),
            "LoadBalancerAttributeNotFound" => ElbError::LoadBalancerAttributeNotFound(message),
            "PolicyNotFound" => ElbError::PolicyNotFound(message),
            "PolicyTypeNotFound" => ElbError::PolicyTypeNotFound(message),
            "SubnetNotFound" => ElbError::SubnetNotFound(message),
            "TooManyLoadBalancers" => ElbError::TooManyLoadBalancers(message),
            "TooManyPolicies" => ElbError::TooManyPolicies(message),
            "TooManyTags" => ElbError::TooManyTags(message),
            _ => ElbError::Unhandled {
                code: code.to_string(),
                message,
            },
        }
    }

    pub fn code(&self) -> &str {
        match self {
            ElbError::LoadBalancerNotFound(_) => "LoadBalancerNotFound",
            ElbError::CertificateNotFound(_) => "CertificateNotFound",
            ElbError::DuplicateListener(_) => "DuplicateListener",
            ElbError::DuplicateLoadBalancerName(_) => "DuplicateLoadBalancerName",
            ElbError::DuplicatePolicyName(_) => "DuplicatePolicyName",
            ElbError::DuplicateTagKeys(_) => "DuplicateTagKeys",
            ElbError::InvalidConfigurationRequest(_) => "InvalidConfigurationRequest",
            ElbError::InvalidInstance(_) => "InvalidInstance",
            ElbError::InvalidScheme(_) => "InvalidScheme",
            ElbError::InvalidSecurityGroup(_) => "InvalidSecurityGroup",
            ElbError::InvalidSubnet(_) => "InvalidSubnet",
            ElbError::ListenerNotFound(_) => "ListenerNotFound",
            ElbError::LoadBalancerAttributeNotFound(_) => "LoadBalancerAttributeNotFound",
            ElbError::PolicyNotFound(_) => "PolicyNotFound",
            ElbError::PolicyTypeNotFound(_) => "PolicyTypeNotFound",
            ElbError::SubnetNotFound(_) => "SubnetNotFound",
            ElbError::TooManyLoadBalancers(_) => "TooManyLoadBalancers",
            ElbError::TooManyPolicies(_) => "TooManyPolicies",
            ElbError::TooManyTags(_) => "TooManyTags",
            ElbError::Unhandled { code, .. } => code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code() {
        let message = "There is no ACTIVE Load Balancer named 'web'";
        let err = ElbError::from_code("LoadBalancerNotFound", message);
        assert_eq!(err, ElbError::LoadBalancerNotFound(message.to_string()));
        assert_eq!(err.code(), "LoadBalancerNotFound");
        assert_eq!(err.to_string(), format!("LoadBalancerNotFound: {}", message));
    }

    #[test]
    fn test_unknown_code_is_kept() {
        let err = ElbError::from_code("Throttling", "Rate exceeded");
        assert_eq!(err.code(), "Throttling");
        assert_eq!(err.to_string(), "Throttling: Rate exceeded");
    }

    #[test]
    fn test_every_code_maps_back() {
        let codes = [
            "LoadBalancerNotFound",
            "CertificateNotFound",
            "DuplicateListener",
            "DuplicateLoadBalancerName",
            "DuplicatePolicyName",
            "DuplicateTagKeys",
            "InvalidConfigurationRequest",
            "InvalidInstance",
            "InvalidScheme",
            "InvalidSecurityGroup",
            "InvalidSubnet",
            "ListenerNotFound",
            "LoadBalancerAttributeNotFound",
            "PolicyNotFound",
            "PolicyTypeNotFound",
            "SubnetNotFound",
            "TooManyLoadBalancers",
            "TooManyPolicies",
            "TooManyTags",
        ];
        for code in codes {
            let err = ElbError::from_code(code, "");
            assert!(!matches!(err, ElbError::Unhandled { .. }), "{}", code);
            assert_eq!(err.code(), code);
        }
    }
}
