//! Front-end listeners and the back-end server settings tied to them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display::ShapeWriter;

/// A front-end (protocol, port) pair and the back-end (protocol, port) it forwards to.
///
/// If the front end uses HTTP or HTTPS the instance protocol has to be HTTP or
/// HTTPS as well; TCP and SSL front ends pair with TCP or SSL instances.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Listener {
    #[serde(skip_serializing_if = "Option::is_none")]
    protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_port: Option<i32>,
    #[serde(rename = "SSLCertificateId", skip_serializing_if = "Option::is_none")]
    ssl_certificate_id: Option<String>,
}

impl Listener {
    pub fn new(protocol: impl Into<String>, load_balancer_port: i32, instance_port: i32) -> Self {
        Self {
            protocol: Some(protocol.into()),
            load_balancer_port: Some(load_balancer_port),
            instance_port: Some(instance_port),
            ..Default::default()
        }
    }

    /// The load balancer transport protocol: HTTP, HTTPS, TCP or SSL.
    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }

    pub fn set_protocol(&mut self, protocol: Option<String>) {
        self.protocol = protocol;
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// The port the load balancer listens on, 1 through 65535.
    pub fn load_balancer_port(&self) -> Option<i32> {
        self.load_balancer_port
    }

    pub fn set_load_balancer_port(&mut self, load_balancer_port: Option<i32>) {
        self.load_balancer_port = load_balancer_port;
    }

    pub fn with_load_balancer_port(mut self, load_balancer_port: i32) -> Self {
        self.load_balancer_port = Some(load_balancer_port);
        self
    }

    /// The protocol used to route traffic to instances.
    pub fn instance_protocol(&self) -> Option<&str> {
        self.instance_protocol.as_deref()
    }

    pub fn set_instance_protocol(&mut self, instance_protocol: Option<String>) {
        self.instance_protocol = instance_protocol;
    }

    pub fn with_instance_protocol(mut self, instance_protocol: impl Into<String>) -> Self {
        self.instance_protocol = Some(instance_protocol.into());
        self
    }

    /// The port the instances listen on, 1 through 65535.
    pub fn instance_port(&self) -> Option<i32> {
        self.instance_port
    }

    pub fn set_instance_port(&mut self, instance_port: Option<i32>) {
        self.instance_port = instance_port;
    }

    pub fn with_instance_port(mut self, instance_port: i32) -> Self {
        self.instance_port = Some(instance_port);
        self
    }

    /// The ARN of the server certificate. Only used by HTTPS and SSL listeners.
    pub fn ssl_certificate_id(&self) -> Option<&str> {
        self.ssl_certificate_id.as_deref()
    }

    pub fn set_ssl_certificate_id(&mut self, ssl_certificate_id: Option<String>) {
        self.ssl_certificate_id = ssl_certificate_id;
    }

    pub fn with_ssl_certificate_id(mut self, ssl_certificate_id: impl Into<String>) -> Self {
        self.ssl_certificate_id = Some(ssl_certificate_id.into());
        self
    }
}

impl fmt::Display for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("Protocol", self.protocol.as_ref())
            .field("LoadBalancerPort", self.load_balancer_port)
            .field("InstanceProtocol", self.instance_protocol.as_ref())
            .field("InstancePort", self.instance_port)
            .field("SSLCertificateId", self.ssl_certificate_id.as_ref())
            .finish()
    }
}

/// A listener together with the policies enabled for it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListenerDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    listener: Option<Listener>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    policy_names: Vec<String>,
}

impl ListenerDescription {
    pub fn listener(&self) -> Option<&Listener> {
        self.listener.as_ref()
    }

    pub fn set_listener(&mut self, listener: Option<Listener>) {
        self.listener = listener;
    }

    pub fn with_listener(mut self, listener: Listener) -> Self {
        self.listener = Some(listener);
        self
    }

    /// The policies, in the order they were set on the listener.
    pub fn policy_names(&self) -> &[String] {
        &self.policy_names
    }

    pub fn set_policy_names(&mut self, policy_names: Option<Vec<String>>) {
        self.policy_names = policy_names.unwrap_or_default();
    }

    pub fn with_policy_names<I, S>(mut self, policy_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy_names.extend(policy_names.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for ListenerDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("Listener", self.listener.as_ref())
            .list("PolicyNames", &self.policy_names)
            .finish()
    }
}

/// Policies enabled for an instance port.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BackendServerDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_port: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    policy_names: Vec<String>,
}

impl BackendServerDescription {
    pub fn instance_port(&self) -> Option<i32> {
        self.instance_port
    }

    pub fn set_instance_port(&mut self, instance_port: Option<i32>) {
        self.instance_port = instance_port;
    }

    pub fn with_instance_port(mut self, instance_port: i32) -> Self {
        self.instance_port = Some(instance_port);
        self
    }

    pub fn policy_names(&self) -> &[String] {
        &self.policy_names
    }

    pub fn set_policy_names(&mut self, policy_names: Option<Vec<String>>) {
        self.policy_names = policy_names.unwrap_or_default();
    }

    pub fn with_policy_names<I, S>(mut self, policy_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy_names.extend(policy_names.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for BackendServerDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("InstancePort", self.instance_port)
            .list("PolicyNames", &self.policy_names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fluent_listener_equals_separately_built_one() {
        let a = Listener::default()
            .with_protocol("HTTPS")
            .with_load_balancer_port(443)
            .with_instance_port(8443);
        let mut b = Listener::new("HTTPS", 443, 8443);
        assert_eq!(a, b);

        b.set_ssl_certificate_id(Some("arn:aws:iam::123456789012:server-certificate/web".into()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_with_list_matches_set_list() {
        let with = ListenerDescription::default().with_policy_names(["a", "b"]);
        let mut set = ListenerDescription::default();
        set.set_policy_names(Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(with, set);
    }

    #[test]
    fn test_with_list_appends() {
        let description = ListenerDescription::default()
            .with_policy_names(["a"])
            .with_policy_names(["b", "c"]);
        assert_eq!(description.policy_names(), ["a", "b", "c"]);
    }

    #[test]
    fn test_list_order_matters() {
        let a = BackendServerDescription::default().with_policy_names(["a", "b"]);
        let b = BackendServerDescription::default().with_policy_names(["b", "a"]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_setting_no_list_clears_it() {
        let mut description = BackendServerDescription::default()
            .with_instance_port(80)
            .with_policy_names(["backend-auth"]);
        description.set_policy_names(None);
        assert!(description.policy_names().is_empty());
        assert_eq!(
            description,
            BackendServerDescription::default().with_instance_port(80)
        );
    }

    #[test]
    fn test_nested_display() {
        let description = ListenerDescription::default()
            .with_listener(Listener::new("HTTP", 80, 8080))
            .with_policy_names(["sticky"]);
        assert_eq!(
            description.to_string(),
            "{Listener: {Protocol: HTTP,LoadBalancerPort: 80,InstancePort: 8080},PolicyNames: [sticky]}"
        );
    }

    #[test]
    fn test_json_certificate_member_name() {
        let listener = Listener::new("HTTPS", 443, 443)
            .with_instance_protocol("HTTPS")
            .with_ssl_certificate_id("cert");
        let json = serde_json::to_value(&listener).unwrap();
        assert_eq!(json["SSLCertificateId"], "cert");
        assert_eq!(json["InstanceProtocol"], "HTTPS");
        let back: Listener = serde_json::from_value(json).unwrap();
        assert_eq!(back, listener);
    }
}
