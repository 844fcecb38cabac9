use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display::ShapeWriter;
use crate::operation::ElbRequest;
use crate::types::Listener;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateLoadBalancerListenersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    listeners: Vec<Listener>,
}

impl CreateLoadBalancerListenersRequest {
    pub fn new(load_balancer_name: impl Into<String>, listeners: Vec<Listener>) -> Self {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            listeners,
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

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn set_listeners(&mut self, listeners: Option<Vec<Listener>>) {
        self.listeners = listeners.unwrap_or_default();
    }

    pub fn with_listeners<I>(mut self, listeners: I) -> Self
    where
        I: IntoIterator<Item = Listener>,
    {
        self.listeners.extend(listeners);
        self
    }
}

impl ElbRequest for CreateLoadBalancerListenersRequest {
    type Output = CreateLoadBalancerListenersResult;
    const ACTION: &'static str = "CreateLoadBalancerListeners";
}

impl fmt::Display for CreateLoadBalancerListenersRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .list("Listeners", &self.listeners)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateLoadBalancerListenersResult {}

impl fmt::Display for CreateLoadBalancerListenersResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f).finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteLoadBalancerListenersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    load_balancer_ports: Vec<i32>,
}

impl DeleteLoadBalancerListenersRequest {
    pub fn new(load_balancer_name: impl Into<String>, load_balancer_ports: Vec<i32>) -> Self {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            load_balancer_ports,
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

    /// The front-end ports of the listeners to delete.
    pub fn load_balancer_ports(&self) -> &[i32] {
        &self.load_balancer_ports
    }

    pub fn set_load_balancer_ports(&mut self, load_balancer_ports: Option<Vec<i32>>) {
        self.load_balancer_ports = load_balancer_ports.unwrap_or_default();
    }

    pub fn with_load_balancer_ports<I>(mut self, load_balancer_ports: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        self.load_balancer_ports.extend(load_balancer_ports);
        self
    }
}

impl ElbRequest for DeleteLoadBalancerListenersRequest {
    type Output = DeleteLoadBalancerListenersResult;
    const ACTION: &'static str = "DeleteLoadBalancerListeners";
}

impl fmt::Display for DeleteLoadBalancerListenersRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .list("LoadBalancerPorts", &self.load_balancer_ports)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeleteLoadBalancerListenersResult {}

impl fmt::Display for DeleteLoadBalancerListenersResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f).finish()
    }
}

/// Replaces the certificate that terminates connections on a secure listener.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SetLoadBalancerListenerSslCertificateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_port: Option<i32>,
    #[serde(rename = "SSLCertificateId", skip_serializing_if = "Option::is_none")]
    ssl_certificate_id: Option<String>,
}

impl SetLoadBalancerListenerSslCertificateRequest {
    pub fn new(
        load_balancer_name: impl Into<String>,
        load_balancer_port: i32,
        ssl_certificate_id: impl Into<String>,
    ) -> Self {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            load_balancer_port: Some(load_balancer_port),
            ssl_certificate_id: Some(ssl_certificate_id.into()),
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

impl ElbRequest for SetLoadBalancerListenerSslCertificateRequest {
    type Output = SetLoadBalancerListenerSslCertificateResult;
    const ACTION: &'static str = "SetLoadBalancerListenerSSLCertificate";
}

impl fmt::Display for SetLoadBalancerListenerSslCertificateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .field("LoadBalancerPort", self.load_balancer_port)
            .field("SSLCertificateId", self.ssl_certificate_id.as_ref())
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetLoadBalancerListenerSslCertificateResult {}

impl fmt::Display for SetLoadBalancerListenerSslCertificateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_listeners_by_port() {
        let request = DeleteLoadBalancerListenersRequest::new("web", vec![80, 443]);
        assert_eq!(request.load_balancer_ports(), [80, 443]);
        assert_eq!(
            request.to_string(),
            "{LoadBalancerName: web,LoadBalancerPorts: [80, 443]}"
        );
    }

    #[test]
    fn test_replace_certificate() {
        let request = SetLoadBalancerListenerSslCertificateRequest::new("web", 443, "cert-2");
        assert_eq!(request.ssl_certificate_id(), Some("cert-2"));
        assert_eq!(
            serde_json::to_value(&request).unwrap()["SSLCertificateId"],
            "cert-2"
        );
    }
}
