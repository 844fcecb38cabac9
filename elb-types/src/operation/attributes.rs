use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display::ShapeWriter;
use crate::operation::ElbRequest;
use crate::types::LoadBalancerAttributes;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeLoadBalancerAttributesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
}

impl DescribeLoadBalancerAttributesRequest {
    pub fn new(load_balancer_name: impl Into<String>) -> Self {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
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
}

impl ElbRequest for DescribeLoadBalancerAttributesRequest {
    type Output = DescribeLoadBalancerAttributesResult;
    const ACTION: &'static str = "DescribeLoadBalancerAttributes";
}

impl fmt::Display for DescribeLoadBalancerAttributesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeLoadBalancerAttributesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_attributes: Option<LoadBalancerAttributes>,
}

impl DescribeLoadBalancerAttributesResult {
    pub fn load_balancer_attributes(&self) -> Option<&LoadBalancerAttributes> {
        self.load_balancer_attributes.as_ref()
    }

    pub fn set_load_balancer_attributes(
        &mut self,
        load_balancer_attributes: Option<LoadBalancerAttributes>,
    ) {
        self.load_balancer_attributes = load_balancer_attributes;
    }

    pub fn with_load_balancer_attributes(
        mut self,
        load_balancer_attributes: LoadBalancerAttributes,
    ) -> Self {
        self.load_balancer_attributes = Some(load_balancer_attributes);
        self
    }
}

impl fmt::Display for DescribeLoadBalancerAttributesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerAttributes", self.load_balancer_attributes.as_ref())
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModifyLoadBalancerAttributesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_attributes: Option<LoadBalancerAttributes>,
}

impl ModifyLoadBalancerAttributesRequest {
    pub fn new(
        load_balancer_name: impl Into<String>,
        load_balancer_attributes: LoadBalancerAttributes,
    ) -> Self {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            load_balancer_attributes: Some(load_balancer_attributes),
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

    /// Only the attributes that are set are modified.
    pub fn load_balancer_attributes(&self) -> Option<&LoadBalancerAttributes> {
        self.load_balancer_attributes.as_ref()
    }

    pub fn set_load_balancer_attributes(
        &mut self,
        load_balancer_attributes: Option<LoadBalancerAttributes>,
    ) {
        self.load_balancer_attributes = load_balancer_attributes;
    }

    pub fn with_load_balancer_attributes(
        mut self,
        load_balancer_attributes: LoadBalancerAttributes,
    ) -> Self {
        self.load_balancer_attributes = Some(load_balancer_attributes);
        self
    }
}

impl ElbRequest for ModifyLoadBalancerAttributesRequest {
    type Output = ModifyLoadBalancerAttributesResult;
    const ACTION: &'static str = "ModifyLoadBalancerAttributes";
}

impl fmt::Display for ModifyLoadBalancerAttributesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .field("LoadBalancerAttributes", self.load_balancer_attributes.as_ref())
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModifyLoadBalancerAttributesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_attributes: Option<LoadBalancerAttributes>,
}

impl ModifyLoadBalancerAttributesResult {
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

    pub fn load_balancer_attributes(&self) -> Option<&LoadBalancerAttributes> {
        self.load_balancer_attributes.as_ref()
    }

    pub fn set_load_balancer_attributes(
        &mut self,
        load_balancer_attributes: Option<LoadBalancerAttributes>,
    ) {
        self.load_balancer_attributes = load_balancer_attributes;
    }

    pub fn with_load_balancer_attributes(
        mut self,
        load_balancer_attributes: LoadBalancerAttributes,
    ) -> Self {
        self.load_balancer_attributes = Some(load_balancer_attributes);
        self
    }
}

impl fmt::Display for ModifyLoadBalancerAttributesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .field("LoadBalancerAttributes", self.load_balancer_attributes.as_ref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConnectionDraining, ConnectionSettings};

    #[test]
    fn test_modify_only_carries_set_attributes() {
        let request = ModifyLoadBalancerAttributesRequest::new(
            "web",
            LoadBalancerAttributes::default()
                .with_connection_settings(ConnectionSettings::new(120))
                .with_connection_draining(
                    ConnectionDraining::default()
                        .with_enabled(true)
                        .with_timeout(300),
                ),
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "LoadBalancerName": "web",
                "LoadBalancerAttributes": {
                    "ConnectionDraining": {"Enabled": true, "Timeout": 300},
                    "ConnectionSettings": {"IdleTimeout": 120}
                }
            })
        );
    }
}
