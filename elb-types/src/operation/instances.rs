//! Registering instances and reading their health.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display::ShapeWriter;
use crate::operation::ElbRequest;
use crate::types::{Instance, InstanceState};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RegisterInstancesWithLoadBalancerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    instances: Vec<Instance>,
}

impl RegisterInstancesWithLoadBalancerRequest {
    pub fn new(load_balancer_name: impl Into<String>, instances: Vec<Instance>) -> Self {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            instances,
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

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn set_instances(&mut self, instances: Option<Vec<Instance>>) {
        self.instances = instances.unwrap_or_default();
    }

    pub fn with_instances<I>(mut self, instances: I) -> Self
    where
        I: IntoIterator<Item = Instance>,
    {
        self.instances.extend(instances);
        self
    }
}

impl ElbRequest for RegisterInstancesWithLoadBalancerRequest {
    type Output = RegisterInstancesWithLoadBalancerResult;
    const ACTION: &'static str = "RegisterInstancesWithLoadBalancer";
}

impl fmt::Display for RegisterInstancesWithLoadBalancerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .list("Instances", &self.instances)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RegisterInstancesWithLoadBalancerResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    instances: Vec<Instance>,
}

impl RegisterInstancesWithLoadBalancerResult {
    /// Every instance registered after the call.
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn set_instances(&mut self, instances: Option<Vec<Instance>>) {
        self.instances = instances.unwrap_or_default();
    }

    pub fn with_instances<I>(mut self, instances: I) -> Self
    where
        I: IntoIterator<Item = Instance>,
    {
        self.instances.extend(instances);
        self
    }
}

impl fmt::Display for RegisterInstancesWithLoadBalancerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .list("Instances", &self.instances)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeregisterInstancesFromLoadBalancerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    instances: Vec<Instance>,
}

impl DeregisterInstancesFromLoadBalancerRequest {
    pub fn new(load_balancer_name: impl Into<String>, instances: Vec<Instance>) -> Self {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            instances,
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

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn set_instances(&mut self, instances: Option<Vec<Instance>>) {
        self.instances = instances.unwrap_or_default();
    }

    pub fn with_instances<I>(mut self, instances: I) -> Self
    where
        I: IntoIterator<Item = Instance>,
    {
        self.instances.extend(instances);
        self
    }
}

impl ElbRequest for DeregisterInstancesFromLoadBalancerRequest {
    type Output = DeregisterInstancesFromLoadBalancerResult;
    const ACTION: &'static str = "DeregisterInstancesFromLoadBalancer";
}

impl fmt::Display for DeregisterInstancesFromLoadBalancerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .list("Instances", &self.instances)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeregisterInstancesFromLoadBalancerResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    instances: Vec<Instance>,
}

impl DeregisterInstancesFromLoadBalancerResult {
    /// The instances still registered after the call.
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn set_instances(&mut self, instances: Option<Vec<Instance>>) {
        self.instances = instances.unwrap_or_default();
    }

    pub fn with_instances<I>(mut self, instances: I) -> Self
    where
        I: IntoIterator<Item = Instance>,
    {
        self.instances.extend(instances);
        self
    }
}

impl fmt::Display for DeregisterInstancesFromLoadBalancerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .list("Instances", &self.instances)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeInstanceHealthRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    instances: Vec<Instance>,
}

impl DescribeInstanceHealthRequest {
    pub fn new(load_balancer_name: impl Into<String>) -> Self {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            ..Default::default()
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

    /// Empty means every registered instance.
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn set_instances(&mut self, instances: Option<Vec<Instance>>) {
        self.instances = instances.unwrap_or_default();
    }

    pub fn with_instances<I>(mut self, instances: I) -> Self
    where
        I: IntoIterator<Item = Instance>,
    {
        self.instances.extend(instances);
        self
    }
}

impl ElbRequest for DescribeInstanceHealthRequest {
    type Output = DescribeInstanceHealthResult;
    const ACTION: &'static str = "DescribeInstanceHealth";
}

impl fmt::Display for DescribeInstanceHealthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .list("Instances", &self.instances)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeInstanceHealthResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    instance_states: Vec<InstanceState>,
}

impl DescribeInstanceHealthResult {
    pub fn instance_states(&self) -> &[InstanceState] {
        &self.instance_states
    }

    pub fn set_instance_states(&mut self, instance_states: Option<Vec<InstanceState>>) {
        self.instance_states = instance_states.unwrap_or_default();
    }

    pub fn with_instance_states<I>(mut self, instance_states: I) -> Self
    where
        I: IntoIterator<Item = InstanceState>,
    {
        self.instance_states.extend(instance_states);
        self
    }
}

impl fmt::Display for DescribeInstanceHealthResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .list("InstanceStates", &self.instance_states)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_instances() {
        let request = RegisterInstancesWithLoadBalancerRequest::new(
            "web",
            vec![Instance::new("i-1"), Instance::new("i-2")],
        );
        assert_eq!(request.instances().len(), 2);
        assert_eq!(
            request,
            RegisterInstancesWithLoadBalancerRequest::default()
                .with_load_balancer_name("web")
                .with_instances([Instance::new("i-1")])
                .with_instances([Instance::new("i-2")])
        );
    }

    #[test]
    fn test_instance_health_result() {
        let result: DescribeInstanceHealthResult = serde_json::from_str(
            r#"{"InstanceStates": [{"InstanceId": "i-1", "State": "OutOfService",
                "ReasonCode": "Instance", "Description": "Instance has failed at least the UnhealthyThreshold number of health checks consecutively."}]}"#,
        )
        .unwrap();
        let state = &result.instance_states()[0];
        assert_eq!(state.state(), Some("OutOfService"));
        assert_eq!(state.reason_code(), Some("Instance"));
        assert!(DescribeInstanceHealthRequest::new("web").instances().is_empty());
    }
}
