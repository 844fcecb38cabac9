//! Placement of a load balancer: security groups, subnets and availability
//! zones. Subnet operations apply to load balancers in a VPC, zone
//! operations to load balancers outside of one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display::ShapeWriter;
use crate::operation::ElbRequest;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApplySecurityGroupsToLoadBalancerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    security_groups: Vec<String>,
}

impl ApplySecurityGroupsToLoadBalancerRequest {
    pub fn new<I, S>(load_balancer_name: impl Into<String>, security_groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            security_groups: security_groups.into_iter().map(Into::into).collect(),
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

    /// Replaces the current security groups.
    pub fn security_groups(&self) -> &[String] {
        &self.security_groups
    }

    pub fn set_security_groups(&mut self, security_groups: Option<Vec<String>>) {
        self.security_groups = security_groups.unwrap_or_default();
    }

    pub fn with_security_groups<I, S>(mut self, security_groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.security_groups.extend(security_groups.into_iter().map(Into::into));
        self
    }
}

impl ElbRequest for ApplySecurityGroupsToLoadBalancerRequest {
    type Output = ApplySecurityGroupsToLoadBalancerResult;
    const ACTION: &'static str = "ApplySecurityGroupsToLoadBalancer";
}

impl fmt::Display for ApplySecurityGroupsToLoadBalancerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .list("SecurityGroups", &self.security_groups)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApplySecurityGroupsToLoadBalancerResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    security_groups: Vec<String>,
}

impl ApplySecurityGroupsToLoadBalancerResult {
    pub fn security_groups(&self) -> &[String] {
        &self.security_groups
    }

    pub fn set_security_groups(&mut self, security_groups: Option<Vec<String>>) {
        self.security_groups = security_groups.unwrap_or_default();
    }

    pub fn with_security_groups<I, S>(mut self, security_groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.security_groups.extend(security_groups.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for ApplySecurityGroupsToLoadBalancerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .list("SecurityGroups", &self.security_groups)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AttachLoadBalancerToSubnetsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    subnets: Vec<String>,
}

impl AttachLoadBalancerToSubnetsRequest {
    pub fn new<I, S>(load_balancer_name: impl Into<String>, subnets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            subnets: subnets.into_iter().map(Into::into).collect(),
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

    pub fn subnets(&self) -> &[String] {
        &self.subnets
    }

    pub fn set_subnets(&mut self, subnets: Option<Vec<String>>) {
        self.subnets = subnets.unwrap_or_default();
    }

    pub fn with_subnets<I, S>(mut self, subnets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subnets.extend(subnets.into_iter().map(Into::into));
        self
    }
}

impl ElbRequest for AttachLoadBalancerToSubnetsRequest {
    type Output = AttachLoadBalancerToSubnetsResult;
    const ACTION: &'static str = "AttachLoadBalancerToSubnets";
}

impl fmt::Display for AttachLoadBalancerToSubnetsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .list("Subnets", &self.subnets)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AttachLoadBalancerToSubnetsResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    subnets: Vec<String>,
}

impl AttachLoadBalancerToSubnetsResult {
    /// All subnets attached after the call.
    pub fn subnets(&self) -> &[String] {
        &self.subnets
    }

    pub fn set_subnets(&mut self, subnets: Option<Vec<String>>) {
        self.subnets = subnets.unwrap_or_default();
    }

    pub fn with_subnets<I, S>(mut self, subnets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subnets.extend(subnets.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for AttachLoadBalancerToSubnetsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .list("Subnets", &self.subnets)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DetachLoadBalancerFromSubnetsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    subnets: Vec<String>,
}

impl DetachLoadBalancerFromSubnetsRequest {
    pub fn new<I, S>(load_balancer_name: impl Into<String>, subnets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            subnets: subnets.into_iter().map(Into::into).collect(),
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

    pub fn subnets(&self) -> &[String] {
        &self.subnets
    }

    pub fn set_subnets(&mut self, subnets: Option<Vec<String>>) {
        self.subnets = subnets.unwrap_or_default();
    }

    pub fn with_subnets<I, S>(mut self, subnets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subnets.extend(subnets.into_iter().map(Into::into));
        self
    }
}

impl ElbRequest for DetachLoadBalancerFromSubnetsRequest {
    type Output = DetachLoadBalancerFromSubnetsResult;
    const ACTION: &'static str = "DetachLoadBalancerFromSubnets";
}

impl fmt::Display for DetachLoadBalancerFromSubnetsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .list("Subnets", &self.subnets)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DetachLoadBalancerFromSubnetsResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    subnets: Vec<String>,
}

impl DetachLoadBalancerFromSubnetsResult {
    /// The subnets still attached after the call.
    pub fn subnets(&self) -> &[String] {
        &self.subnets
    }

    pub fn set_subnets(&mut self, subnets: Option<Vec<String>>) {
        self.subnets = subnets.unwrap_or_default();
    }

    pub fn with_subnets<I, S>(mut self, subnets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subnets.extend(subnets.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for DetachLoadBalancerFromSubnetsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .list("Subnets", &self.subnets)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnableAvailabilityZonesForLoadBalancerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    availability_zones: Vec<String>,
}

impl EnableAvailabilityZonesForLoadBalancerRequest {
    pub fn new<I, S>(load_balancer_name: impl Into<String>, availability_zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            availability_zones: availability_zones.into_iter().map(Into::into).collect(),
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

    pub fn availability_zones(&self) -> &[String] {
        &self.availability_zones
    }

    pub fn set_availability_zones(&mut self, availability_zones: Option<Vec<String>>) {
        self.availability_zones = availability_zones.unwrap_or_default();
    }

    pub fn with_availability_zones<I, S>(mut self, availability_zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.availability_zones.extend(availability_zones.into_iter().map(Into::into));
        self
    }
}

impl ElbRequest for EnableAvailabilityZonesForLoadBalancerRequest {
    type Output = EnableAvailabilityZonesForLoadBalancerResult;
    const ACTION: &'static str = "EnableAvailabilityZonesForLoadBalancer";
}

impl fmt::Display for EnableAvailabilityZonesForLoadBalancerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .list("AvailabilityZones", &self.availability_zones)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnableAvailabilityZonesForLoadBalancerResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    availability_zones: Vec<String>,
}

impl EnableAvailabilityZonesForLoadBalancerResult {
    /// All zones the load balancer uses after the call.
    pub fn availability_zones(&self) -> &[String] {
        &self.availability_zones
    }

    pub fn set_availability_zones(&mut self, availability_zones: Option<Vec<String>>) {
        self.availability_zones = availability_zones.unwrap_or_default();
    }

    pub fn with_availability_zones<I, S>(mut self, availability_zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.availability_zones.extend(availability_zones.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for EnableAvailabilityZonesForLoadBalancerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .list("AvailabilityZones", &self.availability_zones)
            .finish()
    }
}

/// Removes zones from a load balancer. The last zone cannot be removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DisableAvailabilityZonesForLoadBalancerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    availability_zones: Vec<String>,
}

impl DisableAvailabilityZonesForLoadBalancerRequest {
    pub fn new<I, S>(load_balancer_name: impl Into<String>, availability_zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            availability_zones: availability_zones.into_iter().map(Into::into).collect(),
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

    pub fn availability_zones(&self) -> &[String] {
        &self.availability_zones
    }

    pub fn set_availability_zones(&mut self, availability_zones: Option<Vec<String>>) {
        self.availability_zones = availability_zones.unwrap_or_default();
    }

    pub fn with_availability_zones<I, S>(mut self, availability_zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.availability_zones.extend(availability_zones.into_iter().map(Into::into));
        self
    }
}

impl ElbRequest for DisableAvailabilityZonesForLoadBalancerRequest {
    type Output = DisableAvailabilityZonesForLoadBalancerResult;
    const ACTION: &'static str = "DisableAvailabilityZonesForLoadBalancer";
}

impl fmt::Display for DisableAvailabilityZonesForLoadBalancerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .list("AvailabilityZones", &self.availability_zones)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DisableAvailabilityZonesForLoadBalancerResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    availability_zones: Vec<String>,
}

impl DisableAvailabilityZonesForLoadBalancerResult {
    pub fn availability_zones(&self) -> &[String] {
        &self.availability_zones
    }

    pub fn set_availability_zones(&mut self, availability_zones: Option<Vec<String>>) {
        self.availability_zones = availability_zones.unwrap_or_default();
    }

    pub fn with_availability_zones<I, S>(mut self, availability_zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.availability_zones.extend(availability_zones.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for DisableAvailabilityZonesForLoadBalancerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .list("AvailabilityZones", &self.availability_zones)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subnet_requests() {
        let attach = AttachLoadBalancerToSubnetsRequest::new("web", ["subnet-1", "subnet-2"]);
        let detach = DetachLoadBalancerFromSubnetsRequest::new("web", ["subnet-1", "subnet-2"]);
        assert_eq!(attach.subnets(), detach.subnets());
        assert_eq!(
            attach.to_string(),
            "{LoadBalancerName: web,Subnets: [subnet-1, subnet-2]}"
        );
    }

    #[test]
    fn test_zone_result_set_and_clear() {
        let mut result = EnableAvailabilityZonesForLoadBalancerResult::default()
            .with_availability_zones(["us-east-1a"]);
        assert_eq!(result.availability_zones(), ["us-east-1a"]);
        result.set_availability_zones(None);
        assert_eq!(result, EnableAvailabilityZonesForLoadBalancerResult::default());
    }

    #[test]
    fn test_security_groups_replace() {
        let request = ApplySecurityGroupsToLoadBalancerRequest::new("web", ["sg-1"]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"LoadBalancerName": "web", "SecurityGroups": ["sg-1"]})
        );
    }
}
