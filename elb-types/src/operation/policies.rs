//! Creating, deleting, describing and assigning policies.
//!
//! A policy is created on a load balancer first and then enabled on a
//! listener (by front-end port) or on a back-end server (by instance port).
//! Setting the policies of a listener or back-end server replaces the whole
//! set; an empty list removes them all.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display::ShapeWriter;
use crate::operation::ElbRequest;
use crate::types::{PolicyAttribute, PolicyDescription, PolicyTypeDescription};

/// Creates a stickiness policy following the lifetime of an application cookie.
///
/// Only usable with HTTP and HTTPS listeners.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateAppCookieStickinessPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cookie_name: Option<String>,
}

impl CreateAppCookieStickinessPolicyRequest {
    pub fn new(
        load_balancer_name: impl Into<String>,
        policy_name: impl Into<String>,
        cookie_name: impl Into<String>,
    ) -> Self {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            policy_name: Some(policy_name.into()),
            cookie_name: Some(cookie_name.into()),
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

    pub fn policy_name(&self) -> Option<&str> {
        self.policy_name.as_deref()
    }

    pub fn set_policy_name(&mut self, policy_name: Option<String>) {
        self.policy_name = policy_name;
    }

    pub fn with_policy_name(mut self, policy_name: impl Into<String>) -> Self {
        self.policy_name = Some(policy_name.into());
        self
    }

    pub fn cookie_name(&self) -> Option<&str> {
        self.cookie_name.as_deref()
    }

    pub fn set_cookie_name(&mut self, cookie_name: Option<String>) {
        self.cookie_name = cookie_name;
    }

    pub fn with_cookie_name(mut self, cookie_name: impl Into<String>) -> Self {
        self.cookie_name = Some(cookie_name.into());
        self
    }
}

impl ElbRequest for CreateAppCookieStickinessPolicyRequest {
    type Output = CreateAppCookieStickinessPolicyResult;
    const ACTION: &'static str = "CreateAppCookieStickinessPolicy";
}

impl fmt::Display for CreateAppCookieStickinessPolicyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .field("PolicyName", self.policy_name.as_ref())
            .field("CookieName", self.cookie_name.as_ref())
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateAppCookieStickinessPolicyResult {}

impl fmt::Display for CreateAppCookieStickinessPolicyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f).finish()
    }
}

/// Creates a stickiness policy with a cookie generated by the load balancer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateLbCookieStickinessPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cookie_expiration_period: Option<i64>,
}

impl CreateLbCookieStickinessPolicyRequest {
    pub fn new(load_balancer_name: impl Into<String>, policy_name: impl Into<String>) -> Self {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            policy_name: Some(policy_name.into()),
            cookie_expiration_period: None,
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

    pub fn policy_name(&self) -> Option<&str> {
        self.policy_name.as_deref()
    }

    pub fn set_policy_name(&mut self, policy_name: Option<String>) {
        self.policy_name = policy_name;
    }

    pub fn with_policy_name(mut self, policy_name: impl Into<String>) -> Self {
        self.policy_name = Some(policy_name.into());
        self
    }

    /// Seconds the cookie is valid. Unset means the browser session.
    pub fn cookie_expiration_period(&self) -> Option<i64> {
        self.cookie_expiration_period
    }

    pub fn set_cookie_expiration_period(&mut self, cookie_expiration_period: Option<i64>) {
        self.cookie_expiration_period = cookie_expiration_period;
    }

    pub fn with_cookie_expiration_period(mut self, cookie_expiration_period: i64) -> Self {
        self.cookie_expiration_period = Some(cookie_expiration_period);
        self
    }
}

impl ElbRequest for CreateLbCookieStickinessPolicyRequest {
    type Output = CreateLbCookieStickinessPolicyResult;
    const ACTION: &'static str = "CreateLBCookieStickinessPolicy";
}

impl fmt::Display for CreateLbCookieStickinessPolicyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .field("PolicyName", self.policy_name.as_ref())
            .field("CookieExpirationPeriod", self.cookie_expiration_period)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateLbCookieStickinessPolicyResult {}

impl fmt::Display for CreateLbCookieStickinessPolicyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f).finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateLoadBalancerPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    policy_type_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    policy_attributes: Vec<PolicyAttribute>,
}

impl CreateLoadBalancerPolicyRequest {
    pub fn new(
        load_balancer_name: impl Into<String>,
        policy_name: impl Into<String>,
        policy_type_name: impl Into<String>,
    ) -> Self {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            policy_name: Some(policy_name.into()),
            policy_type_name: Some(policy_type_name.into()),
            policy_attributes: vec![],
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

    pub fn policy_name(&self) -> Option<&str> {
        self.policy_name.as_deref()
    }

    pub fn set_policy_name(&mut self, policy_name: Option<String>) {
        self.policy_name = policy_name;
    }

    pub fn with_policy_name(mut self, policy_name: impl Into<String>) -> Self {
        self.policy_name = Some(policy_name.into());
        self
    }

    /// One of the types returned by DescribeLoadBalancerPolicyTypes.
    pub fn policy_type_name(&self) -> Option<&str> {
        self.policy_type_name.as_deref()
    }

    pub fn set_policy_type_name(&mut self, policy_type_name: Option<String>) {
        self.policy_type_name = policy_type_name;
    }

    pub fn with_policy_type_name(mut self, policy_type_name: impl Into<String>) -> Self {
        self.policy_type_name = Some(policy_type_name.into());
        self
    }

    pub fn policy_attributes(&self) -> &[PolicyAttribute] {
        &self.policy_attributes
    }

    pub fn set_policy_attributes(&mut self, policy_attributes: Option<Vec<PolicyAttribute>>) {
        self.policy_attributes = policy_attributes.unwrap_or_default();
    }

    pub fn with_policy_attributes<I>(mut self, policy_attributes: I) -> Self
    where
        I: IntoIterator<Item = PolicyAttribute>,
    {
        self.policy_attributes.extend(policy_attributes);
        self
    }
}

impl ElbRequest for CreateLoadBalancerPolicyRequest {
    type Output = CreateLoadBalancerPolicyResult;
    const ACTION: &'static str = "CreateLoadBalancerPolicy";
}

impl fmt::Display for CreateLoadBalancerPolicyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .field("PolicyName", self.policy_name.as_ref())
            .field("PolicyTypeName", self.policy_type_name.as_ref())
            .list("PolicyAttributes", &self.policy_attributes)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateLoadBalancerPolicyResult {}

impl fmt::Display for CreateLoadBalancerPolicyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f).finish()
    }
}

/// Deletes a policy. The policy must not be enabled on any listener.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteLoadBalancerPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    policy_name: Option<String>,
}

impl DeleteLoadBalancerPolicyRequest {
    pub fn new(load_balancer_name: impl Into<String>, policy_name: impl Into<String>) -> Self {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            policy_name: Some(policy_name.into()),
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

    pub fn policy_name(&self) -> Option<&str> {
        self.policy_name.as_deref()
    }

    pub fn set_policy_name(&mut self, policy_name: Option<String>) {
        self.policy_name = policy_name;
    }

    pub fn with_policy_name(mut self, policy_name: impl Into<String>) -> Self {
        self.policy_name = Some(policy_name.into());
        self
    }
}

impl ElbRequest for DeleteLoadBalancerPolicyRequest {
    type Output = DeleteLoadBalancerPolicyResult;
    const ACTION: &'static str = "DeleteLoadBalancerPolicy";
}

impl fmt::Display for DeleteLoadBalancerPolicyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .field("PolicyName", self.policy_name.as_ref())
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeleteLoadBalancerPolicyResult {}

impl fmt::Display for DeleteLoadBalancerPolicyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f).finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeLoadBalancerPoliciesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    policy_names: Vec<String>,
}

impl DescribeLoadBalancerPoliciesRequest {
    /// Without a name the sample policies of the service are described.
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

impl ElbRequest for DescribeLoadBalancerPoliciesRequest {
    type Output = DescribeLoadBalancerPoliciesResult;
    const ACTION: &'static str = "DescribeLoadBalancerPolicies";
}

impl fmt::Display for DescribeLoadBalancerPoliciesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .list("PolicyNames", &self.policy_names)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeLoadBalancerPoliciesResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    policy_descriptions: Vec<PolicyDescription>,
}

impl DescribeLoadBalancerPoliciesResult {
    pub fn policy_descriptions(&self) -> &[PolicyDescription] {
        &self.policy_descriptions
    }

    pub fn set_policy_descriptions(&mut self, policy_descriptions: Option<Vec<PolicyDescription>>) {
        self.policy_descriptions = policy_descriptions.unwrap_or_default();
    }

    pub fn with_policy_descriptions<I>(mut self, policy_descriptions: I) -> Self
    where
        I: IntoIterator<Item = PolicyDescription>,
    {
        self.policy_descriptions.extend(policy_descriptions);
        self
    }
}

impl fmt::Display for DescribeLoadBalancerPoliciesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .list("PolicyDescriptions", &self.policy_descriptions)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeLoadBalancerPolicyTypesRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    policy_type_names: Vec<String>,
}

impl DescribeLoadBalancerPolicyTypesRequest {
    /// Empty means all policy types.
    pub fn policy_type_names(&self) -> &[String] {
        &self.policy_type_names
    }

    pub fn set_policy_type_names(&mut self, policy_type_names: Option<Vec<String>>) {
        self.policy_type_names = policy_type_names.unwrap_or_default();
    }

    pub fn with_policy_type_names<I, S>(mut self, policy_type_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy_type_names.extend(policy_type_names.into_iter().map(Into::into));
        self
    }
}

impl ElbRequest for DescribeLoadBalancerPolicyTypesRequest {
    type Output = DescribeLoadBalancerPolicyTypesResult;
    const ACTION: &'static str = "DescribeLoadBalancerPolicyTypes";
}

impl fmt::Display for DescribeLoadBalancerPolicyTypesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .list("PolicyTypeNames", &self.policy_type_names)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeLoadBalancerPolicyTypesResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    policy_type_descriptions: Vec<PolicyTypeDescription>,
}

impl DescribeLoadBalancerPolicyTypesResult {
    pub fn policy_type_descriptions(&self) -> &[PolicyTypeDescription] {
        &self.policy_type_descriptions
    }

    pub fn set_policy_type_descriptions(
        &mut self,
        policy_type_descriptions: Option<Vec<PolicyTypeDescription>>,
    ) {
        self.policy_type_descriptions = policy_type_descriptions.unwrap_or_default();
    }

    pub fn with_policy_type_descriptions<I>(mut self, policy_type_descriptions: I) -> Self
    where
        I: IntoIterator<Item = PolicyTypeDescription>,
    {
        self.policy_type_descriptions.extend(policy_type_descriptions);
        self
    }
}

impl fmt::Display for DescribeLoadBalancerPolicyTypesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .list("PolicyTypeDescriptions", &self.policy_type_descriptions)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SetLoadBalancerPoliciesForBackendServerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_port: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    policy_names: Vec<String>,
}

impl SetLoadBalancerPoliciesForBackendServerRequest {
    pub fn new<I, S>(
        load_balancer_name: impl Into<String>,
        instance_port: i32,
        policy_names: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            instance_port: Some(instance_port),
            policy_names: policy_names.into_iter().map(Into::into).collect(),
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

impl ElbRequest for SetLoadBalancerPoliciesForBackendServerRequest {
    type Output = SetLoadBalancerPoliciesForBackendServerResult;
    const ACTION: &'static str = "SetLoadBalancerPoliciesForBackendServer";
}

impl fmt::Display for SetLoadBalancerPoliciesForBackendServerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .field("InstancePort", self.instance_port)
            .list("PolicyNames", &self.policy_names)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetLoadBalancerPoliciesForBackendServerResult {}

impl fmt::Display for SetLoadBalancerPoliciesForBackendServerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f).finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SetLoadBalancerPoliciesOfListenerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_port: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    policy_names: Vec<String>,
}

impl SetLoadBalancerPoliciesOfListenerRequest {
    pub fn new<I, S>(
        load_balancer_name: impl Into<String>,
        load_balancer_port: i32,
        policy_names: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            load_balancer_port: Some(load_balancer_port),
            policy_names: policy_names.into_iter().map(Into::into).collect(),
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

impl ElbRequest for SetLoadBalancerPoliciesOfListenerRequest {
    type Output = SetLoadBalancerPoliciesOfListenerResult;
    const ACTION: &'static str = "SetLoadBalancerPoliciesOfListener";
}

impl fmt::Display for SetLoadBalancerPoliciesOfListenerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .field("LoadBalancerPort", self.load_balancer_port)
            .list("PolicyNames", &self.policy_names)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetLoadBalancerPoliciesOfListenerResult {}

impl fmt::Display for SetLoadBalancerPoliciesOfListenerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_policy_with_attributes() {
        let request =
            CreateLoadBalancerPolicyRequest::new("web", "proxy", "ProxyProtocolPolicyType")
                .with_policy_attributes([PolicyAttribute::new("ProxyProtocol", "true")]);
        assert_eq!(request.policy_type_name(), Some("ProxyProtocolPolicyType"));
        assert_eq!(
            request.policy_attributes()[0].attribute_value(),
            Some("true")
        );
    }

    #[test]
    fn test_lb_cookie_policy_without_expiration() {
        let request = CreateLbCookieStickinessPolicyRequest::new("web", "sticky");
        assert_eq!(request.cookie_expiration_period(), None);
        assert_eq!(
            request.to_string(),
            "{LoadBalancerName: web,PolicyName: sticky}"
        );
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("CookieExpirationPeriod").is_none());
    }

    #[test]
    fn test_empty_policy_list_removes_all() {
        let request =
            SetLoadBalancerPoliciesOfListenerRequest::new("web", 443, Vec::<String>::new());
        assert!(request.policy_names().is_empty());
        assert_eq!(request.load_balancer_port(), Some(443));
        assert_ne!(
            request,
            SetLoadBalancerPoliciesOfListenerRequest::new("web", 443, ["sticky"])
        );
    }

    #[test]
    fn test_describe_policy_types_result() {
        let description = PolicyTypeDescription::default()
            .with_policy_type_name("ProxyProtocolPolicyType")
            .with_policy_attribute_type_descriptions([
                crate::types::PolicyAttributeTypeDescription::default()
                    .with_attribute_name("ProxyProtocol")
                    .with_attribute_type("Boolean")
                    .with_cardinality("ONE"),
            ]);
        let result =
            DescribeLoadBalancerPolicyTypesResult::default().with_policy_type_descriptions([description]);
        assert_eq!(
            result.policy_type_descriptions()[0].policy_attribute_type_descriptions()[0]
                .cardinality(),
            Some("ONE")
        );
    }
}
