//! Policies: named, typed configuration bundles attached to listeners or
//! back-end servers (cookie stickiness, proxy protocol, back-end
//! authentication, ...).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display::ShapeWriter;

/// The policies declared on a load balancer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Policies {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    app_cookie_stickiness_policies: Vec<AppCookieStickinessPolicy>,
    #[serde(rename = "LBCookieStickinessPolicies", skip_serializing_if = "Vec::is_empty")]
    lb_cookie_stickiness_policies: Vec<LbCookieStickinessPolicy>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    other_policies: Vec<String>,
}

impl Policies {
    pub fn app_cookie_stickiness_policies(&self) -> &[AppCookieStickinessPolicy] {
        &self.app_cookie_stickiness_policies
    }

    pub fn set_app_cookie_stickiness_policies(
        &mut self,
        app_cookie_stickiness_policies: Option<Vec<AppCookieStickinessPolicy>>,
    ) {
        self.app_cookie_stickiness_policies = app_cookie_stickiness_policies.unwrap_or_default();
    }

    pub fn with_app_cookie_stickiness_policies<I>(
        mut self,
        app_cookie_stickiness_policies: I,
    ) -> Self
    where
        I: IntoIterator<Item = AppCookieStickinessPolicy>,
    {
        self.app_cookie_stickiness_policies.extend(app_cookie_stickiness_policies);
        self
    }

    pub fn lb_cookie_stickiness_policies(&self) -> &[LbCookieStickinessPolicy] {
        &self.lb_cookie_stickiness_policies
    }

    pub fn set_lb_cookie_stickiness_policies(
        &mut self,
        lb_cookie_stickiness_policies: Option<Vec<LbCookieStickinessPolicy>>,
    ) {
        self.lb_cookie_stickiness_policies = lb_cookie_stickiness_policies.unwrap_or_default();
    }

    pub fn with_lb_cookie_stickiness_policies<I>(mut self, lb_cookie_stickiness_policies: I) -> Self
    where
        I: IntoIterator<Item = LbCookieStickinessPolicy>,
    {
        self.lb_cookie_stickiness_policies.extend(lb_cookie_stickiness_policies);
        self
    }

    /// Names of policies other than the stickiness policies.
    pub fn other_policies(&self) -> &[String] {
        &self.other_policies
    }

    pub fn set_other_policies(&mut self, other_policies: Option<Vec<String>>) {
        self.other_policies = other_policies.unwrap_or_default();
    }

    pub fn with_other_policies<I, S>(mut self, other_policies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.other_policies.extend(other_policies.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Policies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .list("AppCookieStickinessPolicies", &self.app_cookie_stickiness_policies)
            .list("LBCookieStickinessPolicies", &self.lb_cookie_stickiness_policies)
            .list("OtherPolicies", &self.other_policies)
            .finish()
    }
}

/// Stickiness that follows an application generated cookie.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AppCookieStickinessPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cookie_name: Option<String>,
}

impl AppCookieStickinessPolicy {
    pub fn new(policy_name: impl Into<String>, cookie_name: impl Into<String>) -> Self {
        Self {
            policy_name: Some(policy_name.into()),
            cookie_name: Some(cookie_name.into()),
        }
    }

    /// The mnemonic name of the policy, unique within the load balancer.
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

    /// The name of the application cookie used for stickiness.
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

impl fmt::Display for AppCookieStickinessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("PolicyName", self.policy_name.as_ref())
            .field("CookieName", self.cookie_name.as_ref())
            .finish()
    }
}

/// Stickiness driven by a cookie the load balancer issues itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LbCookieStickinessPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cookie_expiration_period: Option<i64>,
}

impl LbCookieStickinessPolicy {
    pub fn new(policy_name: impl Into<String>, cookie_expiration_period: i64) -> Self {
        Self {
            policy_name: Some(policy_name.into()),
            cookie_expiration_period: Some(cookie_expiration_period),
        }
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

    /// Seconds until the cookie expires. Unset means the cookie lives for
    /// the duration of the browser session.
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

impl fmt::Display for LbCookieStickinessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("PolicyName", self.policy_name.as_ref())
            .field("CookieExpirationPeriod", self.cookie_expiration_period)
            .finish()
    }
}

/// An attribute passed when creating a policy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PolicyAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute_value: Option<String>,
}

impl PolicyAttribute {
    pub fn new(attribute_name: impl Into<String>, attribute_value: impl Into<String>) -> Self {
        Self {
            attribute_name: Some(attribute_name.into()),
            attribute_value: Some(attribute_value.into()),
        }
    }

    pub fn attribute_name(&self) -> Option<&str> {
        self.attribute_name.as_deref()
    }

    pub fn set_attribute_name(&mut self, attribute_name: Option<String>) {
        self.attribute_name = attribute_name;
    }

    pub fn with_attribute_name(mut self, attribute_name: impl Into<String>) -> Self {
        self.attribute_name = Some(attribute_name.into());
        self
    }

    pub fn attribute_value(&self) -> Option<&str> {
        self.attribute_value.as_deref()
    }

    pub fn set_attribute_value(&mut self, attribute_value: Option<String>) {
        self.attribute_value = attribute_value;
    }

    pub fn with_attribute_value(mut self, attribute_value: impl Into<String>) -> Self {
        self.attribute_value = Some(attribute_value.into());
        self
    }
}

impl fmt::Display for PolicyAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("AttributeName", self.attribute_name.as_ref())
            .field("AttributeValue", self.attribute_value.as_ref())
            .finish()
    }
}

/// An attribute of a policy as the service describes it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PolicyAttributeDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute_value: Option<String>,
}

impl PolicyAttributeDescription {
    pub fn attribute_name(&self) -> Option<&str> {
        self.attribute_name.as_deref()
    }

    pub fn set_attribute_name(&mut self, attribute_name: Option<String>) {
        self.attribute_name = attribute_name;
    }

    pub fn with_attribute_name(mut self, attribute_name: impl Into<String>) -> Self {
        self.attribute_name = Some(attribute_name.into());
        self
    }

    pub fn attribute_value(&self) -> Option<&str> {
        self.attribute_value.as_deref()
    }

    pub fn set_attribute_value(&mut self, attribute_value: Option<String>) {
        self.attribute_value = attribute_value;
    }

    pub fn with_attribute_value(mut self, attribute_value: impl Into<String>) -> Self {
        self.attribute_value = Some(attribute_value.into());
        self
    }
}

impl fmt::Display for PolicyAttributeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("AttributeName", self.attribute_name.as_ref())
            .field("AttributeValue", self.attribute_value.as_ref())
            .finish()
    }
}

/// Describes one attribute a policy type accepts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PolicyAttributeTypeDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cardinality: Option<String>,
}

impl PolicyAttributeTypeDescription {
    pub fn attribute_name(&self) -> Option<&str> {
        self.attribute_name.as_deref()
    }

    pub fn set_attribute_name(&mut self, attribute_name: Option<String>) {
        self.attribute_name = attribute_name;
    }

    pub fn with_attribute_name(mut self, attribute_name: impl Into<String>) -> Self {
        self.attribute_name = Some(attribute_name.into());
        self
    }

    pub fn attribute_type(&self) -> Option<&str> {
        self.attribute_type.as_deref()
    }

    pub fn set_attribute_type(&mut self, attribute_type: Option<String>) {
        self.attribute_type = attribute_type;
    }

    pub fn with_attribute_type(mut self, attribute_type: impl Into<String>) -> Self {
        self.attribute_type = Some(attribute_type.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn set_default_value(&mut self, default_value: Option<String>) {
        self.default_value = default_value;
    }

    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// How many values the attribute takes: `ONE`, `ZERO_OR_ONE`,
    /// `ZERO_OR_MORE` or `ONE_OR_MORE`.
    pub fn cardinality(&self) -> Option<&str> {
        self.cardinality.as_deref()
    }

    pub fn set_cardinality(&mut self, cardinality: Option<String>) {
        self.cardinality = cardinality;
    }

    pub fn with_cardinality(mut self, cardinality: impl Into<String>) -> Self {
        self.cardinality = Some(cardinality.into());
        self
    }
}

impl fmt::Display for PolicyAttributeTypeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("AttributeName", self.attribute_name.as_ref())
            .field("AttributeType", self.attribute_type.as_ref())
            .field("Description", self.description.as_ref())
            .field("DefaultValue", self.default_value.as_ref())
            .field("Cardinality", self.cardinality.as_ref())
            .finish()
    }
}

/// A policy declared on a load balancer with its attribute values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PolicyDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    policy_type_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    policy_attribute_descriptions: Vec<PolicyAttributeDescription>,
}

impl PolicyDescription {
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

    pub fn policy_attribute_descriptions(&self) -> &[PolicyAttributeDescription] {
        &self.policy_attribute_descriptions
    }

    pub fn set_policy_attribute_descriptions(
        &mut self,
        policy_attribute_descriptions: Option<Vec<PolicyAttributeDescription>>,
    ) {
        self.policy_attribute_descriptions = policy_attribute_descriptions.unwrap_or_default();
    }

    pub fn with_policy_attribute_descriptions<I>(mut self, policy_attribute_descriptions: I) -> Self
    where
        I: IntoIterator<Item = PolicyAttributeDescription>,
    {
        self.policy_attribute_descriptions.extend(policy_attribute_descriptions);
        self
    }
}

impl fmt::Display for PolicyDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("PolicyName", self.policy_name.as_ref())
            .field("PolicyTypeName", self.policy_type_name.as_ref())
            .list("PolicyAttributeDescriptions", &self.policy_attribute_descriptions)
            .finish()
    }
}

/// A policy type and the attributes its policies take.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PolicyTypeDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    policy_type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    policy_attribute_type_descriptions: Vec<PolicyAttributeTypeDescription>,
}

impl PolicyTypeDescription {
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

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn policy_attribute_type_descriptions(&self) -> &[PolicyAttributeTypeDescription] {
        &self.policy_attribute_type_descriptions
    }

    pub fn set_policy_attribute_type_descriptions(
        &mut self,
        policy_attribute_type_descriptions: Option<Vec<PolicyAttributeTypeDescription>>,
    ) {
        self.policy_attribute_type_descriptions =
            policy_attribute_type_descriptions.unwrap_or_default();
    }

    pub fn with_policy_attribute_type_descriptions<I>(
        mut self,
        policy_attribute_type_descriptions: I,
    ) -> Self
    where
        I: IntoIterator<Item = PolicyAttributeTypeDescription>,
    {
        self.policy_attribute_type_descriptions.extend(policy_attribute_type_descriptions);
        self
    }
}

impl fmt::Display for PolicyTypeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("PolicyTypeName", self.policy_type_name.as_ref())
            .field("Description", self.description.as_ref())
            .list("PolicyAttributeTypeDescriptions", &self.policy_attribute_type_descriptions)
            .finish()
    }
}
