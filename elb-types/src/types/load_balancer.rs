//! The description of a load balancer, as returned by DescribeLoadBalancers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::display::ShapeWriter;
use crate::types::{
    BackendServerDescription, HealthCheck, Instance, ListenerDescription, Policies,
};

/// A read-only snapshot of one load balancer.
///
/// Everything the service reports about a load balancer lives here: its
/// listeners, the policies declared on it, where it is placed (zones, subnets,
/// VPC) and which instances are registered with it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LoadBalancerDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(rename = "DNSName", skip_serializing_if = "Option::is_none")]
    dns_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    canonical_hosted_zone_name: Option<String>,
    #[serde(rename = "CanonicalHostedZoneNameID", skip_serializing_if = "Option::is_none")]
    canonical_hosted_zone_name_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    listener_descriptions: Vec<ListenerDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    policies: Option<Policies>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    backend_server_descriptions: Vec<BackendServerDescription>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    availability_zones: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    subnets: Vec<String>,
    #[serde(rename = "VPCId", skip_serializing_if = "Option::is_none")]
    vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    instances: Vec<Instance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    health_check: Option<HealthCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_security_group: Option<SourceSecurityGroup>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    security_groups: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scheme: Option<String>,
}

impl LoadBalancerDescription {
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

    /// The DNS name of the load balancer.
    pub fn dns_name(&self) -> Option<&str> {
        self.dns_name.as_deref()
    }

    pub fn set_dns_name(&mut self, dns_name: Option<String>) {
        self.dns_name = dns_name;
    }

    pub fn with_dns_name(mut self, dns_name: impl Into<String>) -> Self {
        self.dns_name = Some(dns_name.into());
        self
    }

    /// The DNS name of the hosted zone the load balancer is published in.
    pub fn canonical_hosted_zone_name(&self) -> Option<&str> {
        self.canonical_hosted_zone_name.as_deref()
    }

    pub fn set_canonical_hosted_zone_name(&mut self, canonical_hosted_zone_name: Option<String>) {
        self.canonical_hosted_zone_name = canonical_hosted_zone_name;
    }

    pub fn with_canonical_hosted_zone_name(
        mut self,
        canonical_hosted_zone_name: impl Into<String>,
    ) -> Self {
        self.canonical_hosted_zone_name = Some(canonical_hosted_zone_name.into());
        self
    }

    /// The ID of that hosted zone.
    pub fn canonical_hosted_zone_name_id(&self) -> Option<&str> {
        self.canonical_hosted_zone_name_id.as_deref()
    }

    pub fn set_canonical_hosted_zone_name_id(
        &mut self,
        canonical_hosted_zone_name_id: Option<String>,
    ) {
        self.canonical_hosted_zone_name_id = canonical_hosted_zone_name_id;
    }

    pub fn with_canonical_hosted_zone_name_id(
        mut self,
        canonical_hosted_zone_name_id: impl Into<String>,
    ) -> Self {
        self.canonical_hosted_zone_name_id = Some(canonical_hosted_zone_name_id.into());
        self
    }

    pub fn listener_descriptions(&self) -> &[ListenerDescription] {
        &self.listener_descriptions
    }

    pub fn set_listener_descriptions(
        &mut self,
        listener_descriptions: Option<Vec<ListenerDescription>>,
    ) {
        self.listener_descriptions = listener_descriptions.unwrap_or_default();
    }

    pub fn with_listener_descriptions<I>(mut self, listener_descriptions: I) -> Self
    where
        I: IntoIterator<Item = ListenerDescription>,
    {
        self.listener_descriptions.extend(listener_descriptions);
        self
    }

    /// The policies declared on the load balancer.
    pub fn policies(&self) -> Option<&Policies> {
        self.policies.as_ref()
    }

    pub fn set_policies(&mut self, policies: Option<Policies>) {
        self.policies = policies;
    }

    pub fn with_policies(mut self, policies: Policies) -> Self {
        self.policies = Some(policies);
        self
    }

    pub fn backend_server_descriptions(&self) -> &[BackendServerDescription] {
        &self.backend_server_descriptions
    }

    pub fn set_backend_server_descriptions(
        &mut self,
        backend_server_descriptions: Option<Vec<BackendServerDescription>>,
    ) {
        self.backend_server_descriptions = backend_server_descriptions.unwrap_or_default();
    }

    pub fn with_backend_server_descriptions<I>(mut self, backend_server_descriptions: I) -> Self
    where
        I: IntoIterator<Item = BackendServerDescription>,
    {
        self.backend_server_descriptions.extend(backend_server_descriptions);
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

    /// The IDs of the subnets, for a load balancer in a VPC.
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

    /// The ID of the VPC, unset for a load balancer outside a VPC.
    pub fn vpc_id(&self) -> Option<&str> {
        self.vpc_id.as_deref()
    }

    pub fn set_vpc_id(&mut self, vpc_id: Option<String>) {
        self.vpc_id = vpc_id;
    }

    pub fn with_vpc_id(mut self, vpc_id: impl Into<String>) -> Self {
        self.vpc_id = Some(vpc_id.into());
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

    /// The security group back-end instances can use to only accept traffic
    /// from the load balancer.
    pub fn source_security_group(&self) -> Option<&SourceSecurityGroup> {
        self.source_security_group.as_ref()
    }

    pub fn set_source_security_group(
        &mut self,
        source_security_group: Option<SourceSecurityGroup>,
    ) {
        self.source_security_group = source_security_group;
    }

    pub fn with_source_security_group(
        mut self,
        source_security_group: SourceSecurityGroup,
    ) -> Self {
        self.source_security_group = Some(source_security_group);
        self
    }

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

    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        self.created_time
    }

    pub fn set_created_time(&mut self, created_time: Option<DateTime<Utc>>) {
        self.created_time = created_time;
    }

    pub fn with_created_time(mut self, created_time: DateTime<Utc>) -> Self {
        self.created_time = Some(created_time);
        self
    }

    /// `internet-facing` or `internal`.
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn set_scheme(&mut self, scheme: Option<String>) {
        self.scheme = scheme;
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }
}

impl LoadBalancerDescription {
    /// Front-end ports of the listeners, in declaration order. Listeners
    /// without a port are skipped.
    pub fn listener_ports(&self) -> Vec<i32> {
        self.listener_descriptions
            .iter()
            .filter_map(|d| d.listener().and_then(|l| l.load_balancer_port()))
            .collect()
    }

    /// Names of every policy declared on the load balancer: application
    /// cookie policies first, then load balancer cookie policies, then the
    /// others.
    pub fn policy_names(&self) -> Vec<&str> {
        let Some(policies) = &self.policies else {
            return vec![];
        };
        policies
            .app_cookie_stickiness_policies()
            .iter()
            .filter_map(|p| p.policy_name())
            .chain(
                policies
                    .lb_cookie_stickiness_policies()
                    .iter()
                    .filter_map(|p| p.policy_name()),
            )
            .chain(policies.other_policies().iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for LoadBalancerDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .field("DNSName", self.dns_name.as_ref())
            .field("CanonicalHostedZoneName", self.canonical_hosted_zone_name.as_ref())
            .field("CanonicalHostedZoneNameID", self.canonical_hosted_zone_name_id.as_ref())
            .list("ListenerDescriptions", &self.listener_descriptions)
            .field("Policies", self.policies.as_ref())
            .list("BackendServerDescriptions", &self.backend_server_descriptions)
            .list("AvailabilityZones", &self.availability_zones)
            .list("Subnets", &self.subnets)
            .field("VPCId", self.vpc_id.as_ref())
            .list("Instances", &self.instances)
            .field("HealthCheck", self.health_check.as_ref())
            .field("SourceSecurityGroup", self.source_security_group.as_ref())
            .list("SecurityGroups", &self.security_groups)
            .field("CreatedTime", self.created_time)
            .field("Scheme", self.scheme.as_ref())
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SourceSecurityGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    owner_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    group_name: Option<String>,
}

impl SourceSecurityGroup {
    pub fn owner_alias(&self) -> Option<&str> {
        self.owner_alias.as_deref()
    }

    pub fn set_owner_alias(&mut self, owner_alias: Option<String>) {
        self.owner_alias = owner_alias;
    }

    pub fn with_owner_alias(mut self, owner_alias: impl Into<String>) -> Self {
        self.owner_alias = Some(owner_alias.into());
        self
    }

    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    pub fn set_group_name(&mut self, group_name: Option<String>) {
        self.group_name = group_name;
    }

    pub fn with_group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }
}

impl fmt::Display for SourceSecurityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("OwnerAlias", self.owner_alias.as_ref())
            .field("GroupName", self.group_name.as_ref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AppCookieStickinessPolicy, LbCookieStickinessPolicy, Listener};

    fn load_balancer() -> LoadBalancerDescription {
        LoadBalancerDescription::default()
            .with_load_balancer_name("web")
            .with_listener_descriptions([
                ListenerDescription::default().with_listener(Listener::new("HTTP", 80, 8080)),
                ListenerDescription::default().with_policy_names(["orphan"]),
                ListenerDescription::default().with_listener(Listener::new("HTTPS", 443, 8080)),
            ])
            .with_policies(
                Policies::default()
                    .with_other_policies(["proxy-protocol"])
                    .with_lb_cookie_stickiness_policies([LbCookieStickinessPolicy::new(
                        "lb-sticky",
                        60,
                    )])
                    .with_app_cookie_stickiness_policies([AppCookieStickinessPolicy::new(
                        "app-sticky",
                        "SESSION",
                    )]),
            )
    }

    #[test]
    fn test_listener_ports_skip_listeners_without_port() {
        assert_eq!(load_balancer().listener_ports(), vec![80, 443]);
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(
            load_balancer().policy_names(),
            vec!["app-sticky", "lb-sticky", "proxy-protocol"]
        );
        assert!(LoadBalancerDescription::default().policy_names().is_empty());
    }

    #[test]
    fn test_nested_members() {
        let lb = LoadBalancerDescription::default()
            .with_health_check(HealthCheck::new("TCP:22", 30, 5, 2, 2))
            .with_instances([Instance::new("i-1"), Instance::new("i-2")])
            .with_source_security_group(
                SourceSecurityGroup::default()
                    .with_owner_alias("amazon-elb")
                    .with_group_name("amazon-elb-sg"),
            );
        assert_eq!(lb.health_check().and_then(|h| h.interval()), Some(30));
        assert_eq!(lb.instances().len(), 2);
        assert_eq!(
            lb.to_string(),
            "{Instances: [{InstanceId: i-1}, {InstanceId: i-2}],\
             HealthCheck: {Target: TCP:22,Interval: 30,Timeout: 5,UnhealthyThreshold: 2,HealthyThreshold: 2},\
             SourceSecurityGroup: {OwnerAlias: amazon-elb,GroupName: amazon-elb-sg}}"
        );
    }

    #[test]
    fn test_created_time_round_trips_through_json() {
        let created = DateTime::parse_from_rfc3339("2021-03-04T05:06:07.080Z")
            .unwrap()
            .with_timezone(&Utc);
        let lb = LoadBalancerDescription::default().with_created_time(created);
        let json = serde_json::to_string(&lb).unwrap();
        let back: LoadBalancerDescription = serde_json::from_str(&json).unwrap();
        assert_eq!(back.created_time(), Some(created));
    }
}
