//! Creating, deleting and describing load balancers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display::ShapeWriter;
use crate::operation::ElbRequest;
use crate::types::{Listener, LoadBalancerDescription, Tag};

/// Creates a load balancer. Either availability zones or subnets are given.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateLoadBalancerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    listeners: Vec<Listener>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    availability_zones: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    subnets: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    security_groups: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scheme: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<Tag>,
}

impl CreateLoadBalancerRequest {
    pub fn new<Z, S>(
        load_balancer_name: impl Into<String>,
        listeners: Vec<Listener>,
        availability_zones: Z,
    ) -> Self
    where
        Z: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            listeners,
            availability_zones: availability_zones.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Unique per region and account, at most 32 alphanumeric characters or
    /// hyphens, not starting or ending with a hyphen.
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

    /// Zones to place the load balancer in, when it is not in a VPC.
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

    /// One subnet per zone, when the load balancer is in a VPC.
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

    /// Pass `internal` for a load balancer only reachable inside its VPC.
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

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn set_tags(&mut self, tags: Option<Vec<Tag>>) {
        self.tags = tags.unwrap_or_default();
    }

    pub fn with_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = Tag>,
    {
        self.tags.extend(tags);
        self
    }
}

impl ElbRequest for CreateLoadBalancerRequest {
    type Output = CreateLoadBalancerResult;
    const ACTION: &'static str = "CreateLoadBalancer";
}

impl fmt::Display for CreateLoadBalancerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .list("Listeners", &self.listeners)
            .list("AvailabilityZones", &self.availability_zones)
            .list("Subnets", &self.subnets)
            .list("SecurityGroups", &self.security_groups)
            .field("Scheme", self.scheme.as_ref())
            .list("Tags", &self.tags)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateLoadBalancerResult {
    #[serde(rename = "DNSName", skip_serializing_if = "Option::is_none")]
    dns_name: Option<String>,
}

impl CreateLoadBalancerResult {
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
}

impl fmt::Display for CreateLoadBalancerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("DNSName", self.dns_name.as_ref())
            .finish()
    }
}

/// Deletes a load balancer. Deleting one that does not exist still succeeds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteLoadBalancerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
}

impl DeleteLoadBalancerRequest {
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

impl ElbRequest for DeleteLoadBalancerRequest {
    type Output = DeleteLoadBalancerResult;
    const ACTION: &'static str = "DeleteLoadBalancer";
}

impl fmt::Display for DeleteLoadBalancerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LoadBalancerName", self.load_balancer_name.as_ref())
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeleteLoadBalancerResult {}

impl fmt::Display for DeleteLoadBalancerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f).finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeLoadBalancersRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    load_balancer_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<i32>,
}

impl DescribeLoadBalancersRequest {
    /// Restricts the result to these load balancers. Empty means all.
    pub fn load_balancer_names(&self) -> &[String] {
        &self.load_balancer_names
    }

    pub fn set_load_balancer_names(&mut self, load_balancer_names: Option<Vec<String>>) {
        self.load_balancer_names = load_balancer_names.unwrap_or_default();
    }

    pub fn with_load_balancer_names<I, S>(mut self, load_balancer_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.load_balancer_names.extend(load_balancer_names.into_iter().map(Into::into));
        self
    }

    /// The marker returned by the previous page.
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }

    pub fn set_marker(&mut self, marker: Option<String>) {
        self.marker = marker;
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Results per page, 1 through 400.
    pub fn page_size(&self) -> Option<i32> {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: Option<i32>) {
        self.page_size = page_size;
    }

    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

impl ElbRequest for DescribeLoadBalancersRequest {
    type Output = DescribeLoadBalancersResult;
    const ACTION: &'static str = "DescribeLoadBalancers";
}

impl fmt::Display for DescribeLoadBalancersRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .list("LoadBalancerNames", &self.load_balancer_names)
            .field("Marker", self.marker.as_ref())
            .field("PageSize", self.page_size)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeLoadBalancersResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    load_balancer_descriptions: Vec<LoadBalancerDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_marker: Option<String>,
}

impl DescribeLoadBalancersResult {
    pub fn load_balancer_descriptions(&self) -> &[LoadBalancerDescription] {
        &self.load_balancer_descriptions
    }

    pub fn set_load_balancer_descriptions(
        &mut self,
        load_balancer_descriptions: Option<Vec<LoadBalancerDescription>>,
    ) {
        self.load_balancer_descriptions = load_balancer_descriptions.unwrap_or_default();
    }

    pub fn with_load_balancer_descriptions<I>(mut self, load_balancer_descriptions: I) -> Self
    where
        I: IntoIterator<Item = LoadBalancerDescription>,
    {
        self.load_balancer_descriptions.extend(load_balancer_descriptions);
        self
    }

    /// Set when more results are available.
    pub fn next_marker(&self) -> Option<&str> {
        self.next_marker.as_deref()
    }

    pub fn set_next_marker(&mut self, next_marker: Option<String>) {
        self.next_marker = next_marker;
    }

    pub fn with_next_marker(mut self, next_marker: impl Into<String>) -> Self {
        self.next_marker = Some(next_marker.into());
        self
    }
}

impl fmt::Display for DescribeLoadBalancersResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .list("LoadBalancerDescriptions", &self.load_balancer_descriptions)
            .field("NextMarker", self.next_marker.as_ref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HealthCheck;

    // Trimmed output of `aws elb describe-load-balancers`.
    const DESCRIBE_OUTPUT: &str = r#"{
        "LoadBalancerDescriptions": [
            {
                "LoadBalancerName": "web",
                "DNSName": "web-1234567890.us-east-1.elb.amazonaws.com",
                "CanonicalHostedZoneName": "web-1234567890.us-east-1.elb.amazonaws.com",
                "CanonicalHostedZoneNameID": "Z35SXDOTRQ7X7K",
                "ListenerDescriptions": [
                    {
                        "Listener": {
                            "Protocol": "HTTPS",
                            "LoadBalancerPort": 443,
                            "InstanceProtocol": "HTTP",
                            "InstancePort": 80,
                            "SSLCertificateId": "arn:aws:iam::123456789012:server-certificate/web"
                        },
                        "PolicyNames": ["ELBSecurityPolicy-2016-08"]
                    }
                ],
                "Policies": {
                    "AppCookieStickinessPolicies": [],
                    "LBCookieStickinessPolicies": [
                        {"PolicyName": "lb-sticky", "CookieExpirationPeriod": 60}
                    ],
                    "OtherPolicies": ["ELBSecurityPolicy-2016-08"]
                },
                "BackendServerDescriptions": [],
                "AvailabilityZones": ["us-east-1a", "us-east-1b"],
                "Subnets": ["subnet-1", "subnet-2"],
                "VPCId": "vpc-1",
                "Instances": [{"InstanceId": "i-1"}],
                "HealthCheck": {
                    "Target": "HTTP:80/health",
                    "Interval": 30,
                    "Timeout": 5,
                    "UnhealthyThreshold": 2,
                    "HealthyThreshold": 10
                },
                "SourceSecurityGroup": {"OwnerAlias": "123456789012", "GroupName": "web-elb"},
                "SecurityGroups": ["sg-1"],
                "CreatedTime": "2021-03-04T05:06:07.080Z",
                "Scheme": "internet-facing"
            }
        ]
    }"#;

    #[test]
    fn test_parse_cli_output() {
        let result: DescribeLoadBalancersResult = serde_json::from_str(DESCRIBE_OUTPUT).unwrap();
        assert_eq!(result.next_marker(), None);
        let lb = &result.load_balancer_descriptions()[0];
        assert_eq!(lb.load_balancer_name(), Some("web"));
        assert_eq!(lb.canonical_hosted_zone_name_id(), Some("Z35SXDOTRQ7X7K"));
        assert_eq!(lb.vpc_id(), Some("vpc-1"));
        assert_eq!(lb.subnets(), ["subnet-1", "subnet-2"]);
        assert_eq!(lb.health_check(), Some(&HealthCheck::new("HTTP:80/health", 30, 5, 2, 10)));
        assert_eq!(lb.listener_ports(), vec![443]);
        assert_eq!(
            lb.listener_descriptions()[0]
                .listener()
                .and_then(|l| l.ssl_certificate_id()),
            Some("arn:aws:iam::123456789012:server-certificate/web")
        );
        assert_eq!(lb.policy_names(), vec!["lb-sticky", "ELBSecurityPolicy-2016-08"]);
        assert_eq!(lb.scheme(), Some("internet-facing"));
        assert!(lb.created_time().is_some());
    }

    #[test]
    fn test_written_json_reads_back_equal() {
        let result: DescribeLoadBalancersResult = serde_json::from_str(DESCRIBE_OUTPUT).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: DescribeLoadBalancersResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_create_request() {
        let request = CreateLoadBalancerRequest::new(
            "web",
            vec![Listener::new("HTTP", 80, 8080)],
            ["us-east-1a", "us-east-1b"],
        )
        .with_tags([Tag::new("team", "edge")]);
        assert_eq!(request.load_balancer_name(), Some("web"));
        assert_eq!(request.availability_zones(), ["us-east-1a", "us-east-1b"]);
        assert!(request.subnets().is_empty());
        assert_eq!(
            request.to_string(),
            "{LoadBalancerName: web,\
             Listeners: [{Protocol: HTTP,LoadBalancerPort: 80,InstancePort: 8080}],\
             AvailabilityZones: [us-east-1a, us-east-1b],\
             Tags: [{Key: team,Value: edge}]}"
        );
        assert_eq!(CreateLoadBalancerRequest::ACTION, "CreateLoadBalancer");
    }

    #[test]
    fn test_describe_request_paging_members() {
        let request = DescribeLoadBalancersRequest::default()
            .with_load_balancer_names(["web"])
            .with_page_size(400)
            .with_marker("abc");
        assert_eq!(request.page_size(), Some(400));
        assert_eq!(request.marker(), Some("abc"));
        assert_eq!(DescribeLoadBalancersRequest::ACTION, "DescribeLoadBalancers");
    }

    #[test]
    fn test_empty_result_is_distinct_type() {
        let result = DeleteLoadBalancerResult::default();
        assert_eq!(result.to_string(), "{}");
        assert_eq!(serde_json::to_string(&result).unwrap(), "{}");
        let request = DeleteLoadBalancerRequest::new("web");
        assert_eq!(request.to_string(), "{LoadBalancerName: web}");
    }
}
