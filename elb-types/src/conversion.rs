//! Conversions from the types of `aws-sdk-elasticloadbalancing`.
//!
//! Only the shapes reachable from the describe outputs are converted; those
//! are the ones a caller reads back from the service. Missing members stay
//! unset.

use aws_sdk_elasticloadbalancing::operation::describe_instance_health::DescribeInstanceHealthOutput;
use aws_sdk_elasticloadbalancing::operation::describe_load_balancer_attributes::DescribeLoadBalancerAttributesOutput;
use aws_sdk_elasticloadbalancing::operation::describe_load_balancers::DescribeLoadBalancersOutput;
use aws_sdk_elasticloadbalancing::operation::describe_tags::DescribeTagsOutput;
use aws_sdk_elasticloadbalancing::types as sdk;
use chrono::{DateTime, Utc};

use crate::operation::{
    DescribeInstanceHealthResult, DescribeLoadBalancerAttributesResult,
    DescribeLoadBalancersResult, DescribeTagsResult,
};
use crate::types::*;

// The SDK exposes members the service marks as required as plain values and
// all others as options.
trait Member<T> {
    fn member(self) -> Option<T>;
}

macro_rules! member_impls {
    ($($t:ty),*) => {
        $(
            impl Member<$t> for $t {
                fn member(self) -> Option<$t> {
                    Some(self)
                }
            }

            impl Member<$t> for Option<$t> {
                fn member(self) -> Option<$t> {
                    self
                }
            }
        )*
    };
}

member_impls!(String, i32, i64, bool);

impl<T> Member<Vec<T>> for Vec<T> {
    fn member(self) -> Option<Vec<T>> {
        Some(self)
    }
}

impl<T> Member<Vec<T>> for Option<Vec<T>> {
    fn member(self) -> Option<Vec<T>> {
        self
    }
}

fn list<S, T: From<S>>(items: impl Member<Vec<S>>) -> Option<Vec<T>> {
    items
        .member()
        .map(|items| items.into_iter().map(T::from).collect())
}

impl From<sdk::HealthCheck> for HealthCheck {
    fn from(value: sdk::HealthCheck) -> Self {
        let mut health_check = HealthCheck::default();
        health_check.set_target(value.target.member());
        health_check.set_interval(value.interval.member());
        health_check.set_timeout(value.timeout.member());
        health_check.set_unhealthy_threshold(value.unhealthy_threshold.member());
        health_check.set_healthy_threshold(value.healthy_threshold.member());
        health_check
    }
}

impl From<sdk::Listener> for Listener {
    fn from(value: sdk::Listener) -> Self {
        let mut listener = Listener::default();
        listener.set_protocol(value.protocol.member());
        listener.set_load_balancer_port(value.load_balancer_port.member());
        listener.set_instance_protocol(value.instance_protocol.member());
        listener.set_instance_port(value.instance_port.member());
        listener.set_ssl_certificate_id(value.ssl_certificate_id.member());
        listener
    }
}

impl From<sdk::ListenerDescription> for ListenerDescription {
    fn from(value: sdk::ListenerDescription) -> Self {
        let mut description = ListenerDescription::default();
        description.set_listener(value.listener.map(Listener::from));
        description.set_policy_names(list(value.policy_names));
        description
    }
}

impl From<sdk::BackendServerDescription> for BackendServerDescription {
    fn from(value: sdk::BackendServerDescription) -> Self {
        let mut description = BackendServerDescription::default();
        description.set_instance_port(value.instance_port.member());
        description.set_policy_names(list(value.policy_names));
        description
    }
}

impl From<sdk::AppCookieStickinessPolicy> for AppCookieStickinessPolicy {
    fn from(value: sdk::AppCookieStickinessPolicy) -> Self {
        let mut policy = AppCookieStickinessPolicy::default();
        policy.set_policy_name(value.policy_name.member());
        policy.set_cookie_name(value.cookie_name.member());
        policy
    }
}

impl From<sdk::LbCookieStickinessPolicy> for LbCookieStickinessPolicy {
    fn from(value: sdk::LbCookieStickinessPolicy) -> Self {
        let mut policy = LbCookieStickinessPolicy::default();
        policy.set_policy_name(value.policy_name.member());
        policy.set_cookie_expiration_period(value.cookie_expiration_period.member());
        policy
    }
}

impl From<sdk::Policies> for Policies {
    fn from(value: sdk::Policies) -> Self {
        let mut policies = Policies::default();
        policies.set_app_cookie_stickiness_policies(list(value.app_cookie_stickiness_policies));
        policies.set_lb_cookie_stickiness_policies(list(value.lb_cookie_stickiness_policies));
        policies.set_other_policies(list(value.other_policies));
        policies
    }
}

impl From<sdk::Instance> for Instance {
    fn from(value: sdk::Instance) -> Self {
        let mut instance = Instance::default();
        instance.set_instance_id(value.instance_id.member());
        instance
    }
}

impl From<sdk::InstanceState> for InstanceState {
    fn from(value: sdk::InstanceState) -> Self {
        let mut state = InstanceState::default();
        state.set_instance_id(value.instance_id.member());
        state.set_state(value.state.member());
        state.set_reason_code(value.reason_code.member());
        state.set_description(value.description.member());
        state
    }
}

impl From<sdk::SourceSecurityGroup> for SourceSecurityGroup {
    fn from(value: sdk::SourceSecurityGroup) -> Self {
        let mut group = SourceSecurityGroup::default();
        group.set_owner_alias(value.owner_alias.member());
        group.set_group_name(value.group_name.member());
        group
    }
}

impl From<sdk::LoadBalancerDescription> for LoadBalancerDescription {
    fn from(value: sdk::LoadBalancerDescription) -> Self {
        let mut lb = LoadBalancerDescription::default();
        lb.set_load_balancer_name(value.load_balancer_name.member());
        lb.set_dns_name(value.dns_name.member());
        lb.set_canonical_hosted_zone_name(value.canonical_hosted_zone_name.member());
        lb.set_canonical_hosted_zone_name_id(value.canonical_hosted_zone_name_id.member());
        lb.set_listener_descriptions(list(value.listener_descriptions));
        lb.set_policies(value.policies.map(Policies::from));
        lb.set_backend_server_descriptions(list(value.backend_server_descriptions));
        lb.set_availability_zones(list(value.availability_zones));
        lb.set_subnets(list(value.subnets));
        lb.set_vpc_id(value.vpc_id.member());
        lb.set_instances(list(value.instances));
        lb.set_health_check(value.health_check.map(HealthCheck::from));
        lb.set_source_security_group(value.source_security_group.map(SourceSecurityGroup::from));
        lb.set_security_groups(list(value.security_groups));
        lb.set_created_time(
            value
                .created_time
                .and_then(|t| DateTime::<Utc>::from_timestamp(t.secs(), t.subsec_nanos())),
        );
        lb.set_scheme(value.scheme.member());
        lb
    }
}

impl From<sdk::CrossZoneLoadBalancing> for CrossZoneLoadBalancing {
    fn from(value: sdk::CrossZoneLoadBalancing) -> Self {
        let mut cross_zone = CrossZoneLoadBalancing::default();
        cross_zone.set_enabled(value.enabled.member());
        cross_zone
    }
}

impl From<sdk::AccessLog> for AccessLog {
    fn from(value: sdk::AccessLog) -> Self {
        let mut access_log = AccessLog::default();
        access_log.set_enabled(value.enabled.member());
        access_log.set_s3_bucket_name(value.s3_bucket_name.member());
        access_log.set_emit_interval(value.emit_interval.member());
        access_log.set_s3_bucket_prefix(value.s3_bucket_prefix.member());
        access_log
    }
}

impl From<sdk::ConnectionDraining> for ConnectionDraining {
    fn from(value: sdk::ConnectionDraining) -> Self {
        let mut draining = ConnectionDraining::default();
        draining.set_enabled(value.enabled.member());
        draining.set_timeout(value.timeout.member());
        draining
    }
}

impl From<sdk::ConnectionSettings> for ConnectionSettings {
    fn from(value: sdk::ConnectionSettings) -> Self {
        let mut settings = ConnectionSettings::default();
        settings.set_idle_timeout(value.idle_timeout.member());
        settings
    }
}

impl From<sdk::AdditionalAttribute> for AdditionalAttribute {
    fn from(value: sdk::AdditionalAttribute) -> Self {
        let mut attribute = AdditionalAttribute::default();
        attribute.set_key(value.key.member());
        attribute.set_value(value.value.member());
        attribute
    }
}

impl From<sdk::LoadBalancerAttributes> for LoadBalancerAttributes {
    fn from(value: sdk::LoadBalancerAttributes) -> Self {
        let mut attributes = LoadBalancerAttributes::default();
        attributes.set_cross_zone_load_balancing(
            value
                .cross_zone_load_balancing
                .map(CrossZoneLoadBalancing::from),
        );
        attributes.set_access_log(value.access_log.map(AccessLog::from));
        attributes.set_connection_draining(value.connection_draining.map(ConnectionDraining::from));
        attributes.set_connection_settings(value.connection_settings.map(ConnectionSettings::from));
        attributes.set_additional_attributes(list(value.additional_attributes));
        attributes
    }
}

impl From<sdk::Tag> for Tag {
    fn from(value: sdk::Tag) -> Self {
        let mut tag = Tag::default();
        tag.set_key(value.key.member());
        tag.set_value(value.value.member());
        tag
    }
}

impl From<sdk::TagDescription> for TagDescription {
    fn from(value: sdk::TagDescription) -> Self {
        let mut description = TagDescription::default();
        description.set_load_balancer_name(value.load_balancer_name.member());
        description.set_tags(list(value.tags));
        description
    }
}

impl From<DescribeLoadBalancersOutput> for DescribeLoadBalancersResult {
    fn from(value: DescribeLoadBalancersOutput) -> Self {
        let mut result = DescribeLoadBalancersResult::default();
        result.set_load_balancer_descriptions(list(value.load_balancer_descriptions));
        result.set_next_marker(value.next_marker);
        result
    }
}

impl From<DescribeLoadBalancerAttributesOutput> for DescribeLoadBalancerAttributesResult {
    fn from(value: DescribeLoadBalancerAttributesOutput) -> Self {
        let mut result = DescribeLoadBalancerAttributesResult::default();
        result.set_load_balancer_attributes(
            value
                .load_balancer_attributes
                .map(LoadBalancerAttributes::from),
        );
        result
    }
}

impl From<DescribeInstanceHealthOutput> for DescribeInstanceHealthResult {
    fn from(value: DescribeInstanceHealthOutput) -> Self {
        let mut result = DescribeInstanceHealthResult::default();
        result.set_instance_states(list(value.instance_states));
        result
    }
}

impl From<DescribeTagsOutput> for DescribeTagsResult {
    fn from(value: DescribeTagsOutput) -> Self {
        let mut result = DescribeTagsResult::default();
        result.set_tag_descriptions(list(value.tag_descriptions));
        result
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_elasticloadbalancing::primitives::DateTime as SdkDateTime;

    use super::*;

    fn sdk_load_balancer() -> sdk::LoadBalancerDescription {
        sdk::LoadBalancerDescription::builder()
            .load_balancer_name("web")
            .dns_name("web-123.us-east-1.elb.amazonaws.com")
            .availability_zones("us-east-1a")
            .availability_zones("us-east-1b")
            .instances(sdk::Instance::builder().instance_id("i-1").build())
            .listener_descriptions(
                sdk::ListenerDescription::builder()
                    .policy_names("sticky")
                    .build(),
            )
            .policies(sdk::Policies::builder().other_policies("sticky").build())
            .source_security_group(
                sdk::SourceSecurityGroup::builder()
                    .owner_alias("amazon-elb")
                    .group_name("amazon-elb-sg")
                    .build(),
            )
            .created_time(SdkDateTime::from_secs(1_600_000_000))
            .build()
    }

    #[test]
    fn test_load_balancer_description_conversion() {
        let lb = LoadBalancerDescription::from(sdk_load_balancer());
        assert_eq!(lb.load_balancer_name(), Some("web"));
        assert_eq!(lb.dns_name(), Some("web-123.us-east-1.elb.amazonaws.com"));
        assert_eq!(lb.availability_zones(), ["us-east-1a", "us-east-1b"]);
        assert_eq!(lb.instances(), [Instance::new("i-1")]);
        assert_eq!(lb.listener_descriptions()[0].policy_names(), ["sticky"]);
        assert_eq!(lb.listener_descriptions()[0].listener(), None);
        assert_eq!(
            lb.source_security_group().and_then(|g| g.group_name()),
            Some("amazon-elb-sg")
        );
        assert_eq!(
            lb.created_time().map(|t| t.timestamp()),
            Some(1_600_000_000)
        );
        assert_eq!(lb.vpc_id(), None);
        assert!(lb.subnets().is_empty());
    }

    #[test]
    fn test_describe_output_conversion() {
        let output = DescribeLoadBalancersOutput::builder()
            .load_balancer_descriptions(sdk_load_balancer())
            .next_marker("next")
            .build();
        let result = DescribeLoadBalancersResult::from(output);
        assert_eq!(result.load_balancer_descriptions().len(), 1);
        assert_eq!(result.next_marker(), Some("next"));
    }

    #[test]
    fn test_empty_output_conversion() {
        let result = DescribeTagsResult::from(DescribeTagsOutput::builder().build());
        assert_eq!(result, DescribeTagsResult::default());
    }
}
