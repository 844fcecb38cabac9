//! One request and one result shape per API action.
//!
//! Nothing here sends a request: the shapes only carry what a transport
//! would put on the wire or read back from it.

mod attributes;
mod health_check;
mod instances;
mod listeners;
mod load_balancer;
mod network;
mod policies;
mod tags;

pub use attributes::{
    DescribeLoadBalancerAttributesRequest, DescribeLoadBalancerAttributesResult,
    ModifyLoadBalancerAttributesRequest, ModifyLoadBalancerAttributesResult,
};
pub use health_check::{ConfigureHealthCheckRequest, ConfigureHealthCheckResult};
pub use instances::{
    DeregisterInstancesFromLoadBalancerRequest, DeregisterInstancesFromLoadBalancerResult,
    DescribeInstanceHealthRequest, DescribeInstanceHealthResult,
    RegisterInstancesWithLoadBalancerRequest, RegisterInstancesWithLoadBalancerResult,
};
pub use listeners::{
    CreateLoadBalancerListenersRequest, CreateLoadBalancerListenersResult,
    DeleteLoadBalancerListenersRequest, DeleteLoadBalancerListenersResult,
    SetLoadBalancerListenerSslCertificateRequest, SetLoadBalancerListenerSslCertificateResult,
};
pub use load_balancer::{
    CreateLoadBalancerRequest, CreateLoadBalancerResult, DeleteLoadBalancerRequest,
    DeleteLoadBalancerResult, DescribeLoadBalancersRequest, DescribeLoadBalancersResult,
};
pub use network::{
    ApplySecurityGroupsToLoadBalancerRequest, ApplySecurityGroupsToLoadBalancerResult,
    AttachLoadBalancerToSubnetsRequest, AttachLoadBalancerToSubnetsResult,
    DetachLoadBalancerFromSubnetsRequest, DetachLoadBalancerFromSubnetsResult,
    DisableAvailabilityZonesForLoadBalancerRequest, DisableAvailabilityZonesForLoadBalancerResult,
    EnableAvailabilityZonesForLoadBalancerRequest, EnableAvailabilityZonesForLoadBalancerResult,
};
pub use policies::{
    CreateAppCookieStickinessPolicyRequest, CreateAppCookieStickinessPolicyResult,
    CreateLbCookieStickinessPolicyRequest, CreateLbCookieStickinessPolicyResult,
    CreateLoadBalancerPolicyRequest, CreateLoadBalancerPolicyResult,
    DeleteLoadBalancerPolicyRequest, DeleteLoadBalancerPolicyResult,
    DescribeLoadBalancerPoliciesRequest, DescribeLoadBalancerPoliciesResult,
    DescribeLoadBalancerPolicyTypesRequest, DescribeLoadBalancerPolicyTypesResult,
    SetLoadBalancerPoliciesForBackendServerRequest, SetLoadBalancerPoliciesForBackendServerResult,
    SetLoadBalancerPoliciesOfListenerRequest, SetLoadBalancerPoliciesOfListenerResult,
};
pub use tags::{
    AddTagsRequest, AddTagsResult, DescribeTagsRequest, DescribeTagsResult, RemoveTagsRequest,
    RemoveTagsResult,
};

/// Ties a request shape to the action it belongs to and the result it yields.
pub trait ElbRequest {
    type Output;

    /// The API action name, e.g. `DescribeLoadBalancers`.
    const ACTION: &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action<R: ElbRequest>(_: &R) -> &'static str {
        R::ACTION
    }

    fn expects_output<R: ElbRequest<Output = O>, O>(_: &R, _: &O) {}

    #[test]
    fn test_actions_use_api_names() {
        assert_eq!(
            action(&SetLoadBalancerListenerSslCertificateRequest::default()),
            "SetLoadBalancerListenerSSLCertificate"
        );
        assert_eq!(
            action(&CreateLbCookieStickinessPolicyRequest::default()),
            "CreateLBCookieStickinessPolicy"
        );
        assert_eq!(
            action(&EnableAvailabilityZonesForLoadBalancerRequest::default()),
            "EnableAvailabilityZonesForLoadBalancer"
        );
        assert_eq!(action(&RemoveTagsRequest::default()), "RemoveTags");
    }

    #[test]
    fn test_requests_map_to_their_results() {
        expects_output(
            &ModifyLoadBalancerAttributesRequest::default(),
            &ModifyLoadBalancerAttributesResult::default(),
        );
        expects_output(
            &DescribeInstanceHealthRequest::default(),
            &DescribeInstanceHealthResult::default(),
        );
        expects_output(&AddTagsRequest::default(), &AddTagsResult::default());
    }
}
