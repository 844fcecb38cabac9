//! Value shapes shared by the requests and results of the API.

mod attributes;
mod health_check;
mod instance;
mod listener;
mod load_balancer;
mod policy;
mod protocol;
mod tag;

pub use attributes::{
    AccessLog, AdditionalAttribute, ConnectionDraining, ConnectionSettings,
    CrossZoneLoadBalancing, LoadBalancerAttributes,
};
pub use health_check::HealthCheck;
pub use instance::{Instance, InstanceState};
pub use listener::{BackendServerDescription, Listener, ListenerDescription};
pub use load_balancer::{LoadBalancerDescription, SourceSecurityGroup};
pub use policy::{
    AppCookieStickinessPolicy, LbCookieStickinessPolicy, Policies, PolicyAttribute,
    PolicyAttributeDescription, PolicyAttributeTypeDescription, PolicyDescription,
    PolicyTypeDescription,
};
pub use protocol::{ParseProtocolError, Protocol};
pub use tag::{Tag, TagDescription, TagKeyOnly};
