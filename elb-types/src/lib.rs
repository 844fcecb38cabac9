//! Data types for the classic Elastic Load Balancing API.
//!
//! Every shape is a plain value: members are optional, lists default to
//! empty, and nothing is validated. Each member has an accessor, a `set_`
//! mutator and a chainable `with_` mutator:
//!
//! ```
//! use elb_types::types::Listener;
//!
//! let listener = Listener::default()
//!     .with_protocol("HTTPS")
//!     .with_load_balancer_port(443)
//!     .with_instance_port(8443);
//! assert_eq!(listener.load_balancer_port(), Some(443));
//! ```
//!
//! Shapes serialize to the JSON printed by the AWS command line tool, so
//! `aws elb describe-load-balancers` output reads straight into
//! [`operation::DescribeLoadBalancersResult`].

mod conversion;
mod display;
pub mod error;
pub mod operation;
pub mod types;

pub use error::ElbError;
pub use operation::ElbRequest;
