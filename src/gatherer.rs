use async_trait::async_trait;

use crate::types::CheckerError;

pub mod aws;
pub mod file;

#[async_trait]
pub trait Gatherer {
    type Resource;
    async fn gather(&self) -> Result<Vec<Self::Resource>, CheckerError>;
}

/// Keeps the load balancers named in `names`, or all of them when `names` is
/// empty.
pub(crate) fn wanted(names: &[String], load_balancer_name: Option<&str>) -> bool {
    names.is_empty() || load_balancer_name.is_some_and(|n| names.iter().any(|w| w == n))
}
