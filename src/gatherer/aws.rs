//! Fetches load balancers and their attributes through the AWS SDK.

use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_config::SdkConfig;
use aws_sdk_elasticloadbalancing::Client as ELBClient;
use elb_types::operation::{DescribeLoadBalancerAttributesResult, DescribeLoadBalancersResult};
use elb_types::types::LoadBalancerDescription;
use elb_types::ElbError;
use log::{debug, warn};

use super::{wanted, Gatherer};
use crate::types::{CheckerError, LoadBalancerSnapshot};

/// Loads the default configuration, falling back to us-east-1 when no region
/// is configured.
pub async fn aws_setup() -> SdkConfig {
    let region_provider = RegionProviderChain::default_provider().or_else("us-east-1");
    if let Some(region) = region_provider.region().await {
        debug!("Using region: {}", region);
    }
    aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}

pub struct SdkGatherer {
    client: ELBClient,
    names: Vec<String>,
}

impl SdkGatherer {
    pub fn new(config: &SdkConfig, names: Vec<String>) -> Self {
        SdkGatherer {
            client: ELBClient::new(config),
            names,
        }
    }

    async fn describe_load_balancers(
        &self,
        names: Option<Vec<String>>,
    ) -> Result<DescribeLoadBalancersResult, CheckerError> {
        debug!("Retrieving classic LoadBalancers: {:?}", names);
        let output = self
            .client
            .describe_load_balancers()
            .set_load_balancer_names(names)
            .send()
            .await
            .map_err(aws_sdk_elasticloadbalancing::Error::from)?;
        Ok(output.into())
    }

    /// Describes the requested load balancers one by one, skipping the ones
    /// that do not exist.
    async fn describe_each(&self) -> Result<DescribeLoadBalancersResult, CheckerError> {
        let mut descriptions = vec![];
        for name in &self.names {
            match self.describe_load_balancers(Some(vec![name.clone()])).await {
                Ok(result) => descriptions.extend_from_slice(result.load_balancer_descriptions()),
                Err(CheckerError::Aws(err)) if not_found(&err).is_some() => {
                    warn!("LoadBalancer {} not found", name);
                }
                Err(err) => return Err(err),
            }
        }
        Ok(DescribeLoadBalancersResult::default().with_load_balancer_descriptions(descriptions))
    }

    async fn describe_attributes(
        &self,
        load_balancer_name: &str,
    ) -> Result<DescribeLoadBalancerAttributesResult, CheckerError> {
        debug!("Retrieving attributes of {}", load_balancer_name);
        let output = self
            .client
            .describe_load_balancer_attributes()
            .load_balancer_name(load_balancer_name)
            .send()
            .await
            .map_err(aws_sdk_elasticloadbalancing::Error::from)?;
        Ok(output.into())
    }
}

/// Maps the service's answer for an unknown load balancer name.
fn not_found(err: &aws_sdk_elasticloadbalancing::Error) -> Option<ElbError> {
    match err {
        aws_sdk_elasticloadbalancing::Error::AccessPointNotFoundException(_) => {
            Some(ElbError::LoadBalancerNotFound(err.to_string()))
        }
        _ => None,
    }
}

/// Picks the described load balancers to check: named ones matching `names`
/// (all when `names` is empty), in listing order.
fn select<'r>(
    names: &[String],
    result: &'r DescribeLoadBalancersResult,
) -> Vec<&'r LoadBalancerDescription> {
    if let Some(marker) = result.next_marker() {
        warn!(
            "More LoadBalancers are available after marker {}, only the first page is checked",
            marker
        );
    }
    result
        .load_balancer_descriptions()
        .iter()
        .filter(|description| match description.load_balancer_name() {
            None => {
                warn!("Skipping LoadBalancer without name");
                false
            }
            name => wanted(names, name),
        })
        .collect()
}

#[async_trait]
impl Gatherer for SdkGatherer {
    type Resource = LoadBalancerSnapshot;

    async fn gather(&self) -> Result<Vec<LoadBalancerSnapshot>, CheckerError> {
        let names = (!self.names.is_empty()).then(|| self.names.clone());
        let result = match self.describe_load_balancers(names).await {
            Err(CheckerError::Aws(err)) if !self.names.is_empty() => match not_found(&err) {
                Some(missing) => {
                    warn!("{}, describing the requested LoadBalancers one by one", missing);
                    self.describe_each().await?
                }
                None => return Err(CheckerError::Aws(err)),
            },
            other => other?,
        };
        let mut snapshots = vec![];
        for description in select(&self.names, &result) {
            let Some(name) = description.load_balancer_name() else {
                continue;
            };
            let attributes = self.describe_attributes(name).await?;
            snapshots.push(LoadBalancerSnapshot {
                description: description.clone(),
                attributes: attributes.load_balancer_attributes().cloned(),
            });
        }
        Ok(snapshots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_elasticloadbalancing::types::error::{
        AccessPointNotFoundException, DuplicateAccessPointNameException,
    };

    fn listing() -> DescribeLoadBalancersResult {
        DescribeLoadBalancersResult::default().with_load_balancer_descriptions([
            LoadBalancerDescription::default().with_load_balancer_name("web"),
            LoadBalancerDescription::default().with_vpc_id("vpc-1"),
            LoadBalancerDescription::default().with_load_balancer_name("api"),
        ])
    }

    fn selected_names(names: &[String], result: &DescribeLoadBalancersResult) -> Vec<String> {
        select(names, result)
            .into_iter()
            .filter_map(|d| d.load_balancer_name().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_select_skips_unnamed() {
        assert_eq!(selected_names(&[], &listing()), vec!["web", "api"]);
    }

    #[test]
    fn test_select_by_name() {
        let names = vec!["api".to_string(), "gone".to_string()];
        assert_eq!(selected_names(&names, &listing()), vec!["api"]);
    }

    #[test]
    fn test_select_keeps_first_page() {
        let result = listing().with_next_marker("page-2");
        assert_eq!(select(&[], &result).len(), 2);
    }

    #[test]
    fn test_not_found() {
        let err = aws_sdk_elasticloadbalancing::Error::AccessPointNotFoundException(
            AccessPointNotFoundException::builder()
                .message("There is no ACTIVE Load Balancer named 'gone'")
                .build(),
        );
        assert!(matches!(
            not_found(&err),
            Some(ElbError::LoadBalancerNotFound(_))
        ));
        let err = aws_sdk_elasticloadbalancing::Error::DuplicateAccessPointNameException(
            DuplicateAccessPointNameException::builder().build(),
        );
        assert_eq!(not_found(&err), None);
    }
}
