//! Reads load balancers from a file holding either the output of
//! `aws elb describe-load-balancers` or snapshots written with `--format json`.

use std::path::PathBuf;

use async_trait::async_trait;
use elb_types::operation::DescribeLoadBalancersResult;
use log::{debug, warn};
use serde::Deserialize;

use super::{wanted, Gatherer};
use crate::types::{CheckerError, LoadBalancerSnapshot};

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Snapshots(Vec<LoadBalancerSnapshot>),
    Listing(DescribeLoadBalancersResult),
}

impl SnapshotFile {
    fn into_snapshots(self, path: &std::path::Path) -> Vec<LoadBalancerSnapshot> {
        match self {
            SnapshotFile::Snapshots(snapshots) => snapshots,
            SnapshotFile::Listing(result) => {
                if result.next_marker().is_some() {
                    warn!(
                        "{} holds a truncated listing, only the LoadBalancers it contains are checked",
                        path.display()
                    );
                }
                result
                    .load_balancer_descriptions()
                    .iter()
                    .cloned()
                    .map(LoadBalancerSnapshot::from)
                    .collect()
            }
        }
    }
}

pub struct FileGatherer {
    path: PathBuf,
    names: Vec<String>,
}

impl FileGatherer {
    pub fn new(path: impl Into<PathBuf>, names: Vec<String>) -> Self {
        FileGatherer {
            path: path.into(),
            names,
        }
    }
}

#[async_trait]
impl Gatherer for FileGatherer {
    type Resource = LoadBalancerSnapshot;

    async fn gather(&self) -> Result<Vec<LoadBalancerSnapshot>, CheckerError> {
        debug!("Reading LoadBalancers from {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;
        let file: SnapshotFile = serde_json::from_str(&content)?;
        let snapshots: Vec<LoadBalancerSnapshot> = file
            .into_snapshots(&self.path)
            .into_iter()
            .filter(|s| wanted(&self.names, s.description.load_balancer_name()))
            .collect();
        for name in &self.names {
            if !snapshots.iter().any(|s| s.name() == name) {
                warn!("LoadBalancer {} not found in {}", name, self.path.display());
            }
        }
        Ok(snapshots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elb_types::types::{ConnectionSettings, LoadBalancerAttributes, LoadBalancerDescription};
    use std::io::Write;

    const LISTING: &str = r#"{
        "LoadBalancerDescriptions": [
            {"LoadBalancerName": "web", "AvailabilityZones": ["us-east-1a"]},
            {"LoadBalancerName": "api", "VPCId": "vpc-1"}
        ]
    }"#;

    fn listing_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_gather_all() {
        let file = listing_file(LISTING);
        let snapshots = FileGatherer::new(file.path(), vec![]).gather().await.unwrap();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[1].description.vpc_id(), Some("vpc-1"));
        assert!(snapshots.iter().all(|s| s.attributes.is_none()));
    }

    #[tokio::test]
    async fn test_gather_by_name() {
        let file = listing_file(LISTING);
        let gatherer = FileGatherer::new(file.path(), vec!["api".to_string(), "gone".to_string()]);
        let snapshots = gatherer.gather().await.unwrap();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].name(), "api");
    }

    #[tokio::test]
    async fn test_gather_invalid_json() {
        let file = listing_file("{\"LoadBalancerDescriptions\": 1}");
        let err = FileGatherer::new(file.path(), vec![]).gather().await.unwrap_err();
        assert!(matches!(err, CheckerError::Json(_)));
    }

    #[tokio::test]
    async fn test_gather_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let gatherer = FileGatherer::new(dir.path().join("missing.json"), vec![]);
        assert!(matches!(gatherer.gather().await, Err(CheckerError::Io(_))));
    }

    #[tokio::test]
    async fn test_gather_written_snapshots_keep_attributes() {
        let snapshots = vec![
            LoadBalancerSnapshot {
                description: LoadBalancerDescription::default()
                    .with_load_balancer_name("web")
                    .with_availability_zones(["us-east-1a", "us-east-1b"]),
                attributes: Some(
                    LoadBalancerAttributes::default()
                        .with_connection_settings(ConnectionSettings::new(60)),
                ),
            },
            LoadBalancerSnapshot::from(
                LoadBalancerDescription::default().with_load_balancer_name("api"),
            ),
        ];
        let file = listing_file(&serde_json::to_string_pretty(&snapshots).unwrap());
        let gathered = FileGatherer::new(file.path(), vec![]).gather().await.unwrap();
        assert_eq!(gathered, snapshots);
        assert_eq!(
            gathered[0]
                .attributes
                .as_ref()
                .and_then(|a| a.connection_settings())
                .and_then(|c| c.idle_timeout()),
            Some(60)
        );
    }

    #[tokio::test]
    async fn test_gather_written_snapshots_by_name() {
        let file = listing_file(
            r#"[{"Description": {"LoadBalancerName": "web"}, "Attributes": {}},
                {"Description": {"LoadBalancerName": "api"}}]"#,
        );
        let gathered = FileGatherer::new(file.path(), vec!["web".to_string()])
            .gather()
            .await
            .unwrap();
        assert_eq!(gathered.len(), 1);
        assert_eq!(gathered[0].attributes, Some(LoadBalancerAttributes::default()));
    }
}
