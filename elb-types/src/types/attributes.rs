//! Load balancer attributes, as read by DescribeLoadBalancerAttributes and
//! written by ModifyLoadBalancerAttributes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display::ShapeWriter;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LoadBalancerAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    cross_zone_load_balancing: Option<CrossZoneLoadBalancing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_log: Option<AccessLog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    connection_draining: Option<ConnectionDraining>,
    #[serde(skip_serializing_if = "Option::is_none")]
    connection_settings: Option<ConnectionSettings>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    additional_attributes: Vec<AdditionalAttribute>,
}

impl LoadBalancerAttributes {
    pub fn cross_zone_load_balancing(&self) -> Option<&CrossZoneLoadBalancing> {
        self.cross_zone_load_balancing.as_ref()
    }

    pub fn set_cross_zone_load_balancing(
        &mut self,
        cross_zone_load_balancing: Option<CrossZoneLoadBalancing>,
    ) {
        self.cross_zone_load_balancing = cross_zone_load_balancing;
    }

    pub fn with_cross_zone_load_balancing(
        mut self,
        cross_zone_load_balancing: CrossZoneLoadBalancing,
    ) -> Self {
        self.cross_zone_load_balancing = Some(cross_zone_load_balancing);
        self
    }

    pub fn access_log(&self) -> Option<&AccessLog> {
        self.access_log.as_ref()
    }

    pub fn set_access_log(&mut self, access_log: Option<AccessLog>) {
        self.access_log = access_log;
    }

    pub fn with_access_log(mut self, access_log: AccessLog) -> Self {
        self.access_log = Some(access_log);
        self
    }

    pub fn connection_draining(&self) -> Option<&ConnectionDraining> {
        self.connection_draining.as_ref()
    }

    pub fn set_connection_draining(&mut self, connection_draining: Option<ConnectionDraining>) {
        self.connection_draining = connection_draining;
    }

    pub fn with_connection_draining(mut self, connection_draining: ConnectionDraining) -> Self {
        self.connection_draining = Some(connection_draining);
        self
    }

    pub fn connection_settings(&self) -> Option<&ConnectionSettings> {
        self.connection_settings.as_ref()
    }

    pub fn set_connection_settings(&mut self, connection_settings: Option<ConnectionSettings>) {
        self.connection_settings = connection_settings;
    }

    pub fn with_connection_settings(mut self, connection_settings: ConnectionSettings) -> Self {
        self.connection_settings = Some(connection_settings);
        self
    }

    /// Reserved by the service for attributes without a dedicated member.
    pub fn additional_attributes(&self) -> &[AdditionalAttribute] {
        &self.additional_attributes
    }

    pub fn set_additional_attributes(
        &mut self,
        additional_attributes: Option<Vec<AdditionalAttribute>>,
    ) {
        self.additional_attributes = additional_attributes.unwrap_or_default();
    }

    pub fn with_additional_attributes<I>(mut self, additional_attributes: I) -> Self
    where
        I: IntoIterator<Item = AdditionalAttribute>,
    {
        self.additional_attributes.extend(additional_attributes);
        self
    }
}

impl fmt::Display for LoadBalancerAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("CrossZoneLoadBalancing", self.cross_zone_load_balancing.as_ref())
            .field("AccessLog", self.access_log.as_ref())
            .field("ConnectionDraining", self.connection_draining.as_ref())
            .field("ConnectionSettings", self.connection_settings.as_ref())
            .list("AdditionalAttributes", &self.additional_attributes)
            .finish()
    }
}

/// Where and how often access logs are published.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AccessLog {
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    emit_interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_bucket_prefix: Option<String>,
}

impl AccessLog {
    pub fn enabled(&self) -> Option<bool> {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: Option<bool>) {
        self.enabled = enabled;
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn s3_bucket_name(&self) -> Option<&str> {
        self.s3_bucket_name.as_deref()
    }

    pub fn set_s3_bucket_name(&mut self, s3_bucket_name: Option<String>) {
        self.s3_bucket_name = s3_bucket_name;
    }

    pub fn with_s3_bucket_name(mut self, s3_bucket_name: impl Into<String>) -> Self {
        self.s3_bucket_name = Some(s3_bucket_name.into());
        self
    }

    /// Publishing interval in minutes, either 5 or 60.
    pub fn emit_interval(&self) -> Option<i32> {
        self.emit_interval
    }

    pub fn set_emit_interval(&mut self, emit_interval: Option<i32>) {
        self.emit_interval = emit_interval;
    }

    pub fn with_emit_interval(mut self, emit_interval: i32) -> Self {
        self.emit_interval = Some(emit_interval);
        self
    }

    pub fn s3_bucket_prefix(&self) -> Option<&str> {
        self.s3_bucket_prefix.as_deref()
    }

    pub fn set_s3_bucket_prefix(&mut self, s3_bucket_prefix: Option<String>) {
        self.s3_bucket_prefix = s3_bucket_prefix;
    }

    pub fn with_s3_bucket_prefix(mut self, s3_bucket_prefix: impl Into<String>) -> Self {
        self.s3_bucket_prefix = Some(s3_bucket_prefix.into());
        self
    }
}

impl fmt::Display for AccessLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("Enabled", self.enabled)
            .field("S3BucketName", self.s3_bucket_name.as_ref())
            .field("EmitInterval", self.emit_interval)
            .field("S3BucketPrefix", self.s3_bucket_prefix.as_ref())
            .finish()
    }
}

/// Keeps existing connections open to deregistering or unhealthy instances.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConnectionDraining {
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout: Option<i32>,
}

impl ConnectionDraining {
    pub fn enabled(&self) -> Option<bool> {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: Option<bool>) {
        self.enabled = enabled;
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Maximum seconds to keep connections alive, 1 through 3600.
    pub fn timeout(&self) -> Option<i32> {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: Option<i32>) {
        self.timeout = timeout;
    }

    pub fn with_timeout(mut self, timeout: i32) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl fmt::Display for ConnectionDraining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("Enabled", self.enabled)
            .field("Timeout", self.timeout)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConnectionSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    idle_timeout: Option<i32>,
}

impl ConnectionSettings {
    pub fn new(idle_timeout: i32) -> Self {
        Self {
            idle_timeout: Some(idle_timeout),
        }
    }

    /// Seconds a connection may stay idle before it is closed, 1 through 4000.
    pub fn idle_timeout(&self) -> Option<i32> {
        self.idle_timeout
    }

    pub fn set_idle_timeout(&mut self, idle_timeout: Option<i32>) {
        self.idle_timeout = idle_timeout;
    }

    pub fn with_idle_timeout(mut self, idle_timeout: i32) -> Self {
        self.idle_timeout = Some(idle_timeout);
        self
    }
}

impl fmt::Display for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("IdleTimeout", self.idle_timeout)
            .finish()
    }
}

/// Whether traffic is spread across all registered instances regardless of zone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CrossZoneLoadBalancing {
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
}

impl CrossZoneLoadBalancing {
    pub fn enabled(&self) -> Option<bool> {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: Option<bool>) {
        self.enabled = enabled;
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}

impl fmt::Display for CrossZoneLoadBalancing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("Enabled", self.enabled)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AdditionalAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl AdditionalAttribute {
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn set_key(&mut self, key: Option<String>) {
        self.key = key;
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for AdditionalAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("Key", self.key.as_ref())
            .field("Value", self.value.as_ref())
            .finish()
    }
}
