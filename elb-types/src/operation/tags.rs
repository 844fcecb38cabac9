//! AddTags, RemoveTags and DescribeTags.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display::ShapeWriter;
use crate::operation::ElbRequest;
use crate::types::{Tag, TagDescription, TagKeyOnly};

/// Adds tags to a load balancer, replacing the value of keys that already exist.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AddTagsRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    load_balancer_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<Tag>,
}

impl AddTagsRequest {
    /// The load balancers to tag. Only one name is accepted.
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

    /// At most 10 tags per load balancer.
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

impl ElbRequest for AddTagsRequest {
    type Output = AddTagsResult;
    const ACTION: &'static str = "AddTags";
}

impl fmt::Display for AddTagsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .list("LoadBalancerNames", &self.load_balancer_names)
            .list("Tags", &self.tags)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddTagsResult {}

impl fmt::Display for AddTagsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f).finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RemoveTagsRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    load_balancer_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<TagKeyOnly>,
}

impl RemoveTagsRequest {
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

    pub fn tags(&self) -> &[TagKeyOnly] {
        &self.tags
    }

    pub fn set_tags(&mut self, tags: Option<Vec<TagKeyOnly>>) {
        self.tags = tags.unwrap_or_default();
    }

    pub fn with_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = TagKeyOnly>,
    {
        self.tags.extend(tags);
        self
    }
}

impl ElbRequest for RemoveTagsRequest {
    type Output = RemoveTagsResult;
    const ACTION: &'static str = "RemoveTags";
}

impl fmt::Display for RemoveTagsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .list("LoadBalancerNames", &self.load_balancer_names)
            .list("Tags", &self.tags)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoveTagsResult {}

impl fmt::Display for RemoveTagsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f).finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeTagsRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    load_balancer_names: Vec<String>,
}

impl DescribeTagsRequest {
    /// Up to 20 load balancer names.
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
}

impl ElbRequest for DescribeTagsRequest {
    type Output = DescribeTagsResult;
    const ACTION: &'static str = "DescribeTags";
}

impl fmt::Display for DescribeTagsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .list("LoadBalancerNames", &self.load_balancer_names)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeTagsResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tag_descriptions: Vec<TagDescription>,
}

impl DescribeTagsResult {
    pub fn tag_descriptions(&self) -> &[TagDescription] {
        &self.tag_descriptions
    }

    pub fn set_tag_descriptions(&mut self, tag_descriptions: Option<Vec<TagDescription>>) {
        self.tag_descriptions = tag_descriptions.unwrap_or_default();
    }

    pub fn with_tag_descriptions<I>(mut self, tag_descriptions: I) -> Self
    where
        I: IntoIterator<Item = TagDescription>,
    {
        self.tag_descriptions.extend(tag_descriptions);
        self
    }
}

impl fmt::Display for DescribeTagsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .list("TagDescriptions", &self.tag_descriptions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove_tags() {
        let add = AddTagsRequest::default()
            .with_load_balancer_names(["web"])
            .with_tags([Tag::new("team", "edge"), Tag::default().with_key("temporary")]);
        assert_eq!(add.tags()[1].value(), None);

        let remove = RemoveTagsRequest::default()
            .with_load_balancer_names(["web"])
            .with_tags([TagKeyOnly::new("temporary")]);
        assert_eq!(remove.to_string(), "{LoadBalancerNames: [web],Tags: [{Key: temporary}]}");
    }

    #[test]
    fn test_describe_tags_result_json() {
        let result: DescribeTagsResult = serde_json::from_str(
            r#"{"TagDescriptions": [{"LoadBalancerName": "web", "Tags": [{"Key": "team", "Value": "edge"}]}]}"#,
        )
        .unwrap();
        assert_eq!(
            result.tag_descriptions()[0].tags(),
            [Tag::new("team", "edge")]
        );
    }
}
