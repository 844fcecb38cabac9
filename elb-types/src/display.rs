//! Debug rendering shared by every shape.
//!
//! Shapes render as `{Name: value,Name: value}`: set members only, in
//! declaration order, no escaping. Lists render as `[a, b]`. The output is
//! meant for people reading logs, it cannot be parsed back.

use std::fmt;

use itertools::Itertools;

pub(crate) struct ShapeWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b> ShapeWriter<'a, 'b> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        let result = f.write_str("{");
        ShapeWriter {
            f,
            result,
            has_fields: false,
        }
    }

    /// Writes `name: value` when the member is set.
    pub(crate) fn field<T: fmt::Display>(&mut self, name: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            if self.result.is_ok() {
                let separator = if self.has_fields { "," } else { "" };
                self.result = write!(self.f, "{}{}: {}", separator, name, value);
            }
            self.has_fields = true;
        }
        self
    }

    /// Writes `name: [a, b]` when the list is not empty.
    pub(crate) fn list<T: fmt::Display>(&mut self, name: &str, values: &[T]) -> &mut Self {
        if values.is_empty() {
            return self;
        }
        self.field(name, Some(format_args!("[{}]", values.iter().format(", "))))
    }

    pub(crate) fn finish(&mut self) -> fmt::Result {
        self.result?;
        self.f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: Option<String>,
        port: Option<i32>,
        zones: Vec<String>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            ShapeWriter::new(f)
                .field("Name", self.name.as_ref())
                .field("Port", self.port)
                .list("Zones", &self.zones)
                .finish()
        }
    }

    #[test]
    fn test_writes_only_set_members() {
        let sample = Sample {
            name: None,
            port: Some(80),
            zones: vec![],
        };
        assert_eq!(sample.to_string(), "{Port: 80}");
    }

    #[test]
    fn test_writes_members_in_order_without_trailing_comma() {
        let sample = Sample {
            name: Some("web".to_string()),
            port: Some(443),
            zones: vec!["us-east-1a".to_string(), "us-east-1b".to_string()],
        };
        assert_eq!(
            sample.to_string(),
            "{Name: web,Port: 443,Zones: [us-east-1a, us-east-1b]}"
        );
    }

    #[test]
    fn test_empty_shape() {
        let sample = Sample {
            name: None,
            port: None,
            zones: vec![],
        };
        assert_eq!(sample.to_string(), "{}");
    }
}
