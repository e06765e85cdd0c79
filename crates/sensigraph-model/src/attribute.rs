//! Structured edge annotations.

use serde::{Deserialize, Serialize};

/// Attribute payload. Untagged so documents carry plain JSON scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

/// One edge attribute, optionally supported by nested sub-attributes
/// (e.g. a p-value carrying the statistical test that produced it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub attribute_source: String,
    pub attribute_type_id: String,
    pub description: String,
    pub value: AttributeValue,
    pub value_type_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

impl Attribute {
    pub fn new(
        attribute_source: impl Into<String>,
        attribute_type_id: impl Into<String>,
        value: impl Into<AttributeValue>,
        value_type_id: impl Into<String>,
    ) -> Self {
        Self {
            attribute_source: attribute_source.into(),
            attribute_type_id: attribute_type_id.into(),
            description: String::new(),
            value: value.into(),
            value_type_id: value_type_id.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_sub_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}
