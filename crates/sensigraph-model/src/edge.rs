//! Edge documents: subject / association / object.

use crate::attribute::Attribute;
use crate::curie::Identifier;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Node fields with a fixed meaning; an identifier property never overrides them.
pub const RESERVED_NODE_KEYS: &[&str] = &["id", "name", "type"];

/// A subject or object node.
///
/// Serializes as `{"id", "name", "type", "<prefix_key>": <local_id>}`; the
/// prefix property comes from the identifier rather than a dynamic field.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub identifier: Identifier,
    pub name: Option<String>,
    pub category: String,
}

impl Node {
    pub fn new(identifier: Identifier, name: Option<String>, category: impl Into<String>) -> Self {
        Self {
            identifier,
            name,
            category: category.into(),
        }
    }

    pub fn id(&self) -> &str {
        self.identifier.full_id()
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", self.identifier.full_id())?;
        if let Some(name) = &self.name {
            map.serialize_entry("name", name)?;
        }
        map.serialize_entry("type", &self.category)?;
        let (key, value) = self.identifier.property();
        if !RESERVED_NODE_KEYS.contains(&key) {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Association {
    pub edge_label: String,
    pub edge_attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct EdgeRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub subject: Node,
    pub association: Association,
    pub object: Node,
}

impl EdgeRecord {
    /// Attributes of the association with the given type id.
    pub fn attributes_of_type<'a>(
        &'a self,
        attribute_type_id: &'a str,
    ) -> impl Iterator<Item = &'a Attribute> + 'a {
        self.association
            .edge_attributes
            .iter()
            .filter(move |a| a.attribute_type_id == attribute_type_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn node_carries_prefix_property() {
        let node = Node::new(
            Identifier::parse("CHEBI:90227").unwrap(),
            Some("sorafenib".to_string()),
            "biolink:SmallMolecule",
        );
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({
                "id": "CHEBI:90227",
                "name": "sorafenib",
                "type": "biolink:SmallMolecule",
                "chebi": "CHEBI:90227"
            })
        );
    }

    #[test]
    fn nameless_node_omits_name() {
        let node = Node::new(Identifier::parse("NCBIGene:7157").unwrap(), None, "biolink:Gene");
        let value = serde_json::to_value(&node).unwrap();
        assert!(value.get("name").is_none());
        assert_eq!(value["ncbigene"], json!("7157"));
    }

    #[test]
    fn reserved_prefix_key_does_not_clobber_id() {
        let node = Node::new(Identifier::parse("ID:42").unwrap(), None, "biolink:NamedThing");
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["id"], json!("ID:42"));
    }
}
