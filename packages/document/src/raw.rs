//! Serde mirror of the editor's component JSON and its conversion into
//! [`ComponentNode`] trees.
//!
//! Editor documents are loosely shaped: traits may be bare names, option keys
//! may be `id` or `value`, bounds may be numbers or strings, and any key may be
//! missing. Everything here is lenient. Malformed pieces fall back to defaults
//! and never abort a load.

use crate::catalog::ComponentCatalog;
use crate::error::{DocumentError, DocumentResult};
use crate::model::{ComponentNode, FieldDescriptor, FieldKind, SelectOption};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Type name given to components that do not declare one
pub const DEFAULT_COMPONENT_TYPE: &str = "default";

/// Type name of the synthetic root wrapping a bare component list
pub const WRAPPER_COMPONENT_TYPE: &str = "wrapper";

/// A component exactly as the editor serializes it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawComponent {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,

    #[serde(default, rename = "type", deserialize_with = "lenient")]
    pub type_name: Option<String>,

    /// `None` when the key is absent, in which case the catalog supplies fields
    #[serde(default, deserialize_with = "lenient")]
    pub traits: Option<Vec<RawTrait>>,

    #[serde(default, deserialize_with = "lenient")]
    pub attributes: BTreeMap<String, Value>,

    #[serde(default, deserialize_with = "lenient")]
    pub components: Vec<Value>,
}

/// A trait entry: either a bare attribute name or a full definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTrait {
    Name(String),
    Spec(RawTraitSpec),
    Unrecognized(Value),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTraitSpec {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub label: Option<String>,

    #[serde(
        default,
        rename = "type",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient"
    )]
    pub kind: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "lenient")]
    pub options: Vec<RawOption>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub label: Option<String>,
}

/// Deserialize a value, falling back to the default when it has the wrong shape
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

impl RawTrait {
    /// Convert into a field descriptor; `None` if the trait has no name
    pub fn to_descriptor(&self) -> Option<FieldDescriptor> {
        match self {
            RawTrait::Name(name) if !name.is_empty() => {
                Some(FieldDescriptor::new(name.clone(), name.clone(), FieldKind::PlainText))
            }
            RawTrait::Name(_) | RawTrait::Unrecognized(_) => None,
            RawTrait::Spec(spec) => spec.to_descriptor(),
        }
    }
}

impl RawTraitSpec {
    pub fn to_descriptor(&self) -> Option<FieldDescriptor> {
        let name = self.name.clone().filter(|name| !name.is_empty())?;
        let label = self.label.clone().unwrap_or_else(|| name.clone());
        let kind = self
            .kind
            .as_deref()
            .map(FieldKind::from_tag)
            .unwrap_or(FieldKind::PlainText);

        Some(FieldDescriptor {
            name,
            label,
            kind,
            required: self.required,
            min: self.min.as_ref().and_then(number_from_value),
            max: self.max.as_ref().and_then(number_from_value),
            options: self.options.iter().filter_map(RawOption::to_option).collect(),
        })
    }
}

impl RawOption {
    fn to_option(&self) -> Option<SelectOption> {
        let id = self
            .id
            .as_ref()
            .or(self.value.as_ref())
            .and_then(attribute_text)?;
        let label = self
            .name
            .clone()
            .or_else(|| self.label.clone())
            .unwrap_or_else(|| id.clone());
        Some(SelectOption { id, label })
    }
}

/// Bounds arrive as numbers or numeric strings
fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Render an attribute value as the string the editor would show
fn attribute_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Converts raw editor components into [`ComponentNode`] trees
#[derive(Debug)]
pub struct DocumentLoader<'a> {
    catalog: &'a ComponentCatalog,
    next_index: usize,
}

impl<'a> DocumentLoader<'a> {
    pub fn new(catalog: &'a ComponentCatalog) -> Self {
        Self {
            catalog,
            next_index: 0,
        }
    }

    /// Convert a raw component and its descendants
    pub fn load(&mut self, raw: &RawComponent) -> ComponentNode {
        let index = self.next_index;
        self.next_index += 1;

        let attributes: BTreeMap<String, String> = raw
            .attributes
            .iter()
            .filter_map(|(key, value)| attribute_text(value).map(|text| (key.clone(), text)))
            .collect();

        let id = raw
            .id
            .clone()
            .filter(|id| !id.is_empty())
            .or_else(|| attributes.get("id").cloned())
            .unwrap_or_else(|| format!("c{}", index));

        let type_name = raw
            .type_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_COMPONENT_TYPE.to_string());

        let fields = match &raw.traits {
            Some(traits) => traits
                .iter()
                .filter_map(|raw_trait| {
                    let descriptor = raw_trait.to_descriptor();
                    if descriptor.is_none() {
                        warn!(component_id = %id, "Skipping trait without a name");
                    }
                    descriptor
                })
                .collect(),
            None => self
                .catalog
                .fields_for(&type_name)
                .map(<[FieldDescriptor]>::to_vec)
                .unwrap_or_default(),
        };

        let mut children = Vec::with_capacity(raw.components.len());
        for value in &raw.components {
            match RawComponent::deserialize(value) {
                Ok(child) => children.push(self.load(&child)),
                Err(e) => {
                    warn!(parent_id = %id, error = %e, "Skipping malformed child component");
                }
            }
        }

        ComponentNode {
            id,
            type_name,
            fields,
            attributes,
            children,
        }
    }
}

/// Parse an editor document into its root component.
///
/// Accepts a single root component object, a project export
/// (`pages[0].frames[0].component`), or a bare array of components which gets
/// wrapped in a synthetic root. Returns `Ok(None)` for documents without
/// content.
pub fn parse_document(json: &str, catalog: &ComponentCatalog) -> DocumentResult<Option<ComponentNode>> {
    let value: Value = serde_json::from_str(json)?;

    let root = match &value {
        Value::Null => None,
        Value::Array(components) if components.is_empty() => None,
        Value::Array(components) => Some(RawComponent {
            type_name: Some(WRAPPER_COMPONENT_TYPE.to_string()),
            components: components.clone(),
            ..Default::default()
        }),
        Value::Object(object) if object.contains_key("pages") => match project_root(&value) {
            Some(component) => Some(RawComponent::deserialize(component)?),
            None => None,
        },
        Value::Object(_) => Some(RawComponent::deserialize(&value)?),
        other => {
            return Err(DocumentError::InvalidShape(format!(
                "expected a component object, array or project, found {}",
                value_kind(other)
            )))
        }
    };

    let node = root.map(|raw| DocumentLoader::new(catalog).load(&raw));
    if let Some(node) = &node {
        debug!(root_id = %node.id, nodes = node.node_count(), "Loaded document");
    }
    Ok(node)
}

fn project_root(project: &Value) -> Option<&Value> {
    project
        .get("pages")?
        .get(0)?
        .get("frames")?
        .get(0)?
        .get("component")
        .filter(|component| !component.is_null())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Option<ComponentNode> {
        parse_document(json, &ComponentCatalog::builtin()).unwrap()
    }

    #[test]
    fn test_parse_single_component() {
        let root = parse(
            r#"{
                "id": "hero",
                "type": "link",
                "attributes": { "href": "/about" },
                "traits": [{ "name": "href", "type": "url-validated", "label": "Link URL" }]
            }"#,
        )
        .unwrap();

        assert_eq!(root.id, "hero");
        assert_eq!(root.type_name, "link");
        assert_eq!(root.fields.len(), 1);
        assert_eq!(root.fields[0].kind, FieldKind::Url);
        assert_eq!(root.value_of("href"), "/about");
    }

    #[test]
    fn test_missing_traits_use_catalog() {
        let root = parse(r#"{ "type": "image", "attributes": { "src": "a.png" } }"#).unwrap();
        let names: Vec<&str> = root.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["src", "alt", "width", "height", "title"]);
    }

    #[test]
    fn test_empty_traits_stay_empty() {
        let root = parse(r#"{ "type": "image", "traits": [] }"#).unwrap();
        assert!(root.fields.is_empty());
    }

    #[test]
    fn test_synthetic_ids_are_preorder() {
        let root = parse(
            r#"{
                "type": "wrapper",
                "components": [
                    { "type": "section", "components": [{ "type": "text" }] },
                    { "type": "text", "attributes": { "id": "footer" } }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(root.id, "c0");
        assert_eq!(root.children[0].id, "c1");
        assert_eq!(root.children[0].children[0].id, "c2");
        assert_eq!(root.children[1].id, "footer");
    }

    #[test]
    fn test_bare_array_is_wrapped() {
        let root = parse(r#"[{ "type": "text" }, { "type": "image" }]"#).unwrap();
        assert_eq!(root.type_name, WRAPPER_COMPONENT_TYPE);
        assert_eq!(root.children.len(), 2);
        assert!(root.fields.is_empty());
    }

    #[test]
    fn test_project_export() {
        let root = parse(
            r#"{
                "assets": [],
                "pages": [{ "frames": [{ "component": { "type": "wrapper", "components": [{ "type": "link" }] } }] }]
            }"#,
        )
        .unwrap();

        assert_eq!(root.type_name, "wrapper");
        assert_eq!(root.children[0].type_name, "link");
    }

    #[test]
    fn test_empty_documents() {
        assert!(parse("null").is_none());
        assert!(parse("[]").is_none());
        assert!(parse(r#"{ "pages": [] }"#).is_none());
    }

    #[test]
    fn test_invalid_documents() {
        let catalog = ComponentCatalog::builtin();
        assert!(matches!(
            parse_document("{ not json", &catalog),
            Err(DocumentError::Json(_))
        ));
        assert!(matches!(
            parse_document("42", &catalog),
            Err(DocumentError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_lenient_traits() {
        let root = parse(
            r#"{
                "type": "custom",
                "traits": [
                    "title",
                    { "label": "Nameless" },
                    42,
                    { "name": "size", "type": "number-range", "min": "10", "max": 20, "required": "yes" },
                    { "name": "mode", "type": "select", "options": [{ "value": "a", "label": "A" }, { "id": "b" }] }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(root.fields.len(), 3);

        assert_eq!(root.fields[0].name, "title");
        assert_eq!(root.fields[0].kind, FieldKind::PlainText);

        let size = &root.fields[1];
        assert_eq!(size.min, Some(10.0));
        assert_eq!(size.max, Some(20.0));
        assert!(!size.required);

        let mode = &root.fields[2];
        assert_eq!(mode.options, vec![SelectOption::new("a", "A"), SelectOption::new("b", "b")]);
    }

    #[test]
    fn test_attribute_values_are_stringified() {
        let root = parse(
            r#"{ "type": "input", "attributes": { "required": true, "maxlength": 12, "name": null } }"#,
        )
        .unwrap();

        assert_eq!(root.value_of("required"), "true");
        assert_eq!(root.value_of("maxlength"), "12");
        assert!(!root.attributes.contains_key("name"));
    }

    #[test]
    fn test_malformed_children_are_skipped() {
        let root = parse(r#"{ "type": "wrapper", "components": ["text", { "type": "image" }, 7] }"#)
            .unwrap();
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].type_name, "image");
    }
}
