use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The kind of an editable field, derived from the editor's trait type tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Url,
    Email,
    RequiredText,
    DataBinding,
    NumericRange,
    PlainText,
    SingleSelect,
    /// Any other trait type (`number`, `checkbox`, `color-preset`, ...)
    Other(String),
}

impl FieldKind {
    /// Map an editor trait type tag onto a kind
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "url-validated" => FieldKind::Url,
            "email-validated" => FieldKind::Email,
            "text-required" => FieldKind::RequiredText,
            "data-binding" => FieldKind::DataBinding,
            "number-range" => FieldKind::NumericRange,
            "text" => FieldKind::PlainText,
            "select" => FieldKind::SingleSelect,
            other => FieldKind::Other(other.to_string()),
        }
    }

    /// The editor trait type tag for this kind
    pub fn tag(&self) -> &str {
        match self {
            FieldKind::Url => "url-validated",
            FieldKind::Email => "email-validated",
            FieldKind::RequiredText => "text-required",
            FieldKind::DataBinding => "data-binding",
            FieldKind::NumericRange => "number-range",
            FieldKind::PlainText => "text",
            FieldKind::SingleSelect => "select",
            FieldKind::Other(tag) => tag,
        }
    }
}

impl From<String> for FieldKind {
    fn from(tag: String) -> Self {
        FieldKind::from_tag(&tag)
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.tag().to_string()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One entry of a single-select field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Static metadata for one editable attribute of a component type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Attribute key, unique within the component
    pub name: String,

    /// Display text
    pub label: String,

    pub kind: FieldKind,

    #[serde(default)]
    pub required: bool,

    /// Lower bound for numeric-range fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Upper bound for numeric-range fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Allowed values for single-select fields, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            min: None,
            max: None,
            options: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }
}

/// A node of the document tree as the validator sees it
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentNode {
    pub id: String,
    pub type_name: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub children: Vec<ComponentNode>,
}

impl ComponentNode {
    pub fn new(id: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_name: type_name.into(),
            ..Default::default()
        }
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: ComponentNode) -> Self {
        self.children.push(child);
        self
    }

    /// Current value of a field; absent attributes read as empty
    pub fn value_of(&self, field: &str) -> &str {
        self.attributes.get(field).map(String::as_str).unwrap_or("")
    }

    /// Number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ComponentNode::node_count)
            .sum::<usize>()
    }

    /// Find a node by id in this subtree (pre-order)
    pub fn find(&self, id: &str) -> Option<&ComponentNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}
