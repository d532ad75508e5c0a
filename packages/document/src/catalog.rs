use crate::model::{FieldDescriptor, FieldKind, SelectOption};
use std::collections::BTreeMap;

/// A predefined data source offered by the data-source dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSource {
    pub id: &'static str,
    pub name: &'static str,
}

pub const DATA_SOURCES: &[DataSource] = &[
    DataSource { id: "user.firstName", name: "User First Name" },
    DataSource { id: "user.lastName", name: "User Last Name" },
    DataSource { id: "user.email", name: "User Email" },
    DataSource { id: "product.name", name: "Product Name" },
    DataSource { id: "product.price", name: "Product Price" },
    DataSource { id: "company.name", name: "Company Name" },
    DataSource { id: "order.total", name: "Order Total" },
];

/// Field descriptors shared between several component types
pub mod common_fields {
    use super::*;

    pub fn href() -> FieldDescriptor {
        FieldDescriptor::new("href", "Link URL", FieldKind::Url)
    }

    pub fn target() -> FieldDescriptor {
        FieldDescriptor::new("target", "Link Target", FieldKind::SingleSelect).with_options(vec![
            SelectOption::new("", "Same Window"),
            SelectOption::new("_blank", "New Window"),
        ])
    }

    pub fn src() -> FieldDescriptor {
        FieldDescriptor::new("src", "Image Source", FieldKind::PlainText)
    }

    pub fn alt() -> FieldDescriptor {
        FieldDescriptor::new("alt", "Alt Text", FieldKind::RequiredText)
    }

    pub fn width() -> FieldDescriptor {
        FieldDescriptor::new("width", "Width", FieldKind::NumericRange).with_range(0.0, 1000.0)
    }

    pub fn height() -> FieldDescriptor {
        FieldDescriptor::new("height", "Height", FieldKind::NumericRange).with_range(0.0, 1000.0)
    }

    pub fn placeholder() -> FieldDescriptor {
        FieldDescriptor::new("placeholder", "Placeholder", FieldKind::PlainText)
    }

    pub fn button_type() -> FieldDescriptor {
        FieldDescriptor::new("type", "Button Type", FieldKind::SingleSelect).with_options(vec![
            SelectOption::new("button", "Button"),
            SelectOption::new("submit", "Submit"),
            SelectOption::new("reset", "Reset"),
        ])
    }

    pub fn data_bind() -> FieldDescriptor {
        FieldDescriptor::new("data-bind", "Data Source", FieldKind::DataBinding)
    }

    pub fn data_source() -> FieldDescriptor {
        FieldDescriptor::new(
            "data-source",
            "Data Source",
            FieldKind::Other("source-dropdown".to_string()),
        )
    }
}

/// Field descriptors registered per component type
#[derive(Debug, Clone, Default)]
pub struct ComponentCatalog {
    types: BTreeMap<String, Vec<FieldDescriptor>>,
}

impl ComponentCatalog {
    /// An empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    /// The catalog of built-in component types
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();

        catalog.register(
            "image",
            vec![
                common_fields::src(),
                common_fields::alt(),
                FieldDescriptor::new("width", "Width", FieldKind::Other("number".to_string())),
                FieldDescriptor::new("height", "Height", FieldKind::Other("number".to_string())),
                FieldDescriptor::new("title", "Title", FieldKind::PlainText),
            ],
        );

        catalog.register(
            "link",
            vec![
                common_fields::href(),
                common_fields::target(),
                FieldDescriptor::new("title", "Title", FieldKind::PlainText),
            ],
        );

        catalog.register(
            "text",
            vec![
                FieldDescriptor::new("content", "Content", FieldKind::PlainText),
                common_fields::data_source(),
            ],
        );

        catalog.register(
            "button",
            vec![
                FieldDescriptor::new("text", "Button Text", FieldKind::RequiredText),
                common_fields::button_type(),
                common_fields::href(),
                common_fields::target(),
                FieldDescriptor::new(
                    "data-bg-color",
                    "Background Color",
                    FieldKind::Other("color-preset".to_string()),
                ),
            ],
        );

        catalog.register(
            "input",
            vec![
                FieldDescriptor::new("type", "Type", FieldKind::SingleSelect).with_options(vec![
                    SelectOption::new("text", "Text"),
                    SelectOption::new("email", "Email"),
                    SelectOption::new("password", "Password"),
                    SelectOption::new("number", "Number"),
                    SelectOption::new("tel", "Telephone"),
                    SelectOption::new("url", "URL"),
                ]),
                FieldDescriptor::new("name", "Name", FieldKind::PlainText),
                common_fields::placeholder(),
                FieldDescriptor::new("required", "Required", FieldKind::Other("checkbox".to_string())),
            ],
        );

        catalog
    }

    /// Register (or replace) the fields of a component type
    pub fn register(&mut self, type_name: impl Into<String>, fields: Vec<FieldDescriptor>) {
        self.types.insert(type_name.into(), fields);
    }

    /// Fields declared for a component type, if it is known
    pub fn fields_for(&self, type_name: &str) -> Option<&[FieldDescriptor]> {
        self.types.get(type_name).map(Vec::as_slice)
    }

    /// Registered component types, sorted by name
    pub fn types(&self) -> impl Iterator<Item = (&str, &[FieldDescriptor])> {
        self.types
            .iter()
            .map(|(name, fields)| (name.as_str(), fields.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
