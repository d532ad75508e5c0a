//! End-to-end validation of component trees, including documents loaded
//! through the editor JSON boundary.

use pagecraft_document::{
    parse_document, ComponentCatalog, ComponentNode, FieldDescriptor, FieldKind, SelectOption,
};
use pagecraft_validator::{
    validate_all_components, validate_component, Severity, ValidationReport,
};

fn required_alt(id: &str) -> ComponentNode {
    ComponentNode::new(id, "image")
        .with_field(FieldDescriptor::new("alt", "Alt Text", FieldKind::RequiredText).required())
}

fn assert_partitioned(report: &ValidationReport) {
    assert!(report.errors.iter().all(|i| i.severity == Severity::Error));
    assert!(report.warnings.iter().all(|i| i.severity == Severity::Warning));
    assert_eq!(report.is_valid, report.errors.is_empty());
}

#[test]
fn test_child_with_invalid_href() {
    let root = ComponentNode::new("root", "wrapper").with_child(
        ComponentNode::new("link-1", "link")
            .with_field(FieldDescriptor::new("href", "Link URL", FieldKind::Url))
            .with_attribute("href", "not a url"),
    );

    let report = validate_all_components(Some(&root));

    assert!(!report.is_valid);
    assert!(report.warnings.is_empty());
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].field_name, "href");
    assert!(report.errors[0].message.starts_with("Invalid URL format"));
}

#[test]
fn test_root_with_empty_required_alt() {
    let root = required_alt("root").with_attribute("alt", "");

    let report = validate_all_components(Some(&root));

    assert_eq!(report.errors.len(), 1);
    assert_eq!(
        report.errors[0].message,
        "This field is required and cannot be empty."
    );
    assert_eq!(report.errors[0].value, "");
}

#[test]
fn test_empty_tree() {
    let report = validate_all_components(None);
    assert_eq!(
        report,
        ValidationReport {
            is_valid: true,
            errors: vec![],
            warnings: vec![],
        }
    );
}

#[test]
fn test_aggregates_one_error_per_node() {
    let mut root = required_alt("n0");
    for i in 1..10 {
        let child = required_alt(&format!("n{}", i)).with_child(required_alt(&format!("m{}", i)));
        root = root.with_child(child);
    }
    let nodes = root.node_count();

    let report = validate_all_components(Some(&root));

    assert_eq!(nodes, 19);
    assert_eq!(report.errors.len(), nodes);
    assert!(!report.is_valid);
    assert_partitioned(&report);
}

#[test]
fn test_validation_is_idempotent() {
    let root = ComponentNode::new("root", "wrapper")
        .with_child(required_alt("img"))
        .with_child(
            ComponentNode::new("btn", "button")
                .with_field(
                    FieldDescriptor::new("type", "Button Type", FieldKind::SingleSelect)
                        .with_options(vec![SelectOption::new("submit", "Submit")]),
                )
                .with_attribute("type", "launch"),
        );

    let reports: Vec<ValidationReport> = (0..5)
        .map(|_| validate_all_components(Some(&root)))
        .collect();

    for i in 1..reports.len() {
        assert_eq!(reports[0], reports[i], "Run {} differs from run 0", i);
    }
    assert_eq!(reports[0].errors.len(), 1);
    assert_eq!(reports[0].warnings.len(), 1);
}

#[test]
fn test_mixed_severities_partition() {
    let root = ComponentNode::new("form", "form")
        .with_field(FieldDescriptor::new("action", "Action", FieldKind::Url))
        .with_field(FieldDescriptor::new("contact", "Contact", FieldKind::Email))
        .with_field(
            FieldDescriptor::new("method", "Method", FieldKind::SingleSelect).with_options(vec![
                SelectOption::new("get", "GET"),
                SelectOption::new("post", "POST"),
            ]),
        )
        .with_field(FieldDescriptor::new("data-bind", "Data Source", FieldKind::DataBinding))
        .with_field(FieldDescriptor::new("width", "Width", FieldKind::NumericRange).with_range(0.0, 1000.0))
        .with_attribute("action", "ht!tp://invalid")
        .with_attribute("contact", "invalid@domain")
        .with_attribute("method", "put")
        .with_attribute("data-bind", "{{ order.items.0.name }}")
        .with_attribute("width", "2000");

    let report = validate_all_components(Some(&root));

    assert_partitioned(&report);
    let fields: Vec<&str> = report.errors.iter().map(|i| i.field_name.as_str()).collect();
    assert_eq!(fields, vec!["action", "contact", "data-bind", "width"]);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].field_name, "method");
    assert_eq!(report.errors[3].message, "Value must be between 0 and 1000.");
}

#[test]
fn test_validate_component_ignores_children() {
    let root = required_alt("parent")
        .with_attribute("alt", "Logo")
        .with_child(required_alt("child"));

    assert!(validate_component(&root).is_valid);

    let full = validate_all_components(Some(&root));
    assert_eq!(full.errors.len(), 1);
    assert_eq!(full.errors[0].component_id, "child");
}

#[test]
fn test_document_with_catalog_fields() {
    let json = r#"{
        "type": "wrapper",
        "components": [
            { "type": "image", "attributes": { "id": "hero", "src": "/hero.png" } },
            { "type": "link", "attributes": { "href": "javascript void", "target": "_top" } },
            { "type": "button", "attributes": { "text": "Buy", "type": "submit", "href": "/checkout" } },
            { "type": "text", "components": [{ "type": "image", "attributes": { "alt": "Nested" } }] }
        ]
    }"#;

    let root = parse_document(json, &ComponentCatalog::builtin()).unwrap();
    let report = validate_all_components(root.as_ref());

    // Image alt is required text, but empty optional values short-circuit
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].component_type, "link");
    assert_eq!(report.errors[0].field_label, "Link URL");

    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].field_name, "target");
    assert_eq!(report.warnings[0].value, "_top");
}

#[test]
fn test_document_with_explicit_traits() {
    let json = r#"{
        "id": "signup",
        "type": "form",
        "traits": [
            { "name": "email", "label": "Email", "type": "email-validated", "required": true },
            { "name": "greeting", "type": "data-binding" },
            { "name": "age", "type": "number-range", "min": "18", "max": "120" }
        ],
        "attributes": { "greeting": "{{ user.firstName }}", "age": 16 }
    }"#;

    let root = parse_document(json, &ComponentCatalog::builtin()).unwrap();
    let report = validate_all_components(root.as_ref());

    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].field_name, "age");
    assert_eq!(report.errors[0].value, "16");
    assert_eq!(report.errors[0].message, "Value must be between 18 and 120.");
}

#[test]
fn test_empty_document_is_valid() {
    let root = parse_document("[]", &ComponentCatalog::builtin()).unwrap();
    assert!(validate_all_components(root.as_ref()).is_valid);
}
