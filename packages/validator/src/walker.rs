use crate::field::{validate_field, Severity};
use crate::report::{ReportBuilder, ValidationIssue, ValidationReport};
use pagecraft_common::{walk_fields, walk_node, Visitor};
use pagecraft_document::{ComponentNode, FieldDescriptor};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// Options for configuring a validation run
#[derive(Debug, Clone, Default)]
pub struct ValidationOptions {
    /// Report every warning as an error
    pub treat_warnings_as_errors: bool,

    /// Component types whose own fields are not checked (children still are)
    pub skip_types: BTreeSet<String>,
}

/// Validates component trees with a fixed set of options
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidationOptions,
}

impl Validator {
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Validate every node reachable from `root`, depth-first pre-order.
    /// An absent root is vacuously valid.
    #[instrument(skip_all, fields(root = root.map(|n| n.id.as_str()).unwrap_or("<none>")))]
    pub fn validate_tree(&self, root: Option<&ComponentNode>) -> ValidationReport {
        let Some(root) = root else {
            debug!("No root component, nothing to validate");
            return ValidationReport::empty();
        };

        let mut walk = Walk::new(&self.options);
        walk.visit_node(root);
        let report = walk.finish();

        info!(
            nodes = root.node_count(),
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "Validation complete"
        );
        report
    }

    /// Validate the fields of a single node, without its children
    pub fn validate_node(&self, node: &ComponentNode) -> ValidationReport {
        let mut walk = Walk::new(&self.options);
        walk.check_node(node);
        walk.finish()
    }
}

/// Validate a whole tree with default options
pub fn validate_all_components(root: Option<&ComponentNode>) -> ValidationReport {
    Validator::default().validate_tree(root)
}

/// Validate one node's fields with default options
pub fn validate_component(node: &ComponentNode) -> ValidationReport {
    Validator::default().validate_node(node)
}

/// State of one run
struct Walk<'a> {
    options: &'a ValidationOptions,
    builder: ReportBuilder,
}

impl<'a> Walk<'a> {
    fn new(options: &'a ValidationOptions) -> Self {
        Self {
            options,
            builder: ReportBuilder::new(),
        }
    }

    fn is_skipped(&self, node: &ComponentNode) -> bool {
        let skipped = self.options.skip_types.contains(&node.type_name);
        if skipped {
            debug!(component_id = %node.id, component_type = %node.type_name, "Skipping component type");
        }
        skipped
    }

    fn check_node(&mut self, node: &ComponentNode) {
        if !self.is_skipped(node) {
            walk_fields(self, node);
        }
    }

    fn finish(self) -> ValidationReport {
        self.builder.finish()
    }
}

impl Visitor for Walk<'_> {
    fn visit_node(&mut self, node: &ComponentNode) {
        if !self.is_skipped(node) {
            walk_node(self, node);
            return;
        }
        for child in &node.children {
            self.visit_node(child);
        }
    }

    fn visit_field(&mut self, node: &ComponentNode, field: &FieldDescriptor) {
        let value = node.value_of(&field.name);
        let Some(mut issue) = validate_field(field, value) else {
            return;
        };

        if self.options.treat_warnings_as_errors {
            issue.severity = Severity::Error;
        }

        debug!(
            component_id = %node.id,
            field = %field.name,
            severity = issue.severity.as_str(),
            "Field issue"
        );
        self.builder
            .push(ValidationIssue::new(node, field, value, issue));
    }
}
