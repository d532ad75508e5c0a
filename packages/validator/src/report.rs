use crate::field::{FieldIssue, Severity};
use pagecraft_document::{ComponentNode, FieldDescriptor};
use serde::{Deserialize, Serialize};

/// One finding on one field of one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub component_id: String,
    pub component_type: String,
    pub field_name: String,
    pub field_label: String,

    /// The offending value, possibly empty
    pub value: String,

    /// Human-readable description
    pub message: String,

    pub severity: Severity,
}

impl ValidationIssue {
    pub fn new(
        node: &ComponentNode,
        field: &FieldDescriptor,
        value: &str,
        issue: FieldIssue,
    ) -> Self {
        Self {
            component_id: node.id.clone(),
            component_type: node.type_name.clone(),
            field_name: field.name.clone(),
            field_label: field.label.clone(),
            value: value.to_string(),
            message: issue.message,
            severity: issue.severity,
        }
    }
}

/// Aggregate result of a validation run
///
/// Only built through [`ReportBuilder`], so `is_valid` always equals
/// `errors.is_empty()` and every issue sits in the list matching its severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// A vacuously valid report
    pub fn empty() -> Self {
        ReportBuilder::new().finish()
    }

    /// Partition issues by severity, keeping discovery order
    pub fn from_issues(issues: impl IntoIterator<Item = ValidationIssue>) -> Self {
        let mut builder = ReportBuilder::new();
        for issue in issues {
            builder.push(issue);
        }
        builder.finish()
    }

    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// One-line summary such as `2 errors, 1 warning`
    pub fn summary(&self) -> String {
        if self.issue_count() == 0 {
            return "All validations passed!".to_string();
        }

        let mut parts = Vec::new();
        if !self.errors.is_empty() {
            parts.push(pluralize(self.errors.len(), "error"));
        }
        if !self.warnings.is_empty() {
            parts.push(pluralize(self.warnings.len(), "warning"));
        }
        parts.join(", ")
    }

    /// One line per issue, errors first
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .chain(&self.warnings)
            .map(|issue| {
                format!(
                    "{}: {} > {}: {}",
                    issue.severity.as_str(),
                    issue.component_type,
                    issue.field_label,
                    issue.message
                )
            })
            .collect()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::empty()
    }
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Accumulates issues during a walk
#[derive(Debug, Default)]
pub struct ReportBuilder {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
        }
    }

    pub fn finish(self) -> ValidationReport {
        ValidationReport {
            is_valid: self.errors.is_empty(),
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}
