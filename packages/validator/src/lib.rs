//! Attribute validation for Pagecraft component trees.
//!
//! - [`predicates`]: per-kind string checks (URL, email, required, data binding)
//! - [`field`]: maps a field descriptor and its value to an optional issue
//! - [`walker`]: walks a tree and aggregates issues into a [`ValidationReport`]

pub mod field;
pub mod predicates;
mod report;
mod walker;

pub use field::{validate_field, FieldIssue, Severity};
pub use predicates::{
    is_required_field_valid, is_valid_data_binding, is_valid_email, is_valid_url,
};
pub use report::{ReportBuilder, ValidationIssue, ValidationReport};
pub use walker::{validate_all_components, validate_component, ValidationOptions, Validator};
