//! Component tree model for Pagecraft documents.
//!
//! The editor hands us loosely-shaped JSON. [`raw`] holds the serde mirror of
//! that shape and [`DocumentLoader`] turns it into the strict [`ComponentNode`]
//! tree the validator reads.

pub mod catalog;
pub mod error;
pub mod model;
pub mod raw;

pub use catalog::{common_fields, ComponentCatalog, DataSource, DATA_SOURCES};
pub use error::{DocumentError, DocumentResult};
pub use model::{ComponentNode, FieldDescriptor, FieldKind, SelectOption};
pub use raw::{parse_document, DocumentLoader, RawComponent, RawTrait};
