pub mod catalog;
pub mod init;
pub mod validate;

pub use catalog::{catalog, CatalogArgs};
pub use init::{init, InitArgs};
pub use validate::{validate, ValidateArgs};
