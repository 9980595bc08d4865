pub mod ast;
mod diagnostic;
mod entity_type_validator;
mod field_validator;
pub mod file_reader;
pub mod loc;
mod schema_context;
mod schema_import_validator;
mod schema_validator;
mod suggestions;

pub use diagnostic::Diagnostic;
pub use schema_validator::SchemaValidationError;
pub use schema_validator::validate_schema_document;
pub use schema_validator::validate_schema_file;
pub use schema_validator::validate_schema_str;
pub use suggestions::suggest_type;

#[cfg(test)]
mod tests;
