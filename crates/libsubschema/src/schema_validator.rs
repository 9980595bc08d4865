use crate::ast;
use crate::diagnostic::Diagnostic;
use crate::entity_type_validator::EntityTypeValidator;
use crate::file_reader;
use crate::loc;
use crate::schema_context::SCHEMA_TYPE_NAME;
use crate::schema_context::SchemaContext;
use crate::schema_import_validator::SchemaImportValidator;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaValidationError>;

/// The two fatal failure kinds: everything discovered inside a syntactically
/// valid schema is a non-fatal [Diagnostic] instead.
#[derive(Debug, Error)]
pub enum SchemaValidationError {
    #[error("Failed to read schema content: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error("Failed to parse schema document: {err}")]
    SchemaParseError {
        file: Option<PathBuf>,
        err: ast::schema::ParseError,
    },
}

/// Reads, parses, and validates the schema stored at `file_path`.
pub fn validate_schema_file(
    file_path: impl AsRef<Path>,
) -> Result<Vec<Diagnostic>> {
    let file_path = file_path.as_ref();
    let content = file_reader::read_content(file_path)
        .map_err(|err| SchemaValidationError::SchemaFileReadError(
            Box::new(err),
        ))?;
    validate_schema_str(Some(file_path.to_path_buf()), content.as_str())
}

/// Parses and validates schema source text. `file_path` is only used to
/// annotate diagnostic locations.
pub fn validate_schema_str(
    file_path: Option<PathBuf>,
    content: &str,
) -> Result<Vec<Diagnostic>> {
    let doc =
        graphql_parser::schema::parse_schema::<String>(content)
            .map_err(|err| SchemaValidationError::SchemaParseError {
                file: file_path.to_owned(),
                err,
            })?.into_static();
    Ok(validate_schema_document(file_path.as_deref(), &doc))
}

/// Validates an already-parsed schema document.
///
/// The returned sequence is deterministic: diagnostics appear in definition
/// order, then field order, then directive order, with the global
/// name-collision pass appended last. The document is never mutated, so
/// validating the same document twice yields identical sequences.
pub fn validate_schema_document(
    file_path: Option<&Path>,
    doc: &ast::schema::Document,
) -> Vec<Diagnostic> {
    SchemaValidator::new(file_path, doc).validate()
}

struct SchemaValidator<'a> {
    ctx: SchemaContext<'a>,
    diagnostics: Vec<Diagnostic>,
    file: Option<&'a Path>,
}
impl<'a> SchemaValidator<'a> {
    fn new(file: Option<&'a Path>, doc: &'a ast::schema::Document) -> Self {
        Self {
            ctx: SchemaContext::new(doc),
            diagnostics: vec![],
            file,
        }
    }

    fn validate(mut self) -> Vec<Diagnostic> {
        for def in self.ctx.definitions() {
            self.validate_definition(def);
        }
        self.check_name_collisions();
        self.diagnostics
    }

    fn validate_definition(&mut self, def: &'a ast::schema::Definition) {
        match def {
            ast::schema::Definition::TypeDefinition(type_def) =>
                self.validate_type_definition(type_def),

            ast::schema::Definition::TypeExtension(type_ext) =>
                self.validate_type_extension(type_ext),

            ast::schema::Definition::SchemaDefinition(_)
            | ast::schema::Definition::DirectiveDefinition(_) => (),
        }
    }

    fn validate_type_definition(
        &mut self,
        type_def: &'a ast::schema::TypeDefinition,
    ) {
        match type_def {
            ast::schema::TypeDefinition::Object(obj_type)
                if obj_type.name == SCHEMA_TYPE_NAME => {
                let diagnostics =
                    SchemaImportValidator::new(self.file, obj_type)
                        .validate();
                self.diagnostics.extend(diagnostics);
            },

            ast::schema::TypeDefinition::Object(obj_type) => {
                let diagnostics =
                    EntityTypeValidator::new(&self.ctx, self.file, obj_type)
                        .validate();
                self.diagnostics.extend(diagnostics);
            },

            ast::schema::TypeDefinition::Enum(_)
            | ast::schema::TypeDefinition::Interface(_)
            | ast::schema::TypeDefinition::Scalar(_)
            | ast::schema::TypeDefinition::Union(_)
            | ast::schema::TypeDefinition::InputObject(_) => (),
        }
    }

    fn validate_type_extension(
        &mut self,
        type_ext: &'a ast::schema::TypeExtension,
    ) {
        match type_ext {
            // Object type extensions are accepted but currently unchecked.
            // The arm is kept explicit so the dispatch stays exhaustive.
            ast::schema::TypeExtension::Object(obj_type_ext) =>
                self.validate_object_type_extension(obj_type_ext),

            ast::schema::TypeExtension::Scalar(_)
            | ast::schema::TypeExtension::Interface(_)
            | ast::schema::TypeExtension::Union(_)
            | ast::schema::TypeExtension::Enum(_)
            | ast::schema::TypeExtension::InputObject(_) => (),
        }
    }

    fn validate_object_type_extension(
        &mut self,
        _obj_type_ext: &'a ast::schema::ObjectTypeExtension,
    ) {
    }

    /// Flags every type name that appears more than once across the local
    /// and imported names, exactly once per colliding name no matter how
    /// many repeats occur.
    fn check_name_collisions(&mut self) {
        let mut seen_names: HashSet<&str> = HashSet::new();
        let mut flagged_names: HashSet<&str> = HashSet::new();

        let all_names =
            self.ctx.local_type_names().iter()
                .copied()
                .chain(
                    self.ctx.imported_type_names().iter()
                        .map(|name| name.as_str()),
                );
        for name in all_names {
            if !seen_names.insert(name) && flagged_names.insert(name) {
                self.diagnostics.push(Diagnostic::new(
                    loc::FilePosition::synthetic(),
                    name,
                    format!("Type '{name}' is defined more than once"),
                ));
            }
        }
    }
}
