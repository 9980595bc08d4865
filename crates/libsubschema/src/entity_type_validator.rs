use crate::ast;
use crate::diagnostic::Diagnostic;
use crate::field_validator::FieldValidator;
use crate::loc;
use crate::schema_context::ENTITY_DIRECTIVE;
use crate::schema_context::IMPORT_DIRECTIVE;
use crate::schema_context::SCHEMA_TYPE_NAME;
use crate::schema_context::SchemaContext;
use std::path::Path;

/// Validates a plain object type definition (any object type other than the
/// reserved `_Schema_` type) as an entity declaration.
///
/// All checks are independent and their diagnostics are concatenated; an
/// earlier finding never suppresses a later one.
pub(crate) struct EntityTypeValidator<'a> {
    ctx: &'a SchemaContext<'a>,
    diagnostics: Vec<Diagnostic>,
    file: Option<&'a Path>,
    obj_type: &'a ast::schema::ObjectType,
}
impl<'a> EntityTypeValidator<'a> {
    pub fn new(
        ctx: &'a SchemaContext<'a>,
        file: Option<&'a Path>,
        obj_type: &'a ast::schema::ObjectType,
    ) -> Self {
        Self {
            ctx,
            diagnostics: vec![],
            file,
            obj_type,
        }
    }

    pub fn validate(mut self) -> Vec<Diagnostic> {
        self.check_entity_directive();
        self.check_id_field();
        for field in &self.obj_type.fields {
            self.diagnostics.extend(FieldValidator::new(
                self.ctx,
                self.file,
                self.obj_type.name.as_str(),
                field,
            ).validate());
        }
        self.check_no_import_directive();
        self.diagnostics
    }

    fn check_entity_directive(&mut self) {
        let entity_directive =
            ast::find_directive(&self.obj_type.directives, ENTITY_DIRECTIVE);
        if entity_directive.is_none() {
            self.push_diagnostic(
                self.obj_type.position,
                "Defined without @entity directive".to_string(),
            );
        }
    }

    /// Every entity must declare an `id` field of exactly the type `ID!`.
    /// No other representation of an ID is accepted.
    fn check_id_field(&mut self) {
        let id_field = ast::find_field(&self.obj_type.fields, "id");
        let Some(id_field) = id_field else {
            self.push_diagnostic(
                self.obj_type.position,
                "Missing field: id: ID!".to_string(),
            );
            return;
        };

        let has_valid_id_type = matches!(
            &id_field.field_type,
            ast::schema::Type::NonNullType(inner)
                if matches!(
                    inner.as_ref(),
                    ast::schema::Type::NamedType(name) if name == "ID",
                )
        );
        if !has_valid_id_type {
            self.push_diagnostic(
                id_field.position,
                "Entity IDs must be of type ID!".to_string(),
            );
        }
    }

    fn check_no_import_directive(&mut self) {
        let import_directive =
            ast::find_directive(&self.obj_type.directives, IMPORT_DIRECTIVE);
        if let Some(import_directive) = import_directive {
            self.push_diagnostic(import_directive.position, format!(
                "@{IMPORT_DIRECTIVE} directives are only allowed on the \
                {SCHEMA_TYPE_NAME} type",
            ));
        }
    }

    fn push_diagnostic(
        &mut self,
        position: graphql_parser::Pos,
        message: String,
    ) {
        self.diagnostics.push(Diagnostic::new(
            loc::FilePosition::from_pos(self.file, position),
            self.obj_type.name.as_str(),
            message,
        ));
    }
}
