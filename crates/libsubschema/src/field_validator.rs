use crate::ast;
use crate::diagnostic::Diagnostic;
use crate::loc;
use crate::schema_context::DERIVED_FROM_DIRECTIVE;
use crate::schema_context::SchemaContext;
use crate::suggestions;
use std::path::Path;

/// Validates a single field of an entity-like type: list-nullability shape,
/// inner type resolution, absence of field arguments, and `@derivedFrom`
/// correctness.
pub(crate) struct FieldValidator<'a> {
    ctx: &'a SchemaContext<'a>,
    diagnostics: Vec<Diagnostic>,
    field: &'a ast::schema::Field,
    file: Option<&'a Path>,
    type_name: &'a str,
}
impl<'a> FieldValidator<'a> {
    pub fn new(
        ctx: &'a SchemaContext<'a>,
        file: Option<&'a Path>,
        type_name: &'a str,
        field: &'a ast::schema::Field,
    ) -> Self {
        Self {
            ctx,
            diagnostics: vec![],
            field,
            file,
            type_name,
        }
    }

    pub fn validate(mut self) -> Vec<Diagnostic> {
        self.check_list_shape();
        self.check_inner_type();
        self.check_no_arguments();
        for directive in &self.field.directives {
            if directive.name == DERIVED_FROM_DIRECTIVE {
                self.check_derived_from(directive);
            }
        }
        self.diagnostics
    }

    /// List-typed fields must wrap their element type in a non-null
    /// (`[T!]` or `[T!]!`); lists of nullable elements are always rejected.
    fn check_list_shape(&mut self) {
        let (element_type, outer_non_null) = match &self.field.field_type {
            ast::schema::Type::NonNullType(inner) => match inner.as_ref() {
                ast::schema::Type::ListType(element_type) =>
                    (element_type, true),
                _ => return,
            },
            ast::schema::Type::ListType(element_type) =>
                (element_type, false),
            ast::schema::Type::NamedType(_) => return,
        };

        if matches!(element_type.as_ref(), ast::schema::Type::NonNullType(_)) {
            return;
        }

        let suggested_type = format!(
            "[{}!]{}",
            ast::type_repr(element_type),
            if outer_non_null { "!" } else { "" },
        );
        self.push_diagnostic(self.field.position, format!(
            "Field '{}': Use the type '{}' instead of '{}'.\n\
            Lists with null elements are not supported.",
            self.field.name,
            suggested_type,
            ast::type_repr(&self.field.field_type),
        ));
    }

    /// The innermost named type must resolve against the union of built-in
    /// scalars, locally defined types, and imported types.
    fn check_inner_type(&mut self) {
        let inner_type_name = ast::innermost_named_type(&self.field.field_type);
        if self.ctx.is_defined_type(inner_type_name) {
            return;
        }

        let mut message = format!("Unknown type '{inner_type_name}'.");
        if let Some(suggestion) = suggestions::suggest_type(inner_type_name) {
            message.push_str(&format!(" Did you mean '{suggestion}'?"));
        }
        self.push_diagnostic(self.field.position, message);
    }

    fn check_no_arguments(&mut self) {
        if self.field.arguments.is_empty() {
            return;
        }
        self.push_diagnostic(self.field.position, format!(
            "Field '{}': Field arguments are not supported.",
            self.field.name,
        ));
    }

    fn check_derived_from(&mut self, directive: &ast::schema::Directive) {
        // The directive must carry exactly one argument, named `field`. The
        // arity and string-ness checks report independently since a
        // malformed directive can get both wrong at once.
        let field_arg = ast::find_directive_argument(directive, "field");
        if directive.arguments.len() != 1 || field_arg.is_none() {
            self.push_diagnostic(directive.position, format!(
                "@{DERIVED_FROM_DIRECTIVE} directive must have exactly one \
                'field' argument",
            ));
        }
        let Some(field_arg) = field_arg else {
            return;
        };

        let ast::schema::Value::String(derived_field_name) = field_arg else {
            self.push_diagnostic(directive.position, format!(
                "Value of the @{DERIVED_FROM_DIRECTIVE} 'field' argument \
                must be a string",
            ));
            return;
        };

        // If the field's own type doesn't resolve to a known entity there is
        // nothing further to check here: an unknown type name has already
        // been reported by the inner-type check, and re-reporting it through
        // the @derivedFrom lens would just be noise for the same root cause.
        let target_type_name =
            ast::innermost_named_type(&self.field.field_type);
        let Some(target_entity) = self.ctx.entity_type(target_type_name) else {
            return;
        };

        let derived_field =
            ast::find_field(target_entity.fields(), derived_field_name);
        let Some(derived_field) = derived_field else {
            self.push_diagnostic(directive.position, format!(
                "@{DERIVED_FROM_DIRECTIVE} field '{derived_field_name}' \
                does not exist on type '{}'",
                target_entity.name(),
            ));
            return;
        };

        // The back-reference field must point back at the origin entity.
        let backref_type_name =
            ast::innermost_named_type(&derived_field.field_type);
        let backref_resolves_to_origin =
            self.ctx.entity_type(backref_type_name)
                .is_some_and(|entity| entity.name() == self.type_name);
        if !backref_resolves_to_origin {
            let origin = self.type_name;
            self.push_diagnostic(directive.position, format!(
                "@{DERIVED_FROM_DIRECTIVE} field '{derived_field_name}' on \
                type '{}' must have the type '{origin}', '{origin}!', or \
                '[{origin}!]!'",
                target_entity.name(),
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
            self.type_name,
            message,
        ));
    }
}
