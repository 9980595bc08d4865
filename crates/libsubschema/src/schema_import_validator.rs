use crate::ast;
use crate::diagnostic::Diagnostic;
use crate::loc;
use crate::schema_context::IMPORT_DIRECTIVE;
use crate::schema_context::SCHEMA_TYPE_NAME;
use std::path::Path;

/// Validates the reserved `_Schema_` type: it may not declare fields, it may
/// only carry `@import` directives, and each `@import` directive's `types`
/// and `from` arguments must match their accepted shapes.
pub(crate) struct SchemaImportValidator<'a> {
    diagnostics: Vec<Diagnostic>,
    file: Option<&'a Path>,
    obj_type: &'a ast::schema::ObjectType,
}
impl<'a> SchemaImportValidator<'a> {
    pub fn new(
        file: Option<&'a Path>,
        obj_type: &'a ast::schema::ObjectType,
    ) -> Self {
        Self {
            diagnostics: vec![],
            file,
            obj_type,
        }
    }

    pub fn validate(mut self) -> Vec<Diagnostic> {
        self.check_no_fields();
        self.check_directive_names();
        for directive in &self.obj_type.directives {
            if directive.name == IMPORT_DIRECTIVE {
                self.check_types_argument(directive);
                self.check_from_argument(directive);
            }
        }
        self.diagnostics
    }

    fn check_no_fields(&mut self) {
        if self.obj_type.fields.is_empty() {
            return;
        }
        self.push_diagnostic(self.obj_type.position, format!(
            "The {SCHEMA_TYPE_NAME} type is not allowed any fields by \
            convention",
        ));
    }

    fn check_directive_names(&mut self) {
        for directive in &self.obj_type.directives {
            if directive.name != IMPORT_DIRECTIVE {
                self.push_diagnostic(directive.position, format!(
                    "@{} is not allowed on the {SCHEMA_TYPE_NAME} type; only \
                    @{IMPORT_DIRECTIVE} directives are allowed here",
                    directive.name,
                ));
            }
        }
    }

    fn check_types_argument(&mut self, directive: &ast::schema::Directive) {
        let types_arg = ast::find_directive_argument(directive, "types");
        match types_arg {
            None => self.push_diagnostic(directive.position, format!(
                "@{IMPORT_DIRECTIVE} directive: argument 'types' must be \
                specified",
            )),

            Some(ast::schema::Value::List(imports)) => {
                for import in imports {
                    self.check_type_import(directive, import);
                }
            },

            Some(_) => self.push_diagnostic(directive.position, format!(
                "@{IMPORT_DIRECTIVE} directive: argument 'types' must be a \
                list",
            )),
        }
    }

    /// Each member of the `types` list is either a plain string or an object
    /// of exactly the shape `{ name: "TypeName", as: "Alias" }`.
    fn check_type_import(
        &mut self,
        directive: &ast::schema::Directive,
        import: &ast::schema::Value,
    ) {
        match import {
            ast::schema::Value::String(_) => (),

            ast::schema::Value::Object(fields) if fields.len() == 2 => {
                for (key, value) in fields {
                    if key != "name" && key != "as" {
                        self.push_diagnostic(directive.position, format!(
                            "@{IMPORT_DIRECTIVE} directive: key '{key}' is \
                            not allowed in a type import; only 'name' and \
                            'as' are allowed",
                        ));
                    } else if !matches!(value, ast::schema::Value::String(_)) {
                        self.push_diagnostic(directive.position, format!(
                            "@{IMPORT_DIRECTIVE} directive: value of the \
                            '{key}' key in a type import must be a string",
                        ));
                    }
                }
            },

            _ => self.push_diagnostic(directive.position, format!(
                "@{IMPORT_DIRECTIVE} directive: type imports must be either \
                a string (e.g. \"TypeName\") or an object of the form \
                {{ name: \"TypeName\", as: \"Alias\" }}",
            )),
        }
    }

    /// The `from` argument is an object with a single string-valued field
    /// named either `name` or `id`.
    fn check_from_argument(&mut self, directive: &ast::schema::Directive) {
        let from_arg = ast::find_directive_argument(directive, "from");
        match from_arg {
            None => self.push_diagnostic(directive.position, format!(
                "@{IMPORT_DIRECTIVE} directive: argument 'from' must be \
                specified",
            )),

            Some(ast::schema::Value::Object(fields)) => {
                if fields.len() != 1 {
                    self.push_diagnostic(directive.position, format!(
                        "@{IMPORT_DIRECTIVE} directive: argument 'from' must \
                        be an object with exactly one 'name' or 'id' key",
                    ));
                    return;
                }
                let Some((key, value)) = fields.iter().next() else {
                    return;
                };
                if key != "name" && key != "id" {
                    self.push_diagnostic(directive.position, format!(
                        "@{IMPORT_DIRECTIVE} directive: key '{key}' is not \
                        allowed in the 'from' argument; only 'name' or 'id' \
                        are allowed",
                    ));
                } else if !matches!(value, ast::schema::Value::String(_)) {
                    self.push_diagnostic(directive.position, format!(
                        "@{IMPORT_DIRECTIVE} directive: value of the '{key}' \
                        key in the 'from' argument must be a string",
                    ));
                }
            },

            Some(_) => self.push_diagnostic(directive.position, format!(
                "@{IMPORT_DIRECTIVE} directive: argument 'from' must be an \
                object",
            )),
        }
    }

    fn push_diagnostic(
        &mut self,
        position: graphql_parser::Pos,
        message: String,
    ) {
        self.diagnostics.push(Diagnostic::new(
            loc::FilePosition::from_pos(self.file, position),
            SCHEMA_TYPE_NAME,
            message,
        ));
    }
}
