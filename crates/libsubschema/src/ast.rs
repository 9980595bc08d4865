pub mod schema {
    pub use graphql_parser::schema::ParseError;

    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type Directive = graphql_parser::schema::Directive<'static, String>;
    pub type Document = graphql_parser::schema::Document<'static, String>;
    pub type EnumType = graphql_parser::schema::EnumType<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InterfaceType = graphql_parser::schema::InterfaceType<'static, String>;
    pub type ObjectType = graphql_parser::schema::ObjectType<'static, String>;
    pub type ObjectTypeExtension = graphql_parser::schema::ObjectTypeExtension<'static, String>;
    pub type Type = graphql_parser::schema::Type<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
    pub type Value = graphql_parser::schema::Value<'static, String>;
}

/// Strips any number of list/non-null wrappers off a type expression and
/// returns the innermost named type.
pub fn innermost_named_type(type_: &schema::Type) -> &str {
    match type_ {
        schema::Type::NamedType(name) => name.as_str(),
        schema::Type::ListType(inner) => innermost_named_type(inner),
        schema::Type::NonNullType(inner) => innermost_named_type(inner),
    }
}

/// Renders a type expression back to its schema-source notation
/// (e.g. `[Token!]!`).
pub fn type_repr(type_: &schema::Type) -> String {
    match type_ {
        schema::Type::NamedType(name) => name.to_string(),
        schema::Type::ListType(inner) => format!("[{}]", type_repr(inner)),
        schema::Type::NonNullType(inner) => format!("{}!", type_repr(inner)),
    }
}

pub fn find_field<'a>(
    fields: &'a [schema::Field],
    name: &str,
) -> Option<&'a schema::Field> {
    fields.iter().find(|field| field.name == name)
}

pub fn find_directive<'a>(
    directives: &'a [schema::Directive],
    name: &str,
) -> Option<&'a schema::Directive> {
    directives.iter().find(|directive| directive.name == name)
}

pub fn find_directive_argument<'a>(
    directive: &'a schema::Directive,
    name: &str,
) -> Option<&'a schema::Value> {
    directive.arguments.iter().find_map(|(arg_name, arg_value)| {
        if arg_name == name {
            Some(arg_value)
        } else {
            None
        }
    })
}
