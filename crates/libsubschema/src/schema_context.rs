use crate::ast;
use indexmap::IndexSet;
use std::collections::HashSet;

/// Name of the reserved type declaration that carries `@import` directives.
/// It is the only place imports are permitted, and it may not define fields.
pub(crate) const SCHEMA_TYPE_NAME: &str = "_Schema_";

pub(crate) const ENTITY_DIRECTIVE: &str = "entity";
pub(crate) const IMPORT_DIRECTIVE: &str = "import";
pub(crate) const DERIVED_FROM_DIRECTIVE: &str = "derivedFrom";

lazy_static::lazy_static! {
    pub(crate) static ref BUILTIN_SCALAR_NAMES: HashSet<&'static str> = {
        HashSet::from([
            "Boolean",
            "Int",
            "BigDecimal",
            "String",
            "BigInt",
            "Bytes",
            "ID",
        ])
    };
}

/// An object or interface definition carrying the `@entity` directive.
#[derive(Clone, Copy, Debug)]
pub(crate) enum EntityDef<'a> {
    Interface(&'a ast::schema::InterfaceType),
    Object(&'a ast::schema::ObjectType),
}
impl<'a> EntityDef<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            EntityDef::Interface(iface_type) => iface_type.name.as_str(),
            EntityDef::Object(obj_type) => obj_type.name.as_str(),
        }
    }

    pub fn fields(&self) -> &'a [ast::schema::Field] {
        match self {
            EntityDef::Interface(iface_type) => iface_type.fields.as_slice(),
            EntityDef::Object(obj_type) => obj_type.fields.as_slice(),
        }
    }
}

/// Symbols gathered from a full schema document in one up-front pass: the
/// locally defined type names, the type names made visible by `@import`
/// directives on the reserved schema type, and fast membership lookups over
/// their union with the built-in scalars.
#[derive(Debug)]
pub(crate) struct SchemaContext<'a> {
    definitions: &'a [ast::schema::Definition],
    imported_type_names: Vec<String>,
    known_type_names: IndexSet<String>,
    local_type_names: Vec<&'a str>,
}
impl<'a> SchemaContext<'a> {
    pub fn new(doc: &'a ast::schema::Document) -> Self {
        let definitions = doc.definitions.as_slice();
        let local_type_names = gather_local_type_names(definitions);
        let imported_type_names = gather_imported_type_names(definitions);

        let known_type_names =
            local_type_names.iter()
                .map(|name| name.to_string())
                .chain(imported_type_names.iter().cloned())
                .collect();

        Self {
            definitions,
            imported_type_names,
            known_type_names,
            local_type_names,
        }
    }

    pub fn definitions(&self) -> &'a [ast::schema::Definition] {
        self.definitions
    }

    pub fn imported_type_names(&self) -> &[String] {
        self.imported_type_names.as_slice()
    }

    pub fn local_type_names(&self) -> &[&'a str] {
        self.local_type_names.as_slice()
    }

    /// True if `name` resolves against the union of built-in scalar names,
    /// locally defined type names, and imported type names.
    pub fn is_defined_type(&self, name: &str) -> bool {
        BUILTIN_SCALAR_NAMES.contains(name)
            || self.known_type_names.contains(name)
    }

    /// Resolves `name` to a local object or interface definition carrying
    /// the `@entity` directive, if one exists.
    pub fn entity_type(&self, name: &str) -> Option<EntityDef<'a>> {
        self.definitions.iter().find_map(|def| {
            let ast::schema::Definition::TypeDefinition(type_def) = def else {
                return None;
            };
            let entity_def = match type_def {
                ast::schema::TypeDefinition::Object(obj_type)
                    if obj_type.name == name => EntityDef::Object(obj_type),
                ast::schema::TypeDefinition::Interface(iface_type)
                    if iface_type.name == name => EntityDef::Interface(iface_type),
                _ => return None,
            };

            let directives = match entity_def {
                EntityDef::Object(obj_type) => &obj_type.directives,
                EntityDef::Interface(iface_type) => &iface_type.directives,
            };
            if ast::find_directive(directives, ENTITY_DIRECTIVE).is_some() {
                Some(entity_def)
            } else {
                None
            }
        })
    }
}

/// Names of all object, enum, and interface definitions -- whether or not
/// they carry an `@entity` directive.
fn gather_local_type_names(
    definitions: &[ast::schema::Definition],
) -> Vec<&str> {
    definitions.iter().filter_map(|def| {
        let ast::schema::Definition::TypeDefinition(type_def) = def else {
            return None;
        };
        match type_def {
            ast::schema::TypeDefinition::Object(obj_type) =>
                Some(obj_type.name.as_str()),
            ast::schema::TypeDefinition::Enum(enum_type) =>
                Some(enum_type.name.as_str()),
            ast::schema::TypeDefinition::Interface(iface_type) =>
                Some(iface_type.name.as_str()),
            ast::schema::TypeDefinition::Scalar(_)
            | ast::schema::TypeDefinition::Union(_)
            | ast::schema::TypeDefinition::InputObject(_) => None,
        }
    }).collect()
}

/// Names made visible by `@import` directives on the reserved schema type.
///
/// Each imported item is either a plain string (the name is taken as-is) or
/// an object whose `as` field supplies the visible alias. Items of any other
/// shape are dropped here; the import-directive rule engine reports them
/// separately.
fn gather_imported_type_names(
    definitions: &[ast::schema::Definition],
) -> Vec<String> {
    let mut imported_names = vec![];
    for def in definitions {
        let ast::schema::Definition::TypeDefinition(
            ast::schema::TypeDefinition::Object(obj_type),
        ) = def else {
            continue;
        };
        if obj_type.name != SCHEMA_TYPE_NAME {
            continue;
        }

        for directive in &obj_type.directives {
            if directive.name != IMPORT_DIRECTIVE {
                continue;
            }
            let types_arg = ast::find_directive_argument(directive, "types");
            let Some(ast::schema::Value::List(imports)) = types_arg else {
                continue;
            };

            for import in imports {
                match import {
                    ast::schema::Value::String(name) =>
                        imported_names.push(name.to_owned()),

                    ast::schema::Value::Object(fields) =>
                        if let Some(ast::schema::Value::String(alias))
                            = fields.get("as") {
                            imported_names.push(alias.to_owned());
                        },

                    _ => (),
                }
            }
        }
    }
    imported_names
}
