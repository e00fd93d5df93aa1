//! Type reference resolution: identities, display strings, display names.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::frontend::{DeclRef, Frontend, SymbolRef, TypeRef, TypeShape};

/// `import("/abs/path/module").` qualifiers the checker prints for types that
/// live in other modules.
static IMPORT_QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"import\([\d\D]*?\)\.").unwrap());

/// Name the checker gives to symbols of anonymous object types.
const ANONYMOUS_TYPE_NAME: &str = "__type";

/// Identities a type refers to.
///
/// Unions and intersections contribute every member's identities without
/// deduplication; arrays contribute their element's. Type parameters never
/// resolve. Anything unresolvable yields an empty list, and so does a type
/// that refers back to itself.
pub fn resolve_type_ids(frontend: &dyn Frontend, ty: TypeRef) -> Vec<String> {
    resolve_ids_guarded(frontend, ty, &mut HashSet::new())
}

/// `enclosing` holds the types currently being expanded, so repeated
/// siblings still resolve while cycles stop.
fn resolve_ids_guarded(
    frontend: &dyn Frontend,
    ty: TypeRef,
    enclosing: &mut HashSet<TypeRef>,
) -> Vec<String> {
    if !enclosing.insert(ty) {
        log::debug!("recursive type {:?} has no further identities", ty);
        return Vec::new();
    }

    let ids = match frontend.type_shape(ty) {
        TypeShape::Class | TypeShape::Interface | TypeShape::Enum => {
            type_symbol_path(frontend, ty).into_iter().collect()
        }
        TypeShape::Union(members) | TypeShape::Intersection(members) => members
            .into_iter()
            .flat_map(|member| resolve_ids_guarded(frontend, member, enclosing))
            .collect(),
        TypeShape::Array(element) => element
            .map(|e| resolve_ids_guarded(frontend, e, enclosing))
            .unwrap_or_default(),
        TypeShape::Anonymous => frontend
            .alias_symbol(ty)
            .and_then(|s| frontend.fully_qualified_name(s))
            .into_iter()
            .collect(),
        TypeShape::TypeParameter => Vec::new(),
        TypeShape::Other => type_symbol_path(frontend, ty).into_iter().collect(),
    };

    enclosing.remove(&ty);
    ids
}

/// Identities of the type of a symbol's value declaration.
pub fn type_ids_from_symbol(frontend: &dyn Frontend, symbol: SymbolRef) -> Vec<String> {
    frontend
        .value_declaration(symbol)
        .and_then(|decl| frontend.decl_type(decl))
        .map(|ty| resolve_type_ids(frontend, ty))
        .unwrap_or_default()
}

/// Fully-qualified path of the symbol of a type.
pub fn type_symbol_path(frontend: &dyn Frontend, ty: TypeRef) -> Option<String> {
    frontend
        .type_symbol(ty)
        .and_then(|s| frontend.fully_qualified_name(s))
}

/// Fully-qualified path of the symbol bound to a declaration.
pub fn decl_symbol_path(frontend: &dyn Frontend, decl: DeclRef) -> Option<String> {
    frontend
        .decl_symbol(decl)
        .and_then(|s| frontend.fully_qualified_name(s))
        .filter(|path| !path.is_empty())
}

/// Display string of a type.
///
/// Arrays render as `Element[]`, or a bare `[]` when the element has no
/// display text. Other types, and arrays that contain themselves, use the
/// checker's text with module import qualifiers removed.
pub fn display_type(frontend: &dyn Frontend, ty: TypeRef) -> Option<String> {
    display_guarded(frontend, ty, &mut HashSet::new())
}

fn display_guarded(
    frontend: &dyn Frontend,
    ty: TypeRef,
    enclosing: &mut HashSet<TypeRef>,
) -> Option<String> {
    let printed = || strip_import_qualifiers(&frontend.type_text(ty));

    let TypeShape::Array(element) = frontend.type_shape(ty) else {
        return Some(printed());
    };
    if !enclosing.insert(ty) {
        return Some(printed());
    }

    let element = element
        .and_then(|e| display_guarded(frontend, e, enclosing))
        .filter(|name| !name.is_empty());
    enclosing.remove(&ty);

    Some(match element {
        Some(name) => format!("{}[]", name),
        None => "[]".to_string(),
    })
}

/// Remove every `import("...").` qualifier from printed type text.
pub fn strip_import_qualifiers(text: &str) -> String {
    IMPORT_QUALIFIER.replace_all(text, "").into_owned()
}

/// Something a display name can be computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    /// Class, interface, or type alias declaration, or a heritage reference.
    Declaration(DeclRef),
    /// A checked type.
    Type(TypeRef),
}

/// Display name including a generic parameter list, e.g. `Map<K,V>`.
///
/// Returns `None` when a required symbol is missing or the declaration kind
/// cannot carry type parameters (mapped types and similar shapes).
pub fn display_name(frontend: &dyn Frontend, source: NameSource) -> Option<String> {
    let (name, generics) = match source {
        NameSource::Declaration(decl) => {
            if frontend.is_expression_with_type_arguments(decl) {
                return Some(frontend.decl_text(decl));
            }
            let generics = frontend.type_parameters(decl)?;
            let symbol = frontend.decl_symbol(decl)?;
            (frontend.symbol_name(symbol), generics)
        }
        NameSource::Type(ty) => {
            let mut name = frontend.symbol_name(frontend.type_symbol(ty)?);
            if name == ANONYMOUS_TYPE_NAME {
                name = frontend.symbol_name(frontend.alias_symbol(ty)?);
            }
            let generics = frontend
                .type_arguments(ty)
                .into_iter()
                .map(|arg| frontend.type_symbol(arg).map(|s| frontend.symbol_name(s)))
                .collect::<Option<Vec<_>>>()?;
            (name, generics)
        }
    };

    if generics.is_empty() {
        Some(name)
    } else {
        Some(format!("{}<{}>", name, generics.join(",")))
    }
}
