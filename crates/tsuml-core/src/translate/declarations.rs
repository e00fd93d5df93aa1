//! Declaration building: classes, interfaces, enums, type aliases.

use super::context::TranslationContext;
use super::members::{extract_method, extract_property};
use super::types::{decl_symbol_path, display_name, NameSource};
use crate::diagnostics::DiagnosticKind;
use crate::frontend::{AliasShape, DeclRef};
use crate::model::{
    ClassEntity, EntityKind, EnumEntity, InterfaceEntity, MethodDetail, PropertyDetail,
    TypeAliasEntity,
};

/// Display name used when a declaration's name cannot be computed.
pub const UNRESOLVED_NAME: &str = "undefined";

/// Build a class entity.
///
/// Parameters of the first constructor that carry an accessibility or
/// `readonly` modifier are appended to the declared properties.
pub fn build_class(ctx: &mut TranslationContext<'_>, decl: DeclRef) -> ClassEntity {
    let frontend = ctx.frontend();
    let name = entity_name(ctx, decl, EntityKind::Class);
    let id = entity_id(ctx, decl, EntityKind::Class);

    let mut properties = extract_properties(ctx, frontend.properties(decl));
    if let Some(ctor) = frontend.constructors(decl).first() {
        let promoted = frontend
            .parameters(*ctor)
            .into_iter()
            .filter(|param| frontend.modifier_flags(*param).is_parameter_property());
        properties.extend(extract_properties(ctx, promoted));
    }
    let methods = extract_methods(ctx, frontend.methods(decl));

    ClassEntity {
        name,
        id,
        properties,
        methods,
    }
}

/// Build an interface entity. Merging is the caller's concern.
pub fn build_interface(ctx: &mut TranslationContext<'_>, decl: DeclRef) -> InterfaceEntity {
    let frontend = ctx.frontend();
    let name = entity_name(ctx, decl, EntityKind::Interface);
    let id = entity_id(ctx, decl, EntityKind::Interface);

    InterfaceEntity {
        name,
        id,
        properties: extract_properties(ctx, frontend.properties(decl)),
        methods: extract_methods(ctx, frontend.methods(decl)),
    }
}

/// Build a type alias entity.
///
/// Only aliases of object type literals convert; any other alias yields `None`.
pub fn build_type_alias(
    ctx: &mut TranslationContext<'_>,
    decl: DeclRef,
) -> Option<TypeAliasEntity> {
    let frontend = ctx.frontend();
    let name = entity_name(ctx, decl, EntityKind::TypeAlias);

    let (properties, methods) = match frontend.alias_shape(decl) {
        AliasShape::TypeLiteral {
            properties,
            methods,
        } => (properties, methods),
        AliasShape::Other => {
            log::debug!("skipping type alias {}: not an object type literal", name);
            ctx.report(
                DiagnosticKind::UnconvertibleAlias,
                format!("type {} is not an object type literal", name),
            );
            return None;
        }
    };

    let id = entity_id(ctx, decl, EntityKind::TypeAlias);

    Some(TypeAliasEntity {
        name,
        id,
        properties: extract_properties(ctx, properties),
        methods: extract_methods(ctx, methods),
    })
}

/// Build an enum entity from its symbol and ordered member names.
pub fn build_enum(ctx: &mut TranslationContext<'_>, decl: DeclRef) -> EnumEntity {
    let frontend = ctx.frontend();
    let name = match frontend.decl_symbol(decl) {
        Some(symbol) => frontend.symbol_name(symbol),
        None => {
            ctx.report(DiagnosticKind::UnresolvableName, "enum has no symbol");
            UNRESOLVED_NAME.to_string()
        }
    };
    let id = entity_id(ctx, decl, EntityKind::Enum);
    let enum_items = frontend
        .enum_members(decl)
        .into_iter()
        .map(|member| frontend.decl_name(member))
        .collect();

    EnumEntity {
        name,
        id,
        enum_items,
    }
}

fn entity_name(ctx: &mut TranslationContext<'_>, decl: DeclRef, kind: EntityKind) -> String {
    match display_name(ctx.frontend(), NameSource::Declaration(decl)) {
        Some(name) => name,
        None => {
            log::info!("could not determine {} name", kind);
            ctx.report(
                DiagnosticKind::UnresolvableName,
                format!("could not determine {} name", kind),
            );
            UNRESOLVED_NAME.to_string()
        }
    }
}

fn entity_id(ctx: &mut TranslationContext<'_>, decl: DeclRef, kind: EntityKind) -> String {
    match decl_symbol_path(ctx.frontend(), decl) {
        Some(id) => id,
        None => {
            log::warn!("missing {} id", kind);
            ctx.report(DiagnosticKind::MissingIdentity, format!("missing {} id", kind));
            String::new()
        }
    }
}

fn extract_properties(
    ctx: &TranslationContext<'_>,
    decls: impl IntoIterator<Item = DeclRef>,
) -> Vec<PropertyDetail> {
    decls
        .into_iter()
        .filter_map(|decl| extract_property(ctx.frontend(), decl))
        .collect()
}

fn extract_methods(
    ctx: &TranslationContext<'_>,
    decls: impl IntoIterator<Item = DeclRef>,
) -> Vec<MethodDetail> {
    decls
        .into_iter()
        .filter_map(|decl| extract_method(ctx.frontend(), decl))
        .collect()
}
