//! Heritage resolution: EXTENDS and IMPLEMENTS edges.

use super::types::{
    decl_symbol_path, display_name, display_type, resolve_type_ids, type_symbol_path, NameSource,
};
use crate::frontend::{DeclRef, Frontend};
use crate::model::HeritageClause;

/// Heritage clauses of a class.
///
/// A single base class yields one `Extends` edge; otherwise each applied mixin
/// yields one. Every implemented interface adds an `Implements` edge named
/// after the generic target, so `Foo<Bar>` points at `Foo<T>`.
pub fn class_heritage(frontend: &dyn Frontend, decl: DeclRef) -> Vec<HeritageClause> {
    let mut clauses = Vec::new();

    let Some(class_name) = display_name(frontend, NameSource::Declaration(decl)) else {
        log::debug!("skipping heritage of unnamed class");
        return clauses;
    };
    let class_type_id = decl_symbol_path(frontend, decl).unwrap_or_default();

    if let Some(base) = frontend.base_class(decl) {
        if let Some(base_name) = display_name(frontend, NameSource::Declaration(base)) {
            clauses.push(HeritageClause::extends(
                &class_name,
                &class_type_id,
                base_name,
                decl_symbol_path(frontend, base),
            ));
        }
    } else {
        for mixin in frontend.base_types(decl) {
            clauses.push(HeritageClause::extends(
                &class_name,
                &class_type_id,
                display_type(frontend, mixin).unwrap_or_default(),
                type_symbol_path(frontend, mixin),
            ));
        }
    }

    for reference in frontend.implements(decl) {
        let Some(ty) = frontend.decl_type(reference) else {
            continue;
        };
        let target = frontend.target_type(ty).unwrap_or(ty);
        let Some(interface_name) = display_name(frontend, NameSource::Type(target)) else {
            log::debug!("skipping unnamed interface implemented by {}", class_name);
            continue;
        };
        clauses.push(HeritageClause::implements(
            &class_name,
            &class_type_id,
            interface_name,
            resolve_type_ids(frontend, ty).into_iter().next(),
        ));
    }

    clauses
}

/// Heritage clauses of an interface: one `Implements` edge per base.
pub fn interface_heritage(frontend: &dyn Frontend, decl: DeclRef) -> Vec<HeritageClause> {
    let Some(interface_name) = display_name(frontend, NameSource::Declaration(decl)) else {
        log::debug!("skipping heritage of unnamed interface");
        return Vec::new();
    };
    let class_type_id = decl_symbol_path(frontend, decl).unwrap_or_default();

    frontend
        .base_declarations(decl)
        .into_iter()
        .filter_map(|base| {
            let base_name = display_name(frontend, NameSource::Declaration(base))?;
            let base_id = frontend
                .decl_type(base)
                .and_then(|ty| resolve_type_ids(frontend, ty).into_iter().next());
            Some(HeritageClause::implements(
                &interface_name,
                &class_type_id,
                base_name,
                base_id,
            ))
        })
        .collect()
}
