//! Member extraction: properties and methods.

use super::types::{display_type, resolve_type_ids, type_ids_from_symbol};
use crate::frontend::{DeclRef, Frontend, SymbolRef};
use crate::model::{ArgumentIds, MethodDetail, PropertyDetail};

/// Convert a property, property signature, or parameter property.
///
/// Returns `None` when the declaration has no symbol. Modifiers are passed
/// through untouched.
pub fn extract_property(frontend: &dyn Frontend, decl: DeclRef) -> Option<PropertyDetail> {
    let symbol = frontend.decl_symbol(decl)?;

    Some(PropertyDetail {
        name: frontend.symbol_name(symbol),
        modifier_flags: frontend.modifier_flags(decl),
        type_name: property_type_name(frontend, symbol),
        type_ids: type_ids_from_symbol(frontend, symbol),
    })
}

/// Convert a method or method signature.
///
/// Returns `None` when the declaration has no symbol.
pub fn extract_method(frontend: &dyn Frontend, decl: DeclRef) -> Option<MethodDetail> {
    let symbol = frontend.decl_symbol(decl)?;
    let return_type = frontend.return_type(decl);
    let parameters = frontend.parameters(decl);

    let return_type_ids = return_type
        .filter(|ty| frontend.type_symbol(*ty).is_some())
        .map(|ty| resolve_type_ids(frontend, ty));

    let argument_ids: Vec<ArgumentIds> = parameters
        .iter()
        .filter_map(|param| {
            let ty = frontend.decl_type(*param)?;
            frontend.type_symbol(ty)?;
            Some(ArgumentIds {
                name: frontend.decl_name(*param),
                ids: resolve_type_ids(frontend, ty),
                type_name: display_type(frontend, ty),
            })
        })
        .collect();

    let arguments = parameters
        .iter()
        .filter_map(|param| frontend.decl_type(*param))
        .filter_map(|ty| display_type(frontend, ty))
        .filter(|text| !text.is_empty())
        .collect();

    Some(MethodDetail {
        name: frontend.symbol_name(symbol),
        modifier_flags: frontend.modifier_flags(decl),
        return_type: return_type.and_then(|ty| display_type(frontend, ty)),
        return_type_ids,
        arguments,
        argument_ids: (!argument_ids.is_empty()).then_some(argument_ids),
    })
}

fn property_type_name(frontend: &dyn Frontend, symbol: SymbolRef) -> Option<String> {
    let ty = frontend
        .value_declaration(symbol)
        .and_then(|decl| frontend.decl_type(decl))?;
    display_type(frontend, ty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::{DeclRecord, DeclKind, MemoryProgram};
    use crate::model::ModifierFlags;

    #[test]
    fn test_property_with_class_type() {
        let mut program = MemoryProgram::new();
        let file = program.add_file("src/car.ts");
        let car = program.declare_class(file, "Car");
        let engine = program.declare_class(file, "Engine");
        let engine_ty = program.type_of(engine).unwrap();
        let prop = program.add_property(car, "engine", engine_ty, ModifierFlags::PRIVATE);

        let detail = extract_property(&program, prop).unwrap();
        assert_eq!(detail.name, "engine");
        assert_eq!(detail.type_name.as_deref(), Some("Engine"));
        assert_eq!(detail.type_ids, vec!["\"src/car\".Engine"]);
        assert_eq!(detail.modifier_flags, ModifierFlags::PRIVATE);
    }

    #[test]
    fn test_property_without_symbol_is_skipped() {
        let mut program = MemoryProgram::new();
        let prop = program.add_decl(DeclRecord {
            kind: DeclKind::Property,
            name: "ghost".to_string(),
            ..Default::default()
        });

        assert!(extract_property(&program, prop).is_none());
    }

    #[test]
    fn test_modifiers_pass_through() {
        let mut program = MemoryProgram::new();
        let file = program.add_file("a.ts");
        let owner = program.declare_class(file, "Counter");
        let number = program.primitive("number");
        let flags = ModifierFlags::PRIVATE | ModifierFlags::STATIC | ModifierFlags::READONLY;
        let prop = program.add_property(owner, "count", number, flags);

        let detail = extract_property(&program, prop).unwrap();
        assert_eq!(detail.modifier_flags, flags);
        assert!(detail.type_ids.is_empty());
    }

    #[test]
    fn test_method_signature() {
        let mut program = MemoryProgram::new();
        let file = program.add_file("src/garage.ts");
        let garage = program.declare_class(file, "Garage");
        let car = program.declare_class(file, "Car");
        let car_ty = program.type_of(car).unwrap();
        let cars = program.array_of(car_ty);
        let number = program.primitive("number");
        let method = program.add_method(
            garage,
            "park",
            &[("car", car_ty), ("slot", number)],
            cars,
            ModifierFlags::PUBLIC,
        );

        let detail = extract_method(&program, method).unwrap();
        assert_eq!(detail.name, "park");
        assert_eq!(detail.return_type.as_deref(), Some("Car[]"));
        assert_eq!(
            detail.return_type_ids,
            Some(vec!["\"src/garage\".Car".to_string()])
        );
        assert_eq!(detail.arguments, vec!["Car", "number"]);

        let argument_ids = detail.argument_ids.unwrap();
        assert_eq!(argument_ids.len(), 1);
        assert_eq!(argument_ids[0].name, "car");
        assert_eq!(argument_ids[0].ids, vec!["\"src/garage\".Car"]);
        assert_eq!(argument_ids[0].type_name.as_deref(), Some("Car"));
    }

    #[test]
    fn test_method_with_primitive_signature() {
        let mut program = MemoryProgram::new();
        let file = program.add_file("a.ts");
        let owner = program.declare_interface(file, "Shape");
        let number = program.primitive("number");
        let blank = program.primitive("");
        let method = program.add_method(
            owner,
            "scale",
            &[("factor", number), ("unused", blank)],
            number,
            ModifierFlags::NONE,
        );

        let detail = extract_method(&program, method).unwrap();
        assert_eq!(detail.return_type.as_deref(), Some("number"));
        assert_eq!(detail.return_type_ids, None);
        assert_eq!(detail.arguments, vec!["number"]);
        assert_eq!(detail.argument_ids, None);
    }
}
