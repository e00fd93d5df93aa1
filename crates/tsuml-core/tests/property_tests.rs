use proptest::prelude::*;

use tsuml_core::model::ModifierFlags;
use tsuml_core::translate::{display_type, resolve_type_ids};
use tsuml_core::{translate, MemoryProgram, TranslateConfig};

fn type_name() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,12}"
}

proptest! {
    #[test]
    fn array_member_mirrors_element(name in type_name()) {
        let mut program = MemoryProgram::new();
        let file = program.add_file("src/list.ts");
        let owner = program.declare_class(file, "List");
        let element = program.declare_class(file, &name);
        let element_ty = program.type_of(element).unwrap();
        let array = program.array_of(element_ty);
        program.add_property(owner, "items", array, ModifierFlags::NONE);

        let translation = translate(&program, &TranslateConfig::default());
        let prop = &translation.files[0].classes[0].properties[0];

        let element_display = display_type(&program, element_ty).unwrap();
        prop_assert_eq!(prop.type_name.clone(), Some(format!("{}[]", element_display)));
        prop_assert_eq!(prop.type_ids.clone(), resolve_type_ids(&program, element_ty));
        prop_assert_eq!(prop.type_ids.clone(), vec![format!("\"src/list\".{}", name)]);
    }

    #[test]
    fn type_parameter_members_have_no_ids(name in type_name(), depth in 0usize..3) {
        let mut program = MemoryProgram::new();
        let file = program.add_file("src/box.ts");
        let owner = program.declare_class(file, "Box");
        program.set_type_parameters(owner, &[name.as_str()]);
        let mut ty = program.type_parameter(&name);
        for _ in 0..depth {
            ty = program.array_of(ty);
        }
        program.add_property(owner, "value", ty, ModifierFlags::NONE);

        let translation = translate(&program, &TranslateConfig::with_member_associations());
        let class = &translation.files[0].classes[0];

        prop_assert!(class.properties[0].type_ids.is_empty());
        prop_assert!(translation.files[0].member_associations.is_empty());
    }

    #[test]
    fn merged_interfaces_concatenate_in_order(
        first in proptest::collection::vec("[a-z]{1,8}", 0..4),
        second in proptest::collection::vec("[a-z]{1,8}", 0..4),
    ) {
        let mut program = MemoryProgram::new();
        let number = program.primitive("number");
        for (path, methods) in [("src/a.ts", &first), ("src/b.ts", &second)] {
            let file = program.add_file(path);
            let shape = program.declare_interface(file, "Shape");
            for method in methods {
                program.add_method(shape, method, &[], number, ModifierFlags::NONE);
            }
        }

        let translation = translate(&program, &TranslateConfig::default());
        let expected: Vec<String> = first.iter().chain(second.iter()).cloned().collect();

        for file in &translation.files {
            let names: Vec<String> = file.interfaces[0]
                .methods
                .iter()
                .map(|m| m.name.clone())
                .collect();
            prop_assert_eq!(&names, &expected);
        }
    }
}
