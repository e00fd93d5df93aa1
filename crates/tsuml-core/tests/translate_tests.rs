use tsuml_core::diagnostics::DiagnosticKind;
use tsuml_core::frontend::{TypeRecord, TypeShape};
use tsuml_core::model::{AssociationKind, Cardinality, ModifierFlags};
use tsuml_core::translate::EMPTY_RESULT_MESSAGE;
use tsuml_core::{
    translate, EntityKind, HeritageClauseType, MemoryProgram, TranslateConfig, Translator,
};

/// `class Dog { constructor(public name: string) {} }`
fn dog_program() -> MemoryProgram {
    let mut program = MemoryProgram::new();
    let file = program.add_file("src/dog.ts");
    let dog = program.declare_class(file, "Dog");
    let string = program.primitive("string");
    program.add_constructor(dog, &[("name", string, ModifierFlags::PUBLIC)]);
    program
}

/// `interface Shape { area(): number }` in two files, the second adding `perimeter`.
fn shape_program() -> MemoryProgram {
    let mut program = MemoryProgram::new();
    let number = program.primitive("number");
    let first = program.add_file("src/a.ts");
    let shape = program.declare_interface(first, "Shape");
    program.add_method(shape, "area", &[], number, ModifierFlags::NONE);
    let second = program.add_file("src/b.ts");
    let shape = program.declare_interface(second, "Shape");
    program.add_method(shape, "perimeter", &[], number, ModifierFlags::NONE);
    program
}

/// `class Car { engine: Engine }` and `class Engine {}`
fn car_program() -> MemoryProgram {
    let mut program = MemoryProgram::new();
    let file = program.add_file("src/car.ts");
    let car = program.declare_class(file, "Car");
    let engine = program.declare_class(file, "Engine");
    let engine_ty = program.type_of(engine).unwrap();
    program.add_property(car, "engine", engine_ty, ModifierFlags::NONE);
    program
}

#[test]
fn test_dog_parameter_property() {
    let translation = translate(&dog_program(), &TranslateConfig::default());

    assert!(translation.is_success());
    let file = translation.file("src/dog.ts").unwrap();
    let dog = &file.classes[0];
    assert_eq!(dog.name, "Dog");
    assert_eq!(dog.id, "\"src/dog\".Dog");
    assert_eq!(dog.properties.len(), 1);
    assert_eq!(dog.properties[0].name, "name");
    assert_eq!(dog.properties[0].type_name.as_deref(), Some("string"));
    assert!(dog.properties[0].type_ids.is_empty());
    assert!(file.heritage().all(|c| c.clause_type != HeritageClauseType::Extends));
    assert!(translation.diagnostics.is_empty());
}

#[test]
fn test_interface_merged_across_files() {
    let translation = translate(&shape_program(), &TranslateConfig::default());

    assert_eq!(translation.files.len(), 2);
    for file in &translation.files {
        let names: Vec<&str> = file.interfaces[0]
            .methods
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["area", "perimeter"], "in {}", file.file_name);
    }
    assert_eq!(
        translation.files[0].interfaces[0].methods,
        translation.files[1].interfaces[0].methods
    );
}

#[test]
fn test_merged_interface_keeps_per_file_identity() {
    let translation = translate(&shape_program(), &TranslateConfig::default());

    assert_eq!(translation.files[0].interfaces[0].id, "\"src/a\".Shape");
    assert_eq!(translation.files[1].interfaces[0].id, "\"src/b\".Shape");
}

#[test]
fn test_member_associations_enabled() {
    let translation = translate(&car_program(), &TranslateConfig::with_member_associations());

    let edges = &translation.files[0].member_associations;
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].from, "\"src/car\".Car");
    assert_eq!(edges[0].from_name, "Car");
    assert_eq!(edges[0].to, "\"src/car\".Engine");
    assert_eq!(edges[0].to_name, "Engine");
    assert_eq!(edges[0].label, "engine");
    assert_eq!(edges[0].kind, AssociationKind::Property);
    assert_eq!(edges[0].cardinality, Cardinality::One);
    assert_eq!(translation.stats().associations, 1);
}

#[test]
fn test_member_associations_disabled() {
    let translation = translate(&car_program(), &TranslateConfig::default());

    assert!(translation.files[0].member_associations.is_empty());
}

#[test]
fn test_class_heritage_counts() {
    let mut program = MemoryProgram::new();
    let file = program.add_file("src/zoo.ts");
    let animal = program.declare_class(file, "Animal");
    let dog = program.declare_class(file, "Dog");
    let pet = program.declare_interface(file, "Pet");
    let friend = program.declare_interface(file, "Friend");
    program.set_base_class(dog, animal);
    program.add_implements(dog, pet, &[]);
    program.add_implements(dog, friend, &[]);
    program.add_base_declaration(friend, pet);

    let translation = translate(&program, &TranslateConfig::default());
    let file = &translation.files[0];

    // Dog's clauses first, then Friend's.
    assert_eq!(file.heritage_clauses.len(), 2);
    let dog_clauses = &file.heritage_clauses[0];
    assert_eq!(
        dog_clauses
            .iter()
            .filter(|c| c.clause_type == HeritageClauseType::Extends)
            .count(),
        1
    );
    assert_eq!(
        dog_clauses
            .iter()
            .filter(|c| c.clause_type == HeritageClauseType::Implements)
            .count(),
        2
    );
    assert_eq!(file.heritage_clauses[1][0].class_name, "Friend");
    assert_eq!(file.heritage_clauses[1][0].clause, "Pet");

    let stats = translation.stats();
    assert_eq!(stats.extends, 1);
    assert_eq!(stats.implements, 3);
}

#[test]
fn test_entity_kinds_per_file() {
    let mut program = MemoryProgram::new();
    let file = program.add_file("src/model.ts");
    program.declare_class(file, "User");
    program.declare_interface(file, "Named");
    program.declare_enum(file, "Role", &["Admin", "Guest"]);
    let point = program.declare_type_literal(file, "Point");
    let number = program.primitive("number");
    program.add_property(point, "x", number, ModifierFlags::NONE);
    let string = program.primitive("string");
    program.declare_alias_of(file, "Id", string);

    let translation = translate(&program, &TranslateConfig::default());
    let file = &translation.files[0];

    assert_eq!(file.classes.len(), 1);
    assert_eq!(file.interfaces.len(), 1);
    assert_eq!(file.enums[0].enum_items, vec!["Admin", "Guest"]);
    assert_eq!(file.types.len(), 1);
    assert_eq!(file.types[0].name, "Point");
    assert_eq!(translation.stats().entities(), 4);
    let kinds: Vec<EntityKind> = translation.entities().iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            EntityKind::Class,
            EntityKind::Interface,
            EntityKind::Enum,
            EntityKind::TypeAlias
        ]
    );
    assert_eq!(
        translation.diagnostics[0].kind,
        DiagnosticKind::UnconvertibleAlias
    );
    assert_eq!(
        translation.diagnostics[0].file.as_deref(),
        Some("src/model.ts")
    );
}

#[test]
fn test_translation_is_idempotent() {
    let program = shape_program();
    let translator = Translator::new(&program, TranslateConfig::with_member_associations());

    assert_eq!(translator.translate(), translator.translate());
}

#[test]
fn test_empty_result_placeholder() {
    let mut program = MemoryProgram::new();
    let file = program.add_file("src/empty.ts");
    let string = program.primitive("string");
    program.declare_alias_of(file, "Id", string);

    let translation = translate(&program, &TranslateConfig::default());

    assert!(!translation.is_success());
    assert_eq!(translation.failure.as_deref(), Some(EMPTY_RESULT_MESSAGE));
    assert_eq!(translation.files.len(), 2);
    let placeholder = translation.files.last().unwrap();
    assert_eq!(placeholder.file_name, "");
    assert_eq!(placeholder.classes[0].name, EMPTY_RESULT_MESSAGE);
    assert_eq!(placeholder.classes[0].id, "");
    assert!(translation
        .diagnostics
        .iter()
        .any(|d| d.kind == DiagnosticKind::EmptyResult));
}

#[test]
fn test_no_source_files() {
    let translation = translate(&MemoryProgram::new(), &TranslateConfig::default());

    let kinds: Vec<DiagnosticKind> = translation.diagnostics.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![DiagnosticKind::NoSourceFiles, DiagnosticKind::EmptyResult]
    );
    assert_eq!(translation.files.len(), 1);
}

#[test]
fn test_json_output() {
    let translation = translate(&car_program(), &TranslateConfig::with_member_associations());
    let json = translation.to_json().unwrap();

    assert!(json.contains("\"fileName\": \"src/car.ts\""));
    assert!(json.contains("\"typeIds\""));
    assert!(json.contains("\"memberAssociations\""));
    assert!(json.contains("\"toName\": \"Engine\""));

    let files: Vec<tsuml_core::FileDeclaration> = serde_json::from_str(&json).unwrap();
    assert_eq!(files, translation.files);
}

#[test]
fn test_snapshot_round_trip_translates_identically() {
    let program = car_program();
    let snapshot = program.to_json().unwrap();
    let reloaded = MemoryProgram::from_json(&snapshot).unwrap();

    let config = TranslateConfig::with_member_associations();
    assert_eq!(translate(&program, &config), translate(&reloaded, &config));
}

#[test]
fn test_recursive_alias_member() {
    // class Doc { body: Json }, type Json = string | Json[]
    let mut program = MemoryProgram::new();
    let file = program.add_file("src/doc.ts");
    let doc = program.declare_class(file, "Doc");
    let string = program.primitive("string");
    let json = program.add_type(TypeRecord {
        text: "Json".to_string(),
        ..Default::default()
    });
    let json_array = program.array_of(json);
    program.type_mut(json).unwrap().shape = TypeShape::Union(vec![string, json_array]);
    program.add_property(doc, "body", json, ModifierFlags::NONE);
    program.add_method(doc, "children", &[("of", json)], json_array, ModifierFlags::NONE);

    let translation = translate(&program, &TranslateConfig::with_member_associations());
    let class = &translation.files[0].classes[0];

    assert_eq!(class.properties[0].type_name.as_deref(), Some("Json"));
    assert!(class.properties[0].type_ids.is_empty());
    assert_eq!(class.methods[0].return_type.as_deref(), Some("Json[]"));
    assert_eq!(class.methods[0].return_type_ids, Some(Vec::new()));
    assert!(translation.files[0].member_associations.is_empty());
}
