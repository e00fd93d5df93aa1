//! In-memory frontend backed by arenas.
//!
//! A [`MemoryProgram`] holds an already type-checked declaration graph as plain
//! records. External checkers can export one as JSON and hand it over through
//! [`MemoryProgram::from_json`]; tests build one with the builder methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::FrontendError;
use super::traits::{AliasShape, DeclRef, FileRef, Frontend, SymbolRef, TypeRef, TypeShape};
use crate::model::ModifierFlags;

/// Kind of a declaration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    Class,
    Interface,
    Enum,
    TypeAlias,
    #[default]
    Property,
    Method,
    Constructor,
    Parameter,
    EnumMember,
    ExpressionWithTypeArguments,
}

impl DeclKind {
    /// Node kinds that expose a type parameter list.
    pub fn has_type_parameters(&self) -> bool {
        matches!(self, Self::Class | Self::Interface | Self::TypeAlias)
    }
}

/// A source unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRecord {
    pub path: String,
    pub classes: Vec<DeclRef>,
    pub interfaces: Vec<DeclRef>,
    pub enums: Vec<DeclRef>,
    pub type_aliases: Vec<DeclRef>,
}

/// A declaration node.
///
/// `kind` is required in snapshots; every other field may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeclRecord {
    pub kind: DeclKind,
    #[serde(default)]
    pub name: String,
    /// Source text; falls back to `name` when empty.
    #[serde(default)]
    pub text: String,
    pub symbol: Option<SymbolRef>,
    #[serde(rename = "type")]
    pub ty: Option<TypeRef>,
    pub return_type: Option<TypeRef>,
    #[serde(default)]
    pub modifiers: ModifierFlags,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    #[serde(default)]
    pub properties: Vec<DeclRef>,
    #[serde(default)]
    pub methods: Vec<DeclRef>,
    #[serde(default)]
    pub constructors: Vec<DeclRef>,
    #[serde(default)]
    pub parameters: Vec<DeclRef>,
    #[serde(default)]
    pub enum_members: Vec<DeclRef>,
    /// Type aliases only: whether the target is an object type literal
    /// (its members live in `properties` and `methods`).
    #[serde(default)]
    pub type_literal: bool,
    pub base_class: Option<DeclRef>,
    #[serde(default)]
    pub implements: Vec<DeclRef>,
    #[serde(default)]
    pub base_types: Vec<TypeRef>,
    #[serde(default)]
    pub base_declarations: Vec<DeclRef>,
}

/// A checked type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeRecord {
    pub shape: TypeShape,
    pub text: String,
    pub symbol: Option<SymbolRef>,
    pub alias_symbol: Option<SymbolRef>,
    pub type_arguments: Vec<TypeRef>,
    pub target: Option<TypeRef>,
}

impl Default for TypeRecord {
    fn default() -> Self {
        Self {
            shape: TypeShape::Other,
            text: String::new(),
            symbol: None,
            alias_symbol: None,
            type_arguments: Vec::new(),
            target: None,
        }
    }
}

/// A bound symbol.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolRecord {
    pub name: String,
    pub fully_qualified_name: Option<String>,
    pub value_declaration: Option<DeclRef>,
}

/// Arena-backed [`Frontend`] implementation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryProgram {
    files: Vec<FileRecord>,
    decls: Vec<DeclRecord>,
    types: Vec<TypeRecord>,
    symbols: Vec<SymbolRecord>,
}

impl MemoryProgram {
    /// Create an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a program snapshot from JSON text.
    pub fn from_json(json: &str) -> Result<Self, FrontendError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a program snapshot from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FrontendError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| FrontendError::io(path, e))?;
        Self::from_json(&content)
    }

    /// Serialize the program snapshot.
    pub fn to_json(&self) -> Result<String, FrontendError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // =========================================================================
    // RAW ARENA ACCESS
    // =========================================================================

    pub fn add_file(&mut self, path: impl Into<String>) -> FileRef {
        self.files.push(FileRecord {
            path: path.into(),
            ..Default::default()
        });
        FileRef::new(self.files.len() as u32 - 1)
    }

    pub fn add_decl(&mut self, record: DeclRecord) -> DeclRef {
        self.decls.push(record);
        DeclRef::new(self.decls.len() as u32 - 1)
    }

    pub fn add_type(&mut self, record: TypeRecord) -> TypeRef {
        self.types.push(record);
        TypeRef::new(self.types.len() as u32 - 1)
    }

    pub fn add_symbol(
        &mut self,
        name: impl Into<String>,
        fully_qualified_name: Option<String>,
    ) -> SymbolRef {
        self.symbols.push(SymbolRecord {
            name: name.into(),
            fully_qualified_name,
            value_declaration: None,
        });
        SymbolRef::new(self.symbols.len() as u32 - 1)
    }

    pub fn file_mut(&mut self, file: FileRef) -> Option<&mut FileRecord> {
        self.files.get_mut(file.index() as usize)
    }

    pub fn decl_mut(&mut self, decl: DeclRef) -> Option<&mut DeclRecord> {
        self.decls.get_mut(decl.index() as usize)
    }

    pub fn type_mut(&mut self, ty: TypeRef) -> Option<&mut TypeRecord> {
        self.types.get_mut(ty.index() as usize)
    }

    pub fn symbol_mut(&mut self, symbol: SymbolRef) -> Option<&mut SymbolRecord> {
        self.symbols.get_mut(symbol.index() as usize)
    }

    fn file(&self, file: FileRef) -> Option<&FileRecord> {
        self.files.get(file.index() as usize)
    }

    fn decl(&self, decl: DeclRef) -> Option<&DeclRecord> {
        self.decls.get(decl.index() as usize)
    }

    fn ty(&self, ty: TypeRef) -> Option<&TypeRecord> {
        self.types.get(ty.index() as usize)
    }

    fn symbol(&self, symbol: SymbolRef) -> Option<&SymbolRecord> {
        self.symbols.get(symbol.index() as usize)
    }

    // =========================================================================
    // TYPES
    // =========================================================================

    /// A primitive or literal type without a symbol (`string`, `number`, `"a"`).
    pub fn primitive(&mut self, text: impl Into<String>) -> TypeRef {
        self.add_type(TypeRecord {
            text: text.into(),
            ..Default::default()
        })
    }

    /// A type parameter reference such as `T`.
    pub fn type_parameter(&mut self, name: &str) -> TypeRef {
        let symbol = self.add_symbol(name, Some(name.to_string()));
        self.add_type(TypeRecord {
            shape: TypeShape::TypeParameter,
            text: name.to_string(),
            symbol: Some(symbol),
            ..Default::default()
        })
    }

    /// `element[]`, with the global `Array` symbol attached like a checker would.
    pub fn array_of(&mut self, element: TypeRef) -> TypeRef {
        let text = format!("{}[]", self.type_text(element));
        let symbol = self.add_symbol("Array", Some("Array".to_string()));
        self.add_type(TypeRecord {
            shape: TypeShape::Array(Some(element)),
            text,
            symbol: Some(symbol),
            type_arguments: vec![element],
            ..Default::default()
        })
    }

    /// `a | b | ...`
    pub fn union_of(&mut self, members: &[TypeRef]) -> TypeRef {
        let text = self.joined_text(members, " | ");
        self.add_type(TypeRecord {
            shape: TypeShape::Union(members.to_vec()),
            text,
            ..Default::default()
        })
    }

    /// `a & b & ...`
    pub fn intersection_of(&mut self, members: &[TypeRef]) -> TypeRef {
        let text = self.joined_text(members, " & ");
        self.add_type(TypeRecord {
            shape: TypeShape::Intersection(members.to_vec()),
            text,
            ..Default::default()
        })
    }

    /// Instantiation of a generic class or interface, e.g. `Repository<User>`.
    pub fn instantiate(&mut self, generic: DeclRef, arguments: &[TypeRef]) -> Option<TypeRef> {
        let target = self.decl(generic)?.ty?;
        let record = self.ty(target)?.clone();
        let base = self
            .symbol(record.symbol?)
            .map(|s| s.name.clone())
            .unwrap_or_default();
        let text = format!("{}<{}>", base, self.joined_text(arguments, ", "));
        Some(self.add_type(TypeRecord {
            shape: record.shape,
            text,
            symbol: record.symbol,
            alias_symbol: None,
            type_arguments: arguments.to_vec(),
            target: Some(target),
        }))
    }

    fn joined_text(&self, types: &[TypeRef], separator: &str) -> String {
        types
            .iter()
            .map(|t| self.type_text(*t))
            .collect::<Vec<_>>()
            .join(separator)
    }

    // =========================================================================
    // DECLARATIONS
    // =========================================================================

    /// Declare a class with its symbol and instance type.
    pub fn declare_class(&mut self, file: FileRef, name: &str) -> DeclRef {
        let decl = self.declare_named(file, name, DeclKind::Class, TypeShape::Class);
        if let Some(f) = self.file_mut(file) {
            f.classes.push(decl);
        }
        decl
    }

    /// Declare an interface with its symbol and type.
    pub fn declare_interface(&mut self, file: FileRef, name: &str) -> DeclRef {
        let decl = self.declare_named(file, name, DeclKind::Interface, TypeShape::Interface);
        if let Some(f) = self.file_mut(file) {
            f.interfaces.push(decl);
        }
        decl
    }

    /// Declare an enum and its members.
    pub fn declare_enum(&mut self, file: FileRef, name: &str, members: &[&str]) -> DeclRef {
        let decl = self.declare_named(file, name, DeclKind::Enum, TypeShape::Enum);
        for member in members {
            let member_decl = self.add_decl(DeclRecord {
                kind: DeclKind::EnumMember,
                name: member.to_string(),
                ..Default::default()
            });
            if let Some(d) = self.decl_mut(decl) {
                d.enum_members.push(member_decl);
            }
        }
        if let Some(f) = self.file_mut(file) {
            f.enums.push(decl);
        }
        decl
    }

    /// Declare `type Name = { ... }`. Members are added with
    /// [`add_property`](Self::add_property) and [`add_method`](Self::add_method).
    pub fn declare_type_literal(&mut self, file: FileRef, name: &str) -> DeclRef {
        let decl = self.declare_alias(file, name, TypeShape::Anonymous);
        if let Some(d) = self.decl_mut(decl) {
            d.type_literal = true;
        }
        decl
    }

    /// Declare a type alias to anything but an object literal.
    pub fn declare_alias_of(&mut self, file: FileRef, name: &str, target: TypeRef) -> DeclRef {
        let decl = self.declare_alias(file, name, TypeShape::Other);
        if let Some(d) = self.decl_mut(decl) {
            d.ty = Some(target);
        }
        decl
    }

    fn declare_alias(&mut self, file: FileRef, name: &str, shape: TypeShape) -> DeclRef {
        let fqn = self.qualified(file, name);
        let symbol = self.add_symbol(name, Some(fqn));
        let anonymous = self.add_symbol("__type", None);
        let ty = self.add_type(TypeRecord {
            shape,
            text: name.to_string(),
            symbol: Some(anonymous),
            alias_symbol: Some(symbol),
            ..Default::default()
        });
        let decl = self.add_decl(DeclRecord {
            kind: DeclKind::TypeAlias,
            name: name.to_string(),
            symbol: Some(symbol),
            ty: Some(ty),
            ..Default::default()
        });
        if let Some(s) = self.symbol_mut(symbol) {
            s.value_declaration = Some(decl);
        }
        if let Some(f) = self.file_mut(file) {
            f.type_aliases.push(decl);
        }
        decl
    }

    fn declare_named(
        &mut self,
        file: FileRef,
        name: &str,
        kind: DeclKind,
        shape: TypeShape,
    ) -> DeclRef {
        let fqn = self.qualified(file, name);
        let symbol = self.add_symbol(name, Some(fqn));
        let ty = self.add_type(TypeRecord {
            shape,
            text: name.to_string(),
            symbol: Some(symbol),
            ..Default::default()
        });
        let decl = self.add_decl(DeclRecord {
            kind,
            name: name.to_string(),
            symbol: Some(symbol),
            ty: Some(ty),
            ..Default::default()
        });
        if let Some(s) = self.symbol_mut(symbol) {
            s.value_declaration = Some(decl);
        }
        decl
    }

    /// `"path/without/extension".Name`, the checker's module-qualified form.
    fn qualified(&self, file: FileRef, name: &str) -> String {
        let path = self.file(file).map(|f| f.path.as_str()).unwrap_or_default();
        let module = path.rsplit_once('.').map_or(path, |(stem, _)| stem);
        format!("\"{}\".{}", module, name)
    }

    /// The declared (instance) type of a class, interface, enum or alias.
    pub fn type_of(&self, decl: DeclRef) -> Option<TypeRef> {
        self.decl(decl)?.ty
    }

    /// Make a declaration generic. Its declared type becomes the generic
    /// target, with the type parameters as type arguments (`Foo<T>`).
    pub fn set_type_parameters(&mut self, decl: DeclRef, names: &[&str]) {
        let parameters: Vec<TypeRef> = names.iter().map(|n| self.type_parameter(n)).collect();
        let declared = self.type_of(decl);
        if let Some(d) = self.decl_mut(decl) {
            d.type_parameters = names.iter().map(|n| n.to_string()).collect();
        }
        if let Some(t) = declared.and_then(|t| self.type_mut(t)) {
            t.type_arguments = parameters;
        }
    }

    pub fn set_modifiers(&mut self, decl: DeclRef, modifiers: ModifierFlags) {
        if let Some(d) = self.decl_mut(decl) {
            d.modifiers = modifiers;
        }
    }

    /// Add a property (or property signature) to a class, interface or type literal.
    pub fn add_property(
        &mut self,
        owner: DeclRef,
        name: &str,
        ty: TypeRef,
        modifiers: ModifierFlags,
    ) -> DeclRef {
        let decl = self.member(DeclKind::Property, name, Some(ty), modifiers);
        if let Some(d) = self.decl_mut(owner) {
            d.properties.push(decl);
        }
        decl
    }

    /// Add a method (or method signature) with `(name, type)` parameters.
    pub fn add_method(
        &mut self,
        owner: DeclRef,
        name: &str,
        parameters: &[(&str, TypeRef)],
        return_type: TypeRef,
        modifiers: ModifierFlags,
    ) -> DeclRef {
        let params: Vec<DeclRef> = parameters
            .iter()
            .map(|(n, t)| self.member(DeclKind::Parameter, n, Some(*t), ModifierFlags::NONE))
            .collect();
        let decl = self.member(DeclKind::Method, name, None, modifiers);
        if let Some(d) = self.decl_mut(decl) {
            d.return_type = Some(return_type);
            d.parameters = params;
        }
        if let Some(d) = self.decl_mut(owner) {
            d.methods.push(decl);
        }
        decl
    }

    /// Add a constructor with `(name, type, modifiers)` parameters.
    pub fn add_constructor(
        &mut self,
        owner: DeclRef,
        parameters: &[(&str, TypeRef, ModifierFlags)],
    ) -> DeclRef {
        let params: Vec<DeclRef> = parameters
            .iter()
            .map(|(n, t, m)| self.member(DeclKind::Parameter, n, Some(*t), *m))
            .collect();
        let decl = self.add_decl(DeclRecord {
            kind: DeclKind::Constructor,
            name: "constructor".to_string(),
            parameters: params,
            ..Default::default()
        });
        if let Some(d) = self.decl_mut(owner) {
            d.constructors.push(decl);
        }
        decl
    }

    /// Declare a member node with a symbol whose value declaration is the node.
    fn member(
        &mut self,
        kind: DeclKind,
        name: &str,
        ty: Option<TypeRef>,
        modifiers: ModifierFlags,
    ) -> DeclRef {
        let symbol = self.add_symbol(name, None);
        let decl = self.add_decl(DeclRecord {
            kind,
            name: name.to_string(),
            symbol: Some(symbol),
            ty,
            modifiers,
            ..Default::default()
        });
        if let Some(s) = self.symbol_mut(symbol) {
            s.value_declaration = Some(decl);
        }
        decl
    }

    // =========================================================================
    // HERITAGE
    // =========================================================================

    pub fn set_base_class(&mut self, class: DeclRef, base: DeclRef) {
        if let Some(d) = self.decl_mut(class) {
            d.base_class = Some(base);
        }
        if let Some(ty) = self.type_of(base) {
            self.add_base_type(class, ty);
        }
    }

    /// Apply a mixin type to a class that has no single base class.
    pub fn add_base_type(&mut self, class: DeclRef, ty: TypeRef) {
        if let Some(d) = self.decl_mut(class) {
            d.base_types.push(ty);
        }
    }

    /// `class X implements Iface<args>`
    pub fn add_implements(
        &mut self,
        class: DeclRef,
        interface: DeclRef,
        arguments: &[TypeRef],
    ) -> Option<DeclRef> {
        let ty = if arguments.is_empty() {
            self.type_of(interface)?
        } else {
            self.instantiate(interface, arguments)?
        };
        let text = self.type_text(ty);
        let reference = self.add_decl(DeclRecord {
            kind: DeclKind::ExpressionWithTypeArguments,
            name: text.clone(),
            text,
            ty: Some(ty),
            ..Default::default()
        });
        if let Some(d) = self.decl_mut(class) {
            d.implements.push(reference);
        }
        Some(reference)
    }

    /// `interface X extends Base`
    pub fn add_base_declaration(&mut self, interface: DeclRef, base: DeclRef) {
        if let Some(d) = self.decl_mut(interface) {
            d.base_declarations.push(base);
        }
    }
}

impl Frontend for MemoryProgram {
    fn source_files(&self) -> Vec<FileRef> {
        (0..self.files.len() as u32).map(FileRef::new).collect()
    }

    fn file_path(&self, file: FileRef) -> String {
        self.file(file).map(|f| f.path.clone()).unwrap_or_default()
    }

    fn classes(&self, file: FileRef) -> Vec<DeclRef> {
        self.file(file).map(|f| f.classes.clone()).unwrap_or_default()
    }

    fn interfaces(&self, file: FileRef) -> Vec<DeclRef> {
        self.file(file).map(|f| f.interfaces.clone()).unwrap_or_default()
    }

    fn enums(&self, file: FileRef) -> Vec<DeclRef> {
        self.file(file).map(|f| f.enums.clone()).unwrap_or_default()
    }

    fn type_aliases(&self, file: FileRef) -> Vec<DeclRef> {
        self.file(file).map(|f| f.type_aliases.clone()).unwrap_or_default()
    }

    fn decl_symbol(&self, decl: DeclRef) -> Option<SymbolRef> {
        self.decl(decl)?.symbol
    }

    fn decl_name(&self, decl: DeclRef) -> String {
        self.decl(decl).map(|d| d.name.clone()).unwrap_or_default()
    }

    fn decl_text(&self, decl: DeclRef) -> String {
        match self.decl(decl) {
            Some(d) if d.text.is_empty() => d.name.clone(),
            Some(d) => d.text.clone(),
            None => String::new(),
        }
    }

    fn is_expression_with_type_arguments(&self, decl: DeclRef) -> bool {
        self.decl(decl)
            .is_some_and(|d| d.kind == DeclKind::ExpressionWithTypeArguments)
    }

    fn decl_type(&self, decl: DeclRef) -> Option<TypeRef> {
        self.decl(decl)?.ty
    }

    fn return_type(&self, decl: DeclRef) -> Option<TypeRef> {
        self.decl(decl)?.return_type
    }

    fn modifier_flags(&self, decl: DeclRef) -> ModifierFlags {
        self.decl(decl).map(|d| d.modifiers).unwrap_or_default()
    }

    fn type_parameters(&self, decl: DeclRef) -> Option<Vec<String>> {
        let d = self.decl(decl)?;
        d.kind.has_type_parameters().then(|| d.type_parameters.clone())
    }

    fn properties(&self, decl: DeclRef) -> Vec<DeclRef> {
        self.decl(decl).map(|d| d.properties.clone()).unwrap_or_default()
    }

    fn methods(&self, decl: DeclRef) -> Vec<DeclRef> {
        self.decl(decl).map(|d| d.methods.clone()).unwrap_or_default()
    }

    fn constructors(&self, decl: DeclRef) -> Vec<DeclRef> {
        self.decl(decl).map(|d| d.constructors.clone()).unwrap_or_default()
    }

    fn parameters(&self, decl: DeclRef) -> Vec<DeclRef> {
        self.decl(decl).map(|d| d.parameters.clone()).unwrap_or_default()
    }

    fn enum_members(&self, decl: DeclRef) -> Vec<DeclRef> {
        self.decl(decl).map(|d| d.enum_members.clone()).unwrap_or_default()
    }

    fn alias_shape(&self, decl: DeclRef) -> AliasShape {
        match self.decl(decl) {
            Some(d) if d.kind == DeclKind::TypeAlias && d.type_literal => AliasShape::TypeLiteral {
                properties: d.properties.clone(),
                methods: d.methods.clone(),
            },
            _ => AliasShape::Other,
        }
    }

    fn base_class(&self, decl: DeclRef) -> Option<DeclRef> {
        self.decl(decl)?.base_class
    }

    fn implements(&self, decl: DeclRef) -> Vec<DeclRef> {
        self.decl(decl).map(|d| d.implements.clone()).unwrap_or_default()
    }

    fn base_types(&self, decl: DeclRef) -> Vec<TypeRef> {
        self.decl(decl).map(|d| d.base_types.clone()).unwrap_or_default()
    }

    fn base_declarations(&self, decl: DeclRef) -> Vec<DeclRef> {
        self.decl(decl)
            .map(|d| d.base_declarations.clone())
            .unwrap_or_default()
    }

    fn type_shape(&self, ty: TypeRef) -> TypeShape {
        self.ty(ty)
            .map(|t| t.shape.clone())
            .unwrap_or(TypeShape::Other)
    }

    fn type_symbol(&self, ty: TypeRef) -> Option<SymbolRef> {
        self.ty(ty)?.symbol
    }

    fn alias_symbol(&self, ty: TypeRef) -> Option<SymbolRef> {
        self.ty(ty)?.alias_symbol
    }

    fn type_text(&self, ty: TypeRef) -> String {
        self.ty(ty).map(|t| t.text.clone()).unwrap_or_default()
    }

    fn type_arguments(&self, ty: TypeRef) -> Vec<TypeRef> {
        self.ty(ty).map(|t| t.type_arguments.clone()).unwrap_or_default()
    }

    fn target_type(&self, ty: TypeRef) -> Option<TypeRef> {
        self.ty(ty)?.target
    }

    fn symbol_name(&self, symbol: SymbolRef) -> String {
        self.symbol(symbol).map(|s| s.name.clone()).unwrap_or_default()
    }

    fn fully_qualified_name(&self, symbol: SymbolRef) -> Option<String> {
        self.symbol(symbol)?.fully_qualified_name.clone()
    }

    fn value_declaration(&self, symbol: SymbolRef) -> Option<DeclRef> {
        self.symbol(symbol)?.value_declaration
    }
}
