//! Declaration-query trait consumed by the translation layer.

use serde::{Deserialize, Serialize};

use crate::model::ModifierFlags;

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub fn new(index: u32) -> Self {
                Self(index)
            }

            pub fn index(self) -> u32 {
                self.0
            }
        }
    };
}

handle!(
    /// Handle to a source unit.
    FileRef
);
handle!(
    /// Handle to any declaration node: class, member, parameter, heritage
    /// expression.
    DeclRef
);
handle!(
    /// Handle to a checked type.
    TypeRef
);
handle!(
    /// Handle to a bound symbol.
    SymbolRef
);

/// Classification of a checked type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeShape {
    Class,
    Interface,
    Enum,
    Union(Vec<TypeRef>),
    Intersection(Vec<TypeRef>),
    /// Array type and its element type, when the checker knows it.
    Array(Option<TypeRef>),
    /// Object type without a declaration of its own (type literal, mapped type).
    Anonymous,
    TypeParameter,
    /// Primitives, literals, functions and anything else.
    Other,
}

/// What a type alias declaration points at, syntactically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasShape {
    /// `type X = { ... }` with the literal's members.
    TypeLiteral {
        properties: Vec<DeclRef>,
        methods: Vec<DeclRef>,
    },
    /// Unions, primitives, mapped types, references.
    Other,
}

/// Narrow view of a type-checked program.
///
/// Implement this for a type-checking frontend to feed the [`Translator`].
/// Every query is infallible: a handle that does not resolve answers with
/// `None` or an empty list, which the translation treats as "absent".
///
/// [`Translator`]: crate::translate::Translator
///
/// # Example Implementation
///
/// ```ignore
/// impl Frontend for CheckerBridge {
///     fn decl_symbol(&self, decl: DeclRef) -> Option<SymbolRef> {
///         self.checker.symbol_at(self.nodes[decl.index() as usize])
///     }
///     // ...
/// }
/// ```
pub trait Frontend {
    // --- source units ---

    /// Source units in processing order.
    fn source_files(&self) -> Vec<FileRef>;

    /// Path of a source unit.
    fn file_path(&self, file: FileRef) -> String;

    /// Top-level class declarations of a file.
    fn classes(&self, file: FileRef) -> Vec<DeclRef>;

    /// Top-level interface declarations of a file.
    fn interfaces(&self, file: FileRef) -> Vec<DeclRef>;

    /// Top-level enum declarations of a file.
    fn enums(&self, file: FileRef) -> Vec<DeclRef>;

    /// Top-level type alias declarations of a file.
    fn type_aliases(&self, file: FileRef) -> Vec<DeclRef>;

    // --- declarations ---

    /// Symbol bound to a declaration.
    fn decl_symbol(&self, decl: DeclRef) -> Option<SymbolRef>;

    /// Syntactic name of a declaration (parameter, enum member).
    fn decl_name(&self, decl: DeclRef) -> String;

    /// Literal source text of a declaration node.
    fn decl_text(&self, decl: DeclRef) -> String;

    /// Whether the node is a heritage reference like `Foo<Bar>`.
    fn is_expression_with_type_arguments(&self, decl: DeclRef) -> bool;

    /// Checked type of a declaration.
    fn decl_type(&self, decl: DeclRef) -> Option<TypeRef>;

    /// Checked return type of a method.
    fn return_type(&self, decl: DeclRef) -> Option<TypeRef>;

    /// Combined modifier flags.
    fn modifier_flags(&self, decl: DeclRef) -> ModifierFlags;

    /// Type parameter names, or `None` if the node kind cannot have any.
    fn type_parameters(&self, decl: DeclRef) -> Option<Vec<String>>;

    fn properties(&self, decl: DeclRef) -> Vec<DeclRef>;

    fn methods(&self, decl: DeclRef) -> Vec<DeclRef>;

    fn constructors(&self, decl: DeclRef) -> Vec<DeclRef>;

    fn parameters(&self, decl: DeclRef) -> Vec<DeclRef>;

    fn enum_members(&self, decl: DeclRef) -> Vec<DeclRef>;

    /// Syntactic shape of a type alias' target.
    fn alias_shape(&self, decl: DeclRef) -> AliasShape;

    // --- heritage ---

    /// Declaration of the class a class extends.
    fn base_class(&self, decl: DeclRef) -> Option<DeclRef>;

    /// `implements` references of a class.
    fn implements(&self, decl: DeclRef) -> Vec<DeclRef>;

    /// Base types of a class, including applied mixins.
    fn base_types(&self, decl: DeclRef) -> Vec<TypeRef>;

    /// Declarations an interface extends.
    fn base_declarations(&self, decl: DeclRef) -> Vec<DeclRef>;

    // --- types ---

    fn type_shape(&self, ty: TypeRef) -> TypeShape;

    fn type_symbol(&self, ty: TypeRef) -> Option<SymbolRef>;

    /// Symbol of the alias an anonymous type was declared through.
    fn alias_symbol(&self, ty: TypeRef) -> Option<SymbolRef>;

    /// Printed type, possibly with `import("...").` qualifiers.
    fn type_text(&self, ty: TypeRef) -> String;

    fn type_arguments(&self, ty: TypeRef) -> Vec<TypeRef>;

    /// Generic target of an instantiation (`Foo` for `Foo<Bar>`).
    fn target_type(&self, ty: TypeRef) -> Option<TypeRef>;

    // --- symbols ---

    fn symbol_name(&self, symbol: SymbolRef) -> String;

    /// Globally unique path of a symbol, e.g. `"src/car".Car`.
    fn fully_qualified_name(&self, symbol: SymbolRef) -> Option<String>;

    fn value_declaration(&self, symbol: SymbolRef) -> Option<DeclRef>;
}
