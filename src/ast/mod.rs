/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Expr` and `Stmt` enumerations, `Module`, and their rendering
/// - expressions: Payload structs for every expression kind
/// - operators: Binary, updater and suffix operator tags
/// - statements: Payload structs for statement kinds
pub mod ast;
pub mod expressions;
pub mod operators;
pub mod statements;
