/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into an AST.
/// Parse errors are collected on the parser rather than aborting it, so a
/// single pass can report every syntax mistake it finds.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown identifiers, type mismatches, undefined operators,
/// calls of non-functions, and integer arithmetic failures.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
