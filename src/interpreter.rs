/// Lexical scoping for evaluation.
///
/// Declares the `Environment` record (name→value bindings plus an optional
/// outer scope) and the shared `Env` handle through which closures keep
/// their defining scope alive.
///
/// # Responsibilities
/// - Resolves names by walking the scope chain outward.
/// - Binds names in the innermost scope only.
/// - Shares scopes by reference so closures observe later bindings.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST against an environment, applies operators,
/// takes conditional branches, applies functions, and propagates `return`
/// and runtime errors through nested blocks. It is the core execution engine
/// of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Creates and chains environments for function application.
/// - Reports runtime errors such as type mismatches or unknown identifiers.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a meaningful language element such as an
/// integer, identifier, operator, delimiter, or keyword. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Handles integer and string literals, identifiers, and operators.
/// - Marks unrecognized characters as illegal tokens for the parser to
///   report.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST using operator-precedence (Pratt) parsing: per-token
/// prefix and infix rules plus a precedence table.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Ranks operators by binding strength for correct expression nesting.
/// - Collects syntax errors without aborting, producing a best-effort AST.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the `Value` enum covering integers, booleans,
/// strings, null, the transient return wrapper, and function values with
/// their captured environments.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Names each type for use in runtime error messages.
/// - Defines truthiness, equality, and display formatting of values.
pub mod value;
