/// Binary (infix) operation rules.
///
/// Integer arithmetic and comparisons, string concatenation, boolean
/// equality, and the canonical type-mismatch / unknown-operator errors.
pub mod binary;
/// Core evaluation: programs, blocks, statements and expression dispatch.
///
/// Declares the evaluator's result alias and the `eval` entry point. Return
/// propagation lives here: the transient wrapper passes through nested
/// blocks and is unwrapped at the program boundary.
pub mod core;
/// Function application.
///
/// Binds call arguments in a fresh scope enclosed by the function's captured
/// environment and unwraps `return` at the call boundary.
pub mod function;
/// Unary (prefix) operation rules.
///
/// Truthiness negation with `!` and integer negation with `-`.
pub mod unary;
