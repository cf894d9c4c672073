/// Core parser state and the expression loop.
///
/// Declares the [`Parser`](core::Parser) itself, the precedence table that
/// ranks operator binding strength, and the infix rule table. The expression
/// loop lives here; the rules it dispatches to live in the sibling modules.
pub mod core;
/// Expression parse rules.
///
/// One parse rule per expression form: literals, identifiers, prefix and
/// infix operations, grouped expressions, conditionals, function literals
/// and call expressions.
pub mod expression;
/// Statement parse rules.
///
/// `let` bindings, `return` statements, expression statements, and the block
/// statement form shared by conditionals and function bodies.
pub mod statement;
