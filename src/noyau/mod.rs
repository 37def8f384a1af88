//! Noyau infixe -> postfixe -> valeur (f64)
//!
//! Organisation interne :
//! - operateurs.rs : table symbole -> rang / arité / associativité
//! - jetons.rs     : tokenisation (blancs) + parenthèses ( ) { }
//! - pile.rs       : pile explicite
//! - rpn.rs        : shunting-yard -> RPN
//! - eval.rs       : machine à pile + pipeline complet
//! - format.rs     : affichage d’une valeur
//! - erreurs.rs    : SyntaxError / EvalError

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operateurs;
pub mod pile;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreurs::{EvalError, SyntaxError};
pub use eval::{eval_expression, evaluate, evaluate_postfix, Demarche};
pub use format::format_valeur;
pub use rpn::to_postfix;
