//! Calculatrice RPN : moteur d’expressions infixes en double précision.
//!
//! ```text
//! "3 + 4 * 2"  --to_postfix-->  "3 4 2 * +"  --evaluate-->  11.0
//! ```
//!
//! Les jetons sont séparés par des blancs (l’UI s’en charge).
//! Toute erreur est une valeur ([`SyntaxError`], [`EvalError`]), jamais un panic.

pub mod noyau;

pub use noyau::{
    eval_expression, evaluate, evaluate_postfix, format_valeur, to_postfix, Demarche, EvalError,
    SyntaxError,
};
