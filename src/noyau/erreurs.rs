//! Erreurs du noyau.
//!
//! Deux familles, toutes récupérables :
//! - [`SyntaxError`] : forme de l’expression (parenthèses, jetons, nombre d’opérandes)
//! - [`EvalError`]   : arithmétique / domaine, plus les erreurs de syntaxe détectées
//!   pendant l’évaluation (via `From`).
//!
//! Jamais de chaîne sentinelle "Error: ..." à la place d’un nombre.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// `)` sans `(`, `{` fermée par `)`, parenthèse restée ouverte…
    #[error("parenthèses mal appariées")]
    MismatchedParenthesis,

    /// Jeton qui n’est ni un opérateur ni un nombre.
    #[error("jeton invalide: {0}")]
    InvalidToken(String),

    /// Opérateur ou fonction sans assez d’opérandes sur la pile.
    #[error("opérande manquant pour '{0}'")]
    OperandUnderflow(String),

    #[error("trop d’opérandes")]
    TooManyOperands,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("division par zéro indéfinie")]
    DivisionByZero,

    /// Raison courte : "cot(0)" ou "ln/log(n<=0)".
    #[error("{0} indéfini")]
    DomainError(String),

    /// Dépassement de f64 : on garde la valeur infinie.
    #[error("perte de précision (dépassement double): {0}")]
    Overflow(f64),
}

impl EvalError {
    pub(crate) fn domaine(raison: &str) -> Self {
        EvalError::DomainError(raison.to_string())
    }
}
