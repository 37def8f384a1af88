// src/noyau/jetons.rs
//
// Tokenisation : découpage sur les blancs, rien de plus.
// L’appelant (UI) sépare déjà nombres et opérateurs : "3 + 4", pas "3+4".

use std::fmt;

use super::operateurs::{operateur, Operateur};

/// Les deux familles de parenthèses. Elles s’imbriquent, ne se croisent jamais.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parenthese {
    /// ( )
    Ronde,
    /// { }
    Accolade,
}

impl Parenthese {
    pub fn ouvrante(self) -> &'static str {
        match self {
            Parenthese::Ronde => "(",
            Parenthese::Accolade => "{",
        }
    }

    pub fn fermante(self) -> &'static str {
        match self {
            Parenthese::Ronde => ")",
            Parenthese::Accolade => "}",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    // Tout ce qui n’est ni opérateur ni parenthèse.
    // NOTE: pas validé ici; l’évaluateur décidera si c’est un nombre.
    Litteral(String),

    Op(&'static Operateur),

    Ouvrante(Parenthese),
    Fermante(Parenthese),
}

impl Jeton {
    /// Classe un mot (déjà isolé, non vide).
    pub fn depuis_mot(mot: &str) -> Self {
        match mot {
            "(" => Jeton::Ouvrante(Parenthese::Ronde),
            "{" => Jeton::Ouvrante(Parenthese::Accolade),
            ")" => Jeton::Fermante(Parenthese::Ronde),
            "}" => Jeton::Fermante(Parenthese::Accolade),
            _ => match operateur(mot) {
                Some(op) => Jeton::Op(op),
                None => Jeton::Litteral(mot.to_string()),
            },
        }
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Litteral(t) => f.write_str(t),
            Jeton::Op(op) => f.write_str(op.symbole),
            Jeton::Ouvrante(p) => f.write_str(p.ouvrante()),
            Jeton::Fermante(p) => f.write_str(p.fermante()),
        }
    }
}

/// Tokenize une chaîne : un jeton par mot, les blancs consécutifs sont ignorés.
pub fn tokenize(s: &str) -> Vec<Jeton> {
    s.split_whitespace().map(Jeton::depuis_mot).collect()
}

/// Liste de jetons en texte, séparateur = un espace.
pub fn format_tokens(tokens: &[Jeton]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
