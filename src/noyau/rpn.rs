// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfixe)
// Objectif:
// - Convertir une suite de Jeton infixe en RPN
// - Deux familles de parenthèses: ( ) et { }, jamais croisées
//
// Règles:
// - Littéral : sortie directe (validé plus tard par l’évaluateur)
// - Opérateur : dépile tant que le sommet est un opérateur de rang supérieur,
//   ou de rang égal si l’opérateur courant n’est pas associatif à droite (^)
// - Fonctions (sin, cos, …) : rang 3, “collées” à leur argument
//
// NOTE:
// - Pas de moins unaire : l’appelant écrit "( 0 - 1 ) * n".

use tracing::trace;

use super::erreurs::SyntaxError;
use super::jetons::{format_tokens, tokenize, Jeton, Parenthese};
use super::operateurs::Operateur;
use super::pile::Pile;

/// Entrée de la pile d’opérateurs : un opérateur OU une marque de parenthèse.
#[derive(Clone, Copy, Debug)]
enum Entree {
    Op(&'static Operateur),
    Marque(Parenthese),
}

/// Convertit une suite de jetons infixe en RPN (notation polonaise inversée).
///
/// Exemple:
///   infixe: 2 ^ 3 ^ 2
///   rpn:    2 3 2 ^ ^
pub fn to_rpn(tokens: &[Jeton]) -> Result<Vec<Jeton>, SyntaxError> {
    let mut out: Vec<Jeton> = Vec::with_capacity(tokens.len());
    let mut ops: Pile<Entree> = Pile::with_capacity(tokens.len());

    for tok in tokens {
        match tok {
            Jeton::Litteral(_) => out.push(tok.clone()),

            Jeton::Op(courant) => {
                let courant: &'static Operateur = *courant;

                // une marque de parenthèse bloque le dépilement
                while let Some(&Entree::Op(haut)) = ops.peek() {
                    if !haut.sort_avant(courant) {
                        break;
                    }
                    ops.pop();
                    out.push(Jeton::Op(haut));
                }
                ops.push(Entree::Op(courant));
            }

            Jeton::Ouvrante(p) => ops.push(Entree::Marque(*p)),

            Jeton::Fermante(p) => ferme(&mut ops, &mut out, *p)?,
        }
        trace!(jeton = %tok, pile = ops.len(), sortie = out.len(), "rpn");
    }

    // vide la pile ops
    while let Some(e) = ops.pop() {
        match e {
            Entree::Op(op) => out.push(Jeton::Op(op)),
            Entree::Marque(p) => {
                trace!(ouvrante = p.ouvrante(), "parenthèse non fermée");
                return Err(SyntaxError::MismatchedParenthesis);
            }
        }
    }

    Ok(out)
}

/// Dépile jusqu’à la marque `attendue`; une marque de l’autre famille est une erreur.
fn ferme(
    ops: &mut Pile<Entree>,
    out: &mut Vec<Jeton>,
    attendue: Parenthese,
) -> Result<(), SyntaxError> {
    loop {
        match ops.pop() {
            Some(Entree::Op(op)) => out.push(Jeton::Op(op)),
            Some(Entree::Marque(p)) if p == attendue => return Ok(()),
            Some(Entree::Marque(p)) => {
                trace!(
                    ouvrante = p.ouvrante(),
                    fermante = attendue.fermante(),
                    "familles croisées"
                );
                return Err(SyntaxError::MismatchedParenthesis);
            }
            // fermante sans ouvrante
            None => return Err(SyntaxError::MismatchedParenthesis),
        }
    }
}

/// API texte : infixe (mots séparés par des blancs) -> postfixe (un espace entre jetons).
#[tracing::instrument(level = "debug", err)]
pub fn to_postfix(expression: &str) -> Result<String, SyntaxError> {
    let rpn = to_rpn(&tokenize(expression))?;
    Ok(format_tokens(&rpn))
}
