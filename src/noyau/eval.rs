//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> machine à pile (f64) -> contrôle final (1 valeur, pas d’infini)
//!
//! Remarque : `ln` et `log` sont TOUS DEUX le logarithme népérien.
//! Comportement historique de la calculatrice, conservé tel quel.

use tracing::{debug, trace};

use super::erreurs::{EvalError, SyntaxError};
use super::jetons::{format_tokens, tokenize, Jeton};
use super::operateurs::{Arite, Operateur};
use super::pile::Pile;
use super::rpn::to_rpn;

/// Raisons de domaine (texte court, stable).
const DOMAINE_COT: &str = "cot(0)";
const DOMAINE_LN: &str = "ln/log(n<=0)";

/// Démarche : ce que l’UI affiche à côté du résultat.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : infixe -> valeur.
#[tracing::instrument(level = "debug", ret, err)]
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let rpn = to_rpn(&tokenize(expression))?;
    eval_rpn(&rpn)
}

/// API publique : postfixe (mots séparés par des blancs) -> valeur.
#[tracing::instrument(level = "debug", ret, err)]
pub fn evaluate_postfix(postfix: &str) -> Result<f64, EvalError> {
    eval_rpn(&tokenize(postfix))
}

/// Évalue et retourne aussi la démarche (jetons + RPN).
pub fn eval_expression(expression: &str) -> Result<(f64, Demarche), EvalError> {
    // 1) Jetons
    let jetons = tokenize(expression);

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    // 3) Valeur
    let valeur = eval_rpn(&rpn)?;

    let d = Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };
    Ok((valeur, d))
}

/// Machine à pile sur une RPN déjà construite.
pub fn eval_rpn(rpn: &[Jeton]) -> Result<f64, EvalError> {
    let mut pile: Pile<f64> = Pile::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Jeton::Op(op) => match op.arite {
                Arite::Binaire => {
                    // l’opérande dépilé en premier est celui de DROITE
                    let (b, a) = match (pile.pop(), pile.pop()) {
                        (Some(b), Some(a)) => (b, a),
                        _ => return Err(manque(op)),
                    };
                    pile.push(binaire(op, a, b)?);
                }
                Arite::Unaire => {
                    let x = pile.pop().ok_or_else(|| manque(op))?;
                    pile.push(unaire(op, x)?);
                }
            },

            Jeton::Litteral(t) => {
                let v = t.parse::<f64>().map_err(|_| {
                    debug!(jeton = %t, "littéral non numérique");
                    SyntaxError::InvalidToken(t.clone())
                })?;
                pile.push(v);
            }

            // une parenthèse n’a rien à faire en RPN
            Jeton::Ouvrante(_) | Jeton::Fermante(_) => {
                return Err(SyntaxError::InvalidToken(tok.to_string()).into());
            }
        }
        trace!(jeton = %tok, sommet = ?pile.peek(), taille = pile.len(), "eval");
    }

    if pile.len() > 1 {
        debug!(restants = pile.len(), "trop d’opérandes");
        return Err(SyntaxError::TooManyOperands.into());
    }

    // pile vide : entrée vide (les manques sont détectés plus haut)
    let resultat = pile
        .pop()
        .ok_or_else(|| SyntaxError::OperandUnderflow(String::new()))?;

    if resultat.is_infinite() {
        debug!(resultat, "dépassement double");
        return Err(EvalError::Overflow(resultat));
    }

    Ok(resultat)
}

fn manque(op: &Operateur) -> EvalError {
    debug!(op = op.symbole, "opérande manquant");
    SyntaxError::OperandUnderflow(op.symbole.to_string()).into()
}

/// a (gauche) `op` b (droite)
fn binaire(op: &Operateur, a: f64, b: f64) -> Result<f64, EvalError> {
    match op.symbole {
        "+" => Ok(a + b),
        "-" => Ok(a - b),
        "*" => Ok(a * b),
        "/" => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(a / b)
        }
        "^" => Ok(a.powf(b)),
        autre => Err(SyntaxError::InvalidToken(autre.to_string()).into()),
    }
}

fn unaire(op: &Operateur, x: f64) -> Result<f64, EvalError> {
    match op.symbole {
        "sin" => Ok(x.sin()),
        "cos" => Ok(x.cos()),
        "tan" => Ok(x.tan()),
        "cot" => {
            let t = x.tan();
            if x == 0.0 || t == 0.0 {
                return Err(EvalError::domaine(DOMAINE_COT));
            }
            Ok(1.0 / t)
        }
        // log == ln (voir en-tête)
        "ln" | "log" => {
            if x <= 0.0 {
                return Err(EvalError::domaine(DOMAINE_LN));
            }
            Ok(x.ln())
        }
        autre => Err(SyntaxError::InvalidToken(autre.to_string()).into()),
    }
}
