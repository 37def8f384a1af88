//! Tests scientifiques (campagne) : invariants + propriétés générées.
//!
//! - précédence : une suite plate "a op b op c …" donne exactement le calcul
//!   à la main (produits/quotients d’abord, puis sommes, de gauche à droite)
//! - arbres parenthésés (deux familles) : même valeur / même erreur qu’une
//!   évaluation récursive directe
//! - ^ associatif à droite
//! - postfixe de littéraux : stable par to_postfix

use proptest::prelude::*;

use super::erreurs::{EvalError, SyntaxError};
use super::{evaluate, evaluate_postfix, to_postfix};

/* ------------------------ Helpers ------------------------ */

/// Égalité de résultats, NaN compris.
fn memes(a: &Result<f64, EvalError>, b: &Result<f64, EvalError>) -> bool {
    match (a, b) {
        (Ok(x), Ok(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Err(x), Err(y)) => x == y,
        _ => false,
    }
}

/// Calcul “à la main” d’une suite plate, précédence usuelle, gauche -> droite.
fn a_la_main(premier: u8, suite: &[(&str, u8)]) -> f64 {
    // termes séparés par + / - ; (signe, valeur)
    let mut termes: Vec<(bool, f64)> = vec![(true, f64::from(premier))];

    for &(op, n) in suite {
        let n = f64::from(n);
        match op {
            "+" => termes.push((true, n)),
            "-" => termes.push((false, n)),
            _ => {
                if let Some(t) = termes.last_mut() {
                    if op == "*" {
                        t.1 *= n;
                    } else {
                        t.1 /= n;
                    }
                }
            }
        }
    }

    let mut it = termes.into_iter();
    let premier = it.next().map_or(0.0, |t| t.1);
    it.fold(premier, |acc, (plus, t)| if plus { acc + t } else { acc - t })
}

/* ------------------------ Arbres d’expressions ------------------------ */

#[derive(Clone, Debug)]
enum Arbre {
    Nb(u8),
    // bool : true = { }, false = ( )
    Bin(&'static str, bool, Box<Arbre>, Box<Arbre>),
    Fonction(&'static str, bool, Box<Arbre>),
}

impl Arbre {
    fn rendu(&self) -> String {
        fn bornes(accolade: bool) -> (&'static str, &'static str) {
            if accolade {
                ("{", "}")
            } else {
                ("(", ")")
            }
        }
        match self {
            Arbre::Nb(n) => n.to_string(),
            Arbre::Bin(op, acc, a, b) => {
                let (o, f) = bornes(*acc);
                format!("{o} {} {op} {} {f}", a.rendu(), b.rendu())
            }
            Arbre::Fonction(nom, acc, a) => {
                let (o, f) = bornes(*acc);
                format!("{nom} {o} {} {f}", a.rendu())
            }
        }
    }

    /// Évaluation récursive directe (gauche, droite, puis opérateur).
    fn valeur(&self) -> Result<f64, EvalError> {
        match self {
            Arbre::Nb(n) => Ok(f64::from(*n)),
            Arbre::Bin(op, _, a, b) => {
                let a = a.valeur()?;
                let b = b.valeur()?;
                match *op {
                    "+" => Ok(a + b),
                    "-" => Ok(a - b),
                    "*" => Ok(a * b),
                    _ if b == 0.0 => Err(EvalError::DivisionByZero),
                    _ => Ok(a / b),
                }
            }
            Arbre::Fonction(nom, _, a) => {
                let x = a.valeur()?;
                match *nom {
                    "sin" => Ok(x.sin()),
                    "cos" => Ok(x.cos()),
                    _ if x <= 0.0 => Err(EvalError::DomainError("ln/log(n<=0)".into())),
                    _ => Ok(x.ln()),
                }
            }
        }
    }

    fn attendu(&self) -> Result<f64, EvalError> {
        let v = self.valeur()?;
        if v.is_infinite() {
            return Err(EvalError::Overflow(v));
        }
        Ok(v)
    }
}

fn arbre() -> impl Strategy<Value = Arbre> {
    let feuille = (0u8..10).prop_map(Arbre::Nb);
    feuille.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            3 => (
                prop::sample::select(vec!["+", "-", "*", "/"]),
                any::<bool>(),
                inner.clone(),
                inner.clone(),
            )
                .prop_map(|(op, acc, a, b)| Arbre::Bin(op, acc, Box::new(a), Box::new(b))),
            1 => (
                prop::sample::select(vec!["sin", "cos", "ln"]),
                any::<bool>(),
                inner,
            )
                .prop_map(|(nom, acc, a)| Arbre::Fonction(nom, acc, Box::new(a))),
        ]
    })
}

fn suite_plate() -> impl Strategy<Value = (u8, Vec<(&'static str, u8)>)> {
    (
        1u8..10,
        prop::collection::vec(
            (prop::sample::select(vec!["+", "-", "*", "/"]), 1u8..10),
            0..12,
        ),
    )
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_precedence_suite_plate((premier, suite) in suite_plate()) {
        let mut expr = premier.to_string();
        for (op, n) in &suite {
            expr.push_str(&format!(" {op} {n}"));
        }
        let attendu = a_la_main(premier, &suite);
        prop_assert_eq!(evaluate(&expr), Ok(attendu), "expr={}", expr);
    }

    #[test]
    fn prop_arbre_parenthese(a in arbre()) {
        let expr = a.rendu();
        let obtenu = evaluate(&expr);
        let attendu = a.attendu();
        prop_assert!(memes(&obtenu, &attendu), "expr={} obtenu={:?} attendu={:?}", expr, obtenu, attendu);
    }

    #[test]
    fn prop_puissance_droite(a in 1u8..6, b in 0u8..4, c in 0u8..3) {
        let expr = format!("{a} ^ {b} ^ {c}");
        let (a, b, c) = (f64::from(a), f64::from(b), f64::from(c));
        prop_assert_eq!(evaluate(&expr), Ok(a.powf(b.powf(c))));
    }

    #[test]
    fn prop_postfixe_litteraux_stable(ns in prop::collection::vec(0u32..1000, 1..8)) {
        let s = ns.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
        prop_assert_eq!(to_postfix(&s), Ok(s.clone()));
    }

    #[test]
    fn prop_postfixe_reevalue(a in arbre()) {
        // infixe -> postfixe -> évaluation postfixe == évaluation infixe
        let expr = a.rendu();
        let postfixe = to_postfix(&expr);
        prop_assert!(postfixe.is_ok());
        if let Ok(p) = postfixe {
            prop_assert!(memes(&evaluate_postfix(&p), &evaluate(&expr)));
        }
    }
}

/* ------------------------ Invariants fixes ------------------------ */

#[test]
fn sci_exemples_de_reference() {
    assert_eq!(evaluate("3 + 4 * 2"), Ok(11.0));
    assert_eq!(to_postfix("2 ^ 3 ^ 2").as_deref(), Ok("2 3 2 ^ ^"));
    assert_eq!(evaluate("2 ^ 3 ^ 2"), Ok(512.0));
    assert_eq!(
        to_postfix("( 3 + { 4 )"),
        Err(SyntaxError::MismatchedParenthesis)
    );
    assert_eq!(evaluate("5 / 0"), Err(EvalError::DivisionByZero));
    assert!(matches!(
        evaluate("ln ( -1 )"),
        Err(EvalError::DomainError(_))
    ));
    assert!(matches!(
        evaluate("cot ( 0 )"),
        Err(EvalError::DomainError(_))
    ));
    assert!(matches!(
        evaluate_postfix("+"),
        Err(EvalError::Syntax(SyntaxError::OperandUnderflow(_)))
    ));
    assert!(matches!(
        evaluate("10 ^ 10 ^ 10"),
        Err(EvalError::Overflow(v)) if v.is_infinite()
    ));
}

#[test]
fn sci_imbrication_profonde() {
    // profondeur bornée, pile explicite : pas de récursion dans le noyau
    let n = 2_000;
    let mut expr = String::new();
    for i in 0..n {
        expr.push_str(if i % 2 == 0 { "( " } else { "{ " });
    }
    expr.push('1');
    for i in (0..n).rev() {
        expr.push_str(if i % 2 == 0 { " )" } else { " }" });
    }
    assert_eq!(evaluate(&expr), Ok(1.0));
}

#[test]
fn sci_appels_concurrents() {
    let fils: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let expr = format!("{i} + 2 ^ 3 ^ 2");
                evaluate(&expr)
            })
        })
        .collect();
    for (i, f) in fils.into_iter().enumerate() {
        let v = f.join().unwrap();
        assert_eq!(v, Ok(i as f64 + 512.0));
    }
}
