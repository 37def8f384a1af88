// src/main.rs
//
// Calculatrice RPN — point d’entrée ligne de commande
// ----------------------------------------------------
// Usage:
//   calculatrice-rpn "3 + 4 * 2"          -> postfixe + valeur
//   calculatrice-rpn --postfix "2 ^ 3 ^ 2" -> postfixe seulement
//   echo "5 / 0" | calculatrice-rpn       -> une expression par ligne
//
// Journal : RUST_LOG=calculatrice_rpn=debug (ou trace)

use std::io::{self, BufRead};
use std::process::ExitCode;
use std::sync::Once;

use calculatrice_rpn::{eval_expression, format_valeur, to_postfix, EvalError};

static TRACING_INIT: Once = Once::new();

/// Installe le subscriber seulement si RUST_LOG est défini.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Complet,
    PostfixeSeul,
}

/// Une ligne -> texte à afficher.
fn traite_ligne(ligne: &str, mode: Mode) -> Result<String, EvalError> {
    match mode {
        Mode::PostfixeSeul => Ok(to_postfix(ligne)?),
        Mode::Complet => {
            let (valeur, d) = eval_expression(ligne)?;
            Ok(format!("{}\n= {}", d.rpn, format_valeur(valeur)))
        }
    }
}

fn affiche(ligne: &str, mode: Mode) -> bool {
    match traite_ligne(ligne, mode) {
        Ok(s) => {
            println!("{s}");
            true
        }
        Err(e) => {
            eprintln!("Erreur: {e}");
            false
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let mut mode = Mode::Complet;
    let mut mots: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--postfix" {
            mode = Mode::PostfixeSeul;
        } else {
            mots.push(arg);
        }
    }

    let mut tout_ok = true;

    if mots.is_empty() {
        // stdin : une expression par ligne, lignes vides ignorées
        for ligne in io::stdin().lock().lines() {
            let ligne = match ligne {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Erreur de lecture: {e}");
                    return ExitCode::FAILURE;
                }
            };
            if ligne.trim().is_empty() {
                continue;
            }
            tout_ok &= affiche(&ligne, mode);
        }
    } else {
        tout_ok = affiche(&mots.join(" "), mode);
    }

    if tout_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
