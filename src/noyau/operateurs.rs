// src/noyau/operateurs.rs
//
// Table des opérateurs (feuille du noyau)
// ---------------------------------------
// Symbole -> rang de précédence, arité, associativité.
// Consultée par la conversion RPN ET par l’évaluateur.
//
// Ordre (croissant):
//   - +            rang 0
//   * /            rang 1
//   ^              rang 2 (droite)
//   sin cos tan cot ln log   rang 3 (unaires, préfixes)

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arite {
    Unaire,
    Binaire,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

/// Descripteur d’opérateur. Un seul descripteur par symbole.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operateur {
    pub symbole: &'static str,
    /// Plus grand = lie plus fort.
    pub rang: u8,
    pub arite: Arite,
    pub associativite: Associativite,
}

impl Operateur {
    const fn binaire(symbole: &'static str, rang: u8) -> Self {
        Self {
            symbole,
            rang,
            arite: Arite::Binaire,
            associativite: Associativite::Gauche,
        }
    }

    const fn fonction(symbole: &'static str) -> Self {
        Self {
            symbole,
            rang: 3,
            arite: Arite::Unaire,
            associativite: Associativite::Gauche,
        }
    }

    pub fn est_associatif_droite(&self) -> bool {
        self.associativite == Associativite::Droite
    }

    /// Règle de dépilement du shunting-yard : `self` (sommet de pile)
    /// sort-il avant que `courant` soit empilé ?
    pub fn sort_avant(&self, courant: &Operateur) -> bool {
        self.rang > courant.rang
            || (self.rang == courant.rang && !courant.est_associatif_droite())
    }
}

/// Table canonique, dans l’ordre croissant de précédence.
pub const OPERATEURS: [Operateur; 11] = [
    Operateur::binaire("-", 0),
    Operateur::binaire("+", 0),
    Operateur::binaire("*", 1),
    Operateur::binaire("/", 1),
    Operateur {
        symbole: "^",
        rang: 2,
        arite: Arite::Binaire,
        associativite: Associativite::Droite,
    },
    Operateur::fonction("sin"),
    Operateur::fonction("cos"),
    Operateur::fonction("tan"),
    Operateur::fonction("cot"),
    Operateur::fonction("ln"),
    Operateur::fonction("log"),
];

static TABLE: LazyLock<FxHashMap<&'static str, Operateur>> =
    LazyLock::new(|| OPERATEURS.iter().map(|op| (op.symbole, *op)).collect());

/// Recherche exacte (sensible à la casse) d’un symbole.
pub fn operateur(symbole: &str) -> Option<&'static Operateur> {
    TABLE.get(symbole)
}
