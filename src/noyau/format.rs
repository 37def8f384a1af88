// src/noyau/format.rs
//
// Affichage d’une valeur f64 (format historique du panneau) :
// - entier représentable : "11.0"
// - infinis : "Infinity" / "-Infinity"
// - NaN : "NaN"
// - sinon : représentation la plus courte qui relit la même valeur

/// Au-delà, `{:.1}` écrirait des dizaines de chiffres : on garde la forme courte.
const ENTIER_MAX: f64 = 1e16;

pub fn format_valeur(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        let s = if v > 0.0 { "Infinity" } else { "-Infinity" };
        return s.to_string();
    }
    if v.fract() == 0.0 && v.abs() < ENTIER_MAX {
        return format!("{v:.1}");
    }
    format!("{v}")
}
