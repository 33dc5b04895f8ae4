// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use super::rpn::Valeur;

/* ------------------------ Flottants ------------------------ */

/// Forme texte d’un flottant, alignée sur l’affichage “calculatrice” :
/// - plus courte écriture qui relit la même valeur (3, 0.1, 3.141592653589793)
/// - notation scientifique hors de [1e-6, 1e21) : 1e+21, 1.5e-7
/// - anomalies visibles telles quelles : NaN, Infinity, -Infinity
/// - -0 s’affiche 0
pub fn format_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let a = x.abs();
    if (1e-6..1e21).contains(&a) {
        return format!("{x}");
    }

    // "{:e}" donne 1e21 / 1.5e-7 : on ajoute le '+' des exposants positifs
    let sci = format!("{x:e}");
    match sci.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => sci,
    }
}

/* ------------------------ Rationnels ------------------------ */

/// Chiffres significatifs de la notation scientifique hors plage f64.
const CHIFFRES_SIGNIFICATIFS: usize = 16;

fn puissance_de_dix(k: i64) -> BigRational {
    let p = BigRational::from_integer(BigInt::from(10).pow(k.unsigned_abs() as u32));
    if k < 0 {
        p.recip()
    } else {
        p
    }
}

/// Résultat exact -> texte.
/// - entier de moins de 21 chiffres : écriture complète
/// - sinon : même rendu qu’un flottant (0.3, 1e+22)
/// - hors plage f64 (sous- ou dépassement) : notation scientifique calculée sur la valeur exacte
pub fn format_rationnel(r: &BigRational) -> String {
    if r.is_integer() && r.abs() < puissance_de_dix(21) {
        return r.numer().to_string();
    }
    match r.to_f64() {
        Some(x) if x.is_finite() && (x != 0.0 || r.is_zero()) => format_nombre(x),
        _ => notation_scientifique_exacte(r),
    }
}

/// "1e-400", "-2.5e+400" : jamais de fraction, le texte doit rester relisible.
fn notation_scientifique_exacte(r: &BigRational) -> String {
    let signe = if r.is_negative() { "-" } else { "" };
    let a = r.abs();

    // estimation par le nombre de chiffres, puis ajustement : 10^k <= a < 10^(k+1)
    let mut k = a.numer().to_string().len() as i64 - a.denom().to_string().len() as i64;
    while a < puissance_de_dix(k) {
        k -= 1;
    }
    while a >= puissance_de_dix(k + 1) {
        k += 1;
    }

    let echelle = puissance_de_dix(CHIFFRES_SIGNIFICATIFS as i64 - 1 - k);
    let mut chiffres = (a * echelle).round().to_integer().to_string();
    if chiffres.len() > CHIFFRES_SIGNIFICATIFS {
        // 9.999… arrondi à 10
        chiffres.truncate(CHIFFRES_SIGNIFICATIFS);
        k += 1;
    }

    let chiffres = chiffres.trim_end_matches('0');
    let (tete, queue) = chiffres.split_at(1);
    let exp = if k < 0 {
        k.to_string()
    } else {
        format!("+{k}")
    };
    if queue.is_empty() {
        format!("{signe}{tete}e{exp}")
    } else {
        format!("{signe}{tete}.{queue}e{exp}")
    }
}

/// Valeur de l’évaluateur -> texte.
pub fn format_valeur(v: &Valeur) -> String {
    match v {
        Valeur::Exacte(r) => format_rationnel(r),
        Valeur::Approchee(x) => format_nombre(*x),
    }
}
