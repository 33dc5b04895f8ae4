// src/noyau/fonctions.rs
//
// Fonctions unaires + constantes (touches scientifiques)
// ------------------------------------------------------
// - Calcul en f64 (sqrt, trig en radians, log10, ln, exp)
// - π et e : constantes, pas d’argument, pas d’historique
// - Anomalies (NaN, ±∞) : rendues telles quelles, pas d’état Erreur

/// Touche de fonction scientifique.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Racine,
    Carre,
    Pourcent,
    Oppose,
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Exp,
    Pi,
    E,
}

impl Fonction {
    pub const TOUTES: [Fonction; 12] = [
        Fonction::Racine,
        Fonction::Carre,
        Fonction::Pourcent,
        Fonction::Oppose,
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Log,
        Fonction::Ln,
        Fonction::Exp,
        Fonction::Pi,
        Fonction::E,
    ];

    /// Libellé de la touche (aussi utilisé dans l’historique : "√(9) = 3").
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Racine => "√",
            Fonction::Carre => "x²",
            Fonction::Pourcent => "%",
            Fonction::Oppose => "+/-",
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
            Fonction::Exp => "exp",
            Fonction::Pi => "π",
            Fonction::E => "e",
        }
    }

    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        Self::TOUTES.into_iter().find(|f| f.nom() == nom)
    }

    /// Constantes : valeur immédiate, sans argument.
    pub fn constante(self) -> Option<f64> {
        match self {
            Fonction::Pi => Some(std::f64::consts::PI),
            Fonction::E => Some(std::f64::consts::E),
            _ => None,
        }
    }

    /// f(x). Pour une constante, x est ignoré.
    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            Fonction::Racine => x.sqrt(),
            Fonction::Carre => x.powi(2),
            Fonction::Pourcent => x / 100.0,
            Fonction::Oppose => -x,
            Fonction::Sin => x.sin(),
            Fonction::Cos => x.cos(),
            Fonction::Tan => x.tan(),
            Fonction::Log => x.log10(),
            Fonction::Ln => x.ln(),
            Fonction::Exp => x.exp(),
            Fonction::Pi => std::f64::consts::PI,
            Fonction::E => std::f64::consts::E,
        }
    }
}

/// Lecture “préfixe” d’un nombre : le plus long littéral décimal en tête
/// (signe, chiffres, fraction, exposant) ou Infinity / NaN.
///
/// "9" -> 9 ; "2+3" -> 2 ; "1.2.3" -> 1.2 ; "(2" -> NaN ; "" -> NaN
pub fn lire_prefixe(s: &str) -> f64 {
    let s = s.trim_start();
    let b = s.as_bytes();
    let mut i = 0;

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    let reste = &s[i..];
    if reste.starts_with("Infinity") {
        return if b.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let debut_chiffres = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut n_chiffres = i - debut_chiffres;

    if i < b.len() && b[i] == b'.' {
        let j = i + 1;
        let mut k = j;
        while k < b.len() && b[k].is_ascii_digit() {
            k += 1;
        }
        n_chiffres += k - j;
        if n_chiffres > 0 {
            i = k;
        }
    }

    if n_chiffres == 0 {
        return f64::NAN;
    }

    // exposant seulement s’il est complet
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut k = i + 1;
        if k < b.len() && (b[k] == b'+' || b[k] == b'-') {
            k += 1;
        }
        let debut_exp = k;
        while k < b.len() && b[k].is_ascii_digit() {
            k += 1;
        }
        if k > debut_exp {
            i = k;
        }
    }

    s[..i].parse::<f64>().unwrap_or(f64::NAN)
}
