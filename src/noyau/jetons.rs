// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::erreurs::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    LPar,
    RPar,
}

/// Tokenize une chaîne évaluable en jetons.
/// Supporte:
/// - littéraux décimaux exacts (ex: 12, 1.5, .5, 5.)
/// - opérateurs + - * / ^
/// - parenthèses ( )
///
/// Les glyphes d’affichage (× ÷) doivent être normalisés avant l’appel.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Littéral décimal : on avale tous les chiffres et points, puis on valide.
        // "1.2.3" est refusé ici (pas de découpage silencieux en 1.2 et .3).
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            // exposant : 1e+21, 1.5e-7 (forme produite par l’affichage des résultats)
            if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                let mut j = i + 1;
                if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                    j += 1;
                }
                if j < chars.len() && chars[j].is_ascii_digit() {
                    while j < chars.len() && chars[j].is_ascii_digit() {
                        j += 1;
                    }
                    i = j;
                }
            }
            let lit: String = chars[start..i].iter().collect();
            out.push(Tok::Num(parse_decimal(&lit)?));
            continue;
        }

        return Err(ErreurEval::CaractereInattendu(c));
    }

    Ok(out)
}

/// Garde-fou : |exposant| maximal d’un littéral scientifique.
const EXPOSANT_LITTERAL_MAX: u32 = 1000;

/// "12.345" -> 12345/1000, "1.5e-7" -> 15/10^8 (exact, sans flottant).
pub fn parse_decimal(lit: &str) -> Result<BigRational, ErreurEval> {
    let invalide = || ErreurEval::NombreInvalide(lit.to_string());

    let (mantisse, exposant) = match lit.split_once(['e', 'E']) {
        Some((m, e)) => {
            let e: i32 = e.parse().map_err(|_| invalide())?;
            if e.unsigned_abs() > EXPOSANT_LITTERAL_MAX {
                return Err(invalide());
            }
            (m, e)
        }
        None => (lit, 0),
    };

    let (ent, frac) = match mantisse.split_once('.') {
        Some((a, b)) => (a, b),
        None => (mantisse, ""),
    };
    if frac.contains('.') || (ent.is_empty() && frac.is_empty()) {
        return Err(invalide());
    }

    let chiffres = format!("{ent}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(invalide)?;

    let d = BigInt::from(10).pow(frac.len() as u32);
    let r = BigRational::new(n, d);

    let p = BigRational::from_integer(BigInt::from(10).pow(exposant.unsigned_abs()));
    Ok(if exposant < 0 { r / p } else { r * p })
}

/// Format utilitaire (traces) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    fn format_rat(r: &BigRational) -> String {
        let n = r.numer();
        let d = r.denom();
        if d.is_one() || n.is_zero() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(r) => format_rat(r),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
