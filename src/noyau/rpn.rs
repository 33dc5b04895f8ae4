// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur exacte
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis calculer la RPN sur des rationnels exacts
//
// Règles:
// - Précédences : + - (1) < * / (2) < moins unaire (3) < ^ (4)
// - ^ associatif à droite : 2^3^2 = 2^9
// - Moins unaire : si '-' arrive quand on n’attend PAS une valeur => Neg (préfixe)
//   "-2^2" = -(2^2), "2^-1" = 2^(-1), "2*-3" = 2*(-3)
// - Plus unaire : ignoré
// - Exposant non entier : calcul en f64, le résultat reste approché jusqu’au bout

use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};

use super::erreurs::ErreurEval;
use super::jetons::Tok;

/// Garde-fou : |n| maximal pour un exposant entier exact (anti-gel).
pub const EXPOSANT_MAX: u32 = 1000;

/// Garde-fou : taille maximale (en bits, numérateur + dénominateur) d’une puissance exacte.
pub const BITS_MAX: u64 = 200_000;

/// Jeton de sortie RPN : les jetons binaires + la négation unaire.
#[derive(Clone, Debug, PartialEq)]
pub enum Postfixe {
    Tok(Tok),
    Neg,
}

/// Élément de pile d’opérateurs.
#[derive(Clone, Debug, PartialEq)]
enum PileOp {
    Binaire(Tok),
    Neg,
    LPar,
}

fn precedence(op: &PileOp) -> i32 {
    match op {
        PileOp::Binaire(Tok::Plus | Tok::Minus) => 1,
        PileOp::Binaire(Tok::Star | Tok::Slash) => 2,
        PileOp::Neg => 3,
        PileOp::Binaire(Tok::Caret) => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret)
}

fn vers_sortie(op: PileOp) -> Postfixe {
    match op {
        PileOp::Binaire(t) => Postfixe::Tok(t),
        PileOp::Neg => Postfixe::Neg,
        // jamais déposé en sortie : filtré par les appelants
        PileOp::LPar => Postfixe::Tok(Tok::LPar),
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [2, 3, 4, *, +]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Postfixe>, ErreurEval> {
    let mut out: Vec<Postfixe> = Vec::new();
    let mut ops: Vec<PileOp> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter les signes unaires.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    // "2 3" : deux valeurs sans opérateur
                    return Err(ErreurEval::ExpressionInvalide);
                }
                out.push(Postfixe::Tok(tok));
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    // pas de multiplication implicite : "2(3)" refusé
                    return Err(ErreurEval::ExpressionInvalide);
                }
                ops.push(PileOp::LPar);
                prev_was_value = false;
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(ErreurEval::ExpressionInvalide);
                }
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(PileOp::LPar) => break,
                        Some(op) => out.push(vers_sortie(op)),
                        None => return Err(ErreurEval::ParentheseInattendue),
                    }
                }
                prev_was_value = true;
            }

            Tok::Minus | Tok::Plus if !prev_was_value => {
                // signe unaire : préfixe, ne dépile rien
                if matches!(tok, Tok::Minus) {
                    ops.push(PileOp::Neg);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                if !prev_was_value {
                    return Err(ErreurEval::ExpressionInvalide);
                }

                let p_tok = precedence(&PileOp::Binaire(tok.clone()));
                let droite = is_right_associative(&tok);

                // dépile tant que la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, PileOp::LPar) {
                        break;
                    }
                    let p_top = precedence(top);
                    let doit_pop = if droite { p_top > p_tok } else { p_top >= p_tok };
                    if !doit_pop {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(vers_sortie(op));
                    }
                }

                ops.push(PileOp::Binaire(tok));
                prev_was_value = false;
            }
        }
    }

    // expression terminée par un opérateur : "2+"
    if !prev_was_value {
        return Err(ErreurEval::ExpressionInvalide);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, PileOp::LPar) {
            return Err(ErreurEval::ParenthesesNonFermees);
        }
        out.push(vers_sortie(op));
    }

    Ok(out)
}

/// Valeur calculée : exacte tant que possible, approchée dès qu’un flottant intervient.
#[derive(Clone, Debug, PartialEq)]
pub enum Valeur {
    Exacte(BigRational),
    Approchee(f64),
}

impl Valeur {
    fn en_f64(&self) -> Result<f64, ErreurEval> {
        match self {
            Valeur::Exacte(r) => r.to_f64().ok_or(ErreurEval::ResultatNonFini),
            Valeur::Approchee(x) => Ok(*x),
        }
    }

    fn est_nulle(&self) -> bool {
        match self {
            Valeur::Exacte(r) => r.is_zero(),
            Valeur::Approchee(x) => *x == 0.0,
        }
    }
}

fn approchee(x: f64) -> Result<Valeur, ErreurEval> {
    if x.is_finite() {
        Ok(Valeur::Approchee(x))
    } else {
        Err(ErreurEval::ResultatNonFini)
    }
}

/// Calcule une RPN : rationnels exacts, bascule en f64 au premier opérande approché.
pub fn evaluer_rpn(rpn: &[Postfixe]) -> Result<Valeur, ErreurEval> {
    let mut st: Vec<Valeur> = Vec::new();

    for p in rpn {
        match p {
            Postfixe::Tok(Tok::Num(r)) => st.push(Valeur::Exacte(r.clone())),

            Postfixe::Neg => {
                let x = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                st.push(match x {
                    Valeur::Exacte(r) => Valeur::Exacte(-r),
                    Valeur::Approchee(f) => Valeur::Approchee(-f),
                });
            }

            Postfixe::Tok(op) => {
                let b = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                let a = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;

                if matches!(op, Tok::Slash) && b.est_nulle() {
                    return Err(ErreurEval::DivisionParZero);
                }

                let v = match (op, a, b) {
                    (Tok::Caret, a, b) => puissance(a, b)?,
                    (Tok::Plus, Valeur::Exacte(a), Valeur::Exacte(b)) => Valeur::Exacte(a + b),
                    (Tok::Minus, Valeur::Exacte(a), Valeur::Exacte(b)) => Valeur::Exacte(a - b),
                    (Tok::Star, Valeur::Exacte(a), Valeur::Exacte(b)) => Valeur::Exacte(a * b),
                    (Tok::Slash, Valeur::Exacte(a), Valeur::Exacte(b)) => Valeur::Exacte(a / b),
                    (op, a, b) => {
                        let (x, y) = (a.en_f64()?, b.en_f64()?);
                        match op {
                            Tok::Plus => approchee(x + y)?,
                            Tok::Minus => approchee(x - y)?,
                            Tok::Star => approchee(x * y)?,
                            Tok::Slash => approchee(x / y)?,
                            _ => return Err(ErreurEval::ExpressionInvalide),
                        }
                    }
                };
                st.push(v);
            }
        }
    }

    if st.len() != 1 {
        return Err(ErreurEval::ExpressionInvalide);
    }
    st.pop().ok_or(ErreurEval::ExpressionInvalide)
}

/// a^b : exact si a exact et b entier (borné), sinon en f64 (résultat approché).
fn puissance(base: Valeur, exp: Valeur) -> Result<Valeur, ErreurEval> {
    if let (Valeur::Exacte(base), Valeur::Exacte(exp)) = (&base, &exp) {
        if exp.denom().is_one() {
            let n = exp
                .numer()
                .to_i64()
                .filter(|n| n.unsigned_abs() <= u64::from(EXPOSANT_MAX))
                .ok_or(ErreurEval::ExposantTropGrand(EXPOSANT_MAX))?;

            if n < 0 && base.is_zero() {
                return Err(ErreurEval::DivisionParZero);
            }
            let taille =
                (base.numer().bits() + base.denom().bits()).saturating_mul(n.unsigned_abs());
            if taille > BITS_MAX {
                return Err(ErreurEval::ResultatTropGrand(BITS_MAX));
            }
            return Ok(Valeur::Exacte(rational_pow_int(base.clone(), n)));
        }
    }

    approchee(base.en_f64()?.powf(exp.en_f64()?))
}

fn rational_pow_int(base: BigRational, exp: i64) -> BigRational {
    if exp < 0 {
        return rational_pow_int(base, -exp).recip();
    }

    let mut e = exp as u64;
    let mut acc = BigRational::one();
    let mut b = base;

    while e > 0 {
        if (e & 1) == 1 {
            acc *= b.clone();
        }
        e >>= 1;
        if e > 0 {
            b *= b.clone();
        }
    }
    acc
}
