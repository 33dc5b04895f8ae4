//! Noyau — évaluation infixe (pipeline réel)
//!
//! glyphes (× ÷) -> jetons -> RPN -> valeur (exacte ou approchée) -> texte
//!
//! Contrat : soit une valeur, soit une `ErreurEval`. Jamais de panique,
//! l’appelant (touche "=") décide de l’affichage en cas d’échec.

use tracing::trace;

use super::erreurs::ErreurEval;
use super::format::format_valeur;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{evaluer_rpn, to_rpn, Valeur};

/// Remplace les glyphes d’affichage par les opérateurs de l’évaluateur.
/// `^` et les parenthèses passent tels quels.
pub fn normaliser_glyphes(expr: &str) -> String {
    expr.replace('×', "*").replace('÷', "/")
}

/// API publique : évalue une expression infixe.
pub fn eval_expression(expr_str: &str) -> Result<Valeur, ErreurEval> {
    let s = normaliser_glyphes(expr_str.trim());
    if s.is_empty() {
        return Err(ErreurEval::EntreeVide);
    }

    // 1) Jetons
    let jetons = tokenize(&s)?;
    trace!(jetons = %format_tokens(&jetons), "jetons");

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    trace!(longueur = rpn.len(), "rpn");

    // 3) Calcul
    evaluer_rpn(&rpn)
}

/// Évalue puis formate (forme affichée et enregistrée dans l’historique).
pub fn evaluer_texte(expr_str: &str) -> Result<String, ErreurEval> {
    eval_expression(expr_str).map(|v| format_valeur(&v))
}
