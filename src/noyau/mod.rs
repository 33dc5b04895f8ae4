//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - erreurs.rs      : ErreurEval (échecs de l’évaluateur)
//! - jetons.rs       : tokenisation (littéraux décimaux exacts)
//! - rpn.rs          : shunting-yard + calcul RPN exact
//! - eval.rs         : pipeline d’évaluation infixe
//! - format.rs       : texte des résultats (rationnels, flottants, anomalies)
//! - fonctions.rs    : fonctions unaires + constantes (√, sin, log, π…)
//! - saisie.rs       : suite canonique de jetons saisis (affichage = expression)
//! - historique.rs   : journal des calculs
//! - calculatrice.rs : état + réducteur d’actions

pub mod calculatrice;
pub mod erreurs;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod rpn;
pub mod saisie;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use calculatrice::{Action, EtatCalc, Mode};
