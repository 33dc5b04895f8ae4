// src/noyau/erreurs.rs

use thiserror::Error;

/// Échecs de l’évaluateur infixe (jetons, RPN, calcul).
///
/// Tous ces cas sont récupérés par `=` : affichage "Error", expression vidée.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("Entrée vide")]
    EntreeVide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("parenthèses non fermées")]
    ParenthesesNonFermees,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseInattendue,

    #[error("expression invalide")]
    ExpressionInvalide,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("exposant trop grand (|n| > {0})")]
    ExposantTropGrand(u32),

    #[error("résultat trop grand (> {0} bits)")]
    ResultatTropGrand(u64),

    #[error("résultat non fini")]
    ResultatNonFini,
}
