//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter l’état de la session (EtatCalc du noyau) et le remplacer à chaque touche.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par le réducteur du noyau.
//! - Une touche = un appel à `appuyer`, jamais de mutation partielle.

use crate::noyau::{Action, EtatCalc};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- moteur (valeur remplacée à chaque action) ---
    pub etat: EtatCalc,
}

impl AppCalc {
    /// Touche brute (libellé du bouton ou caractère clavier).
    pub fn appuyer(&mut self, label: &str) {
        self.etat = self.etat.appliquer_touche(label);
    }

    pub fn appliquer(&mut self, action: Action) {
        self.etat = self.etat.appliquer(action);
    }
}
