//! src/noyau/calculatrice.rs
//!
//! Moteur de saisie de la calculatrice (sans vue).
//!
//! Rôle : transformer une suite d’actions discrètes (chiffres, opérateurs, `^`,
//! fonctions, `=`, C, ⌫, effacement d’historique) en un nouvel état.
//!
//! Contrats :
//! - `EtatCalc` est une valeur : chaque action rend un NOUVEL état, l’ancien reste intact.
//! - Affichage et expression sont dérivés d’une seule `Saisie` (pas de divergence).
//! - Trois régions : Normal, Resultat (valeur fraîchement calculée), Erreur ("Error").
//! - En Erreur, seules C et l’effacement d’historique agissent.

use tracing::debug;

use super::eval::evaluer_texte;
use super::fonctions::{lire_prefixe, Fonction};
use super::format::format_nombre;
use super::historique::{EntreeHistorique, Historique};
use super::saisie::{Operateur, Saisie};

/// Sentinelle affichée après un échec de `=`.
pub const AFFICHAGE_ERREUR: &str = "Error";

/// Plancher de l’affichage.
pub const AFFICHAGE_ZERO: &str = "0";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    Resultat,
    Erreur,
}

/// Action utilisateur (une touche = une action).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Chiffre(char),
    Operateur(Operateur),
    Puissance,
    Fonction(Fonction),
    Egal,
    Effacer,
    SupprimerDernier,
    EffacerHistorique,
}

impl Action {
    /// Classe un libellé de touche brut. `None` si la touche est inconnue.
    pub fn depuis_touche(label: &str) -> Option<Action> {
        let label = label.trim();
        match label {
            "=" => return Some(Action::Egal),
            "C" => return Some(Action::Effacer),
            "⌫" | "DEL" => return Some(Action::SupprimerDernier),
            "CLR" => return Some(Action::EffacerHistorique),
            "^" | "x^y" => return Some(Action::Puissance),
            _ => {}
        }

        if let Some(op) = Operateur::depuis_symbole(label) {
            return Some(Action::Operateur(op));
        }
        if let Some(f) = Fonction::depuis_nom(label) {
            return Some(Action::Fonction(f));
        }

        let mut it = label.chars();
        match (it.next(), it.next()) {
            (Some(c @ ('0'..='9' | '.' | '(' | ')')), None) => Some(Action::Chiffre(c)),
            _ => None,
        }
    }
}

/// État complet d’une session de calculatrice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EtatCalc {
    saisie: Saisie,
    mode: Mode,
    historique: Historique,
}

impl EtatCalc {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture (pour la vue) ------------------------ */

    /// Ligne principale : jamais vide, plancher "0", "Error" après un échec.
    pub fn display(&self) -> String {
        match self.mode {
            Mode::Erreur => AFFICHAGE_ERREUR.to_string(),
            _ if self.saisie.est_vide() => AFFICHAGE_ZERO.to_string(),
            _ => self.saisie.texte(),
        }
    }

    /// Ligne d’aperçu : peut être vide (départ, après C, après une erreur).
    pub fn expression(&self) -> String {
        match self.mode {
            Mode::Erreur => String::new(),
            _ => self.saisie.texte(),
        }
    }

    pub fn historique(&self) -> &Historique {
        &self.historique
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /* ------------------------ Réducteur ------------------------ */

    /// Applique une action et rend le nouvel état.
    pub fn appliquer(&self, action: Action) -> EtatCalc {
        debug!(?action, mode = ?self.mode, "action");

        let mut suivant = self.clone();
        match action {
            Action::EffacerHistorique => suivant.historique.vider(),
            Action::Effacer => suivant.reinitialiser_saisie(),

            // "Error" n’est pas un nombre : seul C en sort
            _ if self.mode == Mode::Erreur => {
                debug!(?action, "action ignorée (état Erreur)");
            }

            Action::Chiffre(c) => suivant.chiffre(c),
            Action::Operateur(op) => {
                suivant.saisie.ajouter_operateur(op);
                suivant.mode = Mode::Normal;
            }
            Action::Puissance => {
                if suivant.saisie.ajouter_puissance() {
                    suivant.mode = Mode::Normal;
                }
            }
            Action::Fonction(f) => suivant.fonction(f),
            Action::Egal => suivant.egal(),
            Action::SupprimerDernier => suivant.supprimer_dernier(),
        }
        suivant
    }

    /// Classe puis applique une touche brute. Touche inconnue : état inchangé.
    pub fn appliquer_touche(&self, label: &str) -> EtatCalc {
        match Action::depuis_touche(label) {
            Some(action) => self.appliquer(action),
            None => {
                debug!(label, "touche inconnue");
                self.clone()
            }
        }
    }

    /* ------------------------ Actions nommées ------------------------ */

    pub fn append_digit(&self, token: &str) -> EtatCalc {
        let mut it = token.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => self.appliquer(Action::Chiffre(c)),
            _ => self.clone(),
        }
    }

    pub fn append_operator(&self, symbole: &str) -> EtatCalc {
        match Operateur::depuis_symbole(symbole) {
            Some(op) => self.appliquer(Action::Operateur(op)),
            None => self.clone(),
        }
    }

    pub fn append_power(&self) -> EtatCalc {
        self.appliquer(Action::Puissance)
    }

    pub fn apply_function(&self, nom: &str) -> EtatCalc {
        match Fonction::depuis_nom(nom) {
            Some(f) => self.appliquer(Action::Fonction(f)),
            None => {
                debug!(nom, "fonction inconnue");
                self.clone()
            }
        }
    }

    pub fn evaluate(&self) -> EtatCalc {
        self.appliquer(Action::Egal)
    }

    pub fn clear(&self) -> EtatCalc {
        self.appliquer(Action::Effacer)
    }

    pub fn delete_last(&self) -> EtatCalc {
        self.appliquer(Action::SupprimerDernier)
    }

    pub fn clear_history(&self) -> EtatCalc {
        self.appliquer(Action::EffacerHistorique)
    }

    /* ------------------------ Transitions (sur la copie) ------------------------ */

    fn reinitialiser_saisie(&mut self) {
        self.saisie = Saisie::default();
        self.mode = Mode::Normal;
    }

    fn chiffre(&mut self, c: char) {
        // zéro de tête supprimé ; "." complète le "0"
        let remplace = self.display() == AFFICHAGE_ZERO && c != '.';
        let mut saisie = if remplace {
            Saisie::default()
        } else {
            self.saisie.clone()
        };

        if saisie.ajouter_chiffre(c) {
            self.saisie = saisie;
            self.mode = Mode::Normal;
        } else {
            debug!(?c, "caractère de saisie refusé");
        }
    }

    fn supprimer_dernier(&mut self) {
        if self.display().chars().count() == 1 {
            self.reinitialiser_saisie();
            return;
        }
        self.saisie.supprimer_dernier();
        self.mode = Mode::Normal;
    }

    fn fonction(&mut self, f: Fonction) {
        if let Some(valeur) = f.constante() {
            self.saisie = Saisie::depuis_valeur(format_nombre(valeur));
            self.mode = Mode::Resultat;
            return;
        }

        let source = {
            let e = self.expression();
            if e.is_empty() {
                self.display()
            } else {
                e
            }
        };
        let x = lire_prefixe(&source);
        let y = f.appliquer(x);

        if !y.is_finite() {
            // anomalie numérique : affichée telle quelle, pas d’état Erreur
            debug!(fonction = f.nom(), x, y, "résultat non fini");
        }

        let resultat = format_nombre(y);
        let appel = format!("{}({})", f.nom(), format_nombre(x));
        self.historique
            .ajouter(EntreeHistorique::nouvelle(&appel, &resultat));
        self.saisie = Saisie::depuis_valeur(resultat);
        self.mode = Mode::Resultat;
    }

    fn egal(&mut self) {
        let source = self.expression();
        if source.is_empty() {
            return;
        }

        match evaluer_texte(&self.saisie.texte_evaluable()) {
            Ok(resultat) => {
                debug!(%source, %resultat, "évaluation");
                self.historique
                    .ajouter(EntreeHistorique::nouvelle(&source, &resultat));
                self.saisie = Saisie::depuis_valeur(resultat);
                self.mode = Mode::Resultat;
            }
            Err(e) => {
                debug!(%source, erreur = %e, "évaluation refusée");
                self.saisie = Saisie::default();
                self.mode = Mode::Erreur;
            }
        }
    }
}
