//! Tests de propriétés (proptest) : invariants du moteur sur des suites de touches aléatoires.
//!
//! - affichage jamais vide, aligné sur l’expression hors Erreur
//! - jamais deux opérateurs consécutifs en fin d’expression
//! - historique en ajout seul (sauf CLR)
//! - Erreur absorbante (sauf C / CLR)

use proptest::prelude::*;

use super::calculatrice::{EtatCalc, Mode};

const TOUCHES: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "(", ")", "+", "-", "×", "÷", "*", "/",
    "x^y", "√", "x²", "%", "+/-", "sin", "cos", "tan", "log", "ln", "exp", "π", "e", "=", "C",
    "⌫", "CLR",
];

const OPERATEURS: [char; 6] = ['+', '-', '×', '÷', '*', '/'];

fn touche() -> impl Strategy<Value = &'static str> {
    prop::sample::select(TOUCHES)
}

fn touches() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(touche(), 0..40)
}

fn chiffre() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'])
}

fn verifier_invariants(e: &EtatCalc) -> Result<(), TestCaseError> {
    let display = e.display();
    let expression = e.expression();

    prop_assert!(!display.is_empty());

    match e.mode() {
        Mode::Erreur => {
            prop_assert_eq!(display.as_str(), "Error");
            prop_assert_eq!(expression.as_str(), "");
        }
        _ if expression.is_empty() => {
            prop_assert_eq!(display.as_str(), "0");
        }
        _ => {
            prop_assert_eq!(&display, &expression);
        }
    }

    let fin: Vec<char> = expression.chars().rev().take(2).collect();
    prop_assert!(
        !(fin.len() == 2 && fin.iter().all(|c| OPERATEURS.contains(c))),
        "deux opérateurs en fin: {:?}",
        expression
    );
    Ok(())
}

proptest! {
    #[test]
    fn chiffres_affiches_tels_quels(
        premier in prop::sample::select(vec!['1', '2', '3', '4', '5', '6', '7', '8', '9']),
        suite in prop::collection::vec(chiffre(), 0..20),
    ) {
        let mut e = EtatCalc::new().append_digit(&premier.to_string());
        let mut attendu = premier.to_string();
        for c in suite {
            e = e.append_digit(&c.to_string());
            attendu.push(c);
        }
        prop_assert_eq!(e.display(), attendu.clone());
        prop_assert_eq!(e.expression(), attendu);
    }

    #[test]
    fn invariants_sur_toute_suite(suite in touches()) {
        let mut e = EtatCalc::new();
        verifier_invariants(&e)?;
        for t in suite {
            e = e.appliquer_touche(t);
            verifier_invariants(&e)?;
        }
    }

    #[test]
    fn historique_en_ajout_seul(suite in touches()) {
        let mut e = EtatCalc::new();
        for t in suite {
            let avant: Vec<String> = e.historique().iter().map(|h| h.to_string()).collect();
            e = e.appliquer_touche(t);
            let apres: Vec<String> = e.historique().iter().map(|h| h.to_string()).collect();

            if t == "CLR" {
                prop_assert!(apres.is_empty());
            } else {
                prop_assert!(apres.len() <= avant.len() + 1);
                prop_assert_eq!(&apres[..avant.len()], &avant[..]);
            }
        }
    }

    #[test]
    fn erreur_absorbante(avant in touches(), t in touche()) {
        // on force l’état Erreur après une suite quelconque
        let mut e = EtatCalc::new();
        for x in avant {
            e = e.appliquer_touche(x);
        }
        let err = e.clear().append_digit("1").append_operator("÷").append_digit("0").evaluate();
        prop_assert_eq!(err.mode(), Mode::Erreur);

        let suivant = err.appliquer_touche(t);
        match t {
            "C" => {
                prop_assert_eq!(suivant.display(), "0");
                prop_assert_eq!(suivant.mode(), Mode::Normal);
            }
            "CLR" => {
                prop_assert!(suivant.historique().is_empty());
            }
            _ => {
                prop_assert_eq!(&suivant, &err);
            }
        }
    }

    #[test]
    fn etat_precedent_inchange(suite in touches(), t in touche()) {
        let mut e = EtatCalc::new();
        for x in suite {
            e = e.appliquer_touche(x);
        }
        let copie = e.clone();
        let _ = e.appliquer_touche(t);
        prop_assert_eq!(e, copie);
    }
}
