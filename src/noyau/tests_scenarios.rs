//! Tests de scénarios : suites de touches complètes, comme au clavier.
//!
//! Chaque test part d’un état neuf et vérifie affichage, expression, historique.
//! Les valeurs attendues sont celles d’une session réelle (pas de calcul dans le test).

use super::calculatrice::{EtatCalc, Mode};

fn taper(touches: &[&str]) -> EtatCalc {
    taper_depuis(&EtatCalc::new(), touches)
}

fn taper_depuis(depart: &EtatCalc, touches: &[&str]) -> EtatCalc {
    touches.iter().fold(depart.clone(), |e, t| e.appliquer_touche(t))
}

fn historique(e: &EtatCalc) -> Vec<String> {
    e.historique().iter().map(|h| h.to_string()).collect()
}

fn assert_ecran(e: &EtatCalc, display: &str, expression: &str) {
    assert_eq!(e.display(), display, "display");
    assert_eq!(e.expression(), expression, "expression");
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn chiffres_concatenes() {
    let e = taper(&["1", "2", "3", ".", "4", "5"]);
    assert_ecran(&e, "123.45", "123.45");
}

#[test]
fn operateurs_sans_doublon() {
    let e = taper(&["8", "+", "-"]);
    assert_ecran(&e, "8-", "8-");

    let e = taper(&["8", "×", "÷", "5"]);
    assert_ecran(&e, "8÷5", "8÷5");
}

#[test]
fn puissance_ignoree_apres_operateur() {
    let e = taper(&["2", "+", "x^y"]);
    assert_ecran(&e, "2+", "2+");

    let e = taper(&["2", "x^y", "x^y", "3"]);
    assert_ecran(&e, "2^3", "2^3");
}

#[test]
fn operateur_sur_zero_initial() {
    let e = taper(&["-", "5", "="]);
    assert_ecran(&e, "-5", "-5");
    assert_eq!(historique(&e), ["0-5 = -5"]);
}

/* ------------------------ Égal ------------------------ */

#[test]
fn egal_deux_plus_deux() {
    let e = taper(&["2", "+", "2", "="]);
    assert_ecran(&e, "4", "4");
    assert_eq!(e.mode(), Mode::Resultat);
    assert_eq!(historique(&e), ["2+2 = 4"]);
}

#[test]
fn egal_garde_les_glyphes_dans_l_historique() {
    let e = taper(&["6", "×", "7", "÷", "2", "="]);
    assert_ecran(&e, "21", "21");
    assert_eq!(historique(&e), ["6×7÷2 = 21"]);
}

#[test]
fn egal_precedence_et_parentheses() {
    let e = taper(&["(", "1", "+", "2", ")", "×", "3", "^", "2", "="]);
    assert_eq!(e.display(), "27");
    assert_eq!(historique(&e), ["(1+2)×3^2 = 27"]);
}

#[test]
fn egal_decimal_exact() {
    let e = taper(&["0", ".", "1", "+", "0", ".", "2", "="]);
    assert_eq!(e.display(), "0.3");
}

#[test]
fn division_par_zero_donne_error() {
    let e = taper(&["5", "/", "0", "="]);
    assert_ecran(&e, "Error", "");
    assert_eq!(e.mode(), Mode::Erreur);
    assert!(e.historique().is_empty());
}

#[test]
fn double_point_refuse_a_l_evaluation() {
    let e = taper(&["1", ".", "2", ".", "3"]);
    assert_ecran(&e, "1.2.3", "1.2.3");
    let e = e.evaluate();
    assert_ecran(&e, "Error", "");
}

#[test]
fn egal_sur_operateur_pendant() {
    let e = taper(&["9", "+", "="]);
    assert_ecran(&e, "Error", "");
}

#[test]
fn egal_sur_saisie_vide_sans_effet() {
    let e = taper(&["="]);
    assert_eq!(e, EtatCalc::new());
}

/* ------------------------ Fonctions ------------------------ */

#[test]
fn racine_de_neuf() {
    let e = taper(&["9", "√"]);
    assert_ecran(&e, "3", "3");
    assert_eq!(historique(&e), ["√(9) = 3"]);
}

#[test]
fn pi_sans_historique() {
    let e = taper(&["π"]);
    assert_ecran(&e, "3.141592653589793", "3.141592653589793");
    assert!(e.historique().is_empty());

    let e = taper(&["e"]);
    assert_eq!(e.display(), "2.718281828459045");
    assert!(e.historique().is_empty());
}

#[test]
fn fonctions_du_tableau() {
    assert_eq!(taper(&["4", "x²"]).display(), "16");
    assert_eq!(taper(&["5", "0", "%"]).display(), "0.5");
    assert_eq!(taper(&["7", "+/-"]).display(), "-7");
    assert_eq!(taper(&["0", "sin"]).display(), "0");
    assert_eq!(taper(&["0", "cos"]).display(), "1");
    assert_eq!(taper(&["1", "0", "0", "log"]).display(), "2");
    assert_eq!(taper(&["1", "ln"]).display(), "0");
    assert_eq!(taper(&["0", "exp"]).display(), "1");
}

#[test]
fn fonction_sur_zero_initial() {
    let e = taper(&["√"]);
    assert_ecran(&e, "0", "0");
    assert_eq!(historique(&e), ["√(0) = 0"]);
}

#[test]
fn fonction_lit_le_prefixe_numerique() {
    // seule la valeur en tête compte : √ de "9+7" vaut √9
    let e = taper(&["9", "+", "7", "√"]);
    assert_eq!(e.display(), "3");
    assert_eq!(historique(&e), ["√(9) = 3"]);
}

#[test]
fn anomalie_affichee_telle_quelle() {
    let e = taper(&["4", "+/-", "√"]);
    assert_ecran(&e, "NaN", "NaN");
    assert_eq!(e.mode(), Mode::Resultat);
    assert_eq!(historique(&e), ["+/-(4) = -4", "√(-4) = NaN"]);

    let e = taper(&["0", "log"]);
    assert_eq!(e.display(), "-Infinity");
    assert_eq!(historique(&e), ["log(0) = -Infinity"]);
}

#[test]
fn prefixe_illisible_donne_nan() {
    let e = taper(&["(", "2", "√"]);
    assert_eq!(e.display(), "NaN");
    assert_eq!(historique(&e), ["√(NaN) = NaN"]);
}

#[test]
fn fonction_inconnue_sans_effet() {
    let e = taper(&["9"]);
    assert_eq!(e.apply_function("cosh"), e);
}

/* ------------------------ Régions Résultat / Erreur ------------------------ */

#[test]
fn chiffre_apres_resultat_s_ajoute() {
    let e = taper(&["2", "+", "2", "=", "5"]);
    assert_ecran(&e, "45", "45");
    assert_eq!(e.mode(), Mode::Normal);
}

#[test]
fn resultat_nul_remplace() {
    let e = taper(&["2", "-", "2", "=", "5"]);
    assert_ecran(&e, "5", "5");
}

#[test]
fn enchainement_apres_resultat() {
    let e = taper(&["2", "+", "2", "=", "×", "3", "="]);
    assert_eq!(e.display(), "12");
    assert_eq!(historique(&e), ["2+2 = 4", "4×3 = 12"]);
}

#[test]
fn erreur_absorbe_les_touches() {
    let err = taper(&["1", "/", "0", "="]);
    for t in ["7", "+", "x^y", "√", "π", "=", "."] {
        assert_eq!(err.appliquer_touche(t), err, "touche {t:?}");
    }
}

#[test]
fn erreur_quittee_par_clear() {
    let e = taper(&["1", "/", "0", "=", "C", "7"]);
    assert_ecran(&e, "7", "7");
    assert_eq!(e.mode(), Mode::Normal);
}

#[test]
fn suppression_sans_effet_en_erreur() {
    let err = taper(&["5", "÷", "0", "="]);
    let e = err.delete_last();
    assert_eq!(e, err);
    assert_ecran(&e, "Error", "");
    assert_eq!(e.mode(), Mode::Erreur);

    // seul C en sort
    let e = taper_depuis(&e, &["⌫", "⌫", "C"]);
    assert_ecran(&e, "0", "");
    assert_eq!(e.mode(), Mode::Normal);
}

/* ------------------------ Grandeurs et exposants ------------------------ */

#[test]
fn exposant_fractionnaire_affiche_sans_bruit() {
    let e = taper(&["(", "1", "0", "^", "5", "0", ")", "^", "0", ".", "5", "="]);
    assert_ecran(&e, "1e+25", "1e+25");
    assert_eq!(historique(&e), ["(10^50)^0.5 = 1e+25"]);
}

#[test]
fn meme_rendu_pour_egal_et_fonction() {
    let par_egal = taper(&["1", "0", "^", "2", "2", "="]);
    let par_fonction = taper(&["1", "0", "^", "1", "1", "=", "x²"]);
    assert_eq!(par_egal.display(), "1e+22");
    assert_eq!(par_fonction.display(), "1e+22");

    let e = taper(&["1", "0", "^", "1", "0", "=", "x²", "x²"]);
    assert_eq!(e.display(), "1e+40");
}

#[test]
fn resultat_minuscule_relu_par_une_fonction() {
    let e = taper(&["1", "÷", "1", "0", "^", "4", "0", "0", "="]);
    assert_ecran(&e, "1e-400", "1e-400");

    let e = e.apply_function("√");
    assert_eq!(e.display(), "0");
    assert_eq!(historique(&e), ["1÷10^400 = 1e-400", "√(0) = 0"]);
}

/* ------------------------ Édition ------------------------ */

#[test]
fn suppression_du_dernier() {
    let e = taper(&["1", "2", "⌫"]);
    assert_ecran(&e, "1", "1");

    let e = taper(&["1", "⌫"]);
    assert_ecran(&e, "0", "");
}

#[test]
fn suppression_reste_alignee() {
    // remplacement d’opérateur puis suppression : affichage et expression restent identiques
    let e = taper(&["4", "+", "×", "⌫"]);
    assert_ecran(&e, "4", "4");
}

#[test]
fn clear_garde_l_historique() {
    let e = taper(&["2", "+", "2", "=", "C"]);
    assert_ecran(&e, "0", "");
    assert_eq!(historique(&e), ["2+2 = 4"]);
}

#[test]
fn clear_history_garde_l_ecran() {
    let e = taper(&["2", "+", "2", "=", "9", "√", "1", "+"]);
    assert_eq!(e.historique().len(), 2);

    let vide = e.clear_history();
    assert!(vide.historique().is_empty());
    assert_eq!(vide.display(), e.display());
    assert_eq!(vide.expression(), e.expression());

    // aussi en Erreur
    let err = taper(&["2", "+", "2", "=", "1", "/", "0", "="]).clear_history();
    assert!(err.historique().is_empty());
    assert_ecran(&err, "Error", "");
}

#[test]
fn actions_nommees() {
    let e = EtatCalc::new()
        .append_digit("3")
        .append_power()
        .append_digit("2")
        .append_operator("-")
        .append_digit("1")
        .evaluate();
    assert_eq!(e.display(), "8");
    assert_eq!(historique(&e), ["3^2-1 = 8"]);

    let e = e.apply_function("√").delete_last();
    assert!(e.display().starts_with("2.82842712474619"));
    assert_eq!(e.clear().display(), "0");

    // jetons invalides ignorés
    assert_eq!(EtatCalc::new().append_digit("12"), EtatCalc::new());
    assert_eq!(EtatCalc::new().append_operator("%"), EtatCalc::new());
}
