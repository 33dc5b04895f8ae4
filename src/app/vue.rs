// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Rendre l’état du noyau : ligne d’aperçu (expression), ligne principale (display)
// - Pavé scientifique, pavé secondaire, pavé principal
// - Historique : plus récent en haut, bouton d’effacement
//
// La vue ne calcule rien : chaque bouton envoie son libellé à AppCalc::appuyer.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::Mode;

/// Pavé scientifique (3 colonnes).
const TOUCHES_SCIENTIFIQUES: [&str; 9] = ["sin", "cos", "tan", "log", "ln", "exp", "π", "e", "x^y"];

/// Pavé secondaire (4 colonnes).
const TOUCHES_SECONDAIRES: [&str; 4] = ["+/-", "x²", "%", "⌫"];

/// Pavé principal (4 colonnes), ligne par ligne.
const PAVE_PRINCIPAL: [[&str; 4]; 5] = [
    ["C", "(", ")", "÷"],
    ["7", "8", "9", "×"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["√", "0", ".", "="],
];

#[derive(Clone, Copy, Debug)]
enum Genre {
    Chiffre,
    Operateur,
    Egal,
    Fonction,
}

fn genre(label: &str) -> Genre {
    match label {
        "=" => Genre::Egal,
        "+" | "-" | "×" | "÷" => Genre::Operateur,
        l if l.len() == 1 && l.chars().all(|c| c.is_ascii_digit() || c == '.') => Genre::Chiffre,
        _ => Genre::Fonction,
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_ecran(ui);

                ui.add_space(8.0);
                self.ui_grille(ui, "pave_scientifique", 3, &TOUCHES_SCIENTIFIQUES, [72.0, 34.0]);

                ui.add_space(4.0);
                self.ui_grille(ui, "pave_secondaire", 4, &TOUCHES_SECONDAIRES, [56.0, 38.0]);

                ui.add_space(8.0);
                let principal: Vec<&str> = PAVE_PRINCIPAL.iter().flatten().copied().collect();
                self.ui_grille(ui, "pave_principal", 4, &principal, [56.0, 48.0]);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let expression = self.etat.expression();
        let display = self.etat.display();
        let erreur = self.etat.mode() == Mode::Erreur;

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // aperçu : espace insécable si vide, pour garder la hauteur
                    let apercu = if expression.is_empty() { "\u{a0}" } else { expression.as_str() };
                    ui.label(egui::RichText::new(apercu).monospace().weak());

                    let mut texte = egui::RichText::new(&display).monospace().size(36.0);
                    if erreur {
                        texte = texte.color(ui.visuals().error_fg_color);
                    }
                    ui.label(texte);
                });
            });
    }

    fn ui_grille(
        &mut self,
        ui: &mut egui::Ui,
        id: &str,
        colonnes: usize,
        touches: &[&str],
        taille: [f32; 2],
    ) {
        egui::Grid::new(id)
            .num_columns(colonnes)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, label) in touches.iter().enumerate() {
                    self.bouton(ui, label, taille);
                    if (i + 1) % colonnes == 0 {
                        ui.end_row();
                    }
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, taille: [f32; 2]) {
        let visuals = ui.visuals();
        let fond = match genre(label) {
            Genre::Chiffre => visuals.widgets.inactive.weak_bg_fill,
            Genre::Operateur => visuals.selection.bg_fill.linear_multiply(0.6),
            Genre::Egal => visuals.selection.bg_fill,
            Genre::Fonction => visuals.faint_bg_color,
        };

        let resp = ui.add_sized(taille, egui::Button::new(label).fill(fond));
        if resp.clicked() {
            self.appuyer(label);
        }
    }

    /// Panneau d’historique : ordre inverse d’insertion.
    pub fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Historique");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let vide = self.etat.historique().is_empty();
                let resp = ui
                    .add_enabled(!vide, egui::Button::new("🗑"))
                    .on_hover_text("Effacer l’historique");
                if resp.clicked() {
                    self.appuyer("CLR");
                }
            });
        });

        ui.separator();

        if self.etat.historique().is_empty() {
            ui.weak("Aucun calcul");
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("historique_defilement")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for entree in self.etat.historique().iter_recent() {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.monospace(entree.description());
                    });
                }
            });
    }
}
