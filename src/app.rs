// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (en plus des boutons) :
// - chiffres, . ( ) + - * / ^ tapés => mêmes actions que les boutons
// - Enter = "=", Backspace = "⌫", Escape = "C"

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Action;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Un seul passage par frame : on collecte puis on applique dans l’ordre.
        let actions: Vec<Action> = ctx.input(|i| {
            let mut out = Vec::new();
            for ev in &i.events {
                match ev {
                    // texte : seuls les caractères de saisie (pas "e", "C"… qui sont des boutons)
                    egui::Event::Text(t) => out.extend(
                        t.chars()
                            .filter(|c| "0123456789.()+-*/^".contains(*c))
                            .filter_map(|c| Action::depuis_touche(&c.to_string())),
                    ),
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => match key {
                        egui::Key::Enter => out.push(Action::Egal),
                        egui::Key::Backspace => out.push(Action::SupprimerDernier),
                        egui::Key::Escape => out.push(Action::Effacer),
                        _ => {}
                    },
                    _ => {}
                }
            }
            out
        });

        for action in actions {
            self.appliquer(action);
        }

        egui::SidePanel::right("historique")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                self.ui_historique(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
