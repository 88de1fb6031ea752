// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter calcule (quand l’écran a le focus)
// - Tactile : gros boutons, focus redonné après clic (focus_ecran)
//
// Note :
// - Toutes les touches passent par AppCalc::touche (écran in -> écran out)

use eframe::egui;

use super::etat::{AppCalc, Touche};

/// Pavé 5×4, lu ligne par ligne.
const PAVE: [[&str; 4]; 5] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
    ["(", ")", "C", ""],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_ecran(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                if self.reglages.demarche {
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);

                    self.ui_demarche(ui);
                }
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.ecran)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2+3)*4, -5+3, 1/3")
                .id_source("ecran_edit")
                .font(egui::TextStyle::Heading)
                .code_editor(),
        );

        // Si on a cliqué un bouton, on redonne le focus
        if self.focus_ecran {
            resp.request_focus();
            self.focus_ecran = false;
        }

        // --- Clavier : Enter calcule (seulement si l’écran est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.touche(Touche::Resultat);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for label in ligne {
                        self.bouton(ui, label);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str) {
        let Some(touche) = touche_du_label(label) else {
            ui.label("");
            return;
        };

        let resp = ui.add_sized([64.0, 44.0], egui::Button::new(label));
        if resp.clicked() {
            self.touche(touche);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Expression", "demarche_expr", &self.demarche.expression);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }
}

/// Label du pavé -> touche ("" = case vide).
fn touche_du_label(label: &str) -> Option<Touche> {
    match label {
        "" => None,
        "C" => Some(Touche::Effacer),
        "=" => Some(Touche::Resultat),
        _ => label.chars().next().map(Touche::Caractere),
    }
}
