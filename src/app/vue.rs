// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppArbre (etat.rs) pour natif + wasm
// - Clavier : Enter analyse (quand le champ est focus)
// - Tactile : pavé (chiffres, point, opérateurs, parenthèses), focus redonné après clic

use eframe::egui;

use super::etat::AppArbre;
use crate::noyau::Analyse;

impl AppArbre {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Arbre d’expression");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if let Some(a) = &self.analyse {
                    Self::ui_resultats(ui, a);
                } else {
                    ui.monospace("aucune analyse");
                }
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression infixe :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2+3*4, (2+3)*4, 1.5+2.25")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.analyser();
        }

        ui.add_space(6.0);

        // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "CLR", "Efface résultats + erreur", Action::ClearResultats);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 30.0], egui::Button::new("Arbre"));
            if eq.clicked() {
                self.analyser();
            }
        });

        ui.add_space(8.0);
        self.ui_pave(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_arbre")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [
                    ["7", "8", "9", "/", "("],
                    ["4", "5", "6", "*", ")"],
                    ["1", "2", "3", "-", "."],
                ] {
                    for t in ligne {
                        self.bouton_insert(ui, t);
                    }
                    ui.end_row();
                }

                self.bouton_insert(ui, "0");
                ui.label("");
                ui.label("");
                self.bouton_insert(ui, "+");
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);
                ui.end_row();
            });
    }

    fn ui_resultats(ui: &mut egui::Ui, a: &Analyse) {
        Self::champ(ui, "Jetons", "res_jetons", &a.jetons);
        Self::champ(ui, "Postfixe", "res_postfixe", &a.postfixe);
        Self::champ(ui, "Parcours préfixe", "res_prefixe", &a.prefixe);
        Self::champ(ui, "Parcours infixe", "res_infixe", &a.infixe);
        Self::champ(ui, "Parcours postfixe", "res_postfixe_concat", &a.postfixe_concat);
        Self::champ(ui, "Infixe parenthésé", "res_parenthese", &a.parenthese);

        let valeur = match &a.valeur {
            Ok(v) => v.clone(),
            Err(e) => format!("indisponible ({e})"),
        };
        Self::champ(ui, "Valeur", "res_valeur", &valeur);

        ui.add_space(6.0);
        egui::CollapsingHeader::new(format!(
            "Arbre ({} nœuds, profondeur {})",
            a.nb_noeuds, a.profondeur
        ))
        .default_open(true)
        .show(ui, |ui| {
            Self::champ_monospace(ui, "res_dessin", &a.dessin, 4);
        });
    }

    fn champ(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule, cadre visuel via Frame + Label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => {
                    self.entree.pop();
                }
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, texte: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(texte));
        if resp.clicked() {
            self.entree.push_str(texte);
            self.focus_entree = true;
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
