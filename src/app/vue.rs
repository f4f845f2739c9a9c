// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Saisie multi-lignes : une ligne par rangée, ligne vide entre deux opérandes
// - Clavier : Ctrl+Enter (Cmd+Enter) évalue ; Enter reste un retour à la ligne
// - Focus redonné à la saisie après un clic (focus_entree)

use eframe::egui;

use super::etat::{AppCalc, DIGITS_MAX};
use crate::commande::{self, Operation};
use crate::noyau::MethodeInversion;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice matricielle Q-pur");
                ui.add_space(6.0);

                self.ui_operation(ui);

                ui.add_space(6.0);
                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_operation(&mut self, ui: &mut egui::Ui) {
        let mut choix = self.operation;
        ui.horizontal_wrapped(|ui| {
            for op in Operation::TOUTES {
                ui.selectable_value(&mut choix, op, op.libelle());
            }
        });
        if choix != self.operation {
            self.set_operation(choix);
        }

        if self.operation == Operation::Inverse {
            ui.horizontal(|ui| {
                ui.label("Méthode :");
                ui.radio_value(&mut self.methode, MethodeInversion::Adjointe, "Adjointe");
                ui.radio_value(
                    &mut self.methode,
                    MethodeInversion::GaussJordan,
                    "Gauss-Jordan",
                );
            });
        }

        ui.small(self.operation.aide());
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::multiline(&mut self.entree)
                .desired_width(ui.available_width())
                .desired_rows(8)
                .hint_text("Ex:\n1 2\n3 4\n\n5 6\n7 8")
                .id_salt("entree_matrices")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Ctrl+Enter : évaluer (seulement si le champ est focus)
        let evaluer = ui.input(|i| i.key_pressed(egui::Key::Enter) && i.modifiers.command);
        if resp.has_focus() && evaluer {
            self.eval_via_commande();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let eq = ui.add_sized([64.0, 30.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_commande();
            }

            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Lecture :");
            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DIGITS_MAX as u32)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("EXACT :");
        Self::champ_monospace(ui, "exact_out", &self.exact, 2);

        ui.add_space(6.0);

        ui.label("Lecture décimale :");
        if self.lecture_dispo {
            Self::champ_monospace(ui, "lecture_out", &self.lecture, 2);
        } else {
            ui.monospace("indisponible");
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                if self.demarche.is_empty() {
                    ui.monospace("aucune étape");
                    return;
                }
                for (i, etape) in self.demarche.iter().enumerate() {
                    Self::champ_monospace(ui, ("demarche", i), etape, 1);
                }
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: impl std::hash::Hash, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
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
            }
            self.focus_entree = true;
        }
    }

    /// Évalue la saisie via le dispatcher, puis dépose EXACT/lecture/démarche dans l’état UI.
    fn eval_via_commande(&mut self) {
        match commande::evaluer(self.operation, self.methode, &self.entree) {
            Ok(reponse) => {
                let exact = reponse.resultat.rendu();
                let lecture = reponse.resultat.lecture(self.digits);
                self.set_resultats(exact, lecture, reponse.demarche.etapes().to_vec());
            }
            Err(msg) => self.set_erreur(msg),
        }
        self.focus_entree = true;
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
}
