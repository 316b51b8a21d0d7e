//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état du visualiseur (entrée, dernière analyse, erreur)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//! L’analyse elle-même est faite par le noyau (`analyser`).

use crate::noyau::{analyser_expression, Analyse};

#[derive(Clone, Debug)]
pub struct AppArbre {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub analyse: Option<Analyse>,
    pub erreur: String,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppArbre {
    fn default() -> Self {
        Self {
            entree: String::new(),
            analyse: None,
            erreur: String::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppArbre {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// AC : remise à zéro totale.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultats + erreur (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.analyse = None;
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// Analyse l’entrée courante via le noyau et dépose le résultat.
    ///
    /// Sur erreur on CONSERVE la dernière analyse affichée (pas d’écran vide sur une faute).
    pub fn analyser(&mut self) {
        let s = self.entree.trim();
        if s.is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }

        match analyser_expression(s) {
            Ok(a) => {
                self.erreur.clear();
                self.analyse = Some(a);
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
        self.focus_entree = true;
    }

    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.focus_entree = true;
    }
}
