//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice matricielle (saisie, opération choisie,
//! méthode d’inversion, résultat, erreur, digits, démarche) et offrir des opérations
//! simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : bornes sur la lecture décimale (digits).

use crate::commande::Operation;
use crate::noyau::MethodeInversion;

/// Précision de la lecture décimale par défaut.
const DIGITS_DEFAUT: usize = 6;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const DIGITS_MAX: usize = 50;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,
    pub operation: Operation,
    pub methode: MethodeInversion,

    // --- sorties ---
    pub exact: String,       // résultat EXACT (matrice, scalaire ou solutions)
    pub lecture: String,     // lecture décimale tronquée
    pub erreur: String,      // message d’erreur (saisie ou noyau)
    pub lecture_dispo: bool, // false si rien à lire

    // --- démarche (une étape par entrée, dans l’ordre du calcul) ---
    pub demarche: Vec<String>,

    // --- paramètres ---
    pub digits: usize,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            operation: Operation::Somme,
            methode: MethodeInversion::Adjointe,
            exact: String::new(),
            lecture: String::new(),
            erreur: String::new(),
            lecture_dispo: false, // au démarrage : rien à lire
            demarche: Vec::new(),
            digits: DIGITS_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + digits par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.digits = DIGITS_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.exact.clear();
        self.lecture.clear();
        self.erreur.clear();
        self.lecture_dispo = false;
        self.demarche.clear();
        self.focus_entree = true;
    }

    /// Changer d’opération invalide le résultat affiché (il ne correspond plus).
    pub fn set_operation(&mut self, operation: Operation) {
        if self.operation != operation {
            self.operation = operation;
            self.clear_resultats();
        }
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `exact` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// - On coupe lecture + démarche (un échec ne laisse aucun résultat partiel).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.lecture.clear();
        self.lecture_dispo = false;
        self.demarche.clear();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (EXACT + lecture + démarche).
    pub fn set_resultats(&mut self, exact: impl Into<String>, lecture: String, demarche: Vec<String>) {
        self.erreur.clear();
        self.exact = exact.into();
        self.lecture_dispo = !lecture.is_empty();
        self.lecture = lecture;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : limite digits.
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.clamp(0, DIGITS_MAX);
        self.focus_entree = true;
    }
}
