// src/noyau/format.rs
//
// Rendu texte canonique (le seul “format de transport” du noyau) :
// - rationnel : "n" si entier, sinon "n/d"
// - matrice   : une ligne par rangée, valeurs séparées par un espace
// - augmentée : bloc gauche " | " bloc droit

use std::fmt;

use super::matrice::Matrice;
use super::rationnel::Rationnel;

/* ------------------------ Rationnels ------------------------ */

impl fmt::Display for Rationnel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.numerateur();
        let d = self.denominateur();
        if self.est_entier() {
            write!(f, "{n}")
        } else {
            write!(f, "{n}/{d}")
        }
    }
}

fn format_ligne(ligne: &[Rationnel]) -> String {
    ligne
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/* ------------------------ Matrices ------------------------ */

/// Grille brute -> texte (utilisé aussi pour les grilles de travail).
pub fn format_grille(grille: &[Vec<Rationnel>]) -> String {
    grille
        .iter()
        .map(|l| format_ligne(l))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Grille augmentée : colonnes [0, coupure) | [coupure, fin).
pub fn format_grille_augmentee(grille: &[Vec<Rationnel>], coupure: usize) -> String {
    grille
        .iter()
        .map(|l| {
            let c = coupure.min(l.len());
            format!("{} | {}", format_ligne(&l[..c]), format_ligne(&l[c..]))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl Matrice {
    /// Forme canonique multi-lignes.
    pub fn rendu(&self) -> String {
        format_grille(self.valeurs())
    }

    pub fn rendu_augmente(&self, coupure: usize) -> String {
        format_grille_augmentee(self.valeurs(), coupure)
    }
}

impl fmt::Display for Matrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendu())
    }
}

/// x_1 = …, x_2 = … (une ligne par inconnue).
pub fn format_solutions(solutions: &[Rationnel]) -> String {
    solutions
        .iter()
        .enumerate()
        .map(|(i, x)| format!("x_{} = {x}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
