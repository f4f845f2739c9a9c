// src/noyau/erreur.rs
//
// Erreurs typées du noyau.
// Une opération rend un résultat complet OU exactement une de ces erreurs :
// jamais de résultat partiel, jamais de repli approché.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    /// Formes des opérandes incompatibles avec l’opération demandée.
    #[error("dimensions incompatibles : {0}")]
    DimensionsIncompatibles(String),

    /// Déterminant / inverse demandé sur une matrice non carrée.
    #[error("matrice non carrée ({lignes}×{colonnes})")]
    NonCarree { lignes: usize, colonnes: usize },

    /// Déterminant exactement nul là où il doit être non nul.
    #[error("matrice singulière : le déterminant est 0")]
    Singuliere,

    /// Pivot nul sans échange de lignes possible (ou permis). `ligne` : 1-indexée.
    #[error("pivot nul à la ligne {ligne}")]
    PivotNul { ligne: usize },

    #[error("division par zéro")]
    DivisionParZero,

    #[error("méthode inconnue : {0:?} (adjointe ou gauss-jordan)")]
    MethodeInconnue(String),
}

pub type ResultatNoyau<T> = Result<T, ErreurNoyau>;
