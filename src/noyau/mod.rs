//! Noyau exact Q-pur : algèbre matricielle
//!
//! Organisation interne :
//! - rationnel.rs   : rationnel exact (big int), division vérifiée
//! - matrice.rs     : matrice immuable + vues (mineur, transposée, colonnes)
//! - demarche.rs    : démarche (étapes lisibles, ordonnées)
//! - format.rs      : rendu texte canonique (entier | n/d, " | " pour l’augmentée)
//! - operations.rs  : + − ×scalaire ×matrice, chaînes, opérandes mixtes
//! - determinant.rs : développement de Laplace
//! - inverse.rs     : adjointe / Gauss-Jordan
//! - reduction.rs   : machinerie d’élimination + Gauss-Jordan général
//! - cramer.rs      : règle de Cramer
//! - jetons.rs      : lecture exacte des littéraux (0.1 -> 1/10)
//! - lecture.rs     : lecture décimale tronquée (affichage)
//!
//! Aucune journalisation ici : une erreur remonte toujours, typée.

pub mod cramer;
pub mod demarche;
pub mod determinant;
pub mod erreur;
pub mod format;
pub mod inverse;
pub mod jetons;
pub mod lecture;
pub mod matrice;
pub mod operations;
pub mod rationnel;
pub mod reduction;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use cramer::resoudre_cramer;
pub use demarche::Demarche;
pub use determinant::{determinant, determinant_demarche};
pub use erreur::ErreurNoyau;
pub use inverse::{inverser, MethodeInversion};
pub use matrice::Matrice;
pub use operations::{difference, produit, somme, Operande};
pub use rationnel::Rationnel;
pub use reduction::{reduire, solutions};
